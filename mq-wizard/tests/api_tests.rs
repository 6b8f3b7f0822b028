//! Integration tests for mq-wizard API endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use mq_common::WizardConfig;
use mq_taxonomy::catalog::{ContentWarning, Severity};
use mq_taxonomy::Taxonomy;
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Test helper: router over default configuration
fn create_test_app() -> axum::Router {
    mq_wizard::build_router(mq_wizard::AppState::new(WizardConfig::default()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
}

async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "mq-wizard");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_taxonomies() {
    let (status, json) = get("/api/taxonomies").await;

    assert_eq!(status, StatusCode::OK);
    let kinds = json.as_array().unwrap();
    assert_eq!(kinds.len(), 12);
    assert_eq!(kinds[0]["kind"], "genres");
    assert_eq!(kinds[0]["name"], "genre");
    let slugs: Vec<&str> = kinds.iter().map(|k| k["kind"].as_str().unwrap()).collect();
    assert!(slugs.contains(&"plots"));
    assert!(slugs.contains(&"audiences"));
    assert!(slugs.contains(&"book-lengths"));
}

#[tokio::test]
async fn test_list_values_of_one_taxonomy() {
    let (status, json) = get("/api/taxonomies/content-warnings").await;

    assert_eq!(status, StatusCode::OK);
    let values = json.as_array().unwrap();
    assert_eq!(values.len(), ContentWarning::ALL.len());
    assert_eq!(values[0]["value"], "mild_violence");
}

#[tokio::test]
async fn test_unknown_taxonomy_kind_is_not_found() {
    let (status, json) = get("/api/taxonomies/spells").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_resolve_alias() {
    let (status, json) = get("/api/taxonomies/genres/resolve?value=sci-fi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["normalized"], "sci_fi");
    assert_eq!(json["matched_by"], "alias");
    assert_eq!(json["value"]["value"], "science_fiction");
}

#[tokio::test]
async fn test_resolve_plot_and_audience() {
    let (status, json) = get("/api/taxonomies/plots/resolve?value=quest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "plots");
    assert_eq!(json["value"]["value"], "the_quest");
    assert_eq!(json["value"]["complexity_level"], "moderate");

    let (status, json) = get("/api/taxonomies/audiences/resolve?value=ya").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"]["value"], "young_adult");

    let (status, json) = get("/api/taxonomies/book-lengths/resolve?value=novel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"]["target_words"], 75_000);
}

#[tokio::test]
async fn test_resolve_without_value_is_bad_request() {
    let (status, json) = get("/api/taxonomies/genres/resolve").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_resolve_unknown_value_lists_sample() {
    let (status, json) = get("/api/taxonomies/genres/resolve?value=totally_unknown_xyz").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "UNKNOWN_VALUE");
    assert!(!json["error"]["valid_sample"].as_array().unwrap().is_empty());
    assert!(json["error"].get("suggestion").is_none());
}

#[tokio::test]
async fn test_resolve_unknown_value_suggests_close_key() {
    let (status, json) = get("/api/taxonomies/genres/resolve?value=romanse").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["suggestion"], "romance");
}

#[tokio::test]
async fn test_resolve_blank_input_is_bad_request() {
    let (status, json) = get("/api/taxonomies/genres/resolve?value=%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_valid_pair() {
    let (status, json) = post("/api/pairs", json!({"genre": "romance", "subgenre": "dark romance"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["genre"], "romance");
    assert_eq!(json["subgenre"], "dark_romance");
    assert_eq!(json["display_name"], "Romance - Dark Romance");
}

#[tokio::test]
async fn test_create_invalid_pair() {
    let (status, json) = post("/api/pairs", json!({"genre": "romance", "subgenre": "space opera"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "INVALID_COMBINATION");
}

#[tokio::test]
async fn test_subgenres_for_genre() {
    let (status, json) = get("/api/genres/romance/subgenres").await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["value"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"dark_romance"));
    assert!(!keys.contains(&"space_opera"));
}

#[tokio::test]
async fn test_search_pairs_by_genre() {
    let (status, json) = get("/api/pairs?genre=romance").await;

    assert_eq!(status, StatusCode::OK);
    let pairs = json.as_array().unwrap();
    assert!(!pairs.is_empty());
    assert!(pairs.iter().all(|pair| pair["genre"] == "romance"));
}

#[tokio::test]
async fn test_trending_and_statistics() {
    let (status, json) = get("/api/pairs/trending").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json.as_array().unwrap().is_empty());

    let (status, json) = get("/api/pairs/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["genre_count"].as_u64().unwrap() > 0);
    assert!(json["combination_count"].as_u64().unwrap() >= json["subgenre_count"].as_u64().unwrap());
}

#[tokio::test]
async fn test_generate_profile_respects_intensity_and_audience() {
    let (status, json) = post(
        "/api/content-warnings/profile",
        json!({"genre": "horror", "target_audience": "adult", "content_intensity": "moderate"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let warnings = json["warnings"].as_array().unwrap();
    assert!(!warnings.is_empty());
    for key in warnings {
        let warning = ContentWarning::from_key(key.as_str().unwrap()).unwrap();
        assert!([Severity::Mild, Severity::Moderate, Severity::Severe].contains(&warning.severity_level()));
        assert!(warning.age_minimum() <= 18);
    }
    assert!(json["summary_text"].as_str().unwrap().contains("Recommended for ages"));
}

#[tokio::test]
async fn test_generate_profile_rejects_unknown_audience() {
    let (status, json) = post(
        "/api/content-warnings/profile",
        json!({"genre": "horror", "target_audience": "xyz123"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "UNKNOWN_VALUE");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, json) = post_raw("/api/content-warnings/profile", "{\"genre\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"]["message"].as_str().unwrap().starts_with("Invalid request: "));

    // well-formed JSON missing a required field
    let (status, json) = post("/api/pairs", json!({"genre": "romance"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_text() {
    let (status, json) = post(
        "/api/content-warnings/analyze",
        json!({"text": "A ghost haunted the hospital."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = json["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["value"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["horror_elements", "medical_content"]);
}

#[tokio::test]
async fn test_generate_research_plan() {
    let (status, json) = post(
        "/api/research/plan",
        json!({"book_title": "The Crystal Prophecy", "genre": "fantasy"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["requirements"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_estimated_time"], 210);
    assert_eq!(json["priority_breakdown"]["high"], 1);
}

#[tokio::test]
async fn test_research_plan_rejects_unknown_complexity() {
    let (status, json) = post(
        "/api/research/plan",
        json!({"book_title": "T", "genre": "fantasy", "complexity_preference": "brutal"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_recommend_structures() {
    let (status, json) = post(
        "/api/structures/recommend",
        json!({"genre": "mystery", "complexity_preference": "moderate"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recommendations = json["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    let scores: Vec<u64> = recommendations
        .iter()
        .map(|r| r["compatibility_score"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_recommend_lengths() {
    let (status, json) = post(
        "/api/lengths/recommend",
        json!({"genre": "fantasy", "target_audience": "young_adult", "publishing_goal": "traditional"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recommendations = json["recommendations"].as_array().unwrap();
    assert_eq!(recommendations[0]["length"]["value"], "standard_novel");
    assert_eq!(recommendations[0]["compatibility_score"], 70);

    let (status, json) = post("/api/lengths/recommend", json!({"publishing_goal": "carrier pigeon"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}
