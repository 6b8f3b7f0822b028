//! Ranking manuscript lengths against genre, readership and publishing route

use crate::catalog::{AudienceType, BookLength, Difficulty, PublishingViability};
use crate::engine::{normalize, taxonomy, title_case, MatchStep, Resolver, Taxonomy};
use crate::error::{Result, TaxonomyError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

taxonomy! {
    /// Where the finished book is headed
    pub enum PublishingGoal {
        Traditional => "traditional",
        SelfPublished => "self",
        Web => "web",
    }
}

// Keyword order is the precedence: "traditional or self" reads as traditional
static PUBLISHING_GOAL_RESOLVER: Resolver<PublishingGoal> = Resolver {
    steps: &[MatchStep::Exact, MatchStep::AliasKeyword],
    aliases: &[
        ("traditional", PublishingGoal::Traditional),
        ("self", PublishingGoal::SelfPublished),
        ("indie", PublishingGoal::SelfPublished),
        ("web", PublishingGoal::Web),
        ("online", PublishingGoal::Web),
    ],
    compounds: &[],
    ignore_suffix: None,
};

impl Taxonomy for PublishingGoal {
    const KIND: &'static str = "publishing goal";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        match self {
            PublishingGoal::SelfPublished => "Self-Published".to_string(),
            _ => title_case(self.as_str()),
        }
    }

    fn description(self) -> String {
        format!("{} publishing", self.display_name())
    }

    fn resolver() -> &'static Resolver<Self> {
        &PUBLISHING_GOAL_RESOLVER
    }
}

/// What the author knows about the book so far
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LengthQuery {
    #[serde(default)]
    pub genre: Option<String>,
    /// Free text resolved as an audience type
    #[serde(default)]
    pub target_audience: Option<String>,
    /// Free text such as "traditional", "self-publishing" or "online"
    #[serde(default)]
    pub publishing_goal: Option<String>,
    #[serde(default = "default_true")]
    pub ai_generation: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
pub struct LengthRecommendation {
    pub length: BookLength,
    pub compatibility_score: u32,
    pub reasons: Vec<String>,
}

impl LengthRecommendation {
    pub fn to_dict(&self) -> Value {
        json!({
            "length": self.length.to_dict(),
            "compatibility_score": self.compatibility_score,
            "reasons": self.reasons,
        })
    }
}

pub struct LengthRecommender;

impl LengthRecommender {
    /// Every length scoring above zero, best first
    ///
    /// Weights: genre 30 (+10 bonus), audience 25, publishing goal 25,
    /// AI difficulty 20. Ties keep definition order.
    pub fn recommend(query: &LengthQuery) -> Result<Vec<LengthRecommendation>> {
        let audience = query
            .target_audience
            .as_deref()
            .map(parse::<AudienceType>)
            .transpose()?;
        let goal = query
            .publishing_goal
            .as_deref()
            .map(parse::<PublishingGoal>)
            .transpose()?;

        let mut recommendations: Vec<LengthRecommendation> = BookLength::ALL
            .iter()
            .map(|length| score(*length, query.genre.as_deref(), audience, goal, query.ai_generation))
            .filter(|recommendation| recommendation.compatibility_score > 0)
            .collect();
        recommendations.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        debug!(
            genre = ?query.genre,
            audience = audience.map(|a| a.key()),
            goal = goal.map(|g| g.key()),
            candidates = recommendations.len(),
            top = recommendations.first().map(|r| r.length.key()),
            "Ranked book lengths"
        );
        Ok(recommendations)
    }
}

fn score(
    length: BookLength,
    genre: Option<&str>,
    audience: Option<AudienceType>,
    goal: Option<PublishingGoal>,
    ai_generation: bool,
) -> LengthRecommendation {
    let mut points = 0;
    let mut reasons = Vec::new();

    if let Some(label) = genre {
        let genre = normalize(label);
        if length.is_appropriate_for_genre(&genre) {
            points += 30;
            reasons.push(format!("Good fit for {label}"));
        }
        let roomy = matches!(length, BookLength::StandardNovel | BookLength::LongNovel | BookLength::EpicNovel);
        if (genre.contains("fantasy") || genre.contains("science_fiction")) && roomy {
            points += 10;
            reasons.push("Allows for world-building".to_string());
        }
        if genre.contains("romance") && matches!(length, BookLength::ShortNovel | BookLength::StandardNovel) {
            points += 10;
            reasons.push("Perfect for romance pacing".to_string());
        }
    }

    match audience {
        Some(AudienceType::Children) if BookLength::children().contains(&length) => {
            points += 25;
            reasons.push("Designed for children".to_string());
        }
        Some(AudienceType::YoungAdult) if length == BookLength::YoungAdult => {
            points += 25;
            reasons.push("Perfect for YA audience".to_string());
        }
        Some(AudienceType::NewAdult | AudienceType::Adult | AudienceType::MatureAdult | AudienceType::Adults)
            if matches!(length.target_age_range(), None | Some("Adult")) =>
        {
            points += 25;
            reasons.push("Suitable for adult readers".to_string());
        }
        _ => {}
    }

    match goal {
        Some(PublishingGoal::Traditional) => match length.publishing_viability() {
            PublishingViability::High => {
                points += 25;
                reasons.push("High traditional publishing viability".to_string());
            }
            PublishingViability::Moderate => {
                points += 15;
                reasons.push("Moderate traditional publishing viability".to_string());
            }
            _ => {}
        },
        Some(PublishingGoal::SelfPublished) => {
            points += 20;
            reasons.push("Flexible for self-publishing".to_string());
        }
        Some(PublishingGoal::Web) if length.ai_generation_difficulty() <= Difficulty::Medium => {
            points += 25;
            reasons.push("Good for web/online publishing".to_string());
        }
        _ => {}
    }

    if ai_generation {
        let difficulty = length.ai_generation_difficulty();
        points += match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Medium => 15,
            Difficulty::Hard => 10,
            Difficulty::VeryHard => 5,
        };
        reasons.push(format!("AI difficulty: {}", difficulty.key()));
    }

    LengthRecommendation {
        length,
        compatibility_score: points,
        reasons,
    }
}

fn parse<T: Taxonomy>(text: &str) -> Result<T> {
    T::resolve(text).map_err(|_| TaxonomyError::InvalidInput {
        kind: T::KIND,
        input: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(genre: &str) -> LengthQuery {
        LengthQuery {
            genre: Some(genre.to_string()),
            ai_generation: true,
            ..LengthQuery::default()
        }
    }

    fn find(recommendations: &[LengthRecommendation], length: BookLength) -> &LengthRecommendation {
        recommendations.iter().find(|r| r.length == length).unwrap()
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let recommendations = LengthRecommender::recommend(&LengthQuery::default()).unwrap();
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_ai_generation_scores_every_length() {
        let recommendations = LengthRecommender::recommend(&LengthQuery {
            ai_generation: true,
            ..LengthQuery::default()
        })
        .unwrap();
        assert_eq!(recommendations.len(), BookLength::ALL.len());
        // easy lengths first, in definition order
        assert_eq!(recommendations[0].length, BookLength::FlashFiction);
        assert!(recommendations
            .windows(2)
            .all(|pair| pair[0].compatibility_score >= pair[1].compatibility_score));
    }

    #[test]
    fn test_fantasy_young_adult_traditional() {
        let mut query = query("fantasy");
        query.target_audience = Some("young_adult".to_string());
        query.publishing_goal = Some("traditional".to_string());
        let recommendations = LengthRecommender::recommend(&query).unwrap();

        let standard = find(&recommendations, BookLength::StandardNovel);
        assert_eq!(standard.compatibility_score, 30 + 10 + 25 + 5);
        assert_eq!(
            standard.reasons,
            vec![
                "Good fit for fantasy".to_string(),
                "Allows for world-building".to_string(),
                "High traditional publishing viability".to_string(),
                "AI difficulty: very_hard".to_string(),
            ]
        );
        assert_eq!(recommendations[0].length, BookLength::StandardNovel);

        let young_adult = find(&recommendations, BookLength::YoungAdult);
        assert_eq!(young_adult.compatibility_score, 25 + 25 + 10);
    }

    #[test]
    fn test_romance_pacing_bonus() {
        let mut query = query("Contemporary Romance");
        query.ai_generation = false;
        let recommendations = LengthRecommender::recommend(&query).unwrap();
        let lengths: Vec<BookLength> = recommendations.iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![BookLength::ShortNovel, BookLength::StandardNovel]);
        assert!(recommendations.iter().all(|r| r.compatibility_score == 40));
    }

    #[test]
    fn test_audience_resolves_through_catalog() {
        let query = LengthQuery {
            target_audience: Some("kids".to_string()),
            ai_generation: false,
            ..LengthQuery::default()
        };
        let recommendations = LengthRecommender::recommend(&query).unwrap();
        assert_eq!(recommendations.len(), BookLength::children().len());

        let query = LengthQuery {
            target_audience: Some("Adult".to_string()),
            ai_generation: false,
            ..LengthQuery::default()
        };
        let adult = LengthRecommender::recommend(&query).unwrap();
        assert!(adult.iter().all(|r| r.reasons == vec!["Suitable for adult readers".to_string()]));
        assert!(!adult.iter().any(|r| r.length == BookLength::PictureBook));
        assert!(adult.iter().any(|r| r.length == BookLength::Essay));
    }

    #[test]
    fn test_publishing_goals() {
        assert_eq!(PublishingGoal::resolve("self-publishing").unwrap(), PublishingGoal::SelfPublished);
        assert_eq!(PublishingGoal::resolve("Online serial").unwrap(), PublishingGoal::Web);

        let query = LengthQuery {
            publishing_goal: Some("web".to_string()),
            ai_generation: false,
            ..LengthQuery::default()
        };
        let web = LengthRecommender::recommend(&query).unwrap();
        assert_eq!(web.len(), BookLength::ai_friendly().len());
    }

    #[test]
    fn test_unknown_inputs_are_invalid() {
        let query = LengthQuery {
            target_audience: Some("xyz123".to_string()),
            ..LengthQuery::default()
        };
        assert!(matches!(
            LengthRecommender::recommend(&query).unwrap_err(),
            TaxonomyError::InvalidInput { kind: "audience type", .. }
        ));

        let query = LengthQuery {
            publishing_goal: Some("carrier pigeon".to_string()),
            ..LengthQuery::default()
        };
        assert!(matches!(
            LengthRecommender::recommend(&query).unwrap_err(),
            TaxonomyError::InvalidInput { kind: "publishing goal", .. }
        ));
    }
}
