//! Content warning profiles and the generator that assembles them

use crate::catalog::{AudienceType, ContentWarning, Severity, WarningCategory};
use crate::engine::{normalize, Taxonomy};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The set of warnings attached to one book, plus reader-facing overrides
///
/// Severity, minimum age, grouping and summary are recomputed from the
/// current members on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentWarningProfile {
    pub warnings: BTreeSet<ContentWarning>,
    /// Replaces the computed overall severity
    pub severity_override: Option<Severity>,
    pub custom_notes: String,
    /// Replaces the computed minimum age label unless empty
    pub age_rating: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Default for ContentWarningProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentWarningProfile {
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    /// Empty profile with a fixed creation time
    pub fn created_at(created_at: DateTime<Utc>) -> Self {
        Self {
            warnings: BTreeSet::new(),
            severity_override: None,
            custom_notes: String::new(),
            age_rating: None,
            created_at,
        }
    }

    pub fn add_warning(&mut self, warning: ContentWarning) {
        self.warnings.insert(warning);
    }

    pub fn remove_warning(&mut self, warning: ContentWarning) {
        self.warnings.remove(&warning);
    }

    pub fn has_warning(&self, warning: ContentWarning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Override, else the most severe member; `None` for an empty profile
    pub fn overall_severity(&self) -> Option<Severity> {
        self.severity_override
            .or_else(|| self.warnings.iter().map(|w| w.severity_level()).max())
    }

    /// Override, else `"<oldest minimum>+"`; `"All Ages"` for an empty profile
    pub fn minimum_age(&self) -> String {
        if let Some(rating) = self.age_rating.as_deref().filter(|rating| !rating.is_empty()) {
            return rating.to_string();
        }
        match self.warnings.iter().map(|w| w.age_minimum()).max() {
            Some(age) => format!("{age}+"),
            None => "All Ages".to_string(),
        }
    }

    /// Members grouped by category, each group sorted by display name
    pub fn warnings_by_category(&self) -> BTreeMap<WarningCategory, Vec<ContentWarning>> {
        let mut groups: BTreeMap<WarningCategory, Vec<ContentWarning>> = BTreeMap::new();
        for warning in &self.warnings {
            groups.entry(warning.category()).or_default().push(*warning);
        }
        for members in groups.values_mut() {
            members.sort_by_cached_key(|w| w.display_name());
        }
        groups
    }

    /// One paragraph for the book's front matter
    pub fn summary_text(&self) -> String {
        if self.warnings.is_empty() {
            return "No content warnings.".to_string();
        }

        let parts: Vec<String> = self
            .warnings_by_category()
            .into_iter()
            .map(|(category, members)| {
                let names: Vec<String> = members.iter().map(|w| w.display_name()).collect();
                format!("{}: {}", category.display_name(), join_names(&names))
            })
            .collect();

        let mut summary = format!(
            "{}. Recommended for ages {}. Overall severity: {}.",
            parts.join("; "),
            self.minimum_age(),
            severity_label(self.overall_severity()),
        );
        if !self.custom_notes.is_empty() {
            summary.push_str(" Note: ");
            summary.push_str(&self.custom_notes);
        }
        summary
    }

    /// Plain JSON view including the derived summary fields
    pub fn to_dict(&self) -> Value {
        let by_category: BTreeMap<&str, Vec<&str>> = self
            .warnings_by_category()
            .into_iter()
            .map(|(category, members)| (category.key(), members.iter().map(|w| w.key()).collect()))
            .collect();

        json!({
            "warnings": self.warnings.iter().map(|w| w.key()).collect::<Vec<_>>(),
            "severity_override": self.severity_override,
            "custom_notes": self.custom_notes,
            "age_rating": self.age_rating,
            "created_at": self.created_at,
            "overall_severity": severity_label(self.overall_severity()),
            "minimum_age": self.minimum_age(),
            "warnings_by_category": by_category,
            "summary_text": self.summary_text(),
        })
    }

    /// Rebuild from [`to_dict`](Self::to_dict) output
    ///
    /// Derived fields are ignored. An unknown warning or severity key fails
    /// with `Malformed`; a missing `created_at` means now.
    pub fn from_dict(data: &Value) -> Result<Self> {
        let record = ProfileRecord::deserialize(data)?;
        Ok(Self {
            warnings: record.warnings.into_iter().collect(),
            severity_override: record.severity_override,
            custom_notes: record.custom_notes,
            age_rating: record.age_rating,
            created_at: record.created_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_dict())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(json)?;
        Self::from_dict(&data)
    }
}

#[derive(Deserialize)]
struct ProfileRecord {
    #[serde(default)]
    warnings: Vec<ContentWarning>,
    #[serde(default)]
    severity_override: Option<Severity>,
    #[serde(default)]
    custom_notes: String,
    #[serde(default)]
    age_rating: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

fn severity_label(severity: Option<Severity>) -> &'static str {
    severity.map(|s| s.key()).unwrap_or("none")
}

/// "A", "A and B", "A, B, and C"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Parameters for [`ContentWarningGenerator::generate_profile`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileRequest {
    pub genre: String,
    /// Free text resolved as an [`AudienceType`]
    #[serde(default = "default_audience")]
    pub target_audience: String,
    /// mild, moderate, intense or extreme
    #[serde(default = "default_intensity")]
    pub content_intensity: String,
    #[serde(default = "default_true")]
    pub include_sensitive_topics: bool,
}

impl ProfileRequest {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            target_audience: default_audience(),
            content_intensity: default_intensity(),
            include_sensitive_topics: true,
        }
    }
}

fn default_audience() -> String {
    "adult".to_string()
}

fn default_intensity() -> String {
    "moderate".to_string()
}

fn default_true() -> bool {
    true
}

/// Removed when a request excludes sensitive topics
const SENSITIVE_WARNINGS: &[ContentWarning] = &[
    ContentWarning::ChildAbuse,
    ContentWarning::SexualAssault,
    ContentWarning::Suicide,
    ContentWarning::SelfHarm,
    ContentWarning::UnderageSexualContent,
    ContentWarning::Torture,
    ContentWarning::Genocide,
    ContentWarning::HateSpeech,
];

const TEXT_KEYWORDS: &[(ContentWarning, &[&str])] = &[
    (ContentWarning::Violence, &["fight", "punch", "hit", "attack", "violence", "violent"]),
    (ContentWarning::Death, &["death", "died", "dead", "kill", "murder", "suicide"]),
    (ContentWarning::StrongLanguage, &["damn", "hell", "shit", "fuck", "bitch"]),
    (ContentWarning::SexualContent, &["sex", "sexual", "intimacy", "bedroom", "naked"]),
    (ContentWarning::SubstanceAbuse, &["drug", "alcohol", "drunk", "high", "addiction"]),
    (ContentWarning::MentalHealth, &["depression", "anxiety", "panic", "therapy", "psychiatrist"]),
    (ContentWarning::HorrorElements, &["scary", "terrifying", "nightmare", "monster", "ghost"]),
    (ContentWarning::Discrimination, &["racist", "sexist", "homophobic", "prejudice", "discrimination"]),
    (ContentWarning::Trauma, &["trauma", "ptsd", "flashback", "triggered", "abuse"]),
    (ContentWarning::MedicalContent, &["hospital", "surgery", "doctor", "medical", "illness"]),
];

/// Builds content warning profiles from book parameters
pub struct ContentWarningGenerator;

impl ContentWarningGenerator {
    /// Severities a content intensity admits; unknown intensities read as mild
    pub fn allowed_severities(intensity: &str) -> &'static [Severity] {
        match normalize(intensity).as_str() {
            "moderate" => &[Severity::Mild, Severity::Moderate, Severity::Severe],
            "intense" => &[Severity::Moderate, Severity::Severe, Severity::Extreme],
            "extreme" => &[Severity::Severe, Severity::Extreme],
            _ => &[Severity::Mild, Severity::Moderate],
        }
    }

    /// Fails when the target audience resolves to no audience type
    pub fn generate_profile(request: &ProfileRequest) -> Result<ContentWarningProfile> {
        Self::generate_profile_at(request, Utc::now())
    }

    /// Same as [`generate_profile`](Self::generate_profile) with a fixed creation time
    pub fn generate_profile_at(request: &ProfileRequest, created_at: DateTime<Utc>) -> Result<ContentWarningProfile> {
        let allowed = Self::allowed_severities(&request.content_intensity);
        let audience = AudienceType::resolve(&request.target_audience)?;
        let max_age = audience.max_content_age();

        let mut profile = ContentWarningProfile::created_at(created_at);
        for warning in ContentWarning::for_genre(&request.genre) {
            if allowed.contains(&warning.severity_level()) && warning.age_minimum() <= max_age {
                profile.add_warning(warning);
            }
        }

        if !request.include_sensitive_topics {
            for warning in SENSITIVE_WARNINGS {
                profile.remove_warning(*warning);
            }
        }

        debug!(
            genre = %request.genre,
            audience = audience.key(),
            intensity = %request.content_intensity,
            warnings = profile.warnings.len(),
            "Generated content warning profile"
        );
        Ok(profile)
    }

    /// Warnings whose keywords appear anywhere in `text`
    ///
    /// Plain substring detection, so "hit" also fires on "white".
    pub fn analyze_text(text: &str) -> Vec<ContentWarning> {
        let text = text.to_lowercase();
        TEXT_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
            .map(|(warning, _)| *warning)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    fn horror_profile() -> ContentWarningProfile {
        let request = ProfileRequest::new("horror");
        ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap()
    }

    #[test]
    fn test_empty_profile_defaults() {
        let profile = ContentWarningProfile::created_at(fixed_time());
        assert_eq!(profile.overall_severity(), None);
        assert_eq!(profile.minimum_age(), "All Ages");
        assert_eq!(profile.summary_text(), "No content warnings.");
        assert_eq!(profile.to_dict()["overall_severity"], "none");
    }

    #[test]
    fn test_add_remove_has() {
        let mut profile = ContentWarningProfile::new();
        profile.add_warning(ContentWarning::Violence);
        profile.add_warning(ContentWarning::Violence);
        assert_eq!(profile.warnings.len(), 1);
        assert!(profile.has_warning(ContentWarning::Violence));

        profile.remove_warning(ContentWarning::Violence);
        profile.remove_warning(ContentWarning::Gore);
        assert!(profile.warnings.is_empty());
    }

    #[test]
    fn test_derived_values_follow_members() {
        let mut profile = ContentWarningProfile::created_at(fixed_time());
        profile.add_warning(ContentWarning::Grief);
        assert_eq!(profile.overall_severity(), Some(Severity::Mild));
        assert_eq!(profile.minimum_age(), "8+");

        profile.add_warning(ContentWarning::SelfHarm);
        assert_eq!(profile.overall_severity(), Some(Severity::Severe));
        assert_eq!(profile.minimum_age(), "16+");

        profile.severity_override = Some(Severity::Mild);
        profile.age_rating = Some("PG-13".to_string());
        assert_eq!(profile.overall_severity(), Some(Severity::Mild));
        assert_eq!(profile.minimum_age(), "PG-13");
    }

    #[test]
    fn test_empty_age_rating_is_ignored() {
        let mut profile = ContentWarningProfile::created_at(fixed_time());
        profile.add_warning(ContentWarning::SelfHarm);
        profile.age_rating = Some(String::new());
        assert_eq!(profile.minimum_age(), "16+");
        assert!(profile.summary_text().contains("Recommended for ages 16+."));
    }

    #[test]
    fn test_summary_text_groups_by_category() {
        let mut profile = ContentWarningProfile::created_at(fixed_time());
        profile.add_warning(ContentWarning::Violence);
        profile.add_warning(ContentWarning::Gore);
        profile.add_warning(ContentWarning::Torture);
        profile.add_warning(ContentWarning::Grief);
        profile.custom_notes = "Fade to black".to_string();

        let summary = profile.summary_text();
        assert!(summary.starts_with("Violence: Gore, Torture, and Violence; "), "{summary}");
        assert!(summary.contains("Recommended for ages 18+. Overall severity: extreme."));
        assert!(summary.ends_with(" Note: Fade to black"));
    }

    #[test]
    fn test_join_names() {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_names(&names(&["A"])), "A");
        assert_eq!(join_names(&names(&["A", "B"])), "A and B");
        assert_eq!(join_names(&names(&["A", "B", "C"])), "A, B, and C");
    }

    #[test]
    fn test_moderate_horror_for_adults_respects_filters() {
        let profile = horror_profile();
        assert!(!profile.warnings.is_empty());
        for warning in &profile.warnings {
            assert!(
                [Severity::Mild, Severity::Moderate, Severity::Severe].contains(&warning.severity_level()),
                "{warning}"
            );
            assert!(warning.age_minimum() <= 18);
        }
        // gore is extreme
        assert!(!profile.has_warning(ContentWarning::Gore));
    }

    #[test]
    fn test_profile_round_trip() {
        let mut profile = horror_profile();
        profile.custom_notes = "Ghost story".to_string();

        let restored = ContentWarningProfile::from_dict(&profile.to_dict()).unwrap();
        assert_eq!(restored, profile);
        assert_eq!(restored.overall_severity(), profile.overall_severity());
        assert_eq!(restored.summary_text(), profile.summary_text());

        let from_json = ContentWarningProfile::from_json(&profile.to_json().unwrap()).unwrap();
        assert_eq!(from_json, profile);
    }

    #[test]
    fn test_from_dict_rejects_unknown_warning() {
        let data = json!({"warnings": ["violence", "not_a_warning"]});
        let err = ContentWarningProfile::from_dict(&data).unwrap_err();
        assert!(matches!(err, crate::TaxonomyError::Malformed(_)));
    }

    #[test]
    fn test_generator_is_deterministic() {
        assert_eq!(horror_profile(), horror_profile());
    }

    #[test]
    fn test_audience_and_sensitivity_filters() {
        let mut request = ProfileRequest::new("horror");
        request.target_audience = "children".to_string();
        request.content_intensity = "mild".to_string();
        let profile = ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap();
        assert!(profile.warnings.iter().all(|w| w.age_minimum() <= 8));

        let mut request = ProfileRequest::new("thriller horror");
        request.content_intensity = "intense".to_string();
        request.include_sensitive_topics = false;
        let profile = ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap();
        assert!(SENSITIVE_WARNINGS.iter().all(|w| !profile.has_warning(*w)));
    }

    #[test]
    fn test_unknown_intensity_falls_back_to_mild() {
        assert_eq!(
            ContentWarningGenerator::allowed_severities("whatever"),
            &[Severity::Mild, Severity::Moderate]
        );
    }

    #[test]
    fn test_target_audience_resolves_through_catalog() {
        // "ya" and "teens" both cap warnings at 13+
        for audience in ["ya", "Teens", "Young Adult"] {
            let mut request = ProfileRequest::new("horror");
            request.target_audience = audience.to_string();
            let profile = ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap();
            assert!(!profile.warnings.is_empty(), "{audience}");
            assert!(profile.warnings.iter().all(|w| w.age_minimum() <= 13), "{audience}");
        }

        let mut request = ProfileRequest::new("horror");
        request.target_audience = "seniors".to_string();
        let seniors = ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap();
        assert_eq!(seniors, horror_profile());

        request.target_audience = "xyz123".to_string();
        let err = ContentWarningGenerator::generate_profile_at(&request, fixed_time()).unwrap_err();
        assert!(matches!(err, crate::TaxonomyError::UnknownValue { kind: "audience type", .. }));
    }

    #[test]
    fn test_analyze_text() {
        let found = ContentWarningGenerator::analyze_text("The Ghost attacked him in the hospital.");
        assert_eq!(
            found,
            vec![ContentWarning::Violence, ContentWarning::HorrorElements, ContentWarning::MedicalContent]
        );
        assert!(ContentWarningGenerator::analyze_text("A calm morning.").is_empty());
    }
}
