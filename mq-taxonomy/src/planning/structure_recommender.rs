//! Ranking story structures against a book's genre and preferences

use crate::catalog::{Difficulty, StoryLength, StoryStructure, StructureComplexity};
use crate::engine::{normalize, Taxonomy};
use crate::error::{Result, TaxonomyError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// What the author is looking for
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructureQuery {
    pub genre: String,
    /// Free text resolved as a story length ("novella" reads as medium)
    #[serde(default)]
    pub length_preference: Option<String>,
    /// A structure complexity key
    #[serde(default)]
    pub complexity_preference: Option<String>,
    #[serde(default = "default_true")]
    pub ai_generation: bool,
}

fn default_true() -> bool {
    true
}

impl StructureQuery {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            length_preference: None,
            complexity_preference: None,
            ai_generation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureRecommendation {
    pub structure: StoryStructure,
    pub compatibility_score: u32,
    pub reasons: Vec<String>,
}

impl StructureRecommendation {
    pub fn to_dict(&self) -> Value {
        json!({
            "structure": self.structure.to_dict(),
            "compatibility_score": self.compatibility_score,
            "reasons": self.reasons,
        })
    }
}

pub struct StructureRecommender;

impl StructureRecommender {
    /// Every structure scoring above zero, best first
    ///
    /// Weights: genre 40, length 20, complexity 20, AI difficulty 20. Ties
    /// keep definition order.
    pub fn recommend(query: &StructureQuery) -> Result<Vec<StructureRecommendation>> {
        let length = query.length_preference.as_deref().map(parse_length).transpose()?;
        let complexity = query
            .complexity_preference
            .as_deref()
            .map(parse_complexity)
            .transpose()?;
        let genre = normalize(&query.genre);

        let mut recommendations: Vec<StructureRecommendation> = StoryStructure::ALL
            .iter()
            .map(|structure| score(*structure, &query.genre, &genre, length, complexity, query.ai_generation))
            .filter(|recommendation| recommendation.compatibility_score > 0)
            .collect();
        recommendations.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        debug!(
            genre = %query.genre,
            candidates = recommendations.len(),
            top = recommendations.first().map(|r| r.structure.key()),
            "Ranked story structures"
        );
        Ok(recommendations)
    }
}

fn score(
    structure: StoryStructure,
    genre_label: &str,
    genre: &str,
    length: Option<StoryLength>,
    complexity: Option<StructureComplexity>,
    ai_generation: bool,
) -> StructureRecommendation {
    let mut points = 0;
    let mut reasons = Vec::new();
    let compatible = structure.genre_compatibility();

    if structure.is_universal() {
        points += 40;
        reasons.push("Universal structure".to_string());
    } else if compatible.contains(&genre) {
        points += 40;
        reasons.push(format!("Excellent for {genre_label}"));
    } else if compatible.iter().any(|fragment| genre.contains(fragment)) {
        points += 20;
        reasons.push("Good for similar genres".to_string());
    }

    if let Some(length) = length {
        if structure.typical_length() == length {
            points += 20;
            reasons.push(format!("Perfect for {} stories", length.key()));
        } else if structure.typical_length() == StoryLength::Flexible {
            points += 10;
            reasons.push("Flexible length".to_string());
        }
    }

    if let Some(complexity) = complexity {
        let distance = structure.complexity_level().distance(complexity);
        if distance == 0 {
            points += 20;
            reasons.push(format!("Matches {} complexity", complexity.key()));
        } else if distance == 1 {
            points += 10;
            reasons.push("Similar complexity level".to_string());
        }
    }

    if ai_generation {
        let difficulty = structure.ai_generation_difficulty();
        points += match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Medium => 15,
            Difficulty::Hard => 10,
            Difficulty::VeryHard => 5,
        };
        reasons.push(format!("AI difficulty: {}", difficulty.key()));
    }

    StructureRecommendation {
        structure,
        compatibility_score: points,
        reasons,
    }
}

fn parse_length(preference: &str) -> Result<StoryLength> {
    StoryLength::resolve(preference).map_err(|_| TaxonomyError::InvalidInput {
        kind: StoryLength::KIND,
        input: preference.to_string(),
    })
}

fn parse_complexity(preference: &str) -> Result<StructureComplexity> {
    StructureComplexity::from_key(&normalize(preference)).ok_or_else(|| TaxonomyError::InvalidInput {
        kind: StructureComplexity::KIND,
        input: preference.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(query: &StructureQuery) -> Vec<StoryStructure> {
        StructureRecommender::recommend(query)
            .unwrap()
            .into_iter()
            .map(|r| r.structure)
            .collect()
    }

    #[test]
    fn test_every_structure_scores_with_ai_generation() {
        let recommendations = StructureRecommender::recommend(&StructureQuery::new("romance")).unwrap();
        assert_eq!(recommendations.len(), StoryStructure::ALL.len());
        assert!(recommendations
            .windows(2)
            .all(|pair| pair[0].compatibility_score >= pair[1].compatibility_score));
    }

    #[test]
    fn test_genre_only_keeps_compatible_structures() {
        let mut query = StructureQuery::new("Mystery");
        query.ai_generation = false;
        let recommendations = StructureRecommender::recommend(&query).unwrap();

        assert!(recommendations.iter().all(|r| r.compatibility_score == 40));
        let structures: Vec<StoryStructure> = recommendations.iter().map(|r| r.structure).collect();
        assert!(structures.contains(&StoryStructure::MysteryStructure));
        assert!(!structures.contains(&StoryStructure::RomanceBeatSheet));
        // universal structures come first in definition order
        assert_eq!(structures[0], StoryStructure::ThreeAct);

        let mystery = recommendations
            .iter()
            .find(|r| r.structure == StoryStructure::MysteryStructure)
            .unwrap();
        assert_eq!(mystery.reasons, vec!["Excellent for Mystery".to_string()]);
    }

    #[test]
    fn test_partial_genre_match() {
        let mut query = StructureQuery::new("dark_romance");
        query.ai_generation = false;
        let recommendations = StructureRecommender::recommend(&query).unwrap();
        let beat_sheet = recommendations
            .iter()
            .find(|r| r.structure == StoryStructure::RomanceBeatSheet)
            .unwrap();
        assert_eq!(beat_sheet.compatibility_score, 20);
        assert_eq!(beat_sheet.reasons, vec!["Good for similar genres".to_string()]);
    }

    #[test]
    fn test_length_and_complexity_scoring() {
        let mut query = StructureQuery::new("thriller");
        query.length_preference = Some("novella".to_string());
        query.complexity_preference = Some("Simple".to_string());
        query.ai_generation = false;

        let recommendations = StructureRecommender::recommend(&query).unwrap();
        let three_act = recommendations
            .iter()
            .find(|r| r.structure == StoryStructure::ThreeAct)
            .unwrap();
        assert!(three_act.reasons.contains(&"Universal structure".to_string()));
        assert!(three_act.compatibility_score >= 40);
    }

    #[test]
    fn test_unknown_preferences_are_invalid_input() {
        let mut query = StructureQuery::new("fantasy");
        query.complexity_preference = Some("baroque".to_string());
        assert!(matches!(
            StructureRecommender::recommend(&query).unwrap_err(),
            TaxonomyError::InvalidInput { kind: "structure complexity", .. }
        ));

        let mut query = StructureQuery::new("fantasy");
        query.length_preference = Some("gigantic".to_string());
        assert!(matches!(
            StructureRecommender::recommend(&query).unwrap_err(),
            TaxonomyError::InvalidInput { kind: "story length", .. }
        ));
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let mut query = StructureQuery::new("science fiction");
        query.complexity_preference = Some("moderate".to_string());
        assert_eq!(ranked(&query), ranked(&query));
    }
}
