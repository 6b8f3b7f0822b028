//! Shared ordinal scales used as tier labels across catalogs
//!
//! Each scale is itself a small taxonomy so it can be parsed from request
//! parameters and listed by the service. Declaration order is the ordinal
//! order (`Severity::Mild < Severity::Extreme`).

use crate::engine::{taxonomy, title_case, MatchStep, Resolver, Taxonomy};

macro_rules! level_taxonomy {
    ($name:ident, $kind:literal, $resolver:ident, $display:expr, $aliases:expr) => {
        static $resolver: Resolver<$name> = Resolver {
            steps: &[MatchStep::Exact, MatchStep::Alias],
            aliases: $aliases,
            compounds: &[],
            ignore_suffix: None,
        };

        impl Taxonomy for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn key(self) -> &'static str {
                self.as_str()
            }

            fn display_name(self) -> String {
                let display: fn(Self) -> String = $display;
                display(self)
            }

            fn description(self) -> String {
                format!("{} {}", self.display_name(), $kind)
            }

            fn resolver() -> &'static Resolver<Self> {
                &$resolver
            }
        }
    };
}

fn title_key<T: Taxonomy>(value: T) -> String {
    title_case(value.key())
}

taxonomy! {
    /// Difficulty of researching or writing something, for a person or an AI
    pub enum Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
        VeryHard => "very_hard",
    }
}
level_taxonomy!(Difficulty, "difficulty", DIFFICULTY_RESOLVER, title_key, &[]);

impl Difficulty {
    /// Easy and medium
    pub fn is_ai_friendly(self) -> bool {
        matches!(self, Difficulty::Easy | Difficulty::Medium)
    }
}

taxonomy! {
    /// Content warning severity
    pub enum Severity {
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
        Extreme => "extreme",
    }
}
level_taxonomy!(Severity, "severity", SEVERITY_RESOLVER, title_key, &[]);

taxonomy! {
    /// Research requirement priority
    pub enum Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}
level_taxonomy!(Priority, "priority", PRIORITY_RESOLVER, title_key, &[]);

taxonomy! {
    /// Reader market size of a genre
    pub enum MarketSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}
level_taxonomy!(MarketSize, "market size", MARKET_SIZE_RESOLVER, title_key, &[]);

taxonomy! {
    /// How demanding a story structure is to execute
    pub enum StructureComplexity {
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
        Advanced => "advanced",
    }
}
level_taxonomy!(
    StructureComplexity,
    "structure complexity",
    STRUCTURE_COMPLEXITY_RESOLVER,
    title_key,
    &[]
);

impl StructureComplexity {
    /// Number of steps between two levels on the scale
    pub fn distance(self, other: StructureComplexity) -> u32 {
        (self as i32 - other as i32).unsigned_abs()
    }
}

taxonomy! {
    /// Typical manuscript length a structure suits
    pub enum StoryLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
        Flexible => "flexible",
    }
}
level_taxonomy!(
    StoryLength,
    "story length",
    STORY_LENGTH_RESOLVER,
    |length| length.label().to_string(),
    &[
        ("novella", StoryLength::Medium),
        ("novel", StoryLength::Long),
        ("flash", StoryLength::Short),
    ]
);

impl StoryLength {
    pub fn label(self) -> &'static str {
        match self {
            StoryLength::Short => "short (under 50k words)",
            StoryLength::Medium => "medium (50k-80k words)",
            StoryLength::Long => "long (80k+ words)",
            StoryLength::Flexible => "flexible (any length)",
        }
    }
}

taxonomy! {
    /// How much a plot demands of storytelling and character work
    pub enum PlotComplexity {
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
        VeryComplex => "very_complex",
    }
}
level_taxonomy!(PlotComplexity, "plot complexity", PLOT_COMPLEXITY_RESOLVER, title_key, &[]);

taxonomy! {
    /// Manuscript length a plot usually needs
    pub enum PlotLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
        Epic => "epic",
    }
}
level_taxonomy!(
    PlotLength,
    "plot length",
    PLOT_LENGTH_RESOLVER,
    |length| length.label().to_string(),
    &[("novella", PlotLength::Short), ("saga", PlotLength::Epic)]
);

impl PlotLength {
    pub fn label(self) -> &'static str {
        match self {
            PlotLength::Short => "short (40,000-60,000 words)",
            PlotLength::Medium => "medium (60,000-90,000 words)",
            PlotLength::Long => "long (90,000-120,000 words)",
            PlotLength::Epic => "epic (120,000+ words)",
        }
    }
}

taxonomy! {
    /// Reading comprehension an audience brings to a book
    pub enum ReadingLevel {
        Elementary => "elementary",
        Basic => "basic",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Expert => "expert",
    }
}
level_taxonomy!(ReadingLevel, "reading level", READING_LEVEL_RESOLVER, title_key, &[]);

taxonomy! {
    /// How likely a manuscript of some length is to find a publisher
    pub enum PublishingViability {
        High => "high",
        Moderate => "moderate",
        Low => "low",
        Specialized => "specialized",
    }
}
level_taxonomy!(
    PublishingViability,
    "publishing viability",
    PUBLISHING_VIABILITY_RESOLVER,
    title_key,
    &[]
);

taxonomy! {
    /// World-building effort a world type demands
    ///
    /// Keys are the human labels ("Very High").
    pub enum WorldComplexity {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        VeryHigh => "Very High",
    }
}
level_taxonomy!(
    WorldComplexity,
    "world complexity",
    WORLD_COMPLEXITY_RESOLVER,
    |complexity| complexity.as_str().to_string(),
    &[
        ("low", WorldComplexity::Low),
        ("medium", WorldComplexity::Medium),
        ("high", WorldComplexity::High),
        ("very_high", WorldComplexity::VeryHigh),
    ]
);

taxonomy! {
    /// Weight of a character role in the narrative
    pub enum NarrativeImportance {
        Primary => "primary",
        Major => "major",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Structural => "structural",
    }
}
level_taxonomy!(
    NarrativeImportance,
    "narrative importance",
    NARRATIVE_IMPORTANCE_RESOLVER,
    title_key,
    &[]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_order() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Severe < Severity::Extreme);
        assert!(Priority::Critical > Priority::High);
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Extreme));
    }

    #[test]
    fn test_levels_parse_case_insensitively() {
        assert_eq!(Severity::resolve(" Severe ").unwrap(), Severity::Severe);
        assert_eq!(Difficulty::resolve("Very Hard").unwrap(), Difficulty::VeryHard);
        assert!(Severity::resolve("spicy").is_err());
    }

    #[test]
    fn test_story_length_labels_and_aliases() {
        assert_eq!(StoryLength::Long.display_name(), "long (80k+ words)");
        assert_eq!(StoryLength::resolve("novella").unwrap(), StoryLength::Medium);
        assert_eq!(StoryLength::resolve("flash").unwrap(), StoryLength::Short);
    }

    #[test]
    fn test_plot_length_labels() {
        assert_eq!(PlotLength::Epic.display_name(), "epic (120,000+ words)");
        assert_eq!(PlotLength::resolve("saga").unwrap(), PlotLength::Epic);
        assert_eq!(PlotComplexity::resolve("very complex").unwrap(), PlotComplexity::VeryComplex);
    }

    #[test]
    fn test_world_complexity_uses_labels() {
        assert_eq!(WorldComplexity::resolve("very high").unwrap(), WorldComplexity::VeryHigh);
        assert_eq!(
            serde_json::to_value(WorldComplexity::VeryHigh).unwrap(),
            serde_json::json!("Very High")
        );
    }

    #[test]
    fn test_structure_complexity_distance() {
        assert_eq!(StructureComplexity::Simple.distance(StructureComplexity::Moderate), 1);
        assert_eq!(StructureComplexity::Advanced.distance(StructureComplexity::Simple), 3);
        assert_eq!(StructureComplexity::Complex.distance(StructureComplexity::Complex), 0);
    }
}
