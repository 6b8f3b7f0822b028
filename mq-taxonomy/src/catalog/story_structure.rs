//! Story structures and their writing characteristics

use super::levels::{Difficulty, StoryLength, StructureComplexity};
use crate::engine::{normalize, taxonomy, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Plot structure a book is outlined against
    pub enum StoryStructure {
        ThreeAct => "three_act",
        HeroJourney => "hero_journey",
        FreytagPyramid => "freytag_pyramid",
        SevenPoint => "seven_point",
        SaveTheCat => "save_the_cat",
        StoryCircle => "story_circle",
        Snowflake => "snowflake",
        FichteanCurve => "fichtean_curve",
        InMediasRes => "in_medias_res",
        Kishotenketsu => "kishotenketsu",
        NestedLoops => "nested_loops",
        RomanceBeatSheet => "romance_beat_sheet",
        MysteryStructure => "mystery_structure",
        ThrillerPacing => "thriller_pacing",
        Episodic => "episodic",
        Circular => "circular",
        Experimental => "experimental",
        Custom => "custom",
    }
}

use StoryStructure as SS;

/// Compatibility entry matching every genre
pub const UNIVERSAL: &str = "all";

static STRUCTURE_RESOLVER: Resolver<StoryStructure> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("three_act", SS::ThreeAct),
        ("3_act", SS::ThreeAct),
        ("three_acts", SS::ThreeAct),
        ("hero", SS::HeroJourney),
        ("heros_journey", SS::HeroJourney),
        ("monomyth", SS::HeroJourney),
        ("freytag", SS::FreytagPyramid),
        ("pyramid", SS::FreytagPyramid),
        ("seven_point", SS::SevenPoint),
        ("7_point", SS::SevenPoint),
        ("save_cat", SS::SaveTheCat),
        ("beat_sheet", SS::SaveTheCat),
        ("snowflake", SS::Snowflake),
        ("story_circle", SS::StoryCircle),
        ("circle", SS::StoryCircle),
        ("fichtean", SS::FichteanCurve),
        ("medias_res", SS::InMediasRes),
        ("middle", SS::InMediasRes),
        ("kishotenketsu", SS::Kishotenketsu),
        ("japanese", SS::Kishotenketsu),
        ("nested", SS::NestedLoops),
        ("loops", SS::NestedLoops),
        ("romance", SS::RomanceBeatSheet),
        ("mystery", SS::MysteryStructure),
        ("thriller", SS::ThrillerPacing),
        ("episodic", SS::Episodic),
        ("episodes", SS::Episodic),
        ("circular", SS::Circular),
        ("experimental", SS::Experimental),
        ("custom", SS::Custom),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static COMPLEXITY_TIER: Tier<StoryStructure, StructureComplexity> = Tier {
    levels: &[
        (
            StructureComplexity::Simple,
            &[SS::ThreeAct, SS::InMediasRes, SS::Episodic, SS::Circular, SS::Custom],
        ),
        (
            StructureComplexity::Moderate,
            &[
                SS::HeroJourney,
                SS::FreytagPyramid,
                SS::StoryCircle,
                SS::RomanceBeatSheet,
                SS::MysteryStructure,
            ],
        ),
        (
            StructureComplexity::Complex,
            &[
                SS::SevenPoint,
                SS::SaveTheCat,
                SS::FichteanCurve,
                SS::Kishotenketsu,
                SS::NestedLoops,
                SS::ThrillerPacing,
            ],
        ),
    ],
    default: StructureComplexity::Advanced,
};

static LENGTH_TIER: Tier<StoryStructure, StoryLength> = Tier {
    levels: &[
        (StoryLength::Short, &[SS::InMediasRes, SS::Kishotenketsu, SS::Circular]),
        (
            StoryLength::Medium,
            &[
                SS::ThreeAct,
                SS::FreytagPyramid,
                SS::StoryCircle,
                SS::RomanceBeatSheet,
                SS::MysteryStructure,
            ],
        ),
        (
            StoryLength::Long,
            &[
                SS::HeroJourney,
                SS::SevenPoint,
                SS::SaveTheCat,
                SS::FichteanCurve,
                SS::Snowflake,
                SS::NestedLoops,
                SS::ThrillerPacing,
                SS::Episodic,
            ],
        ),
    ],
    default: StoryLength::Flexible,
};

static AI_DIFFICULTY_TIER: Tier<StoryStructure, Difficulty> = Tier {
    levels: &[
        (
            Difficulty::Easy,
            &[SS::ThreeAct, SS::InMediasRes, SS::Episodic, SS::RomanceBeatSheet, SS::Custom],
        ),
        (
            Difficulty::Medium,
            &[
                SS::HeroJourney,
                SS::FreytagPyramid,
                SS::StoryCircle,
                SS::MysteryStructure,
                SS::Circular,
            ],
        ),
        (
            Difficulty::Hard,
            &[
                SS::SevenPoint,
                SS::SaveTheCat,
                SS::FichteanCurve,
                SS::ThrillerPacing,
                SS::Kishotenketsu,
            ],
        ),
    ],
    default: Difficulty::VeryHard,
};

impl StoryStructure {
    pub fn complexity_level(self) -> StructureComplexity {
        COMPLEXITY_TIER.classify(self)
    }

    pub fn typical_length(self) -> StoryLength {
        LENGTH_TIER.classify(self)
    }

    /// Major acts or sections; three unless the structure says otherwise
    pub fn number_of_acts(self) -> u32 {
        match self {
            SS::FreytagPyramid => 5,
            SS::SevenPoint => 7,
            SS::StoryCircle => 8,
            SS::Kishotenketsu | SS::MysteryStructure => 4,
            // one continuous rising action
            SS::FichteanCurve => 1,
            _ => 3,
        }
    }

    pub fn ai_generation_difficulty(self) -> Difficulty {
        AI_DIFFICULTY_TIER.classify(self)
    }

    /// Genre keys this structure suits; [`UNIVERSAL`] means every genre
    pub fn genre_compatibility(self) -> &'static [&'static str] {
        match self {
            SS::ThreeAct | SS::Custom => &[UNIVERSAL],
            SS::HeroJourney => &["fantasy", "adventure", "science_fiction", "young_adult"],
            SS::FreytagPyramid => &["drama", "literary_fiction", "historical_fiction"],
            SS::SevenPoint => &["fantasy", "science_fiction", "mystery", "thriller"],
            SS::SaveTheCat => &["comedy", "romance", "young_adult", "contemporary"],
            SS::Snowflake => &["fantasy", "science_fiction", "epic_fantasy"],
            SS::StoryCircle => &["comedy", "drama", "contemporary", "coming_of_age"],
            SS::FichteanCurve => &["thriller", "mystery", "suspense", "action"],
            SS::InMediasRes => &["thriller", "mystery", "action", "war"],
            SS::Kishotenketsu => &["literary_fiction", "slice_of_life", "experimental"],
            SS::NestedLoops => &["epic_fantasy", "science_fiction", "literary_fiction"],
            SS::RomanceBeatSheet => &["romance", "romantic_comedy", "contemporary_romance"],
            SS::MysteryStructure => &["mystery", "detective", "cozy_mystery", "noir"],
            SS::ThrillerPacing => &["thriller", "suspense", "action", "spy"],
            SS::Episodic => &["adventure", "travel", "coming_of_age", "biographical"],
            SS::Circular => &["literary_fiction", "experimental", "philosophical"],
            SS::Experimental => &["literary_fiction", "postmodern", "experimental"],
        }
    }

    pub fn is_universal(self) -> bool {
        self.genre_compatibility().contains(&UNIVERSAL)
    }

    /// Beat list for outlining
    ///
    /// Structures without a detailed outline get one numbered beat per act.
    pub fn outline(self) -> Vec<String> {
        let beats: &[&str] = match self {
            SS::ThreeAct => &[
                "Act I: Setup (25%)",
                "  - Inciting Incident",
                "  - Plot Point 1",
                "Act II: Confrontation (50%)",
                "  - Midpoint",
                "  - Plot Point 2",
                "Act III: Resolution (25%)",
                "  - Climax",
                "  - Denouement",
            ],
            SS::HeroJourney => &[
                "Ordinary World",
                "Call to Adventure",
                "Refusal of the Call",
                "Meeting the Mentor",
                "Crossing the Threshold",
                "Tests, Allies, Enemies",
                "Approach to the Inmost Cave",
                "Ordeal",
                "Reward",
                "The Road Back",
                "Resurrection",
                "Return with the Elixir",
            ],
            SS::FreytagPyramid => &[
                "Exposition",
                "Rising Action",
                "Climax",
                "Falling Action",
                "Denouement",
            ],
            SS::RomanceBeatSheet => &[
                "Meet-Cute / First Meeting",
                "Initial Attraction",
                "First Conflict/Misunderstanding",
                "Growing Closer",
                "First Kiss/Physical Intimacy",
                "Major Conflict/Black Moment",
                "Realization of Love",
                "Grand Gesture",
                "Happy Ending",
            ],
            other => {
                return (1..=other.number_of_acts())
                    .map(|beat| format!("Beat {beat}"))
                    .collect();
            }
        };
        beats.iter().map(|beat| beat.to_string()).collect()
    }

    /// Universal structures plus those listing the normalized genre
    pub fn for_genre(genre: &str) -> Vec<StoryStructure> {
        let genre = normalize(genre);
        Self::ALL
            .iter()
            .copied()
            .filter(|structure| {
                structure.is_universal() || structure.genre_compatibility().contains(&genre.as_str())
            })
            .collect()
    }

    pub fn ai_friendly() -> Vec<StoryStructure> {
        Self::ALL
            .iter()
            .copied()
            .filter(|structure| structure.ai_generation_difficulty().is_ai_friendly())
            .collect()
    }

    pub fn by_complexity(complexity: StructureComplexity) -> Vec<StoryStructure> {
        COMPLEXITY_TIER.members(complexity)
    }

    pub fn by_length(length: StoryLength) -> Vec<StoryStructure> {
        LENGTH_TIER.members(length)
    }
}

impl Taxonomy for StoryStructure {
    const KIND: &'static str = "story structure";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            SS::ThreeAct => "Three-Act Structure",
            SS::HeroJourney => "Hero's Journey",
            SS::FreytagPyramid => "Freytag's Pyramid",
            SS::SevenPoint => "Seven-Point Story Structure",
            SS::SaveTheCat => "Save the Cat Beat Sheet",
            SS::Snowflake => "Snowflake Method",
            SS::StoryCircle => "Story Circle",
            SS::FichteanCurve => "Fichtean Curve",
            SS::InMediasRes => "In Medias Res",
            SS::Kishotenketsu => "Kishotenketsu",
            SS::NestedLoops => "Nested Loops",
            SS::RomanceBeatSheet => "Romance Beat Sheet",
            SS::MysteryStructure => "Mystery Structure",
            SS::ThrillerPacing => "Thriller Pacing Structure",
            SS::Episodic => "Episodic Structure",
            SS::Circular => "Circular Structure",
            SS::Experimental => "Experimental Structure",
            SS::Custom => "Custom Structure",
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            SS::ThreeAct => {
                "Classic beginning, middle, and end structure with setup, confrontation, and resolution"
            }
            SS::HeroJourney => "Joseph Campbell's monomyth pattern with departure, initiation, and return",
            SS::FreytagPyramid => {
                "Five-part dramatic structure with exposition, rising action, climax, falling action, and denouement"
            }
            SS::SevenPoint => "Dan Wells' structure focusing on character arc from beginning to end",
            SS::SaveTheCat => "Blake Snyder's 15-beat screenplay structure adapted for novels",
            SS::Snowflake => {
                "Randy Ingermanson's step-by-step development method starting simple and expanding"
            }
            SS::StoryCircle => "Dan Harmon's simplified hero's journey with 8 steps",
            SS::FichteanCurve => "Rising action with multiple crisis points building to climax",
            SS::InMediasRes => "Starting in the middle of action then revealing backstory",
            SS::Kishotenketsu => {
                "Japanese four-act structure: introduction, development, twist, conclusion"
            }
            SS::NestedLoops => "Multiple interconnected storylines that weave together",
            SS::RomanceBeatSheet => "Romance-specific structure with meet-cute, conflict, and HEA",
            SS::MysteryStructure => "Mystery-focused structure with clues, red herrings, and revelation",
            SS::ThrillerPacing => "Fast-paced structure with constant tension and plot twists",
            SS::Episodic => "Series of connected episodes or chapters with individual arcs",
            SS::Circular => "Story that ends where it began, creating a complete circle",
            SS::Experimental => "Non-traditional or innovative narrative structure",
            SS::Custom => "Create your own unique structure tailored to your story",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &STRUCTURE_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "complexity_level": self.complexity_level(),
            "typical_length": self.typical_length().label(),
            "number_of_acts": self.number_of_acts(),
            "ai_generation_difficulty": self.ai_generation_difficulty(),
            "genre_compatibility": self.genre_compatibility(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;

    #[test]
    fn test_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<StoryStructure>();
        assert!(testing::assert_aliases_resolve::<StoryStructure>().is_empty());
    }

    #[test]
    fn test_fuzzy_resolution() {
        assert_eq!(StoryStructure::resolve("three act").unwrap(), SS::ThreeAct);
        assert_eq!(StoryStructure::resolve("Hero's Journey").unwrap(), SS::HeroJourney);
        assert_eq!(StoryStructure::resolve("mystery structure").unwrap(), SS::MysteryStructure);
        assert_eq!(StoryStructure::resolve("romance").unwrap(), SS::RomanceBeatSheet);
        assert_eq!(StoryStructure::resolve("circular plot").unwrap(), SS::Circular);
        // "middle" is an alias, "in_medias_res" never appears
        assert_eq!(StoryStructure::resolve("start in the middle").unwrap(), SS::InMediasRes);
    }

    #[test]
    fn test_tier_defaults() {
        assert_eq!(SS::Snowflake.complexity_level(), StructureComplexity::Advanced);
        assert_eq!(SS::Custom.typical_length(), StoryLength::Flexible);
        assert_eq!(SS::NestedLoops.ai_generation_difficulty(), Difficulty::VeryHard);
        assert_eq!(SS::Episodic.number_of_acts(), 3);
    }

    #[test]
    fn test_outline() {
        assert_eq!(SS::HeroJourney.outline().len(), 12);
        assert_eq!(SS::StoryCircle.outline().len(), 8);
        assert_eq!(SS::FichteanCurve.outline(), vec!["Beat 1".to_string()]);
    }

    #[test]
    fn test_for_genre_includes_universal() {
        let fantasy = StoryStructure::for_genre("Fantasy");
        assert_eq!(
            fantasy,
            vec![SS::ThreeAct, SS::HeroJourney, SS::SevenPoint, SS::Snowflake, SS::Custom]
        );
        assert_eq!(StoryStructure::for_genre("cookbook"), vec![SS::ThreeAct, SS::Custom]);
    }

    #[test]
    fn test_queries() {
        assert_eq!(StoryStructure::ai_friendly().len(), 10);
        assert_eq!(
            StoryStructure::by_complexity(StructureComplexity::Advanced),
            vec![SS::Snowflake, SS::Experimental]
        );
        assert_eq!(
            StoryStructure::by_length(StoryLength::Short),
            vec![SS::InMediasRes, SS::Kishotenketsu, SS::Circular]
        );
        let by_alias = StoryLength::resolve("novella").unwrap();
        assert_eq!(StoryStructure::by_length(by_alias).len(), 5);
    }
}
