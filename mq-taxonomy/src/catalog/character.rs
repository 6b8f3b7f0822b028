//! Character roles and archetypes

use super::levels::NarrativeImportance;
use crate::engine::{taxonomy, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Function a character serves in the plot
    pub enum CharacterRole {
        Protagonist => "protagonist",
        Protagonists => "protagonists",
        Antagonist => "antagonist",
        Deuteragonist => "deuteragonist",
        LoveInterest => "love_interest",
        Mentor => "mentor",
        Ally => "ally",
        ThresholdGuardian => "threshold_guardian",
        Herald => "herald",
        Trickster => "trickster",
        Shapeshifter => "shapeshifter",
        Supporting => "supporting",
        Minor => "minor",
        Narrator => "narrator",
        Foil => "foil",
    }
}

taxonomy! {
    /// Personality archetype
    pub enum CharacterArchetype {
        Hero => "the_hero",
        Innocent => "the_innocent",
        Explorer => "the_explorer",
        Sage => "the_sage",
        Outlaw => "the_outlaw",
        Magician => "the_magician",
        RegularPerson => "the_regular_person",
        Lover => "the_lover",
        Jester => "the_jester",
        Caregiver => "the_caregiver",
        Ruler => "the_ruler",
        Creator => "the_creator",
    }
}

use CharacterArchetype as CA;
use CharacterRole as CR;

// Longest keyword first so "main_characters" wins over "main_character"
static ROLE_RESOLVER: Resolver<CharacterRole> = Resolver {
    steps: &[MatchStep::Exact, MatchStep::AliasKeyword],
    aliases: &[
        ("second_main_character", CR::Deuteragonist),
        ("secondary_protagonist", CR::Deuteragonist),
        ("supporting_character", CR::Supporting),
        ("background_character", CR::Minor),
        ("primary_characters", CR::Protagonists),
        ("threshold_guardian", CR::ThresholdGuardian),
        ("contrast_character", CR::Foil),
        ("primary_character", CR::Protagonist),
        ("lead_protagonists", CR::Protagonists),
        ("romantic_interest", CR::LoveInterest),
        ("lead_protagonist", CR::Protagonist),
        ("romantic_partner", CR::LoveInterest),
        ("main_characters", CR::Protagonists),
        ("lead_characters", CR::Protagonists),
        ("minor_character", CR::Minor),
        ("main_character", CR::Protagonist),
        ("lead_character", CR::Protagonist),
        ("co_protagonist", CR::Deuteragonist),
        ("side_character", CR::Supporting),
        ("love_interest", CR::LoveInterest),
        ("shape_shifter", CR::Shapeshifter),
        ("protagonists", CR::Protagonists),
        ("lead_heroine", CR::Protagonist),
        ("comic_relief", CR::Trickster),
        ("protagonist", CR::Protagonist),
        ("storyteller", CR::Narrator),
        ("antagonist", CR::Antagonist),
        ("gatekeeper", CR::ThresholdGuardian),
        ("lead_hero", CR::Protagonist),
        ("companion", CR::Ally),
        ("supporter", CR::Ally),
        ("messenger", CR::Herald),
        ("announcer", CR::Herald),
        ("opponent", CR::Antagonist),
        ("wise_one", CR::Mentor),
        ("guardian", CR::ThresholdGuardian),
        ("betrayer", CR::Shapeshifter),
        ("opposite", CR::Foil),
        ("heroine", CR::Protagonist),
        ("villain", CR::Antagonist),
        ("bad_guy", CR::Antagonist),
        ("teacher", CR::Mentor),
        ("heroes", CR::Protagonists),
        ("friend", CR::Ally),
        ("helper", CR::Ally),
        ("leads", CR::Protagonists),
        ("enemy", CR::Antagonist),
        ("guide", CR::Mentor),
        ("joker", CR::Trickster),
        ("voice", CR::Narrator),
        ("hero", CR::Protagonist),
        ("lead", CR::Protagonist),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static ARCHETYPE_RESOLVER: Resolver<CharacterArchetype> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::StripPrefix("the_"),
        MatchStep::AliasKeyword,
    ],
    aliases: &[
        ("hero", CA::Hero),
        ("champion", CA::Hero),
        ("warrior", CA::Hero),
        ("innocent", CA::Innocent),
        ("child", CA::Innocent),
        ("pure_one", CA::Innocent),
        ("explorer", CA::Explorer),
        ("adventurer", CA::Explorer),
        ("wanderer", CA::Explorer),
        ("seeker", CA::Explorer),
        ("sage", CA::Sage),
        ("wise_one", CA::Sage),
        ("mentor", CA::Sage),
        ("teacher", CA::Sage),
        ("outlaw", CA::Outlaw),
        ("rebel", CA::Outlaw),
        ("revolutionary", CA::Outlaw),
        ("magician", CA::Magician),
        ("wizard", CA::Magician),
        ("transformer", CA::Magician),
        ("regular_person", CA::RegularPerson),
        ("everyman", CA::RegularPerson),
        ("common_person", CA::RegularPerson),
        ("ordinary_person", CA::RegularPerson),
        ("lover", CA::Lover),
        ("romantic", CA::Lover),
        ("partner", CA::Lover),
        ("jester", CA::Jester),
        ("fool", CA::Jester),
        ("joker", CA::Jester),
        ("comedian", CA::Jester),
        ("caregiver", CA::Caregiver),
        ("nurturer", CA::Caregiver),
        ("helper", CA::Caregiver),
        ("protector", CA::Caregiver),
        ("ruler", CA::Ruler),
        ("leader", CA::Ruler),
        ("king", CA::Ruler),
        ("queen", CA::Ruler),
        ("boss", CA::Ruler),
        ("creator", CA::Creator),
        ("artist", CA::Creator),
        ("inventor", CA::Creator),
        ("builder", CA::Creator),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static IMPORTANCE_TIER: Tier<CharacterRole, NarrativeImportance> = Tier {
    levels: &[
        (
            NarrativeImportance::Primary,
            &[CR::Protagonist, CR::Protagonists, CR::Antagonist],
        ),
        (
            NarrativeImportance::Major,
            &[CR::Deuteragonist, CR::LoveInterest, CR::Mentor, CR::Shapeshifter],
        ),
        (NarrativeImportance::Tertiary, &[CR::Minor]),
        (NarrativeImportance::Structural, &[CR::Narrator]),
    ],
    default: NarrativeImportance::Secondary,
};

impl CharacterRole {
    pub fn narrative_importance(self) -> NarrativeImportance {
        IMPORTANCE_TIER.classify(self)
    }

    pub fn typical_functions(self) -> &'static [&'static str] {
        match self {
            CR::Protagonist => &["drives plot", "character growth", "reader identification", "goal pursuit"],
            CR::Protagonists => &["drive plot", "character growth", "reader identification", "goal pursuit"],
            CR::Antagonist => &[
                "creates conflict",
                "opposes protagonist",
                "tests limits",
                "represents obstacles",
            ],
            CR::Deuteragonist => &[
                "supports protagonist",
                "parallel development",
                "alternate perspective",
                "major subplot",
            ],
            CR::LoveInterest => &[
                "romantic tension",
                "emotional stakes",
                "character motivation",
                "relationship development",
            ],
            CR::Mentor => &["provides wisdom", "teaches skills", "offers guidance", "represents experience"],
            CR::Ally => &["provides support", "loyal friendship", "practical help", "emotional backing"],
            CR::ThresholdGuardian => &[
                "tests commitment",
                "challenges readiness",
                "creates obstacles",
                "forces growth",
            ],
            CR::Herald => &["calls to action", "delivers news", "initiates change", "presents opportunities"],
            CR::Trickster => &["comic relief", "disrupts order", "provides insight", "challenges assumptions"],
            CR::Shapeshifter => &[
                "creates uncertainty",
                "relationship complexity",
                "plot twists",
                "trust issues",
            ],
            CR::Supporting => &["advances plot", "provides information", "represents themes", "populates world"],
            CR::Minor => &["specific function", "brief interaction", "plot device", "world building"],
            CR::Narrator => &[
                "story delivery",
                "perspective control",
                "information management",
                "reader connection",
            ],
            CR::Foil => &[
                "contrasts protagonist",
                "highlights traits",
                "alternative path",
                "thematic comparison",
            ],
        }
    }

    pub fn primary() -> Vec<CharacterRole> {
        IMPORTANCE_TIER.members(NarrativeImportance::Primary)
    }

    /// Primary and major roles
    pub fn major() -> Vec<CharacterRole> {
        Self::ALL
            .iter()
            .copied()
            .filter(|role| {
                matches!(
                    role.narrative_importance(),
                    NarrativeImportance::Primary | NarrativeImportance::Major
                )
            })
            .collect()
    }

    /// Roles from the hero's journey cast of archetypal functions
    pub fn archetypal() -> Vec<CharacterRole> {
        vec![
            CR::Mentor,
            CR::Ally,
            CR::ThresholdGuardian,
            CR::Herald,
            CR::Trickster,
            CR::Shapeshifter,
            CR::Foil,
        ]
    }
}

impl Taxonomy for CharacterRole {
    const KIND: &'static str = "character role";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            CR::Protagonist => "Protagonist",
            CR::Protagonists => "Protagonists",
            CR::Antagonist => "Antagonist",
            CR::Deuteragonist => "Deuteragonist",
            CR::LoveInterest => "Love Interest",
            CR::Mentor => "Mentor",
            CR::Ally => "Ally",
            CR::ThresholdGuardian => "Threshold Guardian",
            CR::Herald => "Herald",
            CR::Trickster => "Trickster",
            CR::Shapeshifter => "Shapeshifter",
            CR::Supporting => "Supporting Character",
            CR::Minor => "Minor Character",
            CR::Narrator => "Narrator",
            CR::Foil => "Foil Character",
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            CR::Protagonist => "The main character who drives the story forward, faces the central conflict, and undergoes the most significant character development throughout the narrative.",
            CR::Protagonists => "The main characters who drive the story forward, face the central conflict, and undergo the most significant character development throughout the narrative.",
            CR::Antagonist => "The primary opponent or obstacle that creates conflict for the protagonist, whether a person, force, or circumstance that opposes the main character's goals.",
            CR::Deuteragonist => "The second most important character in the story, often serving as a close companion, rival, or secondary protagonist with their own significant arc.",
            CR::LoveInterest => "A character who serves as the romantic focus for the protagonist or other main characters, driving romantic subplots and emotional development.",
            CR::Mentor => "A wise, experienced character who guides, teaches, and supports the protagonist, often providing crucial knowledge, skills, or wisdom needed for their journey.",
            CR::Ally => "A loyal friend, companion, or supporter who assists the protagonist in achieving their goals, providing aid, emotional support, or practical help.",
            CR::ThresholdGuardian => "A character who tests the protagonist's resolve and commitment, often appearing early in the journey to challenge whether they're ready to proceed.",
            CR::Herald => "A character who announces the call to adventure or the need for change, often delivering news, warnings, or opportunities that set the plot in motion.",
            CR::Trickster => "A character who provides comic relief, disrupts the status quo, and often serves as a catalyst for change through humor, mischief, or unconventional wisdom.",
            CR::Shapeshifter => "A character whose loyalty, intentions, or true nature remain unclear or change throughout the story, creating uncertainty and complexity in relationships.",
            CR::Supporting => "Characters who play important roles in the plot and character development but are not central to the main narrative arc.",
            CR::Minor => "Characters with small but necessary roles, often appearing briefly to advance plot points, provide information, or populate the story world.",
            CR::Narrator => "The character or voice that tells the story, who may or may not be a character within the narrative itself.",
            CR::Foil => "A character whose contrasting qualities, values, or choices highlight and emphasize the protagonist's characteristics through comparison and contrast.",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &ROLE_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "narrative_importance": self.narrative_importance(),
            "typical_functions": self.typical_functions(),
        })
    }
}

impl CharacterArchetype {
    pub fn core_motivation(self) -> &'static str {
        match self {
            CA::Hero => "To prove worth through courageous action",
            CA::Innocent => "To be happy and live in harmony",
            CA::Explorer => "To experience freedom and find purpose",
            CA::Sage => "To understand the world and share wisdom",
            CA::Outlaw => "To overturn what isn't working",
            CA::Magician => "To understand laws of the universe",
            CA::RegularPerson => "To belong and connect with others",
            CA::Lover => "To attain love and experience romance",
            CA::Jester => "To enjoy life and help others have fun",
            CA::Caregiver => "To help and protect others",
            CA::Ruler => "To create prosperity and success",
            CA::Creator => "To create something of enduring value",
        }
    }

    pub fn greatest_fear(self) -> &'static str {
        match self {
            CA::Hero => "Weakness, vulnerability, cowardice",
            CA::Innocent => "Doing something wrong or bad",
            CA::Explorer => "Being trapped, conformity, inner emptiness",
            CA::Sage => "Being deceived, ignorance, illusion",
            CA::Outlaw => "Being powerless, ineffectual",
            CA::Magician => "Unintended negative consequences",
            CA::RegularPerson => "Being left out, standing out too much",
            CA::Lover => "Being alone, unloved, emotionally unavailable",
            CA::Jester => "Being boring, taking life too seriously",
            CA::Caregiver => "Selfishness, ingratitude from others",
            CA::Ruler => "Chaos, being overthrown, loss of control",
            CA::Creator => "Having a mediocre vision or execution",
        }
    }

    pub fn typical_traits(self) -> &'static [&'static str] {
        match self {
            CA::Hero => &["brave", "determined", "honorable", "self-sacrificing"],
            CA::Innocent => &["optimistic", "trusting", "pure", "hopeful"],
            CA::Explorer => &["adventurous", "independent", "curious", "restless"],
            CA::Sage => &["wise", "knowledgeable", "thoughtful", "patient"],
            CA::Outlaw => &["rebellious", "passionate", "freedom-loving", "unconventional"],
            CA::Magician => &["visionary", "inventive", "charismatic", "transformative"],
            CA::RegularPerson => &["down-to-earth", "relatable", "humble", "loyal"],
            CA::Lover => &["passionate", "devoted", "romantic", "emotional"],
            CA::Jester => &["humorous", "playful", "clever", "irreverent"],
            CA::Caregiver => &["nurturing", "selfless", "protective", "generous"],
            CA::Ruler => &["responsible", "authoritative", "organized", "ambitious"],
            CA::Creator => &["creative", "imaginative", "artistic", "original"],
        }
    }

    /// Archetypes usually read as sympathetic
    pub fn positive() -> Vec<CharacterArchetype> {
        vec![
            CA::Hero,
            CA::Innocent,
            CA::Sage,
            CA::Caregiver,
            CA::Explorer,
            CA::Creator,
            CA::Lover,
        ]
    }

    /// Archetypes with morally ambiguous positions
    pub fn complex() -> Vec<CharacterArchetype> {
        vec![CA::Outlaw, CA::Magician, CA::Ruler, CA::Jester, CA::RegularPerson]
    }
}

impl Taxonomy for CharacterArchetype {
    const KIND: &'static str = "character archetype";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        crate::engine::title_case(self.as_str())
    }

    fn description(self) -> String {
        let description = match self {
            CA::Hero => "Courageous characters who rise to challenges, overcome obstacles, and inspire others through their bravery and determination to do what's right.",
            CA::Innocent => "Pure, optimistic characters who see the good in everyone and everything, often serving as moral compasses and representing hope and faith.",
            CA::Explorer => "Adventurous, curious characters driven by a desire for freedom, discovery, and new experiences, always seeking to push boundaries and explore the unknown.",
            CA::Sage => "Wise, knowledgeable characters who seek truth and share wisdom, often serving as mentors and representing intelligence, insight, and understanding.",
            CA::Outlaw => "Rebellious characters who challenge authority and conventional rules, often fighting for justice or change, representing revolution and nonconformity.",
            CA::Magician => "Visionary characters who understand how the world works and can transform reality, representing power, knowledge, and the ability to make dreams come true.",
            CA::RegularPerson => "Relatable, down-to-earth characters who represent common folk, emphasizing belonging, community, and the virtue of being genuine and unpretentious.",
            CA::Lover => "Passionate characters driven by love, relationships, and emotional connections, representing romance, commitment, and the power of human bonds.",
            CA::Jester => "Playful, humorous characters who bring joy and levity, often using humor to reveal truth and help others not take themselves too seriously.",
            CA::Caregiver => "Nurturing, protective characters motivated by helping others, representing compassion, generosity, and selfless service to those in need.",
            CA::Ruler => "Authoritative characters who take responsibility and control, striving to create order and stability, representing leadership and the desire to build lasting legacies.",
            CA::Creator => "Imaginative, artistic characters driven to create something new and meaningful, representing creativity, vision, and the desire for self-expression.",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &ARCHETYPE_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "core_motivation": self.core_motivation(),
            "greatest_fear": self.greatest_fear(),
            "typical_traits": self.typical_traits(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;
    use crate::TaxonomyError;

    #[test]
    fn test_role_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<CharacterRole>();
        assert!(testing::assert_aliases_resolve::<CharacterRole>().is_empty());
    }

    #[test]
    fn test_role_longest_keyword_wins() {
        assert_eq!(CharacterRole::resolve("the main characters").unwrap(), CR::Protagonists);
        assert_eq!(CharacterRole::resolve("Main Character").unwrap(), CR::Protagonist);
        assert_eq!(CharacterRole::resolve("co-protagonist").unwrap(), CR::Deuteragonist);
        assert_eq!(CharacterRole::resolve("shape shifter").unwrap(), CR::Shapeshifter);
        assert_eq!(CharacterRole::resolve("the evil villain").unwrap(), CR::Antagonist);
    }

    #[test]
    fn test_role_keyword_never_matches_in_reverse() {
        // a fragment of an alias is not enough
        let err = CharacterRole::resolve("vill").unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownValue { .. }));
    }

    #[test]
    fn test_role_importance_lists() {
        assert_eq!(CR::Narrator.narrative_importance(), NarrativeImportance::Structural);
        assert_eq!(CR::Trickster.narrative_importance(), NarrativeImportance::Secondary);
        assert_eq!(CharacterRole::primary(), vec![CR::Protagonist, CR::Protagonists, CR::Antagonist]);
        assert_eq!(
            CharacterRole::major(),
            vec![
                CR::Protagonist,
                CR::Protagonists,
                CR::Antagonist,
                CR::Deuteragonist,
                CR::LoveInterest,
                CR::Mentor,
                CR::Shapeshifter,
            ]
        );
    }

    #[test]
    fn test_archetype_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<CharacterArchetype>();
        assert!(testing::assert_aliases_resolve::<CharacterArchetype>().is_empty());
    }

    #[test]
    fn test_archetype_prefix_and_keywords() {
        assert_eq!(CharacterArchetype::resolve("The Hero").unwrap(), CA::Hero);
        assert_eq!(CharacterArchetype::resolve("the wise old wizard").unwrap(), CA::Magician);
        assert_eq!(CharacterArchetype::resolve("Everyman").unwrap(), CA::RegularPerson);
        // "hero" is checked first and sits inside "superhero"
        assert_eq!(CharacterArchetype::resolve("superhero king").unwrap(), CA::Hero);
        assert!(CharacterArchetype::resolve("the").is_err());
    }

    #[test]
    fn test_archetype_metadata() {
        assert_eq!(CA::RegularPerson.display_name(), "The Regular Person");
        assert_eq!(CA::Jester.typical_traits().len(), 4);
        assert_eq!(CharacterArchetype::positive().len() + CharacterArchetype::complex().len(), 12);
    }
}
