//! Plot archetypes
//!
//! Booker's seven basic plots plus genre-specific plot patterns, with the
//! complexity and manuscript length each one usually calls for.

use super::levels::{PlotComplexity, PlotLength};
use crate::engine::{normalize, taxonomy, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Plot archetype a book is built around
    pub enum PlotType {
        OvercomingTheMonster => "overcoming_the_monster",
        RagsToRiches => "rags_to_riches",
        TheQuest => "the_quest",
        VoyageAndReturn => "voyage_and_return",
        Comedy => "comedy",
        Tragedy => "tragedy",
        Rebirth => "rebirth",
        MysteryInvestigation => "mystery_investigation",
        RomanceLoveStory => "romance_love_story",
        ComingOfAge => "coming_of_age",
        Revenge => "revenge",
        Redemption => "redemption",
        Sacrifice => "sacrifice",
        Survival => "survival",
        FishOutOfWater => "fish_out_of_water",
        Conspiracy => "conspiracy",
        Chase => "chase",
        Escape => "escape",
        Heist => "heist",
        Kidnapping => "kidnapping",
        Assassination => "assassination",
        Espionage => "espionage",
        TickingClock => "ticking_clock",
        CatAndMouse => "cat_and_mouse",
        FirstContact => "first_contact",
        TimeTravel => "time_travel",
        DystopianRebellion => "dystopian_rebellion",
        TechnologicalUprising => "technological_uprising",
        SpaceExploration => "space_exploration",
        AlienInvasion => "alien_invasion",
        Colonization => "colonization",
        GeneticEnhancement => "genetic_enhancement",
        VirtualReality => "virtual_reality",
        ChosenOne => "chosen_one",
        MagicalAwakening => "magical_awakening",
        DarkLordRising => "dark_lord_rising",
        PortalWorld => "portal_world",
        AncientProphecy => "ancient_prophecy",
        LostKingdom => "lost_kingdom",
        MagicalArtifact => "magical_artifact",
        DragonSlaying => "dragon_slaying",
        FairyTaleRetelling => "fairy_tale_retelling",
        HauntedHouse => "haunted_house",
        Possession => "possession",
        CursedObject => "cursed_object",
        MonsterHunt => "monster_hunt",
        ApocalypticHorror => "apocalyptic_horror",
        PsychologicalBreakdown => "psychological_breakdown",
        CultHorror => "cult_horror",
        BodyHorror => "body_horror",
        ViralOutbreak => "viral_outbreak",
        SupernaturalHorror => "supernatural_horror",
        EnemiesToLovers => "enemies_to_lovers",
        ForbiddenLove => "forbidden_love",
        SecondChanceRomance => "second_chance_romance",
        FakeRelationship => "fake_relationship",
        MarriageOfConvenience => "marriage_of_convenience",
        LoveTriangle => "love_triangle",
        StarCrossedLovers => "star_crossed_lovers",
        WorkplaceRomance => "workplace_romance",
        HolidayRomance => "holiday_romance",
        LockedRoomMystery => "locked_room_mystery",
        SerialKiller => "serial_killer",
        ColdCase => "cold_case",
        WitnessProtection => "witness_protection",
        UndercoverOperation => "undercover_operation",
        CrimeFamily => "crime_family",
        PoliceProcedural => "police_procedural",
        AmateurDetective => "amateur_detective",
        LegalThriller => "legal_thriller",
        WarStory => "war_story",
        PoliticalIntrigue => "political_intrigue",
        SocialRevolution => "social_revolution",
        PeriodRomance => "period_romance",
        ImmigrantStory => "immigrant_story",
        FamilySaga => "family_saga",
        CulturalClash => "cultural_clash",
        HistoricalMystery => "historical_mystery",
        RiseAndFall => "rise_and_fall",
        CharacterStudy => "character_study",
        MidlifeCrisis => "midlife_crisis",
        FamilyDrama => "family_drama",
        RelationshipDrama => "relationship_drama",
        ExistentialJourney => "existential_journey",
        SocialCommentary => "social_commentary",
        GenerationalConflict => "generational_conflict",
        IdentityCrisis => "identity_crisis",
        MoralDilemma => "moral_dilemma",
        SchoolStory => "school_story",
        FirstLove => "first_love",
        TeenRebellion => "teen_rebellion",
        BullyingStory => "bullying_story",
        SportsCompetition => "sports_competition",
        TalentCompetition => "talent_competition",
        PeerPressure => "peer_pressure",
        FamilySecrets => "family_secrets",
        CollegeStory => "college_story",
        TreasureHunt => "treasure_hunt",
        Exploration => "exploration",
        RescueMission => "rescue_mission",
        RaceAgainstTime => "race_against_time",
        SurvivalAdventure => "survival_adventure",
        MartialArts => "martial_arts",
        PirateAdventure => "pirate_adventure",
        JungleAdventure => "jungle_adventure",
        MountainClimbing => "mountain_climbing",
        CorporateThriller => "corporate_thriller",
        StartupStory => "startup_story",
        BusinessRivalry => "business_rivalry",
        WorkplaceDrama => "workplace_drama",
        FinancialCrisis => "financial_crisis",
        Whistleblower => "whistleblower",
        MergerAcquisition => "merger_acquisition",
        EntrepreneurialJourney => "entrepreneurial_journey",
        ProfessionalComeback => "professional_comeback",
        EnvironmentalCrisis => "environmental_crisis",
        PandemicStory => "pandemic_story",
        SocialMediaDrama => "social_media_drama",
        TechnologyAddiction => "technology_addiction",
        MentalHealthJourney => "mental_health_journey",
        ImmigrationStory => "immigration_story",
        GenderIdentity => "gender_identity",
        RacialJustice => "racial_justice",
        EconomicInequality => "economic_inequality",
    }
}

use PlotType as PT;

static PLOT_RESOLVER: Resolver<PlotType> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        // classic
        ("monster", PT::OvercomingTheMonster),
        ("rags", PT::RagsToRiches),
        ("quest", PT::TheQuest),
        ("voyage", PT::VoyageAndReturn),
        ("rebirth", PT::Rebirth),
        ("tragedy", PT::Tragedy),
        ("comedy", PT::Comedy),
        ("mystery", PT::MysteryInvestigation),
        ("romance", PT::RomanceLoveStory),
        ("love_story", PT::RomanceLoveStory),
        ("coming_of_age", PT::ComingOfAge),
        ("revenge", PT::Revenge),
        ("redemption", PT::Redemption),
        ("sacrifice", PT::Sacrifice),
        ("survival", PT::Survival),
        ("fish_out_of_water", PT::FishOutOfWater),
        // thriller
        ("conspiracy", PT::Conspiracy),
        ("chase", PT::Chase),
        ("escape", PT::Escape),
        ("heist", PT::Heist),
        ("kidnapping", PT::Kidnapping),
        ("spy", PT::Espionage),
        ("espionage", PT::Espionage),
        ("ticking_clock", PT::TickingClock),
        // science fiction
        ("first_contact", PT::FirstContact),
        ("time_travel", PT::TimeTravel),
        ("dystopian", PT::DystopianRebellion),
        ("rebellion", PT::DystopianRebellion),
        ("space", PT::SpaceExploration),
        ("alien", PT::AlienInvasion),
        ("invasion", PT::AlienInvasion),
        ("ai", PT::TechnologicalUprising),
        ("robot", PT::TechnologicalUprising),
        // fantasy
        ("chosen_one", PT::ChosenOne),
        ("chosen", PT::ChosenOne),
        ("prophecy", PT::AncientProphecy),
        ("magic", PT::MagicalAwakening),
        ("magical", PT::MagicalAwakening),
        ("dragon", PT::DragonSlaying),
        ("portal", PT::PortalWorld),
        ("dark_lord", PT::DarkLordRising),
        ("fairy_tale", PT::FairyTaleRetelling),
        // horror
        ("haunted", PT::HauntedHouse),
        ("ghost", PT::HauntedHouse),
        ("possession", PT::Possession),
        ("curse", PT::CursedObject),
        ("cursed", PT::CursedObject),
        ("monster_hunt", PT::MonsterHunt),
        ("zombie", PT::ViralOutbreak),
        ("virus", PT::ViralOutbreak),
        ("cult", PT::CultHorror),
        // romance
        ("enemies_to_lovers", PT::EnemiesToLovers),
        ("forbidden", PT::ForbiddenLove),
        ("second_chance", PT::SecondChanceRomance),
        ("fake", PT::FakeRelationship),
        ("marriage", PT::MarriageOfConvenience),
        ("triangle", PT::LoveTriangle),
        ("workplace", PT::WorkplaceRomance),
        // crime
        ("locked_room", PT::LockedRoomMystery),
        ("serial", PT::SerialKiller),
        ("killer", PT::SerialKiller),
        ("cold_case", PT::ColdCase),
        ("detective", PT::AmateurDetective),
        ("police", PT::PoliceProcedural),
        ("legal", PT::LegalThriller),
        ("court", PT::LegalThriller),
        // historical
        ("war", PT::WarStory),
        ("political", PT::PoliticalIntrigue),
        ("revolution", PT::SocialRevolution),
        ("immigrant", PT::ImmigrantStory),
        ("family_saga", PT::FamilySaga),
        ("period", PT::PeriodRomance),
        // literary
        ("character", PT::CharacterStudy),
        ("study", PT::CharacterStudy),
        ("midlife", PT::MidlifeCrisis),
        ("family", PT::FamilyDrama),
        ("drama", PT::FamilyDrama),
        ("existential", PT::ExistentialJourney),
        ("identity", PT::IdentityCrisis),
        ("moral", PT::MoralDilemma),
        // young adult
        ("school", PT::SchoolStory),
        ("teen", PT::TeenRebellion),
        ("bullying", PT::BullyingStory),
        ("sports", PT::SportsCompetition),
        ("college", PT::CollegeStory),
        ("first_love", PT::FirstLove),
        // adventure
        ("treasure", PT::TreasureHunt),
        ("exploration", PT::Exploration),
        ("rescue", PT::RescueMission),
        ("race", PT::RaceAgainstTime),
        ("martial", PT::MartialArts),
        ("pirate", PT::PirateAdventure),
        ("jungle", PT::JungleAdventure),
        ("mountain", PT::MountainClimbing),
        // business
        ("corporate", PT::CorporateThriller),
        ("startup", PT::StartupStory),
        ("business", PT::BusinessRivalry),
        ("financial", PT::FinancialCrisis),
        ("entrepreneur", PT::EntrepreneurialJourney),
        // contemporary
        ("environment", PT::EnvironmentalCrisis),
        ("pandemic", PT::PandemicStory),
        ("social_media", PT::SocialMediaDrama),
        ("technology", PT::TechnologyAddiction),
        ("mental_health", PT::MentalHealthJourney),
        ("immigration", PT::ImmigrationStory),
        ("gender", PT::GenderIdentity),
        ("racial", PT::RacialJustice),
        ("economic", PT::EconomicInequality),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static COMPLEXITY_TIER: Tier<PlotType, PlotComplexity> = Tier {
    levels: &[
        (
            PlotComplexity::Simple,
            &[
                PT::Comedy,
                PT::FishOutOfWater,
                PT::HolidayRomance,
                PT::TreasureHunt,
                PT::SchoolStory,
                PT::FirstLove,
                PT::PirateAdventure,
                PT::SportsCompetition,
                PT::RescueMission,
            ],
        ),
        (
            PlotComplexity::Moderate,
            &[
                PT::OvercomingTheMonster,
                PT::RagsToRiches,
                PT::TheQuest,
                PT::VoyageAndReturn,
                PT::ComingOfAge,
                PT::Revenge,
                PT::Survival,
                PT::MysteryInvestigation,
                PT::RomanceLoveStory,
                PT::ChosenOne,
                PT::EnemiesToLovers,
                PT::WorkplaceRomance,
                PT::HauntedHouse,
                PT::AlienInvasion,
                PT::TimeTravel,
            ],
        ),
        (
            PlotComplexity::Complex,
            &[
                PT::Tragedy,
                PT::Rebirth,
                PT::Redemption,
                PT::Sacrifice,
                PT::Conspiracy,
                PT::Espionage,
                PT::DystopianRebellion,
                PT::PoliticalIntrigue,
                PT::FamilyDrama,
                PT::IdentityCrisis,
                PT::SocialRevolution,
                PT::CultHorror,
                PT::LegalThriller,
                PT::CorporateThriller,
                PT::MentalHealthJourney,
            ],
        ),
    ],
    default: PlotComplexity::VeryComplex,
};

static LENGTH_TIER: Tier<PlotType, PlotLength> = Tier {
    levels: &[
        (
            PlotLength::Short,
            &[
                PT::FishOutOfWater,
                PT::HolidayRomance,
                PT::FirstLove,
                PT::SchoolStory,
                PT::WorkplaceRomance,
                PT::RescueMission,
            ],
        ),
        (
            PlotLength::Long,
            &[
                PT::TheQuest,
                PT::VoyageAndReturn,
                PT::Tragedy,
                PT::Rebirth,
                PT::DystopianRebellion,
                PT::SpaceExploration,
                PT::FamilySaga,
                PT::PoliticalIntrigue,
                PT::SocialRevolution,
                PT::WarStory,
            ],
        ),
        (
            PlotLength::Epic,
            &[
                PT::DarkLordRising,
                PT::ApocalypticHorror,
                PT::AlienInvasion,
                PT::TechnologicalUprising,
                PT::RiseAndFall,
                PT::CharacterStudy,
                PT::SocialCommentary,
                PT::EnvironmentalCrisis,
            ],
        ),
    ],
    default: PlotLength::Medium,
};

/// Genre fragment -> recommended plots, matched by substring
static GENRE_PLOTS: &[(&str, &[PlotType])] = &[
    (
        "fantasy",
        &[
            PT::TheQuest,
            PT::ChosenOne,
            PT::OvercomingTheMonster,
            PT::MagicalAwakening,
            PT::DarkLordRising,
            PT::AncientProphecy,
            PT::PortalWorld,
            PT::DragonSlaying,
            PT::LostKingdom,
            PT::MagicalArtifact,
            PT::FairyTaleRetelling,
            PT::Rebirth,
        ],
    ),
    (
        "science_fiction",
        &[
            PT::FirstContact,
            PT::TimeTravel,
            PT::DystopianRebellion,
            PT::TechnologicalUprising,
            PT::SpaceExploration,
            PT::AlienInvasion,
            PT::Colonization,
            PT::GeneticEnhancement,
            PT::VirtualReality,
            PT::TheQuest,
            PT::OvercomingTheMonster,
            PT::Survival,
        ],
    ),
    (
        "romance",
        &[
            PT::RomanceLoveStory,
            PT::EnemiesToLovers,
            PT::ForbiddenLove,
            PT::SecondChanceRomance,
            PT::FakeRelationship,
            PT::MarriageOfConvenience,
            PT::LoveTriangle,
            PT::StarCrossedLovers,
            PT::WorkplaceRomance,
            PT::HolidayRomance,
            PT::FirstLove,
            PT::Comedy,
        ],
    ),
    (
        "mystery",
        &[
            PT::MysteryInvestigation,
            PT::LockedRoomMystery,
            PT::SerialKiller,
            PT::ColdCase,
            PT::AmateurDetective,
            PT::PoliceProcedural,
            PT::LegalThriller,
            PT::Conspiracy,
            PT::HistoricalMystery,
        ],
    ),
    (
        "thriller",
        &[
            PT::Conspiracy,
            PT::Chase,
            PT::Escape,
            PT::Heist,
            PT::Kidnapping,
            PT::Assassination,
            PT::Espionage,
            PT::TickingClock,
            PT::CatAndMouse,
            PT::Survival,
            PT::CorporateThriller,
            PT::LegalThriller,
        ],
    ),
    (
        "horror",
        &[
            PT::HauntedHouse,
            PT::Possession,
            PT::CursedObject,
            PT::MonsterHunt,
            PT::ApocalypticHorror,
            PT::PsychologicalBreakdown,
            PT::CultHorror,
            PT::BodyHorror,
            PT::ViralOutbreak,
            PT::SupernaturalHorror,
            PT::OvercomingTheMonster,
        ],
    ),
    (
        "young_adult",
        &[
            PT::ComingOfAge,
            PT::SchoolStory,
            PT::FirstLove,
            PT::TeenRebellion,
            PT::BullyingStory,
            PT::SportsCompetition,
            PT::TalentCompetition,
            PT::FamilySecrets,
            PT::CollegeStory,
            PT::ChosenOne,
            PT::DystopianRebellion,
        ],
    ),
    (
        "historical_fiction",
        &[
            PT::WarStory,
            PT::PoliticalIntrigue,
            PT::SocialRevolution,
            PT::PeriodRomance,
            PT::ImmigrantStory,
            PT::FamilySaga,
            PT::CulturalClash,
            PT::HistoricalMystery,
            PT::RiseAndFall,
        ],
    ),
    (
        "literary_fiction",
        &[
            PT::CharacterStudy,
            PT::MidlifeCrisis,
            PT::FamilyDrama,
            PT::RelationshipDrama,
            PT::ExistentialJourney,
            PT::SocialCommentary,
            PT::GenerationalConflict,
            PT::IdentityCrisis,
            PT::MoralDilemma,
            PT::Rebirth,
            PT::Tragedy,
            PT::Redemption,
        ],
    ),
    (
        "adventure",
        &[
            PT::TheQuest,
            PT::TreasureHunt,
            PT::Exploration,
            PT::RescueMission,
            PT::RaceAgainstTime,
            PT::SurvivalAdventure,
            PT::PirateAdventure,
            PT::JungleAdventure,
            PT::MountainClimbing,
            PT::Escape,
        ],
    ),
    (
        "crime",
        &[
            PT::SerialKiller,
            PT::CrimeFamily,
            PT::UndercoverOperation,
            PT::Heist,
            PT::WitnessProtection,
            PT::PoliceProcedural,
            PT::LegalThriller,
            PT::Conspiracy,
            PT::Revenge,
        ],
    ),
    (
        "business",
        &[
            PT::CorporateThriller,
            PT::StartupStory,
            PT::BusinessRivalry,
            PT::WorkplaceDrama,
            PT::FinancialCrisis,
            PT::Whistleblower,
            PT::MergerAcquisition,
            PT::EntrepreneurialJourney,
            PT::ProfessionalComeback,
        ],
    ),
    (
        "dystopian",
        &[
            PT::DystopianRebellion,
            PT::Survival,
            PT::Escape,
            PT::Conspiracy,
            PT::TechnologicalUprising,
            PT::SocialRevolution,
            PT::Sacrifice,
            PT::OvercomingTheMonster,
            PT::Redemption,
        ],
    ),
    (
        "paranormal",
        &[
            PT::MagicalAwakening,
            PT::SupernaturalHorror,
            PT::Possession,
            PT::CursedObject,
            PT::PortalWorld,
            PT::ChosenOne,
            PT::OvercomingTheMonster,
            PT::ForbiddenLove,
        ],
    ),
];

/// Recommended when no genre fragment matches
const GENERAL_PLOTS: &[PlotType] = &[
    PT::TheQuest,
    PT::OvercomingTheMonster,
    PT::ComingOfAge,
    PT::RomanceLoveStory,
    PT::MysteryInvestigation,
    PT::Survival,
];

const CLASSIC_PLOTS: &[PlotType] = &[
    PT::OvercomingTheMonster,
    PT::RagsToRiches,
    PT::TheQuest,
    PT::VoyageAndReturn,
    PT::Comedy,
    PT::Tragedy,
    PT::Rebirth,
];

const MODERN_PLOTS: &[PlotType] = &[
    PT::EnvironmentalCrisis,
    PT::PandemicStory,
    PT::SocialMediaDrama,
    PT::TechnologyAddiction,
    PT::MentalHealthJourney,
    PT::ImmigrationStory,
    PT::GenderIdentity,
    PT::RacialJustice,
    PT::EconomicInequality,
    PT::CorporateThriller,
    PT::StartupStory,
    PT::ViralOutbreak,
];

impl PlotType {
    pub fn complexity_level(self) -> PlotComplexity {
        COMPLEXITY_TIER.classify(self)
    }

    pub fn target_length(self) -> PlotLength {
        LENGTH_TIER.classify(self)
    }

    pub fn typical_themes(self) -> &'static [&'static str] {
        match self {
            PT::OvercomingTheMonster => &["good vs evil", "courage", "heroism", "protection"],
            PT::RagsToRiches => &["success", "transformation", "perseverance", "achievement"],
            PT::TheQuest => &["journey", "self-discovery", "purpose", "adventure"],
            PT::Comedy => &["humor", "misunderstanding", "social satire", "happy endings"],
            PT::Tragedy => &["fate", "downfall", "human flaws", "catharsis"],
            PT::Rebirth => &["transformation", "redemption", "second chances", "renewal"],
            PT::RomanceLoveStory => &["love", "relationship", "emotional growth", "connection"],
            PT::ComingOfAge => &["growth", "identity", "responsibility", "transition"],
            PT::Revenge => &["justice", "retribution", "morality", "consequences"],
            PT::Survival => &["resilience", "will to live", "resourcefulness", "endurance"],
            PT::DystopianRebellion => &["freedom", "resistance", "oppression", "hope"],
            PT::ChosenOne => &["destiny", "responsibility", "power", "sacrifice"],
            PT::EnemiesToLovers => &["prejudice", "understanding", "transformation", "love"],
            PT::MysteryInvestigation => &["truth", "justice", "puzzles", "revelation"],
            PT::FamilyDrama => &["relationships", "secrets", "loyalty", "forgiveness"],
            PT::TimeTravel => &["causality", "consequences", "free will", "paradox"],
            PT::EnvironmentalCrisis => &["responsibility", "sustainability", "future", "activism"],
            PT::MentalHealthJourney => &["healing", "acceptance", "support", "recovery"],
            PT::Exploration => &["adventure", "discovery", "curiosity", "unknown territories"],
            PT::TreasureHunt => &["adventure", "discovery", "greed vs purpose", "perseverance"],
            PT::ForbiddenLove => &["love", "sacrifice", "social barriers", "defiance"],
            _ => &["conflict", "growth", "resolution"],
        }
    }

    /// Plots recommended for every genre fragment the normalized genre
    /// contains, sorted by display name
    pub fn for_genre(genre: &str) -> Vec<PlotType> {
        let genre = normalize(genre);
        let mut recommended: Vec<PlotType> = Vec::new();

        for (fragment, plots) in GENRE_PLOTS {
            if genre.contains(fragment) {
                for plot in plots.iter() {
                    if !recommended.contains(plot) {
                        recommended.push(*plot);
                    }
                }
            }
        }

        if recommended.is_empty() {
            recommended.extend_from_slice(GENERAL_PLOTS);
        }

        recommended.sort_by_cached_key(|plot| plot.display_name());
        recommended
    }

    pub fn by_complexity(complexity: PlotComplexity) -> Vec<PlotType> {
        COMPLEXITY_TIER.members(complexity)
    }

    pub fn by_length(length: PlotLength) -> Vec<PlotType> {
        LENGTH_TIER.members(length)
    }

    /// Booker's seven basic plots
    pub fn classic() -> &'static [PlotType] {
        CLASSIC_PLOTS
    }

    pub fn modern() -> &'static [PlotType] {
        MODERN_PLOTS
    }
}

impl Taxonomy for PlotType {
    const KIND: &'static str = "plot type";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            PT::OvercomingTheMonster => "Overcoming the Monster",
            PT::RagsToRiches => "Rags to Riches",
            PT::TheQuest => "The Quest",
            PT::VoyageAndReturn => "Voyage and Return",
            PT::Comedy => "Comedy",
            PT::Tragedy => "Tragedy",
            PT::Rebirth => "Rebirth",
            PT::MysteryInvestigation => "Mystery Investigation",
            PT::RomanceLoveStory => "Romance Love Story",
            PT::ComingOfAge => "Coming of Age",
            PT::Revenge => "Revenge",
            PT::Redemption => "Redemption",
            PT::Sacrifice => "Sacrifice",
            PT::Survival => "Survival",
            PT::FishOutOfWater => "Fish Out of Water",
            PT::Conspiracy => "Conspiracy",
            PT::Chase => "Chase",
            PT::Escape => "Escape",
            PT::Heist => "Heist",
            PT::Kidnapping => "Kidnapping",
            PT::Assassination => "Assassination",
            PT::Espionage => "Espionage",
            PT::TickingClock => "Ticking Clock",
            PT::CatAndMouse => "Cat and Mouse",
            PT::FirstContact => "First Contact",
            PT::TimeTravel => "Time Travel",
            PT::DystopianRebellion => "Dystopian Rebellion",
            PT::TechnologicalUprising => "Technological Uprising",
            PT::SpaceExploration => "Space Exploration",
            PT::AlienInvasion => "Alien Invasion",
            PT::Colonization => "Colonization",
            PT::GeneticEnhancement => "Genetic Enhancement",
            PT::VirtualReality => "Virtual Reality",
            PT::ChosenOne => "The Chosen One",
            PT::MagicalAwakening => "Magical Awakening",
            PT::DarkLordRising => "Dark Lord Rising",
            PT::PortalWorld => "Portal to Another World",
            PT::AncientProphecy => "Ancient Prophecy",
            PT::LostKingdom => "Lost Kingdom",
            PT::MagicalArtifact => "Magical Artifact",
            PT::DragonSlaying => "Dragon Slaying",
            PT::FairyTaleRetelling => "Fairy Tale Retelling",
            PT::HauntedHouse => "Haunted House",
            PT::Possession => "Possession",
            PT::CursedObject => "Cursed Object",
            PT::MonsterHunt => "Monster Hunt",
            PT::ApocalypticHorror => "Apocalyptic Horror",
            PT::PsychologicalBreakdown => "Psychological Breakdown",
            PT::CultHorror => "Cult Horror",
            PT::BodyHorror => "Body Horror",
            PT::ViralOutbreak => "Viral Outbreak",
            PT::SupernaturalHorror => "Supernatural Horror",
            PT::EnemiesToLovers => "Enemies to Lovers",
            PT::ForbiddenLove => "Forbidden Love",
            PT::SecondChanceRomance => "Second Chance Romance",
            PT::FakeRelationship => "Fake Relationship",
            PT::MarriageOfConvenience => "Marriage of Convenience",
            PT::LoveTriangle => "Love Triangle",
            PT::StarCrossedLovers => "Star-Crossed Lovers",
            PT::WorkplaceRomance => "Workplace Romance",
            PT::HolidayRomance => "Holiday Romance",
            PT::LockedRoomMystery => "Locked Room Mystery",
            PT::SerialKiller => "Serial Killer",
            PT::ColdCase => "Cold Case",
            PT::WitnessProtection => "Witness Protection",
            PT::UndercoverOperation => "Undercover Operation",
            PT::CrimeFamily => "Crime Family",
            PT::PoliceProcedural => "Police Procedural",
            PT::AmateurDetective => "Amateur Detective",
            PT::LegalThriller => "Legal Thriller",
            PT::WarStory => "War Story",
            PT::PoliticalIntrigue => "Political Intrigue",
            PT::SocialRevolution => "Social Revolution",
            PT::PeriodRomance => "Period Romance",
            PT::ImmigrantStory => "Immigrant Story",
            PT::FamilySaga => "Family Saga",
            PT::CulturalClash => "Cultural Clash",
            PT::HistoricalMystery => "Historical Mystery",
            PT::RiseAndFall => "Rise and Fall",
            PT::CharacterStudy => "Character Study",
            PT::MidlifeCrisis => "Midlife Crisis",
            PT::FamilyDrama => "Family Drama",
            PT::RelationshipDrama => "Relationship Drama",
            PT::ExistentialJourney => "Existential Journey",
            PT::SocialCommentary => "Social Commentary",
            PT::GenerationalConflict => "Generational Conflict",
            PT::IdentityCrisis => "Identity Crisis",
            PT::MoralDilemma => "Moral Dilemma",
            PT::SchoolStory => "School Story",
            PT::FirstLove => "First Love",
            PT::TeenRebellion => "Teen Rebellion",
            PT::BullyingStory => "Bullying Story",
            PT::SportsCompetition => "Sports Competition",
            PT::TalentCompetition => "Talent Competition",
            PT::PeerPressure => "Peer Pressure",
            PT::FamilySecrets => "Family Secrets",
            PT::CollegeStory => "College Story",
            PT::TreasureHunt => "Treasure Hunt",
            PT::Exploration => "Exploration",
            PT::RescueMission => "Rescue Mission",
            PT::RaceAgainstTime => "Race Against Time",
            PT::SurvivalAdventure => "Survival Adventure",
            PT::MartialArts => "Martial Arts",
            PT::PirateAdventure => "Pirate Adventure",
            PT::JungleAdventure => "Jungle Adventure",
            PT::MountainClimbing => "Mountain Climbing",
            PT::CorporateThriller => "Corporate Thriller",
            PT::StartupStory => "Startup Story",
            PT::BusinessRivalry => "Business Rivalry",
            PT::WorkplaceDrama => "Workplace Drama",
            PT::FinancialCrisis => "Financial Crisis",
            PT::Whistleblower => "Whistleblower",
            PT::MergerAcquisition => "Merger & Acquisition",
            PT::EntrepreneurialJourney => "Entrepreneurial Journey",
            PT::ProfessionalComeback => "Professional Comeback",
            PT::EnvironmentalCrisis => "Environmental Crisis",
            PT::PandemicStory => "Pandemic Story",
            PT::SocialMediaDrama => "Social Media Drama",
            PT::TechnologyAddiction => "Technology Addiction",
            PT::MentalHealthJourney => "Mental Health Journey",
            PT::ImmigrationStory => "Immigration Story",
            PT::GenderIdentity => "Gender Identity",
            PT::RacialJustice => "Racial Justice",
            PT::EconomicInequality => "Economic Inequality",
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            PT::OvercomingTheMonster => {
                "A story where the protagonist must confront and defeat a great evil, whether literal or metaphorical, that threatens them, their community, or the world. The monster represents fear, oppression, or destructive forces that must be overcome through courage, skill, and determination."
            },
            PT::RagsToRiches => {
                "A transformative journey where the protagonist rises from humble or disadvantaged beginnings to achieve wealth, status, success, or fulfillment. This plot explores themes of ambition, perseverance, and the pursuit of the American Dream while examining what true success means."
            },
            PT::TheQuest => {
                "An epic journey where the protagonist embarks on a mission to find, retrieve, or accomplish something of great importance. The quest tests the hero's resolve, forces personal growth, and often involves overcoming multiple obstacles and challenges along the way."
            },
            PT::VoyageAndReturn => {
                "A story of exploration and discovery where the protagonist travels to a strange, unfamiliar world or situation, experiences adventures and learns important lessons, then returns home transformed by their experience with new wisdom or perspective."
            },
            PT::Comedy => {
                "A light-hearted narrative focused on humor, misunderstandings, and ultimately happy resolutions. Comedy plots often feature mistaken identities, romantic entanglements, social satire, and characters who overcome obstacles through wit and resilience rather than violence."
            },
            PT::Tragedy => {
                "A serious dramatic story that explores the downfall of the protagonist, typically due to a fatal flaw, poor decisions, or circumstances beyond their control. Tragedies examine themes of fate, mortality, and the human condition while evoking catharsis in the audience."
            },
            PT::Rebirth => {
                "A story of transformation and redemption where the protagonist undergoes a profound change, often moving from a negative state to a positive one. This plot explores themes of forgiveness, second chances, and the possibility of personal renewal and growth."
            },
            PT::MysteryInvestigation => {
                "A puzzle-driven narrative where the protagonist works to solve a crime, uncover a secret, or explain mysterious events. The plot focuses on gathering clues, interviewing suspects, and using deductive reasoning to reach the truth."
            },
            PT::RomanceLoveStory => {
                "A relationship-centered narrative that follows the development of romantic love between characters, exploring the emotional journey from attraction through obstacles to ultimate union or meaningful connection."
            },
            PT::ComingOfAge => {
                "A bildungsroman that follows a young protagonist's psychological and moral development from youth toward adulthood, exploring themes of identity, responsibility, independence, and the transition from innocence to experience."
            },
            PT::Revenge => {
                "A plot driven by the protagonist's desire for retribution against those who have wronged them or their loved ones. This narrative explores themes of justice, morality, and whether revenge truly brings satisfaction or perpetuates cycles of violence."
            },
            PT::Redemption => {
                "A story of moral transformation where a flawed or fallen protagonist seeks to atone for past mistakes and regain their honor, self-respect, or place in society through meaningful action and personal growth."
            },
            PT::Sacrifice => {
                "A narrative centered on characters making significant personal sacrifices for the greater good, their loved ones, or their principles. This plot explores themes of duty, honor, love, and the cost of doing what's right."
            },
            PT::Survival => {
                "A high-stakes story where characters face life-threatening situations and must use their resourcefulness, determination, and will to live to overcome extreme challenges, whether from nature, society, or other hostile forces."
            },
            PT::FishOutOfWater => {
                "A story where the protagonist finds themselves in an unfamiliar environment or situation, struggling to adapt and fit in while maintaining their identity. This plot often provides comedy and insight into different cultures or social groups."
            },
            PT::Conspiracy => {
                "A complex plot involving secret schemes by powerful groups or individuals, where the protagonist uncovers hidden truths and faces danger from those who want to keep their activities secret. Themes include power, corruption, and paranoia."
            },
            PT::Chase => {
                "A fast-paced narrative where the protagonist is pursued by antagonists, creating constant tension and momentum as they attempt to escape, evade capture, or reach safety while overcoming obstacles and making split-second decisions."
            },
            PT::Escape => {
                "A tense story focused on characters attempting to break free from captivity, oppressive situations, or dangerous environments. The plot emphasizes ingenuity, cooperation, and the determination to regain freedom."
            },
            PT::Heist => {
                "A carefully planned crime story involving the theft of valuable items, typically requiring elaborate schemes, specialized skills, and teamwork. These plots explore themes of greed, loyalty, and the thrill of outsmarting security."
            },
            PT::Kidnapping => {
                "A suspenseful plot involving the abduction of a character, exploring the psychological trauma of captivity and the desperate efforts of others to secure their safe return, often involving ransom demands or rescue attempts."
            },
            PT::Assassination => {
                "A plot centered around political or personal murder, involving either the planning and execution of an assassination or efforts to prevent one. These stories explore themes of power, ideology, and moral complexity."
            },
            PT::Espionage => {
                "A spy thriller involving intelligence gathering, double agents, and international intrigue. Characters navigate a world of deception and danger where trust is rare and betrayal is common, often serving larger political purposes."
            },
            PT::TickingClock => {
                "A high-tension plot where characters race against time to prevent a catastrophe, solve a problem, or complete a mission before a deadline. The constant time pressure creates urgency and escalates stakes throughout the story."
            },
            PT::CatAndMouse => {
                "A psychological thriller featuring an ongoing battle of wits between protagonist and antagonist, where each tries to outmaneuver the other through strategy, deception, and psychological manipulation."
            },
            PT::FirstContact => {
                "A story exploring humanity's initial encounter with alien intelligence, examining the scientific, social, political, and philosophical implications of discovering we are not alone in the universe."
            },
            PT::TimeTravel => {
                "A narrative involving characters moving through time, exploring the consequences of altering the past or knowledge of the future, while examining themes of causality, free will, and the nature of time itself."
            },
            PT::DystopianRebellion => {
                "A story set in an oppressive future society where protagonists fight against totalitarian control, surveillance, and social injustice, exploring themes of freedom, resistance, and the cost of defying authority."
            },
            PT::TechnologicalUprising => {
                "A plot where artificial intelligence, robots, or technology becomes hostile to humanity, exploring themes of technological dependence, artificial consciousness, and the relationship between creators and their creations."
            },
            PT::SpaceExploration => {
                "An adventure story focusing on the discovery and colonization of new worlds, the challenges of space travel, and encounters with alien environments, examining humanity's place in the cosmos."
            },
            PT::AlienInvasion => {
                "A conflict story where Earth faces attack from extraterrestrial forces, exploring themes of survival, unity in the face of existential threat, and what makes humanity worth defending."
            },
            PT::Colonization => {
                "A story about establishing human settlements on other worlds, dealing with the challenges of adaptation, resource management, and the impact of human expansion on alien environments."
            },
            PT::GeneticEnhancement => {
                "A narrative exploring the modification of human genetics, examining the ethical implications of creating 'perfect' humans and the social consequences of genetic inequality."
            },
            PT::VirtualReality => {
                "A story set partially or entirely in simulated worlds, exploring the boundaries between reality and artificiality, and the psychological effects of immersive digital environments."
            },
            PT::ChosenOne => {
                "A classic fantasy plot where an unlikely hero is prophesied or destined to save the world from great evil, exploring themes of destiny, responsibility, and growing into one's potential despite humble origins."
            },
            PT::MagicalAwakening => {
                "A story where the protagonist discovers they possess magical abilities, learning to control their powers while navigating a world they never knew existed, often facing those who would misuse such abilities."
            },
            PT::DarkLordRising => {
                "An epic fantasy where an ancient evil returns to threaten the world, requiring heroes to unite against overwhelming darkness, exploring themes of good versus evil and the cost of victory."
            },
            PT::PortalWorld => {
                "A fantasy adventure where characters travel between our world and a magical realm, often becoming involved in the conflicts and politics of the fantasy world while trying to return home."
            },
            PT::AncientProphecy => {
                "A plot driven by foretold events that must be fulfilled or prevented, exploring themes of fate versus free will and whether the future can be changed through human action."
            },
            PT::LostKingdom => {
                "A quest to restore a fallen realm to its former glory, often involving the rightful heir reclaiming their throne and rebuilding what was destroyed by war, betrayal, or dark magic."
            },
            PT::MagicalArtifact => {
                "A story centered around powerful magical objects that could either save or destroy the world, exploring themes of power, corruption, and the responsibility that comes with great ability."
            },
            PT::DragonSlaying => {
                "A classic fantasy adventure where heroes must defeat a great dragon, representing the ultimate test of courage, skill, and heroism while often protecting innocent people."
            },
            PT::FairyTaleRetelling => {
                "A modern reimagining of classic fairy tales, updating familiar stories with contemporary themes, perspectives, or twists while maintaining the core mythic elements that make them timeless."
            },
            PT::HauntedHouse => {
                "A supernatural horror story where characters confront ghostly presences and paranormal phenomena in a location with a dark history, exploring themes of unresolved trauma and the persistence of evil."
            },
            PT::Possession => {
                "A terrifying narrative where characters are taken over by malevolent supernatural entities, exploring themes of loss of control, spiritual warfare, and the battle for one's soul."
            },
            PT::CursedObject => {
                "A horror story where a seemingly innocent item brings misfortune, death, or supernatural torment to those who possess it, exploring themes of greed, karma, and ancient evil."
            },
            PT::MonsterHunt => {
                "An action-horror plot where characters track and attempt to destroy a supernatural creature that threatens humanity, combining elements of adventure with terrifying encounters."
            },
            PT::ApocalypticHorror => {
                "A story set during or after the end of the world, where survivors face both the collapse of civilization and supernatural threats, exploring themes of human nature under extreme stress."
            },
            PT::PsychologicalBreakdown => {
                "A psychological horror where the protagonist's mental state deteriorates, blurring the line between reality and delusion while exploring themes of madness, guilt, and the fragility of the human mind."
            },
            PT::CultHorror => {
                "A story involving dangerous religious or occult groups that threaten individuals or society, exploring themes of fanaticism, manipulation, and the power of collective belief."
            },
            PT::BodyHorror => {
                "A disturbing narrative focusing on the grotesque transformation or violation of the human body, exploring themes of identity, mortality, and the fear of losing physical integrity."
            },
            PT::ViralOutbreak => {
                "A horror story where a disease or contagion spreads rapidly, causing death or transformation, exploring themes of pandemic fear, social breakdown, and survival against biological threats."
            },
            PT::SupernaturalHorror => {
                "A frightening narrative featuring otherworldly entities, paranormal phenomena, or supernatural forces that threaten characters, exploring themes of the unknown, spiritual warfare, and forces beyond human understanding."
            },
            PT::EnemiesToLovers => {
                "A romantic plot where initial antagonism between characters gradually transforms into deep attraction and love, exploring themes of prejudice, misunderstanding, and the power of connection to overcome differences."
            },
            PT::ForbiddenLove => {
                "A romantic story where societal, familial, or circumstantial barriers prevent characters from being together, exploring themes of sacrifice, defiance, and the strength of true love against opposition."
            },
            PT::SecondChanceRomance => {
                "A story where former lovers reunite and must overcome past hurts, misunderstandings, or changed circumstances to rebuild their relationship, exploring themes of forgiveness and growth."
            },
            PT::FakeRelationship => {
                "A romantic plot where characters pretend to be in a relationship for practical reasons but gradually develop real feelings, exploring themes of authenticity, vulnerability, and unexpected love."
            },
            PT::MarriageOfConvenience => {
                "A story where characters marry for practical rather than romantic reasons but slowly discover genuine affection and compatibility, exploring themes of partnership and growing love."
            },
            PT::LoveTriangle => {
                "A romantic conflict where one character must choose between two potential partners, exploring themes of loyalty, compatibility, and the complexity of human attraction and emotion."
            },
            PT::StarCrossedLovers => {
                "A tragic romance where external forces or fate conspire to keep lovers apart, exploring themes of destiny, sacrifice, and love that transcends worldly concerns."
            },
            PT::WorkplaceRomance => {
                "A romantic story set in professional environments where characters navigate attraction while maintaining career focus, exploring themes of ambition, professional ethics, and work-life balance."
            },
            PT::HolidayRomance => {
                "A romance that blooms during vacation or holiday settings, often involving temporary escape from routine and the question of whether vacation love can survive return to reality."
            },
            PT::LockedRoomMystery => {
                "A classic mystery where a crime occurs in seemingly impossible circumstances, challenging the detective and reader to solve how the crime was committed when all logical explanations seem ruled out."
            },
            PT::SerialKiller => {
                "A crime story involving a murderer who follows a pattern, as law enforcement races to understand the killer's psychology and method before they strike again, exploring themes of evil and justice."
            },
            PT::ColdCase => {
                "A mystery involving long-unsolved crimes that are reopened with new evidence or perspective, exploring themes of persistence, justice delayed, and the lasting impact of unresolved trauma."
            },
            PT::WitnessProtection => {
                "A thriller where characters must hide their identity to avoid retribution for testifying against criminals, exploring themes of identity, safety, and the cost of doing the right thing."
            },
            PT::UndercoverOperation => {
                "A story where law enforcement or other agents infiltrate criminal organizations, exploring the psychological toll of living a double life and the moral complexity of deception for justice."
            },
            PT::CrimeFamily => {
                "A narrative focusing on organized crime dynasties, exploring themes of loyalty, family honor, corruption, and the conflict between personal relationships and criminal enterprise."
            },
            PT::PoliceProcedural => {
                "A methodical crime story that follows standard law enforcement procedures and teamwork to solve crimes, emphasizing realistic investigation techniques and institutional cooperation."
            },
            PT::AmateurDetective => {
                "A mystery where an ordinary person becomes involved in solving crimes, using intelligence and intuition rather than professional training, often uncovering corruption or hidden secrets."
            },
            PT::LegalThriller => {
                "A story combining legal proceedings with suspense elements, exploring the courtroom as a battlefield where truth, justice, and human lives hang in the balance."
            },
            PT::WarStory => {
                "A narrative set during armed conflict, exploring the human cost of war, the bonds between soldiers, the impact on civilians, and the moral complexity of violence and survival."
            },
            PT::PoliticalIntrigue => {
                "A story involving the machinations of power, featuring politicians, diplomats, and others who navigate complex political landscapes while pursuing their agendas and ideals."
            },
            PT::SocialRevolution => {
                "A narrative set during periods of major social change, exploring how individuals respond to and shape historical movements toward justice, equality, or political transformation."
            },
            PT::PeriodRomance => {
                "A love story set in a specific historical era, using the customs, constraints, and culture of the time to create unique romantic challenges and opportunities."
            },
            PT::ImmigrantStory => {
                "A narrative following characters who leave their homeland to build new lives elsewhere, exploring themes of identity, belonging, cultural adaptation, and the pursuit of opportunity."
            },
            PT::FamilySaga => {
                "A multi-generational story that follows families through decades or centuries, exploring how historical events shape family dynamics and how family legacies endure or transform."
            },
            PT::CulturalClash => {
                "A story exploring the meeting of different cultures, examining misunderstanding, conflict, adaptation, and the potential for mutual enrichment between different ways of life."
            },
            PT::HistoricalMystery => {
                "A mystery story set in the past, using period details and constraints to create unique investigative challenges while exploring historical events and social conditions."
            },
            PT::RiseAndFall => {
                "A biographical or dynastic story that follows the trajectory of powerful individuals or institutions from their ascent to their eventual decline, exploring themes of ambition and hubris."
            },
            PT::CharacterStudy => {
                "An introspective narrative that prioritizes deep exploration of character psychology, motivation, and development over external action, revealing the complexity of human nature and experience."
            },
            PT::MidlifeCrisis => {
                "A story focusing on characters facing the realization that their lives haven't met their expectations, exploring themes of regret, second chances, and the search for meaning in middle age."
            },
            PT::FamilyDrama => {
                "A complex narrative exploring family relationships, secrets, conflicts, and dynamics, often revealing how past events continue to influence present relationships and personal identity."
            },
            PT::RelationshipDrama => {
                "A story examining the complexities of human relationships, whether romantic, familial, or platonic, exploring themes of communication, commitment, betrayal, and emotional growth."
            },
            PT::ExistentialJourney => {
                "A philosophical narrative where characters grapple with questions of meaning, purpose, mortality, and their place in the universe, often leading to profound personal revelation or acceptance."
            },
            PT::SocialCommentary => {
                "A story that critiques social institutions, cultural norms, or political systems through character experiences, using narrative to explore and challenge contemporary issues and values."
            },
            PT::GenerationalConflict => {
                "A narrative exploring the tensions between different generations, examining how changing values, technology, and social conditions create misunderstanding and conflict within families or communities."
            },
            PT::IdentityCrisis => {
                "A story where characters struggle to understand who they are, often triggered by major life changes, cultural displacement, or the revelation of hidden truths about their past."
            },
            PT::MoralDilemma => {
                "A narrative that presents characters with difficult ethical choices, exploring the complexity of right and wrong and the consequences of moral decisions in ambiguous situations."
            },
            PT::SchoolStory => {
                "A narrative set in educational environments, exploring academic pressure, social hierarchies, friendships, and the unique challenges of navigating institutional life during formative years."
            },
            PT::FirstLove => {
                "A coming-of-age romance that explores the intensity and innocence of first romantic relationships, including the joy of discovery and the pain of heartbreak."
            },
            PT::TeenRebellion => {
                "A story where young protagonists challenge authority figures, social expectations, or institutional rules, exploring themes of independence, identity, and the desire for autonomy."
            },
            PT::BullyingStory => {
                "A narrative addressing the serious issue of peer harassment and its psychological impact, often following either victims finding strength or bullies learning empathy."
            },
            PT::SportsCompetition => {
                "A story centered around athletic achievement, team dynamics, and competition, exploring themes of dedication, teamwork, overcoming obstacles, and personal growth through physical challenge."
            },
            PT::TalentCompetition => {
                "A narrative focused on artistic or intellectual competitions, exploring themes of ambition, creativity, pressure to succeed, and the balance between competition and personal fulfillment."
            },
            PT::PeerPressure => {
                "A story examining the influence of social groups on individual decision-making, exploring themes of conformity, authenticity, and the courage to stand up for personal values."
            },
            PT::FamilySecrets => {
                "A young adult narrative where protagonists discover hidden truths about their family history, exploring themes of identity, trust, and how family mysteries shape personal understanding."
            },
            PT::CollegeStory => {
                "A narrative exploring the transition to higher education, including academic challenges, social pressures, independence, and the process of self-discovery in a new environment."
            },
            PT::TreasureHunt => {
                "An exciting quest to find valuable hidden objects, often involving maps, clues, and dangerous obstacles, exploring themes of greed, discovery, and the value of perseverance."
            },
            PT::Exploration => {
                "A story of discovering unknown territories, whether geographical, scientific, or cultural, emphasizing curiosity, courage, and the human drive to push beyond known boundaries."
            },
            PT::RescueMission => {
                "A high-stakes narrative where characters attempt to save others from danger, emphasizing heroism, sacrifice, and the lengths people will go to help those they care about."
            },
            PT::RaceAgainstTime => {
                "An adventure where characters must accomplish their goal before a deadline, creating constant tension and urgency while testing their resourcefulness and determination."
            },
            PT::SurvivalAdventure => {
                "A story where characters face natural disasters, hostile environments, or extreme conditions, emphasizing human resilience and the will to survive against overwhelming odds."
            },
            PT::MartialArts => {
                "An action-oriented narrative featuring combat skills, discipline, and philosophy, often exploring themes of honor, self-improvement, and the balance between violence and restraint."
            },
            PT::PirateAdventure => {
                "A swashbuckling story of maritime adventure, featuring themes of freedom, loyalty among outcasts, rebellion against authority, and the romantic appeal of life outside conventional society."
            },
            PT::JungleAdventure => {
                "An exploration story set in dense wilderness, emphasizing survival skills, encounters with wildlife, and the challenge of navigating unknown and dangerous terrain."
            },
            PT::MountainClimbing => {
                "An adventure focused on ascending dangerous peaks, exploring themes of perseverance, respect for nature, and pushing human physical and mental limits."
            },
            PT::CorporateThriller => {
                "A suspenseful story set in the business world, involving corporate espionage, hostile takeovers, or corruption, exploring themes of ambition, ethics, and the cost of success."
            },
            PT::StartupStory => {
                "A narrative following entrepreneurs building new companies, exploring themes of innovation, risk-taking, partnership dynamics, and the challenges of turning ideas into reality."
            },
            PT::BusinessRivalry => {
                "A competitive story between companies or business leaders, exploring themes of competition, market strategy, personal ambition, and the fine line between healthy rivalry and destructive conflict."
            },
            PT::WorkplaceDrama => {
                "A story exploring office politics, professional relationships, and career advancement, examining how personal and professional lives intersect and influence each other."
            },
            PT::FinancialCrisis => {
                "A narrative dealing with economic collapse or financial scandal, exploring the impact on individuals and society while examining themes of greed, responsibility, and recovery."
            },
            PT::Whistleblower => {
                "A story about someone exposing corporate or governmental wrongdoing, exploring themes of courage, conscience, and the personal cost of standing up for what's right."
            },
            PT::MergerAcquisition => {
                "A business story involving company consolidation, exploring themes of change, power dynamics, cultural integration, and the human impact of corporate decisions."
            },
            PT::EntrepreneurialJourney => {
                "A narrative following the complete arc of building a business from conception to success or failure, exploring themes of vision, persistence, and innovation."
            },
            PT::ProfessionalComeback => {
                "A story about recovering from career setbacks, exploring themes of resilience, reinvention, and the possibility of second chances in professional life."
            },
            PT::EnvironmentalCrisis => {
                "A story addressing climate change, pollution, or ecological disaster, exploring human impact on the environment and the urgent need for sustainable practices and environmental justice."
            },
            PT::PandemicStory => {
                "A narrative dealing with disease outbreaks and their social impact, exploring themes of public health, social responsibility, isolation, and community resilience during health crises."
            },
            PT::SocialMediaDrama => {
                "A contemporary story exploring the impact of digital communication on relationships, identity, and society, including issues like cyberbullying, privacy, and online versus offline identity."
            },
            PT::TechnologyAddiction => {
                "A narrative examining the psychological and social effects of excessive technology use, exploring themes of connection, isolation, and finding balance in a digital world."
            },
            PT::MentalHealthJourney => {
                "A sensitive story following characters dealing with psychological challenges, emphasizing recovery, support systems, and reducing stigma around mental health issues."
            },
            PT::ImmigrationStory => {
                "A contemporary narrative about people seeking new homes due to economic, political, or social pressures, exploring themes of belonging, identity, and the immigrant experience."
            },
            PT::GenderIdentity => {
                "A story exploring gender expression and identity, following characters as they navigate self-discovery, social acceptance, and the courage to live authentically."
            },
            PT::RacialJustice => {
                "A narrative addressing systemic racism and the fight for equality, exploring themes of prejudice, activism, allyship, and the ongoing struggle for civil rights."
            },
            PT::EconomicInequality => {
                "A story examining wealth disparity and its impact on individuals and communities, exploring themes of class conflict, opportunity, and social mobility."
            },
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &PLOT_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "complexity_level": self.complexity_level(),
            "target_length": self.target_length().label(),
            "typical_themes": self.typical_themes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;
    use crate::error::TaxonomyError;

    #[test]
    fn test_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<PlotType>();
        assert!(testing::assert_aliases_resolve::<PlotType>().is_empty());
    }

    #[test]
    fn test_fuzzy_resolution() {
        assert_eq!(PlotType::resolve("quest").unwrap(), PT::TheQuest);
        assert_eq!(PlotType::resolve("Enemies to Lovers").unwrap(), PT::EnemiesToLovers);
        assert_eq!(PlotType::resolve("dystopian").unwrap(), PT::DystopianRebellion);
        assert_eq!(PlotType::resolve("corporate").unwrap(), PT::CorporateThriller);
        assert_eq!(PlotType::resolve("space opera adventure").unwrap(), PT::SpaceExploration);
        assert_eq!(PlotType::resolve("a haunted manor").unwrap(), PT::HauntedHouse);
    }

    #[test]
    fn test_short_alias_matches_inside_words() {
        // "ai" sits inside "fairy" and is listed before "fairy_tale"
        assert_eq!(PlotType::resolve("the fairy tale").unwrap(), PT::TechnologicalUprising);
        assert_eq!(PlotType::resolve("fairy_tale").unwrap(), PT::FairyTaleRetelling);
    }

    #[test]
    fn test_garbage_fails() {
        assert!(matches!(
            PlotType::resolve("0000"),
            Err(TaxonomyError::UnknownValue { .. })
        ));
        assert!(matches!(PlotType::resolve(" "), Err(TaxonomyError::InvalidInput { .. })));
    }

    #[test]
    fn test_tiers() {
        assert_eq!(PT::Comedy.complexity_level(), PlotComplexity::Simple);
        assert_eq!(PT::TheQuest.complexity_level(), PlotComplexity::Moderate);
        assert_eq!(PT::Heist.complexity_level(), PlotComplexity::VeryComplex);
        assert_eq!(PT::FirstLove.target_length(), PlotLength::Short);
        assert_eq!(PT::AlienInvasion.target_length(), PlotLength::Epic);
        assert_eq!(PT::Heist.target_length(), PlotLength::Medium);
        assert_eq!(PT::Heist.typical_themes(), &["conflict", "growth", "resolution"]);
    }

    #[test]
    fn test_complexity_partition_is_complete() {
        let total: usize = PlotComplexity::ALL
            .iter()
            .map(|level| PlotType::by_complexity(*level).len())
            .sum();
        assert_eq!(total, PlotType::ALL.len());
        assert_eq!(PlotType::by_complexity(PlotComplexity::Simple).len(), 9);
    }

    #[test]
    fn test_for_genre() {
        let business = PlotType::for_genre("Business");
        assert_eq!(business.len(), 9);
        assert_eq!(business[0], PT::BusinessRivalry);

        // "dark fantasy romance" hits both the fantasy and romance rows
        let combined = PlotType::for_genre("dark fantasy romance");
        assert!(combined.contains(&PT::DragonSlaying));
        assert!(combined.contains(&PT::EnemiesToLovers));
        let names: Vec<String> = combined.iter().map(|plot| plot.display_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        assert_eq!(
            PlotType::for_genre("cookbook"),
            vec![
                PT::ComingOfAge,
                PT::MysteryInvestigation,
                PT::OvercomingTheMonster,
                PT::RomanceLoveStory,
                PT::Survival,
                PT::TheQuest,
            ]
        );
    }

    #[test]
    fn test_classic_and_modern() {
        assert_eq!(PlotType::classic().len(), 7);
        assert_eq!(PlotType::modern().len(), 12);
        assert_eq!(PT::ChosenOne.display_name(), "The Chosen One");
        assert_eq!(PT::MergerAcquisition.display_name(), "Merger & Acquisition");
    }
}
