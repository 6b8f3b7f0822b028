//! World types for setting and world-building

use super::levels::WorldComplexity;
use crate::engine::{taxonomy, title_case, CompoundRule, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Kind of world a story is set in
    pub enum WorldType {
        Realistic => "realistic",
        Contemporary => "contemporary",
        Historical => "historical",
        AlternateHistory => "alternate_history",
        LowFantasy => "low_fantasy",
        HighFantasy => "high_fantasy",
        EpicFantasy => "epic_fantasy",
        UrbanFantasy => "urban_fantasy",
        DarkFantasy => "dark_fantasy",
        Grimdark => "grimdark",
        SwordAndSorcery => "sword_and_sorcery",
        HeroicFantasy => "heroic_fantasy",
        MedievalFantasy => "medieval_fantasy",
        GothicFantasy => "gothic_fantasy",
        FairyTale => "fairy_tale",
        MythicFantasy => "mythic_fantasy",
        Arthurian => "arthurian",
        PortalFantasy => "portal_fantasy",
        SecondaryWorld => "secondary_world",
        MagicalRealism => "magical_realism",
        GaslampFantasy => "gaslamp_fantasy",
        FlintlockFantasy => "flintlock_fantasy",
        GunpowderFantasy => "gunpowder_fantasy",
        ArcaneFantasy => "arcane_fantasy",
        ScienceFiction => "science_fiction",
        HardScienceFiction => "hard_science_fiction",
        SoftScienceFiction => "soft_science_fiction",
        SpaceOpera => "space_opera",
        Cyberpunk => "cyberpunk",
        Steampunk => "steampunk",
        Dieselpunk => "dieselpunk",
        Biopunk => "biopunk",
        Clockpunk => "clockpunk",
        Dystopian => "dystopian",
        Utopian => "utopian",
        PostApocalyptic => "post_apocalyptic",
        PostNuclear => "post_nuclear",
        ZombieApocalypse => "zombie_apocalypse",
        ScienceFantasy => "science_fantasy",
        NewWeird => "new_weird",
        Slipstream => "slipstream",
        ParallelUniverse => "parallel_universe",
        Multiverse => "multiverse",
        Paranormal => "paranormal",
        Supernatural => "supernatural",
        GothicHorror => "gothic_horror",
        CosmicHorror => "cosmic_horror",
        Occult => "occult",
        Anthropomorphic => "anthropomorphic",
        Underwater => "underwater",
        Underground => "underground",
        FloatingIslands => "floating_islands",
        HollowEarth => "hollow_earth",
        GenerationShip => "generation_ship",
        TimeTravel => "time_travel",
        AlternateTimeline => "alternate_timeline",
        TimeLoop => "time_loop",
        WeirdWest => "weird_west",
        BiopunkFantasy => "biopunk_fantasy",
        ClimateFiction => "climate_fiction",
    }
}

use WorldType as W;

// Keyword order matters: earlier and shorter keywords shadow later ones
// ("modern" is checked before "modern_fantasy")
static WORLD_RESOLVER: Resolver<WorldType> = Resolver {
    steps: &[MatchStep::Exact, MatchStep::Compound, MatchStep::AliasKeyword],
    aliases: &[
        ("magic_realism", W::MagicalRealism),
        ("magical_realism", W::MagicalRealism),
        ("real_world", W::Realistic),
        ("realistic_fiction", W::Realistic),
        ("fantasy_world", W::HighFantasy),
        ("hard_sf", W::HardScienceFiction),
        ("hard_sci_fi", W::HardScienceFiction),
        ("soft_sf", W::SoftScienceFiction),
        ("soft_sci_fi", W::SoftScienceFiction),
        ("sci_fi", W::ScienceFiction),
        ("science_fiction", W::ScienceFiction),
        ("what_if", W::AlternateHistory),
        ("alt_history", W::AlternateHistory),
        ("space_opera", W::SpaceOpera),
        ("time_travel", W::TimeTravel),
        ("other_world", W::PortalFantasy),
        ("gas_lamp", W::GaslampFantasy),
        ("perfect_world", W::Utopian),
        ("end_times", W::PostApocalyptic),
        ("inner_earth", W::HollowEarth),
        ("center_earth", W::HollowEarth),
        ("talking_animals", W::Anthropomorphic),
        ("real", W::Realistic),
        ("modern", W::Contemporary),
        ("present_day", W::Contemporary),
        ("current", W::Contemporary),
        ("past", W::Historical),
        ("period", W::Historical),
        ("historical_fiction", W::Historical),
        ("alternate", W::AlternateHistory),
        ("subtle_magic", W::LowFantasy),
        ("hidden_magic", W::LowFantasy),
        ("low", W::LowFantasy),
        ("high", W::HighFantasy),
        ("secondary_world_fantasy", W::SecondaryWorld),
        ("epic", W::EpicFantasy),
        ("grand_fantasy", W::EpicFantasy),
        ("city_fantasy", W::UrbanFantasy),
        ("modern_fantasy", W::UrbanFantasy),
        ("dark", W::DarkFantasy),
        ("horror_fantasy", W::DarkFantasy),
        ("grim", W::Grimdark),
        ("sword", W::SwordAndSorcery),
        ("barbarian", W::SwordAndSorcery),
        ("heroic", W::HeroicFantasy),
        ("knight", W::MedievalFantasy),
        ("medieval", W::MedievalFantasy),
        ("gothic", W::GothicFantasy),
        ("fairy", W::FairyTale),
        ("folk_tale", W::FairyTale),
        ("myth", W::MythicFantasy),
        ("mythology", W::MythicFantasy),
        ("arthur", W::Arthurian),
        ("camelot", W::Arthurian),
        ("portal", W::PortalFantasy),
        ("victorian_fantasy", W::GaslampFantasy),
        ("musket", W::FlintlockFantasy),
        ("gunpowder", W::GunpowderFantasy),
        ("arcane", W::ArcaneFantasy),
        ("magitech", W::ArcaneFantasy),
        ("future", W::ScienceFiction),
        ("galactic", W::SpaceOpera),
        ("cyber", W::Cyberpunk),
        ("steam", W::Steampunk),
        ("victorian", W::Steampunk),
        ("diesel", W::Dieselpunk),
        ("bio", W::Biopunk),
        ("genetic", W::Biopunk),
        ("clock", W::Clockpunk),
        ("clockwork", W::Clockpunk),
        ("oppressive", W::Dystopian),
        ("totalitarian", W::Dystopian),
        ("apocalypse", W::PostApocalyptic),
        ("nuclear", W::PostNuclear),
        ("atomic", W::PostNuclear),
        ("zombie", W::ZombieApocalypse),
        ("undead", W::ZombieApocalypse),
        ("sci_fantasy", W::ScienceFantasy),
        ("weird", W::NewWeird),
        ("experimental", W::NewWeird),
        ("slip", W::Slipstream),
        ("parallel", W::ParallelUniverse),
        ("alternate_reality", W::ParallelUniverse),
        ("multi", W::Multiverse),
        ("many_worlds", W::Multiverse),
        ("ghost", W::Paranormal),
        ("vampire", W::Paranormal),
        ("psychic", W::Paranormal),
        ("spirit", W::Supernatural),
        ("otherworldly", W::Supernatural),
        ("lovecraft", W::CosmicHorror),
        ("cosmic", W::CosmicHorror),
        ("eldritch", W::CosmicHorror),
        ("secret", W::Occult),
        ("mystical", W::Occult),
        ("animal", W::Anthropomorphic),
        ("furry", W::Anthropomorphic),
        ("ocean", W::Underwater),
        ("aquatic", W::Underwater),
        ("sea", W::Underwater),
        ("cave", W::Underground),
        ("subterranean", W::Underground),
        ("sky", W::FloatingIslands),
        ("aerial", W::FloatingIslands),
        ("flying", W::FloatingIslands),
        ("spaceship", W::GenerationShip),
        ("ship", W::GenerationShip),
        ("time", W::TimeTravel),
        ("temporal", W::TimeTravel),
        ("loop", W::TimeLoop),
        ("repeat", W::TimeLoop),
        ("western", W::WeirdWest),
        ("cowboy", W::WeirdWest),
        ("frontier", W::WeirdWest),
        ("biological", W::BiopunkFantasy),
        ("organic", W::BiopunkFantasy),
        ("climate", W::ClimateFiction),
        ("environmental", W::ClimateFiction),
        ("space", W::SpaceOpera),
    ],
    compounds: &[CompoundRule {
        groups: &[&["magic"], &["realism"]],
        value: W::MagicalRealism,
    }],
    ignore_suffix: None,
};

static COMPLEXITY_TIER: Tier<WorldType, WorldComplexity> = Tier {
    levels: &[
        (WorldComplexity::Low, &[W::Realistic, W::Contemporary, W::FairyTale]),
        (
            WorldComplexity::VeryHigh,
            &[W::EpicFantasy, W::SecondaryWorld, W::SpaceOpera, W::Multiverse],
        ),
        (
            WorldComplexity::High,
            &[
                W::BiopunkFantasy,
                W::HighFantasy,
                W::HardScienceFiction,
                W::SoftScienceFiction,
                W::ScienceFiction,
                W::GenerationShip,
                W::DarkFantasy,
                W::Grimdark,
                W::PortalFantasy,
                W::ArcaneFantasy,
                W::Cyberpunk,
                W::Steampunk,
                W::Dieselpunk,
                W::Biopunk,
                W::Clockpunk,
                W::ScienceFantasy,
                W::NewWeird,
                W::ParallelUniverse,
                W::CosmicHorror,
                W::Underwater,
                W::Underground,
                W::FloatingIslands,
                W::HollowEarth,
            ],
        ),
    ],
    default: WorldComplexity::Medium,
};

const FANTASY: &[WorldType] = &[
    W::LowFantasy,
    W::HighFantasy,
    W::EpicFantasy,
    W::UrbanFantasy,
    W::DarkFantasy,
    W::Grimdark,
    W::SwordAndSorcery,
    W::HeroicFantasy,
    W::MedievalFantasy,
    W::GothicFantasy,
    W::FairyTale,
    W::MythicFantasy,
    W::Arthurian,
    W::PortalFantasy,
    W::SecondaryWorld,
    W::MagicalRealism,
    W::GaslampFantasy,
    W::FlintlockFantasy,
    W::GunpowderFantasy,
    W::ArcaneFantasy,
    W::WeirdWest,
    W::BiopunkFantasy,
];

const SCIENCE_FICTION: &[WorldType] = &[
    W::ScienceFiction,
    W::HardScienceFiction,
    W::SoftScienceFiction,
    W::SpaceOpera,
    W::Cyberpunk,
    W::Steampunk,
    W::Dieselpunk,
    W::Biopunk,
    W::Clockpunk,
    W::ScienceFantasy,
];

const REALISTIC: &[WorldType] = &[
    W::Realistic,
    W::Contemporary,
    W::Historical,
    W::AlternateHistory,
    W::ClimateFiction,
];

impl WorldType {
    pub fn world_building_complexity(self) -> WorldComplexity {
        COMPLEXITY_TIER.classify(self)
    }

    pub fn common_themes(self) -> &'static [&'static str] {
        match self {
            W::Realistic => &["human relationships", "personal growth", "social issues", "everyday struggles"],
            W::Contemporary => &["modern life", "technology impact", "urban alienation", "current events"],
            W::Historical => &["period authenticity", "social change", "cultural tradition", "historical significance"],
            W::AlternateHistory => &["consequences of change", "what if scenarios", "historical inevitability", "butterfly effects"],
            W::LowFantasy => &["hidden wonders", "magic in mundane", "belief vs skepticism", "wonder and mystery"],
            W::HighFantasy => &["good vs evil", "heroic journey", "power and responsibility", "coming of age"],
            W::EpicFantasy => &["destiny and prophecy", "sacrifice for greater good", "power corruption", "world-changing events"],
            W::UrbanFantasy => &["hidden world", "ancient vs modern", "power in shadows", "dual identity"],
            W::DarkFantasy => &["corruption of power", "moral ambiguity", "horror of the unknown", "psychological terror"],
            W::Grimdark => &["moral complexity", "war's true cost", "power corruption", "survival ethics"],
            W::SwordAndSorcery => &["personal adventure", "individual heroism", "treasure and glory", "survival"],
            W::HeroicFantasy => &["noble heroism", "clear morality", "triumph of good", "chivalric ideals"],
            W::MedievalFantasy => &["honor and duty", "feudal loyalty", "courtly love", "social hierarchy"],
            W::GothicFantasy => &["decay and corruption", "past haunting present", "psychological horror", "atmosphere of dread"],
            W::FairyTale => &["moral lessons", "transformation", "justice prevails", "magic and wonder"],
            W::MythicFantasy => &["archetypal stories", "cultural wisdom", "eternal themes", "spiritual journey"],
            W::Arthurian => &["chivalric code", "noble sacrifice", "quest for perfection", "tragic idealism"],
            W::PortalFantasy => &["fish out of water", "personal growth", "world comparison", "homecoming"],
            W::SecondaryWorld => &["cultural exploration", "world-building showcase", "epic scope", "complete immersion"],
            W::MagicalRealism => &["accepted impossibility", "cultural identity", "social commentary", "symbolic truth"],
            W::GaslampFantasy => &["progress vs tradition", "industrial change", "Victorian values", "scientific wonder"],
            W::FlintlockFantasy => &["technological change", "military evolution", "exploration age", "cultural contact"],
            W::GunpowderFantasy => &["military innovation", "tactical revolution", "siege warfare", "power balance"],
            W::ArcaneFantasy => &["knowledge and power", "science vs magic", "technological fusion", "intellectual pursuit"],
            W::ScienceFiction => &["technological impact", "future possibilities", "human adaptation", "scientific ethics"],
            W::HardScienceFiction => &["scientific accuracy", "technological plausibility", "problem solving", "rational thinking"],
            W::SoftScienceFiction => &["human nature", "social change", "relationship focus", "emotional truth"],
            W::SpaceOpera => &["galactic scope", "heroic adventure", "alien contact", "cosmic destiny"],
            W::Cyberpunk => &["corporate control", "technology alienation", "individual vs system", "digital identity"],
            W::Steampunk => &["Victorian optimism", "mechanical wonder", "class conflict", "industrial progress"],
            W::Dieselpunk => &["war and peace", "technological power", "social upheaval", "industrial might"],
            W::Biopunk => &["genetic identity", "bioethics", "human enhancement", "life manipulation"],
            W::Clockpunk => &["precision and craft", "mechanical beauty", "Renaissance humanism", "artistic technology"],
            W::Dystopian => &["oppression vs freedom", "individual resistance", "social control", "warning message"],
            W::Utopian => &["perfect society", "human potential", "social harmony", "hidden costs"],
            W::PostApocalyptic => &["survival", "rebuilding civilization", "human resilience", "environmental message"],
            W::PostNuclear => &["atomic age fears", "radiation horror", "cold war anxiety", "technological hubris"],
            W::ZombieApocalypse => &["social breakdown", "group dynamics", "survival ethics", "human nature"],
            W::ScienceFantasy => &["genre blending", "magic and technology", "cosmic adventure", "unlimited possibility"],
            W::NewWeird => &["genre subversion", "experimental narrative", "strange beauty", "reality questioning"],
            W::Slipstream => &["reality fluidity", "subtle strangeness", "genre boundaries", "perception questions"],
            W::ParallelUniverse => &["infinite possibilities", "choice consequences", "reality variants", "identity questions"],
            W::Multiverse => &["cosmic scope", "infinite realities", "universal connections", "existence meaning"],
            W::Paranormal => &["hidden truth", "supernatural mystery", "psychic abilities", "otherworldly contact"],
            W::Supernatural => &["spiritual realm", "afterlife mystery", "ghostly presence", "mystical experience"],
            W::GothicHorror => &["psychological terror", "atmospheric dread", "past sins", "decay and corruption"],
            W::CosmicHorror => &["human insignificance", "unknowable universe", "existential dread", "cosmic indifference"],
            W::Occult => &["hidden knowledge", "secret power", "mystical tradition", "esoteric wisdom"],
            W::Anthropomorphic => &["social allegory", "cultural commentary", "human nature", "behavioral satire"],
            W::Underwater => &["environmental exploration", "alien beauty", "pressure adaptation", "oceanic mystery"],
            W::Underground => &["hidden civilization", "earth mysteries", "claustrophobia", "buried secrets"],
            W::FloatingIslands => &["freedom and height", "aerial beauty", "weather mastery", "sky kingdoms"],
            W::HollowEarth => &["inner world mystery", "prehistoric wonder", "exploration spirit", "earth secrets"],
            W::GenerationShip => &["journey vs destination", "closed society", "generational change", "cosmic voyage"],
            W::TimeTravel => &["causality", "temporal paradox", "historical change", "time responsibility"],
            W::AlternateTimeline => &["historical what-if", "change consequences", "timeline comparison", "alternate development"],
            W::TimeLoop => &["repetition and change", "learning cycle", "temporal prison", "incremental progress"],
            W::WeirdWest => &["frontier justice", "supernatural mystery", "cultural clash", "lawless freedom"],
            W::BiopunkFantasy => &["evolution and adaptation", "natural vs artificial", "biological harmony", "organic growth"],
            W::ClimateFiction => &["environmental responsibility", "survival adaptation", "ecological balance", "future consequences"],
        }
    }

    pub fn fantasy() -> &'static [WorldType] {
        FANTASY
    }

    pub fn science_fiction() -> &'static [WorldType] {
        SCIENCE_FICTION
    }

    pub fn realistic() -> &'static [WorldType] {
        REALISTIC
    }

    /// High and very high world-building complexity
    pub fn high_complexity() -> Vec<WorldType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|world| world.world_building_complexity() >= WorldComplexity::High)
            .collect()
    }

    /// World types with a common theme containing `theme`, case-insensitive
    pub fn by_theme(theme: &str) -> Vec<WorldType> {
        let theme = theme.trim().to_lowercase();
        if theme.is_empty() {
            return Vec::new();
        }
        Self::ALL
            .iter()
            .copied()
            .filter(|world| {
                world
                    .common_themes()
                    .iter()
                    .any(|common| common.to_lowercase().contains(&theme))
            })
            .collect()
    }

    pub fn is_fantasy(self) -> bool {
        FANTASY.contains(&self)
    }

    pub fn is_science_fiction(self) -> bool {
        SCIENCE_FICTION.contains(&self)
    }
}

impl Taxonomy for WorldType {
    const KIND: &'static str = "world type";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            W::Realistic => "Realistic World",
            W::Grimdark => "Grimdark Fantasy",
            W::Arthurian => "Arthurian Fantasy",
            W::PostApocalyptic => "Post-Apocalyptic",
            W::PostNuclear => "Post-Nuclear",
            other => return title_case(other.as_str()),
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            W::Realistic => "A world that mirrors our reality with no supernatural or fantastical elements. Stories focus on human relationships, contemporary issues, and realistic scenarios within recognizable settings.",
            W::Contemporary => "Modern-day settings in the real world, often featuring current technology, social issues, and cultural contexts that readers can immediately relate to.",
            W::Historical => "Set in past time periods without fantasy elements, requiring extensive research into historical accuracy, period-appropriate technology, customs, and social structures.",
            W::AlternateHistory => "Our world with key historical events changed, exploring 'what if' scenarios where different outcomes led to alternate timelines and societies.",
            W::LowFantasy => "The real world with subtle magical or supernatural elements that exist on the margins, often hidden from most people or dismissed as myth.",
            W::HighFantasy => "Completely fictional worlds with their own geography, cultures, magic systems, and often non-human races. Magic is prevalent and accepted as part of reality.",
            W::EpicFantasy => "Grand-scale fantasy featuring world-threatening conflicts, chosen heroes, ancient prophecies, and sweeping narratives that span continents and affect entire civilizations.",
            W::UrbanFantasy => "Modern urban settings where magic and supernatural creatures exist hidden within contemporary society, blending the mundane with the mystical.",
            W::DarkFantasy => "Fantasy worlds with horror elements, moral ambiguity, and often disturbing or frightening supernatural elements that create an atmosphere of dread.",
            W::Grimdark => "Morally complex fantasy worlds where heroes are flawed, violence has consequences, and happy endings are rare. Focuses on realistic human nature in fantastic settings.",
            W::SwordAndSorcery => "Action-oriented fantasy focusing on individual warriors and adventurers, emphasizing combat, magic, and personal conflicts over grand world-spanning plots.",
            W::HeroicFantasy => "Traditional adventure fantasy featuring noble heroes, clear good vs. evil conflicts, and quests to save kingdoms or worlds from dark forces.",
            W::MedievalFantasy => "Fantasy worlds based on medieval European societies, featuring knights, castles, feudalism, and period-appropriate technology enhanced with magical elements.",
            W::GothicFantasy => "Dark, atmospheric fantasy with elements of horror, often set in decaying castles, haunted landscapes, and featuring brooding atmospheres and psychological elements.",
            W::FairyTale => "Worlds based on traditional folk tales and fairy stories, often featuring magic, talking animals, enchanted forests, and moral lessons.",
            W::MythicFantasy => "Fantasy based on real-world mythologies, reimagining ancient gods, heroes, and legendary creatures in new narratives while respecting source traditions.",
            W::Arthurian => "Fantasy inspired by Arthurian legend, featuring knights of the Round Table, the quest for the Holy Grail, and themes of chivalry and honor.",
            W::PortalFantasy => "Stories where characters travel from our world to a fantasy realm through magical portals, doors, or other transitions between realities.",
            W::SecondaryWorld => "Completely separate fantasy realms with no connection to Earth, featuring unique geography, cultures, magic systems, and often non-human species.",
            W::MagicalRealism => "Realistic worlds where magical events are treated as natural and accepted parts of everyday life, often used to explore deeper truths about reality.",
            W::GaslampFantasy => "Fantasy set in Victorian-era inspired worlds, featuring gas lighting, industrial revolution technology, and often combining scientific advancement with magic.",
            W::FlintlockFantasy => "Fantasy worlds with early firearms technology, typically Renaissance or colonial era inspired, where magic coexists with gunpowder weapons.",
            W::GunpowderFantasy => "Fantasy incorporating various forms of gunpowder weapons and military technology, exploring how magic and firearms interact in warfare and society.",
            W::ArcaneFantasy => "Worlds where magic and science blend together, creating new disciplines like magical engineering or alchemical technology that serves both mystical and practical purposes.",
            W::ScienceFiction => "Futuristic or alternate reality worlds featuring advanced technology, space travel, artificial intelligence, and scientific concepts as central elements.",
            W::HardScienceFiction => "Science fiction that emphasizes scientific accuracy and technical details, grounding fantastical elements in real or plausible scientific principles.",
            W::SoftScienceFiction => "Science fiction focused more on social sciences and human relationships, using technology as a backdrop rather than a central technical focus.",
            W::SpaceOpera => "Galaxy-spanning science fiction adventures featuring interstellar travel, alien civilizations, space battles, and epic conflicts across multiple worlds.",
            W::Cyberpunk => "High-tech, low-life futures featuring advanced computer technology, virtual reality, corporate dominance, and social decay in urban environments.",
            W::Steampunk => "Victorian-era alternate history where steam power has advanced to create fantastic machines, airships, and mechanical devices in a retro-futuristic setting.",
            W::Dieselpunk => "1920s-1940s inspired alternate history featuring diesel technology, art deco aesthetics, and the social tensions of the interwar and World War II periods.",
            W::Biopunk => "Science fiction focused on biotechnology, genetic engineering, and biological sciences, exploring the implications of advanced life sciences on society.",
            W::Clockpunk => "Renaissance-era alternate history featuring elaborate clockwork mechanisms and early mechanical technology as the basis for fantastic inventions.",
            W::Dystopian => "Oppressive future societies where individual freedom is suppressed, often serving as warnings about political and social trends.",
            W::Utopian => "Idealized future societies that have solved major human problems, though often revealing hidden costs or contradictions in apparent perfection.",
            W::PostApocalyptic => "Worlds after the collapse of modern civilization, focusing on survival, rebuilding, and the human condition in the aftermath of catastrophe.",
            W::PostNuclear => "Specific post-apocalyptic scenarios dealing with the aftermath of nuclear war, radiation, and the struggle to rebuild from atomic devastation.",
            W::ZombieApocalypse => "Worlds overrun by undead creatures, focusing on survival horror, the breakdown of social order, and human nature under extreme stress.",
            W::ScienceFantasy => "Hybrid genre combining science fiction technology with fantasy magic, often set in space or futuristic settings with mystical elements.",
            W::NewWeird => "Experimental fiction that subverts traditional genre expectations, combining elements of fantasy, horror, and science fiction in innovative ways.",
            W::Slipstream => "Genre-blending fiction that exists between categories, often featuring surreal or slightly fantastic elements in otherwise realistic settings.",
            W::ParallelUniverse => "Stories involving alternate versions of our reality where different choices or events have led to dramatically different worlds.",
            W::Multiverse => "Narratives spanning multiple interconnected realities, exploring infinite possibilities and the connections between different versions of existence.",
            W::Paranormal => "Modern world settings featuring supernatural elements like ghosts, vampires, werewolves, and psychic phenomena as part of hidden reality.",
            W::Supernatural => "Worlds focused on beings and forces beyond natural explanation, including spirits, demons, angels, and other entities from beyond the physical realm.",
            W::GothicHorror => "Dark, atmospheric horror featuring ancient curses, haunted locations, psychological terror, and often Victorian or medieval settings.",
            W::CosmicHorror => "Horror emphasizing humanity's insignificance in the face of vast, incomprehensible cosmic forces and alien intelligences beyond human understanding.",
            W::Occult => "Worlds involving hidden supernatural knowledge, secret societies, magical practices, and esoteric wisdom accessible only to initiates.",
            W::Anthropomorphic => "Worlds populated by animal characters with human characteristics, intelligence, and society, often used for allegory or social commentary.",
            W::Underwater => "Civilizations and stories set in aquatic environments, featuring underwater cities, marine life, and unique challenges of aquatic existence.",
            W::Underground => "Subterranean worlds featuring cave civilizations, underground cities, and the unique ecosystem and challenges of life beneath the surface.",
            W::FloatingIslands => "Sky-based civilizations living on floating landmasses, featuring aerial transportation, unique weather phenomena, and height-based social structures.",
            W::HollowEarth => "Worlds set inside the Earth featuring inner civilizations, unique physics, and often prehistoric or fantastical creatures in underground realms.",
            W::GenerationShip => "Spacecraft that serve as entire worlds for populations traveling between stars over generations, exploring closed societies and long-term survival.",
            W::TimeTravel => "Worlds where time manipulation is possible, exploring paradoxes, alternate timelines, and the consequences of changing past events.",
            W::AlternateTimeline => "Realities where history diverged at specific points, creating different technological, social, or political developments from our timeline.",
            W::TimeLoop => "Scenarios where characters experience repeating time periods, exploring themes of destiny, change, and the nature of causality.",
            W::WeirdWest => "Western frontier settings with supernatural or fantastical elements, combining cowboy culture with magic, monsters, or otherworldly phenomena.",
            W::BiopunkFantasy => "Fantasy worlds where magic is expressed through biological manipulation, living architecture, and organic technology rather than traditional spellcasting.",
            W::ClimateFiction => "Contemporary or near-future worlds dealing with climate change and environmental catastrophe, exploring humanity's relationship with nature and the consequences of ecological destruction.",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &WORLD_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "world_building_complexity": self.world_building_complexity(),
            "common_themes": self.common_themes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;

    #[test]
    fn test_keys_resolve() {
        testing::assert_keys_resolve::<WorldType>();
    }

    #[test]
    fn test_shadowed_keywords_are_pinned() {
        let shadowed = testing::assert_aliases_resolve::<WorldType>();
        assert_eq!(shadowed, vec!["modern_fantasy", "alternate_reality", "biological"]);

        assert_eq!(WorldType::resolve("modern fantasy").unwrap(), W::Contemporary);
        assert_eq!(WorldType::resolve("alternate reality").unwrap(), W::Realistic);
        assert_eq!(WorldType::resolve("biological").unwrap(), W::Biopunk);
    }

    #[test]
    fn test_compound_precedes_keywords() {
        // "real" would otherwise match first
        assert_eq!(WorldType::resolve("realism with magic").unwrap(), W::MagicalRealism);
        assert_eq!(WorldType::resolve("Magic Realism").unwrap(), W::MagicalRealism);
    }

    #[test]
    fn test_keyword_matching() {
        assert_eq!(WorldType::resolve("hard sci-fi").unwrap(), W::HardScienceFiction);
        assert_eq!(WorldType::resolve("a Lovecraftian nightmare").unwrap(), W::CosmicHorror);
        assert_eq!(WorldType::resolve("cowboys and aliens").unwrap(), W::WeirdWest);
        assert!(WorldType::resolve("###").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(W::Realistic.display_name(), "Realistic World");
        assert_eq!(W::PostApocalyptic.display_name(), "Post-Apocalyptic");
        assert_eq!(W::SwordAndSorcery.display_name(), "Sword And Sorcery");
    }

    #[test]
    fn test_complexity_and_families() {
        assert_eq!(W::FairyTale.world_building_complexity(), WorldComplexity::Low);
        assert_eq!(W::Multiverse.world_building_complexity(), WorldComplexity::VeryHigh);
        assert_eq!(W::Historical.world_building_complexity(), WorldComplexity::Medium);

        let high = WorldType::high_complexity();
        assert_eq!(high.len(), 27);
        assert!(high.contains(&W::EpicFantasy));

        assert_eq!(WorldType::fantasy().len(), 22);
        assert_eq!(WorldType::science_fiction().len(), 10);
        assert_eq!(WorldType::realistic().len(), 5);
        assert!(W::WeirdWest.is_fantasy());
        assert!(!W::WeirdWest.is_science_fiction());
    }

    #[test]
    fn test_by_theme() {
        let survival = WorldType::by_theme("Survival");
        assert!(survival.contains(&W::PostApocalyptic));
        assert!(survival.contains(&W::SwordAndSorcery));
        assert!(WorldType::by_theme("  ").is_empty());
    }
}
