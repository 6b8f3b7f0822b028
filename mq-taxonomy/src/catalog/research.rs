//! Research types a book may need before drafting

use super::levels::Difficulty;
use crate::engine::{normalize, taxonomy, title_case, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Kind of background research
    pub enum ResearchType {
        Historical => "historical",
        Scientific => "scientific",
        Technical => "technical",
        Cultural => "cultural",
        Geographical => "geographical",
        Linguistic => "linguistic",
        Professional => "professional",
        Legal => "legal",
        Medical => "medical",
        Psychological => "psychological",
        Sociological => "sociological",
        Economic => "economic",
        Political => "political",
        Military => "military",
        Religious => "religious",
        Artistic => "artistic",
        Architectural => "architectural",
        Culinary => "culinary",
        Fashion => "fashion",
        Sports => "sports",
        Biographical => "biographical",
        Mythological => "mythological",
        Folklore => "folklore",
        Technological => "technological",
        Environmental => "environmental",
        Educational => "educational",
        Philosophical => "philosophical",
        Supernatural => "supernatural",
        CrimeInvestigation => "crime_investigation",
        Business => "business",
        Travel => "travel",
        Music => "music",
        Literature => "literature",
        Entertainment => "entertainment",
        Media => "media",
    }
}

use ResearchType as R;

static RESEARCH_RESOLVER: Resolver<ResearchType> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("history", R::Historical),
        ("science", R::Scientific),
        ("tech", R::Technical),
        ("culture", R::Cultural),
        ("geography", R::Geographical),
        ("language", R::Linguistic),
        ("profession", R::Professional),
        ("law", R::Legal),
        ("medicine", R::Medical),
        ("psychology", R::Psychological),
        ("sociology", R::Sociological),
        ("economics", R::Economic),
        ("politics", R::Political),
        ("military", R::Military),
        ("religion", R::Religious),
        ("art", R::Artistic),
        ("architecture", R::Architectural),
        ("cooking", R::Culinary),
        ("food", R::Culinary),
        ("style", R::Fashion),
        ("athletics", R::Sports),
        ("biography", R::Biographical),
        ("myth", R::Mythological),
        ("legend", R::Folklore),
        ("technology", R::Technological),
        ("environment", R::Environmental),
        ("education", R::Educational),
        ("philosophy", R::Philosophical),
        ("paranormal", R::Supernatural),
        ("magic", R::Supernatural),
        ("detective", R::CrimeInvestigation),
        ("forensics", R::CrimeInvestigation),
        ("business", R::Business),
        ("journey", R::Travel),
        ("music", R::Music),
        ("books", R::Literature),
        ("entertainment", R::Entertainment),
        ("journalism", R::Media),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static COMPLEXITY_TIER: Tier<ResearchType, Difficulty> = Tier {
    levels: &[
        (
            Difficulty::Easy,
            &[R::Travel, R::Culinary, R::Sports, R::Entertainment, R::Fashion, R::Music, R::Artistic],
        ),
        (
            Difficulty::Medium,
            &[
                R::Cultural,
                R::Geographical,
                R::Historical,
                R::Biographical,
                R::Folklore,
                R::Business,
                R::Educational,
                R::Literature,
            ],
        ),
        (
            Difficulty::Hard,
            &[
                R::Scientific,
                R::Technical,
                R::Professional,
                R::Psychological,
                R::Sociological,
                R::Economic,
                R::Political,
                R::Religious,
                R::Philosophical,
                R::Environmental,
                R::Media,
            ],
        ),
    ],
    default: Difficulty::VeryHard,
};

// Geographical is easy and media medium for an AI, unlike the human scale
static AI_DIFFICULTY_TIER: Tier<ResearchType, Difficulty> = Tier {
    levels: &[
        (
            Difficulty::Easy,
            &[
                R::Travel,
                R::Culinary,
                R::Sports,
                R::Entertainment,
                R::Fashion,
                R::Music,
                R::Geographical,
                R::Artistic,
            ],
        ),
        (
            Difficulty::Medium,
            &[
                R::Cultural,
                R::Historical,
                R::Biographical,
                R::Folklore,
                R::Business,
                R::Educational,
                R::Literature,
                R::Media,
            ],
        ),
        (
            Difficulty::Hard,
            &[
                R::Scientific,
                R::Technical,
                R::Professional,
                R::Psychological,
                R::Sociological,
                R::Economic,
                R::Political,
                R::Religious,
                R::Philosophical,
                R::Environmental,
            ],
        ),
    ],
    default: Difficulty::VeryHard,
};

const GENERAL_SOURCES: &[&str] = &["general sources", "online databases", "expert interviews"];

const GENRE_RESEARCH: &[(&str, &[ResearchType])] = &[
    (
        "fantasy",
        &[
            R::Mythological,
            R::Folklore,
            R::Historical,
            R::Linguistic,
            R::Cultural,
            R::Military,
            R::Supernatural,
            R::Geographical,
        ],
    ),
    (
        "science_fiction",
        &[
            R::Scientific,
            R::Technological,
            R::Environmental,
            R::Philosophical,
            R::Political,
            R::Military,
        ],
    ),
    (
        "historical_fiction",
        &[
            R::Historical,
            R::Cultural,
            R::Geographical,
            R::Political,
            R::Military,
            R::Linguistic,
        ],
    ),
    (
        "mystery",
        &[R::CrimeInvestigation, R::Legal, R::Professional, R::Psychological, R::Technical],
    ),
    (
        "thriller",
        &[
            R::CrimeInvestigation,
            R::Legal,
            R::Military,
            R::Political,
            R::Technical,
            R::Professional,
        ],
    ),
    (
        "romance",
        &[R::Cultural, R::Psychological, R::Professional, R::Travel, R::Fashion, R::Culinary],
    ),
    (
        "horror",
        &[R::Supernatural, R::Psychological, R::Medical, R::Historical, R::Folklore, R::Religious],
    ),
    (
        "young_adult",
        &[R::Educational, R::Psychological, R::Cultural, R::Sports, R::Entertainment, R::Travel],
    ),
    (
        "literary_fiction",
        &[R::Psychological, R::Sociological, R::Philosophical, R::Cultural, R::Political],
    ),
    (
        "non_fiction",
        &[
            R::Historical,
            R::Scientific,
            R::Biographical,
            R::Professional,
            R::Educational,
            R::Business,
        ],
    ),
    ("memoir", &[R::Biographical, R::Historical, R::Cultural, R::Professional]),
    ("biography", &[R::Biographical, R::Historical, R::Professional, R::Cultural]),
    ("business", &[R::Business, R::Economic, R::Professional, R::Technical]),
    ("self_help", &[R::Psychological, R::Professional, R::Educational, R::Business]),
    ("travel", &[R::Travel, R::Geographical, R::Cultural, R::Historical, R::Culinary]),
    ("cookbook", &[R::Culinary, R::Cultural, R::Historical]),
];

const GENERAL_RESEARCH: &[ResearchType] = &[R::Cultural, R::Historical, R::Geographical, R::Professional];

impl ResearchType {
    pub fn complexity_level(self) -> Difficulty {
        COMPLEXITY_TIER.classify(self)
    }

    /// How hard this research is to carry out without a human expert
    pub fn ai_research_difficulty(self) -> Difficulty {
        AI_DIFFICULTY_TIER.classify(self)
    }

    pub fn typical_sources(self) -> &'static [&'static str] {
        match self {
            R::Historical => &["academic papers", "historical documents", "museums", "archives", "textbooks"],
            R::Scientific => &[
                "peer-reviewed journals",
                "research papers",
                "scientific databases",
                "expert interviews",
            ],
            R::Technical => &["technical manuals", "industry publications", "expert forums", "documentation"],
            R::Cultural => &["ethnographic studies", "cultural institutions", "travel guides", "local sources"],
            R::Geographical => &[
                "maps",
                "travel guides",
                "geographical surveys",
                "satellite imagery",
                "local guides",
            ],
            R::Linguistic => &["dictionaries", "language resources", "linguistic databases", "native speakers"],
            R::Professional => &[
                "industry publications",
                "professional associations",
                "career guides",
                "interviews",
            ],
            R::Legal => &["legal databases", "court records", "law journals", "legal experts", "statutes"],
            R::Medical => &[
                "medical journals",
                "clinical studies",
                "medical textbooks",
                "healthcare professionals",
            ],
            R::Psychological => &["psychology journals", "case studies", "research papers", "clinical data"],
            R::Sociological => &["sociological studies", "demographic data", "social research", "surveys"],
            R::Economic => &["economic reports", "financial data", "market research", "economic journals"],
            R::Political => &[
                "government sources",
                "political science journals",
                "policy documents",
                "news",
            ],
            R::Military => &[
                "military history",
                "defense publications",
                "strategic studies",
                "veteran accounts",
            ],
            R::Religious => &["religious texts", "theological studies", "religious institutions", "scholars"],
            R::Artistic => &[
                "art history books",
                "museums",
                "artist biographies",
                "art criticism",
                "galleries",
            ],
            R::Architectural => &[
                "architectural history",
                "building records",
                "architectural journals",
                "blueprints",
            ],
            R::Culinary => &["cookbooks", "culinary history", "food blogs", "chef interviews", "recipes"],
            R::Fashion => &["fashion magazines", "fashion history", "designer interviews", "style guides"],
            R::Sports => &["sports statistics", "athlete biographies", "sports journalism", "rule books"],
            _ => GENERAL_SOURCES,
        }
    }

    /// Research types worth doing for a genre, sorted by display name
    ///
    /// Every table row whose fragment appears in the normalized genre
    /// contributes.
    pub fn for_genre(genre: &str) -> Vec<ResearchType> {
        let genre = normalize(genre);
        let mut recommended: Vec<ResearchType> = Vec::new();

        for (fragment, types) in GENRE_RESEARCH {
            if genre.contains(fragment) {
                for research_type in types.iter() {
                    if !recommended.contains(research_type) {
                        recommended.push(*research_type);
                    }
                }
            }
        }

        if recommended.is_empty() {
            recommended.extend_from_slice(GENERAL_RESEARCH);
        }

        recommended.sort_by_cached_key(|research_type| research_type.display_name());
        recommended
    }

    /// Types an AI can research at easy or medium difficulty
    pub fn ai_friendly() -> Vec<ResearchType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|research_type| research_type.ai_research_difficulty().is_ai_friendly())
            .collect()
    }

    pub fn by_complexity(complexity: Difficulty) -> Vec<ResearchType> {
        COMPLEXITY_TIER.members(complexity)
    }
}

impl Taxonomy for ResearchType {
    const KIND: &'static str = "research type";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        format!("{} Research", title_case(self.as_str()))
    }

    fn description(self) -> String {
        let description = match self {
            R::Historical => "Research into historical events, periods, figures, and contexts",
            R::Scientific => "Research into scientific principles, theories, discoveries, and methodologies",
            R::Technical => "Research into technical processes, procedures, and specialized knowledge",
            R::Cultural => "Research into cultural practices, traditions, customs, and social norms",
            R::Geographical => "Research into locations, places, geographical features, and settings",
            R::Linguistic => "Research into languages, dialects, communication, and translation",
            R::Professional => "Research into specific professions, careers, and workplace dynamics",
            R::Legal => "Research into legal systems, laws, procedures, and judicial processes",
            R::Medical => "Research into medical conditions, treatments, procedures, and healthcare",
            R::Psychological => "Research into mental processes, behavior, and psychological conditions",
            R::Sociological => "Research into social structures, relationships, and group dynamics",
            R::Economic => "Research into economic systems, markets, financial concepts, and business",
            R::Political => "Research into political systems, governance, and policy matters",
            R::Military => "Research into military operations, history, equipment, and strategy",
            R::Religious => "Research into religious beliefs, practices, institutions, and history",
            R::Artistic => "Research into art forms, artistic movements, and creative processes",
            R::Architectural => "Research into building design, construction, and architectural styles",
            R::Culinary => "Research into food, cooking, cuisine, and culinary traditions",
            R::Fashion => "Research into clothing, style, fashion trends, and textile history",
            R::Sports => "Research into sports, athletics, games, and recreational activities",
            R::Biographical => "Research into specific individuals, their lives, and achievements",
            R::Mythological => "Research into myths, legends, and mythological systems",
            R::Folklore => "Research into folk tales, traditional stories, and cultural narratives",
            R::Technological => "Research into technology, innovations, and technological systems",
            R::Environmental => "Research into environmental issues, ecology, and natural systems",
            R::Educational => "Research into education systems, learning, and academic institutions",
            R::Philosophical => "Research into philosophical concepts, ethics, and abstract thinking",
            R::Supernatural => "Research into supernatural concepts, paranormal phenomena, and magic",
            R::CrimeInvestigation => "Research into criminal procedures, forensics, and law enforcement",
            R::Business => "Research into business practices, industries, and commercial operations",
            R::Travel => "Research into travel, tourism, transportation, and destinations",
            R::Music => "Research into musical styles, instruments, composition, and music history",
            R::Literature => "Research into literary works, authors, and literary movements",
            R::Entertainment => "Research into entertainment industry, media, and popular culture",
            R::Media => "Research into media systems, journalism, and information dissemination",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &RESEARCH_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "complexity_level": self.complexity_level(),
            "ai_research_difficulty": self.ai_research_difficulty(),
            "typical_sources": self.typical_sources(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;
    use crate::TaxonomyError;

    #[test]
    fn test_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<ResearchType>();
        assert!(testing::assert_aliases_resolve::<ResearchType>().is_empty());
    }

    #[test]
    fn test_partial_alias_match() {
        assert_eq!(ResearchType::resolve("World History").unwrap(), R::Historical);
        assert_eq!(ResearchType::resolve("forensic").unwrap(), R::CrimeInvestigation);
        // "art" sits inside "martial"
        assert_eq!(ResearchType::resolve("martial").unwrap(), R::Artistic);
    }

    #[test]
    fn test_unknown_research_type() {
        let err = ResearchType::resolve("12345").unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownValue { .. }));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(R::Historical.display_name(), "Historical Research");
        assert_eq!(R::CrimeInvestigation.display_name(), "Crime Investigation Research");
    }

    #[test]
    fn test_difficulty_scales_differ() {
        assert_eq!(R::Geographical.complexity_level(), Difficulty::Medium);
        assert_eq!(R::Geographical.ai_research_difficulty(), Difficulty::Easy);
        assert_eq!(R::Media.complexity_level(), Difficulty::Hard);
        assert_eq!(R::Media.ai_research_difficulty(), Difficulty::Medium);
        assert_eq!(R::Linguistic.complexity_level(), Difficulty::VeryHard);
    }

    #[test]
    fn test_typical_sources_fallback() {
        assert_eq!(R::Legal.typical_sources().len(), 5);
        assert_eq!(R::Media.typical_sources(), GENERAL_SOURCES);
    }

    #[test]
    fn test_for_genre() {
        let fantasy = ResearchType::for_genre("Fantasy");
        assert_eq!(fantasy.len(), 8);
        assert_eq!(fantasy[0], R::Cultural);

        // "dark_fantasy" also contains "fantasy"
        assert_eq!(ResearchType::for_genre("dark fantasy"), fantasy);

        assert_eq!(
            ResearchType::for_genre("poetry"),
            vec![R::Cultural, R::Geographical, R::Historical, R::Professional]
        );
    }

    #[test]
    fn test_ai_friendly_and_complexity_queries() {
        let friendly = ResearchType::ai_friendly();
        assert_eq!(friendly.len(), 16);
        assert!(friendly.iter().all(|r| r.ai_research_difficulty().is_ai_friendly()));

        let very_hard = ResearchType::by_complexity(Difficulty::VeryHard);
        assert_eq!(very_hard.len(), 9);
        assert_eq!(very_hard[0], R::Linguistic);
    }
}
