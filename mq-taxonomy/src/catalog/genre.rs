//! Book genres

use super::levels::MarketSize;
use crate::engine::{taxonomy, title_case, CompoundRule, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Top-level book genre, fiction first
    pub enum GenreType {
        Romance => "romance",
        Fantasy => "fantasy",
        Mystery => "mystery",
        Thriller => "thriller",
        ScienceFiction => "science_fiction",
        YoungAdult => "young_adult",
        HistoricalFiction => "historical_fiction",
        Horror => "horror",
        Contemporary => "contemporary",
        Paranormal => "paranormal",
        Dystopian => "dystopian",
        Adventure => "adventure",
        Crime => "crime",
        Romantasy => "romantasy",
        DarkAcademia => "dark_academia",
        CozyFantasy => "cozy_fantasy",
        CliFi => "cli_fi",
        LiteraryFiction => "literary_fiction",
        Drama => "drama",
        ComingOfAge => "coming_of_age",
        Western => "western",
        Comedy => "comedy",
        Satire => "satire",
        SelfHelp => "self_help",
        Memoir => "memoir",
        Biography => "biography",
        Business => "business",
        Health => "health",
        TrueCrime => "true_crime",
        Travel => "travel",
        Cooking => "cooking",
        History => "history",
        Science => "science",
        Technology => "technology",
        Education => "education",
        Reference => "reference",
        Philosophy => "philosophy",
        Religion => "religion",
        Politics => "politics",
        Psychology => "psychology",
        Children => "children",
        PictureBook => "picture_book",
        Poetry => "poetry",
        Textbook => "textbook",
        Other => "other",
    }
}

use GenreType as G;

static GENRE_RESOLVER: Resolver<GenreType> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::Compound,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("romantic", G::Romance),
        ("love_story", G::Romance),
        ("love", G::Romance),
        ("fantasies", G::Fantasy),
        ("sci_fi", G::ScienceFiction),
        ("scifi", G::ScienceFiction),
        ("sf", G::ScienceFiction),
        ("science_fiction", G::ScienceFiction),
        ("romantic_fantasy", G::Romantasy),
        ("romance_fantasy", G::Romantasy),
        ("fantasy_romance", G::Romantasy),
        ("romantsy", G::Romantasy),
        ("ya", G::YoungAdult),
        ("young_adults", G::YoungAdult),
        ("teen", G::YoungAdult),
        ("teenage", G::YoungAdult),
        ("mysteries", G::Mystery),
        ("detective", G::Mystery),
        ("whodunit", G::Mystery),
        ("thrillers", G::Thriller),
        ("suspense", G::Thriller),
        ("scary", G::Horror),
        ("spooky", G::Horror),
        ("historical", G::HistoricalFiction),
        ("period_fiction", G::HistoricalFiction),
        ("historical_novel", G::HistoricalFiction),
        ("self_help", G::SelfHelp),
        ("selfhelp", G::SelfHelp),
        ("personal_development", G::SelfHelp),
        ("motivation", G::SelfHelp),
        ("motivational", G::SelfHelp),
        ("true_crime", G::TrueCrime),
        ("truecrime", G::TrueCrime),
        ("real_crime", G::TrueCrime),
        ("climate_fiction", G::CliFi),
        ("climate", G::CliFi),
        ("literary", G::LiteraryFiction),
        ("literature", G::LiteraryFiction),
        ("lit_fic", G::LiteraryFiction),
        ("entrepreneur", G::Business),
        ("entrepreneurship", G::Business),
        ("startup", G::Business),
        ("bio", G::Biography),
        ("life_story", G::Biography),
        ("kids", G::Children),
        ("childrens", G::Children),
        ("child", G::Children),
        ("tech", G::Technology),
        ("computers", G::Technology),
        ("nonfiction", G::Reference),
        ("non_fiction", G::Reference),
    ],
    compounds: &[
        CompoundRule {
            groups: &[&["fantasy"], &["romance", "romantic"]],
            value: G::Romantasy,
        },
        CompoundRule {
            groups: &[&["dark"], &["academia"]],
            value: G::DarkAcademia,
        },
        CompoundRule {
            groups: &[&["cozy"], &["fantasy"]],
            value: G::CozyFantasy,
        },
        CompoundRule {
            groups: &[&["coming"], &["age"]],
            value: G::ComingOfAge,
        },
    ],
    ignore_suffix: None,
};

const FICTION: &[GenreType] = &[
    G::Romance,
    G::Fantasy,
    G::Mystery,
    G::Thriller,
    G::ScienceFiction,
    G::YoungAdult,
    G::HistoricalFiction,
    G::Horror,
    G::Contemporary,
    G::Paranormal,
    G::Dystopian,
    G::Adventure,
    G::Crime,
    G::Romantasy,
    G::DarkAcademia,
    G::CozyFantasy,
    G::CliFi,
    G::LiteraryFiction,
    G::Drama,
    G::ComingOfAge,
    G::Western,
    G::Comedy,
    G::Satire,
];

static FICTION_TIER: Tier<GenreType, bool> = Tier {
    levels: &[(true, FICTION)],
    default: false,
};

static HIGH_DEMAND_TIER: Tier<GenreType, bool> = Tier {
    levels: &[(
        true,
        &[
            G::Romance,
            G::Fantasy,
            G::Mystery,
            G::Thriller,
            G::ScienceFiction,
            G::YoungAdult,
            G::Romantasy,
            G::SelfHelp,
            G::Memoir,
            G::TrueCrime,
            G::CozyFantasy,
        ],
    )],
    default: false,
};

static MARKET_SIZE_TIER: Tier<GenreType, MarketSize> = Tier {
    levels: &[
        (
            MarketSize::Large,
            &[G::Romance, G::Fantasy, G::Mystery, G::Thriller, G::YoungAdult, G::SelfHelp],
        ),
        (
            MarketSize::Medium,
            &[
                G::ScienceFiction,
                G::HistoricalFiction,
                G::Horror,
                G::Memoir,
                G::Biography,
                G::Business,
                G::TrueCrime,
                G::Romantasy,
                G::Contemporary,
            ],
        ),
    ],
    default: MarketSize::Small,
};

const TRENDING: &[GenreType] = &[
    G::Romantasy,
    G::CozyFantasy,
    G::DarkAcademia,
    G::CliFi,
    G::Romance,
    G::Fantasy,
    G::TrueCrime,
];

const AI_FRIENDLY: &[GenreType] = &[
    G::Romance,
    G::Fantasy,
    G::Mystery,
    G::Thriller,
    G::ScienceFiction,
    G::Romantasy,
    G::YoungAdult,
    G::SelfHelp,
    G::Business,
    G::Health,
    G::Travel,
    G::Cooking,
];

const HIGH_ROI: &[GenreType] = &[
    G::Romance,
    G::Fantasy,
    G::Romantasy,
    G::Mystery,
    G::Paranormal,
    G::SelfHelp,
];

impl GenreType {
    pub fn is_fiction(self) -> bool {
        FICTION_TIER.classify(self)
    }

    pub fn is_high_demand(self) -> bool {
        HIGH_DEMAND_TIER.classify(self)
    }

    pub fn market_size(self) -> MarketSize {
        MARKET_SIZE_TIER.classify(self)
    }

    /// Genres currently seeing strong reader growth
    pub fn trending() -> &'static [GenreType] {
        TRENDING
    }

    /// Genres that generate well with current models
    pub fn ai_friendly() -> &'static [GenreType] {
        AI_FRIENDLY
    }

    /// Best return on investment for self-published titles
    pub fn high_roi() -> &'static [GenreType] {
        HIGH_ROI
    }

    pub fn fiction() -> Vec<GenreType> {
        FICTION_TIER.members(true)
    }

    pub fn non_fiction() -> Vec<GenreType> {
        FICTION_TIER.members(false)
    }

    pub fn by_market_size(size: MarketSize) -> Vec<GenreType> {
        MARKET_SIZE_TIER.members(size)
    }
}

impl Taxonomy for GenreType {
    const KIND: &'static str = "genre";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        title_case(self.as_str())
    }

    fn description(self) -> String {
        format!(
            "Genre focusing on {} storytelling and themes.",
            self.display_name().to_lowercase()
        )
    }

    fn resolver() -> &'static Resolver<Self> {
        &GENRE_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "is_fiction": self.is_fiction(),
            "is_high_demand": self.is_high_demand(),
            "market_size": self.market_size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaxonomyError;

    #[test]
    fn test_every_key_resolves_to_itself() {
        for genre in GenreType::all() {
            assert_eq!(GenreType::resolve(genre.key()).unwrap(), *genre);
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_target() {
        for (alias, genre) in GenreType::resolver().aliases() {
            assert_eq!(GenreType::resolve(alias).unwrap(), *genre, "alias {alias}");
        }
    }

    #[test]
    fn test_sci_fi_alias() {
        assert_eq!(GenreType::resolve("sci-fi").unwrap(), GenreType::ScienceFiction);
        assert_eq!(GenreType::resolve("Science Fiction").unwrap(), GenreType::ScienceFiction);
    }

    #[test]
    fn test_compound_rules() {
        assert_eq!(GenreType::resolve("Romantic Fantasy").unwrap(), GenreType::Romantasy);
        assert_eq!(GenreType::resolve("epic fantasy with romance").unwrap(), GenreType::Romantasy);
        assert_eq!(GenreType::resolve("dark academia vibes").unwrap(), GenreType::DarkAcademia);
        assert_eq!(GenreType::resolve("cozy low-stakes fantasy").unwrap(), GenreType::CozyFantasy);
        assert_eq!(GenreType::resolve("coming of age story").unwrap(), GenreType::ComingOfAge);
    }

    #[test]
    fn test_canonical_substring_fallback() {
        assert_eq!(GenreType::resolve("gothic horror").unwrap(), GenreType::Horror);
        assert_eq!(GenreType::resolve("poetry collection").unwrap(), GenreType::Poetry);
    }

    #[test]
    fn test_unknown_genre_lists_sample() {
        let err = GenreType::resolve("totally_unknown_xyz").unwrap_err();
        match &err {
            TaxonomyError::UnknownValue { sample, .. } => {
                assert_eq!(sample.len(), 10);
                assert!(sample.contains(&"romance"));
                assert!(sample.windows(2).all(|w| w[0] <= w[1]));
            }
            other => panic!("expected UnknownValue, got {other:?}"),
        }
        assert!(err.to_string().contains("romance"));
    }

    #[test]
    fn test_garbage_fails() {
        for input in ["12345", "!!!", "0.0.0", "#42"] {
            assert!(
                matches!(GenreType::resolve(input), Err(TaxonomyError::UnknownValue { .. })),
                "{input} should not resolve"
            );
        }
    }

    #[test]
    fn test_normalized_input_resolves_identically() {
        for input in ["Sci-Fi", "  Young   Adult", "True-Crime", "dark academia", "love story"] {
            let normalized = crate::engine::normalize(input);
            assert_eq!(
                GenreType::resolve(input).unwrap(),
                GenreType::resolve(&normalized).unwrap()
            );
        }
    }

    #[test]
    fn test_tiers() {
        assert!(GenreType::Romance.is_fiction());
        assert!(!GenreType::SelfHelp.is_fiction());
        assert!(GenreType::Satire.is_fiction());
        assert_eq!(GenreType::Romance.market_size(), MarketSize::Large);
        assert_eq!(GenreType::Memoir.market_size(), MarketSize::Medium);
        assert_eq!(GenreType::Poetry.market_size(), MarketSize::Small);
        assert_eq!(GenreType::fiction().len(), 23);
        assert_eq!(GenreType::fiction().len() + GenreType::non_fiction().len(), GenreType::ALL.len());
    }

    #[test]
    fn test_to_dict() {
        let dict = GenreType::Romantasy.to_dict();
        assert_eq!(dict["value"], "romantasy");
        assert_eq!(dict["display_name"], "Romantasy");
        assert_eq!(dict["is_fiction"], true);
        assert_eq!(dict["is_high_demand"], true);
        assert_eq!(dict["market_size"], "medium");
    }
}
