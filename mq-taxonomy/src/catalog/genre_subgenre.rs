//! Valid genre/subgenre combinations

use super::genre::GenreType;
use super::subgenre::SubGenreType;
use crate::engine::{CrossTaxonomyMap, Taxonomy, ValidatedPair};
use crate::error::Result;
use once_cell::sync::Lazy;

use GenreType as G;
use SubGenreType as S;

/// A genre/subgenre combination known to be valid
pub type GenreSubgenrePair = ValidatedPair<GenreType, SubGenreType>;

/// Genre -> valid subgenres, in presentation order
pub static GENRE_SUBGENRES: CrossTaxonomyMap<GenreType, SubGenreType> = CrossTaxonomyMap::new(&[
    (
        G::Romance,
        &[
            S::ContemporaryRomance,
            S::HistoricalRomance,
            S::ParanormalRomance,
            S::RomanticSuspense,
            S::DarkRomance,
            S::RomanticComedy,
            S::SportsRomance,
            S::BillionaireRomance,
            S::EnemiesToLovers,
            S::SecondChanceRomance,
        ],
    ),
    (
        G::Fantasy,
        &[
            S::HighFantasy,
            S::UrbanFantasy,
            S::DarkFantasy,
            S::EpicFantasy,
            S::PortalFantasy,
            S::FairyTaleRetelling,
            S::SwordAndSorcery,
        ],
    ),
    (
        G::Romantasy,
        &[
            S::RomantasySub,
            S::ParanormalRomance,
            S::DarkRomance,
            S::UrbanFantasy,
            S::FairyTaleRetelling,
        ],
    ),
    (G::CozyFantasy, &[S::CozyFantasySub]),
    (
        G::Mystery,
        &[S::CozyMystery, S::PoliceProcedural, S::DetectiveFiction, S::Noir],
    ),
    (
        G::Thriller,
        &[
            S::PsychologicalThriller,
            S::DomesticThriller,
            S::LegalThriller,
            S::TechnoThriller,
            S::SpyThriller,
            S::MedicalThriller,
        ],
    ),
    (
        G::ScienceFiction,
        &[
            S::SpaceOpera,
            S::Cyberpunk,
            S::DystopianSf,
            S::HardSf,
            S::SoftSf,
            S::TimeTravel,
            S::PostApocalyptic,
            S::AlienContact,
            S::Biopunk,
        ],
    ),
    (G::CliFi, &[S::CliFiSub, S::PostApocalyptic, S::DystopianSf]),
    (
        G::YoungAdult,
        &[
            S::YaFantasy,
            S::YaRomance,
            S::YaDystopian,
            S::YaContemporary,
            S::YaThriller,
            S::YaScienceFiction,
            S::YaParanormal,
            S::YaHistorical,
        ],
    ),
    (G::ComingOfAge, &[S::ComingOfAgeSub, S::YaContemporary]),
    (
        G::Horror,
        &[
            S::PsychologicalHorror,
            S::SupernaturalHorror,
            S::GothicHorror,
            S::CosmicHorror,
            S::BodyHorror,
            S::HauntedHouse,
            S::Zombie,
            S::Vampire,
            S::Slasher,
        ],
    ),
    (
        G::SelfHelp,
        &[
            S::Motivational,
            S::PersonalFinance,
            S::CareerDevelopment,
            S::RelationshipAdvice,
            S::Mindfulness,
            S::Productivity,
        ],
    ),
    (
        G::Business,
        &[S::Entrepreneurship, S::Leadership, S::Marketing, S::BusinessStrategy],
    ),
    (
        G::Health,
        &[S::Fitness, S::Nutrition, S::MentalHealth, S::AlternativeMedicine],
    ),
    (G::Cooking, &[S::CookingSub]),
    (G::Travel, &[S::TravelGuide]),
    (G::Technology, &[S::TechnologyGuide]),
    (G::TrueCrime, &[S::TrueCrimeSub]),
    (G::Biography, &[S::CelebrityBiography, S::HistoricalBiography]),
    (G::Dystopian, &[S::DystopianSf, S::YaDystopian, S::PostApocalyptic]),
    (
        G::Paranormal,
        &[S::ParanormalRomance, S::SupernaturalHorror, S::YaParanormal, S::Vampire],
    ),
    (G::Contemporary, &[S::ContemporaryRomance, S::YaContemporary]),
    (
        G::HistoricalFiction,
        &[S::HistoricalRomance, S::YaHistorical, S::HistoricalBiography],
    ),
    (G::Children, &[S::ChildrenBook]),
]);

const TRENDING: &[(GenreType, SubGenreType)] = &[
    (G::Romance, S::DarkRomance),
    (G::Romance, S::EnemiesToLovers),
    (G::Romance, S::BillionaireRomance),
    (G::Romantasy, S::RomantasySub),
    (G::Romantasy, S::ParanormalRomance),
    (G::CozyFantasy, S::CozyFantasySub),
    (G::Fantasy, S::FairyTaleRetelling),
    (G::Thriller, S::PsychologicalThriller),
    (G::Thriller, S::DomesticThriller),
    (G::Mystery, S::CozyMystery),
    (G::SelfHelp, S::Motivational),
    (G::SelfHelp, S::Mindfulness),
    (G::TrueCrime, S::TrueCrimeSub),
];

const AI_FRIENDLY: &[(GenreType, SubGenreType)] = &[
    (G::Romance, S::ContemporaryRomance),
    (G::Romance, S::RomanticComedy),
    (G::CozyFantasy, S::CozyFantasySub),
    (G::Fantasy, S::FairyTaleRetelling),
    (G::SelfHelp, S::Motivational),
    (G::SelfHelp, S::Productivity),
    (G::Cooking, S::CookingSub),
    (G::Travel, S::TravelGuide),
    (G::YoungAdult, S::YaContemporary),
    (G::ComingOfAge, S::ComingOfAgeSub),
];

// Curated lists are checked against the map once, on first use; a pair
// missing from the map is a bug in this file and panics
static TRENDING_PAIRS: Lazy<Vec<GenreSubgenrePair>> = Lazy::new(|| validated(TRENDING));
static AI_FRIENDLY_PAIRS: Lazy<Vec<GenreSubgenrePair>> = Lazy::new(|| validated(AI_FRIENDLY));

fn validated(list: &[(GenreType, SubGenreType)]) -> Vec<GenreSubgenrePair> {
    list.iter()
        .map(|(genre, subgenre)| {
            GENRE_SUBGENRES
                .create_pair(*genre, *subgenre)
                .unwrap_or_else(|err| panic!("curated pair is not in the genre map: {err}"))
        })
        .collect()
}

/// Validate a genre/subgenre combination
pub fn create_genre_subgenre_pair(genre: GenreType, subgenre: SubGenreType) -> Result<GenreSubgenrePair> {
    GENRE_SUBGENRES.create_pair(genre, subgenre)
}

/// Resolve both values from free text, then validate the combination
pub fn pair_from_strings(genre: &str, subgenre: &str) -> Result<GenreSubgenrePair> {
    let genre = GenreType::resolve(genre)?;
    let subgenre = SubGenreType::resolve(subgenre)?;
    create_genre_subgenre_pair(genre, subgenre)
}

/// Valid subgenres for a genre, sorted by display name
pub fn subgenres_for(genre: GenreType) -> Vec<SubGenreType> {
    let mut subgenres = GENRE_SUBGENRES.get_related(genre).to_vec();
    subgenres.sort_by_cached_key(|subgenre| subgenre.display_name());
    subgenres
}

pub fn trending_combinations() -> &'static [GenreSubgenrePair] {
    &TRENDING_PAIRS
}

pub fn ai_friendly_combinations() -> &'static [GenreSubgenrePair] {
    &AI_FRIENDLY_PAIRS
}

/// All valid pairs, optionally narrowed to one genre and/or the
/// AI-friendly list
pub fn search_combinations(genre: Option<GenreType>, ai_friendly_only: bool) -> Vec<GenreSubgenrePair> {
    GENRE_SUBGENRES
        .all_pairs()
        .into_iter()
        .filter(|pair| genre.map_or(true, |g| pair.first() == g))
        .filter(|pair| !ai_friendly_only || AI_FRIENDLY_PAIRS.contains(pair))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaxonomyError;

    #[test]
    fn test_map_is_structurally_sound() {
        assert!(GENRE_SUBGENRES.validate().is_empty(), "{:?}", GENRE_SUBGENRES.validate());
    }

    #[test]
    fn test_every_mapped_subgenre_has_an_owner() {
        for (genre, subgenres) in GENRE_SUBGENRES.entries() {
            assert!(!subgenres.is_empty());
            for subgenre in subgenres.iter() {
                let owner = GENRE_SUBGENRES.get_owner(*subgenre);
                assert!(owner.is_some());
                assert!(GENRE_SUBGENRES.get_all_owners(*subgenre).contains(genre));
            }
        }
    }

    #[test]
    fn test_validity_matches_related_set() {
        for genre in GenreType::all() {
            let related = GENRE_SUBGENRES.get_related(*genre);
            for subgenre in SubGenreType::all() {
                let valid = GENRE_SUBGENRES.is_valid_combination(*genre, *subgenre);
                assert_eq!(valid, related.contains(subgenre));
                assert_eq!(create_genre_subgenre_pair(*genre, *subgenre).is_ok(), valid);
            }
        }
    }

    #[test]
    fn test_romance_space_opera_is_rejected() {
        let err = create_genre_subgenre_pair(GenreType::Romance, SubGenreType::SpaceOpera).unwrap_err();
        assert_eq!(
            err,
            TaxonomyError::InvalidCombination {
                first_kind: "genre",
                first: "romance",
                second_kind: "subgenre",
                second: "space_opera",
            }
        );
    }

    #[test]
    fn test_romance_dark_romance_pair() {
        let pair = create_genre_subgenre_pair(GenreType::Romance, SubGenreType::DarkRomance).unwrap();
        assert_eq!(pair.display_name(), "Romance - Dark Romance");
        assert_eq!(pair.to_string(), "romance/dark_romance");
        assert_eq!(
            serde_json::to_value(pair).unwrap(),
            serde_json::json!({
                "genre": "romance",
                "subgenre": "dark_romance",
                "display_name": "Romance - Dark Romance",
            })
        );
        assert_eq!(pair.to_dict(), serde_json::to_value(pair).unwrap());
    }

    #[test]
    fn test_pair_from_strings() {
        let pair = pair_from_strings("sci-fi", "space opera").unwrap();
        assert_eq!(pair.first(), GenreType::ScienceFiction);
        assert_eq!(pair.second(), SubGenreType::SpaceOpera);

        assert!(matches!(
            pair_from_strings("romance", "space opera"),
            Err(TaxonomyError::InvalidCombination { .. })
        ));
        assert!(matches!(
            pair_from_strings("", "space opera"),
            Err(TaxonomyError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_reverse_lookup_follows_table_order() {
        assert_eq!(GENRE_SUBGENRES.get_owner(SubGenreType::DarkRomance), Some(GenreType::Romance));
        assert_eq!(
            GENRE_SUBGENRES.get_all_owners(SubGenreType::DarkRomance),
            vec![GenreType::Romance, GenreType::Romantasy]
        );
        assert_eq!(GENRE_SUBGENRES.get_owner(SubGenreType::DiyCrafts), None);
    }

    #[test]
    fn test_unmapped_genre_has_no_related() {
        assert!(GENRE_SUBGENRES.get_related(GenreType::Poetry).is_empty());
        assert!(!GENRE_SUBGENRES.is_mapped(GenreType::Poetry));
        assert!(GENRE_SUBGENRES.is_mapped(GenreType::Romance));
    }

    #[test]
    fn test_statistics() {
        let stats = GENRE_SUBGENRES.statistics();
        assert_eq!(stats.genre_count, 24);
        assert_eq!(stats.combination_count, GENRE_SUBGENRES.all_pairs().len());
        // every subgenre except diy_crafts is mapped
        assert_eq!(stats.subgenre_count, SubGenreType::ALL.len() - 1);
        let expected = (stats.combination_count as f64 / 24.0 * 100.0).round() / 100.0;
        assert_eq!(stats.avg_subgenres_per_genre, expected);
    }

    #[test]
    fn test_subgenres_sorted_by_display_name() {
        let names: Vec<String> = subgenres_for(GenreType::Mystery)
            .iter()
            .map(|s| s.display_name())
            .collect();
        assert_eq!(names, vec!["Cozy Mystery", "Detective Fiction", "Noir", "Police Procedural"]);
        assert!(subgenres_for(GenreType::Poetry).is_empty());
    }

    #[test]
    fn test_curated_lists_are_valid() {
        assert_eq!(trending_combinations().len(), TRENDING.len());
        assert_eq!(ai_friendly_combinations().len(), AI_FRIENDLY.len());
    }

    #[test]
    #[should_panic(expected = "curated pair is not in the genre map")]
    fn test_invalid_curated_pair_panics() {
        validated(&[(G::Romance, S::DarkRomance), (G::Romance, S::SpaceOpera)]);
    }

    #[test]
    fn test_search_combinations() {
        let romance = search_combinations(Some(GenreType::Romance), false);
        assert_eq!(romance.len(), 10);

        let romance_ai = search_combinations(Some(GenreType::Romance), true);
        assert_eq!(romance_ai.len(), 2);

        let all_ai = search_combinations(None, true);
        assert_eq!(all_ai.len(), AI_FRIENDLY.len());
    }

    #[test]
    fn test_export_lists_keys() {
        let export = GENRE_SUBGENRES.export();
        assert_eq!(export["cozy_fantasy"], serde_json::json!(["cozy_fantasy_sub"]));
        assert_eq!(export.as_object().unwrap().len(), 24);
    }
}
