//! Subgenres
//!
//! Keys ending in `_sub` name a subgenre that shares its name with a
//! genre (`cozy_fantasy_sub`). The suffix is dropped from display names
//! and ignored by substring matching.

use crate::engine::{taxonomy, title_case, MatchStep, Resolver, Taxonomy};

taxonomy! {
    /// Subgenre, grouped by parent genre family
    pub enum SubGenreType {
        ContemporaryRomance => "contemporary_romance",
        HistoricalRomance => "historical_romance",
        ParanormalRomance => "paranormal_romance",
        RomanticSuspense => "romantic_suspense",
        DarkRomance => "dark_romance",
        RomanticComedy => "romantic_comedy",
        SportsRomance => "sports_romance",
        BillionaireRomance => "billionaire_romance",
        EnemiesToLovers => "enemies_to_lovers",
        SecondChanceRomance => "second_chance_romance",
        HighFantasy => "high_fantasy",
        UrbanFantasy => "urban_fantasy",
        DarkFantasy => "dark_fantasy",
        EpicFantasy => "epic_fantasy",
        CozyFantasySub => "cozy_fantasy_sub",
        RomantasySub => "romantasy_sub",
        PortalFantasy => "portal_fantasy",
        FairyTaleRetelling => "fairy_tale_retelling",
        SwordAndSorcery => "sword_and_sorcery",
        CozyMystery => "cozy_mystery",
        PoliceProcedural => "police_procedural",
        DetectiveFiction => "detective_fiction",
        Noir => "noir",
        PsychologicalThriller => "psychological_thriller",
        DomesticThriller => "domestic_thriller",
        LegalThriller => "legal_thriller",
        TechnoThriller => "techno_thriller",
        SpyThriller => "spy_thriller",
        MedicalThriller => "medical_thriller",
        SpaceOpera => "space_opera",
        Cyberpunk => "cyberpunk",
        DystopianSf => "dystopian_sf",
        HardSf => "hard_sf",
        SoftSf => "soft_sf",
        TimeTravel => "time_travel",
        PostApocalyptic => "post_apocalyptic",
        AlienContact => "alien_contact",
        Biopunk => "biopunk",
        CliFiSub => "cli_fi_sub",
        YaFantasy => "ya_fantasy",
        YaRomance => "ya_romance",
        YaDystopian => "ya_dystopian",
        YaContemporary => "ya_contemporary",
        YaThriller => "ya_thriller",
        YaScienceFiction => "ya_science_fiction",
        ComingOfAgeSub => "coming_of_age_sub",
        YaParanormal => "ya_paranormal",
        YaHistorical => "ya_historical",
        PsychologicalHorror => "psychological_horror",
        SupernaturalHorror => "supernatural_horror",
        GothicHorror => "gothic_horror",
        CosmicHorror => "cosmic_horror",
        BodyHorror => "body_horror",
        HauntedHouse => "haunted_house",
        Zombie => "zombie",
        Vampire => "vampire",
        Slasher => "slasher",
        Motivational => "motivational",
        PersonalFinance => "personal_finance",
        CareerDevelopment => "career_development",
        RelationshipAdvice => "relationship_advice",
        Mindfulness => "mindfulness",
        Productivity => "productivity",
        Entrepreneurship => "entrepreneurship",
        Leadership => "leadership",
        Marketing => "marketing",
        BusinessStrategy => "business_strategy",
        Fitness => "fitness",
        Nutrition => "nutrition",
        MentalHealth => "mental_health",
        AlternativeMedicine => "alternative_medicine",
        CookingSub => "cooking_sub",
        TravelGuide => "travel_guide",
        DiyCrafts => "diy_crafts",
        TechnologyGuide => "technology_guide",
        TrueCrimeSub => "true_crime_sub",
        CelebrityBiography => "celebrity_biography",
        HistoricalBiography => "historical_biography",
        ChildrenBook => "children_book",
    }
}

use SubGenreType as S;

const SHARED_NAME_SUFFIX: &str = "_sub";

static SUBGENRE_RESOLVER: Resolver<SubGenreType> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("contemporary", S::ContemporaryRomance),
        ("historical", S::HistoricalRomance),
        ("paranormal", S::ParanormalRomance),
        ("suspense", S::RomanticSuspense),
        ("dark", S::DarkRomance),
        ("comedy", S::RomanticComedy),
        ("sports", S::SportsRomance),
        ("billionaire", S::BillionaireRomance),
        ("enemies", S::EnemiesToLovers),
        ("second_chance", S::SecondChanceRomance),
        ("high", S::HighFantasy),
        ("urban", S::UrbanFantasy),
        ("epic", S::EpicFantasy),
        ("cozy", S::CozyFantasySub),
        ("romantasy", S::RomantasySub),
        ("portal", S::PortalFantasy),
        ("fairy_tale", S::FairyTaleRetelling),
        ("retelling", S::FairyTaleRetelling),
        ("sword", S::SwordAndSorcery),
        ("cozy_mystery", S::CozyMystery),
        ("police", S::PoliceProcedural),
        ("detective", S::DetectiveFiction),
        ("psychological", S::PsychologicalThriller),
        ("domestic", S::DomesticThriller),
        ("legal", S::LegalThriller),
        ("techno", S::TechnoThriller),
        ("spy", S::SpyThriller),
        ("medical", S::MedicalThriller),
        ("space", S::SpaceOpera),
        ("cyber", S::Cyberpunk),
        ("dystopian", S::DystopianSf),
        ("hard", S::HardSf),
        ("soft", S::SoftSf),
        ("time", S::TimeTravel),
        ("apocalyptic", S::PostApocalyptic),
        ("alien", S::AlienContact),
        ("bio", S::Biopunk),
        ("climate", S::CliFiSub),
        ("motivation", S::Motivational),
        ("finance", S::PersonalFinance),
        ("career", S::CareerDevelopment),
        ("relationship", S::RelationshipAdvice),
        ("meditation", S::Mindfulness),
        ("productivity", S::Productivity),
        ("entrepreneur", S::Entrepreneurship),
        ("leadership", S::Leadership),
        ("marketing", S::Marketing),
        ("strategy", S::BusinessStrategy),
        ("fitness", S::Fitness),
        ("nutrition", S::Nutrition),
        ("mental_health", S::MentalHealth),
        ("cooking", S::CookingSub),
        ("travel", S::TravelGuide),
        ("diy", S::DiyCrafts),
        ("tech", S::TechnologyGuide),
        ("crime", S::TrueCrimeSub),
        ("celebrity", S::CelebrityBiography),
        ("children_book", S::ChildrenBook),
    ],
    compounds: &[],
    ignore_suffix: Some(SHARED_NAME_SUFFIX),
};

impl Taxonomy for SubGenreType {
    const KIND: &'static str = "subgenre";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let key = self.as_str();
        title_case(key.strip_suffix(SHARED_NAME_SUFFIX).unwrap_or(key))
    }

    fn description(self) -> String {
        format!(
            "Subgenre focusing on {} elements and themes.",
            self.display_name().to_lowercase()
        )
    }

    fn resolver() -> &'static Resolver<Self> {
        &SUBGENRE_RESOLVER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_to_itself() {
        for subgenre in SubGenreType::all() {
            assert_eq!(SubGenreType::resolve(subgenre.key()).unwrap(), *subgenre);
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_target() {
        for (alias, subgenre) in SubGenreType::resolver().aliases() {
            assert_eq!(SubGenreType::resolve(alias).unwrap(), *subgenre, "alias {alias}");
        }
    }

    #[test]
    fn test_display_name_drops_shared_suffix() {
        assert_eq!(SubGenreType::CozyFantasySub.display_name(), "Cozy Fantasy");
        assert_eq!(SubGenreType::CliFiSub.display_name(), "Cli Fi");
        assert_eq!(SubGenreType::DarkRomance.display_name(), "Dark Romance");
    }

    #[test]
    fn test_alias_substring_in_definition_order() {
        assert_eq!(SubGenreType::resolve("dark fantasy").unwrap(), SubGenreType::DarkFantasy);
        // "dark" is the first alias inside the input
        assert_eq!(SubGenreType::resolve("very dark stuff").unwrap(), SubGenreType::DarkRomance);
        assert_eq!(SubGenreType::resolve("space adventure").unwrap(), SubGenreType::SpaceOpera);
    }

    #[test]
    fn test_short_alias_over_matching_is_preserved() {
        // "time" sits inside "sometimes"
        assert_eq!(SubGenreType::resolve("sometimes").unwrap(), SubGenreType::TimeTravel);
    }

    #[test]
    fn test_canonical_substring_ignores_suffix() {
        assert_eq!(SubGenreType::resolve("cli-fi").unwrap(), SubGenreType::CliFiSub);
        assert_eq!(SubGenreType::resolve("Coming of Age").unwrap(), SubGenreType::ComingOfAgeSub);
        assert_eq!(SubGenreType::resolve("slasher film").unwrap(), SubGenreType::Slasher);
    }
}
