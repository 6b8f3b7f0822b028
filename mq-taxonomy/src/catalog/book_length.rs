//! Manuscript length categories
//!
//! Industry word-count bands from flash fiction to reference works. A band
//! knows its readership, how publishable it is and how hard it is to
//! generate end to end.

use super::levels::{Difficulty, PublishingViability};
use crate::engine::{normalize, taxonomy, title_case, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

/// Average adult reading speed
const WORDS_PER_MINUTE: u32 = 250;
/// Manuscript words per printed page
const WORDS_PER_PAGE: u32 = 250;

taxonomy! {
    /// Length category of a manuscript
    pub enum BookLength {
        FlashFiction => "flash_fiction",
        MicroFiction => "micro_fiction",
        ShortStory => "short_story",
        Novelette => "novelette",
        Novella => "novella",
        ShortNovel => "short_novel",
        StandardNovel => "standard_novel",
        LongNovel => "long_novel",
        EpicNovel => "epic_novel",
        MegaNovel => "mega_novel",
        BabyBoardBook => "baby_board_book",
        ToddlerPictureBook => "toddler_picture_book",
        PictureBook => "picture_book",
        EarlyReader => "early_reader",
        ChapterBook => "chapter_book",
        MiddleGrade => "middle_grade",
        UpperMiddleGrade => "upper_middle_grade",
        YoungAdult => "young_adult",
        NewAdult => "new_adult",
        BlogPost => "blog_post",
        Article => "article",
        Essay => "essay",
        LongFormArticle => "long_form_article",
        Guide => "guide",
        ShortNonFiction => "short_non_fiction",
        StandardNonFiction => "standard_non_fiction",
        ComprehensiveNonFiction => "comprehensive_non_fiction",
        AcademicBook => "academic_book",
        ReferenceBook => "reference_book",
        Screenplay => "screenplay",
        StagePlay => "stage_play",
        PoetryChapbook => "poetry_chapbook",
        PoetryCollection => "poetry_collection",
        GraphicNovelScript => "graphic_novel_script",
    }
}

use BookLength as BL;

static BOOK_LENGTH_RESOLVER: Resolver<BookLength> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CompactSubstring,
    ],
    aliases: &[
        // fiction
        ("flash", BL::FlashFiction),
        ("micro", BL::MicroFiction),
        ("short_story", BL::ShortStory),
        ("story", BL::ShortStory),
        ("novelette", BL::Novelette),
        ("novella", BL::Novella),
        ("short_novel", BL::ShortNovel),
        ("novel", BL::StandardNovel),
        ("standard", BL::StandardNovel),
        ("long_novel", BL::LongNovel),
        ("epic", BL::EpicNovel),
        ("mega", BL::MegaNovel),
        // children
        ("board_book", BL::BabyBoardBook),
        ("baby", BL::BabyBoardBook),
        ("toddler", BL::ToddlerPictureBook),
        ("picture", BL::PictureBook),
        ("early", BL::EarlyReader),
        ("chapter", BL::ChapterBook),
        ("middle_grade", BL::MiddleGrade),
        ("mg", BL::MiddleGrade),
        ("upper_mg", BL::UpperMiddleGrade),
        ("young_adult", BL::YoungAdult),
        ("ya", BL::YoungAdult),
        ("new_adult", BL::NewAdult),
        ("na", BL::NewAdult),
        // non-fiction
        ("blog", BL::BlogPost),
        ("post", BL::BlogPost),
        ("article", BL::Article),
        ("essay", BL::Essay),
        ("guide", BL::Guide),
        ("non_fiction", BL::StandardNonFiction),
        ("nonfiction", BL::StandardNonFiction),
        ("business_book", BL::StandardNonFiction),
        ("self_help", BL::StandardNonFiction),
        ("memoir", BL::StandardNonFiction),
        ("biography", BL::ComprehensiveNonFiction),
        ("academic", BL::AcademicBook),
        ("textbook", BL::AcademicBook),
        ("reference", BL::ReferenceBook),
        // specialized
        ("screenplay", BL::Screenplay),
        ("script", BL::Screenplay),
        ("play", BL::StagePlay),
        ("poetry", BL::PoetryCollection),
        ("poems", BL::PoetryCollection),
        ("chapbook", BL::PoetryChapbook),
        ("graphic", BL::GraphicNovelScript),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static VIABILITY_TIER: Tier<BookLength, PublishingViability> = Tier {
    levels: &[
        (
            PublishingViability::High,
            &[BL::StandardNovel, BL::MiddleGrade, BL::YoungAdult, BL::PictureBook, BL::StandardNonFiction],
        ),
        (
            PublishingViability::Moderate,
            &[
                BL::ShortNovel,
                BL::LongNovel,
                BL::UpperMiddleGrade,
                BL::ComprehensiveNonFiction,
                BL::ShortNonFiction,
                BL::EarlyReader,
                BL::ChapterBook,
            ],
        ),
        (
            PublishingViability::Low,
            &[
                BL::Novella,
                BL::EpicNovel,
                BL::MegaNovel,
                BL::FlashFiction,
                BL::ShortStory,
                BL::Novelette,
            ],
        ),
    ],
    default: PublishingViability::Specialized,
};

static AI_DIFFICULTY_TIER: Tier<BookLength, Difficulty> = Tier {
    levels: &[
        (
            Difficulty::Easy,
            &[
                BL::MicroFiction,
                BL::FlashFiction,
                BL::ShortStory,
                BL::BlogPost,
                BL::Article,
                BL::Essay,
                BL::PictureBook,
                BL::PoetryChapbook,
            ],
        ),
        (
            Difficulty::Medium,
            &[
                BL::Novelette,
                BL::EarlyReader,
                BL::ChapterBook,
                BL::Guide,
                BL::ShortNonFiction,
                BL::LongFormArticle,
            ],
        ),
        (
            Difficulty::Hard,
            &[
                BL::Novella,
                BL::ShortNovel,
                BL::MiddleGrade,
                BL::StandardNonFiction,
                BL::YoungAdult,
            ],
        ),
    ],
    default: Difficulty::VeryHard,
};

const CHILDREN_LENGTHS: &[BookLength] = &[
    BL::BabyBoardBook,
    BL::ToddlerPictureBook,
    BL::PictureBook,
    BL::EarlyReader,
    BL::ChapterBook,
    BL::MiddleGrade,
    BL::UpperMiddleGrade,
    BL::YoungAdult,
    BL::NewAdult,
];

const LONG_GENRES: &[&str] = &["fantasy", "science_fiction", "historical_fiction", "epic"];
const SHORT_GENRES: &[&str] = &["romance", "mystery", "thriller", "contemporary"];
const CHILDREN_GENRES: &[&str] = &["children", "middle_grade", "young_adult", "picture_book"];

impl BookLength {
    /// Inclusive word-count band
    pub fn word_count_range(self) -> (u32, u32) {
        match self {
            BL::MicroFiction => (50, 300),
            BL::FlashFiction => (100, 1_000),
            BL::ShortStory => (1_000, 7_500),
            BL::Novelette => (7_500, 17_500),
            BL::Novella => (17_500, 40_000),
            BL::ShortNovel => (40_000, 60_000),
            BL::StandardNovel => (60_000, 90_000),
            BL::LongNovel => (90_000, 120_000),
            BL::EpicNovel => (120_000, 200_000),
            BL::MegaNovel => (200_000, 500_000),
            BL::BabyBoardBook => (0, 100),
            BL::ToddlerPictureBook => (100, 500),
            BL::PictureBook => (500, 1_000),
            BL::EarlyReader => (1_000, 2_500),
            BL::ChapterBook => (3_000, 10_000),
            BL::MiddleGrade => (25_000, 45_000),
            BL::UpperMiddleGrade => (40_000, 65_000),
            BL::YoungAdult => (45_000, 85_000),
            BL::NewAdult => (60_000, 90_000),
            BL::BlogPost => (300, 2_000),
            BL::Article => (500, 3_000),
            BL::Essay => (1_000, 5_000),
            BL::LongFormArticle => (3_000, 10_000),
            BL::Guide => (5_000, 25_000),
            BL::ShortNonFiction => (25_000, 50_000),
            BL::StandardNonFiction => (50_000, 80_000),
            BL::ComprehensiveNonFiction => (80_000, 150_000),
            BL::AcademicBook => (80_000, 120_000),
            BL::ReferenceBook => (100_000, 300_000),
            BL::Screenplay => (15_000, 25_000),
            BL::StagePlay => (15_000, 30_000),
            BL::PoetryChapbook => (500, 1_500),
            BL::PoetryCollection => (1_500, 5_000),
            BL::GraphicNovelScript => (10_000, 30_000),
        }
    }

    pub fn min_words(self) -> u32 {
        self.word_count_range().0
    }

    pub fn max_words(self) -> u32 {
        self.word_count_range().1
    }

    /// Midpoint of the band, rounded down
    pub fn target_words(self) -> u32 {
        let (min, max) = self.word_count_range();
        (min + max) / 2
    }

    pub fn target_age_range(self) -> Option<&'static str> {
        let range = match self {
            BL::BabyBoardBook => "0-2 years",
            BL::ToddlerPictureBook => "2-4 years",
            BL::PictureBook => "3-8 years",
            BL::EarlyReader => "5-8 years",
            BL::ChapterBook => "6-10 years",
            BL::MiddleGrade => "8-12 years",
            BL::UpperMiddleGrade => "10-14 years",
            BL::YoungAdult => "12+ years",
            BL::NewAdult => "18-30 years",
            BL::ShortStory
            | BL::Novelette
            | BL::Novella
            | BL::ShortNovel
            | BL::StandardNovel
            | BL::LongNovel
            | BL::EpicNovel
            | BL::MegaNovel => "Adult",
            _ => return None,
        };
        Some(range)
    }

    pub fn is_fiction(self) -> bool {
        matches!(
            self,
            BL::MicroFiction
                | BL::FlashFiction
                | BL::ShortStory
                | BL::Novelette
                | BL::Novella
                | BL::ShortNovel
                | BL::StandardNovel
                | BL::LongNovel
                | BL::EpicNovel
                | BL::MegaNovel
                | BL::PictureBook
                | BL::EarlyReader
                | BL::ChapterBook
                | BL::MiddleGrade
                | BL::UpperMiddleGrade
                | BL::YoungAdult
                | BL::NewAdult
                | BL::Screenplay
                | BL::StagePlay
                | BL::GraphicNovelScript
        )
    }

    pub fn publishing_viability(self) -> PublishingViability {
        VIABILITY_TIER.classify(self)
    }

    pub fn ai_generation_difficulty(self) -> Difficulty {
        AI_DIFFICULTY_TIER.classify(self)
    }

    /// Reading time of the target word count at 250 words a minute
    ///
    /// Whole minutes under an hour, then hours, then days, one decimal.
    pub fn estimated_reading_time(self) -> String {
        let minutes = f64::from(self.target_words()) / f64::from(WORDS_PER_MINUTE);
        if minutes < 60.0 {
            format!("{} minutes", minutes as u32)
        } else if minutes < 1440.0 {
            format!("{:.1} hours", minutes / 60.0)
        } else {
            format!("{:.1} days", minutes / 1440.0)
        }
    }

    pub fn page_count_estimate(self) -> String {
        let min_pages = self.min_words() / WORDS_PER_PAGE;
        let max_pages = self.max_words() / WORDS_PER_PAGE;
        if min_pages == max_pages {
            format!("~{min_pages} pages")
        } else {
            format!("{min_pages}-{max_pages} pages")
        }
    }

    /// First category whose band holds the count, else the nearest band
    ///
    /// Bands overlap, so definition order decides between them.
    pub fn from_word_count(word_count: u32) -> BookLength {
        let mut nearest = (u32::MAX, BL::StandardNovel);
        for &length in Self::ALL {
            let (min, max) = length.word_count_range();
            if (min..=max).contains(&word_count) {
                return length;
            }
            let distance = if word_count < min { min - word_count } else { word_count - max };
            if distance < nearest.0 {
                nearest = (distance, length);
            }
        }
        nearest.1
    }

    /// Whether the length suits the genre
    ///
    /// Long genres take precedence over short ones, which take precedence
    /// over children's genres. Genres outside all three allow any length.
    pub fn is_appropriate_for_genre(self, genre: &str) -> bool {
        let genre = normalize(genre);
        let hits = |fragments: &[&str]| fragments.iter().any(|fragment| genre.contains(fragment));

        if hits(LONG_GENRES) {
            matches!(self, BL::StandardNovel | BL::LongNovel | BL::EpicNovel)
        } else if hits(SHORT_GENRES) {
            matches!(self, BL::ShortNovel | BL::StandardNovel)
        } else if hits(CHILDREN_GENRES) {
            CHILDREN_LENGTHS.contains(&self)
        } else {
            true
        }
    }

    pub fn children() -> &'static [BookLength] {
        CHILDREN_LENGTHS
    }

    pub fn fiction() -> Vec<BookLength> {
        Self::ALL.iter().copied().filter(|length| length.is_fiction()).collect()
    }

    pub fn non_fiction() -> Vec<BookLength> {
        Self::ALL.iter().copied().filter(|length| !length.is_fiction()).collect()
    }

    /// Lengths an AI can draft at easy or medium difficulty
    pub fn ai_friendly() -> Vec<BookLength> {
        Self::ALL
            .iter()
            .copied()
            .filter(|length| length.ai_generation_difficulty() <= Difficulty::Medium)
            .collect()
    }

    pub fn publishable() -> Vec<BookLength> {
        VIABILITY_TIER.members(PublishingViability::High)
    }
}

impl Taxonomy for BookLength {
    const KIND: &'static str = "book length";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        match self {
            BL::LongFormArticle => "Long-Form Article".to_string(),
            BL::ShortNonFiction => "Short Non-Fiction".to_string(),
            BL::StandardNonFiction => "Standard Non-Fiction".to_string(),
            BL::ComprehensiveNonFiction => "Comprehensive Non-Fiction".to_string(),
            _ => title_case(self.as_str()),
        }
    }

    fn description(self) -> String {
        let (min, max) = self.word_count_range();
        format!(
            "{} of {min}-{max} words ({})",
            self.display_name(),
            self.page_count_estimate()
        )
    }

    fn resolver() -> &'static Resolver<Self> {
        &BOOK_LENGTH_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "min_words": self.min_words(),
            "max_words": self.max_words(),
            "target_words": self.target_words(),
            "target_age_range": self.target_age_range(),
            "is_fiction": self.is_fiction(),
            "publishing_viability": self.publishing_viability(),
            "ai_generation_difficulty": self.ai_generation_difficulty(),
            "estimated_reading_time": self.estimated_reading_time(),
            "page_count_estimate": self.page_count_estimate(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;

    #[test]
    fn test_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<BookLength>();
        assert!(testing::assert_aliases_resolve::<BookLength>().is_empty());
    }

    #[test]
    fn test_fuzzy_resolution() {
        assert_eq!(BookLength::resolve("novel").unwrap(), BL::StandardNovel);
        assert_eq!(BookLength::resolve("YA").unwrap(), BL::YoungAdult);
        assert_eq!(BookLength::resolve("picture book").unwrap(), BL::PictureBook);
        assert_eq!(BookLength::resolve("short story").unwrap(), BL::ShortStory);
        assert_eq!(BookLength::resolve("memoir").unwrap(), BL::StandardNonFiction);
        assert_eq!(BookLength::resolve("novellas").unwrap(), BL::Novella);
        // "novel" is listed before "graphic"
        assert_eq!(BookLength::resolve("graphic novel").unwrap(), BL::StandardNovel);
        assert_eq!(
            BookLength::resolver().resolve_with_step("stageplay").unwrap(),
            (BL::StagePlay, MatchStep::AliasSubstring)
        );
        assert_eq!(
            BookLength::resolver().resolve_with_step("MiddleGrade").unwrap(),
            (BL::MiddleGrade, MatchStep::CompactSubstring)
        );
        assert!(BookLength::resolve("zzz").is_err());
    }

    #[test]
    fn test_word_counts() {
        assert_eq!(BL::StandardNovel.word_count_range(), (60_000, 90_000));
        assert_eq!(BL::StandardNovel.target_words(), 75_000);
        assert_eq!(BL::ShortStory.target_words(), 4_250);
        assert_eq!(BL::StandardNovel.page_count_estimate(), "240-360 pages");
        assert_eq!(BL::BabyBoardBook.page_count_estimate(), "~0 pages");
    }

    #[test]
    fn test_estimated_reading_time() {
        assert_eq!(BL::ShortStory.estimated_reading_time(), "17 minutes");
        assert_eq!(BL::StandardNovel.estimated_reading_time(), "5.0 hours");
        assert_eq!(BL::MegaNovel.estimated_reading_time(), "23.3 hours");
        assert_eq!(BL::BabyBoardBook.estimated_reading_time(), "0 minutes");
    }

    #[test]
    fn test_from_word_count() {
        assert_eq!(BookLength::from_word_count(500), BL::FlashFiction);
        assert_eq!(BookLength::from_word_count(5_000), BL::ShortStory);
        assert_eq!(BookLength::from_word_count(35_000), BL::Novella);
        assert_eq!(BookLength::from_word_count(75_000), BL::StandardNovel);
        assert_eq!(BookLength::from_word_count(150_000), BL::EpicNovel);
        assert_eq!(BookLength::from_word_count(0), BL::BabyBoardBook);
        // past every band: the nearest is the mega novel
        assert_eq!(BookLength::from_word_count(900_000), BL::MegaNovel);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(BL::StandardNovel.publishing_viability(), PublishingViability::High);
        assert_eq!(BL::Screenplay.publishing_viability(), PublishingViability::Specialized);
        assert_eq!(BL::Essay.ai_generation_difficulty(), Difficulty::Easy);
        assert_eq!(BL::StagePlay.ai_generation_difficulty(), Difficulty::VeryHard);
        assert_eq!(BL::Novella.target_age_range(), Some("Adult"));
        assert_eq!(BL::Essay.target_age_range(), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(BookLength::children().len(), 9);
        assert_eq!(BookLength::fiction().len(), 20);
        assert_eq!(BookLength::fiction().len() + BookLength::non_fiction().len(), BookLength::ALL.len());
        assert_eq!(BookLength::ai_friendly().len(), 14);
        assert_eq!(
            BookLength::publishable(),
            vec![BL::StandardNovel, BL::PictureBook, BL::MiddleGrade, BL::YoungAdult, BL::StandardNonFiction]
        );
    }

    #[test]
    fn test_genre_appropriateness() {
        assert!(BL::EpicNovel.is_appropriate_for_genre("Epic Fantasy"));
        assert!(!BL::Novella.is_appropriate_for_genre("fantasy"));
        // long genres win over short ones
        assert!(!BL::ShortNovel.is_appropriate_for_genre("fantasy romance"));
        assert!(BL::ShortNovel.is_appropriate_for_genre("romance"));
        assert!(BL::PictureBook.is_appropriate_for_genre("children"));
        assert!(BL::Essay.is_appropriate_for_genre("cookbook"));
    }
}
