//! Target readerships
//!
//! Who a book is written for: age bands, genre fans, professions and
//! reading habits. Each audience carries the reading level, session length
//! and marketing channels that shape how a book for it is written and sold.

use super::levels::ReadingLevel;
use crate::engine::{normalize, taxonomy, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// Readership a book targets
    pub enum AudienceType {
        GeneralReaders => "general_readers",
        MainstreamAudience => "mainstream_audience",
        CasualReaders => "casual_readers",
        AvidReaders => "avid_readers",
        Children => "children",
        MiddleGrade => "middle_grade",
        YoungAdult => "young_adult",
        NewAdult => "new_adult",
        Adult => "adult",
        MatureAdult => "mature_adult",
        Seniors => "seniors",
        GenreFans => "genre_fans",
        FantasyReaders => "fantasy_readers",
        SciFiFans => "sci_fi_fans",
        MysteryLovers => "mystery_lovers",
        RomanceReaders => "romance_readers",
        HorrorFans => "horror_fans",
        LiteraryFictionReaders => "literary_fiction_readers",
        NonFictionReaders => "non_fiction_readers",
        Professionals => "professionals",
        BusinessProfessionals => "business_professionals",
        HealthcareWorkers => "healthcare_workers",
        Educators => "educators",
        Lawyers => "lawyers",
        Engineers => "engineers",
        Marketers => "marketers",
        Consultants => "consultants",
        Managers => "managers",
        Executives => "executives",
        Entrepreneurs => "entrepreneurs",
        Academics => "academics",
        Researchers => "researchers",
        Scholars => "scholars",
        Students => "students",
        GraduateStudents => "graduate_students",
        UndergraduateStudents => "undergraduate_students",
        LifelongLearners => "lifelong_learners",
        Beginners => "beginners",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Experts => "experts",
        Hobbyists => "hobbyists",
        Enthusiasts => "enthusiasts",
        Creatives => "creatives",
        Artists => "artists",
        Writers => "writers",
        Designers => "designers",
        Musicians => "musicians",
        Filmmakers => "filmmakers",
        TechnicalAudience => "technical_audience",
        Developers => "developers",
        DataScientists => "data_scientists",
        Parents => "parents",
        NewParents => "new_parents",
        WorkingParents => "working_parents",
        FitnessEnthusiasts => "fitness_enthusiasts",
        HealthConscious => "health_conscious",
        SpiritualSeekers => "spiritual_seekers",
        SelfImprovement => "self_improvement",
        TravelEnthusiasts => "travel_enthusiasts",
        FoodLovers => "food_lovers",
        Collectors => "collectors",
        Gamers => "gamers",
        Investors => "investors",
        Retirees => "retirees",
        Military => "military",
        Veterans => "veterans",
        Immigrants => "immigrants",
        Caregivers => "caregivers",
        Activists => "activists",
        Commuters => "commuters",
        BedtimeReaders => "bedtime_readers",
        AudiobookListeners => "audiobook_listeners",
        QuickReaders => "quick_readers",
        SlowReaders => "slow_readers",
        ReReaders => "re_readers",
        Women => "women",
        Men => "men",
        Adults => "adults",
        Families => "families",
        Teens => "teens",
        Adventurers => "adventurers",
        LifestyleReaders => "lifestyle_readers",
    }
}

use AudienceType as AT;

static AUDIENCE_RESOLVER: Resolver<AudienceType> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("general", AT::GeneralReaders),
        ("mainstream", AT::MainstreamAudience),
        ("casual", AT::CasualReaders),
        ("avid", AT::AvidReaders),
        ("kids", AT::Children),
        ("child", AT::Children),
        ("mg", AT::MiddleGrade),
        ("ya", AT::YoungAdult),
        ("teen", AT::YoungAdult),
        ("teenager", AT::YoungAdult),
        ("na", AT::NewAdult),
        ("adults", AT::Adult),
        ("mature", AT::MatureAdult),
        ("seniors", AT::Seniors),
        ("elderly", AT::Seniors),
        ("fantasy", AT::FantasyReaders),
        ("sci_fi", AT::SciFiFans),
        ("science_fiction", AT::SciFiFans),
        ("mystery", AT::MysteryLovers),
        ("romance", AT::RomanceReaders),
        ("horror", AT::HorrorFans),
        ("literary", AT::LiteraryFictionReaders),
        ("nonfiction", AT::NonFictionReaders),
        ("non_fiction", AT::NonFictionReaders),
        ("business", AT::BusinessProfessionals),
        ("healthcare", AT::HealthcareWorkers),
        ("medical", AT::HealthcareWorkers),
        ("teachers", AT::Educators),
        ("education", AT::Educators),
        ("legal", AT::Lawyers),
        ("engineering", AT::Engineers),
        ("marketing", AT::Marketers),
        ("management", AT::Managers),
        ("executive", AT::Executives),
        ("entrepreneur", AT::Entrepreneurs),
        ("academic", AT::Academics),
        ("researcher", AT::Researchers),
        ("scholar", AT::Scholars),
        ("student", AT::Students),
        ("grad", AT::GraduateStudents),
        ("undergrad", AT::UndergraduateStudents),
        ("learner", AT::LifelongLearners),
        ("beginner", AT::Beginners),
        ("novice", AT::Beginners),
        ("expert", AT::Experts),
        ("hobbyist", AT::Hobbyists),
        ("hobby", AT::Hobbyists),
        ("creative", AT::Creatives),
        ("artist", AT::Artists),
        ("writer", AT::Writers),
        ("designer", AT::Designers),
        ("musician", AT::Musicians),
        ("filmmaker", AT::Filmmakers),
        ("technical", AT::TechnicalAudience),
        ("developer", AT::Developers),
        ("programmer", AT::Developers),
        ("data", AT::DataScientists),
        ("parent", AT::Parents),
        ("mom", AT::Parents),
        ("dad", AT::Parents),
        ("fitness", AT::FitnessEnthusiasts),
        ("health", AT::HealthConscious),
        ("spiritual", AT::SpiritualSeekers),
        ("improvement", AT::SelfImprovement),
        ("travel", AT::TravelEnthusiasts),
        ("food", AT::FoodLovers),
        ("cooking", AT::FoodLovers),
        ("gamer", AT::Gamers),
        ("investor", AT::Investors),
        ("retired", AT::Retirees),
        ("veteran", AT::Veterans),
        ("caregiver", AT::Caregivers),
        ("commuter", AT::Commuters),
        ("audiobook", AT::AudiobookListeners),
        ("audio", AT::AudiobookListeners),
        ("quick", AT::QuickReaders),
        ("fast", AT::QuickReaders),
        ("slow", AT::SlowReaders),
        ("women", AT::Women),
        ("female", AT::Women),
        ("men", AT::Men),
        ("male", AT::Men),
        ("families", AT::Families),
        ("family", AT::Families),
        ("teens", AT::Teens),
        ("teenage", AT::Teens),
        ("adventure", AT::Adventurers),
        ("adventurer", AT::Adventurers),
        ("lifestyle", AT::LifestyleReaders),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static READING_LEVEL_TIER: Tier<AudienceType, ReadingLevel> = Tier {
    levels: &[
        (ReadingLevel::Elementary, &[AT::Children]),
        (ReadingLevel::Basic, &[AT::CasualReaders, AT::BedtimeReaders]),
        (
            ReadingLevel::Advanced,
            &[
                AT::NewAdult,
                AT::Adult,
                AT::Professionals,
                AT::Students,
                AT::GenreFans,
                AT::AvidReaders,
                AT::Intermediate,
                AT::Enthusiasts,
            ],
        ),
        (
            ReadingLevel::Expert,
            &[
                AT::Academics,
                AT::Researchers,
                AT::Scholars,
                AT::Experts,
                AT::TechnicalAudience,
                AT::LiteraryFictionReaders,
                AT::GraduateStudents,
                AT::Advanced,
            ],
        ),
    ],
    default: ReadingLevel::Intermediate,
};

/// Genre fragment -> audiences, matched by substring
static GENRE_AUDIENCES: &[(&str, &[AudienceType])] = &[
    (
        "fantasy",
        &[AT::FantasyReaders, AT::GenreFans, AT::YoungAdult, AT::AvidReaders, AT::GeneralReaders],
    ),
    (
        "science_fiction",
        &[AT::SciFiFans, AT::GenreFans, AT::TechnicalAudience, AT::Adults, AT::AvidReaders],
    ),
    (
        "romance",
        &[AT::RomanceReaders, AT::GenreFans, AT::Women, AT::NewAdult, AT::Adult],
    ),
    (
        "mystery",
        &[AT::MysteryLovers, AT::GenreFans, AT::MatureAdult, AT::AvidReaders, AT::GeneralReaders],
    ),
    (
        "horror",
        &[AT::HorrorFans, AT::GenreFans, AT::YoungAdult, AT::Adult, AT::AvidReaders],
    ),
    (
        "young_adult",
        &[AT::YoungAdult, AT::NewAdult, AT::MiddleGrade, AT::Teens, AT::GeneralReaders],
    ),
    (
        "children",
        &[AT::Children, AT::MiddleGrade, AT::Parents, AT::Educators, AT::Families],
    ),
    (
        "business",
        &[
            AT::BusinessProfessionals,
            AT::Entrepreneurs,
            AT::Managers,
            AT::Executives,
            AT::Professionals,
        ],
    ),
    (
        "self_help",
        &[
            AT::SelfImprovement,
            AT::GeneralReaders,
            AT::Professionals,
            AT::LifelongLearners,
            AT::Adults,
        ],
    ),
    (
        "biography",
        &[
            AT::GeneralReaders,
            AT::AvidReaders,
            AT::MatureAdult,
            AT::NonFictionReaders,
            AT::Academics,
        ],
    ),
    (
        "history",
        &[AT::Academics, AT::Scholars, AT::NonFictionReaders, AT::MatureAdult, AT::AvidReaders],
    ),
    (
        "health",
        &[
            AT::HealthConscious,
            AT::FitnessEnthusiasts,
            AT::HealthcareWorkers,
            AT::GeneralReaders,
            AT::Professionals,
        ],
    ),
    (
        "cooking",
        &[AT::FoodLovers, AT::Hobbyists, AT::GeneralReaders, AT::Families, AT::Professionals],
    ),
    (
        "travel",
        &[
            AT::TravelEnthusiasts,
            AT::GeneralReaders,
            AT::Adventurers,
            AT::LifestyleReaders,
            AT::AvidReaders,
        ],
    ),
    (
        "technical",
        &[AT::TechnicalAudience, AT::Developers, AT::Engineers, AT::Professionals, AT::Experts],
    ),
    (
        "literary_fiction",
        &[
            AT::LiteraryFictionReaders,
            AT::Academics,
            AT::AvidReaders,
            AT::MatureAdult,
            AT::Scholars,
        ],
    ),
];

const GENERAL_AUDIENCES: &[AudienceType] = &[AT::GeneralReaders, AT::MainstreamAudience, AT::Adult];

const PROFESSIONAL_AUDIENCES: &[AudienceType] = &[
    AT::Professionals,
    AT::BusinessProfessionals,
    AT::HealthcareWorkers,
    AT::Educators,
    AT::Lawyers,
    AT::Engineers,
    AT::Marketers,
    AT::Consultants,
    AT::Managers,
    AT::Executives,
    AT::Entrepreneurs,
];

const CREATIVE_AUDIENCES: &[AudienceType] = &[
    AT::Creatives,
    AT::Artists,
    AT::Writers,
    AT::Designers,
    AT::Musicians,
    AT::Filmmakers,
];

const ACADEMIC_AUDIENCES: &[AudienceType] = &[
    AT::Academics,
    AT::Researchers,
    AT::Scholars,
    AT::Students,
    AT::GraduateStudents,
    AT::UndergraduateStudents,
    AT::LifelongLearners,
];

impl AudienceType {
    pub fn age_range(self) -> Option<&'static str> {
        let range = match self {
            AT::Children => "5-12",
            AT::MiddleGrade => "8-12",
            AT::YoungAdult => "13-18",
            AT::NewAdult => "18-25",
            AT::Adult => "25-65",
            AT::MatureAdult => "40-75",
            AT::Seniors => "65+",
            AT::UndergraduateStudents => "18-22",
            AT::GraduateStudents => "22-35",
            AT::NewParents => "25-40",
            AT::WorkingParents => "25-50",
            AT::Retirees => "60+",
            _ => return None,
        };
        Some(range)
    }

    /// Oldest minimum age a content warning may carry for this readership
    ///
    /// Only the age-banded audiences restrict content; every other
    /// readership is treated as adult.
    pub fn max_content_age(self) -> u8 {
        match self {
            AT::Children => 8,
            AT::MiddleGrade => 10,
            AT::YoungAdult | AT::Teens => 13,
            AT::NewAdult => 16,
            _ => 18,
        }
    }

    pub fn reading_level(self) -> ReadingLevel {
        READING_LEVEL_TIER.classify(self)
    }

    /// Typical length of one reading session
    pub fn typical_reading_time(self) -> &'static str {
        match self {
            AT::Children => "15-30 minutes",
            AT::MiddleGrade => "30-45 minutes",
            AT::CasualReaders | AT::BedtimeReaders | AT::Professionals => "30-60 minutes",
            AT::Commuters => "20-45 minutes",
            AT::QuickReaders => "60-120 minutes",
            AT::AvidReaders => "90-180 minutes",
            AT::Academics => "60-240 minutes",
            AT::Students => "45-90 minutes",
            AT::Retirees => "60-180 minutes",
            _ => "45-90 minutes",
        }
    }

    pub fn preferred_content_length(self) -> &'static str {
        match self {
            AT::Children => "short (under 50 pages)",
            AT::MiddleGrade => "short to medium (50-200 pages)",
            AT::YoungAdult => "medium (200-400 pages)",
            AT::CasualReaders | AT::Professionals => "medium (200-350 pages)",
            AT::Commuters => "medium (250-400 pages)",
            AT::AvidReaders | AT::QuickReaders => "any length",
            AT::Academics => "long (300+ pages)",
            AT::TechnicalAudience => "comprehensive (400+ pages)",
            AT::SlowReaders => "medium to long (250-500 pages)",
            _ => "medium (200-400 pages)",
        }
    }

    pub fn content_complexity_preference(self) -> &'static str {
        match self {
            AT::Children | AT::MiddleGrade | AT::Beginners => "simple",
            AT::Advanced
            | AT::Experts
            | AT::Academics
            | AT::LiteraryFictionReaders
            | AT::TechnicalAudience => "complex",
            AT::Professionals => "moderate to complex",
            _ => "moderate",
        }
    }

    pub fn marketing_channels(self) -> &'static [&'static str] {
        match self {
            AT::Children => &["parent blogs", "school libraries", "children's bookstores", "family magazines"],
            AT::YoungAdult => &["social media", "BookTok", "YA book blogs", "school libraries", "teen magazines"],
            AT::GenreFans => &[
                "genre-specific forums",
                "convention marketing",
                "specialized bookstores",
                "genre magazines",
            ],
            AT::Professionals => &[
                "LinkedIn",
                "industry publications",
                "professional associations",
                "business magazines",
            ],
            AT::Academics => &[
                "academic journals",
                "university bookstores",
                "scholarly conferences",
                "research networks",
            ],
            AT::Entrepreneurs => &["business podcasts", "startup communities", "LinkedIn", "business conferences"],
            AT::Parents => &["parenting blogs", "family magazines", "parent social groups", "school networks"],
            AT::FitnessEnthusiasts => &["fitness magazines", "gym partnerships", "health blogs", "wellness expos"],
            AT::TechnicalAudience => &[
                "tech blogs",
                "developer communities",
                "technical conferences",
                "professional networks",
            ],
            AT::Seniors => &["library programs", "senior centers", "traditional media", "word-of-mouth"],
            _ => &["social media", "online bookstores", "book blogs", "traditional media"],
        }
    }

    /// Audiences for every genre fragment the normalized genre contains,
    /// sorted by display name
    pub fn for_genre(genre: &str) -> Vec<AudienceType> {
        let genre = normalize(genre);
        let mut recommended: Vec<AudienceType> = Vec::new();

        for (fragment, audiences) in GENRE_AUDIENCES {
            if genre.contains(fragment) {
                for audience in audiences.iter() {
                    if !recommended.contains(audience) {
                        recommended.push(*audience);
                    }
                }
            }
        }

        if recommended.is_empty() {
            recommended.extend_from_slice(GENERAL_AUDIENCES);
        }

        recommended.sort_by_cached_key(|audience| audience.display_name());
        recommended
    }

    /// Audiences for a named age group; unknown groups get general readers
    pub fn by_age_group(age_group: &str) -> Vec<AudienceType> {
        let audiences: &[AudienceType] = match normalize(age_group).as_str() {
            "children" => &[AT::Children, AT::MiddleGrade],
            "teens" => &[AT::YoungAdult, AT::MiddleGrade],
            "young_adults" => &[AT::NewAdult, AT::YoungAdult],
            "adults" => &[AT::Adult, AT::Professionals, AT::Parents],
            "seniors" => &[AT::Seniors, AT::MatureAdult, AT::Retirees],
            _ => &[AT::GeneralReaders],
        };
        audiences.to_vec()
    }

    pub fn professional() -> &'static [AudienceType] {
        PROFESSIONAL_AUDIENCES
    }

    pub fn creative() -> &'static [AudienceType] {
        CREATIVE_AUDIENCES
    }

    pub fn academic() -> &'static [AudienceType] {
        ACADEMIC_AUDIENCES
    }
}

impl Taxonomy for AudienceType {
    const KIND: &'static str = "audience type";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            AT::GeneralReaders => "General Readers",
            AT::MainstreamAudience => "Mainstream Audience",
            AT::CasualReaders => "Casual Readers",
            AT::AvidReaders => "Avid Readers",
            AT::Children => "Children",
            AT::MiddleGrade => "Middle Grade Readers",
            AT::YoungAdult => "Young Adult Readers",
            AT::NewAdult => "New Adult Readers",
            AT::Adult => "Adult Readers",
            AT::MatureAdult => "Mature Adult Readers",
            AT::Seniors => "Senior Readers",
            AT::GenreFans => "Genre Fans",
            AT::FantasyReaders => "Fantasy Readers",
            AT::SciFiFans => "Science Fiction Fans",
            AT::MysteryLovers => "Mystery Lovers",
            AT::RomanceReaders => "Romance Readers",
            AT::HorrorFans => "Horror Fans",
            AT::LiteraryFictionReaders => "Literary Fiction Readers",
            AT::NonFictionReaders => "Non-Fiction Readers",
            AT::Professionals => "Professionals",
            AT::BusinessProfessionals => "Business Professionals",
            AT::HealthcareWorkers => "Healthcare Workers",
            AT::Educators => "Educators",
            AT::Lawyers => "Lawyers",
            AT::Engineers => "Engineers",
            AT::Marketers => "Marketers",
            AT::Consultants => "Consultants",
            AT::Managers => "Managers",
            AT::Executives => "Executives",
            AT::Entrepreneurs => "Entrepreneurs",
            AT::Academics => "Academics",
            AT::Researchers => "Researchers",
            AT::Scholars => "Scholars",
            AT::Students => "Students",
            AT::GraduateStudents => "Graduate Students",
            AT::UndergraduateStudents => "Undergraduate Students",
            AT::LifelongLearners => "Lifelong Learners",
            AT::Beginners => "Beginners",
            AT::Intermediate => "Intermediate Level",
            AT::Advanced => "Advanced Level",
            AT::Experts => "Experts",
            AT::Hobbyists => "Hobbyists",
            AT::Enthusiasts => "Enthusiasts",
            AT::Creatives => "Creative Professionals",
            AT::Artists => "Artists",
            AT::Writers => "Writers",
            AT::Designers => "Designers",
            AT::Musicians => "Musicians",
            AT::Filmmakers => "Filmmakers",
            AT::TechnicalAudience => "Technical Audience",
            AT::Developers => "Software Developers",
            AT::DataScientists => "Data Scientists",
            AT::Parents => "Parents",
            AT::NewParents => "New Parents",
            AT::WorkingParents => "Working Parents",
            AT::FitnessEnthusiasts => "Fitness Enthusiasts",
            AT::HealthConscious => "Health-Conscious Readers",
            AT::SpiritualSeekers => "Spiritual Seekers",
            AT::SelfImprovement => "Self-Improvement Seekers",
            AT::TravelEnthusiasts => "Travel Enthusiasts",
            AT::FoodLovers => "Food Lovers",
            AT::Collectors => "Collectors",
            AT::Gamers => "Gamers",
            AT::Investors => "Investors",
            AT::Retirees => "Retirees",
            AT::Military => "Military Personnel",
            AT::Veterans => "Veterans",
            AT::Immigrants => "Immigrants",
            AT::Caregivers => "Caregivers",
            AT::Activists => "Activists",
            AT::Commuters => "Commuters",
            AT::BedtimeReaders => "Bedtime Readers",
            AT::AudiobookListeners => "Audiobook Listeners",
            AT::QuickReaders => "Quick Readers",
            AT::SlowReaders => "Thoughtful Readers",
            AT::ReReaders => "Re-Readers",
            AT::Women => "Women Readers",
            AT::Men => "Men Readers",
            AT::Adults => "Adults",
            AT::Families => "Families",
            AT::Teens => "Teen Readers",
            AT::Adventurers => "Adventure Seekers",
            AT::LifestyleReaders => "Lifestyle Readers",
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            AT::GeneralReaders => {
                "Broad audience of readers who enjoy various genres and don't have specific preferences, seeking accessible and engaging content across different topics and styles."
            },
            AT::MainstreamAudience => {
                "Mass market readers who prefer popular, widely-appealing content that reflects current trends, bestseller appeal, and broad cultural relevance."
            },
            AT::CasualReaders => {
                "Occasional readers who read for relaxation and entertainment, preferring easy-to-follow stories with straightforward narratives and familiar themes."
            },
            AT::AvidReaders => {
                "Voracious readers who consume books regularly, appreciate literary quality, and are open to complex narratives, diverse genres, and challenging content."
            },
            AT::Children => {
                "Young readers typically aged 5-12 who enjoy age-appropriate stories with simple language, engaging illustrations, and themes relevant to childhood experiences."
            },
            AT::MiddleGrade => {
                "Readers aged 8-12 who are developing independent reading skills and enjoy adventure stories, friendship themes, and coming-of-age narratives with relatable protagonists."
            },
            AT::YoungAdult => {
                "Teenage readers aged 13-18 who connect with stories about identity, relationships, social issues, and the transition to adulthood, often featuring teenage protagonists."
            },
            AT::NewAdult => {
                "Readers aged 18-25 experiencing life transitions like college, first jobs, and serious relationships, seeking stories about independence and adult decision-making."
            },
            AT::Adult => {
                "Mature readers aged 25+ who appreciate complex narratives, diverse themes, sophisticated character development, and stories reflecting adult experiences and responsibilities."
            },
            AT::MatureAdult => {
                "Experienced readers aged 40+ who value depth, nuance, and reflection in their reading, often drawn to literary fiction, historical narratives, and contemplative themes."
            },
            AT::Seniors => {
                "Older readers aged 65+ who may prefer larger print, familiar themes, nostalgic elements, and stories that reflect their life experiences and wisdom."
            },
            AT::GenreFans => {
                "Dedicated readers who have strong preferences for specific genres and deeply understand genre conventions, tropes, and expect high-quality execution within their preferred categories."
            },
            AT::FantasyReaders => {
                "Fans of fantasy literature who enjoy magical worlds, mythical creatures, epic quests, and complex world-building with detailed magic systems and heroic journeys."
            },
            AT::SciFiFans => {
                "Science fiction enthusiasts who appreciate futuristic concepts, technological speculation, space exploration, and stories that explore the implications of scientific advancement."
            },
            AT::MysteryLovers => {
                "Readers who enjoy puzzles, detective work, crime-solving, and the intellectual challenge of following clues and unraveling complex plots and mysteries."
            },
            AT::RomanceReaders => {
                "Fans of romantic fiction who seek emotional connection, relationship development, and stories centered on love, attraction, and romantic fulfillment."
            },
            AT::HorrorFans => {
                "Readers who enjoy being frightened and appreciate supernatural elements, psychological thriller aspects, and stories designed to create fear, suspense, and unease."
            },
            AT::LiteraryFictionReaders => {
                "Sophisticated readers who value artistic expression, complex themes, experimental narrative techniques, and books that are recognized for their literary merit."
            },
            AT::NonFictionReaders => {
                "Readers who prefer factual content, real-world information, educational material, and books that provide practical knowledge or explore true events and experiences."
            },
            AT::Professionals => {
                "Working individuals seeking content relevant to their careers, professional development, industry insights, and skills enhancement for workplace success."
            },
            AT::BusinessProfessionals => {
                "Corporate workers, managers, and business owners interested in leadership, strategy, management techniques, and business insights for career advancement."
            },
            AT::HealthcareWorkers => {
                "Medical professionals including doctors, nurses, and healthcare staff seeking medical knowledge, patient care insights, and healthcare industry information."
            },
            AT::Educators => {
                "Teachers, professors, and educational professionals looking for teaching resources, educational theory, classroom management, and academic content."
            },
            AT::Lawyers => {
                "Legal professionals seeking legal knowledge, case studies, legal theory, professional development, and insights into the legal system and practice."
            },
            AT::Engineers => {
                "Technical professionals interested in engineering principles, technological innovation, problem-solving methodologies, and technical skill development."
            },
            AT::Marketers => {
                "Marketing professionals seeking insights into consumer behavior, advertising strategies, brand development, and digital marketing techniques."
            },
            AT::Consultants => {
                "Advisory professionals looking for industry expertise, client management strategies, analytical frameworks, and professional development resources."
            },
            AT::Managers => {
                "Supervisory professionals seeking leadership skills, team management techniques, organizational behavior insights, and management best practices."
            },
            AT::Executives => {
                "Senior leadership professionals interested in strategic thinking, corporate governance, executive decision-making, and high-level business insights."
            },
            AT::Entrepreneurs => {
                "Business founders and startup professionals seeking guidance on business creation, innovation, risk management, and entrepreneurial success strategies."
            },
            AT::Academics => {
                "University professors, researchers, and scholars engaged in academic pursuits who value rigorous analysis, peer-reviewed insights, and scholarly discourse."
            },
            AT::Researchers => {
                "Individuals conducting formal research who need access to methodologies, data analysis techniques, research findings, and academic resources."
            },
            AT::Scholars => {
                "Learned individuals pursuing deep knowledge in specific fields who appreciate scholarly work, historical analysis, and intellectual exploration."
            },
            AT::Students => {
                "Learners at various educational levels seeking knowledge, study resources, educational content, and materials that support their academic goals."
            },
            AT::GraduateStudents => {
                "Advanced students pursuing master's or doctoral degrees who need specialized knowledge, research skills, and academic expertise in their field of study."
            },
            AT::UndergraduateStudents => {
                "College students seeking foundational knowledge, study skills, career guidance, and educational content relevant to their major and future goals."
            },
            AT::LifelongLearners => {
                "Individuals committed to continuous education and personal growth who actively seek new knowledge, skills, and understanding throughout their lives."
            },
            AT::Beginners => {
                "Newcomers to a subject who need foundational knowledge, step-by-step guidance, basic concepts, and accessible introductions to new topics or skills."
            },
            AT::Intermediate => {
                "Readers with some background knowledge who seek to build upon existing skills, explore more complex concepts, and advance their understanding."
            },
            AT::Advanced => {
                "Experienced individuals who want sophisticated content, complex analysis, nuanced understanding, and advanced techniques in their areas of interest."
            },
            AT::Experts => {
                "Highly knowledgeable professionals who seek cutting-edge insights, expert-level analysis, and advanced concepts at the forefront of their field."
            },
            AT::Hobbyists => {
                "Individuals pursuing interests as recreational activities who want practical guidance, inspiration, and enjoyable content related to their hobbies."
            },
            AT::Enthusiasts => {
                "Passionate individuals deeply interested in specific topics who seek comprehensive information, insider knowledge, and detailed exploration of their interests."
            },
            AT::Creatives => {
                "Artists, designers, and creative professionals seeking inspiration, creative techniques, artistic insights, and guidance for creative expression and professional development."
            },
            AT::Artists => {
                "Visual artists, painters, sculptors, and other fine artists looking for artistic techniques, creative inspiration, art history, and professional guidance."
            },
            AT::Writers => {
                "Authors, journalists, and writing professionals seeking writing techniques, storytelling methods, publishing insights, and creative inspiration for their craft."
            },
            AT::Designers => {
                "Graphic designers, web designers, and design professionals interested in design principles, creative processes, and visual communication techniques."
            },
            AT::Musicians => {
                "Musical artists, composers, and music professionals seeking musical knowledge, performance techniques, music theory, and industry insights."
            },
            AT::Filmmakers => {
                "Directors, producers, and film professionals interested in filmmaking techniques, storytelling for screen, industry insights, and cinematic arts."
            },
            AT::TechnicalAudience => {
                "Technology professionals and technically-minded individuals who appreciate detailed technical information, precise specifications, and technical accuracy."
            },
            AT::Developers => {
                "Software developers and programmers seeking coding techniques, programming languages, software development methodologies, and technical skills."
            },
            AT::DataScientists => {
                "Analytics professionals working with data who need statistical methods, data analysis techniques, machine learning insights, and quantitative approaches."
            },
            AT::Parents => {
                "Mothers and fathers seeking parenting advice, child development insights, family management strategies, and guidance for raising children successfully."
            },
            AT::NewParents => {
                "First-time parents or those with very young children who need practical guidance, reassurance, and foundational parenting knowledge."
            },
            AT::WorkingParents => {
                "Parents balancing career and family responsibilities who seek advice on time management, work-life balance, and managing multiple commitments."
            },
            AT::FitnessEnthusiasts => {
                "Individuals passionate about physical fitness who seek exercise techniques, nutrition guidance, health optimization, and athletic performance improvement."
            },
            AT::HealthConscious => {
                "Readers focused on wellness and healthy living who want information about nutrition, preventive health, mental wellness, and lifestyle optimization."
            },
            AT::SpiritualSeekers => {
                "Individuals exploring spirituality, personal growth, and meaning who seek guidance on spiritual practices, personal development, and life purpose."
            },
            AT::SelfImprovement => {
                "Readers committed to personal development who want practical strategies for self-improvement, goal achievement, and personal transformation."
            },
            AT::TravelEnthusiasts => {
                "People passionate about travel who seek destination guides, travel tips, cultural insights, and inspiration for exploring the world."
            },
            AT::FoodLovers => {
                "Culinary enthusiasts who enjoy cooking, dining, and food culture, seeking recipes, cooking techniques, food history, and culinary inspiration."
            },
            AT::Collectors => {
                "Individuals who collect items as a hobby or investment who seek specialized knowledge about collectibles, market trends, and collecting strategies."
            },
            AT::Gamers => {
                "Video game enthusiasts and tabletop gamers who enjoy gaming culture, game design insights, strategy guides, and gaming-related content."
            },
            AT::Investors => {
                "Individuals interested in financial markets who seek investment strategies, market analysis, financial planning, and wealth-building guidance."
            },
            AT::Retirees => {
                "Retired individuals who have time for reading and may be interested in life reflection, leisure activities, health maintenance, and post-career pursuits."
            },
            AT::Military => {
                "Active military personnel who may be interested in military history, leadership, tactical knowledge, and stories relevant to military experience."
            },
            AT::Veterans => {
                "Former military personnel who may connect with stories about military experience, transition to civilian life, and veteran-specific issues."
            },
            AT::Immigrants => {
                "Individuals who have moved to new countries who may seek guidance on cultural adaptation, language learning, and navigating new societies."
            },
            AT::Caregivers => {
                "Individuals caring for family members or working in care professions who need guidance on caregiving, emotional support, and care management."
            },
            AT::Activists => {
                "Individuals engaged in social causes who seek information about social change, advocacy strategies, and movements for social justice."
            },
            AT::Commuters => {
                "Readers who primarily read during travel time and prefer content suitable for interrupted reading, audiobooks, or easily digestible segments."
            },
            AT::BedtimeReaders => {
                "Individuals who read before sleep and may prefer calming content, shorter chapters, or material that aids relaxation rather than high excitement."
            },
            AT::AudiobookListeners => {
                "Readers who prefer listening to books and appreciate content that works well in audio format with good narration and clear storytelling."
            },
            AT::QuickReaders => {
                "Fast readers who consume books rapidly and appreciate engaging plots, efficient storytelling, and content that maintains quick pacing."
            },
            AT::SlowReaders => {
                "Deliberate readers who prefer to savor content, appreciate detailed descriptions, complex language, and books that reward careful reading."
            },
            AT::ReReaders => {
                "Readers who enjoy revisiting favorite books and appreciate content with layers of meaning, details that reward multiple readings, and timeless appeal."
            },
            AT::Women => {
                "Female readers who may be drawn to books with strong female characters, relationship themes, emotional depth, and stories that reflect women's experiences and perspectives."
            },
            AT::Men => {
                "Male readers who may prefer action-oriented stories, adventure narratives, technical content, or books that explore themes and experiences that resonate with masculine perspectives."
            },
            AT::Adults => {
                "Mature readers aged 25+ who appreciate complex narratives, diverse themes, sophisticated character development, and stories reflecting adult experiences and responsibilities."
            },
            AT::Families => {
                "Family units looking for content suitable for shared reading, family activities, educational materials, or books that bring family members together across different age groups."
            },
            AT::Teens => {
                "Teenage readers aged 13-18 who are navigating adolescence and seek stories about identity, peer relationships, independence, and the challenges of growing up in contemporary society."
            },
            AT::Adventurers => {
                "Readers who seek excitement, exploration, and adventure in their reading, drawn to travel narratives, outdoor activities, extreme sports, and stories of courage and discovery."
            },
            AT::LifestyleReaders => {
                "Readers interested in lifestyle content including home design, personal style, wellness trends, social media culture, and contemporary living approaches and philosophies."
            }
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &AUDIENCE_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "age_range": self.age_range(),
            "reading_level": self.reading_level(),
            "typical_reading_time": self.typical_reading_time(),
            "preferred_content_length": self.preferred_content_length(),
            "content_complexity_preference": self.content_complexity_preference(),
            "marketing_channels": self.marketing_channels(),
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
        testing::assert_keys_resolve::<AudienceType>();
        assert!(testing::assert_aliases_resolve::<AudienceType>().is_empty());
    }

    #[test]
    fn test_fuzzy_resolution() {
        assert_eq!(AudienceType::resolve("ya").unwrap(), AT::YoungAdult);
        assert_eq!(AudienceType::resolve("Young Adult").unwrap(), AT::YoungAdult);
        assert_eq!(AudienceType::resolve("business").unwrap(), AT::BusinessProfessionals);
        assert_eq!(AudienceType::resolve("fantasy readers").unwrap(), AT::FantasyReaders);
        assert_eq!(AudienceType::resolve("kid").unwrap(), AT::Children);
        assert_eq!(AudienceType::resolve("moms").unwrap(), AT::Parents);
        assert_eq!(AudienceType::resolve("new-adult").unwrap(), AT::NewAdult);
        // the key wins over the "adults" alias
        assert_eq!(AudienceType::resolve("adults").unwrap(), AT::Adults);
    }

    #[test]
    fn test_unknown_audience_fails() {
        assert!(matches!(
            AudienceType::resolve("xyz123"),
            Err(TaxonomyError::UnknownValue { kind: "audience type", .. })
        ));
        assert!(matches!(
            AudienceType::resolve(""),
            Err(TaxonomyError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_reader_attributes() {
        assert_eq!(AT::YoungAdult.age_range(), Some("13-18"));
        assert_eq!(AT::Gamers.age_range(), None);
        assert_eq!(AT::Children.reading_level(), ReadingLevel::Elementary);
        assert_eq!(AT::Scholars.reading_level(), ReadingLevel::Expert);
        assert_eq!(AT::Gamers.reading_level(), ReadingLevel::Intermediate);
        assert_eq!(AT::Commuters.typical_reading_time(), "20-45 minutes");
        assert_eq!(AT::Gamers.preferred_content_length(), "medium (200-400 pages)");
        assert_eq!(AT::Professionals.content_complexity_preference(), "moderate to complex");
        assert!(AT::YoungAdult.marketing_channels().contains(&"BookTok"));
        assert_eq!(AT::Gamers.marketing_channels().len(), 4);
    }

    #[test]
    fn test_max_content_age() {
        assert_eq!(AT::Children.max_content_age(), 8);
        assert_eq!(AT::MiddleGrade.max_content_age(), 10);
        assert_eq!(AT::YoungAdult.max_content_age(), 13);
        assert_eq!(AT::Teens.max_content_age(), 13);
        assert_eq!(AT::NewAdult.max_content_age(), 16);
        assert_eq!(AT::Seniors.max_content_age(), 18);
        assert_eq!(AT::Gamers.max_content_age(), 18);
    }

    #[test]
    fn test_for_genre() {
        let business = AudienceType::for_genre("Business");
        assert_eq!(
            business,
            vec![
                AT::BusinessProfessionals,
                AT::Entrepreneurs,
                AT::Executives,
                AT::Managers,
                AT::Professionals,
            ]
        );

        // "young adult fantasy" hits two rows and deduplicates the overlap
        let combined = AudienceType::for_genre("young adult fantasy");
        assert!(combined.contains(&AT::FantasyReaders));
        assert!(combined.contains(&AT::Teens));
        assert_eq!(combined.iter().filter(|a| **a == AT::YoungAdult).count(), 1);

        assert_eq!(
            AudienceType::for_genre("poetry"),
            vec![AT::Adult, AT::GeneralReaders, AT::MainstreamAudience]
        );
    }

    #[test]
    fn test_groupings() {
        assert_eq!(AudienceType::by_age_group("Seniors"), vec![AT::Seniors, AT::MatureAdult, AT::Retirees]);
        assert_eq!(AudienceType::by_age_group("toddlers"), vec![AT::GeneralReaders]);
        assert_eq!(AudienceType::professional().len(), 11);
        assert_eq!(AudienceType::creative().len(), 6);
        assert_eq!(AudienceType::academic().len(), 7);
    }

    #[test]
    fn test_to_dict() {
        let dict = AT::YoungAdult.to_dict();
        assert_eq!(dict["value"], "young_adult");
        assert_eq!(dict["reading_level"], "intermediate");
        assert_eq!(dict["age_range"], "13-18");
        assert!(AT::Gamers.to_dict()["age_range"].is_null());
    }
}
