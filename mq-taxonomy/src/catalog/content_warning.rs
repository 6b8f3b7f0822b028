//! Content warnings with severity, age and category tiers

use super::levels::Severity;
use crate::engine::{normalize, taxonomy, title_case, MatchStep, Resolver, Taxonomy, Tier};
use serde_json::{json, Value};

taxonomy! {
    /// A reader-facing content warning
    pub enum ContentWarning {
        MildViolence => "mild_violence",
        Violence => "violence",
        ExtremeViolence => "extreme_violence",
        GraphicViolence => "graphic_violence",
        Gore => "gore",
        Torture => "torture",
        DomesticViolence => "domestic_violence",
        ChildAbuse => "child_abuse",
        SexualViolence => "sexual_violence",
        WarViolence => "war_violence",
        AnimalCruelty => "animal_cruelty",
        SexualContent => "sexual_content",
        ExplicitSexualContent => "explicit_sexual_content",
        SexualAssault => "sexual_assault",
        NonConsensualContent => "non_consensual_content",
        UnderageSexualContent => "underage_sexual_content",
        MentalHealth => "mental_health",
        Depression => "depression",
        Anxiety => "anxiety",
        Suicide => "suicide",
        SuicidalIdeation => "suicidal_ideation",
        SelfHarm => "self_harm",
        PanicAttacks => "panic_attacks",
        Psychosis => "psychosis",
        EatingDisorders => "eating_disorders",
        BodyDysmorphia => "body_dysmorphia",
        SubstanceAbuse => "substance_abuse",
        DrugUse => "drug_use",
        AlcoholAbuse => "alcohol_abuse",
        Addiction => "addiction",
        Overdose => "overdose",
        MildLanguage => "mild_language",
        Language => "language",
        StrongLanguage => "strong_language",
        HateSpeech => "hate_speech",
        Slurs => "slurs",
        Bullying => "bullying",
        Harassment => "harassment",
        Death => "death",
        GraphicDeath => "graphic_death",
        Murder => "murder",
        Genocide => "genocide",
        MassCasualties => "mass_casualties",
        Grief => "grief",
        TerminalIllness => "terminal_illness",
        Trauma => "trauma",
        Ptsd => "ptsd",
        Flashbacks => "flashbacks",
        MedicalTrauma => "medical_trauma",
        ChildhoodTrauma => "childhood_trauma",
        Discrimination => "discrimination",
        Racism => "racism",
        Sexism => "sexism",
        Homophobia => "homophobia",
        Transphobia => "transphobia",
        Ableism => "ableism",
        ReligiousDiscrimination => "religious_discrimination",
        Classism => "classism",
        ReligiousContent => "religious_content",
        Blasphemy => "blasphemy",
        ReligiousExtremism => "religious_extremism",
        PoliticalContent => "political_content",
        PoliticalExtremism => "political_extremism",
        Propaganda => "propaganda",
        HorrorElements => "horror_elements",
        PsychologicalHorror => "psychological_horror",
        BodyHorror => "body_horror",
        SupernaturalHorror => "supernatural_horror",
        DisturbingImagery => "disturbing_imagery",
        JumpScares => "jump_scares",
        MedicalContent => "medical_content",
        GraphicMedicalProcedures => "graphic_medical_procedures",
        Pandemic => "pandemic",
        Disease => "disease",
        Disability => "disability",
        FamilyDysfunction => "family_dysfunction",
        Divorce => "divorce",
        Abandonment => "abandonment",
        Infidelity => "infidelity",
        ToxicRelationships => "toxic_relationships",
        Claustrophobia => "claustrophobia",
        Agoraphobia => "agoraphobia",
        Drowning => "drowning",
        Fire => "fire",
        InsectsSpiders => "insects_spiders",
        Blood => "blood",
        Needles => "needles",
        MatureThemes => "mature_themes",
        AdultContent => "adult_content",
        NotSuitableForChildren => "not_suitable_for_children",
        Crime => "crime",
        CrimeInvestigation => "crime_investigation",
    }
}

taxonomy! {
    /// Grouping used when summarizing a profile
    pub enum WarningCategory {
        Violence => "violence",
        Sexual => "sexual",
        MentalHealth => "mental_health",
        SubstanceUse => "substance_use",
        Language => "language",
        Social => "social",
        Death => "death",
        Emotional => "emotional",
        Medical => "medical",
        Trauma => "trauma",
        Discrimination => "discrimination",
        Ideological => "ideological",
        Horror => "horror",
        Relationships => "relationships",
        Phobias => "phobias",
        General => "general",
    }
}

use ContentWarning as CW;

static CONTENT_WARNING_RESOLVER: Resolver<ContentWarning> = Resolver {
    steps: &[
        MatchStep::Exact,
        MatchStep::Alias,
        MatchStep::AliasSubstring,
        MatchStep::CanonicalSubstring,
    ],
    aliases: &[
        ("violent", CW::Violence),
        ("graphic", CW::GraphicViolence),
        ("bloody", CW::Gore),
        ("torture", CW::Torture),
        ("abuse", CW::DomesticViolence),
        ("domestic", CW::DomesticViolence),
        ("war", CW::WarViolence),
        ("animal", CW::AnimalCruelty),
        ("sex", CW::SexualContent),
        ("sexual", CW::SexualContent),
        ("explicit", CW::ExplicitSexualContent),
        ("rape", CW::SexualAssault),
        ("assault", CW::SexualAssault),
        ("mental", CW::MentalHealth),
        ("depressed", CW::Depression),
        ("anxious", CW::Anxiety),
        ("suicide", CW::Suicide),
        ("harm", CW::SelfHarm),
        ("cutting", CW::SelfHarm),
        ("eating", CW::EatingDisorders),
        ("anorexia", CW::EatingDisorders),
        ("bulimia", CW::EatingDisorders),
        ("drugs", CW::DrugUse),
        ("alcohol", CW::AlcoholAbuse),
        ("drinking", CW::AlcoholAbuse),
        ("overdose", CW::Overdose),
        ("language", CW::StrongLanguage),
        ("profanity", CW::StrongLanguage),
        ("swearing", CW::StrongLanguage),
        ("cursing", CW::StrongLanguage),
        ("hate", CW::HateSpeech),
        ("slur", CW::Slurs),
        ("dying", CW::Death),
        ("kill", CW::Murder),
        ("killing", CW::Murder),
        ("murder", CW::Murder),
        ("racist", CW::Racism),
        ("sexist", CW::Sexism),
        ("homophobic", CW::Homophobia),
        ("transphobic", CW::Transphobia),
        ("scary", CW::HorrorElements),
        ("frightening", CW::HorrorElements),
        ("spooky", CW::HorrorElements),
        ("horror", CW::HorrorElements),
        ("disturbing", CW::DisturbingImagery),
        ("religion", CW::ReligiousContent),
        ("religious", CW::ReligiousContent),
        ("politics", CW::PoliticalContent),
        ("political", CW::PoliticalContent),
        ("medical", CW::MedicalContent),
        ("illness", CW::TerminalIllness),
        ("disease", CW::Disease),
        ("pandemic", CW::Pandemic),
        ("claustrophobic", CW::Claustrophobia),
        ("agoraphobic", CW::Agoraphobia),
        ("drowning", CW::Drowning),
        ("spiders", CW::InsectsSpiders),
        ("needles", CW::Needles),
        ("blood", CW::Blood),
        ("mature", CW::MatureThemes),
        ("adult", CW::AdultContent),
        ("children", CW::NotSuitableForChildren),
    ],
    compounds: &[],
    ignore_suffix: None,
};

static WARNING_CATEGORY_RESOLVER: Resolver<WarningCategory> = Resolver {
    steps: &[MatchStep::Exact],
    aliases: &[],
    compounds: &[],
    ignore_suffix: None,
};

// Checked in order; religious_content and political_content are listed
// under both mild and moderate and land in mild
static SEVERITY_TIER: Tier<ContentWarning, Severity> = Tier {
    levels: &[
        (
            Severity::Mild,
            &[
                CW::StrongLanguage,
                CW::ReligiousContent,
                CW::PoliticalContent,
                CW::MatureThemes,
                CW::Divorce,
                CW::Grief,
                CW::Disability,
            ],
        ),
        (
            Severity::Moderate,
            &[
                CW::Violence,
                CW::SexualContent,
                CW::SubstanceAbuse,
                CW::MentalHealth,
                CW::Death,
                CW::Discrimination,
                CW::ReligiousContent,
                CW::PoliticalContent,
                CW::HorrorElements,
                CW::Bullying,
                CW::FamilyDysfunction,
                CW::MedicalContent,
                CW::Depression,
                CW::Anxiety,
                CW::Infidelity,
                CW::ToxicRelationships,
                CW::Abandonment,
                CW::Claustrophobia,
                CW::Agoraphobia,
                CW::Blood,
                CW::Needles,
            ],
        ),
        (
            Severity::Severe,
            &[
                CW::GraphicViolence,
                CW::ExplicitSexualContent,
                CW::Trauma,
                CW::DomesticViolence,
                CW::EatingDisorders,
                CW::SelfHarm,
                CW::SuicidalIdeation,
                CW::HateSpeech,
                CW::Racism,
                CW::Homophobia,
                CW::Transphobia,
                CW::Sexism,
                CW::Ableism,
                CW::PsychologicalHorror,
                CW::GraphicDeath,
                CW::Murder,
                CW::Addiction,
                CW::PanicAttacks,
                CW::Ptsd,
                CW::Flashbacks,
                CW::Harassment,
                CW::TerminalIllness,
                CW::MedicalTrauma,
                CW::ChildhoodTrauma,
                CW::DisturbingImagery,
                CW::Slurs,
                CW::DrugUse,
                CW::AlcoholAbuse,
                CW::Overdose,
                CW::Fire,
                CW::Drowning,
                CW::Psychosis,
                CW::BodyDysmorphia,
                CW::Pandemic,
                CW::Disease,
            ],
        ),
        (
            Severity::Extreme,
            &[
                CW::Gore,
                CW::Torture,
                CW::ChildAbuse,
                CW::SexualViolence,
                CW::SexualAssault,
                CW::NonConsensualContent,
                CW::UnderageSexualContent,
                CW::Suicide,
                CW::Genocide,
                CW::MassCasualties,
                CW::AnimalCruelty,
                CW::WarViolence,
                CW::BodyHorror,
                CW::GraphicMedicalProcedures,
                CW::ReligiousExtremism,
                CW::PoliticalExtremism,
                CW::Propaganda,
                CW::Blasphemy,
                CW::ReligiousDiscrimination,
                CW::Classism,
                CW::SupernaturalHorror,
                CW::JumpScares,
                CW::InsectsSpiders,
                CW::NotSuitableForChildren,
                CW::AdultContent,
            ],
        ),
    ],
    default: Severity::Moderate,
};

static AGE_TIER: Tier<ContentWarning, u8> = Tier {
    levels: &[
        (8, &[CW::MildViolence, CW::MildLanguage, CW::Divorce, CW::Grief]),
        (
            13,
            &[
                CW::StrongLanguage,
                CW::Violence,
                CW::Death,
                CW::MentalHealth,
                CW::Bullying,
                CW::FamilyDysfunction,
                CW::Anxiety,
                CW::Depression,
            ],
        ),
        (
            16,
            &[
                CW::SexualContent,
                CW::SubstanceAbuse,
                CW::Trauma,
                CW::DomesticViolence,
                CW::Discrimination,
                CW::HorrorElements,
                CW::EatingDisorders,
                CW::SelfHarm,
                CW::SuicidalIdeation,
                CW::GraphicViolence,
                CW::PoliticalContent,
                CW::ReligiousContent,
            ],
        ),
        (
            18,
            &[
                CW::ExplicitSexualContent,
                CW::Gore,
                CW::Torture,
                CW::ChildAbuse,
                CW::SexualViolence,
                CW::SexualAssault,
                CW::Suicide,
                CW::GraphicDeath,
                CW::Murder,
                CW::Genocide,
                CW::HateSpeech,
                CW::PsychologicalHorror,
                CW::BodyHorror,
                CW::UnderageSexualContent,
                CW::NonConsensualContent,
                CW::ExtremeViolence,
                CW::PoliticalExtremism,
                CW::ReligiousExtremism,
                CW::NotSuitableForChildren,
                CW::AdultContent,
            ],
        ),
    ],
    default: 16,
};

static CATEGORY_TIER: Tier<ContentWarning, WarningCategory> = Tier {
    levels: &[
        (
            WarningCategory::Violence,
            &[
                CW::Violence,
                CW::GraphicViolence,
                CW::Gore,
                CW::Torture,
                CW::DomesticViolence,
                CW::ChildAbuse,
                CW::SexualViolence,
                CW::WarViolence,
                CW::AnimalCruelty,
            ],
        ),
        (
            WarningCategory::Sexual,
            &[
                CW::SexualContent,
                CW::ExplicitSexualContent,
                CW::SexualAssault,
                CW::NonConsensualContent,
                CW::UnderageSexualContent,
            ],
        ),
        (
            WarningCategory::MentalHealth,
            &[
                CW::MentalHealth,
                CW::Depression,
                CW::Anxiety,
                CW::Suicide,
                CW::SuicidalIdeation,
                CW::SelfHarm,
                CW::PanicAttacks,
                CW::Psychosis,
                CW::EatingDisorders,
                CW::BodyDysmorphia,
            ],
        ),
        (
            WarningCategory::SubstanceUse,
            &[CW::SubstanceAbuse, CW::DrugUse, CW::AlcoholAbuse, CW::Addiction, CW::Overdose],
        ),
        (WarningCategory::Language, &[CW::StrongLanguage, CW::HateSpeech, CW::Slurs]),
        (WarningCategory::Social, &[CW::Bullying, CW::Harassment]),
        (
            WarningCategory::Death,
            &[CW::Death, CW::GraphicDeath, CW::Murder, CW::Genocide, CW::MassCasualties],
        ),
        (WarningCategory::Emotional, &[CW::Grief, CW::Abandonment]),
        (
            WarningCategory::Medical,
            &[
                CW::TerminalIllness,
                CW::MedicalContent,
                CW::GraphicMedicalProcedures,
                CW::Pandemic,
                CW::Disease,
                CW::Disability,
            ],
        ),
        (
            WarningCategory::Trauma,
            &[CW::Trauma, CW::Ptsd, CW::Flashbacks, CW::MedicalTrauma, CW::ChildhoodTrauma],
        ),
        (
            WarningCategory::Discrimination,
            &[
                CW::Discrimination,
                CW::Racism,
                CW::Sexism,
                CW::Homophobia,
                CW::Transphobia,
                CW::Ableism,
                CW::ReligiousDiscrimination,
                CW::Classism,
            ],
        ),
        (
            WarningCategory::Ideological,
            &[
                CW::ReligiousContent,
                CW::Blasphemy,
                CW::ReligiousExtremism,
                CW::PoliticalContent,
                CW::PoliticalExtremism,
                CW::Propaganda,
            ],
        ),
        (
            WarningCategory::Horror,
            &[
                CW::HorrorElements,
                CW::PsychologicalHorror,
                CW::BodyHorror,
                CW::SupernaturalHorror,
                CW::DisturbingImagery,
                CW::JumpScares,
            ],
        ),
        (
            WarningCategory::Relationships,
            &[CW::FamilyDysfunction, CW::Divorce, CW::Infidelity, CW::ToxicRelationships],
        ),
        (
            WarningCategory::Phobias,
            &[
                CW::Claustrophobia,
                CW::Agoraphobia,
                CW::Drowning,
                CW::Fire,
                CW::InsectsSpiders,
                CW::Blood,
                CW::Needles,
            ],
        ),
    ],
    default: WarningCategory::General,
};

/// Genre fragment -> commonly expected warnings
///
/// A genre picks up every row whose fragment it contains.
const GENRE_WARNINGS: &[(&str, &[ContentWarning])] = &[
    (
        "horror",
        &[
            CW::HorrorElements,
            CW::Violence,
            CW::Gore,
            CW::Death,
            CW::PsychologicalHorror,
            CW::DisturbingImagery,
            CW::SupernaturalHorror,
            CW::BodyHorror,
            CW::JumpScares,
        ],
    ),
    (
        "thriller",
        &[
            CW::Violence,
            CW::Death,
            CW::Murder,
            CW::Trauma,
            CW::PsychologicalHorror,
            CW::StrongLanguage,
            CW::DomesticViolence,
        ],
    ),
    (
        "mystery",
        &[
            CW::Death,
            CW::Murder,
            CW::Violence,
            CW::CrimeInvestigation,
            CW::StrongLanguage,
            CW::Trauma,
        ],
    ),
    (
        "crime",
        &[
            CW::Violence,
            CW::Murder,
            CW::StrongLanguage,
            CW::SubstanceAbuse,
            CW::DomesticViolence,
            CW::SexualViolence,
        ],
    ),
    (
        "war",
        &[
            CW::WarViolence,
            CW::Death,
            CW::GraphicViolence,
            CW::Trauma,
            CW::Ptsd,
            CW::MassCasualties,
            CW::Gore,
        ],
    ),
    (
        "romance",
        &[
            CW::SexualContent,
            CW::MatureThemes,
            CW::StrongLanguage,
            CW::Infidelity,
            CW::ToxicRelationships,
        ],
    ),
    (
        "literary_fiction",
        &[
            CW::MatureThemes,
            CW::MentalHealth,
            CW::Trauma,
            CW::FamilyDysfunction,
            CW::Discrimination,
            CW::PoliticalContent,
        ],
    ),
    (
        "dystopian",
        &[
            CW::Violence,
            CW::PoliticalContent,
            CW::Discrimination,
            CW::MassCasualties,
            CW::Trauma,
            CW::Propaganda,
        ],
    ),
    (
        "young_adult",
        &[
            CW::MatureThemes,
            CW::Bullying,
            CW::MentalHealth,
            CW::FamilyDysfunction,
            CW::Anxiety,
            CW::Depression,
            CW::EatingDisorders,
        ],
    ),
    (
        "historical_fiction",
        &[
            CW::Violence,
            CW::Discrimination,
            CW::ReligiousContent,
            CW::PoliticalContent,
            CW::Trauma,
            CW::Death,
        ],
    ),
    (
        "science_fiction",
        &[
            CW::Violence,
            CW::PoliticalContent,
            CW::Discrimination,
            CW::MedicalContent,
            CW::Pandemic,
            CW::MatureThemes,
        ],
    ),
    (
        "fantasy",
        &[
            CW::Violence,
            CW::Death,
            CW::HorrorElements,
            CW::SupernaturalHorror,
            CW::ReligiousContent,
            CW::MatureThemes,
        ],
    ),
    (
        "contemporary",
        &[
            CW::MentalHealth,
            CW::SubstanceAbuse,
            CW::FamilyDysfunction,
            CW::SexualContent,
            CW::StrongLanguage,
            CW::Discrimination,
        ],
    ),
    (
        "biography",
        &[
            CW::MatureThemes,
            CW::Trauma,
            CW::MentalHealth,
            CW::Discrimination,
            CW::PoliticalContent,
            CW::Death,
        ],
    ),
    (
        "memoir",
        &[
            CW::Trauma,
            CW::MentalHealth,
            CW::FamilyDysfunction,
            CW::SubstanceAbuse,
            CW::Discrimination,
            CW::MatureThemes,
        ],
    ),
];

const GENERAL_WARNINGS: &[ContentWarning] = &[CW::MatureThemes, CW::StrongLanguage];

impl ContentWarning {
    pub fn severity_level(self) -> Severity {
        SEVERITY_TIER.classify(self)
    }

    /// Minimum reader age in years
    pub fn age_minimum(self) -> u8 {
        AGE_TIER.classify(self)
    }

    /// `"13+"` style age label
    pub fn age_appropriateness(self) -> String {
        format!("{}+", self.age_minimum())
    }

    pub fn category(self) -> WarningCategory {
        CATEGORY_TIER.classify(self)
    }

    /// Warnings commonly expected for a genre, sorted by display name
    ///
    /// Falls back to mature themes and strong language when no row matches.
    pub fn for_genre(genre: &str) -> Vec<ContentWarning> {
        let genre = normalize(genre);
        let mut recommended: Vec<ContentWarning> = Vec::new();

        for (fragment, warnings) in GENRE_WARNINGS {
            if genre.contains(fragment) {
                for warning in warnings.iter() {
                    if !recommended.contains(warning) {
                        recommended.push(*warning);
                    }
                }
            }
        }

        if recommended.is_empty() {
            recommended.extend_from_slice(GENERAL_WARNINGS);
        }

        recommended.sort_by_cached_key(|warning| warning.display_name());
        recommended
    }

    pub fn by_severity(severity: Severity) -> Vec<ContentWarning> {
        SEVERITY_TIER.members(severity)
    }

    pub fn by_category(category: WarningCategory) -> Vec<ContentWarning> {
        CATEGORY_TIER.members(category)
    }

    /// Warnings whose minimum age does not exceed `max_age`
    pub fn by_max_age(max_age: u8) -> Vec<ContentWarning> {
        Self::ALL
            .iter()
            .copied()
            .filter(|warning| warning.age_minimum() <= max_age)
            .collect()
    }
}

impl Taxonomy for ContentWarning {
    const KIND: &'static str = "content warning";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn key(self) -> &'static str {
        self.as_str()
    }

    fn display_name(self) -> String {
        let name = match self {
            CW::NonConsensualContent => "Non-Consensual Content",
            CW::MentalHealth => "Mental Health Issues",
            CW::SelfHarm => "Self-Harm",
            CW::Ptsd => "PTSD",
            CW::Claustrophobia => "Claustrophobia Triggers",
            CW::Agoraphobia => "Agoraphobia Triggers",
            CW::InsectsSpiders => "Insects/Spiders",
            CW::NotSuitableForChildren => "Not Suitable for Children",
            other => return title_case(other.as_str()),
        };
        name.to_string()
    }

    fn description(self) -> String {
        let description = match self {
            CW::MildViolence => "Contains scenes of minor confrontations, verbal arguments, mild physical altercations like pushing or shoving, or non-serious aggressive behavior without lasting harm or severe injury.",
            CW::Violence => "Contains scenes of physical altercations, fights, combat situations, or aggressive behavior that may result in injury, including punching, kicking, weapon use, or other forms of intentional harm.",
            CW::ExtremeViolence => "Contains intensely disturbing and brutal depictions of violence including severe beatings, mass casualties, war crimes, torture, or sadistic behavior with detailed descriptions of extreme suffering.",
            CW::GraphicViolence => "Contains explicit, detailed descriptions of violent acts including specific injuries, wounds, blood loss, and the physical consequences of violence with vivid depictions of pain and bodily harm.",
            CW::Gore => "Contains graphic descriptions of blood, open wounds, dismemberment, mutilation, internal organs, severe bodily trauma, or other disturbing imagery involving bodily injuries and decomposition.",
            CW::SexualContent => "Contains sexual themes, romantic intimacy, sexual situations, discussions of sexuality, intimate physical contact, or romantic relationships with sexual undertones or implications.",
            CW::ExplicitSexualContent => "Contains graphic, detailed descriptions of sexual acts, sexual anatomy, intimate physical encounters, explicit sexual language, or pornographic content with vivid sexual imagery.",
            CW::MildLanguage => "Contains occasional use of mild profanity, teenage slang, casual swearing, or language that might be considered inappropriate in formal settings but commonly used among young adults.",
            CW::Language => "Contains moderate profanity, crude language, sexual innuendos, inappropriate jokes, offensive slang, or language that some readers might find distasteful or unsuitable for younger audiences.",
            CW::StrongLanguage => "Contains frequent use of profanity, crude sexual language, blasphemy, extremely offensive terminology, strong expletives, vulgar expressions, or language used in anger or for emphasis.",
            CW::SubstanceAbuse => "Depicts problematic use of drugs, alcohol, or other substances including addiction, overdose, withdrawal symptoms, illegal drug use, and the negative consequences on individuals and families.",
            CW::MentalHealth => "Addresses various mental health conditions, psychological disorders, therapy sessions, psychiatric treatment, medication, or the impact of mental illness on daily life and relationships.",
            CW::Suicide => "Contains depictions of suicide attempts, completed suicide, suicidal planning, methods of self-harm with intent to die, or detailed discussions of characters taking their own lives.",
            CW::SelfHarm => "Depicts deliberate self-injury such as cutting, burning, hitting oneself, or other forms of intentional physical harm without suicidal intent, including descriptions of self-harm methods and resulting injuries.",
            CW::Death => "Contains character deaths from various causes including natural death, accidents, violence, or illness, along with discussions of mortality, funerals, or the emotional impact of loss on survivors.",
            CW::Trauma => "Depicts traumatic experiences and their lasting psychological effects including flashbacks, emotional triggers, avoidance behaviors, difficulty functioning, or the long-term impact of distressing events.",
            CW::Discrimination => "Contains depictions of unfair treatment, prejudice, or bias based on race, gender, religion, sexuality, disability, or other characteristics, including systemic inequalities and their social impact.",
            CW::ReligiousContent => "Contains religious themes, spiritual practices, discussions of faith, religious ceremonies, conflicts between belief systems, detailed religious doctrine, or challenges to religious beliefs.",
            CW::PoliticalContent => "Contains political themes, ideologies, government criticism, election processes, commentary on political systems, partisan viewpoints, or discussions of controversial political topics.",
            CW::HorrorElements => "Contains scary, frightening, or suspenseful content designed to create fear, dread, or unease including supernatural threats, monsters, psychological terror, or disturbing scenarios.",
            CW::DomesticViolence => "Depicts violence, abuse, or threatening behavior within family relationships, romantic partnerships, or household settings including physical, emotional, psychological, or economic abuse.",
            CW::EatingDisorders => "Addresses disordered eating behaviors including anorexia, bulimia, binge eating, unhealthy relationships with food, body image issues, weight obsession, or related compulsive behaviors.",
            CW::ChildAbuse => "Contains depictions of physical, emotional, sexual, or psychological abuse directed toward minors including neglect, exploitation, or other forms of harm inflicted by adults or authority figures.",
            CW::SexualAssault => "Contains depictions of non-consensual sexual contact, rape, sexual coercion, attempted sexual assault, or the psychological aftermath and trauma experienced by survivors of sexual violence.",
            CW::Racism => "Contains racist attitudes, language, behaviors, racial slurs, stereotypes, systematic discrimination based on race or ethnicity, or depictions of historical or contemporary racist incidents.",
            CW::Homophobia => "Contains anti-LGBTQ+ attitudes, discriminatory language or behaviors, prejudice against lesbian, gay, bisexual, transgender, or queer individuals, including hate crimes or social rejection.",
            CW::Depression => "Depicts characters experiencing persistent sadness, hopelessness, loss of interest in activities, fatigue, or other symptoms of clinical depression including discussions of treatment and medication.",
            CW::Anxiety => "Contains depictions of excessive worry, fear, social anxiety, generalized anxiety disorder, phobias, panic symptoms, or anxiety's impact on daily functioning and relationships.",
            CW::Addiction => "Explores themes of physical or psychological dependence on substances, activities, or behaviors including detailed descriptions of addictive cycles, withdrawal, relapse, and recovery processes.",
            CW::Grief => "Deals with the emotional process of mourning, bereavement, and coping with loss including detailed descriptions of grief stages, memorial services, and the long-term impact of losing loved ones.",
            CW::MedicalTrauma => "Contains traumatic medical experiences including painful procedures, medical emergencies, surgical complications, hospital stays, or negative healthcare experiences that result in psychological trauma.",
            CW::BodyHorror => "Contains disturbing transformations, mutations, violations of the human body, graphic descriptions of bodily distortion, infection, disease, or unnatural physical changes and deformities.",
            CW::PsychologicalHorror => "Uses psychological fear, mental manipulation, and emotional terror including mind games, gaslighting, characters questioning their sanity, or terror arising from mental disturbance.",
            CW::HateSpeech => "Contains language specifically intended to demean, threaten, or incite violence against individuals or groups based on race, religion, gender, sexual orientation, or other protected characteristics.",
            CW::Bullying => "Depicts systematic harassment, intimidation, abuse of power, cyberbullying, workplace harassment, school bullying, social exclusion, or the psychological effects of persistent targeted abuse.",
            CW::ToxicRelationships => "Portrays unhealthy relationship dynamics including emotional manipulation, control, jealousy, psychological abuse, codependency, or damaging patterns between romantic partners, friends, or family.",
            CW::TerminalIllness => "Addresses fatal diseases, degenerative conditions, end-of-life care, characters facing death from illness, discussions of medical treatment, hospice care, or preparations for death.",
            CW::Flashbacks => "Contains scenes where characters re-experience traumatic events through vivid, involuntary memories including detailed descriptions of the original trauma and its ongoing psychological impact.",
            CW::PanicAttacks => "Depicts panic attacks and severe anxiety episodes including physical symptoms like rapid heartbeat, sweating, trembling, difficulty breathing, and feelings of impending doom or loss of control.",
            CW::Abandonment => "Explores themes of being left behind, rejected, or deserted by loved ones including children abandoned by parents, partners leaving relationships, or emotional abandonment and its lasting effects.",
            CW::FamilyDysfunction => "Depicts unhealthy family dynamics including emotional abuse, neglect, manipulation, toxic relationships between family members, generational trauma, family secrets, or dysfunctional communication patterns.",
            CW::Crime => "Depicts scenes of criminal activities including theft, fraud, smuggling, organized crime, violent crimes, criminal organizations, heists, or interactions with the criminal justice system.",
            CW::CrimeInvestigation => "Contains detailed depictions of police work, detective investigations, forensic procedures, criminal justice processes, crime scene analysis, interrogations, or legal proceedings related to criminal cases.",
            CW::Torture => "Contains scenes of deliberate infliction of severe pain or suffering for punishment, coercion, intimidation, or sadistic pleasure, including physical, psychological, or emotional torture methods and their effects on victims.",
            CW::SexualViolence => "Contains depictions of violence with sexual motivations, sexual coercion through force or threats, or acts of violence specifically targeting victims because of their gender or sexuality.",
            CW::WarViolence => "Contains depictions of military combat, battlefield injuries, civilian casualties, war crimes, or other violence related to armed conflicts including descriptions of weapons, strategic attacks, and the psychological impact of warfare.",
            CW::AnimalCruelty => "Contains scenes of intentional harm, abuse, neglect, torture, or killing of animals including descriptions of animal suffering, exploitation, or inhumane treatment of creatures.",
            CW::NonConsensualContent => "Contains sexual or intimate situations where one or more parties have not provided clear consent, including scenarios involving manipulation, coercion, intoxication, or situations where consent cannot be legally given.",
            CW::UnderageSexualContent => "Contains sexual content involving characters under the age of 18, including romantic or sexual situations between minors and adults, or sexualized depictions of children in any context.",
            CW::SuicidalIdeation => "Contains characters expressing thoughts of suicide, death wishes, passive suicidal thoughts, or discussions about wanting to die without depicting actual suicide attempts or completed suicide.",
            CW::Psychosis => "Depicts characters experiencing breaks from reality including hallucinations, delusions, paranoia, disorganized thinking, or other symptoms of psychotic disorders that affect perception and cognition.",
            CW::BodyDysmorphia => "Contains themes related to distorted body image, obsessive focus on perceived physical flaws, excessive concern about appearance, or compulsive behaviors related to body image and appearance.",
            CW::DrugUse => "Contains depictions of illegal drug use, prescription drug misuse, drug dealing, or the culture surrounding illicit substances including descriptions of drug effects, paraphernalia, or drug-related activities.",
            CW::AlcoholAbuse => "Depicts excessive drinking, alcoholism, binge drinking, drunk driving, or the negative consequences of alcohol consumption on relationships, work, health, and family including withdrawal symptoms.",
            CW::Overdose => "Contains scenes depicting drug or alcohol overdose, including symptoms, medical emergencies, near-death experiences, or fatal outcomes from substance abuse including emergency medical treatment.",
            CW::Slurs => "Contains derogatory terms or epithets targeting specific groups of people based on race, religion, gender, sexuality, disability, or other characteristics that are historically used to marginalize or dehumanize.",
            CW::Harassment => "Contains depictions of persistent unwanted contact, stalking, sexual harassment, workplace harassment, online harassment, or other forms of repeated intimidating or threatening behavior toward individuals.",
            CW::GraphicDeath => "Contains explicit, detailed descriptions of death including the dying process, graphic death scenes, disturbing imagery of deceased bodies, or detailed depictions of how characters die.",
            CW::Murder => "Contains depictions of intentional killing, premeditated homicide, assassination, or planned killings including murder weapons, crime scenes, motives, and the psychological profiles of killers.",
            CW::Genocide => "Contains depictions of systematic killing, persecution, or attempted extermination of entire groups of people based on ethnicity, religion, nationality, or other characteristics including mass atrocities.",
            CW::MassCasualties => "Contains scenes involving multiple deaths or injuries from disasters, terrorist attacks, accidents, natural disasters, or other catastrophic events including descriptions of emergency response and survivor trauma.",
            CW::Ptsd => "Contains detailed depictions of Post-Traumatic Stress Disorder symptoms including nightmares, hypervigilance, emotional numbing, intrusive memories, avoidance behaviors, and difficulty functioning after trauma.",
            CW::ChildhoodTrauma => "Depicts traumatic experiences occurring during childhood and their lasting effects on adult characters including abuse, neglect, witnessing violence, or other adverse childhood experiences and their psychological impact.",
            CW::Sexism => "Contains discriminatory attitudes or behaviors based on gender including misogyny, gender stereotypes, workplace discrimination, unequal treatment based on sex, or systematic oppression based on gender.",
            CW::Transphobia => "Contains discriminatory attitudes or behaviors specifically targeting transgender individuals including deadnaming, misgendering, exclusion from spaces, violence based on gender identity, or denial of transgender rights.",
            CW::Ableism => "Contains discrimination against people with disabilities including negative stereotypes, inaccessible environments, treating disabled individuals as inferior, inspiration porn, or systemic barriers faced by disabled people.",
            CW::ReligiousDiscrimination => "Contains prejudice or unfair treatment based on religious beliefs including persecution of religious minorities, forced conversion, denial of religious freedom, or systematic oppression based on faith.",
            CW::Classism => "Contains discrimination based on social or economic class including stereotypes about wealth or poverty, systematic inequality, prejudice against different socioeconomic groups, or exploitation based on class status.",
            CW::Blasphemy => "Contains content that may be considered disrespectful, offensive, or sacrilegious to religious beliefs including mockery of sacred texts, deities, religious practices, or deliberate violation of religious taboos.",
            CW::ReligiousExtremism => "Contains depictions of radical religious ideology, fundamentalism, religious violence, terrorism motivated by religious beliefs, cult behavior, or extreme interpretations of religious doctrine.",
            CW::PoliticalExtremism => "Contains depictions of radical political ideologies, political violence, terrorism, extremist movements, revolutionary activities, or dangerous political rhetoric that promotes violence or hatred.",
            CW::Propaganda => "Contains biased or misleading information designed to promote particular political, religious, or ideological viewpoints including manipulation tactics, misinformation campaigns, or deliberate distortion of facts.",
            CW::SupernaturalHorror => "Contains frightening supernatural elements including ghosts, demons, witchcraft, otherworldly entities, possession, curses, paranormal phenomena, or supernatural threats that create fear and dread.",
            CW::DisturbingImagery => "Contains unsettling visual descriptions or scenarios designed to create discomfort, revulsion, or psychological unease including grotesque imagery, nightmare-like scenarios, or deeply unsettling situations.",
            CW::JumpScares => "Contains sudden, unexpected frightening moments designed to startle the reader including surprise attacks, sudden appearances of threats, shocking revelations, or other techniques meant to create immediate fear.",
            CW::MedicalContent => "Contains medical procedures, hospital settings, illness, injury treatment, healthcare scenarios, medical terminology, or discussions of symptoms, diagnoses, treatments, and medical decision-making.",
            CW::GraphicMedicalProcedures => "Contains detailed descriptions of surgical procedures, invasive medical examinations, medical operations, graphic depictions of medical instruments, or vivid descriptions of medical treatments and their effects.",
            CW::Pandemic => "Contains themes related to widespread disease outbreaks, global health crises, quarantine, social isolation, mass illness, death tolls, or the societal breakdown and fear associated with infectious diseases.",
            CW::Disease => "Contains depictions of illness, symptoms, medical conditions, contagious diseases, chronic conditions, or the physical and emotional impact of disease on individuals, families, and communities.",
            CW::Disability => "Contains characters with physical, mental, or cognitive disabilities and may address accessibility issues, discrimination, medical care, assistive technology, or the daily experiences and challenges of disabled individuals.",
            CW::Divorce => "Contains themes related to marriage dissolution, separation, custody battles, family breakdown, legal proceedings, or the emotional impact of divorce on adults, children, and extended family members.",
            CW::Infidelity => "Contains themes of cheating, extramarital affairs, emotional affairs, betrayal within romantic relationships, or the discovery of infidelity and its devastating impact on relationships and families.",
            CW::Claustrophobia => "Contains scenarios involving confined spaces, being trapped, enclosed areas, small rooms, underground spaces, or other situations that might trigger fear of enclosed or restrictive environments.",
            CW::Agoraphobia => "Contains scenarios involving crowded places, open spaces, public transportation, large gatherings, or situations that might trigger fear of being unable to escape or find help in certain environments.",
            CW::Drowning => "Contains scenes of characters drowning, near-drowning experiences, being underwater and unable to breathe, water-related accidents, or detailed descriptions of the experience of drowning and water-related deaths.",
            CW::Fire => "Contains scenes involving fires, burns, characters trapped in burning buildings, detailed descriptions of fire-related injuries, arson, fire-related disasters, or the experience of being burned.",
            CW::InsectsSpiders => "Contains detailed descriptions of insects, spiders, other arthropods, swarms, bites, stings, infestations, or scenarios that may trigger entomophobia, arachnophobia, or fear of creeping creatures.",
            CW::Blood => "Contains descriptions of blood, bleeding, blood loss, blood tests, transfusions, or other blood-related medical procedures that may trigger hemophobia, squeamishness, or medical anxiety.",
            CW::Needles => "Contains depictions of injections, IV insertions, blood draws, vaccinations, or other medical procedures involving needles that may trigger trypanophobia, medical anxiety, or fear of medical procedures.",
            CW::MatureThemes => "Contains complex adult themes including moral ambiguity, existential questions, sophisticated emotional content, adult decision-making, or psychological complexity that may be better understood by mature readers.",
            CW::AdultContent => "Contains content specifically intended for adult audiences including explicit material, complex psychological themes, extreme situations, or content that is inappropriate for minors due to its nature or intensity.",
            CW::NotSuitableForChildren => "Contains content that is inappropriate for children due to violence, sexual content, language, frightening themes, or psychological complexity that could be harmful, confusing, or distressing to young minds.",
        };
        description.to_string()
    }

    fn resolver() -> &'static Resolver<Self> {
        &CONTENT_WARNING_RESOLVER
    }

    fn to_dict(self) -> Value {
        json!({
            "value": self.key(),
            "display_name": self.display_name(),
            "description": self.description(),
            "severity_level": self.severity_level(),
            "age_appropriateness": self.age_appropriateness(),
            "category": self.category(),
        })
    }
}

impl Taxonomy for WarningCategory {
    const KIND: &'static str = "warning category";

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
        format!("{} content warnings", self.display_name())
    }

    fn resolver() -> &'static Resolver<Self> {
        &WARNING_CATEGORY_RESOLVER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing;

    #[test]
    fn test_keys_and_aliases_resolve() {
        testing::assert_keys_resolve::<ContentWarning>();
        assert!(testing::assert_aliases_resolve::<ContentWarning>().is_empty());
        // "language" is both a key and an alias; the key wins
        assert_eq!(ContentWarning::resolve("language").unwrap(), CW::Language);
    }

    #[test]
    fn test_alias_substring_precedes_canonical_substring() {
        assert_eq!(ContentWarning::resolve("bad language").unwrap(), CW::StrongLanguage);
        assert_eq!(ContentWarning::resolve("very violent scenes").unwrap(), CW::Violence);
        assert_eq!(ContentWarning::resolve("Self-Harm").unwrap(), CW::SelfHarm);
    }

    #[test]
    fn test_display_overrides() {
        assert_eq!(CW::Ptsd.display_name(), "PTSD");
        assert_eq!(CW::InsectsSpiders.display_name(), "Insects/Spiders");
        assert_eq!(CW::JumpScares.display_name(), "Jump Scares");
    }

    #[test]
    fn test_tiers_are_complete() {
        let severity_total: usize = Severity::ALL.iter().map(|s| ContentWarning::by_severity(*s).len()).sum();
        assert_eq!(severity_total, ContentWarning::ALL.len());

        let category_total: usize = WarningCategory::ALL
            .iter()
            .map(|c| ContentWarning::by_category(*c).len())
            .sum();
        assert_eq!(category_total, ContentWarning::ALL.len());

        for warning in ContentWarning::ALL {
            assert!([8, 13, 16, 18].contains(&warning.age_minimum()));
        }
    }

    #[test]
    fn test_tier_values() {
        assert_eq!(CW::Gore.severity_level(), Severity::Extreme);
        assert_eq!(CW::Gore.age_appropriateness(), "18+");
        assert_eq!(CW::Grief.age_minimum(), 8);
        assert_eq!(CW::CrimeInvestigation.age_minimum(), 16);
        assert_eq!(CW::CrimeInvestigation.category(), WarningCategory::General);
        assert_eq!(CW::Ptsd.category(), WarningCategory::Trauma);
    }

    #[test]
    fn test_for_genre_unions_and_sorts() {
        let warnings = ContentWarning::for_genre("Horror");
        assert_eq!(warnings.len(), 9);
        let names: Vec<String> = warnings.iter().map(|w| w.display_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        // "crime" and "mystery" rows both apply
        let combined = ContentWarning::for_genre("crime mystery");
        assert!(combined.contains(&CW::CrimeInvestigation));
        assert!(combined.contains(&CW::SexualViolence));
    }

    #[test]
    fn test_for_genre_fallback() {
        assert_eq!(
            ContentWarning::for_genre("cookbook"),
            vec![CW::MatureThemes, CW::StrongLanguage]
        );
    }

    #[test]
    fn test_by_max_age() {
        let for_children = ContentWarning::by_max_age(8);
        assert_eq!(for_children, vec![CW::MildViolence, CW::MildLanguage, CW::Grief, CW::Divorce]);
        assert_eq!(ContentWarning::by_max_age(18).len(), ContentWarning::ALL.len());
    }

    #[test]
    fn test_to_dict() {
        let dict = CW::SelfHarm.to_dict();
        assert_eq!(dict["value"], "self_harm");
        assert_eq!(dict["display_name"], "Self-Harm");
        assert_eq!(dict["severity_level"], "severe");
        assert_eq!(dict["age_appropriateness"], "16+");
        assert_eq!(dict["category"], "mental_health");
    }
}
