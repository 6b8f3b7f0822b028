//! Research requirements, plans and the plan generator

use crate::catalog::{Difficulty, Priority, ResearchType};
use crate::engine::{normalize, title_case, Taxonomy};
use crate::error::{Result, TaxonomyError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// One piece of background research a book needs
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchRequirement {
    pub research_type: ResearchType,
    pub topic: String,
    pub description: String,
    pub priority: Priority,
    /// Minutes
    pub estimated_time: u32,
    pub sources_needed: Vec<String>,
    pub specific_questions: Vec<String>,
    pub context: String,
}

impl ResearchRequirement {
    /// Medium priority, 30 minutes, the type's typical sources
    pub fn new(research_type: ResearchType, topic: impl Into<String>) -> Self {
        Self {
            research_type,
            topic: topic.into(),
            description: String::new(),
            priority: Priority::Medium,
            estimated_time: 30,
            sources_needed: typical_sources(research_type),
            specific_questions: Vec::new(),
            context: String::new(),
        }
    }

    /// 1 to 10, from type complexity, priority and question count
    pub fn complexity_score(&self) -> u32 {
        let base: i32 = match self.research_type.complexity_level() {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 7,
            Difficulty::VeryHard => 9,
        };
        let priority: i32 = match self.priority {
            Priority::Low => -1,
            Priority::Medium => 0,
            Priority::High => 1,
            Priority::Critical => 2,
        };
        let questions = (self.specific_questions.len() / 3).min(2) as i32;

        (base + priority + questions).clamp(1, 10) as u32
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "research_type": self.research_type,
            "topic": self.topic,
            "description": self.description,
            "priority": self.priority,
            "estimated_time": self.estimated_time,
            "sources_needed": self.sources_needed,
            "specific_questions": self.specific_questions,
            "context": self.context,
            "complexity_score": self.complexity_score(),
        })
    }

    pub fn from_dict(data: &Value) -> Result<Self> {
        let record = RequirementRecord::deserialize(data)?;
        Ok(record.into())
    }
}

fn typical_sources(research_type: ResearchType) -> Vec<String> {
    research_type.typical_sources().iter().map(|s| s.to_string()).collect()
}

#[derive(Deserialize)]
struct RequirementRecord {
    research_type: ResearchType,
    topic: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_priority")]
    priority: Priority,
    #[serde(default = "default_estimated_time")]
    estimated_time: u32,
    /// Absent means the research type's typical sources; an empty list stays empty
    #[serde(default)]
    sources_needed: Option<Vec<String>>,
    #[serde(default)]
    specific_questions: Vec<String>,
    #[serde(default)]
    context: String,
}

fn default_priority() -> Priority {
    Priority::Medium
}

fn default_estimated_time() -> u32 {
    30
}

impl From<RequirementRecord> for ResearchRequirement {
    fn from(record: RequirementRecord) -> Self {
        let sources_needed = record
            .sources_needed
            .unwrap_or_else(|| typical_sources(record.research_type));
        Self {
            research_type: record.research_type,
            topic: record.topic,
            description: record.description,
            priority: record.priority,
            estimated_time: record.estimated_time,
            sources_needed,
            specific_questions: record.specific_questions,
            context: record.context,
        }
    }
}

/// Ordered research requirements for one book
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchPlan {
    pub book_title: String,
    pub genre: String,
    pub target_audience: String,
    pub requirements: Vec<ResearchRequirement>,
    pub created_at: DateTime<Utc>,
}

impl ResearchPlan {
    pub fn new(
        book_title: impl Into<String>,
        genre: impl Into<String>,
        target_audience: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            book_title: book_title.into(),
            genre: genre.into(),
            target_audience: target_audience.into(),
            requirements: Vec::new(),
            created_at,
        }
    }

    pub fn add_requirement(&mut self, requirement: ResearchRequirement) {
        self.requirements.push(requirement);
    }

    /// Out-of-range indexes are ignored
    pub fn remove_requirement(&mut self, index: usize) {
        if index < self.requirements.len() {
            self.requirements.remove(index);
        }
    }

    /// Minutes across all requirements
    pub fn total_estimated_time(&self) -> u32 {
        self.requirements.iter().map(|r| r.estimated_time).sum()
    }

    pub fn research_types_summary(&self) -> BTreeMap<ResearchType, usize> {
        let mut summary = BTreeMap::new();
        for requirement in &self.requirements {
            *summary.entry(requirement.research_type).or_insert(0) += 1;
        }
        summary
    }

    /// Count per priority; every level is present
    pub fn priority_breakdown(&self) -> BTreeMap<Priority, usize> {
        let mut breakdown: BTreeMap<Priority, usize> = Priority::ALL.iter().map(|p| (*p, 0)).collect();
        for requirement in &self.requirements {
            *breakdown.entry(requirement.priority).or_insert(0) += 1;
        }
        breakdown
    }

    /// Count per research complexity; every level is present
    pub fn complexity_breakdown(&self) -> BTreeMap<Difficulty, usize> {
        let mut breakdown: BTreeMap<Difficulty, usize> = Difficulty::ALL.iter().map(|d| (*d, 0)).collect();
        for requirement in &self.requirements {
            *breakdown.entry(requirement.research_type.complexity_level()).or_insert(0) += 1;
        }
        breakdown
    }

    pub fn requirements_by_priority(&self, priority: Priority) -> Vec<&ResearchRequirement> {
        self.requirements.iter().filter(|r| r.priority == priority).collect()
    }

    pub fn requirements_by_type(&self, research_type: ResearchType) -> Vec<&ResearchRequirement> {
        self.requirements
            .iter()
            .filter(|r| r.research_type == research_type)
            .collect()
    }

    /// Critical first; equal priorities keep their order
    pub fn sort_by_priority(&mut self) {
        self.requirements.sort_by_key(|r| Reverse(r.priority));
    }

    /// Stable sort on complexity score
    pub fn sort_by_complexity(&mut self, ascending: bool) {
        if ascending {
            self.requirements.sort_by_key(|r| r.complexity_score());
        } else {
            self.requirements.sort_by_key(|r| Reverse(r.complexity_score()));
        }
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "book_title": self.book_title,
            "genre": self.genre,
            "target_audience": self.target_audience,
            "requirements": self.requirements.iter().map(|r| r.to_dict()).collect::<Vec<_>>(),
            "total_estimated_time": self.total_estimated_time(),
            "created_at": self.created_at,
            "research_types_summary": self.research_types_summary(),
            "priority_breakdown": self.priority_breakdown(),
            "complexity_breakdown": self.complexity_breakdown(),
        })
    }

    /// Rebuild from [`to_dict`](Self::to_dict) output; derived fields are ignored
    pub fn from_dict(data: &Value) -> Result<Self> {
        let record = PlanRecord::deserialize(data)?;
        Ok(Self {
            book_title: record.book_title,
            genre: record.genre,
            target_audience: record.target_audience,
            requirements: record.requirements.into_iter().map(Into::into).collect(),
            created_at: record.created_at,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_dict())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(json)?;
        Self::from_dict(&data)
    }
}

#[derive(Deserialize)]
struct PlanRecord {
    book_title: String,
    genre: String,
    target_audience: String,
    requirements: Vec<RequirementRecord>,
    created_at: DateTime<Utc>,
}

/// Parameters for [`ResearchPlanGenerator::generate_plan`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanRequest {
    pub book_title: String,
    pub genre: String,
    #[serde(default = "default_audience")]
    pub target_audience: String,
    /// A research difficulty key, or "any"
    #[serde(default = "default_complexity")]
    pub complexity_preference: String,
    #[serde(default = "default_topic_count")]
    pub num_research_topics: usize,
    #[serde(default)]
    pub include_ai_friendly_only: bool,
}

impl PlanRequest {
    pub fn new(book_title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            book_title: book_title.into(),
            genre: genre.into(),
            target_audience: default_audience(),
            complexity_preference: default_complexity(),
            num_research_topics: default_topic_count(),
            include_ai_friendly_only: false,
        }
    }
}

fn default_audience() -> String {
    "adult".to_string()
}

fn default_complexity() -> String {
    "medium".to_string()
}

fn default_topic_count() -> usize {
    5
}

// First genre fragment found in the normalized genre wins
const TOPICS: &[(ResearchType, &[(&str, &str)], &str)] = &[
    (
        ResearchType::Historical,
        &[
            ("fantasy", "Medieval period customs and daily life"),
            ("historical_fiction", "Specific historical period and events"),
        ],
        "Historical context and background",
    ),
    (
        ResearchType::Cultural,
        &[
            ("fantasy", "Cultural traditions and social structures"),
            ("romance", "Dating customs and relationship traditions"),
        ],
        "Cultural background and social norms",
    ),
    (
        ResearchType::Geographical,
        &[
            ("fantasy", "Geography and world-building locations"),
            ("travel", "Specific travel destinations and features"),
        ],
        "Setting locations and geographical features",
    ),
    (
        ResearchType::Professional,
        &[
            ("mystery", "Police procedures and detective work"),
            ("medical", "Medical profession and healthcare"),
        ],
        "Professional practices and workplace culture",
    ),
    (
        ResearchType::CrimeInvestigation,
        &[
            ("mystery", "Criminal investigation procedures"),
            ("thriller", "Forensic science and police methods"),
        ],
        "Crime investigation and legal procedures",
    ),
    (
        ResearchType::Supernatural,
        &[
            ("fantasy", "Magic systems and supernatural elements"),
            ("horror", "Supernatural phenomena and folklore"),
        ],
        "Supernatural concepts and paranormal elements",
    ),
];

const HIGH_PRIORITY: &[(&str, &[ResearchType])] = &[
    (
        "fantasy",
        &[ResearchType::Mythological, ResearchType::Historical, ResearchType::Supernatural],
    ),
    ("science_fiction", &[ResearchType::Scientific, ResearchType::Technological]),
    ("mystery", &[ResearchType::CrimeInvestigation, ResearchType::Legal]),
    ("historical_fiction", &[ResearchType::Historical, ResearchType::Cultural]),
    ("medical", &[ResearchType::Medical, ResearchType::Professional]),
    ("legal", &[ResearchType::Legal, ResearchType::Professional]),
];

const QUESTIONS: &[(ResearchType, [&str; 3])] = &[
    (
        ResearchType::Historical,
        [
            "What were the key events of this period?",
            "What was daily life like for ordinary people?",
            "What were the social and political structures?",
        ],
    ),
    (
        ResearchType::Cultural,
        [
            "What are the important cultural traditions?",
            "How do social relationships function?",
            "What are the key values and beliefs?",
        ],
    ),
    (
        ResearchType::Professional,
        [
            "What are the typical daily responsibilities?",
            "What training and qualifications are required?",
            "What are the common challenges and conflicts?",
        ],
    ),
    (
        ResearchType::Geographical,
        [
            "What are the key geographical features?",
            "What is the climate and environment like?",
            "How do people travel and navigate?",
        ],
    ),
    (
        ResearchType::CrimeInvestigation,
        [
            "What are standard investigation procedures?",
            "What forensic techniques are commonly used?",
            "How does the legal process work?",
        ],
    ),
];

/// Builds research plans from book parameters
pub struct ResearchPlanGenerator;

impl ResearchPlanGenerator {
    pub fn generate_plan(request: &PlanRequest) -> Result<ResearchPlan> {
        Self::generate_plan_at(request, Utc::now())
    }

    /// Same as [`generate_plan`](Self::generate_plan) with a fixed creation time
    ///
    /// Fails with `InvalidInput` when the complexity preference is neither
    /// "any" nor a difficulty key.
    pub fn generate_plan_at(request: &PlanRequest, created_at: DateTime<Utc>) -> Result<ResearchPlan> {
        let complexity = parse_complexity(&request.complexity_preference)?;
        let wanted = request.num_research_topics;

        let mut types = ResearchType::for_genre(&request.genre);
        if request.include_ai_friendly_only {
            types.retain(|t| t.ai_research_difficulty().is_ai_friendly());
        }
        if let Some(complexity) = complexity {
            types.retain(|t| t.complexity_level() == complexity);
        }

        if types.len() < wanted {
            let pool = if request.include_ai_friendly_only {
                ResearchType::ai_friendly()
            } else {
                ResearchType::ALL.to_vec()
            };
            let padding: Vec<ResearchType> = pool
                .into_iter()
                .filter(|t| !types.contains(t))
                .take(wanted - types.len())
                .collect();
            types.extend(padding);
        }
        types.truncate(wanted);

        let mut plan = ResearchPlan::new(
            request.book_title.clone(),
            request.genre.clone(),
            request.target_audience.clone(),
            created_at,
        );
        for research_type in types {
            plan.add_requirement(Self::requirement_for(research_type, request));
        }

        debug!(
            title = %request.book_title,
            genre = %request.genre,
            requirements = plan.requirements.len(),
            minutes = plan.total_estimated_time(),
            "Generated research plan"
        );
        Ok(plan)
    }

    fn requirement_for(research_type: ResearchType, request: &PlanRequest) -> ResearchRequirement {
        let genre = normalize(&request.genre);
        let topic = Self::topic(research_type, &genre);
        let priority = Self::priority(research_type, &genre);

        let mut requirement = ResearchRequirement::new(research_type, topic.clone());
        requirement.description = format!(
            "Research {topic} to ensure accuracy and authenticity in the {} narrative. {}",
            request.genre,
            research_type.description()
        );
        requirement.priority = priority;
        requirement.estimated_time = Self::estimate_time(research_type, priority);
        requirement.specific_questions = Self::questions(research_type, &topic);
        requirement.context = format!(
            "Research needed for {} book: '{}' targeting {} audience",
            request.genre, request.book_title, request.target_audience
        );
        requirement
    }

    fn topic(research_type: ResearchType, genre: &str) -> String {
        match TOPICS.iter().find(|(t, _, _)| *t == research_type) {
            Some((_, by_genre, fallback)) => by_genre
                .iter()
                .find(|(fragment, _)| genre.contains(fragment))
                .map(|(_, topic)| *topic)
                .unwrap_or(*fallback)
                .to_string(),
            None => format!("{} research", title_case(research_type.key())),
        }
    }

    /// High when the genre names this type as essential, otherwise medium
    pub fn priority(research_type: ResearchType, genre: &str) -> Priority {
        let genre = normalize(genre);
        let essential = HIGH_PRIORITY
            .iter()
            .any(|(fragment, types)| genre.contains(fragment) && types.contains(&research_type));
        if essential {
            Priority::High
        } else {
            Priority::Medium
        }
    }

    /// Minutes: a base per complexity scaled by priority, truncated
    pub fn estimate_time(research_type: ResearchType, priority: Priority) -> u32 {
        let base: f64 = match research_type.complexity_level() {
            Difficulty::Easy => 20.0,
            Difficulty::Medium => 35.0,
            Difficulty::Hard => 60.0,
            Difficulty::VeryHard => 90.0,
        };
        let multiplier = match priority {
            Priority::Low => 0.7,
            Priority::Medium => 1.0,
            Priority::High => 1.3,
            Priority::Critical => 1.5,
        };
        (base * multiplier) as u32
    }

    fn questions(research_type: ResearchType, topic: &str) -> Vec<String> {
        match QUESTIONS.iter().find(|(t, _)| *t == research_type) {
            Some((_, questions)) => questions.iter().map(|q| q.to_string()).collect(),
            None => vec![
                format!("What are the key aspects of {topic}?"),
                format!("How does {topic} relate to the story?"),
                "What details are important for authenticity?".to_string(),
            ],
        }
    }
}

fn parse_complexity(preference: &str) -> Result<Option<Difficulty>> {
    let normalized = normalize(preference);
    if normalized == "any" {
        return Ok(None);
    }
    Difficulty::from_key(&normalized)
        .map(Some)
        .ok_or_else(|| TaxonomyError::InvalidInput {
            kind: Difficulty::KIND,
            input: preference.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn fantasy_plan() -> ResearchPlan {
        let request = PlanRequest::new("The Crystal Prophecy", "fantasy");
        ResearchPlanGenerator::generate_plan_at(&request, fixed_time()).unwrap()
    }

    fn types_of(plan: &ResearchPlan) -> Vec<ResearchType> {
        plan.requirements.iter().map(|r| r.research_type).collect()
    }

    #[test]
    fn test_requirement_defaults() {
        let requirement = ResearchRequirement::new(ResearchType::Historical, "Tudor court");
        assert_eq!(requirement.priority, Priority::Medium);
        assert_eq!(requirement.estimated_time, 30);
        assert_eq!(requirement.sources_needed[0], "academic papers");
    }

    #[test]
    fn test_complexity_score() {
        let mut requirement = ResearchRequirement::new(ResearchType::Travel, "Lisbon");
        assert_eq!(requirement.complexity_score(), 2);

        requirement.priority = Priority::Low;
        assert_eq!(requirement.complexity_score(), 1);

        let mut requirement = ResearchRequirement::new(ResearchType::Linguistic, "Old Norse");
        requirement.priority = Priority::Critical;
        requirement.specific_questions = vec!["?".to_string(); 9];
        assert_eq!(requirement.complexity_score(), 10);
    }

    #[test]
    fn test_estimate_time_truncates() {
        assert_eq!(ResearchPlanGenerator::estimate_time(ResearchType::Historical, Priority::High), 45);
        assert_eq!(ResearchPlanGenerator::estimate_time(ResearchType::Culinary, Priority::High), 26);
        assert_eq!(ResearchPlanGenerator::estimate_time(ResearchType::Cultural, Priority::Low), 24);
        assert_eq!(ResearchPlanGenerator::estimate_time(ResearchType::Scientific, Priority::Critical), 90);
    }

    #[test]
    fn test_fantasy_plan_filters_then_pads() {
        let plan = fantasy_plan();
        assert_eq!(
            types_of(&plan),
            vec![
                ResearchType::Cultural,
                ResearchType::Folklore,
                ResearchType::Geographical,
                ResearchType::Historical,
                ResearchType::Scientific,
            ]
        );

        let historical = &plan.requirements[3];
        assert_eq!(historical.topic, "Medieval period customs and daily life");
        assert_eq!(historical.priority, Priority::High);
        assert_eq!(historical.estimated_time, 45);
        assert_eq!(historical.specific_questions.len(), 3);

        let folklore = &plan.requirements[1];
        assert_eq!(folklore.topic, "Folklore research");
        assert_eq!(folklore.specific_questions[0], "What are the key aspects of Folklore research?");
        assert_eq!(
            folklore.context,
            "Research needed for fantasy book: 'The Crystal Prophecy' targeting adult audience"
        );

        assert_eq!(plan.total_estimated_time(), 35 + 35 + 35 + 45 + 60);
    }

    #[test]
    fn test_ai_friendly_plan() {
        let mut request = PlanRequest::new("The Crystal Prophecy", "fantasy");
        request.complexity_preference = "any".to_string();
        request.num_research_topics = 4;
        request.include_ai_friendly_only = true;
        let plan = ResearchPlanGenerator::generate_plan_at(&request, fixed_time()).unwrap();

        assert_eq!(plan.requirements.len(), 4);
        assert!(plan
            .requirements
            .iter()
            .all(|r| r.research_type.ai_research_difficulty().is_ai_friendly()));
    }

    #[test]
    fn test_unknown_complexity_is_invalid_input() {
        let mut request = PlanRequest::new("Title", "fantasy");
        request.complexity_preference = "brutal".to_string();
        let err = ResearchPlanGenerator::generate_plan(&request).unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidInput { .. }));
    }

    #[test]
    fn test_breakdowns() {
        let plan = fantasy_plan();
        let priorities = plan.priority_breakdown();
        assert_eq!(priorities[&Priority::High], 1);
        assert_eq!(priorities[&Priority::Medium], 4);
        assert_eq!(priorities[&Priority::Critical], 0);

        let complexity = plan.complexity_breakdown();
        assert_eq!(complexity[&Difficulty::Medium], 4);
        assert_eq!(complexity[&Difficulty::Hard], 1);
        assert_eq!(plan.research_types_summary().len(), 5);
        assert_eq!(plan.requirements_by_priority(Priority::High).len(), 1);
        assert_eq!(plan.requirements_by_type(ResearchType::Scientific).len(), 1);
    }

    #[test]
    fn test_sorting_is_stable() {
        let mut plan = fantasy_plan();
        plan.sort_by_priority();
        assert_eq!(
            types_of(&plan),
            vec![
                ResearchType::Historical,
                ResearchType::Cultural,
                ResearchType::Folklore,
                ResearchType::Geographical,
                ResearchType::Scientific,
            ]
        );

        plan.sort_by_complexity(false);
        assert_eq!(plan.requirements[0].research_type, ResearchType::Scientific);
        assert_eq!(plan.requirements[1].research_type, ResearchType::Historical);

        plan.sort_by_complexity(true);
        assert_eq!(plan.requirements[4].research_type, ResearchType::Scientific);
    }

    #[test]
    fn test_remove_requirement_ignores_out_of_range() {
        let mut plan = fantasy_plan();
        plan.remove_requirement(99);
        assert_eq!(plan.requirements.len(), 5);
        plan.remove_requirement(0);
        assert_eq!(plan.requirements[0].research_type, ResearchType::Folklore);
    }

    #[test]
    fn test_plan_round_trip() {
        let plan = fantasy_plan();
        let restored = ResearchPlan::from_dict(&plan.to_dict()).unwrap();
        assert_eq!(restored, plan);
        assert_eq!(restored.total_estimated_time(), plan.total_estimated_time());

        let from_json = ResearchPlan::from_json(&plan.to_json().unwrap()).unwrap();
        assert_eq!(from_json, plan);
    }

    #[test]
    fn test_cleared_sources_survive_round_trip() {
        let mut plan = fantasy_plan();
        plan.requirements[0].sources_needed.clear();

        let back = ResearchPlan::from_dict(&plan.to_dict()).unwrap();
        assert_eq!(back, plan);
        assert!(back.requirements[0].sources_needed.is_empty());
    }

    #[test]
    fn test_missing_sources_take_typical_ones() {
        let data = json!({"research_type": "historical", "topic": "Tudor court"});
        let requirement = ResearchRequirement::from_dict(&data).unwrap();
        assert_eq!(requirement.sources_needed, typical_sources(ResearchType::Historical));
    }

    #[test]
    fn test_from_dict_rejects_unknown_research_type() {
        let mut data = fantasy_plan().to_dict();
        data["requirements"][0]["research_type"] = json!("astrology");
        assert!(matches!(
            ResearchPlan::from_dict(&data).unwrap_err(),
            TaxonomyError::Malformed(_)
        ));
    }

    #[test]
    fn test_generator_is_deterministic() {
        assert_eq!(fantasy_plan(), fantasy_plan());
    }
}
