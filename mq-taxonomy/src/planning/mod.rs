//! Composite records built from the catalogs
//!
//! Profiles and plans are owned, mutable values whose summaries are
//! recomputed from their members on every access. Generators are pure
//! functions of their request plus a creation timestamp.

mod content_warning_profile;
mod length_recommender;
mod research_plan;
mod structure_recommender;

pub use content_warning_profile::{ContentWarningGenerator, ContentWarningProfile, ProfileRequest};
pub use length_recommender::{LengthQuery, LengthRecommendation, LengthRecommender, PublishingGoal};
pub use research_plan::{PlanRequest, ResearchPlan, ResearchPlanGenerator, ResearchRequirement};
pub use structure_recommender::{StructureQuery, StructureRecommendation, StructureRecommender};
