pub mod analysis;
pub mod request;

pub use analysis::{CareerAnalysis, LearningItem, RecommendedRole};
pub use request::AnalysisRequest;
