//! Pathfinder: maps a resume and stated interests to recommended roles, skill
//! gaps, a learning roadmap, portfolio ideas and resume fixes, using one
//! schema-constrained Gemini call.
//!
//! The presentation layer talks to [`controller::AnalysisController`] only:
//! `submit`, `reset`, and `state`/`subscribe` to observe.

pub mod analysis;
pub mod config;
pub mod controller;
pub mod errors;
pub mod input;
pub mod llm_client;
pub mod models;
pub mod report;
pub mod state;

pub use analysis::{Analyzer, GeminiAnalyzer};
pub use controller::{AnalysisController, Submission};
pub use errors::{AnalysisFailed, FailureCause, InputError};
pub use models::{AnalysisRequest, CareerAnalysis, LearningItem, RecommendedRole};
pub use state::AppState;
