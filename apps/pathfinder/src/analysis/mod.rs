//! Career analysis: pluggable, trait-based analyzer that turns a resume and
//! interests into a validated `CareerAnalysis`.
//!
//! Default: `GeminiAnalyzer` (one schema-constrained call through `llm_client`).
//! Tests substitute deterministic stubs.
//!
//! `AnalysisController` holds an `Arc<dyn Analyzer>`, chosen at startup.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::errors::AnalysisFailed;
use crate::llm_client::prompts::user_content;
use crate::llm_client::{LlmClient, StructuredPrompt};
use crate::models::{AnalysisRequest, CareerAnalysis};

pub mod prompts;
pub mod schema;

/// The analyzer trait. Implement this to swap backends without touching the
/// controller or the presentation layer.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<CareerAnalysis, AnalysisFailed>;
}

/// Live analyzer backed by the Gemini API. One attempt per call, no caching.
pub struct GeminiAnalyzer {
    llm: LlmClient,
    system: String,
    schema: Value,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: prompts::system_instruction(),
            schema: schema::career_analysis_schema(),
        }
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<CareerAnalysis, AnalysisFailed> {
        let user = user_content(request.resume_text(), request.interests_text());
        let prompt = StructuredPrompt {
            system: &self.system,
            user: &user,
            schema: &self.schema,
        };

        let analysis: CareerAnalysis = self.llm.call_json(prompt).await?;

        info!(
            "Analysis received: {} roles, {} missing skills, {} roadmap items",
            analysis.recommended_roles.len(),
            analysis.missing_skills.len(),
            analysis.learning_roadmap.len()
        );
        Ok(analysis)
    }
}
