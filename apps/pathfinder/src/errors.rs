use std::time::Duration;

use thiserror::Error;

/// Message shown to the user whenever an analysis fails, whatever the cause.
/// Causes are logged, never displayed.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze data. Please check your internet connection or API key and try again.";

/// Why an analysis call failed. Kept for diagnostics only.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider rejected credentials (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Provider API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no text content")]
    EmptyResponse,

    #[error("Response does not match the analysis shape: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No response within {0:?}")]
    Timeout(Duration),
}

/// The single error kind the analysis seam exposes.
#[derive(Debug, Error)]
#[error("Analysis failed: {cause}")]
pub struct AnalysisFailed {
    #[source]
    cause: FailureCause,
}

impl AnalysisFailed {
    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }

    /// Human-readable message for the presentation layer.
    pub fn user_message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }
}

impl From<FailureCause> for AnalysisFailed {
    fn from(cause: FailureCause) -> Self {
        Self { cause }
    }
}

impl From<reqwest::Error> for AnalysisFailed {
    fn from(err: reqwest::Error) -> Self {
        FailureCause::Transport(err).into()
    }
}

impl From<serde_json::Error> for AnalysisFailed {
    fn from(err: serde_json::Error) -> Self {
        FailureCause::MalformedResponse(err).into()
    }
}

/// Rejected submission input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("resume text cannot be empty")]
    EmptyResume,

    #[error("interests text cannot be empty")]
    EmptyInterests,
}
