use crate::models::CareerAnalysis;

/// What the presentation layer renders. Exactly one variant is active.
///
/// `Results` always holds a fully decoded analysis and `Error` always holds a
/// non-empty message; both are discarded on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Idle,
    Analyzing,
    Results(CareerAnalysis),
    Error(String),
}

impl AppState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AppState::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing)
    }

    pub fn analysis(&self) -> Option<&CareerAnalysis> {
        match self {
            AppState::Results(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AppState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            AppState::Idle => "idle",
            AppState::Analyzing => "analyzing",
            AppState::Results(_) => "results",
            AppState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::fixtures::data_analyst_analysis;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(AppState::default(), AppState::Idle);
        assert!(AppState::default().is_idle());
    }

    #[test]
    fn test_accessors_follow_variant() {
        let results = AppState::Results(data_analyst_analysis());
        assert_eq!(results.analysis(), Some(&data_analyst_analysis()));
        assert!(results.error_message().is_none());
        assert_eq!(results.label(), "results");

        let error = AppState::Error("boom".to_string());
        assert_eq!(error.error_message(), Some("boom"));
        assert!(error.analysis().is_none());
        assert!(!error.is_analyzing());
    }
}
