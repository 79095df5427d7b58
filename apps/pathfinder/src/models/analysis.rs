use serde::{Deserialize, Serialize};

/// A job role the model recommends, with its fit estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedRole {
    pub role: String,
    /// Formatted as "NN%".
    pub fit_percentage: String,
    pub justification: String,
}

impl RecommendedRole {
    /// Numeric fit in 0..=100, if `fit_percentage` holds a number.
    pub fn fit_score(&self) -> Option<u8> {
        let digits = self.fit_percentage.trim().trim_end_matches('%').trim();
        let value: f64 = digits.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(value.round().clamp(0.0, 100.0) as u8)
    }
}

/// One step of the learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    /// A label such as "Week 1" or "Weeks 3-4", not necessarily numeric.
    pub week: String,
    pub focus: String,
    pub resources: String,
}

/// Structured career analysis returned by the provider.
///
/// All six fields are required on the wire. A payload that omits one fails to
/// decode; empty arrays are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub recommended_roles: Vec<RecommendedRole>,
    pub current_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub learning_roadmap: Vec<LearningItem>,
    pub portfolio_projects: Vec<String>,
    pub resume_improvements: Vec<String>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::data_analyst_analysis;
    use super::*;
    use crate::errors::{AnalysisFailed, FailureCause};
    use crate::llm_client::decode_json;

    fn decode(text: &str) -> Result<CareerAnalysis, AnalysisFailed> {
        decode_json(text)
    }

    const FULL_JSON: &str = r#"{
        "recommended_roles": [
            {
                "role": "Data Analyst",
                "fit_percentage": "78%",
                "justification": "Strong SQL and Python from backend work transfer directly."
            }
        ],
        "current_skills": ["Python", "SQL"],
        "missing_skills": ["Statistics", "Pandas"],
        "learning_roadmap": [
            {"week": "Week 1", "focus": "Descriptive statistics", "resources": "Khan Academy statistics course"},
            {"week": "Weeks 2-3", "focus": "Pandas and data wrangling", "resources": "Python for Data Analysis, chapters 5-8"}
        ],
        "portfolio_projects": ["Analyze a public transit ridership dataset"],
        "resume_improvements": ["Quantify query performance wins"]
    }"#;

    #[test]
    fn test_full_payload_decodes_to_equal_structure() {
        let parsed = decode(FULL_JSON).unwrap();
        assert_eq!(parsed, data_analyst_analysis());
    }

    #[test]
    fn test_missing_skills_absent_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_JSON).unwrap();
        value.as_object_mut().unwrap().remove("missing_skills");

        let err = decode(&value.to_string()).unwrap_err();
        assert!(matches!(err.cause(), FailureCause::MalformedResponse(_)));
        assert!(err.to_string().contains("missing_skills"));
    }

    #[test]
    fn test_role_missing_sub_field_is_rejected() {
        let json = FULL_JSON.replace(r#""fit_percentage": "78%","#, "");
        let err = decode(&json).unwrap_err();
        assert!(matches!(err.cause(), FailureCause::MalformedResponse(_)));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let json = FULL_JSON.replace(
            r#""current_skills": ["Python", "SQL"]"#,
            r#""current_skills": "Python, SQL""#,
        );
        assert!(decode(&json).is_err());
    }

    #[test]
    fn test_empty_sequences_are_valid() {
        let json = r#"{
            "recommended_roles": [],
            "current_skills": [],
            "missing_skills": [],
            "learning_roadmap": [],
            "portfolio_projects": [],
            "resume_improvements": []
        }"#;
        let parsed = decode(json).unwrap();
        assert!(parsed.recommended_roles.is_empty());
        assert!(parsed.resume_improvements.is_empty());
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(decode("Here is your analysis!").is_err());
    }

    #[test]
    fn test_fit_score_parses_percentages() {
        let mut role = data_analyst_analysis().recommended_roles.remove(0);
        assert_eq!(role.fit_score(), Some(78));

        role.fit_percentage = " 85 % ".to_string();
        assert_eq!(role.fit_score(), Some(85));

        role.fit_percentage = "120%".to_string();
        assert_eq!(role.fit_score(), Some(100));

        role.fit_percentage = "high".to_string();
        assert_eq!(role.fit_score(), None);
    }
}
