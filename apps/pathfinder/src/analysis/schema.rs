//! Response schema handed to the provider. Mirrors `CareerAnalysis` field for field.

use serde_json::{json, Value};

/// Top-level fields every analysis must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "recommended_roles",
    "current_skills",
    "missing_skills",
    "learning_roadmap",
    "portfolio_projects",
    "resume_improvements",
];

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Builds the output schema for a career analysis.
pub fn career_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommended_roles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "role": { "type": "STRING" },
                        "fit_percentage": {
                            "type": "STRING",
                            "description": "A percentage string like '85%'"
                        },
                        "justification": { "type": "STRING" }
                    },
                    "required": ["role", "fit_percentage", "justification"]
                }
            },
            "current_skills": string_array(),
            "missing_skills": string_array(),
            "learning_roadmap": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "week": { "type": "STRING" },
                        "focus": { "type": "STRING" },
                        "resources": { "type": "STRING" }
                    },
                    "required": ["week", "focus", "resources"]
                }
            },
            "portfolio_projects": string_array(),
            "resume_improvements": string_array()
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::fixtures::data_analyst_analysis;

    #[test]
    fn test_schema_requires_all_top_level_fields() {
        let schema = career_analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, REQUIRED_FIELDS);

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            assert!(properties.contains_key(field), "schema lacks {field}");
        }
    }

    #[test]
    fn test_nested_objects_require_all_sub_fields() {
        let schema = career_analysis_schema();
        let role = &schema["properties"]["recommended_roles"]["items"];
        assert_eq!(
            role["required"],
            json!(["role", "fit_percentage", "justification"])
        );
        let item = &schema["properties"]["learning_roadmap"]["items"];
        assert_eq!(item["required"], json!(["week", "focus", "resources"]));
    }

    #[test]
    fn test_schema_fields_match_serialized_model() {
        let serialized = serde_json::to_value(data_analyst_analysis()).unwrap();
        let schema = career_analysis_schema();
        let mut model_keys: Vec<&String> = serialized.as_object().unwrap().keys().collect();
        let mut schema_keys: Vec<&String> =
            schema["properties"].as_object().unwrap().keys().collect();
        model_keys.sort();
        schema_keys.sort();
        assert_eq!(model_keys, schema_keys);
    }
}
