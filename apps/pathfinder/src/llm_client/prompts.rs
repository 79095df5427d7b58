// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Keeps the model anchored to the text the user actually supplied.
pub const GROUNDING_INSTRUCTION: &str = "\
You must reason carefully and avoid hallucinations.
Base recommendations only on the provided resume and interests.
Do NOT invent experience, employers, degrees, or skills the text does not support.";

/// Wraps the two user inputs into the single user turn sent to the model.
pub fn user_content(resume_text: &str, interests_text: &str) -> String {
    format!("RESUME:\n{resume_text}\n\nINTERESTS:\n{interests_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_content_labels_both_sections() {
        let content = user_content("5 years backend", "data science");
        assert_eq!(content, "RESUME:\n5 years backend\n\nINTERESTS:\ndata science");
    }
}
