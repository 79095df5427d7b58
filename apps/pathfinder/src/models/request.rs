use crate::errors::InputError;

/// One user submission: resume text plus stated interests.
///
/// Only constructible through [`AnalysisRequest::new`], so both fields are
/// always non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    resume_text: String,
    interests_text: String,
}

impl AnalysisRequest {
    pub fn new(
        resume_text: impl Into<String>,
        interests_text: impl Into<String>,
    ) -> Result<Self, InputError> {
        let resume_text = resume_text.into();
        let interests_text = interests_text.into();

        if resume_text.trim().is_empty() {
            return Err(InputError::EmptyResume);
        }
        if interests_text.trim().is_empty() {
            return Err(InputError::EmptyInterests);
        }

        Ok(Self {
            resume_text,
            interests_text,
        })
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn interests_text(&self) -> &str {
        &self.interests_text
    }
}
