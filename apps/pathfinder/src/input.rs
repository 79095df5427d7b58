//! Loads resume text for the CLI: inline, from a text or PDF file, or stdin.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Where the resume text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl ResumeSource {
    /// `-` means stdin.
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            ResumeSource::Stdin
        } else {
            ResumeSource::File(path)
        }
    }

    pub async fn load(self) -> Result<String> {
        match self {
            ResumeSource::Inline(text) => Ok(text),
            ResumeSource::File(path) => load_file(&path).await,
            ResumeSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read resume from stdin")?;
                Ok(text)
            }
        }
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

async fn load_file(path: &Path) -> Result<String> {
    if is_pdf(path) {
        let owned = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned))
            .await
            .context("PDF extraction task panicked")?
            .map_err(|e| anyhow!("Failed to extract text from {}: {e:?}", path.display()))?;
        debug!("Extracted {} chars from {}", text.len(), path.display());
        return Ok(text);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read resume file {}", path.display()))
}
