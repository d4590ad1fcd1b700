//! Tutoring system prompt: embedded YAML template and per-request rendering.
//!
//! **Canonical source**: the template text lives in `pytutor/prompts/tutor.yaml`
//! (key `system_template`); it is embedded at compile time and used when no
//! `PROMPTS_DIR` or directory override is present. The template carries the
//! whole tutoring persona and policy text; the code here only fills the three
//! `{question_details}` / `{query}` / `{code}` slots.
//!
//! Rendering performs no escaping or sanitization: the caller-supplied query
//! and code reach the upstream model verbatim. The model is expected to treat
//! the embedded text as untrusted student content, not as instructions; that
//! trust boundary is owned by the prompt text itself.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Embedded default template (canonical source: `pytutor/prompts/tutor.yaml`).
const EMBED_TUTOR: &str = include_str!("../prompts/tutor.yaml");

/// Name of the template file under the prompts directory.
const TUTOR_FILE: &str = "tutor.yaml";

const QUESTION_SLOT: &str = "{question_details}";
const QUERY_SLOT: &str = "{query}";
const CODE_SLOT: &str = "{code}";

/// Error when loading the prompt template from a directory or the embedded
/// default (invalid YAML, missing `system_template` key).
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read prompt file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
    #[error("prompt file {path} has no system_template")]
    MissingTemplate { path: String },
}

/// Shape of `tutor.yaml`.
#[derive(Debug, Default, Deserialize)]
struct TutorPromptFile {
    system_template: Option<String>,
}

/// The tutoring system prompt template.
///
/// Built once at startup with [`load_or_default`](PromptTemplate::load_or_default)
/// and shared read-only; [`render`](PromptTemplate::render) fills the slots
/// per request.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Loads `tutor.yaml` from `dir` (or `PROMPTS_DIR` when `dir` is `None`).
    /// A missing directory or file is an error here; use
    /// [`load_or_default`](PromptTemplate::load_or_default) to fall back to
    /// the embedded template.
    pub fn load(dir: Option<&Path>) -> Result<Self, PromptError> {
        let base = dir.map(std::path::PathBuf::from).unwrap_or_else(|| {
            std::env::var("PROMPTS_DIR")
                .ok()
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| std::path::PathBuf::from("prompts"))
        });
        let path = base.join(TUTOR_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| PromptError::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Loads from `dir` when it holds a readable `tutor.yaml`; otherwise
    /// returns the embedded default. A present-but-invalid file still
    /// surfaces its parse error instead of being silently replaced.
    pub fn load_or_default(dir: Option<&Path>) -> Result<Self, PromptError> {
        match Self::load(dir) {
            Ok(t) => Ok(t),
            Err(PromptError::ReadFile { .. }) => Self::default_from_embedded(),
            Err(e) => Err(e),
        }
    }

    /// Parses the embedded `tutor.yaml`. The single source of truth for the
    /// default template text; no duplicate strings in Rust.
    pub fn default_from_embedded() -> Result<Self, PromptError> {
        Self::from_yaml(EMBED_TUTOR, "embedded tutor.yaml")
    }

    fn from_yaml(content: &str, path: &str) -> Result<Self, PromptError> {
        let file: TutorPromptFile =
            serde_yaml::from_str(content).map_err(|e| PromptError::ParseYaml {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let template = file.system_template.ok_or_else(|| PromptError::MissingTemplate {
            path: path.to_string(),
        })?;
        Ok(Self { template })
    }

    /// Fills the three slots with the given texts, verbatim. No escaping,
    /// truncation or transformation: the rendered prompt contains the exact
    /// query and code substrings the caller sent.
    pub fn render(&self, question_details: &str, query: &str, code: &str) -> String {
        self.template
            .replace(QUESTION_SLOT, question_details)
            .replace(QUERY_SLOT, query)
            .replace(CODE_SLOT, code)
    }
}
