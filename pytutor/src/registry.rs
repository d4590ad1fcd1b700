//! Question registry: identifier → reference question text, loaded from CSV.
//!
//! The registry is read once at process start and shared read-only for the
//! process lifetime; there is no reload path. A load failure is fatal at
//! startup (the relay is useless without its reference questions), so every
//! error carries enough context to diagnose the file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Error when loading the questions CSV (missing file, malformed row).
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read questions file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse questions CSV {path}: {message}")]
    ParseCsv { path: String, message: String },
}

/// One row of the questions CSV: `question_id`, `question_details` columns.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    question_id: String,
    question_details: String,
}

/// In-memory mapping of question id → reference question/solution text.
///
/// Built once by [`QuestionRegistry::load`]; [`get`](QuestionRegistry::get)
/// is a pure lookup. An absent id is not an error at this layer; the
/// request handler decides what a miss means (it proceeds with a
/// placeholder; see `serve::submit`).
#[derive(Debug)]
pub struct QuestionRegistry {
    questions: HashMap<String, String>,
}

impl QuestionRegistry {
    /// Loads the registry from a CSV file with `question_id` and
    /// `question_details` columns. Each row yields one entry; when an id
    /// appears twice, the last occurrence wins.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| RegistryError::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut questions = HashMap::new();
        for row in reader.deserialize::<QuestionRow>() {
            let row = row.map_err(|e| RegistryError::ParseCsv {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            questions.insert(row.question_id, row.question_details);
        }

        info!(
            path = %path.display(),
            count = questions.len(),
            "question registry loaded"
        );
        Ok(Self { questions })
    }

    /// Builds a registry directly from entries. Used by tests and tools that
    /// already hold the mapping.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            questions: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up the reference question text for an id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.questions.get(id).map(String::as_str)
    }

    /// Number of loaded questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when no questions were loaded.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
