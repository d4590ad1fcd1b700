//! # pytutor
//!
//! Core library for the pytutor relay backend: a thin service that wraps an
//! OpenAI-compatible chat model behind a tutoring persona for Python
//! beginners.
//!
//! The pieces here are deliberately small:
//!
//! - [`registry`]: [`QuestionRegistry`], identifier → reference question
//!   text, loaded once at startup from a CSV file and never mutated.
//! - [`prompt`]: [`PromptTemplate`], the tutoring system prompt, carried as
//!   an embedded YAML file with `{question_details}` / `{query}` / `{code}`
//!   slots filled verbatim per request.
//! - [`llm`]: [`LlmClient`] trait with [`OpenRouterChat`] (real upstream)
//!   and [`MockLlm`] (tests).
//!
//! The HTTP surface lives in the `serve` crate; wiring and startup checks in
//! `cli`. Everything the request path needs is constructed at startup and
//! passed in explicitly, so tests can swap the upstream for a mock.
//!
//! Key types are re-exported at crate root:
//! `use pytutor::{QuestionRegistry, PromptTemplate, LlmClient, LlmError};`

pub mod llm;
pub mod prompt;
pub mod registry;

pub use llm::{LlmClient, LlmError, MockLlm, OpenRouterChat};
pub use prompt::{PromptError, PromptTemplate};
pub use registry::{QuestionRegistry, RegistryError};
