//! Typed service settings read from the process environment.
//!
//! Everything has a default except the upstream API key: a missing key is a
//! startup error, checked eagerly so the service refuses to boot instead of
//! failing on the first request.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_BASE_URL: &str = "OPENROUTER_BASE_URL";
pub const ENV_MODEL: &str = "TUTOR_MODEL";
pub const ENV_QUESTIONS_CSV: &str = "QUESTIONS_CSV";
pub const ENV_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-zero:free";
const DEFAULT_QUESTIONS_CSV: &str = "questions.csv";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://pymebot-frontend.onrender.com";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Error when reading settings from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{ENV_API_KEY} is not set; the relay cannot call the upstream model")]
    MissingApiKey,
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Service settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// API key for the upstream chat-completion API. Required.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible upstream.
    pub base_url: String,
    /// Model name sent with every completion request.
    pub model: String,
    /// Path to the questions CSV loaded into the registry at startup.
    pub questions_csv: PathBuf,
    /// Single origin allowed to call POST cross-origin.
    pub allowed_origin: String,
    /// Bound on one upstream call.
    pub upstream_timeout: Duration,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Settings {
    /// Reads settings from the environment. Fails when the API key is
    /// missing or a numeric variable does not parse.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let upstream_timeout = match std::env::var(ENV_UPSTREAM_TIMEOUT_SECS) {
            Ok(v) => {
                let secs: u64 = v.trim().parse().map_err(|_| SettingsError::Invalid {
                    name: ENV_UPSTREAM_TIMEOUT_SECS,
                    value: v.clone(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr: env_or(ENV_BIND_ADDR, DEFAULT_BIND_ADDR),
            api_key,
            base_url: env_or(ENV_BASE_URL, DEFAULT_BASE_URL),
            model: env_or(ENV_MODEL, DEFAULT_MODEL),
            questions_csv: PathBuf::from(env_or(ENV_QUESTIONS_CSV, DEFAULT_QUESTIONS_CSV)),
            allowed_origin: env_or(ENV_ALLOWED_ORIGIN, DEFAULT_ALLOWED_ORIGIN),
            upstream_timeout,
        })
    }
}
