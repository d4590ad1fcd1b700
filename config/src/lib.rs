//! Environment handling for the pytutor relay: apply project `.env` to the
//! process environment, then read typed [`Settings`] from it.
//!
//! Precedence: **existing env > .env**. `load_and_apply` never overwrites a
//! variable that is already set, so deployment env always wins over the
//! local development file.

mod dotenv;
mod settings;

use std::path::Path;

use thiserror::Error;

pub use settings::{Settings, SettingsError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Parses `.env` from `override_dir` (or the current directory) and sets
/// each variable that is **not** already present in the process environment.
/// A missing `.env` is fine; deployments configure through real env.
pub fn load_and_apply(override_dir: Option<&Path>) -> Result<(), LoadError> {
    let pairs = dotenv::load(override_dir).map_err(LoadError::DotenvRead)?;
    for (key, value) in pairs {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}
