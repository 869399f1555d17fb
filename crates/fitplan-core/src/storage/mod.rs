mod config;

pub use config::{Config, HydrationConfig, SessionConfig, TargetsConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the fitplan config directory, creating it if needed.
///
/// `FITPLAN_HOME` overrides the location outright. Otherwise this is
/// `~/.config/fitplan[-dev]/`, with `FITPLAN_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("FITPLAN_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FITPLAN_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("fitplan-dev")
            } else {
                base_dir.join("fitplan")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
