//! TOML-based application configuration.
//!
//! Stores:
//! - Daily calorie and protein targets
//! - Hydration target and step size
//! - Items that start the day already completed
//! - An optional custom catalog file
//!
//! Configuration is stored at `~/.config/fitplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::catalog::Catalog;
use crate::error::{ConfigError, CoreError, ValidationError};
use crate::tracker::{
    CompletionState, HydrationState, PlannerSession, Targets, DEFAULT_HEADROOM_LITERS,
    DEFAULT_STEP_LITERS,
};

/// Nutrition targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_calories")]
    pub calories: u32,
    #[serde(default = "default_protein_grams")]
    pub protein_grams: u32,
}

/// Hydration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    #[serde(default = "default_target_liters")]
    pub target_liters: f64,
    #[serde(default = "default_step_liters")]
    pub step_liters: f64,
    /// How far past the target the counter may climb.
    #[serde(default = "default_headroom_liters")]
    pub headroom_liters: f64,
}

/// Session start-up configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Ids marked completed when a session starts.
    #[serde(default)]
    pub seed_completed: Vec<String>,
    /// TOML catalog to use instead of the built-in day.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/fitplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub hydration: HydrationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_calories() -> u32 {
    3200
}
fn default_protein_grams() -> u32 {
    200
}
fn default_target_liters() -> f64 {
    4.0
}
fn default_step_liters() -> f64 {
    DEFAULT_STEP_LITERS
}
fn default_headroom_liters() -> f64 {
    DEFAULT_HEADROOM_LITERS
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein_grams: default_protein_grams(),
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            target_liters: default_target_liters(),
            step_liters: default_step_liters(),
            headroom_liters: default_headroom_liters(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::Array(_) => {
                    // Accept a JSON array or a comma-separated list.
                    match serde_json::from_str(value) {
                        Ok(v @ serde_json::Value::Array(_)) => v,
                        _ => serde_json::Value::Array(
                            value
                                .split(',')
                                .map(str::trim)
                                .filter(|s| !s.is_empty())
                                .map(|s| serde_json::Value::String(s.to_string()))
                                .collect(),
                        ),
                    }
                }
                serde_json::Value::Object(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ if value.is_empty() => serde_json::Value::Null,
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// # Errors
    ///
    /// Same as [`Config::load`], for an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// # Errors
    ///
    /// Same as [`Config::save`], for an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting config fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        *self = updated;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if a hydration setting is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.hydration_state().map(|_| ())
    }

    pub fn targets(&self) -> Targets {
        Targets {
            calories: self.targets.calories,
            protein_g: self.targets.protein_grams,
            hydration_liters: self.hydration.target_liters,
        }
    }

    fn hydration_state(&self) -> Result<HydrationState, ValidationError> {
        HydrationState::with_step(
            self.hydration.target_liters,
            self.hydration.step_liters,
            self.hydration.headroom_liters,
        )
    }

    fn catalog_path(&self) -> Option<&Path> {
        self.session
            .catalog_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }

    /// The configured catalog file, or the built-in day.
    ///
    /// A relative `session.catalog_path` is taken relative to [`data_dir`].
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog path is set but cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, CoreError> {
        match self.catalog_path() {
            Some(path) if path.is_relative() => self.catalog_in(&data_dir()?),
            _ => self.catalog_in(Path::new("")),
        }
    }

    /// Like [`Config::catalog`], resolving a relative path against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog path is set but cannot be loaded.
    pub fn catalog_in(&self, base_dir: &Path) -> Result<Catalog, CoreError> {
        match self.catalog_path() {
            // join keeps absolute paths as they are
            Some(path) => Ok(Catalog::load(&base_dir.join(path))?),
            None => Ok(Catalog::default_day()),
        }
    }

    /// Build a fresh session from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or hydration settings
    /// are invalid.
    pub fn build_session(&self) -> Result<PlannerSession, CoreError> {
        let catalog = self.catalog()?;
        let hydration = self.hydration_state()?;
        let completion = CompletionState::seeded(
            &catalog,
            self.session.seed_completed.iter().map(String::as_str),
        );
        Ok(PlannerSession::from_parts(
            catalog,
            self.targets(),
            hydration,
            completion,
        ))
    }
}
