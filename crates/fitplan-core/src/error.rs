//! Core error types for fitplan-core.
//!
//! Tracker operations themselves never fail; errors only come from building a
//! catalog, loading configuration, or the strict toggle path.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fitplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog construction or lookup errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Catalog-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item was declared with an empty id
    #[error("Schedule item at position {position} has an empty id")]
    EmptyId { position: usize },

    /// Two items share the same id
    #[error("Duplicate schedule item id: {0}")]
    DuplicateId(String),

    /// Scheduled time is not a valid HH:MM label
    #[error("Invalid scheduled time '{time}' for item '{id}' (expected HH:MM)")]
    InvalidTime { id: String, time: String },

    /// Macros attached to something that is not a meal
    #[error("Item '{id}' is a {kind} and cannot carry macros")]
    MacrosOnNonMeal { id: String, kind: String },

    /// Referenced id is not part of the catalog
    #[error("Unknown schedule item: {0}")]
    UnknownItem(String),

    /// Failed to read or parse a catalog file
    #[error("Failed to load catalog from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Value must be strictly positive
    #[error("'{field}' must be greater than zero (got {value})")]
    NotPositive { field: String, value: f64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
