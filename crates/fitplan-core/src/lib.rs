//! # fitplan Core Library
//!
//! This library provides the daily planner logic behind fitplan: a fixed
//! catalog of meals, supplement doses and a workout, the set of items the
//! user has checked off, and the progress figures derived from them.
//!
//! ## Architecture
//!
//! - **Catalog**: validated, immutable list of schedule items for the day
//! - **Tracker**: completion flags, hydration counter, and pure derivation of
//!   macro/calorie/task progress
//! - **Session**: an explicitly owned state object driven by [`Command`]s
//! - **Storage**: TOML-based configuration (targets, hydration, seeds)
//!
//! Nothing is persisted between sessions; only configuration lives on disk.
//!
//! ## Key Components
//!
//! - [`Catalog`]: the day's schedule items
//! - [`PlannerSession`]: session state and command dispatch
//! - [`compute_progress`]: derived progress from catalog + completions
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod nutrition;
pub mod storage;
pub mod tracker;

pub use catalog::{Catalog, ItemId, ScheduleItem, ScheduleItemKind};
pub use error::{CatalogError, ConfigError, CoreError, ValidationError};
pub use events::PlannerEvent;
pub use nutrition::{MacroSplit, Macros};
pub use storage::Config;
pub use tracker::{
    compute_progress, Command, CompletionState, DerivedProgress, HydrationDirection,
    HydrationState, PlannerSession, SessionSnapshot, Targets, TimelineEntry,
};
