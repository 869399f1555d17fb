//! Session-scoped planner state.
//!
//! A [`PlannerSession`] is created once at startup and passed by reference to
//! whoever needs it. All mutation goes through [`PlannerSession::dispatch`];
//! every read derives fresh numbers from the current state.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{
    compute_progress, timeline, CompletionState, DerivedProgress, HydrationDirection,
    HydrationSnapshot, HydrationState, TimelineEntry, ToggleOutcome,
};
use crate::catalog::Catalog;
use crate::error::{CatalogError, ValidationError};
use crate::events::PlannerEvent;

/// Fixed daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub calories: u32,
    pub protein_g: u32,
    pub hydration_liters: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            calories: 3200,
            protein_g: 200,
            hydration_liters: 4.0,
        }
    }
}

/// Intents coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    ToggleItem(String),
    /// Raw delta in liters; the result is clamped.
    AdjustHydration(f64),
    Hydrate(HydrationDirection),
    /// Back to the state the session started with.
    Reset,
}

/// Everything the presentation layer renders, in one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub progress: DerivedProgress,
    pub hydration: HydrationSnapshot,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone)]
pub struct PlannerSession {
    catalog: Catalog,
    targets: Targets,
    completion: CompletionState,
    hydration: HydrationState,
    initial_completion: CompletionState,
    initial_hydration: HydrationState,
}

impl PlannerSession {
    /// Session with nothing completed and default hydration stepping.
    ///
    /// # Errors
    ///
    /// Returns an error if the hydration target is not positive.
    pub fn new(catalog: Catalog, targets: Targets) -> Result<Self, ValidationError> {
        let hydration = HydrationState::new(targets.hydration_liters)?;
        Ok(Self::from_parts(catalog, targets, hydration, CompletionState::new()))
    }

    /// Assemble a session from prepared state.
    ///
    /// Completions for ids missing from `catalog` are dropped.
    pub fn from_parts(
        catalog: Catalog,
        targets: Targets,
        hydration: HydrationState,
        mut completion: CompletionState,
    ) -> Self {
        completion.retain_known(&catalog);
        Self {
            catalog,
            targets,
            initial_completion: completion.clone(),
            initial_hydration: hydration.clone(),
            completion,
            hydration,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    pub fn hydration(&self) -> &HydrationState {
        &self.hydration
    }

    /// Apply one command and report what happened.
    pub fn dispatch(&mut self, command: Command) -> PlannerEvent {
        match command {
            Command::ToggleItem(id) => self.toggle(&id),
            Command::AdjustHydration(delta) => {
                let previous = self.hydration.current_liters();
                self.hydration.adjust(delta);
                self.hydration_event(previous)
            }
            Command::Hydrate(direction) => {
                let previous = self.hydration.current_liters();
                self.hydration.step(direction);
                self.hydration_event(previous)
            }
            Command::Reset => {
                self.completion = self.initial_completion.clone();
                self.hydration = self.initial_hydration.clone();
                tracing::debug!("session reset");
                PlannerEvent::SessionReset { at: Utc::now() }
            }
        }
    }

    /// Lenient toggle: unknown ids are absorbed.
    pub fn toggle(&mut self, id: &str) -> PlannerEvent {
        let at = Utc::now();
        let outcome = self.completion.toggle(&self.catalog, id);
        let Some(item) = self.catalog.get(id) else {
            tracing::warn!(id, "ignoring toggle for unknown item");
            return PlannerEvent::ToggleIgnored {
                id: id.to_string(),
                at,
            };
        };
        tracing::debug!(id, ?outcome, "toggled item");
        match outcome {
            ToggleOutcome::Completed => PlannerEvent::ItemCompleted {
                id: item.id.clone(),
                kind: item.kind,
                at,
            },
            ToggleOutcome::Reopened => PlannerEvent::ItemReopened {
                id: item.id.clone(),
                kind: item.kind,
                at,
            },
            ToggleOutcome::Ignored => PlannerEvent::ToggleIgnored {
                id: id.to_string(),
                at,
            },
        }
    }

    /// Strict toggle: unknown ids are an error instead of a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if `id` is not in the catalog.
    pub fn toggle_strict(&mut self, id: &str) -> Result<PlannerEvent, CatalogError> {
        let id = self.catalog.require(id)?;
        Ok(self.toggle(id.as_str()))
    }

    pub fn progress(&self) -> DerivedProgress {
        compute_progress(
            &self.catalog,
            &self.completion,
            self.targets.calories,
            self.targets.protein_g,
        )
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        timeline(&self.catalog, &self.completion)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            progress: self.progress(),
            hydration: self.hydration.snapshot(),
            timeline: self.timeline(),
        }
    }

    fn hydration_event(&self, previous_liters: f64) -> PlannerEvent {
        let current_liters = self.hydration.current_liters();
        tracing::debug!(previous_liters, current_liters, "hydration adjusted");
        PlannerEvent::HydrationChanged {
            previous_liters,
            current_liters,
            goal_reached: self.hydration.is_goal_reached(),
            at: Utc::now(),
        }
    }
}
