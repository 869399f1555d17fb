use std::collections::BTreeSet;

use crate::catalog::{Catalog, ItemId};

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Completed,
    Reopened,
    /// The id is not in the catalog; nothing changed.
    Ignored,
}

/// Ids of the items marked done in the current session.
///
/// Only ids that exist in the catalog can ever enter the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    completed: BTreeSet<ItemId>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with ids that start out completed. Unknown ids are dropped.
    pub fn seeded<'a, I>(catalog: &Catalog, seed: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = Self::new();
        for raw in seed {
            match catalog.lookup(raw) {
                Some(id) => {
                    state.completed.insert(id);
                }
                None => tracing::warn!(id = raw, "dropping unknown seed completion"),
            }
        }
        state
    }

    /// Flip the completion flag of `id`.
    ///
    /// Unknown ids are a silent no-op.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> ToggleOutcome {
        let Some(id) = catalog.lookup(id) else {
            return ToggleOutcome::Ignored;
        };
        if self.completed.remove(&id) {
            ToggleOutcome::Reopened
        } else {
            self.completed.insert(id);
            ToggleOutcome::Completed
        }
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Drop every id that `catalog` does not contain. Returns how many were dropped.
    pub fn retain_known(&mut self, catalog: &Catalog) -> usize {
        let before = self.completed.len();
        self.completed.retain(|id| {
            let known = catalog.contains(id.as_str());
            if !known {
                tracing::warn!(id = id.as_str(), "dropping completion outside the catalog");
            }
            known
        });
        before - self.completed.len()
    }
}
