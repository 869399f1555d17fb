//! Derived daily progress.
//!
//! Nothing here is stored: [`compute_progress`] rebuilds the whole view from
//! the catalog and the completion set every time it is called.

use serde::{Deserialize, Serialize};

use super::CompletionState;
use crate::catalog::{Catalog, ScheduleItemKind};
use crate::nutrition::{MacroSplit, Macros};

/// Completion figures for one item kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindProgress {
    pub kind: ScheduleItemKind,
    pub completed: usize,
    pub total: usize,
    /// 0..=100, zero when the kind has no items.
    pub percent: f64,
}

/// Aggregate view over the day, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProgress {
    pub total_macros: Macros,
    pub macro_split: MacroSplit,
    pub total_calories: u32,
    pub target_calories: u32,
    /// Negative once the target is exceeded.
    pub calories_remaining: i64,
    pub calories_percent: f64,
    pub target_protein_g: u32,
    pub protein_remaining_g: i64,
    pub protein_percent: f64,
    pub by_kind: Vec<KindProgress>,
    pub completed_count: usize,
    pub total_count: usize,
    /// Share of all items completed, 0..=100.
    pub percent_complete: f64,
}

impl DerivedProgress {
    fn kind(&self, kind: ScheduleItemKind) -> Option<&KindProgress> {
        self.by_kind.iter().find(|k| k.kind == kind)
    }

    pub fn completed_count_of(&self, kind: ScheduleItemKind) -> usize {
        self.kind(kind).map_or(0, |k| k.completed)
    }

    pub fn percent_complete_of(&self, kind: ScheduleItemKind) -> f64 {
        self.kind(kind).map_or(0.0, |k| k.percent)
    }

    pub fn is_calorie_target_exceeded(&self) -> bool {
        self.calories_remaining < 0
    }
}

/// `part / whole` as a percentage, zero when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Rounded whole percentage for display.
pub fn display_percent(value: f64) -> i64 {
    value.round() as i64
}

/// Derive the progress view from a catalog and completion set.
///
/// Only completed meals contribute macros; every kind contributes to the task
/// counts.
pub fn compute_progress(
    catalog: &Catalog,
    completion: &CompletionState,
    target_calories: u32,
    target_protein_g: u32,
) -> DerivedProgress {
    let completed_items = catalog
        .items()
        .iter()
        .filter(|item| completion.is_completed(item.id.as_str()));

    let total_macros: Macros = completed_items
        .clone()
        .map(|item| item.contributed_macros())
        .sum();
    let total_calories = total_macros.calories();

    let by_kind: Vec<KindProgress> = ScheduleItemKind::ALL
        .iter()
        .map(|&kind| {
            let total = catalog.count_of(kind);
            let completed = completed_items.clone().filter(|i| i.kind == kind).count();
            KindProgress {
                kind,
                completed,
                total,
                percent: percent(completed as f64, total as f64),
            }
        })
        .collect();

    let completed_count = completed_items.count();
    let total_count = catalog.len();

    DerivedProgress {
        total_macros,
        macro_split: total_macros.split(),
        total_calories,
        target_calories,
        calories_remaining: i64::from(target_calories) - i64::from(total_calories),
        calories_percent: percent(f64::from(total_calories), f64::from(target_calories)),
        target_protein_g,
        protein_remaining_g: i64::from(target_protein_g) - i64::from(total_macros.protein_g),
        protein_percent: percent(
            f64::from(total_macros.protein_g),
            f64::from(target_protein_g),
        ),
        by_kind,
        completed_count,
        total_count,
        percent_complete: percent(completed_count as f64, total_count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScheduleItem;

    fn two_meals() -> Catalog {
        Catalog::new(vec![
            ScheduleItem::meal("a", "07:00", "A", "", Macros::new(10, 20, 5)),
            ScheduleItem::meal("b", "12:00", "B", "", Macros::new(5, 5, 5)),
        ])
        .unwrap()
    }

    #[test]
    fn macros_sum_completed_meals() {
        let catalog = two_meals();
        let mut state = CompletionState::new();

        state.toggle(&catalog, "a");
        let progress = compute_progress(&catalog, &state, 3200, 200);
        assert_eq!(progress.total_macros, Macros::new(10, 20, 5));

        state.toggle(&catalog, "b");
        let progress = compute_progress(&catalog, &state, 3200, 200);
        assert_eq!(progress.total_macros, Macros::new(15, 25, 10));
        assert_eq!(progress.total_calories, 250);
        assert_eq!(progress.calories_remaining, 2950);
        assert_eq!(progress.protein_remaining_g, 185);
    }

    #[test]
    fn supplements_and_workout_add_no_macros() {
        let catalog = Catalog::default_day();
        let mut state = CompletionState::new();
        state.toggle(&catalog, "creatine");
        state.toggle(&catalog, "training");

        let progress = compute_progress(&catalog, &state, 3200, 200);
        assert_eq!(progress.total_macros, Macros::ZERO);
        assert_eq!(progress.total_calories, 0);
        assert_eq!(progress.completed_count, 2);
        assert_eq!(progress.completed_count_of(ScheduleItemKind::Workout), 1);
    }

    #[test]
    fn empty_catalog_reports_zero_not_nan() {
        let catalog = Catalog::empty();
        let progress = compute_progress(&catalog, &CompletionState::new(), 3200, 200);
        assert_eq!(progress.percent_complete, 0.0);
        for kind in ScheduleItemKind::ALL {
            assert_eq!(progress.percent_complete_of(kind), 0.0);
        }
    }

    #[test]
    fn kind_without_items_reports_zero() {
        let catalog = two_meals();
        let progress = compute_progress(&catalog, &CompletionState::new(), 3200, 200);
        let supplements = progress.percent_complete_of(ScheduleItemKind::Supplement);
        assert!(!supplements.is_nan());
        assert_eq!(supplements, 0.0);
    }

    #[test]
    fn zero_targets_do_not_divide_by_zero() {
        let catalog = two_meals();
        let mut state = CompletionState::new();
        state.toggle(&catalog, "a");
        let progress = compute_progress(&catalog, &state, 0, 0);
        assert_eq!(progress.calories_percent, 0.0);
        assert_eq!(progress.protein_percent, 0.0);
        assert!(progress.is_calorie_target_exceeded());
    }

    #[test]
    fn remaining_goes_negative_past_target() {
        let catalog = two_meals();
        let mut state = CompletionState::new();
        state.toggle(&catalog, "a");
        state.toggle(&catalog, "b");
        let progress = compute_progress(&catalog, &state, 200, 10);
        assert_eq!(progress.calories_remaining, -50);
        assert_eq!(progress.protein_remaining_g, -5);
        assert!(progress.is_calorie_target_exceeded());
    }

    #[test]
    fn full_day_partial_completion() {
        let catalog = Catalog::default_day();
        let mut state = CompletionState::new();
        for id in ["breakfast", "snack", "lunch", "creatine", "omega3"] {
            state.toggle(&catalog, id);
        }

        let progress = compute_progress(&catalog, &state, 3200, 200);
        assert_eq!(progress.completed_count_of(ScheduleItemKind::Meal), 3);
        assert_eq!(progress.completed_count_of(ScheduleItemKind::Supplement), 2);
        assert_eq!(progress.completed_count, 5);
        assert_eq!(progress.total_count, 11);
        assert!((progress.percent_complete - 500.0 / 11.0).abs() < 1e-9);
        assert_eq!(display_percent(progress.percent_complete), 45);
        assert!((progress.percent_complete_of(ScheduleItemKind::Meal) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn computation_is_deterministic() {
        let catalog = Catalog::default_day();
        let state = CompletionState::seeded(&catalog, ["lunch", "training"]);
        assert_eq!(
            compute_progress(&catalog, &state, 3200, 200),
            compute_progress(&catalog, &state, 3200, 200)
        );
    }
}
