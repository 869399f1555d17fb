use serde::{Deserialize, Serialize};

use super::progress::percent;
use crate::error::ValidationError;

/// Default size of a single hydration step in liters.
pub const DEFAULT_STEP_LITERS: f64 = 0.25;
/// How far past the target the counter may go.
pub const DEFAULT_HEADROOM_LITERS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrationDirection {
    Increase,
    Decrease,
}

/// Water intake counter, clamped to `[0, target + headroom]`.
///
/// Only built through [`HydrationState::new`] or [`HydrationState::with_step`].
#[derive(Debug, Clone, PartialEq)]
pub struct HydrationState {
    current_liters: f64,
    target_liters: f64,
    step_liters: f64,
    headroom_liters: f64,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationSnapshot {
    pub current_liters: f64,
    pub target_liters: f64,
    /// Can exceed 100 while over target.
    pub percent: f64,
    pub goal_reached: bool,
}

impl HydrationState {
    /// Counter starting at zero with the default step and headroom.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a positive finite number.
    pub fn new(target_liters: f64) -> Result<Self, ValidationError> {
        Self::with_step(target_liters, DEFAULT_STEP_LITERS, DEFAULT_HEADROOM_LITERS)
    }

    /// # Errors
    ///
    /// Returns an error if the target or step is not positive, or the
    /// headroom is negative.
    pub fn with_step(
        target_liters: f64,
        step_liters: f64,
        headroom_liters: f64,
    ) -> Result<Self, ValidationError> {
        ensure_positive("hydration.target_liters", target_liters)?;
        ensure_positive("hydration.step_liters", step_liters)?;
        if !headroom_liters.is_finite() || headroom_liters < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "hydration.headroom_liters".into(),
                message: format!("must be a non-negative number (got {headroom_liters})"),
            });
        }
        Ok(Self {
            current_liters: 0.0,
            target_liters,
            step_liters,
            headroom_liters,
        })
    }

    pub fn current_liters(&self) -> f64 {
        self.current_liters
    }

    pub fn target_liters(&self) -> f64 {
        self.target_liters
    }

    pub fn step_liters(&self) -> f64 {
        self.step_liters
    }

    pub fn ceiling_liters(&self) -> f64 {
        self.target_liters + self.headroom_liters
    }

    /// Apply `delta` and clamp into range. Non-finite deltas are ignored.
    pub fn adjust(&mut self, delta: f64) -> f64 {
        if !delta.is_finite() {
            tracing::warn!(delta, "ignoring non-finite hydration delta");
            return self.current_liters;
        }
        self.current_liters = (self.current_liters + delta).clamp(0.0, self.ceiling_liters());
        self.current_liters
    }

    /// Move one step in `direction`.
    pub fn step(&mut self, direction: HydrationDirection) -> f64 {
        match direction {
            HydrationDirection::Increase => self.adjust(self.step_liters),
            HydrationDirection::Decrease => self.adjust(-self.step_liters),
        }
    }

    pub fn is_goal_reached(&self) -> bool {
        self.current_liters >= self.target_liters
    }

    pub fn snapshot(&self) -> HydrationSnapshot {
        HydrationSnapshot {
            current_liters: self.current_liters,
            target_liters: self.target_liters,
            percent: percent(self.current_liters, self.target_liters),
            goal_reached: self.is_goal_reached(),
        }
    }

    #[cfg(test)]
    fn set_current(&mut self, liters: f64) {
        self.current_liters = liters;
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decrease_at_zero_stays_zero() {
        let mut h = HydrationState::new(4.0).unwrap();
        h.step(HydrationDirection::Decrease);
        assert_eq!(h.current_liters(), 0.0);
    }

    #[test]
    fn increase_at_ceiling_stays_there() {
        let mut h = HydrationState::new(4.0).unwrap();
        h.set_current(6.0);
        h.step(HydrationDirection::Increase);
        assert_eq!(h.current_liters(), 6.0);
    }

    #[test]
    fn steps_by_quarter_liter() {
        let mut h = HydrationState::new(4.0).unwrap();
        for _ in 0..3 {
            h.step(HydrationDirection::Increase);
        }
        assert_eq!(h.current_liters(), 0.75);
        h.step(HydrationDirection::Decrease);
        assert_eq!(h.current_liters(), 0.5);
    }

    #[test]
    fn can_climb_to_ceiling_by_steps() {
        let mut h = HydrationState::new(4.0).unwrap();
        for _ in 0..100 {
            h.step(HydrationDirection::Increase);
        }
        assert_eq!(h.current_liters(), 6.0);
        assert!(h.is_goal_reached());
        assert!((h.snapshot().percent - 150.0).abs() < 1e-9);
    }

    #[test]
    fn goal_boundary() {
        let mut h = HydrationState::new(4.0).unwrap();
        h.set_current(4.0);
        assert!(h.is_goal_reached());
        h.set_current(3.99);
        assert!(!h.is_goal_reached());
    }

    #[test]
    fn oversized_delta_is_clamped() {
        let mut h = HydrationState::new(4.0).unwrap();
        assert_eq!(h.adjust(50.0), 6.0);
        assert_eq!(h.adjust(-50.0), 0.0);
    }

    #[test]
    fn nan_delta_is_ignored() {
        let mut h = HydrationState::new(4.0).unwrap();
        h.adjust(1.0);
        assert_eq!(h.adjust(f64::NAN), 1.0);
    }

    #[test]
    fn rejects_non_positive_target() {
        assert!(HydrationState::new(0.0).is_err());
        assert!(HydrationState::new(-1.0).is_err());
        assert!(HydrationState::with_step(4.0, 0.25, -1.0).is_err());
    }

    #[test]
    fn snapshot_reports_percent() {
        let mut h = HydrationState::new(4.0).unwrap();
        h.adjust(1.0);
        let snap = h.snapshot();
        assert_eq!(snap.percent, 25.0);
        assert!(!snap.goal_reached);
    }

    proptest! {
        #[test]
        fn any_delta_sequence_stays_in_range(
            target in 0.25f64..10.0,
            headroom in 0.0f64..5.0,
            deltas in proptest::collection::vec(-20.0f64..20.0, 0..50),
        ) {
            let mut h = HydrationState::with_step(target, 0.25, headroom).unwrap();
            for delta in deltas {
                let current = h.adjust(delta);
                prop_assert!(current >= 0.0);
                prop_assert!(current <= target + headroom);
                prop_assert_eq!(h.is_goal_reached(), current >= target);
            }
        }
    }
}
