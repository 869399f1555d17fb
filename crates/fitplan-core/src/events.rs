use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, ScheduleItemKind};

/// Every command dispatched to a session produces an Event.
/// The presentation layer re-reads the snapshot after receiving one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlannerEvent {
    ItemCompleted {
        id: ItemId,
        kind: ScheduleItemKind,
        at: DateTime<Utc>,
    },
    ItemReopened {
        id: ItemId,
        kind: ScheduleItemKind,
        at: DateTime<Utc>,
    },
    /// Toggle referenced an id outside the catalog; state is unchanged.
    ToggleIgnored {
        id: String,
        at: DateTime<Utc>,
    },
    HydrationChanged {
        previous_liters: f64,
        current_liters: f64,
        goal_reached: bool,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
}

impl PlannerEvent {
    /// Whether the event reflects an actual state change.
    pub fn changed_state(&self) -> bool {
        match self {
            PlannerEvent::ToggleIgnored { .. } => false,
            PlannerEvent::HydrationChanged {
                previous_liters,
                current_liters,
                ..
            } => previous_liters != current_liters,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = PlannerEvent::ToggleIgnored {
            id: "nope".into(),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ToggleIgnored");
        assert_eq!(json["id"], "nope");
    }

    #[test]
    fn clamped_hydration_is_not_a_change() {
        let event = PlannerEvent::HydrationChanged {
            previous_liters: 0.0,
            current_liters: 0.0,
            goal_reached: false,
            at: Utc::now(),
        };
        assert!(!event.changed_state());
    }
}
