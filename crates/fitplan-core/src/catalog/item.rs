use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nutrition::Macros;

/// Identifier of a schedule item.
///
/// Any string can be wrapped, but ids handed out by [`super::Catalog::lookup`]
/// are guaranteed to exist in that catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleItemKind {
    Meal,
    Supplement,
    Workout,
}

impl ScheduleItemKind {
    pub const ALL: [ScheduleItemKind; 3] = [
        ScheduleItemKind::Meal,
        ScheduleItemKind::Supplement,
        ScheduleItemKind::Workout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleItemKind::Meal => "meal",
            ScheduleItemKind::Supplement => "supplement",
            ScheduleItemKind::Workout => "workout",
        }
    }
}

impl fmt::Display for ScheduleItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One entry of the daily plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ItemId,
    pub kind: ScheduleItemKind,
    /// Time-of-day label, `HH:MM`.
    pub scheduled_time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Only meals carry macros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
}

impl ScheduleItem {
    pub fn meal(
        id: &str,
        scheduled_time: &str,
        title: &str,
        description: &str,
        macros: Macros,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            kind: ScheduleItemKind::Meal,
            scheduled_time: scheduled_time.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            macros: Some(macros),
        }
    }

    pub fn supplement(id: &str, scheduled_time: &str, title: &str, description: &str) -> Self {
        Self {
            id: ItemId::new(id),
            kind: ScheduleItemKind::Supplement,
            scheduled_time: scheduled_time.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            macros: None,
        }
    }

    pub fn workout(id: &str, scheduled_time: &str, title: &str, description: &str) -> Self {
        Self {
            id: ItemId::new(id),
            kind: ScheduleItemKind::Workout,
            scheduled_time: scheduled_time.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            macros: None,
        }
    }

    /// Macros this item contributes when completed. Zero for anything but meals.
    pub fn contributed_macros(&self) -> Macros {
        match self.kind {
            ScheduleItemKind::Meal => self.macros.unwrap_or_default(),
            _ => Macros::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_id_borrows_as_str() {
        let mut set = HashSet::new();
        set.insert(ItemId::new("lunch"));
        assert!(set.contains("lunch"));
        assert!(!set.contains("dinner"));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ScheduleItemKind::Supplement).unwrap();
        assert_eq!(json, "\"supplement\"");
        let parsed: ScheduleItemKind = serde_json::from_str("\"workout\"").unwrap();
        assert_eq!(parsed, ScheduleItemKind::Workout);
    }

    #[test]
    fn only_meals_contribute_macros() {
        let meal = ScheduleItem::meal("a", "07:00", "Oats", "", Macros::new(10, 20, 5));
        assert_eq!(meal.contributed_macros(), Macros::new(10, 20, 5));

        let mut shake = ScheduleItem::supplement("b", "07:00", "Creatine", "");
        shake.macros = Some(Macros::new(1, 1, 1));
        assert_eq!(shake.contributed_macros(), Macros::ZERO);
    }

    #[test]
    fn meal_without_macros_contributes_zero() {
        let mut meal = ScheduleItem::meal("a", "07:00", "Coffee", "", Macros::ZERO);
        meal.macros = None;
        assert_eq!(meal.contributed_macros(), Macros::ZERO);
    }
}
