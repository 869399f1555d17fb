use serde::{Deserialize, Serialize};

use super::CompletionState;
use crate::catalog::{Catalog, ItemId, ScheduleItemKind};
use crate::nutrition::Macros;

/// A schedule item merged with its completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: ItemId,
    pub kind: ScheduleItemKind,
    pub scheduled_time: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    pub completed: bool,
}

/// All items ordered by time of day. Items sharing a time keep catalog order.
pub fn timeline(catalog: &Catalog, completion: &CompletionState) -> Vec<TimelineEntry> {
    let mut timed: Vec<_> = catalog.iter_timed().collect();
    // sort_by_key is stable
    timed.sort_by_key(|(time, _)| *time);

    timed
        .into_iter()
        .map(|(_, item)| TimelineEntry {
            id: item.id.clone(),
            kind: item.kind,
            scheduled_time: item.scheduled_time.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            macros: item.macros,
            completed: completion.is_completed(item.id.as_str()),
        })
        .collect()
}
