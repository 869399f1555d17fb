//! Static catalog of the day's schedule items.
//!
//! A [`Catalog`] is validated once at construction and never changes for the
//! rest of the session. Ids are unique, times parse as `HH:MM`, and only meals
//! carry macros.

mod default_day;
mod item;

pub use item::{ItemId, ScheduleItem, ScheduleItemKind};

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const TIME_FORMAT: &str = "%H:%M";

/// On-disk layout of a catalog file (`[[items]]` tables in TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct Catalog {
    items: Vec<ScheduleItem>,
    #[serde(skip)]
    times: Vec<NaiveTime>,
    #[serde(skip)]
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on empty or duplicate ids, unparsable times, or macros
    /// attached to a non-meal item.
    pub fn new(items: Vec<ScheduleItem>) -> Result<Self, CatalogError> {
        let mut times = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.to_string()));
            }
            if item.macros.is_some() && item.kind != ScheduleItemKind::Meal {
                return Err(CatalogError::MacrosOnNonMeal {
                    id: item.id.to_string(),
                    kind: item.kind.to_string(),
                });
            }
            let time = NaiveTime::parse_from_str(item.scheduled_time.trim(), TIME_FORMAT)
                .map_err(|_| CatalogError::InvalidTime {
                    id: item.id.to_string(),
                    time: item.scheduled_time.clone(),
                })?;
            times.push(time);
        }

        Ok(Self {
            items,
            times,
            index,
        })
    }

    /// The built-in day plan.
    pub fn default_day() -> Self {
        match Self::new(default_day::items()) {
            Ok(catalog) => catalog,
            Err(e) => {
                debug_assert!(false, "built-in day plan is invalid: {e}");
                tracing::error!(error = %e, "built-in day plan is invalid, using an empty catalog");
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            times: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Parse a TOML catalog (`[[items]]` tables).
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::LoadFailed {
                path: "<inline>".into(),
                message: e.to_string(),
            })?;
        Self::try_from(file)
    }

    /// Load a TOML catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: CatalogFile =
            toml::from_str(&content).map_err(|e| CatalogError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let catalog = Self::try_from(file)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Resolve a raw id into the catalog's own [`ItemId`].
    pub fn lookup(&self, id: &str) -> Option<ItemId> {
        self.get(id).map(|item| item.id.clone())
    }

    /// Strict variant of [`Catalog::lookup`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] when the id is not in the catalog.
    pub fn require(&self, id: &str) -> Result<ItemId, CatalogError> {
        self.lookup(id)
            .ok_or_else(|| CatalogError::UnknownItem(id.to_string()))
    }

    /// Number of items of the given kind.
    pub fn count_of(&self, kind: ScheduleItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    /// Items paired with their parsed time of day, in catalog order.
    pub fn iter_timed(&self) -> impl Iterator<Item = (NaiveTime, &ScheduleItem)> {
        self.times.iter().copied().zip(self.items.iter())
    }

    /// Export as the on-disk layout.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            items: self.items.clone(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_day()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::new(file.items)
    }
}
