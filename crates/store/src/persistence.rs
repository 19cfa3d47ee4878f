use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use geoselect_shared::geo::Bounds;
use geoselect_shared::models::Area;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "savedAreas";

/// Timestamps are stored with millisecond precision.
pub fn truncate_timestamp(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredBounds {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredArea {
    id: String,
    name: String,
    bounds: StoredBounds,
    created_at: String,
    color: String,
}

impl From<&Area> for StoredArea {
    fn from(area: &Area) -> Self {
        StoredArea {
            id: area.id.clone(),
            name: area.name.clone(),
            bounds: StoredBounds {
                north: area.bounds.north,
                south: area.bounds.south,
                east: area.bounds.east,
                west: area.bounds.west,
            },
            created_at: area
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            color: area.color.clone(),
        }
    }
}

impl TryFrom<StoredArea> for Area {
    type Error = StoreError;

    fn try_from(stored: StoredArea) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&stored.created_at)
            .map_err(|source| StoreError::Timestamp {
                id: stored.id.clone(),
                source,
            })?
            .with_timezone(&Utc);
        let b = stored.bounds;
        Ok(Area {
            id: stored.id,
            name: stored.name,
            bounds: Bounds {
                north: b.north,
                south: b.south,
                east: b.east,
                west: b.west,
            }
            .normalized(),
            created_at,
            color: stored.color,
        })
    }
}

/// Mirrors the saved-area list into a [`KeyValueStore`] slot.
///
/// The whole list is written as one JSON array under a single key, in the
/// record shape `{ id, name, bounds: { north, south, east, west }, createdAt, color }`.
/// Write failures are logged and swallowed; read failures of any kind load as
/// an empty list.
pub struct AreaRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> AreaRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        AreaRepository {
            storage,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the stored list. Errors are logged, never returned.
    pub fn save(&mut self, areas: &[Area]) {
        if let Err(e) = self.try_save(areas) {
            tracing::error!(key = %self.key, error = %e, "Error saving areas");
        }
    }

    pub fn try_save(&mut self, areas: &[Area]) -> Result<(), StoreError> {
        let records: Vec<StoredArea> = areas.iter().map(StoredArea::from).collect();
        let json = serde_json::to_string(&records)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, areas = areas.len(), "Saved areas");
        Ok(())
    }

    /// Read the stored list, treating any failure as "no saved areas".
    pub fn load(&self) -> Vec<Area> {
        match self.try_load() {
            Ok(areas) => areas,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Error loading areas, starting empty");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Area>, StoreError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let records: Vec<StoredArea> = serde_json::from_str(&raw)?;
        let areas = records
            .into_iter()
            .map(Area::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(key = %self.key, areas = areas.len(), "Loaded saved areas");
        Ok(areas)
    }

    /// Remove the stored list entirely. Errors are logged, never returned.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::error!(key = %self.key, error = %e, "Error clearing areas");
        }
    }
}
