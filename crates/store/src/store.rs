use chrono::Utc;
use geoselect_shared::geo::Bounds;
use geoselect_shared::models::{color_for_id, Area};

use crate::error::StoreError;
use crate::persistence::{truncate_timestamp, AreaRepository};
use crate::storage::KeyValueStore;

/// Ordered list of saved areas, rewritten to storage after every change.
///
/// The in-memory list is authoritative. If a write fails the session keeps
/// working from memory and the stored copy catches up on the next successful save.
pub struct AreaStore<S> {
    areas: Vec<Area>,
    repo: AreaRepository<S>,
}

impl<S: KeyValueStore> AreaStore<S> {
    /// Load whatever the repository holds. Never fails: bad data starts empty.
    pub fn open(repo: AreaRepository<S>) -> Self {
        let areas = repo.load();
        AreaStore { areas, repo }
    }

    pub fn add(&mut self, name: &str, bounds: Bounds) -> Result<Area, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "area name must not be empty".to_string(),
            ));
        }
        if !bounds.is_finite() {
            return Err(StoreError::InvalidInput(format!(
                "area bounds must be finite, got {bounds:?}"
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let area = Area {
            color: color_for_id(&id),
            id,
            name: name.to_string(),
            bounds: bounds.normalized(),
            created_at: truncate_timestamp(Utc::now()),
        };
        self.areas.push(area.clone());
        self.repo.save(&self.areas);
        tracing::info!(id = %area.id, name = %area.name, "Saved area");
        Ok(area)
    }

    /// Remove the area with `id`. Unknown ids are a no-op; returns whether
    /// anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.areas.len();
        self.areas.retain(|a| a.id != id);
        let removed = self.areas.len() != before;
        self.repo.save(&self.areas);
        if removed {
            tracing::info!(%id, "Deleted area");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.areas.clear();
        self.repo.clear();
    }

    pub fn list(&self) -> &[Area] {
        &self.areas
    }

    pub fn get(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn repository(&self) -> &AreaRepository<S> {
        &self.repo
    }
}
