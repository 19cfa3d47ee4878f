use geoselect_shared::geo::{Bounds, CornerReport};
use geoselect_shared::gesture::{GestureResponse, PointerEvent, SelectionController};
use geoselect_shared::map::RectangleOverlay;
use geoselect_shared::models::Area;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::persistence::AreaRepository;
use crate::storage::{KeyValueStore, RedbStore};
use crate::store::AreaStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    Ready,
    Selecting,
}

impl SelectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SelectionStatus::Ready => "Ready to select",
            SelectionStatus::Selecting => "Selecting area... (release to finish)",
        }
    }
}

/// Headless model of the map page: gesture handling, the naming step for a
/// fresh selection, and the saved-area list, wired together the way the UI
/// drives them.
pub struct SelectionSession<S> {
    controller: SelectionController,
    store: AreaStore<S>,
    pending: Option<Bounds>,
}

impl SelectionSession<RedbStore> {
    /// Open the configured database and restore saved areas from it.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let storage = RedbStore::open(&config.db_path)?;
        let repo = AreaRepository::with_key(storage, &config.storage_key);
        Ok(SelectionSession::new(
            SelectionController::with_min_size(config.min_area_size),
            AreaStore::open(repo),
        ))
    }
}

impl<S: KeyValueStore> SelectionSession<S> {
    pub fn new(controller: SelectionController, store: AreaStore<S>) -> Self {
        SelectionSession {
            controller,
            store,
            pending: None,
        }
    }

    /// Feed one pointer event from the map. A qualifying drag replaces any
    /// candidate still waiting for a name.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureResponse {
        let response = self.controller.handle(event);
        if let GestureResponse::SelectionEnded {
            candidate: Some(bounds),
        } = response
        {
            self.pending = Some(bounds);
        }
        response
    }

    pub fn status(&self) -> SelectionStatus {
        if self.controller.is_selecting() {
            SelectionStatus::Selecting
        } else {
            SelectionStatus::Ready
        }
    }

    /// Candidate bounds awaiting a name, if the naming step is open.
    pub fn pending(&self) -> Option<&Bounds> {
        self.pending.as_ref()
    }

    pub fn corner_report(&self) -> Option<CornerReport> {
        self.pending.as_ref().map(CornerReport::from_bounds)
    }

    /// Save the pending candidate under `name`. A rejected name keeps the
    /// candidate so the user can try again.
    pub fn confirm(&mut self, name: &str) -> Result<Area, StoreError> {
        let bounds = self.pending.ok_or(StoreError::NoPendingSelection)?;
        let area = self.store.add(name, bounds)?;
        self.pending = None;
        Ok(area)
    }

    /// Drop the pending candidate without saving anything.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("selection naming cancelled");
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn areas(&self) -> &[Area] {
        self.store.list()
    }

    pub fn store(&self) -> &AreaStore<S> {
        &self.store
    }

    /// Saved areas in display order, then the live selection on top.
    pub fn overlays(&self) -> Vec<RectangleOverlay> {
        let mut overlays: Vec<RectangleOverlay> = self
            .store
            .list()
            .iter()
            .map(RectangleOverlay::for_area)
            .collect();
        if let Some(bounds) = self.controller.preview() {
            overlays.push(RectangleOverlay::active(bounds));
        }
        overlays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use geoselect_shared::geo::LatLng;
    use geoselect_shared::gesture::PointerButton;
    use geoselect_shared::map::{OverlayStyle, ACTIVE_SELECTION_KEY};

    fn session() -> SelectionSession<MemoryStore> {
        SelectionSession::new(
            SelectionController::new(),
            AreaStore::open(AreaRepository::new(MemoryStore::new())),
        )
    }

    fn drag(s: &mut SelectionSession<MemoryStore>, from: (f64, f64), to: (f64, f64)) {
        s.handle_pointer(PointerEvent::Down {
            at: LatLng::new(from.0, from.1),
            button: PointerButton::Primary,
        });
        s.handle_pointer(PointerEvent::Move {
            at: LatLng::new(to.0, to.1),
        });
        s.handle_pointer(PointerEvent::Up {
            at: LatLng::new(to.0, to.1),
            button: PointerButton::Primary,
        });
    }

    #[test]
    fn test_drag_opens_naming_step() {
        let mut s = session();
        assert!(s.pending().is_none());
        drag(&mut s, (55.70, 37.50), (55.80, 37.70));
        let b = s.pending().copied().unwrap();
        assert!((b.north - 55.80).abs() < 1e-9);
        assert!((b.west - 37.50).abs() < 1e-9);
        let report = s.corner_report().unwrap();
        assert_eq!(report.north_west, "55.800000, 37.500000");
    }

    #[test]
    fn test_confirm_saves_and_closes() {
        let mut s = session();
        drag(&mut s, (55.70, 37.50), (55.80, 37.70));
        let area = s.confirm("Центр").unwrap();
        assert_eq!(area.name, "Центр");
        assert!(s.pending().is_none());
        assert_eq!(s.areas(), &[area]);
    }

    #[test]
    fn test_confirm_blank_name_keeps_candidate() {
        let mut s = session();
        drag(&mut s, (55.70, 37.50), (55.80, 37.70));
        assert!(matches!(s.confirm("  "), Err(StoreError::InvalidInput(_))));
        assert!(s.pending().is_some());
        assert!(s.areas().is_empty());
    }

    #[test]
    fn test_confirm_without_candidate() {
        let mut s = session();
        assert!(matches!(s.confirm("Park"), Err(StoreError::NoPendingSelection)));
    }

    #[test]
    fn test_cancel_discards_candidate() {
        let mut s = session();
        drag(&mut s, (55.70, 37.50), (55.80, 37.70));
        s.cancel();
        assert!(s.pending().is_none());
        assert!(s.areas().is_empty());
        assert!(s.store().repository().storage().is_empty());
    }

    #[test]
    fn test_small_drag_does_not_open_naming() {
        let mut s = session();
        drag(&mut s, (55.70, 37.50), (55.7001, 37.5001));
        assert!(s.pending().is_none());
    }

    #[test]
    fn test_status_follows_gesture() {
        let mut s = session();
        assert_eq!(s.status(), SelectionStatus::Ready);
        s.handle_pointer(PointerEvent::Down {
            at: LatLng::new(1.0, 1.0),
            button: PointerButton::Primary,
        });
        assert_eq!(s.status(), SelectionStatus::Selecting);
        assert_eq!(s.status().label(), "Selecting area... (release to finish)");
        s.handle_pointer(PointerEvent::Up {
            at: LatLng::new(1.0, 1.0),
            button: PointerButton::Primary,
        });
        assert_eq!(s.status(), SelectionStatus::Ready);
    }

    #[test]
    fn test_overlays_include_saved_and_live() {
        let mut s = session();
        drag(&mut s, (10.0, 10.0), (11.0, 11.0));
        let saved = s.confirm("First").unwrap();

        s.handle_pointer(PointerEvent::Down {
            at: LatLng::new(20.0, 20.0),
            button: PointerButton::Primary,
        });
        s.handle_pointer(PointerEvent::Move {
            at: LatLng::new(21.0, 21.0),
        });

        let overlays = s.overlays();
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].key, saved.id);
        assert_eq!(overlays[0].style, OverlayStyle::saved(&saved.color));
        assert_eq!(overlays[1].key, ACTIVE_SELECTION_KEY);
        assert_eq!(
            overlays[1].bounds,
            Bounds::from_corners(LatLng::new(20.0, 20.0), LatLng::new(21.0, 21.0))
        );
    }

    #[test]
    fn test_delete_through_session() {
        let mut s = session();
        drag(&mut s, (10.0, 10.0), (11.0, 11.0));
        let area = s.confirm("Gone soon").unwrap();
        assert!(s.delete(&area.id));
        assert!(!s.delete(&area.id));
        assert!(s.areas().is_empty());
        assert!(s.overlays().is_empty());
    }
}
