//! Drag-to-select gesture handling.
//!
//! The host map forwards raw pointer events; the controller turns a
//! press-drag-release with the primary button into a candidate [`Bounds`].
//! A press released without movement is a plain click and yields nothing.

use crate::geo::{exceeds_span, Bounds, LatLng, MIN_AREA_SIZE_DEG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { at: LatLng, button: PointerButton },
    Move { at: LatLng },
    Up { at: LatLng, button: PointerButton },
    ContextMenu { at: LatLng },
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureResponse {
    /// Nothing changed.
    Ignored,
    /// Cancel the host's native handling (context menu).
    SuppressNative,
    /// A drag began; the shell shows its "selecting" status.
    SelectionStarted,
    /// The live rectangle moved.
    Preview(Bounds),
    /// The drag finished. `candidate` is set only for a moved, large-enough box.
    SelectionEnded { candidate: Option<Bounds> },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: LatLng,
        current: LatLng,
        moved: bool,
    },
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    state: DragState,
    min_size: f64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::with_min_size(MIN_AREA_SIZE_DEG)
    }

    /// Controller whose size check uses `min_size` degrees instead of the default.
    pub fn with_min_size(min_size: f64) -> Self {
        SelectionController {
            state: DragState::Idle,
            min_size,
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Rectangle between the anchor and the latest pointer position.
    pub fn preview(&self) -> Option<Bounds> {
        match self.state {
            DragState::Dragging {
                anchor, current, ..
            } => Some(Bounds::from_corners(anchor, current)),
            DragState::Idle => None,
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureResponse {
        match event {
            PointerEvent::Down { at, button } => self.pointer_down(at, button),
            PointerEvent::Move { at } => self.pointer_move(at),
            PointerEvent::Up { at, button } => self.pointer_up(at, button),
            PointerEvent::ContextMenu { .. } => GestureResponse::SuppressNative,
        }
    }

    pub fn pointer_down(&mut self, at: LatLng, button: PointerButton) -> GestureResponse {
        if button != PointerButton::Primary {
            return GestureResponse::Ignored;
        }
        match self.state {
            DragState::Dragging { .. } => GestureResponse::Ignored,
            DragState::Idle => {
                tracing::debug!(lat = at.lat, lng = at.lng, "selection started");
                self.state = DragState::Dragging {
                    anchor: at,
                    current: at,
                    moved: false,
                };
                GestureResponse::SelectionStarted
            }
        }
    }

    pub fn pointer_move(&mut self, at: LatLng) -> GestureResponse {
        match &mut self.state {
            DragState::Idle => GestureResponse::Ignored,
            DragState::Dragging {
                anchor,
                current,
                moved,
            } => {
                *current = at;
                *moved = true;
                GestureResponse::Preview(Bounds::from_corners(*anchor, at))
            }
        }
    }

    /// Finish the drag. The box is built from the last recorded move, not from
    /// the release position.
    pub fn pointer_up(&mut self, _at: LatLng, button: PointerButton) -> GestureResponse {
        if button != PointerButton::Primary {
            return GestureResponse::Ignored;
        }
        let DragState::Dragging {
            anchor,
            current,
            moved,
        } = std::mem::take(&mut self.state)
        else {
            return GestureResponse::Ignored;
        };

        if !moved {
            tracing::debug!("selection ended without movement");
            return GestureResponse::SelectionEnded { candidate: None };
        }

        let bounds = Bounds::from_corners(anchor, current);
        if exceeds_span(&bounds, self.min_size) {
            tracing::debug!(
                north = bounds.north,
                south = bounds.south,
                east = bounds.east,
                west = bounds.west,
                "selection produced a candidate"
            );
            GestureResponse::SelectionEnded {
                candidate: Some(bounds),
            }
        } else {
            tracing::debug!("selection too small, ignoring");
            GestureResponse::SelectionEnded { candidate: None }
        }
    }
}
