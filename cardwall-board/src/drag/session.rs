//! DragSession - transient state of one drag gesture
//!
//! Created empty, mutated only by pointer-event handlers, and reset to empty at
//! the end of every gesture. Never touches the board snapshot: a finished
//! gesture is handed to a [`DropHandler`] collaborator instead.

use crate::types::{DragItem, ItemKind, ZoneId};
use serde::Serialize;
use tracing::{debug, trace};

/// Read-only view of the gesture in progress, for renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DragState {
    /// The item being dragged, if any
    pub item: Option<DragItem>,
    /// Whether the pointer has moved since the drag started
    pub moving: bool,
    /// The drop zone currently armed under the pointer
    pub hovered: Option<ZoneId>,
}

impl DragState {
    /// Kind of the dragged item, if a drag is active
    pub fn kind(&self) -> Option<ItemKind> {
        self.item.map(|item| item.kind())
    }
}

/// A gesture that ended with a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedDrag {
    pub item: DragItem,
    /// `None` when released outside every armed zone
    pub zone: Option<ZoneId>,
}

/// Receives finished gestures from [`DragSession::complete_drag`]
pub trait DropHandler {
    type Output;

    fn handle_drop(&mut self, drop: CompletedDrag) -> Self::Output;
}

/// Tracks the single drag gesture that may be active at a time
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for renderers
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Check if a drag is in progress
    pub fn is_active(&self) -> bool {
        self.state.item.is_some()
    }

    /// Check if `item` is the one being dragged
    pub fn is_dragged(&self, item: DragItem) -> bool {
        self.state.item == Some(item)
    }

    /// Check if `zone` is the armed drop zone
    pub fn is_hovered(&self, zone: ZoneId) -> bool {
        self.state.hovered == Some(zone)
    }

    /// Check if zones of `kind` should be live, i.e. a drag of that kind is
    /// active and the pointer has started moving
    pub fn armed(&self, kind: ItemKind) -> bool {
        self.state.moving && self.state.kind() == Some(kind)
    }

    /// Start dragging `item`. Returns `false` and changes nothing if a drag is
    /// already active.
    pub fn begin_drag(&mut self, item: DragItem) -> bool {
        if let Some(active) = self.state.item {
            debug!(%active, rejected = %item, "drag already active, ignoring begin");
            return false;
        }

        debug!(%item, "drag started");
        self.state.item = Some(item);
        true
    }

    /// Record that the pointer is moving. Idempotent.
    pub fn mark_moving(&mut self) {
        if self.state.item.is_some() && !self.state.moving {
            trace!("pointer moving");
            self.state.moving = true;
        }
    }

    /// Arm `zone` as the drop target.
    ///
    /// Only a zone whose kind matches the dragged item's kind is accepted; this
    /// keeps list zones from arming for card drags and the other way round.
    pub fn hover(&mut self, zone: ZoneId) -> bool {
        match self.state.kind() {
            Some(kind) if zone.accepts(kind) => {
                if self.state.hovered != Some(zone) {
                    trace!(%zone, "hovering drop zone");
                    self.state.hovered = Some(zone);
                }
                true
            }
            Some(kind) => {
                trace!(%zone, dragging = %kind, "zone kind mismatch");
                false
            }
            None => false,
        }
    }

    /// Finish the gesture with a drop.
    ///
    /// The session is emptied before `handler` runs, so it is empty afterwards
    /// whatever the handler does, including panicking. Returns `None` when no
    /// drag was active.
    pub fn complete_drag<H: DropHandler>(&mut self, handler: &mut H) -> Option<H::Output> {
        let state = std::mem::take(&mut self.state);
        let item = state.item?;

        debug!(%item, zone = ?state.hovered.map(|z| z.to_string()), "drag completed");
        Some(handler.handle_drop(CompletedDrag {
            item,
            zone: state.hovered,
        }))
    }

    /// Abandon the gesture without a drop
    pub fn cancel_drag(&mut self) {
        if let Some(item) = self.state.item {
            debug!(%item, "drag cancelled");
        }
        self.state = DragState::default();
    }
}
