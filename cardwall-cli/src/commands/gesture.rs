//! Replaying drag gestures through a board page

use crate::exit_codes::{EXIT_IGNORED, EXIT_SUCCESS};
use anyhow::{bail, Context, Result};
use cardwall_board::{
    BoardPage, BoardService, DragItem, DropReport, IgnoreReason, PositionUpdate, ReorderOutcome,
    ZoneId,
};
use std::fmt;
use tracing::debug;

/// What a replayed gesture did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureResult {
    /// The item moved and the server accepted the new position
    Moved(PositionUpdate),
    /// Dropped into its own gap
    Unchanged,
    Ignored(IgnoreReason),
}

impl GestureResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Moved(_) | Self::Unchanged => EXIT_SUCCESS,
            Self::Ignored(_) => EXIT_IGNORED,
        }
    }
}

impl fmt::Display for GestureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved(update) => match update.list {
                Some(list) => write!(
                    f,
                    "moved {} to position {} of list {}",
                    update.item, update.position, list
                ),
                None => write!(f, "moved {} to position {}", update.item, update.position),
            },
            Self::Unchanged => write!(f, "already in place"),
            Self::Ignored(reason) => write!(f, "drop ignored: {}", reason),
        }
    }
}

/// Pick `item` up, hover `zone`, release, and wait for the server to store the
/// new position
pub async fn replay_drag<B: BoardService + 'static>(
    page: &mut BoardPage<B>,
    item: DragItem,
    zone: ZoneId,
) -> Result<GestureResult> {
    if !page.pointer_down(item) {
        bail!("a drag is already in progress");
    }
    page.mark_moving();

    if !page.hover(zone) {
        debug!(%item, %zone, "zone refused the dragged item");
        page.cancel();
        return Ok(GestureResult::Ignored(IgnoreReason::KindMismatch {
            item: item.kind(),
            zone: zone.kind(),
        }));
    }

    let DropReport { outcome, persist } = page.release();
    match outcome? {
        ReorderOutcome::Moved { update, .. } => {
            if let Some(persist) = persist {
                persist
                    .wait()
                    .await
                    .context("the board was reordered locally but the server did not store it")?;
            }
            Ok(GestureResult::Moved(update))
        }
        ReorderOutcome::Unchanged => Ok(GestureResult::Unchanged),
        ReorderOutcome::Ignored(reason) => Ok(GestureResult::Ignored(reason)),
    }
}
