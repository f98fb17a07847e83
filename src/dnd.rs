//! Drag-Move Translation
//!
//! Turns a completed drag gesture into at most one column-move request.

use leptos_dragdrop::{DragEnd, DropSlot};
use tracing::{debug, error};

use crate::error::UnknownColumn;
use crate::models::{Column, TaskId};

/// Where a card was picked up or released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLocation {
    /// Raw column identifier carried by the drop target
    pub column_id: String,
    /// Position within the visible page of that column
    pub index: usize,
}

impl From<DropSlot> for DropLocation {
    fn from(slot: DropSlot) -> Self {
        Self {
            column_id: slot.container,
            index: slot.index,
        }
    }
}

/// A finished drag of one task card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub task_id: TaskId,
    pub source: DropLocation,
    /// None when released outside every column
    pub destination: Option<DropLocation>,
}

impl From<DragEnd> for DropEvent {
    fn from(end: DragEnd) -> Self {
        Self {
            task_id: end.draggable_id,
            source: end.source.into(),
            destination: end.destination.map(DropLocation::from),
        }
    }
}

/// Column patch to send for a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: TaskId,
    pub column: Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropDecision {
    /// Released outside any column
    Outside,
    /// Released back on its own slot
    Unchanged,
    /// Destination column id is not a board column
    Rejected(UnknownColumn),
    Move(MoveRequest),
}

/// Decide what a drop means. Rules apply in order: outside, same slot,
/// unknown column, move.
///
/// A drop inside the source column at another index still yields a `Move`
/// with the unchanged column: tasks carry no rank, so the position itself
/// is not persisted.
pub fn translate_drop(event: &DropEvent) -> DropDecision {
    let Some(destination) = &event.destination else {
        return DropDecision::Outside;
    };
    if destination == &event.source {
        return DropDecision::Unchanged;
    }
    let column = match destination.column_id.parse::<Column>() {
        Ok(column) => column,
        Err(err) => {
            error!(task_id = event.task_id, %err, "[DND] Invalid destination column");
            return DropDecision::Rejected(err);
        }
    };
    if destination.column_id == event.source.column_id {
        debug!(
            task_id = event.task_id,
            from = event.source.index,
            to = destination.index,
            "[DND] Reorder within column; position is not persisted"
        );
    }
    DropDecision::Move(MoveRequest {
        task_id: event.task_id,
        column,
    })
}
