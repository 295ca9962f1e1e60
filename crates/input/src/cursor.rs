//! Drag cursor: where a held piece would land if dropped now.

use crate::types::{PlayerAction, GRID_SIZE};

/// Grid-aligned drop cursor, always on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCursor {
    x: i8,
    y: i8,
}

impl DragCursor {
    /// Cursor starting at the board center
    pub fn new() -> Self {
        let mid = (GRID_SIZE / 2) as i8;
        Self { x: mid, y: mid }
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Move by (dx, dy), clamped to the board
    pub fn shift(&mut self, dx: i8, dy: i8) {
        let max = GRID_SIZE as i8 - 1;
        self.x = self.x.saturating_add(dx).clamp(0, max);
        self.y = self.y.saturating_add(dy).clamp(0, max);
    }

    /// Consume cursor actions; everything else is passed through
    pub fn apply(&mut self, action: PlayerAction) -> Option<PlayerAction> {
        match action {
            PlayerAction::MoveCursor { dx, dy } => {
                self.shift(dx, dy);
                None
            }
            PlayerAction::Restart => {
                *self = Self::new();
                Some(action)
            }
            other => Some(other),
        }
    }
}

impl Default for DragCursor {
    fn default() -> Self {
        Self::new()
    }
}
