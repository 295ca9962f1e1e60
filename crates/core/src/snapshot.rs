//! Snapshot module - copyable read-only view of a game for renderers

use crate::tray::Tray;
use crate::types::{BlockColor, Cell, PieceState, ShapeKind, GRID_SIZE, TRAY_SIZE};

/// Read-only view of one tray slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraySlotView {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub state: PieceState,
}

/// Build the per-slot views for a tray
pub fn tray_view(tray: &Tray) -> [Option<TraySlotView>; TRAY_SIZE] {
    let slots = *tray.slots();
    slots.map(|slot| {
        slot.map(|piece| TraySlotView {
            kind: piece.kind,
            color: piece.color,
            state: piece.state,
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Grid cells indexed `[y][x]`
    pub grid: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub tray: [Option<TraySlotView>; TRAY_SIZE],
    pub held_slot: Option<usize>,
    pub score: u32,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
    pub tray_refills: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.tray = [None; TRAY_SIZE];
        self.held_slot = None;
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_placed = 0;
        self.tray_refills = 0;
        self.game_over = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// The held slot's view, if a piece is being dragged
    pub fn held(&self) -> Option<TraySlotView> {
        self.held_slot.and_then(|slot| self.tray.get(slot).copied().flatten())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[None; GRID_SIZE as usize]; GRID_SIZE as usize],
            tray: [None; TRAY_SIZE],
            held_slot: None,
            score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            tray_refills: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
