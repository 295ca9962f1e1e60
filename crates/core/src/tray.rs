//! Tray module - the three preview slots
//!
//! Slots keep stable indices: a placed piece leaves its slot empty rather than
//! shifting the others. When every slot is empty the tray is exhausted and is
//! refilled with three fresh random pieces.
//!
//! Pick/drop protocol: `InTray -> Held` via [`Tray::pick_up`], then either
//! `Held -> InTray` via [`Tray::release`] or removal via [`Tray::take`].
//! At most one piece is held at a time.

use log::{debug, warn};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::placement::fits_anywhere;
use crate::rng::SimpleRng;
use crate::types::{PieceState, GRID_CELLS, TRAY_SIZE};

/// Errors for tray protocol misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayError {
    SlotOutOfRange,
    SlotEmpty,
    AlreadyHolding,
    NotHeld,
    NotPlayable,
}

impl TrayError {
    pub fn code(self) -> &'static str {
        match self {
            TrayError::SlotOutOfRange | TrayError::SlotEmpty => "invalid_slot",
            TrayError::AlreadyHolding | TrayError::NotHeld => "invalid_hold",
            TrayError::NotPlayable => "not_playable",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TrayError::SlotOutOfRange => "slot index is outside the tray",
            TrayError::SlotEmpty => "slot holds no piece",
            TrayError::AlreadyHolding => "another piece is already held",
            TrayError::NotHeld => "piece in slot is not held",
            TrayError::NotPlayable => "game is over",
        }
    }
}

impl std::fmt::Display for TrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TrayError {}

/// Observable tray occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayPhase {
    /// At least one piece is still waiting to be placed
    Stable,
    /// Every piece has been placed; a refill is due
    Exhausted,
}

/// Result of the refill-until-playable loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefillOutcome {
    /// Number of full refills performed
    pub attempts: u32,
    /// Whether the final tray has at least one legal move
    pub playable: bool,
}

/// Preview anchor of a slot in tray-strip coordinates
pub fn slot_anchor(slot: usize) -> (i8, i8) {
    (2 + 5 * slot as i8, 2)
}

/// The preview tray
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tray {
    slots: [Option<Piece>; TRAY_SIZE],
}

impl Tray {
    /// Create an empty (exhausted) tray
    pub fn new() -> Self {
        Self {
            slots: [None; TRAY_SIZE],
        }
    }

    /// Create a tray filled with random pieces
    pub fn filled(rng: &mut SimpleRng) -> Self {
        let mut tray = Self::new();
        tray.fill(rng);
        tray
    }

    /// Build a tray from explicit pieces (missing slots stay empty)
    pub fn from_pieces(pieces: &[Piece]) -> Self {
        let mut tray = Self::new();
        for (slot, piece) in tray.slots.iter_mut().zip(pieces) {
            *slot = Some(Piece {
                state: PieceState::InTray,
                ..*piece
            });
        }
        tray
    }

    /// Replace every slot with a freshly drawn piece
    pub fn fill(&mut self, rng: &mut SimpleRng) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Some(Piece::random(rng, slot_anchor(i)));
        }
        debug!(
            "tray filled: {:?}",
            self.slots.map(|s| s.map(|p| p.kind.as_str()))
        );
    }

    /// Refill only when every piece has been placed
    ///
    /// Returns true if a refill happened.
    pub fn refill_if_exhausted(&mut self, rng: &mut SimpleRng) -> bool {
        if self.phase() != TrayPhase::Exhausted {
            return false;
        }
        self.fill(rng);
        true
    }

    /// Discard the whole tray (including a held piece) and draw a new one
    pub fn reset(&mut self, rng: &mut SimpleRng) {
        self.slots = [None; TRAY_SIZE];
        self.fill(rng);
    }

    pub fn phase(&self) -> TrayPhase {
        if self.live_count() == 0 {
            TrayPhase::Exhausted
        } else {
            TrayPhase::Stable
        }
    }

    /// Number of pieces not yet placed
    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Iterate the live pieces in slot order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    pub fn slots(&self) -> &[Option<Piece>; TRAY_SIZE] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Index of the held piece, if any
    pub fn held_slot(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(Piece::is_held))
    }

    /// Mark the piece in `slot` as held
    pub fn pick_up(&mut self, slot: usize) -> Result<(), TrayError> {
        if slot >= TRAY_SIZE {
            return Err(TrayError::SlotOutOfRange);
        }
        if self.held_slot().is_some() {
            return Err(TrayError::AlreadyHolding);
        }
        let piece = self.slots[slot].as_mut().ok_or(TrayError::SlotEmpty)?;
        piece.state = PieceState::Held;
        Ok(())
    }

    /// Return a held piece to the tray
    pub fn release(&mut self, slot: usize) -> Result<(), TrayError> {
        let piece = self.held_mut(slot)?;
        piece.state = PieceState::InTray;
        Ok(())
    }

    /// Remove the held piece from its slot, marking it placed
    pub fn take(&mut self, slot: usize) -> Result<Piece, TrayError> {
        self.held_mut(slot)?;
        let mut piece = self.slots[slot].take().ok_or(TrayError::SlotEmpty)?;
        piece.state = PieceState::Placed;
        Ok(piece)
    }

    fn held_mut(&mut self, slot: usize) -> Result<&mut Piece, TrayError> {
        let piece = self
            .slots
            .get_mut(slot)
            .ok_or(TrayError::SlotOutOfRange)?
            .as_mut()
            .ok_or(TrayError::SlotEmpty)?;
        if !piece.is_held() {
            return Err(TrayError::NotHeld);
        }
        Ok(piece)
    }

    /// Check whether any live piece fits somewhere on the grid
    pub fn has_any_legal_move(&self, grid: &Grid) -> bool {
        has_any_legal_move(self.pieces(), grid)
    }

    /// Redraw the whole tray until at least one piece fits
    ///
    /// A grid without a vacant cell can never become playable and is reported
    /// at once. Otherwise, with `limit = None`, the loop has no bound; it still
    /// terminates because the single-cell shape is always drawable and fits
    /// any vacant cell. With `Some(n)` it gives up after `n` refills.
    pub fn refill_until_playable(
        &mut self,
        grid: &Grid,
        rng: &mut SimpleRng,
        limit: Option<u32>,
    ) -> RefillOutcome {
        let mut attempts = 0u32;
        if grid.occupied_count() == GRID_CELLS {
            warn!("grid has no vacant cell; no tray can fit");
            return RefillOutcome {
                attempts,
                playable: false,
            };
        }
        while !self.has_any_legal_move(grid) {
            if limit.is_some_and(|max| attempts >= max) {
                warn!("tray still stuck after {} refills", attempts);
                return RefillOutcome {
                    attempts,
                    playable: false,
                };
            }
            self.reset(rng);
            attempts += 1;
        }
        if attempts > 0 {
            debug!("tray unstuck after {} refills", attempts);
        }
        RefillOutcome {
            attempts,
            playable: true,
        }
    }
}

/// Check whether any of `pieces` has a legal anchor on `grid`
pub fn has_any_legal_move<'a>(pieces: impl IntoIterator<Item = &'a Piece>, grid: &Grid) -> bool {
    pieces.into_iter().any(|piece| fits_anywhere(grid, piece))
}
