//! Game state module - owns the grid, tray, RNG and score
//!
//! Every player action runs to completion synchronously. A successful drop is
//! one full cycle: commit, clear pass, score, tray refill when exhausted, then
//! the stuck check governed by [`StuckPolicy`].

use log::{info, warn};

use crate::clears::resolve_clears;
use crate::config::{GameConfig, StuckPolicy};
use crate::grid::Grid;
use crate::placement::{can_place, commit};
use crate::rng::SimpleRng;
use crate::snapshot::{tray_view, GameSnapshot, TraySlotView};
use crate::tray::{Tray, TrayError};
use crate::types::{Cell, PlayerAction, TRAY_SIZE};

/// Result of dropping a held piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Target was illegal; the piece went back to the tray untouched
    Rejected,
    /// Piece was written to the grid
    Committed {
        score_delta: u32,
        rows_cleared: u8,
        columns_cleared: u8,
    },
}

impl DropOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Committed { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    tray: Tray,
    rng: SimpleRng,
    config: GameConfig,
    score: u32,
    lines_cleared: u32,
    pieces_placed: u32,
    /// Tray draws beyond the initial fill (exhaustion, resets, unsticking)
    tray_refills: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and default policy
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::with_seed(seed))
    }

    /// Create a new game: empty grid, freshly filled tray, score 0
    pub fn with_config(config: GameConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let tray = Tray::filled(&mut rng);
        info!(
            "new game seed={} stuck_policy={}",
            config.seed,
            config.stuck_policy.as_str()
        );
        Self::assemble(config, Grid::new(), tray, rng)
    }

    /// Start from an explicit grid and tray (puzzles, tests, replays)
    ///
    /// The stuck check runs immediately, so an impossible position is either
    /// redrawn or reported according to the policy. A grid with no vacant cell
    /// always starts as game over.
    pub fn with_position(config: GameConfig, grid: Grid, tray: Tray) -> Self {
        let rng = SimpleRng::new(config.seed);
        let mut state = Self::assemble(config, grid, tray, rng);
        state.tray.refill_if_exhausted(&mut state.rng);
        state.settle_stuck_tray();
        state
    }

    fn assemble(config: GameConfig, grid: Grid, tray: Tray, rng: SimpleRng) -> Self {
        Self {
            grid,
            tray,
            rng,
            config,
            score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            tray_refills: 0,
            episode_id: 0,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn tray_refills(&self) -> u32 {
        self.tray_refills
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn held_slot(&self) -> Option<usize> {
        self.tray.held_slot()
    }

    /// Read one grid cell; `None` when out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        self.grid.get(x, y)
    }

    /// Shape, color and state of each tray slot
    pub fn tray_view(&self) -> [Option<TraySlotView>; TRAY_SIZE] {
        tray_view(&self.tray)
    }

    /// True when no tray piece fits anywhere on the grid
    pub fn is_board_stuck(&self) -> bool {
        !self.tray.has_any_legal_move(&self.grid)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.tray = self.tray_view();
        out.held_slot = self.tray.held_slot();
        out.score = self.score;
        out.lines_cleared = self.lines_cleared;
        out.pieces_placed = self.pieces_placed;
        out.tray_refills = self.tray_refills;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.config.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn ensure_playable(&self) -> Result<(), TrayError> {
        if self.game_over {
            return Err(TrayError::NotPlayable);
        }
        Ok(())
    }

    /// Pick up the piece in `slot` to start dragging it
    pub fn pick_up(&mut self, slot: usize) -> Result<(), TrayError> {
        self.ensure_playable()?;
        self.tray.pick_up(slot)
    }

    /// Snap the held piece back into the tray
    ///
    /// Returns false if nothing was held.
    pub fn cancel_hold(&mut self) -> bool {
        match self.tray.held_slot() {
            Some(slot) => self.tray.release(slot).is_ok(),
            None => false,
        }
    }

    /// Whether the held piece would fit at `target` (hover feedback)
    pub fn can_drop_at(&self, target: (i8, i8)) -> Option<bool> {
        let slot = self.tray.held_slot()?;
        let piece = self.tray.slot(slot)?;
        Some(can_place(&self.grid, piece, target))
    }

    /// Drop the held piece in `slot` with its anchor on `target`
    pub fn drop_piece(&mut self, slot: usize, target: (i8, i8)) -> Result<DropOutcome, TrayError> {
        self.ensure_playable()?;
        if slot >= TRAY_SIZE {
            return Err(TrayError::SlotOutOfRange);
        }
        let piece = *self.tray.slot(slot).ok_or(TrayError::SlotEmpty)?;
        if !piece.is_held() {
            return Err(TrayError::NotHeld);
        }

        if !can_place(&self.grid, &piece, target) {
            self.tray.release(slot)?;
            return Ok(DropOutcome::Rejected);
        }

        let placed = self.tray.take(slot)?;
        commit(&mut self.grid, &placed, target);
        self.pieces_placed = self.pieces_placed.saturating_add(1);

        let clear = resolve_clears(&mut self.grid, &mut self.rng);
        self.score = self.score.saturating_add(clear.score);
        self.lines_cleared = self.lines_cleared.saturating_add(clear.lines() as u32);

        if self.tray.refill_if_exhausted(&mut self.rng) {
            self.tray_refills += 1;
        }
        self.settle_stuck_tray();

        Ok(DropOutcome::Committed {
            score_delta: clear.score,
            rows_cleared: clear.rows.len() as u8,
            columns_cleared: clear.columns.len() as u8,
        })
    }

    /// Discard the current tray and draw a new one (the RESET button)
    pub fn reset_tray(&mut self) -> Result<(), TrayError> {
        self.ensure_playable()?;
        self.tray.reset(&mut self.rng);
        self.tray_refills += 1;
        self.settle_stuck_tray();
        Ok(())
    }

    /// Start a new episode; the RNG stream carries on
    pub fn restart(&mut self) {
        self.grid.clear();
        self.tray = Tray::filled(&mut self.rng);
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_placed = 0;
        self.tray_refills = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("restart episode={}", self.episode_id);
    }

    /// Apply the stuck policy when no tray piece fits
    fn settle_stuck_tray(&mut self) {
        if self.tray.has_any_legal_move(&self.grid) {
            return;
        }
        match self.config.stuck_policy {
            StuckPolicy::Refill => {
                let outcome = self.tray.refill_until_playable(
                    &self.grid,
                    &mut self.rng,
                    self.config.max_refill_attempts,
                );
                self.tray_refills += outcome.attempts;
                if !outcome.playable {
                    self.game_over = true;
                }
            }
            StuckPolicy::ReportStuck => {
                warn!("no tray piece fits; game over at score {}", self.score);
                self.game_over = true;
            }
        }
    }

    /// Apply a player action; `target` is the current drop cursor
    ///
    /// Returns true if the action changed the game. Cursor movement belongs to
    /// the input layer and is ignored here.
    pub fn apply_action(&mut self, action: PlayerAction, target: (i8, i8)) -> bool {
        match action {
            PlayerAction::PickSlot(slot) => self.pick_up(slot as usize).is_ok(),
            PlayerAction::MoveCursor { .. } => false,
            PlayerAction::Drop => {
                let Some(slot) = self.tray.held_slot() else {
                    return false;
                };
                matches!(
                    self.drop_piece(slot, target),
                    Ok(DropOutcome::Committed { .. })
                )
            }
            PlayerAction::Cancel => self.cancel_hold(),
            PlayerAction::ResetTray => self.reset_tray().is_ok(),
            PlayerAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::tray::slot_anchor;
    use crate::types::{BlockColor, PieceState, ShapeKind};

    fn tray_of(kinds: &[ShapeKind]) -> Tray {
        let pieces: Vec<Piece> = kinds
            .iter()
            .enumerate()
            .map(|(i, &k)| Piece::new(k, BlockColor::Green, slot_anchor(i)))
            .collect();
        Tray::from_pieces(&pieces)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.score(), 0);
        assert_eq!(state.grid().occupied_count(), 0);
        assert_eq!(state.tray().live_count(), TRAY_SIZE);
        assert!(!state.game_over());
        assert!(!state.is_board_stuck());
    }

    #[test]
    fn test_rejected_drop_reverts_to_tray() {
        let mut state = GameState::with_position(
            GameConfig::with_seed(1),
            Grid::new(),
            tray_of(&[ShapeKind::Horizontal5]),
        );
        state.pick_up(0).unwrap();
        let outcome = state.drop_piece(0, (0, 0)).unwrap();

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(state.grid().occupied_count(), 0);
        assert_eq!(state.tray().slot(0).map(|p| p.state), Some(PieceState::InTray));
    }

    #[test]
    fn test_drop_requires_hold() {
        let mut state = GameState::new(3);
        assert_eq!(state.drop_piece(0, (3, 3)), Err(TrayError::NotHeld));
        assert_eq!(state.drop_piece(7, (3, 3)), Err(TrayError::SlotOutOfRange));
    }

    #[test]
    fn test_placing_last_piece_refills_tray() {
        let mut state = GameState::with_position(
            GameConfig::with_seed(5),
            Grid::new(),
            tray_of(&[ShapeKind::Single]),
        );
        state.pick_up(0).unwrap();
        let outcome = state.drop_piece(0, (4, 4)).unwrap();

        assert!(outcome.is_committed());
        assert_eq!(state.pieces_placed(), 1);
        assert_eq!(state.tray().live_count(), TRAY_SIZE);
        assert_eq!(state.tray_refills(), 1);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = GameState::new(12345);
        state.pick_up(0).unwrap();
        assert!(state.apply_action(PlayerAction::Restart, (0, 0)));
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.held_slot(), None);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_can_drop_at_only_while_holding() {
        let mut state = GameState::new(8);
        assert_eq!(state.can_drop_at((3, 3)), None);
        state.pick_up(2).unwrap();
        assert!(state.can_drop_at((3, 3)).is_some());
        assert!(state.cancel_hold());
        assert!(!state.cancel_hold());
    }
}
