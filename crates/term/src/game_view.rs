//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::tray::slot_anchor;
use crate::core::{get_shape, GameSnapshot};
use crate::fb::{block_rgb, Cell, CellStyle, FrameBuffer, Rgb, EMPTY_RGB};
use crate::types::{PieceState, GRID_SIZE, TRAY_SIZE};

/// Terminal columns per grid cell; 2 compensates for glyph aspect ratio.
const CELL_W: u16 = 2;
/// Preview box side (in cells) of one tray slot.
const SLOT_SPAN: u16 = 5;

const BOARD_FRAME_W: u16 = GRID_SIZE as u16 * CELL_W + 2;
const BOARD_FRAME_H: u16 = GRID_SIZE as u16 + 2;
const TRAY_W: u16 = TRAY_SIZE as u16 * SLOT_SPAN * CELL_W;
const BLOCK_W: u16 = if TRAY_W > BOARD_FRAME_W { TRAY_W } else { BOARD_FRAME_W };
/// Header, board frame, slot labels, tray strip, footer.
const BLOCK_H: u16 = 1 + BOARD_FRAME_H + 1 + SLOT_SPAN + 1;

const BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen positions of the view's parts for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame
    pub board_x: u16,
    pub board_y: u16,
    /// Top-left corner of the tray strip
    pub tray_x: u16,
    pub tray_y: u16,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let origin_x = viewport.width.saturating_sub(BLOCK_W) / 2;
        let origin_y = viewport.height.saturating_sub(BLOCK_H) / 2;
        Self {
            board_x: origin_x + (BLOCK_W - BOARD_FRAME_W) / 2,
            board_y: origin_y + 1,
            tray_x: origin_x + (BLOCK_W - TRAY_W) / 2,
            tray_y: origin_y + 1 + BOARD_FRAME_H + 1,
        }
    }

    /// Screen position of the left half of grid cell (x, y)
    pub fn grid_cell(&self, x: u16, y: u16) -> (u16, u16) {
        (self.board_x + 1 + x * CELL_W, self.board_y + 1 + y)
    }

    /// Screen position of the left half of tray-strip cell (x, y)
    pub fn tray_cell(&self, x: u16, y: u16) -> (u16, u16) {
        (self.tray_x + x * CELL_W, self.tray_y + y)
    }
}

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into a fresh framebuffer sized to the viewport.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i8, i8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the drop target; the held piece is previewed there.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i8, i8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        let layout = Layout::for_viewport(viewport);

        self.draw_header(fb, &layout, snap);
        self.draw_border(fb, layout.board_x, layout.board_y);
        self.draw_grid(fb, &layout, snap);
        if let Some(target) = cursor {
            self.draw_drag_preview(fb, &layout, snap, target);
        }
        self.draw_tray(fb, &layout, snap);

        let footer = CellStyle::plain(Rgb::new(120, 120, 130), BG);
        fb.put_str(
            layout.tray_x,
            layout.tray_y + SLOT_SPAN,
            "1-3 pick  enter drop  t reset",
            footer,
        );

        if snap.game_over {
            self.draw_game_over(fb, &layout);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let style = CellStyle::plain(Rgb::new(230, 230, 230), BG).bold();
        let text = format!("SCORE {}  LINES {}", snap.score, snap.lines_cleared);
        fb.put_str(layout.tray_x, layout.board_y.saturating_sub(1), &text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), BG);
        let (right, bottom) = (x + BOARD_FRAME_W - 1, y + BOARD_FRAME_H - 1);
        for xx in x + 1..right {
            fb.set(xx, y, style.cell('─'));
            fb.set(xx, bottom, style.cell('─'));
        }
        for yy in y + 1..bottom {
            fb.set(x, yy, style.cell('│'));
            fb.set(right, yy, style.cell('│'));
        }
        fb.set(x, y, style.cell('┌'));
        fb.set(right, y, style.cell('┐'));
        fb.set(x, bottom, style.cell('└'));
        fb.set(right, bottom, style.cell('┘'));
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let empty = CellStyle::plain(Rgb::new(70, 84, 110), EMPTY_RGB);
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (sx, sy) = layout.grid_cell(x as u16, y as u16);
                match cell {
                    Some(color) => paint_block(fb, sx, sy, block_rgb(*color), '█'),
                    None => {
                        fb.set(sx, sy, empty.cell('·'));
                        fb.set(sx + 1, sy, empty.cell(' '));
                    }
                }
            }
        }
    }

    /// Ghost of the held piece at `target`, red when the drop would be rejected
    fn draw_drag_preview(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        target: (i8, i8),
    ) {
        let Some(held) = snap.held() else {
            return;
        };
        let offsets = get_shape(held.kind);
        let on_grid = |dx: i8, dy: i8| {
            let (x, y) = (target.0 as i16 + dx as i16, target.1 as i16 + dy as i16);
            let size = GRID_SIZE as i16;
            ((0..size).contains(&x) && (0..size).contains(&y)).then_some((x as usize, y as usize))
        };
        let legal = offsets.iter().all(|&(dx, dy)| {
            on_grid(dx, dy).is_some_and(|(x, y)| snap.grid[y][x].is_none())
        });
        let rgb = if legal {
            block_rgb(held.color)
        } else {
            Rgb::new(210, 40, 40)
        };

        for &(dx, dy) in offsets {
            if let Some((x, y)) = on_grid(dx, dy) {
                let (sx, sy) = layout.grid_cell(x as u16, y as u16);
                paint_block(fb, sx, sy, rgb, '▒');
            }
        }
    }

    fn draw_tray(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let label = CellStyle::plain(Rgb::new(160, 160, 170), BG);
        for (slot, view) in snap.tray.iter().enumerate() {
            let (ax, ay) = slot_anchor(slot);
            let (lx, ly) = layout.tray_cell(ax as u16, 0);
            let digit = char::from(b'1' + slot as u8);
            fb.set(lx, ly.saturating_sub(1), label.cell(digit));

            let Some(view) = view else {
                continue;
            };
            let held = view.state == PieceState::Held;
            let rgb = if held {
                block_rgb(view.color).scaled(1, 2)
            } else {
                block_rgb(view.color)
            };
            for &(dx, dy) in get_shape(view.kind) {
                let (sx, sy) = layout.tray_cell((ax + dx) as u16, (ay + dy) as u16);
                paint_block(fb, sx, sy, rgb, if held { '░' } else { '█' });
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(120, 0, 20)).bold();
        let inner_w = BOARD_FRAME_W - 2;
        let mid_y = layout.board_y + BOARD_FRAME_H / 2;
        for (y, text) in [(mid_y - 1, "GAME OVER"), (mid_y, "r: restart")] {
            let x = layout.board_x + 1 + inner_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, y, text, style);
        }
    }
}

/// Paint a two-column block cell with light/dark halves.
fn paint_block(fb: &mut FrameBuffer, x: u16, y: u16, rgb: Rgb, ch: char) {
    fb.set(x, y, CellStyle::plain(rgb.scaled(8, 7), EMPTY_RGB).cell(ch));
    fb.set(x + 1, y, CellStyle::plain(rgb.scaled(3, 4), EMPTY_RGB).cell(ch));
}
