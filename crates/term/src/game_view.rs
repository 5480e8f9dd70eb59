//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Renders the board, the falling piece and a score panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Where the board frame lands in the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `paused` is driver state; the engine has no pause.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = snap.width.saturating_mul(self.cell_w);
        let board_h = snap.height.saturating_mul(self.cell_h);
        let w = board_w.saturating_add(2);
        let h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            board_w,
            board_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        self.draw_border(fb, frame);

        // Cells past the viewport's right or bottom edge are never visible.
        let visible_w = snap.width.min(viewport.width / self.cell_w);
        let visible_h = snap.height.min(viewport.height / self.cell_h);
        for y in 0..visible_h {
            for x in 0..visible_w {
                match snap.cell(x, y) {
                    0 => self.draw_empty_cell(fb, frame, x, y),
                    v => self.draw_block(fb, frame, x, y, v),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                // Cells above the top edge are not drawn.
                if x >= 0 && y >= 0 && x < snap.width as i32 && y < snap.height as i32 {
                    self.draw_block(fb, frame, x as u16, y as u16, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, paused, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: u8) {
        let style = CellStyle::new(Rgb::from_palette(color), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = cell_x
            .checked_mul(self.cell_w)
            .and_then(|dx| dx.checked_add(frame.x.saturating_add(1)));
        let py = cell_y
            .checked_mul(self.cell_h)
            .and_then(|dy| dy.checked_add(frame.y.saturating_add(1)));
        // Off the u16 grid means off the framebuffer too.
        if let (Some(px), Some(py)) = (px, py) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", u64::from(snap.level)),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_number(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "PIECE", label);
        let piece = snap.active.map_or("-", |a| a.family.as_str());
        fb.put_str(panel_x, y.saturating_add(1), piece, value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 0, 0), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
