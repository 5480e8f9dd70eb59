//! Board module - the settled-cell grid
//!
//! Cells live in a flat row-major vector sized once at construction.
//! Coordinates are `(x, y)`: x grows to the right, y grows downward, row 0 is
//! the top.

use crate::config::LineClearPolicy;
use crate::pieces::Piece;
use crate::types::{cell_index, Cell};

/// The settled grid; dimensions are fixed for the board's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Row-major cells (`y * width + x`)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    ///
    /// Dimensions are validated by [`crate::GameConfig`]; a zero-sized board
    /// is simply empty and rejects every placement.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(x, y)`; returns false when out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Row `y` as a slice; empty slice when out of bounds
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// A row is full when it has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(|cell| cell.is_some())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when any block of `piece` is below the floor, outside a side
    /// wall, or on a settled cell.
    ///
    /// Rows above the top edge count as empty and there is no check against
    /// them. That only holds because pieces spawn at row 0 and never move up;
    /// upward movement would need the missing bound.
    pub fn collides(&self, piece: &Piece) -> bool {
        let width = self.width as i32;
        let height = self.height as i32;
        piece.board_cells().iter().any(|&(x, y)| {
            y > height - 1 || x > width - 1 || x < 0 || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write `piece`'s color into every cell it covers
    ///
    /// Cells outside the board are skipped.
    pub fn lock_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.board_cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Remove full rows under `policy`; returns how many were counted
    pub fn clear_lines(&mut self, policy: LineClearPolicy) -> u32 {
        match policy {
            LineClearPolicy::Compacting => self.clear_lines_compacting(),
            LineClearPolicy::Legacy => self.clear_lines_legacy(),
        }
    }

    /// Single bottom-up pass: surviving rows are packed to the bottom and the
    /// freed rows at the top are emptied.
    fn clear_lines_compacting(&mut self) -> u32 {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Ascending scan of rows `1..height`; every full row is overwritten by
    /// shifting rows `1..y` down one. Row 0 is never scanned or moved, and
    /// row 1 keeps its content after a shift.
    fn clear_lines_legacy(&mut self) -> u32 {
        let width = self.width as usize;
        let mut cleared = 0;

        for y in 1..self.height as usize {
            if !self.is_row_full(y) {
                continue;
            }
            cleared += 1;
            for row in (2..=y).rev() {
                let src = (row - 1) * width;
                self.cells.copy_within(src..src + width, row * width);
            }
        }

        cleared
    }

    /// Palette indices, row-major, into a reusable buffer
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| cell_index(cell)));
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of palette indices (0 = empty)
    ///
    /// Rows shorter than the widest row are padded with empty cells; indices
    /// outside the palette are treated as empty.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u16;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u16;
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.set(x as i32, y as i32, crate::types::Color::new(v));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
