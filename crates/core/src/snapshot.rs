use crate::pieces::Piece;
use crate::types::{Phase, ShapeFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub family: ShapeFamily,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    /// Palette index (1..=6)
    pub color: u8,
    /// Occupied board cells as `(x, y)`
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            family: value.family(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            color: value.color().index(),
            cells: value.board_cells(),
        }
    }
}

/// Owned, render-ready copy of a session's public state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Palette indices, row-major (`y * width + x`); 0 is empty
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub score: u64,
    pub lines: u64,
    pub level: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Palette index at `(x, y)`, 0 when out of bounds
    pub fn cell(&self, x: u16, y: u16) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
