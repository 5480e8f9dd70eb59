//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the engine,
//! the input mapper and the terminal renderer can all share it.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows; the engine accepts any
//! positive size at construction time. Row 0 is the top of the board.
//!
//! - **Spawn position**: column 3, row 0 (top-left of the 4x4 piece box)
//!
//! # Palette
//!
//! Palette index 0 is the background ("empty"). Indices 1..=6 are piece colors
//! and are the only values a [`Color`] can hold.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, ShapeFamily, PALETTE_LEN};
//!
//! assert_eq!(ShapeFamily::ALL.len(), 6);
//! assert_eq!(ShapeFamily::Z.as_str(), "Z");
//!
//! assert!(Color::new(0).is_none());
//! assert_eq!(Color::new(3).map(Color::index), Some(3));
//! assert!(Color::new(PALETTE_LEN as u8).is_none());
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Spawn column of the piece box's top-left corner
pub const SPAWN_X: i32 = 3;

/// Spawn row of the piece box's top-left corner
pub const SPAWN_Y: i32 = 0;

/// Side length of the square box every rotation state is drawn in
pub const PIECE_BOX: usize = 4;

/// Number of palette entries, background included
pub const PALETTE_LEN: usize = 7;

/// RGB values for each palette index; index 0 is the background.
pub const PALETTE_RGB: [(u8, u8, u8); PALETTE_LEN] = [
    (0, 0, 0),
    (120, 37, 179),
    (100, 179, 179),
    (80, 34, 22),
    (80, 134, 22),
    (180, 34, 22),
    (180, 34, 122),
];

/// Driver frame rate (frames per second)
pub const FRAME_RATE: u32 = 25;

/// Default difficulty level
pub const DEFAULT_LEVEL: u32 = 2;

/// The driver's frame counter wraps back to zero past this value
pub const FRAME_COUNTER_WRAP: u32 = 100_000;

/// Shape families in the catalog
///
/// - **I**: straight bar (2 rotation states)
/// - **J**: hook opening left (4 states)
/// - **L**: hook opening right (4 states)
/// - **T**: tee (4 states)
/// - **O**: 2x2 square (1 state)
/// - **Z**: skew (4 states)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    I,
    J,
    L,
    T,
    O,
    Z,
}

impl ShapeFamily {
    /// Every family, in catalog order
    pub const ALL: [ShapeFamily; 6] = [
        ShapeFamily::I,
        ShapeFamily::J,
        ShapeFamily::L,
        ShapeFamily::T,
        ShapeFamily::O,
        ShapeFamily::Z,
    ];

    /// Upper-case letter, for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeFamily::I => "I",
            ShapeFamily::J => "J",
            ShapeFamily::L => "L",
            ShapeFamily::T => "T",
            ShapeFamily::O => "O",
            ShapeFamily::Z => "Z",
        }
    }
}

/// A non-background palette index (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Every piece color, in palette order
    pub const ALL: [Color; PALETTE_LEN - 1] =
        [Color(1), Color(2), Color(3), Color(4), Color(5), Color(6)];

    /// Wrap a palette index, rejecting the background and out-of-range values
    pub const fn new(index: u8) -> Option<Self> {
        if index == 0 || index as usize >= PALETTE_LEN {
            None
        } else {
            Some(Color(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        PALETTE_RGB[self.0 as usize]
    }
}

/// A cell on the board
///
/// - `None`: empty (palette index 0)
/// - `Some(Color)`: settled block of that color
pub type Cell = Option<Color>;

/// Palette index of a cell, 0 for empty
#[inline]
pub fn cell_index(cell: Cell) -> u8 {
    cell.map_or(0, Color::index)
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Actions a driver can feed into a session
///
/// `Pause` is driver-level; the engine ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// One gravity step requested by input
    SoftDrop,
    /// Drop to the lowest legal row and freeze
    HardDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a fresh session
    Restart,
}
