//! Pieces module - shape catalog and the active falling piece
//!
//! Rotation states are hand-tuned lookup tables, not derived by a geometric
//! transform, so there are no wall kicks: a rotation either fits in place or
//! is rejected by the engine.
//!
//! Each state lists four linear indices into a 4x4 box, row-major
//! (`index = row * 4 + col`).

use crate::types::{Color, ShapeFamily, PIECE_BOX, SPAWN_X, SPAWN_Y};

/// One rotation state: four linear indices in the 4x4 box
pub type RotationState = [u8; 4];

/// Offset of a single block inside the piece box, as `(row, col)`
pub type CellOffset = (u8, u8);

const I_STATES: [RotationState; 2] = [[1, 5, 9, 13], [4, 5, 6, 7]];

const J_STATES: [RotationState; 4] = [[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]];

const L_STATES: [RotationState; 4] = [[1, 2, 6, 10], [5, 6, 7, 9], [2, 6, 10, 11], [3, 5, 6, 7]];

const T_STATES: [RotationState; 4] = [[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]];

const O_STATES: [RotationState; 1] = [[1, 2, 5, 6]];

const Z_STATES: [RotationState; 4] = [[0, 1, 5, 6], [1, 4, 5, 8], [4, 5, 9, 10], [2, 5, 6, 9]];

/// All rotation states of a family, in rotation order
pub fn rotation_states(family: ShapeFamily) -> &'static [RotationState] {
    match family {
        ShapeFamily::I => &I_STATES,
        ShapeFamily::J => &J_STATES,
        ShapeFamily::L => &L_STATES,
        ShapeFamily::T => &T_STATES,
        ShapeFamily::O => &O_STATES,
        ShapeFamily::Z => &Z_STATES,
    }
}

/// Number of rotation states for a family (1..=4)
pub fn rotation_count(family: ShapeFamily) -> usize {
    rotation_states(family).len()
}

/// Block offsets for a family in a given rotation state
///
/// `rotation` is reduced modulo the family's rotation count.
pub fn get_shape(family: ShapeFamily, rotation: usize) -> [CellOffset; 4] {
    let states = rotation_states(family);
    let state = states[rotation % states.len()];
    state.map(|idx| {
        let idx = idx as usize;
        ((idx / PIECE_BOX) as u8, (idx % PIECE_BOX) as u8)
    })
}

/// The active falling piece
///
/// Fields are private so `rotation` can never leave the valid range for
/// `family`. Validity against the board is the engine's job, not the piece's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    family: ShapeFamily,
    rotation: usize,
    x: i32,
    y: i32,
    color: Color,
}

impl Piece {
    /// Create a piece in rotation state 0 with its box at `(x, y)`
    pub fn new(family: ShapeFamily, color: Color, x: i32, y: i32) -> Self {
        Self {
            family,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    /// Create a piece at the spawn position
    pub fn spawn(family: ShapeFamily, color: Color) -> Self {
        Self::new(family, color, SPAWN_X, SPAWN_Y)
    }

    /// Same piece in another rotation state (reduced modulo the rotation count)
    pub fn with_rotation(mut self, rotation: usize) -> Self {
        self.rotation = rotation % rotation_count(self.family);
        self
    }

    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Column of the box's top-left corner
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row of the box's top-left corner
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Occupied `(row, col)` offsets inside the box for the current rotation
    pub fn occupied_cells(&self) -> [CellOffset; 4] {
        get_shape(self.family, self.rotation)
    }

    /// Occupied cells translated to board coordinates, as `(x, y)`
    pub fn board_cells(&self) -> [(i32, i32); 4] {
        self.occupied_cells()
            .map(|(dr, dc)| (self.x + dc as i32, self.y + dr as i32))
    }

    /// Step to the next rotation state, wrapping around
    pub fn advance_rotation(&mut self) {
        self.rotation = (self.rotation + 1) % rotation_count(self.family);
    }

    pub(crate) fn shift(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub(crate) fn set_rotation(&mut self, rotation: usize) {
        self.rotation = rotation;
    }
}
