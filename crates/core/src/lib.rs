//! Core game logic - the falling-block engine
//!
//! Pure, synchronous and single-threaded. No rendering, no input devices and
//! no clock: a driver calls the commands and reads the state back.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog (fixed rotation tables) and the active [`Piece`]
//! - [`board`]: settled-cell grid, the collision predicate, line clearing
//! - [`game_state`]: the session: movement, freeze, scoring, game over
//! - [`config`]: [`GameConfig`] and [`LineClearPolicy`]
//! - [`error`]: [`ConfigError`], the only error the engine raises
//! - [`rng`]: uniform spawn selection
//! - [`snapshot`]: owned render-ready copy of the public state
//! - [`clock`]: frame-based gravity cadence for drivers
//!
//! # Rules
//!
//! - Pieces spawn at column 3, row 0 with a uniformly random family and color.
//! - Moves, rotations and gravity steps are rolled back when they collide.
//! - A gravity step that cannot descend freezes the piece into the board.
//! - Clearing `n` rows in one freeze scores `n²`.
//! - The game ends when a freshly spawned piece collides.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, Phase};
//!
//! let mut game = GameState::new(GameConfig::new().with_seed(12345)).unwrap();
//! game.start();
//!
//! game.move_right();
//! game.rotate();
//! game.hard_drop();
//!
//! // The dropped piece is on the board and a new one is at the top.
//! assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 4);
//! assert_eq!(game.active().unwrap().y(), 0);
//! assert_eq!(game.phase(), Phase::Running);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{gravity_period_frames, GravityClock};
pub use config::{GameConfig, LineClearPolicy};
pub use error::{ConfigError, Result};
pub use game_state::{GameState, LockEvent};
pub use pieces::{get_shape, rotation_count, Piece};
pub use rng::SpawnRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use types::{Cell, Color, Direction, GameAction, Phase, ShapeFamily};
