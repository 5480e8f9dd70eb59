//! Configuration for a game session

use crate::error::{ConfigError, Result};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LEVEL};

/// How full rows are removed after a freeze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineClearPolicy {
    /// Scan every row and pack the survivors to the bottom in one pass
    #[default]
    Compacting,
    /// Scan rows 1..height ascending and shift rows down per full row;
    /// row 0 is exempt and row 1 is copied down without being emptied
    Legacy,
}

/// Session configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in columns
    pub width: u16,

    /// Board height in rows
    pub height: u16,

    /// Difficulty; only the driver's gravity cadence reads it
    pub level: u32,

    /// Line-clear algorithm
    pub line_clear: LineClearPolicy,

    /// Spawn RNG seed (drawn from OS entropy if None)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            level: DEFAULT_LEVEL,
            line_clear: LineClearPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the line-clear policy
    pub fn with_line_clear(mut self, policy: LineClearPolicy) -> Self {
        self.line_clear = policy;
        self
    }

    /// Fix the spawn RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before any session is built
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.level == 0 {
            return Err(ConfigError::InvalidLevel(self.level));
        }
        Ok(())
    }
}
