//! Error types for the engine

use thiserror::Error;

/// Result type alias for engine construction
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected session configuration
///
/// These are the only errors the engine produces: once a session exists,
/// illegal moves are absorbed by rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Width or height of zero
    #[error("Invalid board dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions {
        /// Requested width
        width: u16,
        /// Requested height
        height: u16,
    },

    /// Level of zero (the driver divides its frame rate by the level)
    #[error("Invalid level: {0} (must be at least 1)")]
    InvalidLevel(u32),
}
