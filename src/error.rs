use thiserror::Error;

/// Error type for collider construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColliderError {
    /// Tile width or height is zero.
    #[error("invalid tile size {width}x{height}: both dimensions must be positive")]
    InvalidTileSize { width: u32, height: u32 },
}
