//! tilesweep: per-axis AABB vs. tilemap collider (static grid, clamp-and-report)

pub mod types;
pub mod api;
pub mod error;
pub mod tilemap;
pub mod sweep;
pub mod collider;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::ColliderError;
pub use crate::tilemap::TileMap;
pub use crate::collider::TileCollider;
