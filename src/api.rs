use glam::{DVec2, UVec2};

use crate::error::ColliderError;
use crate::types::*;

/// Read-only view of a row-major tile grid.
///
/// Cells outside the grid, including past the end of a short row, read as `None`
/// and count as open space.
pub trait TileGrid<T> {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Length of the longest row.
    fn width(&self) -> usize;

    /// Tile at column `x`, row `y`, or `None` when out of range.
    fn get(&self, x: usize, y: usize) -> Option<T>;

    /// Signed lookup; negative indices are out of range.
    #[inline]
    fn tile(&self, x: i64, y: i64) -> Option<T> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }
}

/// Public API contract for the per-axis tilemap collider.
pub trait TileColliderApi<T: TileId, M: TileGrid<T>> {
    /// Build a collider with the default configuration.
    fn new(tilemap: M, tile_width: u32, tile_height: u32) -> Result<Self, ColliderError>
    where
        Self: Sized;

    /// Build a collider with an explicit configuration.
    fn with_config(
        tilemap: M,
        tile_width: u32,
        tile_height: u32,
        config: ColliderConfig<T>,
    ) -> Result<Self, ColliderError>
    where
        Self: Sized;

    // --- Queries -----------------------------------------------------------

    /// Resolve `movement` for `rect` against the grid and return the permitted movement.
    fn collide(&mut self, rect: Rect, movement: DVec2) -> DVec2;

    /// Like `collide`, then invoke `on_collide` once with the contacts and final movement.
    fn collide_with<F>(&mut self, rect: Rect, movement: DVec2, on_collide: F) -> DVec2
    where
        F: FnOnce(&[ContactInfo<T>], DVec2);

    /// Like `collide`, but call `on_tile` per recorded contact; returning `true` stops
    /// scanning the current axis.
    fn collide_until<F>(&mut self, rect: Rect, movement: DVec2, on_tile: F) -> DVec2
    where
        F: FnMut(&ContactInfo<T>) -> bool;

    /// Contacts from the most recent query; overwritten by the next one.
    fn contacts(&self) -> &[ContactInfo<T>];

    /// Whether the cell at `(x, y)` holds a solid tile.
    fn is_solid_at(&self, x: i64, y: i64) -> bool;

    // --- Configuration -----------------------------------------------------

    fn tile_size(&self) -> UVec2;
    fn config(&self) -> &ColliderConfig<T>;
    fn set_static_check(&mut self, enabled: bool);
    fn set_non_solid(&mut self, id: T);
}
