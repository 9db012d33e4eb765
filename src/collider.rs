use glam::{DVec2, UVec2};
use log::{debug, trace, warn};

use crate::api::{TileColliderApi, TileGrid};
use crate::error::ColliderError;
use crate::sweep;
use crate::types::*;

/// Per-axis sweep collider for one rectangle against a static tile grid.
///
/// Owns the grid, tile size, configuration and a contact buffer that is cleared and
/// refilled by every query. Use one collider per moving actor.
#[derive(Clone, Debug)]
pub struct TileCollider<T, M = Vec<Vec<T>>> {
    tilemap: M,
    tile_size: UVec2,
    config: ColliderConfig<T>,

    // Results of the last query
    contacts: Vec<ContactInfo<T>>,
    stats: SweepStats,
}

impl<T: TileId, M: TileGrid<T>> TileColliderApi<T, M> for TileCollider<T, M> {
    fn new(tilemap: M, tile_width: u32, tile_height: u32) -> Result<Self, ColliderError> {
        Self::with_config(tilemap, tile_width, tile_height, ColliderConfig::default())
    }

    fn with_config(
        tilemap: M,
        tile_width: u32,
        tile_height: u32,
        config: ColliderConfig<T>,
    ) -> Result<Self, ColliderError> {
        if tile_width == 0 || tile_height == 0 {
            warn!(
                target: "tilesweep",
                "rejecting collider with tile size {}x{}", tile_width, tile_height
            );
            return Err(ColliderError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }
        debug!(
            target: "tilesweep",
            "collider ready: tile={}x{} grid={}x{} static_check={}",
            tile_width,
            tile_height,
            tilemap.width(),
            tilemap.height(),
            config.static_check
        );
        Ok(Self {
            tilemap,
            tile_size: UVec2::new(tile_width, tile_height),
            config,
            contacts: Vec::new(),
            stats: SweepStats::default(),
        })
    }

    fn collide(&mut self, rect: Rect, movement: DVec2) -> DVec2 {
        self.resolve(rect, movement, &mut |_: &ContactInfo<T>| false)
    }

    fn collide_with<F>(&mut self, rect: Rect, movement: DVec2, on_collide: F) -> DVec2
    where
        F: FnOnce(&[ContactInfo<T>], DVec2),
    {
        let resolved = self.resolve(rect, movement, &mut |_: &ContactInfo<T>| false);
        on_collide(&self.contacts, resolved);
        resolved
    }

    fn collide_until<F>(&mut self, rect: Rect, movement: DVec2, mut on_tile: F) -> DVec2
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        self.resolve(rect, movement, &mut on_tile)
    }

    fn contacts(&self) -> &[ContactInfo<T>] {
        &self.contacts
    }

    fn is_solid_at(&self, x: i64, y: i64) -> bool {
        self.tilemap
            .tile(x, y)
            .is_some_and(|id| id != self.config.non_solid)
    }

    fn tile_size(&self) -> UVec2 {
        self.tile_size
    }

    fn config(&self) -> &ColliderConfig<T> {
        &self.config
    }

    fn set_static_check(&mut self, enabled: bool) {
        self.config.static_check = enabled;
    }

    fn set_non_solid(&mut self, id: T) {
        self.config.non_solid = id;
    }
}

impl<T: TileId, M: TileGrid<T>> TileCollider<T, M> {
    pub fn tilemap(&self) -> &M {
        &self.tilemap
    }

    /// Mutable access for edits between queries.
    pub fn tilemap_mut(&mut self) -> &mut M {
        &mut self.tilemap
    }

    /// Swap in a new grid and return the old one.
    pub fn set_tilemap(&mut self, tilemap: M) -> M {
        std::mem::replace(&mut self.tilemap, tilemap)
    }

    pub fn into_tilemap(self) -> M {
        self.tilemap
    }

    /// Debug counters for the last query.
    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    fn resolve<F>(&mut self, rect: Rect, movement: DVec2, on_tile: &mut F) -> DVec2
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        self.contacts.clear();
        self.stats = SweepStats::default();

        if movement == DVec2::ZERO {
            if self.config.static_check {
                self.static_overlaps(rect, on_tile);
            }
            return DVec2::ZERO;
        }

        // Larger magnitude first; ties go to Y.
        let mut resolved = movement;
        if movement.x.abs() > movement.y.abs() {
            resolved.x = self.collide_x(rect, movement.x, on_tile);
            if movement.y != 0.0 {
                let moved = rect.translate(DVec2::new(resolved.x, 0.0));
                resolved.y = self.collide_y(moved, movement.y, on_tile);
            }
        } else {
            resolved.y = self.collide_y(rect, movement.y, on_tile);
            if movement.x != 0.0 {
                let moved = rect.translate(DVec2::new(0.0, resolved.y));
                resolved.x = self.collide_x(moved, movement.x, on_tile);
            }
        }

        trace!(
            target: "tilesweep",
            "move ({:.3},{:.3}) -> ({:.3},{:.3}) contacts={} scanned={}",
            movement.x,
            movement.y,
            resolved.x,
            resolved.y,
            self.contacts.len(),
            self.stats.tiles_scanned
        );
        resolved
    }

    fn collide_x<F>(&mut self, rect: Rect, dx: f64, on_tile: &mut F) -> f64
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        self.sweep_axis(Axis::X, rect, dx, on_tile)
    }

    fn collide_y<F>(&mut self, rect: Rect, dy: f64, on_tile: &mut F) -> f64
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        self.sweep_axis(Axis::Y, rect, dy, on_tile)
    }

    /// Clamp `movement` along `axis` to the nearest solid tile face, recording every tile
    /// whose constraint is at least as tight as the bound at the time it was scanned.
    fn sweep_axis<F>(&mut self, axis: Axis, rect: Rect, movement: f64, on_tile: &mut F) -> f64
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        self.stats.axes_swept += 1;
        let i = axis.index();
        let ts = self.tile_size[i] as f64;
        let (pos, size) = (rect.pos[i], rect.size[i]);

        let (extent, across_extent) = match axis {
            Axis::X => (self.tilemap.width(), self.tilemap.height()),
            Axis::Y => (self.tilemap.height(), self.tilemap.width()),
        };
        let (extent, across_extent) = (extent as i64, across_extent as i64);

        let (across_first, across_last) = rect.tile_span(axis.perpendicular(), self.tile_size);
        let across_first = across_first.max(0);
        let across_last = across_last.min(across_extent - 1);

        // Scan window along the axis, clamped to the grid
        let limit = sweep::check_limit(movement, ts);
        let lead = sweep::leading_index(pos, size, movement, ts);
        let forward = movement > 0.0;
        let (lo, hi) = if forward {
            (lead, lead.saturating_add(limit - 1))
        } else {
            (lead.saturating_sub(limit - 1), lead)
        };
        let (lo, hi) = (lo.max(0), hi.min(extent - 1));

        let normal = axis.unit(if forward { -1 } else { 1 });
        let mut bound = movement;

        for across in across_first..=across_last {
            for k in 0..=(hi - lo).max(-1) {
                let along = if forward { lo + k } else { hi - k };
                let (x, y) = axis.compose(along, across);
                let Some(id) = self.tilemap.tile(x, y) else {
                    continue;
                };
                self.stats.tiles_scanned += 1;
                if id == self.config.non_solid {
                    continue;
                }
                self.stats.solid_tiles += 1;

                let candidate = sweep::flush_candidate(pos, size, movement, along, ts);
                if sweep::is_tighter(candidate, bound, movement) {
                    bound = candidate;
                    let contact = ContactInfo {
                        tile_id: id,
                        tile: UVec2::new(x as u32, y as u32),
                        normal,
                    };
                    self.contacts.push(contact);
                    self.stats.contacts += 1;
                    if on_tile(&contact) {
                        return bound;
                    }
                }
                // Farther tiles on this line cannot be tighter
                break;
            }
        }
        bound
    }

    /// Record every solid tile the rect currently overlaps.
    fn static_overlaps<F>(&mut self, rect: Rect, on_tile: &mut F)
    where
        F: FnMut(&ContactInfo<T>) -> bool,
    {
        let (x0, x1) = rect.tile_span(Axis::X, self.tile_size);
        let (y0, y1) = rect.tile_span(Axis::Y, self.tile_size);
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.tilemap.width() as i64 - 1);
        let y1 = y1.min(self.tilemap.height() as i64 - 1);
        let ts = self.tile_size.as_dvec2();

        for y in y0..=y1 {
            for x in x0..=x1 {
                let Some(id) = self.tilemap.tile(x, y) else {
                    continue;
                };
                self.stats.tiles_scanned += 1;
                if id == self.config.non_solid {
                    continue;
                }
                self.stats.solid_tiles += 1;

                let tile_min = DVec2::new(x as f64, y as f64) * ts;
                let contact = ContactInfo {
                    tile_id: id,
                    tile: UVec2::new(x as u32, y as u32),
                    normal: sweep::penetration_normal(&rect, tile_min, tile_min + ts),
                };
                self.contacts.push(contact);
                self.stats.contacts += 1;
                if on_tile(&contact) {
                    return;
                }
            }
        }
        debug!(
            target: "tilesweep",
            "static check at ({:.3},{:.3}): {} overlapping tiles",
            rect.pos.x,
            rect.pos.y,
            self.contacts.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::tilemap::TileMap;

    fn center_map() -> Vec<Vec<u8>> {
        vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]
    }

    fn collider(map: Vec<Vec<u8>>, ts: u32) -> TileCollider<u8> {
        TileCollider::new(map, ts, ts).unwrap()
    }

    #[test]
    fn test_rejects_zero_tile_size() {
        let res: Result<TileCollider<u8>, _> = TileCollider::new(center_map(), 0, 50);
        assert_eq!(res.err(), Some(ColliderError::InvalidTileSize { width: 0, height: 50 }));
        let res: Result<TileCollider<u8>, _> = TileCollider::new(center_map(), 50, 0);
        assert!(res.is_err());
    }

    #[test]
    fn test_clamp_against_tile_left_face() {
        let mut c = collider(center_map(), 50);
        // Rect 20..30 in row 1, moving right into tile (1,1)
        let out = c.collide(Rect::new(20.0, 70.0, 10.0, 10.0), DVec2::new(40.0, 0.0));
        assert_eq!(out, DVec2::new(20.0, 0.0));
        assert_eq!(c.contacts().len(), 1);
        let hit = c.contacts()[0];
        assert_eq!(hit.tile, UVec2::new(1, 1));
        assert_eq!(hit.tile_id, 1);
        assert_eq!(hit.normal, IVec2::new(-1, 0));
    }

    #[test]
    fn test_row_above_tile_passes_freely() {
        let mut c = collider(center_map(), 50);
        // Rect spans y 20..30, entirely in row 0; the solid tile lives in row 1
        let out = c.collide(Rect::new(20.0, 20.0, 10.0, 10.0), DVec2::new(40.0, 0.0));
        assert_eq!(out, DVec2::new(40.0, 0.0));
        assert!(c.contacts().is_empty());
    }

    #[test]
    fn test_zero_movement_fast_path() {
        let mut c = collider(center_map(), 50);
        let out = c.collide(Rect::new(20.0, 20.0, 10.0, 10.0), DVec2::ZERO);
        assert_eq!(out, DVec2::ZERO);
        assert!(c.contacts().is_empty());
        assert_eq!(c.stats().tiles_scanned, 0);
    }

    #[test]
    fn test_zero_movement_fast_path_even_when_overlapping() {
        let mut c = collider(center_map(), 50);
        let out = c.collide(Rect::new(60.0, 60.0, 10.0, 10.0), DVec2::ZERO);
        assert_eq!(out, DVec2::ZERO);
        assert!(c.contacts().is_empty());
    }

    #[test]
    fn test_negative_x_and_both_y_normals() {
        let mut c = collider(center_map(), 50);
        // From the right, moving left
        let out = c.collide(Rect::new(110.0, 60.0, 10.0, 10.0), DVec2::new(-30.0, 0.0));
        assert_eq!(out.x, -10.0);
        assert_eq!(c.contacts()[0].normal, IVec2::new(1, 0));
        // From above, moving down
        let out = c.collide(Rect::new(60.0, 30.0, 10.0, 10.0), DVec2::new(0.0, 25.0));
        assert_eq!(out.y, 10.0);
        assert_eq!(c.contacts()[0].normal, IVec2::new(0, -1));
        assert!(c.contacts()[0].is_floor());
        // From below, moving up
        let out = c.collide(Rect::new(60.0, 105.0, 10.0, 10.0), DVec2::new(0.0, -25.0));
        assert_eq!(out.y, -5.0);
        assert_eq!(c.contacts()[0].normal, IVec2::new(0, 1));
    }

    #[test]
    fn test_multi_tile_sweep_stops_at_wall_face() {
        // Wall in column 3, 2.5 tiles from the rect's right edge
        let map = vec![vec![0u8, 0, 0, 1, 0, 0]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(35.0, 0.0));
        assert_eq!(out.x, 25.0);
        assert_eq!(c.contacts().len(), 1);
        assert_eq!(c.contacts()[0].tile, UVec2::new(3, 0));

        let out = c.collide(Rect::new(55.0, 0.0, 5.0, 5.0), DVec2::new(-40.0, 0.0));
        assert_eq!(out.x, -15.0);
        assert_eq!(c.contacts()[0].normal, IVec2::X);
    }

    #[test]
    fn test_grazing_tile_recorded_without_clamping() {
        // Rect resting on the floor row; gravity asks for 0 and gets 0 plus a floor contact
        let map = vec![vec![0u8, 0], vec![2, 2]];
        let mut c = collider(map, 16);
        let out = c.collide(Rect::new(4.0, 0.0, 8.0, 16.0), DVec2::new(0.0, 0.5));
        assert_eq!(out, DVec2::ZERO);
        assert_eq!(c.contacts().len(), 1);
        assert!(c.contacts()[0].is_floor());
        assert_eq!(c.contacts()[0].tile_id, 2);

        // Face exactly at the destination: full movement, contact still reported
        let out = c.collide(Rect::new(4.0, 0.0, 8.0, 8.0), DVec2::new(0.0, 8.0));
        assert_eq!(out.y, 8.0);
        assert_eq!(c.contacts().len(), 1);
    }

    #[test]
    fn test_records_every_tile_sharing_the_bound() {
        // Rect straddles two rows that both have a wall in column 2
        let map = vec![vec![0u8, 0, 1], vec![0, 0, 1]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 5.0, 5.0, 10.0), DVec2::new(30.0, 0.0));
        assert_eq!(out.x, 15.0);
        let tiles: Vec<UVec2> = c.contacts().iter().map(|h| h.tile).collect();
        assert_eq!(tiles, vec![UVec2::new(2, 0), UVec2::new(2, 1)]);
    }

    #[test]
    fn test_records_looser_tile_scanned_before_tighter_one() {
        // Row 0 wall at column 3, row 1 wall at column 2; row 0 is scanned first
        let map = vec![vec![0u8, 0, 0, 1], vec![0, 0, 1, 0]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 5.0, 5.0, 10.0), DVec2::new(40.0, 0.0));
        assert_eq!(out.x, 15.0);
        let tiles: Vec<UVec2> = c.contacts().iter().map(|h| h.tile).collect();
        assert_eq!(tiles, vec![UVec2::new(3, 0), UVec2::new(2, 1)]);
    }

    #[test]
    fn test_bottom_edge_on_grid_line_does_not_touch_row_below() {
        // Rect bottom at exactly y=10; row 1 is solid under it
        let map = vec![vec![0u8, 0, 0], vec![1, 1, 1]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 10.0), DVec2::new(20.0, 0.0));
        assert_eq!(out.x, 20.0);
        assert!(c.contacts().is_empty());
        // Half a unit lower the rect overlaps row 1 at its leading edge and is held
        let out = c.collide(Rect::new(0.0, 0.5, 5.0, 10.0), DVec2::new(20.0, 0.0));
        assert_eq!(out.x, 0.0);
        assert!(c.contacts().iter().all(|h| h.tile.y == 1));
    }

    fn corner_map() -> Vec<Vec<u8>> {
        // Wall at (1,0), floor under (0,0)
        vec![vec![0, 1], vec![1, 1]]
    }

    #[test]
    fn test_larger_axis_resolves_first() {
        let mut c = collider(corner_map(), 10);
        let rect = Rect::new(0.0, 0.0, 5.0, 5.0);

        let out = c.collide(rect, DVec2::new(12.0, 8.0));
        assert_eq!(out, DVec2::new(5.0, 5.0));
        assert_eq!(c.contacts().len(), 2);
        assert_eq!(c.contacts()[0].normal, IVec2::new(-1, 0));
        assert!(c.contacts()[1].is_floor());

        let out = c.collide(rect, DVec2::new(8.0, 12.0));
        assert_eq!(out, DVec2::new(5.0, 5.0));
        assert!(c.contacts()[0].is_floor());
        assert_eq!(c.contacts()[1].normal, IVec2::new(-1, 0));
    }

    #[test]
    fn test_equal_magnitude_resolves_y_first() {
        let mut c = collider(corner_map(), 10);
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(10.0, 10.0));
        assert_eq!(out, DVec2::new(5.0, 5.0));
        let normals: Vec<IVec2> = c.contacts().iter().map(|h| h.normal).collect();
        assert_eq!(normals, vec![IVec2::new(0, -1), IVec2::new(-1, 0)]);
    }

    #[test]
    fn test_second_axis_uses_offset_rect() {
        // Moving right along row 0 then down: the drop lands in column 2, which has no floor
        let map = vec![vec![0u8, 0, 0], vec![1, 1, 0]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(22.0, 10.0));
        assert_eq!(out, DVec2::new(22.0, 10.0));
        assert!(c.contacts().is_empty());
    }

    #[test]
    fn test_out_of_bounds_rect_is_safe() {
        let mut c = collider(center_map(), 50);
        let out = c.collide(Rect::new(-500.0, -500.0, 10.0, 10.0), DVec2::new(30.0, -30.0));
        assert_eq!(out, DVec2::new(30.0, -30.0));
        let out = c.collide(Rect::new(1e6, 1e6, 10.0, 10.0), DVec2::new(-1e9, 0.0));
        assert_eq!(out, DVec2::new(-1e9, 0.0));
        assert!(c.contacts().is_empty());
    }

    #[test]
    fn test_rect_entering_map_from_outside_is_blocked() {
        let mut c = collider(center_map(), 50);
        // Starts left of the map in row 1, long move right into tile (1,1)
        let out = c.collide(Rect::new(-100.0, 60.0, 10.0, 10.0), DVec2::new(500.0, 0.0));
        assert_eq!(out.x, 140.0);
        assert_eq!(c.contacts()[0].tile, UVec2::new(1, 1));
    }

    #[test]
    fn test_empty_and_jagged_maps() {
        let mut c = collider(Vec::new(), 16);
        let out = c.collide(Rect::new(0.0, 0.0, 8.0, 8.0), DVec2::new(5.0, 5.0));
        assert_eq!(out, DVec2::new(5.0, 5.0));

        // Row 1 is short; the wall at (3,0) is in a longer row
        let map = vec![vec![0u8, 0, 0, 1], vec![0]];
        let mut c = collider(map, 10);
        let out = c.collide(Rect::new(0.0, 12.0, 5.0, 5.0), DVec2::new(40.0, 0.0));
        assert_eq!(out.x, 40.0);
        let out = c.collide(Rect::new(0.0, 2.0, 5.0, 5.0), DVec2::new(40.0, 0.0));
        assert_eq!(out.x, 25.0);
    }

    #[test]
    fn test_static_check_reports_overlap_at_rest() {
        let mut c = collider(center_map(), 50);
        c.set_static_check(true);
        // Not overlapping: still nothing
        let out = c.collide(Rect::new(20.0, 20.0, 10.0, 10.0), DVec2::ZERO);
        assert_eq!(out, DVec2::ZERO);
        assert!(c.contacts().is_empty());
        assert!(c.stats().tiles_scanned > 0);

        // Poking 5 units into the tile's left face
        let out = c.collide(Rect::new(15.0, 60.0, 40.0, 10.0), DVec2::ZERO);
        assert_eq!(out, DVec2::ZERO);
        assert_eq!(c.contacts().len(), 1);
        assert_eq!(c.contacts()[0].tile, UVec2::new(1, 1));
        assert_eq!(c.contacts()[0].normal, IVec2::new(-1, 0));
    }

    #[test]
    fn test_static_check_ignores_edge_contact() {
        let mut c = collider(center_map(), 50);
        c.set_static_check(true);
        // Right edge exactly on the tile's left face
        c.collide(Rect::new(40.0, 60.0, 10.0, 10.0), DVec2::ZERO);
        assert!(c.contacts().is_empty());
    }

    #[test]
    fn test_static_check_only_applies_at_rest() {
        let mut c = collider(center_map(), 50);
        c.set_static_check(true);
        let out = c.collide(Rect::new(20.0, 70.0, 10.0, 10.0), DVec2::new(40.0, 0.0));
        assert_eq!(out.x, 20.0);
        assert_eq!(c.contacts().len(), 1);
    }

    #[test]
    fn test_custom_non_solid_id() {
        let map = vec![vec![7i16, 7, 0], vec![7, 7, 7]];
        let cfg = ColliderConfig { static_check: false, non_solid: 7 };
        let mut c = TileCollider::with_config(map, 10, 10, cfg).unwrap();
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(30.0, 0.0));
        assert_eq!(out.x, 15.0);
        assert_eq!(c.contacts()[0].tile_id, 0);
        assert!(c.is_solid_at(2, 0));
        assert!(!c.is_solid_at(0, 0));
        assert!(!c.is_solid_at(-1, 0));

        c.set_non_solid(0);
        assert!(c.is_solid_at(0, 0));
    }

    #[test]
    fn test_collide_with_calls_back_once_with_final_state() {
        let mut c = collider(center_map(), 50);
        let mut calls = 0;
        let mut seen = (0usize, DVec2::ZERO);
        let out = c.collide_with(
            Rect::new(20.0, 70.0, 10.0, 10.0),
            DVec2::new(40.0, 3.0),
            |contacts, resolved| {
                calls += 1;
                seen = (contacts.len(), resolved);
            },
        );
        assert_eq!(calls, 1);
        assert_eq!(seen, (1, out));
        assert_eq!(out, DVec2::new(20.0, 3.0));

        // Invoked even when nothing was hit or nothing moved
        let mut calls = 0;
        c.collide_with(Rect::new(0.0, 0.0, 1.0, 1.0), DVec2::ZERO, |_, _| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_collide_until_stops_axis_scan_early() {
        // Two rows with walls at different distances; row 0 (looser) is scanned first
        let map = vec![vec![0u8, 0, 0, 1], vec![0, 0, 1, 0]];
        let mut c = collider(map, 10);
        let rect = Rect::new(0.0, 5.0, 5.0, 10.0);

        let mut visited = Vec::new();
        let out = c.collide_until(rect, DVec2::new(40.0, 0.0), |hit| {
            visited.push(hit.tile);
            true
        });
        // First contact wins: the row 1 wall is never reached
        assert_eq!(out.x, 25.0);
        assert_eq!(visited, vec![UVec2::new(3, 0)]);
        assert_eq!(c.contacts().len(), 1);

        // Never stopping is the same as the baseline scan
        let out = c.collide_until(rect, DVec2::new(40.0, 0.0), |_| false);
        assert_eq!(out.x, 15.0);
        assert_eq!(c.contacts().len(), 2);
    }

    #[test]
    fn test_collide_until_still_sweeps_second_axis() {
        let mut c = collider(corner_map(), 10);
        let out = c.collide_until(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(12.0, 8.0), |_| true);
        assert_eq!(out, DVec2::new(5.0, 5.0));
        assert_eq!(c.contacts().len(), 2);
    }

    #[test]
    fn test_contact_buffer_is_cleared_and_reused() {
        let mut c = collider(center_map(), 50);
        c.collide(Rect::new(20.0, 70.0, 10.0, 10.0), DVec2::new(40.0, 0.0));
        assert_eq!(c.contacts().len(), 1);
        let cap = c.contacts.capacity();
        c.collide(Rect::new(20.0, 20.0, 10.0, 10.0), DVec2::new(1.0, 0.0));
        assert!(c.contacts().is_empty());
        assert_eq!(c.contacts.capacity(), cap);
    }

    #[test]
    fn test_stats_and_tilemap_access() {
        let mut c: TileCollider<u8, TileMap<u8>> =
            TileCollider::new(TileMap::new(4, 4), 8, 8).unwrap();
        let out = c.collide(Rect::new(1.0, 1.0, 4.0, 4.0), DVec2::new(20.0, 0.0));
        assert_eq!(out.x, 20.0);
        assert_eq!(c.stats().axes_swept, 1);
        assert!(c.stats().tiles_scanned > 0);
        assert_eq!(c.stats().solid_tiles, 0);

        c.tilemap_mut().set(2, 0, 5);
        let out = c.collide(Rect::new(1.0, 1.0, 4.0, 4.0), DVec2::new(20.0, 0.0));
        assert_eq!(out.x, 11.0);
        assert_eq!(c.stats().contacts, 1);

        let old = c.set_tilemap(TileMap::new(1, 1));
        assert_eq!(old.get(2, 0), Some(5));
        assert_eq!(c.tilemap().width(), 1);
        assert_eq!(c.tile_size(), UVec2::new(8, 8));
    }

    #[test]
    fn test_borrowed_grid() {
        let map = [[0u8, 0, 1]];
        let mut c: TileCollider<u8, &[[u8; 3]; 1]> = TileCollider::new(&map, 10, 10).unwrap();
        let out = c.collide(Rect::new(0.0, 0.0, 5.0, 5.0), DVec2::new(30.0, 0.0));
        assert_eq!(out.x, 15.0);
    }
}
