//! Single-axis sweep arithmetic shared by both axes.
//!
//! Coordinates here are one-dimensional: `pos`/`size` are the rect's extent on the
//! sweep axis and `ts` is the tile size on that axis.

use glam::{DVec2, IVec2};

use crate::types::Rect;

/// Number of tile lines to scan for a movement of `movement` (at least one, plus one of slack).
#[inline]
pub fn check_limit(movement: f64, ts: f64) -> i64 {
    let tiles = (movement.abs() / ts).ceil() as i64;
    tiles.saturating_add(1).max(1)
}

/// Index of the first tile line in the direction of travel.
///
/// Moving positively this is the line containing the leading edge (or the next one when
/// the edge sits on a grid line); moving negatively it is the line whose right/bottom
/// face is at or behind the leading edge.
#[inline]
pub fn leading_index(pos: f64, size: f64, movement: f64, ts: f64) -> i64 {
    if movement > 0.0 {
        ((pos + size) / ts).floor() as i64
    } else {
        ((pos / ts).ceil() as i64).saturating_sub(1)
    }
}

/// Movement that puts the leading edge flush with the near face of tile line `index`.
///
/// Never reverses direction: a tile already overlapping the leading edge yields zero.
#[inline]
pub fn flush_candidate(pos: f64, size: f64, movement: f64, index: i64, ts: f64) -> f64 {
    if movement > 0.0 {
        let near_face = index as f64 * ts;
        (near_face - (pos + size)).max(0.0)
    } else {
        let near_face = (index as f64 + 1.0) * ts;
        (near_face - pos).min(0.0)
    }
}

/// Whether `candidate` is at least as restrictive as the current `bound`.
#[inline]
pub fn is_tighter(candidate: f64, bound: f64, movement: f64) -> bool {
    if movement > 0.0 {
        candidate <= bound
    } else {
        candidate >= bound
    }
}

/// Normal of the face with the smallest penetration when `rect` overlaps the tile
/// spanning `tile_min..tile_max`.
///
/// Ties resolve in the order (-1,0), (1,0), (0,-1), (0,1).
pub fn penetration_normal(rect: &Rect, tile_min: DVec2, tile_max: DVec2) -> IVec2 {
    let faces = [
        (rect.right() - tile_min.x, IVec2::NEG_X),
        (tile_max.x - rect.pos.x, IVec2::X),
        (rect.bottom() - tile_min.y, IVec2::NEG_Y),
        (tile_max.y - rect.pos.y, IVec2::Y),
    ];
    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }
    best.1
}
