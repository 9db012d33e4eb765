use core::fmt::Debug;

use glam::{DVec2, IVec2, UVec2};

/// Integer types usable as tile identifiers.
///
/// `Default::default()` (zero) is the default non-solid marker.
pub trait TileId: Copy + PartialEq + Default + Debug {}

macro_rules! impl_tile_id {
    ($($t:ty),*) => { $(impl TileId for $t {})* };
}

impl_tile_id!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Sweep axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component index into a `DVec2`/`UVec2`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The other axis.
    #[inline]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Build grid coordinates from an index along this axis and one across it.
    #[inline]
    pub fn compose(self, along: i64, across: i64) -> (i64, i64) {
        match self {
            Axis::X => (along, across),
            Axis::Y => (across, along),
        }
    }

    /// Unit vector on this axis scaled by `sign` (-1, 0 or 1).
    #[inline]
    pub fn unit(self, sign: i32) -> IVec2 {
        match self {
            Axis::X => IVec2::new(sign, 0),
            Axis::Y => IVec2::new(0, sign),
        }
    }
}

/// Axis-aligned rectangle given by its upper-left corner and size (world units, y down).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Lower-right corner.
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.pos + self.size
    }

    /// Copy of this rect moved by `delta`.
    #[inline]
    pub fn translate(&self, delta: DVec2) -> Rect {
        Rect {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Inclusive tile index range covered along `axis`.
    ///
    /// An edge lying exactly on a grid line does not cover the tile beyond it, so the
    /// range may be empty (`first > last`) only for degenerate sizes.
    #[inline]
    pub fn tile_span(&self, axis: Axis, tile_size: UVec2) -> (i64, i64) {
        let i = axis.index();
        let ts = tile_size[i] as f64;
        let first = (self.pos[i] / ts).floor() as i64;
        let last = ((self.pos[i] + self.size[i]) / ts).ceil() as i64 - 1;
        (first, last)
    }
}

/// One tile that constrained the most recent movement query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactInfo<T> {
    /// Identifier of the solid tile.
    pub tile_id: T,
    /// Column/row of the tile in the grid.
    pub tile: UVec2,
    /// Points from the tile toward the rect; exactly one component is non-zero.
    pub normal: IVec2,
}

impl<T> ContactInfo<T> {
    /// Contact below the rect (blocked moving down).
    pub fn is_floor(&self) -> bool {
        self.normal == IVec2::NEG_Y
    }

    /// Contact above the rect (blocked moving up).
    pub fn is_ceiling(&self) -> bool {
        self.normal == IVec2::Y
    }

    /// Contact to the left or right of the rect.
    pub fn is_wall(&self) -> bool {
        self.normal.x != 0
    }
}

/// Collider configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColliderConfig<T> {
    /// Scan for overlaps even when the requested movement is zero.
    pub static_check: bool,
    /// Tile ID treated as empty space; every other ID is solid.
    pub non_solid: T,
}

impl<T: TileId> Default for ColliderConfig<T> {
    fn default() -> Self {
        Self {
            static_check: false,
            non_solid: T::default(),
        }
    }
}

/// Debug counters for the most recent query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepStats {
    /// Number of single-axis sweeps run (0..=2).
    pub axes_swept: usize,
    /// In-bounds cells read from the grid.
    pub tiles_scanned: usize,
    /// Solid cells among those read.
    pub solid_tiles: usize,
    /// Contacts recorded.
    pub contacts: usize,
}
