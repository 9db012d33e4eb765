//! `TileGrid` storage backends.

use crate::api::TileGrid;
use crate::types::TileId;

/// Flat row-major grid with a fixed width.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap<T> {
    width: usize,
    height: usize,
    tiles: Vec<T>,
}

impl<T: TileId> TileMap<T> {
    /// Grid of `width * height` cells, all set to `fill`.
    pub fn filled(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Grid of empty (`T::default()`) cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Wrap existing row-major storage. Returns `None` if `tiles.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, tiles: Vec<T>) -> Option<Self> {
        if width.checked_mul(height)? != tiles.len() {
            return None;
        }
        Some(Self { width, height, tiles })
    }

    /// Copy a possibly jagged nested grid; missing cells become `T::default()`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut map = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            let row = row.as_ref();
            map.tiles[start..start + row.len()].copy_from_slice(row);
        }
        map
    }

    /// Overwrite one cell. Out-of-range writes are ignored and return `false`.
    pub fn set(&mut self, x: usize, y: usize, id: T) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.tiles[y * self.width + x] = id;
        true
    }

    pub fn as_slice(&self) -> &[T] {
        &self.tiles
    }
}

impl<T: TileId> TileGrid<T> for TileMap<T> {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x).copied()
    }
}

impl<T: TileId> TileGrid<T> for [Vec<T>] {
    fn height(&self) -> usize {
        self.len()
    }

    fn width(&self) -> usize {
        self.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<T> {
        let row: &Vec<T> = self.iter().nth(y)?;
        row.as_slice().get(x).copied()
    }
}

impl<T: TileId> TileGrid<T> for Vec<Vec<T>> {
    fn height(&self) -> usize {
        self.len()
    }

    fn width(&self) -> usize {
        self.as_slice().width()
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<T> {
        TileGrid::get(self.as_slice(), x, y)
    }
}

impl<T: TileId, const W: usize, const H: usize> TileGrid<T> for [[T; W]; H] {
    fn height(&self) -> usize {
        H
    }

    fn width(&self) -> usize {
        if H == 0 { 0 } else { W }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<T> {
        let row: &[T] = self.as_slice().get(y)?;
        row.get(x).copied()
    }
}

impl<T, G: TileGrid<T> + ?Sized> TileGrid<T> for &G {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<T> {
        (**self).get(x, y)
    }
}
