use log::debug;
use thiserror::Error;

use super::*;

/// Code of a passable cell.
pub const EMPTY: TileCode = 0;

/// Code reported for any cell outside of the grid.
pub const BOUNDARY_WALL: TileCode = 1;

/// Which axis a mirror flips when a ray bounces off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Flips the `y` component of an incoming direction.
    Horizontal,
    /// Flips the `x` component of an incoming direction.
    Vertical,
}

impl Orientation {
    /// Returns the direction a ray travelling along `direction` leaves this mirror with.
    #[inline]
    #[must_use]
    pub fn reflect(self, direction: Vector) -> Vector {
        match self {
            Self::Horizontal => direction.with_y(-direction.y()),
            Self::Vertical => direction.with_x(-direction.x()),
        }
    }
}

/// A registered mirror, identified by the cell it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MirrorTile {
    pub x: i64,
    pub y: i64,
    pub orientation: Orientation,
}

impl MirrorTile {
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidLevel {
    #[error("the grid must contain at least one row and one column")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("mirror at ({x}, {y}) lies outside of the {width}x{height} grid")]
    MirrorOutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("mirror at ({x}, {y}) is placed on an empty tile")]
    MirrorOnEmptyCell { x: i64, y: i64 },
    #[error("a mirror is already registered at ({x}, {y})")]
    DuplicateMirror { x: i64, y: i64 },
}

/// A rectangular matrix of tile codes, along with the mirrors registered on its cells.
///
/// Tiles are stored row-major. Mirror orientations are stored in a table of the same
/// layout, so looking one up costs the same as looking up a tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileCode>,
    mirrors: Vec<Option<Orientation>>,
}

impl Grid {
    /// Builds a grid from its rows, `rows[y][x]` being the code of cell `(x, y)`.
    ///
    /// Fails if there are no rows, if the rows are empty, or if they don't all have the same length.
    pub fn new<R: AsRef<[TileCode]>>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, InvalidLevel> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, codes) in rows.into_iter().enumerate() {
            let codes = codes.as_ref();
            let expected = *width.get_or_insert(codes.len());

            if codes.len() != expected {
                return Err(InvalidLevel::Jagged {
                    row,
                    expected,
                    found: codes.len(),
                });
            }

            tiles.extend_from_slice(codes);
            height += 1;
        }

        let width = width.filter(|&w| w > 0).ok_or(InvalidLevel::Empty)?;

        Ok(Self {
            width,
            height,
            mirrors: vec![None; tiles.len()],
            tiles,
        })
    }

    /// Registers every mirror in `mirrors`, see [`Self::add_mirror`].
    pub fn with_mirrors(
        mut self,
        mirrors: impl IntoIterator<Item = MirrorTile>,
    ) -> Result<Self, InvalidLevel> {
        for mirror in mirrors {
            self.add_mirror(mirror)?;
        }
        Ok(self)
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// The code of cell `(x, y)`, or [`BOUNDARY_WALL`] if it lies outside of the grid.
    #[inline]
    pub fn tile_at(&self, x: i64, y: i64) -> TileCode {
        self.index(x, y).map_or(BOUNDARY_WALL, |i| self.tiles[i])
    }

    #[inline]
    pub fn is_blocked(&self, x: i64, y: i64) -> bool {
        self.tile_at(x, y) != EMPTY
    }

    /// The mirror registered on cell `(x, y)`, if any.
    #[inline]
    pub fn mirror_at(&self, x: i64, y: i64) -> Option<MirrorTile> {
        self.index(x, y)
            .and_then(|i| self.mirrors[i])
            .map(|orientation| MirrorTile::new(x, y, orientation))
    }

    /// Registers `mirror` on the cell it names.
    ///
    /// The cell must lie inside the grid, hold a non-empty tile, and not already carry a mirror.
    pub fn add_mirror(&mut self, mirror: MirrorTile) -> Result<(), InvalidLevel> {
        let MirrorTile { x, y, orientation } = mirror;

        let i = self.index(x, y).ok_or(InvalidLevel::MirrorOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;

        if self.tiles[i] == EMPTY {
            return Err(InvalidLevel::MirrorOnEmptyCell { x, y });
        }

        let slot = &mut self.mirrors[i];
        if slot.is_some() {
            return Err(InvalidLevel::DuplicateMirror { x, y });
        }
        *slot = Some(orientation);

        debug!("registered {orientation:?} mirror at ({x}, {y})");
        Ok(())
    }

    /// Iterates over the rows of the grid, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[TileCode]> + '_ {
        self.tiles.chunks_exact(self.width)
    }

    /// Iterates over the registered mirrors, in row-major order.
    pub fn mirrors(&self) -> impl Iterator<Item = MirrorTile> + '_ {
        self.mirrors.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|orientation| {
                MirrorTile::new((i % self.width) as i64, (i / self.width) as i64, orientation)
            })
        })
    }
}
