//! Displacement grids and boundary masks.
//!
//! Both types are stored row-major with `x` as the outer index, so
//! `grid[(x, y)]` sits at `x * size_y + y`. One row of a grid is one `x`
//! slice, which is the unit the FDTD update parallelises over.

use std::ops::{Index, IndexMut};

use crate::error::{PhysicsError, PhysicsResult};

/// An integer `(x, y)` coordinate into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SamplePoint {
    /// Outer (row) index.
    pub x: usize,
    /// Inner (column) index.
    pub y: usize,
}

impl SamplePoint {
    /// Creates a new sample point.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for SamplePoint {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A two dimensional field of membrane displacements at one time instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size_x: usize,
    size_y: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Creates a grid of zeros.
    pub fn zeros(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            data: vec![0.0; size_x * size_y],
        }
    }

    /// Creates a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(size_x: usize, size_y: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(size_x * size_y);
        for x in 0..size_x {
            for y in 0..size_y {
                data.push(f(x, y));
            }
        }
        Self {
            size_x,
            size_y,
            data,
        }
    }

    /// Creates a grid from nested rows, `rows[x][y]`.
    ///
    /// Fails if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> PhysicsResult<Self> {
        let size_x = rows.len();
        let size_y = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(size_x * size_y);
        for (x, row) in rows.iter().enumerate() {
            if row.len() != size_y {
                return Err(PhysicsError::DimensionMismatch {
                    what: "grid row",
                    expected: (size_x, size_y),
                    found: (x, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            size_x,
            size_y,
            data,
        })
    }

    /// Returns `(size_x, size_y)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    /// Number of cells along `x`.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of cells along `y`.
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest absolute displacement in the grid.
    pub fn peak(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        &self.data[x * self.size_y + y]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        &mut self.data[x * self.size_y + y]
    }
}

/// Flags marking which grid cells belong to the vibrating membrane.
///
/// A zero flag pins the cell at zero displacement (Dirichlet boundary or
/// exterior); a nonzero flag marks an interior cell. Masks are immutable once
/// built and can be shared freely between simulations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMask {
    size_x: usize,
    size_y: usize,
    flags: Vec<u8>,
}

impl BoundaryMask {
    /// Creates a mask by evaluating `is_interior(x, y)` for every cell.
    pub fn from_fn(
        size_x: usize,
        size_y: usize,
        mut is_interior: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let mut flags = Vec::with_capacity(size_x * size_y);
        for x in 0..size_x {
            for y in 0..size_y {
                flags.push(u8::from(is_interior(x, y)));
            }
        }
        Self {
            size_x,
            size_y,
            flags,
        }
    }

    /// Creates a mask from nested rows of flags, `rows[x][y]`.
    pub fn from_rows(rows: &[Vec<u8>]) -> PhysicsResult<Self> {
        let size_x = rows.len();
        let size_y = rows.first().map_or(0, Vec::len);
        let mut flags = Vec::with_capacity(size_x * size_y);
        for (x, row) in rows.iter().enumerate() {
            if row.len() != size_y {
                return Err(PhysicsError::DimensionMismatch {
                    what: "mask row",
                    expected: (size_x, size_y),
                    found: (x, row.len()),
                });
            }
            flags.extend_from_slice(row);
        }
        Ok(Self {
            size_x,
            size_y,
            flags,
        })
    }

    /// Returns `(size_x, size_y)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    /// Whether `(x, y)` is an interior cell. Cells outside the mask are not.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x < self.size_x && y < self.size_y && self.flags[x * self.size_y + y] != 0
    }

    /// Whether `(x, y)` may be updated by the five-point stencil: interior and
    /// not on the outer one-cell ring.
    pub fn is_updatable(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x + 1 < self.size_x && y + 1 < self.size_y && self.is_interior(x, y)
    }

    /// Number of interior cells.
    pub fn interior_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f != 0).count()
    }

    /// Row-major view of the raw flags.
    pub fn as_slice(&self) -> &[u8] {
        &self.flags
    }
}

/// Anything that can rasterise a membrane outline into a [`BoundaryMask`].
///
/// Geometry lives on the producing side of this trait: the simulator only
/// consumes the finished mask and never calls back into the source.
pub trait BoundaryMaskSource {
    /// Rasterises the shape with `resolution` cells across its longest
    /// extent. Implementations must leave the outer one-cell ring of the mask
    /// as boundary.
    fn boundary_mask(&self, resolution: usize) -> PhysicsResult<BoundaryMask>;
}

impl BoundaryMaskSource for BoundaryMask {
    /// A prebuilt mask is its own source; `resolution` is ignored.
    fn boundary_mask(&self, _resolution: usize) -> PhysicsResult<BoundaryMask> {
        Ok(self.clone())
    }
}

/// Fails with [`PhysicsError::DimensionMismatch`] unless both dimensions agree.
pub(crate) fn ensure_same_dimensions(
    what: &'static str,
    expected: (usize, usize),
    found: (usize, usize),
) -> PhysicsResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PhysicsError::DimensionMismatch {
            what,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_indexing_is_x_major() {
        let grid = Grid::from_fn(3, 4, |x, y| (x * 10 + y) as f64);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid[(2, 3)], 23.0);
        assert_eq!(grid.as_slice()[4], 10.0);
    }

    #[test]
    fn test_grid_from_rows_rejects_ragged() {
        let rows = vec![vec![0.0, 1.0], vec![2.0]];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(PhysicsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_grid_peak() {
        let mut grid = Grid::zeros(2, 2);
        grid[(1, 0)] = -3.0;
        grid[(0, 1)] = 2.0;
        assert_eq!(grid.peak(), 3.0);
    }

    #[test]
    fn test_mask_updatable_excludes_outer_ring() {
        let mask = BoundaryMask::from_fn(4, 4, |_, _| true);
        assert!(mask.is_interior(0, 0));
        assert!(!mask.is_updatable(0, 2));
        assert!(!mask.is_updatable(3, 2));
        assert!(mask.is_updatable(1, 2));
        assert_eq!(mask.interior_count(), 16);
    }

    #[test]
    fn test_mask_from_rows() {
        let mask = BoundaryMask::from_rows(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(mask.dimensions(), (3, 3));
        assert!(mask.is_updatable(1, 1));
        assert_eq!(mask.interior_count(), 1);
    }

    #[test]
    fn test_ensure_same_dimensions() {
        assert!(ensure_same_dimensions("u1", (2, 3), (2, 3)).is_ok());
        assert!(ensure_same_dimensions("u1", (2, 3), (3, 2)).is_err());
    }
}
