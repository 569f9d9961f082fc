//! Reads the output signal of a simulation at a fixed grid location.

use crate::error::{PhysicsError, PhysicsResult};
use crate::grid::{Grid, SamplePoint};

/// A sample point that has been checked against one set of grid dimensions.
///
/// The bounds check happens once, in [`WaveformSampler::new`]; reads after
/// that are plain indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformSampler {
    point: SamplePoint,
    dimensions: (usize, usize),
}

impl WaveformSampler {
    /// Validates `point` against grids of `dimensions`.
    pub fn new(point: SamplePoint, dimensions: (usize, usize)) -> PhysicsResult<Self> {
        let (size_x, size_y) = dimensions;
        if point.x >= size_x || point.y >= size_y {
            return Err(PhysicsError::out_of_range(
                "sample point",
                format!(
                    "({}, {}) is outside a {}x{} grid",
                    point.x, point.y, size_x, size_y
                ),
            ));
        }
        Ok(Self { point, dimensions })
    }

    /// Reads the displacement at the sample point.
    ///
    /// `grid` must have the dimensions this sampler was built for.
    pub fn read(&self, grid: &Grid) -> f64 {
        debug_assert_eq!(grid.dimensions(), self.dimensions);
        grid[(self.point.x, self.point.y)]
    }
}
