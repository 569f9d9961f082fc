//! Nodal-line (Chladni) patterns of single modes.

use super::modes::{Eigenmode, ModeIndex};
use crate::error::PhysicsResult;
use crate::grid::SamplePoint;
use crate::shape::DrumShape;

/// Cells of a `resolution`-wide raster that lie on a nodal line of mode
/// `index`.
///
/// The mode shape is sampled at the centre of every cell inside the membrane.
/// A cell is on a nodal line when its value is exactly zero or when its sign
/// differs from that of its +x or +y neighbour (neighbours outside the
/// membrane are ignored). The result is sorted by `(x, y)`.
///
/// # Errors
/// Invalid shape dimensions, a zero resolution or an index too large to
/// resolve.
pub fn chladni_pattern(
    shape: &DrumShape,
    index: ModeIndex,
    resolution: usize,
) -> PhysicsResult<Vec<SamplePoint>> {
    let raster = shape.raster(resolution, 0)?;
    let mask = raster.mask(shape);
    let mode = Eigenmode::new(*shape, index)?;
    let (size_x, size_y) = raster.dimensions();

    let value = |x: usize, y: usize| -> Option<f64> {
        if x < size_x && y < size_y && mask.is_interior(x, y) {
            Some(mode.displacement(raster.cell_centre(SamplePoint::new(x, y))))
        } else {
            None
        }
    };

    let mut pattern = Vec::new();
    for x in 0..size_x {
        for y in 0..size_y {
            let Some(v) = value(x, y) else {
                continue;
            };
            let crosses = |neighbour: Option<f64>| {
                neighbour.map_or(false, |n| n != 0.0 && v.signum() != n.signum())
            };
            if v == 0.0 || crosses(value(x + 1, y)) || crosses(value(x, y + 1)) {
                pattern.push(SamplePoint::new(x, y));
            }
        }
    }

    tracing::debug!(
        shape = shape.kind(),
        first = index.first,
        second = index.second,
        cells = pattern.len(),
        "computed chladni pattern"
    );
    Ok(pattern)
}
