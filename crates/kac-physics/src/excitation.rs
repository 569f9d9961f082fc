//! Excitation profiles: the initial displacement left by a strike.
//!
//! Every profile is a bump with peak `1.0` at its centre `mu` that is exactly
//! zero outside its support. Coordinates are measured in cells, so `mu` and the
//! spreads may fall between grid points.
//!
//! - raised cosine: `0.5 * (1 + cos(pi * l / sigma))` for `l <= sigma`, where
//!   `l` is the distance to `mu` (absolute in 1D, Euclidean in 2D),
//! - raised triangle: a piecewise-linear tent with an independent ramp length
//!   on each side of `mu`; the 2D form is the product of two 1D tents.

use std::f64::consts::PI;

use crate::error::{require_positive, PhysicsError, PhysicsResult};
use crate::grid::Grid;

/// Creates a one dimensional raised cosine of `size` cells centred at `mu`.
///
/// # Arguments
/// * `size` - Number of cells
/// * `mu` - Centre of the bump, in cells
/// * `sigma` - Support radius, in cells (> 0)
pub fn raised_cosine_1d(size: usize, mu: f64, sigma: f64) -> PhysicsResult<Vec<f64>> {
    require_size("size", size)?;
    require_positive("sigma", sigma)?;
    Ok((0..size)
        .map(|x| raised_cosine(x as f64 - mu, sigma))
        .collect())
}

/// Creates a two dimensional raised cosine centred at `mu = (x, y)`.
///
/// The profile depends only on the Euclidean distance to `mu`, so it is
/// radially symmetric.
pub fn raised_cosine_2d(
    size_x: usize,
    size_y: usize,
    mu: (f64, f64),
    sigma: f64,
) -> PhysicsResult<Grid> {
    require_size("size_x", size_x)?;
    require_size("size_y", size_y)?;
    require_positive("sigma", sigma)?;
    Ok(Grid::from_fn(size_x, size_y, |x, y| {
        let distance = (x as f64 - mu.0).hypot(y as f64 - mu.1);
        raised_cosine(distance, sigma)
    }))
}

/// Creates a one dimensional raised triangle centred at `mu`.
///
/// The tent rises linearly over `x_a` cells before `mu` and falls over `x_b`
/// cells after it.
pub fn raised_triangle_1d(size: usize, mu: f64, x_a: f64, x_b: f64) -> PhysicsResult<Vec<f64>> {
    require_size("size", size)?;
    require_positive("x_a", x_a)?;
    require_positive("x_b", x_b)?;
    Ok((0..size)
        .map(|x| tent(x as f64, mu, x_a, x_b))
        .collect())
}

/// Creates a two dimensional raised triangle centred at `mu = (x, y)`.
///
/// `Λ(x, y) = Λx(x) * Λy(y)`, with ramp lengths `x_a`/`x_b` along `x` and
/// `y_a`/`y_b` along `y`.
#[allow(clippy::too_many_arguments)]
pub fn raised_triangle_2d(
    size_x: usize,
    size_y: usize,
    mu: (f64, f64),
    x_a: f64,
    x_b: f64,
    y_a: f64,
    y_b: f64,
) -> PhysicsResult<Grid> {
    require_size("size_x", size_x)?;
    require_size("size_y", size_y)?;
    require_positive("x_a", x_a)?;
    require_positive("x_b", x_b)?;
    require_positive("y_a", y_a)?;
    require_positive("y_b", y_b)?;

    let along_x: Vec<f64> = (0..size_x).map(|x| tent(x as f64, mu.0, x_a, x_b)).collect();
    let along_y: Vec<f64> = (0..size_y).map(|y| tent(y as f64, mu.1, y_a, y_b)).collect();
    Ok(Grid::from_fn(size_x, size_y, |x, y| along_x[x] * along_y[y]))
}

fn raised_cosine(distance: f64, sigma: f64) -> f64 {
    if distance.abs() <= sigma {
        0.5 * (1.0 + (PI * distance / sigma).cos())
    } else {
        0.0
    }
}

fn tent(x: f64, mu: f64, a: f64, b: f64) -> f64 {
    let start = mu - a;
    let end = mu + b;
    if x < start || x > end {
        0.0
    } else if x <= mu {
        (x - start) / a
    } else {
        1.0 - (x - mu) / b
    }
}

fn require_size(name: &str, size: usize) -> PhysicsResult<()> {
    if size == 0 {
        Err(PhysicsError::invalid_param(name, "must be at least 1"))
    } else {
        Ok(())
    }
}
