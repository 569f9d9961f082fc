//! Finite-difference time-domain synthesis of a struck membrane.
//!
//! The 2D wave equation is integrated with the explicit five-point scheme
//!
//! ```text
//! u[t+1](x, y) = c0 * (u[t](x, y+1) + u[t](x+1, y) + u[t](x, y-1) + u[t](x-1, y))
//!              + c1 * u[t](x, y) - c2 * u[t-1](x, y)
//! ```
//!
//! over the interior cells of a [`BoundaryMask`]; every other cell is held at
//! zero. The scheme is stable only for Courant numbers up to
//! [`COURANT_LIMIT_2D`]. This is a precondition: an unstable run is not
//! detected and simply diverges.

mod coefficients;
mod model;
mod simulation;

pub use coefficients::{StabilityCoefficients, COURANT_LIMIT_2D};
pub use model::FdtdModel;
pub use simulation::FdtdSimulation;

use crate::error::PhysicsResult;
use crate::grid::{ensure_same_dimensions, BoundaryMask, Grid, SamplePoint};
use crate::sampler::WaveformSampler;
use crate::waveform::Waveform;

/// Runs an FDTD simulation and records the displacement at `sample_point`.
///
/// The first two samples are read straight from `u0` and `u1`; each later
/// sample comes from the newly computed time level.
///
/// # Arguments
/// * `u0` - Displacement at `t = 0`
/// * `u1` - Displacement at `t = 1`
/// * `mask` - Interior/boundary flags, same dimensions as the grids
/// * `coefficients` - Update coefficients; must satisfy the stability bound
/// * `num_samples` - Length of the output waveform
/// * `sample_point` - Grid cell to record
///
/// # Errors
/// Dimension mismatch between `u0`, `u1` and `mask`, or a sample point outside
/// the grid. Both are reported before any time step runs.
pub fn synthesize_fdtd(
    u0: &Grid,
    u1: &Grid,
    mask: &BoundaryMask,
    coefficients: StabilityCoefficients,
    num_samples: usize,
    sample_point: SamplePoint,
) -> PhysicsResult<Waveform> {
    ensure_same_dimensions("u1", u0.dimensions(), u1.dimensions())?;
    ensure_same_dimensions("mask", u0.dimensions(), mask.dimensions())?;
    let sampler = WaveformSampler::new(sample_point, mask.dimensions())?;

    tracing::debug!(
        dimensions = ?mask.dimensions(),
        interior = mask.interior_count(),
        num_samples,
        "running fdtd simulation"
    );

    let mut samples = Vec::with_capacity(num_samples);
    samples.extend([sampler.read(u0), sampler.read(u1)].into_iter().take(num_samples));
    if samples.len() == num_samples {
        return Ok(Waveform::new(samples));
    }

    let mut simulation = FdtdSimulation::new(u0.clone(), u1.clone(), mask, coefficients)?;
    while samples.len() < num_samples {
        samples.push(sampler.read(simulation.step()));
    }
    Ok(Waveform::new(samples))
}
