//! Physical setup of an FDTD run: grid size, time step and coefficients
//! derived from a drum shape and its membrane.

use super::coefficients::{StabilityCoefficients, COURANT_LIMIT_2D};
use super::synthesize_fdtd;
use crate::error::{require_positive, PhysicsError, PhysicsResult};
use crate::excitation::raised_cosine_2d;
use crate::grid::{BoundaryMask, Grid, SamplePoint};
use crate::membrane::Membrane;
use crate::shape::{DrumShape, Point, Raster};
use crate::waveform::Waveform;

/// Fewest grid cells allowed across the longest extent of a shape.
const MIN_RESOLUTION: usize = 3;

/// A drum discretised for FDTD synthesis.
///
/// With `k = 1 / sample_rate` and `γ = c / L` (`c` the wave speed, `L` the
/// longest extent of the shape), the grid spacing is `L / H` for `H` cells
/// across `L`, and the Courant number is `λ = γ·k·H`. By default `H` is the
/// largest value keeping `λ` within [`COURANT_LIMIT_2D`].
#[derive(Debug, Clone)]
pub struct FdtdModel {
    shape: DrumShape,
    membrane: Membrane,
    sample_rate: f64,
    raster: Raster,
    mask: BoundaryMask,
    courant: f64,
    coefficients: StabilityCoefficients,
}

impl FdtdModel {
    /// Builds the finest stable discretisation for `sample_rate`.
    pub fn new(shape: DrumShape, membrane: Membrane, sample_rate: f64) -> PhysicsResult<Self> {
        let resolution = Self::max_resolution(&shape, &membrane, sample_rate)?;
        Self::with_resolution(shape, membrane, sample_rate, resolution)
    }

    /// Builds a discretisation with `resolution` cells across the longest
    /// extent. Coarser grids than the default lower the Courant number and
    /// run faster.
    ///
    /// # Errors
    /// Invalid shape, membrane or sample rate, or a resolution outside
    /// `3..=max_resolution`.
    pub fn with_resolution(
        shape: DrumShape,
        membrane: Membrane,
        sample_rate: f64,
        resolution: usize,
    ) -> PhysicsResult<Self> {
        let max = Self::max_resolution(&shape, &membrane, sample_rate)?;
        if !(MIN_RESOLUTION..=max).contains(&resolution) {
            return Err(PhysicsError::invalid_param(
                "resolution",
                format!("must be between {} and {}, got {}", MIN_RESOLUTION, max, resolution),
            ));
        }

        let k = 1.0 / sample_rate;
        let gamma = membrane.wave_speed() / shape.longest_extent();
        let courant = gamma * k * resolution as f64;
        let coefficients = StabilityCoefficients::with_loss(courant, membrane.decay_rate() * k);

        let raster = shape.raster(resolution, 1)?;
        let mask = raster.mask(&shape);

        tracing::debug!(
            shape = shape.kind(),
            resolution,
            courant,
            dimensions = ?raster.dimensions(),
            interior = mask.interior_count(),
            "built fdtd model"
        );

        Ok(Self {
            shape,
            membrane,
            sample_rate,
            raster,
            mask,
            courant,
            coefficients,
        })
    }

    /// Largest number of cells across the longest extent that keeps the
    /// scheme stable at `sample_rate`.
    pub fn max_resolution(
        shape: &DrumShape,
        membrane: &Membrane,
        sample_rate: f64,
    ) -> PhysicsResult<usize> {
        shape.validate()?;
        membrane.validate()?;
        require_positive("sample_rate", sample_rate)?;

        let gamma = membrane.wave_speed() / shape.longest_extent();
        let cells = (COURANT_LIMIT_2D * sample_rate / gamma).floor();
        if cells < MIN_RESOLUTION as f64 {
            return Err(PhysicsError::invalid_param(
                "sample_rate",
                format!(
                    "{} Hz leaves fewer than {} stable grid cells across the {} membrane",
                    sample_rate,
                    MIN_RESOLUTION,
                    shape.kind()
                ),
            ));
        }
        Ok(cells as usize)
    }

    /// The modelled shape.
    pub fn shape(&self) -> &DrumShape {
        &self.shape
    }

    /// The modelled membrane.
    pub fn membrane(&self) -> &Membrane {
        &self.membrane
    }

    /// Samples per second.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Cell layout of the grid, including the boundary ring.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Interior/boundary flags of the grid.
    pub fn mask(&self) -> &BoundaryMask {
        &self.mask
    }

    /// Courant number `λ`.
    pub fn courant(&self) -> f64 {
        self.courant
    }

    /// Update coefficients, including loss.
    pub fn coefficients(&self) -> StabilityCoefficients {
        self.coefficients
    }

    /// Strikes the membrane at `strike` and records `num_samples` samples at
    /// `pickup` (the strike point when `None`).
    ///
    /// The strike is a raised cosine of `excitation_radius` cells placed in
    /// `u1`, clipped to the interior; `u0` is zero.
    pub fn strike(
        &self,
        strike: Point,
        pickup: Option<Point>,
        excitation_radius: f64,
        num_samples: usize,
    ) -> PhysicsResult<Waveform> {
        self.shape.require_inside("strike", strike)?;
        let pickup = pickup.unwrap_or(strike);
        self.shape.require_inside("pickup", pickup)?;
        let pickup_cell = self.raster.cell_of(pickup)?;

        let (size_x, size_y) = self.raster.dimensions();
        let mut u1 = raised_cosine_2d(size_x, size_y, self.grid_position(strike), excitation_radius)?;
        for x in 0..size_x {
            for y in 0..size_y {
                if !self.mask.is_interior(x, y) {
                    u1[(x, y)] = 0.0;
                }
            }
        }
        let u0 = Grid::zeros(size_x, size_y);

        synthesize_fdtd(&u0, &u1, &self.mask, self.coefficients, num_samples, pickup_cell)
    }

    /// Continuous grid coordinates of `p`, in cells. Cell centres sit on
    /// whole numbers.
    fn grid_position(&self, p: Point) -> (f64, f64) {
        let origin = self.raster.cell_centre(SamplePoint::new(0, 0));
        let spacing = self.raster.spacing();
        ((p.x - origin.x) / spacing, (p.y - origin.y) / spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snare() -> (DrumShape, Membrane) {
        (DrumShape::Circular { radius: 0.2 }, Membrane::default())
    }

    #[test]
    fn test_default_resolution_is_stable() {
        let (shape, membrane) = snare();
        let model = FdtdModel::new(shape, membrane, 8000.0).unwrap();
        assert!(model.courant() <= COURANT_LIMIT_2D);
        assert!(model.courant() > COURANT_LIMIT_2D * 0.9);
        assert_eq!(model.raster().dimensions(), model.mask().dimensions());
    }

    #[test]
    fn test_resolution_bounds() {
        let (shape, membrane) = snare();
        let max = FdtdModel::max_resolution(&shape, &membrane, 8000.0).unwrap();
        assert!(FdtdModel::with_resolution(shape, membrane, 8000.0, max + 1).is_err());
        assert!(FdtdModel::with_resolution(shape, membrane, 8000.0, 2).is_err());

        let coarse = FdtdModel::with_resolution(shape, membrane, 8000.0, 10).unwrap();
        assert_eq!(coarse.raster().dimensions(), (12, 12));
    }

    #[test]
    fn test_sample_rate_too_low() {
        let (shape, membrane) = snare();
        let err = FdtdModel::new(shape, membrane, 10.0).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidParameter { .. }));
    }

    #[test]
    fn test_strike_outside_shape() {
        let (shape, membrane) = snare();
        let model = FdtdModel::with_resolution(shape, membrane, 8000.0, 16).unwrap();
        let err = model
            .strike(Point::new(0.3, 0.0), None, 2.0, 16)
            .unwrap_err();
        assert!(matches!(err, PhysicsError::OutOfRange { .. }));
    }

    #[test]
    fn test_strike_rings_and_decays() {
        let (shape, membrane) = snare();
        let model = FdtdModel::with_resolution(shape, membrane, 8000.0, 16).unwrap();
        let w = model
            .strike(Point::new(0.02, 0.03), None, 2.0, 8000)
            .unwrap();
        assert_eq!(w.len(), 8000);
        assert_eq!(w[0], 0.0);
        assert!(w[1] > 0.0);

        let head = w.as_slice()[..800].iter().fold(0.0_f64, |a, s| a.max(s.abs()));
        let tail = w.as_slice()[7200..].iter().fold(0.0_f64, |a, s| a.max(s.abs()));
        assert!(tail < head * 0.05, "head {} tail {}", head, tail);
    }

    #[test]
    fn test_pickup_defaults_to_strike() {
        let (shape, membrane) = snare();
        let model = FdtdModel::with_resolution(shape, membrane, 8000.0, 16).unwrap();
        let strike = Point::new(-0.05, 0.04);
        let implicit = model.strike(strike, None, 2.0, 64).unwrap();
        let explicit = model.strike(strike, Some(strike), 2.0, 64).unwrap();
        assert_eq!(implicit, explicit);
    }
}
