//! Eigenmodes of the canonical membranes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::bessel::{bessel_j, bessel_j_zero};
use crate::error::{PhysicsError, PhysicsResult};
use crate::shape::{DrumShape, Point};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Largest mode count accepted along either index.
pub const MAX_MODES_PER_AXIS: usize = 1024;

/// Zero-based index of a mode.
///
/// `(0, 0)` is the fundamental of every shape. For a circle `first` is the
/// Bessel order and `second` counts zeros from 0; for a rectangle they count
/// half-wavelengths along x and y; for a triangle they are the two lattice
/// indices, with `(i, j)` and `(j, i)` a degenerate pair of distinct shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModeIndex {
    /// First index.
    pub first: usize,
    /// Second index.
    pub second: usize,
}

impl ModeIndex {
    /// Creates a new mode index.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

impl From<(usize, usize)> for ModeIndex {
    fn from((first, second): (usize, usize)) -> Self {
        Self::new(first, second)
    }
}

/// Number of modes taken along each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeLimit {
    /// Count along the first index.
    pub first: usize,
    /// Count along the second index.
    pub second: usize,
}

impl Default for ModeLimit {
    fn default() -> Self {
        Self::square(10)
    }
}

impl ModeLimit {
    /// Creates a limit of `first` by `second` modes.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Creates a limit of `n` modes along both indices.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Checks that both counts lie in `1..=MAX_MODES_PER_AXIS`.
    pub fn validate(&self) -> PhysicsResult<()> {
        let range = 1..=MAX_MODES_PER_AXIS;
        if !range.contains(&self.first) || !range.contains(&self.second) {
            return Err(PhysicsError::invalid_param(
                "modes",
                format!(
                    "mode counts must be between 1 and {}, got {}x{}",
                    MAX_MODES_PER_AXIS, self.first, self.second
                ),
            ));
        }
        Ok(())
    }

    /// Every index below the limit, ordered by `first` then `second`.
    pub fn indices(&self) -> impl Iterator<Item = ModeIndex> {
        let second = self.second;
        (0..self.first).flat_map(move |i| (0..second).map(move |j| ModeIndex::new(i, j)))
    }

    /// Total number of indices below the limit.
    pub fn count(&self) -> usize {
        self.first.saturating_mul(self.second)
    }
}

/// One standing wave of a membrane, ready to be evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigenmode {
    shape: DrumShape,
    index: ModeIndex,
    /// Bessel zero for circles, unused otherwise.
    root: f64,
}

impl Eigenmode {
    /// Resolves mode `index` of `shape`.
    ///
    /// # Errors
    /// A circular mode index too large to look up its Bessel zero.
    pub fn new(shape: DrumShape, index: ModeIndex) -> PhysicsResult<Self> {
        let root = match shape {
            DrumShape::Circular { .. } => {
                let order = u32::try_from(index.first).ok();
                let zero = u32::try_from(index.second)
                    .ok()
                    .and_then(|second| second.checked_add(1));
                match (order, zero) {
                    (Some(order), Some(zero)) => bessel_j_zero(order, zero)?,
                    _ => {
                        return Err(PhysicsError::invalid_param(
                            "mode",
                            format!("index ({}, {}) is too large", index.first, index.second),
                        ))
                    }
                }
            }
            DrumShape::Rectangular { .. } | DrumShape::Triangular { .. } => 0.0,
        };
        Ok(Self { shape, index, root })
    }

    /// The mode index.
    pub fn index(&self) -> ModeIndex {
        self.index
    }

    /// Eigenfrequency in Hz for wave speed `c` (m/s).
    pub fn frequency(&self, c: f64) -> f64 {
        let (m, n) = self.orders();
        match self.shape {
            DrumShape::Circular { radius } => c * self.root / (2.0 * PI * radius),
            DrumShape::Rectangular { width, height } => {
                0.5 * c * ((m / width).powi(2) + (n / height).powi(2)).sqrt()
            }
            DrumShape::Triangular { side } => {
                2.0 * c / (3.0 * side) * (m * m + m * n + n * n).sqrt()
            }
        }
    }

    /// Displacement of the mode shape at `p` (shape-local coordinates).
    ///
    /// The shape is zero on the rim of the membrane. Its scale is fixed per
    /// shape kind and not normalised.
    pub fn displacement(&self, p: Point) -> f64 {
        let (m, n) = self.orders();
        match self.shape {
            DrumShape::Circular { radius } => {
                let r = p.x.hypot(p.y);
                let theta = p.y.atan2(p.x);
                let order = self.index.first as i32;
                bessel_j(order, self.root * r / radius) * (f64::from(order) * theta).cos()
            }
            DrumShape::Rectangular { width, height } => {
                (m * PI * p.x / width).sin() * (n * PI * p.y / height).sin()
            }
            DrumShape::Triangular { side } => triangle_displacement(side, m, n, p),
        }
    }

    /// One-based orders as used by the closed-form frequencies.
    fn orders(&self) -> (f64, f64) {
        (
            (self.index.first + 1) as f64,
            (self.index.second + 1) as f64,
        )
    }
}

/// Dirichlet eigenfunction of the equilateral triangle with lattice indices
/// `(m, n)`.
///
/// The wave vector `k = m·k1 + n·k2` lives on the reciprocal lattice spanned by
/// `k1`, `k2` of length `4π / (3·side)` at 60° and 120°. The sum of
/// `exp(i⟨g·k, p⟩)` over the rotations of the triangle minus the sum over its
/// reflections vanishes on all three sides, and so do its real and imaginary
/// parts. Swapping `m` and `n` leaves the imaginary part unchanged and only
/// flips the sign of the real part, so `m <= n` takes the imaginary (sine)
/// part and `m > n` the real (cosine) part of the degenerate pair.
fn triangle_displacement(side: f64, m: f64, n: f64, p: Point) -> f64 {
    let k = 4.0 * PI / (3.0 * side);
    let kx = k * 0.5 * (m - n);
    let ky = k * 0.5 * SQRT_3 * (m + n);
    let wave: fn(f64) -> f64 = if m <= n { f64::sin } else { f64::cos };

    let rotations = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];
    let mirrors = [0.0, PI / 3.0, 2.0 * PI / 3.0];

    let rotated: f64 = rotations
        .iter()
        .map(|&a| {
            let (s, c) = a.sin_cos();
            wave((c * kx - s * ky) * p.x + (s * kx + c * ky) * p.y)
        })
        .sum();
    let reflected: f64 = mirrors
        .iter()
        .map(|&a| {
            let (s, c) = (2.0 * a).sin_cos();
            wave((c * kx + s * ky) * p.x + (s * kx - c * ky) * p.y)
        })
        .sum();
    rotated - reflected
}
