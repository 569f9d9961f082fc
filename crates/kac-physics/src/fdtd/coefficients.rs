//! Update coefficients of the explicit five-point scheme.

use std::f64::consts::FRAC_1_SQRT_2;

/// Largest Courant number for which the 2D explicit scheme is stable.
pub const COURANT_LIMIT_2D: f64 = FRAC_1_SQRT_2;

/// The `(c0, c1, c2)` triple of the update
/// `u_next = c0 * (sum of four neighbours) + c1 * u_cur - c2 * u_prev`.
///
/// Nothing here checks stability. Coefficients built from a Courant number
/// above [`COURANT_LIMIT_2D`] make the simulation diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityCoefficients {
    /// Neighbour weight.
    pub c0: f64,
    /// Weight of the current cell.
    pub c1: f64,
    /// Weight of the cell one step back.
    pub c2: f64,
}

impl StabilityCoefficients {
    /// Wraps an explicit coefficient triple.
    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    /// Coefficients of the lossless scheme: `(λ², 2 - 4λ², 1)`.
    pub fn lossless(courant: f64) -> Self {
        Self::with_loss(courant, 0.0)
    }

    /// Coefficients of the scheme with frequency-independent loss.
    ///
    /// `loss` is the decay rate times the time step, `σ·k`. All three terms
    /// are divided by `1 + σ·k`, and the history term becomes
    /// `(1 - σ·k) / (1 + σ·k)`.
    pub fn with_loss(courant: f64, loss: f64) -> Self {
        let lambda_sq = courant * courant;
        let scale = 1.0 + loss;
        Self {
            c0: lambda_sq / scale,
            c1: (2.0 - 4.0 * lambda_sq) / scale,
            c2: (1.0 - loss) / scale,
        }
    }
}
