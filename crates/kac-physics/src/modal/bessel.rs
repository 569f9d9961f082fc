//! Bessel functions of the first kind and their positive zeros.

use std::f64::consts::PI;

use crate::error::{PhysicsError, PhysicsResult};

/// Step of the sign-change scan used to bracket zeros.
const ZERO_SCAN_STEP: f64 = 0.1;

/// Bisection rounds after a zero is bracketed.
const BISECTION_ROUNDS: usize = 100;

/// Evaluates `J_n(x)` for integer order `n`.
///
/// Uses Bessel's integral `J_n(x) = (1/π) ∫₀^π cos(nτ - x sin τ) dτ` with the
/// midpoint rule. The integrand is smooth and periodic, so the rule converges
/// exponentially once the node count exceeds `|n| + |x|`.
pub fn bessel_j(n: i32, x: f64) -> f64 {
    let order = f64::from(n);
    let points = ((2.0 * (order.abs() + x.abs())).ceil() as usize + 32).max(64);
    let step = PI / points as f64;
    let sum: f64 = (0..points)
        .map(|i| {
            let tau = (i as f64 + 0.5) * step;
            (order * tau - x * tau.sin()).cos()
        })
        .sum();
    sum / points as f64
}

/// Returns the `m`-th positive zero of `J_n` (`m` counts from 1).
///
/// Zeros are bracketed by scanning for sign changes starting at `x = n` (every
/// positive zero of `J_n` lies above `n`), then refined by bisection.
///
/// # Errors
/// `m == 0`, or an order too large for [`bessel_j`].
pub fn bessel_j_zero(n: u32, m: u32) -> PhysicsResult<f64> {
    if m == 0 {
        return Err(PhysicsError::invalid_param("m", "Bessel zeros are counted from 1"));
    }
    let order = i32::try_from(n)
        .map_err(|_| PhysicsError::invalid_param("n", format!("order {} is too large", n)))?;

    let mut lo = f64::from(n).max(ZERO_SCAN_STEP);
    let mut f_lo = bessel_j(order, lo);
    let mut found = 0;
    loop {
        let hi = lo + ZERO_SCAN_STEP;
        let f_hi = bessel_j(order, hi);
        if f_hi == 0.0 {
            found += 1;
            if found == m {
                return Ok(hi);
            }
        } else if f_lo != 0.0 && f_lo.signum() != f_hi.signum() {
            found += 1;
            if found == m {
                return Ok(bisect(order, lo, hi, f_lo));
            }
        }
        lo = hi;
        f_lo = f_hi;
    }
}

fn bisect(order: i32, mut lo: f64, mut hi: f64, mut f_lo: f64) -> f64 {
    for _ in 0..BISECTION_ROUNDS {
        let mid = 0.5 * (lo + hi);
        let f_mid = bessel_j(order, mid);
        if f_mid == 0.0 {
            return mid;
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_bessel_values() {
        assert_close(bessel_j(0, 0.0), 1.0, 1e-14);
        assert_close(bessel_j(3, 0.0), 0.0, 1e-14);
        assert_close(bessel_j(0, 1.0), 0.765_197_686_557_966_6, 1e-12);
        assert_close(bessel_j(1, 1.0), 0.440_050_585_744_933_5, 1e-12);
        assert_close(bessel_j(2, 5.0), 0.046_565_116_277_752_2, 1e-12);
        assert_close(bessel_j(0, 20.0), 0.167_024_664_340_583_1, 1e-12);
    }

    #[test]
    fn test_negative_order_and_argument() {
        assert_close(bessel_j(-1, 2.0), -bessel_j(1, 2.0), 1e-13);
        assert_close(bessel_j(1, -2.0), -bessel_j(1, 2.0), 1e-13);
        assert_close(bessel_j(2, -2.0), bessel_j(2, 2.0), 1e-13);
    }

    #[test]
    fn test_bessel_zeros() {
        assert_close(bessel_j_zero(0, 1).unwrap(), 2.404_825_557_695_773, 1e-10);
        assert_close(bessel_j_zero(0, 2).unwrap(), 5.520_078_110_286_311, 1e-10);
        assert_close(bessel_j_zero(1, 1).unwrap(), 3.831_705_970_207_512, 1e-10);
        assert_close(bessel_j_zero(2, 3).unwrap(), 11.619_841_172_149_06, 1e-10);
        assert_close(bessel_j_zero(10, 1).unwrap(), 14.475_500_686_554_54, 1e-10);
    }

    #[test]
    fn test_zeros_are_increasing() {
        for n in 0..4 {
            let zeros: Vec<f64> = (1..6).map(|m| bessel_j_zero(n, m).unwrap()).collect();
            assert!(zeros.windows(2).all(|w| w[0] < w[1]));
            assert!(zeros[0] > f64::from(n));
        }
    }

    #[test]
    fn test_zeroth_zero_is_rejected() {
        let err = bessel_j_zero(0, 0).unwrap_err();
        assert_eq!(err.code(), "PHYS_002");
        assert!(bessel_j_zero(u32::MAX, 1).is_err());
    }
}
