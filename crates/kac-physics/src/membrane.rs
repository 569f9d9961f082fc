//! Physical properties of the membrane material.

use std::f64::consts::LN_10;

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, PhysicsResult};

/// Tension, density and damping of a drum membrane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Membrane {
    /// Tension at rest (N/m).
    #[serde(default = "default_tension")]
    pub tension: f64,
    /// Surface density (kg/m^2).
    #[serde(default = "default_density")]
    pub density: f64,
    /// Time for the vibration to decay by 60 dB (seconds).
    #[serde(default = "default_decay_time")]
    pub decay_time: f64,
}

fn default_tension() -> f64 {
    2000.0
}

fn default_density() -> f64 {
    0.26
}

fn default_decay_time() -> f64 {
    1.0
}

impl Default for Membrane {
    fn default() -> Self {
        Self {
            tension: default_tension(),
            density: default_density(),
            decay_time: default_decay_time(),
        }
    }
}

impl Membrane {
    /// Creates a membrane description.
    pub fn new(tension: f64, density: f64, decay_time: f64) -> Self {
        Self {
            tension,
            density,
            decay_time,
        }
    }

    /// Checks that every property is finite and positive.
    pub fn validate(&self) -> PhysicsResult<()> {
        require_positive("tension", self.tension)?;
        require_positive("density", self.density)?;
        require_positive("decay_time", self.decay_time)
    }

    /// Transverse wave speed `sqrt(tension / density)` in m/s.
    pub fn wave_speed(&self) -> f64 {
        (self.tension / self.density).sqrt()
    }

    /// Amplitude decay rate `3 ln(10) / T60` in 1/s, so that `exp(-rate * T60)`
    /// is -60 dB.
    pub fn decay_rate(&self) -> f64 {
        3.0 * LN_10 / self.decay_time
    }
}
