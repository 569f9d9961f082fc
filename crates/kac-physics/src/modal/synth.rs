//! Additive synthesis from a set of decaying sinusoidal modes.

use std::f64::consts::PI;

use rayon::prelude::*;

use super::modes::{Eigenmode, ModeIndex, ModeLimit};
use crate::error::{require_positive, PhysicsError, PhysicsResult};
use crate::membrane::Membrane;
use crate::shape::{DrumShape, Point};
use crate::waveform::Waveform;

/// A mode excited by a particular strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalMode {
    /// Zero-based mode index.
    pub index: ModeIndex,
    /// Eigenfrequency (Hz).
    pub frequency: f64,
    /// Exponential decay rate (1/s).
    pub decay_rate: f64,
    /// Participation weight: the mode shape at the strike point.
    pub amplitude: f64,
}

/// Modal synthesis for one shape and membrane at a fixed sample rate.
#[derive(Debug, Clone)]
pub struct ModalSynthesizer {
    shape: DrumShape,
    membrane: Membrane,
    sample_rate: f64,
    modes: Vec<Eigenmode>,
}

impl ModalSynthesizer {
    /// Resolves every mode inside `limit` whose frequency is below Nyquist.
    pub fn new(
        shape: DrumShape,
        membrane: Membrane,
        limit: ModeLimit,
        sample_rate: f64,
    ) -> PhysicsResult<Self> {
        shape.validate()?;
        membrane.validate()?;
        limit.validate()?;
        require_positive("sample_rate", sample_rate)?;

        let c = membrane.wave_speed();
        let nyquist = sample_rate / 2.0;
        let mut modes = Vec::new();
        for index in limit.indices() {
            let mode = Eigenmode::new(shape, index)?;
            if mode.frequency(c) < nyquist {
                modes.push(mode);
            }
        }

        tracing::debug!(
            shape = shape.kind(),
            requested = limit.count(),
            kept = modes.len(),
            "resolved membrane modes"
        );

        Ok(Self {
            shape,
            membrane,
            sample_rate,
            modes,
        })
    }

    /// Number of modes below Nyquist.
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// The modes excited by a strike at `strike`.
    ///
    /// A strike on the rim excites nothing and returns no modes; a strike
    /// outside the membrane is an out-of-range error.
    pub fn modes(&self, strike: Point) -> PhysicsResult<Vec<ModalMode>> {
        if !self.shape.contains(strike) {
            if self.shape.contains_closed(strike) {
                return Ok(Vec::new());
            }
            return Err(PhysicsError::out_of_range(
                "strike",
                format!(
                    "({}, {}) is outside the {} membrane",
                    strike.x,
                    strike.y,
                    self.shape.kind()
                ),
            ));
        }

        let c = self.membrane.wave_speed();
        let decay_rate = self.membrane.decay_rate();
        Ok(self
            .modes
            .iter()
            .map(|mode| ModalMode {
                index: mode.index(),
                frequency: mode.frequency(c),
                decay_rate,
                amplitude: mode.displacement(strike),
            })
            .collect())
    }

    /// Renders `num_samples` samples of the membrane struck at `strike`.
    ///
    /// `w[t] = Σ A·exp(-σ·t/rate)·sin(2π·f·t/rate) / Σ|A|`. The result is
    /// silent when every weight is zero.
    pub fn synthesize(&self, strike: Point, num_samples: usize) -> PhysicsResult<Waveform> {
        let modes = self.modes(strike)?;
        let total: f64 = modes.iter().map(|m| m.amplitude.abs()).sum();
        if total == 0.0 {
            return Ok(Waveform::silence(num_samples));
        }

        tracing::trace!(modes = modes.len(), num_samples, "summing modes");

        let dt = 1.0 / self.sample_rate;
        let samples = (0..num_samples)
            .into_par_iter()
            .map(|t| {
                let time = t as f64 * dt;
                modes
                    .iter()
                    .map(|m| {
                        m.amplitude
                            * (-m.decay_rate * time).exp()
                            * (2.0 * PI * m.frequency * time).sin()
                    })
                    .sum::<f64>()
                    / total
            })
            .collect();
        Ok(Waveform::new(samples))
    }
}

/// Synthesises a struck membrane as a sum of decaying eigenmodes.
///
/// # Arguments
/// * `shape` - Membrane outline
/// * `limit` - Number of modes along each index
/// * `strike` - Strike location in shape-local coordinates
/// * `membrane` - Tension, density and decay time
/// * `num_samples` - Length of the output waveform
/// * `sample_rate` - Samples per second
pub fn synthesize_modal(
    shape: &DrumShape,
    limit: ModeLimit,
    strike: Point,
    membrane: &Membrane,
    num_samples: usize,
    sample_rate: f64,
) -> PhysicsResult<Waveform> {
    ModalSynthesizer::new(*shape, *membrane, limit, sample_rate)?.synthesize(strike, num_samples)
}
