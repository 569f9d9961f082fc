//! The sampled output of a synthesis backend.

use std::ops::Index;

/// A finite, immutable sequence of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
}

impl Waveform {
    /// Wraps a finished sample buffer.
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// A waveform of `len` zero samples.
    pub fn silence(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// Whether every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Returns a copy with every sample multiplied by `gain`.
    pub fn scaled(&self, gain: f64) -> Self {
        Self::new(self.samples.iter().map(|s| s * gain).collect())
    }
}

impl Index<usize> for Waveform {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}
