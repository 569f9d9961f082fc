//! A rendered waveform encoded as WAV.

use super::encode::{encode_wav, to_pcm16};
use super::format::WavFormat;
use crate::waveform::Waveform;

/// WAV bytes together with the identifiers of their audio content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavResult {
    /// Complete file contents.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hex digest of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes `waveform` as 16-bit mono PCM.
    pub fn from_waveform(waveform: &Waveform, sample_rate: u32) -> Self {
        let pcm = to_pcm16(waveform.as_slice());
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        Self {
            wav_data: encode_wav(WavFormat::new(sample_rate), &pcm),
            pcm_hash,
            sample_rate,
            num_samples: waveform.len(),
        }
    }

    /// Length of the audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}
