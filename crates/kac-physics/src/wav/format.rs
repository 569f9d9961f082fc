//! Header fields of the emitted WAV files.

/// Mono 16-bit PCM at a fixed sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Channel count. Every render is mono.
    pub const CHANNELS: u16 = 1;
    /// Bits per sample.
    pub const BITS_PER_SAMPLE: u16 = 16;
    /// Size of the RIFF, `fmt ` and `data` headers together.
    pub const HEADER_LEN: usize = 44;

    /// Creates the format for `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        Self::CHANNELS * Self::BITS_PER_SAMPLE / 8
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}
