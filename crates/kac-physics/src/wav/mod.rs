//! Deterministic 16-bit mono WAV output.
//!
//! Files carry only the `fmt ` and `data` chunks, with no timestamps or other
//! variable metadata, so the same waveform always produces the same bytes. The
//! BLAKE3 hash of the PCM payload identifies a render independently of the
//! header.

mod encode;
mod format;
mod pcm;
mod result;


pub use encode::{encode_wav, to_pcm16};
pub use format::WavFormat;
pub use pcm::{pcm_hash, pcm_payload};
pub use result::WavResult;
