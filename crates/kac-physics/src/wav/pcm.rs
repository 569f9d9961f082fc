//! Locating and hashing the PCM payload of a WAV file.

/// Returns the `data` chunk of a RIFF/WAVE buffer, or `None` if the buffer is
/// not a well-formed WAV file.
pub fn pcm_payload(wav: &[u8]) -> Option<&[u8]> {
    if wav.len() < 12 || &wav[0..4] != b"RIFF" || &wav[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav.len() {
        let id = &wav[pos..pos + 4];
        let len = u32::from_le_bytes([wav[pos + 4], wav[pos + 5], wav[pos + 6], wav[pos + 7]]) as usize;
        let start = pos + 8;
        if id == b"data" {
            return wav.get(start..start.checked_add(len)?);
        }
        // Chunks are padded to an even length.
        pos = start + len + (len & 1);
    }
    None
}

/// BLAKE3 hex digest of the PCM payload of a WAV buffer.
pub fn pcm_hash(wav: &[u8]) -> Option<String> {
    pcm_payload(wav).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
