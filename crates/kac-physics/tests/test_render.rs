//! Recipe rendering and WAV output tests.

use std::io::Cursor;

use kac_physics::wav::{pcm_hash, pcm_payload};
use kac_physics::{render, render_variant, DrumRecipe, PhysicsError};

fn read_back(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::new(Cursor::new(wav.to_vec())).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(Result::unwrap).collect();
    (spec, samples)
}

const MODAL: &str = r#"{
    "duration_seconds": 0.1,
    "sample_rate": 22050,
    "amplitude": 0.9,
    "shape": { "type": "rectangular", "width": 0.35, "height": 0.25 },
    "membrane": { "tension": 2400.0, "density": 0.3, "decay_time": 0.4 },
    "strike": { "x": 0.1, "y": 0.08 },
    "synthesis": { "type": "modal", "modes": { "first": 6, "second": 5 } }
}"#;

const FDTD: &str = r#"{
    "duration_seconds": 0.02,
    "sample_rate": 16000,
    "shape": { "type": "circular", "radius": 0.15 },
    "synthesis": { "type": "fdtd", "excitation_radius": 1.5, "resolution": 16 }
}"#;

#[test]
fn test_modal_wav_reads_back() {
    let recipe = DrumRecipe::from_json(MODAL).unwrap();
    let result = render(&recipe).unwrap();

    let (spec, samples) = read_back(&result.wav.wav_data);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 2205);

    for (pcm, sample) in samples.iter().zip(result.waveform.as_slice()) {
        let expected = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        assert_eq!(*pcm, expected);
    }
    assert!(samples.iter().all(|s| (*s as f64).abs() <= 0.9 * 32767.0 + 1.0));
}

#[test]
fn test_fdtd_wav_reads_back() {
    let recipe = DrumRecipe::from_json(FDTD).unwrap();
    let result = render(&recipe).unwrap();
    let (spec, samples) = read_back(&result.wav.wav_data);
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(samples.len(), 320);
    assert!(samples.iter().any(|&s| s != 0));
}

#[test]
fn test_hash_is_stable_across_renders() {
    let recipe = DrumRecipe::from_json(MODAL).unwrap();
    let a = render(&recipe).unwrap();
    let b = render(&recipe).unwrap();
    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
    assert_eq!(pcm_hash(&a.wav.wav_data), Some(a.wav.pcm_hash.clone()));
    assert_eq!(pcm_payload(&a.wav.wav_data).map(<[u8]>::len), Some(2 * 2205));
}

#[test]
fn test_variants() {
    let recipe = DrumRecipe::from_json(MODAL).unwrap();
    let hashes: Vec<String> = (0..4)
        .map(|i| render_variant(&recipe, 1234, i).unwrap().wav.pcm_hash)
        .collect();
    assert_eq!(hashes[0], render(&recipe).unwrap().wav.pcm_hash);
    for i in 0..hashes.len() {
        for j in i + 1..hashes.len() {
            assert!(hashes[i] != hashes[j], "variants {} and {} collide", i, j);
        }
    }

    let again = render_variant(&recipe, 1234, 2).unwrap();
    assert_eq!(again.wav.pcm_hash, hashes[2]);
    let other_seed = render_variant(&recipe, 4321, 2).unwrap();
    assert!(other_seed.wav.pcm_hash != hashes[2]);
}

#[test]
fn test_invalid_recipes() {
    let err = DrumRecipe::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PhysicsError::Recipe(_)));

    let negative = MODAL.replace("\"decay_time\": 0.4", "\"decay_time\": -0.4");
    let recipe = DrumRecipe::from_json(&negative).unwrap();
    assert_eq!(render(&recipe).unwrap_err().code(), "PHYS_002");

    let coarse = FDTD.replace("\"resolution\": 16", "\"resolution\": 2");
    let recipe = DrumRecipe::from_json(&coarse).unwrap();
    assert!(matches!(
        render(&recipe),
        Err(PhysicsError::InvalidParameter { .. })
    ));
}
