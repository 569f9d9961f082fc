//! Render command implementation
//!
//! Renders a recipe (and optionally seeded variants of it) to WAV files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use kac_physics::render_variant;

use crate::input::load_recipe;

/// Run the render command
///
/// # Arguments
/// * `recipe_path` - Path to the JSON recipe
/// * `output` - Path of the WAV file to write
/// * `variants` - Number of strike-location variants to render
/// * `seed` - Base seed for variant strike locations
///
/// With one variant the recipe is written to `output`. With more, variant `i`
/// is written next to it as `<stem>_<i>.wav`; variant 0 is the recipe itself.
///
/// # Returns
/// Exit code: 0 on success
pub fn run(recipe_path: &str, output: &str, variants: u32, seed: u32) -> Result<ExitCode> {
    if variants == 0 {
        bail!("--variants must be at least 1");
    }

    let start = Instant::now();
    println!("{} {}", "Rendering:".cyan().bold(), recipe_path);
    let recipe = load_recipe(Path::new(recipe_path))?;
    println!(
        "  {} {} {} at {} Hz, {:.3} s",
        "Model:".dimmed(),
        recipe.shape.kind(),
        recipe.synthesis.as_str(),
        recipe.sample_rate,
        recipe.duration_seconds
    );

    let output = Path::new(output);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    for index in 0..variants {
        let path = if variants == 1 {
            output.to_path_buf()
        } else {
            variant_path(output, index)
        };
        let result = render_variant(&recipe, seed, index)
            .with_context(|| format!("Failed to render variant {}", index))?;
        fs::write(&path, &result.wav.wav_data)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;

        println!(
            "  {} {} ({} samples, peak {:.3})",
            "Wrote".green(),
            path.display(),
            result.wav.num_samples,
            result.waveform.peak()
        );
        println!("    {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
    }

    println!(
        "{} {} file(s) in {:.2?}",
        "Done:".green().bold(),
        variants,
        start.elapsed()
    );
    Ok(ExitCode::SUCCESS)
}

/// `dir/hit.wav` -> `dir/hit_3.wav`
fn variant_path(output: &Path, index: u32) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "render".to_string());
    let name = match output.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE: &str = r#"{
        "duration_seconds": 0.02,
        "sample_rate": 8000,
        "shape": { "type": "circular", "radius": 0.2 },
        "synthesis": { "type": "modal", "modes": { "first": 3, "second": 3 } }
    }"#;

    fn write_recipe(dir: &Path, json: &str) -> String {
        let path = dir.join("recipe.json");
        fs::write(&path, json).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_variant_path() {
        assert_eq!(
            variant_path(Path::new("out/hit.wav"), 3),
            PathBuf::from("out/hit_3.wav")
        );
        assert_eq!(variant_path(Path::new("hit"), 0), PathBuf::from("hit_0"));
    }

    #[test]
    fn test_render_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = write_recipe(dir.path(), RECIPE);
        let output = dir.path().join("nested").join("hit.wav");

        run(&recipe, &output.to_string_lossy(), 1, 0).unwrap();

        let reader = hound::WavReader::open(&output).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.len(), 160);
    }

    #[test]
    fn test_render_variants() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = write_recipe(dir.path(), RECIPE);
        let output = dir.path().join("hit.wav");

        run(&recipe, &output.to_string_lossy(), 3, 42).unwrap();
        for i in 0..3 {
            assert!(dir.path().join(format!("hit_{}.wav", i)).exists());
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_render_rejects_invalid_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = write_recipe(dir.path(), &RECIPE.replace("0.2 }", "-0.2 }"));
        let output = dir.path().join("hit.wav");
        assert!(run(&recipe, &output.to_string_lossy(), 1, 0).is_err());
        assert!(!output.exists());
    }
}
