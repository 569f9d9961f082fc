//! Recipe rendering: backend dispatch, output gain and WAV encoding.

use crate::error::PhysicsResult;
use crate::fdtd::FdtdModel;
use crate::modal::synthesize_modal;
use crate::recipe::{DrumRecipe, Synthesis};
use crate::rng::create_variant_rng;
use crate::shape::Point;
use crate::wav::WavResult;
use crate::waveform::Waveform;

/// A rendered recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// Samples after the recipe's output gain.
    pub waveform: Waveform,
    /// The same samples encoded as 16-bit mono WAV.
    pub wav: WavResult,
}

/// Renders a recipe, striking at its strike point (or the shape centroid).
///
/// # Errors
/// Any validation failure of the recipe.
pub fn render(recipe: &DrumRecipe) -> PhysicsResult<RenderResult> {
    recipe.validate()?;
    render_at(recipe, recipe.strike_point())
}

/// Renders variant `index` of a recipe.
///
/// Variant `0` is the recipe itself. Every later variant strikes a uniformly
/// random interior point drawn from an RNG seeded by `seed` and `index`, so
/// the same `(seed, index)` pair always yields the same audio.
pub fn render_variant(recipe: &DrumRecipe, seed: u32, index: u32) -> PhysicsResult<RenderResult> {
    recipe.validate()?;
    let strike = if index == 0 {
        recipe.strike_point()
    } else {
        let mut rng = create_variant_rng(seed, index);
        recipe.shape.random_point(&mut rng)
    };
    tracing::debug!(seed, index, x = strike.x, y = strike.y, "rendering variant");
    render_at(recipe, strike)
}

fn render_at(recipe: &DrumRecipe, strike: Point) -> PhysicsResult<RenderResult> {
    let num_samples = recipe.num_samples();
    let sample_rate = f64::from(recipe.sample_rate);

    tracing::debug!(
        backend = recipe.synthesis.as_str(),
        shape = recipe.shape.kind(),
        num_samples,
        "rendering recipe"
    );

    let waveform = match recipe.synthesis {
        Synthesis::Fdtd {
            excitation_radius,
            pickup,
            resolution,
        } => {
            let model = match resolution {
                Some(resolution) => FdtdModel::with_resolution(
                    recipe.shape,
                    recipe.membrane,
                    sample_rate,
                    resolution,
                )?,
                None => FdtdModel::new(recipe.shape, recipe.membrane, sample_rate)?,
            };
            model.strike(strike, pickup, excitation_radius, num_samples)?
        }
        Synthesis::Modal { modes } => synthesize_modal(
            &recipe.shape,
            modes,
            strike,
            &recipe.membrane,
            num_samples,
            sample_rate,
        )?,
    };

    let waveform = waveform.scaled(recipe.amplitude);
    let wav = WavResult::from_waveform(&waveform, recipe.sample_rate);
    Ok(RenderResult { waveform, wav })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModeLimit;
    use crate::membrane::Membrane;
    use crate::shape::DrumShape;
    use pretty_assertions::assert_eq;

    fn modal_recipe() -> DrumRecipe {
        DrumRecipe {
            duration_seconds: 0.05,
            sample_rate: 8000,
            amplitude: 0.5,
            shape: DrumShape::Circular { radius: 0.2 },
            membrane: Membrane::default(),
            strike: Some(Point::new(0.05, 0.02)),
            synthesis: Synthesis::Modal {
                modes: ModeLimit::square(4),
            },
        }
    }

    #[test]
    fn test_render_applies_gain() {
        let recipe = modal_recipe();
        let result = render(&recipe).unwrap();
        assert_eq!(result.waveform.len(), 400);
        assert!(result.waveform.peak() <= 0.5);
        assert_eq!(result.wav.num_samples, 400);
        assert_eq!(result.wav.sample_rate, 8000);
    }

    #[test]
    fn test_variant_zero_is_the_recipe() {
        let recipe = modal_recipe();
        assert_eq!(render_variant(&recipe, 99, 0).unwrap(), render(&recipe).unwrap());
    }

    #[test]
    fn test_variants_are_deterministic_and_distinct() {
        let recipe = modal_recipe();
        let a = render_variant(&recipe, 7, 3).unwrap();
        let b = render_variant(&recipe, 7, 3).unwrap();
        let c = render_variant(&recipe, 7, 4).unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert!(a.wav.pcm_hash != c.wav.pcm_hash);
    }

    #[test]
    fn test_fdtd_render() {
        let recipe = DrumRecipe {
            synthesis: Synthesis::Fdtd {
                excitation_radius: 1.5,
                pickup: None,
                resolution: Some(12),
            },
            strike: None,
            ..modal_recipe()
        };
        let result = render(&recipe).unwrap();
        assert_eq!(result.waveform.len(), 400);
        assert!(!result.waveform.is_silent());
    }

    #[test]
    fn test_invalid_recipe_is_rejected_before_rendering() {
        let mut recipe = modal_recipe();
        recipe.strike = Some(Point::new(1.0, 1.0));
        assert_eq!(render(&recipe).unwrap_err().code(), "PHYS_003");
    }
}
