//! JSON render recipes.
//!
//! A recipe names everything needed to render one drum hit:
//!
//! ```json
//! {
//!   "duration_seconds": 0.5,
//!   "sample_rate": 44100,
//!   "shape": { "type": "circular", "radius": 0.18 },
//!   "membrane": { "tension": 2500.0, "decay_time": 0.4 },
//!   "strike": { "x": 0.04, "y": 0.0 },
//!   "synthesis": { "type": "modal", "modes": { "first": 8, "second": 8 } }
//! }
//! ```
//!
//! Omitted fields take their defaults; unknown fields are rejected.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, PhysicsError, PhysicsResult};
use crate::membrane::Membrane;
use crate::modal::ModeLimit;
use crate::shape::{DrumShape, Point};

/// Recipe for rendering one struck membrane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrumRecipe {
    /// Length of the rendered audio (seconds).
    pub duration_seconds: f64,
    /// Output sample rate (Hz).
    pub sample_rate: u32,
    /// Output gain applied after synthesis.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Membrane outline.
    pub shape: DrumShape,
    /// Membrane material.
    #[serde(default)]
    pub membrane: Membrane,
    /// Strike location; the shape centroid when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<Point>,
    /// Synthesis backend and its settings.
    pub synthesis: Synthesis,
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_excitation_radius() -> f64 {
    2.0
}

/// Synthesis backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Synthesis {
    /// Time-domain simulation on a rasterised membrane.
    Fdtd {
        /// Radius of the raised-cosine strike, in grid cells.
        #[serde(default = "default_excitation_radius")]
        excitation_radius: f64,
        /// Listening point; the strike point when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pickup: Option<Point>,
        /// Cells across the longest extent; the finest stable grid when
        /// omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resolution: Option<usize>,
    },
    /// Sum of closed-form eigenmodes.
    Modal {
        /// Number of modes along each index.
        #[serde(default)]
        modes: ModeLimit,
    },
}

impl Synthesis {
    /// Short name of the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Synthesis::Fdtd { .. } => "fdtd",
            Synthesis::Modal { .. } => "modal",
        }
    }
}

impl DrumRecipe {
    /// Parses a recipe from a JSON string.
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the recipe to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> PhysicsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every field that the backends would otherwise reject mid-render.
    pub fn validate(&self) -> PhysicsResult<()> {
        require_positive("duration_seconds", self.duration_seconds)?;
        if self.sample_rate == 0 {
            return Err(PhysicsError::invalid_param("sample_rate", "must be > 0"));
        }
        if !self.amplitude.is_finite() {
            return Err(PhysicsError::invalid_param(
                "amplitude",
                format!("must be finite, got {}", self.amplitude),
            ));
        }
        self.shape.validate()?;
        self.membrane.validate()?;
        if let Some(strike) = self.strike {
            self.shape.require_inside("strike", strike)?;
        }

        match self.synthesis {
            Synthesis::Fdtd {
                excitation_radius,
                pickup,
                resolution,
            } => {
                require_positive("excitation_radius", excitation_radius)?;
                if let Some(pickup) = pickup {
                    self.shape.require_inside("pickup", pickup)?;
                }
                if resolution == Some(0) {
                    return Err(PhysicsError::invalid_param("resolution", "must be at least 1"));
                }
            }
            Synthesis::Modal { modes } => modes.validate()?,
        }
        Ok(())
    }

    /// The recipe's strike point, defaulting to the centroid.
    pub fn strike_point(&self) -> Point {
        self.strike.unwrap_or_else(|| self.shape.centroid())
    }

    /// Number of samples to render: `ceil(duration_seconds * sample_rate)`,
    /// ignoring rounding noise in the product.
    pub fn num_samples(&self) -> usize {
        (self.duration_seconds * f64::from(self.sample_rate) - 1e-9).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"{
        "duration_seconds": 0.25,
        "sample_rate": 8000,
        "shape": { "type": "triangular", "side": 0.5 },
        "synthesis": { "type": "fdtd" }
    }"#;

    #[test]
    fn test_defaults() {
        let recipe = DrumRecipe::from_json(MINIMAL).unwrap();
        assert_eq!(recipe.amplitude, 1.0);
        assert_eq!(recipe.membrane, Membrane::default());
        assert_eq!(recipe.strike, None);
        assert_eq!(
            recipe.synthesis,
            Synthesis::Fdtd {
                excitation_radius: 2.0,
                pickup: None,
                resolution: None,
            }
        );
        assert_eq!(recipe.num_samples(), 2000);
        assert_eq!(recipe.strike_point(), recipe.shape.centroid());
        recipe.validate().unwrap();
    }

    #[test]
    fn test_modal_defaults() {
        let recipe = DrumRecipe::from_json(
            r#"{
                "duration_seconds": 1.0,
                "sample_rate": 44100,
                "shape": { "type": "circular", "radius": 0.2 },
                "membrane": { "decay_time": 0.3 },
                "synthesis": { "type": "modal" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            recipe.synthesis,
            Synthesis::Modal {
                modes: ModeLimit::square(10)
            }
        );
        assert_eq!(recipe.membrane.decay_time, 0.3);
        assert_eq!(recipe.membrane.tension, 2000.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let recipe = DrumRecipe {
            duration_seconds: 0.1,
            sample_rate: 22050,
            amplitude: 0.8,
            shape: DrumShape::Rectangular {
                width: 0.3,
                height: 0.2,
            },
            membrane: Membrane::new(1500.0, 0.2, 0.5),
            strike: Some(Point::new(0.1, 0.05)),
            synthesis: Synthesis::Modal {
                modes: ModeLimit::new(4, 6),
            },
        };
        let json = recipe.to_json_pretty().unwrap();
        assert_eq!(DrumRecipe::from_json(&json).unwrap(), recipe);
        assert_eq!(recipe.num_samples(), 2205);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let with_extra = MINIMAL.replacen("\"sample_rate\"", "\"gain\": 2, \"sample_rate\"", 1);
        let err = DrumRecipe::from_json(&with_extra).unwrap_err();
        assert_eq!(err.code(), "PHYS_004");

        let bad_backend = MINIMAL.replace("\"fdtd\"", "\"fdtd\", \"steps\": 3");
        assert!(DrumRecipe::from_json(&bad_backend).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = DrumRecipe::from_json(MINIMAL).unwrap();

        let mut recipe = base.clone();
        recipe.duration_seconds = 0.0;
        assert!(recipe.validate().is_err());

        let mut recipe = base.clone();
        recipe.sample_rate = 0;
        assert!(recipe.validate().is_err());

        let mut recipe = base.clone();
        recipe.strike = Some(Point::new(-1.0, 0.0));
        assert_eq!(recipe.validate().unwrap_err().code(), "PHYS_003");

        let mut recipe = base;
        recipe.synthesis = Synthesis::Modal {
            modes: ModeLimit::new(3, 0),
        };
        assert_eq!(recipe.validate().unwrap_err().code(), "PHYS_002");
    }

    #[test]
    fn test_huge_mode_limit_is_rejected() {
        let recipe = DrumRecipe::from_json(
            r#"{
                "duration_seconds": 0.1,
                "sample_rate": 8000,
                "shape": { "type": "circular", "radius": 0.2 },
                "synthesis": {
                    "type": "modal",
                    "modes": { "first": 18446744073709551615, "second": 4294967296 }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(recipe.validate().unwrap_err().code(), "PHYS_002");
    }
}
