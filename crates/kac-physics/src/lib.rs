//! Kac Drum Physics
//!
//! Physically modelled synthesis of struck membranes ("can one hear the shape
//! of a drum?"). Two backends turn a drum description into a waveform:
//!
//! - **FDTD** - explicit finite-difference integration of the 2D wave equation
//!   over a rasterised membrane with fixed (Dirichlet) rim
//! - **Modal** - additive synthesis from the closed-form eigenmodes of circular,
//!   rectangular and equilateral-triangular membranes
//!
//! # Determinism
//!
//! Both backends are pure functions of their inputs. The FDTD spatial update
//! runs rows in parallel with rayon, but each cell is computed by the same
//! expression regardless of scheduling, so results do not depend on the
//! thread count. Random strike locations come from PCG32 streams seeded via
//! BLAKE3.
//!
//! # Example
//!
//! ```ignore
//! use kac_physics::{render, DrumRecipe};
//!
//! let recipe = DrumRecipe::from_json(json_string)?;
//! let result = render(&recipe)?;
//! std::fs::write("hit.wav", &result.wav.wav_data)?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`excitation`] - Raised-cosine and raised-triangle strike profiles
//! - [`grid`] - Amplitude grids, boundary masks and sample points
//! - [`fdtd`] - Time-domain simulator and its physical setup
//! - [`modal`] - Eigenmodes, Bessel functions and Chladni patterns
//! - [`shape`] - Canonical drum geometries and their rasterisation
//! - [`render()`] - Recipe entry point
//! - [`wav`] - Deterministic WAV writer

pub mod error;
pub mod excitation;
pub mod fdtd;
pub mod grid;
pub mod membrane;
pub mod modal;
pub mod recipe;
pub mod render;
pub mod rng;
pub mod sampler;
pub mod shape;
pub mod wav;
pub mod waveform;

pub use error::{PhysicsError, PhysicsResult};
pub use excitation::{raised_cosine_1d, raised_cosine_2d, raised_triangle_1d, raised_triangle_2d};
pub use fdtd::{synthesize_fdtd, FdtdModel, StabilityCoefficients};
pub use grid::{BoundaryMask, BoundaryMaskSource, Grid, SamplePoint};
pub use membrane::Membrane;
pub use modal::{chladni_pattern, synthesize_modal, ModeIndex, ModeLimit, ModalMode};
pub use recipe::{DrumRecipe, Synthesis};
pub use render::{render, render_variant, RenderResult};
pub use sampler::WaveformSampler;
pub use shape::{DrumShape, Point};
pub use wav::WavResult;
pub use waveform::Waveform;
