//! Modal synthesis of canonical membranes.
//!
//! A struck membrane is rendered as a sum of its eigenmodes. Each mode rings
//! at its closed-form eigenfrequency, decays at the membrane's rate and is
//! weighted by its displacement at the strike point, so a strike on a node
//! line leaves that mode silent.
//!
//! | Shape       | Frequency                        | Mode shape                         |
//! |-------------|----------------------------------|------------------------------------|
//! | circular    | `c·z_nm / (2πR)`                 | `J_n(z_nm·r/R)·cos(nθ)`            |
//! | rectangular | `(c/2)·√((m/W)² + (n/H)²)`       | `sin(mπx/W)·sin(nπy/H)`            |
//! | triangular  | `(2c/(3s))·√(m² + mn + n²)`      | six-term lattice sum (see `modes`) |

mod bessel;
mod chladni;
mod modes;
mod synth;

pub use bessel::{bessel_j, bessel_j_zero};
pub use chladni::chladni_pattern;
pub use modes::{Eigenmode, ModeIndex, ModeLimit, MAX_MODES_PER_AXIS};
pub use synth::{synthesize_modal, ModalMode, ModalSynthesizer};
