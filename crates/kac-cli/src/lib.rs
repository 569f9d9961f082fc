//! Kac CLI library.
//!
//! Recipe loading and the command implementations behind the `kac` binary.

pub mod commands;
pub mod input;
