//! Command implementations.

pub mod chladni;
pub mod render;
