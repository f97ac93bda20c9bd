//! `raggrid-engine` — Ragged integer grid engine.
//!
//! Pure engine crate: owns the grid container and the per-row
//! transformations. No CLI or IO dependencies.

pub mod error;
pub mod grid;
pub mod transform;

pub use error::GridError;
pub use grid::RaggedGrid;
pub use transform::Transformer;
