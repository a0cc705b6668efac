//! Core types for streamviz.
//!
//! This crate provides the foundation shared by the field and tracer crates:
//! - [`StreamvizError`] and the crate-wide [`Result`] alias
//! - [`ColorMap`] lookup tables and the [`ColorSource`] seam used to color
//!   streamline vertices by local field magnitude
//! - [`LineGeometry`], the flat-array polyline output object

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color_map;
pub mod error;
pub mod geometry;

pub use color_map::{ColorMap, ColorSource, MagnitudeColorMap};
pub use error::{Result, StreamvizError};
pub use geometry::{ColorType, LineGeometry, LineType};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
