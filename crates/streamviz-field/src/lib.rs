//! Structured volume fields and grid interpolators.
//!
//! This crate holds the spatial side of the streamline engine:
//! - [`StructuredVolume`] — a read-only node-sampled field over a structured
//!   mesh (uniform or rectilinear), with heterogeneous numeric storage
//! - [`GridField`] — a cell-locating trilinear interpolator bound to one
//!   hexahedral cell at a time
//! - [`FieldSampler`] — the two-operation contract (`sample_vector`,
//!   `contains`) the tracer integrates against

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod grid;
pub mod sampler;
pub mod values;
pub mod volume;

pub use grid::{GridField, RectilinearGrid, UniformGrid};
pub use sampler::FieldSampler;
pub use values::ValueArray;
pub use volume::{GridKind, StructuredVolume};
