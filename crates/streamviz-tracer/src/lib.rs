//! Streamline integration for streamviz.
//!
//! Turns seed points into polyline geometry by advancing trajectories
//! through a sampled vector field:
//! - [`step`] — one fixed-length Euler / RK2 / RK4 step through a
//!   [`FieldSampler`](streamviz_field::FieldSampler)
//! - [`StreamlineConfig`] — method, direction, interval, and termination
//!   thresholds
//! - [`StreamlineTracer`] — the per-seed state machine and geometry
//!   assembly

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Termination toggles mirror the reference configuration surface
#![allow(clippy::struct_excessive_bools)]

pub mod config;
pub mod integrator;
pub mod tracer;

pub use config::{IntegrationDirection, StreamlineConfig};
pub use integrator::{step, IntegrationMethod};
pub use tracer::StreamlineTracer;
