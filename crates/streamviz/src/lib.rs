//! Streamline extraction from structured vector fields.
//!
//! streamviz computes integral curves of a node-sampled vector field over a
//! structured mesh (uniform or rectilinear) and packages them as flat-array
//! polyline geometry with per-vertex magnitude colors.
//!
//! ```no_run
//! use streamviz::{trace_streamlines, StreamlineConfig, StructuredVolume, UVec3, Vec3};
//!
//! // A 4x4x4 uniform grid with a constant field along +x.
//! let values: Vec<f32> = (0..64).flat_map(|_| [1.0, 0.0, 0.0]).collect();
//! let volume = StructuredVolume::uniform_vector(UVec3::splat(4), values)?;
//!
//! let seeds = vec![Vec3::splat(1.5)];
//! let geometry = trace_streamlines(&volume, &seeds, &StreamlineConfig::default())?;
//! println!("{} vertices, {} polylines", geometry.num_vertices(), geometry.num_lines());
//! # Ok::<(), streamviz::StreamvizError>(())
//! ```

#![allow(clippy::missing_errors_doc)]

pub use streamviz_core::{
    ColorMap, ColorSource, ColorType, LineGeometry, LineType, MagnitudeColorMap, Result,
    StreamvizError,
};
pub use streamviz_field::{
    FieldSampler, GridField, GridKind, RectilinearGrid, StructuredVolume, UniformGrid, ValueArray,
};
pub use streamviz_tracer::{
    step, IntegrationDirection, IntegrationMethod, StreamlineConfig, StreamlineTracer,
};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};

/// Traces streamlines with the default coloring: viridis over the volume's
/// magnitude range.
pub fn trace_streamlines(
    volume: &StructuredVolume,
    seeds: &[Vec3],
    config: &StreamlineConfig,
) -> Result<LineGeometry> {
    let (min, max) = volume.min_max_magnitude();
    let color_source = MagnitudeColorMap::new(ColorMap::viridis(), min, max);
    StreamlineTracer::new(config.clone(), color_source).trace(volume, seeds)
}
