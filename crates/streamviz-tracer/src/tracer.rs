//! The seeding/termination driver: seeds in, polyline geometry out.

use glam::Vec3;
use streamviz_core::{ColorSource, LineGeometry, Result, StreamvizError};
use streamviz_field::{FieldSampler, GridField, StructuredVolume};

use crate::config::StreamlineConfig;
use crate::integrator::step;

/// One trajectory's accepted vertices with their colors. Transient; each
/// trajectory is flattened into the output geometry and discarded.
type Trajectory = Vec<(Vec3, [u8; 3])>;

/// Computes streamlines over a structured vector field.
///
/// Seeds are processed in input order and their vertices concatenated into
/// one vertex-colored polyline geometry; a concurrent variant would need a
/// `GridField` per worker and must still concatenate per-seed results in
/// seed order.
pub struct StreamlineTracer<C> {
    config: StreamlineConfig,
    color_source: C,
}

impl<C: ColorSource> StreamlineTracer<C> {
    /// Creates a tracer with the given configuration and vertex coloring.
    pub fn new(config: StreamlineConfig, color_source: C) -> Self {
        Self {
            config,
            color_source,
        }
    }

    /// Returns the tracer configuration.
    #[must_use]
    pub fn config(&self) -> &StreamlineConfig {
        &self.config
    }

    /// Traces one streamline per seed through `volume`.
    ///
    /// Fails up front, producing no output, when the volume is not a
    /// 3-component vector field or its grid kind has no interpolator.
    /// A seed outside the domain is skipped silently.
    pub fn trace(&self, volume: &StructuredVolume, seeds: &[Vec3]) -> Result<LineGeometry> {
        if volume.veclen() != 3 {
            return Err(StreamvizError::NotVectorField {
                veclen: volume.veclen(),
            });
        }
        let mut field = GridField::new(volume)?;

        let mut geometry = LineGeometry::new();
        for (index, &seed) in seeds.iter().enumerate() {
            let Some(line) = self.trace_seed(&mut field, seed) else {
                log::debug!("seed {index} at {seed} is outside the domain, skipped");
                continue;
            };

            #[allow(clippy::cast_possible_truncation)]
            let first = geometry.num_vertices() as u32;
            for (position, color) in &line {
                geometry.push_vertex(*position, *color);
            }
            #[allow(clippy::cast_possible_truncation)]
            let last = geometry.num_vertices() as u32 - 1;
            if last > first {
                geometry.push_connection(first, last);
            }
        }

        log::info!(
            "traced {} polylines ({} vertices) from {} seeds",
            geometry.num_lines(),
            geometry.num_vertices(),
            seeds.len()
        );
        Ok(geometry)
    }

    /// Traces the trajectory for one seed, or `None` when the seed yields
    /// no vertices.
    fn trace_seed(&self, field: &mut impl FieldSampler, seed: Vec3) -> Option<Trajectory> {
        if let Some(sign) = self.config.direction.sign() {
            return self.trace_one_side(field, seed, sign);
        }

        // Both directions: trace each side, then splice into one polyline
        // through the seed, the forward leg reversed and the backward leg
        // minus its duplicate seed.
        let forward = self.trace_one_side(field, seed, 1.0)?;
        let backward = self.trace_one_side(field, seed, -1.0)?;
        let mut line = forward;
        line.reverse();
        line.extend(backward.into_iter().skip(1));
        Some(line)
    }

    /// Advances one trajectory side until a termination condition fires.
    fn trace_one_side(
        &self,
        field: &mut impl FieldSampler,
        seed: Vec3,
        sign: f32,
    ) -> Option<Trajectory> {
        if !field.contains(seed) {
            return None;
        }
        // A seed on a maximal face is inside the domain but in no cell.
        let mut direction = field.sample_vector(seed)?;

        let mut line: Trajectory = vec![(seed, self.color_source.at(direction.length()))];
        let h = self.config.interval * sign;
        let mut current = seed;
        let mut times = 0_usize;

        loop {
            let Some(next) = step(self.config.method, current, h, field) else {
                break;
            };
            if self.config.enable_boundary_condition && !field.contains(next) {
                break;
            }
            if self.config.enable_vector_length_condition
                && direction.length() < self.config.vector_length_threshold
            {
                break;
            }
            if self.config.enable_integration_times_condition
                && times >= self.config.integration_times_threshold
            {
                break;
            }

            current = next;
            let Some(next_direction) = field.sample_vector(current) else {
                break;
            };
            direction = next_direction;
            line.push((current, self.color_source.at(direction.length())));
            times += 1;
        }

        Some(line)
    }
}
