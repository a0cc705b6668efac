//! Structured volume field data model.

use glam::{UVec3, Vec3};
use streamviz_core::{Result, StreamvizError};

use crate::values::ValueArray;

/// The point-placement rule of a structured mesh.
#[derive(Debug, Clone)]
pub enum GridKind {
    /// Implicit unit spacing: node (i, j, k) sits at position (i, j, k).
    Uniform,
    /// Explicit, monotonically increasing coordinates per axis.
    Rectilinear {
        x: Vec<f32>,
        y: Vec<f32>,
        z: Vec<f32>,
    },
    /// Explicit per-node coordinates (3 per node). Carried in the data model
    /// for other mappers; the streamline tracer has no interpolator for it.
    Curvilinear { coords: Vec<f32> },
}

impl GridKind {
    /// Returns a short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Rectilinear { .. } => "rectilinear",
            Self::Curvilinear { .. } => "curvilinear",
        }
    }
}

/// A node-sampled field over a structured hexahedral mesh.
///
/// Samples are stored flat, x-fastest, `veclen` components per node. The
/// volume is read-only for the lifetime of any interpolator borrowing it.
#[derive(Debug, Clone)]
pub struct StructuredVolume {
    resolution: UVec3,
    grid: GridKind,
    veclen: usize,
    values: ValueArray,
}

impl StructuredVolume {
    /// Creates a structured volume, validating the resolution (at least
    /// 2 nodes per axis, so every axis forms cells), array sizes and, for
    /// rectilinear grids, per-axis monotonicity.
    pub fn new(
        resolution: UVec3,
        grid: GridKind,
        veclen: usize,
        values: impl Into<ValueArray>,
    ) -> Result<Self> {
        if resolution.min_element() < 2 {
            return Err(StreamvizError::DegenerateResolution {
                x: resolution.x,
                y: resolution.y,
                z: resolution.z,
            });
        }
        let values = values.into();
        let nodes = resolution.x as usize * resolution.y as usize * resolution.z as usize;
        if values.len() != nodes * veclen {
            return Err(StreamvizError::SizeMismatch {
                expected: nodes * veclen,
                actual: values.len(),
            });
        }

        match &grid {
            GridKind::Uniform => {}
            GridKind::Rectilinear { x, y, z } => {
                for (coords, dim, axis) in [
                    (x, resolution.x, 'x'),
                    (y, resolution.y, 'y'),
                    (z, resolution.z, 'z'),
                ] {
                    if coords.len() != dim as usize {
                        return Err(StreamvizError::SizeMismatch {
                            expected: dim as usize,
                            actual: coords.len(),
                        });
                    }
                    if coords.windows(2).any(|w| w[0] >= w[1]) {
                        return Err(StreamvizError::NonMonotonicAxis(axis));
                    }
                }
            }
            GridKind::Curvilinear { coords } => {
                if coords.len() != nodes * 3 {
                    return Err(StreamvizError::SizeMismatch {
                        expected: nodes * 3,
                        actual: coords.len(),
                    });
                }
            }
        }

        Ok(Self {
            resolution,
            grid,
            veclen,
            values,
        })
    }

    /// Creates a uniform-grid vector volume from `f32` samples.
    pub fn uniform_vector(resolution: UVec3, values: Vec<f32>) -> Result<Self> {
        Self::new(resolution, GridKind::Uniform, 3, values)
    }

    /// Returns the node resolution (nx, ny, nz).
    #[must_use]
    pub fn resolution(&self) -> UVec3 {
        self.resolution
    }

    /// Returns the grid kind.
    #[must_use]
    pub fn grid(&self) -> &GridKind {
        &self.grid
    }

    /// Returns the number of components per node (1 = scalar, 3 = vector).
    #[must_use]
    pub fn veclen(&self) -> usize {
        self.veclen
    }

    /// Returns the node samples.
    #[must_use]
    pub fn values(&self) -> &ValueArray {
        &self.values
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.resolution.x as usize * self.resolution.y as usize * self.resolution.z as usize
    }

    /// Returns the number of nodes along one x line.
    #[must_use]
    pub fn nodes_per_line(&self) -> usize {
        self.resolution.x as usize
    }

    /// Returns the number of nodes in one z slice.
    #[must_use]
    pub fn nodes_per_slice(&self) -> usize {
        self.resolution.x as usize * self.resolution.y as usize
    }

    /// Flattens a 3D node index to a linear node index.
    #[must_use]
    pub fn node_index(&self, i: u32, j: u32, k: u32) -> usize {
        i as usize + j as usize * self.nodes_per_line() + k as usize * self.nodes_per_slice()
    }

    /// Returns the min/max per-node magnitude: vector length for veclen 3,
    /// absolute value for veclen 1. Used to scale the default color source.
    #[must_use]
    pub fn min_max_magnitude(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for node in 0..self.num_nodes() {
            let m = match self.veclen {
                3 => Vec3::new(
                    self.values.get_f32(node * 3),
                    self.values.get_f32(node * 3 + 1),
                    self.values.get_f32(node * 3 + 2),
                )
                .length(),
                _ => self.values.get_f32(node).abs(),
            };
            min = min.min(m);
            max = max.max(m);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_vector_volume(dim: UVec3, v: Vec3) -> StructuredVolume {
        let nodes = (dim.x * dim.y * dim.z) as usize;
        let mut values = Vec::with_capacity(nodes * 3);
        for _ in 0..nodes {
            values.extend_from_slice(&[v.x, v.y, v.z]);
        }
        StructuredVolume::uniform_vector(dim, values).unwrap()
    }

    #[test]
    fn test_size_validation() {
        let err = StructuredVolume::uniform_vector(UVec3::new(2, 2, 2), vec![0.0; 7]);
        assert!(matches!(
            err,
            Err(StreamvizError::SizeMismatch {
                expected: 24,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        // Fewer than 2 nodes on any axis leaves no cell to interpolate in.
        for dim in [UVec3::ZERO, UVec3::new(2, 1, 2), UVec3::new(0, 4, 4)] {
            let nodes = (dim.x * dim.y * dim.z) as usize;
            let err = StructuredVolume::uniform_vector(dim, vec![0.0; nodes * 3]);
            assert!(
                matches!(err, Err(StreamvizError::DegenerateResolution { .. })),
                "{dim} accepted"
            );
        }
    }

    #[test]
    fn test_rectilinear_validation() {
        let grid = GridKind::Rectilinear {
            x: vec![0.0, 1.0],
            y: vec![0.0, 2.0, 1.0], // not increasing
            z: vec![0.0, 1.0, 2.0],
        };
        let err = StructuredVolume::new(UVec3::new(2, 3, 3), grid, 1, vec![0.0_f32; 18]);
        assert!(matches!(err, Err(StreamvizError::NonMonotonicAxis('y'))));
    }

    #[test]
    fn test_node_index_is_x_fastest() {
        let vol = constant_vector_volume(UVec3::new(3, 4, 5), Vec3::X);
        assert_eq!(vol.node_index(1, 0, 0), 1);
        assert_eq!(vol.node_index(0, 1, 0), 3);
        assert_eq!(vol.node_index(0, 0, 1), 12);
        assert_eq!(vol.node_index(2, 3, 4), 2 + 3 * 3 + 4 * 12);
    }

    #[test]
    fn test_min_max_magnitude() {
        let vol = constant_vector_volume(UVec3::new(2, 2, 2), Vec3::new(3.0, 4.0, 0.0));
        let (min, max) = vol.min_max_magnitude();
        assert!((min - 5.0).abs() < 1e-6);
        assert!((max - 5.0).abs() < 1e-6);
    }
}
