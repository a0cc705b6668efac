//! The field-sampling contract the tracer integrates against.

use glam::Vec3;

use crate::grid::GridField;

/// Point-wise access to a vector field over a bounded domain.
///
/// `sample_vector` takes `&mut self` because grid implementations carry a
/// per-cell interpolation cache. An unstructured-mesh locator would
/// implement this same contract.
pub trait FieldSampler {
    /// Interpolated field vector at `p`, or `None` when no cell contains it.
    fn sample_vector(&mut self, p: Vec3) -> Option<Vec3>;

    /// Whether `p` lies inside the field's domain.
    fn contains(&self, p: Vec3) -> bool;
}

impl FieldSampler for GridField<'_> {
    fn sample_vector(&mut self, p: Vec3) -> Option<Vec3> {
        GridField::sample_vector(self, p)
    }

    fn contains(&self, p: Vec3) -> bool {
        GridField::contains(self, p)
    }
}
