//! Fixed-step ODE integration through a sampled vector field.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use streamviz_field::FieldSampler;

/// Numerical scheme for one integration step.
///
/// The steppers carry no state of their own, so a closed enum dispatched
/// through [`step`] replaces any virtual-dispatch arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IntegrationMethod {
    /// First-order Euler.
    Euler,
    /// Second-order midpoint Runge-Kutta.
    #[default]
    RungeKutta2,
    /// Classical fourth-order Runge-Kutta.
    RungeKutta4,
}

/// Advances `p` by one step of signed length `h` along the field.
///
/// Returns `None` when the step cannot be completed: an intermediate RK
/// stage point left the domain, or the field could not be sampled. An
/// aborted step makes no progress; callers terminate the trajectory.
/// The sampled vector is used as-is (no normalization), so on a spatially
/// constant field every method yields exactly `p + v * h`.
pub fn step(
    method: IntegrationMethod,
    p: Vec3,
    h: f32,
    sampler: &mut impl FieldSampler,
) -> Option<Vec3> {
    match method {
        IntegrationMethod::Euler => {
            let k1 = sampler.sample_vector(p)? * h;
            Some(p + k1)
        }
        IntegrationMethod::RungeKutta2 => {
            let k1 = sampler.sample_vector(p)? * h;
            let mid = p + 0.5 * k1;
            if !sampler.contains(mid) {
                return None;
            }
            let k2 = sampler.sample_vector(mid)? * h;
            Some(p + k2)
        }
        IntegrationMethod::RungeKutta4 => {
            let k1 = sampler.sample_vector(p)? * h;

            let p2 = p + 0.5 * k1;
            if !sampler.contains(p2) {
                return None;
            }
            let k2 = sampler.sample_vector(p2)? * h;

            let p3 = p + 0.5 * k2;
            if !sampler.contains(p3) {
                return None;
            }
            let k3 = sampler.sample_vector(p3)? * h;

            let p4 = p + k3;
            if !sampler.contains(p4) {
                return None;
            }
            let k4 = sampler.sample_vector(p4)? * h;

            Some(p + (k1 + 2.0 * (k2 + k3) + k4) / 6.0)
        }
    }
}
