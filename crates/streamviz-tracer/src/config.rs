//! Streamline tracing configuration.

use serde::{Deserialize, Serialize};

use crate::integrator::IntegrationMethod;

/// Which way a trajectory is advanced relative to the field direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IntegrationDirection {
    /// Along the field.
    #[default]
    Forward,
    /// Against the field.
    Backward,
    /// Both ways from the seed, spliced into one polyline.
    Both,
}

impl IntegrationDirection {
    /// Step-length sign for a single-sided trace. [`Both`] has no single
    /// sign and returns `None`; the tracer walks each of its sides with the
    /// `Forward` and `Backward` signs in turn.
    ///
    /// [`Both`]: IntegrationDirection::Both
    #[must_use]
    pub fn sign(self) -> Option<f32> {
        match self {
            Self::Forward => Some(1.0),
            Self::Backward => Some(-1.0),
            Self::Both => None,
        }
    }
}

/// Configuration for the streamline tracer.
///
/// Each termination condition can be toggled independently. With both the
/// vector-length and step-count conditions disabled, leaving the domain is
/// the only built-in bound: a trajectory inside a domain whose field never
/// vanishes will not terminate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamlineConfig {
    /// Numerical integration scheme.
    pub method: IntegrationMethod,

    /// Trace direction relative to the field.
    pub direction: IntegrationDirection,

    /// Fixed step length in object coordinates (positive).
    pub interval: f32,

    /// Field magnitudes below this terminate a trajectory (critical point).
    pub vector_length_threshold: f32,

    /// Maximum number of integration steps per trajectory side.
    pub integration_times_threshold: usize,

    /// Terminate when the next vertex leaves the domain.
    pub enable_boundary_condition: bool,

    /// Enable the vector-length (critical point) termination check.
    pub enable_vector_length_condition: bool,

    /// Enable the step-count termination check.
    pub enable_integration_times_condition: bool,
}

impl StreamlineConfig {
    /// Loads a configuration from its JSON representation.
    pub fn from_json(json: &str) -> streamviz_core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> streamviz_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for StreamlineConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::RungeKutta2,
            direction: IntegrationDirection::Forward,
            interval: 0.35,
            vector_length_threshold: 1e-6,
            integration_times_threshold: 1000,
            enable_boundary_condition: true,
            enable_vector_length_condition: true,
            enable_integration_times_condition: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StreamlineConfig::default();
        assert_eq!(config.method, IntegrationMethod::RungeKutta2);
        assert_eq!(config.direction, IntegrationDirection::Forward);
        assert!((config.interval - 0.35).abs() < 1e-6);
        assert!((config.vector_length_threshold - 1e-6).abs() < 1e-12);
        assert_eq!(config.integration_times_threshold, 1000);
        assert!(config.enable_boundary_condition);
        assert!(config.enable_vector_length_condition);
        assert!(config.enable_integration_times_condition);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = StreamlineConfig {
            method: IntegrationMethod::RungeKutta4,
            direction: IntegrationDirection::Backward,
            interval: 0.1,
            ..StreamlineConfig::default()
        };
        let json = config.to_json().unwrap();
        let back = StreamlineConfig::from_json(&json).unwrap();
        assert_eq!(back.method, IntegrationMethod::RungeKutta4);
        assert_eq!(back.direction, IntegrationDirection::Backward);
        assert!((back.interval - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(IntegrationDirection::Forward.sign(), Some(1.0));
        assert_eq!(IntegrationDirection::Backward.sign(), Some(-1.0));
        assert_eq!(IntegrationDirection::Both.sign(), None);
    }
}
