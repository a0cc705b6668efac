//! Color maps and the vertex color source.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    #[must_use]
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = ((t * n as f32).floor() as usize).min(n - 1);
        #[allow(clippy::cast_precision_loss)]
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }

    /// The viridis color map.
    #[must_use]
    pub fn viridis() -> Self {
        Self::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        )
    }

    /// The coolwarm color map.
    #[must_use]
    pub fn coolwarm() -> Self {
        Self::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        )
    }

    /// A linear black-to-white color map.
    #[must_use]
    pub fn grayscale() -> Self {
        Self::new("grayscale", vec![Vec3::ZERO, Vec3::ONE])
    }
}

/// Maps a scalar (here: the local field magnitude) to an 8-bit RGB triple.
///
/// The tracer is generic over this trait so callers can substitute any
/// coloring scheme, e.g. a transfer-function lookup.
pub trait ColorSource {
    /// Returns the color for the given scalar value.
    fn at(&self, scalar: f32) -> [u8; 3];
}

/// A [`ColorSource`] that normalizes a scalar into a `[min, max]` range and
/// samples a [`ColorMap`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagnitudeColorMap {
    color_map: ColorMap,
    min: f32,
    max: f32,
}

impl MagnitudeColorMap {
    /// Creates a magnitude color map over the given scalar range.
    #[must_use]
    pub fn new(color_map: ColorMap, min: f32, max: f32) -> Self {
        Self {
            color_map,
            min,
            max,
        }
    }

    /// Returns the scalar range.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

impl ColorSource for MagnitudeColorMap {
    fn at(&self, scalar: f32) -> [u8; 3] {
        let interval = self.max - self.min;
        let t = if interval > 0.0 {
            (scalar - self.min) / interval
        } else {
            0.0
        };
        let c = self.color_map.sample(t);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantize = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        [quantize(c.x), quantize(c.y), quantize(c.z)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let cmap = ColorMap::grayscale();
        assert!((cmap.sample(0.0) - Vec3::ZERO).length() < 1e-6);
        assert!((cmap.sample(1.0) - Vec3::ONE).length() < 1e-6);
        assert!((cmap.sample(0.5) - Vec3::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let cmap = ColorMap::viridis();
        assert_eq!(cmap.sample(-1.0), cmap.sample(0.0));
        assert_eq!(cmap.sample(2.0), cmap.sample(1.0));
    }

    #[test]
    fn test_magnitude_color_map_endpoints() {
        let source = MagnitudeColorMap::new(ColorMap::grayscale(), 2.0, 4.0);
        assert_eq!(source.at(2.0), [0, 0, 0]);
        assert_eq!(source.at(4.0), [255, 255, 255]);
        assert_eq!(source.at(3.0), [128, 128, 128]);
    }

    #[test]
    fn test_magnitude_color_map_degenerate_range() {
        // min == max must not divide by zero; everything maps to the low end.
        let source = MagnitudeColorMap::new(ColorMap::grayscale(), 1.0, 1.0);
        assert_eq!(source.at(1.0), [0, 0, 0]);
        assert_eq!(source.at(5.0), [0, 0, 0]);
    }
}
