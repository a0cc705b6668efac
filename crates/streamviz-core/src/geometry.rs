//! Line geometry produced by the streamline tracer.

use glam::Vec3;

/// How the vertices of a [`LineGeometry`] are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Each connection entry spans a contiguous run of vertices.
    Polyline,
}

/// How colors are attached to a [`LineGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    /// One RGB triple per vertex.
    PerVertex,
}

/// Polyline geometry in flat-array form, ready for buffer upload.
///
/// Vertices from all streamlines are concatenated in seed order; each
/// emitted polyline is recorded in `connections` as a (first vertex id,
/// last vertex id) pair spanning a contiguous vertex range.
#[derive(Debug, Clone, Default)]
pub struct LineGeometry {
    coords: Vec<f32>,
    colors: Vec<u8>,
    connections: Vec<u32>,
}

impl LineGeometry {
    /// Creates an empty line geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one vertex with its color.
    pub fn push_vertex(&mut self, position: Vec3, color: [u8; 3]) {
        self.coords.extend_from_slice(&[position.x, position.y, position.z]);
        self.colors.extend_from_slice(&color);
    }

    /// Appends one polyline connection spanning `[first, last]`.
    pub fn push_connection(&mut self, first: u32, last: u32) {
        debug_assert!((first as usize) < self.num_vertices());
        debug_assert!((last as usize) < self.num_vertices());
        self.connections.push(first);
        self.connections.push(last);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.coords.len() / 3
    }

    /// Returns the number of polylines.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        self.connections.len() / 2
    }

    /// Returns true if no vertex was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the position of vertex `i`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.coords[3 * i],
            self.coords[3 * i + 1],
            self.coords[3 * i + 2],
        )
    }

    /// Returns the color of vertex `i`.
    #[must_use]
    pub fn color(&self, i: usize) -> [u8; 3] {
        [
            self.colors[3 * i],
            self.colors[3 * i + 1],
            self.colors[3 * i + 2],
        ]
    }

    /// Returns the flat vertex coordinate array (3 floats per vertex).
    #[must_use]
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Returns the flat color array (3 bytes per vertex).
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Returns the flat connection array (2 vertex ids per polyline).
    #[must_use]
    pub fn connections(&self) -> &[u32] {
        &self.connections
    }

    /// Returns the vertex coordinates as raw bytes for buffer upload.
    #[must_use]
    pub fn coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Returns the connections as raw bytes for buffer upload.
    #[must_use]
    pub fn connection_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.connections)
    }

    /// Returns the line type. Always [`LineType::Polyline`].
    #[must_use]
    pub fn line_type(&self) -> LineType {
        LineType::Polyline
    }

    /// Returns the color type. Always [`ColorType::PerVertex`].
    #[must_use]
    pub fn color_type(&self) -> ColorType {
        ColorType::PerVertex
    }

    /// Returns the cosmetic line width.
    #[must_use]
    pub fn width(&self) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_accessors() {
        let mut geom = LineGeometry::new();
        geom.push_vertex(Vec3::new(1.0, 2.0, 3.0), [10, 20, 30]);
        geom.push_vertex(Vec3::new(4.0, 5.0, 6.0), [40, 50, 60]);
        geom.push_connection(0, 1);

        assert_eq!(geom.num_vertices(), 2);
        assert_eq!(geom.num_lines(), 1);
        assert_eq!(geom.vertex(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(geom.color(0), [10, 20, 30]);
        assert_eq!(geom.connections(), &[0, 1]);
        assert_eq!(geom.width(), 1.0);
        assert_eq!(geom.line_type(), LineType::Polyline);
        assert_eq!(geom.color_type(), ColorType::PerVertex);
    }

    #[test]
    fn test_byte_views() {
        let mut geom = LineGeometry::new();
        geom.push_vertex(Vec3::ONE, [255, 255, 255]);
        assert_eq!(geom.coord_bytes().len(), 3 * 4);
        assert_eq!(geom.connection_bytes().len(), 0);
    }

    #[test]
    fn test_empty() {
        let geom = LineGeometry::new();
        assert!(geom.is_empty());
        assert_eq!(geom.num_vertices(), 0);
        assert_eq!(geom.num_lines(), 0);
    }
}
