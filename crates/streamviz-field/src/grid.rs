//! Cell location and trilinear interpolation over structured grids.

use glam::{UVec3, Vec3};
use streamviz_core::{Result, StreamvizError};

use crate::volume::{GridKind, StructuredVolume};

/// Per-cell interpolation state shared by the grid variants.
///
/// Holds the bound base index, the 8 corner samples converted to `f32`
/// (component-major, up to veclen 3), the 8 trilinear basis weights, and
/// the 24 derivative weights for the last local point set. Rebinding
/// overwrites; a cache is single-owner and not meant for shared use.
#[derive(Debug, Clone)]
struct GridCache {
    base: UVec3,
    veclen: usize,
    values: [f32; 24],
    weights: [f32; 8],
    derivs: [f32; 24],
}

impl GridCache {
    fn new(veclen: usize) -> Self {
        Self {
            base: UVec3::ZERO,
            veclen,
            values: [0.0; 24],
            weights: [0.0; 8],
            derivs: [0.0; 24],
        }
    }

    /// Copies the 8 corner samples of the cell at `base` into the cache.
    ///
    /// Precondition: `base` addresses a cell, i.e. every component is less
    /// than the resolution minus one.
    fn bind(&mut self, volume: &StructuredVolume, base: UVec3) {
        debug_assert!(base.x < volume.resolution().x - 1);
        debug_assert!(base.y < volume.resolution().y - 1);
        debug_assert!(base.z < volume.resolution().z - 1);

        self.base = base;
        let line = volume.nodes_per_line();
        let slice = volume.nodes_per_slice();
        let n0 = volume.node_index(base.x, base.y, base.z);
        let corners = [
            n0,
            n0 + 1,
            n0 + 1 + line,
            n0 + line,
            n0 + slice,
            n0 + 1 + slice,
            n0 + 1 + line + slice,
            n0 + line + slice,
        ];
        volume
            .values()
            .gather_corners(&corners, self.veclen, &mut self.values);
    }

    /// Recomputes the basis and derivative weights for a local coordinate
    /// in the unit cube.
    ///
    /// The expanded forms with the shared pq/qr/rp/pqr intermediates keep
    /// results bit-for-bit with the reference formulas.
    fn set_local_point(&mut self, local: Vec3) {
        let p = local.x;
        let q = local.y;
        let r = local.z;

        let pq = p * q;
        let qr = q * r;
        let rp = r * p;
        let pqr = pq * r;

        let n = &mut self.weights;
        n[0] = 1.0 - p - q - r + pq + qr + rp - pqr;
        n[1] = p - pq - rp + pqr;
        n[2] = pq - pqr;
        n[3] = q - pq - qr + pqr;
        n[4] = r - rp - qr + pqr;
        n[5] = rp - pqr;
        n[6] = pqr;
        n[7] = qr - pqr;

        let (dndp, rest) = self.derivs.split_at_mut(8);
        let (dndq, dndr) = rest.split_at_mut(8);

        dndp[0] = -1.0 + q + r - qr;
        dndp[1] = 1.0 - q - r + qr;
        dndp[2] = q - qr;
        dndp[3] = -q + qr;
        dndp[4] = -r + qr;
        dndp[5] = r - qr;
        dndp[6] = qr;
        dndp[7] = -qr;

        dndq[0] = -1.0 + p + r - rp;
        dndq[1] = -p + rp;
        dndq[2] = p - rp;
        dndq[3] = 1.0 - p - r + rp;
        dndq[4] = -r + rp;
        dndq[5] = -rp;
        dndq[6] = rp;
        dndq[7] = r - rp;

        dndr[0] = -1.0 + q + p - pq;
        dndr[1] = -p + pq;
        dndr[2] = -pq;
        dndr[3] = -q + pq;
        dndr[4] = 1.0 - q - p + pq;
        dndr[5] = p - pq;
        dndr[6] = pq;
        dndr[7] = q - pq;
    }

    fn interpolate(values: &[f32], weights: &[f32]) -> f32 {
        let mut acc = 0.0;
        for i in 0..8 {
            acc += weights[i] * values[i];
        }
        acc
    }

    /// Interpolated scalar value at the current local point (veclen 1).
    fn scalar(&self) -> f32 {
        debug_assert_eq!(self.veclen, 1);
        Self::interpolate(&self.values[0..8], &self.weights)
    }

    /// Interpolated vector value at the current local point (veclen 3).
    fn vector(&self) -> Vec3 {
        debug_assert_eq!(self.veclen, 3);
        Vec3::new(
            Self::interpolate(&self.values[0..8], &self.weights),
            Self::interpolate(&self.values[8..16], &self.weights),
            Self::interpolate(&self.values[16..24], &self.weights),
        )
    }

    /// Gradient of the scalar field at the current local point, negated so
    /// it points toward decreasing values (isosurface-normal convention).
    fn gradient_vector(&self) -> Vec3 {
        debug_assert_eq!(self.veclen, 1);
        let s = &self.values[0..8];
        let dsdx = Self::interpolate(s, &self.derivs[0..8]);
        let dsdy = Self::interpolate(s, &self.derivs[8..16]);
        let dsdz = Self::interpolate(s, &self.derivs[16..24]);
        Vec3::new(-dsdx, -dsdy, -dsdz)
    }
}

/// Interpolator over a uniform grid (implicit unit spacing).
#[derive(Debug)]
pub struct UniformGrid<'a> {
    volume: &'a StructuredVolume,
    cache: GridCache,
}

impl<'a> UniformGrid<'a> {
    /// Creates an interpolator borrowing `volume`.
    #[must_use]
    pub fn new(volume: &'a StructuredVolume) -> Self {
        Self {
            cache: GridCache::new(volume.veclen()),
            volume,
        }
    }

    /// Returns the base index of the cell containing `p`, or `None` when
    /// any component falls outside `[0, dim-1)`.
    #[must_use]
    pub fn find_cell(&self, p: Vec3) -> Option<UVec3> {
        let dim = self.volume.resolution().as_vec3();
        if p.cmplt(Vec3::ZERO).any() || p.cmpge(dim - Vec3::ONE).any() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let base = UVec3::new(p.x.floor() as u32, p.y.floor() as u32, p.z.floor() as u32);
        Some(base)
    }

    /// Local coordinate of `p` in the bound cell. Valid only after a
    /// successful [`find_cell`](Self::find_cell) and bind for `p`.
    #[must_use]
    pub fn global_to_local(&self, p: Vec3) -> Vec3 {
        p - self.cache.base.as_vec3()
    }

    /// Domain test: closed interval `[0, dim-1]` per axis.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        let dim = self.volume.resolution().as_vec3();
        p.cmpge(Vec3::ZERO).all() && p.cmple(dim - Vec3::ONE).all()
    }
}

/// Interpolator over a rectilinear grid (explicit per-axis coordinates).
#[derive(Debug)]
pub struct RectilinearGrid<'a> {
    volume: &'a StructuredVolume,
    x: &'a [f32],
    y: &'a [f32],
    z: &'a [f32],
    cache: GridCache,
}

/// Binary search for the interval index i with `coords[i] <= v < coords[i+1]`.
fn find_interval(coords: &[f32], v: f32) -> Option<u32> {
    if v < coords[0] || v >= *coords.last().unwrap() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let idx = (coords.partition_point(|c| *c <= v) - 1) as u32;
    Some(idx)
}

impl<'a> RectilinearGrid<'a> {
    /// Creates an interpolator borrowing `volume`.
    ///
    /// # Panics
    /// Panics if the volume's grid kind is not rectilinear; construct
    /// through [`GridField::new`] to dispatch on the grid kind.
    #[must_use]
    pub fn new(volume: &'a StructuredVolume) -> Self {
        let GridKind::Rectilinear { x, y, z } = volume.grid() else {
            panic!("RectilinearGrid requires a rectilinear volume");
        };
        Self {
            cache: GridCache::new(volume.veclen()),
            volume,
            x,
            y,
            z,
        }
    }

    /// Returns the base index of the cell containing `p` via per-axis
    /// binary search, or `None` outside the coordinate range.
    #[must_use]
    pub fn find_cell(&self, p: Vec3) -> Option<UVec3> {
        let i = find_interval(self.x, p.x)?;
        let j = find_interval(self.y, p.y)?;
        let k = find_interval(self.z, p.z)?;
        Some(UVec3::new(i, j, k))
    }

    /// Local coordinate of `p` in the bound cell. Valid only after a
    /// successful [`find_cell`](Self::find_cell) and bind for `p`.
    #[must_use]
    pub fn global_to_local(&self, p: Vec3) -> Vec3 {
        let b = self.cache.base;
        let lx = (p.x - self.x[b.x as usize]) / (self.x[b.x as usize + 1] - self.x[b.x as usize]);
        let ly = (p.y - self.y[b.y as usize]) / (self.y[b.y as usize + 1] - self.y[b.y as usize]);
        let lz = (p.z - self.z[b.z as usize]) / (self.z[b.z as usize + 1] - self.z[b.z as usize]);
        Vec3::new(lx, ly, lz)
    }

    /// Domain test: closed per-axis coordinate range.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.x[0]
            && p.x <= *self.x.last().unwrap()
            && p.y >= self.y[0]
            && p.y <= *self.y.last().unwrap()
            && p.z >= self.z[0]
            && p.z <= *self.z.last().unwrap()
    }
}

/// A grid interpolator dispatched over the supported grid kinds.
///
/// Owns the mutable per-cell cache; give each worker its own `GridField`
/// when tracing concurrently against the same volume.
#[derive(Debug)]
pub enum GridField<'a> {
    Uniform(UniformGrid<'a>),
    Rectilinear(RectilinearGrid<'a>),
}

impl<'a> GridField<'a> {
    /// Creates the interpolator matching the volume's grid kind.
    ///
    /// Curvilinear grids have no structured-cell interpolator and are
    /// rejected as a configuration error.
    pub fn new(volume: &'a StructuredVolume) -> Result<Self> {
        match volume.grid() {
            GridKind::Uniform => Ok(Self::Uniform(UniformGrid::new(volume))),
            GridKind::Rectilinear { .. } => Ok(Self::Rectilinear(RectilinearGrid::new(volume))),
            GridKind::Curvilinear { .. } => {
                Err(StreamvizError::UnsupportedGridKind(volume.grid().name()))
            }
        }
    }

    /// Returns the base index of the cell containing `p`, if any.
    #[must_use]
    pub fn find_cell(&self, p: Vec3) -> Option<UVec3> {
        match self {
            Self::Uniform(g) => g.find_cell(p),
            Self::Rectilinear(g) => g.find_cell(p),
        }
    }

    /// Binds the cell at `base`, caching its corner samples.
    pub fn bind(&mut self, base: UVec3) {
        match self {
            Self::Uniform(g) => g.cache.bind(g.volume, base),
            Self::Rectilinear(g) => g.cache.bind(g.volume, base),
        }
    }

    /// Local coordinate of `p` in the bound cell.
    #[must_use]
    pub fn global_to_local(&self, p: Vec3) -> Vec3 {
        match self {
            Self::Uniform(g) => g.global_to_local(p),
            Self::Rectilinear(g) => g.global_to_local(p),
        }
    }

    /// Recomputes basis and derivative weights for a local coordinate.
    pub fn set_local_point(&mut self, local: Vec3) {
        match self {
            Self::Uniform(g) => g.cache.set_local_point(local),
            Self::Rectilinear(g) => g.cache.set_local_point(local),
        }
    }

    /// Interpolated scalar at the current local point (veclen 1).
    #[must_use]
    pub fn scalar(&self) -> f32 {
        match self {
            Self::Uniform(g) => g.cache.scalar(),
            Self::Rectilinear(g) => g.cache.scalar(),
        }
    }

    /// Interpolated vector at the current local point (veclen 3).
    #[must_use]
    pub fn vector(&self) -> Vec3 {
        match self {
            Self::Uniform(g) => g.cache.vector(),
            Self::Rectilinear(g) => g.cache.vector(),
        }
    }

    /// Negated scalar gradient at the current local point (veclen 1).
    #[must_use]
    pub fn gradient_vector(&self) -> Vec3 {
        match self {
            Self::Uniform(g) => g.cache.gradient_vector(),
            Self::Rectilinear(g) => g.cache.gradient_vector(),
        }
    }

    /// Domain test for the boundary termination condition. Deliberately
    /// closed at the upper faces, wider than [`find_cell`](Self::find_cell).
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        match self {
            Self::Uniform(g) => g.contains(p),
            Self::Rectilinear(g) => g.contains(p),
        }
    }

    /// Locates, binds, and interpolates the vector value at `p`.
    #[must_use]
    pub fn sample_vector(&mut self, p: Vec3) -> Option<Vec3> {
        let base = self.find_cell(p)?;
        self.bind(base);
        let local = self.global_to_local(p);
        self.set_local_point(local);
        Some(self.vector())
    }

    /// Locates, binds, and interpolates the scalar value at `p`.
    #[must_use]
    pub fn sample_scalar(&mut self, p: Vec3) -> Option<f32> {
        let base = self.find_cell(p)?;
        self.bind(base);
        let local = self.global_to_local(p);
        self.set_local_point(local);
        Some(self.scalar())
    }

    /// Locates, binds, and interpolates the scalar gradient at `p`.
    #[must_use]
    pub fn sample_gradient(&mut self, p: Vec3) -> Option<Vec3> {
        let base = self.find_cell(p)?;
        self.bind(base);
        let local = self.global_to_local(p);
        self.set_local_point(local);
        Some(self.gradient_vector())
    }
}
