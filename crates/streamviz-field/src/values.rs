//! Flat node-sample storage over heterogeneous numeric types.

/// Node samples in their native numeric storage type.
///
/// The interpolator works in `f32`; conversion from the native type happens
/// once per cell bind through [`ValueArray::gather_corners`], implemented as
/// a single generic gather dispatched over the variants.
#[derive(Debug, Clone)]
pub enum ValueArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

macro_rules! dispatch {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            ValueArray::I8($v) => $body,
            ValueArray::U8($v) => $body,
            ValueArray::I16($v) => $body,
            ValueArray::U16($v) => $body,
            ValueArray::I32($v) => $body,
            ValueArray::U32($v) => $body,
            ValueArray::I64($v) => $body,
            ValueArray::U64($v) => $body,
            ValueArray::F32($v) => $body,
            ValueArray::F64($v) => $body,
        }
    };
}

impl ValueArray {
    /// Returns the number of stored components (nodes × veclen).
    #[must_use]
    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    /// Returns true if no components are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the component at flat index `i`, converted to `f32`.
    #[must_use]
    pub fn get_f32(&self, i: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let value = dispatch!(self, v => v[i] as f32);
        value
    }

    /// Gathers the samples of 8 cell corners into a component-major `f32`
    /// cache: `out[c * 8 + n]` holds component `c` of corner `n`.
    ///
    /// `corners` are node indices; `veclen` components are read per node
    /// (at most 3). Conversion from the native type happens here, once.
    pub fn gather_corners(&self, corners: &[usize; 8], veclen: usize, out: &mut [f32; 24]) {
        debug_assert!(veclen <= 3);
        #[allow(clippy::cast_precision_loss)]
        {
            dispatch!(self, v => {
                for c in 0..veclen {
                    for (n, &node) in corners.iter().enumerate() {
                        out[c * 8 + n] = v[node * veclen + c] as f32;
                    }
                }
            });
        }
    }
}

impl From<Vec<f32>> for ValueArray {
    fn from(v: Vec<f32>) -> Self {
        Self::F32(v)
    }
}

impl From<Vec<f64>> for ValueArray {
    fn from(v: Vec<f64>) -> Self {
        Self::F64(v)
    }
}

impl From<Vec<u8>> for ValueArray {
    fn from(v: Vec<u8>) -> Self {
        Self::U8(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_f32_converts() {
        let a = ValueArray::U16(vec![0, 1000, 65535]);
        assert_eq!(a.get_f32(1), 1000.0);
        assert_eq!(a.get_f32(2), 65535.0);

        let b = ValueArray::F64(vec![0.5, -2.25]);
        assert_eq!(b.get_f32(1), -2.25);
    }

    #[test]
    fn test_gather_corners_scalar() {
        // 8 scalar nodes 0..8, identity corner set.
        let a = ValueArray::U8((0..8).collect());
        let mut out = [0.0_f32; 24];
        a.gather_corners(&[0, 1, 2, 3, 4, 5, 6, 7], 1, &mut out);
        for n in 0..8 {
            #[allow(clippy::cast_precision_loss)]
            let expected = n as f32;
            assert_eq!(out[n], expected);
        }
    }

    #[test]
    fn test_gather_corners_vector_is_component_major() {
        // 2 nodes with veclen 3; gather node 1 into every corner slot.
        let a = ValueArray::F32(vec![0.0, 0.0, 0.0, 10.0, 20.0, 30.0]);
        let mut out = [0.0_f32; 24];
        a.gather_corners(&[1; 8], 3, &mut out);
        assert_eq!(out[0], 10.0); // x components first
        assert_eq!(out[8], 20.0); // then y
        assert_eq!(out[16], 30.0); // then z
    }
}
