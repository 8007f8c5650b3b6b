use std::fmt;

use serde::{Deserialize, Serialize};

/// 3D affine transform stored as the top three rows of a homogeneous 4×4
/// matrix, row-major: `[m00 m01 m02 m03 m10 ... m23]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform3D {
    m: [f64; 12],
}

impl Default for AffineTransform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform3D {
    /// Identity transform
    pub const fn identity() -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0,
            ],
        }
    }

    /// Transform from a row-major 3×4 matrix
    pub const fn from_row_major(m: [f64; 12]) -> Self {
        Self { m }
    }

    /// Diagonal scaling
    pub const fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            m: [
                sx, 0.0, 0.0, 0.0, //
                0.0, sy, 0.0, 0.0, //
                0.0, 0.0, sz, 0.0,
            ],
        }
    }

    /// Pure translation
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, tx, //
                0.0, 1.0, 0.0, ty, //
                0.0, 0.0, 1.0, tz,
            ],
        }
    }

    /// Row-major 3×4 entries
    pub fn row_major(&self) -> &[f64; 12] {
        &self.m
    }

    /// Entry at `(row, col)` of the 4×4 matrix, `None` outside it; row 3 is
    /// the implicit `[0 0 0 1]`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        match (row, col) {
            (0..=2, 0..=3) => Some(self.m[row * 4 + col]),
            (3, 3) => Some(1.0),
            (3, 0..=2) => Some(0.0),
            _ => None,
        }
    }

    /// Full homogeneous 4×4 matrix
    pub fn to_matrix4(&self) -> [[f64; 4]; 4] {
        let mut out = [[0.0, 0.0, 0.0, 1.0]; 4];
        for (r, row) in out.iter_mut().take(3).enumerate() {
            row.copy_from_slice(&self.m[r * 4..r * 4 + 4]);
        }
        out
    }

    /// `self × other`: apply `other` first, then `self`
    pub fn concatenate(&self, other: &AffineTransform3D) -> AffineTransform3D {
        let a = &self.m;
        let b = &other.m;
        let mut m = [0.0; 12];
        for r in 0..3 {
            for c in 0..4 {
                let mut v = a[r * 4] * b[c] + a[r * 4 + 1] * b[4 + c] + a[r * 4 + 2] * b[8 + c];
                if c == 3 {
                    v += a[r * 4 + 3];
                }
                m[r * 4 + c] = v;
            }
        }
        AffineTransform3D { m }
    }

    /// `other × self`: apply `self` first, then `other`
    pub fn preconcatenate(&self, other: &AffineTransform3D) -> AffineTransform3D {
        other.concatenate(self)
    }

    /// Map a point
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            m[0] * p[0] + m[1] * p[1] + m[2] * p[2] + m[3],
            m[4] * p[0] + m[5] * p[1] + m[6] * p[2] + m[7],
            m[8] * p[0] + m[9] * p[1] + m[10] * p[2] + m[11],
        ]
    }

    /// Whether this is exactly the identity
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl fmt::Display for AffineTransform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "3d-affine: (")?;
        for (i, v) in self.m.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}
