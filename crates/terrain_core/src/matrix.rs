//! 4×4 affine / projective transforms.
//!
//! `Matrix4` is a `Copy` value in column-major order: element `(row, col)`
//! is stored at `col * 4 + row`, matching the layout GPU uniform uploads
//! expect.
//!
//! Two operation families:
//!
//! - **Assign** (associated constructors): `identity`, `translation`,
//!   `scaling`, `rotation`, `perspective`, `look_at` produce exactly that
//!   transform.
//! - **Apply** (consuming `self`): `translate`, `scale`, `rotate`, `concat`
//!   right-multiply, i.e. `result = self · transform`. The transform is
//!   applied to points *before* whatever `self` already does.
//!
//! ```ignore
//! // Scale a chunk, then shift it down 8 model units:
//! let model = Matrix4::scaling(48.0, 1.0, 48.0).translate(0.0, -8.0, 0.0);
//! ```

use std::ops::Mul;

use crate::error::MatrixError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
  elements: [f32; 16],
}

impl Default for Matrix4 {
  fn default() -> Self {
    Self::IDENTITY
  }
}

impl Matrix4 {
  #[rustfmt::skip]
  pub const IDENTITY: Self = Self {
    elements: [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0,
    ],
  };

  #[inline]
  pub fn identity() -> Self {
    Self::IDENTITY
  }

  /// Build from 16 column-major elements.
  #[inline]
  pub fn from_cols_array(elements: [f32; 16]) -> Self {
    Self { elements }
  }

  /// Column-major elements, ready for upload.
  #[inline]
  pub fn as_array(&self) -> &[f32; 16] {
    &self.elements
  }

  /// Element at `(row, col)`.
  ///
  /// # Panics
  ///
  /// Panics if `row` or `col` is 4 or more.
  #[inline]
  pub fn get(&self, row: usize, col: usize) -> f32 {
    assert!(row < 4 && col < 4, "Matrix4 index ({}, {}) out of range", row, col);
    self.elements[col * 4 + row]
  }

  // ===========================================================================
  // Assign family
  // ===========================================================================

  #[rustfmt::skip]
  pub fn translation(x: f32, y: f32, z: f32) -> Self {
    Self {
      elements: [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        x,   y,   z,   1.0,
      ],
    }
  }

  #[rustfmt::skip]
  pub fn scaling(x: f32, y: f32, z: f32) -> Self {
    Self {
      elements: [
        x,   0.0, 0.0, 0.0,
        0.0, y,   0.0, 0.0,
        0.0, 0.0, z,   0.0,
        0.0, 0.0, 0.0, 1.0,
      ],
    }
  }

  /// Rotation of `angle_degrees` around `(x, y, z)`.
  ///
  /// Pure X/Y/Z axes use closed forms (a negative component flips the
  /// rotation direction). Any other axis goes through Rodrigues' formula,
  /// normalising the axis only when its length is not already 1. A zero
  /// axis yields the identity.
  pub fn rotation(angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
    let radians = angle_degrees.to_radians();
    let mut s = radians.sin();
    let c = radians.cos();
    let mut e = Self::IDENTITY.elements;

    if x != 0.0 && y == 0.0 && z == 0.0 {
      if x < 0.0 {
        s = -s;
      }
      e[5] = c;
      e[6] = s;
      e[9] = -s;
      e[10] = c;
    } else if x == 0.0 && y != 0.0 && z == 0.0 {
      if y < 0.0 {
        s = -s;
      }
      e[0] = c;
      e[2] = -s;
      e[8] = s;
      e[10] = c;
    } else if x == 0.0 && y == 0.0 && z != 0.0 {
      if z < 0.0 {
        s = -s;
      }
      e[0] = c;
      e[1] = s;
      e[4] = -s;
      e[5] = c;
    } else {
      let len = (x * x + y * y + z * z).sqrt();
      if len == 0.0 {
        return Self::IDENTITY;
      }
      let (x, y, z) = if len != 1.0 {
        let rlen = 1.0 / len;
        (x * rlen, y * rlen, z * rlen)
      } else {
        (x, y, z)
      };

      let nc = 1.0 - c;
      let (xy, yz, zx) = (x * y, y * z, z * x);
      let (xs, ys, zs) = (x * s, y * s, z * s);

      e[0] = x * x * nc + c;
      e[1] = xy * nc + zs;
      e[2] = zx * nc - ys;

      e[4] = xy * nc - zs;
      e[5] = y * y * nc + c;
      e[6] = yz * nc + xs;

      e[8] = zx * nc + ys;
      e[9] = yz * nc - xs;
      e[10] = z * z * nc + c;
    }

    Self { elements: e }
  }

  /// Symmetric perspective projection (OpenGL clip conventions).
  ///
  /// Rejects inputs that would produce a degenerate frustum instead of
  /// returning a garbage matrix.
  pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self, MatrixError> {
    if !(fov_y_degrees.is_finite() && aspect.is_finite() && near.is_finite() && far.is_finite()) {
      tracing::warn!(fov_y_degrees, aspect, near, far, "perspective: non-finite input");
      return Err(MatrixError::NonFinite);
    }

    let null_frustum = MatrixError::NullFrustum {
      fov_y_degrees,
      aspect,
      near,
      far,
    };
    if near == far || aspect == 0.0 {
      tracing::warn!(aspect, near, far, "perspective: null frustum");
      return Err(null_frustum);
    }
    if near <= 0.0 {
      tracing::warn!(near, "perspective: near <= 0");
      return Err(MatrixError::NonPositiveNear(near));
    }
    if far <= 0.0 {
      tracing::warn!(far, "perspective: far <= 0");
      return Err(MatrixError::NonPositiveFar(far));
    }

    let half_fov = fov_y_degrees.to_radians() / 2.0;
    let s = half_fov.sin();
    if s == 0.0 {
      tracing::warn!(fov_y_degrees, "perspective: sin(fov / 2) == 0");
      return Err(null_frustum);
    }

    let rd = 1.0 / (far - near);
    let ct = half_fov.cos() / s;

    let mut e = [0.0; 16];
    e[0] = ct / aspect;
    e[5] = ct;
    e[10] = -(far + near) * rd;
    e[11] = -1.0;
    e[14] = -2.0 * near * far * rd;
    Ok(Self { elements: e })
  }

  /// Right-handed view matrix looking from `eye` towards `center`.
  ///
  /// `view = basis · translation(−eye)` where the basis rows are the
  /// normalised right vector `f × up`, the recomputed up `s × f`, and `−f`.
  pub fn look_at(eye: [f32; 3], center: [f32; 3], up: [f32; 3]) -> Result<Self, MatrixError> {
    if !eye.iter().chain(&center).chain(&up).all(|v| v.is_finite()) {
      tracing::warn!(?eye, ?center, ?up, "look_at: non-finite input");
      return Err(MatrixError::NonFinite);
    }

    let f = sub(center, eye);
    let f_len = length(f);
    if f_len == 0.0 {
      tracing::warn!(?eye, "look_at: eye equals center");
      return Err(MatrixError::DegenerateView);
    }
    let f = scaled(f, 1.0 / f_len);

    let s = cross(f, up);
    let s_len = length(s);
    if s_len == 0.0 {
      tracing::warn!(?f, ?up, "look_at: view direction parallel to up");
      return Err(MatrixError::DegenerateView);
    }
    let s = scaled(s, 1.0 / s_len);

    let u = cross(s, f);

    #[rustfmt::skip]
    let basis = Self {
      elements: [
        s[0], u[0], -f[0], 0.0,
        s[1], u[1], -f[1], 0.0,
        s[2], u[2], -f[2], 0.0,
        0.0,  0.0,  0.0,   1.0,
      ],
    };
    Ok(basis.translate(-eye[0], -eye[1], -eye[2]))
  }

  // ===========================================================================
  // Apply family
  // ===========================================================================

  /// `self · translation(x, y, z)`.
  #[must_use]
  pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
    let mut e = self.elements;
    for row in 0..4 {
      e[12 + row] += e[row] * x + e[4 + row] * y + e[8 + row] * z;
    }
    Self { elements: e }
  }

  /// `self · scaling(x, y, z)`.
  #[must_use]
  pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
    let mut e = self.elements;
    for row in 0..4 {
      e[row] *= x;
      e[4 + row] *= y;
      e[8 + row] *= z;
    }
    Self { elements: e }
  }

  /// `self · rotation(angle_degrees, x, y, z)`.
  #[must_use]
  pub fn rotate(self, angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
    self.concat(&Self::rotation(angle_degrees, x, y, z))
  }

  /// Matrix product `self · other`, computed column by column.
  #[must_use]
  pub fn concat(&self, other: &Self) -> Self {
    let a = &self.elements;
    let b = &other.elements;
    let mut e = [0.0; 16];
    for i in 0..4 {
      let (ai0, ai1, ai2, ai3) = (a[i], a[i + 4], a[i + 8], a[i + 12]);
      e[i] = ai0 * b[0] + ai1 * b[1] + ai2 * b[2] + ai3 * b[3];
      e[i + 4] = ai0 * b[4] + ai1 * b[5] + ai2 * b[6] + ai3 * b[7];
      e[i + 8] = ai0 * b[8] + ai1 * b[9] + ai2 * b[10] + ai3 * b[11];
      e[i + 12] = ai0 * b[12] + ai1 * b[13] + ai2 * b[14] + ai3 * b[15];
    }
    Self { elements: e }
  }

  /// Swap the six off-diagonal pairs.
  #[must_use]
  pub fn transpose(self) -> Self {
    let mut e = self.elements;
    for (i, j) in [(1, 4), (2, 8), (3, 12), (6, 9), (7, 13), (11, 14)] {
      e.swap(i, j);
    }
    Self { elements: e }
  }

  // ===========================================================================
  // Application to vectors
  // ===========================================================================

  pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
    let e = &self.elements;
    let mut out = [0.0; 4];
    for (row, slot) in out.iter_mut().enumerate() {
      *slot = e[row] * v[0] + e[4 + row] * v[1] + e[8 + row] * v[2] + e[12 + row] * v[3];
    }
    out
  }

  /// Apply to a point (`w = 1`), dropping the resulting `w`.
  pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
    let [x, y, z, _] = self.transform_vec4([p[0], p[1], p[2], 1.0]);
    [x, y, z]
  }
}

impl Mul for Matrix4 {
  type Output = Matrix4;

  fn mul(self, rhs: Matrix4) -> Matrix4 {
    self.concat(&rhs)
  }
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [
    a[1] * b[2] - a[2] * b[1],
    a[2] * b[0] - a[0] * b[2],
    a[0] * b[1] - a[1] * b[0],
  ]
}

#[inline]
fn length(v: [f32; 3]) -> f32 {
  (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[inline]
fn scaled(v: [f32; 3], k: f32) -> [f32; 3] {
  [v[0] * k, v[1] * k, v[2] * k]
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;
