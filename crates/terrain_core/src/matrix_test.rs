use glam::{Mat4, Vec3};

use super::*;

fn assert_close(a: &Matrix4, b: &[f32; 16], eps: f32) {
  for (i, (x, y)) in a.as_array().iter().zip(b.iter()).enumerate() {
    assert!((x - y).abs() <= eps, "element {}: {} vs {}\n{:?}\n{:?}", i, x, y, a.as_array(), b);
  }
}

fn sample_matrices() -> [Matrix4; 3] {
  [
    Matrix4::translation(1.0, -2.0, 3.5).rotate(33.0, 1.0, 2.0, 0.5),
    Matrix4::scaling(2.0, 0.5, 3.0).rotate(-71.0, 0.0, 1.0, 0.0),
    Matrix4::rotation(12.0, 0.3, -0.4, 0.8).translate(-4.0, 0.25, 9.0),
  ]
}

#[test]
fn test_identity_leaves_vectors_unchanged() {
  let m = Matrix4::identity();
  for v in [[0.0, 0.0, 0.0, 1.0], [1.5, -2.0, 7.0, 0.0], [1e6, -1e-6, 3.0, 2.0]] {
    assert_eq!(m.transform_vec4(v), v);
  }
  assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
}

#[test]
fn test_translation_then_inverse_translate_is_identity() {
  let m = Matrix4::translation(3.0, -7.5, 12.25).translate(-3.0, 7.5, -12.25);
  assert_close(&m, Matrix4::IDENTITY.as_array(), 1e-6);
}

#[test]
fn test_concat_associative() {
  let [a, b, c] = sample_matrices();
  let left = (a * b) * c;
  let right = a * (b * c);
  assert_close(&left, right.as_array(), 1e-4);
}

#[test]
fn test_double_transpose_restores_matrix() {
  for m in sample_matrices() {
    assert_eq!(m.transpose().transpose(), m);
  }
  let t = Matrix4::translation(1.0, 2.0, 3.0).transpose();
  assert_eq!((t.get(3, 0), t.get(3, 1), t.get(3, 2)), (1.0, 2.0, 3.0));
}

#[test]
fn test_get_reads_row_column() {
  let m = Matrix4::from_cols_array(std::array::from_fn(|i| i as f32));
  assert_eq!(m.get(1, 0), 1.0);
  assert_eq!(m.get(0, 1), 4.0);
  assert_eq!(m.get(3, 3), 15.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_row_out_of_range_panics() {
  // (4, 0) would alias element (0, 1) without the bounds check
  Matrix4::IDENTITY.get(4, 0);
}

#[test]
fn test_apply_family_matches_concat() {
  let base = Matrix4::rotation(40.0, 0.0, 0.0, 1.0);
  assert_eq!(base.translate(1.0, 2.0, 3.0), base.concat(&Matrix4::translation(1.0, 2.0, 3.0)));
  assert_eq!(base.scale(2.0, 3.0, 4.0), base.concat(&Matrix4::scaling(2.0, 3.0, 4.0)));
  assert_eq!(base.rotate(10.0, 1.0, 1.0, 0.0), base.concat(&Matrix4::rotation(10.0, 1.0, 1.0, 0.0)));
}

#[test]
fn test_translation_moves_points() {
  let m = Matrix4::translation(1.0, 0.0, -1.0);
  assert_eq!(m.transform_point([0.5, 0.5, 0.5]), [1.5, 0.5, -0.5]);
  assert_eq!(m.transform_vec4([0.5, 0.5, 0.5, 0.0]), [0.5, 0.5, 0.5, 0.0]);
}

// =============================================================================
// Rotation
// =============================================================================

#[test]
fn test_axis_fast_paths_match_glam() {
  for (axis, glam_axis) in [
    ([1.0, 0.0, 0.0], Vec3::X),
    ([0.0, 1.0, 0.0], Vec3::Y),
    ([0.0, 0.0, 1.0], Vec3::Z),
    ([-1.0, 0.0, 0.0], Vec3::NEG_X),
    ([0.0, -2.0, 0.0], Vec3::NEG_Y),
    ([0.0, 0.0, -0.5], Vec3::NEG_Z),
  ] {
    for angle in [0.0f32, 30.0, 90.0, -135.0, 360.0] {
      let ours = Matrix4::rotation(angle, axis[0], axis[1], axis[2]);
      let reference = Mat4::from_axis_angle(glam_axis, angle.to_radians());
      assert_close(&ours, &reference.to_cols_array(), 1e-6);
    }
  }
}

#[test]
fn test_general_axis_matches_glam() {
  for axis in [[1.0f32, 1.0, 0.0], [0.3, -0.4, 0.8], [2.0, 5.0, -1.0]] {
    let v = Vec3::from_array(axis).normalize();
    for angle in [17.0f32, -64.0, 200.0] {
      let ours = Matrix4::rotation(angle, axis[0], axis[1], axis[2]);
      let reference = Mat4::from_axis_angle(v, angle.to_radians());
      assert_close(&ours, &reference.to_cols_array(), 1e-5);
    }
  }
}

#[test]
fn test_rotation_zero_axis_is_identity() {
  assert_eq!(Matrix4::rotation(45.0, 0.0, 0.0, 0.0), Matrix4::IDENTITY);
}

// =============================================================================
// Projection and view
// =============================================================================

#[test]
fn test_perspective_documented_elements() {
  let (near, far) = (0.1f32, 100.0f32);
  let m = Matrix4::perspective(90.0, 1.0, near, far).expect("valid frustum");
  let e = m.as_array();

  assert!((e[0] - 1.0).abs() < 1e-6);
  assert!((e[5] - 1.0).abs() < 1e-6);
  assert_eq!(e[10], -(far + near) * (1.0 / (far - near)));
  assert_eq!(e[11], -1.0);
  assert_eq!(e[14], -2.0 * near * far * (1.0 / (far - near)));
  assert_eq!(e[15], 0.0);
  for i in [1, 2, 3, 4, 6, 7, 8, 9, 12, 13] {
    assert_eq!(e[i], 0.0, "element {}", i);
  }
}

#[test]
fn test_perspective_matches_glam() {
  for (fov, aspect, near, far) in [(90.0f32, 1.5f32, 0.1f32, 1450.0f32), (60.0, 1.0, 1.0, 50.0), (35.0, 0.75, 0.5, 8.0)] {
    let ours = Matrix4::perspective(fov, aspect, near, far).expect("valid frustum");
    let reference = Mat4::perspective_rh_gl(fov.to_radians(), aspect, near, far);
    assert_close(&ours, &reference.to_cols_array(), 1e-4);
  }
}

#[test]
fn test_perspective_rejects_degenerate_inputs() {
  assert!(matches!(Matrix4::perspective(90.0, 1.0, 1.0, 1.0), Err(MatrixError::NullFrustum { .. })));
  assert!(matches!(Matrix4::perspective(90.0, 0.0, 0.1, 10.0), Err(MatrixError::NullFrustum { .. })));
  assert!(matches!(Matrix4::perspective(0.0, 1.0, 0.1, 10.0), Err(MatrixError::NullFrustum { .. })));
  assert_eq!(Matrix4::perspective(90.0, 1.0, 0.0, 10.0), Err(MatrixError::NonPositiveNear(0.0)));
  assert_eq!(Matrix4::perspective(90.0, 1.0, -1.0, 10.0), Err(MatrixError::NonPositiveNear(-1.0)));
  assert_eq!(Matrix4::perspective(90.0, 1.0, 0.1, -5.0), Err(MatrixError::NonPositiveFar(-5.0)));
  assert_eq!(Matrix4::perspective(f32::NAN, 1.0, 0.1, 10.0), Err(MatrixError::NonFinite));
}

#[test]
fn test_look_at_matches_glam() {
  let cases = [
    ([0.0f32, 0.0, 1.0], [0.0f32, -0.25, 0.0]),
    ([3.0, 10.0, -7.0], [3.5, 9.75, -6.2]),
    ([-50.0, 2.0, 4.0], [0.0, 0.0, 0.0]),
  ];
  for (eye, center) in cases {
    let ours = Matrix4::look_at(eye, center, [0.0, 1.0, 0.0]).expect("valid view");
    let reference = Mat4::look_at_rh(Vec3::from_array(eye), Vec3::from_array(center), Vec3::Y);
    assert_close(&ours, &reference.to_cols_array(), 1e-4);
  }
}

#[test]
fn test_look_at_maps_eye_to_origin() {
  let eye = [4.0, -2.0, 9.0];
  let view = Matrix4::look_at(eye, [5.0, -2.0, 9.0], [0.0, 1.0, 0.0]).expect("valid view");
  for c in view.transform_point(eye) {
    assert!(c.abs() < 1e-5);
  }
  // The look target lands on the negative z axis
  let target = view.transform_point([5.0, -2.0, 9.0]);
  assert!(target[0].abs() < 1e-5 && target[1].abs() < 1e-5);
  assert!((target[2] + 1.0).abs() < 1e-5);
}

#[test]
fn test_look_at_rejects_degenerate_inputs() {
  let up = [0.0, 1.0, 0.0];
  assert_eq!(Matrix4::look_at([1.0, 2.0, 3.0], [1.0, 2.0, 3.0], up), Err(MatrixError::DegenerateView));
  assert_eq!(Matrix4::look_at([0.0, 0.0, 0.0], [0.0, 5.0, 0.0], up), Err(MatrixError::DegenerateView));
  assert_eq!(Matrix4::look_at([0.0, f32::INFINITY, 0.0], [1.0, 0.0, 0.0], up), Err(MatrixError::NonFinite));
}
