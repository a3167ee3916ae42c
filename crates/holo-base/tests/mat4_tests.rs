use holo_base::{Mat4, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn mat_approx(a: Mat4<f32>, b: Mat4<f32>) -> bool {
    a.to_row_major()
        .iter()
        .zip(b.to_row_major().iter())
        .all(|(x, y)| approx(*x, *y))
}

#[test]
fn test_from_row_major_places_translation_in_last_column() {
    let values = [
        1.0, 0.0, 0.0, 5.0, //
        0.0, 1.0, 0.0, 6.0, //
        0.0, 0.0, 1.0, 7.0, //
        0.0, 0.0, 0.0, 1.0,
    ];
    let m = Mat4::from_row_major(&values);
    assert_eq!(m.cols[3], Vec4::new(5.0, 6.0, 7.0, 1.0));
    assert_eq!(m.origin(), Vec3::new(5.0, 6.0, 7.0));
    assert_eq!(m.to_row_major(), values);
}

#[test]
fn test_row_and_transpose_agree() {
    let m = Mat4::from_row_major(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ]);
    assert_eq!(m.row(1), Vec4::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!(m.transpose().cols[1], m.row(1));
}

#[test]
fn test_identity_determinant() {
    assert!(approx(Mat4::<f32>::identity().determinant(), 1.0));
}

#[test]
fn test_inverse_of_rigid_transform() {
    let m = Mat4::from_basis(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 2.0, 3.0),
    );
    let inv = m.inverse().expect("rigid transform is invertible");
    assert!(mat_approx(m * inv, Mat4::identity()));
}

#[test]
fn test_singular_matrix_has_no_inverse() {
    let m = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
    assert!(m.inverse().is_none());
}

#[test]
fn test_transform_vector_ignores_translation() {
    let m = Mat4::from_basis(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(10.0, 20.0, 30.0),
    );
    assert_eq!(m.transform_vector(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(m.transform_point(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(10.0, 20.0, 31.0));
}

#[test]
fn test_perspective_lh_maps_forward_point_to_positive_w() {
    let p = Mat4::perspective_lh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    let clip = p * Vec4::new(0.0, 0.0, 1.0, 1.0);
    assert!(clip.w > 0.0);
    assert!(approx(clip.x, 0.0));
}

#[test]
fn test_perspective_rh_maps_backward_point_to_positive_w() {
    let p = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    let clip = p * Vec4::new(0.0, 0.0, -1.0, 1.0);
    assert!(clip.w > 0.0);
}
