use holo_base::{Mat4, Vec3};
use holo_capture::Resolution;
use holo_pipeline::pose;
use holo_pipeline::projector::{
    anchor_position, facing_camera, pixel_to_view_ray, pixel_to_world_ray,
};
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-4;

fn vec_approx(a: Vec3<f32>, b: Vec3<f32>) -> bool {
    (a - b).length() < EPS
}

fn frame() -> Resolution {
    Resolution::new(448, 256)
}

fn forward_projection() -> Mat4<f32> {
    Mat4::perspective_lh(FRAC_PI_2, 448.0 / 256.0, 0.1, 100.0)
}

#[test]
fn test_centre_pixel_looks_straight_ahead() {
    let dir = pixel_to_world_ray(Mat4::identity(), forward_projection(), frame(), (224.0, 128.0))
        .unwrap();
    assert!(vec_approx(dir, Vec3::new(0.0, 0.0, 1.0)), "{dir:?}");
}

#[test]
fn test_minus_z_projection_looks_down_minus_z() {
    let p = Mat4::perspective_rh(FRAC_PI_2, 1.75, 0.1, 100.0);
    let dir = pixel_to_view_ray(p, frame(), (224.0, 128.0)).unwrap();
    assert!(vec_approx(dir, Vec3::new(0.0, 0.0, -1.0)), "{dir:?}");
}

#[test]
fn test_top_edge_tilts_up_by_half_fov() {
    // vertical fov of 90 degrees: the top edge is 45 degrees above forward
    let dir = pixel_to_view_ray(forward_projection(), frame(), (224.0, 0.0)).unwrap();
    let expected = Vec3::new(0.0, 1.0, 1.0).normalized();
    assert!(vec_approx(dir, expected), "{dir:?}");
}

#[test]
fn test_left_pixel_points_left() {
    let dir = pixel_to_view_ray(forward_projection(), frame(), (0.0, 128.0)).unwrap();
    assert!(dir.x < 0.0);
    assert!(dir.y.abs() < EPS);
    assert!(dir.z > 0.0);
}

#[test]
fn test_projection_is_deterministic() {
    let c2w = Mat4::from_basis(
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(3.0, 1.5, -2.0),
    );
    let a = pixel_to_world_ray(c2w, forward_projection(), frame(), (100.0, 40.0));
    let b = pixel_to_world_ray(c2w, forward_projection(), frame(), (100.0, 40.0));
    assert_eq!(a, b);
    let a = a.unwrap();
    assert!((a.length() - 1.0).abs() < EPS);
}

#[test]
fn test_camera_rotation_rotates_ray() {
    // camera turned to face world +X
    let c2w = Mat4::from_basis(
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    );
    let dir = pixel_to_world_ray(c2w, forward_projection(), frame(), (224.0, 128.0)).unwrap();
    assert!(vec_approx(dir, Vec3::new(1.0, 0.0, 0.0)), "{dir:?}");
}

#[test]
fn test_degenerate_inputs_give_no_ray() {
    assert!(
        pixel_to_world_ray(Mat4::identity(), Mat4::zero(), frame(), (10.0, 10.0)).is_none()
    );
    assert!(
        pixel_to_world_ray(
            Mat4::identity(),
            forward_projection(),
            Resolution::new(0, 0),
            (0.0, 0.0)
        )
        .is_none()
    );
}

#[test]
fn test_singular_projection_uses_intrinsics() {
    // depth row zeroed: not invertible, but focal lengths are still there
    let mut p = forward_projection();
    p.cols[2].z = 0.0;
    p.cols[3].z = 0.0;
    assert!(p.inverse().is_none());
    let dir = pixel_to_view_ray(p, frame(), (224.0, 128.0)).unwrap();
    assert!(vec_approx(dir, Vec3::new(0.0, 0.0, 1.0)), "{dir:?}");
}

#[test]
fn test_anchor_position_from_camera_origin() {
    let c2w = Mat4::from_basis(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 2.0, 3.0),
    );
    let p = anchor_position(c2w, Vec3::new(0.0, 0.0, 1.0), 2.0);
    assert!(vec_approx(p, Vec3::new(1.0, 2.0, 5.0)));
}

#[test]
fn test_axis_correction_flips_forward_only() {
    let c2w = Mat4::from_basis(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(4.0, 5.0, 6.0),
    );
    let corrected = pose::corrected_camera_to_world(c2w);
    assert_eq!(corrected.col(0), c2w.col(0));
    assert_eq!(corrected.col(1), c2w.col(1));
    assert_eq!(corrected.col(2).xyz(), -c2w.col(2).xyz());
    assert_eq!(corrected.origin(), c2w.origin());
}

#[test]
fn test_marker_faces_back_towards_camera() {
    let corrected = pose::corrected_camera_to_world(Mat4::identity());
    let facing = facing_camera(corrected);
    // corrected forward is -Z, so the marker looks along +Z with +Y up
    assert!(vec_approx(facing.forward(), Vec3::new(0.0, 0.0, 1.0)));
    assert!(vec_approx(facing.up(), Vec3::new(0.0, 1.0, 0.0)));
}
