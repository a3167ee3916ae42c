//! Pixel to world-space ray conversion.
//!
//! Everything here is a pure function of its inputs. The camera-to-world
//! matrix and the projection must share one view-space convention; the
//! projection decides which way "forward" points.

use holo_base::{Mat4, Quat, Vec3, Vec4};
use holo_capture::Resolution;

const MIN_W: f32 = 1e-9;

/// Map a pixel (origin top-left, y down) to normalized device coordinates
/// (origin centre, y up, both axes in [-1, 1] across the frame).
pub fn pixel_to_ndc(resolution: Resolution, pixel: (f32, f32)) -> (f32, f32) {
    let half_w = resolution.width as f32 / 2.0;
    let half_h = resolution.height as f32 / 2.0;
    ((pixel.0 - half_w) / half_w, -(pixel.1 - half_h) / half_h)
}

fn unproject(inverse: Mat4<f32>, ndc: (f32, f32), depth: f32) -> Option<Vec3<f32>> {
    (inverse * Vec4::new(ndc.0, ndc.1, depth, 1.0)).project()
}

// For projections that drop depth (singular), read focal lengths and principal
// point straight from the matrix.
fn view_ray_from_intrinsics(projection: Mat4<f32>, ndc: (f32, f32)) -> Option<Vec3<f32>> {
    let fx = projection.cols[0].x;
    let fy = projection.cols[1].y;
    let w = projection.cols[2].w;
    if fx.abs() < MIN_W || fy.abs() < MIN_W || w.abs() < MIN_W {
        return None;
    }
    let z = w.signum();
    let x = z * (ndc.0 * w - projection.cols[2].x) / fx;
    let y = z * (ndc.1 * w - projection.cols[2].y) / fy;
    Vec3::new(x, y, z).try_normalized()
}

/// Unit view-space direction through `pixel`.
///
/// Un-projects two depths along the pixel's line of sight through the inverse
/// projection and takes the far-minus-near direction. Assumes NDC depth grows
/// with distance. Returns `None` for a degenerate projection.
pub fn pixel_to_view_ray(
    projection: Mat4<f32>,
    resolution: Resolution,
    pixel: (f32, f32),
) -> Option<Vec3<f32>> {
    if resolution.width == 0 || resolution.height == 0 {
        return None;
    }
    let ndc = pixel_to_ndc(resolution, pixel);
    match projection.inverse() {
        Some(inverse) => {
            let near = unproject(inverse, ndc, 0.0)?;
            let far = unproject(inverse, ndc, 0.5)?;
            (far - near).try_normalized()
        }
        None => view_ray_from_intrinsics(projection, ndc),
    }
}

/// Unit world-space direction through `pixel`, starting at the camera origin.
///
/// Add `camera_to_world.origin()` (see [`anchor_position`]) for an absolute point.
pub fn pixel_to_world_ray(
    camera_to_world: Mat4<f32>,
    projection: Mat4<f32>,
    resolution: Resolution,
    pixel: (f32, f32),
) -> Option<Vec3<f32>> {
    let view = pixel_to_view_ray(projection, resolution, pixel)?;
    camera_to_world.transform_vector(view).try_normalized()
}

/// World point `distance` along `direction` from the camera origin.
pub fn anchor_position(camera_to_world: Mat4<f32>, direction: Vec3<f32>, distance: f32) -> Vec3<f32> {
    camera_to_world.origin() + direction * distance
}

/// Orientation for a marker that faces the viewer: looking back along the
/// camera's forward axis with the camera's up.
pub fn facing_camera(render_camera_to_world: Mat4<f32>) -> Quat<f32> {
    let forward = render_camera_to_world.col(2).xyz();
    let up = render_camera_to_world.col(1).xyz();
    Quat::look_rotation(-forward, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let res = Resolution::new(100, 50);
        assert_eq!(pixel_to_ndc(res, (0.0, 0.0)), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(res, (100.0, 50.0)), (1.0, -1.0));
        assert_eq!(pixel_to_ndc(res, (50.0, 25.0)), (0.0, 0.0));
    }

    #[test]
    fn test_intrinsics_path_matches_inverse_path() {
        let p = Mat4::perspective_rh(1.0, 1.5, 0.1, 50.0);
        let ndc = (0.3, -0.4);
        let inverse = p.inverse().unwrap();
        let a = (unproject(inverse, ndc, 0.5).unwrap() - unproject(inverse, ndc, 0.0).unwrap())
            .normalized();
        let b = view_ray_from_intrinsics(p, ndc).unwrap();
        assert!((a - b).length() < 1e-4);
    }
}
