use holo_base::{Mat4, Quat, Vec3};
use holo_capture::FrameSample;

/// Camera matrices captured together with one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera-to-world transform in the capture device's convention.
    pub camera_to_world: Mat4<f32>,
    pub projection: Mat4<f32>,
}

impl CameraPose {
    /// Camera-to-world transform in render convention.
    pub fn corrected(&self) -> Mat4<f32> {
        corrected_camera_to_world(self.camera_to_world)
    }

    pub fn origin(&self) -> Vec3<f32> {
        self.camera_to_world.origin()
    }
}

/// Convert 16 row-major floats into a matrix.
pub fn to_matrix(flat: &[f32; 16]) -> Mat4<f32> {
    Mat4::from_row_major(flat)
}

/// Flip the camera's local Z axis to move from capture to render handedness.
pub fn corrected_camera_to_world(camera_to_world: Mat4<f32>) -> Mat4<f32> {
    camera_to_world * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0))
}

/// Both matrices, or nothing. Non-finite values count as missing.
pub fn resolve(
    camera_to_world: Option<[f32; 16]>,
    projection: Option<[f32; 16]>,
) -> Option<CameraPose> {
    let camera_to_world = to_matrix(&camera_to_world?);
    let projection = to_matrix(&projection?);
    if !camera_to_world.is_finite() || !projection.is_finite() {
        return None;
    }
    Some(CameraPose {
        camera_to_world,
        projection,
    })
}

pub fn from_sample(sample: &dyn FrameSample) -> Option<CameraPose> {
    resolve(sample.camera_to_world(), sample.projection())
}

/// Position and rotation for a render camera placed at `corrected`.
pub fn render_pose(corrected: Mat4<f32>) -> (Vec3<f32>, Quat<f32>) {
    let rotation = Quat::look_rotation(corrected.col(2).xyz(), corrected.col(1).xyz());
    (corrected.origin(), rotation)
}
