use holo_base::{Quat, Vec3};
use holo_capture::Resolution;
use image::RgbaImage;
use log::info;

use crate::WorldAnchor;

/// Where video frames and markers are shown.
pub trait DisplaySurface {
    /// Size the surface for frames of `resolution`.
    fn set_resolution(&mut self, resolution: Resolution);

    fn present(&mut self, image: &RgbaImage);

    /// Called after each detection pass with the whole pool, stale slots included.
    fn show_markers(&mut self, _anchors: &[WorldAnchor]) {}
}

/// Receives the latest human-readable status line, replacing the previous one.
pub trait StatusSink {
    fn set_text(&mut self, text: &str);
}

/// Render camera that follows the device pose.
pub trait RenderTarget {
    fn set_pose(&mut self, position: Vec3<f32>, rotation: Quat<f32>);
}

/// Status sink that logs each new status and keeps the last one.
#[derive(Debug, Default)]
pub struct LogStatus {
    text: String,
}

impl LogStatus {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusSink for LogStatus {
    fn set_text(&mut self, text: &str) {
        if text != self.text {
            info!("status: {}", text.trim_end().replace('\n', " | "));
            self.text.clear();
            self.text.push_str(text);
        }
    }
}
