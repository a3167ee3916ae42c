use holo_base::log;
use holo_base::{Quat, Vec3};
use holo_capture::Resolution;
use holo_pipeline::{DisplaySurface, RenderTarget, WorldAnchor};
use image::RgbaImage;
use std::path::PathBuf;

/// Counts presented frames and writes the latest one to a PNG after each detection pass.
pub struct SnapshotDisplay {
    path: Option<PathBuf>,
    latest: Option<RgbaImage>,
    frames: u64,
}

impl SnapshotDisplay {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            latest: None,
            frames: 0,
        }
    }
}

impl DisplaySurface for SnapshotDisplay {
    fn set_resolution(&mut self, resolution: Resolution) {
        log::info!("display resized to {resolution}");
    }

    fn present(&mut self, image: &RgbaImage) {
        self.frames += 1;
        if self.path.is_some() {
            match self.latest.as_mut() {
                Some(latest) if latest.dimensions() == image.dimensions() => {
                    latest.copy_from_slice(image.as_raw())
                }
                _ => self.latest = Some(image.clone()),
            }
        }
    }

    fn show_markers(&mut self, anchors: &[WorldAnchor]) {
        let placed = anchors.iter().filter(|a| a.detection.is_some()).count();
        log::debug!("{placed} of {} anchors placed after {} frames", anchors.len(), self.frames);

        let (Some(path), Some(latest)) = (self.path.as_ref(), self.latest.as_ref()) else {
            return;
        };
        if let Err(e) = latest.save(path) {
            log::warn!("could not write snapshot {}: {e}", path.display());
        }
    }
}

pub struct LoggedTarget;

impl RenderTarget for LoggedTarget {
    fn set_pose(&mut self, position: Vec3<f32>, rotation: Quat<f32>) {
        log::trace!("render target at {position:?}, facing {:?}", rotation.forward());
    }
}
