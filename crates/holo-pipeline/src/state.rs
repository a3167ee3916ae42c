use std::sync::Arc;

use holo_base::Mat4;
use holo_capture::{Resolution, VideoTexture};
use holo_detect::{Detection, Detector};
use log::{debug, trace, warn};

use crate::pose::{self, CameraPose};
use crate::{
    DetectionGate, DisplaySurface, FramePacket, MarkerPool, PipelineConfig, PipelineStats,
    Placement, RenderTarget, StatusSink, projector,
};

/// Consumer-side state. Every queued action runs against this on the tick thread.
pub struct PipelineState<D> {
    config: PipelineConfig,
    texture: Option<VideoTexture>,
    display: Box<dyn DisplaySurface>,
    status: Box<dyn StatusSink>,
    render_target: Box<dyn RenderTarget>,
    detector: Option<D>,
    gate: DetectionGate,
    markers: MarkerPool,
    stats: Arc<PipelineStats>,
    last_status: String,
    last_detections: Vec<Detection>,
}

/// One line per detection, `<label> <score>`.
pub fn summarize(detections: &[Detection]) -> String {
    detections.iter().map(|d| format!("{d}\n")).collect()
}

impl<D: Detector> PipelineState<D> {
    pub fn new(
        config: PipelineConfig,
        detector: D,
        display: Box<dyn DisplaySurface>,
        status: Box<dyn StatusSink>,
        render_target: Box<dyn RenderTarget>,
        stats: Arc<PipelineStats>,
    ) -> Self {
        Self {
            gate: DetectionGate::new(config.gate_period()),
            markers: MarkerPool::new(config.pool_size()),
            config,
            texture: None,
            display,
            status,
            render_target,
            detector: Some(detector),
            stats,
            last_status: String::new(),
            last_detections: Vec::new(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.last_status = text.into();
        self.status.set_text(&self.last_status);
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.texture = Some(VideoTexture::new(resolution));
        self.display.set_resolution(resolution);
    }

    /// Show the frame and, when the pose is known, follow it and maybe detect.
    pub fn process_frame(&mut self, packet: FramePacket) {
        let FramePacket {
            bytes,
            resolution,
            pose,
        } = packet;

        // every delivered frame counts towards the detection period, even one that fails to upload
        let armed = self.gate.tick();

        let texture = self
            .texture
            .get_or_insert_with(|| VideoTexture::new(resolution));
        if let Err(e) = texture.load_bgra(bytes.as_slice(), resolution) {
            warn!("skipping frame: {e}");
            return;
        }
        // hand the bytes back to the producer as early as possible
        drop(bytes);
        self.display.present(texture.image());
        self.stats.record_presented();

        let Some(pose) = pose else {
            self.stats.record_without_pose();
            trace!("no pose for frame, skipping projection");
            return;
        };

        let corrected = pose.corrected();
        let (position, rotation) = pose::render_pose(corrected);
        self.render_target.set_pose(position, rotation);

        if armed {
            self.run_detection(&pose, corrected, resolution);
        }
    }

    fn run_detection(&mut self, pose: &CameraPose, corrected: Mat4<f32>, resolution: Resolution) {
        let (Some(detector), Some(texture)) = (self.detector.as_mut(), self.texture.as_ref()) else {
            return;
        };
        let result = detector.process_image(texture.image(), self.config.confidence_threshold());
        self.gate.complete();
        self.stats.record_detection_pass();

        let detections = match result {
            Ok(detections) => detections,
            Err(e) => {
                warn!("detection failed: {e}");
                self.set_status(format!("Detection failed: {e}"));
                return;
            }
        };

        let facing = projector::facing_camera(corrected);
        let distance = self.config.anchor_distance();
        let box_anchor = self.config.box_anchor();
        let camera = *pose;
        let placed = self.markers.assign_in_order(detections.iter().map(|d| {
            let pixel = box_anchor.pixel(&d.bbox, resolution);
            let direction = projector::pixel_to_world_ray(
                camera.camera_to_world,
                camera.projection,
                resolution,
                pixel,
            )?;
            Some(Placement {
                position: projector::anchor_position(camera.camera_to_world, direction, distance),
                orientation: facing,
                detection: *d,
            })
        }));
        debug!(
            "detection pass: {} detections, {} anchors placed",
            detections.len(),
            placed
        );

        self.display.show_markers(self.markers.anchors());
        self.set_status(summarize(&detections));
        self.last_detections = detections;
    }

    /// Release the detector. Later frames are shown but not detected on.
    pub fn release_detector(&mut self) {
        if let Some(mut detector) = self.detector.take() {
            detector.release();
        }
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    pub fn status(&self) -> &str {
        &self.last_status
    }

    pub fn markers(&self) -> &MarkerPool {
        &self.markers
    }

    pub fn gate(&self) -> &DetectionGate {
        &self.gate
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Detections from the latest successful pass.
    pub fn last_detections(&self) -> &[Detection] {
        &self.last_detections
    }

    pub fn texture(&self) -> Option<&VideoTexture> {
        self.texture.as_ref()
    }
}
