use holo_base::{Mat4, Quat, Vec3};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::{
    CaptureConfig, CaptureError, CaptureProvider, FrameHandler, PixelFormat, RawSample, Resolution,
    VideoCapture,
};

/// Height of the synthetic camera above the world origin, in metres.
const EYE_HEIGHT: f32 = 1.6;
/// Yaw speed of the orbiting camera, in radians per second.
const YAW_RATE: f32 = 0.25;
const VERTICAL_FOV: f32 = 0.8;

type SharedHandler = Arc<Mutex<Option<FrameHandler>>>;

/// Capture device that renders gradient frames on its own thread.
///
/// The camera sits at eye height and slowly turns about the world Y axis.
/// Matrices follow the usual device convention: right-handed, camera looking
/// down its local -Z axis.
pub struct SyntheticCapture {
    modes: Vec<(Resolution, Vec<f32>)>,
    pose_gap: Option<u64>,
    frame_limit: Option<u64>,
    fail_start: bool,
    handler: SharedHandler,
    running: Arc<AtomicBool>,
    frames_sent: Arc<AtomicU64>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for SyntheticCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticCapture")
            .field("modes", &self.modes)
            .field("pose_gap", &self.pose_gap)
            .field("frame_limit", &self.frame_limit)
            .field("running", &self.running.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for SyntheticCapture {
    fn default() -> Self {
        Self::new(vec![
            (Resolution::new(1280, 720), vec![15.0, 30.0]),
            (Resolution::new(448, 256), vec![15.0, 30.0]),
        ])
    }
}

impl SyntheticCapture {
    /// Device offering the given resolutions, each with its frame rates.
    pub fn new(modes: Vec<(Resolution, Vec<f32>)>) -> Self {
        Self {
            modes,
            pose_gap: None,
            frame_limit: None,
            fail_start: false,
            handler: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            frames_sent: Arc::new(AtomicU64::new(0)),
            thread_handle: None,
        }
    }

    /// Withhold the matrices on every `gap`-th frame.
    pub fn with_pose_gap(mut self, gap: u64) -> Self {
        self.pose_gap = Some(gap.max(1));
        self
    }

    /// Stop emitting after `limit` frames.
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    /// Make `start_video_mode` fail.
    pub fn with_start_failure(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn frames_sent(&self) -> u64 {
        self.frames_sent.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Camera-to-world matrix for the camera at time `t` seconds.
    pub fn camera_to_world_at(t: f32) -> Mat4<f32> {
        let yaw = Quat::from_axis_angle(Vec3::UP, t * YAW_RATE);
        Mat4::from_basis(
            yaw.rotate(Vec3::new(1.0, 0.0, 0.0)),
            yaw.rotate(Vec3::UP),
            yaw.rotate(Vec3::FORWARD),
            Vec3::new(0.0, EYE_HEIGHT, 0.0),
        )
    }

    pub fn projection_for(resolution: Resolution) -> Mat4<f32> {
        let aspect = resolution.width as f32 / resolution.height.max(1) as f32;
        Mat4::perspective_rh(VERTICAL_FOV, aspect, 0.1, 100.0)
    }

    fn render(resolution: Resolution, frame: u64) -> Vec<u8> {
        let mut bytes = vec![0u8; resolution.bgra_len()];
        let width = resolution.width.max(1) as usize;
        let shift = frame as usize;
        for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
            let x = i % width;
            let y = i / width;
            px[0] = ((x + shift) % 256) as u8;
            px[1] = (y % 256) as u8;
            px[2] = ((x + y) % 256) as u8;
            px[3] = 255;
        }
        bytes
    }

    fn capture_loop(
        config: CaptureConfig,
        handler: SharedHandler,
        running: Arc<AtomicBool>,
        frames_sent: Arc<AtomicU64>,
        pose_gap: Option<u64>,
        frame_limit: Option<u64>,
    ) {
        let resolution = config.resolution();
        let interval = Duration::from_secs_f32(1.0 / config.frame_rate().max(1) as f32);
        let projection = Self::projection_for(resolution).to_row_major();
        let mut frame: u64 = 0;

        while running.load(Ordering::Relaxed) {
            if frame_limit.is_some_and(|limit| frame >= limit) {
                break;
            }

            let t = frame as f32 * interval.as_secs_f32();
            let mut sample = RawSample {
                resolution,
                bytes: Self::render(resolution, frame),
                camera_to_world: None,
                projection: None,
            };
            let withheld = pose_gap.is_some_and(|gap| frame % gap == gap - 1);
            if !withheld {
                sample = sample.with_pose(Self::camera_to_world_at(t).to_row_major(), projection);
            }

            {
                let mut handler = handler.lock().unwrap_or_else(|e| e.into_inner());
                if let Some(handler) = handler.as_mut() {
                    handler(&sample);
                }
            }

            frame += 1;
            frames_sent.store(frame, Ordering::Relaxed);
            thread::sleep(interval);
        }

        running.store(false, Ordering::Relaxed);
        debug!("synthetic capture thread exiting after {frame} frames");
    }
}

impl VideoCapture for SyntheticCapture {
    fn supported_resolutions(&self) -> Vec<Resolution> {
        self.modes.iter().map(|(r, _)| *r).collect()
    }

    fn frame_rates(&self, resolution: Resolution) -> Vec<f32> {
        self.modes
            .iter()
            .find(|(r, _)| *r == resolution)
            .map(|(_, rates)| rates.clone())
            .unwrap_or_default()
    }

    fn subscribe(&mut self, handler: FrameHandler) {
        *self.handler.lock().unwrap_or_else(|e| e.into_inner()) = Some(handler);
    }

    fn unsubscribe(&mut self) {
        self.handler.lock().unwrap_or_else(|e| e.into_inner()).take();
    }

    async fn start_video_mode(&mut self, config: &CaptureConfig) -> Result<(), CaptureError> {
        if self.fail_start {
            return Err(CaptureError::ModeStart("device refused video mode".to_string()));
        }
        if config.pixel_format() != PixelFormat::Bgra32 {
            return Err(CaptureError::Config(format!(
                "unsupported pixel format {}",
                config.pixel_format()
            )));
        }
        if !self.supported_resolutions().contains(&config.resolution()) {
            return Err(CaptureError::Config(format!(
                "unsupported resolution {}",
                config.resolution()
            )));
        }
        if self.running.swap(true, Ordering::Relaxed) {
            return Err(CaptureError::ModeStart("video mode already started".to_string()));
        }

        let config = config.clone();
        let handler = Arc::clone(&self.handler);
        let running = Arc::clone(&self.running);
        let frames_sent = Arc::clone(&self.frames_sent);
        let pose_gap = self.pose_gap;
        let frame_limit = self.frame_limit;

        info!("synthetic capture starting: {config}");
        let handle = thread::Builder::new()
            .name("synthetic-capture".to_string())
            .spawn(move || {
                Self::capture_loop(config, handler, running, frames_sent, pose_gap, frame_limit)
            });
        match handle {
            Ok(handle) => self.thread_handle = Some(handle),
            Err(e) => {
                self.running.store(false, Ordering::Relaxed);
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn dispose(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                warn!("synthetic capture thread panicked");
            }
        }
    }
}

impl Drop for SyntheticCapture {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Provider handing out one [`SyntheticCapture`], or none when unavailable.
#[derive(Debug, Default)]
pub struct SyntheticProvider {
    capture: Mutex<Option<SyntheticCapture>>,
}

impl SyntheticProvider {
    pub fn new(capture: SyntheticCapture) -> Self {
        Self {
            capture: Mutex::new(Some(capture)),
        }
    }

    /// Provider with no device attached.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl CaptureProvider for SyntheticProvider {
    type Capture = SyntheticCapture;

    async fn video_capture(&self) -> Option<SyntheticCapture> {
        self.capture.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}
