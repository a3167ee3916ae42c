use crate::{CaptureConfig, CaptureError, Resolution};

/// One frame delivered by a capture device.
///
/// The sample is only valid for the duration of the handler call; bytes must
/// be copied out with [`FrameSample::copy_raw_into`] before returning.
pub trait FrameSample {
    /// Byte length of the raw image data.
    fn data_len(&self) -> usize;

    fn resolution(&self) -> Resolution;

    /// Copy the raw image bytes into `buffer`, which must hold at least `data_len()` bytes.
    fn copy_raw_into(&self, buffer: &mut [u8]) -> Result<(), CaptureError>;

    /// Camera-to-world matrix as 16 row-major floats, if the device could locate itself.
    fn camera_to_world(&self) -> Option<[f32; 16]>;

    /// Projection matrix as 16 row-major floats, if available for this sample.
    fn projection(&self) -> Option<[f32; 16]>;
}

/// Per-frame callback, invoked on the capture device's thread.
pub type FrameHandler = Box<dyn FnMut(&dyn FrameSample) + Send>;

/// A capture handle obtained from a [`CaptureProvider`].
#[allow(async_fn_in_trait)]
pub trait VideoCapture {
    fn supported_resolutions(&self) -> Vec<Resolution>;

    fn frame_rates(&self, resolution: Resolution) -> Vec<f32>;

    /// Smallest supported resolution by pixel count.
    fn lowest_resolution(&self) -> Option<Resolution> {
        self.supported_resolutions()
            .into_iter()
            .min_by_key(|r| r.pixel_count())
    }

    fn highest_frame_rate(&self, resolution: Resolution) -> Option<f32> {
        self.frame_rates(resolution)
            .into_iter()
            .filter(|fps| fps.is_finite())
            .reduce(f32::max)
    }

    /// Install the per-frame handler, replacing any previous one.
    fn subscribe(&mut self, handler: FrameHandler);

    /// Remove the per-frame handler. Frames arriving afterwards are discarded.
    fn unsubscribe(&mut self);

    async fn start_video_mode(&mut self, config: &CaptureConfig) -> Result<(), CaptureError>;

    /// Stop capturing and release the device. Safe to call more than once.
    fn dispose(&mut self);
}

/// Source of capture handles.
#[allow(async_fn_in_trait)]
pub trait CaptureProvider {
    type Capture: VideoCapture;

    /// Returns `None` when no capture device is present.
    async fn video_capture(&self) -> Option<Self::Capture>;
}
