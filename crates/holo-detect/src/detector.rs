use image::RgbaImage;

use crate::{DetectError, Detection};

/// Object detector run on the consumer thread.
///
/// Implementations are synchronous and may be called repeatedly. Detections
/// must be returned in the model's native order; callers rely on it when they
/// keep only the first few.
pub trait Detector {
    /// Detect objects in `image`, keeping those scoring at least `threshold`.
    fn process_image(
        &mut self,
        image: &RgbaImage,
        threshold: f32,
    ) -> Result<Vec<Detection>, DetectError>;

    /// Release model resources. Called once when the pipeline shuts down.
    fn release(&mut self) {}
}

impl<D: Detector + ?Sized> Detector for Box<D> {
    fn process_image(
        &mut self,
        image: &RgbaImage,
        threshold: f32,
    ) -> Result<Vec<Detection>, DetectError> {
        (**self).process_image(image, threshold)
    }

    fn release(&mut self) {
        (**self).release()
    }
}
