use image::RgbaImage;
use log::debug;

use crate::{DetectError, Detection, Detector};

/// Detector that replays fixed batches of detections, cycling through them.
///
/// Detections below the requested threshold are filtered out, as a real
/// model would do.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDetector {
    batches: Vec<Vec<Detection>>,
    next: usize,
    calls: usize,
    released: bool,
}

impl ScriptedDetector {
    pub fn new(batches: Vec<Vec<Detection>>) -> Self {
        Self {
            batches,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Detector for ScriptedDetector {
    fn process_image(
        &mut self,
        image: &RgbaImage,
        threshold: f32,
    ) -> Result<Vec<Detection>, DetectError> {
        if self.released {
            return Err(DetectError::Runtime("detector already released".to_string()));
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(DetectError::Input("empty image".to_string()));
        }
        self.calls += 1;

        if self.batches.is_empty() {
            return Ok(Vec::new());
        }
        let batch = &self.batches[self.next % self.batches.len()];
        self.next += 1;

        let kept: Vec<Detection> = batch
            .iter()
            .filter(|d| d.score >= threshold)
            .copied()
            .collect();
        debug!("scripted detector returned {} of {}", kept.len(), batch.len());
        Ok(kept)
    }

    fn release(&mut self) {
        self.released = true;
    }
}
