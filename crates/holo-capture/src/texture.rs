use image::RgbaImage;

use crate::{CaptureError, Resolution};

/// Consumer-side RGBA image that BGRA frames are uploaded into.
#[derive(Debug, Clone)]
pub struct VideoTexture {
    image: RgbaImage,
}

impl VideoTexture {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            image: RgbaImage::new(resolution.width, resolution.height),
        }
    }

    pub fn resolution(&self) -> Resolution {
        let (width, height) = self.image.dimensions();
        Resolution::new(width, height)
    }

    /// Upload a BGRA frame, reallocating only when the resolution changes.
    pub fn load_bgra(&mut self, bytes: &[u8], resolution: Resolution) -> Result<(), CaptureError> {
        let expected = resolution.bgra_len();
        if bytes.len() < expected {
            return Err(CaptureError::Stream(format!(
                "expected {expected} BGRA bytes for {resolution}, got {}",
                bytes.len()
            )));
        }

        if self.resolution() != resolution {
            self.image = RgbaImage::new(resolution.width, resolution.height);
        }

        for (dst, src) in self
            .image
            .chunks_exact_mut(4)
            .zip(bytes[..expected].chunks_exact(4))
        {
            dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
        }
        Ok(())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
