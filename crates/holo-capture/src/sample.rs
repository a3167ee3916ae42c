use crate::{CaptureError, FrameSample, Resolution};

/// A frame sample that owns its bytes and matrices.
#[derive(Debug, Clone)]
pub struct RawSample {
    pub resolution: Resolution,
    pub bytes: Vec<u8>,
    pub camera_to_world: Option<[f32; 16]>,
    pub projection: Option<[f32; 16]>,
}

impl RawSample {
    /// Sample with a zeroed BGRA frame and no matrices.
    pub fn blank(resolution: Resolution) -> Self {
        Self {
            resolution,
            bytes: vec![0; resolution.bgra_len()],
            camera_to_world: None,
            projection: None,
        }
    }

    pub fn with_pose(mut self, camera_to_world: [f32; 16], projection: [f32; 16]) -> Self {
        self.camera_to_world = Some(camera_to_world);
        self.projection = Some(projection);
        self
    }
}

impl FrameSample for RawSample {
    fn data_len(&self) -> usize {
        self.bytes.len()
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn copy_raw_into(&self, buffer: &mut [u8]) -> Result<(), CaptureError> {
        let available = buffer.len();
        let dst = buffer.get_mut(..self.bytes.len()).ok_or_else(|| {
            CaptureError::Stream(format!(
                "buffer of {available} bytes too small for {} byte frame",
                self.bytes.len()
            ))
        })?;
        dst.copy_from_slice(&self.bytes);
        Ok(())
    }

    fn camera_to_world(&self) -> Option<[f32; 16]> {
        self.camera_to_world
    }

    fn projection(&self) -> Option<[f32; 16]> {
        self.projection
    }
}
