use std::sync::Arc;

use crate::{CaptureError, FrameSample};

/// Producer-side storage for the latest frame's raw bytes.
///
/// The backing vector is reused while no consumer holds a [`FrameBytes`]
/// handle to it and only grows when a larger frame arrives. If the consumer
/// still holds the previous frame, a fresh vector is started so the producer
/// never writes into bytes that have been handed off.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    bytes: Arc<Vec<u8>>,
    growths: u64,
}

/// Read-only handle to one frame's bytes, handed from producer to consumer.
#[derive(Debug, Clone)]
pub struct FrameBytes {
    bytes: Arc<Vec<u8>>,
    len: usize,
}

impl FrameBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `sample` into the buffer and return a handle to the copied bytes.
    pub fn fill(&mut self, sample: &dyn FrameSample) -> Result<FrameBytes, CaptureError> {
        let needed = sample.data_len();

        if Arc::get_mut(&mut self.bytes).is_none() {
            self.bytes = Arc::new(Vec::new());
        }
        let Some(buf) = Arc::get_mut(&mut self.bytes) else {
            return Err(CaptureError::Stream("frame buffer is still shared".to_string()));
        };

        if buf.len() < needed {
            buf.resize(needed, 0);
            self.growths += 1;
        }
        sample.copy_raw_into(&mut buf[..needed])?;

        Ok(FrameBytes {
            bytes: Arc::clone(&self.bytes),
            len: needed,
        })
    }

    /// Current backing capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of times the backing storage had to grow.
    pub fn growths(&self) -> u64 {
        self.growths
    }
}
