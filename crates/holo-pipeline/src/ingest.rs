use std::sync::Arc;

use holo_capture::{FrameBuffer, FrameBytes, FrameHandler, FrameSample, Resolution};
use log::{debug, trace, warn};

use crate::pose::{self, CameraPose};
use crate::{ActionQueue, PipelineStats};

/// One captured frame on its way to the consumer.
#[derive(Debug, Clone)]
pub struct FramePacket {
    pub bytes: FrameBytes,
    pub resolution: Resolution,
    /// `None` when either matrix was unavailable for this frame.
    pub pose: Option<CameraPose>,
}

/// Producer half of the pipeline, run on the capture thread.
///
/// Each sample is copied into the reusable [`FrameBuffer`] and wrapped in an
/// action that delivers it to the consumer context `C`. While the queue is
/// saturated new samples are dropped before any copy happens.
pub struct FrameIngest<C> {
    queue: ActionQueue<C>,
    buffer: FrameBuffer,
    stats: Arc<PipelineStats>,
    deliver: fn(&mut C, FramePacket),
}

impl<C: 'static> FrameIngest<C> {
    pub fn new(
        queue: ActionQueue<C>,
        stats: Arc<PipelineStats>,
        deliver: fn(&mut C, FramePacket),
    ) -> Self {
        Self {
            queue,
            buffer: FrameBuffer::new(),
            stats,
            deliver,
        }
    }

    /// Handle one sample. Returns whether it was queued.
    pub fn on_frame(&mut self, sample: &dyn FrameSample) -> bool {
        self.stats.record_received();

        if self.queue.is_saturated() {
            let total = self.stats.record_dropped();
            debug!("queue saturated, dropping frame ({total} dropped so far)");
            return false;
        }

        let bytes = match self.buffer.fill(sample) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.stats.record_dropped();
                warn!("could not copy frame: {e}");
                return false;
            }
        };

        let pose = pose::from_sample(sample);
        if pose.is_none() {
            trace!("frame arrived without camera matrices");
        }

        let packet = FramePacket {
            bytes,
            resolution: sample.resolution(),
            pose,
        };
        let deliver = self.deliver;
        if !self.queue.offer(move |ctx: &mut C| deliver(ctx, packet)) {
            let total = self.stats.record_dropped();
            debug!("queue filled during copy, dropping frame ({total} dropped so far)");
            return false;
        }
        true
    }

    /// Box this ingest as a capture frame handler.
    pub fn into_handler(mut self) -> FrameHandler {
        Box::new(move |sample: &dyn FrameSample| {
            self.on_frame(sample);
        })
    }
}
