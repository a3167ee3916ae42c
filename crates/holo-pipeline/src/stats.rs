use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared between the capture thread and the consumer.
#[derive(Debug, Default)]
pub struct PipelineStats {
    received: AtomicU64,
    dropped: AtomicU64,
    presented: AtomicU64,
    without_pose: AtomicU64,
    detection_passes: AtomicU64,
}

/// Point-in-time copy of [`PipelineStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub received: u64,
    pub dropped: u64,
    pub presented: u64,
    pub without_pose: u64,
    pub detection_passes: u64,
}

impl PipelineStats {
    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the running total of dropped frames.
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_presented(&self) {
        self.presented.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_without_pose(&self) {
        self.without_pose.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detection_pass(&self) {
        self.detection_passes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            presented: self.presented.load(Ordering::Relaxed),
            without_pose: self.without_pose.load(Ordering::Relaxed),
            detection_passes: self.detection_passes.load(Ordering::Relaxed),
        }
    }
}
