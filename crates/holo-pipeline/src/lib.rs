//! Frame ingestion, synchronization and world projection for the detection overlay.
//!
//! Frames arrive on the capture device's thread and are handed to a single
//! consumer through an [`ActionQueue`]. Once per tick the consumer drains the
//! queue: it uploads the frame, moves the render target to the camera pose,
//! and every few frames runs the detector and anchors the results in world
//! space using a fixed [`MarkerPool`].

pub mod action_queue;
pub mod config;
pub mod error;
pub mod gate;
pub mod ingest;
pub mod markers;
pub mod pipeline;
pub mod pose;
pub mod projector;
pub mod state;
pub mod stats;
pub mod surface;

pub use action_queue::{Action, ActionQueue, DEFAULT_MAX_DEPTH};
pub use config::{BoxAnchor, PipelineConfig};
pub use error::PipelineError;
pub use gate::{DetectionGate, GateState};
pub use ingest::{FrameIngest, FramePacket};
pub use markers::{MarkerPool, Placement, WorldAnchor};
pub use pipeline::{Pipeline, Surfaces};
pub use pose::CameraPose;
pub use state::PipelineState;
pub use stats::{PipelineStats, StatsSnapshot};
pub use surface::{DisplaySurface, LogStatus, RenderTarget, StatusSink};
