//! Object detection interface consumed by the overlay pipeline.
//!
//! The model itself lives behind the [`Detector`] trait; this crate only
//! defines what goes in and what comes out.

pub mod detection;
pub mod detector;
pub mod error;
pub mod labels;
pub mod scripted;

pub use detection::{BoundingBox, Detection};
pub use detector::Detector;
pub use error::DetectError;
pub use labels::{LABELS, label_for};
pub use scripted::ScriptedDetector;
