//! Camera capture abstraction for the holo-overlay pipeline.
//!
//! A capture device delivers frame samples on its own thread through a
//! subscribed handler. Each sample carries BGRA bytes plus, when the device
//! could locate itself, camera-to-world and projection matrices.

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod sample;
pub mod synthetic;
pub mod texture;
pub mod traits;

pub use config::{CaptureConfig, PixelFormat, Resolution};
pub use error::CaptureError;
pub use framebuffer::{FrameBuffer, FrameBytes};
pub use sample::RawSample;
pub use synthetic::{SyntheticCapture, SyntheticProvider};
pub use texture::VideoTexture;
pub use traits::{CaptureProvider, FrameHandler, FrameSample, VideoCapture};
