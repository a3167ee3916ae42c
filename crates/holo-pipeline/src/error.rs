use std::fmt;

use holo_capture::CaptureError;
use holo_detect::DetectError;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    NoCapture,
    AlreadyStarted,
    ShutDown,
    Capture(CaptureError),
    Detect(DetectError),
    Config(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NoCapture => write!(f, "no video capture device"),
            PipelineError::AlreadyStarted => write!(f, "pipeline already started"),
            PipelineError::ShutDown => write!(f, "pipeline has been shut down"),
            PipelineError::Capture(err) => write!(f, "capture error: {err}"),
            PipelineError::Detect(err) => write!(f, "detect error: {err}"),
            PipelineError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Capture(err) => Some(err),
            PipelineError::Detect(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<DetectError> for PipelineError {
    fn from(err: DetectError) -> Self {
        PipelineError::Detect(err)
    }
}
