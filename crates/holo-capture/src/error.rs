use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    Device(String),
    Stream(String),
    ModeStart(String),
    Config(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Device(msg) => write!(f, "device error: {msg}"),
            CaptureError::Stream(msg) => write!(f, "stream error: {msg}"),
            CaptureError::ModeStart(msg) => write!(f, "video mode error: {msg}"),
            CaptureError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Device(err.to_string())
    }
}
