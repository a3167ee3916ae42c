use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DetectError {
    Input(String),
    Runtime(String),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::Input(msg) => write!(f, "input error: {msg}"),
            DetectError::Runtime(msg) => write!(f, "runtime error: {msg}"),
        }
    }
}

impl std::error::Error for DetectError {}
