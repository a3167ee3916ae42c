//! Shared math types and logging backends for the holo-overlay workspace.

#[macro_use]
mod ops;

pub mod logging;
pub mod mat4;
pub mod quat;
pub mod vec3;
pub mod vec4;

pub use logging::{ConsoleLogger, DailyFileLogger, init_console_logger, init_file_logger};
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

// Re-export log crate so downstream crates can use holo_base::log::*
pub use log;
