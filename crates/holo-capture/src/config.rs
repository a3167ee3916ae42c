use std::fmt;

/// Frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length of one BGRA frame at this resolution.
    pub fn bgra_len(self) -> usize {
        self.pixel_count() * 4
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Bgra32,
    Nv12,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            PixelFormat::Bgra32 => Some(4),
            PixelFormat::Nv12 => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Bgra32 => write!(f, "BGRA32"),
            PixelFormat::Nv12 => write!(f, "NV12"),
        }
    }
}

/// Parameters for entering video mode.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    resolution: Resolution,
    frame_rate: u32,
    pixel_format: PixelFormat,
    rotate_180: bool,
    enable_holograms: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(448, 256),
            frame_rate: 30,
            pixel_format: PixelFormat::Bgra32,
            rotate_180: false,
            enable_holograms: false,
        }
    }
}

impl CaptureConfig {
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the frame rate, rounded to the nearest whole frame.
    pub fn with_frame_rate(mut self, fps: f32) -> Self {
        self.frame_rate = fps.round().max(1.0) as u32;
        self
    }

    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    pub fn with_rotate_180(mut self, rotate: bool) -> Self {
        self.rotate_180 = rotate;
        self
    }

    pub fn with_holograms(mut self, enable: bool) -> Self {
        self.enable_holograms = enable;
        self
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    pub fn rotate_180(&self) -> bool {
        self.rotate_180
    }

    pub fn enable_holograms(&self) -> bool {
        self.enable_holograms
    }
}

impl fmt::Display for CaptureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} | {}",
            self.resolution, self.frame_rate, self.pixel_format
        )
    }
}
