use std::str::FromStr;

use holo_capture::Resolution;
use holo_detect::BoundingBox;

use crate::PipelineError;

pub const GATE_PERIOD_ENV: &str = "HOLO_GATE_PERIOD";
pub const CONFIDENCE_ENV: &str = "HOLO_CONFIDENCE";
pub const POOL_SIZE_ENV: &str = "HOLO_POOL_SIZE";
pub const MAX_QUEUE_DEPTH_ENV: &str = "HOLO_MAX_QUEUE_DEPTH";
pub const ANCHOR_DISTANCE_ENV: &str = "HOLO_ANCHOR_DISTANCE";
pub const BOX_ANCHOR_ENV: &str = "HOLO_BOX_ANCHOR";

/// Which point of a detection box is projected into the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxAnchor {
    /// `(x + w/2, y + h/2)`.
    #[default]
    Center,
    /// `(x, y)`.
    TopLeft,
}

impl BoxAnchor {
    /// Anchor pixel of `bbox` in a frame of `resolution`.
    pub fn pixel(self, bbox: &BoundingBox, resolution: Resolution) -> (f32, f32) {
        match self {
            BoxAnchor::Center => bbox.center_px(resolution.width, resolution.height),
            BoxAnchor::TopLeft => bbox.corner_px(resolution.width, resolution.height),
        }
    }
}

impl FromStr for BoxAnchor {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Ok(BoxAnchor::Center),
            "top-left" | "topleft" => Ok(BoxAnchor::TopLeft),
            other => Err(PipelineError::Config(format!("unknown box anchor {other:?}"))),
        }
    }
}

/// Tuning for the overlay pipeline.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    gate_period: u32,
    confidence_threshold: f32,
    pool_size: usize,
    max_queue_depth: usize,
    anchor_distance: f32,
    box_anchor: BoxAnchor,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gate_period: 30,
            confidence_threshold: 0.5,
            pool_size: 4,
            max_queue_depth: crate::DEFAULT_MAX_DEPTH,
            anchor_distance: 2.0,
            box_anchor: BoxAnchor::Center,
        }
    }
}

impl PipelineConfig {
    /// Run the detector on every `period`-th frame.
    pub fn with_gate_period(mut self, period: u32) -> Self {
        self.gate_period = period;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Pending actions tolerated before incoming frames are dropped.
    pub fn with_max_queue_depth(mut self, depth: usize) -> Self {
        self.max_queue_depth = depth;
        self
    }

    /// Distance from the camera, in metres, at which markers are placed.
    pub fn with_anchor_distance(mut self, distance: f32) -> Self {
        self.anchor_distance = distance;
        self
    }

    pub fn with_box_anchor(mut self, anchor: BoxAnchor) -> Self {
        self.box_anchor = anchor;
        self
    }

    pub fn gate_period(&self) -> u32 {
        self.gate_period
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn max_queue_depth(&self) -> usize {
        self.max_queue_depth
    }

    pub fn anchor_distance(&self) -> f32 {
        self.anchor_distance
    }

    pub fn box_anchor(&self) -> BoxAnchor {
        self.box_anchor
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.gate_period == 0 {
            return Err(PipelineError::Config("gate period must be at least 1".to_string()));
        }
        if self.pool_size == 0 {
            return Err(PipelineError::Config("marker pool must hold at least 1 anchor".to_string()));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(PipelineError::Config(format!(
                "confidence threshold {} outside [0, 1]",
                self.confidence_threshold
            )));
        }
        if !self.anchor_distance.is_finite() || self.anchor_distance <= 0.0 {
            return Err(PipelineError::Config(format!(
                "anchor distance {} must be positive",
                self.anchor_distance
            )));
        }
        Ok(())
    }

    /// Defaults overridden from `HOLO_*` environment variables, validated.
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PipelineError> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, GATE_PERIOD_ENV)? {
            config.gate_period = v;
        }
        if let Some(v) = parse_var(&lookup, CONFIDENCE_ENV)? {
            config.confidence_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, POOL_SIZE_ENV)? {
            config.pool_size = v;
        }
        if let Some(v) = parse_var(&lookup, MAX_QUEUE_DEPTH_ENV)? {
            config.max_queue_depth = v;
        }
        if let Some(v) = parse_var(&lookup, ANCHOR_DISTANCE_ENV)? {
            config.anchor_distance = v;
        }
        if let Some(v) = parse_var(&lookup, BOX_ANCHOR_ENV)? {
            config.box_anchor = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, PipelineError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| PipelineError::Config(format!("{name}={raw:?} is not a valid value")))
}
