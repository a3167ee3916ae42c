use holo_base::{Quat, Vec3};
use holo_detect::Detection;

/// One pooled marker in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldAnchor {
    pub position: Vec3<f32>,
    pub orientation: Quat<f32>,
    /// Detection that last placed this anchor; `None` until first placed.
    pub detection: Option<Detection>,
    /// Number of times the anchor has been placed.
    pub placements: u64,
}

impl Default for WorldAnchor {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            orientation: Quat::identity(),
            detection: None,
            placements: 0,
        }
    }
}

/// Where to put one anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3<f32>,
    pub orientation: Quat<f32>,
    pub detection: Detection,
}

/// Fixed pool of anchors addressed by detection index.
///
/// Anchors are never removed. Slots not placed by the latest pass keep their
/// previous position.
#[derive(Debug, Clone)]
pub struct MarkerPool {
    anchors: Vec<WorldAnchor>,
}

impl MarkerPool {
    pub fn new(size: usize) -> Self {
        Self {
            anchors: vec![WorldAnchor::default(); size],
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> &[WorldAnchor] {
        &self.anchors
    }

    pub fn get(&self, index: usize) -> Option<&WorldAnchor> {
        self.anchors.get(index)
    }

    /// Place slot `index`. Returns false, changing nothing, when `index` is outside the pool.
    pub fn assign(&mut self, index: usize, placement: Placement) -> bool {
        let Some(anchor) = self.anchors.get_mut(index) else {
            return false;
        };
        anchor.position = placement.position;
        anchor.orientation = placement.orientation;
        anchor.detection = Some(placement.detection);
        anchor.placements += 1;
        true
    }

    /// Place slots from `placements` in order, the i-th item going to slot i.
    ///
    /// Iteration stops at the pool size, so the rest of `placements` is never
    /// evaluated. A `None` item leaves its slot as it was. Returns the number
    /// of slots placed.
    pub fn assign_in_order<I>(&mut self, placements: I) -> usize
    where
        I: IntoIterator<Item = Option<Placement>>,
    {
        let mut placed = 0;
        let size = self.anchors.len();
        for (index, placement) in placements.into_iter().take(size).enumerate() {
            if let Some(placement) = placement {
                if self.assign(index, placement) {
                    placed += 1;
                }
            }
        }
        placed
    }
}
