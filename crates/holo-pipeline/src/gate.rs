/// Whether the detector may run on the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Armed,
    Cooling,
}

/// Frame-count throttle for the detector.
///
/// The gate arms on the first frame and then on every `period`-th frame
/// after it. The count advances on every frame whatever the state, so the
/// schedule does not slip when a pass is delayed. An armed gate stays armed
/// until [`complete`](DetectionGate::complete) is called.
#[derive(Debug, Clone)]
pub struct DetectionGate {
    period: u32,
    counter: u32,
    state: GateState,
}

impl DetectionGate {
    /// A period of 0 is treated as 1.
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            counter: 0,
            state: GateState::Cooling,
        }
    }

    /// Count one processed frame. Returns true when the detector may run.
    pub fn tick(&mut self) -> bool {
        if self.counter == 0 {
            self.state = GateState::Armed;
        }
        self.counter = (self.counter + 1) % self.period;
        self.state == GateState::Armed
    }

    /// Mark the detection pass as done.
    pub fn complete(&mut self) {
        self.state = GateState::Cooling;
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
