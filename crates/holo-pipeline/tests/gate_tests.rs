use holo_pipeline::{DetectionGate, GateState};

#[test]
fn test_arms_on_first_frame_then_every_period() {
    let mut gate = DetectionGate::new(3);
    let mut armed_at = Vec::new();
    for frame in 1..=10 {
        if gate.tick() {
            armed_at.push(frame);
            gate.complete();
        }
    }
    assert_eq!(armed_at, vec![1, 4, 7, 10]);
}

#[test]
fn test_stays_armed_until_complete() {
    let mut gate = DetectionGate::new(5);
    assert!(gate.tick());
    assert!(gate.tick());
    assert!(gate.tick());
    assert_eq!(gate.state(), GateState::Armed);

    gate.complete();
    assert_eq!(gate.state(), GateState::Cooling);
    // the counter kept advancing while armed, so the next pass is on frame 6
    assert!(!gate.tick());
    assert!(!gate.tick());
    assert!(gate.tick());
}

#[test]
fn test_period_one_arms_every_frame() {
    let mut gate = DetectionGate::new(1);
    for _ in 0..5 {
        assert!(gate.tick());
        gate.complete();
    }
}

#[test]
fn test_zero_period_treated_as_one() {
    let gate = DetectionGate::new(0);
    assert_eq!(gate.period(), 1);
}

#[test]
fn test_starts_cooling() {
    let gate = DetectionGate::new(30);
    assert_eq!(gate.state(), GateState::Cooling);
}
