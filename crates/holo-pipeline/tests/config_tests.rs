use holo_pipeline::{BoxAnchor, PipelineConfig, PipelineError};
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.gate_period(), 30);
    assert_eq!(config.confidence_threshold(), 0.5);
    assert_eq!(config.pool_size(), 4);
    assert_eq!(config.max_queue_depth(), 2);
    assert_eq!(config.anchor_distance(), 2.0);
    assert_eq!(config.box_anchor(), BoxAnchor::Center);
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_overrides() {
    let config = PipelineConfig::from_lookup(lookup(&[
        ("HOLO_GATE_PERIOD", "10"),
        ("HOLO_CONFIDENCE", " 0.25 "),
        ("HOLO_POOL_SIZE", "8"),
        ("HOLO_BOX_ANCHOR", "top-left"),
    ]))
    .unwrap();
    assert_eq!(config.gate_period(), 10);
    assert_eq!(config.confidence_threshold(), 0.25);
    assert_eq!(config.pool_size(), 8);
    assert_eq!(config.box_anchor(), BoxAnchor::TopLeft);
    assert_eq!(config.anchor_distance(), 2.0);
}

#[test]
fn test_unparsable_value_is_an_error() {
    let err = PipelineConfig::from_lookup(lookup(&[("HOLO_POOL_SIZE", "many")])).unwrap_err();
    match err {
        PipelineError::Config(msg) => assert!(msg.contains("HOLO_POOL_SIZE")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_out_of_range_values_fail_validation() {
    assert!(PipelineConfig::from_lookup(lookup(&[("HOLO_GATE_PERIOD", "0")])).is_err());
    assert!(PipelineConfig::from_lookup(lookup(&[("HOLO_CONFIDENCE", "1.5")])).is_err());
    assert!(PipelineConfig::default().with_pool_size(0).validate().is_err());
    assert!(PipelineConfig::default().with_anchor_distance(-1.0).validate().is_err());
}

#[test]
fn test_box_anchor_pixel() {
    use holo_capture::Resolution;
    use holo_detect::BoundingBox;

    let bbox = BoundingBox::new(0.25, 0.5, 0.5, 0.25);
    let res = Resolution::new(400, 200);
    assert_eq!(BoxAnchor::Center.pixel(&bbox, res), (200.0, 125.0));
    assert_eq!(BoxAnchor::TopLeft.pixel(&bbox, res), (100.0, 100.0));
    assert!("sideways".parse::<BoxAnchor>().is_err());
}
