use holo_capture::{
    CaptureConfig, CaptureError, CaptureProvider, FrameSample, Resolution, SyntheticCapture,
    SyntheticProvider, VideoCapture,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn small_device() -> SyntheticCapture {
    SyntheticCapture::new(vec![
        (Resolution::new(8, 4), vec![15.0, 120.0]),
        (Resolution::new(16, 8), vec![30.0]),
    ])
}

#[test]
fn test_lowest_resolution_and_highest_rate() {
    let device = small_device();
    let lowest = device.lowest_resolution().unwrap();
    assert_eq!(lowest, Resolution::new(8, 4));
    assert_eq!(device.highest_frame_rate(lowest), Some(120.0));
    assert_eq!(device.highest_frame_rate(Resolution::new(1, 1)), None);
}

#[tokio::test]
async fn test_provider_hands_out_device_once() {
    let provider = SyntheticProvider::new(small_device());
    assert!(provider.video_capture().await.is_some());
    assert!(provider.video_capture().await.is_none());
    assert!(SyntheticProvider::unavailable().video_capture().await.is_none());
}

#[tokio::test]
async fn test_frames_are_delivered_with_pose_gaps() {
    let mut device = small_device().with_frame_limit(6).with_pose_gap(3);
    let seen: Arc<Mutex<Vec<(usize, bool)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    device.subscribe(Box::new(move |sample: &dyn FrameSample| {
        let posed = sample.camera_to_world().is_some() && sample.projection().is_some();
        sink.lock().unwrap().push((sample.data_len(), posed));
    }));

    let config = CaptureConfig::default()
        .with_resolution(Resolution::new(8, 4))
        .with_frame_rate(120.0);
    device.start_video_mode(&config).await.unwrap();

    for _ in 0..200 {
        if device.frames_sent() >= 6 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    device.dispose();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 6);
    assert!(seen.iter().all(|(len, _)| *len == 8 * 4 * 4));
    let posed: Vec<bool> = seen.iter().map(|(_, p)| *p).collect();
    assert_eq!(posed, vec![true, true, false, true, true, false]);
}

#[tokio::test]
async fn test_unsubscribed_device_discards_frames() {
    let mut device = small_device().with_frame_limit(3);
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    device.subscribe(Box::new(move |_: &dyn FrameSample| {
        counter.fetch_add(1, Ordering::Relaxed);
    }));
    device.unsubscribe();

    let config = CaptureConfig::default()
        .with_resolution(Resolution::new(8, 4))
        .with_frame_rate(120.0);
    device.start_video_mode(&config).await.unwrap();
    device.dispose();
    assert_eq!(count.load(Ordering::Relaxed), 0);
    assert!(!device.is_running());
}

#[tokio::test]
async fn test_start_failure_is_reported() {
    let mut device = small_device().with_start_failure();
    let config = CaptureConfig::default().with_resolution(Resolution::new(8, 4));
    let err = device.start_video_mode(&config).await.unwrap_err();
    assert!(matches!(err, CaptureError::ModeStart(_)));
}

#[tokio::test]
async fn test_unsupported_resolution_is_rejected() {
    let mut device = small_device();
    let config = CaptureConfig::default().with_resolution(Resolution::new(640, 480));
    let err = device.start_video_mode(&config).await.unwrap_err();
    assert!(matches!(err, CaptureError::Config(_)));
}
