use holo_capture::{FrameBuffer, RawSample, Resolution};

fn sample_of(len: usize, fill: u8) -> RawSample {
    RawSample {
        resolution: Resolution::new(1, 1),
        bytes: vec![fill; len],
        camera_to_world: None,
        projection: None,
    }
}

#[test]
fn test_fill_copies_sample_bytes() {
    let mut buffer = FrameBuffer::new();
    let bytes = buffer.fill(&sample_of(8, 7)).unwrap();
    assert_eq!(bytes.as_slice(), &[7u8; 8]);
    assert_eq!(bytes.len(), 8);
}

#[test]
fn test_buffer_is_reused_once_consumer_releases_it() {
    let mut buffer = FrameBuffer::new();
    drop(buffer.fill(&sample_of(16, 1)).unwrap());
    drop(buffer.fill(&sample_of(16, 2)).unwrap());
    drop(buffer.fill(&sample_of(12, 3)).unwrap());
    assert_eq!(buffer.growths(), 1);
    assert_eq!(buffer.capacity(), 16);
}

#[test]
fn test_buffer_grows_only_for_larger_frames() {
    let mut buffer = FrameBuffer::new();
    drop(buffer.fill(&sample_of(4, 1)).unwrap());
    drop(buffer.fill(&sample_of(32, 1)).unwrap());
    drop(buffer.fill(&sample_of(8, 1)).unwrap());
    assert_eq!(buffer.growths(), 2);
    assert_eq!(buffer.capacity(), 32);
}

#[test]
fn test_handed_off_bytes_are_never_overwritten() {
    let mut buffer = FrameBuffer::new();
    let first = buffer.fill(&sample_of(4, 1)).unwrap();
    let second = buffer.fill(&sample_of(4, 2)).unwrap();
    assert_eq!(first.as_slice(), &[1u8; 4]);
    assert_eq!(second.as_slice(), &[2u8; 4]);
}

#[test]
fn test_shorter_frame_reports_its_own_length() {
    let mut buffer = FrameBuffer::new();
    drop(buffer.fill(&sample_of(10, 9)).unwrap());
    let short = buffer.fill(&sample_of(3, 5)).unwrap();
    assert_eq!(short.as_slice(), &[5u8; 3]);
}
