mod surfaces;

use holo_base::log;
use holo_capture::{SyntheticCapture, SyntheticProvider};
use holo_detect::{BoundingBox, Detection, ScriptedDetector};
use holo_pipeline::{LogStatus, Pipeline, PipelineConfig, Surfaces};
use std::path::PathBuf;
use std::time::Duration;
use surfaces::{LoggedTarget, SnapshotDisplay};

const TICK_INTERVAL: Duration = Duration::from_millis(33);
const DEFAULT_RUN_SECS: u64 = 10;

fn scripted_detections() -> Vec<Vec<Detection>> {
    vec![
        vec![
            Detection::new(14, 0.91, BoundingBox::new(0.40, 0.30, 0.20, 0.50)),
            Detection::new(8, 0.64, BoundingBox::new(0.05, 0.55, 0.25, 0.40)),
        ],
        vec![Detection::new(14, 0.88, BoundingBox::new(0.45, 0.28, 0.20, 0.52))],
        vec![
            Detection::new(11, 0.77, BoundingBox::new(0.60, 0.60, 0.30, 0.30)),
            Detection::new(19, 0.41, BoundingBox::new(0.10, 0.10, 0.20, 0.15)),
        ],
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::var("HOLO_LOG_DIR") {
        Ok(dir) => holo_base::init_file_logger(dir)?,
        Err(_) => holo_base::init_console_logger(),
    }

    let config = PipelineConfig::from_env()?;
    let run_secs = std::env::var("HOLO_RUN_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RUN_SECS);
    let snapshot = std::env::var("HOLO_SNAPSHOT").ok().map(PathBuf::from);

    log::info!("Holo Panel");
    log::info!("{config:?}");

    let provider = SyntheticProvider::new(SyntheticCapture::default().with_pose_gap(15));
    let surfaces = Surfaces::new(
        SnapshotDisplay::new(snapshot),
        LogStatus::default(),
        LoggedTarget,
    );
    let detector = ScriptedDetector::new(scripted_detections());
    let mut pipeline: Pipeline<SyntheticCapture, ScriptedDetector> =
        Pipeline::new(config, detector, surfaces)?;

    if let Err(e) = pipeline.start(&provider).await {
        // status has been queued; flush it before giving up
        pipeline.tick();
        holo_base::log_fatal!("failed to start pipeline: {e}");
    }

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let ticks = run_secs * 1000 / TICK_INTERVAL.as_millis() as u64;
    for _ in 0..ticks {
        interval.tick().await;
        pipeline.tick();
    }

    for (index, anchor) in pipeline.state().markers().anchors().iter().enumerate() {
        match anchor.detection {
            Some(detection) => log::info!(
                "anchor {index}: {detection} at {:?} ({} placements)",
                anchor.position,
                anchor.placements
            ),
            None => log::info!("anchor {index}: never placed"),
        }
    }

    pipeline.shutdown();
    log::info!("final stats: {:?}", pipeline.stats());
    Ok(())
}
