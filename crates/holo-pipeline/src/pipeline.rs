use std::sync::Arc;

use holo_capture::{CaptureConfig, CaptureProvider, PixelFormat, VideoCapture};
use holo_detect::Detector;
use log::{error, info, warn};

use crate::{
    ActionQueue, DisplaySurface, FrameIngest, PipelineConfig, PipelineError, PipelineState,
    PipelineStats, RenderTarget, StatsSnapshot, StatusSink,
};

const DEFAULT_FRAME_RATE: f32 = 30.0;

pub const STATUS_NO_CAPTURE: &str =
    "Did not find a video capture object. You may not be using the HoloLens.";
pub const STATUS_START_FAILED: &str = "Could not start video mode.";
pub const STATUS_STARTED: &str = "Video capture started.";

/// Output surfaces the pipeline drives from the consumer thread.
pub struct Surfaces {
    pub display: Box<dyn DisplaySurface>,
    pub status: Box<dyn StatusSink>,
    pub render_target: Box<dyn RenderTarget>,
}

impl Surfaces {
    pub fn new(
        display: impl DisplaySurface + 'static,
        status: impl StatusSink + 'static,
        render_target: impl RenderTarget + 'static,
    ) -> Self {
        Self {
            display: Box::new(display),
            status: Box::new(status),
            render_target: Box::new(render_target),
        }
    }
}

/// The overlay pipeline: capture on the device's thread, everything else on
/// whichever thread calls [`tick`](Pipeline::tick).
///
/// ```ignore
/// let mut pipeline = Pipeline::new(PipelineConfig::default(), detector, surfaces)?;
/// pipeline.start(&provider).await?;
/// loop {
///     pipeline.tick();
/// }
/// ```
pub struct Pipeline<C: VideoCapture, D: Detector + 'static> {
    queue: ActionQueue<PipelineState<D>>,
    state: PipelineState<D>,
    capture: Option<C>,
    stats: Arc<PipelineStats>,
    started: bool,
    shut_down: bool,
}

impl<C: VideoCapture, D: Detector + 'static> Pipeline<C, D> {
    /// Build an idle pipeline. Fails when `config` does not validate.
    pub fn new(
        config: PipelineConfig,
        detector: D,
        surfaces: Surfaces,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let stats = Arc::new(PipelineStats::default());
        let queue = ActionQueue::new(config.max_queue_depth());
        let state = PipelineState::new(
            config,
            detector,
            surfaces.display,
            surfaces.status,
            surfaces.render_target,
            Arc::clone(&stats),
        );
        Ok(Self {
            queue,
            state,
            capture: None,
            stats,
            started: false,
            shut_down: false,
        })
    }

    /// Acquire a capture device, negotiate its mode and start streaming.
    ///
    /// Picks the lowest supported resolution at its highest frame rate, in
    /// BGRA. Every outcome is also reported through the status sink on the
    /// next tick.
    pub async fn start<P>(&mut self, provider: &P) -> Result<CaptureConfig, PipelineError>
    where
        P: CaptureProvider<Capture = C>,
    {
        if self.shut_down {
            return Err(PipelineError::ShutDown);
        }
        if self.started {
            return Err(PipelineError::AlreadyStarted);
        }
        self.started = true;

        let Some(mut capture) = provider.video_capture().await else {
            error!("no video capture device available");
            self.queue
                .enqueue(|state: &mut PipelineState<D>| state.set_status(STATUS_NO_CAPTURE));
            return Err(PipelineError::NoCapture);
        };
        info!(
            "video capture acquired, {} resolutions",
            capture.supported_resolutions().len()
        );

        let Some(resolution) = capture.lowest_resolution() else {
            error!("capture device reports no resolutions");
            self.queue
                .enqueue(|state: &mut PipelineState<D>| state.set_status(STATUS_START_FAILED));
            self.capture = Some(capture);
            return Err(PipelineError::Capture(holo_capture::CaptureError::Config(
                "no supported resolutions".to_string(),
            )));
        };
        let frame_rate = capture
            .highest_frame_rate(resolution)
            .unwrap_or(DEFAULT_FRAME_RATE);
        let config = CaptureConfig::default()
            .with_resolution(resolution)
            .with_frame_rate(frame_rate)
            .with_pixel_format(PixelFormat::Bgra32);

        let ingest = FrameIngest::new(
            self.queue.clone(),
            Arc::clone(&self.stats),
            PipelineState::<D>::process_frame,
        );
        capture.subscribe(ingest.into_handler());

        let configuring = format!("Configuring camera: {config}");
        info!("{configuring}");
        self.queue.enqueue(move |state: &mut PipelineState<D>| {
            state.set_status(configuring);
            state.set_resolution(resolution);
        });

        let result = capture.start_video_mode(&config).await;
        self.capture = Some(capture);
        match result {
            Ok(()) => {
                info!("video capture started");
                self.queue
                    .enqueue(|state: &mut PipelineState<D>| state.set_status(STATUS_STARTED));
                Ok(config)
            }
            Err(e) => {
                error!("could not start video mode: {e}");
                self.queue
                    .enqueue(|state: &mut PipelineState<D>| state.set_status(STATUS_START_FAILED));
                Err(e.into())
            }
        }
    }

    /// Run every pending action on the calling thread. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        if self.shut_down {
            return 0;
        }
        self.queue.drain_all(&mut self.state)
    }

    /// Stop capture and release the detector. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if let Some(mut capture) = self.capture.take() {
            capture.unsubscribe();
            capture.dispose();
        }
        let discarded = self.queue.depth();
        if discarded > 0 {
            warn!("discarding {discarded} pending actions on shutdown");
        }
        self.state.release_detector();
        info!("pipeline shut down: {:?}", self.stats.snapshot());
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn state(&self) -> &PipelineState<D> {
        &self.state
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn queue(&self) -> &ActionQueue<PipelineState<D>> {
        &self.queue
    }

    pub fn capture(&self) -> Option<&C> {
        self.capture.as_ref()
    }
}

impl<C: VideoCapture, D: Detector + 'static> Drop for Pipeline<C, D> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
