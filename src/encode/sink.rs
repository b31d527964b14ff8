use crate::foundation::core::Canvas;
use crate::foundation::error::MorphResult;
use crate::raster::frame::Frame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    pub canvas: Canvas,
    /// Total frames that will be pushed.
    pub frames: u32,
    /// Display time of each frame in milliseconds.
    pub frame_delay_ms: f64,
    /// Animation repeat count; 0 loops forever.
    pub loop_count: u16,
}

/// Sink contract for consuming rendered frames in sequence order.
///
/// Ordering contract: `push_frame` is called with strictly increasing frame indices, starting at
/// zero, exactly `SinkConfig::frames` times between `begin` and `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()>;
    fn push_frame(&mut self, frame: &Frame) -> MorphResult<()>;
    fn end(&mut self) -> MorphResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in sequence order.
    pub frames: Vec<Frame>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame) -> MorphResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        self.finished = true;
        Ok(())
    }
}
