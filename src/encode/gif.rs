use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::Delay;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::output::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{MorphError, MorphResult};
use crate::raster::frame::Frame;

/// NeuQuant sampling factor; 1 is best quality, 30 is fastest.
const GIF_QUANT_SPEED: i32 = 10;

/// Animated GIF sink. Each frame is shown for `SinkConfig::frame_delay_ms`.
pub struct GifSink {
    path: PathBuf,
    cfg: Option<SinkConfig>,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    delay: Delay,
    pushed: u32,
}

impl GifSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cfg: None,
            encoder: None,
            delay: Delay::from_numer_denom_ms(0, 1),
            pushed: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        if cfg.canvas.width > u32::from(u16::MAX) || cfg.canvas.height > u32::from(u16::MAX) {
            return Err(MorphError::encode(format!(
                "gif canvas {}x{} exceeds 65535 pixels per side",
                cfg.canvas.width, cfg.canvas.height
            )));
        }
        let frame_time = Duration::try_from_secs_f64(cfg.frame_delay_ms / 1000.0).map_err(|e| {
            MorphError::config(format!("invalid frame delay {} ms: {e}", cfg.frame_delay_ms))
        })?;

        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path).map_err(|e| {
            MorphError::encode(format!("create '{}': {e}", self.path.display()))
        })?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_QUANT_SPEED);
        let repeat = match cfg.loop_count {
            0 => Repeat::Infinite,
            n => Repeat::Finite(n),
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| MorphError::encode(format!("gif repeat: {e}")))?;

        self.delay = Delay::from_saturating_duration(frame_time);
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.pushed = 0;
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame) -> MorphResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg, self.encoder.as_mut()) else {
            return Err(MorphError::encode("gif sink received a frame before begin"));
        };
        if frame.width != cfg.canvas.width || frame.height != cfg.canvas.height {
            return Err(MorphError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
            )));
        }

        let gif_frame = image::Frame::from_parts(frame.to_rgba_image()?, 0, 0, self.delay);
        encoder
            .encode_frame(gif_frame)
            .map_err(|e| MorphError::encode(format!("gif frame {}: {e}", frame.index.0)))?;
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        let Some(encoder) = self.encoder.take() else {
            return Err(MorphError::encode("gif sink finished before begin"));
        };
        // Dropping the encoder writes the trailer.
        drop(encoder);
        tracing::debug!(path = %self.path.display(), frames = self.pushed, "gif written");
        Ok(())
    }
}
