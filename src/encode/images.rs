use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{MorphError, MorphResult};
use crate::raster::frame::Frame;

/// Still-image format for [`ImageSequenceSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StillFormat {
    Png,
    Jpeg,
}

impl StillFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

/// Writes each frame to `<dir>/<index + 1>.<ext>`.
///
/// JPEG has no alpha channel; frames are flattened to RGB by dropping alpha.
pub struct ImageSequenceSink {
    dir: PathBuf,
    format: StillFormat,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl ImageSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, format: StillFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
            cfg: None,
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, frame: &Frame) -> PathBuf {
        self.dir
            .join(format!("{}.{}", frame.index.0 + 1, self.format.extension()))
    }
}

impl FrameSink for ImageSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            MorphError::encode(format!(
                "create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame) -> MorphResult<()> {
        if self.cfg.is_none() {
            return Err(MorphError::encode(
                "image sequence sink received a frame before begin",
            ));
        }
        let path = self.frame_path(frame);
        let res = match self.format {
            StillFormat::Png => image::save_buffer_with_format(
                &path,
                &frame.data,
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            ),
            StillFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(frame.to_rgba_image()?).to_rgb8();
                rgb.save_with_format(&path, image::ImageFormat::Jpeg)
            }
        };
        res.map_err(|e| MorphError::encode(format!("write '{}': {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        tracing::debug!(
            dir = %self.dir.display(),
            frames = self.written.len(),
            "image sequence written"
        );
        Ok(())
    }
}
