use std::path::Path;

use image::RgbaImage;
use rayon::prelude::*;

use crate::assets::decode::load_image;
use crate::config::{FillColor, MorphConfig};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::foundation::error::{MorphError, MorphResult, ShapeId};
use crate::morph::correspond::build_correspondence;
use crate::morph::interp::AlignedPair;
use crate::morph::prepare::{PreparedShape, prepare_shape};
use crate::morph::sequence::{MorphFrames, frame_t};
use crate::raster::fill::rasterize;
use crate::raster::frame::Frame;

const MAX_CHUNK_BUFFER_BYTES: u64 = 128 * 1024 * 1024;

/// Options controlling how `MorphSession::render_to_sink` schedules work.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Render frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames rendered per parallel batch before they are handed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 16,
            threads: None,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Batches handed to the sink.
    pub chunks: u64,
}

/// A prepared morph between two shapes.
///
/// Construction does all per-shape work up front (extraction, resampling, correspondence).
/// Afterwards every frame is a pure function of its index, so frames can be rendered in any
/// order or in parallel.
#[derive(Debug)]
pub struct MorphSession {
    pair: AlignedPair,
    colors: (Rgba8, Rgba8),
    canvas: Canvas,
    config: MorphConfig,
}

impl MorphSession {
    /// Prepare a morph from two decoded images.
    pub fn new(source: &RgbaImage, target: &RgbaImage, config: MorphConfig) -> MorphResult<Self> {
        config.validate()?;
        let a = prepare_shape(source, &config).map_err(|e| e.in_shape(ShapeId::A))?;
        let b = prepare_shape(target, &config).map_err(|e| e.in_shape(ShapeId::B))?;
        Self::from_prepared(a, b, config)
    }

    /// Decode both images from disk and prepare the morph.
    pub fn from_paths(source: &Path, target: &Path, config: MorphConfig) -> MorphResult<Self> {
        config.validate()?;
        let a = load_image(source).map_err(|e| e.in_shape(ShapeId::A))?;
        let b = load_image(target).map_err(|e| e.in_shape(ShapeId::B))?;
        Self::new(&a, &b, config)
    }

    /// Build a session from shapes that are already extracted and resampled.
    pub fn from_prepared(
        a: PreparedShape,
        b: PreparedShape,
        config: MorphConfig,
    ) -> MorphResult<Self> {
        config.validate()?;
        let canvas = match config.canvas {
            Some(c) => c,
            None => {
                let c = a.size.union(b.size);
                Canvas::new(c.width, c.height)?
            }
        };
        let correspondence =
            build_correspondence(&a.contour, &b.contour, config.search_reversed)?;
        let pair = AlignedPair::new(&a.contour, &b.contour, correspondence)?;

        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            frames = config.frames,
            points = pair.len(),
            offset = correspondence.offset,
            reversed = correspondence.reversed,
            "morph prepared"
        );
        Ok(Self {
            pair,
            colors: (a.color, b.color),
            canvas,
            config,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn pair(&self) -> &AlignedPair {
        &self.pair
    }

    /// Colors sampled from shape A and shape B.
    pub fn shape_colors(&self) -> (Rgba8, Rgba8) {
        self.colors
    }

    pub fn frame_count(&self) -> u32 {
        self.config.frames
    }

    /// Eased interpolation parameter of frame `index`.
    pub fn t_at(&self, index: FrameIndex) -> f64 {
        frame_t(index.0, self.config.frames, self.config.ease)
    }

    /// Fill color at interpolation parameter `t`.
    pub fn fill_at(&self, t: f64) -> Rgba8 {
        match self.config.fill {
            FillColor::Solid(c) => c,
            FillColor::Blend => self.colors.0.lerp(self.colors.1, t),
        }
    }

    /// Render one frame.
    pub fn render_frame(&self, index: FrameIndex) -> MorphResult<Frame> {
        if index.0 >= self.config.frames {
            return Err(MorphError::config(format!(
                "frame {} is out of range for a {}-frame morph",
                index.0, self.config.frames
            )));
        }
        Ok(self.render_in_range(index))
    }

    fn render_in_range(&self, index: FrameIndex) -> Frame {
        let t = self.t_at(index);
        let contour = self.pair.interpolate(t);
        rasterize(
            &contour,
            self.canvas,
            self.fill_at(t),
            self.config.background,
            self.config.fill_rule,
            index,
            t,
        )
    }

    /// Lazy sequence of all frames in order.
    pub fn frames(&self) -> MorphFrames<'_> {
        MorphFrames::new(self)
    }

    /// Render every frame and stream them into `sink`.
    ///
    /// The sink receives frames in strictly increasing index order. Serial mode hands each frame
    /// over as soon as it is rendered. In parallel mode each chunk is rendered on the pool and
    /// handed over in index order once complete.
    #[tracing::instrument(skip_all, fields(frames = self.config.frames, parallel = opts.parallel))]
    pub fn render_to_sink(
        &self,
        sink: &mut dyn FrameSink,
        opts: &RenderOpts,
    ) -> MorphResult<RenderStats> {
        let total = self.config.frames;
        let bytes_per_frame = (self.canvas.pixel_count() as u64).saturating_mul(4).max(1);
        let max_chunk_by_mem = (MAX_CHUNK_BUFFER_BYTES / bytes_per_frame).max(1);
        let chunk_size = (opts.chunk_size.max(1) as u64)
            .min(max_chunk_by_mem)
            .min(u64::from(total)) as u32;

        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };

        sink.begin(SinkConfig {
            canvas: self.canvas,
            frames: total,
            frame_delay_ms: self.config.frame_delay_ms(),
            loop_count: self.config.loop_count,
        })?;

        let mut stats = RenderStats::default();
        let mut chunk_start = 0u32;
        while chunk_start < total {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(total);
            match pool.as_ref() {
                Some(pool) => {
                    let frames: Vec<Frame> = pool.install(|| {
                        (chunk_start..chunk_end)
                            .into_par_iter()
                            .map(|i| self.render_in_range(FrameIndex(i)))
                            .collect()
                    });
                    for frame in &frames {
                        sink.push_frame(frame)?;
                    }
                }
                // Serial frames go straight to the sink; at most one is alive at a time.
                None => {
                    for i in chunk_start..chunk_end {
                        sink.push_frame(&self.render_in_range(FrameIndex(i)))?;
                    }
                }
            }
            stats.frames_total += u64::from(chunk_end - chunk_start);
            stats.chunks += 1;
            chunk_start = chunk_end;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames_total,
            chunks = stats.chunks,
            "morph rendered"
        );
        Ok(stats)
    }
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MorphError::config("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MorphError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/session.rs"]
mod tests;
