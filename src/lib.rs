//! Shapemorph turns one filled 2D shape into another.
//!
//! Both input images are reduced to a single foreground region, its outer boundary is traced
//! and resampled to a fixed point count, the two point rings are aligned, and every frame fills
//! the linearly interpolated polygon. The public API is session-oriented:
//!
//! - Build a [`MorphSession`] from two images and a [`MorphConfig`]
//! - Pull frames lazily with [`MorphSession::frames`] or render one with
//!   [`MorphSession::render_frame`]
//! - Stream every frame into a [`FrameSink`] (in memory, animated GIF, or numbered PNG/JPEG
//!   files)
#![forbid(unsafe_code)]

mod assets;
mod config;
mod encode;
mod foundation;
mod morph;
mod raster;
mod shape;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rgba8};
pub use crate::foundation::error::{MorphError, MorphResult, ShapeId};

pub use crate::assets::decode::{decode_image, load_image};
pub use crate::config::{
    DEFAULT_DURATION_SECS, DEFAULT_FRAMES, DEFAULT_POINTS, FillColor, MorphConfig,
};
pub use crate::encode::gif::GifSink;
pub use crate::encode::images::{ImageSequenceSink, StillFormat};
pub use crate::encode::output::{OutputFormat, ensure_parent_dir, open_sink, resolve_output};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::morph::correspond::{Correspondence, build_correspondence, pairing_cost};
pub use crate::morph::ease::Ease;
pub use crate::morph::interp::AlignedPair;
pub use crate::morph::prepare::{PreparedShape, prepare_shape};
pub use crate::morph::sequence::{MorphFrames, frame_t};
pub use crate::morph::session::{MorphSession, RenderOpts, RenderStats};
pub use crate::raster::fill::{FillRule, fill_polygon, rasterize};
pub use crate::raster::frame::Frame;
pub use crate::shape::components::{Region, RegionPolicy, label_components, select_region};
pub use crate::shape::contour::Contour;
pub use crate::shape::mask::{ForegroundRule, RasterMask};
pub use crate::shape::resample::{MIN_POINTS, ResampledContour, resample};
pub use crate::shape::trace::extract_contour;
