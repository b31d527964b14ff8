//! Per-request morph configuration.
//!
//! A [`MorphConfig`] is passed explicitly into every constructor; nothing in the crate reads
//! process-wide defaults, so independent morphs can run side by side.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{MorphError, MorphResult};
use crate::morph::ease::Ease;
use crate::raster::fill::FillRule;
use crate::shape::components::RegionPolicy;
use crate::shape::mask::ForegroundRule;
use crate::shape::resample::MIN_POINTS;

pub const DEFAULT_FRAMES: u32 = 30;
pub const DEFAULT_POINTS: usize = 200;
pub const DEFAULT_DURATION_SECS: f64 = 7.0;

/// How frames pick their fill color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillColor {
    /// Interpolate between the colors sampled from shape A and shape B.
    #[default]
    Blend,
    /// Use one color for every frame.
    Solid(Rgba8),
}

/// Morph parameters shared by the engine, the sinks and the CLI.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Number of frames N (>= 1).
    pub frames: u32,
    /// Resampled contour point count K (>= 3).
    pub points: usize,
    /// Total animation duration in seconds (> 0).
    pub duration_secs: f64,
    /// GIF repeat count; 0 loops forever.
    pub loop_count: u16,
    pub fill: FillColor,
    pub background: Rgba8,
    pub foreground: ForegroundRule,
    pub region_policy: RegionPolicy,
    pub fill_rule: FillRule,
    pub ease: Ease,
    /// Also try B traversed backwards when building the correspondence.
    pub search_reversed: bool,
    /// Explicit output canvas. Defaults to the larger width and height of the two inputs.
    pub canvas: Option<Canvas>,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            points: DEFAULT_POINTS,
            duration_secs: DEFAULT_DURATION_SECS,
            loop_count: 0,
            fill: FillColor::default(),
            background: Rgba8::WHITE,
            foreground: ForegroundRule::default(),
            region_policy: RegionPolicy::default(),
            fill_rule: FillRule::default(),
            ease: Ease::default(),
            search_reversed: false,
            canvas: None,
        }
    }
}

impl MorphConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> MorphResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open morph config '{}'", path.display()))?;
        let cfg: MorphConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| MorphError::config(format!("parse '{}': {e}", path.display())))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> MorphResult<()> {
        if self.frames < 1 {
            return Err(MorphError::config("frame count must be >= 1"));
        }
        if self.points < MIN_POINTS {
            return Err(MorphError::config(format!(
                "resample point count must be >= {MIN_POINTS}, got {}",
                self.points
            )));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(MorphError::config(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        if let Some(c) = self.canvas {
            Canvas::new(c.width, c.height)?;
        }
        Ok(())
    }

    /// Display time of one frame in milliseconds.
    pub fn frame_delay_ms(&self) -> f64 {
        self.duration_secs * 1000.0 / f64::from(self.frames.max(1))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
