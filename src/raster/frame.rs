use image::RgbaImage;

use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::foundation::error::{MorphError, MorphResult};

/// One rendered morph frame: straight-alpha RGBA8, row-major, tightly packed.
///
/// Only the rasterizer builds frames, so `data.len() == width * height * 4` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub(crate) index: FrameIndex,
    /// Interpolation parameter the frame was rendered at (after easing).
    pub(crate) t: f64,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

impl Frame {
    pub(crate) fn filled(index: FrameIndex, t: f64, canvas: Canvas, color: Rgba8) -> Self {
        let data = color
            .to_array()
            .into_iter()
            .cycle()
            .take(canvas.pixel_count() * 4)
            .collect();
        Self {
            index,
            t,
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    pub fn index(&self) -> FrameIndex {
        self.index
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Paint the half-open pixel run `[x0, x1)` on row `y`.
    pub(crate) fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Rgba8) {
        let row = y as usize * self.width as usize;
        let px = color.to_array();
        for chunk in self.data[(row + x0 as usize) * 4..(row + x1 as usize) * 4].chunks_exact_mut(4)
        {
            chunk.copy_from_slice(&px);
        }
    }

    /// Number of pixels equal to `color`.
    pub fn count_color(&self, color: Rgba8) -> usize {
        let px = color.to_array();
        self.data.chunks_exact(4).filter(|c| *c == px).count()
    }

    pub fn to_rgba_image(&self) -> MorphResult<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            MorphError::encode(format!(
                "frame {} buffer holds {} bytes, expected {}x{} RGBA8",
                self.index.0,
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
