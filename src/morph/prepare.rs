use image::RgbaImage;

use crate::config::MorphConfig;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::MorphResult;
use crate::shape::components::select_region;
use crate::shape::mask::RasterMask;
use crate::shape::resample::{ResampledContour, resample};
use crate::shape::trace::trace_outer_boundary;

/// One input shape after extraction and resampling.
#[derive(Clone, Debug)]
pub struct PreparedShape {
    pub contour: ResampledContour,
    /// Color of the region's first foreground pixel in raster order.
    pub color: Rgba8,
    /// Dimensions of the source image.
    pub size: Canvas,
    /// Foreground pixel count of the traced region.
    pub area: usize,
}

/// Threshold, select a region, trace its boundary and resample it to `config.points`.
#[tracing::instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn prepare_shape(img: &RgbaImage, config: &MorphConfig) -> MorphResult<PreparedShape> {
    let mask = RasterMask::from_image(img, config.foreground);
    let region = select_region(&mask, config.region_policy)?;
    let traced = trace_outer_boundary(&region.mask, region.first)?;
    let contour = resample(&traced, config.points)?;
    let color = Rgba8::from_pixel(*img.get_pixel(region.first.0, region.first.1));

    tracing::debug!(
        area = region.area,
        components = region.components,
        traced = traced.len(),
        points = contour.len(),
        color = %color,
        "prepared shape"
    );
    Ok(PreparedShape {
        contour,
        color,
        size: Canvas {
            width: img.width(),
            height: img.height(),
        },
        area: region.area,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/morph/prepare.rs"]
mod tests;
