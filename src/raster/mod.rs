//! Polygon rasterization into RGBA8 frames.

pub(crate) mod fill;
pub(crate) mod frame;
