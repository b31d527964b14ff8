//! Shape extraction: mask thresholding, component selection, boundary tracing and resampling.

pub(crate) mod components;
pub(crate) mod contour;
pub(crate) mod mask;
pub(crate) mod resample;
pub(crate) mod trace;
