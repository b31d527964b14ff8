use kurbo::Point;

use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::lerp_point;
use crate::shape::contour::Contour;

/// Smallest point count a resampled contour may have.
pub const MIN_POINTS: usize = 3;

/// A contour with exactly K points at equal arc-length spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct ResampledContour {
    points: Vec<Point>,
}

impl ResampledContour {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_contour(&self) -> Contour {
        Contour::from_points_unchecked(self.points.clone())
    }
}

/// Place `k` points along the closed `contour` at arc lengths `i * L / k`.
///
/// The first output point is the contour's first vertex. Works for any vertex count, so short
/// contours are upsampled by interpolation rather than by repeating vertices.
pub fn resample(contour: &Contour, k: usize) -> MorphResult<ResampledContour> {
    if k < MIN_POINTS {
        return Err(MorphError::config(format!(
            "resample point count must be >= {MIN_POINTS}, got {k}"
        )));
    }

    let pts = contour.points();
    let n = pts.len();
    let mut cumulative = Vec::with_capacity(n + 1);
    cumulative.push(0.0f64);
    let mut total = 0.0;
    for (a, b) in contour.edges() {
        total += a.distance(b);
        cumulative.push(total);
    }
    if !(total.is_finite() && total > 0.0) {
        return Err(MorphError::degenerate(
            "contour has zero or non-finite length",
        ));
    }

    let step = total / k as f64;
    let mut out = Vec::with_capacity(k);
    let mut seg = 0usize;
    for i in 0..k {
        let s = step * i as f64;
        // Advance to the edge whose [start, end) arc-length interval holds `s`.
        while seg + 1 < n && cumulative[seg + 1] <= s {
            seg += 1;
        }
        let seg_len = cumulative[seg + 1] - cumulative[seg];
        let a = pts[seg];
        let b = pts[(seg + 1) % n];
        let p = if seg_len > 0.0 {
            lerp_point(a, b, ((s - cumulative[seg]) / seg_len).clamp(0.0, 1.0))
        } else {
            a
        };
        out.push(p);
    }

    Ok(ResampledContour { points: out })
}

#[cfg(test)]
#[path = "../../tests/unit/shape/resample.rs"]
mod tests;
