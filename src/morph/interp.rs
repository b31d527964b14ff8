use kurbo::Point;

use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::lerp_point;
use crate::morph::correspond::Correspondence;
use crate::shape::contour::Contour;
use crate::shape::resample::ResampledContour;

/// Two equal-length contours paired index-for-index.
///
/// Built once per morph and shared read-only by every frame.
#[derive(Clone, Debug)]
pub struct AlignedPair {
    a: Vec<Point>,
    b: Vec<Point>,
    correspondence: Correspondence,
}

impl AlignedPair {
    pub fn new(
        a: &ResampledContour,
        b: &ResampledContour,
        correspondence: Correspondence,
    ) -> MorphResult<Self> {
        if a.len() != b.len() {
            return Err(MorphError::config(format!(
                "aligned contours need equal point counts, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        Ok(Self {
            a: a.points().to_vec(),
            b: correspondence.align(b),
            correspondence,
        })
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn correspondence(&self) -> Correspondence {
        self.correspondence
    }

    pub fn source(&self) -> &[Point] {
        &self.a
    }

    /// Contour B reindexed by the correspondence.
    pub fn target(&self) -> &[Point] {
        &self.b
    }

    /// `(1 - t) * A[i] + t * B[(i + r) mod K]` for every `i`.
    ///
    /// `t` is used as given; easing belongs to the frame sequencer.
    pub fn interpolate(&self, t: f64) -> Contour {
        let pts = self
            .a
            .iter()
            .zip(&self.b)
            .map(|(&p, &q)| lerp_point(p, q, t))
            .collect();
        Contour::from_points_unchecked(pts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interp.rs"]
mod tests;
