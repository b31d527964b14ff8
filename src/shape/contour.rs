use kurbo::Point;

use crate::foundation::error::{MorphError, MorphResult};

/// Ordered, closed polyline in image coordinates. The last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Build a contour, rejecting inputs with fewer than 3 distinct points.
    pub fn new(points: Vec<Point>) -> MorphResult<Self> {
        let contour = Self { points };
        let distinct = contour.distinct_points();
        if distinct < 3 {
            return Err(MorphError::degenerate(format!(
                "contour needs at least 3 distinct points, got {distinct}"
            )));
        }
        Ok(contour)
    }

    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate closed-polygon edges `(p[i], p[i + 1 mod n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Total closed-loop length.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    /// Shoelace area in image coordinates (y down).
    ///
    /// Positive for loops that run clockwise on screen, which is how the boundary tracer emits
    /// them.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
    }

    /// Same loop traversed backwards, keeping the first point in place.
    pub fn reversed(&self) -> Self {
        Self {
            points: reverse_keep_first(&self.points),
        }
    }

    fn distinct_points(&self) -> usize {
        let mut seen: Vec<Point> = Vec::with_capacity(3);
        for &p in &self.points {
            if !seen.contains(&p) {
                seen.push(p);
                if seen.len() >= 3 {
                    break;
                }
            }
        }
        seen.len()
    }
}

/// `out[j] = pts[(n - j) % n]`.
pub(crate) fn reverse_keep_first(pts: &[Point]) -> Vec<Point> {
    let n = pts.len();
    (0..n).map(|j| pts[(n - j) % n]).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/contour.rs"]
mod tests;
