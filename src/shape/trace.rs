//! Outer-boundary tracing at pixel-edge resolution.
//!
//! The tracer walks the `(W + 1) x (H + 1)` grid of pixel corners. Corner `(x, y)` is the
//! top-left corner of pixel `(x, y)`. The walk keeps the region on its right-hand side, so the
//! resulting loop runs clockwise on screen and has positive shoelace area in image coordinates.

use kurbo::Point;

use crate::foundation::error::{MorphError, MorphResult};
use crate::shape::components::{RegionPolicy, select_region};
use crate::shape::contour::Contour;
use crate::shape::mask::RasterMask;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    fn delta(self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::North => (0, -1),
        }
    }

    fn turn_right(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    fn turn_left(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
            Self::North => Self::West,
        }
    }

    /// Pixels ahead of corner `(x, y)` when travelling in this direction: `(left, right)`.
    fn ahead(self, x: i64, y: i64) -> ((i64, i64), (i64, i64)) {
        match self {
            Self::East => ((x, y - 1), (x, y)),
            Self::South => ((x, y), (x - 1, y)),
            Self::West => ((x - 1, y), (x - 1, y - 1)),
            Self::North => ((x - 1, y - 1), (x, y - 1)),
        }
    }
}

/// Trace the outer boundary of the single region in `mask`.
///
/// Components are 8-connected. With [`RegionPolicy::Largest`] the biggest component is traced
/// and the others are ignored.
pub fn extract_contour(mask: &RasterMask, policy: RegionPolicy) -> MorphResult<Contour> {
    let region = select_region(mask, policy)?;
    let contour = trace_outer_boundary(&region.mask, region.first)?;
    tracing::debug!(
        area = region.area,
        vertices = contour.len(),
        "traced outer boundary"
    );
    Ok(contour)
}

/// Trace the boundary of the component containing `first`, which must be that component's first
/// foreground pixel in raster order.
///
/// Only corners where the walk changes direction are emitted. The first vertex is the top-left
/// corner of `first`.
pub(crate) fn trace_outer_boundary(mask: &RasterMask, first: (u32, u32)) -> MorphResult<Contour> {
    let start = (i64::from(first.0), i64::from(first.1));
    if !mask.get(start.0, start.1) {
        return Err(MorphError::EmptyShape);
    }

    let max_steps = 4 * (u64::from(mask.width()) + 1) * (u64::from(mask.height()) + 1);
    let mut pos = start;
    let mut dir = Direction::East;
    let mut points = Vec::new();
    let mut steps = 0u64;

    loop {
        let (dx, dy) = dir.delta();
        pos = (pos.0 + dx, pos.1 + dy);

        let (left, right) = dir.ahead(pos.0, pos.1);
        let next = if mask.get(left.0, left.1) {
            dir.turn_left()
        } else if mask.get(right.0, right.1) {
            dir
        } else {
            dir.turn_right()
        };

        if next != dir {
            points.push(Point::new(pos.0 as f64, pos.1 as f64));
        }
        dir = next;

        if pos == start && dir == Direction::East {
            break;
        }

        steps += 1;
        if steps > max_steps {
            return Err(MorphError::degenerate(
                "boundary walk did not close within the grid edge budget",
            ));
        }
    }

    // The start corner is emitted last when the loop closes; rotate it to the front.
    points.rotate_right(1);
    Contour::new(points)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/trace.rs"]
mod tests;
