use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::raster::frame::Frame;
use crate::shape::contour::Contour;

/// Rule deciding which regions of a (possibly self-intersecting) polygon are inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Inside when the signed crossing count is non-zero.
    #[default]
    NonZero,
    /// Inside when the crossing count is odd.
    EvenOdd,
}

impl FillRule {
    fn is_inside(self, winding: i32) -> bool {
        match self {
            Self::NonZero => winding != 0,
            Self::EvenOdd => winding.rem_euclid(2) == 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Crossing {
    x: f64,
    dir: i32,
}

/// Render `contour` as a filled polygon on a fresh `background` canvas.
pub fn rasterize(
    contour: &Contour,
    canvas: Canvas,
    fill: Rgba8,
    background: Rgba8,
    rule: FillRule,
    index: FrameIndex,
    t: f64,
) -> Frame {
    let mut frame = Frame::filled(index, t, canvas, background);
    fill_polygon(&mut frame, contour, fill, rule);
    frame
}

/// Scanline-fill `contour` into `frame`, painting every pixel whose center is inside.
///
/// Edges are sampled half-open in y so a vertex shared by two edges is counted once. Edges with
/// non-finite coordinates are dropped; degenerate input never panics.
pub fn fill_polygon(frame: &mut Frame, contour: &Contour, color: Rgba8, rule: FillRule) {
    let edges: Vec<_> = contour
        .edges()
        .filter(|(a, b)| a.is_finite() && b.is_finite() && a.y != b.y)
        .collect();
    if edges.is_empty() || frame.width == 0 || frame.height == 0 {
        return;
    }

    let (min_y, max_y) = edges.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, (a, b)| {
        (acc.0.min(a.y.min(b.y)), acc.1.max(a.y.max(b.y)))
    });
    // Rows whose center y + 0.5 can fall in [min_y, max_y).
    let row_start = (min_y - 0.5).ceil().max(0.0);
    let row_end = (max_y - 0.5).ceil().min(f64::from(frame.height));
    if row_start >= row_end {
        return;
    }

    let width = f64::from(frame.width);
    let mut crossings: Vec<Crossing> = Vec::with_capacity(16);
    for y in row_start as u32..row_end as u32 {
        let yc = f64::from(y) + 0.5;
        crossings.clear();
        for (a, b) in &edges {
            let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
            if yc < lo || yc >= hi {
                continue;
            }
            let x = a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y);
            crossings.push(Crossing {
                x,
                dir: if b.y > a.y { 1 } else { -1 },
            });
        }
        crossings.sort_by(|p, q| p.x.total_cmp(&q.x));

        let mut winding = 0i32;
        for pair in crossings.windows(2) {
            winding += pair[0].dir;
            if !rule.is_inside(winding) {
                continue;
            }
            // Pixel x is covered when its center x + 0.5 lies in [x_start, x_end).
            let x0 = (pair[0].x - 0.5).ceil().clamp(0.0, width);
            let x1 = (pair[1].x - 0.5).ceil().clamp(0.0, width);
            if x0 < x1 {
                frame.fill_span(y, x0 as u32, x1 as u32, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/fill.rs"]
mod tests;
