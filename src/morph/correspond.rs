use kurbo::Point;

use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::dist2;
use crate::shape::contour::reverse_keep_first;
use crate::shape::resample::ResampledContour;

/// Index alignment of contour B against contour A.
///
/// Point `i` of A pairs with point `(i + offset) mod K` of B, where B is first traversed
/// backwards (keeping its first point) when `reversed` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correspondence {
    pub offset: usize,
    pub reversed: bool,
    /// Total squared pairing distance at this alignment.
    pub cost: f64,
}

impl Correspondence {
    /// B's points reordered so that index `i` pairs with A's index `i`.
    pub fn align(&self, b: &ResampledContour) -> Vec<Point> {
        let base = if self.reversed {
            reverse_keep_first(b.points())
        } else {
            b.points().to_vec()
        };
        let k = base.len();
        (0..k).map(|i| base[(i + self.offset) % k]).collect()
    }
}

/// Sum of squared distances pairing `a[i]` with `b[(i + offset) mod K]`.
pub fn pairing_cost(a: &[Point], b: &[Point], offset: usize) -> f64 {
    let k = b.len();
    a.iter()
        .enumerate()
        .map(|(i, &p)| dist2(p, b[(i + offset) % k]))
        .sum()
}

/// Search every rotation offset (and optionally the reversed traversal) for the alignment with
/// the smallest total squared distance. Exact ties go to the lowest offset, and to the forward
/// direction over the reversed one.
pub fn build_correspondence(
    a: &ResampledContour,
    b: &ResampledContour,
    search_reversed: bool,
) -> MorphResult<Correspondence> {
    if a.len() != b.len() {
        return Err(MorphError::config(format!(
            "correspondence needs equal point counts, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(MorphError::degenerate("cannot align empty contours"));
    }

    let mut best = best_rotation(a.points(), b.points(), false);
    if search_reversed {
        let rev = reverse_keep_first(b.points());
        let cand = best_rotation(a.points(), &rev, true);
        if cand.cost < best.cost {
            best = cand;
        }
    }

    tracing::debug!(
        offset = best.offset,
        reversed = best.reversed,
        cost = best.cost,
        "built correspondence"
    );
    Ok(best)
}

fn best_rotation(a: &[Point], b: &[Point], reversed: bool) -> Correspondence {
    let mut best = Correspondence {
        offset: 0,
        reversed,
        cost: pairing_cost(a, b, 0),
    };
    for offset in 1..b.len() {
        let cost = pairing_cost(a, b, offset);
        if cost < best.cost {
            best = Correspondence {
                offset,
                reversed,
                cost,
            };
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/morph/correspond.rs"]
mod tests;
