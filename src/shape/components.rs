use crate::foundation::error::{MorphError, MorphResult};
use crate::shape::mask::RasterMask;

/// What to do when a mask holds more than one disjoint foreground component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionPolicy {
    /// Fail with [`MorphError::MultipleRegions`].
    #[default]
    Single,
    /// Keep the component with the most pixels and discard the rest.
    ///
    /// Equal sizes resolve to the component whose first pixel comes first in raster order.
    Largest,
}

/// The foreground component chosen for boundary tracing.
#[derive(Clone, Debug)]
pub struct Region {
    /// Mask holding only the chosen component.
    pub mask: RasterMask,
    /// First pixel of the component in raster order.
    pub first: (u32, u32),
    /// Pixel count.
    pub area: usize,
    /// Number of components present in the source mask.
    pub components: usize,
}

/// Disjoint-set forest used for two-pass component labeling.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: Vec::new() }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut id: u32) -> u32 {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression.
        while self.parent[id as usize] != root {
            let next = self.parent[id as usize];
            self.parent[id as usize] = root;
            id = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Lower id wins so roots stay in raster order of first appearance.
            let (keep, drop) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[drop as usize] = keep;
        }
    }
}

/// Label 8-connected foreground components.
///
/// Returns per-pixel labels (`u32::MAX` for background) numbered `0..count` in raster order of
/// each component's first pixel.
pub fn label_components(mask: &RasterMask) -> (Vec<u32>, usize) {
    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let bits = mask.bits();
    let mut labels = vec![u32::MAX; w * h];
    let mut uf = UnionFind::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if !bits[idx] {
                continue;
            }

            // Already-visited 8-neighbors: W, NW, N, NE.
            let mut current = u32::MAX;
            let mut neighbors = [u32::MAX; 4];
            if x > 0 {
                neighbors[0] = labels[idx - 1];
            }
            if y > 0 {
                let up = idx - w;
                if x > 0 {
                    neighbors[1] = labels[up - 1];
                }
                neighbors[2] = labels[up];
                if x + 1 < w {
                    neighbors[3] = labels[up + 1];
                }
            }

            for n in neighbors.into_iter().filter(|&n| n != u32::MAX) {
                if current == u32::MAX {
                    current = n;
                } else {
                    uf.union(current, n);
                }
            }
            if current == u32::MAX {
                current = uf.make_set();
            }
            labels[idx] = current;
        }
    }

    // Second pass: compact roots into dense ids in order of first appearance.
    let mut dense = vec![u32::MAX; uf.parent.len()];
    let mut count = 0u32;
    for label in labels.iter_mut().filter(|l| **l != u32::MAX) {
        let root = uf.find(*label) as usize;
        if dense[root] == u32::MAX {
            dense[root] = count;
            count += 1;
        }
        *label = dense[root];
    }

    (labels, count as usize)
}

/// Pick the component to trace according to `policy`.
pub fn select_region(mask: &RasterMask, policy: RegionPolicy) -> MorphResult<Region> {
    let (labels, count) = label_components(mask);
    if count == 0 {
        return Err(MorphError::EmptyShape);
    }
    if count > 1 && policy == RegionPolicy::Single {
        return Err(MorphError::MultipleRegions { count });
    }

    let w = mask.width() as usize;
    let mut sizes = vec![0usize; count];
    let mut firsts = vec![None::<usize>; count];
    for (idx, &l) in labels.iter().enumerate() {
        if l == u32::MAX {
            continue;
        }
        sizes[l as usize] += 1;
        firsts[l as usize].get_or_insert(idx);
    }

    // Labels are already in raster order, so the first maximum is the tie-break winner.
    let mut chosen = 0usize;
    for (l, &size) in sizes.iter().enumerate() {
        if size > sizes[chosen] {
            chosen = l;
        }
    }

    let first = firsts[chosen].ok_or(MorphError::EmptyShape)?;
    if count > 1 {
        tracing::debug!(
            components = count,
            kept_area = sizes[chosen],
            "largest-region policy discarded smaller components"
        );
    }

    let bits = labels.iter().map(|&l| l == chosen as u32).collect();
    Ok(Region {
        mask: RasterMask::from_bits(mask.width(), mask.height(), bits),
        first: ((first % w) as u32, (first / w) as u32),
        area: sizes[chosen],
        components: count,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shape/components.rs"]
mod tests;
