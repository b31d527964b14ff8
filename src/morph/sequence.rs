use std::iter::FusedIterator;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::MorphResult;
use crate::morph::ease::Ease;
use crate::morph::session::MorphSession;
use crate::raster::frame::Frame;

/// Interpolation parameter of frame `index` out of `frames`.
///
/// Frames are spread evenly over `[0, 1]` with both endpoints included, then eased. A single
/// frame sits at `t = 0`.
pub fn frame_t(index: u32, frames: u32, ease: Ease) -> f64 {
    if frames <= 1 {
        return 0.0;
    }
    ease.apply(f64::from(index) / f64::from(frames - 1))
}

/// Lazy, ordered frame sequence of a prepared morph.
///
/// Each call to `next` renders one frame; nothing is buffered. Once exhausted the sequence stays
/// exhausted.
#[derive(Clone)]
pub struct MorphFrames<'a> {
    session: &'a MorphSession,
    next: u32,
    end: u32,
}

impl<'a> MorphFrames<'a> {
    pub(crate) fn new(session: &'a MorphSession) -> Self {
        Self {
            session,
            next: 0,
            end: session.frame_count(),
        }
    }
}

impl Iterator for MorphFrames<'_> {
    type Item = MorphResult<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = FrameIndex(self.next);
        self.next += 1;
        Some(self.session.render_frame(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MorphFrames<'_> {}

impl FusedIterator for MorphFrames<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/morph/sequence.rs"]
mod tests;
