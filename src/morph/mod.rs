//! Correspondence, interpolation, easing and frame sequencing.

pub(crate) mod correspond;
pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod prepare;
pub(crate) mod sequence;
pub(crate) mod session;
