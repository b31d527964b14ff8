//! Frame sinks: in-memory, animated GIF and numbered still images.

pub(crate) mod gif;
pub(crate) mod images;
pub(crate) mod output;
pub(crate) mod sink;
