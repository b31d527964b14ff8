use std::fmt;

/// Convenience result type used across shapemorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Which of the two input shapes an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShapeId {
    /// The shape the morph starts from (t = 0).
    A,
    /// The shape the morph ends at (t = 1).
    B,
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("shape A"),
            Self::B => f.write_str("shape B"),
        }
    }
}

/// Top-level error taxonomy used by the morphing engine and its collaborators.
///
/// Every variant is fatal for the current morph request; there is no partial-success mode.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Input image could not be read or has an unsupported format.
    #[error("decode error: {0}")]
    Decode(String),

    /// The shape mask contains no foreground pixels.
    #[error("empty shape: mask contains no foreground pixels")]
    EmptyShape,

    /// The mask has several disjoint foreground components and no largest-region policy.
    #[error("multiple regions: mask contains {count} disjoint foreground components")]
    MultipleRegions {
        /// Number of 8-connected components found.
        count: usize,
    },

    /// Boundary has fewer than 3 distinct points or zero length.
    #[error("degenerate contour: {0}")]
    DegenerateContour(String),

    /// Invalid frame count, point count, duration, canvas or output path.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failure while writing frames to an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// A failure attributed to one of the two input shapes.
    #[error("{shape}: {source}")]
    Shape {
        /// Shape the failure belongs to.
        shape: ShapeId,
        /// Underlying failure.
        source: Box<MorphError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MorphError::DegenerateContour`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateContour(msg.into())
    }

    /// Build a [`MorphError::Configuration`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`MorphError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Attribute this error to `shape`.
    pub fn in_shape(self, shape: ShapeId) -> Self {
        Self::Shape {
            shape,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping [`MorphError::Shape`] wrappers.
    pub fn root(&self) -> &MorphError {
        match self {
            Self::Shape { source, .. } => source.root(),
            other => other,
        }
    }

    /// The shape this error was attributed to, if any.
    pub fn shape(&self) -> Option<ShapeId> {
        match self {
            Self::Shape { shape, .. } => Some(*shape),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
