use thiserror::Error;

use crate::shape::Shape;

/// Errors raised while constructing or indexing tensors and matrices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shape's element count does not match the supplied buffer.
    #[error("invalid shape {shape} for buffer of length {len}")]
    DimensionMismatch { shape: Shape, len: usize },

    /// A matrix was given a shape whose rank is not 2.
    #[error("matrix must have exactly 2 dimensions, got {rank}")]
    InvalidRank { rank: usize },

    /// A resolved coordinate falls outside the addressed shape.
    #[error("index {index:?} is out of range for shape {shape}")]
    IndexOutOfRange { index: Vec<isize>, shape: Shape },

    /// Selector text that is neither an integer, a list, nor a range.
    #[error("unsupported selector type: {selector:?}")]
    UnsupportedSelectorType { selector: String },

    /// A paired selector with other than two components.
    #[error("expected a (row, column) selector pair, got {arity} component(s)")]
    InvalidSelectorShape { arity: usize },

    /// A range selector with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroSliceStep,
}

pub type Result<T> = std::result::Result<T, Error>;
