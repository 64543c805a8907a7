//! Error types shared by every module of the crate.

use crate::backend::{DType, DTypeKind};
use thiserror::Error;

/// Errors that can occur while evaluating a loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LossError {
    #[error("Type assertion failed: argument {index} has dtype {found}, expected a {expected} dtype")]
    TypeAssertion {
        index: usize,
        found: DType,
        expected: DTypeKind,
    },

    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    Broadcast { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Shape {shape:?} does not hold {len} elements")]
    Shape { shape: Vec<usize>, len: usize },
}
