// src/backend/dtype.rs
// Runtime element-type descriptors and the type assertion every loss runs
// before touching its inputs.

use crate::error::LossError;
use crate::tensor::ArrayLike;
use std::fmt;

/// Element type of an `ArrayLike`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    F64,
    I32,
    I64,
}

/// Coarse family of a `DType`, the granularity `type_assert` checks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DTypeKind {
    Float,
    Integer,
}

impl DType {
    pub fn kind(self) -> DTypeKind {
        match self {
            DType::F32 | DType::F64 => DTypeKind::Float,
            DType::I32 | DType::I64 => DTypeKind::Integer,
        }
    }

    pub fn is_float(self) -> bool {
        self.kind() == DTypeKind::Float
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::I32 => "int32",
            DType::I64 => "int64",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DTypeKind::Float => f.write_str("float"),
            DTypeKind::Integer => f.write_str("integer"),
        }
    }
}

/// Checks that every array in `arrays` has an element type of family `expected`.
///
/// Fails on the first offending argument, reporting its position in `arrays`.
pub fn type_assert(arrays: &[&ArrayLike], expected: DTypeKind) -> Result<(), LossError> {
    for (index, array) in arrays.iter().enumerate() {
        let found = array.dtype();
        if found.kind() != expected {
            return Err(LossError::TypeAssertion {
                index,
                found,
                expected,
            });
        }
    }
    Ok(())
}
