pub mod dtype;
pub mod number;


pub use dtype::{DType, DTypeKind, type_assert};
pub use number::{Float, Numeric};
