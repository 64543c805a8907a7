// src/backend/number.rs

use crate::backend::dtype::DType;
use crate::tensor::ArrayLike;
use ndarray::ArrayD;
use rand_distr::num_traits::{One, Zero};
use std::cmp::{PartialEq, PartialOrd};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Base trait for every element type an `ArrayLike` can hold.
/// Integers implement it too: they can be stored and inspected, but the
/// loss functions reject them through the type assertion.
pub trait Numeric:
    // Basic arithmetic operations
    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
    // Comparisons
    + PartialOrd + PartialEq
    // Essential traits
    + Clone + Copy + Debug
    + Zero + One
    + Send + Sync + 'static
{
    /// Runtime tag describing this element type
    const DTYPE: DType;

    /// Widens to f64. Used for dtype promotion of mixed-width inputs.
    fn to_f64(self) -> f64;

    /// Wraps an owned array of this element type into the runtime-typed container
    fn wrap(array: ArrayD<Self>) -> ArrayLike;

    /// Borrows the underlying array if `array` holds this element type
    fn unwrap_ref(array: &ArrayLike) -> Option<&ArrayD<Self>>;
}

/// Floating-point element types. Only these reach the loss kernels.
pub trait Float: Numeric + Neg<Output = Self> {
    /// The constant 0.5 of the squared-error loss
    fn half() -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Power with floating-point exponent
    fn powf(self, exp: Self) -> Self;
}

// ============= NUMERIC IMPLEMENTATIONS =============

impl Numeric for f64 {
    const DTYPE: DType = DType::F64;

    fn to_f64(self) -> f64 {
        self
    }

    fn wrap(array: ArrayD<Self>) -> ArrayLike {
        ArrayLike::F64(array)
    }

    fn unwrap_ref(array: &ArrayLike) -> Option<&ArrayD<Self>> {
        match array {
            ArrayLike::F64(data) => Some(data),
            _ => None,
        }
    }
}

impl Numeric for f32 {
    const DTYPE: DType = DType::F32;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn wrap(array: ArrayD<Self>) -> ArrayLike {
        ArrayLike::F32(array)
    }

    fn unwrap_ref(array: &ArrayLike) -> Option<&ArrayD<Self>> {
        match array {
            ArrayLike::F32(data) => Some(data),
            _ => None,
        }
    }
}

impl Numeric for i32 {
    const DTYPE: DType = DType::I32;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn wrap(array: ArrayD<Self>) -> ArrayLike {
        ArrayLike::I32(array)
    }

    fn unwrap_ref(array: &ArrayLike) -> Option<&ArrayD<Self>> {
        match array {
            ArrayLike::I32(data) => Some(data),
            _ => None,
        }
    }
}

impl Numeric for i64 {
    const DTYPE: DType = DType::I64;

    // i64 values above 2^53 lose precision, same as a numpy astype(float64)
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn wrap(array: ArrayD<Self>) -> ArrayLike {
        ArrayLike::I64(array)
    }

    fn unwrap_ref(array: &ArrayLike) -> Option<&ArrayD<Self>> {
        match array {
            ArrayLike::I64(data) => Some(data),
            _ => None,
        }
    }
}

// ============= FLOAT IMPLEMENTATIONS =============

impl Float for f64 {
    fn half() -> Self {
        0.5
    }

    fn ln(self) -> Self {
        self.ln()
    }

    fn powf(self, exp: Self) -> Self {
        self.powf(exp)
    }
}

impl Float for f32 {
    fn half() -> Self {
        0.5
    }

    fn ln(self) -> Self {
        self.ln()
    }

    fn powf(self, exp: Self) -> Self {
        self.powf(exp)
    }
}
