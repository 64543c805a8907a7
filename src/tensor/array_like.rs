// src/tensor/array_like.rs
use crate::backend::{DType, Numeric};
use crate::error::LossError;
use ndarray::{Array1, ArrayD, IxDyn, arr0};

/// N-dimensional array whose element type is only known at runtime.
///
/// Each variant owns a dynamic-rank `ndarray` array. Losses accept any variant
/// and reject the integer ones through `type_assert`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLike {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
}

impl ArrayLike {
    /// Builds an array of the given shape from row-major data
    pub fn from_shape_vec<T: Numeric>(shape: &[usize], data: Vec<T>) -> Result<Self, LossError> {
        let len = data.len();
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(T::wrap)
            .map_err(|_| LossError::Shape {
                shape: shape.to_vec(),
                len,
            })
    }

    /// Builds a 1-D array
    pub fn from_vec<T: Numeric>(data: Vec<T>) -> Self {
        T::wrap(Array1::from_vec(data).into_dyn())
    }

    /// Builds a 0-D array holding a single value
    pub fn scalar<T: Numeric>(value: T) -> Self {
        T::wrap(arr0(value).into_dyn())
    }

    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let dim = IxDyn(shape);
        match dtype {
            DType::F32 => ArrayLike::F32(ArrayD::zeros(dim)),
            DType::F64 => ArrayLike::F64(ArrayD::zeros(dim)),
            DType::I32 => ArrayLike::I32(ArrayD::zeros(dim)),
            DType::I64 => ArrayLike::I64(ArrayD::zeros(dim)),
        }
    }

    /// Zeros with the same shape and dtype as `self`
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.shape(), self.dtype())
    }

    pub fn dtype(&self) -> DType {
        match self {
            ArrayLike::F32(_) => DType::F32,
            ArrayLike::F64(_) => DType::F64,
            ArrayLike::I32(_) => DType::I32,
            ArrayLike::I64(_) => DType::I64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            ArrayLike::F32(data) => data.shape(),
            ArrayLike::F64(data) => data.shape(),
            ArrayLike::I32(data) => data.shape(),
            ArrayLike::I64(data) => data.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the typed array if `self` holds elements of type `T`
    pub fn as_array<T: Numeric>(&self) -> Option<&ArrayD<T>> {
        T::unwrap_ref(self)
    }

    /// Copies the elements into a float64 array, widening as needed
    pub fn to_f64(&self) -> ArrayD<f64> {
        match self {
            ArrayLike::F64(data) => data.clone(),
            ArrayLike::F32(data) => data.mapv(Numeric::to_f64),
            ArrayLike::I32(data) => data.mapv(Numeric::to_f64),
            ArrayLike::I64(data) => data.mapv(Numeric::to_f64),
        }
    }
}

impl<T: Numeric> From<ArrayD<T>> for ArrayLike {
    fn from(array: ArrayD<T>) -> Self {
        T::wrap(array)
    }
}
