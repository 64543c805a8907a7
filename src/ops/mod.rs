// src/ops/mod.rs
// Array primitives the losses are composed from. Every binary operation
// co-broadcasts its operands under NumPy rules before running elementwise,
// and every operation allocates a fresh output.

pub mod comparison;
pub mod elementwise;

mod tests;

use crate::error::LossError;
use ndarray::{ArrayD, ArrayViewD};

/// Shape two arrays co-broadcast to.
///
/// Shapes are aligned from the trailing dimension; each pair of dimensions
/// must be equal or one of them must be 1. Missing leading dimensions count as 1.
pub fn broadcast_shapes(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, LossError> {
    let ndim = lhs.len().max(rhs.len());
    let mut shape = Vec::with_capacity(ndim);

    for axis in 0..ndim {
        let l = dim_aligned(lhs, ndim, axis);
        let r = dim_aligned(rhs, ndim, axis);
        let dim = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => {
                return Err(LossError::Broadcast {
                    lhs: lhs.to_vec(),
                    rhs: rhs.to_vec(),
                });
            }
        };
        shape.push(dim);
    }

    Ok(shape)
}

// Size of `axis` once `shape` is right-aligned to `ndim` dimensions
fn dim_aligned(shape: &[usize], ndim: usize, axis: usize) -> usize {
    let offset = ndim - shape.len();
    if axis < offset { 1 } else { shape[axis - offset] }
}

/// Views of `a` and `b` stretched to their common broadcast shape. No data is copied.
pub fn broadcast_pair<'a, A, B>(
    a: &'a ArrayD<A>,
    b: &'a ArrayD<B>,
) -> Result<(ArrayViewD<'a, A>, ArrayViewD<'a, B>), LossError> {
    let shape = broadcast_shapes(a.shape(), b.shape())?;
    let error = || LossError::Broadcast {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    };

    let a_view = a.broadcast(shape.as_slice()).ok_or_else(error)?;
    let b_view = b.broadcast(shape.as_slice()).ok_or_else(error)?;
    Ok((a_view, b_view))
}
