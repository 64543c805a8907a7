// src/ops/comparison.rs
// Boolean masks and mask-driven selection.

use crate::backend::Numeric;
use crate::error::LossError;
use crate::ops::elementwise::zip_map;
use ndarray::ArrayD;

/// Element-wise `a == value`
pub fn equal_scalar<T: Numeric>(a: &ArrayD<T>, value: T) -> ArrayD<bool> {
    a.mapv(|x| x == value)
}

pub fn logical_and(a: &ArrayD<bool>, b: &ArrayD<bool>) -> Result<ArrayD<bool>, LossError> {
    zip_map(a, b, |x, y| x && y)
}

pub fn logical_or(a: &ArrayD<bool>, b: &ArrayD<bool>) -> Result<ArrayD<bool>, LossError> {
    zip_map(a, b, |x, y| x || y)
}

/// Element-wise selection: `value` where `mask` is set, `otherwise[i]` elsewhere.
/// `mask` and `otherwise` are co-broadcast.
pub fn where_scalar<T: Numeric>(
    mask: &ArrayD<bool>,
    value: T,
    otherwise: &ArrayD<T>,
) -> Result<ArrayD<T>, LossError> {
    zip_map(mask, otherwise, |selected, x| if selected { value } else { x })
}
