// src/ops/elementwise.rs
use crate::backend::Float;
use crate::error::LossError;
use crate::ops::broadcast_pair;
use ndarray::{ArrayD, Zip};

/// Broadcasting binary map: `output[i] = f(a[i], b[i])` over the co-broadcast shape
pub fn zip_map<A, B, C, F>(a: &ArrayD<A>, b: &ArrayD<B>, f: F) -> Result<ArrayD<C>, LossError>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B) -> C,
{
    let (a_view, b_view) = broadcast_pair(a, b)?;
    Ok(Zip::from(&a_view)
        .and(&b_view)
        .map_collect(|&x, &y| f(x, y)))
}

pub fn sub<T: Float>(a: &ArrayD<T>, b: &ArrayD<T>) -> Result<ArrayD<T>, LossError> {
    zip_map(a, b, |x, y| x - y)
}

pub fn mul<T: Float>(a: &ArrayD<T>, b: &ArrayD<T>) -> Result<ArrayD<T>, LossError> {
    zip_map(a, b, |x, y| x * y)
}

/// Elementwise `base ^ exponent` with a per-element exponent
pub fn powf<T: Float>(base: &ArrayD<T>, exponent: &ArrayD<T>) -> Result<ArrayD<T>, LossError> {
    zip_map(base, exponent, |x, e| x.powf(e))
}

pub fn square<T: Float>(a: &ArrayD<T>) -> ArrayD<T> {
    a.mapv(|x| x * x)
}

pub fn scale<T: Float>(a: &ArrayD<T>, factor: T) -> ArrayD<T> {
    a.mapv(|x| x * factor)
}

/// `1 - a`, the complement of a probability
pub fn one_minus<T: Float>(a: &ArrayD<T>) -> ArrayD<T> {
    let one = T::one();
    a.mapv(|x| one - x)
}

/// Natural logarithm. Follows `f64::ln` on its domain edges: `ln(0) = -inf`, `ln(x < 0) = NaN`.
pub fn ln<T: Float>(a: &ArrayD<T>) -> ArrayD<T> {
    a.mapv(Float::ln)
}

pub fn neg<T: Float>(a: &ArrayD<T>) -> ArrayD<T> {
    a.mapv(|x| -x)
}
