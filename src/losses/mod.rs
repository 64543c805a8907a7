// src/losses/mod.rs
// Elementwise pseudo-losses over runtime-typed arrays.
//
// Deep RL algorithms are usually written as gradients of pseudo-losses built from
// observations and rewards. The functions here are the elementwise pieces those
// objectives are assembled from; reduction over a batch is left to the caller.

pub mod classification;
pub mod regression;


use crate::backend::{DTypeKind, Float, type_assert};
use crate::error::LossError;
use crate::tensor::ArrayLike;
use ndarray::ArrayD;

pub use classification::{Likelihood, LogLoss};
pub use regression::L2Loss;

/// Base trait for all elementwise losses.
///
/// `compute` receives arrays that already share a float element type, so the
/// float contract holds by construction here. The runtime-typed entry points
/// below assert it before dispatching.
pub trait ElementwiseLoss {
    /// Output has the co-broadcast shape of `predictions` and `targets`
    fn compute<T: Float>(
        &self,
        predictions: &ArrayD<T>,
        targets: &ArrayD<T>,
    ) -> Result<ArrayD<T>, LossError>;

    /// Runs the loss on runtime-typed arrays.
    ///
    /// Fails with `TypeAssertion` before any arithmetic if an input is not
    /// floating point. `float32` paired with `float64` is evaluated in `float64`.
    fn apply(&self, predictions: &ArrayLike, targets: &ArrayLike) -> Result<ArrayLike, LossError> {
        type_assert(&[predictions, targets], DTypeKind::Float)?;

        match (predictions, targets) {
            (ArrayLike::F32(p), ArrayLike::F32(t)) => self.compute(p, t).map(ArrayLike::F32),
            (ArrayLike::F64(p), ArrayLike::F64(t)) => self.compute(p, t).map(ArrayLike::F64),
            _ => self
                .compute(&predictions.to_f64(), &targets.to_f64())
                .map(ArrayLike::F64),
        }
    }
}

/// L2 loss of `predictions` with respect to `targets`: `0.5 * (predictions - targets)^2`.
///
/// Without targets this is an L2 regularizer on `predictions` (targets default
/// to zeros of the same shape and dtype).
///
/// ```
/// use rlosses::{ArrayLike, l2_loss};
///
/// let predictions = ArrayLike::from_vec(vec![1.0f64, 2.0, 3.0]);
/// let targets = ArrayLike::from_vec(vec![1.0f64, 1.0, 1.0]);
/// let loss = l2_loss(&predictions, Some(&targets)).unwrap();
/// assert_eq!(loss, ArrayLike::from_vec(vec![0.0f64, 0.5, 2.0]));
/// ```
pub fn l2_loss(predictions: &ArrayLike, targets: Option<&ArrayLike>) -> Result<ArrayLike, LossError> {
    let zeros;
    let targets = match targets {
        Some(targets) => targets,
        None => {
            zeros = predictions.zeros_like();
            &zeros
        }
    };
    L2Loss.apply(predictions, targets)
}

/// Bernoulli likelihood of `targets` under success probabilities `predictions`:
/// `predictions^targets * (1 - predictions)^(1 - targets)`.
///
/// Positions where both are exactly 1 or both exactly 0 evaluate to exactly 1.
/// Inputs are not range checked.
pub fn likelihood(predictions: &ArrayLike, targets: &ArrayLike) -> Result<ArrayLike, LossError> {
    Likelihood.apply(predictions, targets)
}

/// Log loss: `-ln(likelihood(predictions, targets))`.
///
/// Zero wherever the likelihood override applies. Positions with zero
/// likelihood come out as `+inf`.
///
/// ```
/// use rlosses::{ArrayLike, log_loss};
///
/// let predictions = ArrayLike::from_vec(vec![1.0f64, 0.5]);
/// let targets = ArrayLike::from_vec(vec![1.0f64, 1.0]);
/// let loss = log_loss(&predictions, &targets).unwrap();
/// let values: Vec<f64> = loss.as_array::<f64>().unwrap().iter().copied().collect();
/// assert_eq!(values[0], 0.0);
/// assert!((values[1] - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn log_loss(predictions: &ArrayLike, targets: &ArrayLike) -> Result<ArrayLike, LossError> {
    LogLoss.apply(predictions, targets)
}
