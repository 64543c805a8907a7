// src/losses/classification.rs
// Bernoulli likelihood and log loss on typed arrays.

use crate::backend::Float;
use crate::error::LossError;
use crate::losses::ElementwiseLoss;
use crate::ops::comparison::{equal_scalar, logical_and, logical_or, where_scalar};
use crate::ops::elementwise::{ln, mul, neg, one_minus, powf};
use ndarray::ArrayD;

/// Bernoulli likelihood: predictions^targets * (1 - predictions)^(1 - targets)
/// predictions are success probabilities, targets are observed labels or probabilities
#[derive(Debug, Clone, Copy, Default)]
pub struct Likelihood;

impl ElementwiseLoss for Likelihood {
    fn compute<T: Float>(
        &self,
        predictions: &ArrayD<T>,
        targets: &ArrayD<T>,
    ) -> Result<ArrayD<T>, LossError> {
        likelihood(predictions, targets)
    }
}

/// Log Loss: -ln(likelihood(predictions, targets))
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLoss;

impl ElementwiseLoss for LogLoss {
    fn compute<T: Float>(
        &self,
        predictions: &ArrayD<T>,
        targets: &ArrayD<T>,
    ) -> Result<ArrayD<T>, LossError> {
        log_loss(predictions, targets)
    }
}

/// Positions where `predictions` and `targets` are both exactly 1 or both exactly 0.
/// `-0.0` counts as 0. Operands are co-broadcast.
pub fn boundary_mask<T: Float>(
    predictions: &ArrayD<T>,
    targets: &ArrayD<T>,
) -> Result<ArrayD<bool>, LossError> {
    let zero = T::zero();
    let one = T::one();

    let both_one = logical_and(&equal_scalar(targets, one), &equal_scalar(predictions, one))?;
    let both_zero = logical_and(&equal_scalar(targets, zero), &equal_scalar(predictions, zero))?;
    logical_or(&both_one, &both_zero)
}

/// Replaces `raw` with exactly 1 wherever `boundary_mask` holds, whatever `raw` holds there (NaN included).
pub fn pin_boundary<T: Float>(
    predictions: &ArrayD<T>,
    targets: &ArrayD<T>,
    raw: &ArrayD<T>,
) -> Result<ArrayD<T>, LossError> {
    let filter = boundary_mask(predictions, targets)?;
    where_scalar(&filter, T::one(), raw)
}

/// Typed Bernoulli likelihood, pinned to exactly 1 on `boundary_mask`.
pub fn likelihood<T: Float>(
    predictions: &ArrayD<T>,
    targets: &ArrayD<T>,
) -> Result<ArrayD<T>, LossError> {
    let success = powf(predictions, targets)?;
    let failure = powf(&one_minus(predictions), &one_minus(targets))?;
    let likelihood_vals = mul(&success, &failure)?;

    // 0^0 evaluates to NaN on some accelerators; the exact-match boundary cases are pinned to 1.
    pin_boundary(predictions, targets, &likelihood_vals)
}

/// Typed log loss: `-ln` of the typed likelihood.
pub fn log_loss<T: Float>(
    predictions: &ArrayD<T>,
    targets: &ArrayD<T>,
) -> Result<ArrayD<T>, LossError> {
    let likelihood_vals = likelihood(predictions, targets)?;
    Ok(neg(&ln(&likelihood_vals)))
}
