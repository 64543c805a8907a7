// src/losses/regression.rs
// Squared-error loss on typed arrays.

use crate::backend::Float;
use crate::error::LossError;
use crate::losses::ElementwiseLoss;
use crate::ops::elementwise::{scale, square, sub};
use ndarray::ArrayD;

/// L2 Loss: 0.5 * (predictions - targets)²
/// The 0.5 factor follows Bishop's convention, so the gradient is the plain residual.
#[derive(Debug, Clone, Copy, Default)]
pub struct L2Loss;

impl ElementwiseLoss for L2Loss {
    fn compute<T: Float>(
        &self,
        predictions: &ArrayD<T>,
        targets: &ArrayD<T>,
    ) -> Result<ArrayD<T>, LossError> {
        l2_loss(predictions, Some(targets))
    }
}

/// Typed L2 loss. `None` targets means zeros shaped like `predictions`.
pub fn l2_loss<T: Float>(
    predictions: &ArrayD<T>,
    targets: Option<&ArrayD<T>>,
) -> Result<ArrayD<T>, LossError> {
    let zeros;
    let targets = match targets {
        Some(targets) => targets,
        None => {
            zeros = ArrayD::zeros(predictions.raw_dim());
            &zeros
        }
    };

    let diff = sub(predictions, targets)?;
    Ok(scale(&square(&diff), T::half()))
}
