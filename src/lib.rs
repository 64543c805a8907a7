//! # rlosses
//!
//! Elementwise mathematical transformations used to build training objectives
//! for reinforcement-learning agents, on top of `ndarray`.
//!
//! Deep RL algorithms are often expressed as gradients of pseudo-loss functions
//! built from observations and rewards collected in the environment. This crate
//! collects the elementwise pieces of such losses:
//!
//! - `l2_loss`: squared error, or an L2 regularizer when no targets are given
//! - `likelihood`: Bernoulli likelihood of targets under predicted probabilities
//! - `log_loss`: negative log of `likelihood`
//!
//! Every function is pure, broadcasts its inputs under NumPy rules and returns
//! a freshly allocated array. Inputs carry their element type at runtime
//! (`ArrayLike`); non-float inputs are rejected with `LossError::TypeAssertion`.
//! Callers already holding `ndarray::ArrayD<f32 | f64>` can use the typed
//! kernels in `losses::regression` and `losses::classification` directly.
//!
pub mod backend;
pub mod error;
pub mod losses;
pub mod ops;
pub mod tensor;

// Re-export commonly used types for convenience
pub use backend::{DType, DTypeKind, Float, Numeric, type_assert};
pub use error::LossError;
pub use losses::{ElementwiseLoss, L2Loss, Likelihood, LogLoss, l2_loss, likelihood, log_loss};
pub use tensor::ArrayLike;
