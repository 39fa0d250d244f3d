//! Loss helpers.
//!
//! Training minimizes the squared error between the final activation and the
//! target. The gradient that drives backprop lives in
//! [`crate::backward::output_error`]; this module only reports the loss value.

use crate::Result;
use crate::error::check_len;

/// Squared error `‖pred - target‖²`.
#[inline]
pub fn squared_error(pred: &[f64], target: &[f64]) -> Result<f64> {
    check_len("target", pred.len(), target.len())?;

    let mut sum_sq = 0.0_f64;
    for (&p, &t) in pred.iter().zip(target) {
        let diff = p - t;
        sum_sq = diff.mul_add(diff, sum_sq);
    }
    Ok(sum_sq)
}
