//! Nonlinearities and output transforms.
//!
//! Every layer computes a pre-activation `z = W x + b` and applies ReLU
//! element-wise: `a = relu(z)`. Hidden and output layers share the same
//! nonlinearity; a probability-like reading of the output is obtained by
//! applying [`sigmoid`] to the final raw `z`, selected through [`OutputPolicy`].

#[inline]
pub fn relu(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { x }
}

/// Derivative of [`relu`] with respect to its input.
///
/// The non-differentiable point `x = 0` maps to `0`.
#[inline]
pub fn relu_prime(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { 1.0 }
}

/// Logistic sigmoid `1 / (1 + e^(-x))`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    // Numerically stable sigmoid.
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

/// Element-wise map that leaves exact-zero entries at zero without calling `f`.
///
/// Only valid for maps with `f(0) == 0`, which holds for [`relu`] and
/// [`relu_prime`].
#[inline]
pub fn map_skip_zeros(values: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    values
        .iter()
        .map(|&x| if x == 0.0 { 0.0 } else { f(x) })
        .collect()
}

/// How the final layer is reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPolicy {
    /// The final ReLU activation is the output.
    #[default]
    Linear,
    /// The final activation plus `sigmoid(z_L)` as a confidence in `(0, 1)`.
    Sigmoid,
}

impl OutputPolicy {
    /// Confidence values for the final raw pre-activation, if this policy has one.
    pub fn confidence(self, final_z: &[f64]) -> Option<Vec<f64>> {
        match self {
            OutputPolicy::Linear => None,
            OutputPolicy::Sigmoid => Some(final_z.iter().map(|&z| sigmoid(z)).collect()),
        }
    }
}
