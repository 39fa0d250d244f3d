//! Gradient-descent parameter update.
//!
//! Given the deltas of one backward call and the activations of the forward
//! call that preceded it:
//!
//! - every bias: `b_i -= lr * delta_i`
//! - every weight matrix for `i >= 1`: `W_i -= lr * (delta_i ⊗ a_{i-1})`
//! - layer 0 weights follow the network's [`InputLayer`] mode

use crate::error::check_len;
use crate::{Deltas, Error, InputLayer, Network, Result};

/// Stochastic gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Returns an error if `lr` is not finite or `lr <= 0`.
    pub fn new(lr: f64) -> Result<Self> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {lr}"
            )));
        }
        Ok(Self { lr })
    }

    #[inline]
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Apply one update in place.
    ///
    /// `activations` and `input` must come from the forward call whose z
    /// trace produced `deltas`. Shapes are checked up front, so a failed
    /// step leaves `network` untouched.
    pub fn step(
        &self,
        network: &mut Network,
        deltas: &Deltas,
        activations: &[Vec<f64>],
        input: &[f64],
    ) -> Result<()> {
        let n = network.num_layers();
        check_len("deltas", n, deltas.len())?;
        check_len("activations", n, activations.len())?;
        check_len("input", network.input_dim(), input.len())?;
        for (i, &width) in network.sizes().iter().enumerate() {
            check_len("layer delta", width, deltas.as_slice()[i].len())?;
            check_len("layer activation", width, activations[i].len())?;
        }

        let train_input_layer = network.input_layer() == InputLayer::Trained;
        let deltas = deltas.as_slice();
        for (i, layer) in network.layers_mut().iter_mut().enumerate() {
            layer.step_biases(self.lr, &deltas[i]);
            if i > 0 {
                layer.step_weights(self.lr, &deltas[i], &activations[i - 1]);
            } else if train_input_layer {
                layer.step_weights(self.lr, &deltas[0], input);
            }
        }

        Ok(())
    }
}
