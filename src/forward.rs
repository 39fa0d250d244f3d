//! Feed-forward evaluation.

use crate::activation::{map_skip_zeros, relu};
use crate::error::check_len;
use crate::{Network, Result};

/// Per-layer values produced by one forward call.
///
/// `zs()[i]` is the pre-activation of layer `i` and `activations()[i]` its
/// ReLU output. Both have one entry per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    zs: Vec<Vec<f64>>,
    activations: Vec<Vec<f64>>,
}

impl Trace {
    #[inline]
    pub fn zs(&self) -> &[Vec<f64>] {
        &self.zs
    }

    #[inline]
    pub fn activations(&self) -> &[Vec<f64>] {
        &self.activations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.zs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zs.is_empty()
    }

    /// Final-layer activation.
    #[inline]
    pub fn output(&self) -> &[f64] {
        self.activations.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Final-layer pre-activation.
    #[inline]
    pub fn output_z(&self) -> &[f64] {
        self.zs.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_parts(self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (self.zs, self.activations)
    }
}

/// Result of [`Network::predict`].
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Final-layer activation.
    pub output: Vec<f64>,
    /// `sigmoid(z_L)` for networks built with `OutputPolicy::Sigmoid`.
    pub confidence: Option<Vec<f64>>,
}

impl Prediction {
    /// The confidence of a single-output network.
    pub fn confidence_scalar(&self) -> Option<f64> {
        self.confidence.as_ref().and_then(|c| c.first().copied())
    }
}

impl Network {
    /// Forward pass for a single sample.
    ///
    /// Layer 0 applies its square matrix to the raw input; every later layer
    /// consumes the previous layer's activation. Fails with
    /// `DimensionMismatch` when `input.len() != self.input_dim()`.
    pub fn forward(&self, input: &[f64]) -> Result<Trace> {
        check_len("input", self.input_dim(), input.len())?;

        let n = self.num_layers();
        let mut zs = Vec::with_capacity(n);
        let mut activations: Vec<Vec<f64>> = Vec::with_capacity(n);

        for (idx, layer) in self.layers().iter().enumerate() {
            let layer_input = if idx == 0 {
                input
            } else {
                activations[idx - 1].as_slice()
            };
            let z = layer.affine(layer_input);
            let a = map_skip_zeros(&z, relu);
            zs.push(z);
            activations.push(a);
        }

        Ok(Trace { zs, activations })
    }

    /// Inference: the final activation plus the output policy's confidence.
    pub fn predict(&self, input: &[f64]) -> Result<Prediction> {
        let trace = self.forward(input)?;
        let confidence = self.output_policy().confidence(trace.output_z());
        let (_, mut activations) = trace.into_parts();
        let output = activations.pop().unwrap_or_default();
        Ok(Prediction { output, confidence })
    }
}
