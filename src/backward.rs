//! Error propagation.
//!
//! The output error is `(a_L - t) ⊙ relu'(z_L)`. Each earlier layer receives
//! `(W_{i+1}ᵀ · delta_{i+1}) ⊙ relu'(z_i)`.

use crate::activation::{map_skip_zeros, relu_prime};
use crate::error::check_len;
use crate::{Network, Result};

/// One error vector per layer, ordered first layer to last.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas(pub(crate) Vec<Vec<f64>>);

impl Deltas {
    #[inline]
    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&[f64]> {
        self.0.get(idx).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.0
    }
}

/// Output-layer error signal `(final_activation - target) ⊙ relu'(final_z)`.
///
/// All three vectors must share one length.
pub fn output_error(target: &[f64], final_activation: &[f64], final_z: &[f64]) -> Result<Vec<f64>> {
    check_len("target", final_activation.len(), target.len())?;
    check_len("final z", final_activation.len(), final_z.len())?;

    let gate = map_skip_zeros(final_z, relu_prime);
    Ok(final_activation
        .iter()
        .zip(target)
        .zip(&gate)
        .map(|((&a, &t), &g)| (a - t) * g)
        .collect())
}

impl Network {
    /// Propagate the output error back through every layer.
    ///
    /// `zs` is the pre-activation trace of the forward call that produced
    /// `output_error`. Returns exactly one delta per layer.
    pub fn backpropagate(&self, output_error: Vec<f64>, zs: &[Vec<f64>]) -> Result<Deltas> {
        let n = self.num_layers();
        check_len("z trace", n, zs.len())?;
        for (z, &width) in zs.iter().zip(self.sizes()) {
            check_len("layer z", width, z.len())?;
        }
        check_len("output error", self.output_dim(), output_error.len())?;

        let layers = self.layers();
        let mut deltas = vec![Vec::new(); n];
        deltas[n - 1] = output_error;

        for i in (0..n - 1).rev() {
            let back = layers[i + 1].transpose_mul(&deltas[i + 1]);
            let gate = map_skip_zeros(&zs[i], relu_prime);
            deltas[i] = back.iter().zip(&gate).map(|(&d, &g)| d * g).collect();
        }

        Ok(Deltas(deltas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, InputLayer, Layer, OutputPolicy};

    #[test]
    fn output_error_gates_on_final_z() {
        let err = output_error(&[1.0, 0.0, 0.5], &[3.0, 0.0, 2.0], &[3.0, -1.0, 0.0]).unwrap();
        assert_eq!(err, vec![2.0, 0.0, 0.0]);
    }

    #[test]
    fn output_error_rejects_mismatched_lengths() {
        let err = output_error(&[1.0, 2.0], &[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { what: "target", .. }));

        let err = output_error(&[1.0], &[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { what: "final z", .. }));
    }

    #[test]
    fn deltas_follow_transposed_weights() {
        let l0 = Layer::from_parts(2, 2, vec![1.0, 0.0, 0.0, 1.0], vec![0.0, 0.0]).unwrap();
        let l1 = Layer::from_parts(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![0.0; 3]).unwrap();
        let l2 = Layer::from_parts(3, 1, vec![1.0, -1.0, 2.0], vec![0.0]).unwrap();
        let net = Network::from_layers(vec![l0, l1, l2], OutputPolicy::Linear, InputLayer::Frozen)
            .unwrap();

        let zs = vec![vec![1.0, -1.0], vec![1.0, 0.0, 2.0], vec![4.0]];
        let deltas = net.backpropagate(vec![0.5], &zs).unwrap();

        assert_eq!(deltas.len(), 3);
        assert_eq!(deltas.get(2).unwrap(), &[0.5]);
        // W2ᵀ·[0.5] = [0.5, -0.5, 1.0], gated by [1, 0, 1].
        assert_eq!(deltas.get(1).unwrap(), &[0.5, 0.0, 1.0]);
        // W1ᵀ·[0.5, 0, 1] = [0.5 + 5, 1 + 6] = [5.5, 7], gated by [1, 0].
        assert_eq!(deltas.get(0).unwrap(), &[5.5, 0.0]);
    }

    #[test]
    fn backpropagate_rejects_bad_traces() {
        let net = Network::new_with_seed(&[2, 3, 1], 0).unwrap();

        let err = net
            .backpropagate(vec![0.1], &[vec![0.0; 2], vec![0.0; 3]])
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                what: "z trace",
                expected: 3,
                actual: 2
            }
        );

        let err = net
            .backpropagate(vec![0.1], &[vec![0.0; 2], vec![0.0; 2], vec![0.0; 1]])
            .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { what: "layer z", .. }));

        let err = net
            .backpropagate(vec![0.1, 0.2], &[vec![0.0; 2], vec![0.0; 3], vec![0.0; 1]])
            .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { what: "output error", .. }));
    }
}
