use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::{Error, Result, matmul};

/// Parameter initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Every weight and bias is an independent draw from `U(low, high)`.
    Uniform { low: f64, high: f64 },
}

impl Init {
    pub const DEFAULT_LOW: f64 = -1.0;
    pub const DEFAULT_HIGH: f64 = 1.0;

    /// The strictly positive `(0.1, 10.0)` interval.
    ///
    /// Strictly positive weights tend to saturate deep ReLU stacks; prefer the
    /// default unless reproducing that setup.
    pub fn positive() -> Self {
        Init::Uniform {
            low: 0.1,
            high: 10.0,
        }
    }

    pub fn validate(self) -> Result<()> {
        match self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) {
                    return Err(Error::InvalidConfig(format!(
                        "uniform init bounds must be finite, got ({low}, {high})"
                    )));
                }
                if low >= high {
                    return Err(Error::InvalidConfig(format!(
                        "uniform init requires low < high, got ({low}, {high})"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// A dense layer: `z = W x + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    in_dim: usize,
    out_dim: usize,
    /// Row-major matrix with shape (out_dim, in_dim).
    weights: Vec<f64>,
    biases: Vec<f64>,
}

impl Layer {
    pub fn new_with_rng<R: Rng + ?Sized>(
        in_dim: usize,
        out_dim: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        if in_dim == 0 || out_dim == 0 {
            return Err(Error::InvalidTopology(format!(
                "layer dims must be > 0, got in_dim={in_dim} out_dim={out_dim}"
            )));
        }
        init.validate()?;

        let Init::Uniform { low, high } = init;
        let dist = Uniform::new(low, high)
            .map_err(|e| Error::InvalidConfig(format!("uniform init ({low}, {high}): {e}")))?;

        let weights = (0..in_dim * out_dim).map(|_| dist.sample(rng)).collect();
        let biases = (0..out_dim).map(|_| dist.sample(rng)).collect();

        Ok(Self {
            in_dim,
            out_dim,
            weights,
            biases,
        })
    }

    /// Build a layer from explicit parameters.
    ///
    /// `weights` is row-major with shape `(out_dim, in_dim)`.
    pub fn from_parts(
        in_dim: usize,
        out_dim: usize,
        weights: Vec<f64>,
        biases: Vec<f64>,
    ) -> Result<Self> {
        if in_dim == 0 || out_dim == 0 {
            return Err(Error::InvalidTopology(format!(
                "layer dims must be > 0, got in_dim={in_dim} out_dim={out_dim}"
            )));
        }
        if weights.len() != in_dim * out_dim {
            return Err(Error::InvalidTopology(format!(
                "weights length {} does not match out_dim * in_dim ({out_dim} * {in_dim})",
                weights.len()
            )));
        }
        if biases.len() != out_dim {
            return Err(Error::InvalidTopology(format!(
                "biases length {} does not match out_dim {out_dim}",
                biases.len()
            )));
        }

        Ok(Self {
            in_dim,
            out_dim,
            weights,
            biases,
        })
    }

    #[inline]
    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    #[inline]
    pub fn out_dim(&self) -> usize {
        self.out_dim
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    #[inline]
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    #[inline]
    pub fn biases_mut(&mut self) -> &mut [f64] {
        &mut self.biases
    }

    /// Pre-activation for a single sample: `W * inputs + b`.
    ///
    /// Shape contract: `inputs.len() == self.in_dim`.
    #[inline]
    pub(crate) fn affine(&self, inputs: &[f64]) -> Vec<f64> {
        matmul::affine(&self.weights, self.out_dim, self.in_dim, inputs, &self.biases)
    }

    /// `Wᵀ * delta`, the error handed to the previous layer before the
    /// derivative gate.
    ///
    /// Shape contract: `delta.len() == self.out_dim`.
    #[inline]
    pub(crate) fn transpose_mul(&self, delta: &[f64]) -> Vec<f64> {
        matmul::transpose_mul(&self.weights, self.out_dim, self.in_dim, delta)
    }

    /// `b -= lr * delta`.
    #[inline]
    pub(crate) fn step_biases(&mut self, lr: f64, delta: &[f64]) {
        matmul::sub_scaled(&mut self.biases, lr, delta);
    }

    /// `W -= lr * (delta ⊗ inputs)`.
    #[inline]
    pub(crate) fn step_weights(&mut self, lr: f64, delta: &[f64], inputs: &[f64]) {
        matmul::sub_scaled_outer(&mut self.weights, self.in_dim, lr, delta, inputs);
    }
}
