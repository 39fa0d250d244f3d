use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Init, Layer, OutputPolicy, Result};

/// Training behavior of the square input layer (layer 0).
///
/// Layer 0 maps the input space onto itself, so its weight matrix is
/// `(sizes[0], sizes[0])`. The optimizer step only has an outer-product rule
/// for layers with a preceding activation; for layer 0 that role falls to the
/// raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputLayer {
    /// Layer 0 weights keep their initial values forever; only its bias trains.
    #[default]
    Frozen,
    /// Layer 0 weights are updated with `delta_0 ⊗ input`.
    Trained,
}

/// A fully connected ReLU network.
///
/// Owns every weight matrix and bias vector. Layer shapes are fixed at
/// construction and parameter values change only through [`crate::Sgd::step`].
/// Layers are reachable read-only:
///
/// ```compile_fail
/// use ctorch::{Layer, Network};
///
/// let mut net = Network::new_with_seed(&[2, 2, 1], 0).unwrap();
/// *net.layer_mut(0).unwrap() = Layer::from_parts(3, 3, vec![0.0; 9], vec![0.0; 3]).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    sizes: Vec<usize>,
    layers: Vec<Layer>,
    output_policy: OutputPolicy,
    input_layer: InputLayer,
}

impl Network {
    /// Build with the default init range, `OutputPolicy::Linear` and a frozen
    /// input layer, seeding a fresh `StdRng`.
    pub fn new_with_seed(sizes: &[usize], seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(sizes, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Self> {
        Self::init_with_rng(
            sizes,
            Init::default(),
            OutputPolicy::default(),
            InputLayer::default(),
            rng,
        )
    }

    pub(crate) fn init_with_rng<R: Rng + ?Sized>(
        sizes: &[usize],
        init: Init,
        output_policy: OutputPolicy,
        input_layer: InputLayer,
        rng: &mut R,
    ) -> Result<Self> {
        validate_sizes(sizes)?;
        init.validate()?;

        let mut layers = Vec::with_capacity(sizes.len());
        layers.push(Layer::new_with_rng(sizes[0], sizes[0], init, rng)?);
        for w in sizes.windows(2) {
            layers.push(Layer::new_with_rng(w[0], w[1], init, rng)?);
        }

        tracing::debug!(
            ?sizes,
            ?init,
            ?output_policy,
            ?input_layer,
            "initialized network"
        );

        Ok(Self {
            sizes: sizes.to_vec(),
            layers,
            output_policy,
            input_layer,
        })
    }

    /// Assemble a network from explicit layers.
    ///
    /// Layer 0 must be square; every later layer must take the previous
    /// layer's width as input.
    pub fn from_layers(
        layers: Vec<Layer>,
        output_policy: OutputPolicy,
        input_layer: InputLayer,
    ) -> Result<Self> {
        if layers.len() < 2 {
            return Err(Error::InvalidTopology(format!(
                "network needs at least 2 layers, got {}",
                layers.len()
            )));
        }
        if layers[0].in_dim() != layers[0].out_dim() {
            return Err(Error::InvalidTopology(format!(
                "layer 0 must be square, got ({}, {})",
                layers[0].out_dim(),
                layers[0].in_dim()
            )));
        }
        for i in 1..layers.len() {
            let prev_out = layers[i - 1].out_dim();
            if layers[i].in_dim() != prev_out {
                return Err(Error::InvalidTopology(format!(
                    "layer {i} in_dim {} does not match previous out_dim {prev_out}",
                    layers[i].in_dim()
                )));
            }
        }

        let sizes = layers.iter().map(Layer::out_dim).collect();
        Ok(Self {
            sizes,
            layers,
            output_policy,
            input_layer,
        })
    }

    /// Per-layer node counts; `sizes()[0]` is the input width.
    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.sizes[0]
    }

    #[inline]
    pub fn output_dim(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn output_policy(&self) -> OutputPolicy {
        self.output_policy
    }

    #[inline]
    pub fn input_layer(&self) -> InputLayer {
        self.input_layer
    }

    #[inline]
    pub fn layer(&self, idx: usize) -> Option<&Layer> {
        self.layers.get(idx)
    }

    #[inline]
    pub(crate) fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(Error::InvalidTopology(format!(
            "sizes must include input and output widths, got {sizes:?}"
        )));
    }
    if sizes.contains(&0) {
        return Err(Error::InvalidTopology(format!(
            "all layer sizes must be > 0, got {sizes:?}"
        )));
    }
    Ok(())
}
