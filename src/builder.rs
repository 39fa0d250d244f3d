//! Network builder.
//!
//! `NetworkBuilder` makes every construction choice explicit: the layer sizes,
//! the initialization range, the output policy and whether the square input
//! layer trains its weights.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{InputLayer, Init, Network, OutputPolicy, Result};

/// Builder for a [`Network`].
///
/// ```rust
/// use ctorch::{Init, NetworkBuilder, OutputPolicy};
///
/// # fn main() -> ctorch::Result<()> {
/// let net = NetworkBuilder::new(&[6, 4, 2, 1])
///     .init(Init::Uniform { low: -0.5, high: 0.5 })
///     .output_policy(OutputPolicy::Sigmoid)
///     .build_with_seed(0)?;
/// assert_eq!(net.output_dim(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    sizes: Vec<usize>,
    init: Init,
    output_policy: OutputPolicy,
    input_layer: InputLayer,
}

impl NetworkBuilder {
    /// Start from per-layer node counts; `sizes[0]` is the input width.
    ///
    /// Sizes are validated by `build_*`.
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            init: Init::default(),
            output_policy: OutputPolicy::default(),
            input_layer: InputLayer::default(),
        }
    }

    pub fn init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn output_policy(mut self, policy: OutputPolicy) -> Self {
        self.output_policy = policy;
        self
    }

    pub fn input_layer(mut self, input_layer: InputLayer) -> Self {
        self.input_layer = input_layer;
        self
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build using the provided RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        Network::init_with_rng(
            &self.sizes,
            self.init,
            self.output_policy,
            self.input_layer,
            rng,
        )
    }
}
