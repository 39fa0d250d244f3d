//! A minimal ReLU multilayer perceptron.
//!
//! `ctorch` evaluates and trains a dense feed-forward network one example at a
//! time, with backpropagation written out by hand over flat row-major buffers.
//!
//! # Pipeline
//!
//! A training step is a strict linear pipeline:
//!
//! 1. [`Network::forward`] produces a [`Trace`] of per-layer pre-activations
//!    `z` and ReLU activations `a`.
//! 2. [`backward::output_error`] computes `(a_L - t) ⊙ relu'(z_L)`.
//! 3. [`Network::backpropagate`] pushes that error back through the transposed
//!    weights, yielding one delta per layer ([`Deltas`]).
//! 4. [`Sgd::step`] updates every bias and weight matrix in place.
//!
//! [`Network::train_step`] runs all four.
//!
//! # Topology
//!
//! Layer sizes `[n0, n1, ..., nL]` produce one dense layer per entry. Layer 0
//! maps the input space onto itself with a square `(n0, n0)` matrix; layer
//! `i >= 1` has shape `(n_i, n_{i-1})`. By default layer 0's weights are never
//! trained (see [`InputLayer`]).
//!
//! # Errors
//!
//! Every public operation validates shapes and returns [`Result`]. Nothing is
//! truncated or padded; a failed call leaves the network unchanged.
//!
//! # Quick start
//!
//! ```rust
//! use ctorch::{NetworkBuilder, OutputPolicy, Sgd};
//!
//! # fn main() -> ctorch::Result<()> {
//! let mut net = NetworkBuilder::new(&[2, 4, 1])
//!     .output_policy(OutputPolicy::Sigmoid)
//!     .build_with_seed(0)?;
//!
//! let sgd = Sgd::new(0.01)?;
//! net.train_step(&[1.0, -1.0], &[1.0], &sgd)?;
//!
//! let p = net.predict(&[1.0, -1.0])?;
//! let confidence = p.confidence_scalar().unwrap_or_default();
//! assert!((0.0..=1.0).contains(&confidence));
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` at construction, `trace` per
//! training step) and never installs a subscriber.

pub mod activation;
pub mod backward;
pub mod builder;
pub mod error;
pub mod example;
pub mod forward;
pub mod layer;
pub mod loss;
pub(crate) mod matmul;
pub mod network;
pub mod optim;
pub mod shared;
pub mod train;

pub use activation::OutputPolicy;
pub use backward::{Deltas, output_error};
pub use builder::NetworkBuilder;
pub use error::{Error, Result};
pub use example::Example;
pub use forward::{Prediction, Trace};
pub use layer::{Init, Layer};
pub use network::{InputLayer, Network};
pub use optim::Sgd;
pub use shared::SharedNetwork;
