use crate::backward::output_error;
use crate::error::check_len;
use crate::{Example, Network, Result, Sgd, loss};

impl Network {
    /// One gradient-descent step on a single example.
    ///
    /// Runs forward, output error, backpropagation and the SGD update in that
    /// order. Input and target widths are checked before anything is mutated.
    pub fn train_step(&mut self, input: &[f64], target: &[f64], opt: &Sgd) -> Result<()> {
        check_len("target", self.output_dim(), target.len())?;

        let trace = self.forward(input)?;
        let loss = loss::squared_error(trace.output(), target)?;
        if !loss.is_finite() {
            tracing::warn!(loss, lr = opt.lr(), "non-finite loss in training step");
        } else {
            tracing::trace!(loss, lr = opt.lr(), "training step");
        }

        let delta_l = output_error(target, trace.output(), trace.output_z())?;
        let (zs, activations) = trace.into_parts();
        let deltas = self.backpropagate(delta_l, &zs)?;
        opt.step(self, &deltas, &activations, input)
    }

    /// [`Network::train_step`] on a validated example pair.
    pub fn train_example(&mut self, example: &Example, opt: &Sgd) -> Result<()> {
        example.check(self)?;
        self.train_step(example.input(), example.target(), opt)
    }
}
