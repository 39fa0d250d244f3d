//! Training examples.

use crate::error::check_len;
use crate::{Network, Result};

/// A supervised `(input, target)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    input: Vec<f64>,
    target: Vec<f64>,
}

impl Example {
    /// Widths are checked against a network by [`Example::check`].
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Self { input, target }
    }

    #[inline]
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.target
    }

    /// Fails with `DimensionMismatch` unless the input matches the network's
    /// input width and the target its output width.
    pub fn check(&self, network: &Network) -> Result<()> {
        check_len("input", network.input_dim(), self.input.len())?;
        check_len("target", network.output_dim(), self.target.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn example_validates_against_network() {
        let net = Network::new_with_seed(&[3, 2, 1], 0).unwrap();

        let ok = Example::new(vec![0.0, 1.0, 2.0], vec![1.0]);
        assert!(ok.check(&net).is_ok());

        let wide_target = Example::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.0]);
        assert!(matches!(
            wide_target.check(&net),
            Err(Error::DimensionMismatch { what: "target", .. })
        ));

        let short_input = Example::new(vec![0.0, 1.0], vec![1.0]);
        assert!(matches!(
            short_input.check(&net),
            Err(Error::DimensionMismatch { what: "input", .. })
        ));

        // Empty vectors never match a network, whose widths are all > 0.
        let empty_input = Example::new(vec![], vec![1.0]);
        assert_eq!(
            empty_input.check(&net),
            Err(Error::DimensionMismatch {
                what: "input",
                expected: 3,
                actual: 0
            })
        );
        let empty_target = Example::new(vec![0.0, 1.0, 2.0], vec![]);
        assert_eq!(
            empty_target.check(&net),
            Err(Error::DimensionMismatch {
                what: "target",
                expected: 1,
                actual: 0
            })
        );
    }
}
