//! Thread-safe access to one network.
//!
//! Every training step and inference takes the same lock, so parameter
//! updates never overlap with each other or with readers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Network, Prediction, Result, Sgd};

#[derive(Debug, Clone)]
pub struct SharedNetwork {
    inner: Arc<Mutex<Network>>,
}

impl SharedNetwork {
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Network>> {
        self.inner.lock().map_err(|_| Error::Poisoned)
    }

    pub fn train_step(&self, input: &[f64], target: &[f64], opt: &Sgd) -> Result<()> {
        self.lock()?.train_step(input, target, opt)
    }

    pub fn predict(&self, input: &[f64]) -> Result<Prediction> {
        self.lock()?.predict(input)
    }

    /// Clone of the current parameters.
    pub fn snapshot(&self) -> Result<Network> {
        Ok(self.lock()?.clone())
    }

    /// Take the network back if this is the last handle.
    pub fn into_inner(self) -> Result<Network> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().map_err(|_| Error::Poisoned),
            Err(inner) => {
                let network = inner.lock().map_err(|_| Error::Poisoned)?.clone();
                Ok(network)
            }
        }
    }
}
