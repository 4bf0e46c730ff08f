use crate::{error::Result, network::network::Network};

/// Learning rate used when none is given.
pub const DEFAULT_LEARNING_RATE: f64 = 0.03;

/// Plain online stochastic gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `network` from a single sample.
    pub fn step(&self, network: &mut Network, input: &[f64], expected: &[f64]) -> Result<()> {
        network.train(input, expected, self.learning_rate)
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(DEFAULT_LEARNING_RATE)
    }
}
