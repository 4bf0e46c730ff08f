use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::{ActivationConfig, LayerActivation};
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::sgd::DEFAULT_LEARNING_RATE;

/// Activation names as they appear in a JSON spec: either one name for every
/// layer or a list with one name per weight layer.
///
/// Custom function pairs cannot be written to a file; build them with
/// [`ActivationConfig::PerLayer`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivationSpec {
    Uniform(String),
    PerLayer(Vec<String>),
}

impl Default for ActivationSpec {
    fn default() -> Self {
        ActivationSpec::Uniform("tanh".to_owned())
    }
}

impl From<&ActivationSpec> for ActivationConfig {
    fn from(spec: &ActivationSpec) -> Self {
        match spec {
            ActivationSpec::Uniform(name) => ActivationConfig::Uniform(name.clone()),
            ActivationSpec::PerLayer(names) => ActivationConfig::PerLayer(
                names.iter().map(|n| LayerActivation::Named(n.clone())).collect(),
            ),
        }
    }
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// A serialisable network architecture plus its learning rate.
///
/// Only the architecture is stored. Weights are drawn fresh by [`NetworkSpec::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Units per layer, input to output.
    pub layer_widths: Vec<usize>,
    #[serde(default)]
    pub activation: ActivationSpec,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

impl NetworkSpec {
    pub fn new(layer_widths: Vec<usize>, activation: ActivationSpec) -> NetworkSpec {
        NetworkSpec {
            layer_widths,
            activation,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Resolves the activations and draws a fresh network with `rng`.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::with_rng(&self.layer_widths, &self.activation, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
