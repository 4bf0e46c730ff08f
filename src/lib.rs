pub mod activation;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{ActivationConfig, ActivationFunction, CustomActivation, LayerActivation};
pub use data::{DatasetKind, Grid, Sample};
pub use error::{NetError, Result};
pub use layers::dense::Layer;
pub use math::matrix::Matrix;
pub use network::{ActivationSpec, Network, NetworkSpec, Statistics};
pub use optim::sgd::{Sgd, DEFAULT_LEARNING_RATE};
pub use train::{train_online, TrainConfig};
