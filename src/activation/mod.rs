pub mod activation;
pub mod registry;

pub use activation::{ActivationFunction, CustomActivation};
pub use registry::{ActivationConfig, LayerActivation, BUILTIN_ACTIVATIONS};
