pub mod network;
pub mod spec;

pub use network::{Network, Statistics};
pub use spec::{ActivationSpec, NetworkSpec};
