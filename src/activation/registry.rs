use crate::activation::activation::{ActivationFunction, CustomActivation};
use crate::error::{NetError, Result};

/// Names accepted by [`ActivationFunction::from_name`].
pub const BUILTIN_ACTIVATIONS: &[&str] = &["sigmoid", "tanh"];

impl ActivationFunction {
    /// Looks a built-in activation up by its registry name.
    pub fn from_name(name: &str) -> Result<ActivationFunction> {
        match name {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "tanh" => Ok(ActivationFunction::Tanh),
            _ => Err(NetError::UnknownActivation { name: name.to_owned() }),
        }
    }
}

/// One entry of a per-layer activation list.
#[derive(Debug, Clone)]
pub enum LayerActivation {
    Named(String),
    Custom(CustomActivation),
}

impl LayerActivation {
    fn resolve(&self) -> Result<ActivationFunction> {
        match self {
            LayerActivation::Named(name) => ActivationFunction::from_name(name),
            LayerActivation::Custom(pair) => Ok(ActivationFunction::Custom(*pair)),
        }
    }
}

impl From<&str> for LayerActivation {
    fn from(name: &str) -> Self {
        LayerActivation::Named(name.to_owned())
    }
}

impl From<CustomActivation> for LayerActivation {
    fn from(pair: CustomActivation) -> Self {
        LayerActivation::Custom(pair)
    }
}

/// How activations are chosen when a network is built.
///
/// - `Uniform`: one name, used by every weight layer.
/// - `PerLayer`: one entry per weight layer, input side first.
#[derive(Debug, Clone)]
pub enum ActivationConfig {
    Uniform(String),
    PerLayer(Vec<LayerActivation>),
}

impl Default for ActivationConfig {
    fn default() -> Self {
        ActivationConfig::Uniform("tanh".to_owned())
    }
}

impl From<&str> for ActivationConfig {
    fn from(name: &str) -> Self {
        ActivationConfig::Uniform(name.to_owned())
    }
}

impl From<Vec<LayerActivation>> for ActivationConfig {
    fn from(entries: Vec<LayerActivation>) -> Self {
        ActivationConfig::PerLayer(entries)
    }
}

impl ActivationConfig {
    /// Resolves the configuration into exactly `layer_count` activations.
    pub fn resolve(&self, layer_count: usize) -> Result<Vec<ActivationFunction>> {
        match self {
            ActivationConfig::Uniform(name) => {
                let act = ActivationFunction::from_name(name)?;
                Ok(vec![act; layer_count])
            }
            ActivationConfig::PerLayer(entries) => {
                if entries.len() != layer_count {
                    return Err(NetError::ActivationCount {
                        got: entries.len(),
                        expected: layer_count,
                    });
                }
                entries.iter().map(LayerActivation::resolve).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_broadcasts_to_every_layer() {
        let acts = ActivationConfig::from("sigmoid").resolve(3).unwrap();
        assert_eq!(acts.len(), 3);
        assert!(acts.iter().all(|a| a.name() == Some("sigmoid")));
    }

    #[test]
    fn every_builtin_name_resolves() {
        for name in BUILTIN_ACTIVATIONS {
            let act = ActivationFunction::from_name(name).unwrap();
            assert_eq!(act.name(), Some(*name));
        }
    }

    #[test]
    fn per_layer_keeps_order_and_custom_pairs() {
        let relu = CustomActivation::new(|x| x.max(0.0), |x| if x > 0.0 { 1.0 } else { 0.0 });
        let config = ActivationConfig::PerLayer(vec!["sigmoid".into(), relu.into()]);
        let acts = config.resolve(2).unwrap();

        assert_eq!(acts[0].name(), Some("sigmoid"));
        assert!(matches!(acts[1], ActivationFunction::Custom(_)));
        assert_eq!(acts[1].function(-3.0), 0.0);
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = ActivationConfig::from("softplus").resolve(1).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, NetError::UnknownActivation { ref name } if name == "softplus"));

        let err = ActivationConfig::PerLayer(vec!["tanh".into(), "nope".into()])
            .resolve(2)
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn wrong_list_length_is_a_configuration_error() {
        let config = ActivationConfig::PerLayer(vec!["tanh".into(), "tanh".into(), "tanh".into()]);
        let err = config.resolve(2).unwrap_err();
        assert!(matches!(err, NetError::ActivationCount { got: 3, expected: 2 }));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(ActivationFunction::from_name("Tanh").is_err());
    }
}
