use rand::Rng;

use crate::activation::{ActivationConfig, ActivationFunction};
use crate::data::Sample;
use crate::error::{NetError, Result};
use crate::layers::dense::{Layer, LayerGradient};
use crate::math::{matrix::Matrix, vector};

/// A feed-forward network of dense layers trained one sample at a time.
///
/// Topology and activations are fixed at construction. Only weights and
/// biases change, and only through [`Network::train`]. `Clone` produces a
/// fully independent copy.
#[derive(Debug, Clone)]
pub struct Network {
    layer_widths: Vec<usize>,
    layers: Vec<Layer>,
}

/// Squared-error summary over a sample set, one entry per output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub sample_count: usize,
    pub error_sum: Vec<f64>,
    pub avg_error: Vec<f64>,
}

fn validate_widths(layer_widths: &[usize]) -> Result<()> {
    if layer_widths.len() < 2 {
        return Err(NetError::InvalidTopology {
            reason: format!("need at least 2 layers, got {}", layer_widths.len()),
        });
    }
    if let Some(pos) = layer_widths.iter().position(|&w| w == 0) {
        return Err(NetError::InvalidTopology {
            reason: format!("layer {pos} has zero width"),
        });
    }
    Ok(())
}

impl Network {
    /// Builds a randomly initialised network using the thread-local RNG.
    pub fn new(layer_widths: &[usize], activation: impl Into<ActivationConfig>) -> Result<Network> {
        Network::with_rng(layer_widths, activation, &mut rand::thread_rng())
    }

    /// Builds a network whose weights and biases are drawn uniformly from
    /// [-1, 1) with `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_widths: &[usize],
        activation: impl Into<ActivationConfig>,
        rng: &mut R,
    ) -> Result<Network> {
        validate_widths(layer_widths)?;
        let activations = activation.into().resolve(layer_widths.len() - 1)?;

        let layers = layer_widths
            .windows(2)
            .zip(activations)
            .map(|(pair, act)| Layer::new(pair[0], pair[1], act, rng))
            .collect();

        Ok(Network {
            layer_widths: layer_widths.to_vec(),
            layers,
        })
    }

    /// Builds a network from explicit parameters. Every shape is checked
    /// against `layer_widths`.
    pub fn from_parameters(
        layer_widths: &[usize],
        activation: impl Into<ActivationConfig>,
        weights: Vec<Matrix>,
        biases: Vec<Vec<f64>>,
    ) -> Result<Network> {
        validate_widths(layer_widths)?;
        let count = layer_widths.len() - 1;
        let activations = activation.into().resolve(count)?;

        if weights.len() != count || biases.len() != count {
            return Err(NetError::ShapeMismatch {
                what: "number of weight layers",
                got: if weights.len() != count { weights.len() } else { biases.len() },
                expected: count,
            });
        }

        let mut layers = Vec::with_capacity(count);
        for (i, ((w, b), act)) in weights.into_iter().zip(biases).zip(activations).enumerate() {
            if w.rows() != layer_widths[i] {
                return Err(NetError::ShapeMismatch {
                    what: "weight matrix rows",
                    got: w.rows(),
                    expected: layer_widths[i],
                });
            }
            if w.cols() != layer_widths[i + 1] {
                return Err(NetError::ShapeMismatch {
                    what: "weight matrix columns",
                    got: w.cols(),
                    expected: layer_widths[i + 1],
                });
            }
            layers.push(Layer::from_parameters(w, b, act)?);
        }

        Ok(Network {
            layer_widths: layer_widths.to_vec(),
            layers,
        })
    }

    pub fn layer_widths(&self) -> &[usize] {
        &self.layer_widths
    }

    /// Number of weight layers, `layer_widths().len() - 1`.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn input_size(&self) -> usize {
        self.layer_widths[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_widths[self.layer_widths.len() - 1]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn weights(&self, layer: usize) -> &Matrix {
        self.layers[layer].weights()
    }

    pub fn biases(&self, layer: usize) -> &[f64] {
        self.layers[layer].biases()
    }

    pub fn activation(&self, layer: usize) -> &ActivationFunction {
        self.layers[layer].activation()
    }

    /// Forward pass. Does not touch any state.
    pub fn apply(&self, input: &[f64]) -> Result<Vec<f64>> {
        vector::check_len("input", input, self.input_size())?;

        let mut current = input.to_vec();
        for layer in &self.layers {
            let (_, a) = layer.forward(&current)?;
            current = a;
        }
        Ok(current)
    }

    /// Backpropagation for one sample, without updating anything.
    ///
    /// Returns one unscaled gradient per weight layer, input side first.
    /// The error sent to layer `i - 1` is computed from the current
    /// `weights[i]`, and every derivative is taken at the stored
    /// pre-activation.
    pub fn gradients(&self, input: &[f64], expected: &[f64]) -> Result<Vec<LayerGradient>> {
        vector::check_len("input", input, self.input_size())?;
        vector::check_len("expected output", expected, self.output_size())?;

        let n = self.layers.len();
        // activated[i] is the input of layer i; activated[n] is the output.
        let mut activated = Vec::with_capacity(n + 1);
        let mut preacts = Vec::with_capacity(n);
        activated.push(input.to_vec());
        for (i, layer) in self.layers.iter().enumerate() {
            let (z, a) = layer.forward(&activated[i])?;
            preacts.push(z);
            activated.push(a);
        }

        let last = &self.layers[n - 1];
        let mut error = vector::hadamard(
            &vector::sub(expected, &activated[n])?,
            &last.activation().derivative_vec(&preacts[n - 1]),
        )?;

        let mut grads = Vec::with_capacity(n);
        for i in (0..n).rev() {
            let weights = Matrix::outer(&activated[i], &error);
            let biases = error.clone();

            if i > 0 {
                let back = self.layers[i].weights().mul_vec(&error)?;
                let slope = self.layers[i - 1].activation().derivative_vec(&preacts[i - 1]);
                error = vector::hadamard(&back, &slope)?;
            }

            grads.push(LayerGradient { weights, biases });
        }
        grads.reverse();

        Ok(grads)
    }

    /// One online gradient step: `w += lr · (a ⊗ δ)`, `b += lr · δ`.
    ///
    /// All gradients are computed before the first layer is updated, so an
    /// error leaves the network exactly as it was.
    pub fn train(&mut self, input: &[f64], expected: &[f64], learning_rate: f64) -> Result<()> {
        let grads = self.gradients(input, expected)?;
        for (layer, grad) in self.layers.iter_mut().zip(&grads) {
            layer.apply_gradients(grad, learning_rate)?;
        }
        Ok(())
    }

    /// Per-output squared error of `apply` over `samples`.
    pub fn statistics(&self, samples: &[Sample]) -> Result<Statistics> {
        let mut error_sum = vec![0.0; self.output_size()];
        for sample in samples {
            let output = self.apply(&sample.input)?;
            let diff = vector::sub(&output, &sample.expected)?;
            for (acc, d) in error_sum.iter_mut().zip(diff) {
                *acc += d * d;
            }
        }

        let avg_error = if samples.is_empty() {
            vec![0.0; error_sum.len()]
        } else {
            vector::scale(&error_sum, 1.0 / samples.len() as f64)
        };

        Ok(Statistics {
            sample_count: samples.len(),
            error_sum,
            avg_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::{CustomActivation, LayerActivation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(widths: &[usize]) -> Network {
        Network::with_rng(widths, "tanh", &mut StdRng::seed_from_u64(42)).unwrap()
    }

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data).unwrap()
    }

    #[test]
    fn shapes_follow_layer_widths() {
        let net = seeded(&[5, 3, 2, 1]);
        assert_eq!(net.layer_count(), 3);
        for i in 0..3 {
            assert_eq!(net.weights(i).shape(), (net.layer_widths()[i], net.layer_widths()[i + 1]));
            assert_eq!(net.biases(i).len(), net.layer_widths()[i + 1]);
        }
    }

    #[test]
    fn same_seed_same_network() {
        let a = seeded(&[2, 2, 1]);
        let b = seeded(&[2, 2, 1]);
        for i in 0..a.layer_count() {
            assert_eq!(a.weights(i), b.weights(i));
            assert_eq!(a.biases(i), b.biases(i));
        }
    }

    #[test]
    fn rejects_bad_topology() {
        let err = Network::new(&[3], "tanh").unwrap_err();
        assert!(matches!(err, NetError::InvalidTopology { .. }));
        let err = Network::new(&[3, 0, 1], "tanh").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn rejects_bad_activation_config() {
        assert!(Network::new(&[2, 2, 1], "relu").unwrap_err().is_configuration());

        let three = ActivationConfig::PerLayer(vec!["tanh".into(); 3]);
        let err = Network::new(&[2, 2, 1], three).unwrap_err();
        assert!(matches!(err, NetError::ActivationCount { got: 3, expected: 2 }));
    }

    #[test]
    fn per_layer_activations_are_bound_in_order() {
        let linear = CustomActivation::new(|x| x, |_| 1.0);
        let config = vec![LayerActivation::from("sigmoid"), LayerActivation::Custom(linear)];
        let net = Network::new(&[2, 3, 1], config).unwrap();
        assert_eq!(net.activation(0).name(), Some("sigmoid"));
        assert!(matches!(net.activation(1), ActivationFunction::Custom(_)));
    }

    #[test]
    fn apply_computes_row_vector_product() {
        // Linear output layer makes the result exact: [1 2] · [[1], [-1]] + 0.5
        let linear = CustomActivation::new(|x| x, |_| 1.0);
        let net = Network::from_parameters(
            &[2, 1],
            vec![LayerActivation::Custom(linear)],
            vec![m(vec![vec![1.0], vec![-1.0]])],
            vec![vec![0.5]],
        )
        .unwrap();
        assert_eq!(net.apply(&[1.0, 2.0]).unwrap(), vec![-0.5]);
    }

    #[test]
    fn apply_rejects_wrong_input_length() {
        let net = seeded(&[2, 2, 1]);
        let err = net.apply(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, NetError::ShapeMismatch { what: "input", got: 3, expected: 2 }));
    }

    #[test]
    fn from_parameters_checks_shapes() {
        let err = Network::from_parameters(
            &[2, 1],
            "tanh",
            vec![m(vec![vec![1.0, 1.0], vec![1.0, 1.0]])],
            vec![vec![0.0]],
        )
        .unwrap_err();
        assert!(matches!(err, NetError::ShapeMismatch { what: "weight matrix columns", .. }));

        let err = Network::from_parameters(&[2, 1], "tanh", vec![], vec![]).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn train_with_bad_shapes_does_not_mutate() {
        let mut net = seeded(&[2, 2, 1]);
        let before = net.clone();

        assert!(net.train(&[1.0], &[1.0], 0.1).unwrap_err().is_shape_mismatch());
        assert!(net.train(&[1.0, 0.0], &[1.0, 1.0], 0.1).unwrap_err().is_shape_mismatch());

        for i in 0..net.layer_count() {
            assert_eq!(net.weights(i), before.weights(i));
            assert_eq!(net.biases(i), before.biases(i));
        }
    }

    #[test]
    fn train_keeps_shapes() {
        let mut net = seeded(&[3, 4, 2]);
        for step in 0..50 {
            let x = step as f64 / 50.0;
            net.train(&[x, -x, 1.0], &[0.5, -0.5], 0.05).unwrap();
        }
        assert_eq!(net.weights(0).shape(), (3, 4));
        assert_eq!(net.weights(1).shape(), (4, 2));
        assert_eq!(net.biases(0).len(), 4);
        assert_eq!(net.biases(1).len(), 2);
    }

    #[test]
    fn hidden_error_uses_pre_update_weights() {
        // Two 1-unit layers with linear activations, so every quantity is a scalar.
        let linear = CustomActivation::new(|x| x, |_| 1.0);
        let config = vec![LayerActivation::Custom(linear), LayerActivation::Custom(linear)];
        let (w0, b0, w1, b1) = (0.5, 0.1, 2.0, -0.3);
        let mut net = Network::from_parameters(
            &[1, 1, 1],
            config,
            vec![m(vec![vec![w0]]), m(vec![vec![w1]])],
            vec![vec![b0], vec![b1]],
        )
        .unwrap();

        let (x, y, lr) = (1.0, 3.0, 0.1);
        let h = w0 * x + b0;
        let out = w1 * h + b1;
        let delta_out = y - out;
        // Hidden delta is computed from w1 before w1 is updated.
        let delta_hidden = w1 * delta_out;

        net.train(&[x], &[y], lr).unwrap();

        assert!((net.weights(1).get(0, 0) - (w1 + lr * h * delta_out)).abs() < 1e-12);
        assert!((net.biases(1)[0] - (b1 + lr * delta_out)).abs() < 1e-12);
        assert!((net.weights(0).get(0, 0) - (w0 + lr * x * delta_hidden)).abs() < 1e-12);
        assert!((net.biases(0)[0] - (b0 + lr * delta_hidden)).abs() < 1e-12);
    }

    #[test]
    fn gradients_match_finite_differences() {
        // train() ascends -L with L = ½‖y − f(x)‖², so each gradient is -∂L/∂w.
        let net = Network::with_rng(&[3, 4, 2], "sigmoid", &mut StdRng::seed_from_u64(9)).unwrap();
        let (x, y) = (vec![0.3, -0.8, 0.5], vec![0.9, 0.1]);
        let grads = net.gradients(&x, &y).unwrap();

        let loss = |n: &Network| -> f64 {
            let out = n.apply(&x).unwrap();
            0.5 * out.iter().zip(&y).map(|(o, t)| (t - o).powi(2)).sum::<f64>()
        };
        let perturbed = |layer: usize, r: usize, c: usize, h: f64| -> Network {
            let mut weights: Vec<Matrix> = (0..net.layer_count()).map(|i| net.weights(i).clone()).collect();
            let biases: Vec<Vec<f64>> = (0..net.layer_count()).map(|i| net.biases(i).to_vec()).collect();
            let v = weights[layer].get(r, c);
            weights[layer].set(r, c, v + h);
            Network::from_parameters(net.layer_widths(), "sigmoid", weights, biases).unwrap()
        };

        let h = 1e-6;
        for layer in 0..net.layer_count() {
            let (rows, cols) = net.weights(layer).shape();
            for r in 0..rows {
                for c in 0..cols {
                    let numeric = -(loss(&perturbed(layer, r, c, h)) - loss(&perturbed(layer, r, c, -h))) / (2.0 * h);
                    let analytic = grads[layer].weights.get(r, c);
                    assert!((numeric - analytic).abs() < 1e-7, "layer {layer} ({r}, {c}): {numeric} vs {analytic}");
                }
            }
        }
    }

    #[test]
    fn statistics_sum_squared_error_per_output() {
        let linear = CustomActivation::new(|x| x, |_| 1.0);
        let net = Network::from_parameters(
            &[1, 2],
            vec![LayerActivation::Custom(linear)],
            vec![m(vec![vec![1.0, 2.0]])],
            vec![vec![0.0, 0.0]],
        )
        .unwrap();
        let samples = vec![
            Sample::new(vec![1.0], vec![0.0, 2.0]),
            Sample::new(vec![2.0], vec![1.0, 1.0]),
        ];

        let stats = net.statistics(&samples).unwrap();
        assert_eq!(stats.sample_count, 2);
        // outputs [1 2] and [2 4]: errors [1 0] and [1 9]
        assert_eq!(stats.error_sum, vec![2.0, 9.0]);
        assert_eq!(stats.avg_error, vec![1.0, 4.5]);

        let empty = net.statistics(&[]).unwrap();
        assert_eq!(empty.avg_error, vec![0.0, 0.0]);
    }
}
