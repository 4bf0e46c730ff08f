use rand::Rng;

use crate::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::math::{matrix::Matrix, vector};

/// One fully connected weight layer: `z = x · W + b`, `a = f(z)`.
#[derive(Debug, Clone)]
pub struct Layer {
    weights: Matrix,
    biases: Vec<f64>,
    activation: ActivationFunction,
}

/// Unscaled update direction for one layer: `input ⊗ δ` and `δ`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGradient {
    pub weights: Matrix,
    pub biases: Vec<f64>,
}

impl Layer {
    /// Weights and biases drawn uniformly from [-1, 1).
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let weights = Matrix::random(input_size, size, rng);
        let biases = (0..size).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();

        Layer {
            weights,
            biases,
            activation,
        }
    }

    pub fn from_parameters(
        weights: Matrix,
        biases: Vec<f64>,
        activation: ActivationFunction,
    ) -> Result<Layer> {
        vector::check_len("bias vector", &biases, weights.cols())?;
        Ok(Layer {
            weights,
            biases,
            activation,
        })
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    pub fn activation(&self) -> &ActivationFunction {
        &self.activation
    }

    /// Returns `(z, a)`: the pre-activation and the activated output.
    pub fn forward(&self, input: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let z = vector::add(&self.weights.vec_mul(input)?, &self.biases)?;
        let a = self.activation.apply_vec(&z);
        Ok((z, a))
    }

    /// Adds `learning_rate * gradient` to the weights and biases.
    ///
    /// Both shapes are checked before either container is touched.
    pub fn apply_gradients(&mut self, gradient: &LayerGradient, learning_rate: f64) -> Result<()> {
        if gradient.weights.shape() != self.weights.shape() {
            return Err(NetError::ShapeMismatch {
                what: "weight gradient",
                got: gradient.weights.rows() * gradient.weights.cols(),
                expected: self.weights.rows() * self.weights.cols(),
            });
        }
        vector::check_len("bias gradient", &gradient.biases, self.biases.len())?;

        self.weights.scaled_add(learning_rate, &gradient.weights)?;
        vector::scaled_add(&mut self.biases, learning_rate, &gradient.biases)
    }
}
