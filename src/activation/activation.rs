/// A caller-supplied activation: an element-wise function and its derivative.
///
/// Both are evaluated at the pre-activation value `z`, never at the
/// activated output.
#[derive(Debug, Clone, Copy)]
pub struct CustomActivation {
    pub function: fn(f64) -> f64,
    pub derivative: fn(f64) -> f64,
}

impl CustomActivation {
    pub fn new(function: fn(f64) -> f64, derivative: fn(f64) -> f64) -> Self {
        CustomActivation { function, derivative }
    }
}

/// A resolved per-layer activation. Bound once when the network is built.
#[derive(Debug, Clone, Copy)]
pub enum ActivationFunction {
    /// Logistic function, range (0, 1).
    Sigmoid,
    /// Hyperbolic tangent, range (-1, 1).
    Tanh,
    Custom(CustomActivation),
}

impl ActivationFunction {
    /// Registry name of a built-in activation; `None` for custom pairs.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            ActivationFunction::Sigmoid => Some("sigmoid"),
            ActivationFunction::Tanh => Some("tanh"),
            ActivationFunction::Custom(_) => None,
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            // Closed form of tanh, saturates cleanly to -1 when exp overflows.
            ActivationFunction::Tanh => 2.0 / (1.0 + (-2.0 * x).exp()) - 1.0,
            ActivationFunction::Custom(c) => (c.function)(x),
        }
    }

    /// Element-wise derivative, evaluated at the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let s = self.function(x);
                s * (1.0 - s)
            }
            ActivationFunction::Tanh => {
                let t = self.function(x);
                1.0 - t * t
            }
            ActivationFunction::Custom(c) => (c.derivative)(x),
        }
    }

    pub fn apply_vec(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.function(x)).collect()
    }

    pub fn derivative_vec(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.derivative(x)).collect()
    }
}
