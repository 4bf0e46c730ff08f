use crate::error::Result;
use crate::math::vector;

/// Mean squared error, used to report training progress.
///
/// The update rule itself works on the raw `expected - output` difference.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        let diff = vector::sub(predicted, expected)?;
        let n = diff.len() as f64;
        Ok(diff.iter().map(|d| d * d).sum::<f64>() / n)
    }
}
