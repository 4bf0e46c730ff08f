//! Element-wise helpers over `f64` slices.

use crate::error::{NetError, Result};

/// Fails with `ShapeMismatch` unless `v.len() == expected`.
pub fn check_len(what: &'static str, v: &[f64], expected: usize) -> Result<()> {
    if v.len() != expected {
        return Err(NetError::ShapeMismatch {
            what,
            got: v.len(),
            expected,
        });
    }
    Ok(())
}

/// Element-wise (Hadamard) product.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("hadamard product", b, a.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("vector addition", b, a.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("vector subtraction", b, a.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

pub fn scale(v: &[f64], alpha: f64) -> Vec<f64> {
    v.iter().map(|x| alpha * x).collect()
}

/// `a += alpha * b`, in place.
pub fn scaled_add(a: &mut [f64], alpha: f64, b: &[f64]) -> Result<()> {
    check_len("vector addition", b, a.len())?;
    for (x, &y) in a.iter_mut().zip(b) {
        *x += alpha * y;
    }
    Ok(())
}
