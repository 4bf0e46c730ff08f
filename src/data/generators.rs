//! Toy datasets: XOR, sign quadrants and a centred disc.
//!
//! Labels are ±1 so they match the range of `tanh`. The quadrant and circle
//! sets use the five quadratic features of [`features`] as input.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::data::sample::Sample;
use crate::error::NetError;

/// Upper bound of the sampled angle. Slightly short of a full turn.
const ANGLE_RANGE: f64 = 6.2831;
const CIRCLE_RADIUS: f64 = 0.5;

/// The four XOR points with targets -1 / +1.
pub fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![-1.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![-1.0]),
    ]
}

/// `[x, y, x², y², x·y]`.
pub fn features(x: f64, y: f64) -> Vec<f64> {
    vec![x, y, x * x, y * y, x * y]
}

/// +1 when `x` and `y` have strictly opposite signs, -1 otherwise.
pub fn quadrant_label(x: f64, y: f64) -> f64 {
    if (x > 0.0 && y < 0.0) || (x < 0.0 && y > 0.0) {
        1.0
    } else {
        -1.0
    }
}

/// +1 inside the disc of radius 0.5, -1 outside.
pub fn circle_label(r: f64) -> f64 {
    if r < CIRCLE_RADIUS {
        1.0
    } else {
        -1.0
    }
}

/// A point uniform on [-1, 1)², featurised and labelled by quadrant.
pub fn quadrant_sample<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    let x = rng.gen::<f64>() * 2.0 - 1.0;
    let y = rng.gen::<f64>() * 2.0 - 1.0;
    Sample::new(features(x, y), vec![quadrant_label(x, y)])
}

/// A point with uniform angle and uniform radius in the unit disc.
///
/// Sampling the radius uniformly (not its square) concentrates points near
/// the centre.
pub fn circle_sample<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    let theta = rng.gen::<f64>() * ANGLE_RANGE;
    let r = rng.gen::<f64>();
    let (x, y) = (r * theta.cos(), r * theta.sin());
    Sample::new(features(x, y), vec![circle_label(r)])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Xor,
    Quadrant,
    Circle,
}

impl DatasetKind {
    /// Default layer widths for a network trained on this dataset.
    pub fn layer_widths(&self) -> Vec<usize> {
        match self {
            DatasetKind::Xor => vec![2, 2, 1],
            DatasetKind::Quadrant | DatasetKind::Circle => vec![5, 2, 1],
        }
    }

    /// Maps a point of the plane to a network input.
    pub fn featurize(&self, x: f64, y: f64) -> Vec<f64> {
        match self {
            DatasetKind::Xor => vec![x, y],
            DatasetKind::Quadrant | DatasetKind::Circle => features(x, y),
        }
    }

    /// Draws one sample. XOR picks one of its four points.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        match self {
            DatasetKind::Xor => {
                let mut points = xor_samples();
                let idx = rng.gen_range(0..points.len());
                points.swap_remove(idx)
            }
            DatasetKind::Quadrant => quadrant_sample(rng),
            DatasetKind::Circle => circle_sample(rng),
        }
    }
}

impl FromStr for DatasetKind {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xor" => Ok(DatasetKind::Xor),
            "quad" => Ok(DatasetKind::Quadrant),
            "circ" => Ok(DatasetKind::Circle),
            _ => Err(NetError::UnknownDataset { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetKind::Xor => "xor",
            DatasetKind::Quadrant => "quad",
            DatasetKind::Circle => "circ",
        };
        write!(f, "{name}")
    }
}

/// A fixed set of `n` samples. For XOR the four points repeat in order.
pub fn generate<R: Rng + ?Sized>(kind: DatasetKind, n: usize, rng: &mut R) -> Vec<Sample> {
    let samples: Vec<Sample> = match kind {
        DatasetKind::Xor => xor_samples().into_iter().cycle().take(n).collect(),
        _ => (0..n).map(|_| kind.sample(rng)).collect(),
    };

    let positives = samples.iter().filter(|s| s.expected[0] > 0.0).count();
    debug!("generated {n} {kind} samples ({positives} positive)");
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn xor_targets() {
        let xs = xor_samples();
        assert_eq!(xs.len(), 4);
        for s in &xs {
            let parity = (s.input[0] != s.input[1]) as u8;
            assert_eq!(s.expected[0], if parity == 1 { 1.0 } else { -1.0 });
        }
    }

    #[test]
    fn quadrant_labels_follow_signs() {
        assert_eq!(quadrant_label(0.5, -0.5), 1.0);
        assert_eq!(quadrant_label(-0.5, 0.5), 1.0);
        assert_eq!(quadrant_label(0.5, 0.5), -1.0);
        assert_eq!(quadrant_label(-0.5, -0.5), -1.0);
        // Points on an axis are not in an opposite-sign quadrant.
        assert_eq!(quadrant_label(0.0, 0.5), -1.0);
    }

    #[test]
    fn quadrant_sample_is_featurised_and_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let s = quadrant_sample(&mut rng);
            let (x, y) = (s.input[0], s.input[1]);
            assert!((-1.0..1.0).contains(&x) && (-1.0..1.0).contains(&y));
            assert_eq!(s.input, features(x, y));
            assert_eq!(s.expected, vec![quadrant_label(x, y)]);
        }
    }

    #[test]
    fn circle_sample_labels_by_radius() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let s = circle_sample(&mut rng);
            let r = (s.input[2] + s.input[3]).sqrt();
            assert!(r < 1.0);
            if (r - CIRCLE_RADIUS).abs() > 1e-9 {
                assert_eq!(s.expected[0], circle_label(r));
            }
        }
    }

    #[test]
    fn dataset_names_round_trip() {
        for kind in [DatasetKind::Xor, DatasetKind::Quadrant, DatasetKind::Circle] {
            assert_eq!(kind.to_string().parse::<DatasetKind>().unwrap(), kind);
        }
        assert!(matches!(
            "spiral".parse::<DatasetKind>(),
            Err(NetError::UnknownDataset { .. })
        ));
    }

    #[test]
    fn generate_returns_n_samples_of_the_right_width() {
        let mut rng = StdRng::seed_from_u64(5);
        let quad = generate(DatasetKind::Quadrant, 50, &mut rng);
        assert_eq!(quad.len(), 50);
        assert!(quad.iter().all(|s| s.input.len() == 5));

        let xor = generate(DatasetKind::Xor, 6, &mut rng);
        assert_eq!(xor[4], xor_samples()[0]);
    }

    #[test]
    fn featurize_matches_layer_widths() {
        for kind in [DatasetKind::Xor, DatasetKind::Quadrant, DatasetKind::Circle] {
            assert_eq!(kind.featurize(0.3, -0.2).len(), kind.layer_widths()[0]);
        }
    }
}
