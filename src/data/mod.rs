pub mod generators;
pub mod grid;
pub mod sample;

pub use generators::{
    circle_label, circle_sample, features, generate, quadrant_label, quadrant_sample, xor_samples,
    DatasetKind,
};
pub use grid::{evaluate_grid, Grid};
pub use sample::Sample;
