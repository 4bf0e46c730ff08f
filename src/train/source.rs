use rand::{Rng, RngCore};

use crate::data::{DatasetKind, Sample};
use crate::error::{NetError, Result};

/// Where the training loop gets its next sample from.
pub trait SampleSource {
    fn next_sample(&mut self, rng: &mut dyn RngCore) -> Sample;
}

/// Uniform random pick, with replacement, from a fixed set.
#[derive(Debug, Clone)]
pub struct RandomChoice {
    samples: Vec<Sample>,
}

impl RandomChoice {
    pub fn new(samples: Vec<Sample>) -> Result<RandomChoice> {
        if samples.is_empty() {
            return Err(NetError::EmptyDataset);
        }
        Ok(RandomChoice { samples })
    }
}

impl SampleSource for RandomChoice {
    fn next_sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let idx = rng.gen_range(0..self.samples.len());
        self.samples[idx].clone()
    }
}

/// Walks a fixed set in order and wraps around. Ignores the RNG.
#[derive(Debug, Clone)]
pub struct Cycle {
    samples: Vec<Sample>,
    pos: usize,
}

impl Cycle {
    pub fn new(samples: Vec<Sample>) -> Result<Cycle> {
        if samples.is_empty() {
            return Err(NetError::EmptyDataset);
        }
        Ok(Cycle { samples, pos: 0 })
    }
}

impl SampleSource for Cycle {
    fn next_sample(&mut self, _rng: &mut dyn RngCore) -> Sample {
        let sample = self.samples[self.pos].clone();
        self.pos = (self.pos + 1) % self.samples.len();
        sample
    }
}

/// A fresh sample per draw from a generator function.
pub struct Generator<F> {
    generate: F,
}

impl<F> Generator<F>
where
    F: FnMut(&mut dyn RngCore) -> Sample,
{
    pub fn new(generate: F) -> Generator<F> {
        Generator { generate }
    }
}

impl<F> SampleSource for Generator<F>
where
    F: FnMut(&mut dyn RngCore) -> Sample,
{
    fn next_sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        (self.generate)(rng)
    }
}

impl SampleSource for DatasetKind {
    fn next_sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        self.sample(rng)
    }
}
