use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` values drawn uniformly from
/// [low, high), always the same ones for a given seed
#[derive(Clone)]
pub struct RandomGenerator {
    remaining: usize,
    distribution: Uniform<f64>,
    rng: Pcg64,
}

impl RandomGenerator {
    pub fn new(low: f64, high: f64, num: usize, seed: u64) -> RandomGenerator {
        assert!(low < high, "Invalid range [{}, {})", low, high);
        RandomGenerator {
            remaining: num,
            distribution: Uniform::new(low, high),
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.distribution.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
