//! Simple policies for driving the environment without a trained network

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::observation::Observation;
use crate::game::Action;

/// Chooses a discrete action from an observation
pub trait Policy {
    fn select_action(&mut self, observation: &Observation) -> Action;
}

/// Index of the largest value; the first one wins ties
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = i;
        }
    }
    best
}

/// Takes the direction with the highest observed value
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn select_action(&mut self, observation: &Observation) -> Action {
        Action::ALL[argmax(observation.values())]
    }
}

/// Picks actions uniformly at random
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &Observation) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::COUNT)]
    }
}
