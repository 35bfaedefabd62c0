use serde::{Deserialize, Serialize};

use crate::game::{moves_closer, Direction, GameState};

/// Number of values in an observation, one per absolute direction
pub const OBSERVATION_SIZE: usize = 4;

/// Value for a neighbour the head cannot enter
pub const BLOCKED: f64 = -1.0;
/// Value for a free neighbour that brings the head nearer to the food
pub const TOWARD_FOOD: f64 = 1.0;
/// Value for a free neighbour that does not
pub const NEUTRAL: f64 = 0.0;

/// What the snake sees around its head
///
/// Values are ordered `[UP, RIGHT, DOWN, LEFT]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    values: [f64; OBSERVATION_SIZE],
}

impl Observation {
    pub fn new(values: [f64; OBSERVATION_SIZE]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64; OBSERVATION_SIZE] {
        &self.values
    }

    /// Value observed in one direction
    pub fn get(&self, direction: Direction) -> f64 {
        self.values[direction.index()]
    }

    /// The observation as a single-row matrix, shape `[1, 4]`
    pub fn to_matrix(&self) -> [[f64; OBSERVATION_SIZE]; 1] {
        [self.values]
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

/// Shape and bounds of the observation vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub shape: [usize; 2],
    pub low: f64,
    pub high: f64,
}

impl Default for ObservationSpace {
    fn default() -> Self {
        Self {
            shape: [1, OBSERVATION_SIZE],
            low: BLOCKED,
            high: TOWARD_FOOD,
        }
    }
}

impl ObservationSpace {
    /// Lower bound for each component
    pub fn low(&self) -> [f64; OBSERVATION_SIZE] {
        [self.low; OBSERVATION_SIZE]
    }

    /// Upper bound for each component
    pub fn high(&self) -> [f64; OBSERVATION_SIZE] {
        [self.high; OBSERVATION_SIZE]
    }

    pub fn contains(&self, observation: &Observation) -> bool {
        observation
            .values()
            .iter()
            .all(|v| (self.low..=self.high).contains(v))
    }
}

/// Create an observation from game state
///
/// Only the four cells adjacent to the head are inspected:
/// - `-1.0`: the cell is off the grid or covered by the snake
/// - `1.0`: the cell is free and closer to the food along the move's axis
/// - `0.0`: the cell is free otherwise
pub fn create_observation(state: &GameState) -> Observation {
    let mut values = [NEUTRAL; OBSERVATION_SIZE];
    for direction in Direction::ALL {
        values[direction.index()] = observe_direction(state, direction);
    }
    Observation::new(values)
}

fn observe_direction(state: &GameState, direction: Direction) -> f64 {
    let head = state.head();
    let next = head.moved_in_direction(direction);

    if state.is_lethal(next) {
        BLOCKED
    } else if moves_closer(head, state.food, direction) {
        TOWARD_FOOD
    } else {
        NEUTRAL
    }
}
