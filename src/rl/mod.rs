//! Reinforcement learning environment for Snake game
//!
//! Provides:
//! - 4-value observations of the cells around the head
//! - Advisory per-action rewards
//! - An environment interface for external learning algorithms
//! - Baseline policies for evaluation
//! - Burn tensor conversion (feature `tensor`)

pub mod environment;
pub mod observation;
pub mod policy;
pub mod reward;
#[cfg(feature = "tensor")]
pub mod tensor;

pub use environment::{Environment, SnakeEnvironment, StepResult};
pub use observation::{create_observation, Observation, ObservationSpace, OBSERVATION_SIZE};
pub use policy::{argmax, GreedyPolicy, Policy, RandomPolicy};
pub use reward::{reward_for_action, reward_for_direction};
#[cfg(feature = "tensor")]
pub use tensor::observation_tensor;
