//! RL Snake - a deterministic Snake engine with a reinforcement-learning adapter
//!
//! This library provides:
//! - Core game logic (game module)
//! - Observation encoding, rewards and the environment interface (rl module)
//! - Score tracking across episodes (metrics module)
//! - A policy evaluation driver (modes module)

pub mod error;
pub mod game;
pub mod metrics;
pub mod modes;
pub mod rl;

pub use error::SnakeError;
