//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board is deterministic apart from food placement, which is driven by a
//! seedable RNG.

pub mod action;
pub mod config;
pub mod engine;
pub mod position;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{load_config, save_config, GameConfig};
pub use engine::{GameEngine, TickInfo, FOOD_SPAWN_ATTEMPTS};
pub use position::{moves_closer, Position};
pub use state::{CollisionType, GameState, Snake};
