use super::observation::{create_observation, Observation, ObservationSpace};
use super::reward::reward_for_direction;
use crate::error::SnakeError;
use crate::game::{Action, GameConfig, GameEngine, GameState, TickInfo};

/// Interface a learning algorithm drives an environment through
pub trait Environment {
    /// Observation type
    type Observation;

    /// Reset the environment and return initial observation
    fn reset(&mut self) -> Self::Observation;

    /// Step the environment with a discrete action index
    fn step(&mut self, action_index: usize) -> Result<StepResult<Self::Observation>, SnakeError>;

    /// Shape and bounds of the observations
    fn observation_space(&self) -> ObservationSpace;

    /// Number of discrete actions
    fn action_count(&self) -> usize;

    /// Whether the current episode has ended
    fn is_done(&self) -> bool;
}

/// Result of an environment step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<O> {
    /// Next observation
    pub observation: O,

    /// Reward for the requested action, scored before the move
    pub reward: f64,

    /// Whether the episode terminated
    pub done: bool,

    /// Food eaten so far this episode
    pub score: u32,

    /// What happened on the board during the tick
    pub info: TickInfo,
}

/// Snake environment for reinforcement learning
///
/// Wraps the game engine and provides:
/// - 4-value observations of the cells around the head
/// - Discrete action space (4 actions: Up, Right, Down, Left)
/// - Advisory per-action rewards
pub struct SnakeEnvironment {
    engine: GameEngine,
}

impl SnakeEnvironment {
    /// Create a new Snake environment
    pub fn new(config: GameConfig) -> Result<Self, SnakeError> {
        Ok(Self {
            engine: GameEngine::new(config)?,
        })
    }

    /// Wrap an engine that was already set up
    pub fn from_engine(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// Get current observation without stepping
    pub fn observation(&self) -> Observation {
        create_observation(self.engine.state())
    }

    /// Get reference to current game state (for rendering and debugging)
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }
}

impl Environment for SnakeEnvironment {
    type Observation = Observation;

    fn reset(&mut self) -> Observation {
        create_observation(self.engine.reset())
    }

    /// Step the environment with a discrete action
    ///
    /// Actions:
    /// - 0: Move Up
    /// - 1: Move Right
    /// - 2: Move Down
    /// - 3: Move Left
    ///
    /// Any other index is rejected and the board is left as it was.
    fn step(&mut self, action_index: usize) -> Result<StepResult<Observation>, SnakeError> {
        let direction = Action::from_index(action_index)?.direction();

        self.engine.set_heading(direction);
        let reward = reward_for_direction(self.engine.state(), direction);
        let info = self.engine.tick();

        Ok(StepResult {
            observation: self.observation(),
            reward,
            done: !self.engine.is_alive(),
            score: self.engine.state().score,
            info,
        })
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::default()
    }

    fn action_count(&self) -> usize {
        Action::COUNT
    }

    fn is_done(&self) -> bool {
        !self.engine.is_alive()
    }
}
