use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{
    action::Direction,
    config::GameConfig,
    position::Position,
    state::{CollisionType, GameState, Snake},
};
use crate::error::SnakeError;

/// Random draws tried before food placement falls back to a grid scan
pub const FOOD_SPAWN_ATTEMPTS: usize = 64;

/// Information about a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInfo {
    /// Whether the head landed on the food this tick
    pub ate_food: bool,
    /// Whether the tail was kept because of food eaten on the previous tick
    pub grew: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// The game engine that owns the board and applies all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create a new game engine with a freshly reset board
    pub fn new(config: GameConfig) -> Result<Self, SnakeError> {
        config.validate()?;
        let mut rng = make_rng(config.seed);
        let state = fresh_state(&config, &mut rng);
        Ok(Self { config, rng, state })
    }

    /// Create an engine around an existing board
    ///
    /// Useful for replaying a recorded position or setting up a scenario.
    pub fn from_state(config: GameConfig, state: GameState) -> Result<Self, SnakeError> {
        config.validate()?;
        if state.grid_size != config.grid_size {
            return Err(SnakeError::InvalidConfig(format!(
                "state grid size {} does not match configured grid size {}",
                state.grid_size, config.grid_size
            )));
        }
        if state.snake.is_empty() {
            return Err(SnakeError::InvalidConfig(
                "a snake needs at least a head".to_string(),
            ));
        }
        let rng = make_rng(config.seed);
        Ok(Self { config, rng, state })
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> &GameState {
        self.state = fresh_state(&self.config, &mut self.rng);
        &self.state
    }

    /// Request a new heading for the next tick
    ///
    /// A reversal onto the neck is ignored; any other direction, including
    /// the current one, is accepted.
    pub fn set_heading(&mut self, direction: Direction) {
        let current = self.state.snake.direction;
        if current.is_opposite(direction) {
            debug!(?current, requested = ?direction, "ignoring reversal request");
            return;
        }
        self.state.snake.direction = direction;
    }

    /// Advance the board by one tick
    ///
    /// A dead board is left untouched.
    pub fn tick(&mut self) -> TickInfo {
        if !self.state.is_alive {
            return TickInfo::default();
        }

        let new_head = self.state.head().moved_in_direction(self.state.snake.direction);
        let grew = std::mem::take(&mut self.state.growth_pending);
        self.state.snake.advance(new_head, grew);
        self.state.steps += 1;

        let mut info = TickInfo {
            ate_food: false,
            grew,
            collision_type: None,
        };

        // Food is checked first; collisions are only evaluated when nothing was eaten
        if new_head == self.state.food {
            info.ate_food = true;
            self.state.score += 1;
            self.state.growth_pending = true;

            match spawn_food(&mut self.rng, &self.state.snake, self.config.grid_size) {
                Some(food) => self.state.food = food,
                None => {
                    warn!(score = self.state.score, "no free cell left for food, ending episode");
                    self.state.is_alive = false;
                }
            }
        } else if let Some(collision_type) = self.check_collision(new_head) {
            self.state.is_alive = false;
            self.state.collision = Some(collision_type);
            info.collision_type = Some(collision_type);
            debug!(
                ?collision_type,
                score = self.state.score,
                steps = self.state.steps,
                "game over"
            );
        }

        info
    }

    /// Check if the freshly placed head ends the game
    fn check_collision(&self, head: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.head_overlaps_body() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive
    }

    pub fn heading(&self) -> Direction {
        self.state.snake.direction
    }

    /// Read-only view of the board
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn fresh_state(config: &GameConfig, rng: &mut StdRng) -> GameState {
    let snake = Snake {
        body: config.start_body(),
        direction: config.start_heading,
    };
    match spawn_food(rng, &snake, config.grid_size) {
        Some(food) => GameState::new(snake, food, config.grid_size),
        None => {
            // Validated configs always leave a free cell
            let mut state = GameState::new(snake, config.start, config.grid_size);
            state.is_alive = false;
            state
        }
    }
}

/// Pick a random free cell for the food
///
/// Returns `None` only when the snake covers the whole grid.
fn spawn_food(rng: &mut StdRng, snake: &Snake, grid_size: usize) -> Option<Position> {
    let size = grid_size as i32;

    for _ in 0..FOOD_SPAWN_ATTEMPTS {
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    debug!(
        attempts = FOOD_SPAWN_ATTEMPTS,
        "random food placement kept hitting the snake, scanning for a free cell"
    );
    (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .find(|pos| !snake.occupies(*pos))
}
