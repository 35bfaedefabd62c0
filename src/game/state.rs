use super::action::Direction;
use super::position::Position;
use crate::error::SnakeError;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (back_dx, back_dy) = direction.opposite().delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Create a snake from explicit segments, head first
    ///
    /// Fails with [`SnakeError::InvalidConfig`] when `body` is empty.
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Result<Self, SnakeError> {
        if body.is_empty() {
            return Err(SnakeError::InvalidConfig(
                "a snake needs at least a head".to_string(),
            ));
        }
        Ok(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if the head shares its cell with another segment
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().filter(|&&pos| pos == head).count() > 1
    }

    /// Move every segment onto the one ahead of it, then write `new_head`
    ///
    /// With `grow` the old tail cell stays occupied and the body gets one
    /// segment longer.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        if grow {
            let tail = self.tail();
            self.body.push(tail);
        }

        let len = self.body.len();
        self.body.copy_within(0..len - 1, 1);
        self.body[0] = new_head;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
///
/// Renderers read it; only [`GameEngine`](super::GameEngine) writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_size: usize,
    /// Food eaten this episode
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    /// Food was eaten on the last tick; the next tick keeps the tail
    pub growth_pending: bool,
    /// What ended the episode, if it ended by collision
    pub collision: Option<CollisionType>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            grid_size,
            score: 0,
            steps: 0,
            is_alive: true,
            growth_pending: false,
            collision: None,
        }
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// A cell the head cannot enter without ending the episode
    pub fn is_lethal(&self, pos: Position) -> bool {
        !self.is_in_bounds(pos) || self.is_occupied_by_snake(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Move without growing
        snake.advance(Position::new(6, 5), false);
        assert_eq!(
            snake.body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );

        // Move with growing keeps the old tail
        snake.advance(Position::new(7, 5), true);
        assert_eq!(
            snake.body,
            vec![
                Position::new(7, 5),
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5)
            ]
        );
    }

    #[test]
    fn test_single_segment_advance() {
        let mut snake = Snake::new(Position::new(2, 2), Direction::Up, 1);
        snake.advance(Position::new(2, 1), false);
        assert_eq!(snake.body, vec![Position::new(2, 1)]);
    }

    #[test]
    fn test_occupancy() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
        assert!(!snake.head_overlaps_body());

        let looped = Snake::from_body(
            vec![Position::new(4, 5), Position::new(5, 5), Position::new(4, 5)],
            Direction::Left,
        )
        .unwrap();
        assert!(looped.head_overlaps_body());
    }

    #[test]
    fn test_lethal_cells() {
        let state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
        );

        assert!(state.is_lethal(Position::new(-1, 5)));
        assert!(state.is_lethal(Position::new(0, 20)));
        assert!(state.is_lethal(Position::new(-2, 5)));
        assert!(!state.is_lethal(Position::new(1, 5)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert!(matches!(
            Snake::from_body(Vec::new(), Direction::Up),
            Err(SnakeError::InvalidConfig(_))
        ));

        let snake = Snake::from_body(vec![Position::new(1, 1)], Direction::Up).unwrap();
        assert_eq!(snake.len(), 1);
    }
}
