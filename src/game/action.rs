use serde::{Deserialize, Serialize};

use crate::error::SnakeError;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in observation order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    ///
    /// The y axis grows downwards, so `Up` decreases y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Whether this direction moves along the y axis
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

/// Discrete action exposed to a learning algorithm
///
/// The index of each action is part of the environment contract and
/// never changes: 0 → up, 1 → right, 2 → down, 3 → left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveRight,
    MoveDown,
    MoveLeft,
}

impl Action {
    /// Number of discrete actions
    pub const COUNT: usize = 4;

    /// All actions ordered by index
    pub const ALL: [Action; Action::COUNT] = [
        Action::MoveUp,
        Action::MoveRight,
        Action::MoveDown,
        Action::MoveLeft,
    ];

    /// Look up the action for a discrete index
    pub fn from_index(index: usize) -> Result<Self, SnakeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SnakeError::InvalidAction {
                index,
                count: Self::COUNT,
            })
    }

    /// Stable discrete index of this action
    pub fn index(self) -> usize {
        self.direction().index()
    }

    /// Direction requested by this action
    pub fn direction(self) -> Direction {
        match self {
            Action::MoveUp => Direction::Up,
            Action::MoveRight => Direction::Right,
            Action::MoveDown => Direction::Down,
            Action::MoveLeft => Direction::Left,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::MoveUp,
            Direction::Right => Action::MoveRight,
            Direction::Down => Action::MoveDown,
            Direction::Left => Action::MoveLeft,
        }
    }
}
