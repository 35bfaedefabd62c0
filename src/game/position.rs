use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
///
/// Coordinates are in cell units. Positions outside the grid are valid
/// values; whether they are in bounds is a question for [`Position::is_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies on a square grid with `grid_size` cells per side
    pub fn is_within(&self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Distance to `other` measured only along the axis `direction` moves on
    pub fn axis_distance(&self, other: Position, direction: Direction) -> i32 {
        if direction.is_vertical() {
            (self.y - other.y).abs()
        } else {
            (self.x - other.x).abs()
        }
    }

    /// Top-left pixel of this cell for a renderer drawing `cell_size` pixel cells
    pub fn to_pixels(&self, cell_size: u32) -> (i64, i64) {
        let cell = i64::from(cell_size);
        (i64::from(self.x) * cell, i64::from(self.y) * cell)
    }
}

/// Whether stepping from `head` in `direction` strictly shrinks the distance
/// to `food` along that direction's axis
pub fn moves_closer(head: Position, food: Position, direction: Direction) -> bool {
    let next = head.moved_in_direction(direction);
    next.axis_distance(food, direction) < head.axis_distance(food, direction)
}
