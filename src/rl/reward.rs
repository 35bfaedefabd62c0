//! Advisory reward for a move, scored on the board before it is committed

use crate::game::{moves_closer, Action, Direction, GameState};

/// Reward for steering into a wall or the snake's own body
pub const DEATH_REWARD: f64 = -100.0;
/// Reward for steering onto the food
pub const FOOD_REWARD: f64 = 100.0;
/// Reward for a safe move that closes in on the food along the move's axis
pub const CLOSER_REWARD: f64 = 1.0;
/// Reward for any other safe move
pub const AWAY_REWARD: f64 = -1.0;

/// Score moving the head one cell in `direction` from the current board
///
/// The board is only read, never changed.
pub fn reward_for_direction(state: &GameState, direction: Direction) -> f64 {
    let head = state.head();
    let next = head.moved_in_direction(direction);

    if state.is_lethal(next) {
        return DEATH_REWARD;
    }

    if next == state.food {
        return FOOD_REWARD;
    }

    if moves_closer(head, state.food, direction) {
        CLOSER_REWARD
    } else {
        AWAY_REWARD
    }
}

/// Score a discrete action from the current board
pub fn reward_for_action(state: &GameState, action: Action) -> f64 {
    reward_for_direction(state, action.direction())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snake};

    fn state_with(body: Vec<Position>, direction: Direction, food: Position) -> GameState {
        GameState::new(Snake::from_body(body, direction).unwrap(), food, 30)
    }

    fn straight_snake(food: Position) -> GameState {
        state_with(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
            food,
        )
    }

    #[test]
    fn test_move_toward_food() {
        let state = straight_snake(Position::new(10, 5));
        assert_eq!(reward_for_direction(&state, Direction::Right), CLOSER_REWARD);
    }

    #[test]
    fn test_vertical_move_with_food_in_same_row() {
        let state = straight_snake(Position::new(10, 5));
        assert_eq!(reward_for_direction(&state, Direction::Up), AWAY_REWARD);
        assert_eq!(reward_for_direction(&state, Direction::Down), AWAY_REWARD);
    }

    #[test]
    fn test_reversal_into_neck_is_lethal() {
        let state = straight_snake(Position::new(10, 5));
        assert_eq!(reward_for_direction(&state, Direction::Left), DEATH_REWARD);
    }

    #[test]
    fn test_wall_is_lethal() {
        let state = state_with(
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
            Direction::Left,
            Position::new(10, 10),
        );
        assert_eq!(reward_for_direction(&state, Direction::Left), DEATH_REWARD);
        assert_eq!(reward_for_direction(&state, Direction::Up), DEATH_REWARD);
        assert_eq!(reward_for_direction(&state, Direction::Down), CLOSER_REWARD);
    }

    #[test]
    fn test_food_cell() {
        let state = straight_snake(Position::new(6, 5));
        assert_eq!(reward_for_action(&state, Action::MoveRight), FOOD_REWARD);
    }

    #[test]
    fn test_reward_does_not_mutate_state() {
        let state = straight_snake(Position::new(10, 5));
        let before = state.clone();
        for direction in Direction::ALL {
            reward_for_direction(&state, direction);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_rewards_are_from_closed_set() {
        for fx in 0..30 {
            for fy in 0..30 {
                let state = straight_snake(Position::new(fx, fy));
                for direction in Direction::ALL {
                    let reward = reward_for_direction(&state, direction);
                    assert!(
                        [DEATH_REWARD, FOOD_REWARD, CLOSER_REWARD, AWAY_REWARD].contains(&reward),
                        "unexpected reward {reward}"
                    );
                }
            }
        }
    }
}
