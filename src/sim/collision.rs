//! Collision resolution on the grid
//!
//! Checks run against the snake as it stands *before* the tick's move. The
//! boundary is deliberately lopsided: death is at column/row `-1` on the low
//! side, and past `columns + 1` / `rows` on the high side. Keep it that way;
//! existing play relies on it.

use super::Coordinate;
use super::snake::Snake;
use crate::consts::SAFE_TAIL_SEGMENTS;

/// Outcome of a collision check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub ate_apple: bool,
    pub ate_poison: bool,
    pub is_dead: bool,
}

/// Resolve item pickups and death for the current snake state
pub fn resolve(
    snake: &Snake,
    apple: Coordinate,
    poison: Coordinate,
    columns: i32,
    rows: i32,
) -> CollisionResult {
    let head = snake.head();
    CollisionResult {
        ate_apple: head == apple,
        ate_poison: head == poison,
        is_dead: is_dead(snake, columns, rows),
    }
}

/// Any of: empty snake, off the board, or head inside its own body
pub fn is_dead(snake: &Snake, columns: i32, rows: i32) -> bool {
    snake.length() == 0 || out_of_bounds(snake.head(), columns, rows) || hit_self(snake)
}

/// Lopsided bounds test, see module docs
pub fn out_of_bounds(head: Coordinate, columns: i32, rows: i32) -> bool {
    head.x == -1 || head.x > columns + 1 || head.y == -1 || head.y > rows
}

/// Head overlaps a segment past the safe zone right behind it
pub fn hit_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake
        .segments()
        .iter()
        .skip(SAFE_TAIL_SEGMENTS + 1)
        .any(|&segment| segment == head)
}
