//! Collectible items

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// What eating the item does to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Apple: grow by one, score +1
    Beneficial,
    /// Poison: shrink by one, score -1
    Harmful,
}

/// An item on the grid. One of each kind is live at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub pos: Coordinate,
    pub kind: ItemKind,
}

impl Item {
    pub fn apple(pos: Coordinate) -> Self {
        Self {
            pos,
            kind: ItemKind::Beneficial,
        }
    }

    pub fn poison(pos: Coordinate) -> Self {
        Self {
            pos,
            kind: ItemKind::Harmful,
        }
    }

    /// Score change when eaten
    pub fn score_delta(&self) -> i64 {
        match self.kind {
            ItemKind::Beneficial => 1,
            ItemKind::Harmful => -1,
        }
    }
}
