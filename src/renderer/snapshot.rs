//! Read-only frame data handed to renderers

use serde::{Deserialize, Serialize};

use crate::sim::Coordinate;

/// Everything a renderer needs for one frame, copied out of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Occupied snake cells, head first
    pub segments: Vec<Coordinate>,
    pub apple: Coordinate,
    pub poison: Coordinate,
    pub score: i64,
    pub high_score: i64,
    /// Cell edge in pixels
    pub cell_size: i32,
    pub columns: i32,
    pub rows: i32,
    /// Ticks completed by the session when this was taken
    pub tick: u64,
}

impl Snapshot {
    pub fn head(&self) -> Option<Coordinate> {
        self.segments.first().copied()
    }

    /// Pixel rectangle `(left, top, right, bottom)` covering `cell`
    pub fn cell_rect(&self, cell: Coordinate) -> (i32, i32, i32, i32) {
        let left = cell.x * self.cell_size;
        let top = cell.y * self.cell_size;
        (left, top, left + self.cell_size, top + self.cell_size)
    }

    /// HUD line as shown above the board
    pub fn hud_text(&self) -> String {
        format!("Score:{}  High Score:{}", self.score, self.high_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn snapshot() -> Snapshot {
        Snapshot {
            segments: vec![IVec2::new(3, 2), IVec2::new(2, 2)],
            apple: IVec2::new(1, 1),
            poison: IVec2::new(7, 7),
            score: 4,
            high_score: 9,
            cell_size: 48,
            columns: 40,
            rows: 22,
            tick: 12,
        }
    }

    #[test]
    fn test_cell_rect() {
        let s = snapshot();
        assert_eq!(s.cell_rect(IVec2::new(3, 2)), (144, 96, 192, 144));
        assert_eq!(s.cell_rect(IVec2::new(-1, 0)), (-48, 0, 0, 48));
    }

    #[test]
    fn test_head_and_hud() {
        let s = snapshot();
        assert_eq!(s.head(), Some(IVec2::new(3, 2)));
        assert_eq!(s.hud_text(), "Score:4  High Score:9");
    }
}
