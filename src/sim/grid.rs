//! Display-to-grid geometry
//!
//! The playfield is a fixed number of columns wide; the cell size is derived
//! from the display width and the row count from whatever height is left.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Invalid display/grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Display width or height was zero or negative
    NonPositiveDisplay { width: i32, height: i32 },
    /// Fewer than two columns requested
    TooFewColumns { columns: i32 },
    /// Display narrower than the column count (cell size would be zero)
    DisplayTooNarrow { width: i32, columns: i32 },
    /// Fewer than two rows fit on the display
    TooFewRows { height: i32, cell_size: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NonPositiveDisplay { width, height } => {
                write!(f, "display must be positive, got {}x{}", width, height)
            }
            GridError::TooFewColumns { columns } => {
                write!(f, "grid needs at least 2 columns, got {}", columns)
            }
            GridError::DisplayTooNarrow { width, columns } => {
                write!(f, "display width {} cannot fit {} columns", width, columns)
            }
            GridError::TooFewRows { height, cell_size } => write!(
                f,
                "display height {} fits fewer than 2 rows of {}px cells",
                height, cell_size
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Logical grid derived from the display size. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    columns: i32,
    rows: i32,
    cell_size: i32,
}

impl GridGeometry {
    /// Build a grid `columns` cells wide for a `width` x `height` pixel display.
    ///
    /// `cell_size = width / columns` and `rows = height / cell_size`, both
    /// truncating.
    pub fn new(width: i32, height: i32, columns: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::NonPositiveDisplay { width, height });
        }
        if columns < 2 {
            return Err(GridError::TooFewColumns { columns });
        }
        let cell_size = width / columns;
        if cell_size == 0 {
            return Err(GridError::DisplayTooNarrow { width, columns });
        }
        let rows = height / cell_size;
        if rows < 2 {
            return Err(GridError::TooFewRows { height, cell_size });
        }
        Ok(Self {
            columns,
            rows,
            cell_size,
        })
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Cell edge length in pixels
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Spawn point for a fresh snake
    pub fn center(&self) -> Coordinate {
        IVec2::new(self.columns / 2, self.rows / 2)
    }
}
