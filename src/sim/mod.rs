//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of timing,
//! threading, and drawing concerns:
//! - One `GameSession::tick` per fixed step, driven from outside
//! - Seeded RNG only
//! - Renderers see copies, never live state

pub mod collision;
pub mod grid;
pub mod item;
pub mod placer;
pub mod score;
pub mod session;
pub mod snake;

/// Grid cell as (column, row); no inherent bounds
pub type Coordinate = glam::IVec2;

pub use collision::{CollisionResult, resolve};
pub use grid::{GridError, GridGeometry};
pub use item::{Item, ItemKind};
pub use placer::ItemPlacer;
pub use score::Scoreboard;
pub use session::{GameSession, TickOutcome};
pub use snake::{Heading, HeadingCell, Snake};
