//! Grid Snake - deterministic simulation core for a grid-based snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, collisions, scoring)
//! - `platform`: Fixed-rate loop thread, pause/resume, tap input
//! - `renderer`: Snapshot type and the renderer sink
//! - `audio`: Sound notifications
//! - `settings`: Configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use platform::{InputRouter, LoopHandle, LoopState, RunLoop, Side};
pub use renderer::{RenderError, Renderer, Snapshot};
pub use settings::Settings;
pub use sim::{GameSession, GridGeometry, Heading, ItemPlacer};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Grid width in cells
    pub const NUM_BLOCKS_WIDE: i32 = 40;

    /// Fixed update rate
    pub const TICKS_PER_SECOND: u32 = 10;
    pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

    /// Body segments right behind the head that never count as a self-hit
    pub const SAFE_TAIL_SEGMENTS: usize = 4;

    /// Display size used when the host does not report one
    pub const DEFAULT_DISPLAY_WIDTH: i32 = 1920;
    pub const DEFAULT_DISPLAY_HEIGHT: i32 = 1080;
}
