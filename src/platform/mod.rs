//! Platform abstraction layer
//!
//! Everything that touches wall-clock time or other threads:
//! - Fixed-rate tick scheduling
//! - The pausable loop thread and its lifecycle hooks
//! - Tap input routed onto the snake's heading

pub mod input;
pub mod runloop;
pub mod scheduler;

pub use input::{InputRouter, Side};
pub use runloop::{LoopHandle, LoopState, RunLoop};
pub use scheduler::TickScheduler;
