//! Tap input
//!
//! Input is relative: a tap on the right half of the display turns the snake
//! clockwise, a tap on the left half turns it counterclockwise. Only 90° turns
//! are possible this way, so the snake can never reverse into itself.

use super::runloop::LoopHandle;
use crate::sim::{Heading, HeadingCell};

/// Which half of the display was tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Classify a tap by its x position against the whole-pixel midline
    /// (`display_width / 2`, rounded down); the midline counts as `Right`
    pub fn from_touch_x(x: f32, display_width: i32) -> Self {
        if x >= (display_width / 2) as f32 {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Heading after turning toward this side
    pub fn turn(self, heading: Heading) -> Heading {
        match self {
            Side::Right => heading.clockwise(),
            Side::Left => heading.counter_clockwise(),
        }
    }
}

/// Routes directional taps from the foreground thread to the snake.
///
/// Safe to call while a tick is in progress: the heading change is a single
/// atomic update.
#[derive(Debug, Clone)]
pub struct InputRouter {
    heading: HeadingCell,
    control: LoopHandle,
}

impl InputRouter {
    pub fn new(heading: HeadingCell, control: LoopHandle) -> Self {
        Self { heading, control }
    }

    /// Turn toward `side`. Also resumes a paused loop. Returns the new heading.
    pub fn on_directional_command(&self, side: Side) -> Heading {
        if self.control.resume() {
            log::debug!("Resumed by input");
        }
        self.heading.rotate(|h| side.turn(h))
    }

    /// Raw tap position convenience for hosts delivering touch events
    pub fn on_tap(&self, x: f32, display_width: i32) -> Heading {
        self.on_directional_command(Side::from_touch_x(x, display_width))
    }
}
