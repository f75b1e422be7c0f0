//! Snake body and heading
//!
//! Segments are stored head-first. Only `[0, length)` are drawn and tested;
//! anything past that is stale history that `grow()` may bring back into play.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Direction of travel on the grid (rows grow downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// All headings in clockwise order starting from `Up`
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// One-cell step in this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::new(0, -1),
            Heading::Right => IVec2::new(1, 0),
            Heading::Down => IVec2::new(0, 1),
            Heading::Left => IVec2::new(-1, 0),
        }
    }

    /// Rotate 90° clockwise
    pub fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Rotate 90° counterclockwise
    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Heading::Up => 0,
            Heading::Right => 1,
            Heading::Down => 2,
            Heading::Left => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        Heading::ALL[(bits & 3) as usize]
    }
}

/// Heading slot shared between the loop thread and the input thread.
///
/// Every write is a single atomic store, so a turn can land in the middle of
/// a tick without any lock around gameplay state.
#[derive(Debug, Clone)]
pub struct HeadingCell(Arc<AtomicU8>);

impl HeadingCell {
    pub fn new(heading: Heading) -> Self {
        Self(Arc::new(AtomicU8::new(heading.to_bits())))
    }

    pub fn get(&self) -> Heading {
        Heading::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, heading: Heading) {
        self.0.store(heading.to_bits(), Ordering::Release);
    }

    /// Apply `turn` to the current heading atomically, returning the new heading
    pub fn rotate(&self, turn: impl Fn(Heading) -> Heading) -> Heading {
        let mut current = self.0.load(Ordering::Acquire);
        loop {
            let next = turn(Heading::from_bits(current)).to_bits();
            match self
                .0
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Heading::from_bits(next),
                Err(actual) => current = actual,
            }
        }
    }
}

/// The player's snake
#[derive(Debug)]
pub struct Snake {
    segments: Vec<Coordinate>,
    length: usize,
    heading: HeadingCell,
}

/// A clone steers on its own: the heading is copied into a fresh cell
impl Clone for Snake {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            length: self.length,
            heading: HeadingCell::new(self.heading.get()),
        }
    }
}

impl Snake {
    /// One-segment snake at `head`, heading right
    pub fn new(head: Coordinate) -> Self {
        Self::with_heading(head, HeadingCell::new(Heading::Right))
    }

    /// One-segment snake at `head` steered through an existing heading cell
    pub fn with_heading(head: Coordinate, heading: HeadingCell) -> Self {
        Self {
            segments: vec![head, head],
            length: 1,
            heading,
        }
    }

    /// Build a snake from explicit head-first segments
    pub fn from_segments(segments: Vec<Coordinate>, heading: Heading) -> Self {
        let mut snake = Self {
            length: segments.len(),
            segments,
            heading: HeadingCell::new(heading),
        };
        snake.ensure_history();
        snake
    }

    /// Back to a single segment at `head`. Heading is left alone.
    pub fn reset(&mut self, head: Coordinate) {
        self.segments.clear();
        self.segments.extend([head, head]);
        self.length = 1;
    }

    #[inline]
    pub fn head(&self) -> Coordinate {
        self.segments[0]
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupied cells, head first
    pub fn segments(&self) -> &[Coordinate] {
        &self.segments[..self.length]
    }

    /// Segment at `index`, including stale history past `length`
    pub fn segment(&self, index: usize) -> Option<Coordinate> {
        self.segments.get(index).copied()
    }

    pub fn heading(&self) -> Heading {
        self.heading.get()
    }

    /// Unconditional; turn rules live at the input boundary
    pub fn set_heading(&self, heading: Heading) {
        self.heading.set(heading);
    }

    /// Handle for steering this snake from another thread
    pub fn heading_cell(&self) -> HeadingCell {
        self.heading.clone()
    }

    /// Propagate the body one step along its history, then step the head.
    ///
    /// Index `i` takes the old value of `i - 1` for `i` in `length..=1`, so
    /// index `length` ends up holding the old tail for a later `grow()`.
    pub fn move_head(&mut self) {
        self.ensure_history();
        for i in (1..=self.length).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] += self.heading.get().delta();
    }

    pub fn grow(&mut self) {
        self.length += 1;
        self.ensure_history();
    }

    /// Length 0 is a valid (fatal) state; it does not wrap below that.
    pub fn shrink(&mut self) {
        self.length = self.length.saturating_sub(1);
    }

    /// Keep at least `length + 1` slots so the shift in `move_head` has room
    fn ensure_history(&mut self) {
        if self.segments.len() < self.length + 1 {
            let fill = self.segments.last().copied().unwrap_or(IVec2::ZERO);
            self.segments.resize(self.length + 1, fill);
        }
    }
}
