//! Renderer sink
//!
//! The run loop hands each renderer a fresh `Snapshot` once per tick.
//! Drawing itself (canvas, GPU, terminal) lives outside this crate.

mod snapshot;

pub use snapshot::Snapshot;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Frame could not be drawn this tick. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Backing surface is not currently valid (hidden, resizing, lost)
    SurfaceUnavailable,
    /// Any other backend failure
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceUnavailable => write!(f, "render surface unavailable"),
            RenderError::Backend(msg) => write!(f, "render backend error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Receives one snapshot per completed tick on the loop thread.
///
/// Must not block for long: a slow renderer delays the next tick. Drop the
/// frame instead.
pub trait Renderer: Send {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError>;
}

/// Keeps the most recent snapshot for readers on other threads
#[derive(Debug, Clone, Default)]
pub struct SnapshotCell(Arc<Mutex<Option<Snapshot>>>);

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last rendered frame, if any
    pub fn latest(&self) -> Option<Snapshot> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Renderer for SnapshotCell {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }
}

/// Writes the HUD and head position to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        let Some(head) = snapshot.head() else {
            return Err(RenderError::Backend("empty snake".into()));
        };
        log::debug!(
            "tick {} head ({}, {}) len {} | {}",
            snapshot.tick,
            head.x,
            head.y,
            snapshot.segments.len(),
            snapshot.hud_text()
        );
        Ok(())
    }
}
