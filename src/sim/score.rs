//! Score and session high score
//!
//! The high score lives for the process only; nothing is written to disk.

use serde::{Deserialize, Serialize};

/// Running score plus best score seen since startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Current run, may go negative
    pub score: i64,
    /// Best finished run, never decreases
    pub high_score: i64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delta: i64) {
        self.score += delta;
    }

    /// Check if the current run would beat the high score
    pub fn qualifies(&self) -> bool {
        self.score > self.high_score
    }

    /// Close out the run: bank the score if it is a new best, then zero it.
    /// Returns true on a new high score.
    pub fn finish_run(&mut self) -> bool {
        let new_best = self.qualifies();
        if new_best {
            self.high_score = self.score;
        }
        self.score = 0;
        new_best
    }
}
