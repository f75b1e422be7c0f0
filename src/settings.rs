//! Game settings
//!
//! Plain JSON, every field optional. Hosts that keep a settings file point
//! `GRID_SNAKE_SETTINGS` at it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::AudioManager;
use crate::consts::{NUM_BLOCKS_WIDE, TICKS_PER_SECOND};
use crate::sim::{GridError, GridGeometry, ItemPlacer};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Grid width in cells
    pub columns: i32,
    /// Fixed update rate
    pub ticks_per_second: u32,
    /// Item placement seed (None = fresh entropy each launch)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Lifecycle ===
    /// Stop the loop thread while the host window is hidden
    pub pause_on_hidden: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: NUM_BLOCKS_WIDE,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            pause_on_hidden: true,
        }
    }
}

impl Settings {
    /// Environment variable naming a JSON settings file
    pub const ENV_VAR: &'static str = "GRID_SNAKE_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Time between ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }

    /// Grid for a display of the given pixel size
    pub fn grid(&self, width: i32, height: i32) -> Result<GridGeometry, GridError> {
        GridGeometry::new(width, height, self.columns)
    }

    /// Item placer honouring the configured seed
    pub fn placer(&self) -> ItemPlacer {
        match self.seed {
            Some(seed) => ItemPlacer::seeded(seed),
            None => ItemPlacer::from_entropy(),
        }
    }

    /// Push the volume settings into an audio manager
    pub fn apply_audio(&self, audio: &mut AudioManager) {
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
    }

    /// Load from the file named by `GRID_SNAKE_SETTINGS`, falling back to
    /// defaults when unset or unreadable
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
