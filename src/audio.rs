//! Audio collaborator
//!
//! The simulation only fires notifications; actual mixing and playback belong
//! to whatever backend the host plugs in.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Head reached the apple
    EatApple,
    /// Snake died
    SnakeCrash,
}

/// Fire-and-forget sound notifications, called from inside a tick.
///
/// Implementations must return promptly and must not panic.
pub trait AudioSink: Send {
    fn play(&self, effect: SoundEffect);

    fn on_eat(&self) {
        self.play(SoundEffect::EatApple);
    }

    fn on_crash(&self) {
        self.play(SoundEffect::SnakeCrash);
    }
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&self, _effect: SoundEffect) {}
}

/// Something that can actually make noise at a given volume
pub trait SoundBackend: Send {
    fn play(&self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs what it would have played
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBackend;

impl SoundBackend for LogBackend {
    fn play(&self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn SoundBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn SoundBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(SoundEffect, f32)>>>);

    impl SoundBackend for Recorder {
        fn play(&self, effect: SoundEffect, volume: f32) {
            self.0.lock().unwrap().push((effect, volume));
        }
    }

    #[test]
    fn test_notifications_map_to_effects() {
        let rec = Recorder::default();
        let mut audio = AudioManager::new(Box::new(rec.clone()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        audio.on_eat();
        audio.on_crash();
        assert_eq!(
            *rec.0.lock().unwrap(),
            vec![(SoundEffect::EatApple, 0.25), (SoundEffect::SnakeCrash, 0.25)]
        );
    }

    #[test]
    fn test_muted_skips_backend() {
        let rec = Recorder::default();
        let mut audio = AudioManager::new(Box::new(rec.clone()));
        audio.set_muted(true);
        audio.on_eat();
        audio.set_muted(false);
        audio.set_master_volume(-3.0);
        audio.on_crash();
        assert!(rec.0.lock().unwrap().is_empty());
    }
}
