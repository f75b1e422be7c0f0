//! Pausable game loop thread
//!
//! One background thread owns the session while the loop runs. The
//! foreground only talks to it through the shared state monitor below; a
//! paused loop sleeps on the condition variable instead of polling.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::scheduler::TickScheduler;
use crate::audio::AudioSink;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameSession, TickOutcome};

/// Lifecycle of the loop thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No thread running
    Stopped,
    /// Ticking at the fixed rate
    Running,
    /// Thread alive but blocked until resumed
    Paused,
}

#[derive(Debug)]
struct Monitor {
    state: Mutex<LoopState>,
    wake: Condvar,
}

/// Cloneable control surface for the loop (pause/resume from any thread)
#[derive(Debug, Clone)]
pub struct LoopHandle(Arc<Monitor>);

impl LoopHandle {
    pub(crate) fn new() -> Self {
        Self(Arc::new(Monitor {
            state: Mutex::new(LoopState::Stopped),
            wake: Condvar::new(),
        }))
    }

    pub fn state(&self) -> LoopState {
        *self.lock()
    }

    /// Running -> Paused. Returns false if the loop was not running.
    pub fn pause(&self) -> bool {
        self.transition(LoopState::Running, LoopState::Paused)
    }

    /// Paused -> Running, waking the loop thread. Returns false if not paused.
    pub fn resume(&self) -> bool {
        self.transition(LoopState::Paused, LoopState::Running)
    }

    fn transition(&self, from: LoopState, to: LoopState) -> bool {
        let mut state = self.lock();
        if *state != from {
            return false;
        }
        *state = to;
        self.0.wake.notify_all();
        log::debug!("Loop {:?} -> {:?}", from, to);
        true
    }

    pub(crate) fn set(&self, to: LoopState) {
        *self.lock() = to;
        self.0.wake.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, LoopState> {
        self.0.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Everything the loop thread owns while it runs
struct LoopParts {
    session: GameSession,
    renderer: Box<dyn Renderer>,
    audio: Box<dyn AudioSink>,
}

/// Drives `GameSession::tick` at a fixed rate on a dedicated thread
pub struct RunLoop {
    handle: LoopHandle,
    period: Duration,
    stop_when_hidden: bool,
    parts: Option<LoopParts>,
    worker: Option<JoinHandle<LoopParts>>,
}

impl RunLoop {
    pub fn new(
        session: GameSession,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
        period: Duration,
    ) -> Self {
        Self {
            handle: LoopHandle::new(),
            period,
            stop_when_hidden: true,
            parts: Some(LoopParts {
                session,
                renderer,
                audio,
            }),
            worker: None,
        }
    }

    /// Loop with the tick rate and visibility policy from `settings`
    pub fn from_settings(
        session: GameSession,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
        settings: &Settings,
    ) -> Self {
        let mut run_loop = Self::new(session, renderer, audio, settings.tick_period());
        run_loop.stop_when_hidden = settings.pause_on_hidden;
        run_loop
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> LoopState {
        self.handle.state()
    }

    /// The session, while no loop thread holds it
    pub fn session(&self) -> Option<&GameSession> {
        self.parts.as_ref().map(|p| &p.session)
    }

    /// Stopped -> Running: spawn the loop thread. No-op if already started.
    pub fn start(&mut self) -> bool {
        if self.worker.is_some() {
            log::debug!("Loop already started");
            return false;
        }
        let Some(parts) = self.parts.take() else {
            return false;
        };

        self.handle.set(LoopState::Running);
        let handle = self.handle.clone();
        let period = self.period;
        self.worker = Some(thread::spawn(move || run(handle, parts, period)));
        log::info!("Loop started ({}ms per tick)", self.period.as_millis());
        true
    }

    pub fn pause(&self) -> bool {
        self.handle.pause()
    }

    pub fn resume(&self) -> bool {
        self.handle.resume()
    }

    /// Running/Paused -> Stopped. Waits for the current tick to finish and the
    /// thread to exit, then takes the session back so `start` can run again.
    pub fn stop(&mut self) -> bool {
        let Some(worker) = self.worker.take() else {
            return false;
        };
        self.handle.set(LoopState::Stopped);
        match worker.join() {
            Ok(parts) => {
                log::info!(
                    "Loop stopped after {} ticks, high score {}",
                    parts.session.tick_count,
                    parts.session.high_score()
                );
                self.parts = Some(parts);
            }
            Err(_) => log::error!("Loop thread panicked, session lost"),
        }
        true
    }

    /// Host visibility hook: hidden stops the thread, visible starts a new one
    pub fn on_visibility_changed(&mut self, visible: bool) {
        if !self.stop_when_hidden {
            return;
        }
        if visible {
            self.start();
        } else {
            self.stop();
        }
    }
}

impl Drop for RunLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(handle: LoopHandle, mut parts: LoopParts, period: Duration) -> LoopParts {
    let mut scheduler = TickScheduler::due_now(period, Instant::now());

    let mut state = handle.lock();
    loop {
        let current = *state;
        match current {
            LoopState::Stopped => break,
            LoopState::Paused => {
                state = handle
                    .0
                    .wake
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
                continue;
            }
            LoopState::Running => {}
        }

        let now = Instant::now();
        if !scheduler.poll(now) {
            // Sleep until the deadline, or until pause/stop wakes us
            state = handle
                .0
                .wake
                .wait_timeout(state, scheduler.time_until(now))
                .unwrap_or_else(PoisonError::into_inner)
                .0;
            continue;
        }

        // Tick outside the lock so pause/resume never wait on gameplay
        drop(state);

        if parts.session.tick(parts.audio.as_ref()) == TickOutcome::Died {
            handle.pause();
            scheduler.reset(Instant::now());
        }

        let snapshot = parts.session.snapshot();
        if let Err(e) = parts.renderer.render(&snapshot) {
            log::warn!("Skipping frame for tick {}: {}", snapshot.tick, e);
        }

        state = handle.lock();
    }
    drop(state);
    parts
}
