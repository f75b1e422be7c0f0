//! One play session: snake, items, score, and the per-tick update

use super::collision;
use super::grid::GridGeometry;
use super::item::Item;
use super::placer::ItemPlacer;
use super::score::Scoreboard;
use super::Coordinate;
use super::snake::{Heading, HeadingCell, Snake};
use crate::audio::AudioSink;
use crate::renderer::Snapshot;

/// What a tick did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Play continues
    Alive,
    /// Snake died; the session has already been reset
    Died,
}

/// Complete gameplay state for one process.
///
/// Owned and mutated by the loop thread only; other threads see it through
/// `Snapshot` copies and the shared heading cell. A clone gets its own
/// heading cell.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub grid: GridGeometry,
    pub(crate) snake: Snake,
    pub apple: Item,
    pub poison: Item,
    pub scoreboard: Scoreboard,
    /// Ticks completed since the session was created
    pub tick_count: u64,
    placer: ItemPlacer,
}

impl GameSession {
    /// Fresh session: one-segment snake at the grid center, both items placed
    pub fn new(grid: GridGeometry, mut placer: ItemPlacer) -> Self {
        let apple = Item::apple(placer.place(grid.columns(), grid.rows()));
        let poison = Item::poison(placer.place(grid.columns(), grid.rows()));
        log::info!(
            "New session on {}x{} grid ({}px cells), seed {}",
            grid.columns(),
            grid.rows(),
            grid.cell_size(),
            placer.seed
        );
        Self {
            grid,
            snake: Snake::new(grid.center()),
            apple,
            poison,
            scoreboard: Scoreboard::new(),
            tick_count: 0,
            placer,
        }
    }

    /// Handle the input side uses to steer
    pub fn heading_cell(&self) -> HeadingCell {
        self.snake.heading_cell()
    }

    #[inline]
    pub fn head(&self) -> Coordinate {
        self.snake.head()
    }

    /// Occupied cells, head first
    pub fn segments(&self) -> &[Coordinate] {
        self.snake.segments()
    }

    #[inline]
    pub fn snake_length(&self) -> usize {
        self.snake.length()
    }

    pub fn heading(&self) -> Heading {
        self.snake.heading()
    }

    /// Put a one-segment snake at `head`, keeping its heading. Used to set up
    /// positions; items and score are left alone.
    pub fn respawn_snake_at(&mut self, head: Coordinate) {
        self.snake.reset(head);
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.scoreboard.score
    }

    #[inline]
    pub fn high_score(&self) -> i64 {
        self.scoreboard.high_score
    }

    pub fn respawn_apple(&mut self) {
        self.apple.pos = self.placer.place(self.grid.columns(), self.grid.rows());
    }

    pub fn respawn_poison(&mut self) {
        self.poison.pos = self.placer.place(self.grid.columns(), self.grid.rows());
    }

    /// Advance the game by one step.
    ///
    /// Items and death are both judged on the snake as it was *before* this
    /// tick's move, so a fatal move is only caught on the following tick.
    pub fn tick(&mut self, audio: &dyn AudioSink) -> TickOutcome {
        let hit = collision::resolve(
            &self.snake,
            self.apple.pos,
            self.poison.pos,
            self.grid.columns(),
            self.grid.rows(),
        );

        if hit.ate_apple {
            self.snake.grow();
            self.respawn_apple();
            self.scoreboard.add(self.apple.score_delta());
            audio.on_eat();
            log::debug!("Apple eaten, length {}", self.snake.length());
        }

        if hit.ate_poison {
            self.snake.shrink();
            self.respawn_poison();
            self.scoreboard.add(self.poison.score_delta());
            log::debug!("Poison eaten, length {}", self.snake.length());
        }

        self.snake.move_head();
        self.tick_count += 1;

        if hit.is_dead {
            audio.on_crash();
            self.reset();
            return TickOutcome::Died;
        }

        TickOutcome::Alive
    }

    /// Start a new run. Keeps the high score and the current heading.
    pub fn reset(&mut self) {
        let final_score = self.scoreboard.score;
        if self.scoreboard.finish_run() {
            log::info!("New high score: {}", final_score);
        } else {
            log::info!("Run over with score {}", final_score);
        }
        self.snake.reset(self.grid.center());
        self.respawn_apple();
        self.respawn_poison();
    }

    /// Copy out everything the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().to_vec(),
            apple: self.apple.pos,
            poison: self.poison.pos,
            score: self.scoreboard.score,
            high_score: self.scoreboard.high_score,
            cell_size: self.grid.cell_size(),
            columns: self.grid.columns(),
            rows: self.grid.rows(),
            tick: self.tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use glam::IVec2;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Sounds(Mutex<Vec<SoundEffect>>);

    impl AudioSink for Sounds {
        fn play(&self, effect: SoundEffect) {
            self.0.lock().unwrap().push(effect);
        }
    }

    impl Sounds {
        fn taken(&self) -> Vec<SoundEffect> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    const OUT_OF_REACH: IVec2 = IVec2::new(1000, 1000);

    fn session() -> GameSession {
        let grid = GridGeometry::new(1920, 1080, 40).unwrap();
        let mut session = GameSession::new(grid, ItemPlacer::seeded(1234));
        session.apple.pos = OUT_OF_REACH;
        session.poison.pos = OUT_OF_REACH + IVec2::ONE;
        session
    }

    fn in_margin(p: IVec2, grid: &GridGeometry) -> bool {
        p.x >= 1 && p.x <= grid.columns() - 1 && p.y >= 1 && p.y <= grid.rows() - 1
    }

    #[test]
    fn test_new_session_layout() {
        let s = GameSession::new(
            GridGeometry::new(1920, 1080, 40).unwrap(),
            ItemPlacer::seeded(9),
        );
        assert_eq!(s.snake.segments(), &[IVec2::new(20, 11)]);
        assert_eq!(s.snake.heading(), Heading::Right);
        assert!(in_margin(s.apple.pos, &s.grid));
        assert!(in_margin(s.poison.pos, &s.grid));
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 0);
    }

    #[test]
    fn test_plain_tick_moves_head() {
        let audio = Sounds::default();
        let mut s = session();
        assert_eq!(s.tick(&audio), TickOutcome::Alive);
        assert_eq!(s.snake.head(), IVec2::new(21, 11));
        assert_eq!(s.tick_count, 1);
        assert!(audio.taken().is_empty());
    }

    #[test]
    fn test_eating_apple() {
        let audio = Sounds::default();
        let mut s = session();
        s.scoreboard.score = 3;
        s.apple.pos = s.snake.head();

        assert_eq!(s.tick(&audio), TickOutcome::Alive);
        assert_eq!(s.score(), 4);
        assert_eq!(s.snake.length(), 2);
        assert!(in_margin(s.apple.pos, &s.grid));
        assert_eq!(audio.taken(), vec![SoundEffect::EatApple]);
        // Body trails the old head
        assert_eq!(s.snake.segments(), &[IVec2::new(21, 11), IVec2::new(20, 11)]);
    }

    #[test]
    fn test_eating_poison() {
        let audio = Sounds::default();
        let mut s = session();
        s.snake.grow();
        s.poison.pos = s.snake.head();

        assert_eq!(s.tick(&audio), TickOutcome::Alive);
        assert_eq!(s.score(), -1);
        assert_eq!(s.snake.length(), 1);
        assert!(in_margin(s.poison.pos, &s.grid));
        assert!(audio.taken().is_empty());
    }

    #[test]
    fn test_poison_at_length_one_kills_next_tick() {
        let audio = Sounds::default();
        let mut s = session();
        s.scoreboard.high_score = 2;
        s.poison.pos = s.snake.head();

        // Death is judged on the pre-move state, so this tick survives
        assert_eq!(s.tick(&audio), TickOutcome::Alive);
        assert_eq!(s.snake.length(), 0);

        s.poison.pos = OUT_OF_REACH;
        assert_eq!(s.tick(&audio), TickOutcome::Died);
        assert_eq!(audio.taken(), vec![SoundEffect::SnakeCrash]);
        assert_eq!(s.snake.segments(), &[IVec2::new(20, 11)]);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 2);
    }

    #[test]
    fn test_wall_death_is_one_tick_late() {
        let audio = Sounds::default();
        let mut s = session();
        s.snake.reset(IVec2::new(0, 5));
        s.snake.set_heading(Heading::Left);

        // Moves onto column -1
        assert_eq!(s.tick(&audio), TickOutcome::Alive);
        assert_eq!(s.snake.head(), IVec2::new(-1, 5));
        // Caught here
        assert_eq!(s.tick(&audio), TickOutcome::Died);
        assert_eq!(s.snake.head(), s.grid.center());
    }

    #[test]
    fn test_reset_banks_high_score() {
        let mut s = session();
        s.scoreboard = Scoreboard {
            score: 5,
            high_score: 3,
        };
        s.snake.grow();
        s.snake.set_heading(Heading::Down);
        s.reset();
        assert_eq!(s.high_score(), 5);
        assert_eq!(s.score(), 0);
        assert_eq!(s.snake.length(), 1);
        assert_eq!(s.snake.head(), s.grid.center());
        assert_eq!(s.snake.heading(), Heading::Down);
        assert!(in_margin(s.apple.pos, &s.grid));
        assert!(in_margin(s.poison.pos, &s.grid));
    }

    #[test]
    fn test_snapshot_copies_state() {
        let audio = Sounds::default();
        let mut s = session();
        s.apple.pos = s.snake.head();
        s.tick(&audio);

        let snap = s.snapshot();
        assert_eq!(snap.segments, s.snake.segments().to_vec());
        assert_eq!(snap.score, 1);
        assert_eq!(snap.cell_size, 48);
        assert_eq!((snap.columns, snap.rows), (40, 22));
        assert_eq!(snap.tick, 1);

        // Later ticks do not touch an earlier copy
        s.tick(&audio);
        assert_eq!(snap.head(), Some(IVec2::new(21, 11)));
    }

    #[test]
    fn test_read_accessors() {
        let audio = Sounds::default();
        let mut s = session();
        s.respawn_snake_at(IVec2::new(3, 4));
        s.heading_cell().set(Heading::Down);
        s.apple.pos = IVec2::new(3, 4);
        s.tick(&audio);

        assert_eq!(s.head(), IVec2::new(3, 5));
        assert_eq!(s.segments(), &[IVec2::new(3, 5), IVec2::new(3, 4)]);
        assert_eq!(s.snake_length(), 2);
        assert_eq!(s.heading(), Heading::Down);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_cloned_session_steers_alone() {
        let audio = Sounds::default();
        let mut a = session();
        let mut b = a.clone();
        let steer_b = b.heading_cell();
        steer_b.set(Heading::Up);

        assert_eq!(a.heading(), Heading::Right);
        a.tick(&audio);
        b.tick(&audio);
        assert_eq!(a.head(), IVec2::new(21, 11));
        assert_eq!(b.head(), IVec2::new(20, 10));
    }

    #[test]
    fn test_same_seed_same_game() {
        let audio = crate::audio::Silent;
        let grid = GridGeometry::new(1920, 1080, 40).unwrap();
        let mut a = GameSession::new(grid, ItemPlacer::seeded(77));
        let mut b = GameSession::new(grid, ItemPlacer::seeded(77));
        for i in 0..200 {
            if i % 7 == 0 {
                a.snake.set_heading(a.snake.heading().clockwise());
                b.snake.set_heading(b.snake.heading().clockwise());
            }
            assert_eq!(a.tick(&audio), b.tick(&audio));
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
