use tracing::{debug, info};

use crate::body::Body;
use crate::config::{INITIAL_DIRECTION, SCORE_PER_ITEM, START_CELL};
use crate::error::GameError;
use crate::grid::Grid;
use crate::input::Direction;
use crate::item::{Item, ItemSpawner};

/// Round state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Crashed,
}

/// What ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CrashCause {
    Wall,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub item: Item,
    pub score: u32,
    pub status: GameStatus,
    pub crash_cause: Option<CrashCause>,
    pub tick_count: u64,
    grid: Grid,
    spawner: ItemSpawner,
}

impl GameState {
    /// Creates a fresh round with an entropy-seeded item spawner.
    pub fn new(grid: Grid) -> Result<Self, GameError> {
        Self::with_spawner(grid, ItemSpawner::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(grid: Grid, seed: u64) -> Result<Self, GameError> {
        Self::with_spawner(grid, ItemSpawner::from_seed(seed))
    }

    fn with_spawner(grid: Grid, mut spawner: ItemSpawner) -> Result<Self, GameError> {
        let body = Body::new(START_CELL, INITIAL_DIRECTION);
        let item = spawner.spawn(&body, grid)?;

        Ok(Self {
            body,
            item,
            score: 0,
            status: GameStatus::Playing,
            crash_cause: None,
            tick_count: 0,
            grid,
            spawner,
        })
    }

    /// Advances one tick, steering first when a direction is held.
    ///
    /// Checks run in order: wall, item, self. A wall hit ends the tick
    /// immediately. Does nothing while crashed.
    pub fn tick(&mut self, direction: Option<Direction>) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.tick_count += 1;
        if let Some(direction) = direction {
            self.body.steer(direction);
        }
        self.body.advance();

        let head = self.body.head().position;
        if self.grid.is_wall(head) {
            self.crash(CrashCause::Wall);
            return Ok(());
        }

        if head == self.item.position {
            self.body.grow();
            self.score += SCORE_PER_ITEM;
            self.item = self.spawner.spawn(&self.body, self.grid)?;
            debug!(
                score = self.score,
                length = self.body.len(),
                "item consumed"
            );
        }

        if self.body.has_self_overlap() {
            self.crash(CrashCause::SelfCollision);
        }

        Ok(())
    }

    /// Starts the next round after a crash has been acknowledged.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.score = 0;
        self.body.reset(START_CELL, INITIAL_DIRECTION);
        self.item = self.spawner.spawn(&self.body, self.grid)?;
        self.status = GameStatus::Playing;
        self.crash_cause = None;
        info!("round restarted");
        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn crash(&mut self, cause: CrashCause) {
        info!(
            ?cause,
            score = self.score,
            length = self.body.len(),
            tick = self.tick_count,
            "snake crashed"
        );
        self.status = GameStatus::Crashed;
        self.crash_cause = Some(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::{CrashCause, GameState, GameStatus};
    use crate::body::Body;
    use crate::config::{GRID_CELLS, ORANGE, START_CELL};
    use crate::grid::Grid;
    use crate::input::Direction;
    use crate::item::Item;
    use crate::segment::{Position, Segment};

    fn state(seed: u64) -> GameState {
        GameState::new_with_seed(Grid::new(GRID_CELLS), seed).expect("fresh board has room")
    }

    fn line(head: Position, direction: Direction, len: i32) -> Body {
        let (dx, dy) = direction.delta();
        Body::from_segments(
            (0..len)
                .map(|i| Segment::new(Position::new(head.x - dx * i, head.y - dy * i), direction))
                .collect(),
        )
    }

    #[test]
    fn new_round_starts_at_canonical_cell() {
        let state = state(1);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.body.head(), Segment::new(START_CELL, Direction::Down));
        assert!(!state.body.occupies(state.item.position));
    }

    #[test]
    fn wall_collision_sets_crashed() {
        let mut state = state(2);
        state.body = line(Position::new(1, 15), Direction::Left, 3);

        state.tick(None).expect("tick");

        assert_eq!(state.status, GameStatus::Crashed);
        assert_eq!(state.crash_cause, Some(CrashCause::Wall));
    }

    #[test]
    fn eating_item_scores_and_grows() {
        let mut state = state(3);
        state.body = line(Position::new(5, 5), Direction::Right, 1);
        state.item = Item::new(Position::new(6, 5), ORANGE);

        state.tick(None).expect("tick");

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 10);
        assert_eq!(state.body.len(), 2);
        assert_eq!(state.body.tail(), Segment::new(Position::new(5, 5), Direction::Right));
        assert!(!state.body.occupies(state.item.position));
    }

    #[test]
    fn self_collision_sets_crashed() {
        let mut state = state(4);
        // Segments 0 and 3 share a cell and a heading, so they stay stacked.
        state.body = Body::from_segments(vec![
            Segment::new(Position::new(6, 6), Direction::Right),
            Segment::new(Position::new(5, 6), Direction::Right),
            Segment::new(Position::new(5, 7), Direction::Up),
            Segment::new(Position::new(6, 6), Direction::Right),
        ]);
        state.item = Item::new(Position::new(20, 20), ORANGE);

        state.tick(None).expect("tick");

        assert_eq!(state.body.segments()[0].position, state.body.segments()[3].position);
        assert_eq!(state.status, GameStatus::Crashed);
        assert_eq!(state.crash_cause, Some(CrashCause::SelfCollision));
    }

    #[test]
    fn reversing_into_neck_crashes() {
        let mut state = state(5);
        state.body = line(Position::new(10, 10), Direction::Right, 3);
        state.item = Item::new(Position::new(20, 20), ORANGE);

        state.tick(Some(Direction::Left)).expect("tick");

        assert_eq!(state.status, GameStatus::Crashed);
        assert_eq!(state.crash_cause, Some(CrashCause::SelfCollision));
    }

    #[test]
    fn crashed_state_ignores_ticks() {
        let mut state = state(6);
        state.body = line(Position::new(1, 15), Direction::Left, 1);
        state.tick(None).expect("tick");
        let head = state.body.head();

        state.tick(Some(Direction::Up)).expect("tick");

        assert_eq!(state.body.head(), head);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn restart_clears_score_and_body() {
        let mut state = state(7);
        state.body = line(Position::new(5, 5), Direction::Right, 4);
        state.body.steer(Direction::Up);
        state.score = 40;
        state.status = GameStatus::Crashed;
        state.crash_cause = Some(CrashCause::Wall);

        state.restart().expect("restart");

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.crash_cause, None);
        assert_eq!(state.body.len(), 1);
        assert!(state.body.pending_turns().is_empty());
        assert_eq!(state.body.head(), Segment::new(START_CELL, Direction::Down));
        assert!(!state.body.occupies(state.item.position));
    }
}
