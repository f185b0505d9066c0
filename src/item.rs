use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::warn;

use crate::body::Body;
use crate::config::{ITEM_PALETTE, MAX_RANDOM_SPAWN_ATTEMPTS, Rgb};
use crate::grid::Grid;
use crate::segment::Position;

/// Failure to place a new item.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    #[error("no free cell left inside the {size}x{size} grid")]
    OutOfSpace { size: u16 },
}

/// Collectible currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Item {
    pub position: Position,
    pub color: Rgb,
}

impl Item {
    #[must_use]
    pub fn new(position: Position, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Places items on free interior cells.
#[derive(Debug, Clone)]
pub struct ItemSpawner {
    rng: StdRng,
}

impl ItemSpawner {
    /// Creates a spawner seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic spawner for tests and reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawns an item on a cell inside the wall ring that `body` does not cover.
    pub fn spawn(&mut self, body: &Body, grid: Grid) -> Result<Item, SpawnError> {
        let position = spawn_position(&mut self.rng, body, grid)?;
        let color = ITEM_PALETTE
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(ITEM_PALETTE[0]);

        Ok(Item::new(position, color))
    }
}

/// Picks a uniformly random free interior cell.
///
/// Random sampling is tried a bounded number of times; after that every free
/// cell is enumerated so a nearly full board still terminates.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    body: &Body,
    grid: Grid,
) -> Result<Position, SpawnError> {
    let last = i32::from(grid.size()) - 1;
    if last < 2 {
        return Err(SpawnError::OutOfSpace { size: grid.size() });
    }

    for _ in 0..MAX_RANDOM_SPAWN_ATTEMPTS {
        let position = Position {
            x: rng.gen_range(1..last),
            y: rng.gen_range(1..last),
        };
        if !body.occupies(position) {
            return Ok(position);
        }
    }

    let candidates: Vec<Position> = grid
        .interior_cells()
        .filter(|cell| !body.occupies(*cell))
        .collect();
    warn!(
        free_cells = candidates.len(),
        "random item placement exhausted, enumerating free cells"
    );

    candidates
        .choose(rng)
        .copied()
        .ok_or(SpawnError::OutOfSpace { size: grid.size() })
}
