use serde::{Deserialize, Serialize};

use crate::input::Direction;
use crate::segment::Position;

/// 24-bit color carried by items and board elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Number of cells along each axis of the square board.
pub const GRID_CELLS: u16 = 30;

/// Terminal columns used to draw one cell so cells look square.
pub const CELL_COLUMNS: u16 = 2;

/// Upper bound on logical ticks per second.
pub const TICKS_PER_SECOND: u32 = 10;

/// Fixed delay inserted before every tick, in milliseconds.
pub const FRAME_DELAY_MS: u64 = 50;

/// Points granted per consumed item.
pub const SCORE_PER_ITEM: u32 = 10;

/// Cell the snake head occupies at the start of every round.
pub const START_CELL: Position = Position { x: 10, y: 10 };

/// Heading of the snake at the start of every round.
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// Random placement attempts before the spawner enumerates free cells.
pub const MAX_RANDOM_SPAWN_ATTEMPTS: u32 = 64;

pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const PINK: Rgb = Rgb::new(255, 105, 180);

/// Colors an item can take, picked uniformly at spawn.
pub const ITEM_PALETTE: [Rgb; 4] = [ORANGE, YELLOW, BLUE, PINK];

/// Wall ring color.
pub const WALL_COLOR: Rgb = Rgb::new(139, 69, 19);

/// Snake body color.
pub const SNAKE_COLOR: Rgb = Rgb::new(0, 255, 0);

/// Glyph for one filled cell (two columns wide).
pub const GLYPH_CELL: &str = "██";

/// Glyph for the snake head; the two dots stand in for eyes.
pub const GLYPH_HEAD: &str = "▪▪";
