use crate::error::GameError;
use crate::game::GameState;
use crate::input::InputFrame;

/// Answer to a blocking screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Ack {
    Continue,
    Quit,
}

/// Everything the session loop needs from the outside world.
///
/// The loop never looks at raw key events; it only sees the held-key set for
/// the current tick and whether a quit was requested.
pub trait Presenter {
    /// Samples the keys held right now.
    fn poll_input(&mut self) -> Result<InputFrame, GameError>;

    /// Draws the board, body, item and score.
    fn render(&mut self, state: &GameState) -> Result<(), GameError>;

    /// Shows the game-over screen and blocks until one key is pressed.
    fn render_game_over(&mut self, score: u32) -> Result<Ack, GameError>;

    /// Shows the welcome screen and blocks until one key is pressed.
    fn render_welcome(&mut self) -> Result<Ack, GameError>;
}
