use tracing::info;

use crate::clock::FrameClock;
use crate::error::GameError;
use crate::game::{GameState, GameStatus};
use crate::presenter::{Ack, Presenter};

/// What happened during one run of the program.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SessionSummary {
    pub rounds_finished: u32,
    pub best_score: u32,
}

/// Runs welcome screen, rounds and game-over screens until a quit request.
///
/// Each frame: wait on the clock, sample input, tick, and on a crash block on
/// the game-over screen before restarting.
pub fn run_session<P: Presenter>(
    presenter: &mut P,
    state: &mut GameState,
    clock: &mut FrameClock,
) -> Result<SessionSummary, GameError> {
    let mut summary = SessionSummary::default();

    if presenter.render_welcome()? == Ack::Quit {
        info!("quit from welcome screen");
        return Ok(summary);
    }
    info!("session started");
    presenter.render(state)?;

    loop {
        clock.wait();

        let input = presenter.poll_input()?;
        if input.quit {
            break;
        }

        state.tick(input.held.resolve())?;

        if state.status == GameStatus::Crashed {
            summary.rounds_finished += 1;
            summary.best_score = summary.best_score.max(state.score);

            if presenter.render_game_over(state.score)? == Ack::Quit {
                break;
            }
            state.restart()?;
        }

        presenter.render(state)?;
    }

    info!(
        rounds = summary.rounds_finished,
        best_score = summary.best_score,
        "session ended"
    );
    Ok(summary)
}
