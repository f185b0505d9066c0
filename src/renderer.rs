use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::config::{CELL_COLUMNS, GLYPH_CELL, GLYPH_HEAD, Rgb, SNAKE_COLOR, WALL_COLOR};
use crate::game::GameState;
use crate::grid::Grid;
use crate::segment::Position;
use crate::ui::hud::render_score;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let grid = state.grid();
    let area = frame.area();
    let board_area = render_score(frame, area, state.score);

    let Some(board) = board_rect(board_area, grid) else {
        frame.render_widget(
            Paragraph::new("Terminal too small, enlarge the window")
                .alignment(Alignment::Center)
                .style(Style::new().fg(Color::Red)),
            board_area,
        );
        return;
    };

    render_walls(frame, board, grid);
    let item_style = Style::new().fg(to_color(state.item.color));
    render_cell(frame, board, state.item.position, GLYPH_CELL, item_style);

    let body_style = Style::new().fg(to_color(SNAKE_COLOR));
    for segment in state.body.segments().iter().skip(1) {
        render_cell(frame, board, segment.position, GLYPH_CELL, body_style);
    }

    let head_style = Style::new()
        .fg(Color::Black)
        .bg(to_color(SNAKE_COLOR))
        .add_modifier(Modifier::BOLD);
    render_cell(frame, board, state.body.head().position, GLYPH_HEAD, head_style);
}

fn render_walls(frame: &mut Frame<'_>, board: Rect, grid: Grid) {
    let style = Style::new().fg(to_color(WALL_COLOR));
    let last = i32::from(grid.size()) - 1;

    for y in 0..=last {
        for x in 0..=last {
            let position = Position { x, y };
            if grid.is_wall(position) {
                render_cell(frame, board, position, GLYPH_CELL, style);
            }
        }
    }
}

fn render_cell(frame: &mut Frame<'_>, board: Rect, position: Position, glyph: &str, style: Style) {
    let Some((x, y)) = cell_to_terminal(board, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Centers the board inside `area`; `None` when it does not fit.
fn board_rect(area: Rect, grid: Grid) -> Option<Rect> {
    let width = grid.size().checked_mul(CELL_COLUMNS)?;
    let height = grid.size();
    if area.width < width || area.height < height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn cell_to_terminal(board: Rect, position: Position) -> Option<(u16, u16)> {
    let column = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let row = u16::try_from(position.y).ok()?;

    let x = board.x.checked_add(column)?;
    let y = board.y.checked_add(row)?;
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{board_rect, cell_to_terminal, render};
    use crate::config::{GLYPH_CELL, GRID_CELLS};
    use crate::game::GameState;
    use crate::grid::Grid;
    use crate::segment::Position;

    #[test]
    fn board_is_centered_and_cells_are_two_columns() {
        let area = Rect::new(0, 0, 80, 40);
        let board = board_rect(area, Grid::new(30)).expect("board fits");

        assert_eq!(board, Rect::new(10, 5, 60, 30));
        assert_eq!(cell_to_terminal(board, Position::new(0, 0)), Some((10, 5)));
        assert_eq!(cell_to_terminal(board, Position::new(29, 29)), Some((68, 34)));
        assert_eq!(cell_to_terminal(board, Position::new(30, 0)), None);
        assert_eq!(cell_to_terminal(board, Position::new(-1, 0)), None);
    }

    #[test]
    fn small_area_has_no_board() {
        assert!(board_rect(Rect::new(0, 0, 40, 20), Grid::new(30)).is_none());
    }

    #[test]
    fn frame_shows_score_and_walls() {
        let state = GameState::new_with_seed(Grid::new(GRID_CELLS), 1).expect("fresh board");
        let mut terminal = Terminal::new(TestBackend::new(64, 32)).expect("test terminal");

        terminal.draw(|frame| render(frame, &state)).expect("draw");

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..64_u16).map(|x| buffer[(x, 0_u16)].symbol().to_owned()).collect();
        assert!(first_row.contains("Score: 0"));

        let board = board_rect(Rect::new(0, 1, 64, 31), Grid::new(GRID_CELLS)).expect("fits");
        let corner = &buffer[(board.x, board.y)];
        assert_eq!(corner.symbol(), &GLYPH_CELL[..GLYPH_CELL.len() / 2]);
    }
}
