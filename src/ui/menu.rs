use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const CONTROLS_HINT: &str = "Arrows/WASD steer  [Q]/[Esc] quit";

/// Draws the welcome screen.
pub fn render_welcome_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = [
        ("Welcome to grid-snake", title_style()),
        ("", Style::new()),
        ("Press any key to start...", Style::new().fg(Color::White)),
        ("", Style::new()),
        (CONTROLS_HINT, Style::new().fg(Color::DarkGray)),
    ];
    render_popup(frame, area, " grid-snake ", &lines);
}

/// Draws the game-over screen over a cleared frame.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let score_text = format!("Score: {score}");
    let lines = [
        ("Game Over", title_style()),
        ("", Style::new()),
        (score_text.as_str(), Style::new().fg(Color::White)),
        ("", Style::new()),
        ("Press any key to restart...", Style::new().fg(Color::White)),
        ("[Q]/[Esc] quit", Style::new().fg(Color::DarkGray)),
    ];
    render_popup(frame, area, " game over ", &lines);
}

fn title_style() -> Style {
    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: &[(&str, Style)]) {
    frame.render_widget(Clear, area);

    let (width, height) = popup_size(lines.iter().map(|(text, _)| *text));
    let popup = centered_popup(area, width, height);

    let body: Vec<Line<'_>> = lines
        .iter()
        .map(|(text, style)| Line::styled(*text, *style))
        .collect();
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

/// Border plus one column of padding on each side around the widest line.
fn popup_size<'a>(lines: impl Iterator<Item = &'a str> + Clone) -> (u16, u16) {
    let widest = lines.clone().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let width = u16::try_from(widest + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.count() + 2).unwrap_or(u16::MAX);
    (width, height)
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{centered_popup, popup_size, render_game_over_menu, render_welcome_menu};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn popup_fits_widest_line() {
        let lines = ["Game Over", "Press any key to restart..."];
        assert_eq!(popup_size(lines.into_iter()), (31, 4));
    }

    #[test]
    fn popup_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 40, 10);

        assert_eq!(centered_popup(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_popup(area, 80, 20), area);
    }

    #[test]
    fn game_over_screen_shows_score() {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).expect("test terminal");

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_game_over_menu(frame, area, 70);
            })
            .expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Score: 70"));
        assert!(text.contains("Press any key to restart..."));
    }

    #[test]
    fn welcome_screen_prompts_for_key() {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).expect("test terminal");

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_welcome_menu(frame, area);
            })
            .expect("draw");

        assert!(screen_text(&terminal).contains("Press any key to start..."));
    }
}
