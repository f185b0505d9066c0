use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HUD_MARGIN_X: u16 = 1;

/// Draws the score row and returns the area left for the board below it.
pub fn render_score(frame: &mut Frame<'_>, area: Rect, score: u32) -> Rect {
    let [score_row, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(score)).alignment(Alignment::Left),
        inset_horizontal(score_row, HUD_MARGIN_X),
    );

    board_area
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled("Score: ", Style::new().fg(Color::Gray)),
        Span::styled(
            score.to_string(),
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{inset_horizontal, score_line};

    #[test]
    fn score_line_reads_naturally() {
        assert_eq!(score_line(120).to_string(), "Score: 120");
    }

    #[test]
    fn inset_never_underflows() {
        let narrow = Rect::new(0, 0, 1, 1);
        assert_eq!(inset_horizontal(narrow, 3).width, 0);
        assert_eq!(inset_horizontal(Rect::new(2, 0, 10, 1), 1), Rect::new(3, 0, 8, 1));
    }
}
