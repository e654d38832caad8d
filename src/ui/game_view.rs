use crate::game::{self, Board, GameState, Move, Piece, Pos, Shape, SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Cursor and selection overlay drawn on top of the board.
pub struct Highlights<'a> {
    pub cursor: Pos,
    pub selected: Option<Pos>,
    pub targets: &'a [Move],
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    highlights: &Highlights,
    human: game::Color,
    thinking: bool,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, human, thinking, chunks[0]);
    render_board(frame, game_state.board(), highlights, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn side_color(color: game::Color) -> Color {
    match color {
        game::Color::White => Color::White,
        game::Color::Black => Color::LightRed,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    human: game::Color,
    thinking: bool,
    area: Rect,
) {
    let to_move = game_state.to_move();
    let board = game_state.board();
    let who = if to_move == human { "you" } else { "AI" };

    let status = if game_state.is_terminal() {
        "Game Over".to_string()
    } else if thinking {
        format!("{} to move ({who}, thinking...)", to_move.name())
    } else {
        format!("{} to move ({who})", to_move.name())
    };
    let counts = format!(
        "  |  White {}  Black {}",
        board.capturable_count(game::Color::White),
        board.capturable_count(game::Color::Black)
    );

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            status,
            Style::default()
                .fg(side_color(to_move))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(counts),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Shield Tactics"),
    );

    frame.render_widget(header, area);
}

fn symbol(piece: Piece) -> &'static str {
    match piece.shape {
        Shape::Triangle => " ▲ ",
        Shape::Circle => " ● ",
        Shape::Square => " ■ ",
        Shape::Pentagon => " ⬟ ",
    }
}

fn render_board(frame: &mut Frame, board: &Board, highlights: &Highlights, area: Rect) {
    let mut lines = Vec::new();

    let mut col_line = vec![Span::raw("    ")];
    for col in 0..SIZE {
        col_line.push(Span::raw(format!(" {col} ")));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("   ╔══════════════════╗"));

    for row in 0..SIZE {
        let mut row_spans = vec![Span::raw(format!(" {row} ║"))];

        for col in 0..SIZE {
            let pos = Pos::new(row, col);
            let target = highlights.targets.iter().find(|m| m.to == pos);

            let (text, mut style) = match board.get(pos) {
                Some(piece) => (
                    symbol(piece),
                    Style::default()
                        .fg(side_color(piece.color))
                        .add_modifier(Modifier::BOLD),
                ),
                None if target.is_some() => (" ◆ ", Style::default().fg(Color::Green)),
                None => (" · ", Style::default().fg(Color::DarkGray)),
            };

            if target.is_some_and(|m| m.is_capture) {
                style = style.bg(Color::Red);
            }
            if highlights.selected == Some(pos) {
                style = style.bg(Color::Blue);
            }
            if highlights.cursor == pos {
                style = style.add_modifier(Modifier::REVERSED);
            }

            row_spans.push(Span::styled(text, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("   ╚══════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows: Move cursor  |  Enter: Select / Move  |  Backspace: Deselect  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::raw("▲ triangle  ● circle  ■ square  ⬟ pentagon (shield)   "),
        Span::styled("White", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::raw(" / "),
        Span::styled("Black", Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(game_state: &GameState, highlights: &Highlights) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render(
                    f,
                    game_state,
                    highlights,
                    game::Color::White,
                    false,
                    &Some("hello".to_string()),
                )
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_header_and_pieces() {
        let state = GameState::initial();
        let highlights = Highlights {
            cursor: Pos::new(0, 0),
            selected: None,
            targets: &[],
        };
        let text = rendered_text(&state, &highlights);
        assert!(text.contains("Shield Tactics"));
        assert!(text.contains("White to move"));
        assert!(text.contains("hello"));
        assert!(text.contains("⬟"));
    }

    #[test]
    fn test_render_marks_targets() {
        let state = GameState::initial();
        let targets = state.moves_from(Pos::new(1, 0)).unwrap();
        let highlights = Highlights {
            cursor: Pos::new(1, 0),
            selected: Some(Pos::new(1, 0)),
            targets: &targets,
        };
        let text = rendered_text(&state, &highlights);
        assert_eq!(text.matches('◆').count(), 3);
    }
}
