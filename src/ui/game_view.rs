use super::App;
use crate::game::{ConnectGame, GameOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Each cell is drawn three characters wide.
const CELL_WIDTH: usize = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let board_height = app.game().num_rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, app.game().num_cols(), chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let current = app.current_player();

    let (status, color) = match game.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} ({}) wins!", app.side_name(player), player),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("It's a tie!".to_string(), Color::White),
        None => (
            format!("Turn: {} ({})", app.side_name(current), current),
            player_color(current),
        ),
    };

    let title = format!(
        "Connect {}  |  {}x{}",
        game.n(),
        game.num_rows(),
        game.num_cols()
    );
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let cols = game.num_cols();
    let selected = app.selected_column();
    let inner_width = cols * CELL_WIDTH + 1;
    let mut lines = Vec::new();

    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^width$}", col + 1, width = CELL_WIDTH);
        if col == selected {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    for row in game.grid() {
        let mut row_spans = vec![Span::raw("  ║")];
        for cell in row {
            let (symbol, color) = match cell {
                None => (" . ", Color::DarkGray),
                Some(player) => (" ● ", player_color(player)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, cols: usize, area: Rect) {
    let mut text = String::from("←/→: Move  |  Enter: Drop  |  ");
    if cols <= 10 {
        text.push_str("1-9,0: Drop in column  |  ");
    }
    text.push_str("R: Restart  |  Q: Quit");

    let controls = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
