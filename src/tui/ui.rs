//! UI rendering for the keypad.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style, Modifier},
};
use crate::keypad::{Key, COLUMNS, KEYPAD_LAYOUT, ROWS};
use super::app::CalculatorApp;

/// Width of the calculator body in columns.
const BODY_WIDTH: u16 = 36;

/// Main draw function. Returns the keypad area for mouse hit-testing.
pub fn draw(frame: &mut Frame, app: &CalculatorApp) -> Rect {
    let area = centered(frame.area(), BODY_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(15),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_display(frame, chunks[0], app);
    draw_keypad(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_help(frame, chunks[3]);

    chunks[1]
}

/// Horizontally center a column of at most `width` cells.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Screen rectangle of every button inside `area`.
pub fn keypad_cells(area: Rect) -> Vec<(Key, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, ROWS as u32); ROWS])
        .split(area);

    let mut cells = Vec::new();
    for (row_area, row) in rows.iter().zip(KEYPAD_LAYOUT.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (col_area, key) in cols.iter().zip(row.iter()) {
            if let Some(key) = key {
                cells.push((*key, *col_area));
            }
        }
    }
    cells
}

/// Button under a screen position.
pub fn key_at_point(area: Rect, x: u16, y: u16) -> Option<Key> {
    keypad_cells(area).into_iter().find_map(|(key, r)| {
        let inside = x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height;
        inside.then_some(key)
    })
}

/// Draw the display with the pending operand above it.
fn draw_display(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let memory = match (app.calc.pending_operand(), app.calc.pending_operation()) {
        (Some(v), Some(op)) => format!("{} {}", crate::calc::format_number(v), op),
        _ => String::new(),
    };

    let content = vec![
        Line::from(Span::styled(memory, Style::default().fg(Color::DarkGray))).right_aligned(),
        Line::from(Span::styled(
            app.calc.display().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .right_aligned(),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Display ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the button grid.
fn draw_keypad(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let focused = app.focused_key();

    for (key, cell) in keypad_cells(area) {
        let is_focused = focused == Some(key);
        let border = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            key_style(key)
        };

        let button = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(key_style(key))
            .block(Block::default()
                .borders(Borders::ALL)
                .border_style(border));

        frame.render_widget(button, cell);
    }
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("←↑↓→: Move  Enter/Space: Press"),
        Line::from("Click: Press  q/Esc: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Button color by kind.
fn key_style(key: Key) -> Style {
    match key {
        Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
        Key::Clear => Style::default().fg(Color::Red),
        Key::Operator(_) | Key::Equals => Style::default().fg(Color::Magenta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_key_at_point() {
        let area = Rect::new(0, 0, 40, 20);
        // Top-left cell is AC, bottom-left is 0.
        assert_eq!(key_at_point(area, 1, 1), Some(Key::Clear));
        assert_eq!(key_at_point(area, 1, 18), Some(Key::Digit(0)));
        assert_eq!(key_at_point(area, 39, 18), None);
        assert_eq!(key_at_point(area, 50, 50), None);
    }

    #[test]
    fn test_keypad_cells_cover_all_keys() {
        let cells = keypad_cells(Rect::new(0, 0, 40, 20));
        assert_eq!(cells.len(), Key::ALL.len());
    }

    #[test]
    fn test_draw_shows_display() {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = CalculatorApp::new();
        for key in [Key::Digit(4), Key::Digit(2)] {
            app.press(key);
        }

        let mut keypad = Rect::default();
        terminal.draw(|frame| keypad = draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("42"));
        assert!(text.contains("AC"));
        assert_eq!(keypad.width, BODY_WIDTH);
    }
}
