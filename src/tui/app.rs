//! Keypad application state and logic.

use crate::calc::Calculator;
use crate::keypad::{self, Key, COLUMNS, ROWS};
use ratatui::layout::Rect;

/// Focus movement across the keypad grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keypad application state.
pub struct CalculatorApp {
    /// The calculator being driven.
    pub calc: Calculator,
    /// Focused grid cell `(row, col)`.
    pub focus: (usize, usize),
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
    /// Screen area of the keypad from the last draw, for mouse hit-testing.
    pub keypad_area: Rect,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
            focus: keypad::position_of(Key::Digit(0)).unwrap_or((0, 0)),
            should_quit: false,
            status: "Ready. Arrows move, Enter presses, q quits.".into(),
            keypad_area: Rect::default(),
        }
    }

    /// Key under the focus cursor.
    pub fn focused_key(&self) -> Option<Key> {
        keypad::key_at(self.focus.0, self.focus.1)
    }

    /// Press a button.
    pub fn press(&mut self, key: Key) {
        self.calc.press(key.event());
        if let Some(pos) = keypad::position_of(key) {
            self.focus = pos;
        }
        self.status = format!("Pressed {} ({})", key.label(), key.test_id());
    }

    /// Press the focused button.
    pub fn press_focused(&mut self) {
        if let Some(key) = self.focused_key() {
            self.press(key);
        }
    }

    /// Move focus one cell, skipping empty cells.
    pub fn move_focus(&mut self, dir: Direction) {
        let (row, col) = self.focus;
        let (row, col) = match dir {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(ROWS - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(COLUMNS - 1)),
        };

        if keypad::key_at(row, col).is_some() {
            self.focus = (row, col);
        } else if matches!(dir, Direction::Up | Direction::Down) {
            // Land on the nearest filled cell to the left in the new row.
            if let Some(c) = (0..col).rev().find(|&c| keypad::key_at(row, c).is_some()) {
                self.focus = (row, c);
            }
        }
    }

    /// Reset the calculator, as if `AC` were pressed.
    pub fn reset(&mut self) {
        self.press(Key::Clear);
        self.status = "Cleared.".into();
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the keypad in the terminal until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub fn run_keypad() -> std::io::Result<()> {
    use crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io::stdout;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    restore_after(
        || {
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            event_loop(&mut terminal)
        },
        || {
            stdout().execute(DisableMouseCapture)?;
            disable_raw_mode()?;
            stdout().execute(LeaveAlternateScreen)?;
            Ok(())
        },
    )
}

/// Run `body`, then `restore` whatever the outcome. The body's error wins.
fn restore_after<T>(
    body: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce() -> std::io::Result<()>,
) -> std::io::Result<T> {
    let result = body();
    let restored = restore();
    match result {
        Ok(value) => restored.map(|()| value),
        Err(e) => {
            if let Err(restore_err) = restored {
                tracing::error!(error = %restore_err, "failed to restore terminal");
            }
            Err(e)
        }
    }
}

/// Draw and dispatch input until the user quits.
fn event_loop<B: ratatui::backend::Backend>(terminal: &mut ratatui::Terminal<B>) -> std::io::Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
    use std::time::Duration;

    let mut app = CalculatorApp::new();
    tracing::info!("keypad started");

    loop {
        terminal.draw(|frame| {
            app.keypad_area = super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
                    KeyCode::Up => app.move_focus(Direction::Up),
                    KeyCode::Down => app.move_focus(Direction::Down),
                    KeyCode::Left => app.move_focus(Direction::Left),
                    KeyCode::Right => app.move_focus(Direction::Right),
                    _ => {}
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(key) = super::ui::key_at_point(app.keypad_area, mouse.column, mouse.row) {
                        app.press(key);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(display = app.calc.display(), "keypad closed");
    Ok(())
}
