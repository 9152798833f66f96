use crate::arrow::Direction;
use crate::canvas::Canvas;
use crate::error::ClockError;
use crate::face::{paint, Style};
use crate::state::ClockState;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    SetTitle,
};
use crossterm::{execute, queue};
use std::io::{self, Write};

pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 10;
const FALLBACK_SIZE: (u16, u16) = (80, 24);
const WINDOW_TITLE: &str = "Clock";

/// Startup options
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub hour: u32,
    pub minute: u32,
    pub style: Style,
    pub debug: bool,
}

/// What the event loop should do after a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Redraw,
    Ignore,
    Quit,
}

/// Applies a key press to the clock state
pub fn handle_key(state: &mut ClockState, key: KeyEvent) -> Control {
    if key.kind == KeyEventKind::Release {
        return Control::Ignore;
    }
    match key.code {
        KeyCode::Right => {
            state.nudge(Direction::Forward);
            Control::Redraw
        }
        KeyCode::Left => {
            state.nudge(Direction::Backward);
            Control::Redraw
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
        KeyCode::Char('d') | KeyCode::Char('D') => {
            state.toggle_debug();
            Control::Redraw
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.reset();
            Control::Redraw
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Control::Quit,
        _ => Control::Ignore,
    }
}

/// Current terminal size as `(cols, rows)`
pub fn terminal_size() -> (u16, u16) {
    match termsize::get() {
        Some(size) if size.cols > 0 && size.rows > 0 => (size.cols, size.rows),
        _ => terminal::size()
            .ok()
            .filter(|&(cols, rows)| cols > 0 && rows > 0)
            .unwrap_or(FALLBACK_SIZE),
    }
}

/// Puts the terminal into raw mode on the alternate screen and restores it on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, SetTitle(WINDOW_TITLE)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Paints the face, or a notice while the canvas is below the minimum size
pub fn render(canvas: &mut Canvas, state: &ClockState, style: Style) {
    if canvas.width() < usize::from(MIN_COLS) || canvas.height() < usize::from(MIN_ROWS) {
        canvas.clear();
        canvas.put_text(0, 0, "Terminal too small", Color::Reset);
        canvas.put_text(0, 1, &format!("need {}x{}", MIN_COLS, MIN_ROWS), Color::Reset);
        return;
    }
    paint(canvas, state, style);
}

/// Writes the canvas to the terminal, one row at a time
fn present(out: &mut impl Write, canvas: &Canvas) -> io::Result<()> {
    for (y, row) in canvas.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        let mut current = None;
        for cell in row {
            if current != Some(cell.color) {
                queue!(out, SetForegroundColor(cell.color))?;
                current = Some(cell.color);
            }
            queue!(out, Print(cell.glyph))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Runs the interactive clock until the user quits
pub fn run(config: Config) -> Result<(), ClockError> {
    let (cols, rows) = terminal_size();
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(ClockError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let mut state = ClockState::with_step(config.hour, config.minute, config.style.step_minutes());
    state.debug = config.debug;
    let mut canvas = Canvas::new(cols as usize, rows as usize);
    tracing::info!(
        "Starting at {:02}:{:02} on a {}x{} terminal ({:?} style)",
        config.hour,
        config.minute,
        cols,
        rows,
        config.style
    );

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    render(&mut canvas, &state, config.style);
    present(&mut stdout, &canvas)?;

    loop {
        match event::read()? {
            Event::Key(key) => match handle_key(&mut state, key) {
                Control::Redraw => {
                    render(&mut canvas, &state, config.style);
                    present(&mut stdout, &canvas)?;
                }
                Control::Quit => break,
                Control::Ignore => {}
            },
            Event::Resize(cols, rows) => {
                tracing::debug!("Terminal resized to {}x{}", cols, rows);
                canvas.resize(cols as usize, rows as usize);
                execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                render(&mut canvas, &state, config.style);
                present(&mut stdout, &canvas)?;
            }
            _ => {}
        }
    }

    let (hour, minute) = state.time_shown();
    tracing::info!("Exiting showing {:02}:{:02}", hour, minute);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_nudge_the_hands() {
        let mut state = ClockState::new(12, 0);
        assert_eq!(handle_key(&mut state, press(KeyCode::Right)), Control::Redraw);
        assert_eq!(handle_key(&mut state, press(KeyCode::Right)), Control::Redraw);
        assert_eq!(state.time_shown(), (12, 2));
        assert_eq!(handle_key(&mut state, press(KeyCode::Left)), Control::Redraw);
        assert_eq!(state.time_shown(), (12, 1));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ClockState::new(12, 0);
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, key), Control::Ignore);
        assert_eq!(state.steps(), 0);
    }

    #[test]
    fn debug_and_reset_keys() {
        let mut state = ClockState::new(8, 20);
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('d'))), Control::Redraw);
        assert!(state.debug);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('R'))), Control::Redraw);
        assert_eq!(state.time_shown(), (8, 20));
        assert!(state.debug);
    }

    #[test]
    fn quit_keys() {
        let mut state = ClockState::new(1, 0);
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(handle_key(&mut state, press(code)), Control::Quit);
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), Control::Quit);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut state = ClockState::new(1, 0);
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Char('c'), KeyCode::Enter] {
            assert_eq!(handle_key(&mut state, press(code)), Control::Ignore);
        }
        assert_eq!(state.steps(), 0);
    }

    #[test]
    fn present_writes_every_glyph() {
        let mut canvas = Canvas::new(3, 2);
        canvas.put_text(0, 0, "ab", crossterm::style::Color::Red);
        canvas.put_text(0, 1, "cde", crossterm::style::Color::Reset);
        let mut out = Vec::new();
        present(&mut out, &canvas).unwrap();
        let text = String::from_utf8(out).unwrap();
        for glyph in ["a", "b", "c", "d", "e"] {
            assert!(text.contains(glyph));
        }
    }

    #[test]
    fn terminal_size_is_never_zero() {
        let (cols, rows) = terminal_size();
        assert!(cols > 0 && rows > 0);
    }

    #[test]
    fn shrunken_canvas_shows_a_notice() {
        let state = ClockState::new(3, 0);
        let mut canvas = Canvas::new(15, 6);
        render(&mut canvas, &state, Style::Classic);
        let first: String = canvas.rows().next().unwrap().iter().map(|c| c.glyph).collect();
        assert_eq!(first, "Terminal too sm");
        let hands = canvas.rows().flatten().filter(|c| c.color == Color::Red).count();
        assert_eq!(hands, 0);

        canvas.resize(usize::from(MIN_COLS), usize::from(MIN_ROWS));
        render(&mut canvas, &state, Style::Classic);
        let hands = canvas.rows().flatten().filter(|c| c.color == Color::Red).count();
        assert!(hands > 0);
    }

    #[test]
    fn retro_arrow_key_jumps_five_minutes() {
        let mut state = ClockState::with_step(6, 0, Style::Retro.step_minutes());
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.time_shown(), (6, 5));
        handle_key(&mut state, press(KeyCode::Left));
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.time_shown(), (5, 55));
    }
}
