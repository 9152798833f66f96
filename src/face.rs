//! Clock face painting
//!
//! Clears the canvas and repaints rim, hour labels, minute ticks, both
//! hands and, when enabled, the debug overlay.

use crate::arrow::Arrow;
use crate::canvas::{Canvas, Viewport};
use crate::math::{face_point, Vector2};
use crate::state::ClockState;
use clap::ValueEnum;
use crossterm::style::Color;
use std::f64::consts::PI;

/// Distance of the hour labels from the center
const LABEL_SCALE: f64 = 0.85;
/// Minute ticks run from this radius out to the rim
const TICK_INNER_SCALE: f64 = 0.98;

static ARABIC: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
static ROMAN: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Visual variant of the face
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Arabic numerals, blue hour hand, red minute hand, one minute per key press
    #[default]
    Classic,
    /// Roman numerals, green hour hand, yellow minute hand, five minutes per key press
    Retro,
}

/// Colors and glyphs for one style
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub rim: Color,
    pub rim_glyph: char,
    pub tick: Color,
    pub tick_glyph: char,
    pub label: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub hub_glyph: char,
    pub labels: &'static [&'static str; 12],
}

impl Style {
    /// Clock minutes each key press moves the hands
    pub fn step_minutes(self) -> u32 {
        match self {
            Style::Classic => 1,
            Style::Retro => 5,
        }
    }

    /// Colors, glyphs and labels used to paint this style
    pub fn palette(self) -> Palette {
        match self {
            Style::Classic => Palette {
                rim: Color::Reset,
                rim_glyph: '.',
                tick: Color::Reset,
                tick_glyph: '\'',
                label: Color::Reset,
                hour_hand: Color::Blue,
                minute_hand: Color::Red,
                hub_glyph: 'o',
                labels: &ARABIC,
            },
            Style::Retro => Palette {
                rim: Color::DarkGrey,
                rim_glyph: '*',
                tick: Color::DarkGrey,
                tick_glyph: '+',
                label: Color::Grey,
                hour_hand: Color::Green,
                minute_hand: Color::Yellow,
                hub_glyph: '@',
                labels: &ROMAN,
            },
        }
    }
}

/// Repaints the whole face for the current state
pub fn paint(canvas: &mut Canvas, state: &ClockState, style: Style) {
    let palette = style.palette();
    let viewport = Viewport::fit(canvas.width(), canvas.height());
    canvas.clear();

    canvas.draw_ellipse(
        viewport.center(),
        viewport.radius_x(),
        viewport.radius(),
        palette.rim_glyph,
        palette.rim,
    );

    for minute in 0..60u32 {
        if minute % 5 == 0 {
            continue;
        }
        let angle = f64::from(minute) * PI / 30.0;
        canvas.draw_line(
            viewport.to_screen(face_point(angle, TICK_INNER_SCALE)),
            viewport.to_screen(face_point(angle, 1.0)),
            palette.tick_glyph,
            palette.tick,
        );
    }

    for (index, label) in palette.labels.iter().enumerate() {
        let hour = index as f64 + 1.0;
        let angle = hour * PI / 6.0;
        canvas.put_text_centered(
            viewport.to_screen(face_point(angle, LABEL_SCALE)),
            label,
            palette.label,
        );
    }

    draw_arrow(canvas, &viewport, &state.hour, palette.hour_hand);
    draw_arrow(canvas, &viewport, &state.minute, palette.minute_hand);

    let center = viewport.center();
    canvas.plot(
        center[0].round() as isize,
        center[1].round() as isize,
        palette.hub_glyph,
        Color::Reset,
    );

    if state.debug {
        paint_debug(canvas, state, &viewport);
    }
}

fn draw_arrow(canvas: &mut Canvas, viewport: &Viewport, arrow: &Arrow, color: Color) {
    let tip = viewport.to_screen(arrow.value());
    let center = viewport.center();
    let delta = [tip[0] - center[0], tip[1] - center[1]];
    canvas.draw_line(center, tip, shaft_glyph(delta), color);
    canvas.plot(
        tip[0].round() as isize,
        tip[1].round() as isize,
        head_glyph(arrow.angle()),
        color,
    );
}

/// Glyph that best follows a screen-space direction (y grows downwards)
pub fn shaft_glyph(delta: Vector2) -> char {
    // Compare in face units so cell aspect does not skew the choice
    let dx = delta[0] / crate::canvas::CELL_ASPECT;
    let dy = delta[1];
    let slope = if dx == 0.0 { f64::INFINITY } else { dy / dx };
    match slope {
        s if s.abs() > 2.414 => '|',
        s if s.abs() < 0.414 => '-',
        s if s > 0.0 => '\\',
        _ => '/',
    }
}

/// Arrowhead for a hand pointing `angle` radians clockwise from 12
pub fn head_glyph(angle: f64) -> char {
    let octant = ((angle / (PI / 4.0)).round() as i64).rem_euclid(8);
    match octant {
        0 => '^',
        1 | 5 => '/',
        2 => '>',
        3 | 7 => '\\',
        4 => 'v',
        _ => '<',
    }
}

fn paint_debug(canvas: &mut Canvas, state: &ClockState, viewport: &Viewport) {
    let (hour, minute) = state.time_shown();
    let lines = [
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Time: {:02}:{:02}", hour, minute),
        format!(
            "Hour: {:.4} rad  Minute: {:.4} rad",
            state.hour.angle(),
            state.minute.angle()
        ),
        format!("Steps: {}", state.steps()),
        format!(
            "Canvas: {}x{}  Radius: {:.1}",
            canvas.width(),
            canvas.height(),
            viewport.radius()
        ),
    ];
    for (row, line) in lines.iter().enumerate() {
        canvas.put_text(0, row as isize, line, Color::White);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrow::Direction;
    use pretty_assertions::assert_eq;

    fn row(canvas: &Canvas, y: usize) -> String {
        (0..canvas.width())
            .filter_map(|x| canvas.get(x, y).map(|cell| cell.glyph))
            .collect()
    }

    fn find(canvas: &Canvas, glyph: char, color: Color) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get(x, y) == Some(crate::canvas::Cell { glyph, color }) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    #[test]
    fn twelve_label_sits_above_center() {
        let mut canvas = Canvas::new(81, 41);
        let state = ClockState::new(6, 30);
        paint(&mut canvas, &state, Style::Classic);
        // Radius 19 rows, labels at 0.85 of it
        assert!(row(&canvas, 4).contains("12"));
    }

    #[test]
    fn retro_uses_roman_labels() {
        let mut canvas = Canvas::new(81, 41);
        let state = ClockState::new(6, 30);
        paint(&mut canvas, &state, Style::Retro);
        assert!(row(&canvas, 4).contains("XII"));
        assert!(!row(&canvas, 4).contains("12"));
    }

    #[test]
    fn three_o_clock_hands() {
        let mut canvas = Canvas::new(81, 41);
        let state = ClockState::new(3, 0);
        paint(&mut canvas, &state, Style::Classic);

        // Minute hand straight up from the hub
        assert_eq!(canvas.get(40, 15).map(|c| c.glyph), Some('|'));
        assert_eq!(find(&canvas, '^', Color::Red), vec![(40, 9)]);
        // Hour hand straight right
        assert_eq!(canvas.get(45, 20).map(|c| c.glyph), Some('-'));
        assert_eq!(find(&canvas, '>', Color::Blue), vec![(55, 20)]);
        // Hub drawn last
        assert_eq!(canvas.get(40, 20).map(|c| c.glyph), Some('o'));
    }

    #[test]
    fn minute_ticks_skip_label_positions() {
        let mut canvas = Canvas::new(81, 41);
        let state = ClockState::new(6, 30);
        paint(&mut canvas, &state, Style::Retro);
        // 48 ticks, some may merge at this resolution but most land separately
        let ticks = find(&canvas, '+', Color::DarkGrey).len();
        assert!(ticks >= 40, "only {ticks} tick cells");
        // Top of the rim is the 12 position, which has no tick
        assert_eq!(canvas.get(40, 1).map(|c| c.glyph), Some('*'));
    }

    #[test]
    fn nudge_changes_the_picture() {
        let mut state = ClockState::new(3, 0);
        let mut before = Canvas::new(81, 41);
        paint(&mut before, &state, Style::Classic);

        for _ in 0..15 {
            state.nudge(Direction::Forward);
        }
        let mut after = Canvas::new(81, 41);
        paint(&mut after, &state, Style::Classic);

        assert!(find(&after, '^', Color::Red).is_empty());
        assert_eq!(find(&after, '>', Color::Red).len(), 1);
        assert_ne!(row(&before, 9), row(&after, 9));
    }

    #[test]
    fn debug_overlay_lists_time() {
        let mut canvas = Canvas::new(81, 41);
        let mut state = ClockState::new(10, 7);
        state.toggle_debug();
        paint(&mut canvas, &state, Style::Classic);
        assert!(row(&canvas, 0).starts_with(env!("CARGO_PKG_NAME")));
        assert!(row(&canvas, 1).starts_with("Time: 10:07"));
        assert!(row(&canvas, 3).starts_with("Steps: 0"));
    }

    #[test]
    fn tiny_canvas_does_not_panic() {
        let state = ClockState::new(1, 1);
        for (w, h) in [(0, 0), (1, 1), (2, 3), (5, 2)] {
            let mut canvas = Canvas::new(w, h);
            paint(&mut canvas, &state, Style::Classic);
        }
    }

    #[test]
    fn glyph_choice() {
        assert_eq!(shaft_glyph([0.0, -5.0]), '|');
        assert_eq!(shaft_glyph([10.0, 0.0]), '-');
        assert_eq!(shaft_glyph([10.0, 5.0]), '\\');
        assert_eq!(shaft_glyph([10.0, -5.0]), '/');
        assert_eq!(head_glyph(0.0), '^');
        assert_eq!(head_glyph(PI / 2.0), '>');
        assert_eq!(head_glyph(PI), 'v');
        assert_eq!(head_glyph(3.0 * PI / 2.0), '<');
        assert_eq!(head_glyph(1.99 * PI), '^');
        assert_eq!(head_glyph(PI / 4.0), '/');
        assert_eq!(head_glyph(3.0 * PI / 4.0), '\\');
        assert_eq!(head_glyph(5.0 * PI / 4.0), '/');
        assert_eq!(head_glyph(7.0 * PI / 4.0), '\\');
    }

    #[test]
    fn diagonal_hand_head_follows_its_shaft() {
        let mut canvas = Canvas::new(81, 41);
        // Minute hand at 45 degrees
        let state = ClockState::new(12, 7);
        paint(&mut canvas, &state, Style::Classic);
        assert_eq!(find(&canvas, '>', Color::Red), vec![]);
        assert!(find(&canvas, '/', Color::Red).len() > 1);
    }

    #[test]
    fn retro_moves_five_minutes_per_press() {
        assert_eq!(Style::Classic.step_minutes(), 1);
        assert_eq!(Style::Retro.step_minutes(), 5);
    }
}
