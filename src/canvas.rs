use crate::math::Vector2;
use crossterm::style::Color;

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: f64 = 2.0;

/// A single character cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Reset,
    };
}

/// Character cell framebuffer that the face is painted into
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Blank canvas of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Changes the size, blanking every cell
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width * height];
    }

    /// Blanks every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cell at `(x, y)`, if inside the canvas
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero
        self.cells.chunks(self.width.max(1))
    }

    /// Sets one cell; coordinates outside the canvas are ignored
    pub fn plot(&mut self, x: isize, y: isize, glyph: char, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Cell { glyph, color };
        }
    }

    /// Draws a line between two points using Bresenham's algorithm
    pub fn draw_line(&mut self, from: Vector2, to: Vector2, glyph: char, color: Color) {
        let (mut x0, mut y0, x1, y1) = (
            from[0].round() as isize,
            from[1].round() as isize,
            to[0].round() as isize,
            to[1].round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.plot(x0, y0, glyph, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draws an ellipse outline with the given horizontal and vertical radii
    pub fn draw_ellipse(&mut self, center: Vector2, rx: f64, ry: f64, glyph: char, color: Color) {
        // Enough samples that neighbouring points land in adjacent cells
        let samples = ((rx.max(ry) * std::f64::consts::TAU * 2.0).ceil() as usize).max(8);
        for i in 0..samples {
            let angle = i as f64 / samples as f64 * std::f64::consts::TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            self.plot(
                (center[0] + rx * sin_a).round() as isize,
                (center[1] - ry * cos_a).round() as isize,
                glyph,
                color,
            );
        }
    }

    /// Writes text starting at `(x, y)`, clipped to the canvas
    pub fn put_text(&mut self, x: isize, y: isize, text: &str, color: Color) {
        for (i, glyph) in text.chars().enumerate() {
            self.plot(x + i as isize, y, glyph, color);
        }
    }

    /// Writes text centered on a point
    pub fn put_text_centered(&mut self, center: Vector2, text: &str, color: Color) {
        let len = text.chars().count() as f64;
        let x = (center[0] - (len - 1.0) / 2.0).round() as isize;
        self.put_text(x, center[1].round() as isize, text, color);
    }
}

/// Maps face coordinates (`[-1, 1]` on both axes, y up) to canvas cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    center: Vector2,
    /// Face radius in rows
    radius: f64,
}

impl Viewport {
    /// Largest face that fits the canvas, leaving a one-cell margin
    pub fn fit(width: usize, height: usize) -> Self {
        let center = [(width as f64 - 1.0) / 2.0, (height as f64 - 1.0) / 2.0];
        let radius = (center[1] - 1.0).min((center[0] - 1.0) / CELL_ASPECT).max(0.0);
        Viewport { center, radius }
    }

    /// Center of the face in cell coordinates
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Vertical radius in rows
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Horizontal radius in columns
    pub fn radius_x(&self) -> f64 {
        self.radius * CELL_ASPECT
    }

    /// Cell coordinates of a face point
    pub fn to_screen(&self, point: Vector2) -> Vector2 {
        [
            self.center[0] + point[0] * self.radius_x(),
            self.center[1] - point[1] * self.radius,
        ]
    }
}
