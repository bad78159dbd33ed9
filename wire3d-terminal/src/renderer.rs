/// Character-cell drawing surface for terminal rendering
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Color, DrawingSurface, Viewport};

/// Rasterizes stroked paths into a grid of line-drawing characters.
///
/// Screen coordinates are in model units; each cell covers
/// `cell_width x cell_height` of them.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    cell_width: f64,
    cell_height: f64,
    background: Color,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    stroke_color: Color,
    /// Subpaths of the current path; each is a run of connected vertices
    path: Vec<Vec<(f64, f64)>>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, cell_width: f64, cell_height: f64) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            cell_width,
            cell_height,
            background: Color::BLACK,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::BLACK; size],
            stroke_color: Color::BLACK,
            path: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        let size = width * height;
        self.width = width;
        self.height = height;
        self.char_buffer = vec![' '; size];
        self.color_buffer = vec![self.background; size];
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Character at a cell, for inspection
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.char_buffer[row * self.width + col])
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        let idx = row as usize * self.width + col as usize;
        // Crossing lines keep a marker instead of whichever glyph came last
        self.char_buffer[idx] = match self.char_buffer[idx] {
            ' ' => glyph,
            existing if existing == glyph => glyph,
            _ => '+',
        };
        self.color_buffer[idx] = self.stroke_color;
    }

    fn rasterize_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        if ![from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
            log::trace!("skipping non-finite segment {:?} -> {:?}", from, to);
            return;
        }

        let (x0, y0) = (from.0 / self.cell_width, from.1 / self.cell_height);
        let (x1, y1) = (to.0 / self.cell_width, to.1 / self.cell_height);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let glyph = line_glyph(dx, dy);

        // Guard against segments far outside the grid
        let limit = (self.width + self.height) as f64 * 4.0;
        let steps = dx.abs().max(dy.abs()).ceil().clamp(1.0, limit) as usize;
        let n = steps as f64;
        for i in 0..=steps {
            let i = i as f64;
            let col = (x0 + dx * i / n).floor() as i64;
            let row = (y0 + dy * i / n).floor() as i64;
            self.plot(col, row, glyph);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(term_color(self.background)))?;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(term_color(self.color_buffer[idx])))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawingSurface for AsciiRenderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width as f64 * self.cell_width,
            self.height as f64 * self.cell_height,
        )
    }

    fn clear(&mut self, background: Color) {
        self.background = background;
        self.char_buffer.fill(' ');
        self.color_buffer.fill(background);
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.path.last_mut() {
            if let Some(&first) = subpath.first() {
                subpath.push(first);
            }
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for subpath in &path {
            for pair in subpath.windows(2) {
                self.rasterize_line(pair[0], pair[1]);
            }
        }
        self.path = path;
    }
}

/// Pick a glyph from the slope of a segment in cell space (rows grow downward)
fn line_glyph(dx: f64, dy: f64) -> char {
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return '.';
    }
    let angle = dy.atan2(dx).to_degrees().rem_euclid(180.0);
    match angle {
        a if !(22.5..157.5).contains(&a) => '-',
        a if a < 67.5 => '\\',
        a if a < 112.5 => '|',
        _ => '/',
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::{draw_shape, Projection, Shape};

    fn row(renderer: &AsciiRenderer, r: usize) -> String {
        (0..renderer.width).filter_map(|c| renderer.cell(c, r)).collect()
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(line_glyph(5.0, 0.0), '-');
        assert_eq!(line_glyph(-5.0, 0.0), '-');
        assert_eq!(line_glyph(0.0, 3.0), '|');
        assert_eq!(line_glyph(2.0, 2.0), '\\');
        assert_eq!(line_glyph(2.0, -2.0), '/');
        assert_eq!(line_glyph(0.0, 0.0), '.');
    }

    #[test]
    fn test_viewport_in_model_units() {
        let renderer = AsciiRenderer::new(80, 24, 5.0, 10.0);
        assert_eq!(renderer.viewport(), Viewport::new(400.0, 240.0));
    }

    #[test]
    fn test_horizontal_stroke() {
        let mut renderer = AsciiRenderer::new(10, 3, 1.0, 1.0);
        renderer.clear(Color::BLACK);
        renderer.begin_path();
        renderer.move_to(1.0, 1.0);
        renderer.line_to(8.0, 1.0);
        renderer.stroke();
        assert_eq!(row(&renderer, 1), " -------- ");
        assert_eq!(row(&renderer, 0), "          ");
    }

    #[test]
    fn test_nothing_drawn_before_stroke() {
        let mut renderer = AsciiRenderer::new(10, 3, 1.0, 1.0);
        renderer.begin_path();
        renderer.move_to(0.0, 0.0);
        renderer.line_to(9.0, 0.0);
        assert_eq!(row(&renderer, 0), "          ");
    }

    #[test]
    fn test_square_outline() {
        // 200x200 square on a 40x40 grid of 10-unit cells spans cells 10..=30
        let mut renderer = AsciiRenderer::new(40, 40, 10.0, 10.0);
        renderer.clear(Color::BLACK);
        let square = Shape::rectangle(0.0, 0.0, 200.0, 200.0);
        draw_shape(&square, &Projection::orthographic(), &mut renderer).unwrap();

        assert_eq!(renderer.cell(20, 10), Some('-'));
        assert_eq!(renderer.cell(20, 30), Some('-'));
        assert_eq!(renderer.cell(10, 20), Some('|'));
        assert_eq!(renderer.cell(30, 20), Some('|'));
        assert_eq!(renderer.cell(10, 10), Some('+'));
        assert_eq!(renderer.cell(20, 20), Some(' '));
    }

    #[test]
    fn test_non_finite_segment_is_skipped() {
        let mut renderer = AsciiRenderer::new(10, 10, 1.0, 1.0);
        renderer.clear(Color::BLACK);
        renderer.begin_path();
        renderer.move_to(f64::INFINITY, 2.0);
        renderer.line_to(3.0, 3.0);
        renderer.stroke();
        assert!(renderer.char_buffer.iter().all(|c| *c == ' '));
    }

    #[test]
    fn test_draw_writes_every_cell() {
        let mut renderer = AsciiRenderer::new(4, 2, 1.0, 1.0);
        renderer.clear(Color::BLACK);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 1);
    }
}
