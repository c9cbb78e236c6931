//! Terminal-grid drawing surface for the demo.

use quill_layout::DrawSurface;

/// Paints glyphs into a row/column character grid.
///
/// Stands in for a real canvas: with an advance width and line height
/// of 1.0, layout coordinates map directly onto grid cells. The first
/// baseline sits at y = 1.0, so a glyph's row is `y - 1`.
pub struct TermSurface {
    rows: Vec<Vec<char>>,
}

impl TermSurface {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns the current grid as one string, one row per line.
    pub fn frame(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawSurface for TermSurface {
    fn clear_region(&mut self, _width: f32, _height: f32) {
        self.rows.clear();
    }

    fn set_font(&mut self, _size: f32, _family: &str) {
        // A char grid has exactly one font.
    }

    fn draw_glyph(&mut self, ch: char, x: f32, y: f32) {
        let col = x as usize;
        let row = (y as usize).saturating_sub(1);

        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let line = &mut self.rows[row];
        if line.len() <= col {
            line.resize(col + 1, ' ');
        }
        line[col] = ch;
    }
}
