//! Drawing surface boundary.

/// The external surface a render pass draws onto.
///
/// The layout pass itself is pure; implementations of this trait own
/// the actual pixels (a canvas, a terminal grid, a test recorder).
/// Glyph rasterization and text measurement live behind it, out of the
/// core's scope.
pub trait DrawSurface {
    /// Clears the rectangle of the given size at the surface origin.
    fn clear_region(&mut self, width: f32, height: f32);

    /// Selects the font for subsequent glyphs.
    fn set_font(&mut self, size: f32, family: &str);

    /// Draws one glyph with its baseline pen position at `(x, y)`.
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32);
}
