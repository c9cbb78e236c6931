//! Render pass: layout plus drawing side effects.

use quill_buffer::GapBuffer;

use crate::layout::{compute, LayoutConfig};
use crate::surface::DrawSurface;

/// Walks a buffer's logical content and feeds positioned glyphs to a
/// drawing surface, tracking the content's bounding size.
///
/// Every pass is a full traversal of the buffer - there is no partial
/// or virtualized rendering of only the visible region. The buffer is
/// consumed through its gap-skipping char iterator, so no intermediate
/// string is built.
#[derive(Debug)]
pub struct LayoutRenderer {
    config: LayoutConfig,
    /// Content width of the last pass (maximum pen x).
    width: f32,
    /// Content height of the last pass (accumulated line advances).
    height: f32,
}

impl LayoutRenderer {
    /// Creates a renderer with the given layout configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns the layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Content width computed by the last render pass.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Content height computed by the last render pass.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Renders the full buffer contents at origin `(x0, y0)`.
    ///
    /// Clears the region the previous pass covered (skipped while the
    /// region is still zero-area), sets the font once, then draws every
    /// glyph the layout emits. The stored width/height are overwritten
    /// with the new bounds.
    pub fn render(&mut self, buf: &GapBuffer, x0: f32, y0: f32, surface: &mut dyn DrawSurface) {
        if self.width * self.height > 0.0 {
            surface.clear_region(self.width, self.height);
        }
        surface.set_font(self.config.font_size, &self.config.font_family);

        let layout = compute(buf.chars(), x0, y0, &self.config);
        for glyph in &layout.glyphs {
            surface.draw_glyph(glyph.ch, glyph.x, glyph.y);
        }

        self.width = layout.width;
        self.height = layout.height;
        tracing::debug!(width = self.width, height = self.height, "render pass complete");
    }
}
