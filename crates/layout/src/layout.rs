//! Pure layout computation for a monospace grid.
//!
//! For a monospace font, layout is trivial arithmetic:
//! - a printable character advances the pen by one cell width
//! - a tab advances it by a fixed multiple of the cell width
//! - a newline drops the pen one line and returns it to the left margin

/// Layout configuration for one pass.
///
/// An explicit value passed into every call - there is no ambient
/// font/tab state. The advance width is a parameter rather than a
/// derived fraction of the font size; callers measure (or pick) it.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Point size handed to the drawing surface.
    pub font_size: f32,
    /// Family name handed to the drawing surface.
    pub font_family: String,
    /// Horizontal advance of a single glyph cell.
    pub advance_width: f32,
    /// Vertical advance of one line.
    pub line_height: f32,
    /// Tab size in character cells.
    pub tab_size: usize,
}

impl LayoutConfig {
    /// Width of one tab stop: `tab_size` glyph cells.
    pub fn tab_stop_width(&self) -> f32 {
        self.tab_size as f32 * self.advance_width
    }
}

/// A single positioned glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

/// The result of one layout pass: glyph placements plus bounding size.
///
/// Transient - recomputed from scratch on every pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Every visible glyph, in traversal order.
    pub glyphs: Vec<Glyph>,
    /// Maximum pen x reached across the whole traversal.
    pub width: f32,
    /// Accumulated line advances: line count times line height.
    pub height: f32,
}

/// Lays out a character sequence starting at origin `(x0, y0)`.
///
/// The pen starts at `(x0, y0 + line_height)` - the first baseline sits
/// one line below the origin. Control characters:
/// - `\r` is consumed; no glyph, no advance
/// - `\n` emits no glyph, returns the pen to the left margin (`x0`) and
///   drops it one line
/// - `\t` emits no glyph and advances the pen by one tab stop
///
/// Everything else emits a glyph at the pen and advances one cell.
pub fn compute(
    chars: impl Iterator<Item = char>,
    x0: f32,
    y0: f32,
    config: &LayoutConfig,
) -> Layout {
    let mut glyphs = Vec::new();
    let mut x = x0;
    let mut y = y0 + config.line_height;
    let mut width = x;
    let mut lines = 1usize;

    for ch in chars {
        match ch {
            '\r' => {}
            '\n' => {
                y += config.line_height;
                x = x0;
                lines += 1;
            }
            '\t' => {
                x += config.tab_stop_width();
            }
            _ => {
                glyphs.push(Glyph { ch, x, y });
                x += config.advance_width;
            }
        }

        if x > width {
            width = x;
        }
    }

    Layout {
        glyphs,
        width,
        height: lines as f32 * config.line_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_config() -> LayoutConfig {
        LayoutConfig {
            font_size: 13.0,
            font_family: "monospace".to_string(),
            advance_width: 1.0,
            line_height: 1.0,
            tab_size: 2,
        }
    }

    #[test]
    fn test_tab_and_newline_placement() {
        // "a\tb\nc" on a 2-cell tab stop and 1-cell advance:
        // a at x=0, tab jumps to x=3, b at x=3, newline, c at x=0 one
        // line down.
        let layout = compute("a\tb\nc".chars(), 0.0, 0.0, &grid_config());

        assert_eq!(layout.glyphs.len(), 3);
        let (a, b, c) = (layout.glyphs[0], layout.glyphs[1], layout.glyphs[2]);

        assert_eq!(a.ch, 'a');
        assert_eq!(b.ch, 'b');
        assert_eq!(c.ch, 'c');

        assert!(a.x < b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(b.x, 3.0);

        assert_eq!(c.x, 0.0);
        assert_eq!(c.y, a.y + 1.0);

        assert_eq!(layout.height, 2.0);
    }

    #[test]
    fn test_carriage_return_is_consumed() {
        let layout = compute("ab\r\nc".chars(), 0.0, 0.0, &grid_config());
        let chars: Vec<char> = layout.glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
        // The \r neither advanced the pen nor broke the line on its own.
        assert_eq!(layout.glyphs[1].x, 1.0);
        assert_eq!(layout.glyphs[2], Glyph { ch: 'c', x: 0.0, y: 2.0 });
    }

    #[test]
    fn test_width_includes_trailing_advance() {
        let layout = compute("hello world".chars(), 0.0, 0.0, &grid_config());
        assert_eq!(layout.width, 11.0);
        assert_eq!(layout.height, 1.0);
    }

    #[test]
    fn test_width_is_max_across_lines() {
        let layout = compute("long line\nab".chars(), 0.0, 0.0, &grid_config());
        assert_eq!(layout.width, 9.0);
        assert_eq!(layout.height, 2.0);
    }

    #[test]
    fn test_empty_content() {
        let layout = compute("".chars(), 0.0, 0.0, &grid_config());
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.width, 0.0);
        // An empty buffer still occupies one line.
        assert_eq!(layout.height, 1.0);
    }

    #[test]
    fn test_origin_offsets_placements() {
        let layout = compute("a\nb".chars(), 10.0, 5.0, &grid_config());
        assert_eq!(layout.glyphs[0], Glyph { ch: 'a', x: 10.0, y: 6.0 });
        // Newline returns the pen to the left margin, not to x=0.
        assert_eq!(layout.glyphs[1], Glyph { ch: 'b', x: 10.0, y: 7.0 });
        assert_eq!(layout.width, 11.0);
        assert_eq!(layout.height, 2.0);
    }

    #[test]
    fn test_tab_at_line_start() {
        let layout = compute("\tx".chars(), 0.0, 0.0, &grid_config());
        assert_eq!(layout.glyphs.len(), 1);
        assert_eq!(layout.glyphs[0], Glyph { ch: 'x', x: 2.0, y: 1.0 });
        assert_eq!(layout.width, 3.0);
    }

    #[test]
    fn test_tab_stop_width_scales_with_advance() {
        let mut config = grid_config();
        config.advance_width = 7.0;
        config.tab_size = 4;
        assert_eq!(config.tab_stop_width(), 28.0);
    }

    #[test]
    fn test_trailing_newline_counts_a_line() {
        let layout = compute("a\n".chars(), 0.0, 0.0, &grid_config());
        assert_eq!(layout.height, 2.0);
        assert_eq!(layout.width, 1.0);
    }
}
