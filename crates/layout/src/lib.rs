//! quill-layout: monospace glyph layout over a gap buffer.
//!
//! The layout pass walks a [`quill_buffer::GapBuffer`]'s logical
//! content exactly once, left to right, and turns it into positioned
//! glyphs on a monospace grid plus a bounding width/height. Tabs and
//! line breaks are handled during the walk; carriage returns are
//! consumed silently.
//!
//! The work is split in two so layout is testable without any drawing
//! backend:
//! - [`compute`] is the pure pass: characters in, [`Layout`] out.
//! - [`LayoutRenderer`] is the thin adapter that feeds the computed
//!   placements to a [`DrawSurface`] and remembers the bounding size.

mod layout;
mod renderer;
mod surface;

pub use layout::{compute, Glyph, Layout, LayoutConfig};
pub use renderer::LayoutRenderer;
pub use surface::DrawSurface;
