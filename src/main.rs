//! quill: demo harness driving the gap buffer and layout core.
//!
//! Replays a small editing session against a terminal-grid surface:
//! type a line, render, amend it, render, delete past the end, render.
//! The pauses between edits live here - the core itself has no timers.

mod term_surface;

use std::thread;
use std::time::Duration;

use quill_buffer::GapBuffer;
use quill_layout::{LayoutConfig, LayoutRenderer};
use tracing_subscriber::EnvFilter;

use crate::term_surface::TermSurface;

const EDIT_PAUSE: Duration = Duration::from_millis(200);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = LayoutConfig {
        font_size: 13.0,
        font_family: "monospace".to_string(),
        // One grid cell per glyph and per line on a terminal surface.
        advance_width: 1.0,
        line_height: 1.0,
        tab_size: 2,
    };
    let mut renderer = LayoutRenderer::new(config);
    let mut surface = TermSurface::new();

    let text = "hello world";
    let mut buf = GapBuffer::new(text.chars().count());

    buf.insert(text);
    show(&mut renderer, &buf, &mut surface);

    thread::sleep(EDIT_PAUSE);
    buf.move_cursor(-2);
    buf.insert(".");
    show(&mut renderer, &buf, &mut surface);

    thread::sleep(EDIT_PAUSE);
    // -5 would remove the 5 characters before the cursor; 5 removes the
    // next 5 (clamped to the 2 that exist).
    buf.remove(5);
    show(&mut renderer, &buf, &mut surface);
}

fn show(renderer: &mut LayoutRenderer, buf: &GapBuffer, surface: &mut TermSurface) {
    renderer.render(buf, 0.0, 0.0, surface);
    println!("{}", surface.frame());
    println!("-- {} x {}", renderer.width(), renderer.height());
}
