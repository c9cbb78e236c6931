//! quill-buffer: gap buffer text storage for the quill editor core.
//!
//! The main type is [`GapBuffer`], which owns the character storage and
//! the cursor position and supports localized edits at amortized O(1)
//! per character:
//! - Signed-distance cursor motion ([`GapBuffer::move_cursor`]) and
//!   absolute repositioning ([`GapBuffer::jump`])
//! - Insertion at the cursor ([`GapBuffer::insert`])
//! - Signed-distance deletion on either side of the cursor
//!   ([`GapBuffer::remove`])
//! - An ordered, gap-skipping traversal ([`GapBuffer::chars`]) and full
//!   snapshot ([`GapBuffer::save`]) for consumers such as the layout pass
//!
//! Nothing here fails: out-of-range motion and deletion clamp silently
//! to what exists, and storage grows by doubling whenever the gap closes.
//!
//! # Example
//!
//! ```
//! use quill_buffer::GapBuffer;
//!
//! let mut buf = GapBuffer::new(11);
//! buf.insert("hello world");
//! buf.move_cursor(-2);
//! buf.insert(".");
//! assert_eq!(buf.save(), "hello wor.ld");
//! ```

mod gap_buffer;

pub use gap_buffer::GapBuffer;
