//! Gap buffer implementation for efficient text editing.
//!
//! The buffer keeps its logical content in two contiguous runs: a lead
//! region at the low end of storage and a tail region at the high end,
//! with an unused gap between them. The cursor sits at the lead/gap
//! boundary, so insertion and deletion at the cursor are O(1) amortized
//! and cursor motion is O(distance) - cheap for the localized edits an
//! editor actually performs.

const GROWTH_FACTOR: usize = 2;

/// A gap buffer for efficient text storage and manipulation.
///
/// Storage layout is `[lead region | gap | tail region]`. The logical
/// content is the lead region followed by the tail region, in storage
/// order; the gap slots hold no meaningful value. The cursor position
/// is always `lead` - every insertion lands at the lead/gap boundary.
///
/// No operation fails: moves and deletions past either end are clamped
/// to what actually exists, and insertion grows the storage (by exact
/// doubling) whenever the gap closes.
#[derive(Debug)]
pub struct GapBuffer {
    /// Backing storage, always exactly `capacity` slots long.
    data: Vec<char>,
    /// Count of characters logically before the cursor, at `[0, lead)`.
    lead: usize,
    /// Count of characters logically after the cursor, at
    /// `[capacity - tail, capacity)`.
    tail: usize,
    /// Selection coordinate pairs. Reserved for a future selection
    /// feature; nothing populates this yet.
    #[allow(dead_code)]
    selections: Vec<(usize, usize)>,
    /// Visible-range marker. Reserved for future viewport tracking.
    #[allow(dead_code)]
    view: [usize; 2],
}

impl GapBuffer {
    /// Creates an empty gap buffer with the given capacity.
    ///
    /// A capacity of zero is clamped to one so that doubling always
    /// makes progress.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec!['\0'; capacity],
            lead: 0,
            tail: 0,
            selections: Vec::new(),
            view: [0, 0],
        }
    }

    /// Creates a gap buffer holding the given text, cursor at the end.
    pub fn from_str(text: &str) -> Self {
        let mut buf = Self::new(text.chars().count());
        buf.insert(text);
        buf
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.lead + self.tail
    }

    /// Returns true if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cursor position in logical coordinates.
    pub fn cursor(&self) -> usize {
        self.lead
    }

    /// Returns the total number of storage slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the current gap size.
    fn gap_len(&self) -> usize {
        self.capacity() - self.lead - self.tail
    }

    /// Shifts the cursor by `distance` logical positions.
    ///
    /// Positive distances advance over upcoming characters (tail into
    /// lead), negative distances retreat over preceding ones (lead into
    /// tail). Motion stops silently once the chosen region is empty, so
    /// the cursor always ends up in `[0, len]`.
    pub fn move_cursor(&mut self, distance: isize) {
        let magnitude = distance.unsigned_abs();

        if distance > 0 {
            let steps = magnitude.min(self.tail);
            for _ in 0..steps {
                self.data[self.lead] = self.data[self.capacity() - self.tail];
                self.lead += 1;
                self.tail -= 1;
            }
        } else {
            let steps = magnitude.min(self.lead);
            for _ in 0..steps {
                self.lead -= 1;
                self.tail += 1;
                let dst = self.capacity() - self.tail;
                self.data[dst] = self.data[self.lead];
            }
        }
    }

    /// Moves the cursor to an absolute logical position.
    ///
    /// Expressed as a relative move from the current cursor, so the
    /// same clamping applies: positions past the end stop at the end.
    pub fn jump(&mut self, location: usize) {
        self.move_cursor(location as isize - self.lead as isize);
    }

    /// Places a single character at the cursor.
    ///
    /// Grows the storage first if the gap has closed. This is the only
    /// primitive that writes into the lead region.
    pub fn fill(&mut self, ch: char) {
        if self.lead + self.tail == self.capacity() {
            self.expand();
        }
        self.data[self.lead] = ch;
        self.lead += 1;
    }

    /// Inserts a string at the cursor, character by character.
    ///
    /// Empty input is a no-op. Each character independently triggers
    /// growth if needed; no look-ahead batching.
    pub fn insert(&mut self, text: &str) {
        for ch in text.chars() {
            self.fill(ch);
        }
    }

    /// Deletes up to `|distance|` characters adjacent to the cursor.
    ///
    /// Negative distances delete before the cursor (backspace),
    /// positive distances delete after it (forward delete). Requests
    /// exceeding what exists in the chosen direction are clamped. No
    /// characters move; the gap simply widens.
    pub fn remove(&mut self, distance: isize) {
        let magnitude = distance.unsigned_abs();

        if distance < 0 {
            self.lead -= magnitude.min(self.lead);
        } else {
            self.tail -= magnitude.min(self.tail);
        }
    }

    /// Doubles the storage capacity, preserving logical content.
    ///
    /// The lead region stays put and the tail region shifts to the top
    /// of the new storage; only the gap widens.
    pub fn expand(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * GROWTH_FACTOR;

        self.data.resize(new_capacity, '\0');
        if self.tail > 0 {
            self.data
                .copy_within(old_capacity - self.tail..old_capacity, new_capacity - self.tail);
        }
    }

    /// Returns the full logical content as a string.
    pub fn save(&self) -> String {
        self.chars().collect()
    }

    /// Returns an iterator over the logical content in order.
    ///
    /// Visits the lead region then the tail region, skipping the gap,
    /// without materializing the concatenated string. This is the read
    /// contract the layout pass consumes.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let split = self.capacity() - self.tail;
        self.data[..self.lead]
            .iter()
            .chain(self.data[split..].iter())
            .copied()
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.lead {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
