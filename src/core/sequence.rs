use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// SequenceKind names an identifier sequence. Books and newspapers both draw
// from Publication so their ids never collide.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SequenceKind {
    Author,
    Publisher,
    Category,
    Publication,
}

impl SequenceKind {
    fn slot(&self) -> usize {
        match self {
            SequenceKind::Author => 0,
            SequenceKind::Publisher => 1,
            SequenceKind::Category => 2,
            SequenceKind::Publication => 3,
        }
    }
}

impl Display for SequenceKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SequenceKind::Author => write!(f, "Author"),
            SequenceKind::Publisher => write!(f, "Publisher"),
            SequenceKind::Category => write!(f, "Category"),
            SequenceKind::Publication => write!(f, "Publication"),
        }
    }
}

/// Per-kind monotonic id counters, owned by the catalog service.
///
/// Each counter holds the id the next allocation returns, starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct IdAllocator {
    next_ids: [i64; 4],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_ids: [1; 4],
        }
    }

    pub fn next(&mut self, kind: SequenceKind) -> i64 {
        let slot = kind.slot();
        let id = self.next_ids[slot];
        self.next_ids[slot] = id.saturating_add(1);
        id
    }

    pub fn peek(&self, kind: SequenceKind) -> i64 {
        self.next_ids[kind.slot()]
    }

    /// Moves the counter so the next allocation is at least `minimum`.
    /// Never rewinds: a smaller value leaves the counter untouched.
    pub fn fast_forward(&mut self, kind: SequenceKind, minimum: i64) {
        let slot = kind.slot();
        if minimum > self.next_ids[slot] {
            self.next_ids[slot] = minimum;
        }
    }

    /// Seeds a counter from loaded ids: the next allocation is `1 + max(ids)`.
    pub fn fast_forward_past<I: IntoIterator<Item=i64>>(&mut self, kind: SequenceKind, ids: I) {
        let highest = ids.into_iter().max().unwrap_or(0);
        self.fast_forward(kind, highest.saturating_add(1));
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator::new()
    }
}
