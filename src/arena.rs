//! Bump-arena storage for chain entries.

use safe_bump::{Arena, Idx};

use crate::node::Entry;

/// Arena holding every entry a map has allocated.
///
/// Entries are never freed individually: chain edits allocate replacement
/// entries and abandon the old ones, and [`clear`](crate::LongMap::clear)
/// swaps in a fresh arena. [`len`](Self::len) reflects the true memory
/// footprint, dead entries included.
pub(crate) struct EntryArena<V> {
    entries: Arena<Entry<V>>,
}

impl<V> EntryArena<V> {
    /// Creates an empty arena.
    pub const fn new() -> Self {
        Self {
            entries: Arena::new(),
        }
    }

    /// Allocates a single entry, returning its index.
    pub fn alloc(&mut self, entry: Entry<V>) -> Idx<Entry<V>> {
        self.entries.alloc(entry)
    }

    /// Returns a reference to the entry at `idx`.
    pub fn get(&self, idx: Idx<Entry<V>>) -> &Entry<V> {
        self.entries.get(idx)
    }

    /// Returns the total number of allocated entries, dead ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
