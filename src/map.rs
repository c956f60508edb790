//! Single-threaded chained hash map over `i64` keys.

use std::fmt;
use std::ops;

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::iter::Iter;
use crate::node::{self, Entry};
use crate::ops::get::find_in_chain;
use crate::ops::insert::{insert_into_chain, rebuild};
use crate::ops::remove::{RemoveOutcome, remove_from_chain};

/// Chained hash map from `i64` keys to values of type `V`.
///
/// Collisions resolve into singly-linked chains held in a bump arena; the
/// bucket table starts at [`INITIAL_BUCKETS`](node::INITIAL_BUCKETS) slots
/// and doubles whenever occupancy reaches 3/4 ahead of an insert. Iteration
/// order is bucket index ascending, head to tail within each chain.
pub struct LongMap<V> {
    store: EntryArena<V>,
    table: Vec<Option<Idx<Entry<V>>>>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<V> LongMap<V> {
    /// Creates an empty map with the default 16-bucket table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: EntryArena::new(),
            table: vec![None; node::INITIAL_BUCKETS],
            size: 0,
        }
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of buckets.
    ///
    /// Starts at 16 and only ever doubles, except for
    /// [`clear`](Self::clear), which resets it to 16.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the total number of arena-allocated entries.
    ///
    /// Includes dead COW copies — reflects true memory footprint.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.len()
    }

    /// Returns a reference to the value associated with `key`.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        let head = self.table[node::bucket_index(key, self.table.len())]?;
        let idx = find_in_chain(&self.store, head, key)?;
        Some(&self.store.get(idx).value)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Returns every key in bucket-then-chain order.
    ///
    /// The order reflects the current table layout, so it changes after a
    /// rebuild. An empty map yields an empty vector.
    #[must_use]
    pub fn keys(&self) -> Vec<i64> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns an iterator over `(key, &value)` pairs in bucket-then-chain
    /// order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.store, &self.table, self.size)
    }

    /// Drops every entry and resets the table to its default 16 buckets.
    ///
    /// A no-op on an empty map.
    pub fn clear(&mut self) {
        if self.size > 0 {
            self.size = 0;
            self.store = EntryArena::new();
            self.table = vec![None; node::INITIAL_BUCKETS];
        }
    }
}

// ---------------------------------------------------------------------------
// Write operations — V: Clone
// ---------------------------------------------------------------------------

impl<V: Clone> LongMap<V> {
    /// Inserts a key-value pair, returning the value just stored.
    ///
    /// An existing key has its value replaced at the same chain position; a
    /// new key is appended to its bucket's chain. Either way the return is
    /// the `value` argument itself, never a previous value. When occupancy
    /// has reached 3/4, the table is rebuilt at double size before the
    /// insert — even when the insert turns out to be an overwrite.
    pub fn insert(&mut self, key: i64, value: V) -> V {
        if node::exceeds_load_factor(self.size, self.table.len()) {
            self.table = rebuild(&mut self.store, &self.table);
        }
        let idx = node::bucket_index(key, self.table.len());
        let outcome = insert_into_chain(&mut self.store, self.table[idx], key, value.clone());
        self.table[idx] = outcome.head;
        if outcome.inserted {
            self.size += 1;
        }
        value
    }

    /// Removes a key from the map. Returns the removed value, or `None` if
    /// the key was not present.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        if self.is_empty() {
            return None;
        }
        let idx = node::bucket_index(key, self.table.len());
        let head = self.table[idx]?;
        match remove_from_chain(&mut self.store, head, key) {
            RemoveOutcome::NotFound => None,
            RemoveOutcome::Removed { head, value } => {
                self.table[idx] = head;
                self.size -= 1;
                Some(value)
            }
        }
    }

    /// Returns every value in bucket-then-chain order — the same traversal
    /// as [`keys`](Self::keys).
    ///
    /// An empty map yields an empty vector.
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Value search — V: PartialEq
// ---------------------------------------------------------------------------

impl<V: PartialEq> LongMap<V> {
    /// Returns `true` if any entry's value equals `value`.
    ///
    /// Structural equality via `PartialEq`; scans every chain in the table.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.iter().any(|(_, stored)| stored == value)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LongMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongMap")
            .field("len", &self.size)
            .field("buckets", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl<V: Clone> Extend<(i64, V)> for LongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V: Clone> FromIterator<(i64, V)> for LongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> ops::Index<i64> for LongMap<V> {
    type Output = V;

    fn index(&self, key: i64) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, V> IntoIterator for &'a LongMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
