//! Iterator over a map's entries in bucket-then-chain order.

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::node::Entry;

/// Iterator over `(key, &value)` pairs of a [`LongMap`](crate::LongMap).
///
/// Yields entries bucket by bucket, head to tail within each chain. The
/// order reflects the current table layout, not insertion order, and it
/// changes after a rebuild.
pub struct Iter<'a, V> {
    store: &'a EntryArena<V>,
    table: &'a [Option<Idx<Entry<V>>>],
    bucket: usize,
    cur: Option<Idx<Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) const fn new(
        store: &'a EntryArena<V>,
        table: &'a [Option<Idx<Entry<V>>>],
        remaining: usize,
    ) -> Self {
        Self {
            store,
            table,
            bucket: 0,
            cur: None,
            remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(idx) = self.cur {
                let entry = self.store.get(idx);
                self.cur = entry.next;
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            if self.bucket == self.table.len() {
                return None;
            }
            self.cur = self.table[self.bucket];
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
