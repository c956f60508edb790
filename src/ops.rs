//! Chain operations over the entry arena.

pub mod get;
pub mod insert;
pub mod remove;

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::node::Entry;

/// Re-allocates `prefix` entries in order, linking the last one to `tail`.
///
/// Built back-to-front so every entry is written once with its final link
/// already known. Returns the head of the relinked chain, or `tail` itself
/// when the prefix is empty.
pub(crate) fn relink_prefix<V>(
    store: &mut EntryArena<V>,
    prefix: Vec<(i64, V)>,
    tail: Option<Idx<Entry<V>>>,
) -> Option<Idx<Entry<V>>> {
    let mut head = tail;
    for (key, value) in prefix.into_iter().rev() {
        head = Some(store.alloc(Entry {
            key,
            value,
            next: head,
        }));
    }
    head
}
