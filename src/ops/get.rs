//! Lookup operation — walks a bucket chain to find a key.

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::node::Entry;

/// Searches the chain rooted at `head` for `key`.
///
/// Returns the index of the matching entry, if any. The walk is iterative:
/// chains have no length bound, so no recursion.
pub fn find_in_chain<V>(
    store: &EntryArena<V>,
    head: Idx<Entry<V>>,
    key: i64,
) -> Option<Idx<Entry<V>>> {
    let mut cur = Some(head);
    while let Some(idx) = cur {
        let entry = store.get(idx);
        if entry.key == key {
            return Some(idx);
        }
        cur = entry.next;
    }
    None
}
