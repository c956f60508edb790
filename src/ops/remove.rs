//! Removal operation — splices an entry out of its bucket chain.

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::node::Entry;
use crate::ops::relink_prefix;

/// Outcome of a chain remove.
pub enum RemoveOutcome<V> {
    /// Key was not found — chain unchanged.
    NotFound,
    /// Key was removed.
    Removed {
        /// New head of the chain, or `None` if the chain is now empty.
        head: Option<Idx<Entry<V>>>,
        /// The removed value.
        value: V,
    },
}

/// Removes `key` from the chain rooted at `head`.
///
/// A head match detaches by re-pointing the bucket at the successor, no
/// copying. An interior match copies the entries ahead of the removed one
/// and links them to its suffix, leaving previously allocated entries
/// untouched.
pub fn remove_from_chain<V: Clone>(
    store: &mut EntryArena<V>,
    head: Idx<Entry<V>>,
    key: i64,
) -> RemoveOutcome<V> {
    let mut prefix: Vec<(i64, V)> = Vec::new();
    let mut cur = head;
    loop {
        let entry = store.get(cur);
        if entry.key == key {
            let value = entry.value.clone();
            let suffix = entry.next;
            return RemoveOutcome::Removed {
                head: relink_prefix(store, prefix, suffix),
                value,
            };
        }
        match entry.next {
            Some(next) => {
                prefix.push((entry.key, entry.value.clone()));
                cur = next;
            }
            None => return RemoveOutcome::NotFound,
        }
    }
}
