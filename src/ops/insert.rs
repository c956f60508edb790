//! Insertion and table rebuild — COW path-copy over bucket chains.

use safe_bump::Idx;

use crate::arena::EntryArena;
use crate::node::{self, Entry};
use crate::ops::relink_prefix;

/// Outcome of a chain insert.
pub struct InsertOutcome<V> {
    /// New head of the modified chain.
    pub head: Option<Idx<Entry<V>>>,
    /// `true` if a new key was inserted, `false` if an existing value was
    /// replaced.
    pub inserted: bool,
}

/// Inserts `(key, value)` into the chain rooted at `head` via COW path-copy.
///
/// Walks the chain looking for `key`: a match replaces the value at the same
/// chain position, a miss appends a new tail entry. Entries ahead of the
/// touched position are copied, so previously allocated entries are never
/// mutated.
pub fn insert_into_chain<V: Clone>(
    store: &mut EntryArena<V>,
    head: Option<Idx<Entry<V>>>,
    key: i64,
    value: V,
) -> InsertOutcome<V> {
    let Some(first) = head else {
        let head = store.alloc(Entry {
            key,
            value,
            next: None,
        });
        return InsertOutcome {
            head: Some(head),
            inserted: true,
        };
    };

    let mut prefix: Vec<(i64, V)> = Vec::new();
    let mut cur = first;
    loop {
        let entry = store.get(cur);
        if entry.key == key {
            // Same key — replace the value at this chain position.
            let suffix = entry.next;
            let replaced = store.alloc(Entry {
                key,
                value,
                next: suffix,
            });
            return InsertOutcome {
                head: relink_prefix(store, prefix, Some(replaced)),
                inserted: false,
            };
        }
        prefix.push((entry.key, entry.value.clone()));
        match entry.next {
            Some(next) => cur = next,
            None => {
                // Chain exhausted — append a new tail.
                let tail = store.alloc(Entry {
                    key,
                    value,
                    next: None,
                });
                return InsertOutcome {
                    head: relink_prefix(store, prefix, Some(tail)),
                    inserted: true,
                };
            }
        }
    }
}

/// Rebuilds `table` into one [`GROWTH_FACTOR`](node::GROWTH_FACTOR) times
/// larger, redistributing every live entry.
///
/// Entries are gathered in bucket-then-chain order of the old table, then
/// each new chain is allocated back-to-front so relative order within a new
/// bucket matches gather order. Redistribution re-homes entries, it does not
/// insert new ones: the caller's element count stays untouched.
pub fn rebuild<V: Clone>(
    store: &mut EntryArena<V>,
    table: &[Option<Idx<Entry<V>>>],
) -> Vec<Option<Idx<Entry<V>>>> {
    let new_len = table.len() * node::GROWTH_FACTOR;
    let mut chains: Vec<Vec<(i64, V)>> = (0..new_len).map(|_| Vec::new()).collect();

    for head in table.iter().copied() {
        let mut cur = head;
        while let Some(idx) = cur {
            let entry = store.get(idx);
            chains[node::bucket_index(entry.key, new_len)].push((entry.key, entry.value.clone()));
            cur = entry.next;
        }
    }

    chains
        .into_iter()
        .map(|chain| relink_prefix(store, chain, None))
        .collect()
}
