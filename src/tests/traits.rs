use crate::LongMap;

#[test]
fn default_is_empty() {
    let map: LongMap<i32> = LongMap::default();
    assert!(map.is_empty());
}

#[test]
fn debug_format() {
    let map: LongMap<i32> = LongMap::new();
    let dbg = format!("{map:?}");
    assert!(dbg.contains("LongMap"));
    assert!(dbg.contains("len"));
}

#[test]
fn from_iterator() {
    let map: LongMap<i32> = vec![(1_i64, 10), (2, 20), (3, 30)].into_iter().collect();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(1), Some(&10));
}

#[test]
fn from_iterator_duplicate_keys() {
    let map: LongMap<i32> = vec![(1_i64, 10), (1, 20)].into_iter().collect();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(1), Some(&20));
}

#[test]
fn extend_trait() {
    let mut map = LongMap::new();
    map.insert(1, 10);
    map.extend(vec![(2_i64, 20), (3, 30)]);
    assert_eq!(map.len(), 3);
}

#[test]
fn index_existing() {
    let mut map = LongMap::new();
    map.insert(1, 42);
    assert_eq!(map[1], 42);
}

#[test]
#[should_panic(expected = "key not found")]
fn index_missing_panics() {
    let map: LongMap<i32> = LongMap::new();
    let _ = map[1];
}

#[test]
fn iter_is_bucket_then_chain_order() {
    let mut map = LongMap::new();
    map.insert(1, "a");
    map.insert(16, "b");
    map.insert(2, "c");

    let pairs: Vec<(i64, &str)> = map.iter().map(|(k, v)| (k, *v)).collect();
    // Bucket 1 holds the 1 -> 16 chain, bucket 2 holds key 2.
    assert_eq!(pairs, vec![(1, "a"), (16, "b"), (2, "c")]);
}

#[test]
fn iter_is_exact_size() {
    let mut map = LongMap::new();
    map.insert(1, 1);
    map.insert(2, 2);
    let mut iter = map.iter();
    assert_eq!(iter.len(), 2);
    iter.next();
    assert_eq!(iter.len(), 1);
}

#[test]
fn into_iterator_for_reference() {
    let mut map = LongMap::new();
    map.insert(1, 10);
    map.insert(2, 20);
    let mut total = 0;
    for (_, value) in &map {
        total += value;
    }
    assert_eq!(total, 30);
}
