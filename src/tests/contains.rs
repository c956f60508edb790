use crate::LongMap;

/// A value type compared field-by-field, never by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tagged {
    digit: u32,
    label: String,
}

impl Tagged {
    fn new(digit: u32, label: &str) -> Self {
        Self {
            digit,
            label: label.to_owned(),
        }
    }
}

#[test]
fn contains_key_existing() {
    let mut map = LongMap::new();
    map.insert(1, 1);
    assert!(map.contains_key(1));
}

#[test]
fn contains_key_in_chain() {
    let mut map = LongMap::new();
    map.insert(1, "first");
    map.insert(16, "collision_key");
    assert!(map.contains_key(16));
}

#[test]
fn contains_key_missing() {
    let mut map = LongMap::new();
    map.insert(1, 1);
    assert!(!map.contains_key(2));
}

#[test]
fn contains_key_empty_map() {
    let map: LongMap<i32> = LongMap::new();
    assert!(!map.contains_key(1));
}

#[test]
fn contains_key_false_after_remove() {
    let mut map = LongMap::new();
    map.insert(1, 1);
    map.remove(1);
    assert!(!map.contains_key(1));
}

#[test]
fn contains_value_existing() {
    let mut map = LongMap::new();
    map.insert(1, 1);
    assert!(map.contains_value(&1));
}

#[test]
fn contains_value_structural_equality() {
    let mut map = LongMap::new();
    map.insert(1, Tagged::new(10, "str"));
    // A distinct instance with equal fields counts as contained.
    assert!(map.contains_value(&Tagged::new(10, "str")));
    assert!(!map.contains_value(&Tagged::new(11, "str")));
}

#[test]
fn contains_value_empty_map() {
    let map: LongMap<&str> = LongMap::new();
    assert!(!map.contains_value(&"not_exists_val"));
}

#[test]
fn contains_value_in_chain() {
    let mut map = LongMap::new();
    map.insert(1, "first");
    map.insert(16, "collision_key");
    assert!(map.contains_value(&"collision_key"));
}

#[test]
fn contains_value_missing_in_chain() {
    let mut map = LongMap::new();
    map.insert(1, "first");
    map.insert(16, "collision_key");
    assert!(!map.contains_value(&"not_exists_val"));
}
