//! Tests for the separate-chaining hash table
//!
//! These tests verify:
//! - Insert/get/remove round-trips
//! - In-place update of existing keys
//! - Resize growth preserving every entry

use algolab::HashTable;

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_insert_and_get() {
    let mut table = HashTable::new();
    table.insert("name", "John");
    table.insert("city", "New York");

    assert_eq!(table.get(&"name"), Some(&"John"));
    assert_eq!(table.get(&"city"), Some(&"New York"));
    assert_eq!(table.get(&"country"), None);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_insert_existing_key_updates_in_place() {
    let mut table = HashTable::new();
    assert_eq!(table.insert("age", 25), None);
    assert_eq!(table.insert("age", 26), Some(25));

    assert_eq!(table.get(&"age"), Some(&26));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_remove_returns_value() {
    let mut table = HashTable::new();
    table.insert(1, "one");
    table.insert(2, "two");

    assert_eq!(table.remove(&1), Some("one"));
    assert_eq!(table.remove(&1), None);
    assert_eq!(table.len(), 1);
    assert!(!table.contains_key(&1));
    assert!(table.contains_key(&2));
}

// =============================================================================
// Resize Tests
// =============================================================================

#[test]
fn test_resize_preserves_all_entries() {
    let mut table = HashTable::with_buckets(4);
    let initial_buckets = table.bucket_count();

    for i in 0..100 {
        table.insert(i, i * 2);
    }

    assert!(table.bucket_count() > initial_buckets);
    assert_eq!(table.len(), 100);
    for i in 0..100 {
        assert_eq!(table.get(&i), Some(&(i * 2)));
    }
}

#[test]
fn test_load_factor_stays_bounded() {
    let mut table = HashTable::new();
    for i in 0..1000 {
        table.insert(i, ());
    }
    assert!(table.load_factor() <= 0.7 + f64::EPSILON);
}

// =============================================================================
// Bookkeeping Tests
// =============================================================================

#[test]
fn test_empty_table() {
    let table: HashTable<String, i32> = HashTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_zero_bucket_request_is_rounded_up() {
    let mut table = HashTable::with_buckets(0);
    table.insert("key", 1);
    assert_eq!(table.get(&"key"), Some(&1));
}

#[test]
fn test_iteration_covers_every_entry() {
    let mut table = HashTable::new();
    for i in 0..20 {
        table.insert(i, i);
    }

    let mut seen: Vec<i32> = table.iter().map(|(k, _)| *k).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..20).collect::<Vec<i32>>());
}
