//! Unit tests for the index module.

use super::attribute::AttributeIndex;
use super::ordered::OrderedIndex;
use crate::asset::{Asset, SearchAttribute};
use crate::error::InventoryError;

fn hw(id: &str, name: &str) -> Asset {
    Asset::hardware(id, name, "Asus", "M1", "2024-01-01", true, "Office", "2025-01-01")
}

fn sw(id: &str, name: &str, version: &str) -> Asset {
    Asset::software(id, name, "JetBrains", "CL", "2024-02-01", true, version, "KEY-123")
}

// OrderedIndex tests

#[test]
fn test_insert_then_search_returns_inserted_asset() {
    let mut index = OrderedIndex::new();
    for id in ["005", "002", "008", "001", "003"] {
        index.insert(hw(id, &format!("Item {}", id))).unwrap();
    }

    let found = index.search("003").unwrap().expect("003 present");
    assert_eq!(found.name, "Item 003");
    assert!(index.search("007").unwrap().is_none());
    assert_eq!(index.len(), 5);
}

#[test]
fn test_in_order_traversal_ascending_numeric() {
    let mut index = OrderedIndex::new();
    // "10" vs "9" sorts wrong as strings but right as integers
    for id in ["10", "2", "9", "1", "30"] {
        index.insert(hw(id, id)).unwrap();
    }

    let ids: Vec<&str> = index.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "9", "10", "30"]);
}

#[test]
fn test_traversal_is_restartable() {
    let mut index = OrderedIndex::new();
    for id in ["2", "1", "3"] {
        index.insert(hw(id, id)).unwrap();
    }

    let first: Vec<String> = index.iter().map(|a| a.asset_id.clone()).collect();
    let second: Vec<String> = index.iter().map(|a| a.asset_id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_insert_is_silently_ignored() {
    let mut index = OrderedIndex::new();
    index.insert(hw("001", "Original")).unwrap();
    index.insert(hw("001", "Replacement")).unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.search("001").unwrap().unwrap().name, "Original");
}

#[test]
fn test_delete_leaf() {
    let mut index = OrderedIndex::new();
    for id in ["2", "1", "3"] {
        index.insert(hw(id, id)).unwrap();
    }

    assert!(index.delete("1").unwrap());
    assert!(index.search("1").unwrap().is_none());
    let ids: Vec<&str> = index.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn test_delete_node_with_one_child() {
    let mut index = OrderedIndex::new();
    for id in ["2", "1", "4", "3"] {
        index.insert(hw(id, id)).unwrap();
    }

    // 4 has a single left child (3)
    assert!(index.delete("4").unwrap());
    let ids: Vec<&str> = index.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_delete_node_with_two_children_promotes_successor() {
    let mut index = OrderedIndex::new();
    for id in ["5", "2", "8", "6", "9", "7"] {
        index.insert(hw(id, id)).unwrap();
    }

    // 8 has children 6 and 9; its in-order successor is 9's subtree min
    assert!(index.delete("8").unwrap());
    assert!(index.search("8").unwrap().is_none());
    assert_eq!(index.search("9").unwrap().unwrap().asset_id, "9");
    let ids: Vec<&str> = index.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5", "6", "7", "9"]);
}

#[test]
fn test_delete_root_with_two_children() {
    let mut index = OrderedIndex::new();
    for id in ["5", "2", "8"] {
        index.insert(hw(id, id)).unwrap();
    }

    assert!(index.delete("5").unwrap());
    let ids: Vec<&str> = index.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "8"]);
}

#[test]
fn test_delete_absent_id_is_noop() {
    let mut index = OrderedIndex::new();
    index.insert(hw("1", "one")).unwrap();

    assert!(!index.delete("7").unwrap());
    assert_eq!(index.len(), 1);
}

#[test]
fn test_non_numeric_ids_error() {
    let mut index = OrderedIndex::new();
    assert!(matches!(
        index.insert(hw("abc", "bad")),
        Err(InventoryError::InvalidAssetId(_))
    ));
    assert!(index.search("abc").is_err());
    assert!(index.delete("abc").is_err());
}

#[test]
fn test_clear_empties_tree() {
    let mut index = OrderedIndex::new();
    for id in ["2", "1", "3"] {
        index.insert(hw(id, id)).unwrap();
    }

    index.clear();
    assert!(index.is_empty());
    assert!(index.search("2").unwrap().is_none());
    assert_eq!(index.iter().count(), 0);
}

// AttributeIndex tests

#[test]
fn test_query_exact_matches_precede_substring_matches() {
    let mut index = AttributeIndex::new();
    index.index_one(&hw("1", "Dock"));
    index.index_one(&hw("2", "Docking Station"));
    index.index_one(&hw("3", "Dock"));

    let results = index.query(SearchAttribute::Name, "dock");
    let names: Vec<&str> = results.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Dock", "Dock", "Docking Station"]);
    // Exact bucket preserves insertion order
    assert_eq!(results[0].asset_id, "1");
    assert_eq!(results[1].asset_id, "3");
}

#[test]
fn test_query_is_case_insensitive() {
    let mut index = AttributeIndex::new();
    index.index_one(&hw("1", "LAPTOP"));

    let results = index.query(SearchAttribute::Name, "Laptop");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].asset_id, "1");
}

#[test]
fn test_query_no_match_returns_empty() {
    let mut index = AttributeIndex::new();
    index.index_one(&hw("1", "Laptop"));

    assert!(index.query(SearchAttribute::Name, "printer").is_empty());
    assert!(index.query(SearchAttribute::Version, "1.0").is_empty());
}

#[test]
fn test_variant_specific_attributes_only_index_their_variant() {
    let mut index = AttributeIndex::new();
    index.index_one(&hw("1", "Laptop"));
    index.index_one(&sw("2", "IDE", "2.1"));

    assert_eq!(index.query(SearchAttribute::Location, "office").len(), 1);
    assert_eq!(index.query(SearchAttribute::Version, "2.1").len(), 1);
    assert!(index.query(SearchAttribute::Version, "office").is_empty());
}

#[test]
fn test_rebuild_replaces_previous_entries() {
    let mut index = AttributeIndex::new();
    index.index_one(&hw("1", "Laptop"));

    index.rebuild(&[sw("2", "IDE", "2.1")]);
    assert!(index.query(SearchAttribute::Name, "laptop").is_empty());
    assert_eq!(index.query(SearchAttribute::Name, "ide").len(), 1);
}

#[test]
fn test_repeated_indexing_duplicates_entries() {
    // index_one does not deduplicate; the facade guards against this by
    // indexing each asset exactly once per rebuild.
    let mut index = AttributeIndex::new();
    let asset = hw("1", "Laptop");
    index.index_one(&asset);
    index.index_one(&asset);

    assert_eq!(index.query(SearchAttribute::Name, "laptop").len(), 2);
}
