//! Inverted index from attribute values to assets, used for search.

use std::collections::{BTreeMap, HashMap};

use crate::asset::{Asset, SearchAttribute};

/// Maps attribute -> lowercased value -> assets carrying that value.
///
/// Entries are derived, never authoritative: the index is rebuilt from the
/// collection store after any bulk change. `index_one` does not deduplicate,
/// so callers must index each asset exactly once per rebuild.
#[derive(Default)]
pub struct AttributeIndex {
    buckets: HashMap<SearchAttribute, BTreeMap<String, Vec<Asset>>>,
}

impl AttributeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Clears and re-populates from the given assets.
    pub fn rebuild(&mut self, assets: &[Asset]) {
        self.clear();
        for asset in assets {
            self.index_one(asset);
        }
    }

    /// Indexes one asset under every attribute that applies to its variant.
    /// Values are lowercased so queries are case-insensitive.
    pub fn index_one(&mut self, asset: &Asset) {
        for &attribute in SearchAttribute::all() {
            if let Some(value) = asset.attribute_value(attribute) {
                self.buckets
                    .entry(attribute)
                    .or_default()
                    .entry(value.to_lowercase())
                    .or_default()
                    .push(asset.clone());
            }
        }
    }

    /// Case-insensitive query: assets whose value equals `term` exactly,
    /// followed by assets whose value contains `term` as a substring but is
    /// not an exact match.
    ///
    /// Within a bucket, insertion order is preserved. Substring buckets are
    /// visited in ascending value order, which makes result order
    /// deterministic.
    pub fn query(&self, attribute: SearchAttribute, term: &str) -> Vec<Asset> {
        let term = term.to_lowercase();
        let Some(values) = self.buckets.get(&attribute) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        if let Some(exact) = values.get(&term) {
            results.extend(exact.iter().cloned());
        }
        for (value, bucket) in values {
            if value.contains(&term) && *value != term {
                results.extend(bucket.iter().cloned());
            }
        }
        results
    }
}
