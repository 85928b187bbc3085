//! Retrieval indexes derived from the collection store.
//!
//! Both indexes are secondary views: they can always be rebuilt from the
//! authoritative asset list, and the facade does exactly that after any
//! undo/redo or file load.
//!
//! - [`OrderedIndex`] - binary search tree keyed by numeric asset ID
//! - [`AttributeIndex`] - inverted index from attribute values to assets

mod attribute;
mod ordered;

#[cfg(test)]
mod tests;

pub use attribute::AttributeIndex;
pub use ordered::OrderedIndex;
