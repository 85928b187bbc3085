//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Width generated asset IDs are zero-padded to ("001", "002", ...)
pub const ASSET_ID_PAD_WIDTH: usize = 3;

/// Number of comma-separated fields in a persisted asset record.
/// Lines with fewer fields are skipped on load.
pub const RECORD_FIELD_COUNT: usize = 9;

/// Maximum number of recent inventory files to remember in config
pub const MAX_RECENT_INVENTORIES: usize = 5;

/// Default file name for the saved inventory
pub const DEFAULT_INVENTORY_FILE: &str = "SavedAssets.txt";
