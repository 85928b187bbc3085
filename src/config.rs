//! Application configuration persisted to disk.
//!
//! The GUI shell remembers which inventory file was open and which files
//! were opened recently. Loading is lenient: a missing file yields
//! defaults, and a corrupt file resets to defaults with the reason
//! recorded so the shell can tell the user.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::MAX_RECENT_INVENTORIES;
use crate::error::InventoryError;

/// Configuration data persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Last opened inventory file (remembered for quick access, not
    /// auto-loaded)
    #[serde(default)]
    pub last_inventory_path: Option<PathBuf>,

    /// Recently opened inventory files, most recent first
    #[serde(default)]
    pub recent_inventories: Vec<PathBuf>,
}

/// Runtime configuration state.
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

impl AppConfig {
    /// Remembers the last opened inventory file and adds it to the recent
    /// list.
    pub fn set_last_inventory(&mut self, path: PathBuf) {
        self.add_recent_inventory(path.clone());
        self.data.last_inventory_path = Some(path);
        self.dirty = true;
    }

    /// Moves (or inserts) a path to the front of the recent list, keeping
    /// at most [`MAX_RECENT_INVENTORIES`] entries.
    pub fn add_recent_inventory(&mut self, path: PathBuf) {
        self.data.recent_inventories.retain(|p| *p != path);
        self.data.recent_inventories.insert(0, path);
        self.data.recent_inventories.truncate(MAX_RECENT_INVENTORIES);
        self.dirty = true;
    }
}

/// Result of loading config from disk.
pub struct LoadConfigResult {
    pub config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from disk.
pub fn load_config() -> LoadConfigResult {
    let config_path = crate::paths::config_file();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk.
pub fn save_config(config: &AppConfig) -> Result<(), InventoryError> {
    let json = serde_json::to_string_pretty(&config.data)
        .map_err(|e| InventoryError::Io(std::io::Error::other(e)))?;
    std::fs::write(&config.config_path, json)?;
    info!("Config saved to {:?}", config.config_path);
    Ok(())
}
