use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::kernel::StoreConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rewrite the snapshot after every committed transition.
    pub autosave: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    pub strict_focus: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autosave: true,
            snapshot_path: None,
            log_filter: None,
            strict_focus: false,
        }
    }
}

impl Settings {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            strict_focus: self.strict_focus,
        }
    }
}
