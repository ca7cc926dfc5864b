//! Service adapters: OS specific implementations (filesystem IO).

pub mod paths;
pub mod settings;
pub mod snapshot;

pub use paths::{ensure_log_dir, get_log_dir, get_settings_path, get_snapshot_path};
pub use settings::{ensure_settings_file, load_settings, load_settings_from};
pub use snapshot::{FileSnapshotStore, MemorySnapshotStore};
