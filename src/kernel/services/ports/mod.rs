//! Service ports: traits + data contracts.

pub mod settings;
pub mod snapshot;

pub use settings::Settings;
pub use snapshot::{SnapshotError, SnapshotStore};
