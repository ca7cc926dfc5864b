use crate::kernel::EditorSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable home for the session snapshot.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<EditorSnapshot>, SnapshotError>;
    fn save(&self, snapshot: &EditorSnapshot) -> Result<(), SnapshotError>;
}
