//! Snapshot storage.
//!
//! The file store writes through a sibling `.tmp` file and renames it over
//! the target, so a crash mid-write never leaves a truncated snapshot.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::kernel::services::ports::{SnapshotError, SnapshotStore};
use crate::kernel::EditorSnapshot;

use super::paths::get_snapshot_path;

#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory.
    pub fn default_location() -> Option<Self> {
        get_snapshot_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn atomic_write(&self, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        });
        let result = written.and_then(|()| fs::rename(&temp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<EditorSnapshot>, SnapshotError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, snapshot: &EditorSnapshot) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.atomic_write(json.as_bytes())?;
        Ok(())
    }
}

/// In-process store. Clones share the same slot, so a caller can keep a
/// handle while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized form of the last save.
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<EditorSnapshot>, SnapshotError> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &EditorSnapshot) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(snapshot)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/snapshot.rs"]
mod tests;
