use crate::kernel::services::adapters::FileSnapshotStore;
use crate::kernel::services::ports::{Settings, SnapshotError, SnapshotStore};
use crate::kernel::{Action, DispatchResult, EditorSnapshot, EditorState, Effect, Store};

#[derive(Debug, thiserror::Error)]
#[error("final snapshot save failed: {source}")]
pub struct CloseError {
    /// State at close time, not persisted.
    pub snapshot: EditorSnapshot,
    #[source]
    pub source: SnapshotError,
}

/// One editing session. Restores state on open, persists committed
/// transitions when autosave is on, and writes the final snapshot on close.
pub struct Session {
    store: Store,
    storage: Box<dyn SnapshotStore>,
    autosave: bool,
}

impl Session {
    /// Opens a session on the snapshot file named by `settings`, or the
    /// platform default location.
    pub fn open(settings: &Settings) -> Self {
        let storage = settings
            .snapshot_path
            .clone()
            .map(FileSnapshotStore::new)
            .or_else(FileSnapshotStore::default_location);

        match storage {
            Some(storage) => {
                tracing::info!(path = %storage.path().display(), "opening session");
                Self::with_storage(Box::new(storage), settings)
            }
            None => {
                tracing::warn!("no snapshot location available, session will not persist");
                Self::with_storage(Box::new(Discard), settings)
            }
        }
    }

    pub fn with_storage(storage: Box<dyn SnapshotStore>, settings: &Settings) -> Self {
        let state = restore(storage.as_ref());
        Self {
            store: Store::with_config(state, settings.store_config()),
            storage,
            autosave: settings.autosave,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &EditorState {
        self.store.state()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        self.store.state().snapshot()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = self.store.dispatch(action);
        for &effect in &result.effects {
            self.run_effect(effect);
        }
        result
    }

    /// Writes the final snapshot and ends the session. A failed save hands
    /// the unsaved snapshot back inside the error.
    pub fn close(self) -> Result<EditorSnapshot, CloseError> {
        let snapshot = self.store.into_state().into_snapshot();
        if let Err(source) = self.storage.save(&snapshot) {
            tracing::error!(error = %source, "final snapshot save failed");
            return Err(CloseError { snapshot, source });
        }
        tracing::info!(items = snapshot.file_system.len(), "session closed");
        Ok(snapshot)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistSnapshot => {
                if !self.autosave {
                    return;
                }
                if let Err(error) = self.storage.save(&self.snapshot()) {
                    tracing::error!(error = %error, "persist snapshot failed");
                }
            }
        }
    }
}

fn restore(storage: &dyn SnapshotStore) -> EditorState {
    let snapshot = match storage.load() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return EditorState::new(),
        Err(error) => {
            tracing::warn!(error = %error, "snapshot unreadable, starting empty");
            return EditorState::new();
        }
    };

    let state = EditorState::from_snapshot(snapshot);
    for violation in state.check_invariants() {
        tracing::warn!(%violation, "restored snapshot is inconsistent");
    }
    tracing::debug!(
        items = state.files().len(),
        tabs = state.open_files().len(),
        "snapshot restored"
    );
    state
}

/// Storage for hosts without a data directory.
struct Discard;

impl SnapshotStore for Discard {
    fn load(&self) -> Result<Option<EditorSnapshot>, SnapshotError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &EditorSnapshot) -> Result<(), SnapshotError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
