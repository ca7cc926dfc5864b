use super::*;
use crate::kernel::services::adapters::MemorySnapshotStore;
use crate::models::ItemId;
use tempfile::tempdir;

fn memory_session(settings: &Settings) -> (Session, MemorySnapshotStore) {
    let storage = MemorySnapshotStore::new();
    let session = Session::with_storage(Box::new(storage.clone()), settings);
    (session, storage)
}

fn create_file(session: &mut Session, name: &str, parent_id: Option<ItemId>) -> ItemId {
    session
        .dispatch(Action::CreateFile {
            name: name.to_string(),
            parent_id,
        })
        .created
        .unwrap()
}

#[test]
fn starts_empty_without_saved_state() {
    let (session, storage) = memory_session(&Settings::default());

    assert_eq!(session.snapshot(), EditorSnapshot::default());
    assert!(storage.contents().is_none());
}

#[test]
fn autosave_persists_every_commit() {
    let (mut session, storage) = memory_session(&Settings::default());

    let file = create_file(&mut session, "draft", None);
    session.dispatch(Action::OpenFile(file));
    session.dispatch(Action::UpdateFileContent {
        id: file,
        content: "h".to_string(),
    });

    let saved = storage.load().unwrap().unwrap();
    assert_eq!(saved, session.snapshot());
    assert_eq!(saved.active_file_id, Some(file));
}

#[test]
fn no_op_does_not_touch_storage() {
    let (mut session, storage) = memory_session(&Settings::default());

    let result = session.dispatch(Action::CloseFile(ItemId::generate()));

    assert!(!result.state_changed);
    assert!(storage.contents().is_none());
}

#[test]
fn autosave_off_defers_to_close() {
    let settings = Settings {
        autosave: false,
        ..Settings::default()
    };
    let (mut session, storage) = memory_session(&settings);

    let file = create_file(&mut session, "later", None);
    assert!(storage.contents().is_none());

    let closed = session.close().unwrap();
    assert_eq!(closed.file_system.len(), 1);
    assert_eq!(closed.file_system[0].id, file);
    assert_eq!(storage.load().unwrap(), Some(closed));
}

#[test]
fn reopen_restores_previous_session() {
    let (mut session, storage) = memory_session(&Settings::default());
    let dir = session
        .dispatch(Action::CreateFolder {
            name: "notes".to_string(),
            parent_id: None,
        })
        .created
        .unwrap();
    let file = create_file(&mut session, "todo", Some(dir));
    session.dispatch(Action::OpenFile(file));
    let before = session.close().unwrap();

    let mut reopened = Session::with_storage(Box::new(storage), &Settings::default());

    assert_eq!(reopened.snapshot(), before);
    assert_eq!(reopened.state().active_document().unwrap().name, "todo.txt");

    reopened.dispatch(Action::DeleteItem(dir));
    assert!(reopened.state().open_files().is_empty());
    assert_eq!(reopened.state().active_file_id(), None);
}

#[test]
fn strict_focus_setting_reaches_the_store() {
    let settings = Settings {
        strict_focus: true,
        ..Settings::default()
    };
    let (mut session, _storage) = memory_session(&settings);

    assert!(session.store().config().strict_focus);
    assert!(!session.dispatch(Action::SetActiveFile(ItemId::generate())).state_changed);
}

#[test]
fn open_uses_configured_snapshot_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let settings = Settings {
        snapshot_path: Some(path.clone()),
        ..Settings::default()
    };

    let mut session = Session::open(&settings);
    create_file(&mut session, "persisted", None);
    assert!(path.exists());
    session.close().unwrap();

    let reopened = Session::open(&settings);
    let names: Vec<_> = reopened.state().items().map(|i| i.name.to_string()).collect();
    assert_eq!(names, ["persisted.txt"]);
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    let settings = Settings {
        snapshot_path: Some(path),
        ..Settings::default()
    };

    let session = Session::open(&settings);

    assert_eq!(session.state().items().count(), 0);
}

struct FailingStore;

impl SnapshotStore for FailingStore {
    fn load(&self) -> Result<Option<EditorSnapshot>, SnapshotError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &EditorSnapshot) -> Result<(), SnapshotError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn failed_close_returns_unsaved_snapshot() {
    let settings = Settings {
        autosave: false,
        ..Settings::default()
    };
    let mut session = Session::with_storage(Box::new(FailingStore), &settings);
    let file = create_file(&mut session, "unsaved", None);
    session.dispatch(Action::UpdateFileContent {
        id: file,
        content: "keep me".to_string(),
    });
    let expected = session.snapshot();

    let err = session.close().unwrap_err();

    assert!(matches!(err.source, SnapshotError::Io(_)));
    assert_eq!(err.snapshot, expected);
    let restored = EditorState::from_snapshot(err.snapshot);
    assert_eq!(restored.item(file).unwrap().content(), Some("keep me"));
}

#[test]
fn failed_autosave_keeps_the_session_running() {
    let mut session = Session::with_storage(Box::new(FailingStore), &Settings::default());

    let result = session.dispatch(Action::CreateFolder {
        name: "dir".to_string(),
        parent_id: None,
    });

    assert!(result.state_changed);
    assert_eq!(session.state().items().count(), 1);
}
