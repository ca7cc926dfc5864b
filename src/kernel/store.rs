use crate::models::ItemId;

use super::{Action, EditorState, Effect};

mod reducers;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// Id allocated by `CreateFolder`/`CreateFile`.
    pub created: Option<ItemId>,
}

impl DispatchResult {
    pub(crate) fn unchanged() -> Self {
        Self::default()
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            Self::committed()
        } else {
            Self::unchanged()
        }
    }

    pub(crate) fn committed() -> Self {
        Self {
            effects: vec![Effect::PersistSnapshot],
            state_changed: true,
            created: None,
        }
    }

    pub(crate) fn created(id: ItemId) -> Self {
        Self {
            created: Some(id),
            ..Self::committed()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Reject focus changes that point at ids which are not open files.
    pub strict_focus: bool,
}

pub struct Store {
    state: EditorState,
    config: StoreConfig,
}

impl Store {
    pub fn new(state: EditorState) -> Self {
        Self::with_config(state, StoreConfig::default())
    }

    pub fn with_config(state: EditorState, config: StoreConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let result = match action {
            Action::CreateFolder { .. }
            | Action::CreateFile { .. }
            | Action::ToggleFolder(_)
            | Action::UpdateFileContent { .. }
            | Action::DeleteItem(_) => self.reduce_file_system_action(action),
            Action::OpenFile(_) | Action::CloseFile(_) | Action::SetActiveFile(_) => {
                self.reduce_tab_action(action)
            }
        };

        if result.state_changed {
            tracing::debug!(
                action = name,
                items = self.state.files().len(),
                tabs = self.state.open_files().len(),
                "state committed"
            );
        } else {
            tracing::trace!(action = name, "no-op");
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
