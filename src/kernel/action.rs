use crate::models::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateFolder {
        name: String,
        parent_id: Option<ItemId>,
    },
    CreateFile {
        name: String,
        parent_id: Option<ItemId>,
    },
    ToggleFolder(ItemId),
    OpenFile(ItemId),
    CloseFile(ItemId),
    SetActiveFile(ItemId),
    UpdateFileContent {
        id: ItemId,
        content: String,
    },
    /// The host is expected to have confirmed with the user already.
    DeleteItem(ItemId),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateFolder { .. } => "createFolder",
            Action::CreateFile { .. } => "createFile",
            Action::ToggleFolder(_) => "toggleFolder",
            Action::OpenFile(_) => "openFile",
            Action::CloseFile(_) => "closeFile",
            Action::SetActiveFile(_) => "setActiveFile",
            Action::UpdateFileContent { .. } => "updateFileContent",
            Action::DeleteItem(_) => "deleteItem",
        }
    }
}
