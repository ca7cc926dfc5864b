use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::Action;

impl Store {
    pub(in crate::kernel::store) fn reduce_file_system_action(
        &mut self,
        action: Action,
    ) -> DispatchResult {
        match action {
            Action::CreateFolder { name, parent_id } => {
                let id = self.state.create_folder(&name, parent_id);
                DispatchResult::created(id)
            }
            Action::CreateFile { name, parent_id } => {
                let id = self.state.create_file(&name, parent_id);
                DispatchResult::created(id)
            }
            Action::ToggleFolder(id) => DispatchResult::from_changed(self.state.toggle_folder(id)),
            Action::UpdateFileContent { id, content } => {
                DispatchResult::from_changed(self.state.update_file_content(id, content))
            }
            Action::DeleteItem(id) => DispatchResult::from_changed(self.state.delete_item(id)),
            _ => unreachable!("non-file-system action passed to reduce_file_system_action"),
        }
    }
}
