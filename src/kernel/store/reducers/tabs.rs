use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::Action;
use crate::models::ItemId;

impl Store {
    pub(in crate::kernel::store) fn reduce_tab_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenFile(id) => {
                if self.config.strict_focus && !self.state.is_file(id) {
                    tracing::warn!(%id, "openFile rejected: not a file");
                    return DispatchResult::unchanged();
                }
                DispatchResult::from_changed(self.state.open_file(id))
            }
            Action::CloseFile(id) => DispatchResult::from_changed(self.state.close_file(id)),
            Action::SetActiveFile(id) => {
                if self.config.strict_focus && !self.can_focus(id) {
                    tracing::warn!(%id, "setActiveFile rejected: no open tab");
                    return DispatchResult::unchanged();
                }
                DispatchResult::from_changed(self.state.set_active_file(id))
            }
            _ => unreachable!("non-tab action passed to reduce_tab_action"),
        }
    }

    fn can_focus(&self, id: ItemId) -> bool {
        self.state.is_file(id) && self.state.is_open(id)
    }
}
