use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{FileSystem, FileSystemItem, FileTreeRow, ItemId, ItemKind};

/// Serialized form of [`EditorState`]. Field names match the persisted
/// layout of the browser client so saved sessions carry over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    #[serde(default)]
    pub file_system: Vec<FileSystemItem>,
    #[serde(default)]
    pub open_files: Vec<ItemId>,
    #[serde(default)]
    pub active_file_id: Option<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: ItemId,
    pub name: CompactString,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDocument<'a> {
    pub id: ItemId,
    pub name: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    DanglingParent { id: ItemId, parent_id: ItemId },
    ParentNotFolder { id: ItemId, parent_id: ItemId },
    ParentCycle { id: ItemId },
    DuplicateTab { id: ItemId },
    TabNotFile { id: ItemId },
    ActiveNotOpen { id: ItemId },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingParent { id, parent_id } => {
                write!(f, "item {id} references missing parent {parent_id}")
            }
            Self::ParentNotFolder { id, parent_id } => {
                write!(f, "item {id} has non-folder parent {parent_id}")
            }
            Self::ParentCycle { id } => write!(f, "item {id} has a cyclic parent chain"),
            Self::DuplicateTab { id } => write!(f, "tab {id} is open more than once"),
            Self::TabNotFile { id } => write!(f, "tab {id} does not resolve to a file"),
            Self::ActiveNotOpen { id } => write!(f, "active file {id} has no open tab"),
        }
    }
}

/// The whole editor session: file tree, tab strip and focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    files: FileSystem,
    open_files: Vec<ItemId>,
    active_file_id: Option<ItemId>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: EditorSnapshot) -> Self {
        Self {
            files: FileSystem::from_items(snapshot.file_system),
            open_files: snapshot.open_files,
            active_file_id: snapshot.active_file_id,
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            file_system: self.files.as_slice().to_vec(),
            open_files: self.open_files.clone(),
            active_file_id: self.active_file_id,
        }
    }

    pub fn into_snapshot(self) -> EditorSnapshot {
        EditorSnapshot {
            file_system: self.files.into_items(),
            open_files: self.open_files,
            active_file_id: self.active_file_id,
        }
    }

    pub fn files(&self) -> &FileSystem {
        &self.files
    }

    pub fn item(&self, id: ItemId) -> Option<&FileSystemItem> {
        self.files.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &FileSystemItem> {
        self.files.iter()
    }

    pub fn children(&self, parent: Option<ItemId>) -> impl Iterator<Item = &FileSystemItem> {
        self.files.children(parent)
    }

    pub fn descendants(&self, id: ItemId) -> Vec<ItemId> {
        self.files.descendants(id)
    }

    pub fn open_files(&self) -> &[ItemId] {
        &self.open_files
    }

    pub fn active_file_id(&self) -> Option<ItemId> {
        self.active_file_id
    }

    pub fn is_file(&self, id: ItemId) -> bool {
        self.files.get(id).is_some_and(FileSystemItem::is_file)
    }

    pub fn is_open(&self, id: ItemId) -> bool {
        self.open_files.contains(&id)
    }

    pub fn tree_rows(&self) -> Vec<FileTreeRow> {
        self.files.flatten_for_view()
    }

    /// Open tabs resolved against the tree. Ids that no longer resolve to a
    /// file produce no tab.
    pub fn tabs(&self) -> Vec<TabItem> {
        self.open_files
            .iter()
            .filter_map(|&id| {
                let item = self.files.get(id).filter(|item| item.is_file())?;
                Some(TabItem {
                    id,
                    name: item.name.clone(),
                    is_active: self.active_file_id == Some(id),
                })
            })
            .collect()
    }

    /// The file shown in the edit surface, `None` for the placeholder state.
    pub fn active_document(&self) -> Option<ActiveDocument<'_>> {
        let id = self.active_file_id?;
        let item = self.files.get(id)?;
        match &item.kind {
            ItemKind::File { content } => Some(ActiveDocument {
                id,
                name: &item.name,
                content,
            }),
            ItemKind::Folder { .. } => None,
        }
    }

    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for item in self.files.iter() {
            let Some(parent_id) = item.parent_id else {
                continue;
            };
            match self.files.get(parent_id) {
                None => violations.push(InvariantViolation::DanglingParent {
                    id: item.id,
                    parent_id,
                }),
                Some(parent) if !parent.is_folder() => {
                    violations.push(InvariantViolation::ParentNotFolder {
                        id: item.id,
                        parent_id,
                    })
                }
                Some(_) => {}
            }
            if self.has_parent_cycle(item.id) {
                violations.push(InvariantViolation::ParentCycle { id: item.id });
            }
        }

        let mut seen = FxHashSet::default();
        for &id in &self.open_files {
            if !seen.insert(id) {
                violations.push(InvariantViolation::DuplicateTab { id });
            }
            if !self.is_file(id) {
                violations.push(InvariantViolation::TabNotFile { id });
            }
        }

        if let Some(id) = self.active_file_id {
            if !self.is_open(id) {
                violations.push(InvariantViolation::ActiveNotOpen { id });
            }
        }

        violations
    }

    fn has_parent_cycle(&self, id: ItemId) -> bool {
        let mut current = self.files.get(id).and_then(|item| item.parent_id);
        let mut steps = 0;
        while let Some(parent_id) = current {
            if parent_id == id || steps > self.files.len() {
                return true;
            }
            steps += 1;
            current = self.files.get(parent_id).and_then(|item| item.parent_id);
        }
        false
    }
}

impl EditorState {
    pub fn create_folder(&mut self, name: &str, parent_id: Option<ItemId>) -> ItemId {
        self.files.insert(FileSystemItem::new_folder(name, parent_id))
    }

    pub fn create_file(&mut self, name: &str, parent_id: Option<ItemId>) -> ItemId {
        self.files.insert(FileSystemItem::new_file(name, parent_id))
    }

    pub fn toggle_folder(&mut self, id: ItemId) -> bool {
        match self.files.get_mut(id).map(|item| &mut item.kind) {
            Some(ItemKind::Folder { is_expanded }) => {
                *is_expanded = !*is_expanded;
                true
            }
            Some(ItemKind::File { .. }) | None => false,
        }
    }

    pub fn open_file(&mut self, id: ItemId) -> bool {
        let mut changed = false;
        if !self.is_open(id) {
            self.open_files.push(id);
            changed = true;
        }
        if self.active_file_id != Some(id) {
            self.active_file_id = Some(id);
            changed = true;
        }
        changed
    }

    /// Drops the tab for `id`. Focus on `id` moves to the last remaining tab
    /// even when no tab was open for it.
    pub fn close_file(&mut self, id: ItemId) -> bool {
        let tabs_before = self.open_files.len();
        self.open_files.retain(|&open| open != id);
        let mut changed = self.open_files.len() != tabs_before;

        if self.active_file_id == Some(id) {
            self.active_file_id = self.open_files.last().copied();
            changed = true;
        }
        changed
    }

    pub fn set_active_file(&mut self, id: ItemId) -> bool {
        let prev = self.active_file_id.replace(id);
        prev != Some(id)
    }

    pub fn update_file_content(&mut self, id: ItemId, content: String) -> bool {
        match self.files.get_mut(id).map(|item| &mut item.kind) {
            Some(ItemKind::File { content: current }) => {
                if *current == content {
                    return false;
                }
                *current = content;
                true
            }
            Some(ItemKind::Folder { .. }) | None => false,
        }
    }

    /// Removes `id` with its whole subtree and closes their tabs. A tab for an
    /// id that never resolved is closed too.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let mut doomed: FxHashSet<ItemId> = self.files.descendants(id).into_iter().collect();
        doomed.insert(id);

        let tabs_before = self.open_files.len();
        self.open_files.retain(|open| !doomed.contains(open));
        let mut changed = self.open_files.len() != tabs_before;

        if self
            .active_file_id
            .is_some_and(|active| doomed.contains(&active))
        {
            self.active_file_id = self.open_files.last().copied();
            changed = true;
        }

        let removed = self.files.remove_all(&doomed);
        if removed > 0 {
            tracing::debug!(%id, removed, "deleted subtree");
        }
        changed || removed > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
