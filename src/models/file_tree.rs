//! Virtual file tree model.
//!
//! Items live in a flat list in insertion order. Two derived indexes sit next
//! to it: `slots` (id -> position) and `children` (parent -> child ids, in
//! insertion order). Both are kept in sync on insert/remove and rebuilt when a
//! tree is restored from a list of items.

use compact_str::{format_compact, CompactString};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Suffix every file name carries.
pub const FILE_EXTENSION: &str = ".txt";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Allocates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    File {
        content: String,
    },
    Folder {
        #[serde(rename = "isExpanded")]
        is_expanded: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemItem {
    pub id: ItemId,
    pub name: CompactString,
    #[serde(flatten)]
    pub kind: ItemKind,
    #[serde(default)]
    pub parent_id: Option<ItemId>,
}

impl FileSystemItem {
    pub fn new_file(name: &str, parent_id: Option<ItemId>) -> Self {
        Self {
            id: ItemId::generate(),
            name: normalize_file_name(name),
            kind: ItemKind::File {
                content: String::new(),
            },
            parent_id,
        }
    }

    pub fn new_folder(name: &str, parent_id: Option<ItemId>) -> Self {
        Self {
            id: ItemId::generate(),
            name: CompactString::from(name),
            kind: ItemKind::Folder { is_expanded: true },
            parent_id,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, ItemKind::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder { .. })
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::File { content } => Some(content),
            ItemKind::Folder { .. } => None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        match self.kind {
            ItemKind::Folder { is_expanded } => is_expanded,
            ItemKind::File { .. } => false,
        }
    }
}

/// Appends [`FILE_EXTENSION`] unless `name` already ends with it.
pub fn normalize_file_name(name: &str) -> CompactString {
    if name.ends_with(FILE_EXTENSION) {
        CompactString::from(name)
    } else {
        format_compact!("{name}{FILE_EXTENSION}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    items: Vec<FileSystemItem>,
    slots: FxHashMap<ItemId, usize>,
    children: FxHashMap<Option<ItemId>, Vec<ItemId>>,
}

impl PartialEq for FileSystem {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for FileSystem {}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a flat list, keeping the first item for any
    /// repeated id.
    pub fn from_items(items: Vec<FileSystemItem>) -> Self {
        let mut tree = Self::new();
        for item in items {
            if tree.contains(item.id) {
                tracing::warn!(id = %item.id, "dropping item with duplicate id");
                continue;
            }
            tree.insert(item);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: ItemId) -> Option<&FileSystemItem> {
        self.slots.get(&id).map(|&slot| &self.items[slot])
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut FileSystemItem> {
        let slot = *self.slots.get(&id)?;
        self.items.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileSystemItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[FileSystemItem] {
        &self.items
    }

    pub fn insert(&mut self, item: FileSystemItem) -> ItemId {
        let id = item.id;
        self.children.entry(item.parent_id).or_default().push(id);
        self.slots.insert(id, self.items.len());
        self.items.push(item);
        id
    }

    pub fn child_ids(&self, parent: Option<ItemId>) -> &[ItemId] {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn children(&self, parent: Option<ItemId>) -> impl Iterator<Item = &FileSystemItem> {
        self.child_ids(parent)
            .iter()
            .filter_map(|&child| self.get(child))
    }

    /// Every item whose parent chain reaches `id`, excluding `id` itself.
    pub fn descendants(&self, id: ItemId) -> Vec<ItemId> {
        let mut result = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(id);
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            for &child in self.child_ids(Some(current)) {
                if seen.insert(child) {
                    result.push(child);
                    stack.push(child);
                }
            }
        }

        result
    }

    /// Removes every listed id in one pass. Unknown ids are ignored.
    pub fn remove_all(&mut self, ids: &FxHashSet<ItemId>) -> usize {
        let before = self.items.len();
        let mut parents = FxHashSet::default();
        for id in ids {
            if let Some(item) = self.get(*id) {
                parents.insert(item.parent_id);
            }
            self.children.remove(&Some(*id));
        }

        self.items.retain(|item| !ids.contains(&item.id));

        for parent in parents {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|child| !ids.contains(child));
                if siblings.is_empty() {
                    self.children.remove(&parent);
                }
            }
        }

        self.slots.clear();
        for (slot, item) in self.items.iter().enumerate() {
            self.slots.insert(item.id, slot);
        }

        before - self.items.len()
    }

    pub fn into_items(self) -> Vec<FileSystemItem> {
        self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: ItemId,
    pub depth: u16,
    pub name: CompactString,
    pub is_folder: bool,
    pub is_expanded: bool,
}

impl FileSystem {
    /// Depth-first rows for the tree view. Children of collapsed folders are
    /// skipped; siblings keep insertion order.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::with_capacity(self.items.len());
        let mut stack: Vec<(ItemId, u16)> = self
            .child_ids(None)
            .iter()
            .rev()
            .map(|&id| (id, 0))
            .collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(item) = self.get(id) else {
                continue;
            };

            result.push(FileTreeRow {
                id,
                depth,
                name: item.name.clone(),
                is_folder: item.is_folder(),
                is_expanded: item.is_expanded(),
            });

            if item.is_expanded() {
                for &child in self.child_ids(Some(id)).iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
