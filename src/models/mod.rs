//! Data models.

pub mod file_tree;

pub use file_tree::{
    normalize_file_name, FileSystem, FileSystemItem, FileTreeRow, ItemId, ItemKind,
    FILE_EXTENSION,
};
