//! treepad - headless core of a tabbed plain-text editor.
//!
//! Modules:
//! - models: virtual file tree (FileSystem, FileSystemItem)
//! - kernel: editor state, actions, effects and the reducer store
//! - kernel::services: snapshot/settings ports and their filesystem adapters
//! - app: session host that restores, persists and closes a store
//! - logging: tracing subscriber setup

pub mod app;
pub mod kernel;
pub mod logging;
pub mod models;
