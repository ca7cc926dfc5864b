//! Headless editor core (state/action/effect).

pub mod action;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use state::{ActiveDocument, EditorSnapshot, EditorState, InvariantViolation, TabItem};
pub use store::{DispatchResult, Store, StoreConfig};
