//! Session host: owns the store for one editing session and runs its effects.

pub mod session;

pub use session::{CloseError, Session};
