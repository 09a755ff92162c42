//! Shared low-level DTOs for NeonCode
//!
//! Lowest layer of the workspace: plain data types used by both the
//! simulation core and the TUI shell. No logic lives here.

pub mod message;
pub mod scene;
pub mod session;

pub use message::*;
pub use scene::*;
pub use session::*;
