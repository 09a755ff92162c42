//! NeonCode simulation core
//!
//! Everything the TUI shell needs to fake an intelligent coding
//! environment: keyword-matched canned responses, a deterministic reveal
//! scheduler, the step animator for the recursion trace, and the pure
//! frame planner the visualizer draws from. No I/O and no threads: every
//! time-dependent component is polled against an injected [`Clock`],
//! which is what makes the whole demo testable under virtual time.

pub mod animator;
pub mod chat;
pub mod clock;
pub mod collab;
pub mod editor;
pub mod frame;
pub mod lessons;
pub mod prompts;
pub mod responder;
pub mod reveal;
pub mod session;
pub mod shell;
pub mod trace;
pub mod voice;

pub use clock::{Clock, ManualClock, SystemClock};
