//! Terminal input module (engine-facing).
//!
//! Input for the rain is minimal: any key stops it, and the terminal size can
//! change underneath it. This crate polls crossterm events without blocking,
//! classifies them, and turns OS signals into flags the tick loop consumes at
//! tick boundaries.

pub mod map;
pub mod poll;
pub mod signals;

pub use map::{classify, InputSignal};
pub use poll::{EventSource, InputPoller, ScriptedEvents, TerminalEvents, MAX_EVENTS_PER_POLL};
pub use signals::SignalFlags;
