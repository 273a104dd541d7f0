//! Tick-loop driver.
//!
//! [`Engine`] owns the rain state, a [`Backend`](word_rain_term::Backend) to
//! draw on and an event source to poll, and runs them at a fixed rate until a
//! key is pressed or a termination signal arrives.

pub mod engine;

pub use word_rain_core as core;
pub use word_rain_input as input;
pub use word_rain_term as term;
pub use word_rain_types as types;

pub use engine::{Engine, ExitReason};
