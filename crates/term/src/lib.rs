//! Terminal output for the rain.
//!
//! A thin layer between the model and a display:
//! - [`ansi`]: the exact escape sequences written to the terminal
//! - [`Backend`]: what the engine needs from a display (size, clear, present)
//! - [`TerminalRenderer`]: raw mode plus buffered escape-sequence output
//! - [`Screen`]: in-memory cell buffer with the same retention semantics

pub mod ansi;
pub mod backend;
pub mod renderer;
pub mod screen;

pub use word_rain_core as core;
pub use word_rain_types as types;

pub use ansi::SetGlyphColor;
pub use backend::Backend;
pub use renderer::{restore_terminal_best_effort, TerminalRenderer};
pub use screen::{Cell, Screen};
