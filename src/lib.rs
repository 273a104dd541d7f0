//! word-rain (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmark share one import surface:
//! `word_rain::{core, engine, input, term, types}`.

pub mod cli;

pub use word_rain_core as core;
pub use word_rain_engine as engine;
pub use word_rain_input as input;
pub use word_rain_term as term;
pub use word_rain_types as types;

pub use cli::{init_logging, Args};
