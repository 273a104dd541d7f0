//! Core rain model - pure, deterministic, and testable
//!
//! This crate holds the particle pool, the spawner, and the advance/render
//! pass. It has **no terminal dependencies**: output goes through the
//! [`GlyphSink`] trait, and terminal size arrives through [`Rain::set_size`].
//!
//! - **Deterministic**: the same seed and the same sequence of sizes produce
//!   the same draw calls
//! - **Allocation-free ticks**: the pool is a fixed array and stream text is
//!   a fixed-capacity glyph buffer
//!
//! # Module Structure
//!
//! - [`particle`]: one falling stream, its fall timer and visible glyphs
//! - [`pool`]: fixed arena of 30 particle slots
//! - [`rng`]: seedable generator for every random decision
//! - [`samples`]: word list loading and normalization
//! - [`spawner`]: idle slot activation with column spacing
//! - [`rain`]: the tick (spawn pass + advance pass)
//! - [`sink`]: draw output abstraction and recording sinks
//!
//! # Example
//!
//! ```
//! use word_rain_core::{DrawLog, Rain, SampleStore};
//! use word_rain_core::types::TermSize;
//!
//! let mut rain = Rain::new(SampleStore::defaults(), 0);
//! rain.set_size(TermSize::new(80, 24));
//!
//! let mut log = DrawLog::new();
//! for _ in 0..100 {
//!     rain.tick(&mut log).unwrap();
//! }
//! assert!(rain.pool().active_count() > 0);
//! assert!(log.glyphs().count() > 0);
//! ```

pub mod particle;
pub mod pool;
pub mod rain;
pub mod rng;
pub mod samples;
pub mod sink;
pub mod spawner;

pub use word_rain_types as types;

pub use particle::Particle;
pub use pool::ParticlePool;
pub use rain::{Rain, TickReport};
pub use rng::RainRng;
pub use samples::{normalize_entry, Glyphs, SampleError, SampleStore};
pub use sink::{DrawLog, DrawOp, GlyphCounter, GlyphSink};
pub use spawner::spawn_pass;
