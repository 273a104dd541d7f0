//! Core types module - shared constants and plain data
//!
//! Everything here is dependency-free so the model, the terminal layer and the
//! input layer can agree on sizes, timing and colors without pulling each
//! other in.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval (~20 ticks/s) |
//! | `MAX_SLOW` | 15 | Slowest fall period, in ticks per row |
//!
//! # Pool and samples
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POOL_CAPACITY` | 30 | Streams alive at the same time |
//! | `MAX_SPAWNS_PER_TICK` | 2 | New streams per tick |
//! | `SPAWN_ODDS` | 5 | An idle slot tries to spawn with probability 1/5 |
//! | `MAX_WORD_LEN` | 80 | Glyphs per sample, trailing space included |
//! | `MAX_SAMPLES` | 80 | Entries kept from a word list |
//!
//! # Examples
//!
//! ```
//! use word_rain_types::{GlyphColor, TermSize, POOL_CAPACITY};
//!
//! assert_eq!(POOL_CAPACITY, 30);
//! assert_eq!(GlyphColor::Green.sgr_code(), 32);
//!
//! let size = TermSize::new(80, 24);
//! assert!(size.is_usable());
//! assert_eq!(size.spawn_column_max(), 79);
//! ```

/// Fixed timestep interval in milliseconds (50ms ≈ 20 ticks per second)
pub const TICK_MS: u64 = 50;

/// Number of particle slots in the pool
pub const POOL_CAPACITY: usize = 30;

/// Upper bound of the per-stream fall period (ticks per one-row advance)
pub const MAX_SLOW: u32 = 15;

/// Maximum glyph count of one sample, including its trailing space
pub const MAX_WORD_LEN: usize = 80;

/// Maximum number of samples loaded from a word list
pub const MAX_SAMPLES: usize = 80;

/// An idle slot attempts a spawn with probability `1 / SPAWN_ODDS`
pub const SPAWN_ODDS: u32 = 5;

/// Spawn cap per tick
pub const MAX_SPAWNS_PER_TICK: usize = 2;

/// Seed used when none is given, so runs are reproducible by default
pub const DEFAULT_SEED: u64 = 0;

/// Built-in phrases used when no word list is available
pub const DEFAULT_SAMPLES: [&str; 3] = ["Hello world ", "Terminal matrix ", "Powered by Jang "];

/// The eight classic foreground colors
///
/// Each maps to the SGR sequence `ESC[0;3Nm` where `N` is the palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlyphColor {
    Black,
    Red,
    #[default]
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl GlyphColor {
    /// Palette in SGR order
    pub const ALL: [GlyphColor; 8] = [
        GlyphColor::Black,
        GlyphColor::Red,
        GlyphColor::Green,
        GlyphColor::Yellow,
        GlyphColor::Blue,
        GlyphColor::Magenta,
        GlyphColor::Cyan,
        GlyphColor::White,
    ];

    /// Palette entry for an index, wrapping modulo 8
    ///
    /// # Examples
    ///
    /// ```
    /// use word_rain_types::GlyphColor;
    ///
    /// assert_eq!(GlyphColor::from_index(0), GlyphColor::Black);
    /// assert_eq!(GlyphColor::from_index(7), GlyphColor::White);
    /// assert_eq!(GlyphColor::from_index(9), GlyphColor::Red);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position in the palette (0..8)
    pub fn index(self) -> usize {
        self as usize
    }

    /// SGR foreground parameter (30..=37)
    pub fn sgr_code(self) -> u8 {
        30 + self as u8
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphColor::Black => "black",
            GlyphColor::Red => "red",
            GlyphColor::Green => "green",
            GlyphColor::Yellow => "yellow",
            GlyphColor::Blue => "blue",
            GlyphColor::Magenta => "magenta",
            GlyphColor::Cyan => "cyan",
            GlyphColor::White => "white",
        }
    }
}

/// Terminal dimensions in character cells
///
/// Rows and columns are counted from 1 on screen; a stream at `column` is
/// drawable while `1 <= column <= columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TermSize {
    pub columns: u16,
    pub rows: u16,
}

impl TermSize {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Whether anything can be drawn at this size
    pub fn is_usable(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    /// Highest column a new stream may start in.
    ///
    /// Streams spawn in `[1, columns - 1]`, keeping the last column free;
    /// a one-column terminal still gets column 1.
    pub fn spawn_column_max(&self) -> u16 {
        self.columns.saturating_sub(1).max(1)
    }

    /// Whether `row` (1-based) and `column` (1-based) fall on screen
    pub fn contains(&self, row: i32, column: u16) -> bool {
        row > 0 && row <= i32::from(self.rows) && column >= 1 && column <= self.columns
    }
}
