//! Glyph sinks - where the advance pass sends its output
//!
//! The model never touches a terminal. It reports a color change followed by
//! positioned glyphs, and the sink decides what that means: escape sequences,
//! a cell grid, or a log for tests.

use std::convert::Infallible;

use crate::types::GlyphColor;

/// Receiver of draw output, 1-based rows and columns
pub trait GlyphSink {
    type Error;

    /// Select the color for the glyphs that follow
    fn set_color(&mut self, color: GlyphColor) -> Result<(), Self::Error>;

    /// Draw one glyph at `row`, `column`
    fn put_glyph(&mut self, row: u16, column: u16, ch: char) -> Result<(), Self::Error>;
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Color(GlyphColor),
    Glyph { row: u16, column: u16, ch: char },
}

/// Sink that records every call in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawLog {
    ops: Vec<DrawOp>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the glyph draws, as `(row, column, ch)`
    pub fn glyphs(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Glyph { row, column, ch } => Some((row, column, ch)),
            DrawOp::Color(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl GlyphSink for DrawLog {
    type Error = Infallible;

    fn set_color(&mut self, color: GlyphColor) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Color(color));
        Ok(())
    }

    fn put_glyph(&mut self, row: u16, column: u16, ch: char) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Glyph { row, column, ch });
        Ok(())
    }
}

/// Sink that only counts; never allocates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphCounter {
    pub colors: u64,
    pub glyphs: u64,
}

impl GlyphSink for GlyphCounter {
    type Error = Infallible;

    fn set_color(&mut self, _color: GlyphColor) -> Result<(), Infallible> {
        self.colors += 1;
        Ok(())
    }

    fn put_glyph(&mut self, _row: u16, _column: u16, _ch: char) -> Result<(), Infallible> {
        self.glyphs += 1;
        Ok(())
    }
}
