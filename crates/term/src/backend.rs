//! Output backend seam between the tick loop and a display.

use crate::core::GlyphSink;
use crate::types::TermSize;

/// A display the engine can draw rain on.
///
/// Glyph output comes through [`GlyphSink`]; this adds size queries, clearing
/// and end-of-frame presentation.
pub trait Backend: GlyphSink {
    /// Current dimensions, or `None` if the query failed
    fn query_size(&mut self) -> Option<TermSize>;

    /// Wipe everything drawn so far
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Finish the frame: park the cursor and push buffered output out
    fn present(&mut self) -> Result<(), Self::Error>;
}
