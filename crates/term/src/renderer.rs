//! TerminalRenderer: writes rain to the real terminal.
//!
//! Draw calls are encoded into an internal byte buffer and written out in one
//! go by [`Backend::present`]. Nothing is diffed; cells drawn in earlier
//! frames stay on screen because the terminal keeps them.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::terminal;
use tracing::warn;

use crate::ansi::{
    encode_clear_into, encode_color_into, encode_glyph_into, encode_park_into, encode_reset_into,
};
use crate::backend::Backend;
use crate::core::GlyphSink;
use crate::types::{GlyphColor, TermSize};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer that writes frames to `out` instead of stdout
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
            raw: false,
        }
    }

    /// Switch the terminal to raw mode: no line buffering, no echo.
    ///
    /// Fails if raw mode is unavailable (for example when stdin is not a tty).
    /// The screen is cleared by the engine once the size is known.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("cannot switch terminal to raw mode")?;
        self.raw = true;
        Ok(())
    }

    /// Reset colors and restore the previous input mode.
    ///
    /// Raw mode is left even when the reset cannot be written; the first
    /// error is returned afterwards.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        let reset = encode_reset_into(&mut self.buf).and_then(|()| self.flush_buf());
        self.buf.clear();

        let mode = if self.raw {
            self.raw = false;
            terminal::disable_raw_mode().context("cannot restore terminal mode")
        } else {
            Ok(())
        };

        reset.context("cannot reset terminal colors")?;
        mode
    }

    /// Bytes queued since the last present
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> GlyphSink for TerminalRenderer<W> {
    type Error = io::Error;

    fn set_color(&mut self, color: GlyphColor) -> io::Result<()> {
        encode_color_into(&mut self.buf, color)
    }

    fn put_glyph(&mut self, row: u16, column: u16, ch: char) -> io::Result<()> {
        encode_glyph_into(&mut self.buf, row, column, ch)
    }
}

impl<W: Write> Backend for TerminalRenderer<W> {
    fn query_size(&mut self) -> Option<TermSize> {
        match terminal::size() {
            Ok((columns, rows)) => Some(TermSize::new(columns, rows)),
            Err(err) => {
                warn!(error = %err, "terminal size query failed");
                None
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        encode_clear_into(&mut self.buf)
    }

    fn present(&mut self) -> io::Result<()> {
        encode_park_into(&mut self.buf)?;
        self.flush_buf()
    }
}

/// Best-effort terminal restore for panic and signal paths.
///
/// Safe to call when the terminal was never switched.
pub fn restore_terminal_best_effort() {
    let mut out = Vec::new();
    if encode_reset_into(&mut out).is_ok() {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(&out);
        let _ = stdout.flush();
    }
    let _ = terminal::disable_raw_mode();
}
