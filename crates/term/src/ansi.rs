//! Escape sequence encoding.
//!
//! The output is a handful of sequences, byte-for-byte:
//!
//! | Purpose | Bytes |
//! |---------|-------|
//! | clear screen | `ESC[2J` |
//! | cursor to row/col (1-based) | `ESC[{row};{col}H` |
//! | palette color N | `ESC[0;3{N}m` |
//! | reset | `ESC[0m` |
//!
//! crossterm's `Clear`, `MoveTo` and `ResetColor` already produce these. The
//! palette color needs the `0;` prefix, so it gets its own command.

use std::fmt;

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, Command, QueueableCommand,
};

use crate::types::GlyphColor;

/// `ESC[0;3Nm`: reset attributes and select palette foreground `N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetGlyphColor(pub GlyphColor);

impl Command for SetGlyphColor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[0;{}m", self.0.sgr_code())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn encode_clear_into(out: &mut Vec<u8>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

pub fn encode_color_into(out: &mut Vec<u8>, color: GlyphColor) -> std::io::Result<()> {
    out.queue(SetGlyphColor(color))?;
    Ok(())
}

/// Cursor to 1-based `row`/`column`, then the glyph
pub fn encode_glyph_into(out: &mut Vec<u8>, row: u16, column: u16, ch: char) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(
        column.saturating_sub(1),
        row.saturating_sub(1),
    ))?;
    out.queue(Print(ch))?;
    Ok(())
}

/// Cursor back to the top-left corner
pub fn encode_park_into(out: &mut Vec<u8>) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

pub fn encode_reset_into(out: &mut Vec<u8>) -> std::io::Result<()> {
    out.queue(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clear_is_2j() {
        assert_eq!(encoded(encode_clear_into), "\x1b[2J");
    }

    #[test]
    fn colors_use_zero_prefix() {
        assert_eq!(
            encoded(|o| encode_color_into(o, GlyphColor::Black)),
            "\x1b[0;30m"
        );
        assert_eq!(
            encoded(|o| encode_color_into(o, GlyphColor::Green)),
            "\x1b[0;32m"
        );
        assert_eq!(
            encoded(|o| encode_color_into(o, GlyphColor::White)),
            "\x1b[0;37m"
        );
    }

    #[test]
    fn glyph_positions_are_one_based() {
        assert_eq!(
            encoded(|o| encode_glyph_into(o, 1, 1, 'a')),
            "\x1b[1;1Ha"
        );
        assert_eq!(
            encoded(|o| encode_glyph_into(o, 12, 40, 'ｱ')),
            "\x1b[12;40Hｱ"
        );
    }

    #[test]
    fn park_and_reset() {
        assert_eq!(encoded(encode_park_into), "\x1b[1;1H");
        assert_eq!(encoded(encode_reset_into), "\x1b[0m");
    }
}
