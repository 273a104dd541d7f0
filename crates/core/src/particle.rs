//! Particle module - one falling stream of text
//!
//! A particle is a column, a head row and a run of glyphs hanging above the
//! head. Glyph `i` sits at `head_row - i`, so the text reads top to bottom in
//! reverse while it falls.

use crate::samples::Glyphs;
use crate::types::{GlyphColor, TermSize};

/// One slot of the particle pool
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Particle {
    active: bool,
    column: u16,
    head_row: i32,
    text: Glyphs,
    fall_period: u32,
    ticks_since_advance: u32,
    color: GlyphColor,
}

impl Particle {
    /// An idle slot
    pub fn idle() -> Self {
        Self::default()
    }

    /// Activate this slot as a fresh stream at row 0
    pub fn spawn(&mut self, column: u16, fall_period: u32, text: &Glyphs, color: GlyphColor) {
        self.active = true;
        self.column = column;
        self.head_row = 0;
        self.text.clone_from(text);
        self.fall_period = fall_period.max(1);
        self.ticks_since_advance = 0;
        self.color = color;
    }

    /// Free the slot. The text buffer is kept for reuse.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Count one tick; returns true when the head moved down a row.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.ticks_since_advance += 1;
        if self.ticks_since_advance >= self.fall_period {
            self.ticks_since_advance = 0;
            self.head_row += 1;
            true
        } else {
            false
        }
    }

    /// Glyphs currently on screen as `(row, glyph)`, head first
    pub fn visible_glyphs(&self, size: TermSize) -> impl Iterator<Item = (u16, char)> + '_ {
        let head = self.head_row;
        let column = self.column;
        self.text
            .iter()
            .enumerate()
            .filter_map(move |(i, &ch)| {
                let row = head - i as i32;
                size.contains(row, column).then(|| (row as u16, ch))
            })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn head_row(&self) -> i32 {
        self.head_row
    }

    pub fn text(&self) -> &Glyphs {
        &self.text
    }

    pub fn fall_period(&self) -> u32 {
        self.fall_period
    }

    pub fn ticks_since_advance(&self) -> u32 {
        self.ticks_since_advance
    }

    pub fn color(&self) -> GlyphColor {
        self.color
    }
}
