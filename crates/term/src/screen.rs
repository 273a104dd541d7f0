//! In-memory terminal model.
//!
//! `Screen` behaves like a terminal's cell buffer: glyphs stay where they were
//! drawn until overwritten or cleared. It backs headless runs and tests that
//! need to see what a real terminal would be showing.

use std::convert::Infallible;

use crate::backend::Backend;
use crate::core::GlyphSink;
use crate::types::{GlyphColor, TermSize};

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<GlyphColor>,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', color: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    size: TermSize,
    cells: Vec<Cell>,
    color: Option<GlyphColor>,
    size_query_fails: bool,
    clears: u64,
    frames: u64,
}

impl Screen {
    pub fn new(size: TermSize) -> Self {
        let len = usize::from(size.columns) * usize::from(size.rows);
        Self {
            size,
            cells: vec![Cell::default(); len],
            color: None,
            size_query_fails: false,
            clears: 0,
            frames: 0,
        }
    }

    pub fn size(&self) -> TermSize {
        self.size
    }

    /// Change the dimensions, keeping whatever still fits
    pub fn resize(&mut self, size: TermSize) {
        if self.size == size {
            return;
        }
        let mut next = Screen::new(size);
        for row in 1..=size.rows.min(self.size.rows) {
            for column in 1..=size.columns.min(self.size.columns) {
                if let (Some(from), Some(to)) = (self.idx(row, column), next.idx(row, column)) {
                    next.cells[to] = self.cells[from];
                }
            }
        }
        self.size = size;
        self.cells = next.cells;
    }

    /// Make subsequent size queries fail (or succeed again)
    pub fn fail_size_queries(&mut self, fail: bool) {
        self.size_query_fails = fail;
    }

    #[inline(always)]
    fn idx(&self, row: u16, column: u16) -> Option<usize> {
        if row == 0 || column == 0 || row > self.size.rows || column > self.size.columns {
            return None;
        }
        Some(usize::from(row - 1) * usize::from(self.size.columns) + usize::from(column - 1))
    }

    /// Cell at 1-based `row`, `column`
    pub fn get(&self, row: u16, column: u16) -> Option<Cell> {
        self.idx(row, column).map(|i| self.cells[i])
    }

    /// One row as text
    pub fn row_text(&self, row: u16) -> String {
        (1..=self.size.columns)
            .filter_map(|column| self.get(row, column))
            .map(|c| c.ch)
            .collect()
    }

    /// True if no cell has been drawn since the last clear
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::default())
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl GlyphSink for Screen {
    type Error = Infallible;

    fn set_color(&mut self, color: GlyphColor) -> Result<(), Infallible> {
        self.color = Some(color);
        Ok(())
    }

    fn put_glyph(&mut self, row: u16, column: u16, ch: char) -> Result<(), Infallible> {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = Cell {
                ch,
                color: self.color,
            };
        }
        Ok(())
    }
}

impl Backend for Screen {
    fn query_size(&mut self) -> Option<TermSize> {
        (!self.size_query_fails).then_some(self.size)
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        self.cells.fill(Cell::default());
        self.clears += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.frames += 1;
        Ok(())
    }
}
