//! Immutable buffer snapshot addressed by zero-based (line, column) positions.
//!
//! Columns count `char`s, not bytes. Lines are split on `\n`; a trailing
//! `\r` stays part of the line text.

use serde::Serialize;

/// A location in a [`Document`]. Ordered line-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open span between two positions, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Builds a range, swapping the ends if they arrive out of order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    chars: Vec<char>,
    /// Char offset of the first character of each line
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        line_starts.extend(
            chars
                .iter()
                .enumerate()
                .filter(|&(_, &ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        Self { chars, line_starts }
    }

    /// Total length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Line contents without the terminating newline.
    pub fn line(&self, line: usize) -> &[char] {
        match self.line_bounds(line) {
            Some((start, end)) => &self.chars[start..end],
            None => &[],
        }
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).len()
    }

    fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.chars.len());
        Some((start, end))
    }

    /// Converts a position into a char offset, clamping past-the-end
    /// columns to the end of the line and past-the-end lines to the end
    /// of the document.
    pub fn offset_at(&self, pos: Position) -> usize {
        match self.line_bounds(pos.line) {
            Some((start, end)) => start + pos.column.min(end - start),
            None => self.chars.len(),
        }
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.chars.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, offset - self.line_starts[line])
    }

    pub fn start_position(&self) -> Position {
        Position::default()
    }

    pub fn end_position(&self) -> Position {
        self.position_at(self.chars.len())
    }

    pub fn range_at(&self, start: usize, end: usize) -> Range {
        Range::new(self.position_at(start), self.position_at(end))
    }

    /// Returns true if `text` occurs starting exactly at `offset`.
    pub fn matches_at(&self, offset: usize, text: &str) -> bool {
        let mut idx = offset;
        for ch in text.chars() {
            if self.chars.get(idx) != Some(&ch) {
                return false;
            }
            idx += 1;
        }
        true
    }

    /// Returns true if `text` occurs ending exactly at `end` (exclusive).
    pub fn matches_ending_at(&self, end: usize, text: &str) -> bool {
        let len = text.chars().count();
        end >= len && self.matches_at(end - len, text)
    }

    /// Number of line breaks in the half-open offset span.
    pub fn newlines_between(&self, start: usize, end: usize) -> usize {
        let end = end.min(self.chars.len());
        if start >= end {
            return 0;
        }
        self.chars[start..end].iter().filter(|&&c| c == '\n').count()
    }

    pub fn text_in(&self, range: Range) -> String {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        self.chars[start..end.max(start)].iter().collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
