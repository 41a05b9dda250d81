//! Opaque content spans skipped by the scanner when `ignore_content` is set.
//!
//! The scanner only consumes [`OpaqueSpans`]; where the spans come from is up
//! to the host. [`literal_spans`] is the bundled detector for quoted literals.

use crate::document::{Document, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InLiteral(char),
    InLiteralEscape(char),
}

impl ScanState {
    pub fn advance(self, ch: char, quotes: &[char]) -> Self {
        match self {
            ScanState::Normal if quotes.contains(&ch) => ScanState::InLiteral(ch),
            ScanState::Normal => ScanState::Normal,
            ScanState::InLiteral(quote) => match ch {
                '\\' => ScanState::InLiteralEscape(quote),
                c if c == quote => ScanState::Normal,
                // Only backtick literals span lines
                '\n' if quote != '`' => ScanState::Normal,
                _ => ScanState::InLiteral(quote),
            },
            ScanState::InLiteralEscape(quote) => ScanState::InLiteral(quote),
        }
    }

    pub fn is_in_literal(self) -> bool {
        matches!(
            self,
            ScanState::InLiteral(_) | ScanState::InLiteralEscape(_)
        )
    }
}

/// Finds quoted literal spans, quotes included. An unclosed literal ends with
/// its line, except a backtick literal, which runs to the end of the document.
pub fn literal_spans(doc: &Document, quotes: &[char]) -> Vec<Range> {
    let mut spans = Vec::new();
    let mut state = ScanState::default();
    let mut open = 0;

    for offset in 0..doc.len() {
        let Some(ch) = doc.char_at(offset) else {
            break;
        };
        let next = state.advance(ch, quotes);
        match (state.is_in_literal(), next.is_in_literal()) {
            (false, true) => open = offset,
            (true, false) if ch == '\n' => spans.push(doc.range_at(open, offset)),
            (true, false) => spans.push(doc.range_at(open, offset + 1)),
            _ => {}
        }
        state = next;
    }
    if state.is_in_literal() {
        spans.push(doc.range_at(open, doc.len()));
    }

    spans
}

/// Sorted, merged char-offset spans for fast containment tests.
#[derive(Debug, Clone, Default)]
pub struct OpaqueSpans {
    spans: Vec<(usize, usize)>,
}

impl OpaqueSpans {
    pub fn new(doc: &Document, ranges: &[Range]) -> Self {
        let mut spans: Vec<(usize, usize)> = ranges
            .iter()
            .map(|r| (doc.offset_at(r.start), doc.offset_at(r.end)))
            .filter(|(start, end)| start < end)
            .collect();
        spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self { spans: merged }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The span covering `offset`, if any.
    pub fn span_containing(&self, offset: usize) -> Option<(usize, usize)> {
        let idx = self.spans.partition_point(|&(start, _)| start <= offset);
        let (start, end) = *self.spans.get(idx.checked_sub(1)?)?;
        (offset < end).then_some((start, end))
    }

    /// Splits `[start, end)` into the pieces not covered by any span.
    pub fn subtract(&self, start: usize, end: usize) -> Vec<(usize, usize)> {
        let mut pieces = Vec::new();
        let mut cursor = start;
        for &(span_start, span_end) in &self.spans {
            if span_end <= cursor {
                continue;
            }
            if span_start >= end {
                break;
            }
            if span_start > cursor {
                pieces.push((cursor, span_start));
            }
            cursor = cursor.max(span_end);
        }
        if cursor < end {
            pieces.push((cursor, end));
        }
        pieces
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
