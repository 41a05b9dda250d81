//! Counterpart resolution for a scope symbol.
//!
//! Starting next to an anchor symbol, the scanner walks the document one
//! token at a time (a cataloged symbol, an opaque span, or a single char)
//! keeping a nesting depth. The anchor's own kind opens a level and the
//! counterpart closes one; the walk stops when the depth returns to zero.
//! If the natural direction fails and reverse search is enabled, a second
//! walk runs the other way with the roles swapped, which lands on the
//! nearest enclosing symbol of the anchor's kind.

use serde::Serialize;

use crate::config::ScopeConfig;
use crate::content::OpaqueSpans;
use crate::document::{Document, Position, Range};
use crate::error::ScopeError;
use crate::symbols::{SearchDirection, Symbol, SymbolCatalog};

/// A resolved pair of symbol ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeMatch {
    pub anchor: Range,
    pub counterpart: Range,
    /// Direction of the walk that produced the match
    pub direction: SearchDirection,
    /// Whether the reverse fallback produced the match
    pub reversed: bool,
}

impl ScopeMatch {
    /// The range spanning both symbols and everything between them.
    pub fn full_range(&self) -> Range {
        Range::new(
            self.anchor.start.min(self.counterpart.start),
            self.anchor.end.max(self.counterpart.end),
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum TokenKind<'c> {
    Symbol(&'c Symbol),
    Opaque,
    Char,
}

#[derive(Debug, Clone, Copy)]
struct Token<'c> {
    start: usize,
    end: usize,
    kind: TokenKind<'c>,
}

struct Walk<'w> {
    direction: SearchDirection,
    /// Text that opens a nesting level
    opener: &'w str,
    /// Text that closes a level; reaching depth zero on it ends the walk
    target: &'w str,
}

pub struct ScopeScanner<'a> {
    doc: &'a Document,
    catalog: &'a SymbolCatalog,
    opaque: &'a OpaqueSpans,
}

impl<'a> ScopeScanner<'a> {
    pub fn new(doc: &'a Document, catalog: &'a SymbolCatalog, opaque: &'a OpaqueSpans) -> Self {
        Self {
            doc,
            catalog,
            opaque,
        }
    }

    /// Finds the counterpart of the `anchor` symbol starting at `origin`.
    ///
    /// Returns [`ScopeError::MalformedSelection`] if `anchor` does not occur
    /// at `origin`, and [`ScopeError::NoMatchFound`] if neither the natural
    /// walk nor (when enabled) the reverse fallback reaches depth zero
    /// within `max_line_search_count` lines.
    pub fn resolve(
        &self,
        anchor: &Symbol,
        counterpart: &Symbol,
        origin: Position,
        config: &ScopeConfig,
    ) -> Result<ScopeMatch, ScopeError> {
        let anchor_start = self.doc.offset_at(origin);
        if !self.doc.matches_at(anchor_start, anchor.text()) {
            return Err(ScopeError::MalformedSelection);
        }
        let anchor_end = anchor_start + anchor.len();
        let anchor_range = self.doc.range_at(anchor_start, anchor_end);

        // Brackets inside the same literal as the anchor still pair up
        let home = if config.ignore_content {
            self.opaque.span_containing(anchor_start)
        } else {
            None
        };

        let direction = self.catalog.direction_for(anchor);
        let natural = Walk {
            direction,
            opener: anchor.text(),
            target: counterpart.text(),
        };
        if let Some((start, end)) = self.walk(anchor_start, anchor_end, &natural, home, config) {
            return Ok(ScopeMatch {
                anchor: anchor_range,
                counterpart: self.doc.range_at(start, end),
                direction,
                reversed: false,
            });
        }

        if config.reverse_search_enabled {
            let reverse = Walk {
                direction: direction.reversed(),
                opener: counterpart.text(),
                target: anchor.text(),
            };
            if let Some((start, end)) =
                self.walk(anchor_start, anchor_end, &reverse, home, config)
            {
                #[cfg(debug_assertions)]
                log::debug!("Reverse search resolved {:?} at {}..{}", anchor.text(), start, end);
                return Ok(ScopeMatch {
                    anchor: anchor_range,
                    counterpart: self.doc.range_at(start, end),
                    direction: reverse.direction,
                    reversed: true,
                });
            }
        }

        Err(ScopeError::NoMatchFound)
    }

    fn walk(
        &self,
        anchor_start: usize,
        anchor_end: usize,
        walk: &Walk,
        home: Option<(usize, usize)>,
        config: &ScopeConfig,
    ) -> Option<(usize, usize)> {
        let max_lines = config.max_line_search_count.max(1);
        let mut pos = scan_origin(walk.direction, anchor_start, anchor_end);
        let mut depth = 1usize;
        let mut lines = 1usize;

        loop {
            let token = self.next_token(pos, walk.direction, config.ignore_content, home)?;
            lines += self.doc.newlines_between(token.start, token.end);
            if lines > max_lines {
                return None;
            }

            if let TokenKind::Symbol(symbol) = token.kind {
                // Target first: a self-paired text always closes
                if symbol.text() == walk.target {
                    depth -= 1;
                    if depth == 0 {
                        return Some((token.start, token.end));
                    }
                } else if symbol.text() == walk.opener {
                    depth += 1;
                }
            }

            pos = match walk.direction {
                SearchDirection::Forward => token.end,
                SearchDirection::Backward => token.start,
            };
        }
    }

    /// The token adjacent to boundary `pos` in `direction`, or `None` at the
    /// document edge.
    fn next_token(
        &self,
        pos: usize,
        direction: SearchDirection,
        ignore_content: bool,
        home: Option<(usize, usize)>,
    ) -> Option<Token<'a>> {
        let probe = match direction {
            SearchDirection::Forward if pos < self.doc.len() => pos,
            SearchDirection::Backward if pos > 0 => pos - 1,
            _ => return None,
        };

        if ignore_content {
            if let Some(span) = self.opaque.span_containing(probe) {
                if Some(span) != home {
                    let (start, end) = match direction {
                        SearchDirection::Forward => (pos, span.1),
                        SearchDirection::Backward => (span.0, pos),
                    };
                    return Some(Token {
                        start,
                        end,
                        kind: TokenKind::Opaque,
                    });
                }
            }
        }

        let symbol = match direction {
            SearchDirection::Forward => self.catalog.match_at(self.doc, pos),
            SearchDirection::Backward => self.catalog.match_ending_at(self.doc, pos),
        };
        let token = match (symbol, direction) {
            (Some(symbol), SearchDirection::Forward) => Token {
                start: pos,
                end: pos + symbol.len(),
                kind: TokenKind::Symbol(symbol),
            },
            (Some(symbol), SearchDirection::Backward) => Token {
                start: pos - symbol.len(),
                end: pos,
                kind: TokenKind::Symbol(symbol),
            },
            (None, _) => Token {
                start: probe,
                end: probe + 1,
                kind: TokenKind::Char,
            },
        };
        Some(token)
    }
}

/// Boundary a walk starts from: just past the anchor going forward, just
/// before it going backward.
pub fn scan_origin(direction: SearchDirection, anchor_start: usize, anchor_end: usize) -> usize {
    match direction {
        SearchDirection::Forward => anchor_end,
        SearchDirection::Backward => anchor_start,
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
