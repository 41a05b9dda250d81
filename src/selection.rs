//! Anchor extraction: which cataloged symbol, if any, the cursor selection
//! refers to.

use crate::document::{Document, Position, Range};
use crate::error::ScopeError;
use crate::symbols::{Symbol, SymbolCatalog};

/// A cursor selection. `anchor` is where it started and `active` is where the
/// caret currently sits; the two are equal for a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    pub fn range(&self) -> Range {
        Range::new(self.start(), self.end())
    }
}

/// The symbol a selection resolved to and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub symbol: Symbol,
    /// Start of the symbol occurrence; the scan origin
    pub origin: Position,
}

/// Resolves the anchor symbol for `selection`.
///
/// A caret picks the longest cataloged symbol touching it: ending at the
/// caret, straddling it, or starting at it, in that order of preference for
/// occurrences of the same symbol. A non-empty
/// selection only counts when `from_text` is set and it covers exactly one
/// cataloged symbol on a single line.
pub fn extract_anchor(
    doc: &Document,
    catalog: &SymbolCatalog,
    selection: Selection,
    from_text: bool,
) -> Result<Anchor, ScopeError> {
    if !selection.is_empty() {
        return anchor_from_selected_text(doc, catalog, selection, from_text);
    }

    let caret = selection.active;
    if caret.line >= doc.line_count() {
        return Err(ScopeError::MalformedSelection);
    }
    let line = doc.line(caret.line);
    let column = caret.column.min(line.len());

    for symbol in catalog.valid_symbols() {
        if let Some(start) = occurrence_start(line, column, symbol) {
            return Ok(Anchor {
                symbol: symbol.clone(),
                origin: Position::new(caret.line, start),
            });
        }
    }

    Err(ScopeError::MalformedSelection)
}

fn anchor_from_selected_text(
    doc: &Document,
    catalog: &SymbolCatalog,
    selection: Selection,
    from_text: bool,
) -> Result<Anchor, ScopeError> {
    let range = selection.range();
    if !from_text || range.start.line != range.end.line {
        return Err(ScopeError::MalformedSelection);
    }
    let text = doc.text_in(range);
    let symbol = catalog
        .symbol(&text)
        .ok_or(ScopeError::MalformedSelection)?;
    Ok(Anchor {
        symbol: symbol.clone(),
        origin: range.start,
    })
}

/// Leftmost column where `symbol` occurs touching the caret at `column`.
fn occurrence_start(line: &[char], column: usize, symbol: &Symbol) -> Option<usize> {
    let len = symbol.len();
    (column.saturating_sub(len)..=column).find(|&start| {
        line.get(start..start + len)
            .is_some_and(|candidate| candidate.iter().copied().eq(symbol.text().chars()))
    })
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
