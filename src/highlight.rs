//! Turns a resolved scope into decorated ranges and owns the decoration
//! handles created for them.

use ratatui::style::Style;
use serde::Serialize;

use crate::config::ScopeConfig;
use crate::content::OpaqueSpans;
use crate::decoration::{DecorationKind, DecorationStyles};
use crate::document::{Document, Position, Range};
use crate::scanner::ScopeMatch;
use crate::symbols::SymbolRole;

/// Ranges to decorate for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeRanges {
    pub anchor: Range,
    /// Text between the two symbols minus opaque spans; empty pieces omitted
    pub content: Vec<Range>,
    pub counterpart: Range,
}

impl ScopeRanges {
    /// Anchor, content pieces, counterpart.
    pub fn ordered(&self) -> Vec<Range> {
        let mut ranges = Vec::with_capacity(self.content.len() + 2);
        ranges.push(self.anchor);
        ranges.extend(self.content.iter().copied());
        ranges.push(self.counterpart);
        ranges
    }

    pub fn symbols(&self) -> [Range; 2] {
        [self.anchor, self.counterpart]
    }
}

pub fn ranges_for(
    doc: &Document,
    scope: &ScopeMatch,
    opaque: &OpaqueSpans,
    config: &ScopeConfig,
) -> ScopeRanges {
    let (first, second) = if scope.anchor.start <= scope.counterpart.start {
        (scope.anchor, scope.counterpart)
    } else {
        (scope.counterpart, scope.anchor)
    };
    let inner_start = doc.offset_at(first.end);
    let inner_end = doc.offset_at(second.start);

    // A pair inside one literal keeps that literal's text as its content
    let shared_span = opaque
        .span_containing(doc.offset_at(first.start))
        .is_some_and(|span| opaque.span_containing(doc.offset_at(second.start)) == Some(span));

    let pieces = if config.ignore_content && !shared_span {
        opaque.subtract(inner_start, inner_end)
    } else if inner_start < inner_end {
        vec![(inner_start, inner_end)]
    } else {
        Vec::new()
    };

    ScopeRanges {
        anchor: scope.anchor,
        content: pieces
            .into_iter()
            .map(|(start, end)| doc.range_at(start, end))
            .collect(),
        counterpart: scope.counterpart,
    }
}

/// The two stretches of the document outside the scope, for dimming.
///
/// With a start-role anchor the scope opens at the anchor, so the leading
/// range stops at the anchor and the trailing one starts after the
/// counterpart. With an end-role anchor the two swap.
pub fn outside_scope_ranges(
    document_end: Position,
    scope: &ScopeMatch,
    anchor_role: SymbolRole,
) -> (Range, Range) {
    let origin = Position::default();
    match anchor_role {
        SymbolRole::Start => (
            Range::new(origin, scope.anchor.start),
            Range::new(scope.counterpart.end, document_end),
        ),
        SymbolRole::End => (
            Range::new(origin, scope.counterpart.start),
            Range::new(scope.anchor.end, document_end),
        ),
    }
}

/// Host-owned reference to a live decoration. Not `Clone`: removing a
/// decoration consumes its handle.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DecorationHandle(u64);

impl DecorationHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A rendering surface that can show styled overlays on ranges.
pub trait DecorationSurface {
    fn create(&mut self, kind: DecorationKind, style: Style, ranges: &[Range]) -> DecorationHandle;

    fn remove(&mut self, handle: DecorationHandle);
}

#[derive(Debug, Default)]
pub struct RangeHighlighter {
    active: Vec<DecorationHandle>,
}

impl RangeHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is currently shown with decorations for `ranges`,
    /// plus dimming of `outside` when given.
    pub fn apply<S: DecorationSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        ranges: &ScopeRanges,
        outside: Option<(Range, Range)>,
        styles: &DecorationStyles,
    ) {
        self.dispose(surface);

        self.decorate(surface, DecorationKind::Symbols, &ranges.symbols(), styles);
        self.decorate(surface, DecorationKind::Content, &ranges.content, styles);
        if let Some((before, after)) = outside {
            self.decorate(surface, DecorationKind::OutOfScope, &[before, after], styles);
        }
    }

    fn decorate<S: DecorationSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        kind: DecorationKind,
        ranges: &[Range],
        styles: &DecorationStyles,
    ) {
        let ranges: Vec<Range> = ranges.iter().copied().filter(|r| !r.is_empty()).collect();
        if ranges.is_empty() {
            return;
        }
        let handle = surface.create(kind, styles.style_for(kind), &ranges);
        self.active.push(handle);
    }

    /// Removes every decoration this highlighter created. Safe to call any
    /// number of times.
    pub fn dispose<S: DecorationSurface + ?Sized>(&mut self, surface: &mut S) {
        for handle in std::mem::take(&mut self.active) {
            surface.remove(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
