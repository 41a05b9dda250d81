//! One highlight cycle per selection event.
//!
//! [`ScopeSession`] holds the current configuration snapshot, the catalog
//! built from it, the decorations it has put on the host surface, and the
//! pending hide timer. Each selection event clears the previous cycle's
//! decorations before any new ones are created.

use std::time::Instant;

use serde::Serialize;

use crate::config::Config;
use crate::content::OpaqueSpans;
use crate::decoration::DecorationStyles;
use crate::document::{Document, Range};
use crate::error::ScopeError;
use crate::highlight::{DecorationSurface, RangeHighlighter, ScopeRanges, outside_scope_ranges, ranges_for};
use crate::scanner::{ScopeMatch, ScopeScanner};
use crate::selection::{Selection, extract_anchor};
use crate::symbols::SymbolCatalog;
use crate::timer::HideTimer;

/// Everything the host knows when the selection changes.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEvent<'e> {
    pub document: &'e Document,
    pub selection: Selection,
    /// Language id of the document, checked against `enabled_languages`
    pub language: Option<&'e str>,
    /// Whether the host is in a debug session
    pub debugging: bool,
    /// Ranges the scanner treats as inert text when `ignore_content` is set
    pub opaque: &'e [Range],
}

/// A resolved scope and the ranges to decorate for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub symbol: String,
    pub scope: ScopeMatch,
    pub ranges: ScopeRanges,
    /// Leading and trailing out-of-scope ranges when blur is enabled
    pub outside: Option<(Range, Range)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Disabled,
    LanguageNotEnabled,
    Debugging,
    NoAnchor,
    NoMatch,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Highlighted(Highlight),
    Skipped(SkipReason),
}

/// Resolves the scope for `selection` without touching any surface.
pub fn resolve_selection(
    doc: &Document,
    selection: Selection,
    catalog: &SymbolCatalog,
    config: &Config,
    opaque: &[Range],
) -> Result<Highlight, ScopeError> {
    let scope_config = &config.scope;
    let anchor = extract_anchor(
        doc,
        catalog,
        selection,
        scope_config.highlight_scope_from_text,
    )?;
    let counterpart = catalog.counterpart(anchor.symbol.text())?;

    let opaque = if scope_config.ignore_content {
        OpaqueSpans::new(doc, opaque)
    } else {
        OpaqueSpans::empty()
    };
    let scope = ScopeScanner::new(doc, catalog, &opaque).resolve(
        &anchor.symbol,
        &counterpart,
        anchor.origin,
        scope_config,
    )?;

    let ranges = ranges_for(doc, &scope, &opaque, scope_config);
    let outside = config.blur.enabled.then(|| {
        outside_scope_ranges(doc.end_position(), &scope, scope.direction.anchor_role())
    });

    Ok(Highlight {
        symbol: anchor.symbol.text().to_string(),
        scope,
        ranges,
        outside,
    })
}

#[derive(Debug)]
pub struct ScopeSession {
    config: Config,
    catalog: SymbolCatalog,
    styles: DecorationStyles,
    highlighter: RangeHighlighter,
    hide_timer: HideTimer,
}

impl ScopeSession {
    pub fn new(config: Config) -> Result<Self, ScopeError> {
        let catalog = build_catalog(&config)?;
        let styles = DecorationStyles::from_config(&config.style, &config.blur);
        Ok(Self {
            config,
            catalog,
            styles,
            highlighter: RangeHighlighter::new(),
            hide_timer: HideTimer::new(),
        })
    }

    /// Swaps in a fresh configuration snapshot. On an invalid symbol table
    /// the previous snapshot stays in effect.
    pub fn on_config_change(&mut self, config: Config) -> Result<(), ScopeError> {
        let catalog = build_catalog(&config)?;
        self.styles = DecorationStyles::from_config(&config.style, &config.blur);
        self.catalog = catalog;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn is_highlighting(&self) -> bool {
        self.highlighter.is_active()
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_armed()
    }

    pub fn on_selection_change<S: DecorationSurface + ?Sized>(
        &mut self,
        event: &SelectionEvent,
        surface: &mut S,
    ) -> CycleOutcome {
        self.hide_timer.cancel();

        if !self.config.general.enabled {
            return self.skip(surface, SkipReason::Disabled);
        }
        if !self.config.general.is_language_enabled(event.language) {
            return self.skip(surface, SkipReason::LanguageNotEnabled);
        }
        if event.debugging && !self.config.debug.active_when_debugging {
            // Current decorations stay up until the timer fires
            self.hide_timer.schedule(self.config.debug.time_out_value);
            return CycleOutcome::Skipped(SkipReason::Debugging);
        }

        self.highlighter.dispose(surface);

        let highlight = match resolve_selection(
            event.document,
            event.selection,
            &self.catalog,
            &self.config,
            event.opaque,
        ) {
            Ok(highlight) => highlight,
            Err(e) => return CycleOutcome::Skipped(skip_reason_for(&e)),
        };

        self.highlighter
            .apply(surface, &highlight.ranges, highlight.outside, &self.styles);

        #[cfg(debug_assertions)]
        log::debug!(
            "Highlighted {:?} {:?} -> {:?}",
            highlight.symbol,
            highlight.scope.anchor,
            highlight.scope.counterpart
        );

        CycleOutcome::Highlighted(highlight)
    }

    /// Runs a due hide. Returns true if decorations were removed.
    pub fn tick<S: DecorationSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.tick_at(Instant::now(), surface)
    }

    pub fn tick_at<S: DecorationSurface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> bool {
        if !self.hide_timer.is_due_at(now) {
            return false;
        }
        self.hide_timer.mark_fired();
        self.highlighter.dispose(surface);
        true
    }

    /// Removes all decorations and cancels any pending hide.
    pub fn clear<S: DecorationSurface + ?Sized>(&mut self, surface: &mut S) {
        self.hide_timer.cancel();
        self.highlighter.dispose(surface);
    }

    fn skip<S: DecorationSurface + ?Sized>(&mut self, surface: &mut S, reason: SkipReason) -> CycleOutcome {
        self.highlighter.dispose(surface);
        CycleOutcome::Skipped(reason)
    }
}

/// Maps a failed resolve onto the reason the cycle was skipped.
///
/// Missing anchors and unmatched symbols are ordinary outcomes. Anything
/// else, such as a counterpart lookup failing for a symbol the catalog
/// handed out, aborts the cycle and is logged.
fn skip_reason_for(err: &ScopeError) -> SkipReason {
    match err {
        ScopeError::MalformedSelection => SkipReason::NoAnchor,
        ScopeError::NoMatchFound => SkipReason::NoMatch,
        e => {
            log::error!("Highlight cycle aborted: {}", e);
            SkipReason::Aborted
        }
    }
}

fn build_catalog(config: &Config) -> Result<SymbolCatalog, ScopeError> {
    SymbolCatalog::new(
        config.scope.allowed_start_symbols.clone(),
        config.scope.allowed_end_symbols.clone(),
    )
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
