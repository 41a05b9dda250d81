//! Tests for session

use super::*;
use crate::content::literal_spans;
use crate::decoration::DecorationKind;
use crate::document::Position;
use crate::symbols::SymbolRole;
use crate::test_utils::test_helpers::{RecordingSurface, range};
use std::time::Duration;

const SOURCE: &str = "fn f(a) {\n    g(a, \")\")\n}\n";

fn event<'e>(doc: &'e Document, line: usize, column: usize) -> SelectionEvent<'e> {
    SelectionEvent {
        document: doc,
        selection: Selection::caret(Position::new(line, column)),
        language: Some("rust"),
        debugging: false,
        opaque: &[],
    }
}

fn session() -> ScopeSession {
    ScopeSession::new(Config::default()).unwrap()
}

#[test]
fn test_highlights_pair_at_caret() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();

    let outcome = session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    let highlight = match outcome {
        CycleOutcome::Highlighted(highlight) => highlight,
        other => panic!("expected a highlight, got {:?}", other),
    };
    assert_eq!(highlight.symbol, "(");
    assert_eq!(highlight.scope.counterpart, range(SOURCE, 6, 7));
    assert_eq!(highlight.outside, None);
    assert!(session.is_highlighting());
    assert_eq!(
        surface.ranges_of(DecorationKind::Symbols),
        vec![range(SOURCE, 4, 5), range(SOURCE, 6, 7)]
    );
    assert_eq!(surface.ranges_of(DecorationKind::Content), vec![range(SOURCE, 5, 6)]);
}

#[test]
fn test_each_event_disposes_previous_cycle() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();

    session.on_selection_change(&event(&doc, 0, 4), &mut surface);
    session.on_selection_change(&event(&doc, 0, 9), &mut surface);

    assert_eq!(surface.removed, 2);
    assert_eq!(surface.live.len(), 2);
    let symbols = surface.ranges_of(DecorationKind::Symbols);
    assert_eq!(symbols[0].start, Position::new(0, 8));
    assert_eq!(symbols[1].start, Position::new(2, 0));
}

#[test]
fn test_caret_away_from_symbols_clears() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();

    session.on_selection_change(&event(&doc, 0, 4), &mut surface);
    let outcome = session.on_selection_change(&event(&doc, 0, 1), &mut surface);

    assert_eq!(outcome, CycleOutcome::Skipped(SkipReason::NoAnchor));
    assert!(surface.live.is_empty());
    assert!(!session.is_highlighting());
}

#[test]
fn test_unmatched_symbol_is_no_match() {
    let doc = Document::new("x = (1 + 2");
    let mut surface = RecordingSurface::default();
    let mut session = session();

    let outcome = session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    assert_eq!(outcome, CycleOutcome::Skipped(SkipReason::NoMatch));
    assert!(surface.live.is_empty());
}

#[test]
fn test_ignore_content_uses_event_spans() {
    let doc = Document::new(SOURCE);
    let spans = literal_spans(&doc, &['"']);
    let mut surface = RecordingSurface::default();
    let mut session = session();
    let mut ev = event(&doc, 1, 5);
    ev.opaque = &spans;

    let CycleOutcome::Highlighted(highlight) = session.on_selection_change(&ev, &mut surface) else {
        panic!("expected a highlight");
    };
    assert_eq!(highlight.scope.counterpart.start, Position::new(1, 12));
    assert_eq!(
        highlight.ranges.content,
        vec![Range::new(Position::new(1, 6), Position::new(1, 9))]
    );
}

#[test]
fn test_disabled_extension_skips_and_clears() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();
    session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    let mut config = Config::default();
    config.general.enabled = false;
    session.on_config_change(config).unwrap();
    let outcome = session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    assert_eq!(outcome, CycleOutcome::Skipped(SkipReason::Disabled));
    assert!(surface.live.is_empty());
}

#[test]
fn test_language_gate() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut config = Config::default();
    config.general.enabled_languages = vec!["python".to_string()];
    let mut session = ScopeSession::new(config).unwrap();

    let outcome = session.on_selection_change(&event(&doc, 0, 4), &mut surface);
    assert_eq!(outcome, CycleOutcome::Skipped(SkipReason::LanguageNotEnabled));

    let mut ev = event(&doc, 0, 4);
    ev.language = Some("python");
    assert!(matches!(
        session.on_selection_change(&ev, &mut surface),
        CycleOutcome::Highlighted(_)
    ));
}

#[test]
fn test_debugging_defers_hide_until_timer_fires() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();
    session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    let mut ev = event(&doc, 0, 9);
    ev.debugging = true;
    let outcome = session.on_selection_change(&ev, &mut surface);

    assert_eq!(outcome, CycleOutcome::Skipped(SkipReason::Debugging));
    assert!(session.hide_pending());
    assert_eq!(surface.live.len(), 2, "decorations stay until the hide fires");

    assert!(!session.tick_at(Instant::now(), &mut surface));
    assert_eq!(surface.live.len(), 2);

    let later = Instant::now() + Duration::from_millis(1_000);
    assert!(session.tick_at(later, &mut surface));
    assert!(surface.live.is_empty());
    assert!(!session.hide_pending());
    assert!(!session.tick_at(later, &mut surface));
}

#[test]
fn test_new_event_cancels_pending_hide() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();
    let mut ev = event(&doc, 0, 4);
    ev.debugging = true;
    session.on_selection_change(&ev, &mut surface);
    assert!(session.hide_pending());

    session.on_selection_change(&event(&doc, 0, 4), &mut surface);
    assert!(!session.hide_pending());
    let later = Instant::now() + Duration::from_secs(5);
    assert!(!session.tick_at(later, &mut surface));
    assert_eq!(surface.live.len(), 2);
}

#[test]
fn test_active_when_debugging_keeps_highlighting() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut config = Config::default();
    config.debug.active_when_debugging = true;
    let mut session = ScopeSession::new(config).unwrap();
    let mut ev = event(&doc, 0, 4);
    ev.debugging = true;

    assert!(matches!(
        session.on_selection_change(&ev, &mut surface),
        CycleOutcome::Highlighted(_)
    ));
    assert!(!session.hide_pending());
}

#[test]
fn test_blur_dims_outside_from_start_anchor() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut config = Config::default();
    config.blur.enabled = true;
    let mut session = ScopeSession::new(config).unwrap();

    let CycleOutcome::Highlighted(highlight) =
        session.on_selection_change(&event(&doc, 0, 8), &mut surface)
    else {
        panic!("expected a highlight");
    };
    let expected = outside_scope_ranges(doc.end_position(), &highlight.scope, SymbolRole::Start);
    assert_eq!(highlight.outside, Some(expected));
    assert_eq!(expected.0, Range::new(Position::new(0, 0), Position::new(0, 8)));
    assert_eq!(expected.1, Range::new(Position::new(2, 1), Position::new(3, 0)));
    assert_eq!(
        surface.ranges_of(DecorationKind::OutOfScope),
        vec![expected.0, expected.1]
    );
}

#[test]
fn test_blur_dims_outside_from_end_anchor() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut config = Config::default();
    config.blur.enabled = true;
    let mut session = ScopeSession::new(config).unwrap();

    let CycleOutcome::Highlighted(highlight) =
        session.on_selection_change(&event(&doc, 2, 1), &mut surface)
    else {
        panic!("expected a highlight");
    };
    let (before, after) = highlight.outside.unwrap();
    assert_eq!(before, Range::new(Position::new(0, 0), Position::new(0, 8)));
    assert_eq!(after, Range::new(Position::new(2, 1), Position::new(3, 0)));
}

#[test]
fn test_invalid_config_change_keeps_previous_snapshot() {
    let mut session = session();
    let mut config = Config::default();
    config.scope.allowed_end_symbols.pop();

    let err = session.on_config_change(config).unwrap_err();
    assert!(matches!(err, ScopeError::InvalidCatalog(_)));
    assert_eq!(session.catalog().valid_symbols().len(), 6);
}

#[test]
fn test_config_change_swaps_catalog() {
    let doc = Document::new("<b>");
    let mut surface = RecordingSurface::default();
    let mut session = session();
    assert_eq!(
        session.on_selection_change(&event(&doc, 0, 0), &mut surface),
        CycleOutcome::Skipped(SkipReason::NoAnchor)
    );

    let mut config = Config::default();
    config.scope.allowed_start_symbols = vec!["<".to_string()];
    config.scope.allowed_end_symbols = vec![">".to_string()];
    session.on_config_change(config).unwrap();

    assert!(matches!(
        session.on_selection_change(&event(&doc, 0, 0), &mut surface),
        CycleOutcome::Highlighted(_)
    ));
    assert_eq!(session.config().scope.allowed_start_symbols, vec!["<"]);
}

#[test]
fn test_new_rejects_invalid_catalog() {
    let mut config = Config::default();
    config.scope.allowed_start_symbols.clear();
    assert!(matches!(
        ScopeSession::new(config),
        Err(ScopeError::InvalidCatalog(_))
    ));
}

#[test]
fn test_clear_removes_everything() {
    let doc = Document::new(SOURCE);
    let mut surface = RecordingSurface::default();
    let mut session = session();
    session.on_selection_change(&event(&doc, 0, 4), &mut surface);

    session.clear(&mut surface);
    session.clear(&mut surface);
    assert!(surface.live.is_empty());
    assert_eq!(surface.removed, 2);
}

#[test]
fn test_resolve_selection_without_surface() {
    let doc = Document::new("[1, [2]]");
    let catalog = session().catalog().clone();
    let highlight = resolve_selection(
        &doc,
        Selection::caret(Position::new(0, 8)),
        &catalog,
        &Config::default(),
        &[],
    )
    .unwrap();
    assert_eq!(highlight.symbol, "]");
    assert_eq!(highlight.scope.counterpart, range("[1, [2]]", 0, 1));
    assert_eq!(highlight.ranges.content, vec![range("[1, [2]]", 1, 7)]);
}

#[test]
fn test_apostrophe_in_comment_keeps_braces_matchable() {
    let doc = Document::new("fn f() {\n    // don't panic\n    g();\n}\n");
    let config = Config::default();
    let spans = literal_spans(&doc, &config.scope.literal_quotes);
    let mut surface = RecordingSurface::default();
    let mut session = ScopeSession::new(config).unwrap();
    let mut ev = event(&doc, 0, 8);
    ev.opaque = &spans;

    let outcome = session.on_selection_change(&ev, &mut surface);

    let highlight = match outcome {
        CycleOutcome::Highlighted(highlight) => highlight,
        other => panic!("expected a highlight, got {:?}", other),
    };
    assert_eq!(highlight.scope.anchor.start, Position::new(0, 7));
    assert_eq!(highlight.scope.counterpart.start, Position::new(3, 0));
}

#[test]
fn test_skip_reasons_for_resolve_errors() {
    assert_eq!(skip_reason_for(&ScopeError::MalformedSelection), SkipReason::NoAnchor);
    assert_eq!(skip_reason_for(&ScopeError::NoMatchFound), SkipReason::NoMatch);
    assert_eq!(
        skip_reason_for(&ScopeError::UnknownSymbol("<".to_string())),
        SkipReason::Aborted
    );
    assert_eq!(
        skip_reason_for(&ScopeError::InvalidCatalog("empty".to_string())),
        SkipReason::Aborted
    );
}
