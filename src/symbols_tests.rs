//! Tests for symbols

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn brackets() -> SymbolCatalog {
    SymbolCatalog::new(strings(&["(", "[", "{"]), strings(&[")", "]", "}"])).unwrap()
}

fn markup() -> SymbolCatalog {
    SymbolCatalog::new(strings(&["<", "<!--"]), strings(&[">", "-->"])).unwrap()
}

#[test]
fn test_valid_symbols_longest_first() {
    let catalog = markup();
    let texts: Vec<&str> = catalog.valid_symbols().iter().map(Symbol::text).collect();
    assert_eq!(texts, vec!["<!--", "-->", "<", ">"]);
    assert_eq!(catalog.longest_symbol_len(), 4);
}

#[test]
fn test_valid_symbols_keeps_config_order_for_equal_lengths() {
    let catalog = brackets();
    let texts: Vec<&str> = catalog.valid_symbols().iter().map(Symbol::text).collect();
    assert_eq!(texts, vec!["(", "[", "{", ")", "]", "}"]);
}

#[test]
fn test_role_membership() {
    let catalog = brackets();
    assert!(catalog.is_start_symbol("("));
    assert!(!catalog.is_start_symbol(")"));
    assert!(catalog.is_end_symbol("]"));
    assert!(!catalog.is_end_symbol("x"));
}

#[test]
fn test_counterpart_both_directions() {
    let catalog = brackets();
    let close = catalog.counterpart("[").unwrap();
    assert_eq!(close.text(), "]");
    assert_eq!(close.role(), SymbolRole::End);

    let open = catalog.counterpart("}").unwrap();
    assert_eq!(open.text(), "{");
    assert_eq!(open.role(), SymbolRole::Start);
}

#[test]
fn test_counterpart_unknown_symbol() {
    let catalog = brackets();
    let err = catalog.counterpart("<").unwrap_err();
    assert!(matches!(err, ScopeError::UnknownSymbol(ref s) if s == "<"));
}

#[test]
fn test_direction_for_role() {
    let catalog = brackets();
    let open = catalog.symbol("(").unwrap();
    let close = catalog.symbol(")").unwrap();
    assert_eq!(catalog.direction_for(open), SearchDirection::Forward);
    assert_eq!(catalog.direction_for(close), SearchDirection::Backward);
}

#[test]
fn test_match_at_prefers_longest() {
    let catalog = markup();
    let doc = Document::new("<!-- x -->");
    assert_eq!(catalog.match_at(&doc, 0).map(Symbol::text), Some("<!--"));
    assert_eq!(catalog.match_at(&doc, 1), None);
    assert_eq!(catalog.match_at(&doc, 7).map(Symbol::text), Some("-->"));
    assert_eq!(catalog.match_at(&doc, 9).map(Symbol::text), Some(">"));
}

#[test]
fn test_match_ending_at_prefers_longest() {
    let catalog = markup();
    let doc = Document::new("<!-- x -->");
    assert_eq!(catalog.match_ending_at(&doc, 10).map(Symbol::text), Some("-->"));
    assert_eq!(catalog.match_ending_at(&doc, 4).map(Symbol::text), Some("<!--"));
    assert_eq!(catalog.match_ending_at(&doc, 1).map(Symbol::text), Some("<"));
    assert_eq!(catalog.match_ending_at(&doc, 0), None);
}

#[test]
fn test_shared_text_classified_as_start() {
    let catalog = SymbolCatalog::new(strings(&["(", "\""]), strings(&[")", "\""])).unwrap();
    let quote = catalog.symbol("\"").unwrap();
    assert_eq!(quote.role(), SymbolRole::Start);
    assert_eq!(catalog.counterpart("\"").unwrap().text(), "\"");
    assert_eq!(catalog.valid_symbols().len(), 3);
}

#[test]
fn test_rejects_empty_lists() {
    let result = SymbolCatalog::new(Vec::new(), Vec::new());
    assert!(matches!(result, Err(ScopeError::InvalidCatalog(_))));
}

#[test]
fn test_rejects_unequal_lengths() {
    let result = SymbolCatalog::new(strings(&["(", "["]), strings(&[")"]));
    assert!(matches!(result, Err(ScopeError::InvalidCatalog(_))));
}

#[test]
fn test_rejects_empty_symbol() {
    let result = SymbolCatalog::new(strings(&["("]), strings(&[""]));
    assert!(matches!(result, Err(ScopeError::InvalidCatalog(_))));
}

#[test]
fn test_rejects_duplicate_within_role() {
    let result = SymbolCatalog::new(strings(&["(", "("]), strings(&[")", "]"]));
    assert!(matches!(result, Err(ScopeError::InvalidCatalog(_))));
}

#[test]
fn test_role_and_direction_inverses() {
    assert_eq!(SymbolRole::Start.opposite(), SymbolRole::End);
    assert_eq!(SearchDirection::Forward.reversed(), SearchDirection::Backward);
    assert_eq!(SearchDirection::Backward.anchor_role(), SymbolRole::End);
}
