//! Shared test utilities for scopelight
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::BTreeMap;

    use ratatui::style::Style;

    use crate::config::ScopeConfig;
    use crate::decoration::DecorationKind;
    use crate::document::{Document, Position, Range};
    use crate::highlight::{DecorationHandle, DecorationSurface};
    use crate::symbols::SymbolCatalog;

    /// Catalog from index-paired start/end lists
    pub fn catalog(start: &[&str], end: &[&str]) -> SymbolCatalog {
        SymbolCatalog::new(
            start.iter().map(|s| s.to_string()).collect(),
            end.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    /// The default `(` `[` `{` catalog
    pub fn brackets() -> SymbolCatalog {
        catalog(&["(", "[", "{"], &[")", "]", "}"])
    }

    /// Catalog where `<` is a prefix of `<!--`
    pub fn markup() -> SymbolCatalog {
        catalog(&["<", "<!--"], &[">", "-->"])
    }

    /// Scan options with content skipping and reverse search off
    pub fn plain_scope() -> ScopeConfig {
        ScopeConfig {
            reverse_search_enabled: false,
            ignore_content: false,
            ..ScopeConfig::default()
        }
    }

    /// Position of a char offset in `text`
    pub fn pos(text: &str, offset: usize) -> Position {
        Document::new(text).position_at(offset)
    }

    /// Range between two char offsets in `text`
    pub fn range(text: &str, start: usize, end: usize) -> Range {
        Document::new(text).range_at(start, end)
    }

    /// Surface that records live decorations and panics on a stale handle
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        next_id: u64,
        pub live: BTreeMap<u64, (DecorationKind, Vec<Range>)>,
        pub created: usize,
        pub removed: usize,
    }

    impl RecordingSurface {
        pub fn ranges_of(&self, kind: DecorationKind) -> Vec<Range> {
            self.live
                .values()
                .filter(|(k, _)| *k == kind)
                .flat_map(|(_, ranges)| ranges.iter().copied())
                .collect()
        }
    }

    impl DecorationSurface for RecordingSurface {
        fn create(&mut self, kind: DecorationKind, _style: Style, ranges: &[Range]) -> DecorationHandle {
            self.next_id += 1;
            self.created += 1;
            self.live.insert(self.next_id, (kind, ranges.to_vec()));
            DecorationHandle::new(self.next_id)
        }

        fn remove(&mut self, handle: DecorationHandle) {
            self.removed += 1;
            assert!(
                self.live.remove(&handle.id()).is_some(),
                "decoration {} removed twice",
                handle.id()
            );
        }
    }
}
