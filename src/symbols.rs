//! Catalog of configured scope symbols and their counterparts.
//!
//! Start symbols and end symbols are configured as two index-paired lists:
//! `start[i]` is closed by `end[i]`. Lookups that probe a document at an
//! offset test candidates longest-first so that a multi-character symbol is
//! never shadowed by a shorter one sharing its prefix.

use serde::Serialize;

use crate::document::Document;
use crate::error::ScopeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolRole {
    Start,
    End,
}

impl SymbolRole {
    pub fn opposite(self) -> Self {
        match self {
            SymbolRole::Start => SymbolRole::End,
            SymbolRole::End => SymbolRole::Start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub fn reversed(self) -> Self {
        match self {
            SearchDirection::Forward => SearchDirection::Backward,
            SearchDirection::Backward => SearchDirection::Forward,
        }
    }

    /// Role an anchor must have for a natural scan to run this way.
    pub fn anchor_role(self) -> SymbolRole {
        match self {
            SearchDirection::Forward => SymbolRole::Start,
            SearchDirection::Backward => SymbolRole::End,
        }
    }
}

/// A configured symbol text tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    text: String,
    role: SymbolRole,
    len: usize,
}

impl Symbol {
    fn new(text: &str, role: SymbolRole) -> Self {
        Self {
            text: text.to_string(),
            role,
            len: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> SymbolRole {
        self.role
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_start(&self) -> bool {
        self.role == SymbolRole::Start
    }
}

#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    start: Vec<String>,
    end: Vec<String>,
    /// Every distinct text once, longest first
    by_length: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn new(start: Vec<String>, end: Vec<String>) -> Result<Self, ScopeError> {
        if start.is_empty() || end.is_empty() {
            return Err(ScopeError::InvalidCatalog(
                "start and end symbol lists must not be empty".to_string(),
            ));
        }
        if start.len() != end.len() {
            return Err(ScopeError::InvalidCatalog(format!(
                "{} start symbols but {} end symbols",
                start.len(),
                end.len()
            )));
        }
        for (role, list) in [("start", &start), ("end", &end)] {
            for (i, text) in list.iter().enumerate() {
                if text.is_empty() {
                    return Err(ScopeError::InvalidCatalog(format!(
                        "{} symbol #{} is empty",
                        role,
                        i + 1
                    )));
                }
                if list[..i].contains(text) {
                    return Err(ScopeError::InvalidCatalog(format!(
                        "{} symbol {:?} is listed twice",
                        role, text
                    )));
                }
            }
        }

        let mut by_length: Vec<Symbol> = start
            .iter()
            .map(|text| Symbol::new(text, SymbolRole::Start))
            .collect();
        for text in &end {
            if !start.contains(text) {
                by_length.push(Symbol::new(text, SymbolRole::End));
            }
        }
        // Stable sort keeps configuration order among equal lengths
        by_length.sort_by(|a, b| b.len.cmp(&a.len));

        Ok(Self {
            start,
            end,
            by_length,
        })
    }

    /// All configured symbols, longest first.
    pub fn valid_symbols(&self) -> &[Symbol] {
        &self.by_length
    }

    pub fn longest_symbol_len(&self) -> usize {
        self.by_length.first().map(Symbol::len).unwrap_or(0)
    }

    pub fn is_start_symbol(&self, text: &str) -> bool {
        self.start.iter().any(|s| s == text)
    }

    pub fn is_end_symbol(&self, text: &str) -> bool {
        self.end.iter().any(|s| s == text)
    }

    /// Looks up a cataloged symbol by text. Texts configured in both lists
    /// resolve as start symbols.
    pub fn symbol(&self, text: &str) -> Option<&Symbol> {
        self.by_length.iter().find(|s| s.text == text)
    }

    pub fn counterpart(&self, text: &str) -> Result<Symbol, ScopeError> {
        if let Some(i) = self.start.iter().position(|s| s == text) {
            return Ok(Symbol::new(&self.end[i], SymbolRole::End));
        }
        if let Some(i) = self.end.iter().position(|s| s == text) {
            return Ok(Symbol::new(&self.start[i], SymbolRole::Start));
        }
        Err(ScopeError::UnknownSymbol(text.to_string()))
    }

    pub fn direction_for(&self, symbol: &Symbol) -> SearchDirection {
        match symbol.role {
            SymbolRole::Start => SearchDirection::Forward,
            SymbolRole::End => SearchDirection::Backward,
        }
    }

    /// Longest cataloged symbol starting exactly at `offset`.
    pub fn match_at(&self, doc: &Document, offset: usize) -> Option<&Symbol> {
        self.by_length
            .iter()
            .find(|symbol| doc.matches_at(offset, &symbol.text))
    }

    /// Longest cataloged symbol ending exactly at `end` (exclusive).
    pub fn match_ending_at(&self, doc: &Document, end: usize) -> Option<&Symbol> {
        self.by_length
            .iter()
            .find(|symbol| doc.matches_ending_at(end, &symbol.text))
    }
}

#[cfg(test)]
#[path = "symbols_tests.rs"]
mod symbols_tests;
