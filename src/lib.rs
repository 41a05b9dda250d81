//! scopelight library - matched delimiter and scope highlighting
//!
//! Locates the symbol paired with the one under the cursor, works out the
//! ranges of the enclosed scope, and keeps decorations for them on a host
//! surface up to date.

pub mod app;
pub mod config;
pub mod content;
pub mod decoration;
pub mod document;
pub mod error;
pub mod highlight;
pub mod report;
pub mod scanner;
pub mod selection;
pub mod session;
pub mod symbols;
pub mod theme;
pub mod timer;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use document::{Document, Position, Range};
pub use error::ScopeError;
pub use highlight::{DecorationSurface, RangeHighlighter};
pub use scanner::{ScopeMatch, ScopeScanner};
pub use session::{CycleOutcome, ScopeSession, SelectionEvent};
pub use symbols::SymbolCatalog;
