//! One-shot match summary printed by the command line front end.

use std::fmt::Write;

use serde::Serialize;

use crate::document::{Position, Range};
use crate::selection::Selection;
use crate::session::{CycleOutcome, SkipReason};
use crate::symbols::SearchDirection;

/// Result of one highlight cycle, zero-based like the rest of the data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub file: String,
    pub selection: Range,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
    pub symbol: Option<String>,
    pub anchor: Option<Range>,
    pub counterpart: Option<Range>,
    pub content: Vec<Range>,
    pub outside: Option<(Range, Range)>,
    pub direction: Option<SearchDirection>,
    pub reversed: bool,
}

impl MatchReport {
    pub fn new(file: impl Into<String>, selection: Selection, outcome: &CycleOutcome) -> Self {
        let mut report = Self {
            file: file.into(),
            selection: selection.range(),
            matched: false,
            skipped: None,
            symbol: None,
            anchor: None,
            counterpart: None,
            content: Vec::new(),
            outside: None,
            direction: None,
            reversed: false,
        };
        match outcome {
            CycleOutcome::Highlighted(highlight) => {
                report.matched = true;
                report.symbol = Some(highlight.symbol.clone());
                report.anchor = Some(highlight.scope.anchor);
                report.counterpart = Some(highlight.scope.counterpart);
                report.content = highlight.ranges.content.clone();
                report.outside = highlight.outside;
                report.direction = Some(highlight.scope.direction);
                report.reversed = highlight.scope.reversed;
            }
            CycleOutcome::Skipped(reason) => report.skipped = Some(*reason),
        }
        report
    }

    /// Human readable form with one-based positions.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let at = format_position(self.selection.start);
        let (Some(symbol), Some(anchor), Some(counterpart)) =
            (&self.symbol, self.anchor, self.counterpart)
        else {
            let reason = self.skipped.map_or("none", skip_name);
            let _ = writeln!(out, "{}:{} no match ({})", self.file, at, reason);
            return out;
        };

        let _ = writeln!(out, "{}:{} {}", self.file, at, symbol);
        let _ = writeln!(out, "  anchor       {}", format_range(anchor));
        let _ = writeln!(out, "  counterpart  {}", format_range(counterpart));
        for range in &self.content {
            let _ = writeln!(out, "  content      {}", format_range(*range));
        }
        if let Some((leading, trailing)) = self.outside {
            let _ = writeln!(out, "  outside      {}", format_range(leading));
            let _ = writeln!(out, "  outside      {}", format_range(trailing));
        }
        if let Some(direction) = self.direction {
            let _ = writeln!(
                out,
                "  direction    {}{}",
                direction_name(direction),
                if self.reversed { " (reversed)" } else { "" }
            );
        }
        out
    }
}

fn format_position(pos: Position) -> String {
    format!("{}:{}", pos.line + 1, pos.column + 1)
}

fn format_range(range: Range) -> String {
    format!("{}-{}", format_position(range.start), format_position(range.end))
}

fn direction_name(direction: SearchDirection) -> &'static str {
    match direction {
        SearchDirection::Forward => "forward",
        SearchDirection::Backward => "backward",
    }
}

fn skip_name(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::Disabled => "disabled",
        SkipReason::LanguageNotEnabled => "language_not_enabled",
        SkipReason::Debugging => "debugging",
        SkipReason::NoAnchor => "no_anchor",
        SkipReason::NoMatch => "no_match",
        SkipReason::Aborted => "aborted",
    }
}
