//! Centralized theme configuration for the viewer chrome.
//!
//! Decoration styles come from the user's config; everything else the
//! viewer draws takes its colors from here. Render code uses
//! `theme::module::CONSTANT` rather than hardcoding `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const INFO: Color = Color::Rgb(0, 217, 255);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Document pane
pub mod viewer {
    use super::*;

    pub const GUTTER: Style = Style::new().fg(palette::TEXT_DIM);
    pub const GUTTER_CURRENT: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const SELECTION_BG: Color = palette::BG_HIGHLIGHT;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Bottom status line
pub mod status {
    use super::*;

    pub const BACKGROUND: Style = Style::new().bg(palette::BG_SURFACE).fg(palette::TEXT);
    pub const POSITION: Style = Style::new().fg(palette::INFO);
    pub const MATCHED: Style = Style::new().fg(palette::SUCCESS);
    pub const SKIPPED: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const DEBUGGING: Style = Style::new()
        .fg(palette::WARNING)
        .add_modifier(Modifier::BOLD);
    pub const WARNING: Style = Style::new().fg(palette::WARNING);
    pub const HINTS: Style = Style::new().fg(palette::TEXT_DIM);
}
