//! Builds the visual styles applied to highlighted ranges.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::{BlurConfig, DecorationOptions, StyleConfig};

const DEFAULT_OPACITY: f32 = 0.5;

/// What a decoration marks; each kind gets its own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Symbols,
    Content,
    OutOfScope,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationStyles {
    pub symbols: Style,
    pub content: Style,
    pub out_of_scope: Style,
    /// Parsed blur opacity, kept for surfaces that can blend
    pub opacity: f32,
}

impl DecorationStyles {
    pub fn from_config(style: &StyleConfig, blur: &BlurConfig) -> Self {
        let opacity = parse_opacity(&blur.opacity);
        let out_of_scope = if opacity < 1.0 {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        Self {
            symbols: build_style(&style.symbols),
            content: build_style(&style.content),
            out_of_scope,
            opacity,
        }
    }

    pub fn style_for(&self, kind: DecorationKind) -> Style {
        match kind {
            DecorationKind::Symbols => self.symbols,
            DecorationKind::Content => self.content,
            DecorationKind::OutOfScope => self.out_of_scope,
        }
    }
}

impl Default for DecorationStyles {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default(), &BlurConfig::default())
    }
}

/// Parses an opacity string, clamped to `0.0..=1.0`. Unparseable values fall
/// back to 0.5.
pub fn parse_opacity(value: &str) -> f32 {
    match value.trim().parse::<f32>() {
        Ok(opacity) if opacity.is_finite() => opacity.clamp(0.0, 1.0),
        _ => {
            log::warn!("Invalid blur opacity {:?}, using {}", value, DEFAULT_OPACITY);
            DEFAULT_OPACITY
        }
    }
}

fn build_style(options: &DecorationOptions) -> Style {
    let mut style = Style::default();
    if let Some(fg) = options.foreground.as_deref().and_then(parse_color) {
        style = style.fg(fg);
    }
    if let Some(bg) = options.background.as_deref().and_then(parse_color) {
        style = style.bg(bg);
    }
    if options.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if options.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if options.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn parse_color(value: &str) -> Option<Color> {
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            log::warn!("Ignoring unknown colour {:?}", value);
            None
        }
    }
}
