// Configuration type definitions

use serde::Deserialize;

/// Feature gating
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub enabled: bool,
    /// Language ids the feature runs for; empty means every language
    pub enabled_languages: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            enabled: true,
            enabled_languages: Vec::new(),
        }
    }
}

impl GeneralConfig {
    pub fn is_language_enabled(&self, language: Option<&str>) -> bool {
        if self.enabled_languages.is_empty() {
            return true;
        }
        language.is_some_and(|id| self.enabled_languages.iter().any(|l| l == id))
    }
}

/// Symbol catalog and scan behaviour, read fresh on every scan
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    pub allowed_start_symbols: Vec<String>,
    pub allowed_end_symbols: Vec<String>,
    pub max_line_search_count: usize,
    pub reverse_search_enabled: bool,
    pub ignore_content: bool,
    pub highlight_scope_from_text: bool,
    pub literal_quotes: Vec<char>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig {
            allowed_start_symbols: vec!["(".into(), "[".into(), "{".into()],
            allowed_end_symbols: vec![")".into(), "]".into(), "}".into()],
            max_line_search_count: 1000,
            reverse_search_enabled: true,
            ignore_content: true,
            highlight_scope_from_text: true,
            literal_quotes: vec!['"', '\'', '`'],
        }
    }
}

/// Dimming of text outside the matched scope
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub enabled: bool,
    /// Numeric string in `0.0..=1.0`
    pub opacity: String,
}

impl Default for BlurConfig {
    fn default() -> Self {
        BlurConfig {
            enabled: false,
            opacity: "0.5".to_string(),
        }
    }
}

/// Behaviour while the host reports an active debug session
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub active_when_debugging: bool,
    /// Delay in milliseconds before decorations are hidden
    pub time_out_value: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            active_when_debugging: false,
            time_out_value: 400,
        }
    }
}

/// Visual options for one decoration kind
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DecorationOptions {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub symbols: DecorationOptions,
    pub content: DecorationOptions,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            symbols: DecorationOptions {
                foreground: Some("yellow".to_string()),
                bold: true,
                ..DecorationOptions::default()
            },
            content: DecorationOptions {
                background: Some("#23233a".to_string()),
                ..DecorationOptions::default()
            },
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub blur: BlurConfig,
    #[serde(default)]
    pub debug: DebugConfig,
    #[serde(default)]
    pub style: StyleConfig,
}
