use clap::{Parser, ValueEnum};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::{Path, PathBuf};

use scopelight::app::{App, BufferSurface};
use scopelight::config::{self, ConfigResult};
use scopelight::content::literal_spans;
use scopelight::document::{Document, Position};
use scopelight::error::ScopeError;
use scopelight::report::MatchReport;
use scopelight::selection::Selection;
use scopelight::session::{ScopeSession, SelectionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Highlight the scope between matching delimiters"
)]
struct Args {
    /// File to inspect
    file: PathBuf,

    /// Caret position as LINE:COL, one-based
    #[arg(long, value_parser = parse_position, default_value = "1:1")]
    cursor: Position,

    /// Other end of a selection as LINE:COL, one-based
    #[arg(long, value_parser = parse_position)]
    select_to: Option<Position>,

    /// Language id checked against `enabled_languages` (defaults to the file extension)
    #[arg(long)]
    language: Option<String>,

    /// Output format for the one-shot report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Open the interactive viewer
    #[arg(short, long)]
    interactive: bool,

    /// Config file to use instead of ~/.config/scopelight/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/scopelight-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();
    let config_result = config::load_config(args.config.as_deref());

    let text = std::fs::read_to_string(&args.file).map_err(ScopeError::from)?;
    let language = args.language.clone().or_else(|| language_from_path(&args.file));

    if args.interactive {
        run_interactive(&args, &text, language, config_result)?;
    } else {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        let report = one_shot(&args, &text, language.as_deref(), config_result)?;
        match args.format {
            OutputFormat::Text => print!("{}", report.to_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SCOPELIGHT DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/scopelight-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SCOPELIGHT DEBUG SESSION STARTED ===");
}

/// Parses a one-based `LINE:COL` into a zero-based position.
fn parse_position(value: &str) -> Result<Position, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got {:?}", value))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line {:?}", line))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column {:?}", column))?;
    if line == 0 || column == 0 {
        return Err("line and column are one-based".to_string());
    }
    Ok(Position::new(line - 1, column - 1))
}

fn language_from_path(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn one_shot(
    args: &Args,
    text: &str,
    language: Option<&str>,
    config_result: ConfigResult,
) -> Result<MatchReport, ScopeError> {
    let config = config_result.config;
    let document = Document::new(text);
    let opaque = if config.scope.ignore_content {
        literal_spans(&document, &config.scope.literal_quotes)
    } else {
        Vec::new()
    };
    let selection = match args.select_to {
        Some(end) => Selection::new(args.cursor, end),
        None => Selection::caret(args.cursor),
    };

    let mut session = ScopeSession::new(config)?;
    let mut surface = BufferSurface::new();
    let event = SelectionEvent {
        document: &document,
        selection,
        language,
        debugging: false,
        opaque: &opaque,
    };
    let outcome = session.on_selection_change(&event, &mut surface);

    Ok(MatchReport::new(args.file.display().to_string(), selection, &outcome))
}

fn run_interactive(
    args: &Args,
    text: &str,
    language: Option<String>,
    config_result: ConfigResult,
) -> Result<()> {
    let mut app = App::new(
        text,
        args.file.display().to_string(),
        language,
        config_result.config,
    )?;
    app.warning = config_result.warning;
    app.move_to(args.cursor);

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.mark_rendered();
        }

        app.handle_events()?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_is_one_based() {
        assert_eq!(parse_position("1:1"), Ok(Position::new(0, 0)));
        assert_eq!(parse_position("12:4"), Ok(Position::new(11, 3)));
    }

    #[test]
    fn test_parse_position_rejects_bad_input() {
        assert!(parse_position("0:1").is_err());
        assert!(parse_position("3").is_err());
        assert!(parse_position("a:b").is_err());
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(language_from_path(Path::new("a/b.RS")), Some("rs".to_string()));
        assert_eq!(language_from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "scopelight",
            "file.txt",
            "--cursor",
            "2:3",
            "--format",
            "json",
        ]);
        assert_eq!(args.cursor, Position::new(1, 2));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.interactive);
    }
}
