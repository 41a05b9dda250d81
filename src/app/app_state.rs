use crate::config::Config;
use crate::content::literal_spans;
use crate::document::{Document, Position, Range};
use crate::error::ScopeError;
use crate::selection::Selection;
use crate::session::{CycleOutcome, ScopeSession, SelectionEvent};

use super::surface::BufferSurface;

/// Viewer state: one document, a caret, and the session decorating it
pub struct App {
    pub document: Document,
    pub file_name: String,
    pub language: Option<String>,
    pub cursor: Position,
    /// Fixed end of the selection while selecting
    pub selection_anchor: Option<Position>,
    /// Simulated debug session toggled from the keyboard
    pub debugging: bool,
    /// First visible line
    pub scroll_offset: usize,
    pub session: ScopeSession,
    pub surface: BufferSurface,
    pub opaque: Vec<Range>,
    pub last_outcome: Option<CycleOutcome>,
    pub warning: Option<String>,
    pub should_quit: bool,
    needs_render: bool,
}

impl App {
    pub fn new(
        text: &str,
        file_name: impl Into<String>,
        language: Option<String>,
        config: Config,
    ) -> Result<Self, ScopeError> {
        let document = Document::new(text);
        let opaque = if config.scope.ignore_content {
            literal_spans(&document, &config.scope.literal_quotes)
        } else {
            Vec::new()
        };
        let session = ScopeSession::new(config)?;

        let mut app = Self {
            document,
            file_name: file_name.into(),
            language,
            cursor: Position::default(),
            selection_anchor: None,
            debugging: false,
            scroll_offset: 0,
            session,
            surface: BufferSurface::new(),
            opaque,
            last_outcome: None,
            warning: None,
            should_quit: false,
            needs_render: true,
        };
        app.refresh();
        Ok(app)
    }

    pub fn selection(&self) -> Selection {
        match self.selection_anchor {
            Some(anchor) => Selection::new(anchor, self.cursor),
            None => Selection::caret(self.cursor),
        }
    }

    /// Runs one highlight cycle for the current selection.
    pub fn refresh(&mut self) {
        let language = self.language.as_deref();
        let event = SelectionEvent {
            document: &self.document,
            selection: self.selection(),
            language,
            debugging: self.debugging,
            opaque: &self.opaque,
        };
        let outcome = self.session.on_selection_change(&event, &mut self.surface);
        self.last_outcome = Some(outcome);
        self.needs_render = true;
    }

    /// Fires a due hide timer.
    pub fn tick(&mut self) {
        if self.session.tick(&mut self.surface) {
            self.needs_render = true;
        }
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn mark_rendered(&mut self) {
        self.needs_render = false;
    }

    pub fn move_to(&mut self, pos: Position) {
        let last_line = self.document.line_count().saturating_sub(1);
        let line = pos.line.min(last_line);
        let column = pos.column.min(self.document.line_len(line));
        let target = Position::new(line, column);
        if target != self.cursor {
            self.cursor = target;
            self.refresh();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.move_to(Position::new(self.cursor.line, self.cursor.column - 1));
        } else if self.cursor.line > 0 {
            let line = self.cursor.line - 1;
            self.move_to(Position::new(line, self.document.line_len(line)));
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.column < self.document.line_len(self.cursor.line) {
            self.move_to(Position::new(self.cursor.line, self.cursor.column + 1));
        } else if self.cursor.line + 1 < self.document.line_count() {
            self.move_to(Position::new(self.cursor.line + 1, 0));
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.move_to(Position::new(self.cursor.line - 1, self.cursor.column));
        }
    }

    pub fn move_down(&mut self) {
        self.move_to(Position::new(self.cursor.line + 1, self.cursor.column));
    }

    pub fn move_line_start(&mut self) {
        self.move_to(Position::new(self.cursor.line, 0));
    }

    pub fn move_line_end(&mut self) {
        let line = self.cursor.line;
        self.move_to(Position::new(line, self.document.line_len(line)));
    }

    pub fn toggle_selection(&mut self) {
        self.selection_anchor = match self.selection_anchor {
            Some(_) => None,
            None => Some(self.cursor),
        };
        self.refresh();
    }

    pub fn toggle_debugging(&mut self) {
        self.debugging = !self.debugging;
        self.refresh();
    }

    /// Keeps the cursor line inside a viewport `height` lines tall.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor.line < self.scroll_offset {
            self.scroll_offset = self.cursor.line;
        } else if self.cursor.line >= self.scroll_offset + height {
            self.scroll_offset = self.cursor.line + 1 - height;
        }
    }
}
