use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::document::Position;
use crate::session::{CycleOutcome, SkipReason};
use crate::theme;

use super::app_state::App;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [text_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.scroll_to_cursor(text_area.height as usize);
        self.render_document(frame, text_area);
        self.render_status(frame, status_area);
    }

    fn render_document(&self, frame: &mut Frame, area: Rect) {
        let gutter_width = self.document.line_count().to_string().len();
        let lines: Vec<Line> = (self.scroll_offset..self.document.line_count())
            .take(area.height as usize)
            .map(|line| self.document_line(line, gutter_width))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn document_line(&self, line: usize, gutter_width: usize) -> Line<'static> {
        let gutter_style = if line == self.cursor.line {
            theme::viewer::GUTTER_CURRENT
        } else {
            theme::viewer::GUTTER
        };
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", line + 1, width = gutter_width),
            gutter_style,
        )];

        let chars = self.document.line(line);
        let mut run = String::new();
        let mut run_style = Style::default();
        for (column, ch) in chars.iter().enumerate() {
            let style = self.style_at(Position::new(line, column));
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(*ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        // Caret past the last character
        if line == self.cursor.line && self.cursor.column >= chars.len() {
            spans.push(Span::styled(" ", theme::viewer::CURSOR));
        }

        Line::from(spans)
    }

    fn style_at(&self, pos: Position) -> Style {
        let mut style = self.surface.style_at(pos);
        if self.selection().range().contains(pos) {
            style = style.bg(theme::viewer::SELECTION_BG);
        }
        if pos == self.cursor {
            style = style.patch(theme::viewer::CURSOR);
        }
        style
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(format!(" {} ", self.file_name)),
            Span::styled(
                format!("{}:{} ", self.cursor.line + 1, self.cursor.column + 1),
                theme::status::POSITION,
            ),
        ];

        match &self.last_outcome {
            Some(CycleOutcome::Highlighted(highlight)) => spans.push(Span::styled(
                format!(
                    "{} -> {}:{} ",
                    highlight.symbol,
                    highlight.scope.counterpart.start.line + 1,
                    highlight.scope.counterpart.start.column + 1
                ),
                theme::status::MATCHED,
            )),
            Some(CycleOutcome::Skipped(reason)) => spans.push(Span::styled(
                format!("{} ", skip_label(*reason)),
                theme::status::SKIPPED,
            )),
            None => {}
        }

        if self.debugging {
            spans.push(Span::styled("[debug] ", theme::status::DEBUGGING));
        }
        if let Some(warning) = &self.warning {
            spans.push(Span::styled(format!("{} ", warning), theme::status::WARNING));
        }
        spans.push(Span::styled(
            "v select  g debug  q quit",
            theme::status::HINTS,
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(theme::status::BACKGROUND),
            area,
        );
    }
}

fn skip_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::Disabled => "disabled",
        SkipReason::LanguageNotEnabled => "language off",
        SkipReason::Debugging => "paused",
        SkipReason::NoAnchor => "no symbol",
        SkipReason::NoMatch => "no match",
        SkipReason::Aborted => "error",
    }
}
