use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use slash_comment_engine::{
    DecorationStyle, SelectionRange, SlashCommentView, Span as TextSpan, TextBuffer, ViewState,
    ViewUpdate,
};
use std::io::Stdout;

/// Rows taken by the help bar and the content borders.
const CHROME_ROWS: u16 = 5;

pub struct App {
    buffer: TextBuffer,
    title: String,
    view: SlashCommentView,
    live_preview: bool,
    cursor_line: usize,
    scroll: usize,
    viewport_height: usize,
}

impl App {
    pub fn new(buffer: TextBuffer, title: String, live_preview: bool) -> Self {
        let mut app = Self {
            view: SlashCommentView::new(&ViewState::new(TextBuffer::from(""))),
            buffer,
            title,
            live_preview,
            cursor_line: 0,
            scroll: 0,
            viewport_height: 1,
        };
        let mut update = ViewUpdate::new(app.state());
        update.doc_changed = true;
        app.view.update(&update);
        app
    }

    /// The editor state as the decoration builder sees it.
    fn state(&self) -> ViewState {
        let first = self.scroll;
        let last = (self.scroll + self.viewport_height.max(1) - 1)
            .min(self.buffer.line_count().saturating_sub(1));
        let start = self.buffer.line(first).map(|l| l.start()).unwrap_or(0);
        let end = self
            .buffer
            .line(last)
            .map(|l| l.end())
            .unwrap_or(self.buffer.len());
        let caret = self
            .buffer
            .line(self.cursor_line)
            .map(|l| l.start())
            .unwrap_or(0);

        ViewState::new(self.buffer.clone())
            .with_visible_ranges([TextSpan::new(start, end.max(start))])
            .with_live_preview(self.live_preview)
            .with_selection([SelectionRange::cursor(caret)])
    }

    fn refresh(&mut self, viewport_changed: bool, selection_set: bool, mode_changed: bool) {
        let mut update = ViewUpdate::new(self.state());
        update.viewport_changed = viewport_changed;
        update.selection_set = selection_set;
        update.mode_changed = mode_changed;
        if self.view.update(&update) {
            log::trace!("{} decoration(s)", self.view.decorations().len());
        }
    }

    fn resize(&mut self, height: usize) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.follow_cursor();
            self.refresh(true, false, false);
        }
    }

    /// Scrolls so the cursor line is visible. Returns whether the viewport moved.
    fn follow_cursor(&mut self) -> bool {
        let before = self.scroll;
        if self.cursor_line < self.scroll {
            self.scroll = self.cursor_line;
        } else if self.cursor_line >= self.scroll + self.viewport_height {
            self.scroll = self.cursor_line + 1 - self.viewport_height;
        }
        self.scroll != before
    }

    fn move_cursor_to(&mut self, line: usize) {
        let line = line.min(self.buffer.line_count().saturating_sub(1));
        if line == self.cursor_line {
            return;
        }
        self.cursor_line = line;
        let scrolled = self.follow_cursor();
        self.refresh(scrolled, true, false);
    }

    fn next_line(&mut self) {
        self.move_cursor_to(self.cursor_line + 1);
    }

    fn previous_line(&mut self) {
        self.move_cursor_to(self.cursor_line.saturating_sub(1));
    }

    fn page_down(&mut self) {
        let max_scroll = self.buffer.line_count().saturating_sub(self.viewport_height);
        self.scroll = (self.scroll + self.viewport_height).min(max_scroll);
        self.cursor_line = self.cursor_line.max(self.scroll);
        self.refresh(true, true, false);
    }

    fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.viewport_height);
        self.cursor_line = self
            .cursor_line
            .min(self.scroll + self.viewport_height.saturating_sub(1));
        self.refresh(true, true, false);
    }

    fn toggle_mode(&mut self) {
        self.live_preview = !self.live_preview;
        log::debug!("live preview: {}", self.live_preview);
        self.refresh(false, false, true);
    }

    /// Renders the visible lines with their decorations applied.
    fn visible_lines(&self) -> Vec<Line<'static>> {
        let last = (self.scroll + self.viewport_height).min(self.buffer.line_count());
        let decorations = self.view.decorations();

        (self.scroll..last)
            .filter_map(|n| self.buffer.line(n))
            .map(|line| {
                let spans: Vec<Span<'static>> = decorations
                    .paint_line(&line)
                    .into_iter()
                    .filter_map(|(style, text)| match style {
                        Some(DecorationStyle::Hidden) => None,
                        Some(DecorationStyle::Comment) => Some(Span::styled(
                            text.to_string(),
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::ITALIC),
                        )),
                        None => Some(Span::raw(text.to_string())),
                    })
                    .collect();
                let mut rendered = Line::from(spans);
                if line.number == self.cursor_line {
                    rendered = rendered.style(Style::default().bg(Color::Rgb(40, 40, 40)));
                }
                rendered
            })
            .collect()
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.resize(size.height.saturating_sub(CHROME_ROWS).max(1) as usize);

        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_line(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_line(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Tab => app.toggle_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let mode = if app.live_preview { "live" } else { "source" };
    let content = Paragraph::new(app.visible_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} [{mode}]", app.title)),
    );
    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll | "),
        Span::raw("Tab: Live/Source"),
    ]);
    let help = Paragraph::new(vec![help_text]).block(Block::default());
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn app(text: &str) -> App {
        let mut app = App::new(TextBuffer::from(text), "test".to_string(), true);
        app.resize(10);
        app
    }

    #[test]
    fn test_hidden_marker_is_omitted_off_cursor_line() {
        let app = app("first\nsecond // note\n");
        let lines: Vec<String> = app.visible_lines().iter().map(plain).collect();
        assert_eq!(lines, vec!["first", "second note", ""]);
    }

    #[test]
    fn test_cursor_line_reveals_marker() {
        let mut app = app("first\nsecond // note\n");
        app.next_line();
        let lines: Vec<String> = app.visible_lines().iter().map(plain).collect();
        assert_eq!(lines[1], "second // note");
    }

    #[test]
    fn test_source_mode_keeps_marker() {
        let mut app = app("a // b\nc\n");
        app.next_line();
        assert_eq!(plain(&app.visible_lines()[0]), "a b");
        app.toggle_mode();
        assert_eq!(plain(&app.visible_lines()[0]), "a // b");
    }

    #[test]
    fn test_cursor_scrolls_viewport() {
        let text: String = (0..30).map(|i| format!("line {i}\n")).collect();
        let mut app = app(&text);
        for _ in 0..12 {
            app.next_line();
        }
        assert_eq!(app.cursor_line, 12);
        assert_eq!(app.scroll, 3);
        assert_eq!(plain(&app.visible_lines()[0]), "line 3");
    }

    #[test]
    fn test_page_down_clamps_to_end() {
        let text: String = (0..15).map(|i| format!("line {i}\n")).collect();
        let mut app = app(&text);
        app.page_down();
        app.page_down();
        // 16 lines (trailing newline opens an empty one), 10 rows
        assert_eq!(app.scroll, 6);
        assert_eq!(app.cursor_line, 6);
    }
}
