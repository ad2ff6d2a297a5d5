//! Terminal User Interface for PagePal
//!
//! Full-screen front end built on ratatui:
//! - Genre grid and book list with keyboard selection
//! - Chat transcript that follows the newest message
//! - Multi-line chat input (Enter sends, Alt/Shift+Enter inserts a newline)
//!
//! Network requests run on spawned tokio tasks and report back over an
//! unbounded channel; the event loop applies them through [`App::apply`],
//! which drops responses for pages the user has already left.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pagepal_core::genres::{GenreIcon, GENRE_PAGE_TITLE};
use pagepal_core::pages::book_list::BookListView;
use pagepal_core::pages::chat::BACK_LABEL;
use pagepal_core::{ChatPage, Route, Sender, APP_NAME};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tui_textarea::{Input, TextArea};

use crate::app::{perform, App, Completion, Fetch};
use crate::client::BookApi;
use crate::utils::config::TuiConfig;
use crate::{AppError, Result};

/// Full-screen application state
pub struct Tui<'a> {
    /// Navigation and page state
    app: App,
    /// Backend, shared with fetch tasks
    api: Arc<dyn BookApi>,
    /// TUI configuration
    config: TuiConfig,
    /// Chat input
    input: TextArea<'a>,
    /// Selection in the genre grid or book list
    selection: ListState,
    /// Lines scrolled up from the newest chat message
    scroll_back: usize,
    /// Completions from fetch tasks
    completions: mpsc::UnboundedReceiver<Completion>,
    /// Sender handed to fetch tasks
    completion_tx: mpsc::UnboundedSender<Completion>,
    /// Requests in flight
    in_flight: usize,
    /// Should quit
    should_quit: bool,
}

impl<'a> Tui<'a> {
    /// Create the UI. Nothing is fetched until [`Tui::run`].
    pub fn new(api: Arc<dyn BookApi>, config: TuiConfig) -> Self {
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let (app, _) = App::start(Route::Genres);
        Self {
            app,
            api,
            config,
            input: new_input(""),
            selection: ListState::default().with_selected(Some(0)),
            scroll_back: 0,
            completions,
            completion_tx,
            in_flight: 0,
            should_quit: false,
        }
    }

    /// Run the TUI starting at `start` until the user quits.
    pub async fn run(&mut self, start: Route) -> Result<()> {
        let fetch = self.app.navigate(start);
        self.page_changed(fetch);

        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.config.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode().ok();
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .ok();
        terminal.show_cursor().ok();

        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            while let Ok(completion) = self.completions.try_recv() {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.app.apply(completion) {
                    self.scroll_back = 0;
                    self.sync_input_placeholder();
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Spawn `fetch` on the runtime; its completion arrives on the channel.
    fn dispatch(&mut self, fetch: Option<Fetch>) {
        let Some(fetch) = fetch else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let completion = perform(api.as_ref(), fetch).await;
            // The receiver is gone once the UI has quit.
            tx.send(completion).ok();
        });
    }

    /// Reset per-page widget state after a navigation.
    fn page_changed(&mut self, fetch: Option<Fetch>) {
        self.selection.select(Some(0));
        self.scroll_back = 0;
        self.input = new_input(&self.app.chat().placeholder());
        self.dispatch(fetch);
    }

    fn sync_input_placeholder(&mut self) {
        self.input
            .set_placeholder_text(self.app.chat().placeholder());
    }

    /// Handle input events
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    self.should_quit = true;
                    return;
                }
                if matches!(self.app.route(), Route::Chat { .. }) {
                    self.handle_chat_key(key);
                } else {
                    self.handle_list_key(key);
                }
            }
            Event::Mouse(mouse) if self.config.mouse_support => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_up(self.config.scroll_speed),
                MouseEventKind::ScrollDown => self.scroll_down(self.config.scroll_speed),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.list_len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.selection.selected().unwrap_or(0);
                self.selection.select(Some(i.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.selection.selected().unwrap_or(0);
                if len > 0 {
                    self.selection.select(Some((i + 1).min(len - 1)));
                }
            }
            KeyCode::Home => self.selection.select(Some(0)),
            KeyCode::End => self.selection.select(Some(len.saturating_sub(1))),
            KeyCode::Enter => {
                let index = self.selection.selected().unwrap_or(0);
                let fetch = if *self.app.route() == Route::Genres {
                    self.app.open_genre(index)
                } else {
                    self.app.open_book(index)
                };
                self.page_changed(fetch);
            }
            KeyCode::Char('r') => {
                let fetch = self.app.reload();
                self.dispatch(fetch);
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                if *self.app.route() != Route::Genres {
                    let fetch = self.app.back();
                    self.page_changed(fetch);
                }
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                let fetch = self.app.back();
                self.page_changed(fetch);
            }
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                if self.app.chat().can_edit() {
                    self.input.insert_newline();
                    self.sync_chat_input();
                }
            }
            KeyCode::Enter => self.submit_input(),
            _ => {
                if self.app.chat().can_edit() {
                    self.input.input(Input::from(key));
                    self.sync_chat_input();
                }
            }
        }
    }

    fn sync_chat_input(&mut self) {
        let text = self.input.lines().join("\n");
        self.app.chat_mut().set_input(text);
    }

    /// Submit the current input
    fn submit_input(&mut self) {
        let fetch = self.app.send();
        if fetch.is_some() {
            self.input = new_input(&self.app.chat().placeholder());
            self.scroll_back = 0;
        }
        self.dispatch(fetch);
    }

    fn scroll_up(&mut self, lines: usize) {
        if matches!(self.app.route(), Route::Chat { .. }) {
            self.scroll_back = self.scroll_back.saturating_add(lines);
        }
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    fn list_len(&self) -> usize {
        match self.app.route() {
            Route::Genres => self.app.tiles().len(),
            Route::Books { .. } => self.app.books().cards().len(),
            Route::Chat { .. } => 0,
        }
    }

    /// Render the UI
    fn ui(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Page
                Constraint::Length(1), // Status
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.app.route().clone() {
            Route::Genres => self.render_genres(f, chunks[1]),
            Route::Books { .. } => self.render_books(f, chunks[1]),
            Route::Chat { .. } => self.render_chat(f, chunks[1]),
        }
        self.render_status(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                format!("📚 {}", APP_NAME),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.app.route().path(), Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }

    fn render_genres(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .app
            .tiles()
            .iter()
            .map(|tile| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} ", tile.icon.glyph())),
                    Span::styled(
                        tile.name.clone(),
                        Style::default()
                            .fg(icon_color(tile.icon))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(page_block(GENRE_PAGE_TITLE))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, area, &mut self.selection);
    }

    fn render_books(&mut self, f: &mut Frame, area: Rect) {
        let page = self.app.books();
        let block = page_block(&page.title());

        match page.view() {
            BookListView::Books(_) => {
                let items: Vec<ListItem> = page
                    .cards()
                    .iter()
                    .map(|card| {
                        let mut spans = vec![
                            Span::styled(
                                card.title().to_string(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(card.byline(), Style::default().fg(Color::Gray)),
                        ];
                        if let Some(genre) = card.genre_badge() {
                            spans.push(Span::styled(
                                format!("  [{}]", genre),
                                Style::default().fg(Color::Cyan),
                            ));
                        }
                        ListItem::new(Line::from(spans))
                    })
                    .collect();

                let list = List::new(items)
                    .block(block)
                    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                    .highlight_symbol("▶ ");
                f.render_stateful_widget(list, area, &mut self.selection);
            }
            view => {
                let style = match view {
                    BookListView::Failed(_) => Style::default().fg(Color::Red),
                    _ => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                };
                let text = page.status_text().unwrap_or_default();
                f.render_widget(Paragraph::new(Span::styled(text, style)).block(block), area);
            }
        }
    }

    fn render_chat(&mut self, f: &mut Frame, area: Rect) {
        let page = self.app.chat();
        let has_banner = page.error_banner().is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                               // Heading
                Constraint::Length(if has_banner { 1 } else { 0 }), // Error
                Constraint::Min(3),                                  // Messages
                Constraint::Length(5),                               // Input
            ])
            .split(area);

        let mut heading = vec![Line::from(Span::styled(
            page.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(byline) = page.byline() {
            heading.push(Line::from(Span::styled(
                byline,
                Style::default().fg(Color::Gray),
            )));
        }
        f.render_widget(Paragraph::new(heading), chunks[0]);

        if let Some(banner) = page.error_banner() {
            f.render_widget(
                Paragraph::new(Span::styled(banner, Style::default().fg(Color::Red))),
                chunks[1],
            );
        }

        self.render_messages(f, chunks[2]);
        self.render_input(f, chunks[3]);
    }

    /// Render the transcript, pinned to the newest message unless scrolled back
    fn render_messages(&mut self, f: &mut Frame, area: Rect) {
        let page = self.app.chat();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Messages (PgUp/PgDn to scroll) ");
        let inner = block.inner(area);
        let lines = transcript_lines(page, inner.width.saturating_sub(2) as usize);

        let height = inner.height as usize;
        let max_back = lines.len().saturating_sub(height);
        self.scroll_back = self.scroll_back.min(max_back);
        let offset = max_back - self.scroll_back;

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((offset.min(u16::MAX as usize) as u16, 0));
        f.render_widget(paragraph, area);
    }

    /// Render the input area
    fn render_input(&mut self, f: &mut Frame, area: Rect) {
        let page = self.app.chat();
        let (title, border) = if page.is_thinking() {
            (" Input (waiting for answer) ", Color::Yellow)
        } else if page.can_edit() {
            (" Input (Enter to send, Alt+Enter for newline) ", Color::Cyan)
        } else {
            (" Input (unavailable) ", Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title);

        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(&self.input, inner);
    }

    /// Render the status bar
    fn render_status(&self, f: &mut Frame, area: Rect) {
        let hints = match self.app.route() {
            Route::Genres => "↑/↓ select | Enter open | q quit",
            Route::Books { .. } => "↑/↓ select | Enter chat | r reload | Esc back | q quit",
            Route::Chat { .. } => "Enter send | Esc back | Ctrl+C quit",
        };
        let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
        if matches!(self.app.route(), Route::Chat { .. }) {
            spans.insert(
                0,
                Span::styled(format!("← {} | ", BACK_LABEL), Style::default().fg(Color::DarkGray)),
            );
        }
        if self.in_flight > 0 {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("loading…", Style::default().fg(Color::Yellow)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn new_input<'a>(placeholder: &str) -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(Style::default());
    input.set_placeholder_text(placeholder);
    input
}

fn page_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
}

fn icon_color(icon: GenreIcon) -> Color {
    match icon {
        GenreIcon::Brain => Color::Magenta,
        GenreIcon::BookHeart => Color::Red,
        GenreIcon::Atom => Color::Cyan,
        GenreIcon::User => Color::Yellow,
        GenreIcon::HelpCircle => Color::Gray,
    }
}

/// Transcript as display lines, wrapped to `width` columns.
fn transcript_lines(page: &ChatPage, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in page.transcript() {
        let (label, style) = match message.sender {
            Sender::User => (
                "You",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Sender::Ai => (
                APP_NAME,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(Span::styled(format!("{}:", label), style)));
        for row in wrap_text(&message.text, width) {
            lines.push(Line::from(format!("  {}", row)));
        }
        lines.push(Line::from(""));
    }
    if let Some(text) = page.thinking_text() {
        lines.push(Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Wrap `text` to `width` display columns, breaking words that do not fit.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|row| row.into_owned())
        .collect()
}

/// Run the full-screen UI starting at `start`.
pub async fn run_tui(api: Arc<dyn BookApi>, config: TuiConfig, start: Route) -> Result<()> {
    let mut tui = Tui::new(api, config);
    tui.run(start).await
}
