//! Line-oriented interactive mode
//!
//! Used when the full-screen UI is disabled or unavailable. Each line is
//! either a navigation command or, on a chat page, a question.

use std::io::{BufRead, Write};

use pagepal_core::genres::GENRE_PAGE_TITLE;
use pagepal_core::Route;

use crate::app::{App, Fetch};
use crate::cli::output::Output;
use crate::client::BookApi;
use crate::Result;

const HELP: &str = "Commands: <number> open, back, home, go <path>, help, quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the program
    Quit,
    /// Previous page
    Back,
    /// Genre grid
    Home,
    /// Show help
    Help,
    /// Open a route by path
    Go(String),
    /// Open the numbered item (1-based on screen, 0-based here)
    Open(usize),
    /// Free text: a question on the chat page, a genre name elsewhere
    Text(String),
    /// Blank line
    Nothing,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Command::Nothing,
            "quit" | "exit" | ":q" => Command::Quit,
            "back" | ":b" => Command::Back,
            "home" | ":h" => Command::Home,
            "help" | "?" => Command::Help,
            _ => {
                if let Some(path) = line.strip_prefix("go ") {
                    return Command::Go(path.trim().to_string());
                }
                match line.parse::<usize>() {
                    Ok(n) if n > 0 => Command::Open(n - 1),
                    _ => Command::Text(line.to_string()),
                }
            }
        }
    }
}

/// Run the line-mode front end until the user quits or stdin closes.
pub async fn run_simple(api: &dyn BookApi, start: Route, output: &Output) -> Result<()> {
    output.banner();
    output.info(HELP);

    let (mut app, fetch) = App::start(start);
    app.settle(api, fetch).await;
    let mut shown = render(&app, output);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} ", prompt(&app));
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let on_chat = matches!(app.route(), Route::Chat { .. });
        let fetch = match Command::parse(&line) {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Help => {
                output.info(HELP);
                continue;
            }
            Command::Back => app.back(),
            Command::Home => app.home(),
            Command::Go(path) => match path.parse::<Route>() {
                Ok(route) => app.navigate(route),
                Err(e) => {
                    output.error(&e.to_string());
                    continue;
                }
            },
            Command::Open(index) => match app.route().clone() {
                Route::Genres => app.open_genre(index),
                Route::Books { .. } => app.open_book(index),
                Route::Chat { .. } => {
                    app.chat_mut().set_input(line.trim());
                    send(&mut app, output)
                }
            },
            Command::Text(text) if on_chat => {
                app.chat_mut().set_input(text);
                send(&mut app, output)
            }
            Command::Text(text) => match app.route().clone() {
                Route::Genres => app.navigate(Route::books(text)),
                _ => {
                    output.warning("Not a command here. Type 'help' for options.");
                    continue;
                }
            },
        };

        let same_chat =
            on_chat && matches!(app.route(), Route::Chat { .. }) && fetch_is_chat(&fetch);
        app.settle(api, fetch).await;

        if same_chat {
            shown = render_new_messages(&app, output, shown);
        } else {
            shown = render(&app, output);
        }
    }

    Ok(())
}

fn fetch_is_chat(fetch: &Option<Fetch>) -> bool {
    matches!(fetch, Some(Fetch::Chat(_)))
}

fn send(app: &mut App, output: &Output) -> Option<Fetch> {
    let fetch = app.send();
    match &fetch {
        Some(_) => output.thinking(pagepal_core::ChatPage::THINKING_TEXT),
        None if !app.chat().can_edit() => output.warning("The chat is not available."),
        None => {}
    }
    fetch
}

fn prompt(app: &App) -> &'static str {
    match app.route() {
        Route::Chat { .. } if app.chat().can_edit() => "you>",
        _ => ">",
    }
}

/// Render the whole current page. Returns the number of transcript messages shown.
pub fn render(app: &App, output: &Output) -> usize {
    match app.route() {
        Route::Genres => {
            output.header(GENRE_PAGE_TITLE);
            for (i, tile) in app.tiles().iter().enumerate() {
                output.genre_tile(i, tile);
            }
            0
        }
        Route::Books { .. } => {
            let page = app.books();
            output.header(&page.title());
            match page.status_text() {
                Some(text) => output.status(&text),
                None => {
                    for (i, card) in page.cards().iter().enumerate() {
                        output.book_card(i, card);
                    }
                }
            }
            0
        }
        Route::Chat { .. } => {
            let page = app.chat();
            output.header(&page.heading());
            if let Some(byline) = page.byline() {
                output.subheader(&byline);
            }
            if let Some(banner) = page.error_banner() {
                output.status(&banner);
            }
            for message in page.transcript() {
                output.message(message);
            }
            page.transcript().len()
        }
    }
}

fn render_new_messages(app: &App, output: &Output, shown: usize) -> usize {
    let messages = app.chat().transcript().messages();
    // The user's own line is already on screen.
    for message in messages.iter().skip(shown).filter(|m| !m.is_user()) {
        output.message(message);
    }
    messages.len()
}
