//! PagePal CLI Entry Point
//!
//! - `pagepal` - interactive browser (default)
//! - `pagepal genres` - list genres
//! - `pagepal books <genre>` - list the books of a genre
//! - `pagepal book <id>` - show one book
//! - `pagepal ask <id> <question>` - ask one question about a book
//! - `pagepal ping` - check the backend
//! - `pagepal config` - show the effective configuration

use std::io::IsTerminal;
use std::path::Path;

use pagepal::app::App;
use pagepal::cli::output::Output;
use pagepal::cli::{Cli, Commands};
use pagepal::client::{BookApi, HttpBookApi};
use pagepal::repl;
use pagepal::utils::config::{PagePalConfig, DEFAULT_CONFIG_FILE};
use pagepal::utils::logging::{init_logging, LogTarget};
use pagepal::{AppError, Result};
use pagepal_core::genres::{self, GENRE_PAGE_TITLE};
use pagepal_core::Route;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let output = if cli.no_color || !std::io::stdout().is_terminal() {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let mut config = PagePalConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url)?;
    }

    let full_screen = match &cli.command {
        None => wants_tui(false),
        Some(Commands::Browse { no_tui, .. }) => wants_tui(*no_tui),
        Some(_) => false,
    };
    let target = if full_screen {
        LogTarget::Discard
    } else {
        LogTarget::Stderr
    };
    init_logging(&config.logging, cli.verbose, target)?;

    tracing::debug!(base_url = %config.base_url(), full_screen, "Starting PagePal");

    match cli.command {
        None => run_browse(&config, Route::Genres, full_screen, output).await,
        Some(Commands::Browse { route, .. }) => {
            let start = route
                .parse::<Route>()
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            run_browse(&config, start, full_screen, output).await
        }
        Some(Commands::Genres { remote }) => run_genres(&config, remote, output).await,
        Some(Commands::Books { genre }) => run_books(&config, genre, output).await,
        Some(Commands::Book { id }) => run_book(&config, id, output).await,
        Some(Commands::Ask { id, question }) => {
            run_ask(&config, id, question.join(" "), output).await
        }
        Some(Commands::Ping) => run_ping(&config, output).await,
        Some(Commands::Config { full }) => {
            run_config(&config, cli.config.as_deref(), full, output)
        }
    }
}

/// Full-screen mode needs the feature, no opt-out, and a real terminal.
fn wants_tui(no_tui: bool) -> bool {
    cfg!(feature = "tui") && !no_tui && std::io::stdout().is_terminal()
}

/// Run the interactive browser
async fn run_browse(
    config: &PagePalConfig,
    start: Route,
    full_screen: bool,
    output: &Output,
) -> Result<()> {
    let api = HttpBookApi::from_config(config)?;

    #[cfg(feature = "tui")]
    {
        if full_screen {
            pagepal::tui::run_tui(std::sync::Arc::new(api), config.tui.clone(), start).await
        } else {
            repl::run_simple(&api, start, output).await
        }
    }

    #[cfg(not(feature = "tui"))]
    {
        let _ = full_screen;
        repl::run_simple(&api, start, output).await
    }
}

/// List genres, built-in or from the backend
async fn run_genres(config: &PagePalConfig, remote: bool, output: &Output) -> Result<()> {
    output.header(GENRE_PAGE_TITLE);

    if !remote {
        for (i, tile) in genres::tiles().iter().enumerate() {
            output.genre_tile(i, tile);
        }
        return Ok(());
    }

    let api = HttpBookApi::from_config(config)?;
    match api.list_genres().await {
        Ok(names) if names.is_empty() => output.status("No genres found."),
        Ok(names) => {
            for (i, tile) in names.into_iter().map(genres::GenreTile::new).enumerate() {
                output.genre_tile(i, &tile);
            }
        }
        Err(e) => output.status(&format!("Error: {}", e)),
    }
    Ok(())
}

/// Render one page after its initial fetch
async fn show_page(config: &PagePalConfig, route: Route, output: &Output) -> Result<App> {
    let api = HttpBookApi::from_config(config)?;
    let (mut app, fetch) = App::start(route);
    app.settle(&api, fetch).await;
    repl::render(&app, output);
    Ok(app)
}

async fn run_books(config: &PagePalConfig, genre: String, output: &Output) -> Result<()> {
    show_page(config, Route::books(genre), output).await?;
    Ok(())
}

async fn run_book(config: &PagePalConfig, id: String, output: &Output) -> Result<()> {
    let app = show_page(config, Route::chat(id), output).await?;
    let book = app.chat().book();

    if let Some(genre) = book.and_then(|b| b.genre.as_deref()) {
        output.kv("Genre", genre);
    }
    if let Some(cover) = book.and_then(|b| b.cover_url.as_deref()) {
        output.kv("Cover", cover);
    }
    if let Some(description) = book.and_then(|b| b.description.as_deref()) {
        output.newline();
        output.info(description);
    }
    Ok(())
}

/// Ask a single question
async fn run_ask(
    config: &PagePalConfig,
    id: String,
    question: String,
    output: &Output,
) -> Result<()> {
    let api = HttpBookApi::from_config(config)?;
    let (mut app, fetch) = App::start(Route::chat(id));
    app.settle(&api, fetch).await;

    app.chat_mut().set_input(question);
    let fetch = app.send();
    if fetch.is_some() {
        output.thinking(pagepal_core::ChatPage::THINKING_TEXT);
    }
    app.settle(&api, fetch).await;

    repl::render(&app, output);
    Ok(())
}

/// Check the backend
async fn run_ping(config: &PagePalConfig, output: &Output) -> Result<()> {
    let api = HttpBookApi::from_config(config)?;
    output.kv("Backend", api.base_url());

    let hello = api.hello().await?;
    output.success(&hello.message);
    Ok(())
}

/// Show configuration
fn run_config(
    config: &PagePalConfig,
    file: Option<&Path>,
    full: bool,
    output: &Output,
) -> Result<()> {
    if full {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    output.header("PagePal Configuration");
    let file = match file {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE.to_string(),
        None => "(defaults)".to_string(),
    };
    output.kv("Config file", &file);
    output.kv("Backend", config.base_url());
    output.kv(
        "Timeout",
        &config
            .api
            .timeout_secs
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string()),
    );
    output.kv("Log level", &config.logging.level);
    if let Some(file) = &config.logging.file {
        output.kv("Log file", &file.display().to_string());
    }
    output.hint("Use --full to print the whole configuration as TOML");
    Ok(())
}
