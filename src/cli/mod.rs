//! CLI module for PagePal
//!
//! Provides command-line interface parsing for the `pagepal` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PagePal - browse books by genre and chat about them
#[derive(Parser, Debug)]
#[command(
    name = "pagepal",
    author = "PagePal contributors",
    version,
    about = "PagePal - browse books by genre and chat with an AI about them",
    long_about = "A terminal front end for a PagePal backend.\n\n\
                  Run without arguments to open the interactive browser, or use one of the\n\
                  subcommands for a single request.",
    after_help = "EXAMPLES:\n    \
                  pagepal                              # Browse genres, books and chats\n    \
                  pagepal browse --route /books/Sci-Fi # Start on a genre\n    \
                  pagepal books Biography              # List the books of a genre\n    \
                  pagepal ask 65f0c0ffee \"Who is the narrator?\"\n    \
                  pagepal --api-url http://books.local:5000 ping"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to pagepal.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides the configuration)
    #[arg(long, global = true, env = "PAGEPAL_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse {
        /// Route to start on, e.g. /books/Sci-Fi or /chat/<id>
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Use the line-oriented interface instead of the full-screen one
        #[arg(long)]
        no_tui: bool,
    },

    /// List genres
    Genres {
        /// Ask the backend for its genres instead of the built-in list
        #[arg(long)]
        remote: bool,
    },

    /// List the books of a genre
    Books {
        /// Genre name, e.g. Sci-Fi
        genre: String,
    },

    /// Show one book
    Book {
        /// Book id
        id: String,
    },

    /// Ask one question about a book
    Ask {
        /// Book id
        id: String,

        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Check that the backend is reachable
    Ping,

    /// Show configuration information
    Config {
        /// Show the full configuration
        #[arg(short = 'f', long)]
        full: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
