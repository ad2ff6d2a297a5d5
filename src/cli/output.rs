//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the PagePal CLI and the
//! line-mode front end.

use owo_colors::OwoColorize;
use pagepal_core::genres::GenreTile;
use pagepal_core::{BookCard, Message, Sender};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the PagePal banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}\n",
                "📚 PagePal".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\n   PagePal v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a page-level status line (loading, empty, error)
    pub fn status(&self, text: &str) {
        if self.colored {
            if text.starts_with("Error") {
                println!("  {}", text.red());
            } else {
                println!("  {}", text.dimmed().italic());
            }
        } else {
            println!("  {}", text);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a subheader
    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("  {}", title.cyan());
        } else {
            println!("  {}", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a numbered genre tile
    pub fn genre_tile(&self, index: usize, tile: &GenreTile) {
        if self.colored {
            println!(
                "    {} {} {}",
                format!("{:>2}.", index + 1).dimmed(),
                tile.icon.glyph(),
                tile.name.bright_white().bold()
            );
        } else {
            println!("    {:>2}. {}", index + 1, tile.name);
        }
    }

    /// Print a numbered book card
    pub fn book_card(&self, index: usize, card: &BookCard<'_>) {
        let badge = card
            .genre_badge()
            .map(|g| format!(" [{}]", g))
            .unwrap_or_default();
        if self.colored {
            println!(
                "    {} {} {}{}",
                format!("{:>2}.", index + 1).dimmed(),
                card.title().bright_white().bold(),
                card.byline().dimmed(),
                badge.cyan()
            );
        } else {
            println!(
                "    {:>2}. {} {}{}",
                index + 1,
                card.title(),
                card.byline(),
                badge
            );
        }
    }

    /// Print one transcript message
    pub fn message(&self, message: &Message) {
        let label = match message.sender {
            Sender::User => "You",
            Sender::Ai => pagepal_core::APP_NAME,
        };
        let mut lines = message.text.lines();
        let first = lines.next().unwrap_or_default();

        if self.colored {
            match message.sender {
                Sender::User => println!("  {} {}", format!("{}:", label).cyan().bold(), first),
                Sender::Ai => println!("  {} {}", format!("{}:", label).green().bold(), first),
            }
        } else {
            println!("  {}: {}", label, first);
        }
        for line in lines {
            println!("  {}", line);
        }
    }

    /// Print the in-flight indicator
    pub fn thinking(&self, text: &str) {
        if self.colored {
            println!("  {}", text.dimmed().italic());
        } else {
            println!("  {}", text);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}
