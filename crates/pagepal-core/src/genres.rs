//! The fixed genre catalog shown on the landing page.

use crate::routes::Route;

/// Genres always offered on the landing page, in display order.
pub const FIXED_GENRES: &[&str] = &[
    "Self-Help",
    "Devotional",
    "Sci-Fi",
    "Biography",
    "t1",
    "t2",
    "Unknown",
];

/// Icon drawn on a genre tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreIcon {
    /// Self-help
    Brain,
    /// Devotional
    BookHeart,
    /// Sci-fi
    Atom,
    /// Biography and the test genres
    User,
    /// Anything else
    HelpCircle,
}

impl GenreIcon {
    /// Icon for a genre name, matched case-insensitively.
    pub fn for_genre(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "self-help" => GenreIcon::Brain,
            "devotional" => GenreIcon::BookHeart,
            "sci-fi" => GenreIcon::Atom,
            "biography" | "t1" | "t2" => GenreIcon::User,
            _ => GenreIcon::HelpCircle,
        }
    }

    /// Single-cell glyph for terminal rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            GenreIcon::Brain => "🧠",
            GenreIcon::BookHeart => "📖",
            GenreIcon::Atom => "⚛",
            GenreIcon::User => "👤",
            GenreIcon::HelpCircle => "❓",
        }
    }

    /// Icon identifier, as used by the lucide icon set.
    pub fn name(self) -> &'static str {
        match self {
            GenreIcon::Brain => "brain",
            GenreIcon::BookHeart => "book-heart",
            GenreIcon::Atom => "atom",
            GenreIcon::User => "user",
            GenreIcon::HelpCircle => "help-circle",
        }
    }
}

/// Lower-cased slug: runs of non `[a-z0-9]` become `-`, edges trimmed.
pub fn slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// CSS modifier class for a genre tile, e.g. `genre-tile--sci-fi`.
pub fn color_class(name: &str) -> String {
    let slug = slug(name);
    if slug.is_empty() {
        "genre-tile--unknown".to_string()
    } else {
        format!("genre-tile--{}", slug)
    }
}

/// One clickable genre tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreTile {
    /// Display name, also the route parameter.
    pub name: String,
    /// Tile icon.
    pub icon: GenreIcon,
    /// Colour modifier class.
    pub color_class: String,
}

impl GenreTile {
    /// Tile for an arbitrary genre name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            icon: GenreIcon::for_genre(&name),
            color_class: color_class(&name),
            name,
        }
    }

    /// Where selecting this tile navigates.
    pub fn route(&self) -> Route {
        Route::books(self.name.clone())
    }

    /// Encoded target path.
    pub fn path(&self) -> String {
        self.route().path()
    }
}

/// Tiles for [`FIXED_GENRES`].
pub fn tiles() -> Vec<GenreTile> {
    FIXED_GENRES.iter().map(|name| GenreTile::new(*name)).collect()
}

/// Title of the genre page.
pub const GENRE_PAGE_TITLE: &str = "Browse Books by Genre";
