//! Named color tables for `tinct`.
//!
//! Two databases are provided:
//!
//! - [`Database::X11`]: the classic X11 `rgb.txt` names (the default)
//! - [`Database::Css`]: the CSS/W3C named colors
//!
//! Tables are materialized lazily, once per process, on the first lookup
//! against them. Initialization is thread-safe; afterwards the tables are
//! read-only and every lookup returns the same value for the same name.
//!
//! Names are normalized before lookup: lowercased, with all whitespace
//! removed, so `"Navy Blue"`, `"navy blue"` and `"navyblue"` are the same key.
//!
//! # Example
//!
//! ```rust
//! use tinct_names::{lookup, Database};
//!
//! assert_eq!(lookup("Rebecca Purple", Database::Css), Some([102, 51, 153]));
//! assert_eq!(lookup("gray", Database::X11), Some([190, 190, 190]));
//! assert_eq!(lookup("gray", Database::Css), Some([128, 128, 128]));
//! assert_eq!(lookup("not a color", Database::Css), None);
//! ```

mod css;
mod x11;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// An `[r, g, b]` triplet as stored in the tables.
pub type Rgb8 = [u8; 3];

/// Which named color table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Database {
    /// X11 `rgb.txt` names.
    #[default]
    X11,
    /// CSS Color Module named colors (also known as the W3C set).
    Css,
}

impl Database {
    /// Resolves a lookup prefix (`"x11"`, `"css"` or `"w3c"`, case-insensitive)
    /// to a database.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.trim().to_ascii_lowercase().as_str() {
            "x11" => Some(Database::X11),
            "css" | "w3c" => Some(Database::Css),
            _ => None,
        }
    }

    /// The canonical prefix for this database.
    pub fn prefix(self) -> &'static str {
        match self {
            Database::X11 => "x11",
            Database::Css => "css",
        }
    }

    fn table(self) -> &'static HashMap<&'static str, Rgb8> {
        match self {
            Database::X11 => &X11_TABLE,
            Database::Css => &CSS_TABLE,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

static CSS_TABLE: Lazy<HashMap<&'static str, Rgb8>> = Lazy::new(|| {
    let table: HashMap<_, _> = css::COLORS.iter().copied().collect();
    tracing::debug!(database = "css", entries = table.len(), "named color table loaded");
    table
});

static X11_TABLE: Lazy<HashMap<&'static str, Rgb8>> = Lazy::new(|| {
    let mut table: HashMap<_, _> = css::COLORS
        .iter()
        .filter(|(name, _)| !x11::WEB_ONLY.contains(name))
        .copied()
        .collect();
    table.extend(x11::OVERRIDES.iter().copied());
    tracing::debug!(database = "x11", entries = table.len(), "named color table loaded");
    table
});

/// Normalizes a color name for lookup: lowercase, whitespace removed.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Looks up a color by name in the given database.
///
/// The name is normalized first; see [`normalize`].
pub fn lookup(name: &str, database: Database) -> Option<Rgb8> {
    database.table().get(normalize(name).as_str()).copied()
}

/// Returns every entry of a database, sorted by name.
pub fn entries(database: Database) -> Vec<(&'static str, Rgb8)> {
    let mut entries: Vec<_> = database
        .table()
        .iter()
        .map(|(name, rgb)| (*name, *rgb))
        .collect();
    entries.sort_unstable_by_key(|(name, _)| *name);
    entries
}
