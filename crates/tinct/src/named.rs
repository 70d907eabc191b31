//! Named color lookup, backed by the `tinct-names` tables.
//!
//! A name may carry a database prefix: `x11:` or `css:` (`w3c:` is an alias
//! for `css:`). Without a prefix the X11 table is used. An unrecognized
//! prefix is treated as part of the name, so `svg:red` simply fails to
//! match.

use crate::space::{Color, Rgb};

pub use tinct_names::Database;

/// Looks up `name` in `database`. Case and whitespace are ignored.
pub fn lookup(name: &str, database: Database) -> Option<Color> {
    tinct_names::lookup(name, database).map(|rgb| Color::Rgb(Rgb::from(rgb)))
}

/// Looks up a possibly prefixed name (`"css:rebeccapurple"`).
pub fn resolve(input: &str) -> Option<Color> {
    let (database, name) = match input.split_once(':') {
        Some((prefix, rest)) => match Database::from_prefix(prefix) {
            Some(database) => (database, rest),
            None => (Database::default(), input),
        },
        None => (Database::default(), input),
    };
    lookup(name, database)
}

/// Every entry of `database` as `(name, color)`, sorted by name.
pub fn entries(database: Database) -> Vec<(&'static str, Rgb)> {
    tinct_names::entries(database)
        .into_iter()
        .map(|(name, rgb)| (name, Rgb::from(rgb)))
        .collect()
}
