//! Color replacement, for tuning the look under a particular terminal background.
//!
//! ```rust
//! use crayons::{Color, palette};
//!
//! // blue is hard to read on this background
//! palette::replace_colors([(Color::Blue, Color::LightCyan)]);
//! assert_eq!(crayons::blue("hi").color(), Color::LightCyan);
//!
//! palette::reset_replace_colors();
//! assert_eq!(crayons::blue("hi").color(), Color::Blue);
//! ```
//!
//! Replacements are looked up once, when a [`ColoredString`](crate::ColoredString)
//! is created, and are not chained: with `red -> blue` and `blue -> green`,
//! red text is painted blue.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::{Color, Result};

static REPLACEMENTS: RwLock<BTreeMap<Color, Color>> = RwLock::new(BTreeMap::new());

/// Replaces the whole replacement table with `pairs` of `(from, to)`.
pub fn replace_colors<I>(pairs: I)
where
    I: IntoIterator<Item = (Color, Color)>,
{
    let table: BTreeMap<Color, Color> = pairs.into_iter().collect();
    log::debug!("replacing colors: {table:?}");
    *REPLACEMENTS.write().unwrap_or_else(PoisonError::into_inner) = table;
}

/// Like [`replace_colors`], taking color names.
///
/// # Errors
///
/// Returns [`Error::UnknownColor`](crate::Error::UnknownColor) for the first
/// name that is not a color. The table is left untouched in that case.
pub fn replace_colors_by_name<'a, I>(pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let table = pairs
        .into_iter()
        .map(|(from, to)| Ok((Color::from_name(from)?, Color::from_name(to)?)))
        .collect::<Result<Vec<_>>>()?;
    replace_colors(table);
    Ok(())
}

/// Clears the replacement table.
pub fn reset_replace_colors() {
    log::debug!("resetting color replacements");
    REPLACEMENTS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Returns a copy of the current replacement table.
pub fn replacements() -> BTreeMap<Color, Color> {
    REPLACEMENTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Applies the replacement table to `color`.
pub fn resolve(color: Color) -> Color {
    REPLACEMENTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&color)
        .copied()
        .unwrap_or(color)
}
