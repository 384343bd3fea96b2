//! The fixed set of foreground colors crayons knows how to paint.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Select Graphic Rendition sequence that restores every attribute.
pub const RESET: &str = "\x1b[0m";
/// SGR sequence for bold/bright text.
pub const BOLD: &str = "\x1b[1m";
/// SGR sequence for underlined text.
pub const UNDERLINE: &str = "\x1b[4m";

/// A foreground terminal color.
///
/// Names follow the colorama convention (`red`, `lightred_ex`, ...). Parsing
/// is case-insensitive and also accepts the `light_red` spelling.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[serde(rename = "lightblack_ex", alias = "light_black")]
    #[strum(to_string = "lightblack_ex", serialize = "light_black")]
    LightBlack,
    #[serde(rename = "lightred_ex", alias = "light_red")]
    #[strum(to_string = "lightred_ex", serialize = "light_red")]
    LightRed,
    #[serde(rename = "lightgreen_ex", alias = "light_green")]
    #[strum(to_string = "lightgreen_ex", serialize = "light_green")]
    LightGreen,
    #[serde(rename = "lightyellow_ex", alias = "light_yellow")]
    #[strum(to_string = "lightyellow_ex", serialize = "light_yellow")]
    LightYellow,
    #[serde(rename = "lightblue_ex", alias = "light_blue")]
    #[strum(to_string = "lightblue_ex", serialize = "light_blue")]
    LightBlue,
    #[serde(rename = "lightmagenta_ex", alias = "light_magenta")]
    #[strum(to_string = "lightmagenta_ex", serialize = "light_magenta")]
    LightMagenta,
    #[serde(rename = "lightcyan_ex", alias = "light_cyan")]
    #[strum(to_string = "lightcyan_ex", serialize = "light_cyan")]
    LightCyan,
    #[serde(rename = "lightwhite_ex", alias = "light_white")]
    #[strum(to_string = "lightwhite_ex", serialize = "light_white")]
    LightWhite,
    /// The terminal's default foreground.
    #[default]
    Normal,
}

/// Every real color, i.e. everything except [`Color::Normal`].
pub const COLORS: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::LightBlack,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightWhite,
];

impl Color {
    /// Looks a color up by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColor`] if `name` is not a known color.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| Error::UnknownColor(name.to_string()))
    }

    /// Canonical name, e.g. `"red"` or `"lightred_ex"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The SGR foreground code.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Normal => 39,
            Color::LightBlack => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::LightWhite => 97,
        }
    }

    /// The escape sequence selecting this color, e.g. `"\x1b[31m"`.
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.code())
    }
}
