//! One painting function per color.
//!
//! Every function here also exists as a method of the [`Colorize`] trait,
//! which is implemented for anything that implements `Display`. Both are
//! generated from the same table and carry the same documentation.
//!
//! ```rust
//! use crayons::Colorize;
//!
//! println!("{} white {}", crayons::red("red"), "blue".blue());
//! println!("{}", crayons::yellow("careful").bold());
//! ```

use std::fmt::Display;

use rand::seq::SliceRandom;

use crate::{COLORS, Color, ColoredString, colorize};

macro_rules! color_fns {
    ($($name:ident => $color:ident, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub fn $name<D: Display>(val: D) -> ColoredString {
                colorize(val, Color::$color)
            }
        )*

        /// Method-call access to the color functions: `"text".red()`.
        pub trait Colorize: Display {
            $(
                #[doc = $doc]
                fn $name(&self) -> ColoredString {
                    colorize(self, Color::$color)
                }
            )*
        }
    };
}

color_fns! {
    black => Black, "Paints the value black.";
    red => Red, "Paints the value red.";
    green => Green, "Paints the value green.";
    yellow => Yellow, "Paints the value yellow.";
    blue => Blue, "Paints the value blue.";
    magenta => Magenta, "Paints the value magenta.";
    cyan => Cyan, "Paints the value cyan.";
    white => White, "Paints the value white.";
    light_black => LightBlack, "Paints the value light black (grey).";
    light_red => LightRed, "Paints the value light red.";
    light_green => LightGreen, "Paints the value light green.";
    light_yellow => LightYellow, "Paints the value light yellow.";
    light_blue => LightBlue, "Paints the value light blue.";
    light_magenta => LightMagenta, "Paints the value light magenta.";
    light_cyan => LightCyan, "Paints the value light cyan.";
    light_white => LightWhite, "Paints the value light white.";
    normal => Normal, "Paints the value in the terminal's default foreground color.";
}

impl<T: Display + ?Sized> Colorize for T {}

/// Paints the value with a color picked at random from [`COLORS`].
pub fn random<D: Display>(val: D) -> ColoredString {
    random_from(val, &COLORS)
}

/// Paints the value with a color picked at random from `colors`.
///
/// [`Color::Normal`] is never picked. If `colors` has nothing else in it, the
/// pick is made from [`COLORS`] instead.
pub fn random_from<D: Display>(val: D, colors: &[Color]) -> ColoredString {
    let usable: Vec<Color> = colors
        .iter()
        .copied()
        .filter(|c| *c != Color::Normal)
        .collect();
    let pool: &[Color] = if usable.is_empty() {
        &COLORS[..]
    } else {
        &usable[..]
    };
    let color = pool
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(Color::Normal);
    colorize(val, color)
}
