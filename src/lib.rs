//! Simple terminal colors.
//!
//! ```rust
//! println!("{} white {}", crayons::red("red"), crayons::blue("blue"));
//! println!("{}", crayons::red("urgent").bold());
//! ```
//!
//! Escape codes are only written when stdout looks like a color-capable
//! terminal; see [`control`] for how that is decided and overridden.

pub use color::{COLORS, Color};
pub use control::{colors_enabled, disable, enable, set_enabled};
pub use error::{Error, Result};
pub use paint::*;
pub use palette::{replace_colors, replace_colors_by_name, reset_replace_colors};
pub use style::{ColoredString, Style, clean, colorize};

pub mod color;
pub mod control;
mod error;
pub mod logger;
mod paint;
pub mod palette;
mod style;
