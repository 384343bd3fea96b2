//! Style options and the [`ColoredString`] they produce.
//!
//! A [`Style`] is a color plus the `bold`, `underline` and `always` modifiers.
//! Painting a value with it gives a [`ColoredString`], which keeps the plain
//! text around and only decides whether to emit escape codes when it is
//! displayed:
//!
//! ```rust
//! use crayons::{Color, Style, colorize};
//!
//! let warning = colorize("careful", Style::new(Color::Yellow).bold());
//! assert_eq!(warning.text(), "careful");
//! assert_eq!(warning.render(true), "\x1b[33m\x1b[1mcareful\x1b[0m");
//! assert_eq!(warning.render(false), "careful");
//! ```

use std::fmt;
use std::ops::Add;

use unicode_width::UnicodeWidthStr;

use crate::color::{BOLD, RESET, UNDERLINE};
use crate::{Color, control, palette};

/// Color and modifiers to paint text with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    color: Color,
    bold: bool,
    underline: bool,
    always: bool,
}

impl Style {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Makes the text bold/bright.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Emits escape codes even when stdout is not a terminal or colors are
    /// disabled globally.
    pub fn always(mut self) -> Self {
        self.always = true;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    pub fn is_always(&self) -> bool {
        self.always
    }

    /// The escape sequence written before the text: color, then bold, then underline.
    pub fn prefix(&self) -> String {
        let mut prefix = self.color.escape();
        if self.bold {
            prefix.push_str(BOLD);
        }
        if self.underline {
            prefix.push_str(UNDERLINE);
        }
        prefix
    }

    /// Paints `val` with this style.
    ///
    /// The color goes through the [palette](crate::palette) replacement table
    /// at this point. If `val` is itself colored (a [`ColoredString`] or
    /// anything displaying one), both its plain and its escaped form are kept
    /// so the choice between them is made when the result is displayed.
    pub fn paint<D: fmt::Display>(&self, val: D) -> ColoredString {
        let style = Style {
            color: palette::resolve(self.color),
            ..*self
        };
        let escaped = control::with_override(true, || val.to_string());
        let (text, nested) = if escaped.contains('\x1b') {
            let plain = control::with_override(false, || val.to_string());
            if plain == escaped {
                (plain, None)
            } else {
                (plain, Some(escaped))
            }
        } else {
            (escaped, None)
        };
        ColoredString {
            text,
            nested,
            style,
        }
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::new(color)
    }
}

/// Paints `val` with `style`, which may be a [`Style`] or just a [`Color`].
///
/// ```rust
/// use crayons::{Color, colorize};
///
/// assert_eq!(colorize("hello", Color::Red).render(true), "\x1b[31mhello\x1b[0m");
/// assert_eq!(colorize("hello", Color::Red).render(false), "hello");
/// ```
pub fn colorize<D: fmt::Display>(val: D, style: impl Into<Style>) -> ColoredString {
    style.into().paint(val)
}

/// Removes every ANSI escape sequence from `s`.
pub fn clean(s: &str) -> String {
    console::strip_ansi_codes(s).into_owned()
}

/// Text together with the style it should be displayed in.
///
/// `Display` emits `prefix + text + "\x1b[0m"` when colors are enabled (or
/// the string was built with [`always`](Self::always)), and the bare text
/// otherwise. Everything else (`len`, `width`, `map`, ...) works on the bare
/// text.
///
/// Painting a `ColoredString` again nests: the inner escapes are emitted or
/// left out together with the outer ones, at display time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColoredString {
    text: String,
    /// Escaped rendering of a colored inner value.
    nested: Option<String>,
    style: Style,
}

impl ColoredString {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    /// Length in bytes of the bare text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width in terminal columns of the bare text.
    pub fn width(&self) -> usize {
        self.text.width()
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.style.underline = true;
        self
    }

    /// See [`Style::always`].
    pub fn always(mut self) -> Self {
        self.style.always = true;
        self
    }

    /// Transforms the bare text, keeping the style.
    ///
    /// Escapes of a nested colored value are dropped.
    ///
    /// ```rust
    /// let shout = crayons::red("hey").map(|s| s.to_uppercase());
    /// assert_eq!(shout.text(), "HEY");
    /// assert_eq!(shout.color(), crayons::Color::Red);
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        Self {
            text: f(&self.text),
            nested: None,
            style: self.style,
        }
    }

    /// Repeats the text `n` times inside a single pair of escapes.
    pub fn repeat(self, n: usize) -> Self {
        Self {
            text: self.text.repeat(n),
            nested: self.nested.map(|s| s.repeat(n)),
            style: self.style,
        }
    }

    /// Renders with escapes if `enabled`, or as bare text otherwise.
    ///
    /// This ignores the global flag and the `always` modifier.
    pub fn render(&self, enabled: bool) -> String {
        if enabled {
            self.styled()
        } else {
            self.text.clone()
        }
    }

    /// Always renders with escapes, including those of a nested colored value.
    pub fn styled(&self) -> String {
        let mut out = self.style.prefix();
        out.push_str(self.inner_styled());
        out.push_str(RESET);
        out
    }

    fn inner_styled(&self) -> &str {
        self.nested.as_deref().unwrap_or(&self.text)
    }

    fn enabled(&self) -> bool {
        control::should_colorize(self.style.always)
    }
}

impl fmt::Display for ColoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled() {
            write!(f, "{}{}{}", self.style.prefix(), self.inner_styled(), RESET)
        } else {
            f.write_str(&self.text)
        }
    }
}

impl From<ColoredString> for String {
    fn from(s: ColoredString) -> Self {
        s.to_string()
    }
}

impl PartialEq<str> for ColoredString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for ColoredString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for ColoredString {
    fn eq(&self, other: &String) -> bool {
        self.text == *other
    }
}

impl PartialEq<ColoredString> for str {
    fn eq(&self, other: &ColoredString) -> bool {
        self == other.text
    }
}

impl PartialEq<ColoredString> for &str {
    fn eq(&self, other: &ColoredString) -> bool {
        *self == other.text
    }
}

impl Add<&str> for ColoredString {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        let mut out = self.to_string();
        out.push_str(rhs);
        out
    }
}

impl Add<ColoredString> for &str {
    type Output = String;

    fn add(self, rhs: ColoredString) -> String {
        format!("{self}{rhs}")
    }
}
