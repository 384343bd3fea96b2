//! Process-wide switch deciding whether escape codes are emitted.
//!
//! The switch is `console`'s own flag, so crayons and anything styled with
//! `console` always agree. Its default comes from [`console::colors_enabled`],
//! which looks at whether stdout is a terminal, `TERM=dumb`, `NO_COLOR`,
//! `CLICOLOR` and `CLICOLOR_FORCE`. [`enable`], [`disable`] and [`set_enabled`]
//! change it, as does calling [`console::set_colors_enabled`] directly.
//!
//! Independently of the flag, a non-empty `CLINT_FORCE_COLOR` environment
//! variable makes every [`ColoredString`](crate::ColoredString) behave as if it
//! had been built with [`always`](crate::ColoredString::always). The variable
//! is read each time a string is displayed.

use std::cell::Cell;

const FORCE_COLOR_ENV: &str = "CLINT_FORCE_COLOR";

thread_local! {
    static RENDER_OVERRIDE: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Returns whether colorization is currently enabled.
pub fn colors_enabled() -> bool {
    console::colors_enabled()
}

/// Turns colorization on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    if console::colors_enabled() != enabled {
        log::debug!("colors {}", if enabled { "enabled" } else { "disabled" });
    }
    console::set_colors_enabled(enabled);
}

/// Enables colors.
pub fn enable() {
    set_enabled(true);
}

/// Disables colors.
pub fn disable() {
    set_enabled(false);
}

/// Returns true if `CLINT_FORCE_COLOR` asks for escapes regardless of the flag.
pub fn force_color() -> bool {
    is_forced(std::env::var(FORCE_COLOR_ENV).ok().as_deref())
}

fn is_forced(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Decides whether a string painted with the given `always` modifier gets escapes.
pub(crate) fn should_colorize(always: bool) -> bool {
    always
        || RENDER_OVERRIDE
            .with(Cell::get)
            .unwrap_or_else(|| force_color() || colors_enabled())
}

/// Runs `f` with the flag and `CLINT_FORCE_COLOR` replaced by `enabled` on
/// this thread.
pub(crate) fn with_override<T>(enabled: bool, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<bool>);

    impl Drop for Restore {
        fn drop(&mut self) {
            RENDER_OVERRIDE.with(|o| o.set(self.0));
        }
    }

    let _restore = Restore(RENDER_OVERRIDE.with(|o| o.replace(Some(enabled))));
    f()
}
