//! Integration tests for the global enable/disable switch.
//!
//! The switch is process-wide, so every test here holds `LOCK`.

use crayons::{Color, Colorize, colorize, colors_enabled, control, disable, enable, set_enabled};
use std::sync::{Mutex, MutexGuard};

static LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test_log::test]
fn test_enable_disable() {
    let _guard = lock();

    disable();
    assert!(!colors_enabled());

    enable();
    assert!(colors_enabled());

    set_enabled(false);
    assert!(!colors_enabled());
    set_enabled(true);
    assert!(colors_enabled());
}

#[test_log::test]
fn test_display_follows_switch() {
    let _guard = lock();

    enable();
    assert_eq!(crayons::red("hello").to_string(), "\x1b[31mhello\x1b[0m");
    assert_eq!(
        format!("{} white {}", crayons::red("red"), crayons::blue("blue")),
        "\x1b[31mred\x1b[0m white \x1b[34mblue\x1b[0m"
    );

    disable();
    if !control::force_color() {
        assert_eq!(crayons::red("hello").to_string(), "hello");
        assert_eq!(
            format!("{} white {}", crayons::red("red"), crayons::blue("blue")),
            "red white blue"
        );
        assert_eq!(format!("non-string value {}", crayons::red(1234)), "non-string value 1234");
    }
    enable();
}

#[test]
fn test_switch_is_read_at_display_time() {
    let _guard = lock();

    enable();
    let painted = "later".green();
    disable();
    if !control::force_color() {
        assert_eq!(painted.to_string(), "later");
    }
    enable();
    assert_eq!(painted.to_string(), "\x1b[32mlater\x1b[0m");
}

#[test]
fn test_always_ignores_switch() {
    let _guard = lock();

    disable();
    let painted = colorize("forced", Color::Yellow).always().bold();
    assert_eq!(painted.to_string(), "\x1b[33m\x1b[1mforced\x1b[0m");
    enable();
}

#[test]
fn test_render_ignores_switch() {
    let _guard = lock();

    disable();
    assert_eq!(crayons::cyan("x").render(true), "\x1b[36mx\x1b[0m");
    enable();
    assert_eq!(crayons::cyan("x").render(false), "x");
}

#[test]
fn test_nested_display_when_disabled() {
    let _guard = lock();

    disable();
    if !control::force_color() {
        let nested = crayons::red(crayons::blue("x"));
        assert_eq!(nested.to_string(), "x");
    }
    enable();
    let nested = crayons::red(crayons::blue("x"));
    assert_eq!(nested.to_string(), "\x1b[31m\x1b[34mx\x1b[0m\x1b[0m");
}

#[test]
fn test_nested_built_enabled_shown_disabled() {
    let _guard = lock();

    enable();
    let nested = crayons::red(crayons::blue("x"));
    disable();
    if !control::force_color() {
        assert!(!nested.to_string().contains('\x1b'));
        assert_eq!(nested.to_string(), "x");
    }
    assert_eq!(nested.render(false), "x");
    enable();
}

#[test]
fn test_nested_built_disabled_shown_enabled() {
    let _guard = lock();

    disable();
    let nested = crayons::red(crayons::blue("y"));
    enable();
    assert_eq!(nested.to_string(), "\x1b[31m\x1b[34my\x1b[0m\x1b[0m");
    assert_eq!(nested.render(true), "\x1b[31m\x1b[34my\x1b[0m\x1b[0m");
}

#[test]
fn test_shares_flag_with_console() {
    let _guard = lock();

    console::set_colors_enabled(false);
    assert!(!colors_enabled());
    if !control::force_color() {
        assert_eq!(crayons::red("x").to_string(), "x");
    }

    console::set_colors_enabled(true);
    assert!(colors_enabled());
    assert_eq!(crayons::red("x").to_string(), "\x1b[31mx\x1b[0m");

    disable();
    assert!(!console::colors_enabled());
    enable();
    assert!(console::colors_enabled());
}

#[test]
fn test_force_color_env_is_read_on_display() {
    let _guard = lock();

    let previous = std::env::var("CLINT_FORCE_COLOR").ok();
    disable();
    let painted = crayons::magenta("x");

    // SAFETY: every test that reads the environment in this binary holds LOCK
    unsafe { std::env::set_var("CLINT_FORCE_COLOR", "1") };
    assert!(control::force_color());
    assert_eq!(painted.to_string(), "\x1b[35mx\x1b[0m");

    unsafe { std::env::set_var("CLINT_FORCE_COLOR", "") };
    assert!(!control::force_color());
    assert_eq!(painted.to_string(), "x");

    match previous {
        Some(value) => unsafe { std::env::set_var("CLINT_FORCE_COLOR", value) },
        None => unsafe { std::env::remove_var("CLINT_FORCE_COLOR") },
    }
    enable();
}
