//! A [`log`] backend that prints level names in color.
//!
//! ```rust,no_run
//! use crayons::logger::ColorLogger;
//! use log::LevelFilter;
//!
//! ColorLogger::new(LevelFilter::Debug).init().unwrap();
//! log::warn!("disk almost full");
//! ```
//!
//! Lines are written to stderr as `LEVEL message`. Whether the level name is
//! colored is decided for stderr, not stdout: it is plain when stderr is
//! redirected even if stdout is a terminal. `CLINT_FORCE_COLOR` still forces it.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

use crate::{ColoredString, Result, control, cyan, light_black, red, yellow};

/// A logger that writes colored level names to stderr.
pub struct ColorLogger {
    level: LevelFilter,
    target_filter: Option<String>,
}

impl ColorLogger {
    /// Creates a logger showing records up to `level`.
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            target_filter: None,
        }
    }

    /// Creates a logger that only shows records whose target starts with `target`.
    pub fn with_target(level: LevelFilter, target: impl Into<String>) -> Self {
        Self {
            level,
            target_filter: Some(target.into()),
        }
    }

    /// Installs this logger as the global logger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SetLogger`](crate::Error::SetLogger) if a logger has
    /// already been set.
    pub fn init(self) -> Result<()> {
        let level = self.level;
        // set the logger first so a failed install leaves the max level alone
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format_message(&self, record: &Record, colored: bool) -> String {
        format!(
            "{} {}",
            level_label(record.level()).render(colored),
            record.args()
        )
    }
}

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::Error => red("ERROR"),
        Level::Warn => yellow("WARN"),
        Level::Info => cyan("INFO"),
        Level::Debug => light_black("DEBUG"),
        Level::Trace => light_black("TRACE"),
    }
}

impl Log for ColorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        if let Some(ref filter) = self.target_filter {
            metadata.target().starts_with(filter)
        } else {
            true
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let colored = control::force_color() || console::colors_enabled_stderr();
        let message = self.format_message(record, colored);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", message);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs a [`ColorLogger`] at `Info`.
///
/// # Errors
///
/// Returns an error if a logger has already been set.
pub fn try_init() -> Result<()> {
    ColorLogger::new(LevelFilter::Info).init()
}

/// Installs a [`ColorLogger`] at `level`.
///
/// # Errors
///
/// Returns an error if a logger has already been set.
pub fn try_init_with_level(level: LevelFilter) -> Result<()> {
    ColorLogger::new(level).init()
}
