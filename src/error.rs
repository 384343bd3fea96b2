//! Error types for the crayons library.
//!
//! Painting text never fails. Errors only come out of the string-based entry
//! points (color names) and from installing the [`ColorLogger`](crate::logger::ColorLogger).

use thiserror::Error;

/// Error type for crayons operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A color name that is not part of [`Color`](crate::Color) was requested.
    #[error("invalid color name ({0}) requested")]
    UnknownColor(String),

    /// Another global logger was already installed.
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// A specialized `Result` type for crayons operations.
///
/// This is defined as `std::result::Result<T, crayons::Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;
