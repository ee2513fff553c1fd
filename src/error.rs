//! Error types for the `html_cleaner` crate.
//!
//! Only construction can fail. Once a [`Cleaner`](crate::Cleaner) exists,
//! cleaning is a total function over any input string.

/// All errors that can occur while configuring a cleaner.
#[derive(Debug, thiserror::Error)]
pub enum CleanerError {
    /// An acronym token is empty or contains whitespace or markup characters.
    #[error("Invalid acronym: {0:?}")]
    InvalidAcronym(String),

    /// A replacement rule pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The builder configuration is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

/// A type alias for `Result<T, CleanerError>`.
pub type Result<T> = std::result::Result<T, CleanerError>;
