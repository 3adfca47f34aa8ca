//! Error taxonomy for configuration ingestion.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while registering or running a reader.
///
/// Absence is never an error: a registry lookup for an unknown name returns
/// `Ok(None)`, so callers can tell misuse apart from a normal negative
/// lookup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A registry operation was given a blank name.
    ///
    /// This indicates a programmer error and should not be caught for
    /// control flow.
    #[error("invalid reader name {0:?}: name must be a non-empty string")]
    InvalidName(String),

    /// An optional parser backend is not available in this process.
    ///
    /// Raised at reader construction time, never during `read`. The caller
    /// is expected to treat this as an actionable signal to enable the
    /// named library.
    #[error("the `{library}` crate is required to read {format} documents")]
    LibraryRequired {
        /// The crate providing the missing capability.
        library: &'static str,
        /// The format whose reader needed it.
        format: &'static str,
    },

    /// The input stream could not be read.
    #[error("failed to read configuration stream: {0}")]
    Io(#[from] std::io::Error),

    /// The backing parser rejected the document, or its top level was not
    /// a mapping.
    #[error("malformed {format} document: {message}")]
    Parse {
        /// The format being parsed.
        format: &'static str,
        /// The backing parser's diagnostic.
        message: String,
    },
}
