//! Error types for trackdex
//!
//! The taxonomy is deliberately small: malformed input surfaces when an
//! index is built, and lookups never fail. An unknown album, track, or
//! artist is an empty successful result, not an error.

use thiserror::Error;

/// Main error type for trackdex
#[derive(Error, Debug)]
pub enum Error {
    /// A credit carried track number 0 (track numbers are 1-based)
    #[error("Invalid track number 0 for \"{artist}\" on album \"{album}\"")]
    InvalidTrackNumber {
        /// Album the rejected credit referred to
        album: String,
        /// Artist the rejected credit named
        artist: String,
    },
}

/// Convenience Result type using the trackdex Error
pub type Result<T> = std::result::Result<T, Error>;
