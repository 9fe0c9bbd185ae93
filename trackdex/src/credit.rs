//! Credit records: the raw rows a [`CreditIndex`] is built from
//!
//! [`CreditIndex`]: crate::CreditIndex

use serde::{Deserialize, Serialize};

/// Lowest valid track number; credits below this are malformed input
pub const FIRST_TRACK: u32 = 1;

/// One credit: `artist` appears on track `track` of `album`.
///
/// Credits are plain immutable input data. Album and artist names are
/// compared by exact string equality everywhere, with no case folding or
/// other normalization. Track numbers are 1-based; `0` is the one
/// malformed value the type admits (negative numbers are unrepresentable)
/// and is rejected or skipped at build time depending on which
/// constructor is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCredit {
    /// Album title
    pub album: String,
    /// 1-based track number within the album
    pub track: u32,
    /// Credited artist name
    pub artist: String,
}

impl TrackCredit {
    /// Create a new credit record
    pub fn new(album: impl Into<String>, track: u32, artist: impl Into<String>) -> Self {
        Self {
            album: album.into(),
            track,
            artist: artist.into(),
        }
    }

    /// Whether this credit can be indexed (track numbers are 1-based)
    pub fn is_valid(&self) -> bool {
        self.track >= FIRST_TRACK
    }
}
