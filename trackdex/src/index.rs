//! Credit index: built once from a batch of credits, queried forever after
//!
//! The index keeps one [`AlbumCredits`] rollup per album (a dedicated
//! whole-album artist set plus per-track artist sets) and a flat membership
//! set of every artist name seen in the input. Ordered containers are used
//! for the rollups so query results and iteration order are deterministic;
//! the membership set is a `HashSet` because it only ever answers point
//! queries.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::credit::TrackCredit;
use crate::error::{Error, Result};

/// Shared empty set borrowed by queries for unknown albums and tracks
static EMPTY_ARTISTS: Lazy<BTreeSet<String>> = Lazy::new(BTreeSet::new);

/// Per-album rollup of credits.
///
/// The whole-album aggregate lives in its own field rather than a reserved
/// track slot, so real track numbers can never collide with it.
#[derive(Debug, Clone, Default)]
struct AlbumCredits {
    /// Every artist credited anywhere on the album
    all_artists: BTreeSet<String>,
    /// Artists credited on each specific track
    by_track: BTreeMap<u32, BTreeSet<String>>,
}

/// Immutable lookup index over a batch of [`TrackCredit`] records.
///
/// Built once with [`build`](CreditIndex::build) or
/// [`build_lossy`](CreditIndex::build_lossy); every method after that is a
/// read. Unknown albums, tracks, and artists produce empty results, so
/// "not found" and "found but empty" are deliberately the same observable
/// outcome. The index is `Send + Sync` and safe to share across threads
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct CreditIndex {
    /// Album title → per-album rollup
    albums: BTreeMap<String, AlbumCredits>,
    /// Every artist name appearing in the input (membership set)
    artists: HashSet<String>,
    /// Number of distinct (album, track, artist) credits indexed
    credits: usize,
}

// ============================================================================
// Construction
// ============================================================================

impl CreditIndex {
    /// Build an index from a batch of credits, rejecting malformed input.
    ///
    /// Construction is pure: no I/O, no side effects beyond a log line.
    /// The empty batch is valid and yields an index whose every query
    /// returns an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTrackNumber`] if any credit carries track
    /// number 0 (track numbers are 1-based). The whole batch is rejected;
    /// use [`build_lossy`](CreditIndex::build_lossy) to skip malformed
    /// credits instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackdex::{CreditIndex, TrackCredit};
    ///
    /// let index = CreditIndex::build(vec![
    ///     TrackCredit::new("Album A", 1, "X"),
    ///     TrackCredit::new("Album A", 2, "Y"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(index.album_count(), 1);
    /// assert_eq!(index.artist_count(), 2);
    /// ```
    pub fn build<I>(credits: I) -> Result<Self>
    where
        I: IntoIterator<Item = TrackCredit>,
    {
        let mut index = Self::default();

        for credit in credits {
            if !credit.is_valid() {
                return Err(Error::InvalidTrackNumber {
                    album: credit.album,
                    artist: credit.artist,
                });
            }
            index.insert(credit);
        }

        debug!(
            "Indexed {} credits across {} albums ({} distinct artists)",
            index.credits,
            index.albums.len(),
            index.artists.len()
        );
        Ok(index)
    }

    /// Build an index from a batch of credits, skipping malformed input.
    ///
    /// The permissive counterpart of [`build`](CreditIndex::build):
    /// credits with track number 0 are dropped and counted, a single
    /// warning is logged, and construction always succeeds.
    pub fn build_lossy<I>(credits: I) -> Self
    where
        I: IntoIterator<Item = TrackCredit>,
    {
        let mut index = Self::default();
        let mut dropped = 0usize;

        for credit in credits {
            if credit.is_valid() {
                index.insert(credit);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            warn!("Skipped {} credits with invalid track numbers", dropped);
        }
        debug!(
            "Indexed {} credits across {} albums ({} distinct artists)",
            index.credits,
            index.albums.len(),
            index.artists.len()
        );
        index
    }

    /// Fold one valid credit into the rollups and the membership set
    fn insert(&mut self, credit: TrackCredit) {
        let TrackCredit {
            album,
            track,
            artist,
        } = credit;

        let entry = self.albums.entry(album).or_default();
        entry.all_artists.insert(artist.clone());
        if entry.by_track.entry(track).or_default().insert(artist.clone()) {
            // First time this exact (album, track, artist) credit appears
            self.credits += 1;
        }
        self.artists.insert(artist);
    }
}

// ============================================================================
// Queries
// ============================================================================

impl CreditIndex {
    /// Look up the artists credited on an album, optionally restricted to
    /// one track. This is the uniform query operation; every other lookup
    /// is a convenience wrapper around it.
    ///
    /// # Arguments
    ///
    /// * `album` - Album title (exact string match)
    /// * `track` - `None` for the whole-album artist set, `Some(n)` for the
    ///   artists on track `n` only
    ///
    /// # Returns
    ///
    /// A borrowed artist set, empty when the album or track is unknown.
    /// Every artist in a track-level result also appears in the album-level
    /// result for the same album.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackdex::{CreditIndex, TrackCredit};
    ///
    /// let index = CreditIndex::build(vec![
    ///     TrackCredit::new("Album A", 1, "X"),
    ///     TrackCredit::new("Album A", 2, "Y"),
    ///     TrackCredit::new("Album B", 1, "X"),
    /// ])
    /// .unwrap();
    ///
    /// let all = index.artists_for("Album A", None);
    /// assert!(all.contains("X") && all.contains("Y"));
    ///
    /// let second = index.artists_for("Album A", Some(2));
    /// assert!(second.contains("Y") && !second.contains("X"));
    ///
    /// // Unknown keys are empty results, never errors
    /// assert!(index.artists_for("Album C", None).is_empty());
    /// assert!(index.artists_for("Album A", Some(99)).is_empty());
    /// ```
    pub fn artists_for(&self, album: &str, track: Option<u32>) -> &BTreeSet<String> {
        let Some(entry) = self.albums.get(album) else {
            return &EMPTY_ARTISTS;
        };
        match track {
            None => &entry.all_artists,
            Some(number) => entry.by_track.get(&number).unwrap_or(&EMPTY_ARTISTS),
        }
    }

    /// All artists credited anywhere on `album`
    pub fn artists_on_album(&self, album: &str) -> &BTreeSet<String> {
        self.artists_for(album, None)
    }

    /// Artists credited on one specific track of `album`
    pub fn artists_on_track(&self, album: &str, track: u32) -> &BTreeSet<String> {
        self.artists_for(album, Some(track))
    }
}

// ============================================================================
// Membership
// ============================================================================

impl CreditIndex {
    /// Whether `name` appears as an artist anywhere in the indexed credits
    pub fn is_known_artist(&self, name: &str) -> bool {
        self.artists.contains(name)
    }

    /// Filter a candidate list down to the names known to the catalog.
    ///
    /// A pure filter over `candidates`: input order is preserved, and
    /// duplicates on the candidate side pass through unchanged (a known
    /// name listed twice is returned twice). Matching is exact string
    /// equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackdex::{CreditIndex, TrackCredit};
    ///
    /// let index = CreditIndex::build(vec![
    ///     TrackCredit::new("Album A", 1, "X"),
    ///     TrackCredit::new("Album A", 2, "Y"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(index.filter_known_artists(["X", "Z", "Y"]), vec!["X", "Y"]);
    /// assert!(index.filter_known_artists(["Z"]).is_empty());
    /// ```
    pub fn filter_known_artists<'a, I>(&self, candidates: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|name| self.artists.contains(*name))
            .collect()
    }
}

// ============================================================================
// Introspection
// ============================================================================

impl CreditIndex {
    /// Album titles in the index, in sorted order
    pub fn albums(&self) -> impl Iterator<Item = &str> + '_ {
        self.albums.keys().map(String::as_str)
    }

    /// Every known artist name, sorted
    pub fn known_artists(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.artists.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Track numbers credited on `album`, ascending (empty if unknown)
    pub fn tracks_on_album<'a>(&'a self, album: &str) -> impl Iterator<Item = u32> + 'a {
        self.albums
            .get(album)
            .into_iter()
            .flat_map(|entry| entry.by_track.keys().copied())
    }

    /// Number of albums in the index
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Number of distinct artist names in the index
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Number of distinct (album, track, artist) credits indexed.
    ///
    /// Exact duplicate input rows collapse into one credit, so this can be
    /// lower than the number of input records.
    pub fn credit_count(&self) -> usize {
        self.credits
    }

    /// Whether the index holds no credits at all
    pub fn is_empty(&self) -> bool {
        self.credits == 0
    }
}
