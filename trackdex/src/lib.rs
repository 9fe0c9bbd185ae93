//! # trackdex
//!
//! In-memory album/track/artist credit index.
//!
//! **Purpose:** Ingest a finite batch of [`TrackCredit`] records and answer
//! two kinds of queries for the rest of the process's life:
//! - Which artists are credited on an album, optionally restricted to a
//!   single track ([`CreditIndex::artists_for`])
//! - Which of a list of candidate names are known to the catalog at all
//!   ([`CreditIndex::filter_known_artists`])
//!
//! **Lifecycle:** The index is built exactly once ([`CreditIndex::build`] or
//! [`CreditIndex::build_lossy`]) and is read-only afterwards. There is no
//! update or delete path and no persistence. Queries for unknown albums,
//! tracks, or artists return empty results, never errors.
//!
//! **Concurrency:** `CreditIndex` is `Send + Sync`; once built it can be
//! shared behind an `Arc` and queried from any number of threads without
//! locking, because nothing ever mutates it.

pub mod credit;
pub mod error;
pub mod index;

pub use credit::TrackCredit;
pub use error::{Error, Result};
pub use index::CreditIndex;
