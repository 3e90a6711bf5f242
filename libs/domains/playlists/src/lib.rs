//! The demo domain: two denormalized music tables in one keyspace.
//!
//! `songs` holds one row per song with a `set<text>` tag column; `playlists`
//! holds one row per (playlist, track) pair, denormalized so a playlist is
//! read with a single partition query. The service walks a session through
//! the full lifecycle of this schema: create, load, query, update a
//! collection column, drop.

pub mod error;
pub mod models;
pub mod policy;
pub mod report;
pub mod service;
pub mod statements;

pub use error::{PlaylistError, PlaylistResult};
pub use models::{
    seed_playlist_entries, seed_songs, PlaylistEntry, PlaylistTrack, Song, TaggedSong,
    DEMO_PLAYLIST_ID, DEMO_TAG, SOLO_PLAYLIST_ID, TONKINOISE_SONG_ID,
};
pub use policy::{BatchReport, ExecutionPolicy};
pub use service::PlaylistService;
pub use statements::Keyspace;
