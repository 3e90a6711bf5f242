use std::collections::HashSet;
use uuid::{uuid, Uuid};

/// The playlist holding two of the demo songs
pub const DEMO_PLAYLIST_ID: Uuid = uuid!("2cc9ccb7-6221-4ccb-8387-f22b6a1b354d");

/// The playlist holding the remaining demo song
pub const SOLO_PLAYLIST_ID: Uuid = uuid!("3fd2bedf-a8c8-455a-a462-0cd3a4353c54");

/// The song whose tag set the update step extends
pub const TONKINOISE_SONG_ID: Uuid = uuid!("756716f7-2e54-4715-9f00-91dcbea6cf50");

const MOESCH_SONG_ID: Uuid = uuid!("f6071e72-48ec-4fcb-bf3e-379c8a696488");
const TURNER_SONG_ID: Uuid = uuid!("fbdf82ed-0063-4796-9c7c-a3d4f47b4b25");

/// The tag added by the update step
pub const DEMO_TAG: &str = "entre-deux-guerres";

/// One row of the `songs` table (the unread `data blob` column excluded)
#[derive(Debug, Clone, PartialEq, Eq, scylla::SerializeRow, scylla::DeserializeRow)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub album: String,
    pub artist: String,
    pub tags: HashSet<String>,
}

/// One denormalized row of the `playlists` table
#[derive(Debug, Clone, PartialEq, Eq, scylla::SerializeRow, scylla::DeserializeRow)]
pub struct PlaylistEntry {
    pub id: Uuid,
    pub title: String,
    pub album: String,
    pub artist: String,
    pub song_id: Uuid,
}

/// Projection returned by the playlist query
#[derive(Debug, Clone, PartialEq, Eq, scylla::DeserializeRow)]
pub struct PlaylistTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// Projection returned by the post-update song read-back
#[derive(Debug, Clone, PartialEq, Eq, scylla::DeserializeRow)]
pub struct TaggedSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub tags: HashSet<String>,
}

fn tag_set(tags: &[&str]) -> HashSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// The three canonical demo songs
pub fn seed_songs() -> Vec<Song> {
    vec![
        Song {
            id: TONKINOISE_SONG_ID,
            title: "La Petite Tonkinoise".to_string(),
            album: "Bye Bye Blackbird".to_string(),
            artist: "Joséphine Baker".to_string(),
            tags: tag_set(&["jazz", "2013"]),
        },
        Song {
            id: MOESCH_SONG_ID,
            title: "Die Mösch".to_string(),
            album: "In Gold".to_string(),
            artist: "Willi Ostermann".to_string(),
            tags: tag_set(&["kölsch", "1996", "birds"]),
        },
        Song {
            id: TURNER_SONG_ID,
            title: "Memo From Turner".to_string(),
            album: "Performance".to_string(),
            artist: "Mick Jager".to_string(),
            tags: tag_set(&["soundtrack", "1991"]),
        },
    ]
}

/// The three canonical playlist rows: two tracks on the demo playlist, one
/// on its own
pub fn seed_playlist_entries() -> Vec<PlaylistEntry> {
    vec![
        PlaylistEntry {
            id: DEMO_PLAYLIST_ID,
            title: "La Petite Tonkinoise".to_string(),
            album: "Bye Bye Blackbird".to_string(),
            artist: "Joséphine Baker".to_string(),
            song_id: TONKINOISE_SONG_ID,
        },
        PlaylistEntry {
            id: DEMO_PLAYLIST_ID,
            title: "Die Mösch".to_string(),
            album: "In Gold".to_string(),
            artist: "Willi Ostermann".to_string(),
            song_id: MOESCH_SONG_ID,
        },
        PlaylistEntry {
            id: SOLO_PLAYLIST_ID,
            title: "Memo From Turner".to_string(),
            album: "Performance".to_string(),
            artist: "Mick Jager".to_string(),
            song_id: TURNER_SONG_ID,
        },
    ]
}
