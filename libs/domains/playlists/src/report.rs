//! Console rendering for the demo's query output.

use std::collections::HashSet;

use crate::models::{PlaylistTrack, TaggedSong};

/// Header line for the tab-separated song table
pub const SONG_REPORT_HEADER: &str = "title\tartist\talbum\ttags";

/// Render a tag set as `{ a, b, c }`, sorted so output is deterministic
pub fn render_tag_set(tags: &HashSet<String>) -> String {
    let mut sorted: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    sorted.sort_unstable();

    if sorted.is_empty() {
        return "{ }".to_string();
    }
    format!("{{ {} }}", sorted.join(", "))
}

/// Render one playlist track the way the query step prints it
pub fn render_track_line(track: &PlaylistTrack) -> String {
    format!(
        "title: {}, artist: {}, album: {}",
        track.title, track.artist, track.album
    )
}

/// Render one tab-separated row of the song table
pub fn render_song_row(song: &TaggedSong) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        song.title,
        song.artist,
        song.album,
        render_tag_set(&song.tags)
    )
}
