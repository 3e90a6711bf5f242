//! CQL text for the demo schema.
//!
//! Values are always bound as parameters by the caller; the only thing
//! interpolated into statement text is the keyspace name, which CQL cannot
//! take as a bind marker. [`Keyspace`] guards that interpolation by only
//! wrapping identifier-shaped names.

use std::fmt;

use crate::error::{PlaylistError, PlaylistResult};

// Cassandra rejects keyspace names longer than 48 characters.
const MAX_KEYSPACE_LEN: usize = 48;

/// A validated keyspace name, safe to splice into CQL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace(String);

impl Keyspace {
    /// Accepts `[A-Za-z][A-Za-z0-9_]*` up to 48 characters, the unquoted
    /// identifier shape Cassandra itself allows for keyspaces.
    pub fn new(name: impl Into<String>) -> PlaylistResult<Self> {
        let name = name.into();

        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let rest_is_identifier = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !starts_with_letter || !rest_is_identifier || name.len() > MAX_KEYSPACE_LEN {
            return Err(PlaylistError::InvalidKeyspace(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn create_keyspace(keyspace: &Keyspace, replication_factor: u8) -> String {
    format!(
        "CREATE KEYSPACE IF NOT EXISTS {keyspace} WITH replication = \
         {{'class': 'SimpleStrategy', 'replication_factor': {replication_factor}}}"
    )
}

pub fn create_songs_table(keyspace: &Keyspace) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {keyspace}.songs (\
         id uuid PRIMARY KEY, \
         title text, \
         album text, \
         artist text, \
         tags set<text>, \
         data blob)"
    )
}

pub fn create_playlists_table(keyspace: &Keyspace) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {keyspace}.playlists (\
         id uuid, \
         title text, \
         album text, \
         artist text, \
         song_id uuid, \
         PRIMARY KEY (id, title, album, artist))"
    )
}

pub fn insert_song(keyspace: &Keyspace) -> String {
    format!(
        "INSERT INTO {keyspace}.songs (id, title, album, artist, tags) \
         VALUES (?, ?, ?, ?, ?)"
    )
}

pub fn insert_playlist_entry(keyspace: &Keyspace) -> String {
    format!(
        "INSERT INTO {keyspace}.playlists (id, title, album, artist, song_id) \
         VALUES (?, ?, ?, ?, ?)"
    )
}

pub fn select_playlist(keyspace: &Keyspace) -> String {
    format!("SELECT title, artist, album FROM {keyspace}.playlists WHERE id = ?")
}

pub fn add_song_tag(keyspace: &Keyspace) -> String {
    format!("UPDATE {keyspace}.songs SET tags = tags + ? WHERE id = ?")
}

pub fn select_song(keyspace: &Keyspace) -> String {
    format!("SELECT title, artist, album, tags FROM {keyspace}.songs WHERE id = ?")
}

pub fn count_songs(keyspace: &Keyspace) -> String {
    format!("SELECT COUNT(*) FROM {keyspace}.songs")
}

pub fn count_playlist_entries(keyspace: &Keyspace) -> String {
    format!("SELECT COUNT(*) FROM {keyspace}.playlists")
}

pub fn drop_keyspace(keyspace: &Keyspace) -> String {
    format!("DROP KEYSPACE {keyspace}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyspace() -> Keyspace {
        Keyspace::new("simplex").unwrap()
    }

    #[test]
    fn test_keyspace_accepts_identifiers() {
        assert!(Keyspace::new("simplex").is_ok());
        assert!(Keyspace::new("simplex_it_a1b2").is_ok());
        assert!(Keyspace::new("S1").is_ok());
    }

    #[test]
    fn test_keyspace_rejects_non_identifiers() {
        assert!(Keyspace::new("").is_err());
        assert!(Keyspace::new("1simplex").is_err());
        assert!(Keyspace::new("_simplex").is_err());
        assert!(Keyspace::new("simplex; DROP KEYSPACE system").is_err());
        assert!(Keyspace::new("simplex.songs").is_err());
        assert!(Keyspace::new("a".repeat(49)).is_err());
    }

    #[test]
    fn test_keyspace_accepts_maximum_length() {
        assert!(Keyspace::new("a".repeat(48)).is_ok());
    }

    #[test]
    fn test_create_keyspace_statement() {
        let cql = create_keyspace(&keyspace(), 3);
        assert!(cql.starts_with("CREATE KEYSPACE IF NOT EXISTS simplex"));
        assert!(cql.contains("'class': 'SimpleStrategy'"));
        assert!(cql.contains("'replication_factor': 3"));
    }

    #[test]
    fn test_table_statements_are_idempotent_and_qualified() {
        let songs = create_songs_table(&keyspace());
        assert!(songs.contains("IF NOT EXISTS simplex.songs"));
        assert!(songs.contains("tags set<text>"));
        assert!(songs.contains("id uuid PRIMARY KEY"));

        let playlists = create_playlists_table(&keyspace());
        assert!(playlists.contains("IF NOT EXISTS simplex.playlists"));
        assert!(playlists.contains("PRIMARY KEY (id, title, album, artist)"));
    }

    #[test]
    fn test_dml_statements_use_bind_markers_only() {
        let ks = keyspace();
        for cql in [
            insert_song(&ks),
            insert_playlist_entry(&ks),
            select_playlist(&ks),
            add_song_tag(&ks),
            select_song(&ks),
        ] {
            assert!(cql.contains('?'), "expected bind markers in {cql}");
            assert!(!cql.contains('\''), "unexpected literal in {cql}");
        }
    }

    #[test]
    fn test_add_song_tag_is_a_set_union() {
        let cql = add_song_tag(&keyspace());
        assert!(cql.contains("SET tags = tags + ?"));
    }

    #[test]
    fn test_drop_keyspace_honors_argument() {
        let ks = Keyspace::new("not_simplex").unwrap();
        assert_eq!(drop_keyspace(&ks), "DROP KEYSPACE not_simplex");
    }
}
