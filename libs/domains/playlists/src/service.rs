use database::cassandra::{first_row, typed_rows, SessionClient};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

use crate::error::{PlaylistError, PlaylistResult};
use crate::models::{seed_playlist_entries, seed_songs, PlaylistTrack, TaggedSong};
use crate::policy::{BatchReport, ExecutionPolicy};
use crate::statements::{self, Keyspace};

/// Replication factor the demo keyspace is created with by default
pub const DEFAULT_REPLICATION_FACTOR: u8 = 3;

/// Walks a session through the demo schema lifecycle.
///
/// Every method runs its statements strictly in sequence: each statement is
/// awaited to completion before the next is issued. Multi-statement methods
/// take an [`ExecutionPolicy`] deciding whether a failure aborts the rest.
pub struct PlaylistService {
    client: SessionClient,
    keyspace: Keyspace,
    replication_factor: u8,
}

impl PlaylistService {
    pub fn new(client: SessionClient, keyspace: Keyspace) -> Self {
        Self {
            client,
            keyspace,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
        }
    }

    /// Override the keyspace replication factor (e.g. 1 for a single-node
    /// test cluster, where the default of 3 would fail quorum reads)
    pub fn with_replication_factor(mut self, replication_factor: u8) -> Self {
        self.replication_factor = replication_factor;
        self
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    pub fn client(&self) -> &SessionClient {
        &self.client
    }

    /// Close the underlying session, consuming the service
    pub fn close(self) {
        self.client.close();
    }

    /// Create the demo keyspace and both tables
    pub async fn create_schema(&self, policy: ExecutionPolicy) -> PlaylistResult<BatchReport> {
        info!("Creating {} keyspace and tables", self.keyspace);

        let statements = [
            statements::create_keyspace(&self.keyspace, self.replication_factor),
            statements::create_songs_table(&self.keyspace),
            statements::create_playlists_table(&self.keyspace),
        ];

        let mut report = BatchReport::default();
        for cql in &statements {
            match self.client.execute_cql(cql).await {
                Ok(_) => report.record_success(),
                Err(e) => {
                    report.record_failure(e.to_string());
                    if policy.fail_fast() {
                        return Err(PlaylistError::Database(e));
                    }
                }
            }
        }

        Ok(report)
    }

    /// Insert the three demo songs and three playlist rows
    pub async fn load_data(&self, policy: ExecutionPolicy) -> PlaylistResult<BatchReport> {
        info!("Loading data into {} keyspace", self.keyspace);

        let mut report = BatchReport::default();

        let insert_song = statements::insert_song(&self.keyspace);
        for song in seed_songs() {
            match self.client.execute(&insert_song, &song).await {
                Ok(_) => report.record_success(),
                Err(e) => {
                    report.record_failure(e.to_string());
                    if policy.fail_fast() {
                        return Err(PlaylistError::Database(e));
                    }
                }
            }
        }

        let insert_entry = statements::insert_playlist_entry(&self.keyspace);
        for entry in seed_playlist_entries() {
            match self.client.execute(&insert_entry, &entry).await {
                Ok(_) => report.record_success(),
                Err(e) => {
                    report.record_failure(e.to_string());
                    if policy.fail_fast() {
                        return Err(PlaylistError::Database(e));
                    }
                }
            }
        }

        Ok(report)
    }

    /// Read every track of one playlist
    pub async fn query_playlist(&self, playlist_id: Uuid) -> PlaylistResult<Vec<PlaylistTrack>> {
        info!("Querying the {}.playlists table", self.keyspace);

        let result = self
            .client
            .execute(&statements::select_playlist(&self.keyspace), (playlist_id,))
            .await?;

        Ok(typed_rows::<PlaylistTrack>(result)?)
    }

    /// Add a tag to one song's tag set (set union, idempotent) and read the
    /// row back
    pub async fn update_tags(&self, song_id: Uuid, tag: &str) -> PlaylistResult<TaggedSong> {
        info!("Updating the {}.songs table", self.keyspace);

        let new_tags: HashSet<String> = std::iter::once(tag.to_string()).collect();
        self.client
            .execute(
                &statements::add_song_tag(&self.keyspace),
                (new_tags, song_id),
            )
            .await?;

        self.fetch_song(song_id)
            .await?
            .ok_or_else(|| PlaylistError::NotFound(format!("song {song_id}")))
    }

    /// Read one song row with its tag set
    pub async fn fetch_song(&self, song_id: Uuid) -> PlaylistResult<Option<TaggedSong>> {
        let result = self
            .client
            .execute(&statements::select_song(&self.keyspace), (song_id,))
            .await?;

        Ok(first_row::<TaggedSong>(result)?)
    }

    /// Number of rows currently in `songs`
    pub async fn count_songs(&self) -> PlaylistResult<i64> {
        let result = self
            .client
            .execute_cql(&statements::count_songs(&self.keyspace))
            .await?;
        Ok(first_row::<(i64,)>(result)?.map(|(count,)| count).unwrap_or(0))
    }

    /// Number of rows currently in `playlists`
    pub async fn count_playlist_entries(&self) -> PlaylistResult<i64> {
        let result = self
            .client
            .execute_cql(&statements::count_playlist_entries(&self.keyspace))
            .await?;
        Ok(first_row::<(i64,)>(result)?.map(|(count,)| count).unwrap_or(0))
    }

    /// Drop the configured keyspace and everything in it
    pub async fn drop_schema(&self) -> PlaylistResult<()> {
        info!("Dropping {} keyspace", self.keyspace);

        self.client
            .execute_cql(&statements::drop_keyspace(&self.keyspace))
            .await?;
        Ok(())
    }
}
