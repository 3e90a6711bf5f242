//! Demo orchestration: one step per schema-lifecycle operation.

use std::future::Future;
use std::time::Instant;

use database::cassandra::{check_health_detailed, cluster_info, SessionClient};
use domain_playlists::{
    report, ExecutionPolicy, Keyspace, PlaylistService, DEMO_PLAYLIST_ID, DEMO_TAG,
    TONKINOISE_SONG_ID,
};
use eyre::Result;
use observability::SessionMetrics;
use tracing::{info, warn};
use uuid::Uuid;

/// Runs the demo steps against one keyspace, strictly one statement at a
/// time, recording a metric per step.
pub struct DemoRunner {
    service: PlaylistService,
}

impl DemoRunner {
    pub fn new(client: SessionClient, keyspace: &str) -> Result<Self> {
        let keyspace = Keyspace::new(keyspace)?;
        Ok(Self {
            service: PlaylistService::new(client, keyspace),
        })
    }

    pub fn with_replication_factor(mut self, replication_factor: u8) -> Self {
        self.service = self.service.with_replication_factor(replication_factor);
        self
    }

    /// The full sequence: schema, data, query, update, teardown
    pub async fn run(&self, policy: ExecutionPolicy, skip_drop: bool) -> Result<()> {
        self.create_schema(policy).await?;
        self.load_data(policy).await?;
        self.query(None).await?;
        self.update(None, DEMO_TAG).await?;

        if skip_drop {
            info!("Leaving {} keyspace in place", self.service.keyspace());
        } else {
            self.drop_schema().await?;
        }

        Ok(())
    }

    pub async fn create_schema(&self, policy: ExecutionPolicy) -> Result<()> {
        let batch = timed("create_schema", self.service.create_schema(policy)).await?;
        if batch.all_succeeded() {
            info!("Schema ready: {batch}");
        } else {
            warn!("Schema creation incomplete: {batch}");
        }
        Ok(())
    }

    pub async fn load_data(&self, policy: ExecutionPolicy) -> Result<()> {
        let batch = timed("load_data", self.service.load_data(policy)).await?;
        if batch.all_succeeded() {
            let songs = self.service.count_songs().await?;
            let entries = self.service.count_playlist_entries().await?;
            info!("Data loaded: {batch}; {songs} songs, {entries} playlist rows");
        } else {
            warn!("Data load incomplete: {batch}");
        }
        Ok(())
    }

    pub async fn query(&self, playlist_id: Option<Uuid>) -> Result<()> {
        let playlist_id = playlist_id.unwrap_or(DEMO_PLAYLIST_ID);

        let tracks = timed("query_playlist", self.service.query_playlist(playlist_id)).await?;
        SessionMetrics::record_rows_fetched("query_playlist", tracks.len());

        for track in &tracks {
            println!("{}", report::render_track_line(track));
        }
        info!("Playlist {playlist_id} has {} tracks", tracks.len());

        Ok(())
    }

    pub async fn update(&self, song_id: Option<Uuid>, tag: &str) -> Result<()> {
        let song_id = song_id.unwrap_or(TONKINOISE_SONG_ID);

        let song = timed("update_tags", self.service.update_tags(song_id, tag)).await?;
        SessionMetrics::record_rows_fetched("update_tags", 1);

        println!("{}", report::SONG_REPORT_HEADER);
        println!("{}", report::render_song_row(&song));

        Ok(())
    }

    pub async fn drop_schema(&self) -> Result<()> {
        timed("drop_schema", self.service.drop_schema()).await?;
        info!("Dropped {} keyspace", self.service.keyspace());
        Ok(())
    }

    /// Connection health and cluster identity, printed as pretty JSON
    pub async fn status(&self) -> Result<()> {
        let health = check_health_detailed(self.service.client()).await;
        let cluster = cluster_info(self.service.client()).await?;

        let snapshot = serde_json::json!({
            "keyspace": self.service.keyspace().as_str(),
            "health": health,
            "cluster": cluster,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);

        Ok(())
    }
}

/// Await one demo step and record its metric
async fn timed<T, E>(operation: &str, fut: impl Future<Output = Result<T, E>>) -> Result<T, E> {
    let start = Instant::now();
    let result = fut.await;
    SessionMetrics::record_operation(
        operation,
        start.elapsed().as_millis() as u64,
        result.is_ok(),
    );
    result
}
