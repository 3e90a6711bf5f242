//! Integration tests for the playlists domain
//!
//! These run against a real Cassandra/ScyllaDB node and are ignored by
//! default. Point `CASSANDRA_CONTACT_POINTS` at a cluster (default
//! 127.0.0.1:9042) and run with `cargo test -- --ignored`.
//!
//! Each test creates its own uniquely named keyspace with replication
//! factor 1 and drops it on the way out, so tests do not interfere with
//! each other or with anything else on the cluster.

use database::cassandra::{CassandraConfig, SessionClient};
use domain_playlists::{
    ExecutionPolicy, Keyspace, PlaylistService, Song, DEMO_PLAYLIST_ID, DEMO_TAG,
    TONKINOISE_SONG_ID,
};
use test_utils::{unique_keyspace, TestDataBuilder};

async fn connect() -> SessionClient {
    let contact_points = std::env::var("CASSANDRA_CONTACT_POINTS")
        .unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let points: Vec<String> = contact_points.split(',').map(|s| s.to_string()).collect();

    SessionClient::connect(&CassandraConfig::new(points))
        .await
        .expect("integration tests need a reachable cluster")
}

async fn fresh_service(client: &SessionClient, test: &str) -> PlaylistService {
    let keyspace = Keyspace::new(unique_keyspace(test)).unwrap();
    let service =
        PlaylistService::new(client.clone(), keyspace).with_replication_factor(1);

    let report = service
        .create_schema(ExecutionPolicy::FailFast)
        .await
        .unwrap();
    assert!(report.all_succeeded());

    service
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_load_data_leaves_three_rows_in_each_table() {
    let client = connect().await;
    let service = fresh_service(&client, "it_load").await;

    let report = service.load_data(ExecutionPolicy::FailFast).await.unwrap();
    assert_eq!(report.attempted, 6);
    assert!(report.all_succeeded());

    assert_eq!(service.count_songs().await.unwrap(), 3);
    assert_eq!(service.count_playlist_entries().await.unwrap(), 3);

    service.drop_schema().await.unwrap();
    client.close();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_demo_playlist_query_returns_two_full_rows() {
    let client = connect().await;
    let service = fresh_service(&client, "it_query").await;
    service.load_data(ExecutionPolicy::FailFast).await.unwrap();

    let tracks = service.query_playlist(DEMO_PLAYLIST_ID).await.unwrap();
    assert_eq!(tracks.len(), 2);
    for track in &tracks {
        assert!(!track.title.is_empty());
        assert!(!track.artist.is_empty());
        assert!(!track.album.is_empty());
    }

    service.drop_schema().await.unwrap();
    client.close();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_update_tags_is_a_union_and_idempotent() {
    let client = connect().await;
    let service = fresh_service(&client, "it_update").await;
    service.load_data(ExecutionPolicy::FailFast).await.unwrap();

    let song = service
        .update_tags(TONKINOISE_SONG_ID, DEMO_TAG)
        .await
        .unwrap();

    // Prior tags survive the union
    assert!(song.tags.contains(DEMO_TAG));
    assert!(song.tags.contains("jazz"));
    assert!(song.tags.contains("2013"));

    // Applying the same update twice changes nothing
    let song_again = service
        .update_tags(TONKINOISE_SONG_ID, DEMO_TAG)
        .await
        .unwrap();
    assert_eq!(song.tags, song_again.tags);

    service.drop_schema().await.unwrap();
    client.close();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_queries_fail_after_drop() {
    let client = connect().await;
    let service = fresh_service(&client, "it_drop").await;
    service.load_data(ExecutionPolicy::FailFast).await.unwrap();

    service.drop_schema().await.unwrap();

    let result = service.query_playlist(DEMO_PLAYLIST_ID).await;
    assert!(result.is_err());

    client.close();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_tag_set_round_trip_is_order_independent() {
    let client = connect().await;
    let service = fresh_service(&client, "it_roundtrip").await;

    let builder = TestDataBuilder::from_test_name("tag_set_round_trip");
    let song = Song {
        id: builder.song_id(),
        title: builder.name("song", "roundtrip"),
        album: builder.name("album", "roundtrip"),
        artist: builder.name("artist", "roundtrip"),
        tags: builder.tags(&["zulu", "alpha", "mike"]),
    };

    let insert = format!(
        "INSERT INTO {}.songs (id, title, album, artist, tags) VALUES (?, ?, ?, ?, ?)",
        service.keyspace()
    );
    client.execute(&insert, &song).await.unwrap();

    let fetched = service.fetch_song(song.id).await.unwrap().unwrap();
    assert_eq!(fetched.tags, song.tags);

    service.drop_schema().await.unwrap();
    client.close();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_continue_on_error_reports_instead_of_aborting() {
    let client = connect().await;

    // No schema created: every insert targets a missing keyspace
    let keyspace = Keyspace::new(unique_keyspace("it_policy")).unwrap();
    let service = PlaylistService::new(client.clone(), keyspace).with_replication_factor(1);

    let report = service
        .load_data(ExecutionPolicy::ContinueOnError)
        .await
        .unwrap();
    assert_eq!(report.attempted, 6);
    assert_eq!(report.failed, 6);
    assert!(report.first_error.is_some());

    // FailFast surfaces the first error instead
    let result = service.load_data(ExecutionPolicy::FailFast).await;
    assert!(result.is_err());

    client.close();
}
