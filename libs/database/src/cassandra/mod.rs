//! Cassandra/ScyllaDB session client.
//!
//! Wraps the `scylla` driver, which is compatible with both Apache Cassandra
//! and ScyllaDB, behind a small session lifecycle: connect (with optional
//! retry), execute statements sequentially, materialize typed rows, close.
//!
//! # Example
//!
//! ```ignore
//! use database::cassandra::{CassandraConfig, SessionClient, typed_rows};
//!
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "simplex");
//! let client = SessionClient::connect(&config).await?;
//!
//! let result = client
//!     .execute("SELECT title FROM simplex.songs WHERE id = ?", (song_id,))
//!     .await?;
//! let titles: Vec<(String,)> = typed_rows(result)?;
//!
//! client.close();
//! ```

mod config;
mod connector;
mod health;
mod rows;

pub use config::CassandraConfig;
pub use connector::{CassandraError, CassandraSession, SessionClient};
pub use health::{check_health, check_health_detailed, cluster_info, ClusterInfo, HealthStatus};
pub use rows::{first_row, typed_rows};

// Re-export scylla types for convenience
pub use scylla::client::session::Session;
pub use scylla::client::session_builder::SessionBuilder;
pub use scylla::serialize::value::SerializeValue;
pub use scylla::value::CqlValue;
