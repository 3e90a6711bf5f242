use scylla::client::execution_profile::ExecutionProfile;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, NewSessionError};
use scylla::response::query_result::QueryResult;
use scylla::serialize::row::SerializeRow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use super::CassandraConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Error type for Cassandra operations
#[derive(Debug, thiserror::Error)]
pub enum CassandraError {
    #[error("Cassandra error: {0}")]
    Scylla(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Rows error: {0}")]
    Rows(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Keyspace error: {0}")]
    KeyspaceError(String),
}

/// Shared session handle; pooling and pipelining live inside the driver
pub type CassandraSession = Arc<Session>;

/// A connected Cassandra session together with the configuration it was
/// built from.
///
/// The lifecycle is Disconnected → Connected → Closed: [`SessionClient::connect`]
/// produces a Connected value, [`SessionClient::close`] consumes it. A closed
/// client cannot be reused; connecting again yields a fresh value.
///
/// # Example
///
/// ```ignore
/// use database::cassandra::{CassandraConfig, SessionClient};
///
/// let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
/// let client = SessionClient::connect(&config).await?;
/// client.execute_cql("CREATE KEYSPACE IF NOT EXISTS demo WITH replication = \
///     {'class': 'SimpleStrategy', 'replication_factor': 1}").await?;
/// client.close();
/// ```
#[derive(Clone, Debug)]
pub struct SessionClient {
    session: CassandraSession,
    config: CassandraConfig,
}

impl SessionClient {
    /// Connect to the cluster described by `config` and verify the
    /// connection with a query against `system.local`.
    ///
    /// The verification replaces the fetch-and-discard of schema metadata
    /// some older demo clients performed after connecting: the server has to
    /// answer a real read before the client is handed out, and the reported
    /// release version is logged.
    pub async fn connect(config: &CassandraConfig) -> Result<Self, CassandraError> {
        let points: Vec<&str> = config.contact_points.iter().map(|s| s.as_str()).collect();
        info!("Connecting to Cassandra at {:?}", points);

        // Bound every statement wait through the default execution profile.
        let profile = ExecutionProfile::builder()
            .request_timeout(Some(Duration::from_secs(config.request_timeout_secs)))
            .build();

        let mut builder = SessionBuilder::new()
            .known_nodes(&points)
            .connection_timeout(Duration::from_secs(config.connect_timeout_secs))
            .default_execution_profile_handle(profile.into_handle());

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.user(username, password);
        }

        if let Some(ref keyspace) = config.keyspace {
            builder = builder.use_keyspace(keyspace, true);
        }

        let session: Session = builder.build().await?;

        let client = Self {
            session: Arc::new(session),
            config: config.clone(),
        };

        let version = client.verify_connection().await?;
        info!("Connected. Server release version: {}", version);

        Ok(client)
    }

    /// Connect with automatic retry on failure.
    ///
    /// Uses bounded exponential backoff with jitter around [`Self::connect`];
    /// useful for transient network issues during startup. The driver's own
    /// request-level retry policy is a separate, internal concern.
    pub async fn connect_with_retry(
        config: &CassandraConfig,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, CassandraError> {
        match retry_config {
            Some(retry_config) => {
                retry_with_backoff(|| Self::connect(config), retry_config).await
            }
            None => retry(|| Self::connect(config)).await,
        }
    }

    /// Execute a CQL statement with bound values and await its completion.
    ///
    /// Values are bound as parameters, never interpolated into the CQL text.
    /// On failure the statement text and error are logged and the error is
    /// returned; there is no statement-level retry.
    pub async fn execute(
        &self,
        cql: &str,
        values: impl SerializeRow,
    ) -> Result<QueryResult, CassandraError> {
        info!(statement = cql, "Executing statement");

        match self.session.query_unpaged(cql, values).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(statement = cql, error = %e, "Statement execution failed");
                Err(CassandraError::Execution(e))
            }
        }
    }

    /// Execute a CQL statement that binds no values (DDL, fixed-text reads).
    pub async fn execute_cql(&self, cql: &str) -> Result<QueryResult, CassandraError> {
        self.execute(cql, ()).await
    }

    /// Access the underlying driver session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &CassandraConfig {
        &self.config
    }

    /// Close the session, consuming the client.
    ///
    /// Dropping the last handle releases the driver's pooled connections;
    /// consuming `self` makes use-after-close unrepresentable.
    pub fn close(self) {
        info!("Closing down cluster connection");
        drop(self.session);
    }

    async fn verify_connection(&self) -> Result<String, CassandraError> {
        let result = self
            .session
            .query_unpaged("SELECT release_version FROM system.local", &[])
            .await
            .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))?;

        let version = super::rows::typed_rows::<(String,)>(result)?
            .into_iter()
            .next()
            .map(|(version,)| version)
            .unwrap_or_else(|| "unknown".to_string());

        Ok(version)
    }
}
