use serde::Serialize;
use std::time::Instant;

use super::connector::{CassandraError, SessionClient};
use super::rows;

/// Health check status for Cassandra
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Whether the database answered the probe
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Cassandra release version (if available)
    pub version: Option<String>,
}

/// Check Cassandra health with a simple query
pub async fn check_health(client: &SessionClient) -> bool {
    client
        .session()
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .is_ok()
}

/// Check Cassandra health with detailed status
///
/// Returns timing information, the server version, and any error message.
pub async fn check_health_detailed(client: &SessionClient) -> HealthStatus {
    let start = Instant::now();

    match client
        .session()
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
    {
        Ok(result) => {
            let elapsed = start.elapsed();

            let version = rows::typed_rows::<(String,)>(result)
                .ok()
                .and_then(|versions| versions.into_iter().next())
                .map(|(version,)| version);

            HealthStatus {
                healthy: true,
                message: None,
                response_time_ms: elapsed.as_millis() as u64,
                version,
            }
        }
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
            version: None,
        },
    }
}

/// Information about the node this session is talking to
#[derive(Debug, Clone, Serialize)]
pub struct ClusterInfo {
    pub cluster_name: Option<String>,
    pub datacenter: Option<String>,
    pub rack: Option<String>,
    pub release_version: Option<String>,
}

/// Read cluster identity from `system.local`
pub async fn cluster_info(client: &SessionClient) -> Result<ClusterInfo, CassandraError> {
    let result = client
        .execute_cql("SELECT cluster_name, data_center, rack, release_version FROM system.local")
        .await?;

    let row = rows::first_row::<(
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
    )>(result)?;

    let (cluster_name, datacenter, rack, release_version) = row.unwrap_or((None, None, None, None));

    Ok(ClusterInfo {
        cluster_name,
        datacenter,
        rack,
        release_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassandra::CassandraConfig;

    async fn connect_local() -> SessionClient {
        let contact_points = std::env::var("CASSANDRA_CONTACT_POINTS")
            .unwrap_or_else(|_| "127.0.0.1:9042".to_string());
        let points: Vec<String> = contact_points.split(',').map(|s| s.to_string()).collect();

        SessionClient::connect(&CassandraConfig::new(points))
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_check_health() {
        let client = connect_local().await;
        assert!(check_health(&client).await);
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_check_health_detailed() {
        let client = connect_local().await;

        let status = check_health_detailed(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
        assert!(status.version.is_some());
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_cluster_info() {
        let client = connect_local().await;

        let info = cluster_info(&client).await;
        assert!(info.is_ok());
    }
}
