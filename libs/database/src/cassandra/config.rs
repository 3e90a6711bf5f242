#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Cassandra/ScyllaDB connection configuration
///
/// Contact points and keyspace are explicit parameters here rather than
/// constants baked into the program; construct manually or load from
/// environment variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::cassandra::CassandraConfig;
///
/// // Manual construction
/// let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
///
/// // With default keyspace
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "simplex");
///
/// // From environment variables (requires `config` feature)
/// let config = CassandraConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points (host:port pairs)
    /// Example: ["127.0.0.1:9042", "127.0.0.2:9042"]
    pub contact_points: Vec<String>,

    /// Keyspace the session switches to after connecting
    pub keyspace: Option<String>,

    /// Optional username for authentication
    pub username: Option<String>,

    /// Optional password for authentication
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Per-statement request timeout in seconds; statement waits are bounded
    pub request_timeout_secs: u64,
}

impl CassandraConfig {
    /// Create a new CassandraConfig with contact points
    pub fn new<S: Into<String>>(contact_points: Vec<S>) -> Self {
        Self {
            contact_points: contact_points.into_iter().map(|s| s.into()).collect(),
            keyspace: None,
            username: None,
            password: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }

    /// Create a CassandraConfig with a default keyspace
    pub fn with_keyspace<S: Into<String>>(
        contact_points: Vec<S>,
        keyspace: impl Into<String>,
    ) -> Self {
        let mut config = Self::new(contact_points);
        config.keyspace = Some(keyspace.into());
        config
    }

    /// Set authentication credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set per-statement request timeout
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Get the contact points
    pub fn contact_points(&self) -> &[String] {
        &self.contact_points
    }

    /// Get the keyspace
    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self {
            contact_points: vec!["127.0.0.1:9042".to_string()],
            keyspace: None,
            username: None,
            password: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Load CassandraConfig from environment variables
///
/// Environment variables:
/// - `CASSANDRA_CONTACT_POINTS` (required) - Comma-separated list of contact points
///   Example: "127.0.0.1:9042,127.0.0.2:9042"
/// - `CASSANDRA_KEYSPACE` (optional) - Keyspace name
/// - `CASSANDRA_USERNAME` (optional) - Authentication username
/// - `CASSANDRA_PASSWORD` (optional) - Authentication password
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `CASSANDRA_REQUEST_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let contact_points_str = std::env::var("CASSANDRA_CONTACT_POINTS")
            .map_err(|_| ConfigError::MissingEnvVar("CASSANDRA_CONTACT_POINTS".to_string()))?;

        let contact_points: Vec<String> = contact_points_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if contact_points.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_CONTACT_POINTS".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let keyspace = std::env::var("CASSANDRA_KEYSPACE").ok();
        let username = std::env::var("CASSANDRA_USERNAME").ok();
        let password = std::env::var("CASSANDRA_PASSWORD").ok();

        let connect_timeout_secs = std::env::var("CASSANDRA_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let request_timeout_secs = std::env::var("CASSANDRA_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_REQUEST_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            contact_points,
            keyspace,
            username,
            password,
            connect_timeout_secs,
            request_timeout_secs,
        })
    }
}
