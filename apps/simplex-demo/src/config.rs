//! Configuration for the demo binary

use core_config::FromEnv;
use database::cassandra::CassandraConfig;
use eyre::Result;

/// Keyspace the demo runs in when nothing else is configured
pub const DEFAULT_KEYSPACE: &str = "simplex";

#[derive(Debug, Clone)]
pub struct Config {
    pub cassandra: CassandraConfig,
    pub keyspace: String,
}

impl Config {
    /// Resolve configuration from the environment, then apply CLI overrides.
    pub fn resolve(contact_points: Option<&[String]>, keyspace: Option<&str>) -> Result<Self> {
        let mut cassandra = if std::env::var("CASSANDRA_CONTACT_POINTS").is_ok() {
            CassandraConfig::from_env()?
        } else {
            CassandraConfig::default()
        };

        if let Some(points) = contact_points {
            cassandra.contact_points = points.to_vec();
        }

        // The session must not USE the demo keyspace at connect time: it
        // usually does not exist until the schema step runs, and every
        // statement is keyspace-qualified anyway.
        let env_keyspace = cassandra.keyspace.take();

        let keyspace = keyspace
            .map(|k| k.to_string())
            .or(env_keyspace)
            .unwrap_or_else(|| DEFAULT_KEYSPACE.to_string());

        Ok(Self {
            cassandra,
            keyspace,
        })
    }
}
