//! Shared test utilities for the demo workspace
//!
//! - `TestDataBuilder`: deterministic test data generation, seeded from the
//!   test name so runs are reproducible
//! - `unique_keyspace`: disposable keyspace names for integration tests
//!   that talk to a real cluster
//!
//! # Usage
//!
//! ```rust
//! use test_utils::{unique_keyspace, TestDataBuilder};
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let song_id = builder.song_id();
//! let title = builder.name("song", "main");
//!
//! let keyspace = unique_keyspace("it_my_test");
//! assert!(keyspace.starts_with("it_my_test_"));
//! ```

use std::collections::HashSet;
use uuid::Uuid;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving all values from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test
    /// data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a deterministic song ID
    pub fn song_id(&self) -> Uuid {
        self.uuid_from(0x5053)
    }

    /// Generate a deterministic playlist ID
    pub fn playlist_id(&self) -> Uuid {
        self.uuid_from(0x504c)
    }

    /// Generate a deterministic name like `song_main_1a2b3c`
    pub fn name(&self, kind: &str, suffix: &str) -> String {
        format!("{}_{}_{:06x}", kind, suffix, self.seed & 0xff_ffff)
    }

    /// Build a tag set from literals
    pub fn tags(&self, values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn uuid_from(&self, salt: u64) -> Uuid {
        let bytes = (self.seed ^ salt).to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }
}

/// A keyspace name that is unique per call, for integration tests against a
/// shared cluster.
///
/// The prefix must start with a letter; the result stays within Cassandra's
/// 48-character keyspace name limit for prefixes up to 35 characters.
pub fn unique_keyspace(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &suffix[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_test_name_gives_same_data() {
        let a = TestDataBuilder::from_test_name("stable");
        let b = TestDataBuilder::from_test_name("stable");

        assert_eq!(a.song_id(), b.song_id());
        assert_eq!(a.playlist_id(), b.playlist_id());
        assert_eq!(a.name("song", "x"), b.name("song", "x"));
    }

    #[test]
    fn test_different_test_names_give_different_data() {
        let a = TestDataBuilder::from_test_name("one");
        let b = TestDataBuilder::from_test_name("two");

        assert_ne!(a.song_id(), b.song_id());
    }

    #[test]
    fn test_song_and_playlist_ids_differ() {
        let builder = TestDataBuilder::from_test_name("distinct_ids");
        assert_ne!(builder.song_id(), builder.playlist_id());
    }

    #[test]
    fn test_tags_builds_a_set() {
        let builder = TestDataBuilder::new(7);
        let tags = builder.tags(&["a", "b", "a"]);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_unique_keyspace_is_unique_and_identifier_shaped() {
        let a = unique_keyspace("it_test");
        let b = unique_keyspace("it_test");

        assert_ne!(a, b);
        assert!(a.len() <= 48);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
