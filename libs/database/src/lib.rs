//! Database connectivity for the simplex demo workspace.
//!
//! The only backend is Cassandra/ScyllaDB, reached through the `scylla`
//! driver. Everything protocol-level (connection pooling, request
//! pipelining, consistency negotiation, token-aware routing, driver-side
//! retries) stays inside the driver; this crate wraps it with a session
//! lifecycle, typed result materialization, and health probes.

pub mod common;

#[cfg(feature = "cassandra")]
pub mod cassandra;
