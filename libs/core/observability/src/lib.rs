//! Observability utilities for the Cassandra session demo.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Custom metrics for session operations (statement counts, latency, rows)
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, SessionMetrics};
//!
//! // Initialize metrics recorder
//! init_metrics();
//!
//! // Record session operations
//! SessionMetrics::record_operation("create_schema", 12, true);
//! SessionMetrics::record_rows_fetched("query_playlist", 2);
//! ```

pub mod session;

pub use session::SessionMetrics;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// This should be called once at application startup.
/// Returns the PrometheusHandle for rendering metrics.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        info!("Prometheus metrics recorder initialized");

        register_metric_descriptions();

        handle
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Render the current metrics in Prometheus exposition format
pub fn render_metrics() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    describe_counter!(
        "cassandra_operations_total",
        "Total session operations by name and outcome"
    );
    describe_histogram!(
        "cassandra_operation_duration_seconds",
        "Session operation duration in seconds"
    );
    describe_counter!(
        "cassandra_operation_errors_total",
        "Total failed session operations by name"
    );
    describe_counter!(
        "cassandra_rows_fetched_total",
        "Total rows materialized from query results by operation"
    );
}
