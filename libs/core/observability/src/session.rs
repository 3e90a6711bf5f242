//! Session-operation metrics for the Cassandra demo.

use metrics::{counter, histogram};

/// Session metrics recorder
pub struct SessionMetrics;

impl SessionMetrics {
    /// Record a completed session operation (one demo step, e.g. "load_data")
    pub fn record_operation(operation: &str, duration_ms: u64, success: bool) {
        let outcome = if success { "ok" } else { "error" };

        counter!(
            "cassandra_operations_total",
            "operation" => operation.to_string(),
            "outcome" => outcome
        )
        .increment(1);
        histogram!(
            "cassandra_operation_duration_seconds",
            "operation" => operation.to_string()
        )
        .record(duration_ms as f64 / 1000.0);

        if !success {
            counter!(
                "cassandra_operation_errors_total",
                "operation" => operation.to_string()
            )
            .increment(1);
        }

        tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            success = success,
            "Recorded session operation"
        );
    }

    /// Record rows materialized from a query result
    pub fn record_rows_fetched(operation: &str, count: usize) {
        counter!(
            "cassandra_rows_fetched_total",
            "operation" => operation.to_string()
        )
        .increment(count as u64);
    }
}
