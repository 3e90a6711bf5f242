//! Typed materialization of query results.
//!
//! Result iteration is forward-only and single-pass: a [`QueryResult`] is
//! converted into rows once, each row deserialized into a typed value, and
//! re-reading requires re-querying. Collection columns come back as owned
//! collections (`Vec<T>`, `HashSet<T>`) and are iterated independently of
//! the row cursor.

use scylla::deserialize::row::DeserializeRow;
use scylla::response::query_result::QueryResult;

use super::connector::CassandraError;

/// Materialize every row of a result into `T`.
///
/// `T` is any type implementing the driver's row deserialization: tuples of
/// column types or structs deriving `scylla::DeserializeRow`. Column names
/// and types are checked during deserialization, so a schema mismatch
/// surfaces as an error instead of silently misreading positions.
///
/// # Example
///
/// ```ignore
/// let result = client.execute_cql("SELECT title, artist FROM simplex.songs").await?;
/// let rows: Vec<(String, String)> = typed_rows(result)?;
/// ```
pub fn typed_rows<T>(result: QueryResult) -> Result<Vec<T>, CassandraError>
where
    T: for<'frame, 'metadata> DeserializeRow<'frame, 'metadata>,
{
    let rows_result = result
        .into_rows_result()
        .map_err(|e| CassandraError::Rows(e.to_string()))?;

    let rows = rows_result
        .rows::<T>()
        .map_err(|e| CassandraError::Rows(e.to_string()))?;

    rows.map(|row| row.map_err(|e| CassandraError::Rows(e.to_string())))
        .collect()
}

/// Materialize only the first row of a result, if any.
pub fn first_row<T>(result: QueryResult) -> Result<Option<T>, CassandraError>
where
    T: for<'frame, 'metadata> DeserializeRow<'frame, 'metadata>,
{
    Ok(typed_rows(result)?.into_iter().next())
}
