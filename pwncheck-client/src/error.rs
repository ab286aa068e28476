/// Boxed transport error underlying a failed range query.
pub type QuerySource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The range request for a prefix could not be completed. Covers send
    /// failures, non-success statuses, and body-read failures uniformly;
    /// callers recover per password, never retrying.
    #[error("range query failed for prefix {prefix}: {source}")]
    Query {
        prefix: String,
        #[source]
        source: QuerySource,
    },
}

impl Error {
    pub fn query(prefix: impl Into<String>, source: impl Into<QuerySource>) -> Self {
        Error::Query { prefix: prefix.into(), source: source.into() }
    }
}
