#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fatal file or terminal failure. Aborts the run; nothing beyond what
    /// was already flushed is salvaged. Query errors are never fatal and are
    /// handled per password by the orchestrators.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
