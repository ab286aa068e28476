use crate::error::Error;

/// Base URL of the pwned-passwords range API.
pub const RANGE_API_BASE: &str = "https://api.pwnedpasswords.com/range";

/// Source of range responses for a digest prefix.
///
/// Orchestrators are generic over this seam so query failures can be
/// exercised without a network.
pub trait RangeLookup {
    /// Fetches the newline-delimited `SUFFIX:COUNT` body for a 5-character
    /// hex prefix.
    fn lookup(&self, prefix: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

/// HTTP client for the range API.
///
/// One GET per lookup, whole body read as text. No retries; the caller
/// decides whether to skip or abort. No explicit timeout is configured, the
/// transport defaults apply.
pub struct RangeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RangeClient {
    /// Creates a client against the live pwned-passwords API.
    pub fn new() -> Self {
        Self::with_base_url(RANGE_API_BASE)
    }

    /// Creates a client against an alternate range endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder().build().expect("Failed to create HTTP client");
        Self { http, base_url: base_url.into() }
    }
}

impl Default for RangeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeLookup for RangeClient {
    fn lookup(&self, prefix: &str) -> impl Future<Output = Result<String, Error>> + Send {
        async move {
            let url = format!("{}/{}", self.base_url, prefix);

            // error_for_status folds non-success statuses into the same
            // uniform query error as transport failures.
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| Error::query(prefix, e))?;

            response.text().await.map_err(|e| Error::query(prefix, e))
        }
    }
}
