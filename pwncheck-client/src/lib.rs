//! Client library for checking passwords against the Have I Been Pwned
//! breached-password range API.
//!
//! The lookup uses the k-anonymity range protocol: only the first 5 hex
//! characters of a password's SHA-1 digest are ever sent to the service. The
//! service answers with every known breached suffix sharing that prefix, and
//! the exact match happens locally.
//!
//! The pieces compose linearly per password:
//!
//! 1. [`sha1_hex`] hashes the candidate password.
//! 2. [`RangeLookup::lookup`] fetches the suffix list for the digest prefix.
//! 3. [`match_digest`] scans the list for the candidate's suffix.
//!
//! [`check_password`] runs all three and returns the breach count, if any.

pub mod digest;
pub mod error;
pub mod matcher;
pub mod range;

pub use digest::sha1_hex;
pub use error::Error;
pub use matcher::match_digest;
pub use range::{RANGE_API_BASE, RangeClient, RangeLookup};

/// Length of a full SHA-1 digest in hex characters.
pub const DIGEST_LEN: usize = 40;

/// Length of the digest prefix sent to the range API (hex characters).
pub const PREFIX_LEN: usize = 5;

/// Checks a single password against the breach database.
///
/// Returns `Ok(Some(count))` with the number of times the password appears in
/// known breaches, `Ok(None)` if it was not found, or a query error if the
/// range request failed. The full digest never leaves the process.
pub async fn check_password<C: RangeLookup>(
    client: &C,
    password: &str,
) -> Result<Option<u64>, Error> {
    let digest = sha1_hex(password);
    let body = client.lookup(&digest[..PREFIX_LEN]).await?;
    Ok(match_digest(&digest, &body))
}
