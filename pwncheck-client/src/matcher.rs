use crate::PREFIX_LEN;

/// Scans a range response for the suffix of the given digest.
///
/// The digest is uppercased and its first 5 characters dropped; the service
/// already consumed that prefix as the query key. Each response line is split
/// on the first colon into `SUFFIX:COUNT` and compared exactly. The first
/// matching line wins.
///
/// Returns `Some(count)` on a match, `None` otherwise. Lines without a colon
/// are skipped as non-matches, and a matching line whose count fails to parse
/// is reported as `Some(0)`.
pub fn match_digest(digest: &str, body: &str) -> Option<u64> {
    let suffix = digest[PREFIX_LEN..].to_ascii_uppercase();

    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate == suffix {
            return Some(count.trim().parse().unwrap_or(0));
        }
    }

    None
}
