use sha1::{Digest, Sha1};

use crate::DIGEST_LEN;

/// Hex lookup table for digest encoding.
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Returns the SHA-1 digest of a password as a 40-character lowercase hex
/// string.
///
/// Deterministic, pure. The range API keys on this digest: the first 5
/// characters become the query prefix and the remaining 35 the locally
/// matched suffix.
pub fn sha1_hex(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut digest = String::with_capacity(DIGEST_LEN);
    for byte in hash {
        digest.push(HEX_CHARS[(byte >> 4) as usize] as char);
        digest.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PREFIX_LEN;

    #[test]
    fn test_known_vectors() {
        assert_eq!(sha1_hex("password"), "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert_eq!(sha1_hex("password123"), "cbfdac6008f9cab4083784cbd1874f76618d2a97");
        assert_eq!(sha1_hex("qwerty"), "b1b3773a05c0ed0176787a4f1574ff0075f7521e");
    }

    #[test]
    fn test_deterministic() {
        let first = sha1_hex("correct horse battery staple");
        let second = sha1_hex("correct horse battery staple");
        assert_eq!(first, second);
        assert_eq!(first.len(), DIGEST_LEN);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_input_still_hashes() {
        // Blank passwords are filtered upstream, but the hash itself is total.
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_prefix_suffix_split() {
        let digest = sha1_hex("password");
        assert_eq!(&digest[..PREFIX_LEN], "5baa6");
        assert_eq!(&digest[PREFIX_LEN..], "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert_eq!(digest[PREFIX_LEN..].len(), DIGEST_LEN - PREFIX_LEN);
    }
}
