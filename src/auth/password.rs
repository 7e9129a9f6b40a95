use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the password bytes.
///
/// Unsalted, single round. Must stay byte-compatible with stored digests.
#[must_use]
pub fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks `password` against a stored digest.
#[must_use]
pub fn verify(password: &str, stored_digest: &str) -> bool {
    digest(password) == stored_digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_known_vector() {
        assert_eq!(
            digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let d = digest("Secret123");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_verify_accepts_matching_password() {
        let stored = digest("hunter2");
        assert!(verify("hunter2", &stored));
    }

    #[test]
    fn test_verify_rejects_other_passwords() {
        let stored = digest("hunter2");
        assert!(!verify("hunter3", &stored));
        assert!(!verify("", &stored));
        assert!(!verify("Hunter2", &stored));
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert!(!verify("hunter2", "not-a-digest"));
        assert!(!verify("hunter2", ""));
    }
}
