use tracing::error;

/// Hash a password with bcrypt at the given work factor. The salt is
/// generated per call and embedded in the resulting digest.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, cost).map_err(|e| {
        error!(error = %e, "bcrypt hash error");
        e
    })
}

/// Verify a password against a stored bcrypt digest. The cost is read back
/// from the digest itself, so verification works regardless of the cost
/// configured at hash time.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hash).map_err(|e| {
        error!(error = %e, "bcrypt verify error");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost, keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password, TEST_COST).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password, TEST_COST).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn verify_is_independent_of_configured_cost() {
        let hash = hash_password("secret1", 5).expect("hashing should succeed");
        assert!(verify_password("secret1", &hash).expect("verify should succeed"));
    }
}
