use crate::errors::AppResult;

/// Outcome of verifying a password against a stored hash.
pub struct Verification {
    pub valid: bool,
    /// Fresh hash to persist when the stored one uses an outdated cost factor.
    pub updated_hash: Option<String>,
}

pub fn hash_password(plain: &str) -> AppResult<String> {
    Ok(bcrypt::hash(plain, bcrypt::DEFAULT_COST)?)
}

/// Verifies and, on success, re-hashes if the stored hash was produced with a
/// lower cost than the current default (or cannot be parsed at all).
pub fn verify_and_update(plain: &str, hashed: &str) -> AppResult<Verification> {
    // A malformed stored hash counts as a failed verification, not a 500.
    let valid = match bcrypt::verify(plain, hashed) {
        Ok(valid) => valid,
        Err(_) => false,
    };

    if !valid {
        return Ok(Verification {
            valid: false,
            updated_hash: None,
        });
    }

    let outdated = hash_cost(hashed).map_or(true, |cost| cost < bcrypt::DEFAULT_COST);
    let updated_hash = if outdated {
        Some(hash_password(plain)?)
    } else {
        None
    };

    Ok(Verification {
        valid: true,
        updated_hash,
    })
}

/// Cost factor of a bcrypt hash (`$2b$<cost>$...`).
fn hash_cost(hashed: &str) -> Option<u32> {
    hashed.split('$').nth(2)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$2"));

        let verification = verify_and_update("correct horse battery staple", &hash).unwrap();
        assert!(verification.valid);
        assert!(verification.updated_hash.is_none());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("right").unwrap();
        let verification = verify_and_update("wrong", &hash).unwrap();
        assert!(!verification.valid);
        assert!(verification.updated_hash.is_none());
    }

    #[test]
    fn test_malformed_hash_fails_instead_of_erroring() {
        let verification = verify_and_update("anything", "not-a-bcrypt-hash").unwrap();
        assert!(!verification.valid);
    }

    #[test]
    fn test_low_cost_hash_is_upgraded() {
        // Cost 4 is the bcrypt minimum, well below DEFAULT_COST.
        let old_hash = bcrypt::hash("secret", 4).unwrap();

        let verification = verify_and_update("secret", &old_hash).unwrap();
        assert!(verification.valid);

        let new_hash = verification.updated_hash.expect("expected an upgraded hash");
        assert_eq!(hash_cost(&new_hash), Some(bcrypt::DEFAULT_COST));
        assert!(bcrypt::verify("secret", &new_hash).unwrap());
    }

    #[test]
    fn test_hash_cost_parsing() {
        assert_eq!(hash_cost("$2b$12$abcdefghijklmnopqrstuv"), Some(12));
        assert_eq!(hash_cost("garbage"), None);
    }
}
