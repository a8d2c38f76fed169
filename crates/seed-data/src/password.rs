//! bcrypt password hashing for seeded accounts.

use crate::errors::SeedError;

/// bcrypt cost factor used for seeded passwords.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Range of cost factors bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

pub fn hash_password(password: &str, cost: u32) -> Result<String, SeedError> {
    Ok(bcrypt::hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Hashes on the blocking pool so concurrent inserts don't stall the runtime.
pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String, SeedError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = MIN_HASH_COST;

    #[test]
    fn test_hash_differs_from_plaintext() {
        let hash = hash_password("pw", TEST_COST).unwrap();

        assert_ne!(hash, "pw");
        assert!(verify_password("pw", &hash).unwrap());
        assert!(!verify_password("not-pw", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("123456", TEST_COST).unwrap();
        let second = hash_password("123456", TEST_COST).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_default_cost_is_encoded_in_hash() {
        let hash = hash_password("123456", DEFAULT_HASH_COST).unwrap();

        assert!(hash.starts_with("$2b$10$"), "unexpected hash prefix: {hash}");
    }

    #[test]
    fn test_rejects_cost_out_of_range() {
        let result = hash_password("pw", MIN_HASH_COST - 1);

        assert!(matches!(result, Err(SeedError::Hash(_))));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
    }

    #[tokio::test]
    async fn test_hash_password_blocking() {
        let hash = hash_password_blocking("pw".to_string(), TEST_COST)
            .await
            .unwrap();

        assert!(verify_password("pw", &hash).unwrap());
    }
}
