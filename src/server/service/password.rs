//! Password service for one-way salted hashing.
//!
//! This module provides the `PasswordService` used by the user command paths to hash
//! passwords before they are persisted. Hashes are Argon2id in PHC string format with a
//! fresh random salt per hash. The time cost (number of passes) comes from configuration.
//! Hashing is CPU-bound, so every call runs on tokio's blocking thread pool.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::AppError;

/// Service for hashing and verifying user passwords.
///
/// Cheap to clone; holds only the Argon2 parameters.
#[derive(Clone, Debug)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    /// Creates a new PasswordService with the given Argon2 time cost.
    ///
    /// Memory and parallelism costs use the Argon2 defaults.
    ///
    /// # Arguments
    /// - `time_cost` - Number of Argon2 passes, at least 1
    ///
    /// # Returns
    /// - `Ok(PasswordService)` - Service ready to hash passwords
    /// - `Err(AppError::InternalError)` - Parameters rejected by Argon2
    pub fn new(time_cost: u32) -> Result<Self, AppError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            time_cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AppError::InternalError(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a fresh salt.
    ///
    /// # Arguments
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-format hash, e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`
    /// - `Err(AppError::PasswordHash)` - Hashing failed
    /// - `Err(AppError::InternalError)` - The blocking task panicked
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let argon2 = self.argon2();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::PasswordHash(e.to_string()))
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
    }

    /// Checks whether a plaintext password matches a stored PHC hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches the hash
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::PasswordHash)` - Stored hash is malformed
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        let argon2 = self.argon2();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| AppError::PasswordHash(format!("invalid stored hash: {}", e)))?;
            Ok(argon2.verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
    }
}
