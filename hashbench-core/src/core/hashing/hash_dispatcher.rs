use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::Md5;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

use super::{AlgorithmVariant, Argon2Params};
use crate::core::salt::Salt;
use crate::shared::constants::{ARGON2_OUTPUT_LENGTH, MIN_ARGON2_SALT_LENGTH};
use crate::shared::error::ValidationError;
use crate::shared::HashOutcome;

/// Runs the selected algorithm over the input
#[derive(Debug, Clone, Copy, Default)]
pub struct HashDispatcher;

impl HashDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Compute the encoded output for one variant.
    ///
    /// Digests hash `input || salt` and return Base64. BCrypt hashes the text
    /// and salts itself, so `salt` is ignored. Argon2id needs a salt.
    pub fn compute(
        &self,
        variant: &AlgorithmVariant,
        input: &[u8],
        input_text: &str,
        salt: Option<&Salt>,
    ) -> HashOutcome<String> {
        match variant {
            AlgorithmVariant::Sha256 => Ok(self.digest::<Sha256>(input, salt)),
            AlgorithmVariant::Sha512 => Ok(self.digest::<Sha512>(input, salt)),
            AlgorithmVariant::Md5 => Ok(self.digest::<Md5>(input, salt)),
            AlgorithmVariant::Bcrypt { cost } => self.bcrypt(input_text, *cost),
            AlgorithmVariant::Argon2id(params) => self.argon2id(input_text, salt, params),
        }
    }

    /// Base64 of `D(input || salt)`
    pub fn digest<D: Digest>(&self, input: &[u8], salt: Option<&Salt>) -> String {
        let mut hasher = D::new();
        hasher.update(input);
        if let Some(salt) = salt {
            hasher.update(salt.bytes());
        }
        STANDARD.encode(hasher.finalize())
    }

    /// Modular-crypt BCrypt string, e.g. `$2b$10$...`
    pub fn bcrypt(&self, input_text: &str, cost: u32) -> HashOutcome<String> {
        Ok(bcrypt::hash(input_text, cost)?)
    }

    /// Base64 of a 32-byte Argon2id derivation
    pub fn argon2id(
        &self,
        input_text: &str,
        salt: Option<&Salt>,
        params: &Argon2Params,
    ) -> HashOutcome<String> {
        let salt = salt
            .filter(|salt| !salt.is_empty())
            .ok_or(ValidationError::MissingSalt)?;
        if salt.len() < MIN_ARGON2_SALT_LENGTH {
            return Err(ValidationError::SaltTooShort {
                len: salt.len(),
                min: MIN_ARGON2_SALT_LENGTH,
            }
            .into());
        }

        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(
                params.memory_kib,
                params.iterations,
                params.parallelism,
                Some(ARGON2_OUTPUT_LENGTH),
            )?,
        );

        let mut output = [0u8; ARGON2_OUTPUT_LENGTH];
        argon2.hash_password_into(input_text.as_bytes(), salt.bytes(), &mut output)?;
        let encoded = STANDARD.encode(output);
        output.zeroize();
        Ok(encoded)
    }
}
