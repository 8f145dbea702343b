use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::core::hashing::{AlgorithmKind, AlgorithmSelection};
use crate::core::salt::SaltResolver;
use crate::shared::constants::*;
use crate::shared::error::HashError;
use crate::shared::types::OutputFormat;
use crate::shared::HashOutcome;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    pub log_level: String,
    pub salt_placeholder: String,
    pub bcrypt_cost: i64,
    pub argon2_memory: String,
    pub argon2_iterations: String,
    pub argon2_parallelism: String,
    pub output_format: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            salt_placeholder: SALT_PLACEHOLDER.to_string(),
            bcrypt_cost: i64::from(DEFAULT_BCRYPT_COST),
            argon2_memory: DEFAULT_ARGON2_MEMORY.to_string(),
            argon2_iterations: DEFAULT_ARGON2_ITERATIONS.to_string(),
            argon2_parallelism: DEFAULT_ARGON2_PARALLELISM.to_string(),
            output_format: "text".to_string(),
        }
    }
}

impl BenchConfig {
    /// Load `.env` if present, then read `HASHBENCH_*` variables over the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let defaults = Self::default();

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {}BCRYPT_COST: {}", ENV_PREFIX, raw);
                defaults.bcrypt_cost
            }),
            None => defaults.bcrypt_cost,
        };

        Self {
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            salt_placeholder: var("SALT_PLACEHOLDER").unwrap_or(defaults.salt_placeholder),
            bcrypt_cost,
            argon2_memory: var("ARGON2_MEMORY").unwrap_or(defaults.argon2_memory),
            argon2_iterations: var("ARGON2_ITERATIONS").unwrap_or(defaults.argon2_iterations),
            argon2_parallelism: var("ARGON2_PARALLELISM").unwrap_or(defaults.argon2_parallelism),
            output_format: var("OUTPUT_FORMAT").unwrap_or(defaults.output_format),
        }
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> HashOutcome<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Collect every problem instead of stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.salt_placeholder.trim().is_empty() {
            errors.push("Salt placeholder cannot be blank".to_string());
        }
        if let Err(e) = self.output_format.parse::<OutputFormat>() {
            errors.push(e.to_string());
        }

        errors
    }

    pub fn ensure_valid(&self) -> HashOutcome<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(HashError::config(errors.join("; ")))
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format.parse().unwrap_or_default()
    }

    pub fn salt_resolver(&self) -> SaltResolver {
        SaltResolver::new(self.salt_placeholder.clone())
    }

    /// Picker state with `kind` selected and the configured parameters.
    pub fn selection(&self, kind: AlgorithmKind) -> AlgorithmSelection {
        let mut selection = AlgorithmSelection {
            bcrypt_cost: self.bcrypt_cost,
            argon2_memory: self.argon2_memory.clone(),
            argon2_iterations: self.argon2_iterations.clone(),
            argon2_parallelism: self.argon2_parallelism.clone(),
            ..AlgorithmSelection::default()
        };
        selection.select(kind);
        selection
    }
}
