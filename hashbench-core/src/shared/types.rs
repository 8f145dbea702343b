use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::hashing::AlgorithmVariant;
use crate::core::salt::SaltSpec;
use crate::shared::error::HashError;

/// One benchmark invocation, built from the current input state and consumed once.
#[derive(Debug, Clone)]
pub struct HashRequest {
    input_text: String,
    salt: SaltSpec,
    variant: AlgorithmVariant,
}

impl HashRequest {
    pub fn new(input_text: impl Into<String>, salt: SaltSpec, variant: AlgorithmVariant) -> Self {
        Self {
            input_text: input_text.into(),
            salt,
            variant,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn salt(&self) -> &SaltSpec {
        &self.salt
    }

    pub fn variant(&self) -> &AlgorithmVariant {
        &self.variant
    }

    /// Blank input makes a submission a no-op.
    pub fn is_blank(&self) -> bool {
        self.input_text.trim().is_empty()
    }
}

/// Immutable record of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashResult {
    algorithm: String,
    output: String,
    average_time_ms: f64,
}

impl HashResult {
    pub fn new(algorithm: impl Into<String>, output: impl Into<String>, average_time_ms: f64) -> Self {
        Self {
            algorithm: algorithm.into(),
            output: output.into(),
            average_time_ms,
        }
    }

    /// Human-readable algorithm label, parameters included
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Base64 digest, scheme-encoded hash, or the error token
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn average_time_ms(&self) -> f64 {
        self.average_time_ms
    }

    pub fn time_ms_display(&self) -> String {
        format!("{} ms", self.average_time_ms)
    }
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<40} {:>12}  {}", self.algorithm, self.time_ms_display(), self.output)
    }
}

/// How the binary prints results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(HashError::config(format!("Unknown output format: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_request() {
        let request = HashRequest::new("  \t", SaltSpec::none(), AlgorithmVariant::Sha256);
        assert!(request.is_blank());

        let request = HashRequest::new("hello", SaltSpec::none(), AlgorithmVariant::Sha256);
        assert!(!request.is_blank());
        assert_eq!(request.input_text(), "hello");
    }

    #[test]
    fn test_time_display() {
        assert_eq!(HashResult::new("SHA256", "x", 0.125).time_ms_display(), "0.125 ms");
        assert_eq!(HashResult::new("SHA256", "x", 5.0).time_ms_display(), "5 ms");
    }

    #[test]
    fn test_result_serialization() {
        let result = HashResult::new("MD5", "XUFAKrxLKna5cZ2REBfFkg==", 0.002);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"algorithm\":\"MD5\""));
        assert!(json.contains("\"average_time_ms\":0.002"));

        let back: HashResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
