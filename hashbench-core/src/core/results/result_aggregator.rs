use std::thread::{self, ThreadId};

use crate::core::hashing::AlgorithmVariant;
use crate::core::timing::Measurement;
use crate::shared::constants::ERROR_TOKEN;
use crate::shared::error::HashError;
use crate::shared::types::HashResult;
use crate::shared::HashOutcome;

/// A finished run: the record to append, and the failure to present if there was one.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub result: HashResult,
    pub error: Option<HashError>,
    /// Thread that computed the result, if it finished normally
    pub worker: Option<ThreadId>,
}

/// Builds result records from dispatcher output and harness timing
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn aggregate(
        variant: &AlgorithmVariant,
        measurement: Measurement<HashOutcome<String>>,
    ) -> Completion {
        let label = variant.to_string();
        let (output, error) = match measurement.output {
            Ok(output) => (output, None),
            Err(error) => (ERROR_TOKEN.to_string(), Some(error)),
        };

        Completion {
            result: HashResult::new(label, output, measurement.average_time_ms),
            error,
            worker: Some(thread::current().id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hashing::Argon2Params;
    use crate::shared::error::ValidationError;

    #[test]
    fn test_aggregate_success() {
        let measurement = Measurement {
            output: Ok("LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=".to_string()),
            average_time_ms: 0.004,
        };
        let completion = ResultAggregator::aggregate(&AlgorithmVariant::Sha256, measurement);

        assert_eq!(completion.result.algorithm(), "SHA256");
        assert_eq!(completion.result.output(), "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=");
        assert_eq!(completion.result.average_time_ms(), 0.004);
        assert!(completion.error.is_none());
        assert_eq!(completion.worker, Some(thread::current().id()));
    }

    #[test]
    fn test_aggregate_failure_uses_error_token() {
        let measurement = Measurement {
            output: Err(HashError::from(ValidationError::MissingSalt)),
            average_time_ms: 0.0,
        };
        let variant = AlgorithmVariant::argon2id(Argon2Params::default());
        let completion = ResultAggregator::aggregate(&variant, measurement);

        assert_eq!(completion.result.output(), "Error");
        assert_eq!(
            completion.result.algorithm(),
            "Argon2id (Mem: 65536 KiB, Iter: 3, Par: 2)"
        );
        assert_eq!(
            completion.error,
            Some(HashError::Validation(ValidationError::MissingSalt))
        );
    }

    #[test]
    fn test_bcrypt_label() {
        let measurement = Measurement {
            output: Ok("$2b$10$...".to_string()),
            average_time_ms: 52.1,
        };
        let completion = ResultAggregator::aggregate(&AlgorithmVariant::bcrypt(10), measurement);
        assert_eq!(completion.result.algorithm(), "BCrypt (Cost: 10)");
    }
}
