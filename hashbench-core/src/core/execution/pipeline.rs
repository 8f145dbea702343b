use crate::core::hashing::HashDispatcher;
use crate::core::results::{Completion, ResultAggregator};
use crate::core::salt::SaltResolver;
use crate::core::timing::TimingHarness;
use crate::shared::types::HashRequest;

/// SaltResolver → HashDispatcher → TimingHarness → ResultAggregator
#[derive(Debug, Clone, Default)]
pub struct HashPipeline {
    resolver: SaltResolver,
    dispatcher: HashDispatcher,
    harness: TimingHarness,
}

impl HashPipeline {
    pub fn new(resolver: SaltResolver) -> Self {
        Self {
            resolver,
            dispatcher: HashDispatcher::new(),
            harness: TimingHarness::new(),
        }
    }

    /// Run one request to completion. Blocks for as long as the algorithm takes.
    pub fn run(&self, request: &HashRequest) -> Completion {
        let variant = request.variant();
        let input_text = request.input_text();
        let salt = self.resolver.resolve(request.salt().text());

        log::debug!(
            "Running {} over {} input bytes (salt: {})",
            variant,
            input_text.len(),
            salt.as_ref().map_or(0, |salt| salt.len())
        );

        let measurement = self.harness.measure(|| {
            self.dispatcher
                .compute(variant, input_text.as_bytes(), input_text, salt.as_ref())
        });
        ResultAggregator::aggregate(variant, measurement)
    }
}
