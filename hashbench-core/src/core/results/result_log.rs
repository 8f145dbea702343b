use crate::shared::error::HashError;
use crate::shared::types::HashResult;

/// Receiver for finished runs, called on the thread that owns the result state.
pub trait ResultSink {
    /// Append a finished result.
    fn publish(&mut self, result: HashResult);

    /// Present a failure to the user. The result carrying the error token is
    /// published separately.
    fn report_error(&mut self, error: &HashError) {
        log::warn!("Hash run failed: {}", error);
    }
}

/// Ordered, append-only result log
#[derive(Debug, Default, Clone)]
pub struct ResultLog {
    results: Vec<HashResult>,
    errors: Vec<HashError>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[HashResult] {
        &self.results
    }

    pub fn errors(&self) -> &[HashError] {
        &self.errors
    }

    pub fn last(&self) -> Option<&HashResult> {
        self.results.last()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl ResultSink for ResultLog {
    fn publish(&mut self, result: HashResult) {
        self.results.push(result);
    }

    fn report_error(&mut self, error: &HashError) {
        log::warn!("Hash run failed: {}", error);
        self.errors.push(error.clone());
    }
}

impl ResultSink for Vec<HashResult> {
    fn publish(&mut self, result: HashResult) {
        self.push(result);
    }
}
