use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::HashPipeline;
use crate::core::results::{Completion, ResultSink};
use crate::shared::constants::ERROR_TOKEN;
use crate::shared::error::HashError;
use crate::shared::types::{HashRequest, HashResult};
use crate::shared::HashOutcome;

/// Coordinator state as seen by the owning thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Busy,
}

/// What `submit` did with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing was started
    Ignored,
    /// A worker is computing the result
    Dispatched,
}

/// Runs hash requests off the owning thread, one at a time.
///
/// The busy flag is set on submit and cleared only after the result has been
/// handed to a sink by `deliver_next` or `try_deliver`, so sinks are only
/// ever touched from the thread that owns the coordinator. A submit while
/// busy is rejected with [`HashError::Busy`]. Runs cannot be cancelled.
pub struct ExecutionCoordinator {
    pipeline: Arc<HashPipeline>,
    busy: Arc<AtomicBool>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl Default for ExecutionCoordinator {
    fn default() -> Self {
        Self::new(HashPipeline::default())
    }
}

impl ExecutionCoordinator {
    pub fn new(pipeline: HashPipeline) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            pipeline: Arc::new(pipeline),
            busy: Arc::new(AtomicBool::new(false)),
            completion_tx,
            completion_rx,
        }
    }

    pub fn state(&self) -> CoordinatorState {
        if self.is_busy() {
            CoordinatorState::Busy
        } else {
            CoordinatorState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start a run on a blocking worker. Must be called inside a Tokio runtime.
    pub fn submit(&self, request: HashRequest) -> HashOutcome<Submission> {
        if request.is_blank() {
            log::debug!("Ignoring submission with blank input");
            return Ok(Submission::Ignored);
        }

        let handle = Handle::try_current()
            .map_err(|e| HashError::internal(format!("No async runtime available: {}", e)))?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Rejected {} submission: a run is already in flight", request.variant());
            return Err(HashError::busy("a hash run is already in flight"));
        }

        let pipeline = Arc::clone(&self.pipeline);
        let completion_tx = self.completion_tx.clone();
        let label = request.variant().to_string();
        log::debug!("Dispatching {} to a worker", label);

        handle.spawn(async move {
            let completion = match tokio::task::spawn_blocking(move || pipeline.run(&request)).await {
                Ok(completion) => completion,
                Err(join_error) => Completion {
                    result: HashResult::new(label, ERROR_TOKEN, 0.0),
                    error: Some(join_error.into()),
                    worker: None,
                },
            };
            if completion_tx.send(completion).is_err() {
                log::warn!("Coordinator dropped before the result could be delivered");
            }
        });

        Ok(Submission::Dispatched)
    }

    /// Wait for the in-flight run and hand it to `sink`.
    ///
    /// Returns `false` straight away when nothing is in flight.
    pub async fn deliver_next<S: ResultSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if !self.is_busy() {
            return false;
        }
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.deliver(completion, sink);
                true
            }
            None => false,
        }
    }

    /// Deliver a finished run if one is waiting, without blocking.
    pub fn try_deliver<S: ResultSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.completion_rx.try_recv() {
            Ok(completion) => {
                self.deliver(completion, sink);
                true
            }
            Err(_) => false,
        }
    }

    /// Submit and wait for delivery.
    pub async fn run<S: ResultSink + ?Sized>(
        &mut self,
        request: HashRequest,
        sink: &mut S,
    ) -> HashOutcome<Submission> {
        let submission = self.submit(request)?;
        if submission == Submission::Dispatched {
            self.deliver_next(sink).await;
        }
        Ok(submission)
    }

    fn deliver<S: ResultSink + ?Sized>(&mut self, completion: Completion, sink: &mut S) {
        if let Some(error) = &completion.error {
            sink.report_error(error);
        }
        log::info!(
            "{}: {} ({}, computed on {:?})",
            completion.result.algorithm(),
            completion.result.output(),
            completion.result.time_ms_display(),
            completion.worker
        );
        sink.publish(completion.result);
        self.busy.store(false, Ordering::Release);
    }
}
