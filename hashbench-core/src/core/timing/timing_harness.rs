use std::time::Instant;

use crate::shared::constants::{TICKS_PER_SECOND, TIME_DECIMALS, TIMING_RUNS};

/// Output of the last run plus the averaged duration
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    pub output: T,
    pub average_time_ms: f64,
}

/// Repeated-trial timer
#[derive(Debug, Clone, Copy)]
pub struct TimingHarness {
    runs: usize,
}

impl Default for TimingHarness {
    fn default() -> Self {
        Self { runs: TIMING_RUNS }
    }
}

impl TimingHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Run `computation` back to back with no warm-up and keep the last output.
    ///
    /// Outputs are assumed identical across runs; only the timing is averaged.
    pub fn measure<T, F>(&self, mut computation: F) -> Measurement<T>
    where
        F: FnMut() -> T,
    {
        let mut total_ticks: u128 = 0;
        let mut output = None;

        for _ in 0..self.runs {
            let started = Instant::now();
            output = Some(computation());
            total_ticks += started.elapsed().as_nanos();
        }

        let average_time_ms = average_millis(total_ticks, self.runs, TICKS_PER_SECOND);
        log::debug!("Measured {} runs, average {} ms", self.runs, average_time_ms);

        Measurement {
            // runs is a non-zero constant, so the loop always produced an output
            output: output.unwrap_or_else(computation),
            average_time_ms,
        }
    }
}

/// Mean of `total_ticks` over `runs`, in milliseconds, rounded to 3 decimals.
pub fn average_millis(total_ticks: u128, runs: usize, ticks_per_second: u64) -> f64 {
    if runs == 0 || ticks_per_second == 0 {
        return 0.0;
    }
    let mean_ticks = total_ticks as f64 / runs as f64;
    let millis = mean_ticks * 1000.0 / ticks_per_second as f64;
    round_to(millis, TIME_DECIMALS)
}

/// Round half to even, matching the display convention of the result log.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
