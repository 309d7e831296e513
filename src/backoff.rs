//! Retrying fallible operations with a fixed delay.

use std::{fmt, thread, time::Duration};

/// How many times to run an operation and how long to wait in between.
///
/// The delay is the same before every retry; there is no growth or jitter.
/// An attempt budget of 0 is treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of calls, including the first.
    pub attempts: usize,
    /// Pause between two consecutive calls.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Policy running an operation at most `attempts` times, `delay` apart.
    pub fn new(attempts: usize, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Replace the attempt budget.
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Replace the pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Run `op` under this policy, blocking the current thread between attempts.
    pub fn run<T, E, F>(&self, op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Debug,
    {
        self.run_with(op, thread::sleep)
    }

    /// Run `op` under this policy, calling `sleep` with the delay between attempts.
    ///
    /// Returns the first success, or the error of the last attempt.
    pub fn run_with<T, E, F, W>(&self, mut op: F, mut sleep: W) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Debug,
        W: FnMut(Duration),
    {
        let max_attempts = self.attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= max_attempts => {
                    tracing::error!(
                        attempt,
                        max_attempts,
                        error = ?err,
                        "operation failed, no attempts left"
                    );
                    return Err(err);
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = ?err,
                        retry_in = ?self.delay,
                        "operation failed, retrying"
                    );
                    sleep(self.delay);
                    attempt += 1;
                }
            }
        }
    }
}

/// Call `op` up to `attempts` times, sleeping `delay` after each failure.
///
/// ```rust
/// use std::time::Duration;
/// use pullseq::retry;
///
/// let mut calls = 0;
/// let value = retry(
///     || {
///         calls += 1;
///         if calls < 3 { Err("not yet") } else { Ok(1023) }
///     },
///     3,
///     Duration::from_millis(1),
/// );
/// assert_eq!(value, Ok(1023));
/// ```
pub fn retry<T, E, F>(op: F, attempts: usize, delay: Duration) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Debug,
{
    RetryPolicy::new(attempts, delay).run(op)
}
