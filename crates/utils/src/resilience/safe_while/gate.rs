//! The retry gate itself.

use super::config::SafeWhileConfig;
use super::sleeper::{Sleeper, ThreadSleeper};
use contextutil_core::{Error, Result};
use std::time::Duration;

/// Whether a gate still has tries left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Active,
    Exhausted,
}

/// Bounded retry gate for hand-written loops
///
/// Call [`invoke`](Self::invoke) at the top of every loop pass. Each call
/// sleeps for the current delay and grows it by `increment`; once more than
/// `tries` calls have been made, the call fails with
/// [`Error::MaxTriesExceeded`] instead.
///
/// ```rust
/// use contextutil_utils::resilience::{NoopSleeper, SafeWhile, SafeWhileConfig};
///
/// let config = SafeWhileConfig::default().with_tries(3).with_action("wait for quorum");
/// let mut polls = 0;
/// let result = SafeWhile::with_sleeper(config, NoopSleeper)?.run(|gate| loop {
///     gate.invoke()?;
///     polls += 1;
///     if polls == 2 {
///         return Ok(polls);
///     }
/// });
/// assert_eq!(result?, 2);
/// # Ok::<(), contextutil_core::Error>(())
/// ```
#[derive(Debug)]
pub struct SafeWhile<S = ThreadSleeper> {
    config: SafeWhileConfig,
    counter: u32,
    current_sleep: f64,
    elapsed_wait: f64,
    sleeper: S,
}

impl SafeWhile<ThreadSleeper> {
    /// Create a gate that really sleeps
    pub fn new(config: SafeWhileConfig) -> Result<Self> {
        Self::with_sleeper(config, ThreadSleeper)
    }
}

impl Default for SafeWhile<ThreadSleeper> {
    /// Ten tries, six seconds apart
    fn default() -> Self {
        Self::from_valid(SafeWhileConfig::default(), ThreadSleeper)
    }
}

impl<S: Sleeper> SafeWhile<S> {
    /// Create a gate with a custom sleeper
    pub fn with_sleeper(config: SafeWhileConfig, sleeper: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config, sleeper))
    }

    fn from_valid(config: SafeWhileConfig, sleeper: S) -> Self {
        Self {
            current_sleep: config.sleep,
            config,
            counter: 0,
            elapsed_wait: 0.0,
            sleeper,
        }
    }

    /// Count one attempt, then sleep, or fail if the budget is spent
    pub fn invoke(&mut self) -> Result<()> {
        self.counter = self.counter.saturating_add(1);
        if self.counter > self.config.tries {
            let error = Error::max_tries_exceeded(
                self.config.action.clone(),
                self.config.tries,
                self.config.total_budget(),
                self.elapsed_wait,
            );
            tracing::debug!(
                action = self.config.action.as_deref(),
                tries = self.config.tries,
                elapsed_wait = self.elapsed_wait,
                "Retry gate exhausted"
            );
            return Err(error);
        }

        let delay = self.current_sleep.max(0.0);
        tracing::debug!(
            action = self.config.action.as_deref(),
            attempt = self.counter,
            tries = self.config.tries,
            sleep_secs = delay,
            "Retry gate sleeping"
        );
        self.sleeper
            .sleep(Duration::try_from_secs_f64(delay).unwrap_or(Duration::MAX));
        self.elapsed_wait += delay;
        self.current_sleep += self.config.increment;
        Ok(())
    }

    /// Run `body` with this gate; whatever the body returns is passed through
    pub fn run<T, F>(mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        body(&mut self)
    }

    /// Attempts made so far, including a failed one
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Delay the next successful invocation will sleep for
    pub fn current_sleep(&self) -> Duration {
        Duration::try_from_secs_f64(self.current_sleep.max(0.0)).unwrap_or(Duration::MAX)
    }

    /// Seconds slept so far
    pub fn elapsed_wait(&self) -> f64 {
        self.elapsed_wait
    }

    /// Seconds the whole configured budget adds up to
    pub fn total_budget(&self) -> f64 {
        self.config.total_budget()
    }

    /// `Exhausted` once an invocation has gone past the budget
    pub fn state(&self) -> GateState {
        if self.counter > self.config.tries {
            GateState::Exhausted
        } else {
            GateState::Active
        }
    }

    /// Configuration the gate was built with
    pub fn config(&self) -> &SafeWhileConfig {
        &self.config
    }
}
