//! Configuration for retry gates.

use contextutil_core::{
    Error, Result, DEFAULT_SAFE_WHILE_INCREMENT_SECS, DEFAULT_SAFE_WHILE_SLEEP_SECS,
    DEFAULT_SAFE_WHILE_TRIES,
};
use serde::{Deserialize, Serialize};

/// Configuration for a [`SafeWhile`](super::SafeWhile) gate
///
/// Durations are in seconds. Missing fields fall back to the defaults when
/// deserializing, so `{"tries": 3}` is a complete document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeWhileConfig {
    /// Sleep before the first retry
    pub sleep: f64,
    /// Added to the sleep after every attempt; may be zero or negative
    pub increment: f64,
    /// Number of invocations allowed before the gate fails
    pub tries: u32,
    /// Label for the loop, included in the exhaustion message
    pub action: Option<String>,
}

impl Default for SafeWhileConfig {
    fn default() -> Self {
        Self {
            sleep: DEFAULT_SAFE_WHILE_SLEEP_SECS,
            increment: DEFAULT_SAFE_WHILE_INCREMENT_SECS,
            tries: DEFAULT_SAFE_WHILE_TRIES,
            action: None,
        }
    }
}

impl SafeWhileConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.action = config.action.filter(|action| !action.is_empty());
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_sleep(mut self, sleep: f64) -> Self {
        self.sleep = sleep;
        self
    }

    #[must_use]
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    #[must_use]
    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Label the loop; an empty label leaves it unlabelled
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into()).filter(|action| !action.is_empty());
        self
    }

    /// Check that the sleep values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.sleep.is_finite() || self.sleep < 0.0 {
            return Err(Error::configuration(format!(
                "safe_while sleep must be a finite, non-negative number of seconds, got {}",
                self.sleep
            )));
        }
        if !self.increment.is_finite() {
            return Err(Error::configuration(format!(
                "safe_while increment must be finite, got {}",
                self.increment
            )));
        }
        Ok(())
    }

    /// Total sleep across the whole budget: `tries` terms of the arithmetic
    /// sequence starting at `sleep` with step `increment`
    ///
    /// Terms are not clamped, so a negative increment can make this smaller
    /// than the time actually slept, or negative.
    pub fn total_budget(&self) -> f64 {
        let terms = f64::from(self.tries);
        terms * self.sleep + self.increment * terms * (terms - 1.0) / 2.0
    }
}
