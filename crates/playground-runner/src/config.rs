//! Runner configuration: artificial delay and the ranges the fake resource
//! figures are drawn from.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{RunError, RunResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Minimum artificial latency before a result is produced.
    pub delay_base_ms: u64,
    /// Uniform jitter added on top of `delay_base_ms`.
    pub delay_jitter_ms: u64,
    /// Reported time is uniform in `[time_min_secs, time_min_secs + time_span_secs)`.
    pub time_min_secs: f64,
    pub time_span_secs: f64,
    /// Reported memory is an integer in `[memory_min_kb, memory_min_kb + memory_span_kb)`.
    pub memory_min_kb: u32,
    pub memory_span_kb: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            delay_base_ms: 1500,
            delay_jitter_ms: 2000,
            time_min_secs: 0.5,
            time_span_secs: 3.0,
            memory_min_kb: 2000,
            memory_span_kb: 15000,
        }
    }
}

impl RunnerConfig {
    /// No artificial latency; ranges unchanged.
    pub fn instant() -> Self {
        Self {
            delay_base_ms: 0,
            delay_jitter_ms: 0,
            ..Self::default()
        }
    }

    /// Parse a config object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RunResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RunResult<()> {
        for (field, value) in [
            ("time_min_secs", self.time_min_secs),
            ("time_span_secs", self.time_span_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RunError::InvalidRange { field });
            }
        }
        if self.delay_base_ms.checked_add(self.delay_jitter_ms).is_none() {
            return Err(RunError::InvalidRange {
                field: "delay_jitter_ms",
            });
        }
        if self.memory_min_kb.checked_add(self.memory_span_kb).is_none() {
            return Err(RunError::InvalidRange {
                field: "memory_span_kb",
            });
        }
        Ok(())
    }

    /// Delay for a unit sample in `[0, 1)`.
    pub fn delay(&self, unit: f64) -> Duration {
        let jitter = (unit * self.delay_jitter_ms as f64).floor() as u64;
        Duration::from_millis(self.delay_base_ms.saturating_add(jitter))
    }

    /// Seconds, three decimals.
    pub fn time(&self, unit: f64) -> String {
        format!("{:.3}", self.time_min_secs + unit * self.time_span_secs)
    }

    /// Kilobytes.
    pub fn memory(&self, unit: f64) -> u32 {
        let offset = (unit * self.memory_span_kb as f64).floor() as u32;
        self.memory_min_kb.saturating_add(offset)
    }
}
