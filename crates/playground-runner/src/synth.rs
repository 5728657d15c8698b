//! The synthesizer: dispatches on language id, guards against panics, and
//! stamps the fake resource figures onto the result.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use std::time::Duration;

use playground_types::{ExecutionRecord, LanguageId};
use tracing::{debug, warn};

use crate::config::RunnerConfig;
use crate::profile::{Outcome, ProfileRegistry};
use crate::random::{self, RandomSource};
use crate::web::WebAnalyzer;

/// Turns source text into a canned [`ExecutionRecord`].
///
/// Shareable across tasks: the random source sits behind a mutex, every
/// other field is read-only after construction.
pub struct Synthesizer {
    profiles: ProfileRegistry,
    web: WebAnalyzer,
    config: RunnerConfig,
    random: Mutex<Box<dyn RandomSource + Send>>,
}

impl Synthesizer {
    /// Default ranges and delay, clock-seeded randomness.
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            profiles: ProfileRegistry::new(),
            web: WebAnalyzer::new(),
            config,
            random: Mutex::new(Box::new(random::from_clock())),
        }
    }

    /// Replace the random source.
    pub fn with_random(mut self, source: impl RandomSource + Send + 'static) -> Self {
        self.random = Mutex::new(Box::new(source));
        self
    }

    /// Reproducible synthesizer with a seeded `StdRng`.
    pub fn seeded(config: RunnerConfig, seed: u64) -> Self {
        Self::with_config(config).with_random(random::seeded(seed))
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    /// The deterministic part of a run.
    pub fn outcome(&self, source: &str, language: LanguageId) -> Outcome {
        guarded(|| self.dispatch(source, language))
    }

    fn dispatch(&self, source: &str, language: LanguageId) -> Outcome {
        if language == LanguageId::WEB_PROJECT {
            return Outcome::accepted(self.web.report(source));
        }
        match self.profiles.get(language) {
            Some(profile) => profile.execute(source),
            None => Outcome::language_not_supported(),
        }
    }

    /// Synthesize a complete record without any delay.
    pub fn synthesize(&self, source: &str, language: LanguageId) -> ExecutionRecord {
        let outcome = self.outcome(source, language);
        let time = self.config.time(self.sample());
        let memory = self.config.memory(self.sample());
        debug!(
            %language,
            status = outcome.status.id,
            bytes = source.len(),
            "execution synthesized"
        );
        ExecutionRecord {
            stdout: outcome.stdout,
            stderr: outcome.stderr,
            compile_output: String::new(),
            status: outcome.status,
            time,
            memory,
        }
    }

    /// Draw the artificial latency for one run.
    pub fn next_delay(&self) -> Duration {
        self.config.delay(self.sample())
    }

    /// Wait out the artificial latency, then synthesize.
    #[cfg(feature = "delay")]
    pub async fn compile_and_run(&self, source: &str, language: LanguageId) -> ExecutionRecord {
        let delay = self.next_delay();
        debug!(%language, delay_ms = delay.as_millis() as u64, "compiling");
        tokio::time::sleep(delay).await;
        self.synthesize(source, language)
    }

    fn sample(&self) -> f64 {
        let mut source = self
            .random
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        source.unit()
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("config", &self.config)
            .field("profiles", &self.profiles.profiles().len())
            .finish_non_exhaustive()
    }
}

/// Run `f`, turning a panic into a Runtime Error outcome.
fn guarded(f: impl FnOnce() -> Outcome) -> Outcome {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown error".to_string());
        warn!(%message, "synthesis panicked");
        Outcome::runtime_error(&message)
    })
}
