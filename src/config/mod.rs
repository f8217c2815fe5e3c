//! Configuration management module
//!
//! Handles loading, saving, and validation of the quiz client configuration.

use crate::{
    QuizError, Result, APP_NAME, CONFIG_FILE, DEFAULT_BASE_URL, DEFAULT_POINTS_PER_CORRECT,
    DEFAULT_STATS_INTERVAL,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Quiz client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Base URL of the Question Service
    pub base_url: String,
    /// How long the loading splash stays up before the home screen
    #[serde(with = "duration_str")]
    pub loading_delay: Duration,
    /// Per-request timeout; zero (the default) disables it
    #[serde(with = "duration_str")]
    pub request_timeout: Duration,
    /// Points awarded per correct answer
    pub points_per_correct: u32,
    /// Show the stats screen every this many questions
    pub stats_interval: u32,
    /// UI redraw and input poll interval
    #[serde(with = "duration_str")]
    pub tick_rate: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            loading_delay: Duration::from_millis(1500),
            request_timeout: Duration::ZERO,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            stats_interval: DEFAULT_STATS_INTERVAL,
            tick_rate: Duration::from_millis(100),
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| QuizError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuizError::Config(format!(
                "Base URL must use http or https: {}",
                self.base_url
            )));
        }

        if self.points_per_correct == 0 {
            return Err(QuizError::Config(
                "Points per correct answer must be greater than 0".to_string(),
            ));
        }

        if self.stats_interval == 0 {
            return Err(QuizError::Config(
                "Stats interval must be greater than 0".to_string(),
            ));
        }

        const MAX_LOADING_DELAY: Duration = Duration::from_secs(60);
        if self.loading_delay > MAX_LOADING_DELAY {
            return Err(QuizError::Config(format!(
                "Loading delay too long: {} (max: {})",
                humantime::format_duration(self.loading_delay),
                humantime::format_duration(MAX_LOADING_DELAY)
            )));
        }

        const MIN_TICK: Duration = Duration::from_millis(10);
        const MAX_TICK: Duration = Duration::from_secs(1);
        if self.tick_rate < MIN_TICK || self.tick_rate > MAX_TICK {
            return Err(QuizError::Config(format!(
                "Tick rate must be between {} and {}",
                humantime::format_duration(MIN_TICK),
                humantime::format_duration(MAX_TICK)
            )));
        }

        Ok(())
    }

    /// Request timeout, or `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (!self.request_timeout.is_zero()).then_some(self.request_timeout)
    }

    /// Set the service base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the loading splash delay
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the points per correct answer
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    /// Set the stats interval
    pub fn with_stats_interval(mut self, interval: u32) -> Self {
        self.stats_interval = interval;
        self
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), base_url = %config.base_url, "loaded config");

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            QuizError::Config(format!("Failed to write config file {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/banana-quiz/banana-quiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Durations as humantime strings ("1s 500ms", "10s")
mod duration_str {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}
