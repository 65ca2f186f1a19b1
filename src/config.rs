//! Runtime settings, read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::DEFAULT_STEP_DELAY;

#[derive(Clone, Debug, PartialEq)]
pub struct ShooterConfig {
    /// Pause between the steps of a movement glide.
    pub step_delay: Duration,
    /// Seed for shot scatter.  `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
            log_dir: default_log_dir(|key| env::var(key).ok()),
        }
    }
}

impl ShooterConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SHARP_SHOOTER_STEP_DELAY_MS` - glide step pause in milliseconds (default: 25)
    /// - `SHARP_SHOOTER_SEED` - fixed RNG seed for reproducible scatter
    /// - `SHARP_SHOOTER_LOG_DIR` - where `sharp_shooter.log` is written
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with variables resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
            log_dir: default_log_dir(&lookup),
        };

        if let Some(ms) = parse::<u64>(lookup("SHARP_SHOOTER_STEP_DELAY_MS")) {
            config.step_delay = Duration::from_millis(ms);
        }
        config.seed = parse::<u64>(lookup("SHARP_SHOOTER_SEED"));
        if let Some(dir) = lookup("SHARP_SHOOTER_LOG_DIR").filter(|d| !d.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw?.trim().parse().ok()
}

fn default_log_dir<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(cache) = lookup("XDG_CACHE_HOME") {
        return PathBuf::from(cache).join("sharp-shooter").join("logs");
    }
    if let Some(home) = lookup("HOME") {
        return PathBuf::from(home).join(".cache").join("sharp-shooter").join("logs");
    }
    env::temp_dir().join("sharp-shooter").join("logs")
}
