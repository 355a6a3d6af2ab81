//! Application configuration loaded from environment variables.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use jobengine_core::ports::FileSystem;

const DEFAULT_DB_PATH: &str = "/jobengine/database.queuedb";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 80;

/// Configuration errors. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SECRET is not set")]
    MissingSecret,

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server-side defaults for jobs added without explicit windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDefaults {
    pub keep_minutes: i64,
    pub timeout_minutes: i64,
    /// Seconds from insertion until a still-queued job is purged.
    pub queued_ttl_secs: i64,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            keep_minutes: 30,
            timeout_minutes: 30,
            queued_ttl_secs: 86_400,
        }
    }
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub secret: String,
    pub monitor_interval: Duration,
    pub job_defaults: JobDefaults,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_path", &self.db_path)
            .field("secret", &"<redacted>")
            .field("monitor_interval", &self.monitor_interval)
            .field("job_defaults", &self.job_defaults)
            .finish()
    }
}

/// Read `name`, falling back to `default` when unset or empty.
fn parse_or<T: FromStr>(
    fs: &dyn FileSystem,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match fs.get_env(name).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn load(fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let db_path = match fs.get_env("DB_PATH").filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => {
                tracing::info!(default = DEFAULT_DB_PATH, "DB_PATH not set, using default");
                PathBuf::from(DEFAULT_DB_PATH)
            }
        };

        if fs.get_env("API_PORT").is_none_or(|v| v.is_empty()) {
            tracing::info!(default = DEFAULT_PORT, "API_PORT not set, using default");
        }
        let port = parse_or(fs, "API_PORT", DEFAULT_PORT)?;

        let secret = fs
            .get_env("SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let interval_secs: u64 = parse_or(fs, "MONITOR_INTERVAL_SECS", 5)?;
        if interval_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "MONITOR_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        let defaults = JobDefaults::default();
        let job_defaults = JobDefaults {
            keep_minutes: parse_or(fs, "JOB_KEEP_MINUTES", defaults.keep_minutes)?,
            timeout_minutes: parse_or(fs, "JOB_TIMEOUT_MINUTES", defaults.timeout_minutes)?,
            queued_ttl_secs: parse_or(fs, "JOB_QUEUED_TTL_SECS", defaults.queued_ttl_secs)?,
        };

        Ok(Self {
            host: parse_or(fs, "API_HOST", DEFAULT_HOST.to_string())?,
            port,
            db_path,
            secret,
            monitor_interval: Duration::from_secs(interval_secs),
            job_defaults,
        })
    }
}
