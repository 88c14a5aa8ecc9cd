// ⚙️ Settings - read from the process environment
//
// ENV       deployment environment name ("dev" enables dev-only checks)
// RUST_LOG  tracing filter, defaults to "info"

use std::env;

pub const ENV_VAR: &str = "ENV";
pub const LOG_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Deployment environment, None when unset or blank
    pub environment: Option<String>,

    /// Filter directive handed to tracing-subscriber
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (used by tests to avoid touching the real env)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let log_filter = lookup(LOG_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Settings {
            environment,
            log_filter,
        }
    }

    pub fn is_dev(&self) -> bool {
        self.environment.as_deref() == Some("dev")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            environment: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
