//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SOLVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SOLVER_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SOLVER_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid SOLVER_URL (expected http:// or https://): {0}")]
    InvalidSolverUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where and how to reach the upstream solving service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Base URL without a trailing slash; `/solve` is appended per request.
    pub base_url: String,
    pub timeouts: SolverTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub solver: SolverConfig,
    pub max_upload_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SOLVER_URL`: default `http://127.0.0.1:5000`
    /// - `SOLVER_REQUEST_TIMEOUT_SECS`: default 120
    /// - `SOLVER_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 10 MiB
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("SOLVER_URL")
            .unwrap_or_else(|| DEFAULT_SOLVER_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSolverUrl(base_url));
        }

        let timeouts = SolverTimeouts {
            request_secs: parse_or(&lookup, "SOLVER_REQUEST_TIMEOUT_SECS", DEFAULT_SOLVER_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&lookup, "SOLVER_CONNECT_TIMEOUT_SECS", DEFAULT_SOLVER_CONNECT_TIMEOUT_SECS),
        };
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self { port, solver: SolverConfig { base_url, timeouts }, max_upload_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
