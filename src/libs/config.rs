use {
    crate::constants::{
        EXPLORER_URL, IDLE_TIMEOUT_SECS, LOG_LEVEL, LOG_LEVELS, MAX_IDLE, NETWORK, TIMEOUT_SECS,
    },
    dotenv::dotenv,
    explorer::{HttpConfig, Network},
    serde::Serialize,
    std::{fmt::Debug, str::FromStr, time::Duration},
    thiserror::Error,
    url::Url,
};

pub fn load_env() {
    dotenv().ok();
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown network '{0}', expected mainnet or alfajores")]
    Network(String),

    #[error("invalid explorer url '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid log level '{0}', expected one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Effective settings: environment (and `.env`) first, command-line flags on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Config {
    pub network: String,
    /// Explicit API root; empty means "use the network's root".
    pub url: String,
    pub max_idle: usize,
    pub idle_timeout_secs: u64,
    /// Zero disables the request timeout.
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NETWORK.clone(),
            url: EXPLORER_URL.clone(),
            max_idle: *MAX_IDLE,
            idle_timeout_secs: *IDLE_TIMEOUT_SECS,
            timeout_secs: *TIMEOUT_SECS,
            log_level: LOG_LEVEL.clone(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(
        mut self,
        network: Option<String>,
        url: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(network) = network {
            self.network = network;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    pub fn network(&self) -> Result<Network, ConfigError> {
        self.network
            .parse()
            .map_err(|_| ConfigError::Network(self.network.clone()))
    }

    /// API root to query. An explicit url wins over the network.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Ok(self.network()?.base_url().to_string());
        }
        Url::parse(raw).map_err(|source| ConfigError::Url {
            url: raw.to_string(),
            source,
        })?;
        Ok(raw.to_string())
    }

    pub fn http_config(&self) -> Result<HttpConfig, ConfigError> {
        Ok(HttpConfig {
            base_url: self.base_url()?,
            max_idle_connections: self.max_idle,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            request_timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
        })
    }

    pub fn log_level(&self) -> Result<&str, ConfigError> {
        let level = self.log_level.trim();
        LOG_LEVELS
            .iter()
            .find(|l| l.eq_ignore_ascii_case(level))
            .copied()
            .ok_or_else(|| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer::{ALFAJORES_BASE_URL, MAINNET_BASE_URL};

    fn base() -> Config {
        Config {
            network: "mainnet".into(),
            url: String::new(),
            max_idle: 100,
            idle_timeout_secs: 30,
            timeout_secs: 0,
            log_level: "info".into(),
        }
    }

    #[test]
    fn network_selects_root() {
        assert_eq!(base().base_url().unwrap(), MAINNET_BASE_URL);
        let cfg = base().with_overrides(Some("alfajores".into()), None, None);
        assert_eq!(cfg.base_url().unwrap(), ALFAJORES_BASE_URL);
    }

    #[test]
    fn explicit_url_wins() {
        let cfg = base().with_overrides(
            Some("alfajores".into()),
            Some("http://localhost:4000/api".into()),
            None,
        );
        assert_eq!(cfg.base_url().unwrap(), "http://localhost:4000/api");
    }

    #[test]
    fn bad_values_are_reported() {
        let cfg = base().with_overrides(Some("ropsten".into()), None, None);
        assert_eq!(cfg.base_url(), Err(ConfigError::Network("ropsten".into())));

        let cfg = base().with_overrides(None, Some("::nope".into()), None);
        assert!(matches!(cfg.base_url(), Err(ConfigError::Url { .. })));

        let cfg = base().with_overrides(None, None, Some("verbose".into()));
        assert_eq!(cfg.log_level(), Err(ConfigError::LogLevel("verbose".into())));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let cfg = base().with_overrides(None, None, Some("DEBUG".into()));
        assert_eq!(cfg.log_level(), Ok("debug"));
    }

    #[test]
    fn zero_timeout_means_none() {
        let http = base().http_config().unwrap();
        assert!(http.request_timeout.is_none());
        assert_eq!(http.idle_timeout, Duration::from_secs(30));

        let cfg = Config {
            timeout_secs: 12,
            ..base()
        };
        assert_eq!(cfg.http_config().unwrap().request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn typed_env_fallback() {
        assert_eq!(Config::get_var_t::<u64>("CELOSCAN_TEST_UNSET_VAR", 7), 7);
        std::env::set_var("CELOSCAN_TEST_BAD_NUMBER", "seven");
        assert_eq!(Config::get_var_t::<u64>("CELOSCAN_TEST_BAD_NUMBER", 7), 7);
    }
}
