use std::env;
use std::string::String;
use std::time::Duration;

/// Default base delay for log-read retries.
pub const LOG_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: Option<String>,
    pub log_retry_base_delay: Duration,
    pub log_max_attempts: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: None,
            log_retry_base_delay: LOG_RETRY_BASE_DELAY,
            log_max_attempts: None,
        }
    }
}

fn endpoint_url_from_env() -> Option<String> {
    env::var("E2E_AWS_ENDPOINT_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

impl Config {
    /// Only the endpoint override; the log retry settings are left at their defaults and
    /// their variables are not read.
    pub fn endpoint_from_env() -> Config {
        Config {
            endpoint_url: endpoint_url_from_env(),
            ..Config::default()
        }
    }

    pub fn load_from_env() -> Result<Config, String> {
        let conf = Config {
            endpoint_url: endpoint_url_from_env(),
            log_retry_base_delay: env::var("E2E_LOG_RETRY_BASE_DELAY_MS")
                .unwrap_or("500".to_string())
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| format!("Error parsing E2E_LOG_RETRY_BASE_DELAY_MS to u64 - {}", e))?,
            log_max_attempts: env::var("E2E_LOG_MAX_ATTEMPTS")
                .ok()
                .map(|s| s.parse::<u32>())
                .transpose()
                .map_err(|e| format!("Error parsing E2E_LOG_MAX_ATTEMPTS to u32 - {}", e))?,
        };

        Ok(conf)
    }
}
