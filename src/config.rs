//! Application configuration loaded from environment variables.
//!
//! - `MINSKY_API_URL` — base URL of the watchlist API
//! - `MINSKY_POLL_INTERVAL_MS` — fetch interval in milliseconds
//! - `MINSKY_TELEGRAM_TOKEN` / `MINSKY_TELEGRAM_CHAT_ID` — optional pump
//!   alert delivery; when one is set both must be present

use std::time::Duration;

/// Default base URL of the watchlist API.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default fetch interval in milliseconds.
const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub telegram: Option<TelegramConfig>,
}

/// Watchlist API configuration values.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub poll_interval: Duration,
}

/// Telegram Bot API credentials for pump alert delivery.
#[derive(Debug)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

/// Loads the application configuration from environment variables.
///
/// The API base URL defaults to `http://127.0.0.1:8000` and the poll
/// interval to 5000 ms. Telegram credentials are optional (alerts are
/// logged only) but when one is set both must be present.
///
/// # Errors
///
/// Returns [`MinskyError::Config`](crate::MinskyError::Config) if the poll
/// interval is not a valid integer or if only one of the two Telegram
/// variables is set.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("MINSKY_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let poll_interval_ms = match non_empty_var("MINSKY_POLL_INTERVAL_MS") {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            crate::MinskyError::Config(format!(
                "MINSKY_POLL_INTERVAL_MS must be an integer number of milliseconds, got {raw:?}"
            ))
        })?,
        None => DEFAULT_POLL_INTERVAL_MS,
    };

    let token = non_empty_var("MINSKY_TELEGRAM_TOKEN");
    let chat_id = non_empty_var("MINSKY_TELEGRAM_CHAT_ID");

    let telegram = match (token, chat_id) {
        (Some(token), Some(chat_id)) => Some(TelegramConfig { token, chat_id }),
        (Some(_), None) => {
            return Err(crate::MinskyError::Config(
                "MINSKY_TELEGRAM_TOKEN is set but MINSKY_TELEGRAM_CHAT_ID is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::MinskyError::Config(
                "MINSKY_TELEGRAM_CHAT_ID is set but MINSKY_TELEGRAM_TOKEN is missing".to_string(),
            ));
        }
        (None, None) => None,
    };

    Ok(AppConfig {
        api: ApiConfig {
            base_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
        },
        telegram,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("MINSKY_API_URL", None),
                ("MINSKY_POLL_INTERVAL_MS", None),
                ("MINSKY_TELEGRAM_TOKEN", None),
                ("MINSKY_TELEGRAM_CHAT_ID", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, DEFAULT_API_URL);
                assert_eq!(config.api.poll_interval, Duration::from_millis(5000));
                assert!(config.telegram.is_none());
            },
        );
    }

    #[test]
    fn custom_api_url_and_interval() {
        with_env(
            &[
                ("MINSKY_API_URL", Some("http://10.0.0.5:9000")),
                ("MINSKY_POLL_INTERVAL_MS", Some("1500")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
                assert_eq!(config.api.poll_interval, Duration::from_millis(1500));
            },
        );
    }

    #[test]
    fn rejects_non_numeric_interval() {
        with_env(
            &[("MINSKY_POLL_INTERVAL_MS", Some("five seconds"))],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("MINSKY_POLL_INTERVAL_MS"));
            },
        );
    }

    #[test]
    fn loads_telegram_credentials_from_env() {
        with_env(
            &[
                ("MINSKY_POLL_INTERVAL_MS", None),
                ("MINSKY_TELEGRAM_TOKEN", Some("123:abc")),
                ("MINSKY_TELEGRAM_CHAT_ID", Some("-100200300")),
            ],
            || {
                let config = fetch_config().unwrap();
                let telegram = config.telegram.unwrap();
                assert_eq!(telegram.token, "123:abc");
                assert_eq!(telegram.chat_id, "-100200300");
            },
        );
    }

    #[test]
    fn rejects_token_without_chat_id() {
        with_env(
            &[
                ("MINSKY_TELEGRAM_TOKEN", Some("123:abc")),
                ("MINSKY_TELEGRAM_CHAT_ID", None),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("MINSKY_TELEGRAM_CHAT_ID is missing"));
            },
        );
    }

    #[test]
    fn rejects_chat_id_without_token() {
        with_env(
            &[
                ("MINSKY_TELEGRAM_TOKEN", None),
                ("MINSKY_TELEGRAM_CHAT_ID", Some("-100200300")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("MINSKY_TELEGRAM_TOKEN is missing"));
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("MINSKY_API_URL", Some("")),
                ("MINSKY_POLL_INTERVAL_MS", Some("")),
                ("MINSKY_TELEGRAM_TOKEN", Some("")),
                ("MINSKY_TELEGRAM_CHAT_ID", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, DEFAULT_API_URL);
                assert!(config.telegram.is_none());
            },
        );
    }
}
