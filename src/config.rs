use crate::errors::ConfigError;
use std::fmt;
use std::time::Duration;

pub const API_TOKEN_VAR: &str = "API_TOKEN";
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "CHAT_ID";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three secrets the bot cannot run without.
///
/// Only [`AppConfig::from_lookup`] builds these, so holding a value means the
/// startup check has passed.
#[derive(Clone)]
pub struct Credentials {
    api_token: String,
    bot_token: String,
    chat_id: String,
}

impl Credentials {
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_base_url: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Missing or blank credentials are collected and reported together.
    /// Optional settings fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_token = required(API_TOKEN_VAR);
        let bot_token = required(BOT_TOKEN_VAR);
        let chat_id = required(CHAT_ID_VAR);

        let credentials = match (api_token, bot_token, chat_id) {
            (Some(api_token), Some(bot_token), Some(chat_id)) => Credentials {
                api_token,
                bot_token,
                chat_id,
            },
            (api_token, bot_token, chat_id) => {
                let missing = [
                    (API_TOKEN_VAR, api_token.is_none()),
                    (BOT_TOKEN_VAR, bot_token.is_none()),
                    (CHAT_ID_VAR, chat_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(ConfigError::MissingVariables(missing));
            }
        };

        let endpoint = match lookup("HOMEWORK_API_URL") {
            Some(url) => {
                tracing::info!("Using endpoint from HOMEWORK_API_URL: {}", url);
                url
            }
            None => DEFAULT_ENDPOINT.to_string(),
        };
        let telegram_api_base_url = lookup("TELEGRAM_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE_URL.to_string());

        Ok(Self {
            credentials,
            endpoint,
            telegram_api_base_url,
            retry_period: seconds_or(&lookup, "RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD),
            request_timeout: seconds_or(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT),
        })
    }
}

fn seconds_or<F>(lookup: &F, name: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                tracing::warn!(
                    "Ignoring invalid {}={:?}, using default of {}s",
                    name,
                    raw,
                    default.as_secs()
                );
                default
            }
        },
        None => default,
    }
}
