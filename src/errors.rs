use thiserror::Error;

/// Startup failures. These are fatal: the poller never starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Failures of a single polling cycle.
///
/// Every variant is recoverable: the runner turns it into a diagnostic
/// message for the chat and tries again after the usual pause. The
/// `Display` text is what ends up in that message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The API could not be reached or its body could not be decoded.
    #[error("Ошибка соединения с API: {0}")]
    Transport(String),

    /// The API answered with something other than 200.
    #[error("Ошибка доступа к серверу: код ответа {status}")]
    ServerAnswer { status: u16 },

    /// A field the protocol requires is absent.
    #[error("Пустой ответ от сервера: нет поля \"{0}\"")]
    EmptyAnswer(&'static str),

    /// A field is present but has the wrong shape.
    #[error("Неправильный тип данных в ответе API: {0}")]
    MalformedResponse(String),

    #[error("В ответе пришел неизвестный статус: {0}")]
    UnknownVerdict(String),
}

impl PollError {
    pub fn malformed(detail: &str) -> Self {
        PollError::MalformedResponse(detail.to_string())
    }
}

/// Convert network/reqwest errors. The URL is stripped so that nothing
/// request-specific leaks into chat messages.
impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            PollError::Transport(format!("не удалось разобрать ответ: {err}"))
        } else {
            PollError::Transport(err.to_string())
        }
    }
}

/// Delivery failures. Logged by the runner and never propagated further.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("Telegram API error: {0}")]
    Api(String),
}

/// The Telegram URL carries the bot token, so it must never reach the logs.
impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Transport(err.without_url().to_string())
    }
}
