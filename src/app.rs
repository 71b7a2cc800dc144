use crate::{
    config::AppConfig,
    errors::{ConfigError, NotifyError},
    homework::PracticumClient,
    tasks::status_poller::{self, PollState, TickOutcome},
    telegram::TelegramClient,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build homework API client: {0}")]
    HomeworkClient(String),

    #[error("failed to build Telegram client: {0}")]
    TelegramClient(#[from] NotifyError),
}

/// Everything the poller needs, assembled once at startup.
///
/// Nothing here touches the network until [`App::run`] or [`App::tick`].
pub struct App {
    pub config: AppConfig,
    pub state: PollState,
    api: PracticumClient,
    notifier: TelegramClient,
}

impl App {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::new(AppConfig::from_env()?)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(AppConfig::from_lookup(lookup)?)
    }

    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        let api = PracticumClient::new(&config)
            .map_err(|e| StartupError::HomeworkClient(e.without_url().to_string()))?;
        let notifier = TelegramClient::new(&config)?;

        Ok(Self {
            config,
            state: PollState::starting_now(),
            api,
            notifier,
        })
    }

    pub async fn tick(&mut self) -> TickOutcome {
        status_poller::tick(&self.api, &self.notifier, &mut self.state).await
    }

    pub async fn run(self) {
        status_poller::start(self.api, self.notifier, self.state, self.config.retry_period).await
    }
}
