use std::path::PathBuf;
use tracing::{info, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging settings, read from the environment before anything else so that
/// a bad startup can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_format: String,
    pub log_dir: PathBuf,
    pub log_file: String,
    pub rotation: String,
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            log_dir: PathBuf::from("."),
            log_file: "homework.log".to_string(),
            rotation: "daily".to_string(),
            max_files: 5,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT").unwrap_or(defaults.log_format),
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_file: lookup("LOG_FILE").unwrap_or(defaults.log_file),
            rotation: lookup("LOG_ROTATION").unwrap_or(defaults.rotation),
            max_files: lookup("LOG_MAX_FILES")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_files),
        }
    }

    fn rotation(&self) -> Rotation {
        match self.rotation.to_ascii_lowercase().as_str() {
            "minutely" => Rotation::MINUTELY,
            "hourly" => Rotation::HOURLY,
            "never" => Rotation::NEVER,
            _ => Rotation::DAILY,
        }
    }
}

/// Rotating file sink. Old files beyond `max_files` are pruned on rollover.
pub fn build_file_appender(config: &LoggingConfig) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(config.rotation())
        .filename_prefix(&config.log_file)
        .max_log_files(config.max_files)
        .build(&config.log_dir)
}

/// Plain-text layer for the log file. Built per subscriber stack, since a
/// layer is tied to the subscriber type it is stacked on.
fn file_layer<S, W>(writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
}

/// Initialize structured logging to the console and the rotating log file.
///
/// The returned guard flushes the file writer when dropped, so `main` has to
/// hold on to it for the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard, InitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (file_writer, guard) = tracing_appender::non_blocking(build_file_appender(config)?);

    if config.log_format == "json" {
        // JSON structured logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .with(file_layer(file_writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(true))
            .with(file_layer(file_writer))
            .init();
    }

    info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.log_level,
        log_format = %config.log_format,
        log_file = %config.log_dir.join(&config.log_file).display(),
        "Logging initialized"
    );

    Ok(guard)
}
