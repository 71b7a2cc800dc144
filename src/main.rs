use dotenvy::dotenv;
use homework_bot::{
    observability::{self, LoggingConfig},
    App, StartupError,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let logging = LoggingConfig::from_env();
    // Dropping the guard flushes the log file, so keep it until main returns.
    let _log_guard = match observability::init_logging(&logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = match App::from_env() {
        Ok(app) => app,
        Err(StartupError::Config(e)) => {
            tracing::error!(severity = "CRITICAL", error = %e, "Required configuration is missing");
            tracing::debug!("Program stopped before polling started");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!(severity = "CRITICAL", error = %e, "Failed to start");
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        _ = app.run() => {}
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => tracing::info!("Received shutdown signal, stopping"),
            Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
        },
    }

    ExitCode::SUCCESS
}
