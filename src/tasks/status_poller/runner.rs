use super::types::{failure_message, PollState, TickOutcome};
use crate::{
    errors::PollError,
    homework::{
        check::{describe_latest, next_cursor, validate_response},
        HomeworkApi,
    },
    telegram::Notifier,
};
use std::time::Duration;
use tracing::{debug, error, info};

/// Poll forever, one tick every `retry_period`. Only a process signal stops it.
pub async fn start<A, N>(api: A, notifier: N, mut state: PollState, retry_period: Duration)
where
    A: HomeworkApi,
    N: Notifier,
{
    info!(
        retry_period_secs = retry_period.as_secs(),
        cursor = state.cursor,
        "Starting homework status poller"
    );
    loop {
        tick(&api, &notifier, &mut state).await;
        tokio::time::sleep(retry_period).await;
    }
}

/// One poll → validate → describe → notify cycle, without the pause.
///
/// Polling failures become a diagnostic message that goes through the same
/// change detection as a regular status.
pub async fn tick<A, N>(api: &A, notifier: &N, state: &mut PollState) -> TickOutcome
where
    A: HomeworkApi,
    N: Notifier,
{
    let message = match poll_once(api, &mut state.cursor).await {
        Ok(message) => message,
        Err(e) => {
            let message = failure_message(&e);
            error!(error = %e, cursor = state.cursor, "{message}");
            message
        }
    };

    notify_if_changed(notifier, state, message).await
}

async fn poll_once<A: HomeworkApi>(api: &A, cursor: &mut i64) -> Result<String, PollError> {
    let response = api.fetch_statuses(*cursor).await?;
    *cursor = next_cursor(&response, *cursor);

    let homeworks = validate_response(response)?;
    debug!(count = homeworks.len(), cursor = *cursor, "Got homework statuses");

    describe_latest(&homeworks)
}

async fn notify_if_changed<N: Notifier>(
    notifier: &N,
    state: &mut PollState,
    message: String,
) -> TickOutcome {
    if !state.is_new(&message) {
        debug!("Status unchanged, nothing to send");
        return TickOutcome::Unchanged;
    }

    match notifier.send_text(&message).await {
        Ok(()) => {
            info!("Message sent: {message}");
            state.last_message = Some(message);
            TickOutcome::Notified
        }
        Err(e) => {
            // Left as-is so the same text is tried again next tick.
            error!(error = %e, "Message was not sent: {message}");
            TickOutcome::DeliveryFailed
        }
    }
}
