use super::types::{Submission, Verdict, NO_NEW_STATUS};
use crate::errors::PollError;
use serde_json::Value;

/// Cursor for the next request: the server's `current_date` if it sent
/// one, otherwise the cursor we already have. Fractional timestamps are
/// truncated to whole seconds.
pub fn next_cursor(response: &Value, cursor: i64) -> i64 {
    let Some(current_date) = response.get("current_date") else {
        return cursor;
    };
    current_date
        .as_i64()
        .or_else(|| current_date.as_f64().map(|secs| secs as i64))
        .unwrap_or(cursor)
}

/// Check the overall shape of an API answer and hand back its `homeworks`.
///
/// An empty list is a valid answer meaning "nothing new".
pub fn validate_response(response: Value) -> Result<Vec<Value>, PollError> {
    let mut response = match response {
        Value::Object(map) => map,
        other => {
            return Err(PollError::MalformedResponse(format!(
                "ожидался объект, получено {}",
                type_name(&other)
            )))
        }
    };

    match response.remove("homeworks") {
        None => Err(PollError::EmptyAnswer("homeworks")),
        Some(Value::Array(homeworks)) => Ok(homeworks),
        Some(other) => Err(PollError::MalformedResponse(format!(
            "\"homeworks\" должен быть списком, получено {}",
            type_name(&other)
        ))),
    }
}

/// Turn the most recent submission into a chat message.
///
/// The API lists submissions newest first; only the first one is looked at.
pub fn describe_latest(homeworks: &[Value]) -> Result<String, PollError> {
    match homeworks.first() {
        Some(latest) => parse_submission(latest).map(|submission| submission.status_message()),
        None => Ok(NO_NEW_STATUS.to_string()),
    }
}

pub fn parse_submission(homework: &Value) -> Result<Submission, PollError> {
    let homework = homework
        .as_object()
        .ok_or_else(|| PollError::malformed("элемент \"homeworks\" не является объектом"))?;

    let status = homework
        .get("status")
        .ok_or(PollError::EmptyAnswer("status"))?
        .as_str()
        .ok_or_else(|| PollError::malformed("\"status\" должен быть строкой"))?;
    let verdict =
        Verdict::from_code(status).ok_or_else(|| PollError::UnknownVerdict(status.to_string()))?;

    let homework_name = homework
        .get("homework_name")
        .ok_or(PollError::EmptyAnswer("homework_name"))?
        .as_str()
        .ok_or_else(|| PollError::malformed("\"homework_name\" должен быть строкой"))?;

    tracing::debug!(status = verdict.code(), homework_name, "Latest submission");

    Ok(Submission {
        homework_name: homework_name.to_string(),
        verdict,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "число",
        Value::String(_) => "строка",
        Value::Array(_) => "список",
        Value::Object(_) => "объект",
    }
}
