use crate::errors::PollError;

pub const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// State carried from one tick to the next. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request, unix seconds.
    pub cursor: i64,
    /// Last message that was actually delivered.
    pub last_message: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: None,
        }
    }

    pub fn starting_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    pub fn is_new(&self, message: &str) -> bool {
        self.last_message.as_deref() != Some(message)
    }
}

/// What a tick decided to do about its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Notified,
    Unchanged,
    DeliveryFailed,
}

pub fn failure_message(err: &PollError) -> String {
    format!("{FAILURE_PREFIX}{err}")
}
