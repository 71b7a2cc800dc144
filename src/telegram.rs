pub mod client;
pub mod types;

use crate::errors::NotifyError;
use std::future::Future;

pub use client::TelegramClient;

/// Delivers plain-text messages to the student.
pub trait Notifier {
    fn send_text(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

impl<T: Notifier> Notifier for &T {
    fn send_text(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send {
        (**self).send_text(text)
    }
}
