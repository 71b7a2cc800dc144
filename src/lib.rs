pub mod app;
pub mod config;
pub mod errors;
pub mod homework;
pub mod observability;
pub mod tasks;
pub mod telegram;
#[cfg(test)]
pub mod test_helpers;

pub use app::{App, StartupError};
