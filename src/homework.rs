pub mod check;
pub mod client;
pub mod types;

pub use client::{HomeworkApi, PracticumClient};
