pub mod runner;
pub mod types;

pub use runner::{start, tick};
pub use types::{PollState, TickOutcome};
