mod message;
mod stats;
mod stats_state;

pub use message::*;
pub use stats::*;
