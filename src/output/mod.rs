//! Terminal output formatting
//!
//! Display utilities for the line-oriented game, the share message, and share
//! sinks.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{print_outcome, write_board, write_keyboard};
pub use formatters::share_message;
pub use share::{BufferSink, ShareSink, StdoutSink};
