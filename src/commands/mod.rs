//! Command implementations

pub mod reset;
pub mod share;
pub mod simple;

pub use reset::reset_day;
pub use share::saved_share_message;
pub use simple::run_simple;
