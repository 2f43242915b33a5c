//! Core abstractions for dolla.
//!
//! Date parsing, record book modes, and the undo/redo session.

mod datetime;
mod mode;
mod session;

pub use datetime::{parse_entry_date, parse_entry_date_from, DEFAULT_DATE_FORMAT};
pub use mode::Mode;
pub use session::Session;
