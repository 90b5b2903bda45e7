//! Event processors.
//!
//! - `SessionRunner`: Receives `SessionRequest`, owns the active session
//!   and its countdown interval, emits `SessionEvent`

pub mod session_runner;

pub use session_runner::SessionRunner;
