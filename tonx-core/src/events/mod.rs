//! Event system for the session pipeline.
//!
//! # Message flow
//!
//! 1. Presentation layer sends `SessionRequest` -> `SessionRunner`
//! 2. `SessionRunner` emits `SessionEvent` -> presentation layer
//!
//! Requests are commands; events are facts. The runner is the only
//! component that mutates session state.

pub mod channels;
pub mod types;

pub use channels::{
    DEFAULT_CHANNEL_BUFFER, SessionEventReceiver, SessionEventSender, SessionRequestReceiver,
    SessionRequestSender, session_event_channel, session_request_channel,
};

pub use types::{SessionEvent, SessionRequest};
