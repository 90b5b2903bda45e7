//! Event channel factories and handles.
//!
//! Provides factory functions for creating the request/event channels
//! between the presentation layer and the session runner.

use super::types::{SessionEvent, SessionRequest};
use tokio::sync::mpsc;

/// Default buffer size for event channels.
///
/// A countdown produces one event per second, so this is far more buffer
/// than a live consumer ever needs while still bounding memory if the
/// consumer stalls.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Sender handle for SessionRequest messages.
pub type SessionRequestSender = mpsc::Sender<SessionRequest>;
/// Receiver handle for SessionRequest messages.
pub type SessionRequestReceiver = mpsc::Receiver<SessionRequest>;

/// Sender handle for SessionEvent messages.
pub type SessionEventSender = mpsc::Sender<SessionEvent>;
/// Receiver handle for SessionEvent messages.
pub type SessionEventReceiver = mpsc::Receiver<SessionEvent>;

/// Create a new SessionRequest channel.
///
/// Returns a (sender, receiver) pair. Multiple senders can be cloned from
/// the returned sender; the runner owns the single receiver.
pub fn session_request_channel() -> (SessionRequestSender, SessionRequestReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}

/// Create a new SessionEvent channel.
///
/// Returns a (sender, receiver) pair. The runner owns the sender; the
/// presentation layer owns the receiver.
pub fn session_event_channel() -> (SessionEventSender, SessionEventReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}
