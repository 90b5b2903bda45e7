//! Event type definitions for the session pipeline.
//!
//! Requests flow from the presentation layer into the
//! [`SessionRunner`](crate::processors::SessionRunner); events flow back
//! out. Events carry the derived countdown values so the presentation
//! layer never has to reach into the session itself.

use crate::quote::QuoteError;
use crate::session::SessionSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requests from the presentation layer to the session runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequest {
    /// Create a payment session for a USD amount.
    ///
    /// If a session is already active it is closed (with a
    /// [`SessionEvent::Closed`]) before the new one starts.
    Start { usd_amount: Decimal },
    /// Close the active session, if any.
    Close,
}

/// Events emitted by the session runner for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A session was created and its countdown started.
    Started(SessionSnapshot),
    /// One second elapsed on the active session.
    Countdown {
        session_id: Uuid,
        /// Seconds left on the countdown.
        remaining_secs: u32,
        /// `remaining / timeout`, in `[0, 1]`, for progress bars.
        progress: f64,
        /// Remaining time dropped below the urgency threshold.
        low_time: bool,
    },
    /// The countdown reached zero; the session is terminal.
    Expired { session_id: Uuid },
    /// The session was closed by request; the session is terminal.
    Closed { session_id: Uuid },
    /// A `Start` request failed validation; no session was created.
    Rejected { reason: QuoteError },
}
