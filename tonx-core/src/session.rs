//! Payment session state machine.
//!
//! A session is one user-initiated payment request and its countdown.
//! It starts `Active` and ends in exactly one of two terminal states:
//! `Expired` when the countdown reaches zero, or `Closed` when the user
//! abandons it. The session itself is clock-free; something else (the
//! [`SessionRunner`](crate::processors::SessionRunner)) calls [`tick`]
//! once per second.
//!
//! [`tick`]: PaymentSession::tick

use crate::config::CheckoutConfig;
use crate::quote::{Quote, QuoteError, quote};
use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Remaining seconds below which the countdown is considered urgent.
pub const LOW_TIME_THRESHOLD_SECS: u32 = 60;

/// Contract violations on a [`PaymentSession`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `tick` was called on a session that already reached a terminal state.
    #[error("session is {status:?}, expected Active")]
    InvalidState { status: SessionStatus },
}

/// Lifecycle state of a payment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Counting down, payment still possible.
    Active,
    /// The countdown reached zero.
    Expired,
    /// The user abandoned the session.
    Closed,
}

impl SessionStatus {
    /// Whether this status is terminal (`Expired` or `Closed`).
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }
}

/// Per-tick countdown readout, derived for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownTick {
    /// Seconds left on the session.
    pub remaining_secs: u32,
    /// `remaining / timeout`, in `[0, 1]`, for progress bars.
    pub progress: f64,
    /// Whether the remaining time is below [`LOW_TIME_THRESHOLD_SECS`].
    pub low_time: bool,
}

/// Immutable view of a session at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    /// TON wallet address the payer should send to.
    pub recipient_address: CompactString,
    /// USD amount the merchant receives.
    pub usd_amount: Decimal,
    /// TON amount the payer sends, after fee deduction.
    pub token_amount: Decimal,
    /// Total countdown length in seconds.
    pub timeout_secs: u32,
    /// Unix timestamp of session creation.
    pub created_at: i64,
}

/// One user-initiated payment request and its countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    id: Uuid,
    recipient_address: CompactString,
    quote: Quote,
    timeout_secs: u32,
    remaining_secs: u32,
    created_at: time::OffsetDateTime,
    status: SessionStatus,
}

impl PaymentSession {
    /// Start a new session for a USD amount.
    ///
    /// Validates and prices the amount via [`quote`]; on success the session
    /// is `Active` with the full configured timeout remaining.
    pub fn start(usd_amount: Decimal, config: &CheckoutConfig) -> Result<Self, QuoteError> {
        let quote = quote(usd_amount, config)?;
        Ok(Self {
            id: Uuid::new_v4(),
            recipient_address: config.recipient_address.clone(),
            quote,
            timeout_secs: config.payment_timeout_secs,
            remaining_secs: config.payment_timeout_secs,
            created_at: time::OffsetDateTime::now_utc(),
            status: SessionStatus::Active,
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Only valid on an `Active` session; the state machine never moves out
    /// of a terminal state, so a tick after `Expired`/`Closed` is a caller
    /// bug and reported as [`SessionError::InvalidState`]. When the
    /// countdown reaches zero the session transitions to `Expired`.
    pub fn tick(&mut self) -> Result<CountdownTick, SessionError> {
        if self.status != SessionStatus::Active {
            return Err(SessionError::InvalidState {
                status: self.status,
            });
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.status = SessionStatus::Expired;
        }

        Ok(CountdownTick {
            remaining_secs: self.remaining_secs,
            progress: self.progress(),
            low_time: self.low_time(),
        })
    }

    /// Close the session.
    ///
    /// Returns `true` if the session transitioned to `Closed`, `false` if it
    /// was already terminal (idempotent no-op).
    pub fn close(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = SessionStatus::Closed;
        true
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Seconds left on the countdown.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Fraction of the countdown still remaining, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining_secs) / f64::from(self.timeout_secs)
    }

    /// Whether the remaining time is below [`LOW_TIME_THRESHOLD_SECS`].
    pub fn low_time(&self) -> bool {
        self.remaining_secs < LOW_TIME_THRESHOLD_SECS
    }

    /// Immutable creation-time view for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            recipient_address: self.recipient_address.clone(),
            usd_amount: self.quote.usd_amount,
            token_amount: self.quote.token_amount,
            timeout_secs: self.timeout_secs,
            created_at: self.created_at.unix_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::CheckoutConfig;

    fn config(timeout_secs: u32) -> CheckoutConfig {
        CheckoutConfig::new(
            "UQDtFpEwcFAEcRe5mLVh2N6C0x-_hJEM7W61_JLnSF74p4q2",
            Decimal::new(250, 2),
            Decimal::new(5, 3),
            timeout_secs,
            Decimal::new(10, 0),
            Decimal::new(10_000, 0),
        )
        .unwrap()
    }

    #[test]
    fn start_validates_amount() {
        let err = PaymentSession::start(Decimal::new(5, 0), &config(900)).unwrap_err();
        assert!(matches!(err, QuoteError::BelowMinimum { .. }));
    }

    #[test]
    fn start_fills_full_timeout() {
        let session = PaymentSession::start(Decimal::new(100, 0), &config(900)).unwrap();
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.remaining_secs(), 900);
        assert_eq!(session.progress(), 1.0);
        assert!(!session.low_time());
    }

    #[test]
    fn tick_counts_down_by_one() {
        let mut session = PaymentSession::start(Decimal::new(100, 0), &config(900)).unwrap();
        let tick = session.tick().unwrap();
        assert_eq!(tick.remaining_secs, 899);
        assert_eq!(session.remaining_secs(), 899);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn expires_after_exactly_timeout_ticks() {
        let mut session = PaymentSession::start(Decimal::new(100, 0), &config(3)).unwrap();
        assert_eq!(session.tick().unwrap().remaining_secs, 2);
        assert_eq!(session.tick().unwrap().remaining_secs, 1);
        let last = session.tick().unwrap();
        assert_eq!(last.remaining_secs, 0);
        assert_eq!(session.status(), SessionStatus::Expired);

        // No further tick has any effect.
        let err = session.tick().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidState {
                status: SessionStatus::Expired
            }
        );
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn close_is_immediate_and_idempotent() {
        let mut session = PaymentSession::start(Decimal::new(100, 0), &config(900)).unwrap();
        assert!(session.close());
        assert_eq!(session.status(), SessionStatus::Closed);

        // Second close and later ticks are no-ops.
        assert!(!session.close());
        assert!(session.tick().is_err());
        assert_eq!(session.status(), SessionStatus::Closed);
    }

    #[test]
    fn close_does_not_resurrect_expired_session() {
        let mut session = PaymentSession::start(Decimal::new(100, 0), &config(1)).unwrap();
        session.tick().unwrap();
        assert_eq!(session.status(), SessionStatus::Expired);
        assert!(!session.close());
        assert_eq!(session.status(), SessionStatus::Expired);
    }

    #[test]
    fn low_time_flag_trips_below_one_minute() {
        let mut session = PaymentSession::start(Decimal::new(100, 0), &config(61)).unwrap();
        let tick = session.tick().unwrap();
        assert_eq!(tick.remaining_secs, 60);
        assert!(!tick.low_time);
        let tick = session.tick().unwrap();
        assert_eq!(tick.remaining_secs, 59);
        assert!(tick.low_time);
    }

    #[test]
    fn snapshot_carries_quote_and_address() {
        let session = PaymentSession::start(Decimal::new(100, 0), &config(900)).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.session_id, session.id());
        assert_eq!(snapshot.token_amount.to_string(), "39.800000");
        assert_eq!(snapshot.usd_amount.to_string(), "100.00");
        assert_eq!(snapshot.timeout_secs, 900);
    }
}
