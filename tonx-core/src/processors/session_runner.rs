//! SessionRunner processor.
//!
//! The SessionRunner is responsible for:
//! - Receiving `SessionRequest` messages from the presentation layer
//! - Owning the single active `PaymentSession` and its one-second interval
//! - Emitting `SessionEvent` messages (started, countdown, expired, closed)
//! - Dropping the interval whenever the session leaves `Active`, so no
//!   tick is observable after a terminal transition
//!
//! At most one session is active at a time. A `Start` while a session is
//! already active closes the old session and drops its interval before the
//! new countdown begins, so a stale interval can never keep firing behind
//! a replacement session.

use crate::config::CheckoutConfig;
use crate::events::{SessionEvent, SessionEventSender, SessionRequest, SessionRequestReceiver};
use crate::session::{PaymentSession, SessionStatus};
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Countdown tick period.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// SessionRunner drives the payment-session countdown.
pub struct SessionRunner {
    config: CheckoutConfig,
    event_tx: SessionEventSender,
}

impl SessionRunner {
    /// Create a new SessionRunner.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated checkout configuration
    /// * `event_tx` - Sender for SessionEvent messages
    pub fn new(config: CheckoutConfig, event_tx: SessionEventSender) -> Self {
        Self { config, event_tx }
    }

    /// Run the SessionRunner until shutdown is signaled.
    ///
    /// The session and its interval live on this task only, so every
    /// mutation happens on a single logical timeline and no locking is
    /// needed.
    pub async fn run(
        self,
        mut shutdown_rx: watch::Receiver<bool>,
        mut request_rx: SessionRequestReceiver,
    ) {
        let mut session: Option<PaymentSession> = None;
        let mut countdown: Option<Interval> = None;

        info!("SessionRunner started");

        loop {
            tokio::select! {
                biased;

                // Check for shutdown
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        info!("SessionRunner received shutdown signal");
                        break;
                    }
                }

                // Receive requests from the presentation layer
                Some(request) = request_rx.recv() => {
                    match request {
                        SessionRequest::Start { usd_amount } => {
                            self.handle_start(usd_amount, &mut session, &mut countdown).await;
                        }
                        SessionRequest::Close => {
                            self.handle_close(&mut session, &mut countdown).await;
                        }
                    }
                }

                // One second elapsed on the active countdown
                _ = next_tick(countdown.as_mut()) => {
                    self.handle_tick(&mut session, &mut countdown).await;
                }

                else => {
                    info!("SessionRequest channel closed");
                    break;
                }
            }
        }

        info!("SessionRunner shutdown complete");
    }

    /// Handle a `Start` request.
    async fn handle_start(
        &self,
        usd_amount: Decimal,
        session: &mut Option<PaymentSession>,
        countdown: &mut Option<Interval>,
    ) {
        // Replace policy: close the in-flight session and drop its interval
        // before the new countdown starts.
        if let Some(existing) = session.as_mut() {
            if existing.close() {
                info!(
                    session_id = %existing.id(),
                    "Closing active session before starting a new one"
                );
                self.emit(SessionEvent::Closed {
                    session_id: existing.id(),
                })
                .await;
            }
        }
        *countdown = None;
        *session = None;

        match PaymentSession::start(usd_amount, &self.config) {
            Ok(new_session) => {
                let snapshot = new_session.snapshot();
                info!(
                    session_id = %new_session.id(),
                    usd_amount = %snapshot.usd_amount,
                    token_amount = %snapshot.token_amount,
                    timeout_secs = snapshot.timeout_secs,
                    "Payment session started"
                );
                self.emit(SessionEvent::Started(snapshot)).await;
                *countdown = Some(one_second_interval());
                *session = Some(new_session);
            }
            Err(reason) => {
                warn!(
                    usd_amount = %usd_amount,
                    error = %reason,
                    "Rejected payment request"
                );
                self.emit(SessionEvent::Rejected { reason }).await;
            }
        }
    }

    /// Handle a `Close` request.
    async fn handle_close(
        &self,
        session: &mut Option<PaymentSession>,
        countdown: &mut Option<Interval>,
    ) {
        if let Some(active) = session.as_mut() {
            if active.close() {
                info!(session_id = %active.id(), "Payment session closed");
                self.emit(SessionEvent::Closed {
                    session_id: active.id(),
                })
                .await;
            }
        }
        *countdown = None;
        *session = None;
    }

    /// Handle one elapsed second on the countdown.
    async fn handle_tick(
        &self,
        session: &mut Option<PaymentSession>,
        countdown: &mut Option<Interval>,
    ) {
        let Some(active) = session.as_mut() else {
            // An interval without a session is a stale handle.
            *countdown = None;
            return;
        };

        match active.tick() {
            Ok(tick) => {
                debug!(
                    session_id = %active.id(),
                    remaining_secs = tick.remaining_secs,
                    "Countdown tick"
                );
                self.emit(SessionEvent::Countdown {
                    session_id: active.id(),
                    remaining_secs: tick.remaining_secs,
                    progress: tick.progress,
                    low_time: tick.low_time,
                })
                .await;

                if active.status() == SessionStatus::Expired {
                    info!(session_id = %active.id(), "Payment session expired");
                    self.emit(SessionEvent::Expired {
                        session_id: active.id(),
                    })
                    .await;
                    *countdown = None;
                    *session = None;
                }
            }
            Err(e) => {
                // The interval should have been dropped on the terminal
                // transition, so this indicates a runner bug.
                error!(session_id = %active.id(), error = %e, "Tick on a terminal session");
                *countdown = None;
            }
        }
    }

    /// Emit a SessionEvent to the presentation layer.
    async fn emit(&self, event: SessionEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            warn!(error = %e, "Failed to send SessionEvent, receiver dropped");
        }
    }
}

/// Build the one-second countdown interval.
///
/// The first tick fires one period after creation, not immediately, and a
/// delayed tick pushes the schedule back instead of bursting to catch up,
/// so `remaining_secs` never jumps by more than one per observed tick.
fn one_second_interval() -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Wait for the next countdown tick, or forever if no countdown is running.
async fn next_tick(countdown: Option<&mut Interval>) {
    match countdown {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
