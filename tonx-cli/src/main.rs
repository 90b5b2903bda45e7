//! TON Exchange checkout CLI.
//!
//! Creates a payment request for a USD amount and renders the countdown
//! until the payment window expires or the user closes it with Ctrl+C.

mod config;
mod render;
mod shutdown;

use clap::Parser;
use config::ConfigLoader;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tokio::sync::watch;
use tonx_core::events::{
    SessionEvent, SessionRequest, session_event_channel, session_request_channel,
};
use tonx_core::processors::SessionRunner;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// TON Exchange - create a TON payment request for a USD amount
#[derive(Parser, Debug)]
#[command(name = "tonx")]
#[command(version, about, long_about = None)]
struct Args {
    /// USD amount to convert into a TON payment request
    amount: Decimal,

    /// Path to the configuration file
    #[arg(short, long, default_value = "./tonx-config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::info!("Starting tonx v{}", env!("CARGO_PKG_VERSION"));

    let config_loader = ConfigLoader::new(&args.config);
    let checkout_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!("Configuration loaded from {:?}", args.config);

    render::rate_line(checkout_config.exchange_rate);

    // Wire the presentation side to the session runner.
    let (request_tx, request_rx) = session_request_channel();
    let (event_tx, mut event_rx) = session_event_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let runner = SessionRunner::new(checkout_config, event_tx);
    let runner_handle = tokio::spawn(runner.run(shutdown_rx, request_rx));

    request_tx
        .send(SessionRequest::Start {
            usd_amount: args.amount,
        })
        .await?;

    let signal = shutdown::shutdown_signal();
    tokio::pin!(signal);
    let mut closing = false;
    let mut rejected = None;

    loop {
        tokio::select! {
            _ = &mut signal, if !closing => {
                closing = true;
                request_tx.send(SessionRequest::Close).await?;
            }

            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    SessionEvent::Started(snapshot) => {
                        render::payment_request(&snapshot);
                    }
                    SessionEvent::Countdown { remaining_secs, progress, low_time, .. } => {
                        render::countdown_line(remaining_secs, progress, low_time);
                    }
                    SessionEvent::Expired { session_id } => {
                        tracing::info!(%session_id, "Payment window expired");
                        render::final_line("Payment time has expired. Please create a new payment.");
                        break;
                    }
                    SessionEvent::Closed { session_id } => {
                        tracing::info!(%session_id, "Payment session closed");
                        render::final_line("Payment session closed.");
                        break;
                    }
                    SessionEvent::Rejected { reason } => {
                        render::final_line(&format!("Cannot create payment: {reason}"));
                        rejected = Some(reason);
                        break;
                    }
                }
            }
        }
    }

    // Stop the runner and wait for it to drain.
    let _ = shutdown_tx.send(true);
    runner_handle.await?;

    if let Some(reason) = rejected {
        return Err(reason.into());
    }
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
