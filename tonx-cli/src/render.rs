//! Terminal rendering of the payment request and countdown.

use rust_decimal::Decimal;
use std::io::Write;
use tonx_core::session::SessionSnapshot;
use tonx_core::utils::format_mmss;

/// Print the static rate line shown before any payment is created.
pub fn rate_line(exchange_rate: Decimal) {
    println!("1 TON = ${exchange_rate}");
}

/// Print the payment request card for a freshly started session.
pub fn payment_request(snapshot: &SessionSnapshot) {
    println!();
    println!("Payment request {}", snapshot.session_id);
    println!("  Send:    {} TON", snapshot.token_amount);
    println!("  Receive: ${}", snapshot.usd_amount);
    println!("  To:      {}", snapshot.recipient_address);
    println!();
}

/// Redraw the countdown line in place.
///
/// Uses a carriage return so each tick overwrites the previous line.
pub fn countdown_line(remaining_secs: u32, progress: f64, low_time: bool) {
    let marker = if low_time { "  [!] time running out" } else { "" };
    print!(
        "\r  Time remaining: {}  ({:>3.0}%){}",
        format_mmss(remaining_secs),
        progress * 100.0,
        marker
    );
    let _ = std::io::stdout().flush();
}

/// Terminate the countdown line and print a final status message.
pub fn final_line(message: &str) {
    println!();
    println!("{message}");
}
