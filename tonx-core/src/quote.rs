//! Conversion calculator.
//!
//! Pure USD-to-TON conversion against the static exchange rate. The
//! service fee is deducted from the token side, so the quoted token
//! amount is what the payer actually sends.

use crate::config::CheckoutConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal places of a quoted token amount (TON nano precision cut to 6).
pub const TOKEN_SCALE: u32 = 6;

/// Decimal places of a quoted USD amount.
pub const USD_SCALE: u32 = 2;

/// Validation errors for a conversion request.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteError {
    /// The USD amount is below the configured minimum.
    #[error("minimum amount is ${minimum}")]
    BelowMinimum { minimum: Decimal },

    /// The USD amount is above the configured maximum.
    #[error("maximum amount is ${maximum}")]
    AboveMaximum { maximum: Decimal },
}

/// A priced conversion: what the payer sends and what the merchant receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// USD amount, rescaled to [`USD_SCALE`] places.
    pub usd_amount: Decimal,
    /// TON amount after fee deduction, rescaled to [`TOKEN_SCALE`] places.
    pub token_amount: Decimal,
}

/// Price a USD amount against the configured rate and fee.
///
/// Returns `(usd / exchange_rate) * (1 - service_fee_rate)` rounded to
/// [`TOKEN_SCALE`] decimal places. Rejects amounts outside the configured
/// `[min_amount_usd, max_amount_usd]` range (bounds inclusive).
pub fn quote(usd_amount: Decimal, config: &CheckoutConfig) -> Result<Quote, QuoteError> {
    if usd_amount < config.min_amount_usd {
        return Err(QuoteError::BelowMinimum {
            minimum: config.min_amount_usd,
        });
    }
    if usd_amount > config.max_amount_usd {
        return Err(QuoteError::AboveMaximum {
            maximum: config.max_amount_usd,
        });
    }

    // Config validation guarantees exchange_rate > 0.
    let mut token_amount =
        (usd_amount / config.exchange_rate * (Decimal::ONE - config.service_fee_rate))
            .round_dp(TOKEN_SCALE);
    token_amount.rescale(TOKEN_SCALE);

    let mut usd_amount = usd_amount.round_dp(USD_SCALE);
    usd_amount.rescale(USD_SCALE);

    Ok(Quote {
        usd_amount,
        token_amount,
    })
}
