//! Checkout configuration.

use compact_str::CompactString;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating a [`CheckoutConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The recipient address is empty.
    #[error("recipient address must not be empty")]
    EmptyRecipientAddress,

    /// The exchange rate is zero or negative.
    #[error("exchange rate must be positive, got {0}")]
    NonPositiveExchangeRate(Decimal),

    /// The service fee rate is outside `[0, 1)`.
    #[error("service fee rate must be in [0, 1), got {0}")]
    ServiceFeeOutOfRange(Decimal),

    /// The payment timeout is zero.
    #[error("payment timeout must be positive")]
    ZeroPaymentTimeout,

    /// An amount bound is zero or negative.
    #[error("amount bounds must be positive, got min {min} / max {max}")]
    NonPositiveAmountBound { min: Decimal, max: Decimal },

    /// The minimum amount exceeds the maximum.
    #[error("minimum amount {min} exceeds maximum amount {max}")]
    InvertedAmountBounds { min: Decimal, max: Decimal },
}

/// Checkout configuration.
///
/// Loaded once at process start and never mutated afterwards. All money
/// fields are USD decimals except `exchange_rate`, which is the USD price
/// of one TON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// TON wallet address that receives payments.
    pub recipient_address: CompactString,
    /// USD price of one TON.
    pub exchange_rate: Decimal,
    /// Service fee rate deducted from the token amount, in `[0, 1)`.
    pub service_fee_rate: Decimal,
    /// How long a payment session stays open, in seconds.
    pub payment_timeout_secs: u32,
    /// Smallest accepted USD amount.
    pub min_amount_usd: Decimal,
    /// Largest accepted USD amount.
    pub max_amount_usd: Decimal,
}

impl CheckoutConfig {
    /// Build a validated `CheckoutConfig`.
    pub fn new(
        recipient_address: impl Into<CompactString>,
        exchange_rate: Decimal,
        service_fee_rate: Decimal,
        payment_timeout_secs: u32,
        min_amount_usd: Decimal,
        max_amount_usd: Decimal,
    ) -> Result<Self, ConfigError> {
        let recipient_address = recipient_address.into();
        if recipient_address.is_empty() {
            return Err(ConfigError::EmptyRecipientAddress);
        }
        if exchange_rate <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveExchangeRate(exchange_rate));
        }
        if service_fee_rate < Decimal::ZERO || service_fee_rate >= Decimal::ONE {
            return Err(ConfigError::ServiceFeeOutOfRange(service_fee_rate));
        }
        if payment_timeout_secs == 0 {
            return Err(ConfigError::ZeroPaymentTimeout);
        }
        if min_amount_usd <= Decimal::ZERO || max_amount_usd <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveAmountBound {
                min: min_amount_usd,
                max: max_amount_usd,
            });
        }
        if min_amount_usd > max_amount_usd {
            return Err(ConfigError::InvertedAmountBounds {
                min: min_amount_usd,
                max: max_amount_usd,
            });
        }

        Ok(Self {
            recipient_address,
            exchange_rate,
            service_fee_rate,
            payment_timeout_secs,
            min_amount_usd,
            max_amount_usd,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn valid() -> Result<CheckoutConfig, ConfigError> {
        CheckoutConfig::new(
            "UQDtFpEwcFAEcRe5mLVh2N6C0x-_hJEM7W61_JLnSF74p4q2",
            Decimal::new(250, 2),
            Decimal::new(5, 3),
            900,
            Decimal::new(10, 0),
            Decimal::new(10_000, 0),
        )
    }

    #[test]
    fn accepts_valid_config() {
        let config = valid().unwrap();
        assert_eq!(config.payment_timeout_secs, 900);
        assert_eq!(config.exchange_rate, Decimal::new(250, 2));
    }

    #[test]
    fn rejects_empty_address() {
        let err = CheckoutConfig::new(
            "",
            Decimal::new(250, 2),
            Decimal::ZERO,
            900,
            Decimal::ONE,
            Decimal::TEN,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyRecipientAddress);
    }

    #[test]
    fn rejects_zero_rate() {
        let err = CheckoutConfig::new(
            "addr",
            Decimal::ZERO,
            Decimal::ZERO,
            900,
            Decimal::ONE,
            Decimal::TEN,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveExchangeRate(_)));
    }

    #[test]
    fn rejects_full_fee() {
        let err = CheckoutConfig::new(
            "addr",
            Decimal::ONE,
            Decimal::ONE,
            900,
            Decimal::ONE,
            Decimal::TEN,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ServiceFeeOutOfRange(_)));
    }

    #[test]
    fn rejects_negative_fee() {
        let err = CheckoutConfig::new(
            "addr",
            Decimal::ONE,
            Decimal::NEGATIVE_ONE,
            900,
            Decimal::ONE,
            Decimal::TEN,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ServiceFeeOutOfRange(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = CheckoutConfig::new(
            "addr",
            Decimal::ONE,
            Decimal::ZERO,
            0,
            Decimal::ONE,
            Decimal::TEN,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroPaymentTimeout);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = CheckoutConfig::new(
            "addr",
            Decimal::ONE,
            Decimal::ZERO,
            900,
            Decimal::TEN,
            Decimal::ONE,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedAmountBounds { .. }));
    }
}
