//! TOML file configuration structures.
//!
//! These structs directly map to the `tonx-config.toml` file format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub checkout: CheckoutSection,
}

/// Checkout configuration section.
///
/// Every field except the recipient address has a deployment default.
/// Decimal fields accept either TOML strings (`"2.50"`, exact) or floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSection {
    /// The TON wallet address that receives payments.
    pub recipient_address: String,
    /// USD price of one TON.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: Decimal,
    /// Service fee rate in `[0, 1)`.
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
    /// Payment session timeout in seconds.
    #[serde(default = "default_payment_timeout_secs")]
    pub payment_timeout_secs: u32,
    /// Smallest accepted USD amount.
    #[serde(default = "default_min_amount_usd")]
    pub min_amount_usd: Decimal,
    /// Largest accepted USD amount.
    #[serde(default = "default_max_amount_usd")]
    pub max_amount_usd: Decimal,
}

fn default_exchange_rate() -> Decimal {
    Decimal::new(250, 2) // $2.50
}

fn default_service_fee_rate() -> Decimal {
    Decimal::new(5, 3) // 0.5%
}

fn default_payment_timeout_secs() -> u32 {
    900 // 15 minutes
}

fn default_min_amount_usd() -> Decimal {
    Decimal::new(10, 0)
}

fn default_max_amount_usd() -> Decimal {
    Decimal::new(10_000, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[checkout]
recipient_address = "UQDtFpEwcFAEcRe5mLVh2N6C0x-_hJEM7W61_JLnSF74p4q2"
exchange_rate = "3.10"
service_fee_rate = "0.01"
payment_timeout_secs = 600
min_amount_usd = "5"
max_amount_usd = "500"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.checkout.exchange_rate, Decimal::new(310, 2));
        assert_eq!(config.checkout.payment_timeout_secs, 600);
        assert_eq!(config.checkout.max_amount_usd, Decimal::new(500, 0));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let toml_str = r#"
[checkout]
recipient_address = "UQDtFpEwcFAEcRe5mLVh2N6C0x-_hJEM7W61_JLnSF74p4q2"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.checkout.exchange_rate, Decimal::new(250, 2));
        assert_eq!(config.checkout.service_fee_rate, Decimal::new(5, 3));
        assert_eq!(config.checkout.payment_timeout_secs, 900);
        assert_eq!(config.checkout.min_amount_usd, Decimal::new(10, 0));
        assert_eq!(config.checkout.max_amount_usd, Decimal::new(10_000, 0));
    }

    #[test]
    fn test_missing_address_is_an_error() {
        let toml_str = "[checkout]\n";
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
