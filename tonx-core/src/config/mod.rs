//! Configuration types for the checkout core.
//!
//! These types represent the validated runtime configuration shared across
//! crates. The actual config loading/parsing is handled by the CLI crate.

mod checkout;

pub use checkout::{CheckoutConfig, ConfigError};
