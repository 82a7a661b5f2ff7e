//! Dashboard settings read from the environment.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use invoicedash_invoicing::DEFAULT_DISCOUNT_RATE;

pub const RECENT_LIMIT_ENV: &str = "INVOICEDASH_RECENT_LIMIT";
pub const DISCOUNT_RATE_ENV: &str = "INVOICEDASH_DISCOUNT_RATE";

/// Number of invoices in the "Recent Invoices" list.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub recent_limit: usize,
    /// Fraction of the subtotal taken off in the details view.
    pub discount_rate: Decimal,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values are logged and
    /// replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let recent_limit = match lookup(RECENT_LIMIT_ENV) {
            None => defaults.recent_limit,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(key = RECENT_LIMIT_ENV, value = %raw, "invalid recent limit; using default");
                    defaults.recent_limit
                }
            },
        };

        let discount_rate = match lookup(DISCOUNT_RATE_ENV) {
            None => defaults.discount_rate,
            Some(raw) => match Decimal::from_str(raw.trim()) {
                Ok(rate) if rate >= Decimal::ZERO && rate <= Decimal::ONE => rate,
                _ => {
                    warn!(key = DISCOUNT_RATE_ENV, value = %raw, "discount rate must be within 0..=1; using default");
                    defaults.discount_rate
                }
            },
        };

        Self {
            recent_limit,
            discount_rate,
        }
    }
}
