//! Subtotal / discount / amount due shown in the invoice details modal.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use invoicedash_core::ValueObject;

use crate::model::InvoiceLineItem;

/// Discount applied when no explicit rate is given: 2.5% of the subtotal.
pub const DEFAULT_DISCOUNT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Minor-unit precision used when totals are displayed (USD cents).
pub const CURRENCY_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub amount_due: Decimal,
}

impl ValueObject for InvoiceTotals {}

impl InvoiceTotals {
    /// Round every figure to cents, half away from zero.
    pub fn rounded(&self) -> Self {
        let round = |d: Decimal| {
            d.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        };
        Self {
            subtotal: round(self.subtotal),
            discount: round(self.discount),
            amount_due: round(self.amount_due),
        }
    }
}

/// [`compute_totals_with_rate`] at [`DEFAULT_DISCOUNT_RATE`].
pub fn compute_totals(items: &[InvoiceLineItem]) -> InvoiceTotals {
    compute_totals_with_rate(items, DEFAULT_DISCOUNT_RATE)
}

/// Compute the totals of one invoice.
///
/// The subtotal is the sum of `unit_price` alone; `quantity` and the stored
/// `total_price` are not used. The summary display depends on this figure, so
/// it must not be "corrected" to quantity × price here.
///
/// Accumulates at full precision (see [`InvoiceTotals::rounded`] for display)
/// and saturates instead of overflowing. Negative prices are summed as given.
pub fn compute_totals_with_rate(items: &[InvoiceLineItem], discount_rate: Decimal) -> InvoiceTotals {
    let subtotal = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.unit_price));
    let discount = subtotal.saturating_mul(discount_rate);
    let amount_due = subtotal.saturating_sub(discount);

    InvoiceTotals {
        subtotal,
        discount,
        amount_due,
    }
}
