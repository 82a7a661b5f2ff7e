//! Invoice details modal: line items, totals, payment details, reminders.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use invoicedash_core::{DomainError, InvoiceId};
use invoicedash_invoicing::{
    InvoiceLineItem, InvoiceRecord, InvoiceStatus, InvoiceTotals, PaymentInformation,
    compute_totals_with_rate, format_long_date, initials,
};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::source::InvoiceSource;

/// Payment reminders, as days before the due date.
pub const REMINDER_SCHEDULE: [(u64, &str); 4] = [
    (14, "14 days before due date"),
    (7, "7 days before due date"),
    (3, "3 days before due date"),
    (1, "24 hours before due date"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub label: &'static str,
    pub send_on: NaiveDate,
    /// Send date is on or before `today`.
    pub sent: bool,
}

pub fn reminders(due_date: NaiveDate, today: NaiveDate) -> Vec<Reminder> {
    REMINDER_SCHEDULE
        .iter()
        .filter_map(|&(days, label)| {
            let send_on = due_date.checked_sub_days(Days::new(days))?;
            Some(Reminder {
                label,
                send_on,
                sent: send_on <= today,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetails {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub recipient_name: String,
    pub recipient_initials: String,
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_date_label: Option<String>,
    pub notes: Option<String>,
    /// Shown verbatim, including any `total_price` that disagrees with
    /// quantity × unit price.
    pub items: Vec<InvoiceLineItem>,
    pub totals: InvoiceTotals,
    pub payment_information: Option<PaymentInformation>,
    pub reminders: Vec<Reminder>,
}

impl InvoiceDetails {
    pub fn from_record(record: &InvoiceRecord, discount_rate: Decimal, today: NaiveDate) -> Self {
        Self {
            id: record.id,
            invoice_number: record.invoice_number.clone(),
            status: record.status.clone(),
            recipient_name: record.recipient_name.clone(),
            recipient_initials: initials(&record.recipient_name),
            recipient_email: record.recipient_email.clone(),
            recipient_phone: record.recipient_phone.clone(),
            due_date: record.due_date,
            due_date_label: record.due_date.map(format_long_date),
            notes: record.notes.clone(),
            items: record.invoice_items.clone(),
            totals: compute_totals_with_rate(&record.invoice_items, discount_rate),
            payment_information: record.payment_information.clone(),
            reminders: record
                .due_date
                .map(|due| reminders(due, today))
                .unwrap_or_default(),
        }
    }
}

/// Look up one invoice and build its details view.
pub fn load_details<S>(
    source: &S,
    id: &InvoiceId,
    config: &DashboardConfig,
    today: NaiveDate,
) -> Result<InvoiceDetails, DashboardError>
where
    S: InvoiceSource + ?Sized,
{
    let record = source.get(id)?.ok_or_else(DomainError::not_found)?;
    Ok(InvoiceDetails::from_record(&record, config.discount_rate, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::source::InMemoryInvoiceSource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice() -> InvoiceRecord {
        let mut record = InvoiceRecord::new("INV-001", "unpaid", 10000_i64);
        record.recipient_name = "John Doe".to_string();
        record.recipient_email = Some("john@example.com".to_string());
        record.due_date = Some(date(2025, 10, 15));
        record.invoice_items = vec![
            InvoiceLineItem::new("Web Development", dec!(2), dec!(3000), dec!(6000)),
            InvoiceLineItem::new("Design Services", dec!(1), dec!(4000), dec!(4000)),
        ];
        record
    }

    #[test]
    fn details_carry_items_and_unit_price_totals() {
        let record = invoice();

        let details = InvoiceDetails::from_record(&record, dec!(0.025), date(2025, 10, 1));

        assert_eq!(details.invoice_number, "INV-001");
        assert_eq!(details.recipient_initials, "JD");
        assert_eq!(details.due_date_label.as_deref(), Some("15 October 2025"));
        assert_eq!(details.items, record.invoice_items);
        assert_eq!(details.items[0].total_price, dec!(6000));
        assert_eq!(details.totals.subtotal, dec!(7000));
        assert_eq!(details.totals.discount, dec!(175));
        assert_eq!(details.totals.amount_due, dec!(6825));
    }

    #[test]
    fn invoice_without_items_has_zero_totals() {
        let mut record = invoice();
        record.invoice_items.clear();

        let details = InvoiceDetails::from_record(&record, dec!(0.025), date(2025, 10, 1));

        assert_eq!(details.totals, InvoiceTotals::default());
    }

    #[test]
    fn reminder_schedule_marks_past_send_dates() {
        let due = date(2025, 10, 15);

        let schedule = reminders(due, date(2025, 10, 8));

        let summary: Vec<_> = schedule.iter().map(|r| (r.send_on, r.sent)).collect();
        assert_eq!(
            summary,
            vec![
                (date(2025, 10, 1), true),
                (date(2025, 10, 8), true),
                (date(2025, 10, 12), false),
                (date(2025, 10, 14), false),
            ]
        );
        assert_eq!(schedule[3].label, "24 hours before due date");
    }

    #[test]
    fn no_due_date_means_no_reminders() {
        let mut record = invoice();
        record.due_date = None;
        let details = InvoiceDetails::from_record(&record, dec!(0.025), date(2025, 10, 1));
        assert!(details.reminders.is_empty());
        assert_eq!(details.due_date_label, None);
    }

    #[test]
    fn load_details_uses_configured_rate() {
        let record = invoice();
        let id = record.id;
        let source = InMemoryInvoiceSource::with_records(vec![record]);
        let config = DashboardConfig {
            discount_rate: dec!(0.10),
            ..DashboardConfig::default()
        };

        let details = load_details(&source, &id, &config, date(2025, 10, 1)).unwrap();

        assert_eq!(details.totals.discount, dec!(700));
        assert_eq!(details.totals.amount_due, dec!(6300));
    }

    #[test]
    fn unknown_invoice_is_not_found() {
        let source = InMemoryInvoiceSource::new();
        let err = load_details(
            &source,
            &InvoiceId::new(),
            &DashboardConfig::default(),
            date(2025, 10, 1),
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Domain(DomainError::NotFound)));
    }
}
