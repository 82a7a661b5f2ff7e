use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Invoice lifecycle stage.
///
/// Rows are expected to carry one of the four known literals. Anything else is
/// kept verbatim in `Other` so it can still be counted under its own key
/// instead of being folded into a known status or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Paid,
    Overdue,
    Other(String),
}

impl InvoiceStatus {
    /// The four statuses the dashboard has summary cards for, in display order.
    pub const KNOWN: [InvoiceStatus; 4] = [
        InvoiceStatus::Overdue,
        InvoiceStatus::Unpaid,
        InvoiceStatus::Paid,
        InvoiceStatus::Draft,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, InvoiceStatus::Other(_))
    }

    /// Uppercase label used on status badges (`PAID`).
    pub fn badge(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Summary card heading (`TOTAL OVERDUE`).
    pub fn overview_title(&self) -> String {
        format!("TOTAL {}", self.badge())
    }
}

impl From<&str> for InvoiceStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "draft" => InvoiceStatus::Draft,
            "unpaid" => InvoiceStatus::Unpaid,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            other => InvoiceStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match InvoiceStatus::from(raw.as_str()) {
            InvoiceStatus::Other(_) => InvoiceStatus::Other(raw),
            known => known,
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(InvoiceStatus::from(s))
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InvoiceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InvoiceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(InvoiceStatus::from(raw))
    }
}
