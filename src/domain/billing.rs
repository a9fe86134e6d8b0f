use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Badge shown next to a payment record.
///
/// `Paid` and `Cancelled` mirror the record's own status; the remaining four
/// are derived from the due date relative to the caller-supplied "now".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueClassification {
    Paid,
    Cancelled,
    Overdue,
    DueToday,
    DueSoon,
    Pending,
}

impl Display for DueClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueClassification::Paid => write!(f, "Paid"),
            DueClassification::Cancelled => write!(f, "Cancelled"),
            DueClassification::Overdue => write!(f, "Overdue"),
            DueClassification::DueToday => write!(f, "Due today"),
            DueClassification::DueSoon => write!(f, "Due soon"),
            DueClassification::Pending => write!(f, "Pending"),
        }
    }
}

/// Classification plus the signed day count that produced it.
///
/// `days_until_due` is `None` exactly for the two absorbing classifications,
/// where no date arithmetic runs at all.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DueSummary {
    pub classification: DueClassification,
    pub days_until_due: Option<i64>,
}
