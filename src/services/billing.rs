//! Due-date classification for payment records.

use crate::domain::billing::{DueClassification, DueSummary};
use crate::domain::record::{DatedRecord, RecordStatus};
use crate::domain::types::CivilDate;

/// Days ahead of the due date during which a pending record is flagged as
/// approaching.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Classifies `record` against the caller-supplied `now`.
///
/// Status wins over timing: a paid or cancelled record keeps that
/// classification no matter how its due date relates to `now`, and its
/// `days_until_due` stays empty. Every other record is classified by the
/// signed civil-day distance from `now` to the due date, so an overdue
/// record stays overdue regardless of the hour it is inspected at.
pub fn classify_due(record: &DatedRecord, now: CivilDate) -> DueSummary {
    match &record.status {
        RecordStatus::Paid => {
            return DueSummary {
                classification: DueClassification::Paid,
                days_until_due: None,
            };
        }
        RecordStatus::Cancelled => {
            return DueSummary {
                classification: DueClassification::Cancelled,
                days_until_due: None,
            };
        }
        RecordStatus::Pending | RecordStatus::Other(_) => {}
    }

    let days = now.days_until(record.date);
    let classification = if days < 0 {
        DueClassification::Overdue
    } else if days == 0 {
        DueClassification::DueToday
    } else if days <= DUE_SOON_WINDOW_DAYS {
        DueClassification::DueSoon
    } else {
        DueClassification::Pending
    };

    DueSummary {
        classification,
        days_until_due: Some(days),
    }
}
