use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::CivilDate;

/// A dated backend record shown on the dashboard: an appointment, a payment,
/// a treatment entry. The core never interprets anything beyond the date and
/// the status; `details` is carried through untouched for the presentation
/// layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatedRecord {
    pub id: i32,
    /// The record's civil date; for payment records this is the due date.
    pub date: CivilDate,
    pub status: RecordStatus,
    /// Optional opaque payload rendered by the shell (patient name, amount, …).
    pub details: Option<Value>,
}

impl DatedRecord {
    #[must_use]
    pub fn new(id: i32, date: CivilDate, status: RecordStatus) -> Self {
        Self {
            id,
            date,
            status,
            details: None,
        }
    }
}

/// Status attached to a dated record by the backend.
///
/// Only `Paid` and `Cancelled` influence the core algorithms; every other
/// backend status is passed through, unknown ones as `Other`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RecordStatus {
    Pending,
    Paid,
    Cancelled,
    Other(String),
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Pending => write!(f, "Pending"),
            RecordStatus::Paid => write!(f, "Paid"),
            RecordStatus::Cancelled => write!(f, "Cancelled"),
            RecordStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for RecordStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => RecordStatus::Pending,
            "Paid" => RecordStatus::Paid,
            "Cancelled" => RecordStatus::Cancelled,
            _ => RecordStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for RecordStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
