use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Months in the figures series the backend supplies.
pub const MONTHS_PER_YEAR: usize = 12;

/// Months covered by the semester chart window.
pub const SEMESTER_MONTHS: usize = 6;

/// Months covered by the quarter chart window.
pub const QUARTER_MONTHS: usize = 3;

/// One week's share of a month's figures, `week_index` within 1..=5.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeekBucket {
    pub week_index: usize,
    pub amount: f64,
}

/// One month of figures as supplied by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAmount {
    /// Zero-based calendar position, 0 = January.
    pub month_index: usize,
    /// Localized month label, passed through to the chart unchanged.
    pub month_name: String,
    pub amount: f64,
    /// Weekly breakdown, when the backend provides one.
    pub weeks: Option<Vec<WeekBucket>>,
}

impl MonthlyAmount {
    #[must_use]
    pub fn new(month_index: usize, month_name: impl Into<String>, amount: f64) -> Self {
        Self {
            month_index,
            month_name: month_name.into(),
            amount,
            weeks: None,
        }
    }
}

/// Which window of the year the revenue chart shows.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSelector {
    Year,
    Semester,
    Quarter,
    Month,
}

impl Display for PeriodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodSelector::Year => write!(f, "year"),
            PeriodSelector::Semester => write!(f, "semester"),
            PeriodSelector::Quarter => write!(f, "quarter"),
            PeriodSelector::Month => write!(f, "month"),
        }
    }
}

/// Label/value series handed to the chart renderer.
///
/// `labels` and `values` are parallel and always the same length; amounts are
/// passed through unrounded, formatting is the renderer's concern.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
