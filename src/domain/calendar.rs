use serde::{Deserialize, Serialize};

use crate::domain::record::DatedRecord;
use crate::domain::types::{CivilDate, YearMonth};

/// Number of cells in a month grid: six full Sunday-to-Saturday rows, so the
/// layout never changes height between months.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub date: CivilDate,
    /// False for the leading/trailing padding days of adjacent months.
    pub is_current_month: bool,
    pub is_today: bool,
    /// Records falling on this civil date, in input order.
    pub records: Vec<DatedRecord>,
}

/// A fixed 42-cell month grid.
///
/// Cells are ordered by date, each exactly one civil day after the previous,
/// starting on the Sunday-aligned padding before day 1 of `month`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarGrid {
    pub month: YearMonth,
    pub days: Vec<CalendarDay>,
}
