//! Month grid construction for the appointments calendar.

use std::collections::HashMap;

use crate::domain::calendar::{CalendarDay, CalendarGrid, GRID_CELLS};
use crate::domain::record::DatedRecord;
use crate::domain::types::{CivilDate, TemporalResult, YearMonth};

/// Builds the fixed 42-cell grid for `month`.
///
/// The grid opens with the previous month's trailing days up to the Sunday
/// before day 1, covers the whole target month, and fills the remainder with
/// the following month's leading days, so every month renders as six uniform
/// rows. `records` are attached to the cell matching their civil date; a
/// record dated outside the 42-day window is simply not shown. `is_today` is
/// set by plain (year, month, day) equality with the caller-supplied `today`.
pub fn build_grid(
    month: YearMonth,
    records: &[DatedRecord],
    today: CivilDate,
) -> TemporalResult<CalendarGrid> {
    let mut by_date: HashMap<CivilDate, Vec<DatedRecord>> = HashMap::new();
    for record in records {
        by_date.entry(record.date).or_default().push(record.clone());
    }

    let first = month.first_day();
    let leading = u64::from(first.weekday_index());
    let mut date = first.back(leading)?;

    let mut days = Vec::with_capacity(GRID_CELLS);
    for cell in 0..GRID_CELLS {
        days.push(CalendarDay {
            date,
            is_current_month: date.year() == month.year() && date.month() == month.month(),
            is_today: date == today,
            records: by_date.remove(&date).unwrap_or_default(),
        });
        if cell + 1 < GRID_CELLS {
            date = date.succ()?;
        }
    }

    Ok(CalendarGrid { month, days })
}
