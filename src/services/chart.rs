//! Period aggregation for the revenue chart.

use crate::domain::chart::{
    ChartData, MONTHS_PER_YEAR, MonthlyAmount, PeriodSelector, QUARTER_MONTHS, SEMESTER_MONTHS,
    WeekBucket,
};
use crate::domain::types::{
    CivilDate, MAX_WEEKS_PER_MONTH, TemporalError, TemporalResult, YearMonth,
};

/// Aggregates one year of monthly figures into the selected chart window.
///
/// `months` must hold exactly twelve entries in calendar order (index 0 =
/// January); `current_month_index` is the zero-based month the dashboard is
/// anchored on and `now` supplies the year used when weekly figures have to
/// be synthesized. Amounts pass through unrounded.
///
/// The semester and quarter windows wrap within the single-year series: a
/// window reaching back past January reuses the same year's trailing months
/// in place of the previous year's figures. The dashboard only ever holds one
/// year of data, so this stands as part of the chart's contract rather than
/// something to correct here.
pub fn aggregate(
    months: &[MonthlyAmount],
    period: PeriodSelector,
    current_month_index: usize,
    now: CivilDate,
) -> TemporalResult<ChartData> {
    if months.len() != MONTHS_PER_YEAR {
        let err = TemporalError::InvalidLength {
            expected: MONTHS_PER_YEAR,
            actual: months.len(),
        };
        log::error!("Rejecting chart aggregation: {err}");
        return Err(err);
    }
    if current_month_index >= MONTHS_PER_YEAR {
        let err = TemporalError::InvalidMonthIndex(current_month_index);
        log::error!("Rejecting chart aggregation: {err}");
        return Err(err);
    }

    match period {
        PeriodSelector::Year => Ok(full_year(months)),
        PeriodSelector::Semester => Ok(window_back(months, current_month_index, SEMESTER_MONTHS)),
        PeriodSelector::Quarter => Ok(window_back(months, current_month_index, QUARTER_MONTHS)),
        PeriodSelector::Month => month_weeks(&months[current_month_index], current_month_index, now),
    }
}

/// The twelve months in calendar order, unchanged.
fn full_year(months: &[MonthlyAmount]) -> ChartData {
    let mut chart = ChartData::with_capacity(months.len());
    for month in months {
        chart.push(month.month_name.clone(), month.amount);
    }
    chart
}

/// The `steps` months ending at `current_month_index`, in chronological
/// order, wrapping within the single-year series.
fn window_back(months: &[MonthlyAmount], current_month_index: usize, steps: usize) -> ChartData {
    let mut chart = ChartData::with_capacity(steps);
    for i in (0..steps).rev() {
        let index = (current_month_index + MONTHS_PER_YEAR - i) % MONTHS_PER_YEAR;
        let month = &months[index];
        chart.push(month.month_name.clone(), month.amount);
    }
    chart
}

/// Weekly series for the anchored month.
///
/// Uses the backend's weekly breakdown when present; otherwise synthesizes
/// the month's week shape with zero amounts so the chart keeps a stable form
/// when weekly detail is missing.
fn month_weeks(
    month: &MonthlyAmount,
    current_month_index: usize,
    now: CivilDate,
) -> TemporalResult<ChartData> {
    if let Some(weeks) = &month.weeks {
        let mut buckets: Vec<&WeekBucket> = weeks
            .iter()
            .filter(|bucket| (1..=MAX_WEEKS_PER_MONTH).contains(&bucket.week_index))
            .collect();
        buckets.sort_by_key(|bucket| bucket.week_index);

        let mut chart = ChartData::with_capacity(buckets.len());
        for bucket in buckets {
            chart.push(format!("Week {}", bucket.week_index), bucket.amount);
        }
        return Ok(chart);
    }

    let anchored = YearMonth::new(now.year(), current_month_index as u32 + 1)?;
    let week_count = anchored.week_count()?;

    let mut chart = ChartData::with_capacity(week_count);
    for week in 1..=week_count {
        chart.push(format!("Week {week}"), 0.0);
    }
    Ok(chart)
}
