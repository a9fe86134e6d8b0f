//! One dashboard refresh exercised end to end through the public API.

use clinic_temporal::domain::billing::DueClassification;
use clinic_temporal::domain::chart::{MonthlyAmount, PeriodSelector, WeekBucket};
use clinic_temporal::domain::record::{DatedRecord, RecordStatus};
use clinic_temporal::domain::types::{CivilDate, YearMonth};
use clinic_temporal::pagination::{MAX_VISIBLE_PAGES, PageEntry, Paginated, page_window};
use clinic_temporal::services::{billing, calendar, chart};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn date(year: i32, month: u32, day: u32) -> CivilDate {
    CivilDate::new(year, month, day).expect("valid date")
}

fn appointments() -> Vec<DatedRecord> {
    vec![
        DatedRecord::new(1, date(2025, 6, 3), RecordStatus::Paid),
        DatedRecord::new(2, date(2025, 6, 15), RecordStatus::Pending),
        DatedRecord::new(3, date(2025, 6, 15), RecordStatus::Pending),
        DatedRecord::new(4, date(2025, 6, 20), RecordStatus::Pending),
        DatedRecord::new(5, date(2025, 6, 10), RecordStatus::Cancelled),
        DatedRecord::new(6, date(2025, 7, 2), RecordStatus::Pending),
    ]
}

fn revenue() -> Vec<MonthlyAmount> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| MonthlyAmount::new(index, *name, 1_000.0 + index as f64 * 50.0))
        .collect()
}

#[test]
fn calendar_page_shows_june_with_its_appointments() {
    let today = date(2025, 6, 15);
    let month = YearMonth::of(today);
    let grid = calendar::build_grid(month, &appointments(), today).expect("grid in range");

    assert_eq!(grid.days.len(), 42);

    // June 2025 opens on a Sunday, so the grid starts on June 1st itself and
    // trails into July up to the 12th.
    assert_eq!(grid.days[0].date, date(2025, 6, 1));
    assert!(grid.days[0].is_current_month);
    assert_eq!(grid.days[41].date, date(2025, 7, 12));
    assert!(!grid.days[41].is_current_month);

    let today_cell = grid
        .days
        .iter()
        .find(|day| day.is_today)
        .expect("today's cell");
    assert_eq!(today_cell.date, today);
    assert_eq!(today_cell.records.len(), 2);

    // The July appointment lands in the trailing padding, still visible.
    let trailing = grid
        .days
        .iter()
        .find(|day| day.date == date(2025, 7, 2))
        .expect("padding cell");
    assert!(!trailing.is_current_month);
    assert_eq!(trailing.records.len(), 1);
}

#[test]
fn appointment_list_paginates_with_a_stable_window() {
    let records = appointments();
    let per_page = 2;
    let total_pages = records.len().div_ceil(per_page);
    let page = Paginated::new(records[2..4].to_vec(), 2, total_pages);

    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(
        page.pages,
        vec![PageEntry::Page(1), PageEntry::Page(2), PageEntry::Page(3)]
    );

    // A deep archive collapses around the current page.
    let window = page_window(12, 40, MAX_VISIBLE_PAGES);
    assert_eq!(
        window,
        vec![
            PageEntry::Page(1),
            PageEntry::Ellipsis,
            PageEntry::Page(11),
            PageEntry::Page(12),
            PageEntry::Page(13),
            PageEntry::Ellipsis,
            PageEntry::Page(40),
        ]
    );
}

#[test]
fn revenue_chart_follows_the_selected_period() {
    let now = date(2025, 6, 15);
    let mut months = revenue();

    let year = chart::aggregate(&months, PeriodSelector::Year, 5, now).expect("valid input");
    assert_eq!(year.len(), 12);
    assert_eq!(year.labels[0], "January");

    let quarter = chart::aggregate(&months, PeriodSelector::Quarter, 5, now).expect("valid input");
    assert_eq!(quarter.labels, vec!["April", "May", "June"]);
    assert_eq!(quarter.values, vec![1_150.0, 1_200.0, 1_250.0]);

    // Without weekly detail the month view synthesizes June's five weeks.
    let fallback = chart::aggregate(&months, PeriodSelector::Month, 5, now).expect("valid input");
    assert_eq!(fallback.len(), 5);
    assert!(fallback.values.iter().all(|amount| *amount == 0.0));

    // With weekly detail the backend's figures are used as-is.
    months[5].weeks = Some(vec![
        WeekBucket {
            week_index: 1,
            amount: 300.0,
        },
        WeekBucket {
            week_index: 2,
            amount: 950.0,
        },
    ]);
    let month = chart::aggregate(&months, PeriodSelector::Month, 5, now).expect("valid input");
    assert_eq!(month.labels, vec!["Week 1", "Week 2"]);
    assert_eq!(month.values, vec![300.0, 950.0]);
}

#[test]
fn billing_panel_classifies_each_appointment() {
    let now = date(2025, 6, 15);
    let classifications: Vec<DueClassification> = appointments()
        .iter()
        .map(|record| billing::classify_due(record, now).classification)
        .collect();

    assert_eq!(
        classifications,
        vec![
            DueClassification::Paid,
            DueClassification::DueToday,
            DueClassification::DueToday,
            DueClassification::DueSoon,
            DueClassification::Cancelled,
            DueClassification::Pending,
        ]
    );
}

#[test]
fn grid_month_and_chart_anchor_agree_on_now() {
    // The same civil instant drives every panel of the dashboard.
    let now = date(2025, 2, 28);
    let month = YearMonth::of(now);
    let grid = calendar::build_grid(month, &[], now).expect("grid in range");
    let current_month_index = (month.month() - 1) as usize;
    let weeks =
        chart::aggregate(&revenue(), PeriodSelector::Month, current_month_index, now)
            .expect("valid input");

    let current_days = grid.days.iter().filter(|day| day.is_current_month).count();
    assert_eq!(current_days, 28);
    // February 2025 opens on a Saturday: a two-day first week plus four more.
    assert_eq!(weeks.len(), 5);
}
