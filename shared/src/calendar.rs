//! Calendar domain logic for the lecture calendar.
//!
//! This module owns the month grid (always six full weeks starting on a
//! Sunday), month navigation, and grouping of lectures by date with daily
//! and monthly totals. The UI only renders what is computed here.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::lecture::{date_key, Lecture};

/// Number of cells in a month grid (6 weeks x 7 days)
pub const GRID_CELLS: usize = 42;

/// Cursor that determines which month is displayed.
///
/// Navigation always lands on the first of the month so that moving from
/// e.g. January 31st never overflows into March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    reference: NaiveDate,
}

impl MonthCursor {
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// Reset the cursor to the given "today"
    pub fn today(today: NaiveDate) -> Self {
        Self::new(today)
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    pub fn first_of_month(&self) -> NaiveDate {
        first_of_month(self.reference)
    }

    pub fn previous(&self) -> Self {
        let first = self.first_of_month();
        let target = first.checked_sub_months(Months::new(1)).unwrap_or(first);
        log::debug!("Navigated to previous month: {}", target);
        Self::new(target)
    }

    pub fn next(&self) -> Self {
        let first = self.first_of_month();
        let target = first.checked_add_months(Months::new(1)).unwrap_or(first);
        log::debug!("Navigated to next month: {}", target);
        Self::new(target)
    }

    /// Whether `date` belongs to the displayed month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// Which day the editor is open for.
///
/// Selecting a day opens the editor; closing it or deleting a lecture
/// clears the selection and closes the whole editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySelection {
    selected_date: Option<NaiveDate>,
    is_modal_open: bool,
}

impl DaySelection {
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    /// The day the editor is showing, if it is open
    pub fn open_date(&self) -> Option<NaiveDate> {
        self.selected_date.filter(|_| self.is_modal_open)
    }

    pub fn select(&mut self, date: NaiveDate) {
        log::debug!("Opening editor for {}", date);
        self.selected_date = Some(date);
        self.is_modal_open = true;
    }

    pub fn close(&mut self) {
        self.selected_date = None;
        self.is_modal_open = false;
    }

    /// A lecture was deleted from the editor's form
    pub fn after_delete(&mut self) {
        log::debug!("Closing editor after delete");
        self.close();
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Build the 42 dates shown for the month containing `reference`.
///
/// The grid starts on the Sunday on or before the first of the month. When
/// the 1st is itself a Sunday there are no leading days.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);

    start.iter_days().take(GRID_CELLS).collect()
}

/// Lectures grouped by date together with the total for one month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// Every lecture in the collection keyed by its exact date string.
    /// Within a date the collection order is kept.
    pub by_date: HashMap<String, Vec<Lecture>>,
    /// Sum of amounts for lectures dated inside `year`/`month`
    pub monthly_total: f64,
}

impl MonthSummary {
    /// Lectures recorded for a date key, empty if there are none
    pub fn lectures_on(&self, key: &str) -> &[Lecture] {
        self.by_date.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn daily_total(&self, key: &str) -> f64 {
        daily_total(self.lectures_on(key))
    }

    /// Number of lectures across every group
    pub fn lecture_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }
}

/// Group lectures by date and total the amounts for one month.
///
/// Grouping uses the raw date string, so a lecture with an unparseable date
/// still shows up under its own key but never counts towards a month.
pub fn aggregate(lectures: &[Lecture], year: i32, month: u32) -> MonthSummary {
    let mut by_date: HashMap<String, Vec<Lecture>> = HashMap::new();
    let mut monthly_total = 0.0;

    for lecture in lectures {
        if lecture.is_in_month(year, month) {
            monthly_total += lecture.amount;
        }
        by_date
            .entry(lecture.date.clone())
            .or_default()
            .push(lecture.clone());
    }

    log::debug!(
        "Aggregated {} lectures over {} dates, total for {}-{:02}: {}",
        lectures.len(),
        by_date.len(),
        year,
        month,
        monthly_total
    );

    MonthSummary {
        year,
        month,
        by_date,
        monthly_total,
    }
}

/// Sum of the amounts of the given lectures
pub fn daily_total(lectures: &[Lecture]) -> f64 {
    lectures.iter().map(|l| l.amount).sum()
}

/// Position of a grid cell relative to the displayed month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing days of the previous month
    PaddingBefore,
    /// Day within the displayed month
    MonthDay,
    /// Leading days of the next month
    PaddingAfter,
}

/// A single cell of the month grid, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub date_key: String,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub lectures: Vec<Lecture>,
    pub day_total: f64,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_current_month(&self) -> bool {
        self.day_type == CalendarDayType::MonthDay
    }
}

/// The displayed month: 42 cells plus the monthly total
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
    pub monthly_total: f64,
}

impl CalendarMonth {
    /// Combine the grid for `cursor` with an aggregation of the same month.
    pub fn build(cursor: MonthCursor, today: NaiveDate, summary: &MonthSummary) -> Self {
        let first = cursor.first_of_month();

        let cells = month_grid(cursor.reference())
            .into_iter()
            .map(|date| {
                let key = date_key(date);
                let lectures = summary.lectures_on(&key).to_vec();
                let day_type = if date < first {
                    CalendarDayType::PaddingBefore
                } else if cursor.contains(date) {
                    CalendarDayType::MonthDay
                } else {
                    CalendarDayType::PaddingAfter
                };

                CalendarCell {
                    date,
                    day_type,
                    is_today: date == today,
                    day_total: daily_total(&lectures),
                    lectures,
                    date_key: key,
                }
            })
            .collect();

        Self {
            year: cursor.year(),
            month: cursor.month(),
            cells,
            monthly_total: summary.monthly_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lecture(id: &str, date: &str, title: &str, amount: f64) -> Lecture {
        Lecture {
            id: id.to_string(),
            date: date.to_string(),
            title: title.to_string(),
            amount,
        }
    }

    #[test]
    fn test_month_grid_march_2024() {
        // March 1st 2024 is a Friday
        let grid = month_grid(date(2024, 3, 15));
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0], date(2024, 2, 25));
        assert_eq!(grid[5], date(2024, 3, 1));
        assert_eq!(grid[41], date(2024, 4, 6));
    }

    #[test]
    fn test_month_grid_starts_on_first_when_sunday() {
        // September 1st 2024 is a Sunday
        let grid = month_grid(date(2024, 9, 30));
        assert_eq!(grid[0], date(2024, 9, 1));
        assert_eq!(grid[41], date(2024, 10, 12));
    }

    #[test]
    fn test_month_grid_short_february() {
        // February 2026 starts on a Sunday and has 28 days
        let grid = month_grid(date(2026, 2, 10));
        assert_eq!(grid[0], date(2026, 2, 1));
        assert_eq!(grid[27], date(2026, 2, 28));
        assert_eq!(grid[28], date(2026, 3, 1));
        assert_eq!(grid.len(), GRID_CELLS);
    }

    #[test]
    fn test_cursor_navigation_clamps_to_first() {
        let cursor = MonthCursor::new(date(2024, 1, 31));
        let next = cursor.next();
        assert_eq!(next.reference(), date(2024, 2, 1));
        assert_eq!(next.next().reference(), date(2024, 3, 1));

        let prev = MonthCursor::new(date(2024, 3, 31)).previous();
        assert_eq!(prev.reference(), date(2024, 2, 1));
    }

    #[test]
    fn test_cursor_navigation_crosses_years() {
        let cursor = MonthCursor::new(date(2024, 12, 15));
        assert_eq!(cursor.next().reference(), date(2025, 1, 1));
        let cursor = MonthCursor::new(date(2024, 1, 15));
        assert_eq!(cursor.previous().reference(), date(2023, 12, 1));
    }

    #[test]
    fn test_cursor_today_resets() {
        let cursor = MonthCursor::new(date(2020, 5, 1)).next();
        let today = MonthCursor::today(date(2024, 3, 15));
        assert_ne!(cursor, today);
        assert_eq!(today.reference(), date(2024, 3, 15));
    }

    #[test]
    fn test_day_selection_select_and_close() {
        let mut selection = DaySelection::default();
        assert_eq!(selection.open_date(), None);
        assert!(!selection.is_modal_open());

        selection.select(date(2024, 3, 15));
        assert_eq!(selection.selected_date(), Some(date(2024, 3, 15)));
        assert!(selection.is_modal_open());
        assert_eq!(selection.open_date(), Some(date(2024, 3, 15)));

        selection.select(date(2024, 3, 16));
        assert_eq!(selection.open_date(), Some(date(2024, 3, 16)));

        selection.close();
        assert_eq!(selection.selected_date(), None);
        assert!(!selection.is_modal_open());
        assert_eq!(selection, DaySelection::default());
    }

    #[test]
    fn test_day_selection_delete_closes_editor() {
        let mut selection = DaySelection::default();
        selection.select(date(2024, 3, 15));
        selection.after_delete();
        assert_eq!(selection.open_date(), None);
        assert_eq!(selection.selected_date(), None);
        assert!(!selection.is_modal_open());
    }

    #[test]
    fn test_aggregate_groups_and_totals() {
        let lectures = vec![
            lecture("1", "2024-03-15", "Math", 50000.0),
            lecture("2", "2024-03-16", "Art", 20000.0),
            lecture("3", "2024-03-15", "Music", 10000.0),
            lecture("4", "2024-04-01", "History", 7000.0),
        ];

        let summary = aggregate(&lectures, 2024, 3);
        assert_eq!(summary.monthly_total, 80000.0);
        assert_eq!(summary.lecture_count(), 4);

        let on_15th: Vec<&str> = summary
            .lectures_on("2024-03-15")
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(on_15th, vec!["Math", "Music"]);
        assert_eq!(summary.daily_total("2024-03-15"), 60000.0);
        assert_eq!(summary.daily_total("2024-03-20"), 0.0);
        assert!(summary.lectures_on("2024-03-20").is_empty());
    }

    #[test]
    fn test_aggregate_month_boundaries() {
        let lectures = vec![
            lecture("1", "2024-02-29", "Leap", 1.0),
            lecture("2", "2024-03-01", "First", 10.0),
            lecture("3", "2024-03-31", "Last", 100.0),
            lecture("4", "2024-04-01", "Next", 1000.0),
        ];
        assert_eq!(aggregate(&lectures, 2024, 3).monthly_total, 110.0);
        assert_eq!(aggregate(&lectures, 2024, 2).monthly_total, 1.0);
    }

    #[test]
    fn test_aggregate_keeps_unparseable_dates_out_of_totals() {
        let lectures = vec![lecture("1", "bogus", "Odd", 99.0)];
        let summary = aggregate(&lectures, 2024, 3);
        assert_eq!(summary.monthly_total, 0.0);
        assert_eq!(summary.lectures_on("bogus").len(), 1);
    }

    #[test]
    fn test_calendar_month_build() {
        let lectures = vec![
            lecture("1", "2024-03-15", "Math", 50000.0),
            lecture("2", "2024-02-26", "Prev", 5.0),
        ];
        let cursor = MonthCursor::new(date(2024, 3, 1));
        let summary = aggregate(&lectures, cursor.year(), cursor.month());
        let month = CalendarMonth::build(cursor, date(2024, 3, 15), &summary);

        assert_eq!(month.cells.len(), GRID_CELLS);
        assert_eq!(month.monthly_total, 50000.0);

        let first = &month.cells[0];
        assert_eq!(first.day_type, CalendarDayType::PaddingBefore);

        let prev_cell = month.cells.iter().find(|c| c.date_key == "2024-02-26").unwrap();
        assert_eq!(prev_cell.lectures.len(), 1);
        assert!(!prev_cell.is_current_month());

        let cell = month.cells.iter().find(|c| c.date_key == "2024-03-15").unwrap();
        assert!(cell.is_today);
        assert!(cell.is_current_month());
        assert_eq!(cell.day(), 15);
        assert_eq!(cell.day_total, 50000.0);

        let last = month.cells.last().unwrap();
        assert_eq!(last.day_type, CalendarDayType::PaddingAfter);
        assert_eq!(month.cells.iter().filter(|c| c.is_today).count(), 1);
    }

    proptest! {
        #[test]
        fn prop_grid_is_42_consecutive_days_from_sunday(days in 0i64..200_000) {
            let reference = date(1900, 1, 1) + chrono::Duration::days(days);
            let grid = month_grid(reference);

            prop_assert_eq!(grid.len(), GRID_CELLS);
            prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
            prop_assert!(grid[0] <= first_of_month(reference));
            prop_assert!(grid.contains(&reference));
            for pair in grid.windows(2) {
                prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
        }

        #[test]
        fn prop_group_sizes_sum_to_collection_size(
            entries in proptest::collection::vec((0u32..60, 0u32..100_000), 0..50)
        ) {
            let lectures: Vec<Lecture> = entries
                .iter()
                .enumerate()
                .map(|(i, (offset, amount))| {
                    let day = date(2024, 2, 1) + chrono::Duration::days(i64::from(*offset));
                    lecture(&i.to_string(), &date_key(day), "L", f64::from(*amount))
                })
                .collect();

            let summary = aggregate(&lectures, 2024, 3);
            prop_assert_eq!(summary.lecture_count(), lectures.len());

            let expected: f64 = lectures
                .iter()
                .filter(|l| l.date.starts_with("2024-03-"))
                .map(|l| l.amount)
                .sum();
            prop_assert_eq!(summary.monthly_total, expected);
        }
    }
}
