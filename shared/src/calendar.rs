//! Calendar arithmetic for the date picker grid.
//!
//! The grid always starts on the first column of the week that contains the
//! 1st of the displayed month and is padded at the end to complete its last
//! week, so its length is always a multiple of seven.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

/// Number of columns in the calendar grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// The month currently shown by the calendar popup.
///
/// Stored as the first day of the month so every value is a valid chrono date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayMonth {
    first: NaiveDate,
}

impl DisplayMonth {
    /// Create a display month from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::DateOutOfRange { year, month, day: 1 })?;

        Ok(Self { first })
    }

    /// The month containing `date`.
    pub fn containing<D: Datelike>(date: &D) -> Self {
        // Day 1 of a month that chrono already represents always exists
        let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(NaiveDate::MIN);
        Self { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Whether `date` falls inside this month.
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The month before this one, rolling the year back after January.
    pub fn previous(&self) -> CalendarResult<Self> {
        let (month, year) = previous_month(self.month(), self.year());
        Self::new(year, month)
    }

    /// The month after this one, rolling the year over after December.
    pub fn next(&self) -> CalendarResult<Self> {
        let (month, year) = next_month(self.month(), self.year());
        Self::new(year, month)
    }

    /// Number of cells shown before the 1st.
    ///
    /// This is the weekday (Sunday = 0) of the day before the 1st, i.e. the
    /// last day of the previous month. Against a Monday-first header that value
    /// is exactly the column of the 1st.
    pub fn leading_days(&self) -> u32 {
        (self.first.weekday().num_days_from_sunday() + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
    }
}

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// (month, year) of the month before the given one.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month <= 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// (month, year) of the month after the given one.
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month >= 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// One cell of the calendar grid before selection state is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of the month shown in the cell
    pub day: u32,
    /// Full date the cell stands for
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (not spillover)
    pub is_current_month: bool,
}

/// The full grid for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub month: DisplayMonth,
    /// Spillover cells taken from the previous month
    pub leading_days: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Build the grid: trailing days of the previous month, every day of the
    /// displayed month, then leading days of the next month up to the end of
    /// the last week.
    pub fn build(month: DisplayMonth) -> CalendarResult<Self> {
        let days_in_month = month.days_in_month();
        let leading_days = month.leading_days();
        let total = (days_in_month + leading_days).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let start = month
            .first_day()
            .checked_sub_days(Days::new(u64::from(leading_days)))
            .ok_or(CalendarError::DateOutOfRange {
                year: month.year(),
                month: month.month(),
                day: 0,
            })?;

        let days: Vec<CalendarDay> = start
            .iter_days()
            .take(total as usize)
            .map(|date| CalendarDay {
                day: date.day(),
                date,
                is_current_month: month.contains(&date),
            })
            .collect();

        if days.len() != total as usize {
            let last = days.last().map(|d| d.date).unwrap_or(start);
            return Err(CalendarError::DateOutOfRange {
                year: last.year(),
                month: last.month(),
                day: last.day() + 1,
            });
        }

        log::debug!(
            "🗓️ Built grid for {:02}/{}: {} leading, {} days, {} cells",
            month.month(),
            month.year(),
            leading_days,
            days_in_month,
            days.len()
        );

        Ok(Self {
            month,
            leading_days,
            days,
        })
    }

    /// Cells belonging to the displayed month only.
    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.is_current_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> DisplayMonth {
        DisplayMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_display_month_rejects_invalid_month() {
        assert_eq!(DisplayMonth::new(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(DisplayMonth::new(2024, 13), Err(CalendarError::InvalidMonth(13)));
        assert!(DisplayMonth::new(2024, 12).is_ok());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(previous_month(6, 2025), (5, 2025));
        assert_eq!(previous_month(1, 2025), (12, 2024));
        assert_eq!(next_month(6, 2025), (7, 2025));
        assert_eq!(next_month(12, 2025), (1, 2026));

        assert_eq!(month(2025, 1).previous().unwrap(), month(2024, 12));
        assert_eq!(month(2025, 12).next().unwrap(), month(2026, 1));
    }

    #[test]
    fn test_leading_days_follow_previous_month_last_weekday() {
        // 2024-02-29 is a Thursday (Sunday = 0 -> 4); March 1st is a Friday
        assert_eq!(month(2024, 3).leading_days(), 4);
        // 2024-03-31 is a Sunday; April 1st is a Monday
        assert_eq!(month(2024, 4).leading_days(), 0);
        // 2024-08-31 is a Saturday; September 1st is a Sunday
        assert_eq!(month(2024, 9).leading_days(), 6);
    }

    #[test]
    fn test_march_2024_grid() {
        let grid = CalendarMonth::build(month(2024, 3)).unwrap();

        // 4 leading + 31 days = 35 cells, no trailing spillover
        assert_eq!(grid.days.len(), 35);
        assert_eq!(grid.leading_days, 4);

        let first = grid.days[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(first.day, 26);
        assert!(!first.is_current_month);

        let march_first = grid.days[4];
        assert_eq!(march_first.day, 1);
        assert!(march_first.is_current_month);

        assert_eq!(grid.current_month_days().count(), 31);
        assert_eq!(grid.days.len() / 7, 5);
    }

    #[test]
    fn test_grid_pads_trailing_days_from_next_month() {
        // September 2024: 6 leading + 30 days = 36 -> 42 cells
        let grid = CalendarMonth::build(month(2024, 9)).unwrap();
        assert_eq!(grid.days.len(), 42);

        let trailing: Vec<_> = grid.days.iter().skip(36).collect();
        assert_eq!(trailing.len(), 6);
        assert!(trailing.iter().all(|d| !d.is_current_month));
        assert_eq!(trailing[0].date, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        assert_eq!(trailing[5].day, 6);
    }

    #[test]
    fn test_february_starting_monday_fills_four_rows() {
        // February 2021 starts on a Monday and has 28 days
        let grid = CalendarMonth::build(month(2021, 2)).unwrap();
        assert_eq!(grid.leading_days, 0);
        assert_eq!(grid.days.len(), 28);
        assert!(grid.days.iter().all(|d| d.is_current_month));
    }

    #[test]
    fn test_grid_length_is_multiple_of_seven_and_days_are_consecutive() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for m in 1..=12 {
                let grid = CalendarMonth::build(month(year, m)).unwrap();
                assert!(!grid.days.is_empty());
                assert_eq!(grid.days.len() % 7, 0, "{}-{}", year, m);

                for pair in grid.days.windows(2) {
                    assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
                }

                assert_eq!(
                    grid.current_month_days().count() as u32,
                    days_in_month(year, m)
                );
            }
        }
    }
}
