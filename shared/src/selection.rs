//! Selection rules: cell flags, bounds, and the values handed back to the host.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::calendar::CalendarMonth;
use crate::error::{CalendarError, CalendarResult};
use crate::format::{HOURS_ARIA_LABEL, MINUTES_ARIA_LABEL};

/// Optional selectable range, compared at day granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    /// Build bounds from timestamps; time of day is dropped.
    pub fn new(min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> Self {
        Self {
            min: min.map(|m| m.date()),
            max: max.map(|m| m.date()),
        }
    }

    /// A date is disabled when it is strictly before `min` or strictly after `max`.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        let before_min = self.min.is_some_and(|min| date < min);
        let after_max = self.max.is_some_and(|max| date > max);
        before_min || after_max
    }

    /// True when `min` is after `max`, which disables every date.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// A grid cell with its selection state resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_disabled: bool,
}

impl DayCell {
    /// CSS classes for the cell, in render order.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["day"];
        if !self.is_current_month {
            classes.push("other-month-day");
        }
        if self.is_selected {
            classes.push("selected-day");
        }
        if self.is_today {
            classes.push("today");
        }
        if self.is_disabled {
            classes.push("disabled-day");
        }
        classes
    }

    /// Date to select when the cell is clicked; disabled cells ignore clicks.
    pub fn activate(&self) -> Option<NaiveDate> {
        (!self.is_disabled).then_some(self.date)
    }
}

/// Resolve selected/today/disabled flags for every cell of `grid`.
///
/// Selected and today only ever match cells of the displayed month; the
/// disabled flag applies to spillover cells as well.
pub fn resolve_cells(
    grid: &CalendarMonth,
    selected: &NaiveDateTime,
    today: NaiveDate,
    bounds: &Bounds,
) -> Vec<DayCell> {
    let selected_date = selected.date();

    grid.days
        .iter()
        .map(|day| DayCell {
            day: day.day,
            date: day.date,
            is_current_month: day.is_current_month,
            is_selected: day.is_current_month && day.date == selected_date,
            is_today: day.is_current_month && day.date == today,
            is_disabled: bounds.is_disabled(day.date),
        })
        .collect()
}

/// Value produced by clicking a day cell.
///
/// Without time selection the clicked date is returned at midnight. With it,
/// hour and minute come from `host_value`, the value the host actually passed
/// in, not the clock fallback used for display. When the host passed nothing
/// the clicked date is returned at midnight.
pub fn select_day(date: NaiveDate, time_select: bool, host_value: Option<&NaiveDateTime>) -> NaiveDateTime {
    if !time_select {
        return date.and_time(NaiveTime::MIN);
    }

    let time = host_value
        .and_then(|value| NaiveTime::from_hms_opt(value.hour(), value.minute(), 0))
        .unwrap_or(NaiveTime::MIN);

    date.and_time(time)
}

/// One of the two numeric steppers shown when time selection is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hours,
    Minutes,
}

impl TimeField {
    pub fn max(&self) -> u32 {
        match self {
            TimeField::Hours => 23,
            TimeField::Minutes => 59,
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            TimeField::Hours => HOURS_ARIA_LABEL,
            TimeField::Minutes => MINUTES_ARIA_LABEL,
        }
    }

    /// Current value of this field in `value`.
    pub fn value_of(&self, value: &NaiveDateTime) -> u32 {
        match self {
            TimeField::Hours => value.hour(),
            TimeField::Minutes => value.minute(),
        }
    }

    /// Clamp raw stepper input into `0..=max`.
    pub fn clamp(&self, raw: i64) -> u32 {
        raw.clamp(0, i64::from(self.max())) as u32
    }
}

/// Parse the text of a numeric stepper the way a number input reports it.
///
/// Empty input reads as zero and fractional input is truncated. Anything that
/// is not a number yields `None`.
pub fn parse_stepper_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
}

/// New value after editing one time field.
///
/// Only the edited field changes; seconds and sub-seconds are zeroed.
pub fn edit_time(current: &NaiveDateTime, field: TimeField, raw: i64) -> CalendarResult<NaiveDateTime> {
    let clamped = field.clamp(raw);
    let (hour, minute) = match field {
        TimeField::Hours => (clamped, current.minute()),
        TimeField::Minutes => (current.hour(), clamped),
    };

    current
        .date()
        .and_hms_opt(hour, minute, 0)
        .ok_or(CalendarError::InvalidTime { hour, minute })
}
