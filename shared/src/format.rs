//! Display strings for the picker (French conventions, fixed).

use chrono::NaiveDateTime;

use crate::calendar::DisplayMonth;

/// Weekday header, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

/// Label above the hour/minute steppers.
pub const TIME_LABEL: &str = "Heure";

pub const HOURS_ARIA_LABEL: &str = "Hours";
pub const MINUTES_ARIA_LABEL: &str = "Minutes";

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";

/// Format the selected value for the read-only text field.
///
/// `15/03/2024`, or `15/03/2024 10:30` when time selection is enabled.
pub fn format_display(value: &NaiveDateTime, time_select: bool) -> String {
    let date_part = value.format(DATE_FORMAT).to_string();
    if time_select {
        format!("{} {}", date_part, value.format(TIME_FORMAT))
    } else {
        date_part
    }
}

/// Get the French name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janvier", 2 => "février", 3 => "mars", 4 => "avril",
        5 => "mai", 6 => "juin", 7 => "juillet", 8 => "août",
        9 => "septembre", 10 => "octobre", 11 => "novembre", 12 => "décembre",
        _ => "janvier",
    }
}

/// Header shown between the navigation buttons, e.g. `mars 2024`.
pub fn month_label(month: &DisplayMonth) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_format_display_date_only() {
        assert_eq!(format_display(&at(2024, 3, 15, 10, 30), false), "15/03/2024");
        assert_eq!(format_display(&at(2024, 1, 5, 0, 0), false), "05/01/2024");
    }

    #[test]
    fn test_format_display_with_time() {
        assert_eq!(format_display(&at(2024, 3, 15, 10, 30), true), "15/03/2024 10:30");
        assert_eq!(format_display(&at(2024, 12, 31, 7, 5), true), "31/12/2024 07:05");
    }

    #[test]
    fn test_month_label() {
        let march = DisplayMonth::new(2024, 3).unwrap();
        assert_eq!(month_label(&march), "mars 2024");

        let august = DisplayMonth::new(2025, 8).unwrap();
        assert_eq!(month_label(&august), "août 2025");
    }

    #[test]
    fn test_weekday_labels_start_on_monday() {
        assert_eq!(WEEKDAY_LABELS.first(), Some(&"Lun"));
        assert_eq!(WEEKDAY_LABELS.last(), Some(&"Dim"));
    }
}
