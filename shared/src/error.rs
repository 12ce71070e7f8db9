use thiserror::Error;

/// Errors raised by calendar arithmetic and value construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Date out of range: {year:04}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    #[error("Invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

pub type CalendarResult<T> = Result<T, CalendarError>;
