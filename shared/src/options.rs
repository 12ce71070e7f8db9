use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::selection::Bounds;

/// Host-supplied settings for one picker instance.
///
/// Every field is optional in serialized form so hosts can load partial
/// settings from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Show hour/minute steppers and include the time in the text field
    pub time_select: bool,
    /// Earliest selectable day (time of day ignored)
    pub min_date: Option<NaiveDateTime>,
    /// Latest selectable day (time of day ignored)
    pub max_date: Option<NaiveDateTime>,
}

impl PickerOptions {
    pub fn with_time_select(mut self, time_select: bool) -> Self {
        self.time_select = time_select;
        self
    }

    pub fn with_min_date(mut self, min_date: NaiveDateTime) -> Self {
        self.min_date = Some(min_date);
        self
    }

    pub fn with_max_date(mut self, max_date: NaiveDateTime) -> Self {
        self.max_date = Some(max_date);
        self
    }

    /// Day-granularity bounds. Inverted bounds are kept as given (every cell
    /// ends up disabled) but logged.
    pub fn bounds(&self) -> Bounds {
        let bounds = Bounds::new(self.min_date, self.max_date);
        if bounds.is_inverted() {
            log::warn!(
                "Date picker min bound {:?} is after max bound {:?}; every day will be disabled",
                bounds.min,
                bounds.max
            );
        }
        bounds
    }
}
