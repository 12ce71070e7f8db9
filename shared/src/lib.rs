//! Platform-independent logic for the date picker widget.
//!
//! Everything here is pure or owns only widget-local state, so the rendering
//! layer (the Yew frontend) stays a thin shell around these types:
//!
//! - [`calendar`]: month arithmetic and the 7×N day grid
//! - [`format`]: display strings (French conventions)
//! - [`selection`]: bounds, cell flags, values produced by clicks and time edits
//! - [`popup`]: open/close transitions and the outside pointer-down watcher
//! - [`state`]: the widget state holder combining displayed month and popup
//! - [`options`]: host-facing settings

pub mod calendar;
pub mod error;
pub mod format;
pub mod options;
pub mod popup;
pub mod selection;
pub mod state;

pub use calendar::{CalendarDay, CalendarMonth, DisplayMonth};
pub use error::{CalendarError, CalendarResult};
pub use format::{format_display, month_label, WEEKDAY_LABELS};
pub use options::PickerOptions;
pub use popup::{OutsideClickWatcher, PointerDownChannel, PopupState};
pub use selection::{edit_time, parse_stepper_input, resolve_cells, select_day, Bounds, DayCell, TimeField};
pub use state::{PickerAction, PickerState};
