//! # Picker State Module
//!
//! Widget-local state of one date picker: the month shown in the popup and
//! whether the popup is open.
//!
//! ## Responsibilities:
//! - Month navigation (never touches the selected value)
//! - Resynchronising the displayed month when the host value changes
//! - Open/close transitions for the popup
//!
//! The selected value itself is owned by the host and is not stored here.

use chrono::NaiveDateTime;

use crate::calendar::DisplayMonth;
use crate::popup::PopupState;

/// Actions that change picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    PreviousMonth,
    NextMonth,
    /// The host value changed; show its month
    Resync(NaiveDateTime),
    /// Click on the text field
    TogglePopup,
    /// Global pointer-down, `inside` = target contained in the widget root
    PointerDown { inside: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    /// Month currently shown in the popup
    pub displayed: DisplayMonth,
    pub popup: PopupState,
}

impl PickerState {
    /// Closed picker showing the month of `value`.
    pub fn new(value: &NaiveDateTime) -> Self {
        Self {
            displayed: DisplayMonth::containing(value),
            popup: PopupState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Apply `action`, returning the new state. Actions that cannot change
    /// anything return an equal state.
    pub fn apply(self, action: PickerAction) -> Self {
        match action {
            PickerAction::PreviousMonth => self.navigate_to_previous_month(),
            PickerAction::NextMonth => self.navigate_to_next_month(),
            PickerAction::Resync(value) => self.resync(&value),
            PickerAction::TogglePopup => {
                let popup = self.popup.toggled();
                log::debug!("📅 Calendar toggle: {:?} -> {:?}", self.popup, popup);
                Self { popup, ..self }
            }
            PickerAction::PointerDown { inside } => {
                let popup = self.popup.after_pointer_down(inside);
                if popup != self.popup {
                    log::debug!("📅 Calendar closed by outside pointer-down");
                }
                Self { popup, ..self }
            }
        }
    }

    /// Navigate to the previous month
    pub fn navigate_to_previous_month(self) -> Self {
        match self.displayed.previous() {
            Ok(displayed) => {
                log::info!("📅 Navigated to previous month: {}/{}", displayed.month(), displayed.year());
                Self { displayed, ..self }
            }
            Err(e) => {
                log::warn!("Cannot navigate before {:?}: {}", self.displayed, e);
                self
            }
        }
    }

    /// Navigate to the next month
    pub fn navigate_to_next_month(self) -> Self {
        match self.displayed.next() {
            Ok(displayed) => {
                log::info!("📅 Navigated to next month: {}/{}", displayed.month(), displayed.year());
                Self { displayed, ..self }
            }
            Err(e) => {
                log::warn!("Cannot navigate after {:?}: {}", self.displayed, e);
                self
            }
        }
    }

    /// Show the month of `value`; the popup state is kept.
    pub fn resync(self, value: &NaiveDateTime) -> Self {
        Self {
            displayed: DisplayMonth::containing(value),
            ..self
        }
    }
}
