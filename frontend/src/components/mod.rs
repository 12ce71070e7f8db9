pub mod date_picker;
pub mod time_fields;
