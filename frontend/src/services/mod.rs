pub mod date_utils;
pub mod logging;
pub mod pointer_events;
