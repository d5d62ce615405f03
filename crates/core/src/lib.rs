//! Booking Core - Calendar picker domain logic
//!
//! This crate contains pure domain logic with no I/O operations.
//! The inline calendar widget, its callback payload codec, locales and
//! error types are defined here.

pub mod calendar;
pub mod config;
pub mod error;
pub mod locale;
pub mod selection;

pub use calendar::{CalendarButton, CalendarGrid, CalendarPicker, Outcome};
pub use error::{CalendarError, ConfigError};
pub use locale::CalendarLocale;
pub use selection::{CalendarAction, CalendarSelection};
