//! Localised labels for the calendar grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const RU_MONTHS: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const RU_WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

const EN_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Language used for month and weekday labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarLocale {
    #[default]
    Ru,
    En,
}

impl CalendarLocale {
    /// Full month name for `month` in 1..=12
    ///
    /// Months outside that range wrap around instead of panicking.
    pub fn month_name(self, month: u32) -> &'static str {
        let index = (month.max(1) - 1) as usize % 12;
        match self {
            Self::Ru => RU_MONTHS[index],
            Self::En => EN_MONTHS[index],
        }
    }

    /// Short weekday names, Monday first
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Self::Ru => RU_WEEKDAYS,
            Self::En => EN_WEEKDAYS,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for CalendarLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CalendarLocale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(ConfigError::InvalidValue {
                var: "CALENDAR_LOCALE".to_string(),
                reason: format!("unsupported locale '{other}', expected 'ru' or 'en'"),
            }),
        }
    }
}
