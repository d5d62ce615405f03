//! Calendar callback payload
//!
//! Every selectable cell of the calendar grid carries a [`CalendarSelection`]
//! packed into a short string. The packed form is the only state that travels
//! between rendering a grid and the user pressing one of its buttons, so it
//! must decode back to exactly the same fields.
//!
//! Format: `simple_calendar:<ACT>:<year>:<month>:<day>`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Prefix shared by every calendar payload
pub const CALLBACK_PREFIX: &str = "simple_calendar";

/// Field separator
pub const SEPARATOR: char = ':';

/// Telegram rejects `callback_data` longer than this
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// Decoded intent of a pressed calendar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarAction {
    Ignore,
    PickDay,
    PrevMonth,
    NextMonth,
}

impl CalendarAction {
    /// Token used in the packed payload
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Ignore => "IGNORE",
            Self::PickDay => "DAY",
            Self::PrevMonth => "PREV-MONTH",
            Self::NextMonth => "NEXT-MONTH",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "IGNORE" => Some(Self::Ignore),
            "DAY" => Some(Self::PickDay),
            "PREV-MONTH" => Some(Self::PrevMonth),
            "NEXT-MONTH" => Some(Self::NextMonth),
            _ => None,
        }
    }
}

/// Data attached to a single calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarSelection {
    pub action: CalendarAction,
    pub year: i32,
    /// Displayed month, 1..=12
    pub month: u32,
    /// Day of month for `PickDay`, 0 for non-day cells
    pub day: u32,
}

impl CalendarSelection {
    pub fn new(action: CalendarAction, year: i32, month: u32, day: u32) -> Self {
        Self {
            action,
            year,
            month,
            day,
        }
    }

    /// Non-interactive cell (header, weekday label, blank)
    pub fn ignore(year: i32, month: u32) -> Self {
        Self::new(CalendarAction::Ignore, year, month, 0)
    }

    pub fn pick_day(year: i32, month: u32, day: u32) -> Self {
        Self::new(CalendarAction::PickDay, year, month, day)
    }

    pub fn prev_month(year: i32, month: u32) -> Self {
        Self::new(CalendarAction::PrevMonth, year, month, 1)
    }

    pub fn next_month(year: i32, month: u32) -> Self {
        Self::new(CalendarAction::NextMonth, year, month, 1)
    }

    /// Pack into the callback payload string
    pub fn encode(&self) -> String {
        format!(
            "{CALLBACK_PREFIX}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.action.as_token(),
            self.year,
            self.month,
            self.day
        )
    }

    /// Parse a callback payload produced by [`CalendarSelection::encode`]
    ///
    /// Validation is strict: exactly five fields, the calendar prefix, a known
    /// action token, integer year/month/day in canonical form (no sign prefix,
    /// no zero padding) and a month in 1..=12. Day ranges are not checked here;
    /// an impossible day is reported when the selection is interpreted.
    pub fn decode(data: &str) -> CalendarResult<Self> {
        let fields: Vec<&str> = data.split(SEPARATOR).collect();

        let [prefix, act, year, month, day] = fields.as_slice() else {
            return Err(CalendarError::Decode(format!(
                "expected 5 fields, got {}",
                fields.len()
            )));
        };

        if *prefix != CALLBACK_PREFIX {
            return Err(CalendarError::Decode(format!("unknown prefix '{prefix}'")));
        }

        let action = CalendarAction::from_token(act)
            .ok_or_else(|| CalendarError::Decode(format!("unknown action '{act}'")))?;

        let year = year
            .parse::<i32>()
            .map_err(|e| CalendarError::Decode(format!("year '{year}': {e}")))?;
        let month = month
            .parse::<u32>()
            .map_err(|e| CalendarError::Decode(format!("month '{month}': {e}")))?;
        let day = day
            .parse::<u32>()
            .map_err(|e| CalendarError::Decode(format!("day '{day}': {e}")))?;

        if !(1..=12).contains(&month) {
            return Err(CalendarError::Decode(format!("month {month} out of range")));
        }

        let selection = Self::new(action, year, month, day);
        if selection.encode() != data {
            return Err(CalendarError::Decode(format!(
                "non-canonical payload '{data}'"
            )));
        }

        Ok(selection)
    }

    /// Whether a callback payload belongs to the calendar widget
    pub fn is_calendar_data(data: &str) -> bool {
        data.strip_prefix(CALLBACK_PREFIX)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl fmt::Display for CalendarSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for CalendarSelection {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
