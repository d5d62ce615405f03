//! Inline calendar picker
//!
//! Renders a month as rows of labeled buttons and turns a pressed button back
//! into an [`Outcome`]. The picker keeps no state between calls: the month
//! being displayed lives only inside the callback payloads of the rendered grid.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::locale::CalendarLocale;
use crate::selection::{CalendarAction, CalendarSelection};

const BLANK_LABEL: &str = " ";
const PREV_LABEL: &str = "<";
const NEXT_LABEL: &str = ">";

/// A single selectable cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarButton {
    pub label: String,
    /// Encoded [`CalendarSelection`]
    pub data: String,
}

impl CalendarButton {
    fn new(label: impl Into<String>, selection: CalendarSelection) -> Self {
        Self {
            label: label.into(),
            data: selection.encode(),
        }
    }

    /// Decode the attached selection
    pub fn selection(&self) -> CalendarResult<CalendarSelection> {
        CalendarSelection::decode(&self.data)
    }
}

/// Rendered month, row-major
///
/// Layout: header (1 cell), weekday labels (7), one row per week (7 each),
/// navigation (3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub rows: Vec<Vec<CalendarButton>>,
}

impl CalendarGrid {
    pub fn rows(&self) -> &[Vec<CalendarButton>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&CalendarButton> {
        self.rows.first().and_then(|row| row.first())
    }

    /// Rows between the weekday labels and the navigation row
    pub fn week_rows(&self) -> &[Vec<CalendarButton>] {
        if self.rows.len() < 3 {
            return &[];
        }
        &self.rows[2..self.rows.len() - 1]
    }

    pub fn navigation_row(&self) -> Option<&Vec<CalendarButton>> {
        self.rows.last()
    }

    /// Day numbers of all pickable cells in display order
    pub fn days(&self) -> Vec<u32> {
        self.week_rows()
            .iter()
            .flatten()
            .filter_map(|button| button.selection().ok())
            .filter(|selection| selection.action == CalendarAction::PickDay)
            .map(|selection| selection.day)
            .collect()
    }
}

/// Result of interpreting a pressed button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Non-interactive cell; acknowledge and do nothing
    NoSelection,
    /// A day was picked
    DateChosen(NaiveDate),
    /// Navigation; replace the displayed grid with `grid`
    Redraw {
        year: i32,
        month: u32,
        grid: CalendarGrid,
    },
}

/// Stateless month grid widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarPicker {
    locale: CalendarLocale,
}

impl CalendarPicker {
    pub fn new(locale: CalendarLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> CalendarLocale {
        self.locale
    }

    /// Render a month, defaulting missing parts to the current local date
    pub fn render(&self, year: Option<i32>, month: Option<u32>) -> CalendarGrid {
        self.render_from(Local::now().date_naive(), year, month)
    }

    /// Render a month, defaulting missing parts to `today`
    pub fn render_from(
        &self,
        today: NaiveDate,
        year: Option<i32>,
        month: Option<u32>,
    ) -> CalendarGrid {
        self.render_month(year.unwrap_or(today.year()), month.unwrap_or(today.month()))
    }

    /// Render the grid for `year`/`month`
    ///
    /// Months outside 1..=12 roll over into the neighbouring years and years
    /// are clamped to the range chrono can represent, so this never panics.
    /// At the edges of that range navigation stays in the boundary year:
    /// going back from January of the earliest year shows December of the
    /// same year, going forward from December of the latest year shows its
    /// January.
    pub fn render_month(&self, year: i32, month: u32) -> CalendarGrid {
        let (year, month) = normalize(i64::from(year), i64::from(month));
        let first = first_of_month(year, month);
        let days = days_in_month(year, month);
        let offset = first.weekday().num_days_from_monday();
        let weeks = (offset + days).div_ceil(7);

        let ignore = CalendarSelection::ignore(year, month);
        let mut rows = Vec::with_capacity(weeks as usize + 3);

        rows.push(vec![CalendarButton::new(
            format!("{} {}", self.locale.month_name(month), year),
            ignore,
        )]);

        rows.push(
            self.locale
                .weekday_labels()
                .iter()
                .map(|label| CalendarButton::new(*label, ignore))
                .collect(),
        );

        for week in 0..weeks {
            let row = (0..7)
                .map(|weekday| {
                    let cell = week * 7 + weekday;
                    if cell < offset || cell >= offset + days {
                        CalendarButton::new(BLANK_LABEL, ignore)
                    } else {
                        let day = cell - offset + 1;
                        CalendarButton::new(
                            day.to_string(),
                            CalendarSelection::pick_day(year, month, day),
                        )
                    }
                })
                .collect();
            rows.push(row);
        }

        rows.push(vec![
            CalendarButton::new(PREV_LABEL, CalendarSelection::prev_month(year, month)),
            CalendarButton::new(BLANK_LABEL, ignore),
            CalendarButton::new(NEXT_LABEL, CalendarSelection::next_month(year, month)),
        ]);

        CalendarGrid { rows }
    }

    /// Interpret a decoded selection
    pub fn interpret(&self, selection: CalendarSelection) -> CalendarResult<Outcome> {
        let CalendarSelection {
            action,
            year,
            month,
            day,
        } = selection;

        match action {
            CalendarAction::Ignore => Ok(Outcome::NoSelection),
            CalendarAction::PickDay => NaiveDate::from_ymd_opt(year, month, day)
                .map(Outcome::DateChosen)
                .ok_or(CalendarError::InvalidDate { year, month, day }),
            CalendarAction::PrevMonth | CalendarAction::NextMonth => {
                let delta = if action == CalendarAction::PrevMonth { -1 } else { 1 };
                let (year, month) = normalize(i64::from(year), i64::from(month) + delta);
                Ok(Outcome::Redraw {
                    year,
                    month,
                    grid: self.render_month(year, month),
                })
            }
        }
    }

    /// Decode and interpret a raw callback payload
    ///
    /// Malformed payloads (stale buttons, foreign data) are treated as
    /// [`Outcome::NoSelection`]. Only an impossible picked date is an error.
    pub fn process(&self, data: &str) -> CalendarResult<Outcome> {
        match CalendarSelection::decode(data) {
            Ok(selection) => self.interpret(selection),
            Err(e) => {
                tracing::debug!(data, error = %e, "Ignoring malformed calendar payload");
                Ok(Outcome::NoSelection)
            }
        }
    }
}

/// Fold an arbitrary month number into 1..=12, carrying into the year
fn normalize(year: i64, month: i64) -> (i32, u32) {
    let zero_based = month - 1;
    let year = year + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;

    let min_year = i64::from(NaiveDate::MIN.year());
    let max_year = i64::from(NaiveDate::MAX.year());
    let year = year.clamp(min_year, max_year);

    // Both values are in range after clamping
    (
        i32::try_from(year).unwrap_or_default(),
        u32::try_from(month).unwrap_or(1),
    )
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> CalendarPicker {
        CalendarPicker::new(CalendarLocale::En)
    }

    fn weeks_in_month(year: i32, month: u32) -> usize {
        let offset = first_of_month(year, month).weekday().num_days_from_monday();
        (offset + days_in_month(year, month)).div_ceil(7) as usize
    }

    #[test]
    fn test_grid_shape() {
        for year in [2023, 2024, 2026] {
            for month in 1..=12 {
                let grid = picker().render_month(year, month);
                assert_eq!(grid.rows.len(), 2 + weeks_in_month(year, month) + 1);
                assert_eq!(grid.rows[0].len(), 1);
                assert_eq!(grid.rows[1].len(), 7);
                assert!(grid.week_rows().iter().all(|row| row.len() == 7));
                assert_eq!(grid.navigation_row().unwrap().len(), 3);
            }
        }
    }

    #[test]
    fn test_every_day_appears_once_in_order() {
        for month in 1..=12 {
            let grid = picker().render_month(2025, month);
            let expected: Vec<u32> = (1..=days_in_month(2025, month)).collect();
            assert_eq!(grid.days(), expected);
        }
    }

    #[test]
    fn test_february_leap_year() {
        let grid = picker().render_month(2024, 2);
        let days = grid.days();
        assert_eq!(days.iter().filter(|d| **d == 29).count(), 1);
        assert!(!days.contains(&30));
        assert!(!days.contains(&31));
    }

    #[test]
    fn test_monday_first_layout() {
        // 1 February 2024 was a Thursday
        let grid = picker().render_month(2024, 2);
        let first_week = &grid.week_rows()[0];
        assert_eq!(first_week[0].label, " ");
        assert_eq!(first_week[2].label, " ");
        assert_eq!(first_week[3].label, "1");
        assert_eq!(first_week[6].label, "4");

        let last_week = grid.week_rows().last().unwrap();
        assert_eq!(last_week[3].label, "29");
        assert_eq!(last_week[4].label, " ");
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_blanks() {
        // 1 January 2024 was a Monday
        let grid = picker().render_month(2024, 1);
        assert_eq!(grid.week_rows()[0][0].label, "1");
        assert_eq!(grid.week_rows().len(), 5);
    }

    #[test]
    fn test_header_and_weekday_labels() {
        let grid = picker().render_month(2024, 2);
        let header = grid.header().unwrap();
        assert_eq!(header.label, "February 2024");
        assert_eq!(header.data, "simple_calendar:IGNORE:2024:2:0");

        let labels: Vec<&str> = grid.rows[1].iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);

        let ru = CalendarPicker::default().render_month(2024, 2);
        assert_eq!(ru.header().unwrap().label, "Февраль 2024");
        assert_eq!(ru.rows[1][0].label, "Пн");
    }

    #[test]
    fn test_navigation_row() {
        let grid = picker().render_month(2024, 7);
        let nav = grid.navigation_row().unwrap();
        assert_eq!(nav[0].label, "<");
        assert_eq!(nav[0].data, "simple_calendar:PREV-MONTH:2024:7:1");
        assert_eq!(nav[1].data, "simple_calendar:IGNORE:2024:7:0");
        assert_eq!(nav[2].label, ">");
        assert_eq!(nav[2].data, "simple_calendar:NEXT-MONTH:2024:7:1");
    }

    #[test]
    fn test_blank_cells_are_ignored() {
        let grid = picker().render_month(2024, 2);
        let blank = &grid.week_rows()[0][0];
        assert_eq!(
            blank.selection().unwrap(),
            CalendarSelection::ignore(2024, 2)
        );
    }

    #[test]
    fn test_render_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let grid = picker().render_from(today, None, None);
        assert_eq!(grid.header().unwrap().label, "October 2026");

        let grid = picker().render_from(today, Some(2025), None);
        assert_eq!(grid.header().unwrap().label, "October 2025");
    }

    #[test]
    fn test_render_out_of_range_month_does_not_panic() {
        let grid = picker().render_month(2024, 13);
        assert_eq!(grid.header().unwrap().label, "January 2025");

        let grid = picker().render_month(2024, 0);
        assert_eq!(grid.header().unwrap().label, "December 2023");

        let grid = picker().render_month(i32::MAX, 12);
        assert!(!grid.days().is_empty());
    }

    #[test]
    fn test_navigation_clamps_at_year_bounds() {
        let min_year = NaiveDate::MIN.year();
        let outcome = picker()
            .interpret(CalendarSelection::prev_month(min_year, 1))
            .unwrap();
        assert!(matches!(outcome, Outcome::Redraw { year, month: 12, .. } if year == min_year));

        let max_year = NaiveDate::MAX.year();
        let outcome = picker()
            .interpret(CalendarSelection::next_month(max_year, 12))
            .unwrap();
        assert!(matches!(outcome, Outcome::Redraw { year, month: 1, .. } if year == max_year));
    }

    #[test]
    fn test_pick_day() {
        let grid = picker().render_month(2024, 2);
        let button = grid
            .week_rows()
            .iter()
            .flatten()
            .find(|b| b.label == "15")
            .unwrap();

        let outcome = picker().interpret(button.selection().unwrap()).unwrap();
        assert_eq!(
            outcome,
            Outcome::DateChosen(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())
        );
    }

    #[test]
    fn test_pick_invalid_day() {
        let result = picker().interpret(CalendarSelection::pick_day(2024, 4, 31));
        assert_eq!(
            result,
            Err(CalendarError::InvalidDate {
                year: 2024,
                month: 4,
                day: 31
            })
        );

        let result = picker().interpret(CalendarSelection::pick_day(2023, 2, 29));
        assert!(matches!(result, Err(CalendarError::InvalidDate { .. })));
    }

    #[test]
    fn test_prev_month_rollover() {
        let outcome = picker()
            .interpret(CalendarSelection::prev_month(2024, 1))
            .unwrap();
        match outcome {
            Outcome::Redraw { year, month, grid } => {
                assert_eq!((year, month), (2023, 12));
                assert_eq!(grid, picker().render_month(2023, 12));
            }
            other => panic!("Expected redraw, got {other:?}"),
        }
    }

    #[test]
    fn test_next_month_rollover() {
        let outcome = picker()
            .interpret(CalendarSelection::next_month(2024, 12))
            .unwrap();
        match outcome {
            Outcome::Redraw { year, month, .. } => assert_eq!((year, month), (2025, 1)),
            other => panic!("Expected redraw, got {other:?}"),
        }
    }

    #[test]
    fn test_navigation_within_year() {
        let outcome = picker()
            .interpret(CalendarSelection::next_month(2024, 6))
            .unwrap();
        assert!(matches!(
            outcome,
            Outcome::Redraw {
                year: 2024,
                month: 7,
                ..
            }
        ));
    }

    #[test]
    fn test_ignore_is_always_no_selection() {
        for (year, month, day) in [(2024, 2, 0), (2024, 2, 15), (0, 12, 99), (-1, 1, 1)] {
            let selection = CalendarSelection::new(CalendarAction::Ignore, year, month, day);
            assert_eq!(picker().interpret(selection), Ok(Outcome::NoSelection));
        }
    }

    #[test]
    fn test_process_malformed_payload() {
        assert_eq!(picker().process("garbage"), Ok(Outcome::NoSelection));
        assert_eq!(
            picker().process("simple_calendar:DAY:2024"),
            Ok(Outcome::NoSelection)
        );
    }

    #[test]
    fn test_process_day_payload() {
        let outcome = picker().process("simple_calendar:DAY:2024:2:15").unwrap();
        assert_eq!(
            outcome,
            Outcome::DateChosen(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())
        );
    }

    #[test]
    fn test_grid_serializes() {
        let grid = picker().render_month(2024, 2);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["rows"][0][0]["label"], "February 2024");
        assert_eq!(json["rows"][0][0]["data"], "simple_calendar:IGNORE:2024:2:0");
    }
}
