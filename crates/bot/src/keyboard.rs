//! Conversion of calendar grids into Telegram inline keyboards

use booking_core::CalendarGrid;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Build an inline keyboard with the same row layout as `grid`
pub fn calendar_markup(grid: &CalendarGrid) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(grid.rows().iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.data.clone()))
            .collect::<Vec<_>>()
    }))
}
