//! Per-chat dialogue state
//!
//! The calendar itself is stateless; the dialogue only records whether the
//! chat is currently expected to pick a date.

use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// State of the date-picking dialogue
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Start,
    AwaitingDate,
}

pub type BookingDialogue = Dialogue<State, InMemStorage<State>>;
