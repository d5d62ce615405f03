//! Command and callback handlers
//!
//! Implementation of all bot update handlers

use anyhow::Result;
use booking_core::{CalendarPicker, Outcome};
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use crate::commands::Command;
use crate::dialogue::{BookingDialogue, State};
use crate::keyboard::calendar_markup;

/// Format used when echoing the chosen date back to the user
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Handle the /start command
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    dialogue: BookingDialogue,
    picker: CalendarPicker,
) -> Result<()> {
    let grid = picker.render(None, None);

    bot.send_message(msg.chat.id, "📅 Выберите дату:")
        .reply_markup(calendar_markup(&grid))
        .await?;

    dialogue.update(State::AwaitingDate).await?;

    tracing::info!("Chat {} started picking a date", msg.chat.id);

    Ok(())
}

/// Handle the /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = format!(
        "<b>Запись на приём</b>\n\n{}\n\n\
         Нажмите /start и выберите день в календаре. \
         Стрелки «&lt;» и «&gt;» листают месяцы.",
        Command::descriptions()
    );

    bot.send_message(msg.chat.id, help_text)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}

/// Handle the /cancel command
pub async fn handle_cancel(bot: Bot, msg: Message, dialogue: BookingDialogue) -> Result<()> {
    dialogue.update(State::Start).await?;

    bot.send_message(msg.chat.id, "❌ Выбор даты отменён. Чтобы начать заново, нажмите /start")
        .await?;

    tracing::info!("Chat {} cancelled date selection", msg.chat.id);

    Ok(())
}

/// Handle plain text messages
pub async fn handle_text_message(bot: Bot, msg: Message, dialogue: BookingDialogue) -> Result<()> {
    let response = match dialogue.get_or_default().await? {
        State::AwaitingDate => "👆 Пожалуйста, выберите дату в календаре выше.",
        State::Start => "Чтобы выбрать дату, нажмите /start",
    };

    bot.send_message(msg.chat.id, response).await?;

    Ok(())
}

/// Handle a press on a calendar button
///
/// The callback is always acknowledged. Navigation edits the calendar message
/// in place, a picked day ends the dialogue.
pub async fn handle_calendar_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: BookingDialogue,
    picker: CalendarPicker,
) -> Result<()> {
    let data = q.data.as_deref().unwrap_or_default();
    let chat_id = dialogue.chat_id();
    tracing::debug!(%chat_id, data, "Calendar callback received");

    bot.answer_callback_query(q.id.clone()).await?;

    if dialogue.get_or_default().await? != State::AwaitingDate {
        dialogue.update(State::AwaitingDate).await?;
        tracing::info!("Chat {} used a stale calendar, state recovered to AwaitingDate", chat_id);
    }

    match picker.process(data) {
        Ok(Outcome::NoSelection) => {}
        Ok(Outcome::Redraw { year, month, grid }) => {
            tracing::debug!(%chat_id, year, month, "Redrawing calendar");

            if let Some(message) = q.message.as_ref() {
                bot.edit_message_reply_markup(message.chat().id, message.id())
                    .reply_markup(calendar_markup(&grid))
                    .await?;
            }
        }
        Ok(Outcome::DateChosen(date)) => {
            bot.send_message(chat_id, format!("Вы выбрали: {}", date.format(DATE_FORMAT)))
                .await?;

            dialogue.update(State::Start).await?;

            tracing::info!("Chat {} picked {}", chat_id, date);
        }
        Err(e) => {
            tracing::warn!("Rejected calendar selection from chat {}: {}", chat_id, e);

            bot.send_message(chat_id, "❌ Такой даты не существует, выберите другую.")
                .await?;
        }
    }

    Ok(())
}
