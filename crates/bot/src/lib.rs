//! Booking Bot - Telegram bot with an inline calendar picker
//!
//! This crate binds the calendar picker from `booking-core` to Telegram.

pub mod commands;
pub mod config;
pub mod dialogue;
mod handlers;
pub mod keyboard;

use anyhow::Result;
use booking_core::{CalendarPicker, CalendarSelection};
use commands::Command;
use config::{Config, Transport};
use dialogue::{BookingDialogue, State};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;

pub use handlers::DATE_FORMAT;

/// Run the Telegram bot service
///
/// Uses long polling or a webhook listener depending on `config.transport`
/// and runs until Ctrl+C.
pub async fn run_bot(config: Config) -> Result<()> {
    let bot = Bot::new(&config.core.bot_token);
    let picker = CalendarPicker::new(config.core.calendar_locale);

    bot.set_my_commands(Command::bot_commands()).await?;
    tracing::info!("Bot initialized, starting dispatcher");

    let mut dispatcher = Dispatcher::builder(bot.clone(), build_handler_tree())
        .dependencies(dptree::deps![InMemStorage::<State>::new(), picker])
        .enable_ctrlc_handler()
        .build();

    match config.transport {
        Transport::Polling => {
            tracing::info!("Receiving updates via long polling");
            dispatcher.dispatch().await;
        }
        Transport::Webhook { url, addr } => {
            tracing::info!("Receiving updates via webhook {} on {}", url, addr);
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    Ok(())
}

/// Build the update handler schema
pub fn build_handler_tree() -> UpdateHandler<teloxide::RequestError> {
    let message_handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<State>, State>()
        // First try to handle as a command
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_message));

    let callback_handler = Update::filter_callback_query()
        .enter_dialogue::<CallbackQuery, InMemStorage<State>, State>()
        .branch(
            dptree::filter(|q: CallbackQuery| {
                q.data
                    .as_deref()
                    .is_some_and(CalendarSelection::is_calendar_data)
            })
            .endpoint(handle_callback),
        );

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

/// Route commands to their handlers
async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: BookingDialogue,
    picker: CalendarPicker,
) -> ResponseResult<()> {
    tracing::info!("Handling command: {:?}", cmd);

    let result = match cmd {
        Command::Start => handlers::handle_start(bot, msg, dialogue, picker).await,
        Command::Help => handlers::handle_help(bot, msg).await,
        Command::Cancel => handlers::handle_cancel(bot, msg, dialogue).await,
    };

    if let Err(e) = result {
        tracing::error!("Error handling command: {}", e);
    }

    Ok(())
}

/// Handle non-command text messages
async fn handle_message(bot: Bot, msg: Message, dialogue: BookingDialogue) -> ResponseResult<()> {
    let result = handlers::handle_text_message(bot, msg, dialogue).await;

    if let Err(e) = result {
        tracing::error!("Error handling text message: {}", e);
    }

    Ok(())
}

/// Handle calendar button presses
async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: BookingDialogue,
    picker: CalendarPicker,
) -> ResponseResult<()> {
    let result = handlers::handle_calendar_callback(bot, q, dialogue, picker).await;

    if let Err(e) = result {
        tracing::error!("Error handling calendar callback: {}", e);
    }

    Ok(())
}
