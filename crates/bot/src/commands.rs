//! Bot command definitions
//!
//! Defines all Telegram bot commands and their parsing logic

use teloxide::utils::command::BotCommands;

/// All bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Поддерживаемые команды:")]
pub enum Command {
    #[command(description = "Выбрать дату записи")]
    Start,

    #[command(description = "Показать это сообщение")]
    Help,

    #[command(description = "Отменить выбор даты")]
    Cancel,
}
