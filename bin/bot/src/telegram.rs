//! Telegram transport for the dialog controller.
//!
//! Long-polls updates with a teloxide [`Dispatcher`], feeds every message to
//! the [`DialogController`] and sends back its [`Reply`].

use kind_words_content::HttpAdviceSource;
use kind_words_core::ChatUserId;
use kind_words_dialog::{DialogController, Incoming, Keyboard, Reply, TextFormat};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ParseMode};
use tracing::{debug, info, warn};

/// The controller as wired in production.
pub type BotController = DialogController<HttpAdviceSource>;

/// Converts a dialog keyboard to a Telegram reply keyboard.
#[must_use]
pub fn markup(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(*label)).collect::<Vec<_>>());
    let markup = KeyboardMarkup::new(rows);
    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}

async fn send(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let request = bot
        .send_message(chat_id, reply.text)
        .reply_markup(markup(&reply.keyboard));
    match reply.format {
        TextFormat::Html => request.parse_mode(ParseMode::Html).await?,
        TextFormat::Plain => request.await?,
    };
    Ok(())
}

async fn on_message(bot: Bot, msg: Message, controller: Arc<BotController>) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = %msg.chat.id, "Ignoring message without a sender");
        return Ok(());
    };

    let incoming = Incoming {
        user_id: ChatUserId::new(user.id.0),
        first_name: Some(user.first_name.as_str()),
        text: msg.text(),
    };
    let reply = controller.handle(&incoming).await;

    if let Err(e) = send(&bot, msg.chat.id, reply).await {
        warn!(error = %e, chat_id = %msg.chat.id, "Failed to send reply");
        return Err(e);
    }
    Ok(())
}

/// Runs the bot until interrupted.
pub async fn run(bot: Bot, controller: Arc<BotController>) {
    let handler = dptree::entry().branch(Update::filter_message().endpoint(on_message));

    info!("Starting dispatcher with long polling");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in message handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    warn!("Dispatcher stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(markup: &KeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .keyboard
            .iter()
            .map(|row| row.iter().map(|b| b.text.clone()).collect())
            .collect()
    }

    #[test]
    fn main_menu_markup() {
        let markup = markup(&Keyboard::main_menu());
        assert_eq!(
            labels(&markup),
            vec![
                vec!["🎲 Случайный совет".to_string(), "📁 По категории".to_string()],
                vec!["ℹ️ О боте".to_string()],
            ]
        );
    }

    #[test]
    fn category_markup_keeps_grid() {
        let markup = markup(&Keyboard::categories());
        let rows = labels(&markup);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(rows[2][1], "🏠 Главное меню");
    }
}
