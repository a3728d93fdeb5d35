//! Rendering of bot replies.

use crate::fetcher::AdviceOutcome;
use crate::keyboard::Keyboard;
use crate::machine::Notice;
use crate::smalltalk::SmalltalkTopic;
use std::borrow::Cow;

/// Longest advice text shown, in UTF-16 code units. Telegram rejects
/// messages over 4096 units after entity parsing.
pub const MAX_ADVICE_UNITS: usize = 4000;

/// Longest category label shown, in UTF-16 code units.
pub const MAX_LABEL_UNITS: usize = 64;

/// How the reply text is to be interpreted by the chat client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

/// A message to send back, with the keyboard to show under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Keyboard,
}

impl Reply {
    /// A plain-text reply.
    #[must_use]
    pub fn plain(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard,
        }
    }

    /// An HTML reply. The caller is responsible for escaping.
    #[must_use]
    pub fn html(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            keyboard,
        }
    }
}

const CHOOSE_CATEGORY: &str = "Выбери категорию совета:";
const BACK_TO_MAIN_MENU: &str = "Возвращаемся в главное меню:";
const CANCELLED: &str = "Возвращаемся в главное меню!";
const THANKS: &str = "Спасибо тебе за добрые слова! ❤️\nТы делаешь этот мир лучше!";
const STATUS: &str =
    "У меня всё прекрасно, ведь я могу помогать таким замечательным людям как ты! 🌟";
const MENU_HINT: &str = "Я лучше понимаю команды из меню 😊\nИспользуй кнопки ниже:";

const ABOUT: &str = "<b>Обо мне</b> 🤗

Я - бот поддержки, созданный чтобы дарить немного тепла и доброты.

<b>Что я умею:</b>
• Присылать случайные добрые советы
• Фильтровать советы по категориям
• Поддерживать в трудную минуту

<b>Категории советов:</b>
💪 Мотивация - для поднятия духа
🤗 Утешение - когда грустно
✨ Вдохновение - для новых идей
🧠 Мудрость - жизненные уроки

<i>Администраторы добавляют новые советы через веб-интерфейс.</i>

Просто нажми \"🎲 Случайный совет\" или выбери категорию!";

/// The greeting for `/start` and greeting small talk.
#[must_use]
pub fn welcome_text(first_name: Option<&str>) -> String {
    let salutation = match first_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Привет, {name}! 🌸"),
        None => "Привет! 🌸".to_string(),
    };
    format!(
        "{salutation}\n\nЯ - бот поддержки и добрых слов. Иногда всем нам нужно немного тепла и ободрения.\n\nВыбери действие ниже:"
    )
}

/// Escapes text for Telegram's HTML parse mode.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the outcome of an advice fetch.
///
/// Fetched advice gets a bold category header; fallbacks are shown as is.
#[must_use]
pub fn render_advice(outcome: &AdviceOutcome, keyboard: Keyboard) -> Reply {
    match outcome {
        AdviceOutcome::Fetched(result) => Reply::html(
            format!(
                "<b>{}</b> ✨\n\n{}",
                escape_html(&clip(&result.category_label, MAX_LABEL_UNITS)),
                escape_html(&clip(&result.text, MAX_ADVICE_UNITS))
            ),
            keyboard,
        ),
        AdviceOutcome::Fallback { result, .. } => Reply::plain(result.text.clone(), keyboard),
    }
}

/// Cuts `text` to at most `max_units` UTF-16 code units, ending it with `…`
/// when anything was dropped.
fn clip(text: &str, max_units: usize) -> Cow<'_, str> {
    if text.encode_utf16().count() <= max_units {
        return Cow::Borrowed(text);
    }

    let budget = max_units.saturating_sub(1);
    let mut used = 0;
    let end = text
        .char_indices()
        .find_map(|(idx, c)| {
            used += c.len_utf16();
            (used > budget).then_some(idx)
        })
        .unwrap_or(text.len());
    Cow::Owned(format!("{}…", &text[..end]))
}

/// Renders a fixed reply.
#[must_use]
pub fn render_notice(notice: Notice, first_name: Option<&str>, keyboard: Keyboard) -> Reply {
    match notice {
        Notice::Welcome | Notice::Smalltalk(SmalltalkTopic::Greeting) => {
            Reply::plain(welcome_text(first_name), keyboard)
        }
        Notice::ShowCategories => Reply::plain(CHOOSE_CATEGORY, keyboard),
        Notice::ShowAbout => Reply::html(ABOUT, keyboard),
        Notice::BackToMainMenu => Reply::plain(BACK_TO_MAIN_MENU, keyboard),
        Notice::Cancelled => Reply::plain(CANCELLED, keyboard),
        Notice::Smalltalk(SmalltalkTopic::Thanks) => Reply::plain(THANKS, keyboard),
        Notice::Smalltalk(SmalltalkTopic::Status) => Reply::plain(STATUS, keyboard),
        Notice::MenuHint => Reply::plain(MENU_HINT, keyboard),
    }
}

/// The menu hint, for messages that carry no text at all.
#[must_use]
pub fn menu_hint(keyboard: Keyboard) -> Reply {
    Reply::plain(MENU_HINT, keyboard)
}
