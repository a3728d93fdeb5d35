//! Classification of incoming messages.

use crate::category::CategorySelection;
use crate::keyboard::{ABOUT, BY_CATEGORY, Keyboard, MAIN_MENU, RANDOM_ADVICE};
use crate::session::DialogState;

/// A message as understood in the sender's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `/start`.
    Start,
    /// `/cancel`, or the bare word in either language.
    Cancel,
    /// Main menu button: random advice.
    RandomAdvice,
    /// Main menu button: open the category keyboard.
    ByCategory,
    /// Main menu button: about.
    About,
    /// Category keyboard button.
    Pick(CategorySelection),
    /// Category keyboard button: back to the main menu.
    MainMenu,
    /// Anything else.
    Text(String),
}

const CANCEL_WORDS: &[&str] = &["cancel", "отмена"];

impl Input {
    /// Classifies `text` against the buttons that are on screen in `state`.
    ///
    /// Buttons of the other keyboard are treated as free text.
    #[must_use]
    pub fn parse(text: &str, state: DialogState) -> Self {
        let text = text.trim();

        if let Some(command) = parse_command(text) {
            match command.as_str() {
                "start" => return Self::Start,
                "cancel" => return Self::Cancel,
                _ => return Self::Text(text.to_string()),
            }
        }

        let lowered = text.to_lowercase();
        if CANCEL_WORDS.contains(&lowered.as_str()) {
            return Self::Cancel;
        }

        match state {
            DialogState::MainMenu => match text {
                RANDOM_ADVICE => Self::RandomAdvice,
                BY_CATEGORY => Self::ByCategory,
                ABOUT => Self::About,
                _ => Self::Text(text.to_string()),
            },
            DialogState::ChoosingCategory => match text {
                MAIN_MENU => Self::MainMenu,
                label if Keyboard::categories().contains(label) => {
                    Self::Pick(CategorySelection::resolve(label))
                }
                _ => Self::Text(text.to_string()),
            },
        }
    }
}

/// Returns the lowercased command name of `/name[@bot] [args]`.
fn parse_command(text: &str) -> Option<String> {
    let head = text.strip_prefix('/')?.split_whitespace().next()?;
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_in_any_state() {
        for state in [DialogState::MainMenu, DialogState::ChoosingCategory] {
            assert_eq!(Input::parse("/start", state), Input::Start);
            assert_eq!(Input::parse("/cancel", state), Input::Cancel);
            assert_eq!(Input::parse("/Cancel@kind_words_bot", state), Input::Cancel);
            assert_eq!(Input::parse("  cancel ", state), Input::Cancel);
            assert_eq!(Input::parse("Отмена", state), Input::Cancel);
        }
    }

    #[test]
    fn unknown_command_is_text() {
        assert_eq!(
            Input::parse("/help", DialogState::MainMenu),
            Input::Text("/help".to_string())
        );
        assert_eq!(
            Input::parse("/", DialogState::MainMenu),
            Input::Text("/".to_string())
        );
    }

    #[test]
    fn main_menu_buttons() {
        let state = DialogState::MainMenu;
        assert_eq!(Input::parse("🎲 Случайный совет", state), Input::RandomAdvice);
        assert_eq!(Input::parse("📁 По категории", state), Input::ByCategory);
        assert_eq!(Input::parse("ℹ️ О боте", state), Input::About);
    }

    #[test]
    fn category_buttons() {
        let state = DialogState::ChoosingCategory;
        assert_eq!(
            Input::parse("💪 Мотивация", state),
            Input::Pick(CategorySelection::Motivation)
        );
        assert_eq!(
            Input::parse("🎲 Любая категория", state),
            Input::Pick(CategorySelection::Any)
        );
        assert_eq!(Input::parse("🏠 Главное меню", state), Input::MainMenu);
    }

    #[test]
    fn every_category_key_picks_its_selection() {
        for selection in CategorySelection::ALL {
            assert_eq!(
                Input::parse(selection.label(), DialogState::ChoosingCategory),
                Input::Pick(selection)
            );
        }
    }

    #[test]
    fn buttons_of_the_other_keyboard_are_text() {
        assert!(matches!(
            Input::parse("💪 Мотивация", DialogState::MainMenu),
            Input::Text(_)
        ));
        assert!(matches!(
            Input::parse("ℹ️ О боте", DialogState::ChoosingCategory),
            Input::Text(_)
        ));
    }
}
