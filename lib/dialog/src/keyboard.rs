//! Reply keyboards shown under the bot's messages.

use crate::category::CategorySelection;
use crate::session::DialogState;

/// Main menu: fetch advice from any category.
pub const RANDOM_ADVICE: &str = "🎲 Случайный совет";
/// Main menu: open the category keyboard.
pub const BY_CATEGORY: &str = "📁 По категории";
/// Main menu: about the bot.
pub const ABOUT: &str = "ℹ️ О боте";
/// Category menu: go back.
pub const MAIN_MENU: &str = "🏠 Главное меню";

/// A grid of button labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    /// Rows of button labels, top to bottom.
    pub rows: Vec<Vec<&'static str>>,
    /// Ask the client to shrink the keyboard to fit its buttons.
    pub resize: bool,
}

impl Keyboard {
    /// The main menu keyboard.
    #[must_use]
    pub fn main_menu() -> Self {
        Self {
            rows: vec![vec![RANDOM_ADVICE, BY_CATEGORY], vec![ABOUT]],
            resize: true,
        }
    }

    /// The category keyboard: two categories per row, then "any" and "back".
    #[must_use]
    pub fn categories() -> Self {
        let mut rows: Vec<Vec<&'static str>> = CategorySelection::ALL
            .iter()
            .filter(|s| s.category().is_some())
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.to_vec())
            .collect();
        rows.push(vec![CategorySelection::Any.label(), MAIN_MENU]);

        Self { rows, resize: true }
    }

    /// The keyboard that belongs under replies in the given state.
    #[must_use]
    pub fn for_state(state: DialogState) -> Self {
        match state {
            DialogState::MainMenu => Self::main_menu(),
            DialogState::ChoosingCategory => Self::categories(),
        }
    }

    /// Returns true if some button carries this label.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.rows.iter().flatten().any(|b| *b == label)
    }
}
