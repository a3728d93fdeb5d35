//! The dialog state machine.
//!
//! [`transition`] is pure: the next state depends only on the current state
//! and the input. Side effects are described by the returned [`Action`] and
//! carried out by the controller.

use crate::category::CategorySelection;
use crate::fetcher::FallbackContext;
use crate::input::Input;
use crate::session::DialogState;
use crate::smalltalk::{self, SmalltalkTopic};

/// What to do in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch advice and render it, or the fallback for `context`.
    FetchAdvice {
        selection: CategorySelection,
        context: FallbackContext,
    },
    /// Reply with a fixed text.
    Say(Notice),
}

/// Replies that need no outside data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Greet the user and show the main menu.
    Welcome,
    /// Show the category keyboard.
    ShowCategories,
    /// Show the about text.
    ShowAbout,
    /// Back from the category keyboard via its button.
    BackToMainMenu,
    /// Back to the main menu via cancel.
    Cancelled,
    /// Canned small-talk reply.
    Smalltalk(SmalltalkTopic),
    /// Point the user at the menu.
    MenuHint,
}

/// The outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub next: DialogState,
}

impl Step {
    const fn to(action: Action, next: DialogState) -> Self {
        Self { action, next }
    }

    const fn say(notice: Notice, next: DialogState) -> Self {
        Self::to(Action::Say(notice), next)
    }
}

/// Decides the action and next state for `input` in `state`.
#[must_use]
pub fn transition(state: DialogState, input: &Input) -> Step {
    use DialogState::{ChoosingCategory, MainMenu};

    match (state, input) {
        (_, Input::Start) => Step::say(Notice::Welcome, MainMenu),
        (_, Input::Cancel) => Step::say(Notice::Cancelled, MainMenu),

        (MainMenu, Input::RandomAdvice) => Step::to(
            Action::FetchAdvice {
                selection: CategorySelection::Any,
                context: FallbackContext::Random,
            },
            MainMenu,
        ),
        (MainMenu, Input::ByCategory) => Step::say(Notice::ShowCategories, ChoosingCategory),
        (MainMenu, Input::About) => Step::say(Notice::ShowAbout, MainMenu),

        (ChoosingCategory, Input::Pick(selection)) => Step::to(
            Action::FetchAdvice {
                selection: *selection,
                context: FallbackContext::Category,
            },
            ChoosingCategory,
        ),
        (ChoosingCategory, Input::MainMenu) => Step::say(Notice::BackToMainMenu, MainMenu),

        (_, Input::Text(text)) => {
            let notice = smalltalk::classify(text).map_or(Notice::MenuHint, Notice::Smalltalk);
            Step::say(notice, state)
        }

        // Buttons of a keyboard that is not on screen.
        (
            ChoosingCategory,
            Input::RandomAdvice | Input::ByCategory | Input::About,
        )
        | (MainMenu, Input::Pick(_) | Input::MainMenu) => Step::say(Notice::MenuHint, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DialogState::{ChoosingCategory, MainMenu};

    fn step(state: DialogState, text: &str) -> Step {
        transition(state, &Input::parse(text, state))
    }

    /// Folds a sequence of inputs, starting from the main menu.
    fn replay<'a>(inputs: impl IntoIterator<Item = &'a str>) -> DialogState {
        inputs
            .into_iter()
            .fold(MainMenu, |state, text| step(state, text).next)
    }

    #[test]
    fn main_menu_table() {
        assert_eq!(
            step(MainMenu, "🎲 Случайный совет"),
            Step::to(
                Action::FetchAdvice {
                    selection: CategorySelection::Any,
                    context: FallbackContext::Random,
                },
                MainMenu
            )
        );
        assert_eq!(
            step(MainMenu, "📁 По категории"),
            Step::say(Notice::ShowCategories, ChoosingCategory)
        );
        assert_eq!(step(MainMenu, "ℹ️ О боте"), Step::say(Notice::ShowAbout, MainMenu));
    }

    #[test]
    fn category_table() {
        assert_eq!(
            step(ChoosingCategory, "🧠 Мудрость"),
            Step::to(
                Action::FetchAdvice {
                    selection: CategorySelection::Wisdom,
                    context: FallbackContext::Category,
                },
                ChoosingCategory
            )
        );
        assert_eq!(
            step(ChoosingCategory, "🎲 Любая категория"),
            Step::to(
                Action::FetchAdvice {
                    selection: CategorySelection::Any,
                    context: FallbackContext::Category,
                },
                ChoosingCategory
            )
        );
        assert_eq!(
            step(ChoosingCategory, "🏠 Главное меню"),
            Step::say(Notice::BackToMainMenu, MainMenu)
        );
        assert_eq!(
            step(ChoosingCategory, "/cancel"),
            Step::say(Notice::Cancelled, MainMenu)
        );
    }

    #[test]
    fn free_text_keeps_state() {
        for state in [MainMenu, ChoosingCategory] {
            assert_eq!(step(state, "qwerty"), Step::say(Notice::MenuHint, state));
            assert_eq!(
                step(state, "спасибо!"),
                Step::say(Notice::Smalltalk(SmalltalkTopic::Thanks), state)
            );
        }
    }

    #[test]
    fn start_resets_to_main_menu() {
        assert_eq!(step(ChoosingCategory, "/start"), Step::say(Notice::Welcome, MainMenu));
    }

    #[test]
    fn main_menu_button_is_idempotent() {
        let state = replay(["📁 По категории", "🏠 Главное меню"]);
        assert_eq!(state, MainMenu);

        for history in [
            vec![],
            vec!["📁 По категории", "💪 Мотивация", "qwerty"],
            vec!["ℹ️ О боте", "📁 По категории", "🎲 Любая категория"],
        ] {
            let mut state = replay(history);
            if state == MainMenu {
                state = step(state, "📁 По категории").next;
            }
            assert_eq!(state, ChoosingCategory);

            for _ in 0..3 {
                state = step(state, "🏠 Главное меню").next;
                assert_eq!(state, MainMenu);
            }
        }
    }

    #[test]
    fn replay_is_deterministic() {
        let inputs = ["📁 По категории", "🤗 Утешение", "привет", "ℹ️ О боте"];
        assert_eq!(replay(inputs), replay(inputs));
        assert_eq!(replay(inputs), ChoosingCategory);
    }
}
