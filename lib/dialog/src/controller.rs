//! The dialog controller.
//!
//! Entry point for every chat message: resolves the sender's session, runs
//! the state machine, performs the resulting action and renders a reply.

use crate::fetcher::AdviceFetcher;
use crate::input::Input;
use crate::keyboard::Keyboard;
use crate::machine::{Action, transition};
use crate::reply::{self, Reply};
use crate::session::SessionStore;
use kind_words_content::AdviceSource;
use kind_words_core::ChatUserId;
use std::time::Duration;
use tracing::{debug, instrument};

/// One incoming chat message.
#[derive(Debug, Clone, Copy)]
pub struct Incoming<'a> {
    pub user_id: ChatUserId,
    pub first_name: Option<&'a str>,
    /// `None` for messages without text (stickers, photos, ...).
    pub text: Option<&'a str>,
}

/// Per-user menu dialog over an advice source.
#[derive(Debug)]
pub struct DialogController<S> {
    sessions: SessionStore,
    fetcher: AdviceFetcher<S>,
}

impl<S: AdviceSource> DialogController<S> {
    /// Creates a controller whose advice requests are bounded by `fetch_timeout`.
    #[must_use]
    pub fn new(source: S, fetch_timeout: Duration) -> Self {
        Self {
            sessions: SessionStore::new(),
            fetcher: AdviceFetcher::new(source, fetch_timeout),
        }
    }

    /// Returns the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handles one message and returns the reply to send.
    ///
    /// The sender's session stays locked until the reply is rendered, so a
    /// second message from the same user waits for this one.
    #[instrument(skip_all, fields(user = %incoming.user_id))]
    pub async fn handle(&self, incoming: &Incoming<'_>) -> Reply {
        let mut session = self.sessions.acquire(incoming.user_id).await;
        let previous = session.state;

        let Some(text) = incoming.text else {
            session.advance(previous);
            return reply::menu_hint(Keyboard::for_state(previous));
        };

        let step = transition(previous, &Input::parse(text, previous));
        let keyboard = Keyboard::for_state(step.next);

        let reply = match step.action {
            Action::FetchAdvice { selection, context } => {
                let outcome = self
                    .fetcher
                    .fetch_advice(selection.category(), context)
                    .await;
                reply::render_advice(&outcome, keyboard)
            }
            Action::Say(notice) => reply::render_notice(notice, incoming.first_name, keyboard),
        };

        session.advance(step.next);
        debug!(from = %previous, to = %step.next, action = ?step.action, "Handled message");

        reply
    }
}
