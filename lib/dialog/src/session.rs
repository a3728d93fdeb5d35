//! Per-user dialog sessions.
//!
//! Every chat user owns one [`Session`]. The [`SessionStore`] hands out an
//! exclusive guard per user, so one user's messages are handled one at a
//! time in arrival order while other users proceed in parallel.

use chrono::{DateTime, Duration, Utc};
use kind_words_core::ChatUserId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

/// Where a user is in the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DialogState {
    /// The main menu. Initial state.
    #[default]
    MainMenu,
    /// The category keyboard is shown.
    ChoosingCategory,
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainMenu => f.write_str("main_menu"),
            Self::ChoosingCategory => f.write_str("choosing_category"),
        }
    }
}

/// A user's dialog session.
#[derive(Debug, Clone)]
pub struct Session {
    /// The user who owns this session.
    pub user_id: ChatUserId,
    /// Current menu state.
    pub state: DialogState,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session last handled a message.
    pub last_active_at: DateTime<Utc>,
    /// Number of messages handled.
    pub messages_handled: u64,
}

impl Session {
    /// Creates a session in the main menu.
    #[must_use]
    pub fn new(user_id: ChatUserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            state: DialogState::MainMenu,
            created_at: now,
            last_active_at: now,
            messages_handled: 0,
        }
    }

    /// Records a handled message and moves to `next`.
    pub fn advance(&mut self, next: DialogState) {
        self.state = next;
        self.messages_handled += 1;
        self.last_active_at = Utc::now();
    }

    /// Returns true if the session has been idle since before `cutoff`.
    #[must_use]
    pub fn idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active_at < cutoff
    }
}

type Slot = Arc<Mutex<Session>>;

/// Concurrent map from user to session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<ChatUserId, Slot>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a user's session, creating it on first use.
    ///
    /// Waiters are served in the order they called this method.
    pub async fn acquire(&self, user_id: ChatUserId) -> OwnedMutexGuard<Session> {
        self.slot(user_id).lock_owned().await
    }

    fn slot(&self, user_id: ChatUserId) -> Slot {
        if let Some(slot) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
        {
            return Arc::clone(slot);
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            sessions
                .entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(Session::new(user_id)))),
        )
    }

    /// Returns a user's current state without creating a session.
    pub async fn state_of(&self, user_id: ChatUserId) -> Option<DialogState> {
        let slot = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned()?;
        let session = slot.lock().await;
        Some(session.state)
    }

    /// Removes sessions idle for longer than `max_idle`.
    ///
    /// Sessions that are in use, or about to be, are kept. A `max_idle`
    /// reaching past the earliest representable time removes nothing.
    /// Returns the number of sessions removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let Some(cutoff) = Utc::now().checked_sub_signed(max_idle) else {
            debug!(?max_idle, "Idle limit out of range; skipping eviction");
            return 0;
        };
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();

        // A strong count above one means a handler holds or awaits this slot.
        sessions.retain(|_, slot| {
            Arc::strong_count(slot) > 1
                || slot
                    .try_lock()
                    .map(|session| !session.idle_since(cutoff))
                    .unwrap_or(true)
        });

        before - sessions.len()
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
