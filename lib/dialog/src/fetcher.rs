//! Advice fetching with local fallback.
//!
//! [`AdviceFetcher::fetch_advice`] always produces something to show: the
//! Content Service's advice, or a hand-written fallback when the service
//! fails, answers late, or answers garbage.

use crate::category::CategorySelection;
use kind_words_content::{AdviceQuery, AdviceSource, FetchError};
use kind_words_core::Category;
use std::time::Duration;
use tracing::{debug, warn};

/// Default bound on one advice request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Which flow asked for advice; picks the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackContext {
    /// "Random advice" from the main menu.
    Random,
    /// A pick on the category keyboard.
    Category,
}

/// Advice ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResult {
    pub text: String,
    pub category_label: String,
}

/// Result of a fetch: the service's advice or a local fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    Fetched(AdviceResult),
    Fallback {
        result: AdviceResult,
        reason: FetchError,
    },
}

impl AdviceOutcome {
    /// The advice to show, whichever arm this is.
    #[must_use]
    pub fn result(&self) -> &AdviceResult {
        match self {
            Self::Fetched(result) | Self::Fallback { result, .. } => result,
        }
    }

    /// Returns true for a local fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

const RANDOM_SERVICE_ERROR: &str =
    "💖 Помни: ты заслуживаешь счастья и любви!\nКаждый день - это новый шанс.";
const RANDOM_UNREACHABLE: &str = "🌻 Сегодня будет хороший день! Верь в себя и свои силы!";
const CATEGORY_SERVICE_ERROR: &str = "🌼 Ты прекрасен таким, какой ты есть!\nПрими себя сегодня и позволь миру увидеть твой свет.";
const CATEGORY_UNREACHABLE: &str =
    "🌿 Иногда просто нужно сделать глубокий вдох...\nИ помнить, что всё временно.";

/// Returns the fallback text for a failed fetch.
///
/// A service that answered with an error status gets different wording
/// from one that could not be reached or answered garbage.
#[must_use]
pub fn fallback_text(context: FallbackContext, reason: &FetchError) -> &'static str {
    let answered = matches!(reason, FetchError::UnexpectedStatus { .. });
    match (context, answered) {
        (FallbackContext::Random, true) => RANDOM_SERVICE_ERROR,
        (FallbackContext::Random, false) => RANDOM_UNREACHABLE,
        (FallbackContext::Category, true) => CATEGORY_SERVICE_ERROR,
        (FallbackContext::Category, false) => CATEGORY_UNREACHABLE,
    }
}

/// Fetches advice from a source, falling back locally on failure.
#[derive(Debug)]
pub struct AdviceFetcher<S> {
    source: S,
    timeout: Duration,
}

impl<S: AdviceSource> AdviceFetcher<S> {
    /// Creates a fetcher bounded by `timeout` per request.
    #[must_use]
    pub fn new(source: S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Fetches one advice item, optionally restricted to `category`.
    ///
    /// Makes a single attempt. Never fails: every error path resolves to a
    /// fallback for `context`.
    pub async fn fetch_advice(
        &self,
        category: Option<Category>,
        context: FallbackContext,
    ) -> AdviceOutcome {
        let query = AdviceQuery::from(category);
        let attempt = tokio::time::timeout(self.timeout, self.source.fetch(&query))
            .await
            .unwrap_or(Err(FetchError::Timeout));

        match attempt {
            Ok(item) => {
                debug!(advice_id = ?item.id, ?category, "Advice fetched");
                AdviceOutcome::Fetched(AdviceResult {
                    text: item.text,
                    category_label: item.category,
                })
            }
            Err(reason) => {
                warn!(error = %reason, ?category, ?context, "Falling back to local advice");
                let label = category.map_or(CategorySelection::Any.label(), Category::display_label);
                AdviceOutcome::Fallback {
                    result: AdviceResult {
                        text: fallback_text(context, &reason).to_string(),
                        category_label: label.to_string(),
                    },
                    reason,
                }
            }
        }
    }
}
