//! In-memory advice catalog.
//!
//! Records are loaded once from a JSON seed and never mutated afterwards, so
//! the catalog is shared between requests behind an `Arc` without locking.

use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use kind_words_content::AdviceItem;
use kind_words_core::{AdviceId, Category};
use rand::Rng;
use rand::seq::SliceRandom;
use rootcause::prelude::Report;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Minimum length of an advice text, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

/// Text of the filler item returned when nothing matches.
pub const DEFAULT_TEXT: &str = "Верь в себя! У тебя всё получится! 💫";

/// Category label of the filler item.
pub const DEFAULT_CATEGORY: &str = "default";

/// Seed bundled with the binary.
const BUNDLED_SEED: &str = include_str!("../seed/advice.json");

/// One stored advice record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub id: AdviceId,
    pub text: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    /// Inactive records are kept but never served.
    pub is_active: bool,
}

impl Advice {
    /// Converts the record to its wire shape.
    #[must_use]
    pub fn to_item(&self) -> AdviceItem {
        AdviceItem {
            id: Some(self.id),
            text: self.text.clone(),
            category: self.category.display_label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: AdviceId,
    text: String,
    category: Category,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

/// The filler item served when no active record matches a request.
#[must_use]
pub fn default_item() -> AdviceItem {
    AdviceItem {
        id: Some(AdviceId::new(0)),
        text: DEFAULT_TEXT.to_string(),
        category: DEFAULT_CATEGORY.to_string(),
    }
}

/// Validated, read-only set of advice records.
#[derive(Debug, Clone, Default)]
pub struct AdviceCatalog {
    records: Vec<Advice>,
}

impl AdviceCatalog {
    /// Builds a catalog from records.
    ///
    /// # Errors
    ///
    /// Rejects texts shorter than [`MIN_TEXT_CHARS`], duplicate IDs and the
    /// reserved ID `0`.
    pub fn new(records: Vec<Advice>) -> Result<Self, Report<CatalogError>> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.get() == 0 {
                return Err(CatalogError::ReservedId.into());
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId { id: record.id }.into());
            }
            if record.text.trim().chars().count() < MIN_TEXT_CHARS {
                return Err(CatalogError::TextTooShort {
                    id: record.id,
                    min_chars: MIN_TEXT_CHARS,
                }
                .into());
            }
        }
        Ok(Self { records })
    }

    /// Parses and validates a JSON seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a record fails validation.
    pub fn from_json(json: &str) -> Result<Self, Report<CatalogError>> {
        let seed: Vec<SeedRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidSeed {
                reason: e.to_string(),
            })?;

        let now = Utc::now();
        let records = seed
            .into_iter()
            .map(|r| Advice {
                id: r.id,
                text: r.text,
                category: r.category,
                created_at: r.created_at.unwrap_or(now),
                is_active: r.is_active,
            })
            .collect();
        Self::new(records)
    }

    /// Loads a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid seed.
    pub fn from_path(path: &Path) -> Result<Self, Report<CatalogError>> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Loads the seed bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled seed is invalid.
    pub fn bundled() -> Result<Self, Report<CatalogError>> {
        Self::from_json(BUNDLED_SEED)
    }

    /// Number of records, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that can be served.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active).count()
    }

    /// Picks one active record uniformly at random.
    ///
    /// A recognized category code restricts the pick to that category; an
    /// unrecognized code is ignored. Falls back to [`default_item`] when no
    /// active record qualifies.
    pub fn pick<R: Rng + ?Sized>(&self, category: Option<&str>, rng: &mut R) -> AdviceItem {
        let filter = category.and_then(|code| code.parse::<Category>().ok());

        let candidates: Vec<&Advice> = self
            .records
            .iter()
            .filter(|r| r.is_active)
            .filter(|r| filter.is_none_or(|c| r.category == c))
            .collect();

        candidates
            .choose(rng)
            .map_or_else(default_item, |advice| advice.to_item())
    }
}
