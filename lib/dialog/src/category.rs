//! Mapping from category button labels to Content Service filters.
//!
//! This table is the only place that knows which labels exist; it has to
//! follow the Content Service's category set by hand.

use kind_words_core::Category;

/// What the user picked on the category keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    Motivation,
    Comfort,
    Inspiration,
    Wisdom,
    /// No filter.
    Any,
}

impl CategorySelection {
    /// All selections in keyboard order.
    pub const ALL: [CategorySelection; 5] = [
        CategorySelection::Motivation,
        CategorySelection::Comfort,
        CategorySelection::Inspiration,
        CategorySelection::Wisdom,
        CategorySelection::Any,
    ];

    /// The button label for this selection.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.category() {
            Some(category) => category.display_label(),
            None => "🎲 Любая категория",
        }
    }

    /// The category filter this selection sends, `None` for [`Self::Any`].
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Motivation => Some(Category::Motivation),
            Self::Comfort => Some(Category::Comfort),
            Self::Inspiration => Some(Category::Inspiration),
            Self::Wisdom => Some(Category::Wisdom),
            Self::Any => None,
        }
    }

    /// Matches a label exactly.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Matches a label, treating anything unknown as [`Self::Any`].
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::Any)
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        match category {
            Category::Motivation => Self::Motivation,
            Category::Comfort => Self::Comfort,
            Category::Inspiration => Self::Inspiration,
            Category::Wisdom => Self::Wisdom,
        }
    }
}
