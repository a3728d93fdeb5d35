//! Advice categories recognized by the Content Service.
//!
//! The set is closed: adding a category means updating this enum, the
//! Content Service catalog, and the chat keyboards together.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category code attached to every advice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Motivation,
    Comfort,
    Inspiration,
    Wisdom,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 4] = [
        Category::Motivation,
        Category::Comfort,
        Category::Inspiration,
        Category::Wisdom,
    ];

    /// Returns the wire code used in the `category` query parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Comfort => "comfort",
            Self::Inspiration => "inspiration",
            Self::Wisdom => "wisdom",
        }
    }

    /// Returns the human-facing label, which doubles as the chat button text.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Motivation => "💪 Мотивация",
            Self::Comfort => "🤗 Утешение",
            Self::Inspiration => "✨ Вдохновение",
            Self::Wisdom => "🧠 Мудрость",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned for a string that is not a known category code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category code: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.code().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Motivation".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Category::Wisdom).expect("serialize");
        assert_eq!(json, "\"wisdom\"");
    }
}
