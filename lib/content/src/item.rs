//! Wire types exchanged with the Content Service.

use kind_words_core::{AdviceId, Category};
use serde::{Deserialize, Deserializer, Serialize};

/// One advice item as returned by `GET /api/advice/`.
///
/// The service answers 200 with a filler item (id `0`, category `"default"`)
/// when nothing matches, so a well-formed item is not necessarily a stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    /// Record identifier. Only `text` and `category` are needed to show
    /// advice, so a missing or non-integer `id` decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<AdviceId>,
    /// The advice text.
    pub text: String,
    /// Display label of the category (not the code).
    pub category: String,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<AdviceId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_i64()).map(AdviceId::new))
}

impl AdviceItem {
    /// Returns the reason this item is unusable, if any.
    #[must_use]
    pub fn defect(&self) -> Option<&'static str> {
        if self.text.trim().is_empty() {
            Some("empty advice text")
        } else {
            None
        }
    }
}

/// Query parameters of an advice request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdviceQuery {
    /// Restrict to one category; `None` means any category.
    pub category: Option<Category>,
}

impl AdviceQuery {
    /// A query without a category filter.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// A query restricted to one category.
    #[must_use]
    pub fn in_category(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }

    /// Returns the query-string pairs for this query.
    ///
    /// The `category` pair is present only when a category is set.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        self.category
            .map(|c| vec![("category", c.code())])
            .unwrap_or_default()
    }
}

impl From<Option<Category>> for AdviceQuery {
    fn from(category: Option<Category>) -> Self {
        Self { category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_deserializes_service_body() {
        let item: AdviceItem = serde_json::from_str(
            r#"{"text": "Ты справишься!", "category": "💪 Мотивация", "id": 7}"#,
        )
        .expect("deserialize");

        assert_eq!(item.id, Some(AdviceId::new(7)));
        assert_eq!(item.category, "💪 Мотивация");
        assert!(item.defect().is_none());
    }

    #[test]
    fn id_is_optional_on_the_wire() {
        for body in [
            r#"{"text": "Ты справишься!", "category": "💪 Мотивация"}"#,
            r#"{"text": "Ты справишься!", "category": "💪 Мотивация", "id": null}"#,
            r#"{"text": "Ты справишься!", "category": "💪 Мотивация", "id": "seven"}"#,
        ] {
            let item: AdviceItem = serde_json::from_str(body).expect("deserialize");
            assert_eq!(item.id, None);
            assert_eq!(item.text, "Ты справишься!");
        }
    }

    #[test]
    fn missing_id_is_not_serialized() {
        let item = AdviceItem {
            id: None,
            text: "Ты справишься!".to_string(),
            category: "default".to_string(),
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn blank_text_is_a_defect() {
        let item = AdviceItem {
            id: Some(AdviceId::new(1)),
            text: "   ".to_string(),
            category: "default".to_string(),
        };
        assert!(item.defect().is_some());
    }

    #[test]
    fn query_pairs_only_carry_category_when_set() {
        assert!(AdviceQuery::any().pairs().is_empty());
        assert_eq!(
            AdviceQuery::in_category(Category::Comfort).pairs(),
            vec![("category", "comfort")]
        );
    }
}
