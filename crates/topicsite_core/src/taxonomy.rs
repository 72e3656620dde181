//! Site taxonomy documents.
//!
//! # Responsibility
//! - Deserialize the JSON topic list that seeds a site.
//! - Build `Topic` and `Category` values from it.
//!
//! # Invariants
//! - Topic and category names must be non-blank.
//! - Integer subcategory entries are used by their decimal form.

use crate::model::topic::{Category, Topic};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

#[derive(Debug)]
pub enum TaxonomyError {
    Parse(serde_json::Error),
    /// Topic at `topic_index` (or one of its categories) has a blank name.
    EmptyName { topic_index: usize },
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid taxonomy document: {err}"),
            Self::EmptyName { topic_index } => {
                write!(f, "taxonomy topic #{topic_index} contains a blank name")
            }
        }
    }
}

impl Error for TaxonomyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::EmptyName { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TaxonomyError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Subcategory entry; some documents store date-like names as integers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryName {
    Text(String),
    Number(i64),
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicEntry {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<CategoryName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyDocument {
    pub main_topics: Vec<TopicEntry>,
}

/// Topics and categories built from one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub topics: Vec<Topic>,
    pub categories: Vec<Category>,
}

impl Taxonomy {
    /// Categories owned by `topic`, in document order.
    pub fn categories_of<'a>(&'a self, topic: &'a Topic) -> impl Iterator<Item = &'a Category> {
        self.categories
            .iter()
            .filter(move |category| category.topic() == topic)
    }
}

impl TaxonomyDocument {
    pub fn from_json(text: &str) -> TaxonomyResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the taxonomy values.
    ///
    /// # Errors
    /// - `TaxonomyError::EmptyName` when a topic or category name is blank.
    pub fn build(&self) -> TaxonomyResult<Taxonomy> {
        let mut taxonomy = Taxonomy::default();
        for (topic_index, entry) in self.main_topics.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(TaxonomyError::EmptyName { topic_index });
            }
            let topic = Topic::new(entry.name.as_str());
            for subcategory in &entry.subcategories {
                let name = subcategory.to_string();
                if name.trim().is_empty() {
                    return Err(TaxonomyError::EmptyName { topic_index });
                }
                taxonomy.categories.push(Category::new(topic.clone(), name));
            }
            taxonomy.topics.push(topic);
        }
        Ok(taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::{TaxonomyDocument, TaxonomyError};

    #[test]
    fn builds_topics_and_categories_in_order() {
        let document = TaxonomyDocument::from_json(
            r#"{"mainTopics": [
                {"name": "Art", "subcategories": ["Drawing", "Digital_Art"]},
                {"name": "Diary", "subcategories": [20230725, "Learned"]}
            ]}"#,
        )
        .expect("document should parse");
        let taxonomy = document.build().expect("taxonomy should build");

        assert_eq!(taxonomy.topics.len(), 2);
        assert_eq!(taxonomy.categories.len(), 4);
        assert_eq!(
            taxonomy.categories[1].get_absolute_url(),
            "/topics/art/categories/digital-art/"
        );
        assert_eq!(taxonomy.categories[2].name(), "20230725");
        assert_eq!(taxonomy.categories_of(&taxonomy.topics[1]).count(), 2);
    }

    #[test]
    fn rejects_blank_names() {
        let document =
            TaxonomyDocument::from_json(r#"{"mainTopics": [{"name": "  ", "subcategories": []}]}"#)
                .unwrap();
        assert!(matches!(
            document.build(),
            Err(TaxonomyError::EmptyName { topic_index: 0 })
        ));
    }

    #[test]
    fn reports_parse_errors() {
        assert!(matches!(
            TaxonomyDocument::from_json("{\"topics\": []}"),
            Err(TaxonomyError::Parse(_))
        ));
    }
}
