//! Topic and category taxonomy nodes.
//!
//! # Responsibility
//! - Hold the two upper levels of the Topic -> Category -> Content tree.
//! - Derive slugs, canonical URLs and template names on demand.
//!
//! # Invariants
//! - Values are immutable after construction; a rename is a new value.
//! - A category URL is always nested under its owning topic's slug.
//! - URLs are computed from the current names, never cached.

use crate::slug::normalize;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Top-level taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    name: String,
}

impl Topic {
    /// Fallback template used when no topic-specific template exists.
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "topics/default.html";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> String {
        normalize(&self.name)
    }

    /// `/topics/{slug}/`
    pub fn get_absolute_url(&self) -> String {
        format!("/topics/{}/", self.slug())
    }

    /// `/topics/{slug}/categories/`
    pub fn get_category_url(&self) -> String {
        format!("/topics/{}/categories/", self.slug())
    }

    pub fn default_template_name(&self) -> &'static str {
        Self::DEFAULT_TEMPLATE_NAME
    }

    /// Topic-specific template name.
    pub fn template_name(&self) -> String {
        format!("topics/{}.html", self.slug())
    }

    /// Candidate templates, most specific first.
    pub fn template_candidates(&self) -> Vec<String> {
        vec![
            self.template_name(),
            self.default_template_name().to_string(),
        ]
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Second-level taxonomy node owned by exactly one topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    topic: Topic,
    name: String,
}

impl Category {
    pub fn new(topic: Topic, name: impl Into<String>) -> Self {
        Self {
            topic,
            name: name.into(),
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> String {
        normalize(&self.name)
    }

    /// `/topics/{topic_slug}/categories/{slug}/`
    pub fn get_absolute_url(&self) -> String {
        format!("{}{}/", self.topic.get_category_url(), self.slug())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.topic.name, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Topic};

    #[test]
    fn topic_derives_slug_and_urls() {
        let topic = Topic::new("Theories and Ideas");
        assert_eq!(topic.slug(), "theories-and-ideas");
        assert_eq!(topic.get_absolute_url(), "/topics/theories-and-ideas/");
        assert_eq!(
            topic.get_category_url(),
            "/topics/theories-and-ideas/categories/"
        );
    }

    #[test]
    fn topic_template_candidates_end_with_default() {
        let topic = Topic::new("Music");
        assert_eq!(
            topic.template_candidates(),
            vec!["topics/music.html", "topics/default.html"]
        );
    }

    #[test]
    fn category_url_is_nested_under_topic() {
        let category = Category::new(Topic::new("Art"), "Digital Art");
        assert_eq!(
            category.get_absolute_url(),
            "/topics/art/categories/digital-art/"
        );
        assert_eq!(category.to_string(), "Art/Digital Art");
    }

    #[test]
    fn renamed_topic_moves_category_url() {
        let before = Category::new(Topic::new("Art"), "Painting");
        let after = Category::new(Topic::new("Fine Art"), before.name());
        assert_eq!(
            after.get_absolute_url(),
            "/topics/fine-art/categories/painting/"
        );
        assert_ne!(before.get_absolute_url(), after.get_absolute_url());
    }
}
