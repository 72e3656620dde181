//! Presentation variant tags for list and detail pages.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of presentation variants with stable names.
pub trait ViewVariant: Copy + Eq + 'static {
    /// Every member in declaration order.
    const ALL: &'static [Self];

    /// Stable variant name.
    fn as_str(self) -> &'static str;

    /// Looks up a member by exact name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == name)
    }
}

/// List-style presentation (topic and category indexes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListViewType {
    List,
    Grid,
}

/// Detail-style presentation (single content pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailViewType {
    Full,
    Focus,
    Summary,
    Gallery,
    Article,
    Video,
    Audio,
    Image,
    Document,
    Quote,
    Link,
    Code,
}

impl ViewVariant for ListViewType {
    const ALL: &'static [Self] = &[Self::List, Self::Grid];

    fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}

impl ViewVariant for DetailViewType {
    const ALL: &'static [Self] = &[
        Self::Full,
        Self::Focus,
        Self::Summary,
        Self::Gallery,
        Self::Article,
        Self::Video,
        Self::Audio,
        Self::Image,
        Self::Document,
        Self::Quote,
        Self::Link,
        Self::Code,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Focus => "focus",
            Self::Summary => "summary",
            Self::Gallery => "gallery",
            Self::Article => "article",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Document => "document",
            Self::Quote => "quote",
            Self::Link => "link",
            Self::Code => "code",
        }
    }
}

impl Display for ListViewType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for DetailViewType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailViewType, ListViewType, ViewVariant};

    #[test]
    fn list_variants_are_list_and_grid() {
        let names: Vec<_> = ListViewType::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(names, ["list", "grid"]);
    }

    #[test]
    fn detail_variants_keep_declaration_order() {
        let names: Vec<_> = DetailViewType::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            [
                "full", "focus", "summary", "gallery", "article", "video", "audio", "image",
                "document", "quote", "link", "code"
            ]
        );
    }

    #[test]
    fn names_round_trip_and_serde_agrees() {
        for variant in DetailViewType::ALL {
            assert_eq!(DetailViewType::from_name(variant.as_str()), Some(*variant));
            let json = serde_json::to_string(variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
        assert_eq!(ListViewType::from_name("carousel"), None);
    }
}
