//! Index and detail view descriptors.

use crate::model::content::Content;
use crate::model::error::AddressResult;
use crate::model::topic::{Category, Topic};
use crate::model::view_type::{DetailViewType, ListViewType, ViewVariant};
use crate::repo::content_type_repo::ContentTypeRegistry;
use crate::view::page_type::PageTypeable;
use std::fmt::{Display, Formatter};

/// Listing page for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicIndexView<'a> {
    topic: &'a Topic,
    view_type: ListViewType,
}

impl<'a> TopicIndexView<'a> {
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "topics/topic_index.html";

    pub fn new(topic: &'a Topic) -> Self {
        Self {
            topic,
            view_type: ListViewType::Grid,
        }
    }

    pub fn with_view_type(self, view_type: ListViewType) -> Self {
        Self { view_type, ..self }
    }

    pub fn topic(&self) -> &'a Topic {
        self.topic
    }

    pub fn view_type(&self) -> ListViewType {
        self.view_type
    }

    pub fn default_template_name(&self) -> &'static str {
        Self::DEFAULT_TEMPLATE_NAME
    }

    pub fn get_url(&self) -> String {
        self.topic.get_absolute_url()
    }

    pub fn template_candidates(&self) -> Vec<String> {
        vec![
            format!("topics/{}.html", self.topic.slug()),
            Self::DEFAULT_TEMPLATE_NAME.to_string(),
        ]
    }
}

impl PageTypeable for TopicIndexView<'_> {
    type Variant = ListViewType;

    fn supported_variants(&self) -> &'static [ListViewType] {
        ListViewType::ALL
    }

    fn default_variant(&self) -> ListViewType {
        ListViewType::Grid
    }
}

impl Display for TopicIndexView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TopicIndexView for topic {}", self.topic.name())
    }
}

/// Listing page for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIndexView<'a> {
    category: &'a Category,
    view_type: ListViewType,
}

impl<'a> CategoryIndexView<'a> {
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "topics/category_index.html";

    pub fn new(category: &'a Category) -> Self {
        Self {
            category,
            view_type: ListViewType::Grid,
        }
    }

    pub fn with_view_type(self, view_type: ListViewType) -> Self {
        Self { view_type, ..self }
    }

    pub fn category(&self) -> &'a Category {
        self.category
    }

    pub fn view_type(&self) -> ListViewType {
        self.view_type
    }

    pub fn default_template_name(&self) -> &'static str {
        Self::DEFAULT_TEMPLATE_NAME
    }

    pub fn get_url(&self) -> String {
        self.category.get_absolute_url()
    }

    pub fn template_candidates(&self) -> Vec<String> {
        vec![
            format!(
                "topics/{}/{}.html",
                self.category.topic().slug(),
                self.category.slug()
            ),
            Self::DEFAULT_TEMPLATE_NAME.to_string(),
        ]
    }
}

impl PageTypeable for CategoryIndexView<'_> {
    type Variant = ListViewType;

    fn supported_variants(&self) -> &'static [ListViewType] {
        ListViewType::ALL
    }

    fn default_variant(&self) -> ListViewType {
        ListViewType::Grid
    }
}

impl Display for CategoryIndexView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CategoryIndexView for category {}", self.category.name())
    }
}

/// Detail page for one content item.
///
/// URL and template names need the content type registry because the type
/// token is derived from the resolved type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDetailView<'a> {
    content: &'a Content,
    view_type: DetailViewType,
}

impl<'a> ContentDetailView<'a> {
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "topics/content_detail.html";

    pub fn new(content: &'a Content) -> Self {
        Self {
            content,
            view_type: DetailViewType::Full,
        }
    }

    pub fn with_view_type(self, view_type: DetailViewType) -> Self {
        Self { view_type, ..self }
    }

    pub fn content(&self) -> &'a Content {
        self.content
    }

    pub fn view_type(&self) -> DetailViewType {
        self.view_type
    }

    pub fn default_template_name(&self) -> &'static str {
        Self::DEFAULT_TEMPLATE_NAME
    }

    /// # Errors
    /// - `AddressError::Repo` when the registry lookup fails.
    pub fn get_url<R>(&self, registry: &R) -> AddressResult<String>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        self.content.get_absolute_url(registry)
    }

    /// Exact item template, then per-type template, then the default.
    ///
    /// # Errors
    /// - `AddressError::Repo` when the registry lookup fails.
    pub fn template_candidates<R>(&self, registry: &R) -> AddressResult<Vec<String>>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        let type_slug = self.content.content_type_slug(registry)?;
        Ok(self.templates_with(&type_slug))
    }

    /// URL and template candidates from a single type lookup.
    ///
    /// # Errors
    /// - `AddressError::Repo` when the registry lookup fails.
    pub fn resolve<R>(&self, registry: &R) -> AddressResult<ResolvedDetail>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        let type_slug = self.content.content_type_slug(registry)?;
        Ok(ResolvedDetail {
            url: self.content.absolute_url_with(&type_slug),
            view_type: self.view_type,
            template_candidates: self.templates_with(&type_slug),
        })
    }

    fn templates_with(&self, type_slug: &str) -> Vec<String> {
        let category = self.content.category();
        let base = format!("topics/{}/{}", category.topic().slug(), category.slug());

        vec![
            format!("{base}/{}.html", self.content.segment_with(type_slug)),
            format!("{base}/{type_slug}.html"),
            Self::DEFAULT_TEMPLATE_NAME.to_string(),
        ]
    }
}

/// URL and template candidates for one detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDetail {
    pub url: String,
    pub view_type: DetailViewType,
    pub template_candidates: Vec<String>,
}

impl PageTypeable for ContentDetailView<'_> {
    type Variant = DetailViewType;

    fn supported_variants(&self) -> &'static [DetailViewType] {
        DetailViewType::ALL
    }

    fn default_variant(&self) -> DetailViewType {
        DetailViewType::Full
    }
}

impl Display for ContentDetailView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentDetailView for content {}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryIndexView, ContentDetailView, TopicIndexView};
    use crate::model::content::Content;
    use crate::model::content_type::ContentTypeDescriptor;
    use crate::model::topic::{Category, Topic};
    use crate::model::view_type::{DetailViewType, ListViewType};
    use crate::repo::content_type_repo::{ContentTypeRegistry, InMemoryContentTypeRegistry};
    use crate::repo::RepoResult;
    use crate::view::page_type::PageTypeable;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRegistry {
        lookups: Cell<u32>,
    }

    impl ContentTypeRegistry for CountingRegistry {
        fn get_by_label(&self, _label: &str) -> RepoResult<Option<ContentTypeDescriptor>> {
            self.lookups.set(self.lookups.get() + 1);
            Ok(None)
        }

        fn get_by_id(&self, _id: i64) -> RepoResult<Option<ContentTypeDescriptor>> {
            Ok(None)
        }
    }

    #[test]
    fn list_views_support_list_and_grid_defaulting_to_grid() {
        let topic = Topic::new("Art");
        let view = TopicIndexView::new(&topic);
        assert_eq!(view.variant_names(), vec!["list", "grid"]);
        assert_eq!(view.view_type(), ListViewType::Grid);
        assert_eq!(view.default_variant(), ListViewType::Grid);
        assert_eq!(view.parse_variant(" list "), Some(ListViewType::List));
        assert_eq!(view.parse_variant("gallery"), None);
    }

    #[test]
    fn detail_view_supports_twelve_variants() {
        let category = Category::new(Topic::new("Notes"), "Ikigai");
        let content = Content::new(category, "note", 1, "slug", "sample-slug");
        let view = ContentDetailView::new(&content).with_view_type(DetailViewType::Quote);

        assert_eq!(view.supported_variants().len(), 12);
        assert_eq!(view.view_type(), DetailViewType::Quote);
        assert_eq!(view.default_variant(), DetailViewType::Full);
        assert_eq!(view.parse_variant("code"), Some(DetailViewType::Code));
    }

    #[test]
    fn category_view_url_matches_entity_url() {
        let category = Category::new(Topic::new("Art"), "Digital Art");
        let view = CategoryIndexView::new(&category).with_view_type(ListViewType::List);
        assert_eq!(view.get_url(), category.get_absolute_url());
        assert_eq!(
            view.template_candidates(),
            vec!["topics/art/digital-art.html", "topics/category_index.html"]
        );
        assert_eq!(view.to_string(), "CategoryIndexView for category Digital Art");
    }

    #[test]
    fn content_view_template_candidates_narrow_to_default() {
        let registry = InMemoryContentTypeRegistry::new();
        let category = Category::new(Topic::new("Notes"), "Ikigai");
        let content = Content::new(category, "note", 1, "slug", "sample-slug");
        let view = ContentDetailView::new(&content);

        assert_eq!(
            view.template_candidates(&registry).unwrap(),
            vec![
                "topics/notes/ikigai/note::sample-slug.html",
                "topics/notes/ikigai/note.html",
                "topics/content_detail.html",
            ]
        );
        assert_eq!(
            view.get_url(&registry).unwrap(),
            "/topics/notes/categories/ikigai/note::sample-slug/"
        );
    }

    #[test]
    fn content_view_resolve_looks_up_type_once() {
        let registry = CountingRegistry::default();
        let category = Category::new(Topic::new("Notes"), "Ikigai");
        let content = Content::new(category, "unlisted_kind", 1, "slug", "sample-slug");
        let view = ContentDetailView::new(&content).with_view_type(DetailViewType::Code);

        let detail = view.resolve(&registry).unwrap();
        assert_eq!(registry.lookups.get(), 1);
        assert_eq!(detail.view_type, DetailViewType::Code);
        assert_eq!(
            detail.url,
            "/topics/notes/categories/ikigai/unlisted-kind::sample-slug/"
        );
        assert_eq!(
            detail.template_candidates,
            vec![
                "topics/notes/ikigai/unlisted-kind::sample-slug.html",
                "topics/notes/ikigai/unlisted-kind.html",
                "topics/content_detail.html",
            ]
        );
    }
}
