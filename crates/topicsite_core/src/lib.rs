//! Core addressing logic for the topic site.
//! This crate is the single source of truth for slugs, URLs and template names
//! of the Topic -> Category -> Content hierarchy.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod routing;
pub mod service;
pub mod slug;
pub mod taxonomy;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::content::{content_type_fallback_count, Content, ContentTypeRef, UidTypeRef};
pub use model::content_type::{ContentTypeDescriptor, Payload};
pub use model::error::{AddressError, AddressResult};
pub use model::topic::{Category, Topic};
pub use model::uid::{FieldDescriptor, UidTypeChoice, UidValue};
pub use model::view_type::{DetailViewType, ListViewType, ViewVariant};
pub use repo::content_type_repo::{
    ContentTypeRegistry, InMemoryContentTypeRegistry, SqliteContentTypeRegistry,
};
pub use repo::payload_repo::{PayloadStore, SqlitePayloadStore};
pub use repo::{RepoError, RepoResult};
pub use routing::{
    parse_path, route_pattern, split_content_segment, ContentRoute, Route, RouteError,
};
pub use service::address_service::AddressService;
pub use taxonomy::{Taxonomy, TaxonomyDocument, TaxonomyError};
pub use view::descriptor::{CategoryIndexView, ContentDetailView, ResolvedDetail, TopicIndexView};
pub use view::page_type::{PageTypeable, VIEW_PARAM_NAMES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
