//! Content addressing service.
//!
//! # Responsibility
//! - Resolve content URLs, payloads and detail-page templates using the
//!   configured registry and payload store.
//!
//! # Invariants
//! - The service never bypasses `Content` resolution rules.
//! - The service remains storage-agnostic.

use crate::model::content::Content;
use crate::model::content_type::Payload;
use crate::model::error::AddressResult;
use crate::model::view_type::DetailViewType;
use crate::repo::content_type_repo::ContentTypeRegistry;
use crate::repo::payload_repo::PayloadStore;
use crate::view::descriptor::{ContentDetailView, ResolvedDetail};
use log::{error, info};

/// Service wrapper over a registry and a payload store.
pub struct AddressService<R: ContentTypeRegistry, S: PayloadStore> {
    registry: R,
    store: S,
}

impl<R: ContentTypeRegistry, S: PayloadStore> AddressService<R, S> {
    pub fn new(registry: R, store: S) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn content_type_slug(&self, content: &Content) -> AddressResult<String> {
        content.content_type_slug(&self.registry)
    }

    pub fn content_url(&self, content: &Content) -> AddressResult<String> {
        content.get_absolute_url(&self.registry)
    }

    /// Fetches the payload behind `content`.
    ///
    /// Returns resolution and not-found errors unchanged.
    pub fn content_object(&self, content: &Content) -> AddressResult<Payload> {
        match content.content_object(&self.registry, &self.store) {
            Ok(payload) => {
                info!(
                    "event=content_object module=service status=ok object_id={}",
                    content.object_id()
                );
                Ok(payload)
            }
            Err(err) => {
                error!(
                    "event=content_object module=service status=error object_id={} error={}",
                    content.object_id(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Derives the detail page for `content`; `None` selects the default variant.
    pub fn detail_view(
        &self,
        content: &Content,
        view_type: Option<DetailViewType>,
    ) -> AddressResult<ResolvedDetail> {
        let mut view = ContentDetailView::new(content);
        if let Some(view_type) = view_type {
            view = view.with_view_type(view_type);
        }

        match view.resolve(&self.registry) {
            Ok(detail) => Ok(detail),
            Err(err) => {
                error!(
                    "event=detail_view module=service status=error object_id={} error={}",
                    content.object_id(),
                    err
                );
                Err(err)
            }
        }
    }
}
