//! Addressable content leaf node.
//!
//! # Responsibility
//! - Pair a category with a polymorphic payload pointer
//!   (`content_type` + `object_id`) and a typed public uid.
//! - Derive the `{type}::{uid}` URL segment and resolve uid/content types.
//!
//! # Invariants
//! - URLs expose `content_type_slug` and `uid_slug`, never `object_id`.
//! - Neither URL token contains an unescaped `::`.
//! - `content_type_slug` recovers only from an unregistered label: it falls
//!   back to the label's own slug, and the fallback is logged and counted.
//!   Registry failures propagate.

use crate::model::content_type::{ContentTypeDescriptor, Payload};
use crate::model::error::{AddressError, AddressResult};
use crate::model::topic::Category;
use crate::model::uid::{UidTypeChoice, UidValue};
use crate::repo::content_type_repo::ContentTypeRegistry;
use crate::repo::payload_repo::PayloadStore;
use crate::slug::{decode_uid, encode_uid, normalize};
use log::warn;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Delimiter between type token and uid token inside one path segment.
pub const CONTENT_SEGMENT_DELIMITER: &str = "::";

static CONTENT_TYPE_FALLBACKS: AtomicU64 = AtomicU64::new(0);

/// Number of `content_type_slug` fallbacks taken by this process.
pub fn content_type_fallback_count() -> u64 {
    CONTENT_TYPE_FALLBACKS.load(Ordering::Relaxed)
}

/// Content type as either a resolved descriptor or a registry label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentTypeRef {
    Resolved(ContentTypeDescriptor),
    Label(String),
}

impl Display for ContentTypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(descriptor) => f.write_str(&descriptor.app_label),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<ContentTypeDescriptor> for ContentTypeRef {
    fn from(value: ContentTypeDescriptor) -> Self {
        Self::Resolved(value)
    }
}

impl From<&str> for ContentTypeRef {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for ContentTypeRef {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Uid type as either a resolved member or its stored name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UidTypeRef {
    Resolved(UidTypeChoice),
    Name(String),
}

impl From<UidTypeChoice> for UidTypeRef {
    fn from(value: UidTypeChoice) -> Self {
        Self::Resolved(value)
    }
}

impl From<&str> for UidTypeRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for UidTypeRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Leaf node owned by exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Content {
    category: Category,
    content_type: ContentTypeRef,
    object_id: i64,
    uid_type: UidTypeRef,
    uid: UidValue,
}

impl Content {
    pub fn new(
        category: Category,
        content_type: impl Into<ContentTypeRef>,
        object_id: i64,
        uid_type: impl Into<UidTypeRef>,
        uid: impl Into<UidValue>,
    ) -> Self {
        Self {
            category,
            content_type: content_type.into(),
            object_id,
            uid_type: uid_type.into(),
            uid: uid.into(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn content_type(&self) -> &ContentTypeRef {
        &self.content_type
    }

    pub fn object_id(&self) -> i64 {
        self.object_id
    }

    pub fn uid_type(&self) -> &UidTypeRef {
        &self.uid_type
    }

    pub fn uid(&self) -> &UidValue {
        &self.uid
    }

    /// URL type token: slug of the resolved type's human-readable name.
    ///
    /// Falls back to the slug of the raw label when the label is not
    /// registered.
    ///
    /// # Errors
    /// - `AddressError::Repo` when the registry lookup itself fails.
    pub fn content_type_slug<R>(&self, registry: &R) -> AddressResult<String>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        match self.resolve_content_type(registry) {
            Ok(descriptor) => Ok(normalize(&descriptor.name)),
            Err(err @ AddressError::ContentTypeNotFound(_)) => {
                let raw = self.content_type.to_string();
                CONTENT_TYPE_FALLBACKS.fetch_add(1, Ordering::Relaxed);
                warn!(
                    "event=content_type_fallback module=model status=fallback label={} reason={}",
                    raw, err
                );
                Ok(normalize(&raw))
            }
            Err(err) => Err(err),
        }
    }

    /// URL uid token: percent-encoded string form of `uid`.
    pub fn uid_slug(&self) -> String {
        encode_uid(&self.uid.to_string())
    }

    /// `/topics/{topic}/categories/{category}/{type}::{uid}/`
    ///
    /// # Errors
    /// - `AddressError::Repo` when the registry lookup fails.
    pub fn get_absolute_url<R>(&self, registry: &R) -> AddressResult<String>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        let type_slug = self.content_type_slug(registry)?;
        Ok(self.absolute_url_with(&type_slug))
    }

    /// The `{type}::{uid}` path segment without slashes.
    ///
    /// # Errors
    /// - `AddressError::Repo` when the registry lookup fails.
    pub fn segment<R>(&self, registry: &R) -> AddressResult<String>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        let type_slug = self.content_type_slug(registry)?;
        Ok(self.segment_with(&type_slug))
    }

    /// Segment for an already computed type token.
    pub(crate) fn segment_with(&self, type_slug: &str) -> String {
        format!(
            "{type_slug}{CONTENT_SEGMENT_DELIMITER}{}",
            self.uid_slug()
        )
    }

    pub(crate) fn absolute_url_with(&self, type_slug: &str) -> String {
        format!(
            "{}{}/",
            self.category.get_absolute_url(),
            self.segment_with(type_slug)
        )
    }

    /// Resolves the stored uid type.
    ///
    /// # Errors
    /// - `AddressError::UnknownUidType` when a stored name matches no member.
    pub fn resolve_uid_type(&self) -> AddressResult<UidTypeChoice> {
        match &self.uid_type {
            UidTypeRef::Resolved(choice) => Ok(*choice),
            UidTypeRef::Name(name) => UidTypeChoice::from_name(name)
                .ok_or_else(|| AddressError::UnknownUidType(name.clone())),
        }
    }

    /// Resolves a uid type name taken from a URL (percent-encoded).
    ///
    /// # Errors
    /// - `AddressError::InvalidEncoding` when decoding fails.
    /// - `AddressError::UnknownUidType` when the decoded name matches no member.
    pub fn resolve_uid_type_from_url(raw: &str) -> AddressResult<UidTypeChoice> {
        let decoded = decode_uid(raw)?;
        UidTypeChoice::from_name(&decoded).ok_or(AddressError::UnknownUidType(decoded))
    }

    /// Resolves `content_type` to a registry descriptor.
    ///
    /// # Errors
    /// - `AddressError::ContentTypeNotFound` when the label is not registered.
    /// - `AddressError::Repo` when the registry lookup itself fails.
    pub fn resolve_content_type<R>(&self, registry: &R) -> AddressResult<ContentTypeDescriptor>
    where
        R: ContentTypeRegistry + ?Sized,
    {
        match &self.content_type {
            ContentTypeRef::Resolved(descriptor) => Ok(descriptor.clone()),
            ContentTypeRef::Label(label) => registry
                .get_by_label(label)?
                .ok_or_else(|| AddressError::ContentTypeNotFound(label.clone())),
        }
    }

    /// Fetches the payload this content points at.
    ///
    /// # Errors
    /// - `AddressError::ContentTypeNotFound` when the type cannot be resolved.
    /// - `AddressError::ObjectNotFound` when the store has no matching row.
    pub fn content_object<R, S>(&self, registry: &R, store: &S) -> AddressResult<Payload>
    where
        R: ContentTypeRegistry + ?Sized,
        S: PayloadStore + ?Sized,
    {
        let descriptor = self.resolve_content_type(registry)?;
        store
            .get_payload(&descriptor, self.object_id)?
            .ok_or_else(|| AddressError::ObjectNotFound {
                content_type: descriptor.app_label.clone(),
                object_id: self.object_id,
            })
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{CONTENT_SEGMENT_DELIMITER}{}",
            self.content_type, self.uid
        )
    }
}
