//! Addressing error model.
//!
//! # Invariants
//! - Only `Content::content_type_slug` recovers from `ContentTypeNotFound`
//!   locally; every other failure propagates to the caller.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AddressResult<T> = Result<T, AddressError>;

/// Failure while resolving types, uids or payloads for addressable content.
#[derive(Debug)]
pub enum AddressError {
    /// No `UidTypeChoice` maps to the given storage field kind.
    UnknownFieldType(String),
    /// A string `uid_type` names no `UidTypeChoice` member.
    UnknownUidType(String),
    /// A string `content_type` label has no registry entry.
    ContentTypeNotFound(String),
    /// Payload store has no object for the resolved type and id.
    ObjectNotFound { content_type: String, object_id: i64 },
    /// Raw uid text does not fit the declared uid type.
    InvalidUid {
        uid_type: &'static str,
        value: String,
        reason: String,
    },
    /// Percent-encoded input does not decode to UTF-8.
    InvalidEncoding(String),
    /// Registry or payload store transport failure.
    Repo(RepoError),
}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFieldType(value) => write!(f, "unknown uid field type: {value}"),
            Self::UnknownUidType(value) => write!(f, "unknown uid type: `{value}`"),
            Self::ContentTypeNotFound(label) => write!(f, "content type not found: `{label}`"),
            Self::ObjectNotFound {
                content_type,
                object_id,
            } => write!(f, "object not found: {content_type}#{object_id}"),
            Self::InvalidUid {
                uid_type,
                value,
                reason,
            } => write!(f, "invalid {uid_type} uid `{value}`: {reason}"),
            Self::InvalidEncoding(details) => write!(f, "invalid percent-encoding {details}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AddressError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AddressError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
