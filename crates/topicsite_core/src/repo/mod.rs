//! Repository layer for the addressing collaborators.
//!
//! # Responsibility
//! - Define lookup contracts for the content type registry and payload store.
//! - Isolate SQLite query details from model/service code.
//!
//! # Invariants
//! - Absence is reported as `Ok(None)`; callers decide whether it is an error.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod content_type_repo;
pub mod payload_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by registry and payload persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidLabel(String),
    DuplicateLabel(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidLabel(label) => write!(f, "content type label is invalid: `{label}`"),
            Self::DuplicateLabel(label) => {
                write!(f, "content type label already registered: `{label}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
