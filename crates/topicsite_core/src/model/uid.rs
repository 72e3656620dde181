//! Content uid typing.
//!
//! # Responsibility
//! - Enumerate how a content uid is interpreted (`UidTypeChoice`).
//! - Map uid types to and from storage field kinds (`FieldDescriptor`).
//! - Carry typed uid values (`UidValue`) with a stable string form.
//!
//! # Invariants
//! - The uid-type/field-kind table is total over `UidTypeChoice`.
//! - `UidTypeChoice::as_str` round-trips through `UidTypeChoice::from_name`.

use crate::model::error::{AddressError, AddressResult};
use crate::slug::is_slug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Interpretation tag for a content uid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UidTypeChoice {
    /// Normalized slug token.
    Slug,
    /// Signed 64-bit integer.
    BigInteger,
    /// Free-form character string.
    Char,
    /// RFC 4122 UUID.
    Uuid,
}

/// Storage field kinds understood by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldDescriptor {
    SlugField,
    BigIntegerField,
    CharField,
    UuidField,
    IntegerField,
    TextField,
    BooleanField,
    DateTimeField,
}

/// Explicit uid-type <-> field-kind table.
const UID_FIELD_TABLE: [(UidTypeChoice, FieldDescriptor); 4] = [
    (UidTypeChoice::Slug, FieldDescriptor::SlugField),
    (UidTypeChoice::BigInteger, FieldDescriptor::BigIntegerField),
    (UidTypeChoice::Char, FieldDescriptor::CharField),
    (UidTypeChoice::Uuid, FieldDescriptor::UuidField),
];

impl UidTypeChoice {
    /// All members in declaration order.
    pub const ALL: [UidTypeChoice; 4] = [
        UidTypeChoice::Slug,
        UidTypeChoice::BigInteger,
        UidTypeChoice::Char,
        UidTypeChoice::Uuid,
    ];

    /// Stable member name, also used as wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::BigInteger => "big_integer",
            Self::Char => "char",
            Self::Uuid => "uuid",
        }
    }

    /// Looks up a member by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|member| member.as_str() == name)
    }

    /// Maps a storage field kind to its uid type.
    ///
    /// # Errors
    /// - `AddressError::UnknownFieldType` for field kinds that cannot hold a uid.
    pub fn from_field_descriptor(descriptor: FieldDescriptor) -> AddressResult<Self> {
        UID_FIELD_TABLE
            .iter()
            .find(|(_, field)| *field == descriptor)
            .map(|(choice, _)| *choice)
            .ok_or_else(|| AddressError::UnknownFieldType(descriptor.as_str().to_string()))
    }

    /// Maps this uid type to the storage field kind that declares it.
    pub fn to_field_descriptor(self) -> FieldDescriptor {
        // Entry order follows `ALL`, so the table row for a member sits at
        // its declaration index.
        UID_FIELD_TABLE[self as usize].1
    }
}

impl Display for UidTypeChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldDescriptor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SlugField => "SlugField",
            Self::BigIntegerField => "BigIntegerField",
            Self::CharField => "CharField",
            Self::UuidField => "UUIDField",
            Self::IntegerField => "IntegerField",
            Self::TextField => "TextField",
            Self::BooleanField => "BooleanField",
            Self::DateTimeField => "DateTimeField",
        }
    }

    /// Parses a field kind name such as `UUIDField`.
    ///
    /// # Errors
    /// - `AddressError::UnknownFieldType` when the name is not a known kind.
    pub fn parse(value: &str) -> AddressResult<Self> {
        match value.trim() {
            "SlugField" => Ok(Self::SlugField),
            "BigIntegerField" => Ok(Self::BigIntegerField),
            "CharField" => Ok(Self::CharField),
            "UUIDField" => Ok(Self::UuidField),
            "IntegerField" => Ok(Self::IntegerField),
            "TextField" => Ok(Self::TextField),
            "BooleanField" => Ok(Self::BooleanField),
            "DateTimeField" => Ok(Self::DateTimeField),
            other => Err(AddressError::UnknownFieldType(other.to_string())),
        }
    }
}

/// Typed uid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UidValue {
    BigInteger(i64),
    Uuid(Uuid),
    Text(String),
}

impl UidValue {
    /// Parses raw uid text according to `kind`.
    ///
    /// # Errors
    /// - `AddressError::InvalidUid` when `raw` does not fit `kind`.
    pub fn parse(kind: UidTypeChoice, raw: &str) -> AddressResult<Self> {
        let invalid = |reason: String| AddressError::InvalidUid {
            uid_type: kind.as_str(),
            value: raw.to_string(),
            reason,
        };

        match kind {
            UidTypeChoice::Slug => {
                if is_slug(raw) {
                    Ok(Self::Text(raw.to_string()))
                } else {
                    Err(invalid("value is not a normalized slug".to_string()))
                }
            }
            UidTypeChoice::BigInteger => raw
                .parse::<i64>()
                .map(Self::BigInteger)
                .map_err(|err| invalid(err.to_string())),
            UidTypeChoice::Char => {
                if raw.is_empty() {
                    Err(invalid("value must not be empty".to_string()))
                } else {
                    Ok(Self::Text(raw.to_string()))
                }
            }
            UidTypeChoice::Uuid => Uuid::parse_str(raw)
                .map(Self::Uuid)
                .map_err(|err| invalid(err.to_string())),
        }
    }
}

impl Display for UidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BigInteger(value) => write!(f, "{value}"),
            Self::Uuid(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for UidValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UidValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for UidValue {
    fn from(value: i64) -> Self {
        Self::BigInteger(value)
    }
}

impl From<Uuid> for UidValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}
