//! URL path parsing for the topic/category/content URL shapes.
//!
//! # Responsibility
//! - Classify a raw request path into one of the four canonical shapes.
//! - Split `{type}::{uid}` segments and decode the uid token.
//! - Turn a concrete content URL into a router pattern.
//!
//! # Invariants
//! - Only the first `::` in a segment delimits; uid tokens never contain a
//!   literal `::` because `encode_uid` escapes `:`.
//! - Query strings and fragments are ignored.

use crate::model::content::CONTENT_SEGMENT_DELIMITER;
use crate::model::error::AddressResult;
use crate::model::uid::{UidTypeChoice, UidValue};
use crate::slug::decode_uid;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TOPICS_SEGMENT: &str = "topics";
const CATEGORIES_SEGMENT: &str = "categories";

pub type RouteResult<T> = Result<T, RouteError>;

/// Path parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Path is not rooted at `/topics/`.
    NotTopicPath(String),
    /// Segment at `position` (0-based) does not fit any shape.
    UnexpectedSegment { position: usize, segment: String },
    /// A content segment lacks a type or uid token around `::`.
    MalformedContentSegment(String),
    /// The uid token is not valid percent-encoded UTF-8.
    InvalidEncoding(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTopicPath(path) => write!(f, "path is not a topic path: `{path}`"),
            Self::UnexpectedSegment { position, segment } => {
                write!(f, "unexpected path segment #{position}: `{segment}`")
            }
            Self::MalformedContentSegment(segment) => {
                write!(f, "content segment must be `type::uid`: `{segment}`")
            }
            Self::InvalidEncoding(token) => write!(f, "uid token is not valid: `{token}`"),
        }
    }
}

impl Error for RouteError {}

/// Parsed content-detail path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoute {
    pub topic_slug: String,
    pub category_slug: String,
    pub content_type_slug: String,
    /// uid token exactly as it appeared in the path.
    pub uid_token: String,
    /// Percent-decoded uid token.
    pub uid: String,
}

impl ContentRoute {
    /// Interprets the decoded uid as a value of `kind`.
    pub fn uid_value(&self, kind: UidTypeChoice) -> AddressResult<UidValue> {
        UidValue::parse(kind, &self.uid)
    }
}

/// One of the canonical URL shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/topics/{topic}/`
    Topic { topic_slug: String },
    /// `/topics/{topic}/categories/`
    TopicCategories { topic_slug: String },
    /// `/topics/{topic}/categories/{category}/`
    Category {
        topic_slug: String,
        category_slug: String,
    },
    /// `/topics/{topic}/categories/{category}/{type}::{uid}/`
    Content(ContentRoute),
}

/// Splits a `type::uid` segment at the first delimiter.
///
/// Returns `None` when the segment has no delimiter or either side is empty.
pub fn split_content_segment(segment: &str) -> Option<(&str, &str)> {
    let (type_token, uid_token) = segment.split_once(CONTENT_SEGMENT_DELIMITER)?;
    if type_token.is_empty() || uid_token.is_empty() {
        return None;
    }
    Some((type_token, uid_token))
}

/// Parses a raw request path into a canonical route.
///
/// ```
/// use topicsite_core::routing::{parse_path, Route};
///
/// let route = parse_path("/topics/art/categories/").unwrap();
/// assert_eq!(route, Route::TopicCategories { topic_slug: "art".to_string() });
/// ```
pub fn parse_path(raw: &str) -> RouteResult<Route> {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_matches('/');
    let segments: Vec<&str> = path.split('/').collect();

    if segments.first() != Some(&TOPICS_SEGMENT) {
        return Err(RouteError::NotTopicPath(raw.to_string()));
    }
    if let Some((position, segment)) = segments
        .iter()
        .enumerate()
        .find(|(_, segment)| segment.is_empty())
    {
        return Err(RouteError::UnexpectedSegment {
            position,
            segment: (*segment).to_string(),
        });
    }

    match segments.as_slice() {
        [_, topic] => Ok(Route::Topic {
            topic_slug: (*topic).to_string(),
        }),
        [_, topic, CATEGORIES_SEGMENT] => Ok(Route::TopicCategories {
            topic_slug: (*topic).to_string(),
        }),
        [_, topic, CATEGORIES_SEGMENT, category] => Ok(Route::Category {
            topic_slug: (*topic).to_string(),
            category_slug: (*category).to_string(),
        }),
        [_, topic, CATEGORIES_SEGMENT, category, segment] => {
            let (type_token, uid_token) = split_content_segment(segment)
                .ok_or_else(|| RouteError::MalformedContentSegment((*segment).to_string()))?;
            let uid = decode_uid(uid_token)
                .map_err(|_| RouteError::InvalidEncoding(uid_token.to_string()))?;
            Ok(Route::Content(ContentRoute {
                topic_slug: (*topic).to_string(),
                category_slug: (*category).to_string(),
                content_type_slug: type_token.to_string(),
                uid_token: uid_token.to_string(),
                uid,
            }))
        }
        [_] => Err(RouteError::NotTopicPath(raw.to_string())),
        _ => {
            let position = if segments.len() > 2 && segments[2] != CATEGORIES_SEGMENT {
                2
            } else {
                segments.len() - 1
            };
            Err(RouteError::UnexpectedSegment {
                position,
                segment: segments[position].to_string(),
            })
        }
    }
}

/// Converts a concrete URL into a router pattern, replacing every
/// `type::uid` segment with `{content_type}::{uid}`.
///
/// ```
/// use topicsite_core::routing::route_pattern;
///
/// assert_eq!(
///     route_pattern("/topics/notes/categories/ikigai/note::sample-slug/"),
///     "/topics/notes/categories/ikigai/{content_type}::{uid}/"
/// );
/// ```
pub fn route_pattern(url: &str) -> String {
    let segments: Vec<String> = url
        .trim_matches('/')
        .split('/')
        .map(|segment| match split_content_segment(segment) {
            Some(_) => format!("{{content_type}}{CONTENT_SEGMENT_DELIMITER}{{uid}}"),
            None => segment.to_string(),
        })
        .collect();
    format!("/{}/", segments.join("/"))
}
