//! Addressing domain model.
//!
//! # Responsibility
//! - Define the Topic -> Category -> Content ownership tree.
//! - Define uid typing and presentation variant enumerations.
//!
//! # Invariants
//! - Every child has exactly one parent; values are immutable once built.
//! - URLs and slugs are derived on demand from names, never stored.

pub mod content;
pub mod content_type;
pub mod error;
pub mod topic;
pub mod uid;
pub mod view_type;
