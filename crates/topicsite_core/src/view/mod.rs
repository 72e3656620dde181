//! Presentation adapters over taxonomy entities.
//!
//! # Responsibility
//! - Declare which presentation variants each page kind supports.
//! - Derive page URLs and ordered template candidates.
//!
//! # Invariants
//! - Descriptors borrow exactly one entity and own no other state besides
//!   the selected variant.
//! - Template candidates are ordered most specific first and always end in
//!   the page kind's fixed default.

pub mod descriptor;
pub mod page_type;
