//! Core use-case services.
//!
//! # Responsibility
//! - Bundle addressing collaborators (registry, payload store) behind one
//!   entry point for web/CLI callers.

pub mod address_service;
