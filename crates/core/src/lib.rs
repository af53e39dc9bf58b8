//! Shopverse Core - Shared domain types library.
//!
//! This crate provides the common types used across Shopverse components:
//! - `storefront` - Public-facing catalog site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, emails, star counts, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
