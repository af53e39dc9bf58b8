//! Core types for Shopverse.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod rating;
pub mod stars;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use rating::Rating;
pub use stars::{Stars, StarsError};
