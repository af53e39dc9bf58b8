//! Shopverse Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod filters;
pub mod modal;
pub mod reviews;
pub mod routes;
pub mod state;
pub mod views;
