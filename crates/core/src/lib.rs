//! Storefront Fixture Core - Shared types library.
//!
//! This crate provides the types shared between the fixture components:
//! - `server` - The fixture API service itself
//! - `integration-tests` - Black-box tests driving the HTTP surface
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage.
//! Field names serialize in camelCase to match the wire contract the
//! dependent test suites were written against.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the user, product, and cart records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
