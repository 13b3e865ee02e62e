//! Everafter Core - Shared domain library.
//!
//! This crate provides the types and rules used across all Everafter
//! components:
//! - `site` - The public wedding site and its inline admin panel
//! - `cli` - Command-line tools for migrations and catalog seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. The claim admission rules and the seed diffing
//! live here so they can be exercised without a running store.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, emails, and monetary amounts
//! - [`registry`] - Gift/claim ledger rules, cash goals, activity log kinds

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
