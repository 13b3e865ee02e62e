//! Everafter Site library.
//!
//! The wedding site as a library, so its pieces can be tested and reused by
//! the CLI (catalog seeding).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
