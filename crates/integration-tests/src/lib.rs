//! Integration tests for Everafter.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p everafter-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `claim_ledger` - Ledger admission rules across claim/unclaim flows
//! - `seed_catalog` - Static catalog and reconcile diffing
//! - `goals` - Cash goal progress and formatting
//!
//! The tests in `tests/` exercise the domain rules and the site's render
//! projections without a running store; end-to-end claims against
//! `PostgreSQL` run through the same rules inside the repository
//! transaction.
