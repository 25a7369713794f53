//! forgeboard/crates/fb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Forgeboard:
//! models, error taxonomy, authorization predicates, the vote transition
//! table, the hot-score aggregator, and the store ports.

pub mod auth;
pub mod error;
pub mod ledger;
pub mod models;
pub mod ranking;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
