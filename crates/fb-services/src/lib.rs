//! forgeboard/crates/fb-services/src/lib.rs
//!
//! Service layer for the Forgeboard core. Every mutating client action
//! passes through an AuthorizationGate predicate here before touching a
//! store; ranking is derived at read time from current counters.

pub mod bookmarks;
pub mod votes;
pub mod workflow;

pub use bookmarks::BookmarkIndex;
pub use votes::VoteLedger;
pub use workflow::SolutionWorkflow;

// Ranking is pure and lives in fb-core; re-exported here so callers that
// only depend on the service layer can sort listings.
pub use fb_core::ranking::{rank, RankingWeights};
