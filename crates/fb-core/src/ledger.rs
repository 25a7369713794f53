//! # Vote Transition Table
//!
//! The three-state toggle machine every vote mutation funnels through.
//! Pure and synchronous; store plugins apply the computed deltas inside
//! their own transaction.

use crate::models::VoteDirection;

/// The outcome of applying one vote action to a (user, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    /// The caller's vote state after the action. `None` means un-voted.
    pub next: Option<VoteDirection>,
    pub up_delta: i64,
    pub down_delta: i64,
}

/// Evaluates the toggle machine: repeating the current direction removes the
/// vote, the opposite direction flips it, and voting from a clean slate
/// creates it.
pub fn transition(current: Option<VoteDirection>, action: VoteDirection) -> VoteTransition {
    use VoteDirection::{Down, Up};
    match (current, action) {
        (None, Up) => VoteTransition { next: Some(Up), up_delta: 1, down_delta: 0 },
        (None, Down) => VoteTransition { next: Some(Down), up_delta: 0, down_delta: 1 },
        (Some(Up), Up) => VoteTransition { next: None, up_delta: -1, down_delta: 0 },
        (Some(Up), Down) => VoteTransition { next: Some(Down), up_delta: -1, down_delta: 1 },
        (Some(Down), Down) => VoteTransition { next: None, up_delta: 0, down_delta: -1 },
        (Some(Down), Up) => VoteTransition { next: Some(Up), up_delta: 1, down_delta: -1 },
    }
}
