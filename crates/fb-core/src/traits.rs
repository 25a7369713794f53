//! # Store Ports
//!
//! Persistence contracts the service layer depends on. Any store plugin
//! must implement all four traits; the transactional guarantees documented
//! here are part of the contract, not an implementation detail.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    BookmarkKind, ContentItem, ReviewStatus, SolutionReview, TargetRef, ThreadAcceptance,
    ThreadHead, VoteDirection, VoteOutcome,
};

/// Vote ledger persistence: the unique (user, target) vote record plus the
/// authoritative counters on each content item.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Current snapshot of a content item, or `None` if it does not exist.
    async fn get_item(&self, target: TargetRef) -> Result<Option<ContentItem>>;

    /// The caller's current vote on a target, if any.
    async fn vote_of(&self, user_id: Uuid, target: TargetRef) -> Result<Option<VoteDirection>>;

    /// Applies one step of the vote toggle machine in a single transaction:
    /// record upsert/delete, atomic counter delta, and a defensive recount
    /// of the ledger. A recount mismatch rolls the transaction back.
    async fn apply_vote(
        &self,
        user_id: Uuid,
        target: TargetRef,
        action: VoteDirection,
    ) -> Result<VoteOutcome>;

    /// Counts vote records by direction for a target, straight from the
    /// ledger (not the cached counters). Used by invariant checks.
    async fn recorded_tally(&self, target: TargetRef) -> Result<(i64, i64)>;
}

/// Solution review and acceptance persistence.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn thread_head(&self, thread_id: Uuid) -> Result<Option<ThreadHead>>;

    async fn get_review(&self, solution_id: Uuid) -> Result<Option<SolutionReview>>;

    /// Overwrites status/note and stamps the auditing fields. The solution
    /// must exist.
    async fn set_status(
        &self,
        solution_id: Uuid,
        status: ReviewStatus,
        note: Option<String>,
        updated_by: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<SolutionReview>;

    /// Atomically replaces the thread's accepted solution (unset-then-set in
    /// one transaction, serialized on the thread's acceptance row).
    async fn accept_solution(&self, thread_id: Uuid, solution_id: Uuid) -> Result<ThreadAcceptance>;

    async fn acceptance_of(&self, thread_id: Uuid) -> Result<Option<ThreadAcceptance>>;
}

/// Content lifecycle hooks. Creation carries the implicit side effects the
/// rest of the core relies on: threads get a null acceptance record,
/// solutions get a Pending review and bump the parent's solution count.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create_thread(&self, item: ContentItem) -> Result<()>;

    async fn create_solution(&self, item: ContentItem, thread_id: Uuid) -> Result<SolutionReview>;

    async fn create_comment(&self, item: ContentItem) -> Result<()>;
}

/// Per-user bookmark membership. All operations are idempotent.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Inserts membership; duplicate inserts are successful no-ops.
    async fn add(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()>;

    /// Removes membership; removing an absent bookmark is a successful no-op.
    async fn remove(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()>;

    async fn contains(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<bool>;
}
