//! # Domain Models
//!
//! Core entities of the Forgeboard challenge platform: actors, content
//! items, votes, solution reviews, and bookmarks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Platform roles. Closed set; permission lookups match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Warfighter,
    Innovator,
    Moderator,
    Admin,
}

/// A validated identity supplied by the upstream auth layer.
/// Anonymous callers are represented by `Option<&Actor>::None`, never by a
/// sentinel actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    /// True for Moderator and Admin.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Moderator | Role::Admin)
    }
}

/// The kind of content a vote can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Thread,
    Solution,
    Comment,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Thread => "thread",
            TargetKind::Solution => "solution",
            TargetKind::Comment => "comment",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "thread" => Ok(TargetKind::Thread),
            "solution" => Ok(TargetKind::Solution),
            "comment" => Ok(TargetKind::Comment),
            other => Err(AppError::Validation(format!("unknown target kind: {other}"))),
        }
    }
}

/// A (kind, id) pair naming one content item. Copyable so it can be passed
/// around freely in service and store signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl TargetRef {
    pub fn thread(id: Uuid) -> Self {
        Self { kind: TargetKind::Thread, id }
    }

    pub fn solution(id: Uuid) -> Self {
        Self { kind: TargetKind::Solution, id }
    }

    pub fn comment(id: Uuid) -> Self {
        Self { kind: TargetKind::Comment, id }
    }
}

/// A votable content item snapshot with its authoritative counters.
///
/// Threads carry `views` and `solution_count`; solutions and comments leave
/// both `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub kind: TargetKind,
    pub author_id: Uuid,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: DateTime<Utc>,
    pub views: Option<i64>,
    pub solution_count: Option<i64>,
}

impl ContentItem {
    /// A fresh thread with zeroed counters.
    pub fn thread(id: Uuid, author_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: TargetKind::Thread,
            author_id,
            upvotes: 0,
            downvotes: 0,
            created_at,
            views: Some(0),
            solution_count: Some(0),
        }
    }

    pub fn solution(id: Uuid, author_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: TargetKind::Solution,
            author_id,
            upvotes: 0,
            downvotes: 0,
            created_at,
            views: None,
            solution_count: None,
        }
    }

    pub fn comment(id: Uuid, author_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: TargetKind::Comment,
            author_id,
            upvotes: 0,
            downvotes: 0,
            created_at,
            views: None,
            solution_count: None,
        }
    }

    pub fn target(&self) -> TargetRef {
        TargetRef { kind: self.kind, id: self.id }
    }
}

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "UP",
            VoteDirection::Down => "DOWN",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "UP" => Ok(VoteDirection::Up),
            "DOWN" => Ok(VoteDirection::Down),
            other => Err(AppError::Validation(format!("unknown vote direction: {other}"))),
        }
    }
}

/// One user's vote on one target. At most one record exists per
/// (user_id, target) pair; absence means "no vote".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub user_id: Uuid,
    pub target: TargetRef,
    pub direction: VoteDirection,
}

/// Result of a committed vote toggle: the new aggregate counters plus the
/// caller's resulting vote state, for optimistic-UI reconciliation upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_vote: Option<VoteDirection>,
}

/// Review status of a solution. `Pending` is the initial state; all other
/// transitions are free (corrections allowed, nothing is terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Pass,
    Fail,
    Approved,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Pass => "PASS",
            ReviewStatus::Fail => "FAIL",
            ReviewStatus::Approved => "APPROVED",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "PENDING" => Ok(ReviewStatus::Pending),
            "PASS" => Ok(ReviewStatus::Pass),
            "FAIL" => Ok(ReviewStatus::Fail),
            "APPROVED" => Ok(ReviewStatus::Approved),
            other => Err(AppError::Validation(format!("unknown review status: {other}"))),
        }
    }
}

/// Review state attached to every solution. Created with status `Pending`
/// when the solution is created; never deleted while the solution exists.
/// Carries `thread_id` so the workflow can authorize against the parent
/// thread in a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReview {
    pub solution_id: Uuid,
    pub thread_id: Uuid,
    pub status: ReviewStatus,
    pub note: Option<String>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

/// The thread fields the workflow needs for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadHead {
    pub id: Uuid,
    pub author_id: Uuid,
}

/// The per-thread accepted-solution singleton. At most one non-null
/// `accepted_solution_id` exists per thread at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadAcceptance {
    pub thread_id: Uuid,
    pub accepted_solution_id: Option<Uuid>,
}

/// What a bookmark can point at. Distinct from vote targets: users are
/// bookmarkable but not votable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Thread,
    User,
}

impl BookmarkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkKind::Thread => "thread",
            BookmarkKind::User => "user",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "thread" => Ok(BookmarkKind::Thread),
            "user" => Ok(BookmarkKind::User),
            other => Err(AppError::Validation(format!("unknown bookmark kind: {other}"))),
        }
    }
}

/// Pure set membership; no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    pub user_id: Uuid,
    pub kind: BookmarkKind,
    pub target_id: Uuid,
}
