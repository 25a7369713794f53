//! # fb-store-memory
//!
//! In-process implementation of the store ports. Content, votes, reviews,
//! and acceptance share one mutex so every mutating call is a real
//! transaction; bookmarks are an independent concurrent set (dashmap).
//! Used by the service test suites and by single-node deployments.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use fb_core::ledger::transition;
use fb_core::{
    AppError, BookmarkKind, BookmarkStore, ContentItem, ContentStore, Result, ReviewStatus,
    ReviewStore, SolutionReview, TargetKind, TargetRef, ThreadAcceptance, ThreadHead,
    VoteDirection, VoteOutcome, VoteStore,
};

#[derive(Default)]
struct State {
    items: HashMap<TargetRef, ContentItem>,
    votes: HashMap<(Uuid, TargetRef), VoteDirection>,
    reviews: HashMap<Uuid, SolutionReview>,
    acceptance: HashMap<Uuid, ThreadAcceptance>,
}

impl State {
    fn tally(&self, target: TargetRef) -> (i64, i64) {
        let mut up = 0;
        let mut down = 0;
        for ((_, t), direction) in &self.votes {
            if *t == target {
                match direction {
                    VoteDirection::Up => up += 1,
                    VoteDirection::Down => down += 1,
                }
            }
        }
        (up, down)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    bookmarks: DashMap<(Uuid, BookmarkKind, Uuid), ()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("state lock poisoned".into()))
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn get_item(&self, target: TargetRef) -> Result<Option<ContentItem>> {
        Ok(self.lock()?.items.get(&target).cloned())
    }

    async fn vote_of(&self, user_id: Uuid, target: TargetRef) -> Result<Option<VoteDirection>> {
        Ok(self.lock()?.votes.get(&(user_id, target)).copied())
    }

    async fn apply_vote(
        &self,
        user_id: Uuid,
        target: TargetRef,
        action: VoteDirection,
    ) -> Result<VoteOutcome> {
        // The whole toggle runs under one lock: record mutation, counter
        // delta, and the defensive recount are indivisible.
        let mut state = self.lock()?;
        if !state.items.contains_key(&target) {
            return Err(AppError::NotFound(
                target.kind.as_str().to_string(),
                target.id.to_string(),
            ));
        }

        let key = (user_id, target);
        let current = state.votes.get(&key).copied();
        let t = transition(current, action);

        // Stage the toggle: record mutation plus counter delta.
        match t.next {
            Some(direction) => {
                state.votes.insert(key, direction);
            }
            None => {
                state.votes.remove(&key);
            }
        }
        let item = state
            .items
            .get_mut(&target)
            .ok_or_else(|| AppError::Internal("item vanished under lock".into()))?;
        let prior = (item.upvotes, item.downvotes);
        item.upvotes += t.up_delta;
        item.downvotes += t.down_delta;
        let (upvotes, downvotes) = (item.upvotes, item.downvotes);

        let (ledger_up, ledger_down) = state.tally(target);
        if (upvotes, downvotes) != (ledger_up, ledger_down) {
            // Roll the staged writes back before surfacing the error, the
            // same abort the SQLite store gets from dropping its transaction.
            match current {
                Some(direction) => {
                    state.votes.insert(key, direction);
                }
                None => {
                    state.votes.remove(&key);
                }
            }
            if let Some(item) = state.items.get_mut(&target) {
                item.upvotes = prior.0;
                item.downvotes = prior.1;
            }
            tracing::error!(
                target = %target.id,
                stored_up = upvotes,
                stored_down = downvotes,
                ledger_up,
                ledger_down,
                "counter/ledger mismatch after vote, toggle aborted"
            );
            return Err(AppError::Consistency(format!(
                "target {}: counters {}/{} vs ledger {}/{}",
                target.id, upvotes, downvotes, ledger_up, ledger_down
            )));
        }

        Ok(VoteOutcome { upvotes, downvotes, user_vote: t.next })
    }

    async fn recorded_tally(&self, target: TargetRef) -> Result<(i64, i64)> {
        Ok(self.lock()?.tally(target))
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn thread_head(&self, thread_id: Uuid) -> Result<Option<ThreadHead>> {
        Ok(self
            .lock()?
            .items
            .get(&TargetRef::thread(thread_id))
            .map(|item| ThreadHead { id: item.id, author_id: item.author_id }))
    }

    async fn get_review(&self, solution_id: Uuid) -> Result<Option<SolutionReview>> {
        Ok(self.lock()?.reviews.get(&solution_id).cloned())
    }

    async fn set_status(
        &self,
        solution_id: Uuid,
        status: ReviewStatus,
        note: Option<String>,
        updated_by: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<SolutionReview> {
        let mut state = self.lock()?;
        let review = state
            .reviews
            .get_mut(&solution_id)
            .ok_or_else(|| AppError::NotFound("solution".into(), solution_id.to_string()))?;
        review.status = status;
        review.note = note;
        review.updated_by = Some(updated_by);
        review.updated_at = updated_at;
        Ok(review.clone())
    }

    async fn accept_solution(&self, thread_id: Uuid, solution_id: Uuid) -> Result<ThreadAcceptance> {
        let mut state = self.lock()?;
        let entry = state
            .acceptance
            .get_mut(&thread_id)
            .ok_or_else(|| AppError::NotFound("thread".into(), thread_id.to_string()))?;
        // One entry per thread: overwriting is the unset-then-set swap.
        entry.accepted_solution_id = Some(solution_id);
        Ok(*entry)
    }

    async fn acceptance_of(&self, thread_id: Uuid) -> Result<Option<ThreadAcceptance>> {
        Ok(self.lock()?.acceptance.get(&thread_id).copied())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create_thread(&self, item: ContentItem) -> Result<()> {
        if item.kind != TargetKind::Thread {
            return Err(AppError::Validation("create_thread requires a thread item".into()));
        }
        let mut state = self.lock()?;
        let thread_id = item.id;
        state.items.insert(item.target(), item);
        state
            .acceptance
            .insert(thread_id, ThreadAcceptance { thread_id, accepted_solution_id: None });
        Ok(())
    }

    async fn create_solution(&self, item: ContentItem, thread_id: Uuid) -> Result<SolutionReview> {
        if item.kind != TargetKind::Solution {
            return Err(AppError::Validation("create_solution requires a solution item".into()));
        }
        let mut state = self.lock()?;
        let parent = state
            .items
            .get_mut(&TargetRef::thread(thread_id))
            .ok_or_else(|| AppError::NotFound("thread".into(), thread_id.to_string()))?;
        parent.solution_count = Some(parent.solution_count.unwrap_or(0) + 1);

        let review = SolutionReview {
            solution_id: item.id,
            thread_id,
            status: ReviewStatus::Pending,
            note: None,
            updated_by: None,
            updated_at: item.created_at,
        };
        state.reviews.insert(item.id, review.clone());
        state.items.insert(item.target(), item);
        Ok(review)
    }

    async fn create_comment(&self, item: ContentItem) -> Result<()> {
        if item.kind != TargetKind::Comment {
            return Err(AppError::Validation("create_comment requires a comment item".into()));
        }
        let mut state = self.lock()?;
        state.items.insert(item.target(), item);
        Ok(())
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn add(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()> {
        self.bookmarks.insert((user_id, kind, target_id), ());
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()> {
        self.bookmarks.remove(&(user_id, kind, target_id));
        Ok(())
    }

    async fn contains(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<bool> {
        Ok(self.bookmarks.contains_key(&(user_id, kind, target_id)))
    }
}
