//! # SolutionWorkflow
//!
//! Review-status transitions and the thread-level accepted-solution
//! singleton. Both operations authorize against the parent thread before
//! any state changes.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use fb_core::auth;
use fb_core::{
    Actor, AppError, Result, ReviewStatus, ReviewStore, SolutionReview, ThreadAcceptance,
};

pub struct SolutionWorkflow {
    store: Arc<dyn ReviewStore>,
}

impl SolutionWorkflow {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Sets a solution's review status. Transitions among the four states
    /// are free; nothing is terminal, so corrections are always possible.
    /// The note is stored verbatim (absent or empty allowed) and the
    /// auditing fields are stamped with the caller and the current time.
    pub async fn set_status(
        &self,
        actor: &Actor,
        solution_id: Uuid,
        status: ReviewStatus,
        note: Option<String>,
    ) -> Result<SolutionReview> {
        let review = self
            .store
            .get_review(solution_id)
            .await?
            .ok_or_else(|| AppError::NotFound("solution".into(), solution_id.to_string()))?;
        let head = self
            .store
            .thread_head(review.thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound("thread".into(), review.thread_id.to_string()))?;

        if !auth::can_manage_status(actor, head.author_id) {
            return Err(AppError::Forbidden(
                "not authorized to update solution status".into(),
            ));
        }

        let updated = self
            .store
            .set_status(solution_id, status, note, actor.id, Utc::now())
            .await?;
        tracing::info!(
            solution = %solution_id,
            thread = %review.thread_id,
            status = status.as_str(),
            by = %actor.id,
            "solution status updated"
        );
        Ok(updated)
    }

    /// Marks a solution as the thread's accepted winner, atomically
    /// replacing any previous winner. Acceptance does not touch the
    /// solution's review status; the two facts are independent.
    pub async fn accept_solution(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        solution_id: Uuid,
    ) -> Result<ThreadAcceptance> {
        let head = self
            .store
            .thread_head(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound("thread".into(), thread_id.to_string()))?;
        let review = self
            .store
            .get_review(solution_id)
            .await?
            .ok_or_else(|| AppError::NotFound("solution".into(), solution_id.to_string()))?;
        if review.thread_id != thread_id {
            // A solution from another thread is not visible here.
            return Err(AppError::NotFound("solution".into(), solution_id.to_string()));
        }

        if !auth::can_manage_status(actor, head.author_id) {
            return Err(AppError::Forbidden("not authorized to accept a solution".into()));
        }

        let acceptance = self.store.accept_solution(thread_id, solution_id).await?;
        tracing::info!(
            thread = %thread_id,
            solution = %solution_id,
            by = %actor.id,
            "solution accepted"
        );
        Ok(acceptance)
    }

    pub async fn review_of(&self, solution_id: Uuid) -> Result<Option<SolutionReview>> {
        self.store.get_review(solution_id).await
    }

    pub async fn acceptance_of(&self, thread_id: Uuid) -> Result<Option<ThreadAcceptance>> {
        self.store.acceptance_of(thread_id).await
    }
}
