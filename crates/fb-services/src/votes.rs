//! # VoteLedger
//!
//! Gates vote mutations behind authorization and target existence, then
//! delegates the toggle to the store's single transaction. The ledger never
//! does read-then-write counter arithmetic itself.

use std::sync::Arc;

use fb_core::auth;
use fb_core::{Actor, AppError, Result, TargetRef, VoteDirection, VoteOutcome, VoteStore};

pub struct VoteLedger {
    store: Arc<dyn VoteStore>,
}

impl VoteLedger {
    pub fn new(store: Arc<dyn VoteStore>) -> Self {
        Self { store }
    }

    /// Casts one vote action. Repeating a direction removes the vote,
    /// the opposite direction flips it. Own-content voting is permitted;
    /// only authentication and target existence are checked.
    pub async fn cast_vote(
        &self,
        actor: Option<&Actor>,
        target: TargetRef,
        direction: VoteDirection,
    ) -> Result<VoteOutcome> {
        let actor = match actor {
            Some(a) if auth::can_vote(Some(a)) => a,
            _ => return Err(AppError::Unauthenticated),
        };

        if self.store.get_item(target).await?.is_none() {
            return Err(AppError::NotFound(
                target.kind.as_str().to_string(),
                target.id.to_string(),
            ));
        }

        let outcome = self.store.apply_vote(actor.id, target, direction).await?;
        tracing::debug!(
            user = %actor.id,
            target = %target.id,
            kind = target.kind.as_str(),
            action = direction.as_str(),
            resulting = ?outcome.user_vote,
            "vote applied"
        );
        Ok(outcome)
    }

    /// The caller's current vote on a target, for UI state hydration.
    pub async fn vote_of(&self, actor: &Actor, target: TargetRef) -> Result<Option<VoteDirection>> {
        self.store.vote_of(actor.id, target).await
    }

    /// Verifies the stored counters against a fresh ledger recount.
    /// Disagreement is reported as a `Consistency` error, never repaired.
    pub async fn verify_counters(&self, target: TargetRef) -> Result<()> {
        let item = self.store.get_item(target).await?.ok_or_else(|| {
            AppError::NotFound(target.kind.as_str().to_string(), target.id.to_string())
        })?;
        let (up, down) = self.store.recorded_tally(target).await?;
        if item.upvotes != up || item.downvotes != down {
            tracing::error!(
                target = %target.id,
                stored_up = item.upvotes,
                stored_down = item.downvotes,
                ledger_up = up,
                ledger_down = down,
                "vote counters disagree with ledger"
            );
            return Err(AppError::Consistency(format!(
                "target {}: counters {}/{} vs ledger {}/{}",
                target.id, item.upvotes, item.downvotes, up, down
            )));
        }
        Ok(())
    }
}
