//! # BookmarkIndex
//!
//! Idempotent per-user bookmark membership. No authorization beyond being
//! authenticated; no payload beyond set membership.

use std::sync::Arc;

use uuid::Uuid;

use fb_core::{Actor, AppError, BookmarkKind, BookmarkStore, Result};

pub struct BookmarkIndex {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkIndex {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// Adds a bookmark; adding an existing one is a successful no-op.
    /// Returns the resulting membership state (always `true`).
    pub async fn add_bookmark(
        &self,
        actor: Option<&Actor>,
        kind: BookmarkKind,
        target_id: Uuid,
    ) -> Result<bool> {
        let actor = actor.ok_or(AppError::Unauthenticated)?;
        self.store.add(actor.id, kind, target_id).await?;
        Ok(true)
    }

    /// Removes a bookmark; removing an absent one is a successful no-op.
    /// Returns the resulting membership state (always `false`).
    pub async fn remove_bookmark(
        &self,
        actor: Option<&Actor>,
        kind: BookmarkKind,
        target_id: Uuid,
    ) -> Result<bool> {
        let actor = actor.ok_or(AppError::Unauthenticated)?;
        self.store.remove(actor.id, kind, target_id).await?;
        Ok(false)
    }

    pub async fn is_bookmarked(
        &self,
        actor: Option<&Actor>,
        kind: BookmarkKind,
        target_id: Uuid,
    ) -> Result<bool> {
        let actor = actor.ok_or(AppError::Unauthenticated)?;
        self.store.contains(actor.id, kind, target_id).await
    }
}
