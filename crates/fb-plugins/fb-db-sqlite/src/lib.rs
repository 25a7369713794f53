//! # fb-db-sqlite
//!
//! SQLite implementation of the Forgeboard store ports. The vote toggle,
//! solution acceptance, and content creation each run inside one sqlx
//! transaction; counters are mutated with atomic `SET x = x + ?` updates,
//! never read-modify-write from the Rust side.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

use fb_core::ledger::transition;
use fb_core::{
    AppError, BookmarkKind, BookmarkStore, ContentItem, ContentStore, Result, ReviewStatus,
    ReviewStore, SolutionReview, TargetKind, TargetRef, ThreadAcceptance, ThreadHead,
    VoteDirection, VoteOutcome, VoteStore,
};

pub struct SqliteStore {
    pool: SqlitePool,
}

// Helpers for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> Uuid {
    Uuid::from_slice(blob).unwrap_or_default()
}

fn db_err(e: sqlx::Error) -> AppError {
    AppError::Internal(e.to_string())
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS content_items (
        kind            TEXT NOT NULL,
        id              BLOB NOT NULL,
        author_id       BLOB NOT NULL,
        upvotes         INTEGER NOT NULL DEFAULT 0,
        downvotes       INTEGER NOT NULL DEFAULT 0,
        created_at      TEXT NOT NULL,
        views           INTEGER,
        solution_count  INTEGER,
        PRIMARY KEY (kind, id)
    )",
    "CREATE TABLE IF NOT EXISTS votes (
        user_id     BLOB NOT NULL,
        target_kind TEXT NOT NULL,
        target_id   BLOB NOT NULL,
        direction   TEXT NOT NULL,
        PRIMARY KEY (user_id, target_kind, target_id)
    )",
    "CREATE TABLE IF NOT EXISTS solution_reviews (
        solution_id BLOB PRIMARY KEY,
        thread_id   BLOB NOT NULL,
        status      TEXT NOT NULL DEFAULT 'PENDING',
        note        TEXT,
        updated_by  BLOB,
        updated_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS thread_acceptance (
        thread_id            BLOB PRIMARY KEY,
        accepted_solution_id BLOB
    )",
    "CREATE TABLE IF NOT EXISTS bookmarks (
        user_id     BLOB NOT NULL,
        target_kind TEXT NOT NULL,
        target_id   BLOB NOT NULL,
        PRIMARY KEY (user_id, target_kind, target_id)
    )",
];

impl SqliteStore {
    /// Connects and applies the schema. A single connection is enough:
    /// SQLite serializes writers anyway, and it keeps `:memory:` databases
    /// visible across the whole pool.
    pub async fn new(url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(db_err)?;
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&pool).await.map_err(db_err)?;
        }
        Ok(Self { pool })
    }

    fn item_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ContentItem> {
        Ok(ContentItem {
            id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
            kind: TargetKind::parse(&row.get::<String, _>("kind"))?,
            author_id: blob_to_uuid(row.get::<Vec<u8>, _>("author_id").as_slice()),
            upvotes: row.get("upvotes"),
            downvotes: row.get("downvotes"),
            created_at: row.get("created_at"),
            views: row.get("views"),
            solution_count: row.get("solution_count"),
        })
    }

    fn review_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<SolutionReview> {
        Ok(SolutionReview {
            solution_id: blob_to_uuid(row.get::<Vec<u8>, _>("solution_id").as_slice()),
            thread_id: blob_to_uuid(row.get::<Vec<u8>, _>("thread_id").as_slice()),
            status: ReviewStatus::parse(&row.get::<String, _>("status"))?,
            note: row.get("note"),
            updated_by: row
                .get::<Option<Vec<u8>>, _>("updated_by")
                .map(|b| blob_to_uuid(b.as_slice())),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl VoteStore for SqliteStore {
    async fn get_item(&self, target: TargetRef) -> Result<Option<ContentItem>> {
        let row = sqlx::query("SELECT * FROM content_items WHERE kind = ? AND id = ?")
            .bind(target.kind.as_str())
            .bind(uuid_to_blob(target.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.as_ref().map(Self::item_from_row).transpose()
    }

    async fn vote_of(&self, user_id: Uuid, target: TargetRef) -> Result<Option<VoteDirection>> {
        let row = sqlx::query(
            "SELECT direction FROM votes WHERE user_id = ? AND target_kind = ? AND target_id = ?",
        )
        .bind(uuid_to_blob(user_id))
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        row.map(|r| VoteDirection::parse(&r.get::<String, _>("direction")))
            .transpose()
    }

    /// One transaction covers the record upsert/delete, the atomic counter
    /// delta, and a recount of the ledger. Any disagreement rolls the whole
    /// toggle back.
    async fn apply_vote(
        &self,
        user_id: Uuid,
        target: TargetRef,
        action: VoteDirection,
    ) -> Result<VoteOutcome> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        // 1. Current vote state inside the transaction
        let current = sqlx::query(
            "SELECT direction FROM votes WHERE user_id = ? AND target_kind = ? AND target_id = ?",
        )
        .bind(uuid_to_blob(user_id))
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err)?
        .map(|r| VoteDirection::parse(&r.get::<String, _>("direction")))
        .transpose()?;

        // 2. Apply the toggle machine to the vote record
        let t = transition(current, action);
        match t.next {
            Some(direction) => {
                sqlx::query(
                    "INSERT INTO votes (user_id, target_kind, target_id, direction)
                     VALUES (?, ?, ?, ?)
                     ON CONFLICT(user_id, target_kind, target_id)
                     DO UPDATE SET direction = excluded.direction",
                )
                .bind(uuid_to_blob(user_id))
                .bind(target.kind.as_str())
                .bind(uuid_to_blob(target.id))
                .bind(direction.as_str())
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
            }
            None => {
                sqlx::query(
                    "DELETE FROM votes WHERE user_id = ? AND target_kind = ? AND target_id = ?",
                )
                .bind(uuid_to_blob(user_id))
                .bind(target.kind.as_str())
                .bind(uuid_to_blob(target.id))
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
            }
        }

        // 3. Atomic counter delta on the content row
        let updated = sqlx::query(
            "UPDATE content_items SET upvotes = upvotes + ?, downvotes = downvotes + ?
             WHERE kind = ? AND id = ?",
        )
        .bind(t.up_delta)
        .bind(t.down_delta)
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(
                target.kind.as_str().to_string(),
                target.id.to_string(),
            ));
        }

        // 4. Defensive recount before committing
        let counters = sqlx::query(
            "SELECT upvotes, downvotes FROM content_items WHERE kind = ? AND id = ?",
        )
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;
        let (upvotes, downvotes): (i64, i64) = (counters.get("upvotes"), counters.get("downvotes"));

        let ledger = sqlx::query(
            "SELECT
                COALESCE(SUM(CASE WHEN direction = 'UP' THEN 1 ELSE 0 END), 0) AS up,
                COALESCE(SUM(CASE WHEN direction = 'DOWN' THEN 1 ELSE 0 END), 0) AS down
             FROM votes WHERE target_kind = ? AND target_id = ?",
        )
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;
        let (ledger_up, ledger_down): (i64, i64) = (ledger.get("up"), ledger.get("down"));

        if (upvotes, downvotes) != (ledger_up, ledger_down) {
            tracing::error!(
                target = %target.id,
                stored_up = upvotes,
                stored_down = downvotes,
                ledger_up,
                ledger_down,
                "counter/ledger mismatch, rolling back vote"
            );
            // Dropping the transaction rolls everything back.
            return Err(AppError::Consistency(format!(
                "target {}: counters {}/{} vs ledger {}/{}",
                target.id, upvotes, downvotes, ledger_up, ledger_down
            )));
        }

        tx.commit().await.map_err(db_err)?;
        Ok(VoteOutcome { upvotes, downvotes, user_vote: t.next })
    }

    async fn recorded_tally(&self, target: TargetRef) -> Result<(i64, i64)> {
        let row = sqlx::query(
            "SELECT
                COALESCE(SUM(CASE WHEN direction = 'UP' THEN 1 ELSE 0 END), 0) AS up,
                COALESCE(SUM(CASE WHEN direction = 'DOWN' THEN 1 ELSE 0 END), 0) AS down
             FROM votes WHERE target_kind = ? AND target_id = ?",
        )
        .bind(target.kind.as_str())
        .bind(uuid_to_blob(target.id))
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;
        Ok((row.get("up"), row.get("down")))
    }
}

#[async_trait]
impl ReviewStore for SqliteStore {
    async fn thread_head(&self, thread_id: Uuid) -> Result<Option<ThreadHead>> {
        let row = sqlx::query(
            "SELECT id, author_id FROM content_items WHERE kind = 'thread' AND id = ?",
        )
        .bind(uuid_to_blob(thread_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(row.map(|r| ThreadHead {
            id: blob_to_uuid(r.get::<Vec<u8>, _>("id").as_slice()),
            author_id: blob_to_uuid(r.get::<Vec<u8>, _>("author_id").as_slice()),
        }))
    }

    async fn get_review(&self, solution_id: Uuid) -> Result<Option<SolutionReview>> {
        let row = sqlx::query("SELECT * FROM solution_reviews WHERE solution_id = ?")
            .bind(uuid_to_blob(solution_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.as_ref().map(Self::review_from_row).transpose()
    }

    async fn set_status(
        &self,
        solution_id: Uuid,
        status: ReviewStatus,
        note: Option<String>,
        updated_by: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<SolutionReview> {
        let updated = sqlx::query(
            "UPDATE solution_reviews
             SET status = ?, note = ?, updated_by = ?, updated_at = ?
             WHERE solution_id = ?",
        )
        .bind(status.as_str())
        .bind(&note)
        .bind(uuid_to_blob(updated_by))
        .bind(updated_at)
        .bind(uuid_to_blob(solution_id))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("solution".into(), solution_id.to_string()));
        }
        self.get_review(solution_id)
            .await?
            .ok_or_else(|| AppError::NotFound("solution".into(), solution_id.to_string()))
    }

    async fn accept_solution(&self, thread_id: Uuid, solution_id: Uuid) -> Result<ThreadAcceptance> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        // The solution must exist and belong to this thread.
        let review = sqlx::query("SELECT thread_id FROM solution_reviews WHERE solution_id = ?")
            .bind(uuid_to_blob(solution_id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_err)?;
        match review {
            Some(r) if blob_to_uuid(r.get::<Vec<u8>, _>("thread_id").as_slice()) == thread_id => {}
            _ => {
                return Err(AppError::NotFound("solution".into(), solution_id.to_string()));
            }
        }

        // Overwriting the singleton row unsets any previous winner and sets
        // the new one in the same write; concurrent accepts serialize here.
        let updated = sqlx::query(
            "UPDATE thread_acceptance SET accepted_solution_id = ? WHERE thread_id = ?",
        )
        .bind(uuid_to_blob(solution_id))
        .bind(uuid_to_blob(thread_id))
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("thread".into(), thread_id.to_string()));
        }

        tx.commit().await.map_err(db_err)?;
        Ok(ThreadAcceptance { thread_id, accepted_solution_id: Some(solution_id) })
    }

    async fn acceptance_of(&self, thread_id: Uuid) -> Result<Option<ThreadAcceptance>> {
        let row = sqlx::query("SELECT * FROM thread_acceptance WHERE thread_id = ?")
            .bind(uuid_to_blob(thread_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(row.map(|r| ThreadAcceptance {
            thread_id: blob_to_uuid(r.get::<Vec<u8>, _>("thread_id").as_slice()),
            accepted_solution_id: r
                .get::<Option<Vec<u8>>, _>("accepted_solution_id")
                .map(|b| blob_to_uuid(b.as_slice())),
        }))
    }
}

#[async_trait]
impl ContentStore for SqliteStore {
    /// Creates the thread row together with its null acceptance record.
    async fn create_thread(&self, item: ContentItem) -> Result<()> {
        if item.kind != TargetKind::Thread {
            return Err(AppError::Validation("create_thread requires a thread item".into()));
        }
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        insert_item(&mut tx, &item).await?;
        sqlx::query("INSERT INTO thread_acceptance (thread_id, accepted_solution_id) VALUES (?, NULL)")
            .bind(uuid_to_blob(item.id))
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        tx.commit().await.map_err(db_err)
    }

    /// Creates the solution row, its Pending review, and bumps the parent
    /// thread's solution count, all in one transaction.
    async fn create_solution(&self, item: ContentItem, thread_id: Uuid) -> Result<SolutionReview> {
        if item.kind != TargetKind::Solution {
            return Err(AppError::Validation("create_solution requires a solution item".into()));
        }
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let bumped = sqlx::query(
            "UPDATE content_items SET solution_count = COALESCE(solution_count, 0) + 1
             WHERE kind = 'thread' AND id = ?",
        )
        .bind(uuid_to_blob(thread_id))
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
        if bumped.rows_affected() == 0 {
            return Err(AppError::NotFound("thread".into(), thread_id.to_string()));
        }

        insert_item(&mut tx, &item).await?;
        let review = SolutionReview {
            solution_id: item.id,
            thread_id,
            status: ReviewStatus::Pending,
            note: None,
            updated_by: None,
            updated_at: item.created_at,
        };
        sqlx::query(
            "INSERT INTO solution_reviews (solution_id, thread_id, status, note, updated_by, updated_at)
             VALUES (?, ?, ?, NULL, NULL, ?)",
        )
        .bind(uuid_to_blob(review.solution_id))
        .bind(uuid_to_blob(review.thread_id))
        .bind(review.status.as_str())
        .bind(review.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;
        Ok(review)
    }

    async fn create_comment(&self, item: ContentItem) -> Result<()> {
        if item.kind != TargetKind::Comment {
            return Err(AppError::Validation("create_comment requires a comment item".into()));
        }
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        insert_item(&mut tx, &item).await?;
        tx.commit().await.map_err(db_err)
    }
}

async fn insert_item(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    item: &ContentItem,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO content_items (kind, id, author_id, upvotes, downvotes, created_at, views, solution_count)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(item.kind.as_str())
    .bind(uuid_to_blob(item.id))
    .bind(uuid_to_blob(item.author_id))
    .bind(item.upvotes)
    .bind(item.downvotes)
    .bind(item.created_at)
    .bind(item.views)
    .bind(item.solution_count)
    .execute(&mut **tx)
    .await
    .map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl BookmarkStore for SqliteStore {
    async fn add(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO bookmarks (user_id, target_kind, target_id) VALUES (?, ?, ?)",
        )
        .bind(uuid_to_blob(user_id))
        .bind(kind.as_str())
        .bind(uuid_to_blob(target_id))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM bookmarks WHERE user_id = ? AND target_kind = ? AND target_id = ?")
            .bind(uuid_to_blob(user_id))
            .bind(kind.as_str())
            .bind(uuid_to_blob(target_id))
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn contains(&self, user_id: Uuid, kind: BookmarkKind, target_id: Uuid) -> Result<bool> {
        let row = sqlx::query(
            "SELECT 1 FROM bookmarks WHERE user_id = ? AND target_kind = ? AND target_id = ?",
        )
        .bind(uuid_to_blob(user_id))
        .bind(kind.as_str())
        .bind(uuid_to_blob(target_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        SqliteStore::new("sqlite::memory:").await.unwrap()
    }

    async fn seed_thread(store: &SqliteStore) -> ContentItem {
        let thread = ContentItem::thread(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        store.create_thread(thread.clone()).await.unwrap();
        thread
    }

    #[tokio::test]
    async fn vote_toggle_round_trip() {
        let store = store().await;
        let thread = seed_thread(&store).await;
        let target = thread.target();
        let user = Uuid::new_v4();

        let up = store.apply_vote(user, target, VoteDirection::Up).await.unwrap();
        assert_eq!((up.upvotes, up.downvotes), (1, 0));
        assert_eq!(store.vote_of(user, target).await.unwrap(), Some(VoteDirection::Up));

        let flipped = store.apply_vote(user, target, VoteDirection::Down).await.unwrap();
        assert_eq!((flipped.upvotes, flipped.downvotes), (0, 1));

        let removed = store.apply_vote(user, target, VoteDirection::Down).await.unwrap();
        assert_eq!((removed.upvotes, removed.downvotes), (0, 0));
        assert_eq!(removed.user_vote, None);
        assert_eq!(store.vote_of(user, target).await.unwrap(), None);

        assert_eq!(store.recorded_tally(target).await.unwrap(), (0, 0));
    }

    #[tokio::test]
    async fn counters_match_ledger_across_users() {
        let store = store().await;
        let thread = seed_thread(&store).await;
        let target = thread.target();

        for _ in 0..7 {
            store.apply_vote(Uuid::new_v4(), target, VoteDirection::Up).await.unwrap();
        }
        for _ in 0..3 {
            store.apply_vote(Uuid::new_v4(), target, VoteDirection::Down).await.unwrap();
        }

        let item = store.get_item(target).await.unwrap().unwrap();
        assert_eq!((item.upvotes, item.downvotes), (7, 3));
        assert_eq!(store.recorded_tally(target).await.unwrap(), (7, 3));
    }

    #[tokio::test]
    async fn consistency_mismatch_rolls_the_transaction_back() {
        let store = store().await;
        let thread = seed_thread(&store).await;
        let target = thread.target();

        // Skew the stored counters away from the ledger behind the API's back.
        sqlx::query("UPDATE content_items SET upvotes = 5 WHERE kind = 'thread' AND id = ?")
            .bind(uuid_to_blob(thread.id))
            .execute(&store.pool)
            .await
            .unwrap();

        let user = Uuid::new_v4();
        let err = store.apply_vote(user, target, VoteDirection::Up).await.unwrap_err();
        assert!(matches!(err, AppError::Consistency(_)));

        // Rolled back: no vote record, counters as found.
        assert_eq!(store.vote_of(user, target).await.unwrap(), None);
        let item = store.get_item(target).await.unwrap().unwrap();
        assert_eq!((item.upvotes, item.downvotes), (5, 0));
        assert_eq!(store.recorded_tally(target).await.unwrap(), (0, 0));
    }

    #[tokio::test]
    async fn accept_swaps_the_winner_atomically() {
        let store = store().await;
        let thread = seed_thread(&store).await;

        let s1 = ContentItem::solution(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        let s2 = ContentItem::solution(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        let (s1_id, s2_id) = (s1.id, s2.id);
        store.create_solution(s1, thread.id).await.unwrap();
        store.create_solution(s2, thread.id).await.unwrap();

        let first = store.accept_solution(thread.id, s2_id).await.unwrap();
        assert_eq!(first.accepted_solution_id, Some(s2_id));

        let swapped = store.accept_solution(thread.id, s1_id).await.unwrap();
        assert_eq!(swapped.accepted_solution_id, Some(s1_id));

        // Exactly one winner recorded.
        let acceptance = store.acceptance_of(thread.id).await.unwrap().unwrap();
        assert_eq!(acceptance.accepted_solution_id, Some(s1_id));
    }

    #[tokio::test]
    async fn solution_creation_seeds_pending_review() {
        let store = store().await;
        let thread = seed_thread(&store).await;

        let s = ContentItem::solution(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        let review = store.create_solution(s, thread.id).await.unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);

        let parent = store.get_item(thread.target()).await.unwrap().unwrap();
        assert_eq!(parent.solution_count, Some(1));
    }

    #[tokio::test]
    async fn status_update_stamps_auditing_fields() {
        let store = store().await;
        let thread = seed_thread(&store).await;
        let s = ContentItem::solution(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        let solution_id = s.id;
        store.create_solution(s, thread.id).await.unwrap();

        let reviewer = Uuid::new_v4();
        let updated = store
            .set_status(solution_id, ReviewStatus::Pass, Some("solid".into()), reviewer, Utc::now())
            .await
            .unwrap();
        assert_eq!(updated.status, ReviewStatus::Pass);
        assert_eq!(updated.note.as_deref(), Some("solid"));
        assert_eq!(updated.updated_by, Some(reviewer));
    }

    #[tokio::test]
    async fn bookmarks_are_idempotent() {
        let store = store().await;
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        store.add(user, BookmarkKind::Thread, id).await.unwrap();
        store.add(user, BookmarkKind::Thread, id).await.unwrap();
        assert!(store.contains(user, BookmarkKind::Thread, id).await.unwrap());

        store.remove(user, BookmarkKind::Thread, id).await.unwrap();
        store.remove(user, BookmarkKind::Thread, id).await.unwrap();
        assert!(!store.contains(user, BookmarkKind::Thread, id).await.unwrap());
    }
}
