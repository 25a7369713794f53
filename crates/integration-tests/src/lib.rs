//! Shared fixtures for the Forgeboard integration suites.

use chrono::Utc;
use fb_core::{Actor, ContentItem, ContentStore, Role};
use uuid::Uuid;

pub fn actor(role: Role) -> Actor {
    Actor::new(Uuid::new_v4(), role)
}

/// Seeds a thread owned by `author` and returns its snapshot.
pub async fn seed_thread(store: &dyn ContentStore, author: &Actor) -> ContentItem {
    let thread = ContentItem::thread(Uuid::new_v4(), author.id, Utc::now());
    store.create_thread(thread.clone()).await.unwrap();
    thread
}

/// Seeds a solution under `thread_id` and returns its snapshot.
pub async fn seed_solution(store: &dyn ContentStore, thread_id: Uuid) -> ContentItem {
    let solution = ContentItem::solution(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    store.create_solution(solution.clone(), thread_id).await.unwrap();
    solution
}
