//! Review-status and acceptance scenarios, including the single-winner
//! invariant under repeated and concurrent accept calls.

use std::sync::Arc;

use fb_core::{AppError, ReviewStatus, ReviewStore, Role};
use fb_db_sqlite::SqliteStore;
use fb_services::SolutionWorkflow;
use fb_store_memory::MemoryStore;
use integration_tests::{actor, seed_solution, seed_thread};

#[tokio::test]
async fn scenario_author_pass_then_forbidden_approve() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread = seed_thread(store.as_ref(), &author).await;
    let solution = seed_solution(store.as_ref(), thread.id).await;
    let workflow = SolutionWorkflow::new(store.clone());

    // Created Pending.
    let review = workflow.review_of(solution.id).await.unwrap().unwrap();
    assert_eq!(review.status, ReviewStatus::Pending);

    // Thread author passes it with a note.
    let passed = workflow
        .set_status(&author, solution.id, ReviewStatus::Pass, Some("needs refinement".into()))
        .await
        .unwrap();
    assert_eq!(passed.status, ReviewStatus::Pass);
    assert_eq!(passed.note.as_deref(), Some("needs refinement"));

    // A non-owner, non-moderator actor is rejected and nothing changes.
    let bystander = actor(Role::Innovator);
    let err = workflow
        .set_status(&bystander, solution.id, ReviewStatus::Approved, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
    let review = workflow.review_of(solution.id).await.unwrap().unwrap();
    assert_eq!(review.status, ReviewStatus::Pass);
}

#[tokio::test]
async fn scenario_accept_swaps_s2_for_s1() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread = seed_thread(store.as_ref(), &author).await;
    let s1 = seed_solution(store.as_ref(), thread.id).await;
    let s2 = seed_solution(store.as_ref(), thread.id).await;
    let workflow = SolutionWorkflow::new(store.clone());

    assert_eq!(
        workflow.acceptance_of(thread.id).await.unwrap().unwrap().accepted_solution_id,
        None
    );

    workflow.accept_solution(&author, thread.id, s2.id).await.unwrap();
    assert_eq!(
        workflow.acceptance_of(thread.id).await.unwrap().unwrap().accepted_solution_id,
        Some(s2.id)
    );

    // Accepting S1 unsets S2 in the same transaction.
    workflow.accept_solution(&author, thread.id, s1.id).await.unwrap();
    assert_eq!(
        workflow.acceptance_of(thread.id).await.unwrap().unwrap().accepted_solution_id,
        Some(s1.id)
    );
}

#[tokio::test]
async fn concurrent_accepts_leave_exactly_one_winner() {
    let store = Arc::new(MemoryStore::new());
    let author = actor(Role::Moderator);
    let thread = seed_thread(store.as_ref(), &author).await;
    let mut solutions = Vec::new();
    for _ in 0..8 {
        solutions.push(seed_solution(store.as_ref(), thread.id).await);
    }
    let workflow = Arc::new(SolutionWorkflow::new(store.clone()));

    let mut handles = Vec::new();
    for s in &solutions {
        let workflow = workflow.clone();
        let (thread_id, solution_id) = (thread.id, s.id);
        handles.push(tokio::spawn(async move {
            workflow.accept_solution(&author, thread_id, solution_id).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let acceptance = store.acceptance_of(thread.id).await.unwrap().unwrap();
    let winner = acceptance.accepted_solution_id.unwrap();
    assert!(solutions.iter().any(|s| s.id == winner));
}

#[tokio::test]
async fn acceptance_and_status_stay_independent() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread = seed_thread(store.as_ref(), &author).await;
    let solution = seed_solution(store.as_ref(), thread.id).await;
    let workflow = SolutionWorkflow::new(store.clone());

    workflow
        .set_status(&author, solution.id, ReviewStatus::Pass, None)
        .await
        .unwrap();
    workflow.accept_solution(&author, thread.id, solution.id).await.unwrap();

    // Accepted but still at Pass: the two facts may disagree.
    let review = workflow.review_of(solution.id).await.unwrap().unwrap();
    assert_eq!(review.status, ReviewStatus::Pass);
    assert_eq!(
        workflow.acceptance_of(thread.id).await.unwrap().unwrap().accepted_solution_id,
        Some(solution.id)
    );
}

#[tokio::test]
async fn corrections_are_always_possible() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread = seed_thread(store.as_ref(), &author).await;
    let solution = seed_solution(store.as_ref(), thread.id).await;
    let workflow = SolutionWorkflow::new(store.clone());
    let admin = actor(Role::Admin);

    for status in [
        ReviewStatus::Approved,
        ReviewStatus::Fail,
        ReviewStatus::Pass,
        ReviewStatus::Pending,
    ] {
        let updated = workflow.set_status(&admin, solution.id, status, None).await.unwrap();
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn accepting_a_solution_from_another_thread_is_not_found() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread_a = seed_thread(store.as_ref(), &author).await;
    let thread_b = seed_thread(store.as_ref(), &author).await;
    let solution_b = seed_solution(store.as_ref(), thread_b.id).await;
    let workflow = SolutionWorkflow::new(store.clone());

    let err = workflow
        .accept_solution(&author, thread_a.id, solution_b.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));

    // Neither thread gained a winner from the rejected call.
    assert_eq!(
        workflow.acceptance_of(thread_a.id).await.unwrap().unwrap().accepted_solution_id,
        None
    );
    assert_eq!(
        workflow.acceptance_of(thread_b.id).await.unwrap().unwrap().accepted_solution_id,
        None
    );
}

#[tokio::test]
async fn cross_thread_accept_is_rejected_by_the_memory_store_too() {
    let store = Arc::new(MemoryStore::new());
    let author = actor(Role::Warfighter);
    let thread_a = seed_thread(store.as_ref(), &author).await;
    let thread_b = seed_thread(store.as_ref(), &author).await;
    let solution_b = seed_solution(store.as_ref(), thread_b.id).await;
    let workflow = SolutionWorkflow::new(store.clone());

    let err = workflow
        .accept_solution(&author, thread_a.id, solution_b.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));
    assert_eq!(
        store.acceptance_of(thread_a.id).await.unwrap().unwrap().accepted_solution_id,
        None
    );
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let store = Arc::new(SqliteStore::new("sqlite::memory:").await.unwrap());
    let author = actor(Role::Warfighter);
    let thread = seed_thread(store.as_ref(), &author).await;
    let workflow = SolutionWorkflow::new(store.clone());

    let err = workflow
        .set_status(&author, uuid::Uuid::new_v4(), ReviewStatus::Pass, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));

    let err = workflow
        .accept_solution(&author, thread.id, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));
}
