//! CRUD and concurrency tests for `PostgresTodoItemRepository`.

use crate::postgres::helpers::{RepoContext, new_item, repo_context, user};
use mockable::DefaultClock;
use rstest::rstest;
use todomvc::todo::{
    domain::{ItemQuery, RowVersion, TodoItemId},
    ports::{TodoItemRepository, UpdateOutcome},
};

#[rstest]
fn insert_and_find_round_trip(repo_context: RepoContext) {
    let RepoContext { repo, rt } = repo_context;
    let stored = rt
        .block_on(repo.insert(&new_item("alice", "Buy milk", "semi-skimmed", "2024-06-01")))
        .expect("insert should succeed");

    let found = rt
        .block_on(repo.find_by_owner_and_id(&user("alice"), stored.id()))
        .expect("lookup should succeed")
        .expect("item should exist");

    assert_eq!(found.id(), stored.id());
    assert_eq!(found.title().as_str(), "Buy milk");
    assert_eq!(
        found.description().map(|text| text.as_str()),
        Some("semi-skimmed")
    );
    assert!(found.in_process());
    assert_eq!(found.version(), RowVersion::INITIAL);
}

#[rstest]
fn foreign_owner_sees_nothing(repo_context: RepoContext) {
    let RepoContext { repo, rt } = repo_context;
    let stored = rt
        .block_on(repo.insert(&new_item("alice", "Private", "", "2024-06-01")))
        .expect("insert should succeed");

    let found = rt
        .block_on(repo.find_by_owner_and_id(&user("bob"), stored.id()))
        .expect("lookup should succeed");
    let listed = rt
        .block_on(repo.find_by_owner(&ItemQuery::for_owner(user("bob"))))
        .expect("list should succeed");
    let deleted = rt
        .block_on(repo.delete(&user("bob"), stored.id()))
        .expect("delete should succeed");

    assert!(found.is_none());
    assert!(listed.is_empty());
    assert!(!deleted);
}

#[rstest]
fn update_applies_once_then_conflicts(repo_context: RepoContext) {
    let RepoContext { repo, rt } = repo_context;
    let original = rt
        .block_on(repo.insert(&new_item("alice", "Draft", "", "2024-06-01")))
        .expect("insert should succeed");

    let mut first = original.clone();
    first.revise(
        user("alice"),
        new_item("alice", "First", "", "2024-06-02").draft().clone(),
        &DefaultClock,
    );
    let mut stale = original;
    stale.revise(
        user("alice"),
        new_item("alice", "Stale", "", "2024-06-03").draft().clone(),
        &DefaultClock,
    );

    let applied = rt.block_on(repo.update(&first)).expect("update should run");
    let conflicted = rt.block_on(repo.update(&stale)).expect("update should run");

    let UpdateOutcome::Updated(updated) = applied else {
        panic!("expected first update to apply, got {applied:?}");
    };
    assert_eq!(updated.version(), RowVersion::INITIAL.next());
    assert_eq!(updated.title().as_str(), "First");
    assert_eq!(conflicted, UpdateOutcome::Conflict);
}

#[rstest]
fn update_of_deleted_row_is_not_found(repo_context: RepoContext) {
    let RepoContext { repo, rt } = repo_context;
    let item = rt
        .block_on(repo.insert(&new_item("alice", "Ephemeral", "", "2024-06-01")))
        .expect("insert should succeed");
    let deleted = rt
        .block_on(repo.delete(&user("alice"), item.id()))
        .expect("delete should succeed");

    let outcome = rt.block_on(repo.update(&item)).expect("update should run");

    assert!(deleted);
    assert_eq!(outcome, UpdateOutcome::NotFound);
}

#[rstest]
fn missing_identifier_is_absent(repo_context: RepoContext) {
    let RepoContext { repo, rt } = repo_context;
    let found = rt
        .block_on(repo.find_by_owner_and_id(&user("alice"), TodoItemId::new(404).expect("valid id")))
        .expect("lookup should succeed");
    assert!(found.is_none());
}
