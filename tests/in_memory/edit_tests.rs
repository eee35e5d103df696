//! Optimistic concurrency tests for [`InMemoryTodoItemRepository`].

use crate::in_memory::helpers::{new_item, repo, runtime, user};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use todomvc::todo::{
    adapters::memory::InMemoryTodoItemRepository,
    domain::RowVersion,
    ports::{TodoItemRepository, UpdateOutcome},
};
use tokio::runtime::Runtime;

#[rstest]
fn update_bumps_version(runtime: io::Result<Runtime>, repo: InMemoryTodoItemRepository) {
    let rt = runtime.expect("runtime creation");
    let mut item = rt
        .block_on(repo.insert(&new_item("alice", "Draft", "", "2024-01-01")))
        .expect("insert");
    let draft = new_item("alice", "Final", "done soon", "2024-01-02")
        .draft()
        .clone();
    item.revise(user("alice"), draft, &DefaultClock);

    let outcome = rt.block_on(repo.update(&item)).expect("update");
    let UpdateOutcome::Updated(updated) = outcome else {
        panic!("expected update to apply, got {outcome:?}");
    };

    assert_eq!(updated.version(), RowVersion::INITIAL.next());
    assert_eq!(updated.title().as_str(), "Final");
}

#[rstest]
fn stale_update_conflicts(runtime: io::Result<Runtime>, repo: InMemoryTodoItemRepository) {
    let rt = runtime.expect("runtime creation");
    let original = rt
        .block_on(repo.insert(&new_item("alice", "Draft", "", "2024-01-01")))
        .expect("insert");

    let mut first = original.clone();
    first.revise(
        user("alice"),
        new_item("alice", "First writer", "", "2024-01-01").draft().clone(),
        &DefaultClock,
    );
    let mut second = original;
    second.revise(
        user("alice"),
        new_item("alice", "Second writer", "", "2024-01-01").draft().clone(),
        &DefaultClock,
    );

    let first_outcome = rt.block_on(repo.update(&first)).expect("first update");
    let second_outcome = rt.block_on(repo.update(&second)).expect("second update");

    assert!(matches!(first_outcome, UpdateOutcome::Updated(_)));
    assert_eq!(second_outcome, UpdateOutcome::Conflict);
}

#[rstest]
fn update_after_delete_is_not_found(
    runtime: io::Result<Runtime>,
    repo: InMemoryTodoItemRepository,
) {
    let rt = runtime.expect("runtime creation");
    let item = rt
        .block_on(repo.insert(&new_item("alice", "Ephemeral", "", "2024-01-01")))
        .expect("insert");
    rt.block_on(repo.delete(&user("alice"), item.id()))
        .expect("delete");

    let outcome = rt.block_on(repo.update(&item)).expect("update");
    assert_eq!(outcome, UpdateOutcome::NotFound);
}
