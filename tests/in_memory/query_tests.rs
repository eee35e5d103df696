//! Search and ordering tests for [`InMemoryTodoItemRepository`].

use crate::in_memory::helpers::{new_item, repo, runtime, user};
use rstest::rstest;
use std::io;
use todomvc::todo::{
    adapters::memory::InMemoryTodoItemRepository,
    domain::{ItemQuery, SearchTerm, SortOrder, TodoItem},
    ports::TodoItemRepository,
};
use tokio::runtime::Runtime;

fn seed(rt: &Runtime, repo: &InMemoryTodoItemRepository) {
    for (owner, title, description, due) in [
        ("alice", "Water plants", "", "2024-03-01"),
        ("alice", "Buy milk", "and bread", "2024-01-15"),
        ("alice", "Call plumber", "kitchen sink 100%", "2024-02-01"),
        ("bob", "Buy milk", "for bob", "2024-01-01"),
    ] {
        rt.block_on(repo.insert(&new_item(owner, title, description, due)))
            .expect("seed insert");
    }
}

fn titles(items: &[TodoItem]) -> Vec<&str> {
    items.iter().map(|item| item.title().as_str()).collect()
}

#[rstest]
#[case(None, vec!["Buy milk", "Call plumber", "Water plants"])]
#[case(Some("title_desc"), vec!["Water plants", "Call plumber", "Buy milk"])]
#[case(Some("date"), vec!["Buy milk", "Call plumber", "Water plants"])]
#[case(Some("date_desc"), vec!["Water plants", "Call plumber", "Buy milk"])]
#[case(Some("unknown"), vec!["Buy milk", "Call plumber", "Water plants"])]
fn listing_follows_sort_key(
    runtime: io::Result<Runtime>,
    repo: InMemoryTodoItemRepository,
    #[case] key: Option<&str>,
    #[case] expected: Vec<&str>,
) {
    let rt = runtime.expect("runtime creation");
    seed(&rt, &repo);
    let query = ItemQuery::for_owner(user("alice")).with_sort(SortOrder::from_key(key));
    let items = rt.block_on(repo.find_by_owner(&query)).expect("list");

    assert_eq!(titles(&items), expected);
}

#[rstest]
#[case("milk", vec!["Buy milk"])]
#[case("bread", vec!["Buy milk"])]
#[case("p", vec!["Call plumber", "Water plants"])]
#[case("100%", vec!["Call plumber"])]
#[case("bob", vec![])]
fn search_matches_title_or_description_within_owner(
    runtime: io::Result<Runtime>,
    repo: InMemoryTodoItemRepository,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let rt = runtime.expect("runtime creation");
    seed(&rt, &repo);
    let query = ItemQuery::for_owner(user("alice")).with_search(SearchTerm::parse(Some(term)));
    let items = rt.block_on(repo.find_by_owner(&query)).expect("list");

    assert_eq!(titles(&items), expected);
}
