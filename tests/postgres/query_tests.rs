//! Search and ordering tests for `PostgresTodoItemRepository`.

use crate::postgres::helpers::{RepoContext, new_item, repo_context, user};
use rstest::rstest;
use todomvc::todo::{
    adapters::postgres::PostgresTodoItemRepository,
    domain::{ItemQuery, SearchTerm, SortOrder, TodoItem},
    ports::TodoItemRepository,
};
use tokio::runtime::Runtime;

fn seed(rt: &Runtime, repo: &PostgresTodoItemRepository) {
    for (owner, title, description, due) in [
        ("alice", "Water plants", "", "2024-03-01"),
        ("alice", "Buy milk", "and bread", "2024-01-15"),
        ("alice", "Call plumber", "kitchen sink 100%", "2024-02-01"),
        ("alice", "Pay 100_dollars", "", "2024-02-01"),
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
#[case(SortOrder::TitleAsc, vec!["Buy milk", "Call plumber", "Pay 100_dollars", "Water plants"])]
#[case(SortOrder::TitleDesc, vec!["Water plants", "Pay 100_dollars", "Call plumber", "Buy milk"])]
#[case(SortOrder::DueDateAsc, vec!["Buy milk", "Call plumber", "Pay 100_dollars", "Water plants"])]
#[case(SortOrder::DueDateDesc, vec!["Water plants", "Call plumber", "Pay 100_dollars", "Buy milk"])]
fn ordering_is_applied_in_sql(
    repo_context: RepoContext,
    #[case] sort: SortOrder,
    #[case] expected: Vec<&str>,
) {
    let RepoContext { repo, rt } = repo_context;
    seed(&rt, &repo);
    let query = ItemQuery::for_owner(user("alice")).with_sort(sort);
    let items = rt.block_on(repo.find_by_owner(&query)).expect("list");

    assert_eq!(titles(&items), expected);
}

#[rstest]
#[case("milk", vec!["Buy milk"])]
#[case("bread", vec!["Buy milk"])]
#[case("100%", vec!["Call plumber"])]
#[case("0_d", vec!["Pay 100_dollars"])]
#[case("%", vec!["Call plumber"])]
#[case("MILK", vec![])]
fn search_is_literal_and_case_sensitive(
    repo_context: RepoContext,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let RepoContext { repo, rt } = repo_context;
    seed(&rt, &repo);
    let query = ItemQuery::for_owner(user("alice")).with_search(SearchTerm::parse(Some(term)));
    let items = rt.block_on(repo.find_by_owner(&query)).expect("list");

    assert_eq!(titles(&items), expected);
}
