//! Then steps for todo item BDD scenarios.

use super::world::{TodoWorld, run_async, user};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use todomvc::todo::{domain::ItemQuery, services::TodoServiceError};

fn titles(items: &[todomvc::todo::domain::TodoItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.title().as_str().to_owned())
        .collect()
}

#[then(r#"the list is "{expected}""#)]
fn list_is(world: &TodoWorld, expected: String) -> Result<(), eyre::Report> {
    let expected_titles: Vec<String> = expected.split(", ").map(str::to_owned).collect();
    let actual = titles(&world.last_list);
    if actual != expected_titles {
        return Err(eyre::eyre!("expected {expected_titles:?}, listed {actual:?}"));
    }
    Ok(())
}

#[then("the list is empty")]
fn list_is_empty(world: &TodoWorld) -> Result<(), eyre::Report> {
    if !world.last_list.is_empty() {
        return Err(eyre::eyre!(
            "expected no items, listed {:?}",
            titles(&world.last_list)
        ));
    }
    Ok(())
}

#[then("the edit succeeds")]
fn edit_succeeds(world: &TodoWorld) -> Result<(), eyre::Report> {
    match world.last_edit.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected successful edit, got {other:?}")),
    }
}

#[then("the edit is rejected because the item is not in process")]
fn edit_rejected(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_edit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;
    if !result
        .as_ref()
        .is_err_and(TodoServiceError::is_done_without_in_process)
    {
        return Err(eyre::eyre!("expected done/in-process rejection, got {result:?}"));
    }
    Ok(())
}

#[then("the creation is rejected because the item is not in process")]
fn creation_rejected(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    if !result
        .as_ref()
        .is_err_and(TodoServiceError::is_done_without_in_process)
    {
        return Err(eyre::eyre!("expected done/in-process rejection, got {result:?}"));
    }
    Ok(())
}

#[then(r#""{title}" is done for user "{owner}""#)]
fn item_is_done(world: &TodoWorld, title: String, owner: String) -> Result<(), eyre::Report> {
    let id = world.created_item(&title)?.id();
    let stored = run_async(world.service.find(&user(&owner)?, id)).wrap_err("reload item")?;
    if !stored.is_done() {
        return Err(eyre::eyre!("expected {title:?} to be done"));
    }
    Ok(())
}

#[then(r#""{title}" is not done for user "{owner}""#)]
fn item_is_not_done(world: &TodoWorld, title: String, owner: String) -> Result<(), eyre::Report> {
    let created = world.created_item(&title)?;
    let stored =
        run_async(world.service.find(&user(&owner)?, created.id())).wrap_err("reload item")?;
    if stored.is_done() || &stored != created {
        return Err(eyre::eyre!("expected {title:?} to be unchanged, found {stored:?}"));
    }
    Ok(())
}

#[then(r#"user "{owner}" has no items"#)]
fn user_has_no_items(world: &TodoWorld, owner: String) -> Result<(), eyre::Report> {
    let items = run_async(world.service.list(&ItemQuery::for_owner(user(&owner)?)))
        .wrap_err("list items")?;
    if !items.is_empty() {
        return Err(eyre::eyre!("expected no items, found {:?}", titles(&items)));
    }
    Ok(())
}

#[then(r#"user "{owner}" still has "{title}""#)]
fn user_still_has_item(world: &TodoWorld, owner: String, title: String) -> Result<(), eyre::Report> {
    let id = world.created_item(&title)?.id();
    run_async(world.service.find(&user(&owner)?, id))
        .wrap_err_with(|| format!("{title:?} should still exist"))?;
    Ok(())
}
