//! Given steps for todo item BDD scenarios.

use super::world::{TodoWorld, item_input, run_async, user};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"user "{owner}" has created an item "{title}" due "{due_date}" that is {progress}"#)]
fn user_has_created_item(
    world: &mut TodoWorld,
    owner: String,
    title: String,
    due_date: String,
    progress: String,
) -> Result<(), eyre::Report> {
    let owner_id = user(&owner)?;
    let input = item_input(&title, &due_date, &progress, false)?;
    let created = run_async(world.service.create(&owner_id, &input))
        .wrap_err("create item for scenario setup")?;
    world.created.insert(title, created);
    Ok(())
}
