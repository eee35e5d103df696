//! `PostgreSQL` repository implementation for todo item storage.

use super::{
    models::{NewTodoItemRow, TodoItemChanges, TodoItemRow},
    schema::todo_items,
};
use crate::todo::{
    domain::{
        ItemDescription, ItemQuery, ItemStatus, ItemTitle, NewTodoItem, PersistedTodoItemData,
        RowVersion, SearchTerm, SortOrder, TodoItem, TodoItemId, UserId,
    },
    ports::{TodoItemRepository, TodoRepositoryError, TodoRepositoryResult, UpdateOutcome},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo item repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoItemRepository {
    pool: TodoPgPool,
}

impl PostgresTodoItemRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoItemRepository for PostgresTodoItemRepository {
    async fn find_by_owner(&self, query: &ItemQuery) -> TodoRepositoryResult<Vec<TodoItem>> {
        let owner = query.owner_id().as_str().to_owned();
        let pattern = query.search().map(SearchTerm::like_pattern);
        let sort = query.sort();

        self.run_blocking(move |connection| {
            let mut statement = todo_items::table
                .filter(todo_items::owner_id.eq(owner))
                .select(TodoItemRow::as_select())
                .into_boxed();

            if let Some(like) = pattern {
                statement = statement.filter(
                    todo_items::title
                        .like(like.clone())
                        .or(todo_items::description.like(like)),
                );
            }

            let ordered = match sort {
                SortOrder::TitleAsc => {
                    statement.order((todo_items::title.asc(), todo_items::id.asc()))
                }
                SortOrder::TitleDesc => {
                    statement.order((todo_items::title.desc(), todo_items::id.asc()))
                }
                SortOrder::DueDateAsc => {
                    statement.order((todo_items::due_date.asc(), todo_items::id.asc()))
                }
                SortOrder::DueDateDesc => {
                    statement.order((todo_items::due_date.desc(), todo_items::id.asc()))
                }
                SortOrder::StatusAsc => {
                    statement.order((todo_items::is_done.asc(), todo_items::id.asc()))
                }
                SortOrder::StatusDesc => {
                    statement.order((todo_items::is_done.desc(), todo_items::id.asc()))
                }
            };

            let rows = ordered
                .load::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        id: TodoItemId,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let owner = owner_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = todo_items::table
                .filter(todo_items::id.eq(id.value()))
                .filter(todo_items::owner_id.eq(owner))
                .select(TodoItemRow::as_select())
                .first::<TodoItemRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let new_row = to_new_row(item);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todo_items::table)
                .values(&new_row)
                .returning(TodoItemRow::as_returning())
                .get_result::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_item(row)
        })
        .await
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<UpdateOutcome> {
        let id = item.id().value();
        let owner = item.owner_id().as_str().to_owned();
        let expected_version = item.version().value();
        let changes = to_changes(item);

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                todo_items::table
                    .filter(todo_items::id.eq(id))
                    .filter(todo_items::owner_id.eq(&owner))
                    .filter(todo_items::version.eq(expected_version)),
            )
            .set(&changes)
            .returning(TodoItemRow::as_returning())
            .get_result::<TodoItemRow>(connection)
            .optional()
            .map_err(TodoRepositoryError::persistence)?;

            if let Some(row) = updated {
                return row_to_item(row).map(UpdateOutcome::Updated);
            }

            let still_present = diesel::select(diesel::dsl::exists(
                todo_items::table
                    .filter(todo_items::id.eq(id))
                    .filter(todo_items::owner_id.eq(&owner)),
            ))
            .get_result::<bool>(connection)
            .map_err(TodoRepositoryError::persistence)?;

            Ok(if still_present {
                UpdateOutcome::Conflict
            } else {
                UpdateOutcome::NotFound
            })
        })
        .await
    }

    async fn delete(&self, owner_id: &UserId, id: TodoItemId) -> TodoRepositoryResult<bool> {
        let owner = owner_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                todo_items::table
                    .filter(todo_items::id.eq(id.value()))
                    .filter(todo_items::owner_id.eq(owner)),
            )
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }
}

fn to_new_row(item: &NewTodoItem) -> NewTodoItemRow {
    let draft = item.draft();
    NewTodoItemRow {
        owner_id: item.owner_id().as_str().to_owned(),
        title: draft.title().as_str().to_owned(),
        description: draft
            .description()
            .map(|description| description.as_str().to_owned()),
        due_date: draft.due_date(),
        in_process: draft.status().in_process(),
        is_done: draft.status().is_done(),
        version: RowVersion::INITIAL.value(),
        created_at: item.created_at(),
        updated_at: item.created_at(),
    }
}

fn to_changes(item: &TodoItem) -> TodoItemChanges {
    TodoItemChanges {
        title: item.title().as_str().to_owned(),
        description: item
            .description()
            .map(|description| description.as_str().to_owned()),
        due_date: item.due_date(),
        in_process: item.in_process(),
        is_done: item.is_done(),
        version: item.version().next().value(),
        updated_at: item.updated_at(),
    }
}

fn row_to_item(row: TodoItemRow) -> TodoRepositoryResult<TodoItem> {
    let TodoItemRow {
        id,
        owner_id,
        title,
        description,
        due_date,
        in_process,
        is_done,
        version,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTodoItemData {
        id: TodoItemId::new(id).map_err(TodoRepositoryError::persistence)?,
        owner_id: UserId::new(owner_id).map_err(TodoRepositoryError::persistence)?,
        title: ItemTitle::new(title).map_err(TodoRepositoryError::persistence)?,
        description: description
            .map(ItemDescription::new)
            .transpose()
            .map_err(TodoRepositoryError::persistence)?,
        due_date,
        status: ItemStatus::new(in_process, is_done).map_err(TodoRepositoryError::persistence)?,
        version: RowVersion::new(version).map_err(TodoRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(TodoItem::from_persisted(data))
}
