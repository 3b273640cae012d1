//! SQLite repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskDetailsChangeset, TaskRow},
    schema::tasks,
};
use crate::account::domain::AccountId;
use crate::storage::SqlitePool;
use crate::task::{
    domain::{
        Category, PersistedTaskData, Priority, Task, TaskDetails, TaskFilter, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// SQLite-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let owner = task.owner().to_string();
        let changes = to_changeset(task.details());

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(task_id.to_string()))
                    .filter(tasks::owner_id.eq(owner)),
            )
            .set(&changes)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_row(updated, task_id)
        })
        .await
    }

    async fn update_status(
        &self,
        owner: AccountId,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.to_string()))
                    .filter(tasks::owner_id.eq(owner.to_string())),
            )
            .set(tasks::status.eq(status.as_str()))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_row(updated, id)
        })
        .await
    }

    async fn find_by_id(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.to_string()))
                .filter(tasks::owner_id.eq(owner.to_string()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, owner: AccountId, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let statuses: Vec<&'static str> = filter
            .status()
            .statuses()
            .into_iter()
            .map(TaskStatus::as_str)
            .collect();
        let category = filter.category().map(Category::as_str);
        let priority = filter.priority().map(Priority::as_str);

        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .filter(tasks::owner_id.eq(owner.to_string()))
                .filter(tasks::status.eq_any(statuses))
                .into_boxed();
            if let Some(keyword) = category {
                query = query.filter(tasks::category.eq(keyword));
            }
            if let Some(keyword) = priority {
                query = query.filter(tasks::priority.eq(keyword));
            }
            let rows = query
                .order((
                    tasks::due_date.is_null().asc(),
                    tasks::due_date.asc(),
                    tasks::created_at.desc(),
                ))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_all(&self, owner: AccountId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.to_string()))
                .order((
                    tasks::due_date.is_null().asc(),
                    tasks::due_date.asc(),
                    tasks::created_at.desc(),
                ))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.to_string()))
                    .filter(tasks::owner_id.eq(owner.to_string())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_row(deleted, id)
        })
        .await
    }

    async fn purge_trashed(&self, owner: AccountId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let purged = diesel::delete(
                tasks::table
                    .filter(tasks::owner_id.eq(owner.to_string()))
                    .filter(tasks::status.eq(TaskStatus::Deleted.as_str())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(purged).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

const fn require_row(affected: usize, id: TaskId) -> TaskRepositoryResult<()> {
    if affected == 0 {
        Err(TaskRepositoryError::NotFound(id))
    } else {
        Ok(())
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    let details = task.details();
    NewTaskRow {
        id: task.id().to_string(),
        owner_id: task.owner().to_string(),
        title: details.title.as_str().to_owned(),
        description: details.description.clone(),
        due_date: details.due_date,
        priority: details.priority.as_str().to_owned(),
        category: details.category.as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at().naive_utc(),
    }
}

fn to_changeset(details: &TaskDetails) -> TaskDetailsChangeset {
    TaskDetailsChangeset {
        title: details.title.as_str().to_owned(),
        description: details.description.clone(),
        due_date: details.due_date,
        priority: details.priority.as_str().to_owned(),
        category: details.category.as_str().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id: persisted_id,
        owner_id,
        title: persisted_title,
        description,
        due_date,
        priority: persisted_priority,
        category: persisted_category,
        status: persisted_status,
        created_at,
    } = row;

    let id = persisted_id
        .parse::<TaskId>()
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let owner = owner_id
        .parse::<AccountId>()
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let title =
        TaskTitle::new(persisted_title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let priority = Priority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let category = Category::try_from(persisted_category.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    let details = TaskDetails {
        title,
        description,
        due_date,
        priority,
        category,
    };
    Ok(Task::from_persisted(PersistedTaskData {
        id,
        owner,
        details,
        status,
        created_at: created_at.and_utc(),
    }))
}
