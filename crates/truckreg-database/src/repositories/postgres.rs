//! Generic PostgreSQL repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use truckreg_core::error::{AppError, ErrorKind};
use truckreg_core::result::AppResult;
use truckreg_core::{EntityId, Repository};

use crate::record::Record;

/// SQL statements generated once per repository from the record mapping.
#[derive(Debug, Clone)]
struct Statements {
    insert: String,
    select_one: String,
    select_all: String,
    exists: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_record<T: Record>() -> Self {
        let table = T::TABLE;
        let columns = T::COLUMNS;

        let placeholders = (1..=columns.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = columns.len() + 1;

        Self {
            insert: format!(
                "INSERT INTO {table} ({}) VALUES ({placeholders}) RETURNING *",
                columns.join(", ")
            ),
            select_one: format!("SELECT * FROM {table} WHERE id = $1"),
            select_all: format!("SELECT * FROM {table} ORDER BY id ASC"),
            exists: format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)"),
            update: format!("UPDATE {table} SET {assignments} WHERE id = ${id_param} RETURNING *"),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

/// Repository for any [`Record`] stored in PostgreSQL.
///
/// Each call borrows a pooled connection for the duration of one statement
/// and commits on its own.
#[derive(Debug)]
pub struct PgRepository<T> {
    pool: PgPool,
    sql: Statements,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> PgRepository<T> {
    /// Create a new repository over the pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            sql: Statements::for_record::<T>(),
            _record: PhantomData,
        }
    }
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            sql: self.sql.clone(),
            _record: PhantomData,
        }
    }
}

fn db_error(action: &str, table: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Database,
        format!("Failed to {action} {table}: {err}"),
        err,
    )
}

#[async_trait]
impl<T: Record> Repository<T> for PgRepository<T> {
    async fn add(&self, item: T) -> AppResult<T> {
        let query = sqlx::query_as::<_, T>(&self.sql.insert);
        let created = item
            .bind_columns(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("insert into", T::TABLE, e))?;

        debug!(table = T::TABLE, id = created.id(), "Inserted row");
        Ok(created)
    }

    async fn get(&self, id: EntityId) -> AppResult<Option<T>> {
        sqlx::query_as::<_, T>(&self.sql.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("select from", T::TABLE, e))
    }

    async fn get_all(&self) -> AppResult<Vec<T>> {
        sqlx::query_as::<_, T>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list", T::TABLE, e))
    }

    async fn exists(&self, id: EntityId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(&self.sql.exists)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("check existence in", T::TABLE, e))
    }

    async fn edit(&self, item: T) -> AppResult<()> {
        let id = item.id();
        let query = sqlx::query_as::<_, T>(&self.sql.update);
        item.bind_columns(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("update", T::TABLE, e))?
            .ok_or_else(|| AppError::not_found(format!("{} row {id} not found", T::TABLE)))?;

        debug!(table = T::TABLE, id, "Updated row");
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete from", T::TABLE, e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "{} row {id} not found",
                T::TABLE
            )));
        }

        debug!(table = T::TABLE, id, "Deleted row");
        Ok(())
    }
}
