//! Generic repository over one entity type.
//!
//! This module provides the `Repository` struct used by every service to
//! read and write rows for a single SeaORM entity. Read operations accept a
//! [`QueryArgs`](super::query::QueryArgs) value describing how to shape the
//! query; write operations take an `ActiveModel` and execute as their own
//! statement. There is no shared unit of work: each mutation commits on its
//! own, and operations spanning two repositories are not atomic.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QuerySelect, Select, TryGetableMany,
};
use std::marker::PhantomData;

use crate::data::query::QueryArgs;

/// Repository providing database operations for one entity type.
///
/// Holds a reference to the database connection for its lifetime; every call
/// builds a fresh query from the given arguments, so a repository instance
/// carries no state between calls.
pub struct Repository<'a, E>
where
    E: EntityTrait,
{
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> Repository<'a, E>
where
    E: EntityTrait,
{
    /// Creates a new repository bound to the given connection.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    fn query(args: QueryArgs<E>) -> Select<E> {
        args.apply(E::find())
    }

    /// Returns all rows matching the arguments; empty when none match.
    pub async fn get_all(&self, args: QueryArgs<E>) -> Result<Vec<E::Model>, DbErr> {
        Self::query(args).all(self.db).await
    }

    /// Returns exactly one matching row.
    ///
    /// Unlike [`get_first`](Self::get_first), zero matches and multiple
    /// matches are both errors. At most two rows are fetched to decide.
    ///
    /// # Returns
    /// - `Ok(Model)` - Exactly one row matched
    /// - `Err(DbErr::RecordNotFound)` - No row matched
    /// - `Err(DbErr::Custom)` - More than one row matched
    pub async fn get_one(&self, mut args: QueryArgs<E>) -> Result<E::Model, DbErr> {
        args.limit = Some(args.limit.map_or(2, |limit| limit.min(2)));
        let mut rows = Self::query(args).all(self.db).await?.into_iter();
        match (rows.next(), rows.next()) {
            (Some(model), None) => Ok(model),
            (None, _) => Err(DbErr::RecordNotFound(format!(
                "no {} row matched the query",
                E::default().table_name()
            ))),
            (Some(_), Some(_)) => Err(DbErr::Custom(format!(
                "expected exactly one {} row, query matched more",
                E::default().table_name()
            ))),
        }
    }

    /// Returns the first matching row, or `None` when nothing matches.
    ///
    /// Forces a limit of one regardless of the arguments' own limit.
    pub async fn get_first(&self, mut args: QueryArgs<E>) -> Result<Option<E::Model>, DbErr> {
        args.limit = Some(1);
        Self::query(args).one(self.db).await
    }

    /// Counts matching rows with an aggregate query; no rows are loaded.
    pub async fn get_count(&self, args: QueryArgs<E>) -> Result<u64, DbErr>
    where
        E::Model: Send + Sync,
    {
        Self::query(args).count(self.db).await
    }

    /// Fetches a row by primary key, bypassing the query compiler.
    pub async fn get_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Returns all matching rows projected onto the given select
    /// expressions instead of whole entities.
    ///
    /// The tuple type `T` must match the expressions in number and type.
    pub async fn get_all_with_entities<T>(
        &self,
        exprs: Vec<SimpleExpr>,
        args: QueryArgs<E>,
    ) -> Result<Vec<T>, DbErr>
    where
        T: TryGetableMany,
    {
        let mut query = Self::query(args).select_only();
        for expr in exprs {
            query = query.expr(expr);
        }
        query.into_tuple().all(self.db).await
    }

    /// Returns the first matching row projected onto the given select
    /// expressions, or `None` when nothing matches.
    pub async fn get_first_with_entities<T>(
        &self,
        exprs: Vec<SimpleExpr>,
        mut args: QueryArgs<E>,
    ) -> Result<Option<T>, DbErr>
    where
        T: TryGetableMany,
    {
        args.limit = Some(1);
        let mut query = Self::query(args).select_only();
        for expr in exprs {
            query = query.expr(expr);
        }
        query.into_tuple().one(self.db).await
    }

    /// Inserts a new row and returns the stored model.
    ///
    /// The insert is its own statement and is durable once this returns.
    pub async fn add<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.db).await
    }

    /// Persists pending changes on an already-loaded row.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.db).await
    }

    /// Deletes the given row.
    pub async fn delete<A>(&self, model: A) -> Result<(), DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.delete(self.db).await?;
        Ok(())
    }
}
