//! Declarative query construction for the generic repository.
//!
//! `QueryArgs` describes how a query should be shaped — equality filters,
//! joins, predicates, grouping, ordering, distinct and limit — without the
//! caller touching the query builder directly. The repository compiles the
//! value onto a SeaORM `Select` with each modifier applied in a fixed order,
//! so the same arguments always produce the same query shape.

use sea_orm::sea_query::{
    ColumnRef, Expr, ExprTrait, Func, IntoColumnRef, IntoCondition, SimpleExpr,
};
use sea_orm::{
    ColumnTrait, EntityTrait, IntoSimpleExpr, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationDef, Select, Value,
};
use thiserror::Error;

/// Error raised while assembling a [`QueryArgs`] value.
///
/// These are configuration errors: they fire when the arguments are built,
/// never when the query executes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryArgsError {
    /// `having` was provided without any `group_by` clause.
    #[error("having clauses require at least one group by clause")]
    HavingWithoutGroupBy,
}

/// One join to apply while compiling a query.
///
/// Wraps a SeaORM [`RelationDef`] with the join type and an optional extra
/// ON condition ANDed into the relation's own condition.
#[derive(Debug)]
pub struct JoinSpec {
    relation: RelationDef,
    join_type: JoinType,
    condition: Option<SimpleExpr>,
}

impl JoinSpec {
    /// Inner join over the given relation.
    pub fn inner(relation: RelationDef) -> Self {
        Self {
            relation,
            join_type: JoinType::InnerJoin,
            condition: None,
        }
    }

    /// Left outer join over the given relation.
    pub fn left(relation: RelationDef) -> Self {
        Self {
            relation,
            join_type: JoinType::LeftJoin,
            condition: None,
        }
    }

    /// Adds an extra ON condition to the join.
    pub fn on(mut self, condition: SimpleExpr) -> Self {
        self.condition = Some(condition);
        self
    }

    fn apply<E: EntityTrait>(self, query: Select<E>) -> Select<E> {
        let relation = match self.condition {
            Some(expr) => self
                .relation
                .on_condition(move |_left, _right| expr.clone().into_condition()),
            None => self.relation,
        };
        query.join(self.join_type, relation)
    }
}

/// Declarative description of how to shape a query for entity `E`.
///
/// Every field is optional and independent; an unset field is a no-op. The
/// single exception is `distinct_on`, where "present but empty" requests a
/// plain `DISTINCT` while "absent" does nothing — callers rely on that
/// asymmetry, so it is part of the contract.
///
/// Values are built through [`QueryArgs::builder`], which rejects invalid
/// combinations (currently: `having` without `group_by`) at construction
/// time.
#[derive(Debug)]
pub struct QueryArgs<E: EntityTrait> {
    pub(crate) filter_by: Vec<(E::Column, Value)>,
    pub(crate) joins: Vec<JoinSpec>,
    pub(crate) filters: Vec<SimpleExpr>,
    pub(crate) group_by: Vec<SimpleExpr>,
    pub(crate) having: Vec<SimpleExpr>,
    pub(crate) order_by: Vec<(SimpleExpr, Order)>,
    pub(crate) distinct_on: Option<Vec<ColumnRef>>,
    pub(crate) limit: Option<u64>,
}

impl<E: EntityTrait> Default for QueryArgs<E> {
    fn default() -> Self {
        Self {
            filter_by: Vec::new(),
            joins: Vec::new(),
            filters: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            distinct_on: None,
            limit: None,
        }
    }
}

impl<E: EntityTrait> QueryArgs<E> {
    /// Starts building a new set of query arguments.
    pub fn builder() -> QueryArgsBuilder<E> {
        QueryArgsBuilder {
            args: Self::default(),
        }
    }

    /// Compiles the arguments onto `query`.
    ///
    /// Modifiers are applied in a fixed order: equality filters, joins,
    /// predicate filters, group by, having, order by, distinct, limit.
    /// The order is part of the contract — filtering before joining before
    /// grouping changes what the query means.
    pub(crate) fn apply(self, mut query: Select<E>) -> Select<E> {
        for (column, value) in self.filter_by {
            query = query.filter(column.eq(value));
        }
        for join in self.joins {
            query = join.apply(query);
        }
        for predicate in self.filters {
            query = query.filter(predicate);
        }
        for expr in self.group_by {
            query = query.group_by(expr);
        }
        for predicate in self.having {
            query = query.having(predicate);
        }
        for (expr, order) in self.order_by {
            query = query.order_by(expr, order);
        }
        match self.distinct_on {
            Some(columns) if columns.is_empty() => query = query.distinct(),
            Some(columns) => query = query.distinct_on(columns),
            None => {}
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        query
    }
}

/// Builder for [`QueryArgs`].
pub struct QueryArgsBuilder<E: EntityTrait> {
    args: QueryArgs<E>,
}

impl<E: EntityTrait> QueryArgsBuilder<E> {
    /// Adds an exact-match equality constraint on `column`.
    ///
    /// Multiple constraints are combined with logical AND.
    pub fn filter_by<V: Into<Value>>(mut self, column: E::Column, value: V) -> Self {
        self.args.filter_by.push((column, value.into()));
        self
    }

    /// Adds a join, applied in the order given.
    pub fn join(mut self, join: JoinSpec) -> Self {
        self.args.joins.push(join);
        self
    }

    /// Adds a boolean predicate; predicates are combined with logical AND.
    pub fn filter(mut self, predicate: SimpleExpr) -> Self {
        self.args.filters.push(predicate);
        self
    }

    /// Adds a grouping key.
    pub fn group_by<C: IntoSimpleExpr>(mut self, expr: C) -> Self {
        self.args.group_by.push(expr.into_simple_expr());
        self
    }

    /// Adds a post-aggregation predicate. Requires at least one `group_by`
    /// key or [`build`](Self::build) will fail.
    pub fn having(mut self, predicate: SimpleExpr) -> Self {
        self.args.having.push(predicate);
        self
    }

    /// Adds a sort key with an explicit direction.
    pub fn order_by<C: IntoSimpleExpr>(mut self, expr: C, order: Order) -> Self {
        self.args.order_by.push((expr.into_simple_expr(), order));
        self
    }

    /// Adds an ascending sort key.
    pub fn order_by_asc<C: IntoSimpleExpr>(self, expr: C) -> Self {
        self.order_by(expr, Order::Asc)
    }

    /// Adds a descending sort key.
    pub fn order_by_desc<C: IntoSimpleExpr>(self, expr: C) -> Self {
        self.order_by(expr, Order::Desc)
    }

    /// Requests an unqualified `SELECT DISTINCT`.
    ///
    /// Equivalent to `distinct_on` with an empty column list.
    pub fn distinct(mut self) -> Self {
        self.args.distinct_on = Some(Vec::new());
        self
    }

    /// Requests `DISTINCT ON` over the given columns.
    ///
    /// An empty iterator degrades to a plain `DISTINCT`, matching
    /// [`distinct`](Self::distinct).
    pub fn distinct_on<C, I>(mut self, columns: I) -> Self
    where
        C: IntoColumnRef,
        I: IntoIterator<Item = C>,
    {
        self.args.distinct_on = Some(
            columns
                .into_iter()
                .map(IntoColumnRef::into_column_ref)
                .collect(),
        );
        self
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.args.limit = Some(limit);
        self
    }

    /// Validates and returns the finished arguments.
    ///
    /// # Returns
    /// - `Ok(QueryArgs)` - Arguments are internally consistent
    /// - `Err(QueryArgsError::HavingWithoutGroupBy)` - `having` was set
    ///   without any `group_by` key
    pub fn build(self) -> Result<QueryArgs<E>, QueryArgsError> {
        if !self.args.having.is_empty() && self.args.group_by.is_empty() {
            return Err(QueryArgsError::HavingWithoutGroupBy);
        }
        Ok(self.args)
    }
}

/// Case-insensitive equality predicate: `LOWER(column) = lower(value)`.
///
/// Used for quest name lookups, where names match on the full string
/// regardless of case.
pub fn case_insensitive_eq<C: ColumnTrait>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column.into_simple_expr())).eq(value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::{Quest, UserQuest};
    use entity::{quest, user_quest};
    use sea_orm::{DbBackend, EntityTrait, QueryTrait, RelationTrait};

    fn sql(query: Select<Quest>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn empty_args_are_a_no_op() {
        let args = QueryArgs::<Quest>::builder().build().unwrap();
        let plain = sql(Quest::find());
        assert_eq!(sql(args.apply(Quest::find())), plain);
    }

    #[test]
    fn filter_by_compiles_to_equality() {
        let args = QueryArgs::<Quest>::builder()
            .filter_by(quest::Column::Experience, 50)
            .build()
            .unwrap();
        let sql = sql(args.apply(Quest::find()));
        assert!(sql.contains(r#""quest"."experience" = 50"#), "{sql}");
    }

    #[test]
    fn filters_are_anded_in_order() {
        let args = QueryArgs::<Quest>::builder()
            .filter(quest::Column::Experience.gte(10))
            .filter(quest::Column::Experience.lte(100))
            .build()
            .unwrap();
        let sql = sql(args.apply(Quest::find()));
        let lower = sql.find(r#""quest"."experience" >= 10"#).unwrap();
        let upper = sql.find(r#""quest"."experience" <= 100"#).unwrap();
        assert!(sql.contains(" AND "), "{sql}");
        assert!(lower < upper, "{sql}");
    }

    #[test]
    fn join_follows_the_relation_definition() {
        let args = QueryArgs::<UserQuest>::builder()
            .join(JoinSpec::inner(user_quest::Relation::Quest.def()))
            .filter(quest::Column::Name.eq("Fetch Water"))
            .build()
            .unwrap();
        let sql = args
            .apply(UserQuest::find())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(
            sql.contains(r#"INNER JOIN "quest" ON "user_quest"."quest_id" = "quest"."id""#),
            "{sql}"
        );
        assert!(sql.contains(r#""quest"."name" = 'Fetch Water'"#), "{sql}");
    }

    #[test]
    fn left_join_with_extra_condition() {
        let args = QueryArgs::<UserQuest>::builder()
            .join(
                JoinSpec::left(user_quest::Relation::Quest.def())
                    .on(quest::Column::Experience.gt(0)),
            )
            .build()
            .unwrap();
        let sql = args
            .apply(UserQuest::find())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains("LEFT JOIN"), "{sql}");
        assert!(sql.contains(r#""quest"."experience" > 0"#), "{sql}");
    }

    #[test]
    fn clauses_come_out_in_the_documented_order() {
        let args = QueryArgs::<UserQuest>::builder()
            .filter_by(user_quest::Column::UserId, 1)
            .group_by(user_quest::Column::QuestId)
            .having(Expr::col(user_quest::Column::QuestId).count().gte(2))
            .order_by_desc(user_quest::Column::QuestId)
            .limit(10)
            .build()
            .unwrap();
        let sql = args
            .apply(UserQuest::find())
            .build(DbBackend::Postgres)
            .to_string();
        let where_at = sql.find("WHERE").unwrap();
        let group_at = sql.find("GROUP BY").unwrap();
        let having_at = sql.find("HAVING").unwrap();
        let order_at = sql.find("ORDER BY").unwrap();
        let limit_at = sql.find("LIMIT").unwrap();
        assert!(where_at < group_at, "{sql}");
        assert!(group_at < having_at, "{sql}");
        assert!(having_at < order_at, "{sql}");
        assert!(order_at < limit_at, "{sql}");
    }

    #[test]
    fn having_without_group_by_fails_at_construction() {
        let err = QueryArgs::<UserQuest>::builder()
            .having(Expr::col(user_quest::Column::QuestId).count().gte(2))
            .build()
            .unwrap_err();
        assert_eq!(err, QueryArgsError::HavingWithoutGroupBy);
    }

    #[test]
    fn absent_distinct_is_a_no_op() {
        let args = QueryArgs::<Quest>::builder().build().unwrap();
        assert!(!sql(args.apply(Quest::find())).contains("DISTINCT"));
    }

    #[test]
    fn empty_distinct_on_requests_plain_distinct() {
        let args = QueryArgs::<Quest>::builder().distinct().build().unwrap();
        let sql = sql(args.apply(Quest::find()));
        assert!(sql.starts_with("SELECT DISTINCT "), "{sql}");
        assert!(!sql.contains("DISTINCT ON"), "{sql}");
    }

    #[test]
    fn distinct_on_lists_its_columns() {
        let args = QueryArgs::<Quest>::builder()
            .distinct_on([quest::Column::Name])
            .build()
            .unwrap();
        let sql = sql(args.apply(Quest::find()));
        assert!(sql.contains(r#"DISTINCT ON ("name")"#), "{sql}");
    }

    #[test]
    fn limit_caps_the_row_count() {
        let args = QueryArgs::<Quest>::builder().limit(1).build().unwrap();
        assert!(sql(args.apply(Quest::find())).contains("LIMIT 1"));
    }

    #[test]
    fn case_insensitive_eq_lowers_both_sides() {
        let args = QueryArgs::<Quest>::builder()
            .filter(case_insensitive_eq(quest::Column::Name, "Fetch WATER"))
            .build()
            .unwrap();
        let sql = sql(args.apply(Quest::find()));
        assert!(
            sql.contains(r#"LOWER("quest"."name") = 'fetch water'"#),
            "{sql}"
        );
    }
}
