//! Sessions: one logical statement lifecycle at a time.
//!
//! A session remembers the model it is bound to and the clauses pending for
//! the next statement. Modifiers ([`filter`](Session::filter),
//! [`order_by`](Session::order_by), [`limit`](Session::limit)) only record
//! clauses; terminal verbs build one statement from them in a fixed kind
//! order, execute it and clear every pending clause, whether or not the
//! statement succeeded.

mod raw;
mod record;
mod table;
mod transaction;

use crate::{
    engine::{Pinned, Pool},
    hooks::{type_hooks, TypeHooks},
    Dialect, Error, Model, Params, Result,
};

use quill_core::{
    driver::{operation::QuerySql, Response},
    stmt::{Statement, Type, ValueStream},
    Schema,
};
use quill_sql::{Args, Clause, Kind};
use std::{fmt, mem, sync::Arc};

pub struct Session {
    /// Connections shared with the engine and its other sessions
    pool: Pool,

    /// Connection pinned by an open transaction
    tx: Option<Pinned>,

    /// Maps field kinds to column types
    dialect: Arc<dyn Dialect>,

    /// Model the session is bound to
    table: Option<Table>,

    /// Clauses pending for the next record verb
    clause: Clause,

    /// Raw statement being assembled by [`raw`](Session::raw)
    raw: Statement,
}

/// A resolved model together with its type-level hooks.
#[derive(Clone)]
struct Table {
    schema: Arc<Schema>,
    hooks: Arc<dyn TypeHooks>,
}

/// Statement state set aside while a hook runs.
struct Pending {
    clause: Clause,
    raw: Statement,
}

/// Runs a hook with the session's pending state set aside. Errors are logged
/// and dropped.
macro_rules! run_hook {
    ($session:expr, $name:literal, $hook:expr) => {{
        let pending = $session.suspend();
        let res = $hook.await;
        $session.resume(pending);

        if let Err(err) = res {
            log::error!("hook `{}` failed; error={err}", $name);
        }
    }};
}
pub(crate) use run_hook;

impl Session {
    pub(crate) fn new(pool: Pool, dialect: Arc<dyn Dialect>) -> Self {
        Self {
            pool,
            tx: None,
            dialect,
            table: None,
            clause: Clause::new(),
            raw: Statement::default(),
        }
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.dialect
    }

    /// Binds the session to the model `M`.
    ///
    /// The schema is resolved again only when the session was bound to a
    /// different type.
    pub fn model<M: Model>(&mut self) -> Result<&mut Self> {
        self.bind::<M>()?;
        Ok(self)
    }

    /// The schema of the bound model.
    pub fn ref_table(&self) -> Result<&Schema> {
        self.table().map(|table| &*table.schema)
    }

    /// Sets the `WHERE` clause. `predicate` is passed through verbatim.
    pub fn filter(&mut self, predicate: impl Into<String>, params: impl Params) -> &mut Self {
        self.clause.set(Args::Where {
            predicate: predicate.into(),
            values: params.into_params(),
        });
        self
    }

    /// Sets the `ORDER BY` clause. `expr` is passed through verbatim.
    pub fn order_by(&mut self, expr: impl Into<String>) -> &mut Self {
        self.clause.set(Args::OrderBy(expr.into()));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.clause.set(Args::Limit(limit));
        self
    }

    /// Returns `true` if no clause or raw fragment is pending.
    pub fn is_clear(&self) -> bool {
        self.clause.is_empty() && self.raw.sql.is_empty() && self.raw.params.is_empty()
    }

    fn bind<M: Model>(&mut self) -> Result<Table> {
        if let Some(table) = &self.table {
            if table.schema.is::<M>() {
                return Ok(table.clone());
            }
        }

        let table = Table {
            schema: Arc::new(Schema::parse::<M>(&*self.dialect)?),
            hooks: type_hooks::<M>(),
        };
        self.table = Some(table.clone());
        Ok(table)
    }

    fn table(&self) -> Result<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| Error::invalid_statement("model is not set"))
    }

    /// Builds the pending clauses in `order` and clears all pending state.
    fn take_statement(&mut self, order: &[Kind]) -> Statement {
        let stmt = self.clause.build(order);
        self.reset();
        stmt
    }

    /// Forget every pending clause and raw fragment.
    fn reset(&mut self) {
        self.clause.clear();
        self.raw = Statement::default();
    }

    fn suspend(&mut self) -> Pending {
        Pending {
            clause: mem::take(&mut self.clause),
            raw: mem::take(&mut self.raw),
        }
    }

    fn resume(&mut self, pending: Pending) {
        self.clause = pending.clause;
        self.raw = pending.raw;
    }

    /// Runs a mutating statement and returns the number of affected rows.
    async fn exec_count(&mut self, stmt: Statement) -> Result<u64> {
        self.exec_sql(QuerySql::exec(stmt)).await?.rows.into_count()
    }

    /// Runs a row-returning statement, decoding columns as `ret`.
    async fn exec_query(&mut self, stmt: Statement, ret: Vec<Type>) -> Result<ValueStream> {
        self.exec_sql(QuerySql::query(stmt, ret))
            .await?
            .rows
            .into_values()
    }

    async fn exec_sql(&mut self, op: QuerySql) -> Result<Response> {
        log::info!("{}", op.stmt);

        let res = match &mut self.tx {
            Some(conn) => conn.exec(op.into()).await,
            None => match self.pool.get().await {
                Ok(mut conn) => conn.exec(op.into()).await,
                Err(err) => Err(err),
            },
        };

        if let Err(err) = &res {
            log::error!("{err}");
        }

        res
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("dialect", &self.dialect.name())
            .field("model", &self.table.as_ref().map(|t| &t.schema.name))
            .field("clause", &self.clause)
            .field("raw", &self.raw)
            .field("in_transaction", &self.tx.is_some())
            .finish()
    }
}
